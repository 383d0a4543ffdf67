//! BAMazon storefront
//!
//! Interactive storefront tools for three roles over a relational store:
//! customers place orders, managers maintain inventory, supervisors review
//! department sales. Uses hexagonal (ports & adapters) architecture: the
//! sessions and services only see port traits, and the SQL and terminal
//! adapters plug in at startup.

pub mod adapters;
pub mod app;
pub mod config;
pub mod domain;
pub mod entity;
pub mod error;
pub mod render;

#[cfg(test)]
mod test_utils;

pub use config::Config;
pub use error::{AppError, ConsoleError, DomainError, ValidationError};
