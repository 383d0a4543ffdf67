//! Test utilities
//!
//! Manual mock implementations and test fixtures for unit testing.
//!
//! The mocks are in-memory implementations of the port traits. They record
//! what the code under test did (lookups, stock writes, releases) so tests can
//! assert on side effects as well as results.

pub mod fixtures;
pub mod mocks;

pub use fixtures::*;
pub use mocks::*;
