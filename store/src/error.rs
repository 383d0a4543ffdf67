//! Unified error types for the BAMazon storefront
//!
//! This module defines error types for each layer:
//! - `DomainError`: Core business logic and storage errors
//! - `ConsoleError`: Operator console I/O errors
//! - `ValidationError`: Rejected operator input (never escapes the prompt layer)
//! - `AppError`: Application layer errors (what a session loop returns)

use thiserror::Error;

/// Domain layer errors - business logic and storage errors
#[derive(Debug, Error)]
pub enum DomainError {
    #[error("Entity not found: {0}")]
    NotFound(String),

    #[error("Entity already exists: {0}")]
    AlreadyExists(String),

    #[error("Validation error: {0}")]
    Validation(String),

    #[error("Database error: {0}")]
    Database(String),
}

impl DomainError {
    /// Whether a session can report this error and keep going
    pub fn is_recoverable(&self) -> bool {
        matches!(
            self,
            DomainError::NotFound(_) | DomainError::AlreadyExists(_) | DomainError::Validation(_)
        )
    }
}

/// Operator console errors
#[derive(Debug, Error)]
pub enum ConsoleError {
    #[error("Input stream closed")]
    Closed,

    #[error("Console I/O error: {0}")]
    Io(#[from] std::io::Error),
}

/// Rejected operator input
///
/// The message is shown to the operator verbatim before re-asking.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ValidationError {
    #[error("That is not a valid number! Please choose a number between 1 - {max}.")]
    NotAnId { max: i32 },

    #[error("Choose a number between 1 - {max}.")]
    IdOutOfRange { max: i32 },

    #[error("That is not a valid quantity! Please choose a number greater than 0.")]
    NotAQuantity,

    #[error("Choose a number greater than 0.")]
    QuantityNotPositive,

    #[error("Please enter a valid number greater than 0.")]
    InvalidPrice,

    #[error("Please enter a valid amount of 0 or more.")]
    InvalidAmount,

    #[error("Please enter a value.")]
    Empty,

    #[error("Please answer yes or no.")]
    NotYesNo,

    #[error("Please choose one of the listed options.")]
    UnknownChoice,
}

/// Application layer errors - returned by services and session loops
#[derive(Debug, Error)]
pub enum AppError {
    #[error("{0}")]
    Domain(#[from] DomainError),

    #[error("Console error: {0}")]
    Console(#[from] ConsoleError),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn lookup_miss_is_recoverable() {
        assert!(DomainError::NotFound("product 3".into()).is_recoverable());
        assert!(DomainError::AlreadyExists("Toys".into()).is_recoverable());
    }

    #[test]
    fn storage_failure_is_fatal() {
        assert!(!DomainError::Database("connection reset".into()).is_recoverable());
    }

    #[test]
    fn validation_messages_name_the_range() {
        assert_eq!(
            ValidationError::IdOutOfRange { max: 10 }.to_string(),
            "Choose a number between 1 - 10."
        );
    }
}
