//! Operator console port

use async_trait::async_trait;

use crate::error::ConsoleError;

/// Line-oriented operator console
///
/// Every call completes before the next one is issued; sessions never hold
/// two outstanding console operations.
#[async_trait]
pub trait Console: Send + Sync {
    /// Show `prompt` and wait for one line of input (without the newline)
    ///
    /// Returns `ConsoleError::Closed` once input is exhausted.
    async fn read_line(&self, prompt: &str) -> Result<String, ConsoleError>;

    /// Write text followed by a newline
    async fn write_line(&self, text: &str) -> Result<(), ConsoleError>;
}
