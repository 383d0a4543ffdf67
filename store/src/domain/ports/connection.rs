//! Storage connection lifecycle port

use async_trait::async_trait;

use crate::error::DomainError;

/// The single storage connection a session runs on
///
/// Opened by the launcher before the session starts. The session releases it
/// when it terminates, on the normal path and on the fatal-error path alike.
#[async_trait]
pub trait StoreConnection: Send + Sync {
    /// Close the connection. Releasing an already released connection is a no-op.
    async fn release(&self) -> Result<(), DomainError>;
}
