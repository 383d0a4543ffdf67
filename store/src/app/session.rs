//! Session lifecycle shared by every role
//!
//! A session owns the storage connection handle and releases it exactly once
//! when it ends, whether it ends by operator choice or by a fatal error.

use crate::app::prompt::Prompter;
use crate::domain::ports::{Console, StoreConnection};
use crate::error::AppError;

pub const FAREWELL: &str = "\nThank you for using BAMazon!";

/// Release the connection and settle the session's result
///
/// The session's own error takes precedence over a failed release. The
/// farewell is printed only when both succeeded.
pub async fn finish<C, SC>(
    role: &str,
    outcome: Result<(), AppError>,
    connection: &SC,
    prompt: &Prompter<C>,
) -> Result<(), AppError>
where
    C: Console,
    SC: StoreConnection + ?Sized,
{
    if let Err(e) = &outcome {
        tracing::error!(role, "Session aborted: {}", e);
    }

    let released = connection.release().await;
    if let Err(e) = &released {
        tracing::error!(role, "Failed to release connection: {}", e);
    }

    outcome?;
    released?;

    prompt.say(FAREWELL).await?;
    tracing::info!(role, "Session terminated");
    Ok(())
}

/// Report an error the operator can recover from, or hand back a fatal one
pub async fn report_recoverable<C>(prompt: &Prompter<C>, error: AppError) -> Result<(), AppError>
where
    C: Console,
{
    match error {
        AppError::Domain(e) if e.is_recoverable() => {
            tracing::warn!("{}", e);
            prompt.say(&format!("\n{}", e)).await?;
            Ok(())
        }
        e => Err(e),
    }
}
