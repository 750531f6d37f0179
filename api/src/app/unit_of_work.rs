//! Unit-of-work helpers shared by the write services

use std::future::Future;

use crate::domain::ports::EnrollmentSession;
use crate::error::DomainError;

/// How many times a unit of work is attempted when storage reports a conflict
pub const MAX_ATTEMPTS: u32 = 3;

/// Commit the session if the work succeeded, roll it back otherwise.
///
/// The original error is returned even when the rollback itself fails.
pub async fn finish<S, T>(session: S, outcome: Result<T, DomainError>) -> Result<T, DomainError>
where
    S: EnrollmentSession,
    T: Send,
{
    match outcome {
        Ok(value) => {
            session.commit().await?;
            Ok(value)
        }
        Err(err) => {
            if let Err(rollback_err) = session.rollback().await {
                tracing::warn!(error = %rollback_err, "Failed to roll back session");
            }
            Err(err)
        }
    }
}

/// Re-run a whole unit of work while it fails with `DomainError::Conflict`,
/// up to [`MAX_ATTEMPTS`] times. Each attempt starts from a fresh session, so
/// lookups (e.g. identity resolution) see what the competing writer committed.
pub async fn with_retry<T, F, Fut>(
    operation: &'static str,
    mut attempt: F,
) -> Result<T, DomainError>
where
    F: FnMut() -> Fut,
    Fut: Future<Output = Result<T, DomainError>>,
{
    let mut tries = 1;
    loop {
        match attempt().await {
            Err(DomainError::Conflict(reason)) if tries < MAX_ATTEMPTS => {
                tracing::warn!(operation, attempt = tries, %reason, "Storage conflict, retrying");
                tries += 1;
            }
            result => return result,
        }
    }
}
