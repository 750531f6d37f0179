//! Client service
//!
//! Guards client removal: a client can only be deleted while it holds no
//! enrollments at all, past or future. Enrollments are never cascaded away.

use std::sync::Arc;

use super::unit_of_work::{finish, with_retry};
use crate::domain::entities::ClientId;
use crate::domain::ports::{EnrollmentSession, EnrollmentStore};
use crate::error::DomainError;

/// Service for managing clients
pub struct ClientService<S>
where
    S: EnrollmentStore,
{
    store: Arc<S>,
}

impl<S> ClientService<S>
where
    S: EnrollmentStore,
{
    pub fn new(store: Arc<S>) -> Self {
        Self { store }
    }

    /// Delete a client that has no enrollments.
    ///
    /// Fails with `NotFound` for an unknown client and `InvalidState` while
    /// any enrollment references it.
    pub async fn remove_client(&self, client_id: ClientId) -> Result<(), DomainError> {
        let result = with_retry("remove_client", move || self.try_remove(client_id)).await;

        match &result {
            Ok(()) => tracing::info!(client_id = %client_id, "Client removed"),
            Err(e) if e.is_rule_violation() => {
                tracing::debug!(client_id = %client_id, error = %e, "Client removal rejected")
            }
            Err(_) => {}
        }

        result
    }

    async fn try_remove(&self, client_id: ClientId) -> Result<(), DomainError> {
        let mut session = self.store.begin().await?;
        let outcome = remove_unenrolled(&mut session, client_id).await;
        finish(session, outcome).await
    }
}

async fn remove_unenrolled<S>(session: &mut S, client_id: ClientId) -> Result<(), DomainError>
where
    S: EnrollmentSession,
{
    session
        .find_client(client_id)
        .await?
        .ok_or_else(|| DomainError::not_found("Client", client_id))?;

    let enrollments = session.count_enrollments(client_id).await?;
    if enrollments > 0 {
        return Err(DomainError::InvalidState(format!(
            "client {} has {} enrollment(s) and cannot be removed",
            client_id, enrollments
        )));
    }

    session.delete_client(client_id).await
}
