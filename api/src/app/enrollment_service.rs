//! Enrollment service
//!
//! Puts a new or returning client on a trip as one atomic unit of work:
//! check the trip, resolve the client by PESEL (creating it when unknown),
//! reject duplicate enrollments, then record the enrollment. Client creation
//! and the enrollment commit together or not at all.

use chrono::{DateTime, Utc};
use std::sync::Arc;

use super::eligibility::{check_not_enrolled, check_trip_open};
use super::identity::{resolve_client, Resolution};
use super::unit_of_work::{finish, with_retry};
use crate::domain::entities::{EnrollmentOutcome, EnrollmentRequest, NewEnrollment, TripId};
use crate::domain::ports::{EnrollmentSession, EnrollmentStore};
use crate::error::DomainError;

/// Service for enrolling clients on trips
pub struct EnrollmentService<S>
where
    S: EnrollmentStore,
{
    store: Arc<S>,
}

impl<S> EnrollmentService<S>
where
    S: EnrollmentStore,
{
    pub fn new(store: Arc<S>) -> Self {
        Self { store }
    }

    /// Enroll the client described by `request` on the trip.
    ///
    /// Fails with `NotFound` for an unknown trip and `InvalidState` when the
    /// trip already started or the client is already enrolled on it. Storage
    /// conflicts (a concurrent request creating the same PESEL) are retried
    /// from scratch.
    pub async fn assign_client_to_trip(
        &self,
        trip_id: TripId,
        request: &EnrollmentRequest,
    ) -> Result<EnrollmentOutcome, DomainError> {
        let result = with_retry("assign_client_to_trip", move || {
            self.try_assign(trip_id, request)
        })
        .await;

        match &result {
            Ok(outcome) => tracing::info!(
                trip_id = %trip_id,
                client_id = %outcome.client.id,
                new_client = outcome.client_created,
                "Client enrolled on trip"
            ),
            Err(e) if e.is_rule_violation() => {
                tracing::debug!(trip_id = %trip_id, error = %e, "Enrollment rejected")
            }
            Err(_) => {}
        }

        result
    }

    async fn try_assign(
        &self,
        trip_id: TripId,
        request: &EnrollmentRequest,
    ) -> Result<EnrollmentOutcome, DomainError> {
        let mut session = self.store.begin().await?;
        let outcome = enroll(&mut session, trip_id, request, Utc::now()).await;
        finish(session, outcome).await
    }
}

async fn enroll<S>(
    session: &mut S,
    trip_id: TripId,
    request: &EnrollmentRequest,
    now: DateTime<Utc>,
) -> Result<EnrollmentOutcome, DomainError>
where
    S: EnrollmentSession,
{
    let trip = check_trip_open(trip_id, session.find_trip(trip_id).await?, now)?;

    let (client, client_created) = match resolve_client(session, &request.client).await? {
        Resolution::Existing(client) => {
            let enrolled = session.enrollment_exists(client.id, trip_id).await?;
            check_not_enrolled(client.id, trip_id, enrolled)?;
            (client, false)
        }
        Resolution::Create(new_client) => {
            let client = session.create_client(&new_client).await?;
            tracing::info!(client_id = %client.id, "Created client");
            (client, true)
        }
    };

    let enrollment = session
        .create_enrollment(&NewEnrollment {
            client_id: client.id,
            trip_id,
            registered_at: now,
            payment_date: request.payment_date,
        })
        .await?;

    Ok(EnrollmentOutcome {
        enrollment,
        client,
        client_created,
        trip,
    })
}
