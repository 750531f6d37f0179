//! Identity resolution
//!
//! Decides whether incoming client data belongs to a known client. Matching
//! is by exact PESEL equality only; names and contact details on a known
//! PESEL are neither compared nor updated.

use crate::domain::entities::{Client, NewClient};
use crate::domain::ports::EnrollmentSession;
use crate::error::DomainError;

#[derive(Debug, Clone, PartialEq)]
pub enum Resolution {
    /// A client already holds this PESEL
    Existing(Client),
    /// Nobody holds this PESEL; the caller should create the client
    Create(NewClient),
}

/// Read-only lookup, creation is left to the caller
pub async fn resolve_client<S>(
    session: &mut S,
    candidate: &NewClient,
) -> Result<Resolution, DomainError>
where
    S: EnrollmentSession,
{
    let resolution = match session.find_client_by_pesel(&candidate.pesel).await? {
        Some(client) => Resolution::Existing(client),
        None => Resolution::Create(candidate.clone()),
    };
    Ok(resolution)
}
