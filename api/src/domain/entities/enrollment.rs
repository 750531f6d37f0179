//! Enrollment domain entity
//!
//! The association of one client with one trip. Identified by the
//! `(client, trip)` pair, created once and never updated.

use chrono::{DateTime, Utc};
use serde::Serialize;

use super::{Client, ClientId, NewClient, Trip, TripId};

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Enrollment {
    pub client_id: ClientId,
    pub trip_id: TripId,
    pub registered_at: DateTime<Utc>,
    pub payment_date: Option<DateTime<Utc>>,
}

/// Data needed to create a new enrollment
#[derive(Debug, Clone)]
pub struct NewEnrollment {
    pub client_id: ClientId,
    pub trip_id: TripId,
    pub registered_at: DateTime<Utc>,
    pub payment_date: Option<DateTime<Utc>>,
}

/// Incoming request to put a (new or returning) client on a trip
#[derive(Debug, Clone)]
pub struct EnrollmentRequest {
    pub client: NewClient,
    pub payment_date: Option<DateTime<Utc>>,
}

/// What an accepted enrollment produced
#[derive(Debug, Clone)]
pub struct EnrollmentOutcome {
    pub enrollment: Enrollment,
    pub client: Client,
    /// True when no client held the PESEL and a new record was created
    pub client_created: bool,
    pub trip: Trip,
}
