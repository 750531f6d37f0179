//! Enrollment eligibility rules
//!
//! Evaluated in order, first failure wins:
//! 1. the trip exists
//! 2. the trip starts strictly after the validation instant
//! 3. a known client is not already enrolled on the trip
//!
//! Capacity (`max_people`) is not checked.

use chrono::{DateTime, Utc};

use crate::domain::entities::{ClientId, Trip, TripId};
use crate::error::DomainError;

/// Rules 1 and 2, applied to the result of a trip lookup
pub fn check_trip_open(
    trip_id: TripId,
    trip: Option<Trip>,
    now: DateTime<Utc>,
) -> Result<Trip, DomainError> {
    let trip = trip.ok_or_else(|| DomainError::not_found("Trip", trip_id))?;

    if !trip.starts_after(now) {
        return Err(DomainError::InvalidState(format!(
            "trip {} already started or is in the past",
            trip_id
        )));
    }

    Ok(trip)
}

/// Rule 3
pub fn check_not_enrolled(
    client_id: ClientId,
    trip_id: TripId,
    already_enrolled: bool,
) -> Result<(), DomainError> {
    if already_enrolled {
        return Err(DomainError::InvalidState(format!(
            "client {} is already enrolled on trip {}",
            client_id, trip_id
        )));
    }
    Ok(())
}
