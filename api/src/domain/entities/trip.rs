//! Trip domain entity
//!
//! Trips are created and edited outside this service; here they are only
//! read, listed and referenced by enrollments.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use super::ClientName;

/// Unique identifier for a trip
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct TripId(pub i32);

impl From<i32> for TripId {
    fn from(id: i32) -> Self {
        Self(id)
    }
}

impl From<TripId> for i32 {
    fn from(id: TripId) -> Self {
        id.0
    }
}

impl std::fmt::Display for TripId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// A scheduled group journey
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Trip {
    pub id: TripId,
    pub name: String,
    pub description: String,
    pub date_from: DateTime<Utc>,
    pub date_to: DateTime<Utc>,
    /// Advertised capacity. Read-only here and not enforced on enrollment.
    pub max_people: i32,
}

impl Trip {
    /// A trip accepts enrollments only while it starts strictly after `now`.
    pub fn starts_after(&self, now: DateTime<Utc>) -> bool {
        self.date_from > now
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Country {
    pub name: String,
}

/// Listing projection of a trip with its countries and enrolled client names
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct TripSummary {
    pub id: TripId,
    pub name: String,
    pub description: String,
    pub date_from: DateTime<Utc>,
    pub date_to: DateTime<Utc>,
    pub max_people: i32,
    pub countries: Vec<Country>,
    pub clients: Vec<ClientName>,
}
