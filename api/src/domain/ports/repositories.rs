//! Repository port traits
//!
//! These traits define the interface for data persistence.
//! Implementations are provided by adapters (e.g., PostgreSQL).
//!
//! Writes go through an [`EnrollmentSession`], an explicit unit of work
//! opened per request. Nothing is visible to other sessions until
//! [`EnrollmentSession::commit`]; dropping or rolling back discards it all.

use async_trait::async_trait;

use crate::domain::entities::{
    Client, ClientId, Enrollment, NewClient, NewEnrollment, Pesel, Trip, TripId, TripSummary,
};
use crate::error::DomainError;

/// Read-only access to the trip catalog
#[async_trait]
pub trait TripCatalog: Send + Sync {
    /// Total number of trips
    async fn count_trips(&self) -> Result<u64, DomainError>;

    /// Trips ordered by start date (latest first, ties by id), with their
    /// countries and enrolled client names loaded
    async fn list_trips(&self, offset: u64, limit: u64) -> Result<Vec<TripSummary>, DomainError>;
}

/// Opens transactional sessions over trips, clients and enrollments
#[async_trait]
pub trait EnrollmentStore: Send + Sync {
    type Session: EnrollmentSession;

    /// Begin a new unit of work
    async fn begin(&self) -> Result<Self::Session, DomainError>;
}

/// A single unit of work scoped to one request.
///
/// Storage uniqueness (client PESEL, `(client, trip)` enrollment pair) and
/// referential violations are reported as [`DomainError::Conflict`].
#[async_trait]
pub trait EnrollmentSession: Send {
    /// Find a trip by ID
    async fn find_trip(&mut self, id: TripId) -> Result<Option<Trip>, DomainError>;

    /// Find a client by ID
    async fn find_client(&mut self, id: ClientId) -> Result<Option<Client>, DomainError>;

    /// Find a client by exact natural identifier
    async fn find_client_by_pesel(&mut self, pesel: &Pesel)
        -> Result<Option<Client>, DomainError>;

    /// Create a new client, returning it with its assigned ID
    async fn create_client(&mut self, client: &NewClient) -> Result<Client, DomainError>;

    /// Whether the client already holds an enrollment for the trip
    async fn enrollment_exists(
        &mut self,
        client_id: ClientId,
        trip_id: TripId,
    ) -> Result<bool, DomainError>;

    /// Number of enrollments (any trip) held by the client
    async fn count_enrollments(&mut self, client_id: ClientId) -> Result<u64, DomainError>;

    /// Create a new enrollment
    async fn create_enrollment(
        &mut self,
        enrollment: &NewEnrollment,
    ) -> Result<Enrollment, DomainError>;

    /// Delete a client record
    async fn delete_client(&mut self, id: ClientId) -> Result<(), DomainError>;

    /// Make every write of this session durable
    async fn commit(self) -> Result<(), DomainError>;

    /// Discard every write of this session
    async fn rollback(self) -> Result<(), DomainError>;
}

/// Everything the HTTP layer needs from storage
pub trait TravelStore: TripCatalog + EnrollmentStore + 'static {}

impl<T> TravelStore for T where T: TripCatalog + EnrollmentStore + 'static {}
