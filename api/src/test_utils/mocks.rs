//! Mock implementations of port traits
//!
//! These are in-memory implementations that can be configured for testing.
//! They store data in memory and allow tests to verify behavior.
//!
//! Sessions work on a private snapshot and publish it on commit only if no
//! other session committed in between (optimistic, serializable). A losing
//! commit fails with `DomainError::Conflict`, like a unique-key violation
//! would against PostgreSQL.

use async_trait::async_trait;
use std::cmp::Reverse;
use std::collections::{BTreeMap, HashMap};
use std::sync::{Arc, Mutex, RwLock};

use crate::domain::entities::{
    Client, ClientId, ClientName, Country, Enrollment, NewClient, NewEnrollment, Pesel, Trip,
    TripId, TripSummary,
};
use crate::domain::ports::{EnrollmentSession, EnrollmentStore, TripCatalog};
use crate::error::DomainError;

#[derive(Debug, Clone, Default)]
struct TravelData {
    version: u64,
    trips: BTreeMap<TripId, Trip>,
    countries: HashMap<TripId, Vec<Country>>,
    clients: BTreeMap<ClientId, Client>,
    enrollments: BTreeMap<(ClientId, TripId), Enrollment>,
    next_client_id: i32,
}

impl TravelData {
    fn insert_client(&mut self, new_client: &NewClient) -> Result<Client, DomainError> {
        if self.clients.values().any(|c| c.pesel == new_client.pesel) {
            return Err(DomainError::Conflict(format!(
                "duplicate key value violates unique constraint client_pesel_key ({})",
                new_client.pesel
            )));
        }

        self.next_client_id += 1;
        let client = Client {
            id: ClientId(self.next_client_id),
            first_name: new_client.first_name.clone(),
            last_name: new_client.last_name.clone(),
            email: new_client.email.clone(),
            telephone: new_client.telephone.clone(),
            pesel: new_client.pesel.clone(),
        };
        self.clients.insert(client.id, client.clone());
        Ok(client)
    }
}

// ============================================================================
// In-Memory Travel Store
// ============================================================================

#[derive(Default)]
pub struct InMemoryTravelStore {
    data: Arc<RwLock<TravelData>>,
    concurrent_clients: Arc<Mutex<Vec<NewClient>>>,
    fail_enrollment_writes: bool,
}

impl InMemoryTravelStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Pre-populate with a trip for testing
    pub fn with_trip(self, trip: Trip) -> Self {
        self.data.write().unwrap().trips.insert(trip.id, trip);
        self
    }

    /// Pre-populate with a trip visiting the given countries
    pub fn with_trip_in(self, trip: Trip, countries: &[&str]) -> Self {
        {
            let mut data = self.data.write().unwrap();
            data.countries.insert(
                trip.id,
                countries
                    .iter()
                    .map(|name| Country {
                        name: name.to_string(),
                    })
                    .collect(),
            );
            data.trips.insert(trip.id, trip);
        }
        self
    }

    /// Pre-populate with a client for testing
    pub fn with_client(self, client: Client) -> Self {
        {
            let mut data = self.data.write().unwrap();
            data.next_client_id = data.next_client_id.max(client.id.0);
            data.clients.insert(client.id, client);
        }
        self
    }

    /// Pre-populate with an enrollment for testing
    pub fn with_enrollment(self, enrollment: Enrollment) -> Self {
        self.data
            .write()
            .unwrap()
            .enrollments
            .insert((enrollment.client_id, enrollment.trip_id), enrollment);
        self
    }

    /// Simulate another request committing this client right after the
    /// next session has taken its snapshot
    pub fn with_concurrent_client(self, client: NewClient) -> Self {
        self.concurrent_clients.lock().unwrap().push(client);
        self
    }

    /// Make every `create_enrollment` call fail with a database error
    pub fn failing_enrollment_writes(mut self) -> Self {
        self.fail_enrollment_writes = true;
        self
    }

    pub fn client_count(&self) -> usize {
        self.data.read().unwrap().clients.len()
    }

    pub fn enrollment_count(&self) -> usize {
        self.data.read().unwrap().enrollments.len()
    }

    pub fn client(&self, id: ClientId) -> Option<Client> {
        self.data.read().unwrap().clients.get(&id).cloned()
    }

    pub fn client_by_pesel(&self, pesel: &str) -> Option<Client> {
        self.data
            .read()
            .unwrap()
            .clients
            .values()
            .find(|c| c.pesel.as_str() == pesel)
            .cloned()
    }

    pub fn enrollments_for(&self, trip_id: TripId) -> Vec<Enrollment> {
        self.data
            .read()
            .unwrap()
            .enrollments
            .values()
            .filter(|e| e.trip_id == trip_id)
            .cloned()
            .collect()
    }
}

#[async_trait]
impl EnrollmentStore for InMemoryTravelStore {
    type Session = InMemorySession;

    async fn begin(&self) -> Result<InMemorySession, DomainError> {
        let working = self.data.read().unwrap().clone();
        let base_version = working.version;

        let racing: Vec<NewClient> =
            std::mem::take(&mut *self.concurrent_clients.lock().unwrap());
        if !racing.is_empty() {
            let mut shared = self.data.write().unwrap();
            for client in &racing {
                shared.insert_client(client)?;
            }
            shared.version += 1;
        }

        Ok(InMemorySession {
            shared: self.data.clone(),
            base_version,
            working,
            dirty: false,
            fail_enrollment_writes: self.fail_enrollment_writes,
        })
    }
}

#[async_trait]
impl TripCatalog for InMemoryTravelStore {
    async fn count_trips(&self) -> Result<u64, DomainError> {
        Ok(self.data.read().unwrap().trips.len() as u64)
    }

    async fn list_trips(&self, offset: u64, limit: u64) -> Result<Vec<TripSummary>, DomainError> {
        // PostgreSQL binds OFFSET/LIMIT as BIGINT
        if offset > i64::MAX as u64 || limit > i64::MAX as u64 {
            return Err(DomainError::Database(format!(
                "offset {} or limit {} out of BIGINT range",
                offset, limit
            )));
        }

        let data = self.data.read().unwrap();

        let mut trips: Vec<&Trip> = data.trips.values().collect();
        trips.sort_by_key(|t| (Reverse(t.date_from), t.id));

        Ok(trips
            .into_iter()
            .skip(offset as usize)
            .take(limit as usize)
            .map(|trip| TripSummary {
                id: trip.id,
                name: trip.name.clone(),
                description: trip.description.clone(),
                date_from: trip.date_from,
                date_to: trip.date_to,
                max_people: trip.max_people,
                countries: data.countries.get(&trip.id).cloned().unwrap_or_default(),
                clients: data
                    .enrollments
                    .keys()
                    .filter(|(_, trip_id)| *trip_id == trip.id)
                    .filter_map(|(client_id, _)| data.clients.get(client_id))
                    .map(ClientName::from)
                    .collect(),
            })
            .collect())
    }
}

pub struct InMemorySession {
    shared: Arc<RwLock<TravelData>>,
    base_version: u64,
    working: TravelData,
    dirty: bool,
    fail_enrollment_writes: bool,
}

#[async_trait]
impl EnrollmentSession for InMemorySession {
    async fn find_trip(&mut self, id: TripId) -> Result<Option<Trip>, DomainError> {
        Ok(self.working.trips.get(&id).cloned())
    }

    async fn find_client(&mut self, id: ClientId) -> Result<Option<Client>, DomainError> {
        Ok(self.working.clients.get(&id).cloned())
    }

    async fn find_client_by_pesel(
        &mut self,
        pesel: &Pesel,
    ) -> Result<Option<Client>, DomainError> {
        Ok(self
            .working
            .clients
            .values()
            .find(|c| &c.pesel == pesel)
            .cloned())
    }

    async fn create_client(&mut self, client: &NewClient) -> Result<Client, DomainError> {
        let client = self.working.insert_client(client)?;
        self.dirty = true;
        Ok(client)
    }

    async fn enrollment_exists(
        &mut self,
        client_id: ClientId,
        trip_id: TripId,
    ) -> Result<bool, DomainError> {
        Ok(self.working.enrollments.contains_key(&(client_id, trip_id)))
    }

    async fn count_enrollments(&mut self, client_id: ClientId) -> Result<u64, DomainError> {
        Ok(self
            .working
            .enrollments
            .keys()
            .filter(|(id, _)| *id == client_id)
            .count() as u64)
    }

    async fn create_enrollment(
        &mut self,
        enrollment: &NewEnrollment,
    ) -> Result<Enrollment, DomainError> {
        if self.fail_enrollment_writes {
            return Err(DomainError::Database(
                "injected enrollment write failure".to_string(),
            ));
        }

        let key = (enrollment.client_id, enrollment.trip_id);
        if self.working.enrollments.contains_key(&key) {
            return Err(DomainError::Conflict(format!(
                "duplicate enrollment ({}, {})",
                key.0, key.1
            )));
        }
        if !self.working.clients.contains_key(&key.0) || !self.working.trips.contains_key(&key.1)
        {
            return Err(DomainError::Conflict(
                "enrollment references a missing client or trip".to_string(),
            ));
        }

        let created = Enrollment {
            client_id: enrollment.client_id,
            trip_id: enrollment.trip_id,
            registered_at: enrollment.registered_at,
            payment_date: enrollment.payment_date,
        };
        self.working.enrollments.insert(key, created.clone());
        self.dirty = true;
        Ok(created)
    }

    async fn delete_client(&mut self, id: ClientId) -> Result<(), DomainError> {
        if self.working.enrollments.keys().any(|(c, _)| *c == id) {
            return Err(DomainError::Conflict(format!(
                "client {} is still referenced by enrollments",
                id
            )));
        }
        self.working.clients.remove(&id);
        self.dirty = true;
        Ok(())
    }

    async fn commit(mut self) -> Result<(), DomainError> {
        if !self.dirty {
            return Ok(());
        }

        let mut shared = self.shared.write().unwrap();
        if shared.version != self.base_version {
            return Err(DomainError::Conflict(
                "concurrent modification detected on commit".to_string(),
            ));
        }
        self.working.version = self.base_version + 1;
        *shared = self.working;
        Ok(())
    }

    async fn rollback(self) -> Result<(), DomainError> {
        Ok(())
    }
}
