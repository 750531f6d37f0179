//! PostgreSQL adapter for EnrollmentStore
//!
//! Each session wraps one `DatabaseTransaction`. Dropping a session without
//! committing rolls the transaction back.

use async_trait::async_trait;
use chrono::Utc;
use sea_orm::{
    ActiveModelTrait, ColumnTrait, ConnectionTrait, DatabaseConnection, DatabaseTransaction,
    EntityTrait, PaginatorTrait, QueryFilter, Set, TransactionTrait,
};

use super::to_domain_error;
use crate::domain::entities::{
    Client, ClientId, Enrollment, NewClient, NewEnrollment, Pesel, Trip, TripId,
};
use crate::domain::ports::{EnrollmentSession, EnrollmentStore};
use crate::entity::{client, client_trip, trip};
use crate::error::DomainError;

const SCHEMA: &str = include_str!("../../../migrations/0001_init.sql");

/// PostgreSQL implementation of EnrollmentStore and TripCatalog
pub struct PostgresTravelStore {
    pub(super) db: DatabaseConnection,
}

impl PostgresTravelStore {
    pub fn new(db: DatabaseConnection) -> Self {
        Self { db }
    }

    /// Create the tables, constraints and indexes if they are missing
    pub async fn apply_schema(&self) -> Result<(), DomainError> {
        self.db
            .execute_unprepared(SCHEMA)
            .await
            .map_err(to_domain_error)?;
        Ok(())
    }
}

#[async_trait]
impl EnrollmentStore for PostgresTravelStore {
    type Session = PostgresSession;

    async fn begin(&self) -> Result<PostgresSession, DomainError> {
        let txn = self.db.begin().await.map_err(to_domain_error)?;
        Ok(PostgresSession { txn })
    }
}

/// A request-scoped transaction
pub struct PostgresSession {
    txn: DatabaseTransaction,
}

#[async_trait]
impl EnrollmentSession for PostgresSession {
    async fn find_trip(&mut self, id: TripId) -> Result<Option<Trip>, DomainError> {
        let result = trip::Entity::find_by_id(id.0)
            .one(&self.txn)
            .await
            .map_err(to_domain_error)?;

        Ok(result.map(|m| m.into()))
    }

    async fn find_client(&mut self, id: ClientId) -> Result<Option<Client>, DomainError> {
        let result = client::Entity::find_by_id(id.0)
            .one(&self.txn)
            .await
            .map_err(to_domain_error)?;

        Ok(result.map(|m| m.into()))
    }

    async fn find_client_by_pesel(
        &mut self,
        pesel: &Pesel,
    ) -> Result<Option<Client>, DomainError> {
        let result = client::Entity::find()
            .filter(client::Column::Pesel.eq(pesel.as_str()))
            .one(&self.txn)
            .await
            .map_err(to_domain_error)?;

        Ok(result.map(|m| m.into()))
    }

    async fn create_client(&mut self, new_client: &NewClient) -> Result<Client, DomainError> {
        let model = client::ActiveModel {
            first_name: Set(new_client.first_name.clone()),
            last_name: Set(new_client.last_name.clone()),
            email: Set(new_client.email.clone()),
            telephone: Set(new_client.telephone.clone()),
            pesel: Set(new_client.pesel.as_str().to_string()),
            ..Default::default()
        };

        let result = model.insert(&self.txn).await.map_err(to_domain_error)?;

        Ok(result.into())
    }

    async fn enrollment_exists(
        &mut self,
        client_id: ClientId,
        trip_id: TripId,
    ) -> Result<bool, DomainError> {
        let result = client_trip::Entity::find_by_id((client_id.0, trip_id.0))
            .one(&self.txn)
            .await
            .map_err(to_domain_error)?;

        Ok(result.is_some())
    }

    async fn count_enrollments(&mut self, client_id: ClientId) -> Result<u64, DomainError> {
        client_trip::Entity::find()
            .filter(client_trip::Column::IdClient.eq(client_id.0))
            .count(&self.txn)
            .await
            .map_err(to_domain_error)
    }

    async fn create_enrollment(
        &mut self,
        enrollment: &NewEnrollment,
    ) -> Result<Enrollment, DomainError> {
        let model = client_trip::ActiveModel {
            id_client: Set(enrollment.client_id.0),
            id_trip: Set(enrollment.trip_id.0),
            registered_at: Set(enrollment.registered_at.fixed_offset()),
            payment_date: Set(enrollment.payment_date.map(|d| d.fixed_offset())),
        };

        let result = model.insert(&self.txn).await.map_err(to_domain_error)?;

        Ok(result.into())
    }

    async fn delete_client(&mut self, id: ClientId) -> Result<(), DomainError> {
        client::Entity::delete_by_id(id.0)
            .exec(&self.txn)
            .await
            .map_err(to_domain_error)?;

        Ok(())
    }

    async fn commit(self) -> Result<(), DomainError> {
        self.txn.commit().await.map_err(to_domain_error)
    }

    async fn rollback(self) -> Result<(), DomainError> {
        self.txn.rollback().await.map_err(to_domain_error)
    }
}

/// Convert SeaORM model to domain entity
impl From<trip::Model> for Trip {
    fn from(model: trip::Model) -> Self {
        Trip {
            id: TripId(model.id_trip),
            name: model.name,
            description: model.description,
            date_from: model.date_from.with_timezone(&Utc),
            date_to: model.date_to.with_timezone(&Utc),
            max_people: model.max_people,
        }
    }
}

/// Convert SeaORM model to domain entity
impl From<client::Model> for Client {
    fn from(model: client::Model) -> Self {
        Client {
            id: ClientId(model.id_client),
            first_name: model.first_name,
            last_name: model.last_name,
            email: model.email,
            telephone: model.telephone,
            pesel: Pesel::from(model.pesel),
        }
    }
}

/// Convert SeaORM model to domain entity
impl From<client_trip::Model> for Enrollment {
    fn from(model: client_trip::Model) -> Self {
        Enrollment {
            client_id: ClientId(model.id_client),
            trip_id: TripId(model.id_trip),
            registered_at: model.registered_at.with_timezone(&Utc),
            payment_date: model.payment_date.map(|d| d.with_timezone(&Utc)),
        }
    }
}
