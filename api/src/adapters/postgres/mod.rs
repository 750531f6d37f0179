//! PostgreSQL adapters
//!
//! Implementations of repository traits using SeaORM and PostgreSQL.

pub mod travel_store;
pub mod trip_catalog;


use sea_orm::{DbErr, SqlErr};

use crate::error::DomainError;

pub use travel_store::PostgresTravelStore;

/// Map SeaORM errors, keeping constraint violations distinguishable so the
/// unit of work can be retried
fn to_domain_error(err: DbErr) -> DomainError {
    match err.sql_err() {
        Some(SqlErr::UniqueConstraintViolation(msg)) => DomainError::Conflict(msg),
        Some(SqlErr::ForeignKeyConstraintViolation(msg)) => DomainError::Conflict(msg),
        _ => DomainError::Database(err.to_string()),
    }
}
