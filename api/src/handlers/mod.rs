//! HTTP handlers
//!
//! Axum request handlers for the API endpoints.

pub mod clients;
pub mod trips;

pub use clients::remove_client;
pub use trips::{assign_client_to_trip, list_trips};
