//! Application layer
//!
//! Contains use cases and service orchestration.
//! Services coordinate between domain entities and storage ports.

pub mod client_service;
pub mod eligibility;
pub mod enrollment_service;
pub mod identity;
pub mod trip_service;
pub mod unit_of_work;

pub use client_service::ClientService;
pub use enrollment_service::EnrollmentService;
pub use trip_service::TripService;
