//! Domain entities
//!
//! Pure domain models representing core business concepts.
//! These are separate from the SeaORM entities in the `entity` module.

pub mod client;
pub mod enrollment;
pub mod page;
pub mod trip;

pub use client::{Client, ClientId, ClientName, NewClient, Pesel};
pub use enrollment::{Enrollment, EnrollmentOutcome, EnrollmentRequest, NewEnrollment};
pub use page::{PageRequest, TripPage};
pub use trip::{Country, Trip, TripId, TripSummary};
