//! SeaORM entities
//!
//! Table models mirroring `migrations/0001_init.sql`.

pub mod client;
pub mod client_trip;
pub mod country;
pub mod country_trip;
pub mod trip;
