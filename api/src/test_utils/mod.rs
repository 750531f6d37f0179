//! Test utilities
//!
//! Manual mock implementations and test fixtures for unit testing.
//!
//! The in-memory store implements every storage port, so the same instance
//! backs the service tests and the HTTP tests (the router is generic over
//! the store).

pub mod fixtures;
pub mod mocks;

pub use fixtures::*;
pub use mocks::*;
