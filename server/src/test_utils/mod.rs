//! Test utilities
//!
//! Manual mock implementations and test fixtures for unit testing.
//!
//! The in-memory store stands in for the file adapter in service tests;
//! end-to-end tests in `integration_tests` use a real file in a temp dir.

pub mod fixtures;
pub mod mocks;

pub use fixtures::*;
pub use mocks::*;
