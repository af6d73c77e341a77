//! Shared test utilities used across retia crates.

pub mod property_test_profile;
pub mod tracing;
