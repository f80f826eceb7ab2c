//! Test utilities for the Helix client
//!
//! This module provides builders, mocks, and fixtures for testing.

pub mod fixtures;

pub use builders::*;
pub use fixtures::*;
pub use mocks::*;
