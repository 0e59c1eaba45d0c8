//! Test fixtures for delivery-planner.
//!
//! Provides realistic test data: real Santo Domingo locations for
//! exercising the planner with plausible courier geography.

pub mod santo_domingo_locations;

pub use santo_domingo_locations::*;
