//! Test fixtures for delivery-planner.
//!
//! Provides realistic test data:
//! - Real Madrid-region town coordinates (for the city lookup table)
//! - Street-level delivery addresses around central Madrid

pub mod madrid_locations;

pub use madrid_locations::*;
