use thiserror::Error;

/// Structural input errors that abort a planning run.
///
/// Stops that cannot be located are not errors: they are reported in
/// [`crate::Plan::unrouted`] and the run still succeeds.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum PlanError {
    /// At least one vehicle is required.
    #[error("vehicle count must be at least 1, got {0}")]
    InvalidVehicleCount(usize),

    /// The distribution center must be a finite coordinate.
    #[error("origin must be a finite coordinate, got ({lat}, {lng})")]
    InvalidOrigin { lat: f64, lng: f64 },
}
