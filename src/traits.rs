//! Core domain traits for the delivery planner.
//!
//! These are intentionally minimal. Host applications implement them for
//! their own package types so that whatever they display (address text,
//! recipient, notes) rides through the planner untouched.

use std::hash::Hash;

use crate::geo::Coordinate;

/// Unique identifier for planner entities.
///
/// `Ord` is required because equidistant candidates are broken on the lower
/// identifier.
pub trait Id: Clone + Eq + Hash + Ord {}

impl<T> Id for T where T: Clone + Eq + Hash + Ord {}

/// A single delivery destination to be visited by exactly one vehicle.
pub trait Delivery {
    type Id: Id;

    fn id(&self) -> &Self::Id;

    /// Explicit latitude in degrees, if the package carries one.
    fn latitude(&self) -> Option<f64>;

    /// Explicit longitude in degrees, if the package carries one.
    fn longitude(&self) -> Option<f64>;

    /// Recipient city, used when explicit coordinates are missing.
    fn city(&self) -> Option<&str>;
}

/// Straight-line distance between two points.
///
/// One model is used for every comparison within a planning run so that
/// partitioning, sequencing and statistics agree with each other. Models are
/// expected to be symmetric: 2-opt scores a reversed segment by its end edges
/// only.
pub trait DistanceModel {
    /// Distance in kilometers. Must be non-negative for finite inputs.
    fn distance_km(&self, from: Coordinate, to: Coordinate) -> f64;
}

impl<M: DistanceModel + ?Sized> DistanceModel for &M {
    fn distance_km(&self, from: Coordinate, to: Coordinate) -> f64 {
        (**self).distance_km(from, to)
    }
}
