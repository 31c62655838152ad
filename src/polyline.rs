//! Polyline representation for route geometries.
//!
//! A route's polyline is the distribution center followed by each stop in
//! visiting order. Map layers draw it as-is; encoding to a compact wire
//! format belongs to the host.

use serde::{Deserialize, Serialize};

use crate::geo::Coordinate;
use crate::haversine::path_km;
use crate::traits::DistanceModel;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Polyline {
    points: Vec<Coordinate>,
}

impl Polyline {
    /// Wraps `points` as given; no origin is prepended.
    pub fn new(points: Vec<Coordinate>) -> Self {
        Self { points }
    }

    /// Waypoints for a route: `origin` first, then `stops` in order.
    pub fn for_route<I>(origin: Coordinate, stops: I) -> Self
    where
        I: IntoIterator<Item = Coordinate>,
    {
        let points = std::iter::once(origin).chain(stops).collect();
        Self { points }
    }

    /// Waypoints in drawing order.
    pub fn points(&self) -> &[Coordinate] {
        &self.points
    }

    /// Consumes the polyline, returning its waypoints.
    pub fn into_points(self) -> Vec<Coordinate> {
        self.points
    }

    /// Length along the polyline under `model`.
    pub fn length_km<M: DistanceModel + ?Sized>(&self, model: &M) -> f64 {
        match self.points.split_first() {
            Some((first, rest)) => path_km(model, *first, rest.iter().copied()),
            None => 0.0,
        }
    }
}
