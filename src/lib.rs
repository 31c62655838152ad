//! delivery-planner core
//!
//! Splits a day's delivery stops across several drivers leaving one
//! distribution center, orders each driver's stops into a short tour, and
//! estimates distance and duration per route.

pub mod traits;
pub mod geo;
pub mod geocode;
pub mod haversine;
pub mod partition;
pub mod sequence;
pub mod stats;
pub mod polyline;
pub mod config;
pub mod error;
pub mod solver;

pub use config::{PartitionStrategy, PlannerConfig};
pub use error::PlanError;
pub use geo::Coordinate;
pub use geocode::{CityTable, Stop, UnroutedReason};
pub use haversine::{Equirectangular, Haversine};
pub use solver::{DriverRoute, Plan, Planner, Route, RoutedStop, UnroutedStop};
pub use stats::{PlanSummary, RouteStats};
pub use traits::{Delivery, DistanceModel, Id};
