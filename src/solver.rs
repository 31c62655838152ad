//! Multi-vehicle delivery planner.
//!
//! resolve -> partition -> sequence (per group) -> stats.

use rayon::prelude::*;
use tracing::debug;

use crate::config::PlannerConfig;
use crate::error::PlanError;
use crate::geo::Coordinate;
use crate::geocode::{CityTable, resolve_all};
use crate::haversine::Haversine;
use crate::partition::partition;
use crate::polyline::Polyline;
use crate::sequence::sequence;
use crate::stats::{self, PlanSummary, RouteStats};
use crate::traits::{Delivery, DistanceModel};

pub use crate::geocode::{RoutedStop, UnroutedStop};

/// Ordered stops for one vehicle. The origin is implicit and never listed.
#[derive(Debug)]
pub struct Route<'a, S> {
    pub stops: Vec<RoutedStop<'a, S>>,
}

impl<S> Clone for Route<'_, S> {
    fn clone(&self) -> Self {
        Self {
            stops: self.stops.clone(),
        }
    }
}

impl<'a, S> Route<'a, S> {
    /// Number of stops on the route.
    pub fn len(&self) -> usize {
        self.stops.len()
    }

    pub fn is_empty(&self) -> bool {
        self.stops.is_empty()
    }

    /// The caller's stop values, in visiting order.
    pub fn deliveries(&self) -> impl Iterator<Item = &'a S> + '_ {
        self.stops.iter().map(|s| s.stop)
    }

    /// Resolved stop coordinates, in visiting order. The origin is not included.
    pub fn coordinates(&self) -> impl Iterator<Item = Coordinate> + '_ {
        self.stops.iter().map(|s| s.coordinate)
    }

    pub fn stats<M>(&self, origin: Coordinate, model: &M, config: &PlannerConfig) -> RouteStats
    where
        M: DistanceModel + ?Sized,
    {
        stats::route_stats(self.coordinates(), origin, model, config)
    }

    pub fn polyline(&self, origin: Coordinate) -> Polyline {
        Polyline::for_route(origin, self.coordinates())
    }
}

impl<'a, S: Delivery> Route<'a, S> {
    pub fn ids(&self) -> impl Iterator<Item = &'a S::Id> + '_ {
        self.stops.iter().map(|s| s.id())
    }
}

/// Output of one planning run.
#[derive(Debug)]
pub struct Plan<'a, S: Delivery> {
    pub origin: Coordinate,
    /// Exactly one route per vehicle, possibly empty.
    pub routes: Vec<Route<'a, S>>,
    /// Stops whose location could not be resolved, in input order.
    pub unrouted: Vec<UnroutedStop<S::Id>>,
}

impl<'a, S: Delivery> Plan<'a, S> {
    pub fn unrouted_ids(&self) -> impl Iterator<Item = &S::Id> + '_ {
        self.unrouted.iter().map(|u| &u.stop_id)
    }

    pub fn routed_count(&self) -> usize {
        self.routes.iter().map(Route::len).sum()
    }
}

/// A route paired with the driver who will run it.
#[derive(Debug)]
pub struct DriverRoute<'a, D, S> {
    pub driver_id: D,
    pub route: Route<'a, S>,
    pub stats: RouteStats,
}

/// Planning engine.
///
/// Holds nothing that changes between runs: a borrowed city table, a distance
/// model and tunables. Safe to share across threads and call concurrently.
#[derive(Debug, Clone)]
pub struct Planner<'t, M = Haversine> {
    table: &'t CityTable,
    model: M,
    config: PlannerConfig,
}

impl<'t> Planner<'t, Haversine> {
    pub fn new(table: &'t CityTable) -> Self {
        Self {
            table,
            model: Haversine,
            config: PlannerConfig::default(),
        }
    }
}

impl<'t, M> Planner<'t, M>
where
    M: DistanceModel + Sync,
{
    pub fn with_model(table: &'t CityTable, model: M, config: PlannerConfig) -> Self {
        Self { table, model, config }
    }

    pub fn with_config(mut self, config: PlannerConfig) -> Self {
        self.config = config;
        self
    }

    pub fn config(&self) -> &PlannerConfig {
        &self.config
    }

    pub fn model(&self) -> &M {
        &self.model
    }

    /// Split `stops` across `vehicle_count` vehicles and order each share.
    ///
    /// Stops that cannot be located are reported in [`Plan::unrouted`]; the
    /// run still succeeds. Identical inputs give identical plans.
    pub fn optimize<'a, S>(
        &self,
        stops: &'a [S],
        vehicle_count: usize,
        origin: Coordinate,
    ) -> Result<Plan<'a, S>, PlanError>
    where
        S: Delivery + Sync,
    {
        if vehicle_count == 0 {
            return Err(PlanError::InvalidVehicleCount(vehicle_count));
        }
        if !origin.is_finite() {
            return Err(PlanError::InvalidOrigin {
                lat: origin.lat,
                lng: origin.lng,
            });
        }

        let (resolved, unrouted) = resolve_all(stops, self.table);
        debug!(
            total = stops.len(),
            resolved = resolved.len(),
            unrouted = unrouted.len(),
            vehicles = vehicle_count,
            "resolved stops"
        );

        let groups = partition(&resolved, vehicle_count, origin, &self.model, &self.config);
        debug!(
            strategy = ?self.config.strategy,
            sizes = ?groups.iter().map(Vec::len).collect::<Vec<_>>(),
            "partitioned stops"
        );

        // Output order follows group order, so parallel sequencing stays deterministic.
        let routes: Vec<Route<'a, S>> = groups
            .into_par_iter()
            .map(|group| Route {
                stops: sequence(&group, origin, &self.model, &self.config),
            })
            .collect();

        Ok(Plan {
            origin,
            routes,
            unrouted,
        })
    }

    pub fn route_stats<S>(&self, route: &Route<'_, S>, origin: Coordinate) -> RouteStats {
        route.stats(origin, &self.model, &self.config)
    }

    pub fn summary<S: Delivery>(&self, plan: &Plan<'_, S>) -> PlanSummary {
        let stats: Vec<(usize, RouteStats)> = plan
            .routes
            .iter()
            .map(|route| (route.len(), self.route_stats(route, plan.origin)))
            .collect();
        PlanSummary::from_route_stats(
            stats.iter().map(|(len, s)| (*len, s)),
            plan.unrouted.len(),
        )
    }

    /// Plan one route per selected driver, pairing routes and drivers by
    /// position. Returns the routes together with the unrouted reports.
    pub fn assign_drivers<'a, S, D>(
        &self,
        stops: &'a [S],
        drivers: &[D],
        origin: Coordinate,
    ) -> Result<(Vec<DriverRoute<'a, D, S>>, Vec<UnroutedStop<S::Id>>), PlanError>
    where
        S: Delivery + Sync,
        D: Clone,
    {
        let plan = self.optimize(stops, drivers.len(), origin)?;
        let assignments = drivers
            .iter()
            .zip(plan.routes)
            .map(|(driver_id, route)| DriverRoute {
                stats: self.route_stats(&route, origin),
                driver_id: driver_id.clone(),
                route,
            })
            .collect();
        Ok((assignments, plan.unrouted))
    }
}

/// Plan with great-circle distances and default tunables.
///
/// Pair with [`route_stats`]. Use a [`Planner`] for any other model or config.
pub fn optimize<'a, S>(
    stops: &'a [S],
    vehicle_count: usize,
    origin: Coordinate,
    table: &CityTable,
) -> Result<Plan<'a, S>, PlanError>
where
    S: Delivery + Sync,
{
    Planner::new(table).optimize(stops, vehicle_count, origin)
}

/// Stats for a planned route with great-circle distances and default tunables.
///
/// Only consistent with plans from [`optimize`]. A route planned by a
/// [`Planner`] with another distance model or config should be measured with
/// [`Planner::route_stats`], which reuses that planner's model and tunables.
pub fn route_stats<S>(route: &Route<'_, S>, origin: Coordinate) -> RouteStats {
    route.stats(origin, &Haversine, &PlannerConfig::default())
}
