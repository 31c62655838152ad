//! Distance and duration estimates for sequenced routes.

use serde::{Deserialize, Serialize};

use crate::config::PlannerConfig;
use crate::geo::Coordinate;
use crate::haversine::path_km;
use crate::traits::DistanceModel;

/// Summary of one route. Always derived from the route's current contents.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct RouteStats {
    pub total_distance_km: f64,
    pub estimated_duration_minutes: u32,
}

/// Aggregate over every route in a plan.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct PlanSummary {
    pub route_count: usize,
    pub routed_stops: usize,
    pub unrouted_stops: usize,
    pub total_distance_km: f64,
    /// Duration of the slowest route, which bounds when the last driver is done.
    pub longest_route_minutes: u32,
}

impl PlanSummary {
    pub fn from_route_stats<'s, I>(routes: I, unrouted_stops: usize) -> Self
    where
        I: IntoIterator<Item = (usize, &'s RouteStats)>,
    {
        let mut summary = Self {
            unrouted_stops,
            ..Self::default()
        };
        for (stop_count, stats) in routes {
            summary.route_count += 1;
            summary.routed_stops += stop_count;
            summary.total_distance_km += stats.total_distance_km;
            summary.longest_route_minutes =
                summary.longest_route_minutes.max(stats.estimated_duration_minutes);
        }
        summary
    }
}

/// Travel time at the configured speed plus service time per stop.
///
/// Non-decreasing in both `distance_km` and `stop_count`.
pub fn duration_minutes(distance_km: f64, stop_count: usize, config: &PlannerConfig) -> u32 {
    let driving = if config.speed_kmh > 0.0 && distance_km > 0.0 {
        (distance_km / config.speed_kmh * 60.0).round()
    } else {
        0.0
    };
    // Float to int casts saturate.
    let driving = driving as u32;
    let stops = u32::try_from(stop_count).unwrap_or(u32::MAX);
    driving.saturating_add(config.service_minutes_per_stop.saturating_mul(stops))
}

/// Stats for the open path origin -> stops in order. No return leg.
pub fn route_stats<M, I>(
    stops: I,
    origin: Coordinate,
    model: &M,
    config: &PlannerConfig,
) -> RouteStats
where
    M: DistanceModel + ?Sized,
    I: IntoIterator<Item = Coordinate>,
{
    let mut count = 0usize;
    let total_distance_km = path_km(
        model,
        origin,
        stops.into_iter().inspect(|_| count += 1),
    );

    if count == 0 {
        return RouteStats::default();
    }

    RouteStats {
        total_distance_km,
        estimated_duration_minutes: duration_minutes(total_distance_km, count, config),
    }
}
