//! Ordering one vehicle's stops into a tour from the origin.

use tracing::trace;

use crate::config::PlannerConfig;
use crate::geo::Coordinate;
use crate::geocode::RoutedStop;
use crate::haversine::path_km;
use crate::traits::{Delivery, DistanceModel};

/// Smallest distance reduction (km) that counts as an improvement.
const IMPROVEMENT_EPSILON_KM: f64 = 1e-9;

/// Nearest-neighbor tour, then 2-opt when `config.refine` is set.
pub fn sequence<'a, S, M>(
    group: &[RoutedStop<'a, S>],
    origin: Coordinate,
    model: &M,
    config: &PlannerConfig,
) -> Vec<RoutedStop<'a, S>>
where
    S: Delivery,
    M: DistanceModel + ?Sized,
{
    let mut route = nearest_neighbor(group, origin, model);
    if config.refine {
        let moves = two_opt(&mut route, origin, model, config.max_two_opt_iterations);
        trace!(stops = route.len(), moves, "2-opt finished");
    }
    route
}

/// Greedy tour: always drive to the closest unvisited stop.
///
/// Equidistant candidates are broken on the lower stop identifier.
pub fn nearest_neighbor<'a, S, M>(
    group: &[RoutedStop<'a, S>],
    origin: Coordinate,
    model: &M,
) -> Vec<RoutedStop<'a, S>>
where
    S: Delivery,
    M: DistanceModel + ?Sized,
{
    let mut remaining = group.to_vec();
    let mut route = Vec::with_capacity(remaining.len());
    let mut current = origin;

    while !remaining.is_empty() {
        let mut best = 0;
        let mut best_distance = model.distance_km(current, remaining[0].coordinate);
        for (i, candidate) in remaining.iter().enumerate().skip(1) {
            let d = model.distance_km(current, candidate.coordinate);
            if d < best_distance || (d == best_distance && candidate.id() < remaining[best].id()) {
                best = i;
                best_distance = d;
            }
        }

        let next = remaining.swap_remove(best);
        current = next.coordinate;
        route.push(next);
    }

    route
}

/// 2-opt: Reverse a segment within a route to reduce open-path distance.
/// Returns true if an improvement was made.
fn two_opt_improve<S, M>(route: &mut [RoutedStop<'_, S>], origin: Coordinate, model: &M) -> bool
where
    M: DistanceModel + ?Sized,
{
    let n = route.len();
    if n < 2 {
        return false;
    }

    for i in 0..n - 1 {
        let before = if i == 0 { origin } else { route[i - 1].coordinate };
        for j in i + 1..n {
            let first = route[i].coordinate;
            let last = route[j].coordinate;

            let mut removed = model.distance_km(before, first);
            let mut added = model.distance_km(before, last);
            if j + 1 < n {
                let after = route[j + 1].coordinate;
                removed += model.distance_km(last, after);
                added += model.distance_km(first, after);
            }

            if added + IMPROVEMENT_EPSILON_KM < removed {
                route[i..=j].reverse();
                return true;
            }
        }
    }

    false
}

/// Run 2-opt until no improving reversal remains or `max_iterations` moves
/// have been applied. Returns the number of moves applied.
pub fn two_opt<S, M>(
    route: &mut [RoutedStop<'_, S>],
    origin: Coordinate,
    model: &M,
    max_iterations: usize,
) -> usize
where
    M: DistanceModel + ?Sized,
{
    let mut moves = 0;
    while moves < max_iterations && two_opt_improve(route, origin, model) {
        moves += 1;
    }
    moves
}

/// Open-path length of a sequenced route, origin first.
pub fn route_length_km<S, M>(route: &[RoutedStop<'_, S>], origin: Coordinate, model: &M) -> f64
where
    M: DistanceModel + ?Sized,
{
    path_km(model, origin, route.iter().map(|s| s.coordinate))
}
