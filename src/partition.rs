//! Splitting resolved stops between vehicles.
//!
//! Every strategy returns exactly `k` groups that together hold each input
//! stop once. With at least `k` stops no group is empty.

use tracing::trace;

use crate::config::{PartitionStrategy, PlannerConfig};
use crate::geo::Coordinate;
use crate::geocode::RoutedStop;
use crate::haversine::bearing_deg;
use crate::traits::{Delivery, DistanceModel};

pub fn partition<'a, S, M>(
    stops: &[RoutedStop<'a, S>],
    k: usize,
    origin: Coordinate,
    model: &M,
    config: &PlannerConfig,
) -> Vec<Vec<RoutedStop<'a, S>>>
where
    S: Delivery,
    M: DistanceModel + ?Sized,
{
    if k == 0 {
        return Vec::new();
    }

    if stops.len() <= k {
        let mut groups: Vec<Vec<RoutedStop<'a, S>>> = stops.iter().map(|s| vec![*s]).collect();
        groups.resize_with(k, Vec::new);
        return groups;
    }

    match config.strategy {
        PartitionStrategy::Sweep => sweep(stops, k, origin, model),
        PartitionStrategy::Clustered => {
            clustered(stops, k, origin, model, config.max_partition_iterations)
        }
    }
}

/// Group sizes differing by at most one, larger groups first.
fn balanced_sizes(n: usize, k: usize) -> impl Iterator<Item = usize> {
    let base = n / k;
    let remainder = n % k;
    (0..k).map(move |g| base + usize::from(g < remainder))
}

/// Angular sweep around the origin.
///
/// Stops are ordered by bearing, the circle is opened at its widest empty
/// arc, and the resulting sequence is cut into `k` contiguous bands.
pub fn sweep<'a, S, M>(
    stops: &[RoutedStop<'a, S>],
    k: usize,
    origin: Coordinate,
    model: &M,
) -> Vec<Vec<RoutedStop<'a, S>>>
where
    S: Delivery,
    M: DistanceModel + ?Sized,
{
    if k == 0 {
        return Vec::new();
    }

    let mut order: Vec<(RoutedStop<'a, S>, f64, f64)> = stops
        .iter()
        .map(|s| {
            (
                *s,
                bearing_deg(origin, s.coordinate),
                model.distance_km(origin, s.coordinate),
            )
        })
        .collect();

    order.sort_by(|a, b| {
        a.1.total_cmp(&b.1)
            .then_with(|| a.2.total_cmp(&b.2))
            .then_with(|| a.0.id().cmp(b.0.id()))
    });

    let n = order.len();
    let mut start = 0;
    let mut widest = f64::NEG_INFINITY;
    for i in 0..n {
        let here = order[i].1;
        let next = if i + 1 < n { order[i + 1].1 } else { order[0].1 + 360.0 };
        let gap = next - here;
        if gap > widest {
            widest = gap;
            start = (i + 1) % n;
        }
    }
    order.rotate_left(start);
    trace!(start, widest_gap_deg = widest, "sweep opened");

    let mut rest = order.into_iter();
    balanced_sizes(n, k)
        .map(|size| rest.by_ref().take(size).map(|(s, _, _)| s).collect())
        .collect()
}

/// k-means style clustering with farthest-point seeds.
///
/// Ties in assignment go to the group with fewer stops so far, then to the
/// lower group index. Groups left empty after convergence are refilled from
/// the largest group.
pub fn clustered<'a, S, M>(
    stops: &[RoutedStop<'a, S>],
    k: usize,
    origin: Coordinate,
    model: &M,
    max_iterations: usize,
) -> Vec<Vec<RoutedStop<'a, S>>>
where
    S: Delivery,
    M: DistanceModel + ?Sized,
{
    let n = stops.len();
    if k == 0 {
        return Vec::new();
    }
    if n == 0 {
        return vec![Vec::new(); k];
    }

    let mut centers = farthest_point_seeds(stops, k, origin, model);
    let mut assignment = vec![usize::MAX; n];

    for iteration in 0..max_iterations.max(1) {
        let mut counts = vec![0usize; centers.len()];
        let mut changed = false;

        for (i, stop) in stops.iter().enumerate() {
            let mut best = 0;
            let mut best_distance = f64::INFINITY;
            for (g, center) in centers.iter().enumerate() {
                let d = model.distance_km(stop.coordinate, *center);
                let closer = d < best_distance;
                let tie_with_fewer = d == best_distance && counts[g] < counts[best];
                if closer || tie_with_fewer {
                    best = g;
                    best_distance = d;
                }
            }
            counts[best] += 1;
            if assignment[i] != best {
                assignment[i] = best;
                changed = true;
            }
        }

        recompute_centers(stops, &assignment, &mut centers);

        if !changed {
            trace!(iteration, "clustering converged");
            break;
        }
    }

    if n >= k {
        repair_empty_groups(stops, &mut assignment, &mut centers, model);
    }

    let mut groups: Vec<Vec<RoutedStop<'a, S>>> = vec![Vec::new(); k];
    for (stop, &g) in stops.iter().zip(&assignment) {
        groups[g].push(*stop);
    }
    groups
}

/// Pick `k` seed coordinates: the stop farthest from the origin first, then
/// repeatedly the stop farthest from every seed chosen so far.
fn farthest_point_seeds<S, M>(
    stops: &[RoutedStop<'_, S>],
    k: usize,
    origin: Coordinate,
    model: &M,
) -> Vec<Coordinate>
where
    S: Delivery,
    M: DistanceModel + ?Sized,
{
    let mut chosen = vec![false; stops.len()];
    let mut seeds = Vec::with_capacity(k);
    // Distance from each stop to its nearest seed (the origin before any seed exists).
    let mut nearest: Vec<f64> = stops
        .iter()
        .map(|s| model.distance_km(origin, s.coordinate))
        .collect();

    while seeds.len() < k {
        let pick = (0..stops.len())
            .filter(|&i| !chosen[i])
            .max_by(|&a, &b| {
                nearest[a]
                    .total_cmp(&nearest[b])
                    .then_with(|| stops[b].id().cmp(stops[a].id()))
            });

        let Some(pick) = pick else {
            // Fewer stops than seeds: reuse the origin.
            seeds.push(origin);
            continue;
        };

        chosen[pick] = true;
        let seed = stops[pick].coordinate;
        seeds.push(seed);
        for (i, stop) in stops.iter().enumerate() {
            let d = model.distance_km(seed, stop.coordinate);
            if d < nearest[i] || seeds.len() == 1 {
                nearest[i] = d;
            }
        }
    }

    seeds
}

fn recompute_centers<S>(
    stops: &[RoutedStop<'_, S>],
    assignment: &[usize],
    centers: &mut [Coordinate],
) {
    for (g, center) in centers.iter_mut().enumerate() {
        let members = stops
            .iter()
            .zip(assignment)
            .filter(|(_, a)| **a == g)
            .map(|(s, _)| s.coordinate);
        if let Some(centroid) = Coordinate::centroid(members) {
            *center = centroid;
        }
    }
}

fn repair_empty_groups<S, M>(
    stops: &[RoutedStop<'_, S>],
    assignment: &mut [usize],
    centers: &mut [Coordinate],
    model: &M,
) where
    S: Delivery,
    M: DistanceModel + ?Sized,
{
    let k = centers.len();
    loop {
        let mut counts = vec![0usize; k];
        for &g in assignment.iter() {
            counts[g] += 1;
        }

        let Some(empty) = counts.iter().position(|&c| c == 0) else {
            return;
        };

        // Largest group, lower index on ties.
        let largest = (0..k)
            .max_by(|&a, &b| counts[a].cmp(&counts[b]).then_with(|| b.cmp(&a)))
            .unwrap_or(0);
        if counts[largest] < 2 {
            return;
        }

        let donor_center = centers[largest];
        let moved = (0..stops.len())
            .filter(|&i| assignment[i] == largest)
            .max_by(|&a, &b| {
                let da = model.distance_km(stops[a].coordinate, donor_center);
                let db = model.distance_km(stops[b].coordinate, donor_center);
                da.total_cmp(&db)
                    .then_with(|| stops[b].id().cmp(stops[a].id()))
            });

        let Some(moved) = moved else {
            return;
        };
        trace!(from = largest, to = empty, "refilling empty group");
        assignment[moved] = empty;
        centers[empty] = stops[moved].coordinate;
        recompute_centers(stops, assignment, centers);
    }
}

/// Spread of each group around its own centroid, summed.
///
/// A rough dispersion measure for comparing partitions.
pub fn dispersion_km<S, M>(groups: &[Vec<RoutedStop<'_, S>>], model: &M) -> f64
where
    M: DistanceModel + ?Sized,
{
    groups
        .iter()
        .filter_map(|group| {
            let center = Coordinate::centroid(group.iter().map(|s| s.coordinate))?;
            Some(
                group
                    .iter()
                    .map(|s| model.distance_km(s.coordinate, center))
                    .sum::<f64>(),
            )
        })
        .sum()
}
