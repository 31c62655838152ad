//! Straight-line distance models.
//!
//! Great-circle distance is the default. The planar model is cheaper and
//! close enough inside a single city. Neither knows about roads.

use crate::geo::Coordinate;
use crate::traits::DistanceModel;

/// Earth radius in kilometers.
const EARTH_RADIUS_KM: f64 = 6371.0;

/// Great-circle distance on a spherical Earth.
#[derive(Debug, Clone, Copy, Default)]
pub struct Haversine;

impl Haversine {
    /// Calculate haversine distance between two points in kilometers.
    pub fn haversine_km(from: Coordinate, to: Coordinate) -> f64 {
        let lat1_rad = from.lat.to_radians();
        let lat2_rad = to.lat.to_radians();
        let delta_lat = (to.lat - from.lat).to_radians();
        let delta_lng = (to.lng - from.lng).to_radians();

        let a = (delta_lat / 2.0).sin().powi(2)
            + lat1_rad.cos() * lat2_rad.cos() * (delta_lng / 2.0).sin().powi(2);
        // Rounding can push `a` a hair past 1 for antipodal points.
        let c = 2.0 * a.clamp(0.0, 1.0).sqrt().asin();

        EARTH_RADIUS_KM * c
    }
}

impl DistanceModel for Haversine {
    fn distance_km(&self, from: Coordinate, to: Coordinate) -> f64 {
        Self::haversine_km(from, to)
    }
}

/// Equirectangular projection: longitude scaled by the cosine of the mean
/// latitude, then Euclidean distance.
#[derive(Debug, Clone, Copy, Default)]
pub struct Equirectangular;

impl DistanceModel for Equirectangular {
    fn distance_km(&self, from: Coordinate, to: Coordinate) -> f64 {
        let mean_lat = ((from.lat + to.lat) / 2.0).to_radians();
        let x = (to.lng - from.lng).to_radians() * mean_lat.cos();
        let y = (to.lat - from.lat).to_radians();
        EARTH_RADIUS_KM * x.hypot(y)
    }
}

/// Length of the open path origin -> points[0] -> ... -> points[n-1].
///
/// There is no return leg to the origin.
pub fn path_km<M, I>(model: &M, origin: Coordinate, points: I) -> f64
where
    M: DistanceModel + ?Sized,
    I: IntoIterator<Item = Coordinate>,
{
    let mut total = 0.0;
    let mut current = origin;
    for point in points {
        total += model.distance_km(current, point);
        current = point;
    }
    total
}

/// Initial great-circle bearing from `from` to `to`, in degrees `[0, 360)`.
///
/// Coincident points (and the poles) yield 0.
pub fn bearing_deg(from: Coordinate, to: Coordinate) -> f64 {
    let lat1 = from.lat.to_radians();
    let lat2 = to.lat.to_radians();
    let delta_lng = (to.lng - from.lng).to_radians();

    let y = delta_lng.sin() * lat2.cos();
    let x = lat1.cos() * lat2.sin() - lat1.sin() * lat2.cos() * delta_lng.cos();
    let degrees = y.atan2(x).to_degrees();

    let normalized = degrees.rem_euclid(360.0);
    // rem_euclid can return exactly 360.0 for tiny negative inputs.
    if normalized >= 360.0 { 0.0 } else { normalized }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_haversine_same_point() {
        let puerta_del_sol = Coordinate::new(40.4168, -3.7038);
        let d = Haversine.distance_km(puerta_del_sol, puerta_del_sol);
        assert!(d < 0.001, "coincident points should be ~0 km apart, got {d}");
    }

    #[test]
    fn test_haversine_known_distance() {
        // Madrid to Barcelona is ~505 km
        let dist = Haversine.distance_km(
            Coordinate::new(40.4168, -3.7038),
            Coordinate::new(41.3874, 2.1686),
        );
        assert!(dist > 490.0 && dist < 520.0, "Madrid to Barcelona should be ~505km, got {}", dist);
    }

    #[test]
    fn test_haversine_symmetric() {
        let a = Coordinate::new(36.1, -115.1);
        let b = Coordinate::new(36.2, -115.2);
        assert_eq!(Haversine.distance_km(a, b), Haversine.distance_km(b, a));
    }

    #[test]
    fn test_antipodal_points_are_finite() {
        let dist = Haversine.distance_km(Coordinate::new(0.0, 0.0), Coordinate::new(0.0, 180.0));
        assert!(dist.is_finite());
        assert!((dist - std::f64::consts::PI * EARTH_RADIUS_KM).abs() < 1.0);
    }

    #[test]
    fn test_equirectangular_close_to_haversine_in_city() {
        let a = Coordinate::new(40.4168, -3.7038);
        let b = Coordinate::new(40.4530, -3.6883);
        let planar = Equirectangular.distance_km(a, b);
        let sphere = Haversine.distance_km(a, b);
        assert!((planar - sphere).abs() < 0.01, "planar {} vs sphere {}", planar, sphere);
    }

    #[test]
    fn test_path_km_has_no_return_leg() {
        let origin = Coordinate::new(0.0, 0.0);
        let stop = Coordinate::new(0.0, 1.0);
        let one_way = Haversine.distance_km(origin, stop);
        assert_eq!(path_km(&Haversine, origin, [stop]), one_way);
        assert_eq!(path_km(&Haversine, origin, []), 0.0);
    }

    #[test]
    fn test_bearing_cardinal_directions() {
        let origin = Coordinate::new(0.0, 0.0);
        assert!((bearing_deg(origin, Coordinate::new(1.0, 0.0)) - 0.0).abs() < 1e-9);
        assert!((bearing_deg(origin, Coordinate::new(0.0, 1.0)) - 90.0).abs() < 1e-9);
        assert!((bearing_deg(origin, Coordinate::new(-1.0, 0.0)) - 180.0).abs() < 1e-9);
        assert!((bearing_deg(origin, Coordinate::new(0.0, -1.0)) - 270.0).abs() < 1e-9);
    }

    #[test]
    fn test_bearing_of_coincident_points() {
        let p = Coordinate::new(40.0, -3.0);
        assert_eq!(bearing_deg(p, p), 0.0);
    }
}
