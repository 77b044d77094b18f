//! Geometry primitives for the base point representations
//!
//! Measurements come from `geo` metric spaces. Spherical ones run on a sphere of
//! radius 1 so distances are central angles in radians. Turn angles and angle
//! normalization are not covered by `geo` and are composed here from its bearings.

use crate::float_compare::almost_zero_within;
use geo::{Bearing, Destination, Distance, Euclidean, HaversineMeasure, InterpolatePoint, Point};

/// Below this central angle (radians) two points are treated as coincident
const COINCIDENT_RADIANS: f64 = 1e-12;

/// Haversine measurements on the unit sphere
#[inline]
fn unit_sphere() -> HaversineMeasure {
    HaversineMeasure::new(1.0)
}

// ----------------------------------------------------------------------------
// Spherical (x = longitude, y = latitude, degrees)
// ----------------------------------------------------------------------------

/// Great-circle distance in radians
#[inline]
pub fn spherical_distance(a: Point<f64>, b: Point<f64>) -> f64 {
    unit_sphere().distance(a, b)
}

/// Initial compass bearing from `a` to `b`, in degrees `[0, 360)`
#[inline]
pub fn spherical_bearing(a: Point<f64>, b: Point<f64>) -> f64 {
    unit_sphere().bearing(a, b).rem_euclid(360.0)
}

/// Point along the great circle through `a` (`t = 0`) and `b` (`t = 1`)
///
/// Values of `t` outside `[0, 1]` keep travelling along the same great circle.
/// Coincident points yield `a`. Antipodal points have no unique great circle; the
/// nearer endpoint is returned.
pub fn spherical_interpolate(a: Point<f64>, b: Point<f64>, t: f64) -> Point<f64> {
    let angle = spherical_distance(a, b);
    if almost_zero_within(angle, COINCIDENT_RADIANS) {
        return a;
    }
    if almost_zero_within(angle.sin(), COINCIDENT_RADIANS) {
        return if t < 0.5 { a } else { b };
    }

    if (0.0..=1.0).contains(&t) {
        unit_sphere().point_at_ratio_between(a, b, t)
    } else {
        // Past either endpoint: walk the initial great circle, backwards when t < 0
        unit_sphere().destination(a, spherical_bearing(a, b), t * angle)
    }
}

/// Signed turn angle at `b` for `a -> b -> c` on the sphere, counterclockwise positive
pub fn spherical_signed_turn_angle(a: Point<f64>, b: Point<f64>, c: Point<f64>) -> f64 {
    let incoming = spherical_bearing(a, b);
    let outgoing = spherical_bearing(b, c);
    // Compass bearings grow clockwise
    normalize_degrees(incoming - outgoing)
}

// ----------------------------------------------------------------------------
// Planar
// ----------------------------------------------------------------------------

#[inline]
pub fn planar_distance(a: Point<f64>, b: Point<f64>) -> f64 {
    Euclidean.distance(a, b)
}

/// Point on the line through `a` (`t = 0`) and `b` (`t = 1`); any `t` is accepted
#[inline]
pub fn planar_interpolate(a: Point<f64>, b: Point<f64>, t: f64) -> Point<f64> {
    if (0.0..=1.0).contains(&t) {
        Euclidean.point_at_ratio_between(a, b, t)
    } else {
        a + (b - a) * t
    }
}

/// Heading of the vector from `a` to `b`, counterclockwise from +x, in degrees
/// `(-180, 180]`
#[inline]
pub fn planar_heading(a: Point<f64>, b: Point<f64>) -> f64 {
    let delta = b - a;
    delta.y().atan2(delta.x()).to_degrees()
}

/// Signed turn angle at `b` for `a -> b -> c`, counterclockwise positive
pub fn planar_signed_turn_angle(a: Point<f64>, b: Point<f64>, c: Point<f64>) -> f64 {
    // (b - a) x (c - a) equals (b - a) x (c - b)
    let cross = a.cross_prod(b, c);
    let dot = (b - a).dot(c - b);
    normalize_degrees(cross.atan2(dot).to_degrees())
}

/// Map an angle in degrees into `(-180, 180]`
#[inline]
pub fn normalize_degrees(angle: f64) -> f64 {
    let wrapped = (angle + 180.0).rem_euclid(360.0) - 180.0;
    if wrapped == -180.0 { 180.0 } else { wrapped }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn lon_lat(lon: f64, lat: f64) -> Point<f64> {
        Point::new(lon, lat)
    }

    #[test]
    fn test_spherical_distance_quarter_circle() {
        let d = spherical_distance(lon_lat(0.0, 0.0), lon_lat(90.0, 0.0));
        assert!((d - std::f64::consts::FRAC_PI_2).abs() < 1e-12);

        let d = spherical_distance(lon_lat(0.0, 0.0), lon_lat(0.0, 90.0));
        assert!((d - std::f64::consts::FRAC_PI_2).abs() < 1e-12);
    }

    #[test]
    fn test_spherical_distance_coincident() {
        assert_eq!(spherical_distance(lon_lat(12.3, 45.6), lon_lat(12.3, 45.6)), 0.0);
    }

    #[test]
    fn test_spherical_interpolate_midpoint_on_equator() {
        let mid = spherical_interpolate(lon_lat(0.0, 0.0), lon_lat(90.0, 0.0), 0.5);
        assert!((mid.x() - 45.0).abs() < 1e-9);
        assert!(mid.y().abs() < 1e-9);
    }

    #[test]
    fn test_spherical_interpolate_endpoints() {
        let (a, b) = (lon_lat(-10.0, 20.0), lon_lat(30.0, 40.0));
        let start = spherical_interpolate(a, b, 0.0);
        assert!((start.x() + 10.0).abs() < 1e-9 && (start.y() - 20.0).abs() < 1e-9);
        let end = spherical_interpolate(a, b, 1.0);
        assert!((end.x() - 30.0).abs() < 1e-9 && (end.y() - 40.0).abs() < 1e-9);
    }

    #[test]
    fn test_spherical_extrapolate_beyond_both_ends() {
        let (a, b) = (lon_lat(0.0, 0.0), lon_lat(10.0, 0.0));

        let ahead = spherical_interpolate(a, b, 2.0);
        assert!((ahead.x() - 20.0).abs() < 1e-9);
        assert!(ahead.y().abs() < 1e-9);

        let behind = spherical_interpolate(a, b, -0.5);
        assert!((behind.x() + 5.0).abs() < 1e-9);
        assert!(behind.y().abs() < 1e-9);
    }

    #[test]
    fn test_spherical_interpolate_coincident_points() {
        let p = lon_lat(3.0, 4.0);
        assert_eq!(spherical_interpolate(p, p, 0.7), p);
    }

    #[test]
    fn test_spherical_bearing_cardinal() {
        let origin = lon_lat(0.0, 0.0);
        assert!(spherical_bearing(origin, lon_lat(0.0, 1.0)).abs() < 1e-9);
        assert!((spherical_bearing(origin, lon_lat(1.0, 0.0)) - 90.0).abs() < 1e-9);
        assert!((spherical_bearing(lon_lat(0.0, 1.0), origin) - 180.0).abs() < 1e-9);
        assert!((spherical_bearing(lon_lat(1.0, 0.0), origin) - 270.0).abs() < 1e-9);
    }

    #[test]
    fn test_spherical_turn_left_is_positive() {
        // North then west
        let angle =
            spherical_signed_turn_angle(lon_lat(0.0, 0.0), lon_lat(0.0, 1.0), lon_lat(-1.0, 1.0));
        assert!((angle - 90.0).abs() < 0.1, "got {angle}");
    }

    #[test]
    fn test_planar_distance_and_interpolation() {
        let (a, b) = (Point::new(0.0, 0.0), Point::new(3.0, 4.0));
        assert_eq!(planar_distance(a, b), 5.0);
        assert_eq!(planar_interpolate(a, b, 0.5), Point::new(1.5, 2.0));
        assert_eq!(planar_interpolate(a, b, 2.0), Point::new(6.0, 8.0));
        assert_eq!(planar_interpolate(a, b, -1.0), Point::new(-3.0, -4.0));
    }

    #[test]
    fn test_planar_heading() {
        let origin = Point::new(0.0, 0.0);
        assert!((planar_heading(origin, Point::new(0.0, 1.0)) - 90.0).abs() < 1e-12);
        assert!((planar_heading(origin, Point::new(-1.0, 0.0)) - 180.0).abs() < 1e-12);
    }

    #[test]
    fn test_planar_turn_angles() {
        let (a, b) = (Point::new(0.0, 0.0), Point::new(1.0, 0.0));
        let left = planar_signed_turn_angle(a, b, Point::new(1.0, 1.0));
        assert!((left - 90.0).abs() < 1e-9);
        let right = planar_signed_turn_angle(a, b, Point::new(1.0, -1.0));
        assert!((right + 90.0).abs() < 1e-9);
        let straight = planar_signed_turn_angle(a, b, Point::new(2.0, 0.0));
        assert!(straight.abs() < 1e-9);
    }

    #[test]
    fn test_normalize_degrees() {
        assert_eq!(normalize_degrees(190.0), -170.0);
        assert_eq!(normalize_degrees(-180.0), 180.0);
        assert_eq!(normalize_degrees(540.0), 180.0);
        assert_eq!(normalize_degrees(45.0), 45.0);
    }
}
