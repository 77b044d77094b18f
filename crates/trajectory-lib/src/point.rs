//! Base point representations
//!
//! [`PointLonLat`] lives on the unit sphere and measures distance in radians;
//! [`PointCartesian`] lives in flat space and measures plain Euclidean units; its
//! algorithms exist in two dimensions. Domain point types wrap one of these and
//! decide which algorithms to keep.

use crate::algorithms::{
    Bearing, Distance, Extrapolate, Interpolate, SignedTurnAngle, SphericalCoordinates,
    UnsignedTurnAngle,
};
use crate::primitives;
use std::fmt;
use std::ops::{Index, IndexMut};

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// Point on a sphere, in degrees of longitude (x) and latitude (y)
#[derive(Debug, Clone, Copy, PartialEq, Default)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct PointLonLat {
    point: geo::Point<f64>,
}

impl PointLonLat {
    /// Create a new point from longitude and latitude in degrees
    #[inline]
    pub fn new(longitude: f64, latitude: f64) -> Self {
        Self {
            point: geo::Point::new(longitude, latitude),
        }
    }

    #[inline]
    pub fn longitude(&self) -> f64 {
        self.point.x()
    }

    #[inline]
    pub fn latitude(&self) -> f64 {
        self.point.y()
    }

    #[inline]
    pub fn set_longitude(&mut self, longitude: f64) {
        self.point = geo::Point::new(longitude, self.latitude());
    }

    #[inline]
    pub fn set_latitude(&mut self, latitude: f64) {
        self.point = geo::Point::new(self.longitude(), latitude);
    }

    /// View as a `geo` point (x = longitude, y = latitude)
    #[inline]
    pub fn as_geo(&self) -> geo::Point<f64> {
        self.point
    }

    /// Both coordinates are finite numbers
    #[inline]
    pub fn is_finite(&self) -> bool {
        self.longitude().is_finite() && self.latitude().is_finite()
    }
}

impl From<geo::Point<f64>> for PointLonLat {
    fn from(point: geo::Point<f64>) -> Self {
        Self { point }
    }
}

impl From<PointLonLat> for geo::Point<f64> {
    fn from(point: PointLonLat) -> Self {
        point.point
    }
}

impl fmt::Display for PointLonLat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({}, {})", self.longitude(), self.latitude())
    }
}

impl Distance for PointLonLat {
    /// Great-circle distance in radians
    #[inline]
    fn distance(&self, other: &Self) -> f64 {
        primitives::spherical_distance(self.point, other.point)
    }
}

impl Interpolate for PointLonLat {
    #[inline]
    fn interpolate(&self, other: &Self, t: f64) -> Self {
        primitives::spherical_interpolate(self.point, other.point, t).into()
    }
}

impl Extrapolate for PointLonLat {
    #[inline]
    fn extrapolate(&self, other: &Self, t: f64) -> Self {
        // The great-circle walk extends past both endpoints
        self.interpolate(other, t)
    }
}

impl Bearing for PointLonLat {
    /// Compass bearing in degrees `[0, 360)`, clockwise from north
    #[inline]
    fn bearing(&self, to: &Self) -> f64 {
        primitives::spherical_bearing(self.point, to.point)
    }
}

impl SignedTurnAngle for PointLonLat {
    fn signed_turn_angle(a: &Self, b: &Self, c: &Self) -> f64 {
        primitives::spherical_signed_turn_angle(a.point, b.point, c.point)
    }
}

impl UnsignedTurnAngle for PointLonLat {
    fn unsigned_turn_angle(a: &Self, b: &Self, c: &Self) -> f64 {
        Self::signed_turn_angle(a, b, c).abs()
    }
}

impl SphericalCoordinates for PointLonLat {
    #[inline]
    fn longitude(&self) -> f64 {
        PointLonLat::longitude(self)
    }

    #[inline]
    fn latitude(&self) -> f64 {
        PointLonLat::latitude(self)
    }
}

/// Point in `D`-dimensional flat space
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PointCartesian<const D: usize> {
    coordinates: [f64; D],
}

impl<const D: usize> PointCartesian<D> {
    #[inline]
    pub fn new(coordinates: [f64; D]) -> Self {
        Self { coordinates }
    }

    #[inline]
    pub fn coordinates(&self) -> &[f64; D] {
        &self.coordinates
    }

    /// Number of coordinates
    #[inline]
    pub const fn dimension(&self) -> usize {
        D
    }
}

impl PointCartesian<2> {
    #[inline]
    pub fn x(&self) -> f64 {
        self.coordinates[0]
    }

    #[inline]
    pub fn y(&self) -> f64 {
        self.coordinates[1]
    }

    /// View as a `geo` point
    #[inline]
    pub fn as_geo(&self) -> geo::Point<f64> {
        geo::Point::new(self.x(), self.y())
    }
}

impl PointCartesian<3> {
    #[inline]
    pub fn x(&self) -> f64 {
        self.coordinates[0]
    }

    #[inline]
    pub fn y(&self) -> f64 {
        self.coordinates[1]
    }

    #[inline]
    pub fn z(&self) -> f64 {
        self.coordinates[2]
    }
}

impl<const D: usize> Default for PointCartesian<D> {
    fn default() -> Self {
        Self {
            coordinates: [0.0; D],
        }
    }
}

impl<const D: usize> From<[f64; D]> for PointCartesian<D> {
    fn from(coordinates: [f64; D]) -> Self {
        Self { coordinates }
    }
}

impl From<geo::Point<f64>> for PointCartesian<2> {
    fn from(point: geo::Point<f64>) -> Self {
        Self::new([point.x(), point.y()])
    }
}

impl<const D: usize> Index<usize> for PointCartesian<D> {
    type Output = f64;

    fn index(&self, index: usize) -> &f64 {
        &self.coordinates[index]
    }
}

impl<const D: usize> IndexMut<usize> for PointCartesian<D> {
    fn index_mut(&mut self, index: usize) -> &mut f64 {
        &mut self.coordinates[index]
    }
}

impl<const D: usize> fmt::Display for PointCartesian<D> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("(")?;
        for (i, value) in self.coordinates.iter().enumerate() {
            if i > 0 {
                f.write_str(", ")?;
            }
            write!(f, "{value}")?;
        }
        f.write_str(")")
    }
}

// Serde's array support does not cover const generic lengths
#[cfg(feature = "serde")]
impl<const D: usize> Serialize for PointCartesian<D> {
    fn serialize<S: serde::Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_seq(self.coordinates.iter())
    }
}

#[cfg(feature = "serde")]
impl<'de, const D: usize> Deserialize<'de> for PointCartesian<D> {
    fn deserialize<De: serde::Deserializer<'de>>(deserializer: De) -> Result<Self, De::Error> {
        let values = Vec::<f64>::deserialize(deserializer)?;
        let len = values.len();
        let coordinates: [f64; D] = values.try_into().map_err(|_| {
            serde::de::Error::invalid_length(len, &format!("{D} coordinates").as_str())
        })?;
        Ok(Self { coordinates })
    }
}

// Algorithms are only defined on the plane; other dimensions carry coordinates
// such as ECEF output.

impl Distance for PointCartesian<2> {
    /// Euclidean distance
    #[inline]
    fn distance(&self, other: &Self) -> f64 {
        primitives::planar_distance(self.as_geo(), other.as_geo())
    }
}

impl Interpolate for PointCartesian<2> {
    #[inline]
    fn interpolate(&self, other: &Self, t: f64) -> Self {
        primitives::planar_interpolate(self.as_geo(), other.as_geo(), t).into()
    }
}

impl Extrapolate for PointCartesian<2> {
    #[inline]
    fn extrapolate(&self, other: &Self, t: f64) -> Self {
        self.interpolate(other, t)
    }
}

impl Bearing for PointCartesian<2> {
    /// Angle counterclockwise from the +x axis, in degrees `(-180, 180]`
    #[inline]
    fn bearing(&self, to: &Self) -> f64 {
        primitives::planar_heading(self.as_geo(), to.as_geo())
    }
}

impl SignedTurnAngle for PointCartesian<2> {
    fn signed_turn_angle(a: &Self, b: &Self, c: &Self) -> f64 {
        primitives::planar_signed_turn_angle(a.as_geo(), b.as_geo(), c.as_geo())
    }
}

impl UnsignedTurnAngle for PointCartesian<2> {
    fn unsigned_turn_angle(a: &Self, b: &Self, c: &Self) -> f64 {
        Self::signed_turn_angle(a, b, c).abs()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::algorithms::{bearing, distance, extrapolate, interpolate, unsigned_turn_angle};

    #[test]
    fn test_lon_lat_accessors() {
        let mut point = PointLonLat::new(-0.1278, 51.5074);
        assert_eq!(point.longitude(), -0.1278);
        assert_eq!(point.latitude(), 51.5074);

        point.set_longitude(2.35);
        point.set_latitude(48.85);
        assert_eq!(point.as_geo(), geo::Point::new(2.35, 48.85));
    }

    #[test]
    fn test_lon_lat_distance_is_radians() {
        let a = PointLonLat::new(0.0, 0.0);
        let b = PointLonLat::new(0.0, 1.0);
        assert!((distance(&a, &b) - 1.0_f64.to_radians()).abs() < 1e-12);
    }

    #[test]
    fn test_lon_lat_interpolate_and_extrapolate() {
        let a = PointLonLat::new(0.0, 0.0);
        let b = PointLonLat::new(10.0, 0.0);
        let mid = interpolate(&a, &b, 0.5);
        assert!((mid.longitude() - 5.0).abs() < 1e-9);

        let beyond = extrapolate(&a, &b, 1.5);
        assert!((beyond.longitude() - 15.0).abs() < 1e-9);
    }

    #[test]
    fn test_lon_lat_display() {
        assert_eq!(PointLonLat::new(1.5, -2.0).to_string(), "(1.5, -2)");
    }

    #[test]
    fn test_cartesian_algorithms() {
        let a = PointCartesian::new([0.0, 0.0]);
        let b = PointCartesian::new([3.0, 4.0]);
        assert_eq!(distance(&a, &b), 5.0);
        assert_eq!(interpolate(&a, &b, 0.5), PointCartesian::new([1.5, 2.0]));
        assert_eq!(extrapolate(&a, &b, 2.0), PointCartesian::new([6.0, 8.0]));
        assert!((bearing(&a, &PointCartesian::new([0.0, 1.0])) - 90.0).abs() < 1e-12);

        let c = PointCartesian::new([3.0, 0.0]);
        let angle = unsigned_turn_angle(&a, &PointCartesian::new([1.0, 0.0]), &c);
        assert!(angle.abs() < 1e-12);
    }

    #[test]
    fn test_cartesian_3d_accessors_and_display() {
        let mut point = PointCartesian::new([1.0, 2.0, 3.0]);
        assert_eq!((point.x(), point.y(), point.z()), (1.0, 2.0, 3.0));
        point[2] = 4.5;
        assert_eq!(point.dimension(), 3);
        assert_eq!(point.to_string(), "(1, 2, 4.5)");
    }
}
