//! Cartesian 2D domain - points on a flat plane
//!
//! Coordinates have no physical unit. Distance and length are Euclidean in coordinate
//! units, and speed is coordinate units per second.

use super::{Domain, DomainPoint};
use crate::algorithms::{BaseRepresentation, Distance, Length, SpeedBetween};
use crate::float_compare::almost_zero;
use crate::trajectory::path_length;
use crate::PointCartesian;
use std::fmt;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// The planar domain
#[derive(Debug, Clone, Copy, Default)]
pub struct Cartesian2d;

pub type TrajectoryPoint = crate::TrajectoryPoint<Cartesian2dPoint>;

pub type Trajectory = crate::Trajectory<TrajectoryPoint>;

impl Domain for Cartesian2d {
    const NAME: &'static str = "cartesian2d";

    type BasePoint = Cartesian2dPoint;
    type TrajectoryPoint = TrajectoryPoint;
    type Trajectory = Trajectory;
}

/// Point on an unbounded plane
#[derive(Debug, Clone, Copy, PartialEq, Default)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "serde", serde(transparent))]
pub struct Cartesian2dPoint {
    base: PointCartesian<2>,
}

impl Cartesian2dPoint {
    #[inline]
    pub fn new(x: f64, y: f64) -> Self {
        Self {
            base: PointCartesian::new([x, y]),
        }
    }

    #[inline]
    pub fn x(&self) -> f64 {
        self.base.x()
    }

    #[inline]
    pub fn y(&self) -> f64 {
        self.base.y()
    }
}

impl BaseRepresentation for Cartesian2dPoint {
    type Base = PointCartesian<2>;

    #[inline]
    fn base(&self) -> &PointCartesian<2> {
        &self.base
    }

    #[inline]
    fn from_base(base: PointCartesian<2>) -> Self {
        Self { base }
    }
}

impl From<PointCartesian<2>> for Cartesian2dPoint {
    fn from(base: PointCartesian<2>) -> Self {
        Self { base }
    }
}

impl DomainPoint for Cartesian2dPoint {
    type Domain = Cartesian2d;
}

impl fmt::Display for Cartesian2dPoint {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Display::fmt(&self.base, f)
    }
}

// Plane distances need no unit conversion
crate::delegate_algorithms!(Cartesian2dPoint => [
    distance,
    interpolate,
    extrapolate,
    bearing,
    signed_turn_angle,
    unsigned_turn_angle,
]);

impl SpeedBetween for TrajectoryPoint {
    /// Speed in units per second; `0` when both points share a timestamp
    fn speed_between(&self, to: &Self) -> f64 {
        let seconds_elapsed = (to.timestamp() - self.timestamp()).as_seconds_f64();
        if almost_zero(seconds_elapsed) {
            return 0.0;
        }
        self.distance(to) / seconds_elapsed
    }
}

impl Length for Trajectory {
    fn length(&self) -> f64 {
        path_length(self.iter().map(|p| p.point().base()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::algorithms::{distance, length, point_at_time_fraction, speed_between};
    use time::{Duration, OffsetDateTime};

    fn at(seconds: i64) -> OffsetDateTime {
        OffsetDateTime::UNIX_EPOCH + Duration::seconds(seconds)
    }

    #[test]
    fn test_distance_is_euclidean() {
        let a = Cartesian2dPoint::new(1.0, 1.0);
        let b = Cartesian2dPoint::new(4.0, 5.0);
        assert_eq!(distance(&a, &b), 5.0);
    }

    #[test]
    fn test_speed_units_per_second() {
        let a = TrajectoryPoint::new(Cartesian2dPoint::new(0.0, 0.0), at(0));
        let b = TrajectoryPoint::new(Cartesian2dPoint::new(30.0, 40.0), at(10));
        assert_eq!(speed_between(&a, &b), 5.0);

        let c = TrajectoryPoint::new(Cartesian2dPoint::new(100.0, 0.0), at(0));
        assert_eq!(speed_between(&a, &c), 0.0);
    }

    #[test]
    fn test_length_and_sampling() {
        let trajectory: Trajectory = [(0.0, 0.0), (3.0, 4.0), (3.0, 10.0)]
            .into_iter()
            .enumerate()
            .map(|(i, (x, y))| TrajectoryPoint::new(Cartesian2dPoint::new(x, y), at(i as i64)))
            .collect();

        assert_eq!(length(&trajectory), 11.0);

        let halfway = point_at_time_fraction(&trajectory, 0.5).unwrap();
        assert_eq!(halfway.point(), &Cartesian2dPoint::new(3.0, 4.0));
    }
}
