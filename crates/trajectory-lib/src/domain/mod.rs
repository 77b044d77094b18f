//! Domains: unit conventions and algorithm overrides for one physical interpretation
//!
//! A domain names a base point type, a trajectory point type and a trajectory type.
//! The bounds on [`Domain`]'s associated types list every algorithm a domain must
//! provide, so registering a domain whose types leave an algorithm unresolved fails
//! to compile.
//!
//! Each domain point type picks its overrides explicitly and forwards the rest to its
//! base representation with [`delegate_algorithms!`](crate::delegate_algorithms):
//!
//! | Domain | Distance | Speed | Length | Everything else |
//! |---|---|---|---|---|
//! | [`terrestrial`] | km (great circle) | km/h | km | [`PointLonLat`](crate::PointLonLat) |
//! | [`cartesian2d`] | units | units/s | units | [`PointCartesian<2>`](crate::PointCartesian) |

pub mod cartesian2d;
pub mod terrestrial;

use crate::algorithms::{
    Bearing, Distance, Extrapolate, Interpolate, Length, PointAtLengthFraction, PointAtTime,
    PointAtTimeFraction, SignedTurnAngle, SpeedBetween, Timestamped, UnsignedTurnAngle,
};
use std::fmt;

pub use cartesian2d::Cartesian2d;
pub use terrestrial::Terrestrial;

/// Registration of a domain's types
pub trait Domain: Sized + 'static {
    /// Human readable domain name
    const NAME: &'static str;

    type BasePoint: DomainPoint<Domain = Self>
        + Distance
        + Interpolate
        + Extrapolate
        + Bearing
        + SignedTurnAngle
        + UnsignedTurnAngle
        + Clone
        + fmt::Display;

    type TrajectoryPoint: DomainPoint<Domain = Self>
        + Distance
        + SpeedBetween
        + Interpolate
        + Extrapolate
        + Bearing
        + SignedTurnAngle
        + UnsignedTurnAngle
        + Timestamped
        + Clone
        + fmt::Display;

    type Trajectory: Length
        + PointAtTime<Point = Self::TrajectoryPoint>
        + PointAtTimeFraction<Point = Self::TrajectoryPoint>
        + PointAtLengthFraction<Point = Self::TrajectoryPoint>
        + FromIterator<Self::TrajectoryPoint>;
}

/// Tags a point type with the domain it belongs to
pub trait DomainPoint {
    type Domain: Domain;
}

impl<P: DomainPoint> DomainPoint for crate::TrajectoryPoint<P> {
    type Domain = P::Domain;
}

/// Name of the domain a point belongs to
pub fn domain_name<P: DomainPoint>(_point: &P) -> &'static str {
    <P::Domain as Domain>::NAME
}
