//! Algorithm signatures and driver functions
//!
//! Every algorithm is a trait with no default body. A point or trajectory type gains
//! an algorithm by implementing its trait, either directly (an override with its own
//! units) or through [`delegate_algorithms!`](crate::delegate_algorithms), which
//! forwards to the base representation the type wraps.
//!
//! Calling code only uses the driver functions in this module. Resolution happens at
//! compile time through trait bounds: asking for an algorithm a type does not have is
//! a build error that names the missing algorithm and the offending type, never a
//! silent default. Two competing implementations for the same type are rejected by
//! trait coherence.
//!
//! ```compile_fail
//! use time::OffsetDateTime;
//! use trajectory_lib::algorithms::speed_between;
//! use trajectory_lib::{PointLonLat, TrajectoryPoint};
//!
//! // Bare longitude/latitude points have no unit convention for speed: only domains
//! // define it, so this does not compile.
//! let a = TrajectoryPoint::new(PointLonLat::new(0.0, 0.0), OffsetDateTime::UNIX_EPOCH);
//! speed_between(&a, &a);
//! ```

use time::OffsetDateTime;

/// Distance between two geometries, in the units of their domain
///
/// Commutative, and zero for coincident points.
#[diagnostic::on_unimplemented(
    message = "distance is not implemented for `{Self}` and `{Rhs}`",
    label = "no distance algorithm for this type",
    note = "implement `Distance` for the type or delegate it to its base representation"
)]
pub trait Distance<Rhs: ?Sized = Self> {
    fn distance(&self, other: &Rhs) -> f64;
}

/// Speed when moving from one timestamped point to another
///
/// No chronological order is enforced: when `to` precedes `self` the elapsed time is
/// negative and so is the speed. Callers that need a magnitude must order their
/// points or take the absolute value.
#[diagnostic::on_unimplemented(
    message = "speed_between is not implemented for `{Self}`",
    label = "no speed algorithm for this point type",
    note = "speed only exists for timestamped points of a domain that defines its units"
)]
pub trait SpeedBetween {
    fn speed_between(&self, to: &Self) -> f64;
}

/// Length of a path, in the units of its domain
#[diagnostic::on_unimplemented(
    message = "length is not implemented for `{Self}`",
    label = "no length algorithm for this path type"
)]
pub trait Length {
    fn length(&self) -> f64;
}

/// Point along a path at a specific timestamp
#[diagnostic::on_unimplemented(
    message = "point_at_time is not implemented for `{Self}`",
    label = "no point-at-time algorithm for this trajectory type"
)]
pub trait PointAtTime {
    type Point;

    fn point_at_time(&self, when: OffsetDateTime) -> Option<Self::Point>;
}

/// Point along a path at a fraction of its duration
#[diagnostic::on_unimplemented(
    message = "point_at_time_fraction is not implemented for `{Self}`",
    label = "no point-at-time-fraction algorithm for this trajectory type"
)]
pub trait PointAtTimeFraction {
    type Point;

    fn point_at_time_fraction(&self, fraction: f64) -> Option<Self::Point>;
}

/// Point along a path at a fraction of its length
#[diagnostic::on_unimplemented(
    message = "point_at_length_fraction is not implemented for `{Self}`",
    label = "no point-at-length-fraction algorithm for this trajectory type"
)]
pub trait PointAtLengthFraction {
    type Point;

    fn point_at_length_fraction(&self, fraction: f64) -> Option<Self::Point>;
}

/// Point between `self` (`t = 0`) and `other` (`t = 1`)
#[diagnostic::on_unimplemented(
    message = "interpolate is not implemented for `{Self}`",
    label = "no interpolation algorithm for this type"
)]
pub trait Interpolate: Sized {
    fn interpolate(&self, other: &Self, t: f64) -> Self;
}

/// Like [`Interpolate`] but meant for `t` outside `[0, 1]`
#[diagnostic::on_unimplemented(
    message = "extrapolate is not implemented for `{Self}`",
    label = "no extrapolation algorithm for this type"
)]
pub trait Extrapolate: Sized {
    fn extrapolate(&self, other: &Self, t: f64) -> Self;
}

/// Direction of travel from `self` towards `to`, in degrees
#[diagnostic::on_unimplemented(
    message = "bearing is not implemented for `{Self}`",
    label = "no bearing algorithm for this type"
)]
pub trait Bearing {
    fn bearing(&self, to: &Self) -> f64;
}

/// Turn angle at `b` when travelling `a -> b -> c`, in degrees within `(-180, 180]`
///
/// Counterclockwise (left) turns are positive.
#[diagnostic::on_unimplemented(
    message = "signed_turn_angle is not implemented for `{Self}`",
    label = "no signed turn angle algorithm for this type"
)]
pub trait SignedTurnAngle {
    fn signed_turn_angle(a: &Self, b: &Self, c: &Self) -> f64;
}

/// Magnitude of the turn angle at `b`, in degrees within `[0, 180]`
#[diagnostic::on_unimplemented(
    message = "unsigned_turn_angle is not implemented for `{Self}`",
    label = "no unsigned turn angle algorithm for this type"
)]
pub trait UnsignedTurnAngle {
    fn unsigned_turn_angle(a: &Self, b: &Self, c: &Self) -> f64;
}

/// Longitude/latitude access for points on a sphere
#[diagnostic::on_unimplemented(
    message = "spherical coordinate access is not implemented for `{Self}`",
    label = "this point does not live on a sphere"
)]
pub trait SphericalCoordinates {
    /// Longitude in degrees
    fn longitude(&self) -> f64;
    /// Latitude in degrees
    fn latitude(&self) -> f64;
}

/// Timestamp access for points that carry one
pub trait Timestamped {
    fn timestamp(&self) -> OffsetDateTime;
}

/// Thin wrapper around a base point representation
///
/// Domain point types implement this and then pick, algorithm by algorithm, whether
/// to override or to forward to the base with
/// [`delegate_algorithms!`](crate::delegate_algorithms).
pub trait BaseRepresentation: Sized {
    type Base;

    fn base(&self) -> &Self::Base;

    fn from_base(base: Self::Base) -> Self;
}

/// Forward the listed algorithms of a [`BaseRepresentation`] to its base
///
/// Supported algorithm names: `distance`, `interpolate`, `extrapolate`, `bearing`,
/// `signed_turn_angle`, `unsigned_turn_angle`, `spherical_coordinates`.
///
/// ```ignore
/// delegate_algorithms!(MyPoint => [interpolate, extrapolate, bearing]);
/// ```
#[macro_export]
macro_rules! delegate_algorithms {
    (@impl distance, $ty:ty) => {
        impl $crate::algorithms::Distance for $ty {
            #[inline]
            fn distance(&self, other: &Self) -> f64 {
                $crate::algorithms::Distance::distance(
                    $crate::algorithms::BaseRepresentation::base(self),
                    $crate::algorithms::BaseRepresentation::base(other),
                )
            }
        }
    };
    (@impl interpolate, $ty:ty) => {
        impl $crate::algorithms::Interpolate for $ty {
            #[inline]
            fn interpolate(&self, other: &Self, t: f64) -> Self {
                <$ty as $crate::algorithms::BaseRepresentation>::from_base(
                    $crate::algorithms::Interpolate::interpolate(
                        $crate::algorithms::BaseRepresentation::base(self),
                        $crate::algorithms::BaseRepresentation::base(other),
                        t,
                    ),
                )
            }
        }
    };
    (@impl extrapolate, $ty:ty) => {
        impl $crate::algorithms::Extrapolate for $ty {
            #[inline]
            fn extrapolate(&self, other: &Self, t: f64) -> Self {
                <$ty as $crate::algorithms::BaseRepresentation>::from_base(
                    $crate::algorithms::Extrapolate::extrapolate(
                        $crate::algorithms::BaseRepresentation::base(self),
                        $crate::algorithms::BaseRepresentation::base(other),
                        t,
                    ),
                )
            }
        }
    };
    (@impl bearing, $ty:ty) => {
        impl $crate::algorithms::Bearing for $ty {
            #[inline]
            fn bearing(&self, to: &Self) -> f64 {
                $crate::algorithms::Bearing::bearing(
                    $crate::algorithms::BaseRepresentation::base(self),
                    $crate::algorithms::BaseRepresentation::base(to),
                )
            }
        }
    };
    (@impl signed_turn_angle, $ty:ty) => {
        impl $crate::algorithms::SignedTurnAngle for $ty {
            #[inline]
            fn signed_turn_angle(a: &Self, b: &Self, c: &Self) -> f64 {
                $crate::algorithms::SignedTurnAngle::signed_turn_angle(
                    $crate::algorithms::BaseRepresentation::base(a),
                    $crate::algorithms::BaseRepresentation::base(b),
                    $crate::algorithms::BaseRepresentation::base(c),
                )
            }
        }
    };
    (@impl unsigned_turn_angle, $ty:ty) => {
        impl $crate::algorithms::UnsignedTurnAngle for $ty {
            #[inline]
            fn unsigned_turn_angle(a: &Self, b: &Self, c: &Self) -> f64 {
                $crate::algorithms::UnsignedTurnAngle::unsigned_turn_angle(
                    $crate::algorithms::BaseRepresentation::base(a),
                    $crate::algorithms::BaseRepresentation::base(b),
                    $crate::algorithms::BaseRepresentation::base(c),
                )
            }
        }
    };
    (@impl spherical_coordinates, $ty:ty) => {
        impl $crate::algorithms::SphericalCoordinates for $ty {
            #[inline]
            fn longitude(&self) -> f64 {
                $crate::algorithms::SphericalCoordinates::longitude(
                    $crate::algorithms::BaseRepresentation::base(self),
                )
            }

            #[inline]
            fn latitude(&self) -> f64 {
                $crate::algorithms::SphericalCoordinates::latitude(
                    $crate::algorithms::BaseRepresentation::base(self),
                )
            }
        }
    };
    ($ty:ty => [$($algorithm:ident),* $(,)?]) => {
        $( $crate::delegate_algorithms!(@impl $algorithm, $ty); )*
    };
}

// ----------------------------------------------------------------------------
// Driver functions
// ----------------------------------------------------------------------------

/// Distance between `from` and `to` in the units of their domain
#[inline]
pub fn distance<A, B>(from: &A, to: &B) -> f64
where
    A: Distance<B> + ?Sized,
    B: ?Sized,
{
    from.distance(to)
}

/// Speed between two timestamped points in the units of their domain
#[inline]
pub fn speed_between<T: SpeedBetween>(from: &T, to: &T) -> f64 {
    from.speed_between(to)
}

/// Length of a path in the units of its domain
#[inline]
pub fn length<T: Length + ?Sized>(path: &T) -> f64 {
    path.length()
}

/// Point on `path` at timestamp `when`
#[inline]
pub fn point_at_time<T: PointAtTime>(path: &T, when: OffsetDateTime) -> Option<T::Point> {
    path.point_at_time(when)
}

/// Point on `path` at `fraction` of its duration
#[inline]
pub fn point_at_time_fraction<T: PointAtTimeFraction>(path: &T, fraction: f64) -> Option<T::Point> {
    path.point_at_time_fraction(fraction)
}

/// Point on `path` at `fraction` of its length
#[inline]
pub fn point_at_length_fraction<T: PointAtLengthFraction>(
    path: &T,
    fraction: f64,
) -> Option<T::Point> {
    path.point_at_length_fraction(fraction)
}

#[inline]
pub fn interpolate<T: Interpolate>(start: &T, end: &T, t: f64) -> T {
    start.interpolate(end, t)
}

#[inline]
pub fn extrapolate<T: Extrapolate>(start: &T, end: &T, t: f64) -> T {
    start.extrapolate(end, t)
}

#[inline]
pub fn bearing<T: Bearing>(from: &T, to: &T) -> f64 {
    from.bearing(to)
}

#[inline]
pub fn signed_turn_angle<T: SignedTurnAngle>(a: &T, b: &T, c: &T) -> f64 {
    T::signed_turn_angle(a, b, c)
}

#[inline]
pub fn unsigned_turn_angle<T: UnsignedTurnAngle>(a: &T, b: &T, c: &T) -> f64 {
    T::unsigned_turn_angle(a, b, c)
}

#[cfg(test)]
mod tests {
    use super::*;

    /// Minimal base representation to exercise delegation in isolation
    #[derive(Debug, Clone, Copy, PartialEq)]
    struct Scalar(f64);

    impl Distance for Scalar {
        fn distance(&self, other: &Self) -> f64 {
            (self.0 - other.0).abs()
        }
    }

    impl Interpolate for Scalar {
        fn interpolate(&self, other: &Self, t: f64) -> Self {
            Scalar(self.0 + (other.0 - self.0) * t)
        }
    }

    /// Wrapper that doubles distances but keeps the base interpolation
    #[derive(Debug, Clone, Copy, PartialEq)]
    struct Doubled(Scalar);

    impl BaseRepresentation for Doubled {
        type Base = Scalar;

        fn base(&self) -> &Scalar {
            &self.0
        }

        fn from_base(base: Scalar) -> Self {
            Doubled(base)
        }
    }

    impl Distance for Doubled {
        fn distance(&self, other: &Self) -> f64 {
            2.0 * distance(&self.0, &other.0)
        }
    }

    crate::delegate_algorithms!(Doubled => [interpolate]);

    #[test]
    fn test_override_wins_over_base() {
        let a = Doubled(Scalar(1.0));
        let b = Doubled(Scalar(4.0));
        assert_eq!(distance(&a, &b), 6.0);
        assert_eq!(distance(a.base(), b.base()), 3.0);
    }

    #[test]
    fn test_delegated_algorithm_uses_base() {
        let a = Doubled(Scalar(0.0));
        let b = Doubled(Scalar(10.0));
        assert_eq!(interpolate(&a, &b, 0.3), Doubled(Scalar(3.0)));
    }
}
