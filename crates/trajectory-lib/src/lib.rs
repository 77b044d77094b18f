//! Trajectory Library - Points, Trajectories and Per-Domain Algorithm Dispatch
//!
//! This library defines geometric point and trajectory types and a static dispatch
//! scheme that lets the same generic operation (distance, speed, length, interpolation,
//! point-at-fraction) compute in the units of the domain the points live in.
//!
//! # Architecture
//!
//! - **[`float_compare`]**: Tolerant floating point equality used everywhere a hard `==`
//!   would be flaky
//! - **[`algorithms`]**: One trait per algorithm signature plus the driver functions that
//!   calling code uses
//! - **[`PointLonLat`] / [`PointCartesian`]**: Base point representations carrying the
//!   generic spherical and planar primitives
//! - **[`TrajectoryPoint`] / [`Trajectory`]**: Timestamped points with properties, and
//!   ordered sequences of them
//! - **[`domain`]**: Domains built on top of the base representations. [`domain::terrestrial`]
//!   measures in kilometers and km/h; [`domain::cartesian2d`] in plain units.
//!
//! # Example
//!
//! ```
//! use trajectory_lib::algorithms::{distance, length, speed_between};
//! use trajectory_lib::domain::terrestrial::{TerrestrialPoint, Trajectory, TrajectoryPoint};
//! use time::{Duration, OffsetDateTime};
//!
//! let start = OffsetDateTime::UNIX_EPOCH;
//! let a = TrajectoryPoint::new(TerrestrialPoint::new(0.0, 0.0), start);
//! let b = TrajectoryPoint::new(TerrestrialPoint::new(0.0, 1.0), start + Duration::hours(1));
//!
//! let km = distance(&a, &b);
//! assert!((km - 111.19).abs() < 0.5);
//! assert!((speed_between(&a, &b) - km).abs() < 1e-9);
//!
//! let path: Trajectory = [a, b].into_iter().collect();
//! assert!((length(&path) - km).abs() < 1e-9);
//! ```

pub mod algorithms;
pub mod conversions;
pub mod domain;
pub mod float_compare;
pub mod gpx_import;
mod point;
mod primitives;
mod properties;
mod trajectory;
mod trajectory_point;

// Public API exports
pub use conversions::AltitudeUnit;
pub use float_compare::{almost_equal, almost_zero};
pub use point::{PointCartesian, PointLonLat};
pub use properties::{PropertyKind, PropertyMap, PropertyValue};
pub use trajectory::Trajectory;
pub use trajectory_point::TrajectoryPoint;

/// Error types for trajectory operations
#[derive(Debug, thiserror::Error)]
pub enum TrajectoryError {
    #[error("Property not found: {name}")]
    MissingProperty { name: String },

    #[error("Property {name} holds a {found} value, expected {expected}")]
    PropertyType {
        name: String,
        expected: PropertyKind,
        found: PropertyKind,
    },

    #[error("Empty trajectory")]
    EmptyTrajectory,

    #[error("Invalid geometry: {0}")]
    InvalidGeometry(String),

    #[error("GPX parsing error: {0}")]
    Gpx(#[from] gpx::errors::GpxError),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

pub type Result<T> = std::result::Result<T, TrajectoryError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_public_exports() {
        // Verify that all public types are accessible
        let _: fn(f64, f64) -> PointLonLat = PointLonLat::new;
        let _: fn(f64) -> bool = almost_zero;
        let _: fn(f64, f64) -> bool = almost_equal;
        let _: Trajectory<TrajectoryPoint<PointLonLat>> = Trajectory::new();
    }

    #[test]
    fn test_missing_property_message_names_property() {
        let err = TrajectoryError::MissingProperty {
            name: "altitude".to_string(),
        };
        assert_eq!(err.to_string(), "Property not found: altitude");
    }
}
