//! Timestamped points carrying named properties
//!
//! A [`TrajectoryPoint`] wraps any point type. Algorithms that only depend on the
//! location (distance, interpolation, bearing, turn angles) forward to the wrapped
//! point, so a domain that overrides distance for its point type gets the override for
//! its trajectory points too. Speed has no generic implementation: every domain
//! defines its own, in its own units.

use crate::algorithms::{
    Bearing, Distance, Extrapolate, Interpolate, SignedTurnAngle, SphericalCoordinates,
    Timestamped, UnsignedTurnAngle,
};
use crate::properties::interpolate_timestamp;
use crate::{PropertyMap, PropertyValue, Result};
use std::fmt;
use time::OffsetDateTime;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// A point plus a timestamp, an object id and a property map
///
/// Points are ordered in time by the caller; nothing here enforces it.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct TrajectoryPoint<P> {
    point: P,
    timestamp: OffsetDateTime,
    object_id: String,
    properties: PropertyMap,
}

impl<P> TrajectoryPoint<P> {
    /// Create a new trajectory point with no object id and no properties
    pub fn new(point: P, timestamp: OffsetDateTime) -> Self {
        Self {
            point,
            timestamp,
            object_id: String::new(),
            properties: PropertyMap::new(),
        }
    }

    /// Builder-style object id setter
    pub fn with_object_id(mut self, object_id: impl Into<String>) -> Self {
        self.object_id = object_id.into();
        self
    }

    /// Builder-style property setter
    pub fn with_property(mut self, name: impl Into<String>, value: impl Into<PropertyValue>) -> Self {
        self.properties.set(name, value);
        self
    }

    #[inline]
    pub fn point(&self) -> &P {
        &self.point
    }

    #[inline]
    pub fn point_mut(&mut self) -> &mut P {
        &mut self.point
    }

    #[inline]
    pub fn into_point(self) -> P {
        self.point
    }

    #[inline]
    pub fn timestamp(&self) -> OffsetDateTime {
        self.timestamp
    }

    pub fn set_timestamp(&mut self, timestamp: OffsetDateTime) {
        self.timestamp = timestamp;
    }

    #[inline]
    pub fn object_id(&self) -> &str {
        &self.object_id
    }

    pub fn set_object_id(&mut self, object_id: impl Into<String>) {
        self.object_id = object_id.into();
    }

    #[inline]
    pub fn properties(&self) -> &PropertyMap {
        &self.properties
    }

    #[inline]
    pub fn properties_mut(&mut self) -> &mut PropertyMap {
        &mut self.properties
    }

    pub fn set_property(&mut self, name: impl Into<String>, value: impl Into<PropertyValue>) {
        self.properties.set(name, value);
    }

    pub fn property(&self, name: &str) -> Option<&PropertyValue> {
        self.properties.get(name)
    }

    /// Read a real-valued property; `None` when it was never recorded
    pub fn real_property(&self, name: &str) -> Option<f64> {
        self.properties.real(name)
    }

    /// Read a real-valued property, failing with
    /// [`TrajectoryError::MissingProperty`](crate::TrajectoryError::MissingProperty) when absent
    pub fn require_real_property(&self, name: &str) -> Result<f64> {
        self.properties.require_real(name)
    }
}

impl<P> From<P> for TrajectoryPoint<P> {
    /// Promote a bare point, stamping it with the Unix epoch
    fn from(point: P) -> Self {
        Self::new(point, OffsetDateTime::UNIX_EPOCH)
    }
}

impl<P: fmt::Display> fmt::Display for TrajectoryPoint<P> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "[{}@{}: {} {}]",
            self.object_id, self.timestamp, self.point, self.properties
        )
    }
}

impl<P> Timestamped for TrajectoryPoint<P> {
    #[inline]
    fn timestamp(&self) -> OffsetDateTime {
        self.timestamp
    }
}

impl<P: Distance> Distance for TrajectoryPoint<P> {
    #[inline]
    fn distance(&self, other: &Self) -> f64 {
        self.point.distance(&other.point)
    }
}

impl<P: Interpolate> Interpolate for TrajectoryPoint<P> {
    /// Interpolates location, timestamp and properties; the object id comes from `self`
    fn interpolate(&self, other: &Self, t: f64) -> Self {
        Self {
            point: self.point.interpolate(&other.point, t),
            timestamp: interpolate_timestamp(self.timestamp, other.timestamp, t),
            object_id: self.object_id.clone(),
            properties: self.properties.interpolate(&other.properties, t),
        }
    }
}

impl<P: Extrapolate> Extrapolate for TrajectoryPoint<P> {
    fn extrapolate(&self, other: &Self, t: f64) -> Self {
        Self {
            point: self.point.extrapolate(&other.point, t),
            timestamp: interpolate_timestamp(self.timestamp, other.timestamp, t),
            object_id: self.object_id.clone(),
            properties: self.properties.interpolate(&other.properties, t),
        }
    }
}

impl<P: Bearing> Bearing for TrajectoryPoint<P> {
    #[inline]
    fn bearing(&self, to: &Self) -> f64 {
        self.point.bearing(&to.point)
    }
}

impl<P: SignedTurnAngle> SignedTurnAngle for TrajectoryPoint<P> {
    #[inline]
    fn signed_turn_angle(a: &Self, b: &Self, c: &Self) -> f64 {
        P::signed_turn_angle(&a.point, &b.point, &c.point)
    }
}

impl<P: UnsignedTurnAngle> UnsignedTurnAngle for TrajectoryPoint<P> {
    #[inline]
    fn unsigned_turn_angle(a: &Self, b: &Self, c: &Self) -> f64 {
        P::unsigned_turn_angle(&a.point, &b.point, &c.point)
    }
}

impl<P: SphericalCoordinates> SphericalCoordinates for TrajectoryPoint<P> {
    #[inline]
    fn longitude(&self) -> f64 {
        self.point.longitude()
    }

    #[inline]
    fn latitude(&self) -> f64 {
        self.point.latitude()
    }
}
