//! Terrestrial domain - objects on the surface of the Earth
//!
//! Coordinates are degrees of longitude and latitude, but measurements use human
//! scale units: distances and lengths in kilometers, speeds in km/h. Interpolation,
//! bearing, turn angles and coordinate access are the plain spherical algorithms of
//! [`PointLonLat`].
//!
//! Terrestrial trajectory points may carry altitude properties. The
//! [`ALTITUDE_PROPERTY`] property is in kilometers and is what
//! [`TrajectoryPoint::ecef`] reads. Altitudes recorded in other units (GPX elevation
//! in meters, aviation data in feet) live under their own property names and go
//! through the conversions that take the unit explicitly.

use super::{Domain, DomainPoint};
use crate::algorithms::{BaseRepresentation, Distance, Length, SpeedBetween};
use crate::conversions::{
    self, AltitudeUnit, FEET_TO_KM, METERS_TO_KM, SECONDS_PER_HOUR, WGS84_ECCENTRICITY_SQUARED,
    WGS84_SEMI_MAJOR_AXIS_KM,
};
use crate::float_compare::almost_zero;
use crate::trajectory::path_length;
use crate::{PointCartesian, PointLonLat, Result};
use std::fmt;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// Name of the property that [`TrajectoryPoint::ecef`] reads altitude from, in kilometers
pub const ALTITUDE_PROPERTY: &str = "altitude";

/// Name of the property holding altitude in meters, as recorded by GPS receivers
pub const ALTITUDE_METERS_PROPERTY: &str = "altitude_m";

/// The terrestrial domain
#[derive(Debug, Clone, Copy, Default)]
pub struct Terrestrial;

/// Trajectory point on the Earth's surface
pub type TrajectoryPoint = crate::TrajectoryPoint<TerrestrialPoint>;

/// Trajectory on the Earth's surface
pub type Trajectory = crate::Trajectory<TrajectoryPoint>;

impl Domain for Terrestrial {
    const NAME: &'static str = "terrestrial";

    type BasePoint = TerrestrialPoint;
    type TrajectoryPoint = TrajectoryPoint;
    type Trajectory = Trajectory;
}

/// Point on the Earth's surface, in degrees of longitude and latitude
///
/// Distances between terrestrial points are measured in kilometers.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "serde", serde(transparent))]
pub struct TerrestrialPoint {
    base: PointLonLat,
}

impl TerrestrialPoint {
    /// Create a new point from longitude and latitude in degrees
    #[inline]
    pub fn new(longitude: f64, latitude: f64) -> Self {
        Self {
            base: PointLonLat::new(longitude, latitude),
        }
    }

    #[inline]
    pub fn longitude(&self) -> f64 {
        self.base.longitude()
    }

    #[inline]
    pub fn latitude(&self) -> f64 {
        self.base.latitude()
    }

    /// Earth-Centered Earth-Fixed coordinates of a position, in kilometers
    ///
    /// # Arguments
    /// * `longitude` - Longitude in degrees
    /// * `latitude` - Latitude in degrees
    /// * `altitude_km` - Height above the WGS84 ellipsoid in kilometers
    pub fn ecef_from_km(longitude: f64, latitude: f64, altitude_km: f64) -> PointCartesian<3> {
        let longitude = longitude.to_radians();
        let latitude = latitude.to_radians();

        let sin_latitude = latitude.sin();
        let n = WGS84_SEMI_MAJOR_AXIS_KM
            / (1.0 - WGS84_ECCENTRICITY_SQUARED * sin_latitude * sin_latitude).sqrt();
        let n_alt_cos_lat = (n + altitude_km) * latitude.cos();

        PointCartesian::new([
            n_alt_cos_lat * longitude.cos(),
            n_alt_cos_lat * longitude.sin(),
            (n * (1.0 - WGS84_ECCENTRICITY_SQUARED) + altitude_km) * sin_latitude,
        ])
    }

    /// ECEF coordinates of this point at the given altitude in kilometers
    #[inline]
    pub fn ecef(&self, altitude_km: f64) -> PointCartesian<3> {
        Self::ecef_from_km(self.longitude(), self.latitude(), altitude_km)
    }
}

impl BaseRepresentation for TerrestrialPoint {
    type Base = PointLonLat;

    #[inline]
    fn base(&self) -> &PointLonLat {
        &self.base
    }

    #[inline]
    fn from_base(base: PointLonLat) -> Self {
        Self { base }
    }
}

impl From<PointLonLat> for TerrestrialPoint {
    fn from(base: PointLonLat) -> Self {
        Self { base }
    }
}

impl From<geo::Point<f64>> for TerrestrialPoint {
    fn from(point: geo::Point<f64>) -> Self {
        Self {
            base: point.into(),
        }
    }
}

impl DomainPoint for TerrestrialPoint {
    type Domain = Terrestrial;
}

impl fmt::Display for TerrestrialPoint {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Display::fmt(&self.base, f)
    }
}

impl Distance for TerrestrialPoint {
    /// Great-circle distance in kilometers
    #[inline]
    fn distance(&self, other: &Self) -> f64 {
        conversions::radians_to_km(self.base.distance(&other.base))
    }
}

crate::delegate_algorithms!(TerrestrialPoint => [
    interpolate,
    extrapolate,
    bearing,
    signed_turn_angle,
    unsigned_turn_angle,
    spherical_coordinates,
]);

#[cfg_attr(feature = "profiling", profiling::all_functions)]
impl SpeedBetween for TrajectoryPoint {
    /// Speed in km/h
    ///
    /// Points sharing a timestamp yield `0` whatever their separation. A `to` earlier
    /// than `self` yields a negative speed.
    fn speed_between(&self, to: &Self) -> f64 {
        let distance_traveled = self.distance(to);
        let seconds_elapsed = (to.timestamp() - self.timestamp()).as_seconds_f64();

        if almost_zero(seconds_elapsed) {
            tracing::trace!(
                "Zero elapsed time between {} and {}, reporting speed 0",
                self,
                to
            );
            return 0.0;
        }

        SECONDS_PER_HOUR * distance_traveled / seconds_elapsed
    }
}

#[cfg_attr(feature = "profiling", profiling::all_functions)]
impl Length for Trajectory {
    /// Path length in kilometers
    fn length(&self) -> f64 {
        conversions::radians_to_km(path_length(self.iter().map(|p| p.point().base())))
    }
}

#[cfg_attr(feature = "profiling", profiling::all_functions)]
impl TrajectoryPoint {
    /// ECEF coordinates using the [`ALTITUDE_PROPERTY`] property, in kilometers
    ///
    /// Fails with [`TrajectoryError::MissingProperty`](crate::TrajectoryError::MissingProperty)
    /// if the point has no altitude.
    pub fn ecef(&self) -> Result<PointCartesian<3>> {
        self.ecef_with_ratio(1.0, ALTITUDE_PROPERTY)
    }

    /// ECEF coordinates reading altitude from `altitude_property`
    ///
    /// # Arguments
    /// * `ratio` - Factor that turns the stored altitude into kilometers
    /// * `altitude_property` - Name of the property holding altitude
    ///
    /// # Returns
    /// The ECEF point in kilometers, or the property error without computing anything
    pub fn ecef_with_ratio(&self, ratio: f64, altitude_property: &str) -> Result<PointCartesian<3>> {
        let altitude = ratio * self.require_real_property(altitude_property)?;
        Ok(self.point().ecef(altitude))
    }

    /// ECEF coordinates for an altitude property recorded in feet
    pub fn ecef_from_feet(&self, altitude_property: &str) -> Result<PointCartesian<3>> {
        self.ecef_with_ratio(FEET_TO_KM, altitude_property)
    }

    /// ECEF coordinates for an altitude property recorded in meters
    pub fn ecef_from_meters(&self, altitude_property: &str) -> Result<PointCartesian<3>> {
        self.ecef_with_ratio(METERS_TO_KM, altitude_property)
    }

    /// ECEF coordinates for an altitude property recorded in `unit`
    pub fn ecef_in(&self, unit: AltitudeUnit, altitude_property: &str) -> Result<PointCartesian<3>> {
        self.ecef_with_ratio(unit.to_km_ratio(), altitude_property)
    }
}
