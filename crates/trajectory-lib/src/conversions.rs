//! Unit conversion constants and helpers shared by the domains

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// Mean Earth radius in kilometers, used to turn angular distance into linear distance
pub const EARTH_RADIUS_KM: f64 = 6371.0;

/// WGS84 semi-major axis in kilometers
pub const WGS84_SEMI_MAJOR_AXIS_KM: f64 = 6378.137;

/// WGS84 first eccentricity
pub const WGS84_ECCENTRICITY: f64 = 8.1819190842622e-2;

/// Precomputed constant: WGS84_ECCENTRICITY squared
pub const WGS84_ECCENTRICITY_SQUARED: f64 = WGS84_ECCENTRICITY * WGS84_ECCENTRICITY;

/// Multiply an altitude in feet by this to get kilometers
// NOTE: May differ in the last bit between platforms with different float precision.
pub const FEET_TO_KM: f64 = 1.0 / 3280.839895013123;

/// Multiply an altitude in meters by this to get kilometers
pub const METERS_TO_KM: f64 = 1.0 / 1000.0;

/// Seconds in one hour
pub const SECONDS_PER_HOUR: f64 = 3600.0;

/// Convert an angular distance on the Earth's surface to kilometers
#[inline(always)]
pub fn radians_to_km(radians: f64) -> f64 {
    radians * EARTH_RADIUS_KM
}

/// Convert a distance in kilometers along the Earth's surface to radians
#[inline(always)]
pub fn km_to_radians(km: f64) -> f64 {
    km / EARTH_RADIUS_KM
}

/// Unit an altitude property was recorded in
///
/// GPS receivers usually report meters, while aviation feeds report feet.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "clap", derive(clap::ValueEnum))]
pub enum AltitudeUnit {
    Kilometers,
    #[default]
    Meters,
    Feet,
}

impl AltitudeUnit {
    /// Ratio that turns a value in this unit into kilometers
    #[inline]
    pub fn to_km_ratio(self) -> f64 {
        match self {
            AltitudeUnit::Kilometers => 1.0,
            AltitudeUnit::Meters => METERS_TO_KM,
            AltitudeUnit::Feet => FEET_TO_KM,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_radians_to_km_one_degree() {
        let km = radians_to_km(1.0_f64.to_radians());
        assert!((km - 111.19).abs() < 0.01);
    }

    #[test]
    fn test_km_radians_inverse() {
        let km = 1234.5;
        assert!((radians_to_km(km_to_radians(km)) - km).abs() < 1e-9);
    }

    #[test]
    fn test_altitude_unit_ratios() {
        assert_eq!(AltitudeUnit::Kilometers.to_km_ratio(), 1.0);
        assert!((1000.0 * AltitudeUnit::Meters.to_km_ratio() - 1.0).abs() < 1e-12);
        assert!((3280.839895013123 * AltitudeUnit::Feet.to_km_ratio() - 1.0).abs() < 1e-12);
    }

    #[test]
    fn test_eccentricity_squared() {
        assert!((WGS84_ECCENTRICITY_SQUARED - 0.00669437999014).abs() < 1e-12);
    }
}
