use std::fmt;
use time::Duration;
use trajectory_lib::algorithms::{length, point_at_length_fraction};
use trajectory_lib::conversions::SECONDS_PER_HOUR;
use trajectory_lib::domain::terrestrial::{Trajectory, TrajectoryPoint};
use trajectory_lib::{AltitudeUnit, PointCartesian, almost_zero};

/// Per-trajectory figures printed by the CLI
#[derive(Debug, Clone)]
pub struct TrajectorySummary {
    pub object_id: String,
    pub points: usize,
    pub length_km: f64,
    pub duration: Duration,
    pub average_speed_kmh: f64,
    pub sample_fraction: f64,
    pub sample: Option<TrajectoryPoint>,
    /// `None` when the first point has no usable altitude
    pub first_ecef: Option<PointCartesian<3>>,
}

impl TrajectorySummary {
    /// Compute the summary of one trajectory
    ///
    /// # Arguments
    /// * `trajectory` - The trajectory to measure
    /// * `sample_fraction` - Length fraction at which to sample a point
    /// * `altitude_unit` - Unit the altitude property is recorded in
    /// * `altitude_property` - Name of the altitude property used for the ECEF position
    pub fn new(
        trajectory: &Trajectory,
        sample_fraction: f64,
        altitude_unit: AltitudeUnit,
        altitude_property: &str,
    ) -> Self {
        let length_km = length(trajectory);
        let duration = trajectory.duration();

        let hours = duration.as_seconds_f64() / SECONDS_PER_HOUR;
        let average_speed_kmh = if almost_zero(hours) {
            0.0
        } else {
            length_km / hours
        };

        let first_ecef = trajectory.first().and_then(|first| {
            first
                .ecef_in(altitude_unit, altitude_property)
                .inspect_err(|e| {
                    tracing::warn!("No ECEF position for {}: {}", trajectory.object_id(), e)
                })
                .ok()
        });

        Self {
            object_id: trajectory.object_id().to_string(),
            points: trajectory.len(),
            length_km,
            duration,
            average_speed_kmh,
            sample_fraction,
            sample: point_at_length_fraction(trajectory, sample_fraction),
            first_ecef,
        }
    }
}

impl fmt::Display for TrajectorySummary {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "Trajectory: {}", self.object_id)?;
        writeln!(f, "  Points:        {}", self.points)?;
        writeln!(f, "  Length:        {:.3} km", self.length_km)?;
        writeln!(f, "  Duration:      {}", self.duration)?;
        writeln!(f, "  Average speed: {:.2} km/h", self.average_speed_kmh)?;
        match &self.sample {
            Some(point) => writeln!(f, "  At {:.0}%:        {}", self.sample_fraction * 100.0, point)?,
            None => writeln!(f, "  At {:.0}%:        n/a", self.sample_fraction * 100.0)?,
        }
        match &self.first_ecef {
            Some(ecef) => write!(f, "  First ECEF:    {} km", ecef),
            None => write!(f, "  First ECEF:    n/a"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use time::OffsetDateTime;
    use trajectory_lib::domain::terrestrial::TerrestrialPoint;

    fn create_test_trajectory() -> Trajectory {
        let start = OffsetDateTime::UNIX_EPOCH;
        [
            TrajectoryPoint::new(TerrestrialPoint::new(0.0, 0.0), start).with_property("altitude", 0.0),
            TrajectoryPoint::new(TerrestrialPoint::new(0.0, 1.0), start + Duration::hours(2)),
        ]
        .into_iter()
        .collect::<Trajectory>()
        .with_object_id("equator-north")
    }

    #[test]
    fn test_summary_figures() {
        let summary =
            TrajectorySummary::new(&create_test_trajectory(), 0.5, AltitudeUnit::Meters, "altitude");

        assert_eq!(summary.object_id, "equator-north");
        assert_eq!(summary.points, 2);
        assert!((summary.length_km - 111.19).abs() < 0.5);
        assert_eq!(summary.duration, Duration::hours(2));
        assert!((summary.average_speed_kmh - summary.length_km / 2.0).abs() < 1e-9);

        let sample = summary.sample.unwrap();
        assert!((sample.point().latitude() - 0.5).abs() < 1e-9);

        let ecef = summary.first_ecef.unwrap();
        assert!((ecef.x() - 6378.137).abs() < 1e-6);
    }

    #[test]
    fn test_missing_altitude_and_instant_trajectory() {
        let trajectory: Trajectory =
            [TrajectoryPoint::from(TerrestrialPoint::new(10.0, 10.0))].into_iter().collect();
        let summary = TrajectorySummary::new(&trajectory, 0.5, AltitudeUnit::Feet, "altitude");

        assert_eq!(summary.length_km, 0.0);
        assert_eq!(summary.average_speed_kmh, 0.0);
        assert!(summary.first_ecef.is_none());
        assert!(summary.to_string().contains("First ECEF:    n/a"));
    }
}
