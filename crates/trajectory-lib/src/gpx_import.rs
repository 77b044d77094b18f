//! GPX import into terrestrial trajectories
//!
//! Every track segment becomes one [`Trajectory`]. Waypoint elevation is stored twice:
//! as recorded (meters) in [`ALTITUDE_METERS_PROPERTY`], and in kilometers in
//! [`ALTITUDE_PROPERTY`] so that [`TrajectoryPoint::ecef`] works on imported points.
//! Waypoint speed (m/s) goes to [`SPEED_PROPERTY`]; waypoint time becomes the point
//! timestamp.

use crate::conversions::METERS_TO_KM;
use crate::domain::terrestrial::{
    ALTITUDE_METERS_PROPERTY, ALTITUDE_PROPERTY, TerrestrialPoint, Trajectory, TrajectoryPoint,
};
use crate::{Result, TrajectoryError};
use rayon::prelude::*;
use std::io::Read;
use std::path::Path;
use time::OffsetDateTime;

/// Property holding the speed reported by the GPS receiver, in m/s
pub const SPEED_PROPERTY: &str = "speed";

/// Property holding the index of the source track within the GPX file
pub const TRACK_INDEX_PROPERTY: &str = "track_index";

/// Property holding the index of the source segment within its track
pub const SEGMENT_INDEX_PROPERTY: &str = "segment_index";

/// Convert a single waypoint
///
/// Waypoints without time are stamped with the Unix epoch, so speeds involving them
/// come out as zero.
fn waypoint_to_point(waypoint: &gpx::Waypoint, object_id: &str) -> Result<TrajectoryPoint> {
    let location = waypoint.point();
    let point = TerrestrialPoint::from(location);
    if !point.longitude().is_finite() || !point.latitude().is_finite() {
        return Err(TrajectoryError::InvalidGeometry(format!(
            "Non-finite coordinates: ({}, {})",
            location.x(),
            location.y()
        )));
    }

    let timestamp = waypoint
        .time
        .map(OffsetDateTime::from)
        .unwrap_or(OffsetDateTime::UNIX_EPOCH);

    let mut trajectory_point = TrajectoryPoint::new(point, timestamp).with_object_id(object_id);
    if let Some(elevation) = waypoint.elevation {
        trajectory_point.set_property(ALTITUDE_METERS_PROPERTY, elevation);
        trajectory_point.set_property(ALTITUDE_PROPERTY, elevation * METERS_TO_KM);
    }
    if let Some(speed) = waypoint.speed {
        trajectory_point.set_property(SPEED_PROPERTY, speed);
    }

    Ok(trajectory_point)
}

/// Convert one track segment, skipping waypoints with invalid coordinates
fn segment_to_trajectory(segment: &gpx::TrackSegment, object_id: &str) -> Result<Trajectory> {
    let mut trajectory = Trajectory::new().with_object_id(object_id);

    for waypoint in &segment.points {
        match waypoint_to_point(waypoint, object_id) {
            Ok(point) => trajectory.push(point),
            Err(e) => tracing::warn!("Skipping waypoint of {}: {}", object_id, e),
        }
    }

    if trajectory.is_empty() {
        return Err(TrajectoryError::EmptyTrajectory);
    }
    Ok(trajectory)
}

/// Build one trajectory per non-empty track segment
///
/// Object ids come from the track name, or `track-<index>` for unnamed tracks.
pub fn trajectories_from_gpx(gpx: &gpx::Gpx) -> Vec<Trajectory> {
    #[cfg(feature = "profiling")]
    profiling::scope!("gpx_import::trajectories_from_gpx");

    let mut trajectories = Vec::new();

    for (track_index, track) in gpx.tracks.iter().enumerate() {
        let object_id = track
            .name
            .clone()
            .unwrap_or_else(|| format!("track-{track_index}"));

        for (segment_index, segment) in track.segments.iter().enumerate() {
            match segment_to_trajectory(segment, &object_id) {
                Ok(mut trajectory) => {
                    trajectory.set_property(TRACK_INDEX_PROPERTY, track_index as i64);
                    trajectory.set_property(SEGMENT_INDEX_PROPERTY, segment_index as i64);
                    trajectories.push(trajectory);
                }
                Err(e) => tracing::warn!(
                    "Skipping segment {} of track {}: {}",
                    segment_index,
                    object_id,
                    e
                ),
            }
        }
    }

    trajectories
}

/// Parse GPX from a reader and convert it
pub fn read_gpx<R: Read>(reader: R) -> Result<Vec<Trajectory>> {
    let gpx = gpx::read(reader)?;
    Ok(trajectories_from_gpx(&gpx))
}

/// Load trajectories from GPX files in parallel
///
/// Fails on the first file that cannot be read or parsed.
pub fn load_from_files<P: AsRef<Path> + Send + Sync>(paths: Vec<P>) -> Result<Vec<Trajectory>> {
    // Profile bulk file loading (IO + parsing + conversion)
    #[cfg(feature = "profiling")]
    profiling::scope!("gpx_import::load_from_files");

    let per_file: Result<Vec<Vec<Trajectory>>> = paths
        .into_par_iter()
        .map(|path| {
            let file = std::fs::File::open(path.as_ref())?;
            let trajectories = read_gpx(std::io::BufReader::new(file))?;
            tracing::debug!(
                "Loaded {} trajectories from {}",
                trajectories.len(),
                path.as_ref().display()
            );
            Ok(trajectories)
        })
        .collect();

    Ok(per_file?.into_iter().flatten().collect())
}
