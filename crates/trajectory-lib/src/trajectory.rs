//! Trajectory storage and generic path sampling
//!
//! This module provides the [`Trajectory`] container and the sampling algorithms
//! (point at time, point at time fraction, point at length fraction) that every domain
//! shares. Path length is deliberately absent here: each domain states its own units.

use crate::algorithms::{
    Distance, Interpolate, PointAtLengthFraction, PointAtTime, PointAtTimeFraction,
    SphericalCoordinates, Timestamped,
};
use crate::float_compare::almost_zero;
use crate::{PropertyMap, PropertyValue};
use geo::{Coord, Rect};
use std::fmt;
use std::ops::Index;
use time::{Duration, OffsetDateTime};

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// Ordered sequence of trajectory points
///
/// Insertion order is temporal order by convention; it is not verified.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct Trajectory<P> {
    points: Vec<P>,
    object_id: String,
    properties: PropertyMap,
}

impl<P> Default for Trajectory<P> {
    fn default() -> Self {
        Self {
            points: Vec::new(),
            object_id: String::new(),
            properties: PropertyMap::new(),
        }
    }
}

impl<P> Trajectory<P> {
    /// Create an empty trajectory
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a trajectory owning the given points
    pub fn from_points(points: Vec<P>) -> Self {
        Self {
            points,
            ..Self::default()
        }
    }

    /// Builder-style object id setter
    pub fn with_object_id(mut self, object_id: impl Into<String>) -> Self {
        self.object_id = object_id.into();
        self
    }

    /// Append a point at the end
    #[inline]
    pub fn push(&mut self, point: P) {
        self.points.push(point);
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.points.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.points.is_empty()
    }

    #[inline]
    pub fn points(&self) -> &[P] {
        &self.points
    }

    #[inline]
    pub fn get(&self, index: usize) -> Option<&P> {
        self.points.get(index)
    }

    #[inline]
    pub fn first(&self) -> Option<&P> {
        self.points.first()
    }

    #[inline]
    pub fn last(&self) -> Option<&P> {
        self.points.last()
    }

    pub fn iter(&self) -> std::slice::Iter<'_, P> {
        self.points.iter()
    }

    pub fn clear(&mut self) {
        self.points.clear();
    }

    pub fn into_points(self) -> Vec<P> {
        self.points
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
}

impl<P: Timestamped> Trajectory<P> {
    pub fn start_time(&self) -> Option<OffsetDateTime> {
        self.points.first().map(Timestamped::timestamp)
    }

    pub fn end_time(&self) -> Option<OffsetDateTime> {
        self.points.last().map(Timestamped::timestamp)
    }

    /// Time between the first and last point; zero for empty trajectories
    pub fn duration(&self) -> Duration {
        match (self.start_time(), self.end_time()) {
            (Some(start), Some(end)) => end - start,
            _ => Duration::ZERO,
        }
    }
}

impl<P: SphericalCoordinates> Trajectory<P> {
    /// Longitude/latitude bounding box (x = longitude, y = latitude)
    ///
    /// Returns `None` for empty trajectories. Does not handle the antimeridian.
    pub fn bounding_box(&self) -> Option<Rect<f64>> {
        let first = self.points.first()?;
        let mut min = Coord {
            x: first.longitude(),
            y: first.latitude(),
        };
        let mut max = min;

        for point in &self.points[1..] {
            min.x = min.x.min(point.longitude());
            min.y = min.y.min(point.latitude());
            max.x = max.x.max(point.longitude());
            max.y = max.y.max(point.latitude());
        }

        Some(Rect::new(min, max))
    }
}

impl<P> Index<usize> for Trajectory<P> {
    type Output = P;

    fn index(&self, index: usize) -> &P {
        &self.points[index]
    }
}

impl<P> FromIterator<P> for Trajectory<P> {
    fn from_iter<I: IntoIterator<Item = P>>(iter: I) -> Self {
        Self::from_points(iter.into_iter().collect())
    }
}

impl<P> Extend<P> for Trajectory<P> {
    fn extend<I: IntoIterator<Item = P>>(&mut self, iter: I) {
        self.points.extend(iter);
    }
}

impl<P> IntoIterator for Trajectory<P> {
    type Item = P;
    type IntoIter = std::vec::IntoIter<P>;

    fn into_iter(self) -> Self::IntoIter {
        self.points.into_iter()
    }
}

impl<'a, P> IntoIterator for &'a Trajectory<P> {
    type Item = &'a P;
    type IntoIter = std::slice::Iter<'a, P>;

    fn into_iter(self) -> Self::IntoIter {
        self.points.iter()
    }
}

impl<P> fmt::Display for Trajectory<P> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "<Trajectory {:?}: {} points>",
            self.object_id,
            self.points.len()
        )
    }
}

/// Sum of distances between consecutive points
///
/// This is the generic path-length primitive; domains convert its result into their
/// own units.
pub(crate) fn path_length<'a, P, I>(points: I) -> f64
where
    P: Distance + 'a,
    I: IntoIterator<Item = &'a P>,
{
    #[cfg(feature = "profiling")]
    profiling::scope!("trajectory::path_length");

    let mut total = 0.0;
    let mut previous: Option<&P> = None;
    for point in points {
        if let Some(prev) = previous {
            total += prev.distance(point);
        }
        previous = Some(point);
    }
    total
}

impl<P> PointAtTime for Trajectory<P>
where
    P: Timestamped + Interpolate + Clone,
{
    type Point = P;

    /// Point at `when`, interpolated between the two bracketing points
    ///
    /// Timestamps before the start yield the first point and timestamps after the end
    /// yield the last point. Empty trajectories yield `None`.
    fn point_at_time(&self, when: OffsetDateTime) -> Option<P> {
        let first = self.points.first()?;
        let last = self.points.last()?;

        if when <= first.timestamp() {
            return Some(first.clone());
        }
        if when >= last.timestamp() {
            return Some(last.clone());
        }

        // First point at or after `when`; guaranteed to be in 1..len here
        let next_index = self.points.partition_point(|p| p.timestamp() < when);
        let next = &self.points[next_index];
        let prev = &self.points[next_index - 1];

        if next.timestamp() == when {
            return Some(next.clone());
        }

        let interval = (next.timestamp() - prev.timestamp()).as_seconds_f64();
        if almost_zero(interval) {
            return Some(prev.clone());
        }

        let t = (when - prev.timestamp()).as_seconds_f64() / interval;
        Some(prev.interpolate(next, t))
    }
}

impl<P> PointAtTimeFraction for Trajectory<P>
where
    P: Timestamped + Interpolate + Clone,
{
    type Point = P;

    /// Point at `fraction` of the trajectory's duration
    ///
    /// Fractions outside `[0, 1]` pin to the endpoints; NaN pins to the first point.
    fn point_at_time_fraction(&self, fraction: f64) -> Option<P> {
        let first = self.points.first()?;
        let last = self.points.last()?;

        // Pin before any duration arithmetic, which cannot represent NaN or huge spans
        if fraction.is_nan() || fraction <= 0.0 {
            return Some(first.clone());
        }
        if fraction >= 1.0 {
            return Some(last.clone());
        }

        let offset = Duration::checked_seconds_f64(self.duration().as_seconds_f64() * fraction)?;
        self.point_at_time(first.timestamp().checked_add(offset)?)
    }
}

impl<P> PointAtLengthFraction for Trajectory<P>
where
    P: Distance + Interpolate + Clone,
{
    type Point = P;

    /// Point at `fraction` of the trajectory's length, measured with the points' own
    /// distance algorithm
    ///
    /// Fractions outside `[0, 1]` pin to the endpoints; NaN pins to the first point.
    fn point_at_length_fraction(&self, fraction: f64) -> Option<P> {
        let first = self.points.first()?;
        let last = self.points.last()?;

        if fraction.is_nan() || fraction <= 0.0 || self.points.len() == 1 {
            return Some(first.clone());
        }
        if fraction >= 1.0 {
            return Some(last.clone());
        }

        let total = path_length(&self.points);
        if almost_zero(total) {
            return Some(first.clone());
        }

        let target = fraction * total;
        let mut travelled = 0.0;
        for pair in self.points.windows(2) {
            let segment = pair[0].distance(&pair[1]);
            if travelled + segment >= target {
                let t = if almost_zero(segment) {
                    0.0
                } else {
                    (target - travelled) / segment
                };
                return Some(pair[0].interpolate(&pair[1], t));
            }
            travelled += segment;
        }

        Some(last.clone())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::algorithms::{point_at_length_fraction, point_at_time, point_at_time_fraction};
    use crate::{PointCartesian, PointLonLat, TrajectoryPoint};

    type PlanarPoint = TrajectoryPoint<PointCartesian<2>>;

    fn at(seconds: i64) -> OffsetDateTime {
        OffsetDateTime::UNIX_EPOCH + Duration::seconds(seconds)
    }

    fn create_test_trajectory() -> Trajectory<PlanarPoint> {
        // L-shaped path: 10 units east in 10 s, then 10 units north in 30 s
        [
            PlanarPoint::new(PointCartesian::new([0.0, 0.0]), at(0)),
            PlanarPoint::new(PointCartesian::new([10.0, 0.0]), at(10)),
            PlanarPoint::new(PointCartesian::new([10.0, 10.0]), at(40)),
        ]
        .into_iter()
        .collect()
    }

    #[test]
    fn test_trajectory_creation() {
        let mut trajectory = Trajectory::new().with_object_id("track-1");
        assert!(trajectory.is_empty());

        trajectory.push(PlanarPoint::new(PointCartesian::new([0.0, 0.0]), at(0)));
        trajectory.push(PlanarPoint::new(PointCartesian::new([1.0, 0.0]), at(1)));

        assert_eq!(trajectory.len(), 2);
        assert_eq!(trajectory.object_id(), "track-1");
        assert_eq!(trajectory[1].timestamp(), at(1));
    }

    #[test]
    fn test_times_and_duration() {
        let trajectory = create_test_trajectory();
        assert_eq!(trajectory.start_time(), Some(at(0)));
        assert_eq!(trajectory.end_time(), Some(at(40)));
        assert_eq!(trajectory.duration(), Duration::seconds(40));

        let empty: Trajectory<PlanarPoint> = Trajectory::new();
        assert_eq!(empty.duration(), Duration::ZERO);
    }

    #[test]
    fn test_path_length() {
        let trajectory = create_test_trajectory();
        assert_eq!(path_length(trajectory.points()), 20.0);
        assert_eq!(path_length(&trajectory.points()[..1]), 0.0);
    }

    #[test]
    fn test_point_at_time() {
        let trajectory = create_test_trajectory();

        let point = point_at_time(&trajectory, at(5)).unwrap();
        assert_eq!(point.point(), &PointCartesian::new([5.0, 0.0]));

        let point = point_at_time(&trajectory, at(25)).unwrap();
        assert_eq!(point.point(), &PointCartesian::new([10.0, 5.0]));

        let exact = point_at_time(&trajectory, at(10)).unwrap();
        assert_eq!(exact.point(), &PointCartesian::new([10.0, 0.0]));
    }

    #[test]
    fn test_point_at_time_pins_to_endpoints() {
        let trajectory = create_test_trajectory();
        let before = point_at_time(&trajectory, at(-100)).unwrap();
        assert_eq!(before.point(), &PointCartesian::new([0.0, 0.0]));
        let after = point_at_time(&trajectory, at(100)).unwrap();
        assert_eq!(after.point(), &PointCartesian::new([10.0, 10.0]));
    }

    #[test]
    fn test_point_at_time_fraction() {
        let trajectory = create_test_trajectory();
        // 40% of 40 s is 16 s: 2 of the 10 units north
        let point = point_at_time_fraction(&trajectory, 0.4).unwrap();
        assert_eq!(point.timestamp(), at(16));
        assert!((point.point().y() - 2.0).abs() < 1e-9);
    }

    #[test]
    fn test_point_at_time_fraction_pins_to_endpoints() {
        let trajectory = create_test_trajectory();
        let first = PointCartesian::new([0.0, 0.0]);
        let last = PointCartesian::new([10.0, 10.0]);

        for fraction in [-1.0, -1e12, f64::NEG_INFINITY, f64::NAN] {
            let point = point_at_time_fraction(&trajectory, fraction).unwrap();
            assert_eq!(point.point(), &first, "fraction {fraction}");
            assert_eq!(point.timestamp(), at(0));
        }

        for fraction in [1.0, 2.0, 1e12, f64::INFINITY] {
            let point = point_at_time_fraction(&trajectory, fraction).unwrap();
            assert_eq!(point.point(), &last, "fraction {fraction}");
            assert_eq!(point.timestamp(), at(40));
        }
    }

    #[test]
    fn test_point_at_length_fraction_pins_non_finite() {
        let trajectory = create_test_trajectory();

        let nan = point_at_length_fraction(&trajectory, f64::NAN).unwrap();
        assert_eq!(nan.point(), &PointCartesian::new([0.0, 0.0]));
        let huge = point_at_length_fraction(&trajectory, 1e12).unwrap();
        assert_eq!(huge.point(), &PointCartesian::new([10.0, 10.0]));
        let tiny = point_at_length_fraction(&trajectory, -1e12).unwrap();
        assert_eq!(tiny.point(), &PointCartesian::new([0.0, 0.0]));
    }

    #[test]
    fn test_point_at_length_fraction() {
        let trajectory = create_test_trajectory();

        let quarter = point_at_length_fraction(&trajectory, 0.25).unwrap();
        assert_eq!(quarter.point(), &PointCartesian::new([5.0, 0.0]));

        let three_quarters = point_at_length_fraction(&trajectory, 0.75).unwrap();
        assert_eq!(three_quarters.point(), &PointCartesian::new([10.0, 5.0]));

        let start = point_at_length_fraction(&trajectory, -1.0).unwrap();
        assert_eq!(start.point(), &PointCartesian::new([0.0, 0.0]));
        let end = point_at_length_fraction(&trajectory, 2.0).unwrap();
        assert_eq!(end.point(), &PointCartesian::new([10.0, 10.0]));
    }

    #[test]
    fn test_sampling_empty_trajectory() {
        let empty: Trajectory<PlanarPoint> = Trajectory::new();
        assert!(point_at_time(&empty, at(0)).is_none());
        assert!(point_at_time_fraction(&empty, 0.5).is_none());
        assert!(point_at_length_fraction(&empty, 0.5).is_none());
    }

    #[test]
    fn test_bounding_box() {
        let trajectory: Trajectory<TrajectoryPoint<PointLonLat>> = [
            TrajectoryPoint::from(PointLonLat::new(-0.1278, 51.5074)),
            TrajectoryPoint::from(PointLonLat::new(-0.1200, 51.5100)),
            TrajectoryPoint::from(PointLonLat::new(-0.1300, 51.5000)),
        ]
        .into_iter()
        .collect();

        let bbox = trajectory.bounding_box().unwrap();
        assert_eq!(bbox.min(), Coord { x: -0.1300, y: 51.5000 });
        assert_eq!(bbox.max(), Coord { x: -0.1200, y: 51.5100 });
        assert!(Trajectory::<TrajectoryPoint<PointLonLat>>::new().bounding_box().is_none());
    }
}
