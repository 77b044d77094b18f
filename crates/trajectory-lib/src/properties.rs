//! Named per-point properties
//!
//! Attributes that are not part of the coordinate tuple (altitude, heading, flight
//! number...) live in a [`PropertyMap`]. An absent key is a distinct state from a
//! zero value: every accessor reports it as `None` or as
//! [`TrajectoryError::MissingProperty`].

use crate::{Result, TrajectoryError};
use std::collections::BTreeMap;
use std::fmt;
use time::{Duration, OffsetDateTime};

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// A single property value
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum PropertyValue {
    Real(f64),
    Integer(i64),
    String(String),
    Timestamp(OffsetDateTime),
}

/// Kind tag of a [`PropertyValue`], used in error reports
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PropertyKind {
    Real,
    Integer,
    String,
    Timestamp,
}

impl fmt::Display for PropertyKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            PropertyKind::Real => "real",
            PropertyKind::Integer => "integer",
            PropertyKind::String => "string",
            PropertyKind::Timestamp => "timestamp",
        };
        f.write_str(name)
    }
}

impl PropertyValue {
    pub fn kind(&self) -> PropertyKind {
        match self {
            PropertyValue::Real(_) => PropertyKind::Real,
            PropertyValue::Integer(_) => PropertyKind::Integer,
            PropertyValue::String(_) => PropertyKind::String,
            PropertyValue::Timestamp(_) => PropertyKind::Timestamp,
        }
    }

    /// Interpolate between two values of the same kind
    ///
    /// Numbers and timestamps are interpolated linearly (integers are rounded).
    /// Strings, and pairs of differing kinds, take the value of the nearer endpoint.
    pub fn interpolate(&self, other: &PropertyValue, t: f64) -> PropertyValue {
        match (self, other) {
            (PropertyValue::Real(a), PropertyValue::Real(b)) => PropertyValue::Real(a + (b - a) * t),
            (PropertyValue::Integer(a), PropertyValue::Integer(b)) => {
                let value = *a as f64 + (*b as f64 - *a as f64) * t;
                PropertyValue::Integer(value.round() as i64)
            }
            (PropertyValue::Timestamp(a), PropertyValue::Timestamp(b)) => {
                PropertyValue::Timestamp(interpolate_timestamp(*a, *b, t))
            }
            _ if t < 0.5 => self.clone(),
            _ => other.clone(),
        }
    }
}

impl fmt::Display for PropertyValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            PropertyValue::Real(value) => write!(f, "{value}"),
            PropertyValue::Integer(value) => write!(f, "{value}"),
            PropertyValue::String(value) => write!(f, "{value:?}"),
            PropertyValue::Timestamp(value) => write!(f, "{value}"),
        }
    }
}

impl From<f64> for PropertyValue {
    fn from(value: f64) -> Self {
        PropertyValue::Real(value)
    }
}

impl From<i64> for PropertyValue {
    fn from(value: i64) -> Self {
        PropertyValue::Integer(value)
    }
}

impl From<&str> for PropertyValue {
    fn from(value: &str) -> Self {
        PropertyValue::String(value.to_string())
    }
}

impl From<String> for PropertyValue {
    fn from(value: String) -> Self {
        PropertyValue::String(value)
    }
}

impl From<OffsetDateTime> for PropertyValue {
    fn from(value: OffsetDateTime) -> Self {
        PropertyValue::Timestamp(value)
    }
}

/// Linear interpolation between two timestamps
///
/// Any `t` is accepted. Results that are not representable (NaN `t`, or a date
/// beyond the supported range) fall back to the nearer endpoint: `a` when `t < 0.5`
/// or `t` is NaN, `b` otherwise.
pub(crate) fn interpolate_timestamp(a: OffsetDateTime, b: OffsetDateTime, t: f64) -> OffsetDateTime {
    let nearer = if t >= 0.5 { b } else { a };
    Duration::checked_seconds_f64((b - a).as_seconds_f64() * t)
        .and_then(|offset| a.checked_add(offset))
        .unwrap_or(nearer)
}

/// Mapping from property name to value, owned by the point that carries it
///
/// Keys are kept ordered so that rendering is deterministic.
#[derive(Debug, Clone, Default, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct PropertyMap {
    values: BTreeMap<String, PropertyValue>,
}

impl PropertyMap {
    pub fn new() -> Self {
        Self::default()
    }

    /// Set a property, replacing any previous value under the same name
    pub fn set(&mut self, name: impl Into<String>, value: impl Into<PropertyValue>) {
        self.values.insert(name.into(), value.into());
    }

    pub fn get(&self, name: &str) -> Option<&PropertyValue> {
        self.values.get(name)
    }

    pub fn remove(&mut self, name: &str) -> Option<PropertyValue> {
        self.values.remove(name)
    }

    pub fn contains(&self, name: &str) -> bool {
        self.values.contains_key(name)
    }

    pub fn len(&self) -> usize {
        self.values.len()
    }

    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &PropertyValue)> {
        self.values.iter().map(|(name, value)| (name.as_str(), value))
    }

    /// Read a real-valued property
    ///
    /// Returns `None` both when the property is absent and when it holds a value of
    /// another kind; use [`PropertyMap::require_real`] to tell those apart.
    pub fn real(&self, name: &str) -> Option<f64> {
        match self.values.get(name) {
            Some(PropertyValue::Real(value)) => Some(*value),
            _ => None,
        }
    }

    pub fn integer(&self, name: &str) -> Option<i64> {
        match self.values.get(name) {
            Some(PropertyValue::Integer(value)) => Some(*value),
            _ => None,
        }
    }

    pub fn string(&self, name: &str) -> Option<&str> {
        match self.values.get(name) {
            Some(PropertyValue::String(value)) => Some(value.as_str()),
            _ => None,
        }
    }

    pub fn timestamp(&self, name: &str) -> Option<OffsetDateTime> {
        match self.values.get(name) {
            Some(PropertyValue::Timestamp(value)) => Some(*value),
            _ => None,
        }
    }

    /// Read a real-valued property, failing with a typed error when it is absent or
    /// holds another kind of value
    pub fn require_real(&self, name: &str) -> Result<f64> {
        match self.values.get(name) {
            Some(PropertyValue::Real(value)) => Ok(*value),
            Some(other) => Err(TrajectoryError::PropertyType {
                name: name.to_string(),
                expected: PropertyKind::Real,
                found: other.kind(),
            }),
            None => Err(TrajectoryError::MissingProperty {
                name: name.to_string(),
            }),
        }
    }

    /// Interpolate two property maps
    ///
    /// Properties present in both maps are interpolated with
    /// [`PropertyValue::interpolate`]. Properties present in only one map are kept
    /// when that map is the nearer endpoint.
    pub fn interpolate(&self, other: &PropertyMap, t: f64) -> PropertyMap {
        let near = if t < 0.5 { self } else { other };
        let mut values = BTreeMap::new();

        for (name, value) in &near.values {
            let interpolated = match (self.values.get(name), other.values.get(name)) {
                (Some(a), Some(b)) => a.interpolate(b, t),
                _ => value.clone(),
            };
            values.insert(name.clone(), interpolated);
        }

        PropertyMap { values }
    }
}

impl fmt::Display for PropertyMap {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("{")?;
        for (i, (name, value)) in self.values.iter().enumerate() {
            if i > 0 {
                f.write_str(", ")?;
            }
            write!(f, "{name}: {value}")?;
        }
        f.write_str("}")
    }
}

impl<K: Into<String>, V: Into<PropertyValue>> FromIterator<(K, V)> for PropertyMap {
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        let mut map = PropertyMap::new();
        for (name, value) in iter {
            map.set(name, value);
        }
        map
    }
}
