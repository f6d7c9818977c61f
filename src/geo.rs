//! Geo coordinate composite: an atomic `"<lat> <lon>"` string kept in step
//! with its two numeric components.
//!
//! Unset components hold [`COORDINATE_UNSET`]. A genuine reading of `0.0`
//! cannot be told apart from "unset"; callers that care must look at
//! [`GeoPoint::geo`] as well.

use crate::field::{non_blank, NormalizedField};
use serde::{Deserialize, Serialize};
use std::hash::{Hash, Hasher};

/// Placeholder stored for latitude/longitude before a value is known.
pub const COORDINATE_UNSET: f64 = 0.0;

/// One latitude or longitude, compared by bit pattern.
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Coordinate(f64);

impl Coordinate {
    pub fn value(self) -> f64 {
        self.0
    }
}

impl Default for Coordinate {
    fn default() -> Self {
        Self(COORDINATE_UNSET)
    }
}

impl PartialEq for Coordinate {
    fn eq(&self, other: &Self) -> bool {
        self.0.to_bits() == other.0.to_bits()
    }
}

impl Eq for Coordinate {}

impl Hash for Coordinate {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.0.to_bits().hash(state);
    }
}

fn parse_coordinate(raw: &str) -> Option<f64> {
    raw.parse::<f64>().ok()
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(from = "GeoPointRecord")]
pub struct GeoPoint {
    geo: NormalizedField,
    latitude: Coordinate,
    longitude: Coordinate,
}

/// Loaded form of a [`GeoPoint`]. A valid `geo` pair decides both
/// components; otherwise the components load on their own.
#[derive(Deserialize)]
struct GeoPointRecord {
    #[serde(default)]
    geo: Option<String>,
    #[serde(default)]
    latitude: Option<f64>,
    #[serde(default)]
    longitude: Option<f64>,
}

impl From<GeoPointRecord> for GeoPoint {
    fn from(record: GeoPointRecord) -> Self {
        let mut point = GeoPoint::default();
        point.set_geo(record.geo.as_deref());
        if point.geo.is_blank() {
            if let Some(latitude) = record.latitude {
                point.latitude = Coordinate(latitude);
            }
            if let Some(longitude) = record.longitude {
                point.longitude = Coordinate(longitude);
            }
        }
        point
    }
}

impl GeoPoint {
    pub fn geo(&self) -> Option<&str> {
        self.geo.get()
    }

    pub fn latitude(&self) -> f64 {
        self.latitude.value()
    }

    pub fn longitude(&self) -> f64 {
        self.longitude.value()
    }

    /// Set all three fields from a `"<lat> <lon>"` string.
    ///
    /// Blank or absent input clears the string and resets both components.
    /// Input that does not split into exactly two numeric tokens changes
    /// nothing.
    pub fn set_geo(&mut self, raw: Option<&str>) {
        if non_blank(raw).is_none() {
            self.geo.set(raw);
            self.latitude = Coordinate::default();
            self.longitude = Coordinate::default();
            return;
        }
        let raw = raw.unwrap_or_default();

        let tokens: Vec<&str> = raw.split_whitespace().collect();
        let [lat, lon] = tokens.as_slice() else {
            tracing::debug!(value = raw, tokens = tokens.len(), "ignoring geo without two tokens");
            return;
        };

        match (parse_coordinate(lat), parse_coordinate(lon)) {
            (Some(latitude), Some(longitude)) => {
                self.geo.set(Some(format!("{} {}", lat, lon).as_str()));
                self.latitude = Coordinate(latitude);
                self.longitude = Coordinate(longitude);
            }
            _ => tracing::debug!(value = raw, "ignoring geo with non-numeric component"),
        }
    }

    /// Overwrite latitude only. Blank or malformed input is ignored.
    pub fn set_latitude(&mut self, raw: Option<&str>) {
        if let Some(value) = Self::component(raw, "latitude") {
            self.latitude = Coordinate(value);
        }
    }

    /// Overwrite longitude only. Blank or malformed input is ignored.
    pub fn set_longitude(&mut self, raw: Option<&str>) {
        if let Some(value) = Self::component(raw, "longitude") {
            self.longitude = Coordinate(value);
        }
    }

    fn component(raw: Option<&str>, which: &'static str) -> Option<f64> {
        let raw = non_blank(raw)?;
        let parsed = parse_coordinate(raw);
        if parsed.is_none() {
            tracing::debug!(value = raw, component = which, "ignoring malformed coordinate");
        }
        parsed
    }
}
