//! Geometric value types: points and polygon rings.

use std::fmt;
use std::str::FromStr;

use geo_types::{Coord, LineString, MultiPolygon, Polygon};
use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Error parsing the delimited `"lon lat"` point form.
///
/// Both malformed shapes are surfaced as typed errors rather than
/// propagated as NaN: Rust has no silent string-to-float coercion, so
/// validation happens here and the geometry never sees a NaN from
/// parsing.
#[derive(Debug, Error, PartialEq)]
pub enum PointParseError {
    /// The string did not split on a single space into exactly two fields.
    #[error("expected two space-separated fields, got {0}")]
    FieldCount(usize),
    /// A field is not a valid floating-point number.
    #[error("invalid coordinate value: {0}")]
    InvalidNumber(#[from] std::num::ParseFloatError),
}

/// Geographic point in decimal degrees, longitude first.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Point {
    pub lon: f64,
    pub lat: f64,
}

impl Point {
    pub fn new(lon: f64, lat: f64) -> Self {
        Self { lon, lat }
    }
}

impl From<(f64, f64)> for Point {
    /// `(lon, lat)` pair.
    fn from((lon, lat): (f64, f64)) -> Self {
        Self { lon, lat }
    }
}

impl From<Coord<f64>> for Point {
    fn from(coord: Coord<f64>) -> Self {
        Self {
            lon: coord.x,
            lat: coord.y,
        }
    }
}

impl From<geo_types::Point<f64>> for Point {
    fn from(point: geo_types::Point<f64>) -> Self {
        Self {
            lon: point.x(),
            lat: point.y(),
        }
    }
}

impl FromStr for Point {
    type Err = PointParseError;

    /// Parse the registry's `"lon lat"` string form.
    ///
    /// The delimiter is a single space; anything that does not split
    /// into exactly two fields is rejected.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let fields: Vec<&str> = s.split(' ').collect();
        if fields.len() != 2 {
            return Err(PointParseError::FieldCount(fields.len()));
        }
        Ok(Self {
            lon: fields[0].parse()?,
            lat: fields[1].parse()?,
        })
    }
}

impl fmt::Display for Point {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} {}", self.lon, self.lat)
    }
}

/// Polygon ring: an ordered vertex sequence.
///
/// Insertion order defines the edges. The containment walk never
/// connects the last vertex back to the first, so a ring must repeat
/// its first vertex at the end to be treated as closed —
/// [`Ring::closed`] does that for you, and rings converted from geo
/// polygons arrive closed already.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Ring(Vec<Point>);

impl Ring {
    /// Ring over the vertices exactly as given.
    pub fn new(vertices: Vec<Point>) -> Self {
        Self(vertices)
    }

    /// Ring with the first vertex appended at the end when missing.
    pub fn closed(mut vertices: Vec<Point>) -> Self {
        if !vertices.is_empty() && vertices.first() != vertices.last() {
            vertices.push(vertices[0]);
        }
        Self(vertices)
    }

    /// Exterior ring of a geo polygon (closed by construction there).
    ///
    /// Interior rings are dropped: the flat vertex-row storage this
    /// crate models has no hole concept.
    pub fn from_polygon(polygon: &Polygon<f64>) -> Self {
        Self(polygon.exterior().coords().copied().map(Point::from).collect())
    }

    /// Exterior rings of every polygon in a multipolygon.
    pub fn from_multi_polygon(mp: &MultiPolygon<f64>) -> Vec<Self> {
        mp.0.iter().map(Self::from_polygon).collect()
    }

    pub fn vertices(&self) -> &[Point] {
        &self.0
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Whether the first vertex is repeated at the end.
    pub fn is_closed(&self) -> bool {
        self.0.len() >= 2 && self.0.first() == self.0.last()
    }
}

impl From<LineString<f64>> for Ring {
    /// Take the line string's coordinates as-is (openness preserved).
    fn from(line: LineString<f64>) -> Self {
        Self(line.0.into_iter().map(Point::from).collect())
    }
}
