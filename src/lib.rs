//! hoodselect - resolve a geographic coordinate to its hood.
//!
//! A hood is a named region with an optional center point and zero or
//! more bounding polygon rings. Resolution tries polygon containment
//! first ([`pip`]), then falls back to the nearest hood center by
//! haversine distance ([`geo`]). All region and polygon data is
//! supplied in memory by the caller; the crate performs no I/O.

pub mod catalog;
pub mod geo;
pub mod models;
pub mod pip;
pub mod resolver;

pub use catalog::{HoodCatalog, PolygonVertex, DEFAULT_HOOD_ID};
pub use geo::{cos_deg, haversine_distance_km, sin_deg, EARTH_RADIUS_KM};
pub use models::{Gateway, Hood, Point, PointParseError, RadioSettings, Ring};
pub use pip::{point_in_polygon, point_on_vertex};
pub use resolver::{resolve, HoodMatch, MatchSource};
