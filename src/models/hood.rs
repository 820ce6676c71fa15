//! Hood record: the named region plus its distributed mesh profile.

use chrono::{DateTime, Utc};
use geo_types::MultiPolygon;
use serde::{Deserialize, Serialize};

use super::{Point, Ring};

/// Per-band radio configuration distributed with a hood profile.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct RadioSettings {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub channel: Option<u32>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub mode: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub mesh_type: Option<String>,
}

/// A named geographic region ("hood") with its resolution geometry and
/// the wireless profile the registry hands out for it.
///
/// Only `id` and `name` are required. A hood without a center still
/// matches through its polygons but is skipped by the nearest-center
/// fallback; a hood without polygons competes on center distance only.
/// Polygons may be disjoint (exclaves) and must arrive pre-closed for
/// the containment walk to treat them as closed rings.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Hood {
    pub id: i64,

    pub name: String,

    /// Center point used by the nearest-center fallback
    #[serde(skip_serializing_if = "Option::is_none")]
    pub center: Option<Point>,

    /// Bounding polygon rings, in registry order
    #[serde(skip_serializing_if = "Vec::is_empty", default)]
    pub polygons: Vec<Ring>,

    /// Access-point ESSID
    #[serde(rename = "essid", skip_serializing_if = "Option::is_none")]
    pub ap_essid: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub mesh_bssid: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub mesh_essid: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub mesh_id: Option<String>,

    /// VPN protocol for the hood's gateways
    #[serde(skip_serializing_if = "Option::is_none")]
    pub protocol: Option<String>,

    /// 2.4 GHz band settings
    #[serde(skip_serializing_if = "Option::is_none")]
    pub radio2: Option<RadioSettings>,

    /// 5 GHz band settings
    #[serde(skip_serializing_if = "Option::is_none")]
    pub radio5: Option<RadioSettings>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub upgrade_path: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub ntp_ip: Option<String>,

    /// Client network prefix
    #[serde(skip_serializing_if = "Option::is_none")]
    pub prefix: Option<String>,

    /// Last profile change, unix seconds on the wire
    #[serde(
        rename = "timestamp",
        with = "chrono::serde::ts_seconds_option",
        skip_serializing_if = "Option::is_none",
        default
    )]
    pub changed_on: Option<DateTime<Utc>>,
}

impl Hood {
    /// Create a hood with only the required fields set
    pub fn new(id: i64, name: &str) -> Self {
        Self {
            id,
            name: name.to_string(),
            center: None,
            polygons: Vec::new(),
            ap_essid: None,
            mesh_bssid: None,
            mesh_essid: None,
            mesh_id: None,
            protocol: None,
            radio2: None,
            radio5: None,
            upgrade_path: None,
            ntp_ip: None,
            prefix: None,
            changed_on: None,
        }
    }

    pub fn with_center(mut self, center: Point) -> Self {
        self.center = Some(center);
        self
    }

    /// Append a bounding ring
    pub fn add_polygon(&mut self, ring: Ring) {
        self.polygons.push(ring);
    }

    /// Append the exterior ring of every polygon in a geo multipolygon.
    ///
    /// Geo polygons close their exteriors on construction, so the rings
    /// arrive ready for the containment walk.
    pub fn add_geometry(&mut self, geometry: &MultiPolygon<f64>) {
        self.polygons.extend(Ring::from_multi_polygon(geometry));
    }

    /// Whether any of the hood's rings contains the point
    pub fn contains(&self, point: Point) -> bool {
        self.polygons.iter().any(|ring| ring.contains(point))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;
    use geo_types::polygon;

    fn square(offset: f64) -> Ring {
        Ring::closed(vec![
            Point::new(offset, 0.0),
            Point::new(offset, 10.0),
            Point::new(offset + 10.0, 10.0),
            Point::new(offset + 10.0, 0.0),
        ])
    }

    #[test]
    fn test_contains_through_any_disjoint_ring() {
        let mut hood = Hood::new(7, "exclave");
        hood.add_polygon(square(0.0));
        hood.add_polygon(square(100.0));

        assert!(hood.contains(Point::new(5.0, 5.0)));
        assert!(hood.contains(Point::new(105.0, 5.0)));
        assert!(!hood.contains(Point::new(50.0, 5.0)));
    }

    #[test]
    fn test_contains_without_polygons() {
        let hood = Hood::new(1, "centered").with_center(Point::new(11.0, 49.5));
        assert!(!hood.contains(Point::new(11.0, 49.5)));
    }

    #[test]
    fn test_add_geometry_takes_exterior_rings() {
        let mut hood = Hood::new(2, "geo");
        hood.add_geometry(&MultiPolygon(vec![
            polygon![(x: 0.0, y: 0.0), (x: 0.0, y: 10.0), (x: 10.0, y: 10.0)],
            polygon![(x: 20.0, y: 0.0), (x: 20.0, y: 10.0), (x: 30.0, y: 10.0)],
        ]));
        assert_eq!(hood.polygons.len(), 2);
        assert!(hood.polygons.iter().all(Ring::is_closed));
    }

    #[test]
    fn test_minimal_hood_serializes_without_optionals() {
        let v = serde_json::to_value(Hood::new(3, "bare")).unwrap();
        assert_eq!(v, serde_json::json!({ "id": 3, "name": "bare" }));
    }

    #[test]
    fn test_timestamp_serializes_as_unix_seconds() {
        let mut hood = Hood::new(4, "stamped");
        hood.changed_on = Some(Utc.timestamp_opt(1_546_300_800, 0).unwrap());

        let v = serde_json::to_value(&hood).unwrap();
        assert_eq!(v["timestamp"], serde_json::json!(1_546_300_800));

        let back: Hood = serde_json::from_value(v).unwrap();
        assert_eq!(back.changed_on, hood.changed_on);
    }

    #[test]
    fn test_ap_essid_uses_wire_name() {
        let mut hood = Hood::new(5, "named");
        hood.ap_essid = Some("ap.ffx".to_string());
        hood.radio2 = Some(RadioSettings {
            channel: Some(1),
            mode: Some("HT20".to_string()),
            mesh_type: Some("802.11s".to_string()),
        });

        let v = serde_json::to_value(&hood).unwrap();
        assert_eq!(v["essid"], serde_json::json!("ap.ffx"));
        assert_eq!(v["radio2"]["channel"], serde_json::json!(1));
        assert!(v.get("radio5").is_none());
    }

    #[test]
    fn test_deserialize_minimal_hood() {
        let hood: Hood =
            serde_json::from_value(serde_json::json!({ "id": 0, "name": "trainstation" }))
                .unwrap();
        assert_eq!(hood.id, 0);
        assert!(hood.center.is_none());
        assert!(hood.polygons.is_empty());
        assert!(hood.changed_on.is_none());
    }
}
