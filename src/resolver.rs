//! Hood resolution: polygon containment first, nearest center second.

use tracing::debug;

use crate::geo::haversine_distance_km;
use crate::models::{Hood, Point};

/// Which rule produced a match.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum MatchSource {
    /// One of the hood's rings contains the point
    Polygon,
    /// Nearest-center fallback, with the winning distance
    NearestCenter { distance_km: f64 },
}

/// A resolved hood together with the rule that matched it.
#[derive(Debug, Clone, Copy)]
pub struct HoodMatch<'a> {
    pub hood: &'a Hood,
    pub source: MatchSource,
}

/// Resolve a point against an ordered hood list.
///
/// The polygon pass runs first, in candidate order: the first hood with
/// a containing ring wins outright, regardless of any center distance.
/// Overlapping polygons are a data-quality issue; first match wins.
///
/// Without a polygon match, the nearest-center pass walks all hoods
/// that have a center and keeps the minimum haversine distance. The
/// comparison is `<=`, so on an exact tie the later candidate wins.
/// Hoods without a center are skipped here but still participate in
/// the polygon pass.
///
/// `None` means no ring contained the point and no candidate had a
/// center — a normal outcome, not a failure.
pub fn resolve<'a>(point: Point, hoods: &'a [Hood]) -> Option<HoodMatch<'a>> {
    for hood in hoods {
        if hood.contains(point) {
            debug!(hood_id = hood.id, name = %hood.name, "polygon match");
            return Some(HoodMatch {
                hood,
                source: MatchSource::Polygon,
            });
        }
    }

    let mut best: Option<(&Hood, f64)> = None;

    for hood in hoods {
        let Some(center) = hood.center else {
            continue;
        };

        let distance_km = haversine_distance_km(center.lat, center.lon, point.lat, point.lon);
        debug!(
            hood_id = hood.id,
            name = %hood.name,
            distance_km,
            "distance to hood center"
        );

        if best.map_or(true, |(_, best_km)| distance_km <= best_km) {
            debug!(hood_id = hood.id, name = %hood.name, "new nearest hood");
            best = Some((hood, distance_km));
        }
    }

    best.map(|(hood, distance_km)| HoodMatch {
        hood,
        source: MatchSource::NearestCenter { distance_km },
    })
}
