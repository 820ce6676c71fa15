//! In-memory hood catalog: the ordered candidate list, its gateways,
//! and assembly from flat polygon vertex rows.

use hashbrown::HashMap;
use serde::{Deserialize, Serialize};
use tracing::{debug, info};

use crate::models::{Gateway, Hood, Point, Ring};
use crate::resolver::{resolve, HoodMatch};

/// Id reserved for the catch-all default hood ("trainstation").
pub const DEFAULT_HOOD_ID: i64 = 0;

/// One row of the flat polygon storage.
///
/// Consecutive rows sharing a `(hood_id, polygon_id)` pair form one
/// ring, vertex order following row order. The storage carries no
/// closing convention of its own; a ring is closed only if its rows
/// repeat the first vertex at the end.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct PolygonVertex {
    pub hood_id: i64,
    pub polygon_id: i64,
    pub lon: f64,
    pub lat: f64,
}

/// The hood registry's candidate list.
///
/// Hoods keep the order they were supplied in — resolution semantics
/// depend on it (first polygon match wins, later candidate wins a
/// distance tie), so the catalog never reorders or re-keys them.
#[derive(Debug, Clone, Default)]
pub struct HoodCatalog {
    hoods: Vec<Hood>,
    gateways: HashMap<i64, Vec<Gateway>>,
}

impl HoodCatalog {
    /// Catalog over pre-assembled hoods, order preserved
    pub fn new(hoods: Vec<Hood>) -> Self {
        Self {
            hoods,
            gateways: HashMap::new(),
        }
    }

    /// Assemble a catalog from hood records and flat vertex rows.
    ///
    /// Rows are grouped by `(hood_id, polygon_id)` into rings, row
    /// order preserved within each ring and first-appearance order
    /// across a hood's rings. Rows referencing an unknown hood id are
    /// skipped.
    pub fn assemble(mut hoods: Vec<Hood>, rows: &[PolygonVertex]) -> Self {
        let positions: HashMap<i64, usize> = hoods
            .iter()
            .enumerate()
            .map(|(idx, hood)| (hood.id, idx))
            .collect();

        // (hood_id, polygon_id) -> slot in `rings`, so interleaved rows
        // still land in their own ring.
        let mut slots: HashMap<(i64, i64), usize> = HashMap::new();
        let mut rings: Vec<(usize, Vec<Point>)> = Vec::new();
        let mut skipped = 0usize;

        for row in rows {
            let Some(&hood_idx) = positions.get(&row.hood_id) else {
                debug!(
                    hood_id = row.hood_id,
                    polygon_id = row.polygon_id,
                    "skipping vertex row for unknown hood"
                );
                skipped += 1;
                continue;
            };

            let slot = *slots.entry((row.hood_id, row.polygon_id)).or_insert_with(|| {
                rings.push((hood_idx, Vec::new()));
                rings.len() - 1
            });
            rings[slot].1.push(Point::new(row.lon, row.lat));
        }

        let ring_count = rings.len();
        for (hood_idx, vertices) in rings {
            hoods[hood_idx].add_polygon(Ring::new(vertices));
        }

        info!(
            hoods = hoods.len(),
            rings = ring_count,
            skipped_rows = skipped,
            "assembled hood catalog"
        );

        Self::new(hoods)
    }

    /// Register the gateways of a hood, replacing any previous set
    pub fn set_gateways(&mut self, hood_id: i64, gateways: Vec<Gateway>) {
        self.gateways.insert(hood_id, gateways);
    }

    /// Gateways of a hood; unknown ids yield an empty slice
    pub fn gateways(&self, hood_id: i64) -> &[Gateway] {
        self.gateways.get(&hood_id).map_or(&[], Vec::as_slice)
    }

    /// The catch-all default hood, when the catalog carries one
    pub fn default_hood(&self) -> Option<&Hood> {
        self.get(DEFAULT_HOOD_ID)
    }

    /// Hood by id
    pub fn get(&self, hood_id: i64) -> Option<&Hood> {
        self.hoods.iter().find(|hood| hood.id == hood_id)
    }

    /// Hoods in supplied order
    pub fn hoods(&self) -> &[Hood] {
        &self.hoods
    }

    pub fn len(&self) -> usize {
        self.hoods.len()
    }

    pub fn is_empty(&self) -> bool {
        self.hoods.is_empty()
    }

    /// Resolve a point over the catalog's hoods in supplied order
    pub fn resolve(&self, point: Point) -> Option<HoodMatch<'_>> {
        resolve(point, &self.hoods)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::resolver::MatchSource;

    fn vertex(hood_id: i64, polygon_id: i64, lon: f64, lat: f64) -> PolygonVertex {
        PolygonVertex {
            hood_id,
            polygon_id,
            lon,
            lat,
        }
    }

    fn square_rows(hood_id: i64, polygon_id: i64, offset_lon: f64) -> Vec<PolygonVertex> {
        vec![
            vertex(hood_id, polygon_id, offset_lon, 0.0),
            vertex(hood_id, polygon_id, offset_lon, 10.0),
            vertex(hood_id, polygon_id, offset_lon + 10.0, 10.0),
            vertex(hood_id, polygon_id, offset_lon + 10.0, 0.0),
            vertex(hood_id, polygon_id, offset_lon, 0.0),
        ]
    }

    #[test]
    fn test_assemble_groups_rows_into_rings() {
        let mut rows = square_rows(1, 1, 0.0);
        rows.extend(square_rows(1, 2, 100.0));
        rows.extend(square_rows(2, 1, 50.0));

        let catalog = HoodCatalog::assemble(vec![Hood::new(1, "a"), Hood::new(2, "b")], &rows);

        let a = catalog.get(1).unwrap();
        assert_eq!(a.polygons.len(), 2);
        assert_eq!(a.polygons[0].vertices()[0], Point::new(0.0, 0.0));
        assert_eq!(a.polygons[1].vertices()[0], Point::new(100.0, 0.0));

        let b = catalog.get(2).unwrap();
        assert_eq!(b.polygons.len(), 1);
        assert_eq!(b.polygons[0].len(), 5);
    }

    #[test]
    fn test_assemble_keeps_row_order_with_interleaved_polygons() {
        // Rows of two rings interleaved: each keeps its own row order.
        let rows = vec![
            vertex(1, 1, 0.0, 0.0),
            vertex(1, 2, 100.0, 0.0),
            vertex(1, 1, 0.0, 10.0),
            vertex(1, 2, 100.0, 10.0),
            vertex(1, 1, 10.0, 10.0),
        ];

        let catalog = HoodCatalog::assemble(vec![Hood::new(1, "a")], &rows);
        let hood = catalog.get(1).unwrap();
        assert_eq!(
            hood.polygons[0].vertices(),
            &[
                Point::new(0.0, 0.0),
                Point::new(0.0, 10.0),
                Point::new(10.0, 10.0)
            ]
        );
        assert_eq!(
            hood.polygons[1].vertices(),
            &[Point::new(100.0, 0.0), Point::new(100.0, 10.0)]
        );
    }

    #[test]
    fn test_assemble_skips_rows_for_unknown_hoods() {
        let mut rows = square_rows(1, 1, 0.0);
        rows.extend(square_rows(99, 1, 50.0));

        let catalog = HoodCatalog::assemble(vec![Hood::new(1, "a")], &rows);
        assert_eq!(catalog.len(), 1);
        assert_eq!(catalog.get(1).unwrap().polygons.len(), 1);
    }

    #[test]
    fn test_default_hood_is_id_zero() {
        let catalog = HoodCatalog::new(vec![Hood::new(3, "a"), Hood::new(0, "trainstation")]);
        assert_eq!(catalog.default_hood().unwrap().name, "trainstation");

        let without = HoodCatalog::new(vec![Hood::new(3, "a")]);
        assert!(without.default_hood().is_none());
    }

    #[test]
    fn test_gateways_of_unknown_hood_are_empty() {
        let mut catalog = HoodCatalog::new(vec![Hood::new(1, "a")]);
        catalog.set_gateways(1, vec![Gateway::fastd("gw01", "10.50.0.1", 10000, "f00d")]);

        assert_eq!(catalog.gateways(1).len(), 1);
        assert!(catalog.gateways(99).is_empty());
    }

    #[test]
    fn test_catalog_preserves_insertion_order() {
        let catalog = HoodCatalog::new(vec![
            Hood::new(5, "five"),
            Hood::new(1, "one"),
            Hood::new(3, "three"),
        ]);
        let ids: Vec<i64> = catalog.hoods().iter().map(|h| h.id).collect();
        assert_eq!(ids, vec![5, 1, 3]);
    }

    #[test]
    fn test_resolve_walks_hoods_in_supplied_order() {
        let mut rows = square_rows(1, 1, 0.0);
        rows.extend(square_rows(2, 1, 5.0));

        let catalog = HoodCatalog::assemble(vec![Hood::new(2, "b"), Hood::new(1, "a")], &rows);

        // (7, 5) lies in both squares; the first-supplied hood wins.
        let m = catalog.resolve(Point::new(7.0, 5.0)).unwrap();
        assert_eq!(m.hood.id, 2);
        assert_eq!(m.source, MatchSource::Polygon);
    }

    #[test]
    fn test_empty_catalog_resolves_to_none() {
        let catalog = HoodCatalog::default();
        assert!(catalog.resolve(Point::new(11.0, 49.5)).is_none());
        assert!(catalog.is_empty());
    }
}
