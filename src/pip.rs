//! Point-in-polygon (PIP) containment test.
//!
//! Ray casting with explicit boundary handling: a point sitting on a
//! vertex, on a horizontal boundary segment or exactly on an edge
//! crossing is reported as not contained, regardless of crossing
//! parity. The edge walk is half-open — edges run `(v[i-1], v[i])` for
//! `i in 1..len` and the last vertex is never implicitly connected back
//! to the first — so rings must repeat their first vertex at the end to
//! test as closed polygons.

use crate::models::{Point, Ring};

/// Whether the point coincides exactly with one of the vertices.
pub fn point_on_vertex(point: Point, vertices: &[Point]) -> bool {
    vertices.iter().any(|v| *v == point)
}

/// Even-odd containment test over a vertex sequence.
///
/// With `treat_vertex_as_outside` set (the usual mode), a point equal
/// to any vertex is outside before the walk starts. Fewer than 3
/// vertices never contain anything. Boundary hits exit early as
/// outside; otherwise an odd crossing count means contained.
pub fn point_in_polygon(point: Point, vertices: &[Point], treat_vertex_as_outside: bool) -> bool {
    if vertices.len() < 3 {
        return false;
    }

    if treat_vertex_as_outside && point_on_vertex(point, vertices) {
        return false;
    }

    let mut crossings = 0;

    for edge in vertices.windows(2) {
        let (v1, v2) = (edge[0], edge[1]);

        // Point on a horizontal boundary segment.
        if v1.lat == v2.lat
            && v1.lat == point.lat
            && point.lon > v1.lon.min(v2.lon)
            && point.lon < v1.lon.max(v2.lon)
        {
            return false;
        }

        if point.lat > v1.lat.min(v2.lat)
            && point.lat <= v1.lat.max(v2.lat)
            && point.lon <= v1.lon.max(v2.lon)
            && v1.lat != v2.lat
        {
            let x_intersect =
                (point.lat - v1.lat) * (v2.lon - v1.lon) / (v2.lat - v1.lat) + v1.lon;

            // Point on a non-horizontal boundary.
            if x_intersect == point.lon {
                return false;
            }

            if v1.lon == v2.lon || point.lon <= x_intersect {
                crossings += 1;
            }
        }
    }

    crossings % 2 != 0
}

impl Ring {
    /// Boundary-exclusive containment, vertices treated as outside.
    pub fn contains(&self, point: Point) -> bool {
        point_in_polygon(point, self.vertices(), true)
    }
}
