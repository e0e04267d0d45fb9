//! Mesh topology queries.
//!
//! The vertex → triangle adjacency is built incrementally by the loader
//! as faces are triangulated, and is what smooth normals average over.
//! Edge queries are derived on demand from the triangle arena.

use std::collections::{HashMap, HashSet};

use meshview_types::{TriangleId, VertexId};

use crate::mesh::Mesh;

/// Per-vertex lists of incident triangles.
///
/// Holds [`TriangleId`]s into the mesh's triangle arena; the arena is
/// the sole owner of triangle data.
#[derive(Debug, Clone, Default)]
pub struct Topology {
    /// For each vertex, the triangles that contain it.
    vertex_triangles: Vec<Vec<TriangleId>>,
}

impl Topology {
    pub(crate) fn with_capacity(vertex_capacity: usize) -> Self {
        Self {
            vertex_triangles: Vec::with_capacity(vertex_capacity),
        }
    }

    /// Grows the table to at least `count` slots.
    pub(crate) fn ensure_slots(&mut self, count: usize) {
        if self.vertex_triangles.len() < count {
            self.vertex_triangles.resize_with(count, Vec::new);
        }
    }

    /// Records that triangle `t` touches vertex `v`. The slot must exist.
    pub(crate) fn link(&mut self, v: VertexId, t: TriangleId) {
        self.vertex_triangles[v.index()].push(t);
    }

    /// Number of vertex slots.
    pub fn slot_count(&self) -> usize {
        self.vertex_triangles.len()
    }

    /// Triangles incident to `v`. Empty for an isolated vertex.
    pub fn incident(&self, v: VertexId) -> &[TriangleId] {
        &self.vertex_triangles[v.index()]
    }

    /// Vertices with no incident triangle.
    pub fn isolated_vertices(&self) -> impl Iterator<Item = VertexId> + '_ {
        self.vertex_triangles
            .iter()
            .enumerate()
            .filter(|(_, tris)| tris.is_empty())
            .map(|(i, _)| VertexId(i as u32))
    }

    /// Returns the 1-ring vertex neighborhood of vertex `v`.
    ///
    /// These are all vertices connected to `v` by an edge.
    pub fn one_ring(&self, v: VertexId, mesh: &Mesh) -> HashSet<VertexId> {
        let mut neighbors = HashSet::new();
        for &tri in self.incident(v) {
            for &corner in &mesh.triangle(tri).vertices {
                if corner != v {
                    neighbors.insert(corner);
                }
            }
        }
        neighbors
    }

    /// Counts how many triangles share each undirected edge.
    ///
    /// Keys are `(v_min, v_max)` so both winding directions collapse.
    pub fn edge_usage(mesh: &Mesh) -> HashMap<(VertexId, VertexId), u32> {
        let mut usage = HashMap::new();
        for tri in mesh.triangles() {
            let [a, b, c] = tri.vertices;
            for (v0, v1) in [(a, b), (b, c), (c, a)] {
                let key = if v0 < v1 { (v0, v1) } else { (v1, v0) };
                *usage.entry(key).or_insert(0) += 1;
            }
        }
        usage
    }

    /// Returns the number of boundary edges (edges with only 1 adjacent triangle).
    pub fn boundary_edge_count(mesh: &Mesh) -> usize {
        Self::edge_usage(mesh).values().filter(|&&n| n == 1).count()
    }

    /// Returns true if the mesh is closed (no boundary edges).
    pub fn is_closed(mesh: &Mesh) -> bool {
        Self::boundary_edge_count(mesh) == 0
    }
}
