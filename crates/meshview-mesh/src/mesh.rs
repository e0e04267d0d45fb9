//! Core mesh type.
//!
//! Triangles live in a single arena (`Vec<Triangle>`). The per-vertex
//! adjacency lists and the face records refer to a triangle by its
//! [`TriangleId`], never by pointer.
//!
//! The mesh is built by one pass of the loader (or a generator) and is
//! read-only afterwards; mutation goes through `pub(crate)` builders.

use meshview_math::{Vec2, Vec3};
use meshview_types::constants::DEFAULT_COLOR;
use meshview_types::{MeshviewError, MeshviewResult, TriangleId, VertexId};

use crate::topology::Topology;

/// A triangle produced by fan triangulation.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Triangle {
    /// The three corners, in winding order.
    pub vertices: [VertexId; 3],
    /// Color of the material active when the face was read.
    pub color: Vec3,
}

impl Triangle {
    /// Corner indices as written in OBJ face records (1-based).
    pub fn one_based(&self) -> [u32; 3] {
        self.vertices.map(VertexId::one_based)
    }
}

/// One `pos[/tex[/norm]]` token of an OBJ face record.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FaceCorner {
    /// Position slot, if the token had one.
    pub position: Option<VertexId>,
    /// Raw texture-coordinate index (unused downstream).
    pub texture: Option<i64>,
    /// Raw normal-sample index (unused downstream).
    pub normal: Option<i64>,
}

/// A triangulated OBJ face.
#[derive(Debug, Clone, PartialEq)]
pub struct Face {
    /// Corners in file order, including any without a position index.
    pub corners: Vec<FaceCorner>,
    /// First triangle of the face's fan; the fan is contiguous.
    pub first_triangle: TriangleId,
    /// Number of triangles the face produced (`positions - 2`).
    pub triangle_count: u32,
}

/// An indexed triangle mesh with per-vertex colors and adjacency.
#[derive(Debug, Clone, Default)]
pub struct Mesh {
    positions: Vec<Vec3>,
    tex_coords: Vec<Vec2>,
    normal_samples: Vec<Vec3>,
    faces: Vec<Face>,
    triangles: Vec<Triangle>,
    colors: Vec<Vec3>,
    topology: Topology,
}

impl Mesh {
    /// Creates an empty mesh.
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates an empty mesh with pre-allocated capacity.
    pub fn with_capacity(vertex_capacity: usize, triangle_capacity: usize) -> Self {
        Self {
            positions: Vec::with_capacity(vertex_capacity),
            colors: Vec::with_capacity(vertex_capacity),
            triangles: Vec::with_capacity(triangle_capacity),
            topology: Topology::with_capacity(vertex_capacity),
            ..Self::default()
        }
    }

    /// Returns the number of declared positions.
    #[inline]
    pub fn vertex_count(&self) -> usize {
        self.positions.len()
    }

    /// Returns the number of triangles.
    #[inline]
    pub fn triangle_count(&self) -> usize {
        self.triangles.len()
    }

    /// True if the mesh has no triangles. A mesh that failed to load is
    /// empty, but so is a valid point cloud.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.triangles.is_empty()
    }

    /// Returns the position of vertex `v`.
    #[inline]
    pub fn position(&self, v: VertexId) -> Vec3 {
        self.positions[v.index()]
    }

    /// Returns the resolved color of vertex `v`.
    #[inline]
    pub fn color(&self, v: VertexId) -> Vec3 {
        self.colors[v.index()]
    }

    /// Returns triangle `t`.
    #[inline]
    pub fn triangle(&self, t: TriangleId) -> &Triangle {
        &self.triangles[t.index()]
    }

    /// Returns the three corner positions of triangle `t`.
    #[inline]
    pub fn triangle_positions(&self, t: TriangleId) -> [Vec3; 3] {
        self.triangle(t).vertices.map(|v| self.position(v))
    }

    /// Triangles incident to vertex `v`, in triangulation order.
    #[inline]
    pub fn incident_triangles(&self, v: VertexId) -> &[TriangleId] {
        self.topology.incident(v)
    }

    pub fn positions(&self) -> &[Vec3] {
        &self.positions
    }

    pub fn colors(&self) -> &[Vec3] {
        &self.colors
    }

    pub fn triangles(&self) -> &[Triangle] {
        &self.triangles
    }

    /// Texture coordinates from `vt` records.
    pub fn tex_coords(&self) -> &[Vec2] {
        &self.tex_coords
    }

    /// Normals from `vn` records. These are never used as shading normals.
    pub fn normal_samples(&self) -> &[Vec3] {
        &self.normal_samples
    }

    pub fn faces(&self) -> &[Face] {
        &self.faces
    }

    pub fn topology(&self) -> &Topology {
        &self.topology
    }

    /// Iterates vertex ids `0..vertex_count`.
    pub fn vertex_ids(&self) -> impl Iterator<Item = VertexId> {
        (0..self.positions.len() as u32).map(VertexId)
    }

    /// Iterates triangle ids `0..triangle_count`.
    pub fn triangle_ids(&self) -> impl Iterator<Item = TriangleId> {
        (0..self.triangles.len() as u32).map(TriangleId)
    }

    /// Validates mesh integrity.
    ///
    /// Checks:
    /// - Color and adjacency tables have one slot per position
    /// - Triangle corners are within bounds
    /// - Adjacency lists only name existing triangles
    pub fn validate(&self) -> MeshviewResult<()> {
        let n = self.positions.len();

        if self.colors.len() != n {
            return Err(MeshviewError::InvalidMesh(format!(
                "Color table has {} slots for {} positions",
                self.colors.len(),
                n
            )));
        }
        if self.topology.slot_count() != n {
            return Err(MeshviewError::InvalidMesh(format!(
                "Adjacency table has {} slots for {} positions",
                self.topology.slot_count(),
                n
            )));
        }

        for (t, tri) in self.triangles.iter().enumerate() {
            if let Some(v) = tri.vertices.iter().find(|v| v.index() >= n) {
                return Err(MeshviewError::InvalidMesh(format!(
                    "Triangle {} references vertex {} (vertex count: {})",
                    t,
                    v.one_based(),
                    n
                )));
            }
        }

        let tri_count = self.triangles.len();
        for v in self.vertex_ids() {
            if self.topology.incident(v).iter().any(|t| t.index() >= tri_count) {
                return Err(MeshviewError::InvalidMesh(format!(
                    "Adjacency of vertex {} names a missing triangle",
                    v.one_based()
                )));
            }
        }

        Ok(())
    }

    // ─── Builders (loader and generators only) ────────────────────

    /// Appends a position, returning its id.
    ///
    /// A slot pre-grown by a forward-referencing face keeps the color its
    /// triangles assigned. A slot no triangle has touched gets `color`.
    pub(crate) fn push_position(&mut self, position: Vec3, color: Vec3) -> VertexId {
        let id = VertexId(self.positions.len() as u32);
        self.positions.push(position);
        let grown = self.ensure_vertex_slot(id, color);
        // Every painted slot is linked to the triangle that painted it.
        if !grown && self.topology.incident(id).is_empty() {
            self.colors[id.index()] = color;
        }
        id
    }

    pub(crate) fn push_tex_coord(&mut self, uv: Vec2) {
        self.tex_coords.push(uv);
    }

    pub(crate) fn push_normal_sample(&mut self, normal: Vec3) {
        self.normal_samples.push(normal);
    }

    pub(crate) fn push_face(&mut self, face: Face) {
        self.faces.push(face);
    }

    /// Appends a triangle to the arena, paints its corners, and links it
    /// into each corner's adjacency list.
    pub(crate) fn push_triangle(&mut self, vertices: [VertexId; 3], color: Vec3) -> TriangleId {
        let id = TriangleId(self.triangles.len() as u32);
        for &v in &vertices {
            self.ensure_vertex_slot(v, Vec3::from(DEFAULT_COLOR));
            // Last triangle to touch a vertex decides its color.
            self.colors[v.index()] = color;
            self.topology.link(v, id);
        }
        self.triangles.push(Triangle { vertices, color });
        id
    }

    /// Grows the color and adjacency tables so that `v` has a slot.
    ///
    /// New slots are filled with `fill` and an empty adjacency list.
    /// Returns true if the tables grew.
    fn ensure_vertex_slot(&mut self, v: VertexId, fill: Vec3) -> bool {
        let needed = v.index() + 1;
        if self.colors.len() >= needed {
            return false;
        }
        self.colors.resize(needed, fill);
        self.topology.ensure_slots(needed);
        true
    }
}
