//! Flat and smooth normals.
//!
//! Flat normals come from a triangle's plane. Smooth normals are the
//! plain (unweighted) mean of the flat normals around a vertex and are
//! *not* renormalized here; the buffer generator normalizes after
//! transforming them.

use meshview_math::Vec3;
use meshview_types::{TriangleId, VertexId};

use crate::mesh::Mesh;

/// Unit normal of the plane through `p1`, `p2`, `p3`.
///
/// `normalize((p2 - p1) × (p3 - p2))`. Collinear points give a NaN
/// vector; callers that care must check the triangle's area first.
#[inline]
pub fn plane_normal(p1: Vec3, p2: Vec3, p3: Vec3) -> Vec3 {
    (p2 - p1).cross(p3 - p2).normalize()
}

/// Flat normal of triangle `t`.
pub fn flat_normal(mesh: &Mesh, t: TriangleId) -> Vec3 {
    let [p1, p2, p3] = mesh.triangle_positions(t);
    plane_normal(p1, p2, p3)
}

/// Smooth normal of vertex `v`: the mean of its incident flat normals.
///
/// An isolated vertex has no incident triangles; the denominator is
/// clamped to 1 and the result is the zero vector.
pub fn smooth_normal(mesh: &Mesh, v: VertexId) -> Vec3 {
    let incident = mesh.incident_triangles(v);
    let sum: Vec3 = incident.iter().map(|&t| flat_normal(mesh, t)).sum();
    sum / incident.len().max(1) as f32
}

/// Smooth normal of every vertex, indexed by vertex id.
pub fn compute_vertex_normals(mesh: &Mesh) -> Vec<Vec3> {
    mesh.vertex_ids().map(|v| smooth_normal(mesh, v)).collect()
}

/// Flat normal of every triangle, indexed by triangle id.
pub fn compute_triangle_normals(mesh: &Mesh) -> Vec<Vec3> {
    mesh.triangle_ids().map(|t| flat_normal(mesh, t)).collect()
}
