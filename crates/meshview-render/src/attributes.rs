//! Attribute buffer generation.
//!
//! Both generators are pure functions of the mesh, the composer's
//! current fields, and the caller's flags. They are meant to be called
//! again after every pose change when the transform runs on the CPU.

use meshview_math::{Mat4, TransformComposer, Vec3};
use meshview_mesh::normals::{compute_vertex_normals, flat_normal};
use meshview_mesh::Mesh;
use serde::{Deserialize, Serialize};

use crate::buffers::{AttributeBuffer, GeometryBuffers};
use crate::layout::emit_vertex;

/// Vertex buffer layout.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Layout {
    /// One record per position plus an index list.
    #[default]
    Indexed,
    /// One record per triangle corner, no index list.
    Flattened,
}

impl Layout {
    /// Number of vertex records this layout produces for `mesh`.
    pub fn vertex_count(self, mesh: &Mesh) -> usize {
        match self {
            Layout::Indexed => mesh.vertex_count(),
            Layout::Flattened => mesh.triangle_count() * 3,
        }
    }
}

/// Number of indices in the indexed layout.
pub fn index_count(mesh: &Mesh) -> usize {
    mesh.triangle_count() * 3
}

/// Caller switches for buffer generation.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct GenerateFlags {
    /// Bake the full model/view/projection transform into the records.
    /// When false, positions stay in model space and the consumer
    /// applies the transform.
    pub cpu_transform: bool,
    /// Scale colors by a linear 0→1 ramp over the record order.
    pub color_ramp: bool,
    /// Write normals. When false, every normal is the zero vector.
    pub normals: bool,
    /// Flattened layout only: use each triangle's flat normal instead of
    /// its corners' smooth normals.
    pub flat_normals: bool,
}

impl GenerateFlags {
    fn matrix(&self, composer: &TransformComposer) -> Mat4 {
        if self.cpu_transform {
            composer.full_matrix()
        } else {
            Mat4::IDENTITY
        }
    }
}

/// Ramp factor for record group `i` of `count`; 1 when the ramp is off.
///
/// The denominator is clamped to 1, so a single-element ramp is 0.
#[inline]
fn ramp(enabled: bool, i: usize, count: usize) -> f32 {
    if enabled {
        i as f32 / count.saturating_sub(1).max(1) as f32
    } else {
        1.0
    }
}

/// Generates buffers in the requested layout.
pub fn generate(
    mesh: &Mesh,
    composer: &TransformComposer,
    layout: Layout,
    flags: GenerateFlags,
) -> GeometryBuffers {
    match layout {
        Layout::Indexed => generate_indexed(mesh, composer, flags),
        Layout::Flattened => generate_flattened(mesh, composer, flags),
    }
}

/// One record per position, colored from the vertex color table, with
/// smooth normals, plus the triangles' 0-based corner indices.
///
/// `flags.flat_normals` is ignored: a shared record has no single triangle.
pub fn generate_indexed(mesh: &Mesh, composer: &TransformComposer, flags: GenerateFlags) -> GeometryBuffers {
    let matrix = flags.matrix(composer);
    let count = mesh.vertex_count();
    let normals = flags.normals.then(|| compute_vertex_normals(mesh));

    let mut vertices = AttributeBuffer::with_capacity(count);
    for v in mesh.vertex_ids() {
        let color = mesh.color(v) * ramp(flags.color_ramp, v.index(), count);
        let normal = normals.as_ref().map(|n| n[v.index()]);
        emit_vertex(vertices.data_mut(), mesh.position(v), color, normal, &matrix);
    }

    let indices = mesh
        .triangles()
        .iter()
        .flat_map(|tri| tri.vertices.map(|v| v.0))
        .collect();

    GeometryBuffers {
        layout: Layout::Indexed,
        vertices,
        indices,
    }
}

/// Three records per triangle, colored from the triangle's own color.
///
/// The ramp runs over triangle order. Normals are the triangle's flat
/// normal or each corner's smooth normal, per `flags.flat_normals`.
pub fn generate_flattened(mesh: &Mesh, composer: &TransformComposer, flags: GenerateFlags) -> GeometryBuffers {
    let matrix = flags.matrix(composer);
    let count = mesh.triangle_count();
    let smooth = (flags.normals && !flags.flat_normals).then(|| compute_vertex_normals(mesh));

    let mut vertices = AttributeBuffer::with_capacity(count * 3);
    for t in mesh.triangle_ids() {
        let tri = mesh.triangle(t);
        let color: Vec3 = tri.color * ramp(flags.color_ramp, t.index(), count);
        let flat = (flags.normals && flags.flat_normals).then(|| flat_normal(mesh, t));

        for v in tri.vertices {
            let normal = flat.or_else(|| smooth.as_ref().map(|n| n[v.index()]));
            emit_vertex(vertices.data_mut(), mesh.position(v), color, normal, &matrix);
        }
    }

    GeometryBuffers {
        layout: Layout::Flattened,
        vertices,
        indices: Vec::new(),
    }
}
