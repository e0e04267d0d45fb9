//! Procedural mesh generators for benchmarks and testing.
//!
//! These generators produce deterministic, resolution-configurable meshes
//! with counter-clockwise winding, colored with a single base color.

use meshview_math::Vec3;
use meshview_types::VertexId;

use crate::mesh::Mesh;

/// Generates a flat rectangular quad grid in the XY plane, facing +Z.
///
/// The grid spans `[-width/2, width/2]` in X and `[-height/2, height/2]` in Y,
/// centered at the origin at Z=0.
///
/// # Arguments
/// - `cols`: Number of quads along X (vertex count = cols + 1).
/// - `rows`: Number of quads along Y (vertex count = rows + 1).
/// - `width`: Total width.
/// - `height`: Total height.
/// - `color`: Color of every vertex and triangle.
///
/// # Example
/// ```
/// use meshview_math::Vec3;
/// use meshview_mesh::generators::quad_grid;
/// let mesh = quad_grid(2, 2, 1.0, 1.0, Vec3::ONE);
/// assert_eq!(mesh.vertex_count(), 9);  // 3×3 vertices
/// assert_eq!(mesh.triangle_count(), 8); // 2×2 quads × 2 tris each
/// ```
pub fn quad_grid(cols: usize, rows: usize, width: f32, height: f32, color: Vec3) -> Mesh {
    let verts_x = cols + 1;
    let verts_y = rows + 1;
    let mut mesh = Mesh::with_capacity(verts_x * verts_y, cols * rows * 2);

    let half_w = width / 2.0;
    let half_h = height / 2.0;

    for j in 0..verts_y {
        for i in 0..verts_x {
            let u = i as f32 / cols as f32;
            let v = j as f32 / rows as f32;
            // Top to bottom
            mesh.push_position(Vec3::new(-half_w + u * width, half_h - v * height, 0.0), color);
        }
    }

    for j in 0..rows {
        for i in 0..cols {
            let top_left = (j * verts_x + i) as u32;
            let top_right = top_left + 1;
            let bot_left = top_left + verts_x as u32;
            let bot_right = bot_left + 1;

            mesh.push_triangle([VertexId(top_left), VertexId(bot_left), VertexId(top_right)], color);
            mesh.push_triangle([VertexId(top_right), VertexId(bot_left), VertexId(bot_right)], color);
        }
    }

    mesh
}

/// Generates a UV sphere centered at the origin.
///
/// Seam and pole vertices are duplicated, so some pole vertices have
/// no incident triangles.
///
/// # Arguments
/// - `radius`: Sphere radius.
/// - `stacks`: Number of horizontal slices (latitude divisions).
/// - `slices`: Number of vertical slices (longitude divisions).
/// - `color`: Color of every vertex and triangle.
pub fn uv_sphere(radius: f32, stacks: usize, slices: usize, color: Vec3) -> Mesh {
    let mut mesh = Mesh::with_capacity((stacks + 1) * (slices + 1), stacks * slices * 2);

    for i in 0..=stacks {
        let phi = std::f32::consts::PI * i as f32 / stacks as f32; // 0 to PI
        let (sin_phi, cos_phi) = phi.sin_cos();

        for j in 0..=slices {
            let theta = 2.0 * std::f32::consts::PI * j as f32 / slices as f32;
            let (sin_theta, cos_theta) = theta.sin_cos();

            let unit = Vec3::new(sin_phi * cos_theta, cos_phi, sin_phi * sin_theta);
            mesh.push_position(radius * unit, color);
        }
    }

    for i in 0..stacks {
        for j in 0..slices {
            let a = (i * (slices + 1) + j) as u32;
            let b = a + (slices + 1) as u32;

            // Skip degenerate triangles at poles
            if i != 0 {
                mesh.push_triangle([VertexId(a), VertexId(a + 1), VertexId(b)], color);
            }

            if i != stacks - 1 {
                mesh.push_triangle([VertexId(a + 1), VertexId(b + 1), VertexId(b)], color);
            }
        }
    }

    mesh
}
