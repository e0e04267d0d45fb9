//! # meshview-mesh
//!
//! Indexed triangle mesh parsed from Wavefront OBJ text.
//!
//! ## Key Types
//!
//! - [`Mesh`]: Positions, the triangle arena, resolved vertex colors,
//!   and the side tables (texture coordinates, normal samples) that
//!   nothing downstream consumes.
//! - [`ObjLoader`]: One-pass OBJ parser with fan triangulation and
//!   MTL material resolution.
//! - [`Topology`]: Vertex → incident triangle adjacency, built while
//!   faces are triangulated.
//! - [`normals`]: Flat (per-triangle) and smooth (per-vertex) normals.
//! - Procedural generators for tests and benchmarks (quad grids, UV spheres).

pub mod generators;
pub mod loader;
pub mod mesh;
pub mod normals;
pub mod topology;

pub use loader::{LoadStats, ObjLoader};
pub use mesh::{Face, FaceCorner, Mesh, Triangle};
pub use topology::Topology;
