//! # meshview-types
//!
//! Shared types, identifiers, error types, and layout constants
//! for the meshview mesh pipeline.
//!
//! This crate has zero domain logic: it defines the vocabulary
//! that all other meshview crates share.

pub mod constants;
pub mod error;
pub mod ids;

pub use error::{MeshviewError, MeshviewResult};
pub use ids::{TriangleId, VertexId};
