//! # meshview-math
//!
//! Linear algebra primitives for meshview.
//!
//! Provides:
//! - Re-exports of `glam` types (`Vec3`, `Mat4`, etc.)
//! - Model/view/projection composition ([`TransformComposer`])

pub mod transform;

// Re-export glam types as the canonical math types for meshview.
pub use glam::{Mat3, Mat4, Vec2, Vec3, Vec4};

pub use transform::{Camera, Pose, Projection, TransformComposer};
