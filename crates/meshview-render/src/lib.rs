//! # meshview-render
//!
//! Turns a loaded [`Mesh`](meshview_mesh::Mesh) into interleaved vertex
//! records and hands them to a pluggable rendering backend.
//!
//! Every record is 11 floats: homogeneous position (4), RGBA color (4),
//! normal (3). Two layouts are offered:
//!
//! - **Indexed**: one record per position plus a triangle index list.
//! - **Flattened**: one record per triangle corner, no index list.
//!
//! The [`Renderer`] trait is the boundary to the window/GPU layer, with a
//! [`HeadlessRenderer`] stub and a [`JsonFrameExporter`] for offline
//! inspection. [`FrameDriver`] sequences regeneration and submission.

pub mod attributes;
pub mod buffers;
pub mod driver;
pub mod json_exporter;
pub mod layout;
pub mod renderer;

pub use attributes::{generate, generate_flattened, generate_indexed, GenerateFlags, Layout};
pub use buffers::{AttributeBuffer, GeometryBuffers};
pub use driver::FrameDriver;
pub use json_exporter::JsonFrameExporter;
pub use layout::VertexRecord;
pub use renderer::{DrawCall, HeadlessRenderer, RenderFrame, Renderer};
