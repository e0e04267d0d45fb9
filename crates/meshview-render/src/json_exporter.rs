//! JSON frame exporter: writes generated buffers for offline inspection.
//!
//! Implements the `Renderer` trait. Captures the uniform transform and
//! any uploaded buffers at each frame, then serializes the whole run to
//! a JSON file on `finalize()`.

use std::path::PathBuf;

use meshview_mesh::Mesh;
use meshview_types::{MeshviewError, MeshviewResult};
use serde::Serialize;

use crate::attributes::Layout;
use crate::renderer::{RenderFrame, Renderer};

/// A single captured frame.
#[derive(Serialize)]
struct FrameData {
    frame: u32,
    transform: [f32; 16], // Column-major
    layout: Layout,
    draw_count: usize,
    #[serde(skip_serializing_if = "Option::is_none")]
    vertices: Option<Vec<f32>>, // Interleaved 11-float records
    #[serde(skip_serializing_if = "Option::is_none")]
    indices: Option<Vec<u32>>,
}

/// Complete capture for JSON export.
#[derive(Serialize)]
struct CaptureData {
    vertex_count: usize,
    triangle_count: usize,
    floats_per_vertex: usize,
    frames: Vec<FrameData>,
}

/// Exports submitted frames to a JSON file.
///
/// Usage:
/// ```text
/// let mut exporter = JsonFrameExporter::new("frames.json");
/// exporter.init(&mesh)?;
/// driver.render_frame(&mesh, &composer, &mut exporter)?;
/// exporter.finalize()?; // Writes the JSON file
/// ```
pub struct JsonFrameExporter {
    output_path: PathBuf,
    vertex_count: usize,
    triangle_count: usize,
    frames: Vec<FrameData>,
    submitted: u32,
}

impl JsonFrameExporter {
    /// Creates a new exporter that will write to the given path.
    pub fn new(output_path: impl Into<PathBuf>) -> Self {
        Self {
            output_path: output_path.into(),
            vertex_count: 0,
            triangle_count: 0,
            frames: Vec::new(),
            submitted: 0,
        }
    }
}

impl Renderer for JsonFrameExporter {
    fn init(&mut self, mesh: &Mesh) -> MeshviewResult<()> {
        self.vertex_count = mesh.vertex_count();
        self.triangle_count = mesh.triangle_count();
        Ok(())
    }

    fn submit_frame(&mut self, frame: &RenderFrame<'_>) -> MeshviewResult<()> {
        self.frames.push(FrameData {
            frame: frame.frame,
            transform: frame.transform.to_cols_array(),
            layout: frame.draw.layout,
            draw_count: frame.draw.count,
            vertices: frame.buffers.map(|b| b.vertices.as_slice().to_vec()),
            indices: frame
                .buffers
                .filter(|b| b.layout == Layout::Indexed)
                .map(|b| b.indices.clone()),
        });
        self.submitted += 1;
        Ok(())
    }

    fn finalize(&mut self) -> MeshviewResult<()> {
        let data = CaptureData {
            vertex_count: self.vertex_count,
            triangle_count: self.triangle_count,
            floats_per_vertex: meshview_types::constants::FLOATS_PER_VERTEX,
            frames: std::mem::take(&mut self.frames),
        };
        let json = serde_json::to_string(&data).map_err(|e| {
            MeshviewError::Serialization(format!("JSON serialization failed: {e}"))
        })?;
        std::fs::write(&self.output_path, json)?;
        tracing::info!(path = %self.output_path.display(), frames = self.submitted, "frames exported");
        Ok(())
    }

    fn name(&self) -> &str {
        "json_exporter"
    }

    fn frame_count(&self) -> u32 {
        self.submitted
    }
}
