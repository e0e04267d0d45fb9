//! Renderer trait and HeadlessRenderer stub.
//!
//! The renderer is the boundary to the excluded window/GPU layer. It is
//! handed one [`RenderFrame`] per redraw: fresh buffers when they were
//! regenerated, the transform uniform, and the draw call to issue.

use meshview_math::Mat4;
use meshview_mesh::Mesh;
use meshview_types::MeshviewResult;

use crate::attributes::Layout;
use crate::buffers::GeometryBuffers;

/// What to draw: `count` indices (indexed) or vertices (flattened).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DrawCall {
    pub layout: Layout,
    pub count: usize,
}

/// A single render frame.
#[derive(Debug, Clone, Copy)]
pub struct RenderFrame<'a> {
    /// 1-based frame number.
    pub frame: u32,
    /// Transform uniform for the vertex stage. Identity when the
    /// buffers already carry transformed positions.
    pub transform: Mat4,
    /// Buffers to upload, replacing the previous ones. `None` when only
    /// the transform changed.
    pub buffers: Option<&'a GeometryBuffers>,
    pub draw: DrawCall,
}

/// Trait for consuming generated frames.
///
/// # Implementations
/// - [`HeadlessRenderer`]: Records what it was given (tests, CI)
/// - [`JsonFrameExporter`](crate::JsonFrameExporter): Writes frames to JSON
/// - An OpenGL/wgpu backend lives outside this workspace
pub trait Renderer: Send {
    /// Initialize the renderer with the loaded mesh.
    fn init(&mut self, mesh: &Mesh) -> MeshviewResult<()>;

    /// Submit a frame for rendering.
    fn submit_frame(&mut self, frame: &RenderFrame<'_>) -> MeshviewResult<()>;

    /// Finalize rendering (flush buffers, close files, etc.).
    fn finalize(&mut self) -> MeshviewResult<()>;

    /// Returns the renderer name.
    fn name(&self) -> &str;

    /// Returns the number of frames submitted.
    fn frame_count(&self) -> u32;
}

/// Headless renderer: keeps the latest upload and uniform, draws nothing.
#[derive(Debug, Default)]
pub struct HeadlessRenderer {
    frames: u32,
    uploads: u32,
    vertices: Vec<f32>,
    indices: Vec<u32>,
    transform: Option<Mat4>,
    last_draw: Option<DrawCall>,
}

impl HeadlessRenderer {
    /// Creates a new headless renderer.
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of frames that carried buffers.
    pub fn upload_count(&self) -> u32 {
        self.uploads
    }

    /// Vertex data from the most recent upload.
    pub fn vertices(&self) -> &[f32] {
        &self.vertices
    }

    /// Index data from the most recent upload.
    pub fn indices(&self) -> &[u32] {
        &self.indices
    }

    /// Transform uniform from the most recent frame.
    pub fn transform(&self) -> Option<Mat4> {
        self.transform
    }

    pub fn last_draw(&self) -> Option<DrawCall> {
        self.last_draw
    }
}

impl Renderer for HeadlessRenderer {
    fn init(&mut self, _mesh: &Mesh) -> MeshviewResult<()> {
        Ok(())
    }

    fn submit_frame(&mut self, frame: &RenderFrame<'_>) -> MeshviewResult<()> {
        if let Some(buffers) = frame.buffers {
            self.vertices = buffers.vertices.as_slice().to_vec();
            self.indices = buffers.indices.clone();
            self.uploads += 1;
        }
        self.transform = Some(frame.transform);
        self.last_draw = Some(frame.draw);
        self.frames += 1;
        Ok(())
    }

    fn finalize(&mut self) -> MeshviewResult<()> {
        Ok(())
    }

    fn name(&self) -> &str {
        "headless"
    }

    fn frame_count(&self) -> u32 {
        self.frames
    }
}
