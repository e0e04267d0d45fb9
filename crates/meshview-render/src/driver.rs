//! Frame driver: decides per frame whether buffers are regenerated.
//!
//! With the CPU transform on, positions are baked into the records, so
//! every frame regenerates and re-uploads the buffers and the uniform is
//! the identity. Otherwise buffers are generated once and each frame only
//! carries the full transform matrix.

use std::time::Instant;

use meshview_math::{Mat4, TransformComposer};
use meshview_mesh::Mesh;
use meshview_types::MeshviewResult;

use crate::attributes::{generate, GenerateFlags, Layout};
use crate::buffers::GeometryBuffers;
use crate::renderer::{DrawCall, RenderFrame, Renderer};

/// Sequences buffer generation and frame submission.
#[derive(Debug)]
pub struct FrameDriver {
    layout: Layout,
    flags: GenerateFlags,
    buffers: Option<GeometryBuffers>,
    frames: u32,
    total_seconds: f64,
}

impl FrameDriver {
    pub fn new(layout: Layout, flags: GenerateFlags) -> Self {
        Self {
            layout,
            flags,
            buffers: None,
            frames: 0,
            total_seconds: 0.0,
        }
    }

    pub fn layout(&self) -> Layout {
        self.layout
    }

    pub fn flags(&self) -> GenerateFlags {
        self.flags
    }

    /// Changes layout and flags. The next frame regenerates.
    pub fn reconfigure(&mut self, layout: Layout, flags: GenerateFlags) {
        self.layout = layout;
        self.flags = flags;
        self.invalidate();
    }

    /// Drops the cached buffers so the next frame regenerates them.
    pub fn invalidate(&mut self) {
        self.buffers = None;
    }

    /// Most recently generated buffers.
    pub fn buffers(&self) -> Option<&GeometryBuffers> {
        self.buffers.as_ref()
    }

    /// Frames rendered so far.
    pub fn frame_count(&self) -> u32 {
        self.frames
    }

    /// Mean wall time per frame in seconds, 0 before the first frame.
    pub fn average_frame_time(&self) -> f64 {
        if self.frames == 0 {
            0.0
        } else {
            self.total_seconds / self.frames as f64
        }
    }

    /// Generates (if needed) and submits one frame.
    pub fn render_frame(
        &mut self,
        mesh: &Mesh,
        composer: &TransformComposer,
        renderer: &mut dyn Renderer,
    ) -> MeshviewResult<()> {
        let start = Instant::now();

        let regenerate = self.flags.cpu_transform || self.buffers.is_none();
        if regenerate {
            self.buffers = Some(generate(mesh, composer, self.layout, self.flags));
        }
        let Some(buffers) = self.buffers.as_ref() else {
            return Ok(());
        };

        let transform = if self.flags.cpu_transform {
            Mat4::IDENTITY
        } else {
            composer.full_matrix()
        };

        let frame = RenderFrame {
            frame: self.frames + 1,
            transform,
            buffers: regenerate.then_some(buffers),
            draw: DrawCall {
                layout: self.layout,
                count: buffers.draw_count(),
            },
        };
        renderer.submit_frame(&frame)?;

        self.frames += 1;
        self.total_seconds += start.elapsed().as_secs_f64();
        tracing::debug!(
            frame = self.frames,
            regenerated = regenerate,
            avg_ms = self.average_frame_time() * 1000.0,
            "frame submitted"
        );
        Ok(())
    }
}
