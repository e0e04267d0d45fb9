//! CPU-side vertex and index buffers.
//!
//! Buffers are regenerated wholesale whenever the pose changes and the
//! transform is applied on the CPU; they are never patched in place.

use meshview_types::constants::{FLOATS_PER_VERTEX, VERTEX_STRIDE_BYTES};

use crate::attributes::Layout;
use crate::layout::VertexRecord;

/// Interleaved vertex records, [`FLOATS_PER_VERTEX`] floats each.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct AttributeBuffer {
    data: Vec<f32>,
}

impl AttributeBuffer {
    /// Creates an empty buffer with room for `vertices` records.
    pub fn with_capacity(vertices: usize) -> Self {
        Self {
            data: Vec::with_capacity(vertices * FLOATS_PER_VERTEX),
        }
    }

    /// Wraps existing record data.
    ///
    /// Returns `None` unless `data` holds a whole number of records.
    pub fn from_data(data: Vec<f32>) -> Option<Self> {
        (data.len() % FLOATS_PER_VERTEX == 0).then_some(Self { data })
    }

    /// Number of vertex records.
    pub fn vertex_count(&self) -> usize {
        self.data.len() / FLOATS_PER_VERTEX
    }

    /// Number of floats.
    pub fn len(&self) -> usize {
        self.data.len()
    }

    /// Returns true if the buffer is empty.
    pub fn is_empty(&self) -> bool {
        self.data.is_empty()
    }

    /// Size in bytes, as passed to a GPU upload.
    pub fn byte_len(&self) -> usize {
        self.vertex_count() * VERTEX_STRIDE_BYTES
    }

    /// Decodes record `i`.
    pub fn record(&self, i: usize) -> Option<VertexRecord> {
        let start = i.checked_mul(FLOATS_PER_VERTEX)?;
        let end = start.checked_add(FLOATS_PER_VERTEX)?;
        self.data
            .get(start..end)
            .and_then(VertexRecord::from_slice)
    }

    /// Iterates decoded records in order.
    pub fn records(&self) -> impl Iterator<Item = VertexRecord> + '_ {
        self.data
            .chunks_exact(FLOATS_PER_VERTEX)
            .filter_map(VertexRecord::from_slice)
    }

    /// Returns the raw float data.
    pub fn as_slice(&self) -> &[f32] {
        &self.data
    }

    pub(crate) fn data_mut(&mut self) -> &mut Vec<f32> {
        &mut self.data
    }
}

/// Output of one buffer generation pass.
#[derive(Debug, Clone, PartialEq)]
pub struct GeometryBuffers {
    /// Which layout the records follow.
    pub layout: Layout,
    /// Vertex records.
    pub vertices: AttributeBuffer,
    /// 0-based triangle indices into `vertices`. Empty for the
    /// flattened layout, where connectivity is implicit in record order.
    pub indices: Vec<u32>,
}

impl GeometryBuffers {
    /// Number of elements a draw call covers: indices for the indexed
    /// layout, vertices for the flattened one.
    pub fn draw_count(&self) -> usize {
        match self.layout {
            Layout::Indexed => self.indices.len(),
            Layout::Flattened => self.vertices.vertex_count(),
        }
    }
}
