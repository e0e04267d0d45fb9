//! Default values and vertex record layout.

/// Color assigned to vertices with no active (or an unknown) material.
pub const DEFAULT_COLOR: [f32; 3] = [1.0, 0.0, 1.0];

/// Floats in the homogeneous position part of a vertex record.
pub const POSITION_FLOATS: usize = 4;

/// Floats in the RGBA color part of a vertex record.
pub const COLOR_FLOATS: usize = 4;

/// Floats in the normal part of a vertex record.
pub const NORMAL_FLOATS: usize = 3;

/// Total floats per interleaved vertex record: position, color, normal.
pub const FLOATS_PER_VERTEX: usize = POSITION_FLOATS + COLOR_FLOATS + NORMAL_FLOATS;

/// Offset (in floats) of the color attribute inside a vertex record.
pub const COLOR_OFFSET: usize = POSITION_FLOATS;

/// Offset (in floats) of the normal attribute inside a vertex record.
pub const NORMAL_OFFSET: usize = POSITION_FLOATS + COLOR_FLOATS;

/// Byte stride of one vertex record.
pub const VERTEX_STRIDE_BYTES: usize = FLOATS_PER_VERTEX * std::mem::size_of::<f32>();
