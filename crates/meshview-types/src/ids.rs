//! Strongly-typed identifiers for mesh entities.
//!
//! Newtype wrappers keep 0-based vertex slots apart from triangle
//! arena indices. Face records in OBJ files are 1-based; conversion
//! happens once, at the loader boundary.

use serde::{Deserialize, Serialize};

/// 0-based index into the per-vertex tables (positions, colors, adjacency).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct VertexId(pub u32);

/// 0-based index into the mesh's triangle arena.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct TriangleId(pub u32);

impl VertexId {
    /// Converts a 1-based OBJ position index into a vertex slot.
    ///
    /// Returns `None` for 0 and negative indices.
    #[inline]
    pub fn from_one_based(index: i64) -> Option<Self> {
        if (1..=i64::from(u32::MAX)).contains(&index) {
            Some(Self((index - 1) as u32))
        } else {
            None
        }
    }

    /// Returns the raw index as `usize` for array indexing.
    #[inline]
    pub fn index(self) -> usize {
        self.0 as usize
    }

    /// Returns the 1-based index as written in OBJ face records.
    #[inline]
    pub fn one_based(self) -> u32 {
        self.0 + 1
    }
}

impl TriangleId {
    #[inline]
    pub fn index(self) -> usize {
        self.0 as usize
    }
}

impl From<u32> for VertexId {
    fn from(val: u32) -> Self {
        Self(val)
    }
}

impl From<u32> for TriangleId {
    fn from(val: u32) -> Self {
        Self(val)
    }
}
