//! Interleaved vertex record packing.
//!
//! Both layouts share [`emit_vertex`]; they differ only in which
//! position, color, and normal they feed it.

use meshview_math::{Mat4, Vec3, Vec4};
use meshview_types::constants::{COLOR_OFFSET, FLOATS_PER_VERTEX, NORMAL_OFFSET};

/// Appends one 11-float record to `out`.
///
/// The position is transformed as a point (`w = 1`) and keeps its
/// homogeneous `w`. The normal, if any, is transformed as a direction
/// (`w = 0`) and renormalized; `None`, a zero normal (isolated vertex), or
/// a NaN normal (degenerate triangle) writes the zero vector.
#[inline]
pub fn emit_vertex(out: &mut Vec<f32>, position: Vec3, color: Vec3, normal: Option<Vec3>, matrix: &Mat4) {
    let clip = *matrix * position.extend(1.0);
    let normal = normal.map_or(Vec3::ZERO, |n| matrix.transform_vector3(n).normalize_or_zero());

    out.extend_from_slice(&clip.to_array());
    out.extend_from_slice(&color.extend(1.0).to_array());
    out.extend_from_slice(&normal.to_array());
}

/// A decoded view of one vertex record.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct VertexRecord {
    pub position: Vec4,
    pub color: Vec4,
    pub normal: Vec3,
}

impl VertexRecord {
    /// Decodes a record from exactly [`FLOATS_PER_VERTEX`] floats.
    ///
    /// Returns `None` if the slice has the wrong length.
    pub fn from_slice(floats: &[f32]) -> Option<Self> {
        if floats.len() != FLOATS_PER_VERTEX {
            return None;
        }
        Some(Self {
            position: Vec4::from_slice(&floats[..COLOR_OFFSET]),
            color: Vec4::from_slice(&floats[COLOR_OFFSET..NORMAL_OFFSET]),
            normal: Vec3::from_slice(&floats[NORMAL_OFFSET..]),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn identity_record() {
        let mut out = Vec::new();
        emit_vertex(
            &mut out,
            Vec3::new(1.0, 2.0, 3.0),
            Vec3::new(0.5, 0.25, 0.125),
            Some(Vec3::new(0.0, 0.0, 2.0)),
            &Mat4::IDENTITY,
        );
        assert_eq!(
            out,
            vec![1.0, 2.0, 3.0, 1.0, 0.5, 0.25, 0.125, 1.0, 0.0, 0.0, 1.0]
        );
    }

    #[test]
    fn disabled_normal_is_zero() {
        let mut out = Vec::new();
        emit_vertex(&mut out, Vec3::ONE, Vec3::ONE, None, &Mat4::IDENTITY);
        assert_eq!(&out[NORMAL_OFFSET..], &[0.0, 0.0, 0.0]);
    }

    #[test]
    fn zero_and_nan_normals_write_zero() {
        for n in [Vec3::ZERO, Vec3::NAN] {
            let mut out = Vec::new();
            emit_vertex(&mut out, Vec3::ONE, Vec3::ONE, Some(n), &Mat4::IDENTITY);
            assert_eq!(&out[NORMAL_OFFSET..], &[0.0, 0.0, 0.0]);
        }
    }

    #[test]
    fn translation_moves_position_not_normal() {
        let mut out = Vec::new();
        let m = Mat4::from_translation(Vec3::new(5.0, 0.0, 0.0));
        emit_vertex(&mut out, Vec3::ZERO, Vec3::ONE, Some(Vec3::Y), &m);
        let record = VertexRecord::from_slice(&out).unwrap();
        assert_eq!(record.position, Vec4::new(5.0, 0.0, 0.0, 1.0));
        assert_eq!(record.normal, Vec3::Y);
    }

    #[test]
    fn from_slice_rejects_wrong_length() {
        assert!(VertexRecord::from_slice(&[0.0; 10]).is_none());
    }
}
