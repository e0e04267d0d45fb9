//! Integration tests for meshview-types.

use meshview_types::constants::{COLOR_OFFSET, FLOATS_PER_VERTEX, NORMAL_OFFSET, VERTEX_STRIDE_BYTES};
use meshview_types::{MeshviewError, TriangleId, VertexId};

// ─── ID Tests ──────────────────────────────────────────────────

#[test]
fn vertex_id_from_one_based() {
    assert_eq!(VertexId::from_one_based(1), Some(VertexId(0)));
    assert_eq!(VertexId::from_one_based(42), Some(VertexId(41)));
}

#[test]
fn vertex_id_rejects_zero_and_negative() {
    assert_eq!(VertexId::from_one_based(0), None);
    assert_eq!(VertexId::from_one_based(-3), None);
}

#[test]
fn vertex_id_one_based_round_trip() {
    let id = VertexId::from_one_based(7).unwrap();
    assert_eq!(id.index(), 6);
    assert_eq!(id.one_based(), 7);
}

#[test]
fn triangle_id_index() {
    assert_eq!(TriangleId(9).index(), 9);
}

#[test]
fn ids_are_serializable() {
    let id = VertexId(100);
    let json = serde_json::to_string(&id).unwrap();
    let recovered: VertexId = serde_json::from_str(&json).unwrap();
    assert_eq!(id, recovered);
}

// ─── Layout Tests ─────────────────────────────────────────────

#[test]
fn record_layout() {
    assert_eq!(FLOATS_PER_VERTEX, 11);
    assert_eq!(COLOR_OFFSET, 4);
    assert_eq!(NORMAL_OFFSET, 8);
    assert_eq!(VERTEX_STRIDE_BYTES, 44);
}

// ─── Error Tests ──────────────────────────────────────────────

#[test]
fn error_display() {
    let err = MeshviewError::parse(3, "expected float, found 'abc'");
    assert_eq!(
        format!("{err}"),
        "Parse error on line 3: expected float, found 'abc'"
    );

    let err = MeshviewError::InvalidIndex { line: 5, index: 0 };
    assert!(format!("{err}").contains("index 0"));
}

#[test]
fn io_error_converts() {
    let io = std::io::Error::new(std::io::ErrorKind::NotFound, "missing");
    let err: MeshviewError = io.into();
    assert!(matches!(err, MeshviewError::Io(_)));
}
