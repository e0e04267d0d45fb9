//! Integration tests for meshview-material.

use std::io::Write;

use glam::Vec3;
use meshview_material::MaterialTable;
use meshview_types::MeshviewError;

fn parse(src: &str) -> MaterialTable {
    MaterialTable::parse(src.as_bytes()).unwrap()
}

// ─── Parsing Tests ────────────────────────────────────────────

#[test]
fn single_material() {
    let table = parse("newmtl red\nKd 1 0 0\n");
    assert_eq!(table.len(), 1);
    assert_eq!(table.get("red"), Some(Vec3::new(1.0, 0.0, 0.0)));
}

#[test]
fn several_materials() {
    let table = parse(
        "# palette\n\
         newmtl red\n\
         Ns 10.0\n\
         Kd 1 0 0\n\
         \n\
         newmtl blue\n\
         Ka 0.1 0.1 0.1\n\
         Kd 0 0 1\n",
    );
    assert_eq!(table.len(), 2);
    assert_eq!(table.get("blue"), Some(Vec3::new(0.0, 0.0, 1.0)));
    assert_eq!(table.get("green"), None);
}

#[test]
fn later_kd_overwrites() {
    let table = parse("newmtl m\nKd 1 1 1\nKd 0.5 0.25 0\n");
    assert_eq!(table.get("m"), Some(Vec3::new(0.5, 0.25, 0.0)));
}

#[test]
fn wrong_arity_is_skipped() {
    let table = parse("newmtl a b\nKd 1 0\nnewmtl ok\nKd 1 2 3 4\nKd 0.2 0.3 0.4\n");
    assert_eq!(table.names(), vec!["ok"]);
    assert_eq!(table.get("ok"), Some(Vec3::new(0.2, 0.3, 0.4)));
}

#[test]
fn kd_without_newmtl_uses_empty_name() {
    let table = parse("Kd 0 1 0\n");
    assert_eq!(table.get(""), Some(Vec3::new(0.0, 1.0, 0.0)));
}

#[test]
fn non_numeric_kd_is_a_parse_error() {
    let err = MaterialTable::parse("newmtl red\nKd 1 zero 0\n".as_bytes()).unwrap_err();
    match err {
        MeshviewError::Parse { line, .. } => assert_eq!(line, 2),
        other => panic!("unexpected error: {other}"),
    }
}

#[test]
fn insert_and_lookup() {
    let mut table = MaterialTable::empty();
    assert!(table.is_empty());
    table.insert("gold", Vec3::new(1.0, 0.84, 0.0));
    assert!(!table.is_empty());
    assert_eq!(table.get("gold"), Some(Vec3::new(1.0, 0.84, 0.0)));
}

// ─── File Tests ───────────────────────────────────────────────

#[test]
fn from_path_reads_file() {
    let mut file = tempfile::NamedTempFile::new().unwrap();
    writeln!(file, "newmtl red").unwrap();
    writeln!(file, "Kd 1 0 0").unwrap();
    file.flush().unwrap();

    let table = MaterialTable::from_path(file.path());
    assert_eq!(table.get("red"), Some(Vec3::new(1.0, 0.0, 0.0)));
}

#[test]
fn missing_file_yields_empty_table() {
    let dir = tempfile::tempdir().unwrap();
    let table = MaterialTable::from_path(dir.path().join("missing.mtl"));
    assert!(table.is_empty());
}

#[test]
fn try_from_path_reports_io_error() {
    let dir = tempfile::tempdir().unwrap();
    let err = MaterialTable::try_from_path(dir.path().join("missing.mtl")).unwrap_err();
    assert!(matches!(err, MeshviewError::Io(_)));
}
