//! Wavefront OBJ loader.
//!
//! One sequential pass over the file. Each line is split on single
//! spaces and dispatched on its first token:
//!
//! | Tag      | Arity (incl. tag) | Effect                                  |
//! |----------|-------------------|-----------------------------------------|
//! | `v`      | ≥ 4               | new position, colored by active material |
//! | `vt`     | ≥ 3               | new texture coordinate                  |
//! | `vn`     | ≥ 4               | new normal sample                       |
//! | `f`      | any               | fan-triangulated face                   |
//! | `mtllib` | 2                 | replace the material table              |
//! | `usemtl` | 2                 | switch the active material              |
//!
//! Short records and unknown tags are skipped. Unparsable numbers and
//! zero/negative face indices are errors.

use std::fs::File;
use std::io::{BufRead, BufReader};
use std::path::{Path, PathBuf};

use meshview_material::tokenize::{parse_f32, parse_i64, parse_vec3, split_record};
use meshview_material::MaterialTable;
use meshview_math::{Vec2, Vec3};
use meshview_types::constants::DEFAULT_COLOR;
use meshview_types::{MeshviewError, MeshviewResult, TriangleId, VertexId};

use crate::mesh::{Face, FaceCorner, Mesh};

/// How far past the declared positions a face may reach. Forward
/// references grow the per-vertex tables, so this bounds the growth.
const MAX_FORWARD_REACH: usize = 1 << 20;

/// Counters gathered during one load.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct LoadStats {
    /// Lines read, including blank ones.
    pub lines: usize,
    /// Records skipped for an unknown tag or too few tokens.
    pub skipped_records: usize,
    /// `f` records with fewer than three position indices.
    pub dropped_faces: usize,
    /// Material libraries loaded via `mtllib`.
    pub material_libraries: usize,
}

/// Parses OBJ meshes.
///
/// `mtllib` paths are resolved against the base directory, which
/// defaults to the directory of the file being loaded.
#[derive(Debug, Clone, Default)]
pub struct ObjLoader {
    base_dir: Option<PathBuf>,
}

impl ObjLoader {
    /// Creates a loader that resolves `mtllib` paths as given.
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates a loader that resolves relative `mtllib` paths against `dir`.
    pub fn with_base_dir(dir: impl Into<PathBuf>) -> Self {
        Self {
            base_dir: Some(dir.into()),
        }
    }

    /// Loads a mesh, reporting failures as diagnostics.
    ///
    /// An unopenable file or a malformed record yields an empty mesh;
    /// callers treat zero triangles as a degenerate but valid state.
    pub fn load(path: impl AsRef<Path>) -> Mesh {
        let path = path.as_ref();
        match Self::try_load(path) {
            Ok(mesh) => mesh,
            Err(MeshviewError::Io(e)) => {
                tracing::warn!(path = %path.display(), error = %e, "failed to open mesh file");
                Mesh::new()
            }
            Err(e) => {
                tracing::error!(path = %path.display(), error = %e, "failed to parse mesh file");
                Mesh::new()
            }
        }
    }

    /// Loads a mesh, surfacing I/O, number-format, and index errors.
    pub fn try_load(path: impl AsRef<Path>) -> MeshviewResult<Mesh> {
        let path = path.as_ref();
        let file = File::open(path)?;
        let loader = match path.parent() {
            Some(dir) => Self::with_base_dir(dir),
            None => Self::new(),
        };
        let (mesh, stats) = loader.parse_with_stats(BufReader::new(file))?;
        tracing::debug!(
            path = %path.display(),
            vertices = mesh.vertex_count(),
            triangles = mesh.triangle_count(),
            lines = stats.lines,
            skipped = stats.skipped_records,
            dropped_faces = stats.dropped_faces,
            "mesh loaded"
        );
        Ok(mesh)
    }

    /// Parses OBJ records from a reader.
    pub fn parse<R: BufRead>(&self, reader: R) -> MeshviewResult<Mesh> {
        self.parse_with_stats(reader).map(|(mesh, _)| mesh)
    }

    /// Parses OBJ records from a reader, also returning load counters.
    pub fn parse_with_stats<R: BufRead>(&self, reader: R) -> MeshviewResult<(Mesh, LoadStats)> {
        let mut state = ParseState::new(self);

        for (i, line) in reader.lines().enumerate() {
            let line = line?;
            state.stats.lines += 1;
            state.record(&split_record(&line), i + 1)?;
        }

        state.finish()
    }

    fn resolve(&self, path: &str) -> PathBuf {
        let path = Path::new(path);
        match &self.base_dir {
            Some(dir) if path.is_relative() => dir.join(path),
            _ => path.to_path_buf(),
        }
    }
}

/// Parser-local state threaded through one load.
struct ParseState<'a> {
    loader: &'a ObjLoader,
    mesh: Mesh,
    materials: MaterialTable,
    current_material: String,
    /// Faces that named a position not yet declared, with their line.
    forward_refs: Vec<(VertexId, usize)>,
    stats: LoadStats,
}

impl<'a> ParseState<'a> {
    fn new(loader: &'a ObjLoader) -> Self {
        Self {
            loader,
            mesh: Mesh::new(),
            materials: MaterialTable::empty(),
            current_material: String::new(),
            forward_refs: Vec::new(),
            stats: LoadStats::default(),
        }
    }

    /// Color of the active material, or the default color.
    fn active_color(&self) -> Vec3 {
        self.materials
            .get(&self.current_material)
            .unwrap_or(Vec3::from(DEFAULT_COLOR))
    }

    fn record(&mut self, tokens: &[&str], line: usize) -> MeshviewResult<()> {
        let Some(&tag) = tokens.first() else {
            return Ok(());
        };

        match tag {
            "v" if tokens.len() >= 4 => {
                let position = parse_vec3(tokens, 1, line)?;
                let color = self.active_color();
                self.mesh.push_position(position, color);
            }
            "vt" if tokens.len() >= 3 => {
                let uv = Vec2::new(parse_f32(tokens[1], line)?, parse_f32(tokens[2], line)?);
                self.mesh.push_tex_coord(uv);
            }
            "vn" if tokens.len() >= 4 => {
                let normal = parse_vec3(tokens, 1, line)?;
                self.mesh.push_normal_sample(normal);
            }
            "f" => self.face(&tokens[1..], line)?,
            "mtllib" if tokens.len() == 2 => {
                let path = self.loader.resolve(tokens[1]);
                self.materials = MaterialTable::from_path(path);
                self.stats.material_libraries += 1;
            }
            "usemtl" if tokens.len() == 2 => {
                self.current_material = tokens[1].to_string();
            }
            _ => self.stats.skipped_records += 1,
        }

        Ok(())
    }

    fn face(&mut self, tokens: &[&str], line: usize) -> MeshviewResult<()> {
        let corners = tokens
            .iter()
            .map(|token| parse_corner(token, line))
            .collect::<MeshviewResult<Vec<_>>>()?;

        let positions: Vec<VertexId> = corners.iter().filter_map(|c| c.position).collect();
        if positions.len() < 3 {
            self.stats.dropped_faces += 1;
            return Ok(());
        }

        let declared = self.mesh.vertex_count();
        for &v in &positions {
            if v.index() >= declared + MAX_FORWARD_REACH {
                return Err(MeshviewError::InvalidIndex {
                    line,
                    index: i64::from(v.one_based()),
                });
            }
            if v.index() >= declared {
                self.forward_refs.push((v, line));
            }
        }

        let first_triangle = TriangleId(self.mesh.triangle_count() as u32);
        let triangle_count = positions.len() - 2;
        for i in 0..triangle_count {
            // The active material cannot change mid-face.
            let color = self.active_color();
            self.mesh
                .push_triangle([positions[0], positions[i + 1], positions[i + 2]], color);
        }

        self.mesh.push_face(Face {
            corners,
            first_triangle,
            triangle_count: triangle_count as u32,
        });
        Ok(())
    }

    fn finish(self) -> MeshviewResult<(Mesh, LoadStats)> {
        let declared = self.mesh.vertex_count();
        if let Some(&(v, line)) = self.forward_refs.iter().find(|(v, _)| v.index() >= declared) {
            return Err(MeshviewError::InvalidIndex {
                line,
                index: i64::from(v.one_based()),
            });
        }

        self.mesh.validate()?;
        Ok((self.mesh, self.stats))
    }
}

/// Parses one `pos[/tex[/norm]]` face token. Empty sub-tokens are absent.
fn parse_corner(token: &str, line: usize) -> MeshviewResult<FaceCorner> {
    let mut parts = token.split('/');
    let mut next_index = || -> MeshviewResult<Option<i64>> {
        match parts.next() {
            Some(part) if !part.is_empty() => parse_i64(part, line).map(Some),
            _ => Ok(None),
        }
    };

    let position = next_index()?
        .map(|index| VertexId::from_one_based(index).ok_or(MeshviewError::InvalidIndex { line, index }))
        .transpose()?;
    let texture = next_index()?;
    let normal = next_index()?;

    Ok(FaceCorner {
        position,
        texture,
        normal,
    })
}
