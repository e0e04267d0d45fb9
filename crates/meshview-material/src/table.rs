//! Material table read from an MTL library.
//!
//! Only two records matter: `newmtl <name>` switches the current
//! material and `Kd <r> <g> <b>` sets its diffuse color. Everything else
//! (other records, blank lines, wrong arity) is skipped without comment.

use std::collections::HashMap;
use std::fs::File;
use std::io::{BufRead, BufReader};
use std::path::Path;

use glam::Vec3;
use meshview_types::MeshviewResult;

use crate::tokenize::{parse_vec3, split_record};

/// Material name → diffuse base color.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct MaterialTable {
    colors: HashMap<String, Vec3>,
}

impl MaterialTable {
    /// Creates an empty table.
    pub fn empty() -> Self {
        Self::default()
    }

    /// Reads an MTL file.
    ///
    /// An unopenable or unreadable file is reported as a warning and
    /// yields an empty table, so the caller falls back to default colors.
    pub fn from_path(path: impl AsRef<Path>) -> Self {
        let path = path.as_ref();
        match Self::try_from_path(path) {
            Ok(table) => {
                tracing::debug!(path = %path.display(), materials = table.len(), "material library loaded");
                table
            }
            Err(e) => {
                tracing::warn!(path = %path.display(), error = %e, "failed to read material library");
                Self::empty()
            }
        }
    }

    /// Reads an MTL file, surfacing I/O and number-format errors.
    pub fn try_from_path(path: impl AsRef<Path>) -> MeshviewResult<Self> {
        let file = File::open(path)?;
        Self::parse(BufReader::new(file))
    }

    /// Parses MTL records from a reader.
    pub fn parse<R: BufRead>(reader: R) -> MeshviewResult<Self> {
        let mut table = Self::empty();
        // `Kd` before any `newmtl` lands under the empty name.
        let mut current = String::new();

        for (i, line) in reader.lines().enumerate() {
            let line = line?;
            let line_no = i + 1;
            let tokens = split_record(&line);

            match tokens.as_slice() {
                ["newmtl", name] => current = (*name).to_string(),
                ["Kd", ..] if tokens.len() == 4 => {
                    let color = parse_vec3(&tokens, 1, line_no)?;
                    table.insert(current.clone(), color);
                }
                _ => {}
            }
        }

        Ok(table)
    }

    /// Inserts a material. Overwrites if the name already exists.
    pub fn insert(&mut self, name: impl Into<String>, color: Vec3) {
        self.colors.insert(name.into(), color);
    }

    /// Looks up a material by name. Returns `None` if not found.
    pub fn get(&self, name: &str) -> Option<Vec3> {
        self.colors.get(name).copied()
    }

    /// Returns all material names, in no particular order.
    pub fn names(&self) -> Vec<&str> {
        self.colors.keys().map(|s| s.as_str()).collect()
    }

    /// Returns the number of materials.
    pub fn len(&self) -> usize {
        self.colors.len()
    }

    /// Returns true if the table is empty.
    pub fn is_empty(&self) -> bool {
        self.colors.is_empty()
    }
}
