//! Record tokenizer for line-oriented OBJ/MTL text.
//!
//! Tokens are separated by single spaces. Runs of spaces produce empty
//! tokens, which count toward a record's arity; a single trailing
//! separator does not.

use meshview_types::{MeshviewError, MeshviewResult};

/// Splits one line into its space-separated tokens.
pub fn split_record(line: &str) -> Vec<&str> {
    let line = line.strip_suffix('\r').unwrap_or(line);
    let mut tokens: Vec<&str> = line.split(' ').collect();
    if tokens.last() == Some(&"") {
        tokens.pop();
    }
    tokens
}

/// Parses a float token, reporting `line` on failure.
pub fn parse_f32(token: &str, line: usize) -> MeshviewResult<f32> {
    token
        .parse::<f32>()
        .map_err(|_| MeshviewError::parse(line, format!("expected a number, found '{token}'")))
}

/// Parses an integer token, reporting `line` on failure.
pub fn parse_i64(token: &str, line: usize) -> MeshviewResult<i64> {
    token
        .parse::<i64>()
        .map_err(|_| MeshviewError::parse(line, format!("expected an integer, found '{token}'")))
}

/// Parses three consecutive float tokens starting at `tokens[start]`.
pub fn parse_vec3(tokens: &[&str], start: usize, line: usize) -> MeshviewResult<glam::Vec3> {
    Ok(glam::Vec3::new(
        parse_f32(tokens[start], line)?,
        parse_f32(tokens[start + 1], line)?,
        parse_f32(tokens[start + 2], line)?,
    ))
}
