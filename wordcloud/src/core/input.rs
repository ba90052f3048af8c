// src/core/input.rs
use anyhow::{Context as _, Result};
use std::fs;
use std::path::Path;

/// Resolves the raw command-line input into text content.
///
/// If `raw` names an existing regular file, its full contents are read in a
/// single pass; any other string is taken as literal text. A string that
/// does not correspond to an existing file is never an error.
///
/// # Errors
///
/// Returns an error if the input names a file that exists but cannot be
/// read (permissions, encoding).
pub fn resolve_input(raw: &str) -> Result<String> {
    let path = Path::new(raw);
    if path.is_file() {
        fs::read_to_string(path)
            .with_context(|| format!("Failed to read input file: {}", path.display()))
    } else {
        Ok(raw.to_owned())
    }
}
