//! File system utility functions

use anyhow::{Context, Result};
use std::path::{Path, PathBuf};

/// Resolve `path` against `base_dir` unless it is already absolute
pub fn resolve_relative(path: &str, base_dir: Option<&Path>) -> PathBuf {
    let path = Path::new(path);
    match base_dir {
        Some(dir) if path.is_relative() => dir.join(path),
        _ => path.to_path_buf(),
    }
}

/// Read a pull request description from a file
pub fn read_body_file(path: &str, base_dir: Option<&Path>) -> Result<String> {
    let resolved = resolve_relative(path, base_dir);
    std::fs::read_to_string(&resolved)
        .with_context(|| format!("Failed to read body file '{}'", resolved.display()))
}
