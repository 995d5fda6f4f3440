//! Shared helpers for integration tests

#![allow(dead_code)]

use std::fs;
use std::path::{Path, PathBuf};

use tempfile::TempDir;

/// Checked-in sample project with a descriptor, package and readme
pub fn fixture_dir() -> PathBuf {
    Path::new(env!("CARGO_MANIFEST_DIR"))
        .join("tests")
        .join("fixtures")
        .join("restless")
}

/// Write `contents` at `parts` below `dir`, creating parent directories
pub fn write_file(dir: &TempDir, parts: &[&str], contents: &str) -> PathBuf {
    let path = parts
        .iter()
        .fold(dir.path().to_path_buf(), |p, part| p.join(part));
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent).unwrap();
    }
    fs::write(&path, contents).unwrap();
    path
}
