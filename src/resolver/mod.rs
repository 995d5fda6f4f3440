//! Version Resolver
//!
//! Reads a source file addressed by path segments relative to a fixed base
//! directory and extracts the version from its `__version__ = '...'`
//! declaration. Every call opens, reads and closes the file again; nothing is
//! cached.

pub mod error;
pub mod pattern;

use std::fs::File;
use std::io::Read;
use std::path::{Path, PathBuf};

pub use error::{ResolveError, ResolveResult};
pub use pattern::{DeclarationPattern, DEFAULT_IDENTIFIER};

/// Resolves versions and file contents relative to a base directory
#[derive(Debug, Clone)]
pub struct VersionResolver {
    base_dir: PathBuf,
    pattern: DeclarationPattern,
}

impl VersionResolver {
    /// Resolver for `__version__` declarations below `base_dir`
    pub fn new(base_dir: impl Into<PathBuf>) -> Self {
        Self {
            base_dir: base_dir.into(),
            pattern: DeclarationPattern::default(),
        }
    }

    /// Search for `identifier` instead of `__version__`
    pub fn with_identifier(mut self, identifier: &str) -> ResolveResult<Self> {
        self.pattern = DeclarationPattern::new(identifier)?;
        Ok(self)
    }

    pub fn base_dir(&self) -> &Path {
        &self.base_dir
    }

    pub fn identifier(&self) -> &str {
        self.pattern.identifier()
    }

    /// Join the path segments, in order, onto the base directory
    pub fn path_for<S: AsRef<Path>>(&self, parts: &[S]) -> PathBuf {
        parts
            .iter()
            .fold(self.base_dir.clone(), |path, part| path.join(part))
    }

    /// Read the entire contents of the file addressed by `parts`.
    ///
    /// Invalid UTF-8 sequences are replaced rather than rejected.
    pub fn read<S: AsRef<Path>>(&self, parts: &[S]) -> ResolveResult<String> {
        let path = self.path_for(parts);
        read_lossy(&path).map_err(|source| ResolveError::FileAccess { path, source })
    }

    /// Version declared in the file addressed by `parts`
    pub fn find_version<S: AsRef<Path>>(&self, parts: &[S]) -> ResolveResult<String> {
        let path = self.path_for(parts);
        let contents = self.read(parts)?;

        match self.pattern.find(&contents) {
            Some(version) => {
                log::debug!(
                    "Found {} = '{}' in {}",
                    self.pattern.identifier(),
                    version,
                    path.display()
                );
                Ok(version.to_string())
            }
            None => {
                log::debug!(
                    "No {} declaration in {} ({} bytes)",
                    self.pattern.identifier(),
                    path.display(),
                    contents.len()
                );
                Err(ResolveError::VersionNotFound { path })
            }
        }
    }
}

// The handle is dropped when this returns, on success and failure alike
fn read_lossy(path: &Path) -> std::io::Result<String> {
    let mut file = File::open(path)?;
    let mut bytes = Vec::new();
    file.read_to_end(&mut bytes)?;
    Ok(match String::from_utf8(bytes) {
        Ok(text) => text,
        Err(e) => String::from_utf8_lossy(e.as_bytes()).into_owned(),
    })
}

#[cfg(test)]
mod tests;
