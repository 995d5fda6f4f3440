//! Version resolution error types

use std::path::PathBuf;

use crate::core::error_handling::ContextualError;

#[derive(Debug, thiserror::Error)]
pub enum ResolveError {
    #[error("Unable to read {}: {source}", .path.display())]
    FileAccess {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Unable to find version string in {}", .path.display())]
    VersionNotFound { path: PathBuf },

    #[error("Invalid version identifier '{identifier}': {reason}")]
    InvalidIdentifier { identifier: String, reason: String },
}

impl ResolveError {
    /// True for the "version string not found" failure
    pub fn is_not_found(&self) -> bool {
        matches!(self, ResolveError::VersionNotFound { .. })
    }
}

impl ContextualError for ResolveError {
    fn is_user_actionable(&self) -> bool {
        match self {
            ResolveError::VersionNotFound { .. } => true,
            ResolveError::InvalidIdentifier { .. } => true,
            ResolveError::FileAccess { .. } => false,
        }
    }

    fn user_message(&self) -> Option<String> {
        if self.is_user_actionable() {
            Some(self.to_string())
        } else {
            None
        }
    }
}

/// Result type for version resolution
pub type ResolveResult<T> = Result<T, ResolveError>;
