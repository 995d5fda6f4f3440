//! Descriptor error types

use std::path::PathBuf;

use crate::core::error_handling::ContextualError;
use crate::resolver::ResolveError;

#[derive(Debug, thiserror::Error)]
pub enum DescriptorError {
    #[error("Unable to read descriptor {}: {source}", .path.display())]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Invalid descriptor{}: {message}", .path.as_ref().map(|p| format!(" {}", p.display())).unwrap_or_default())]
    Parse { path: Option<PathBuf>, message: String },

    #[error("Package '{package}': {message}")]
    VersionSource { package: String, message: String },

    #[error("Package '{package}': long-description and readme are mutually exclusive")]
    LongDescriptionSource { package: String },

    #[error(transparent)]
    Requirement(#[from] RequirementError),

    #[error(transparent)]
    Resolve(#[from] ResolveError),
}

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum RequirementError {
    #[error("Empty requirement")]
    Empty,

    #[error("Invalid project name in requirement '{requirement}'")]
    InvalidName { requirement: String },

    #[error("Invalid version specifier '{specifier}' in requirement '{requirement}'")]
    InvalidSpecifier { requirement: String, specifier: String },

    #[error("Invalid extra '{extra}' in requirement '{requirement}'")]
    InvalidExtra { requirement: String, extra: String },

    #[error("Empty environment marker in requirement '{requirement}'")]
    EmptyMarker { requirement: String },
}

impl ContextualError for DescriptorError {
    fn is_user_actionable(&self) -> bool {
        match self {
            DescriptorError::Read { .. } => false,
            DescriptorError::Resolve(e) => e.is_user_actionable(),
            _ => true,
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

/// Result type for descriptor operations
pub type DescriptorResult<T> = Result<T, DescriptorError>;
