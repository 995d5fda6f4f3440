//! Top-level CLI error

use std::path::PathBuf;

use crate::app::cli::config::ConfigError;
use crate::core::error_handling::ContextualError;
use crate::metadata::DescriptorError;
use crate::resolver::ResolveError;

#[derive(Debug, thiserror::Error)]
pub enum AppError {
    #[error(transparent)]
    Config(#[from] ConfigError),

    #[error(transparent)]
    Resolve(#[from] ResolveError),

    #[error(transparent)]
    Descriptor(#[from] DescriptorError),

    #[error("Failed to write output: {0}")]
    Output(#[from] std::io::Error),

    #[error("Failed to serialize metadata: {0}")]
    Serialize(#[from] serde_json::Error),

    #[error("Failed to initialise logging: {0}")]
    Logging(String),

    #[error("{errors} error(s) found in {}", .path.display())]
    CheckFailed { path: PathBuf, errors: usize },
}

impl AppError {
    /// Short description of the failed operation, used as log context
    pub fn context(&self) -> &'static str {
        match self {
            AppError::Config(_) => "Loading configuration",
            AppError::Resolve(_) => "Resolving version",
            AppError::Descriptor(_) => "Resolving package metadata",
            AppError::Output(_) => "Writing output",
            AppError::Serialize(_) => "Serializing metadata",
            AppError::Logging(_) => "Initialising logging",
            AppError::CheckFailed { .. } => "Checking descriptor",
        }
    }
}

impl ContextualError for AppError {
    fn is_user_actionable(&self) -> bool {
        match self {
            AppError::Config(e) => e.is_user_actionable(),
            AppError::Resolve(e) => e.is_user_actionable(),
            AppError::Descriptor(e) => e.is_user_actionable(),
            AppError::CheckFailed { .. } => true,
            AppError::Output(_) | AppError::Serialize(_) | AppError::Logging(_) => false,
        }
    }

    fn user_message(&self) -> Option<String> {
        match self {
            AppError::Config(e) => e.user_message(),
            AppError::Resolve(e) => e.user_message(),
            AppError::Descriptor(e) => e.user_message(),
            AppError::CheckFailed { .. } => Some(self.to_string()),
            _ => None,
        }
    }
}

pub type AppResult<T> = Result<T, AppError>;
