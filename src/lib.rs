//! pkgmeta: resolve package versions and metadata from source files.
//!
//! The [`resolver`] module holds the version resolver; [`metadata`] builds
//! on it to resolve a whole package descriptor.

pub mod app;
pub mod core;
pub mod metadata;
pub mod resolver;

pub use metadata::{PackageDescriptor, PackageMetadata};
pub use resolver::{ResolveError, VersionResolver};
