//! Package descriptor loading, resolution and checks

pub mod check;
pub mod classifier;
pub mod descriptor;
pub mod error;
pub mod requirement;

pub use check::{check, CheckIssue, Severity};
pub use descriptor::{PackageDescriptor, PackageMetadata, VersionSource};
pub use error::{DescriptorError, DescriptorResult, RequirementError};
pub use requirement::{Comparator, Requirement, VersionSpecifier};
