//! Package descriptor: the static metadata a packaging step needs, declared
//! in TOML, with the version pulled from a source file at resolve time.
//!
//! ```toml
//! [package]
//! name = "Flask-Restless"
//! version-file = ["flask_restless", "__init__.py"]
//! install-requires = ["flask>=0.10", "sqlalchemy>=0.8"]
//! ```

use std::path::Path;

use serde::{Deserialize, Serialize};

use super::error::{DescriptorError, DescriptorResult};
use super::requirement::{parse_requirements, Requirement};
use crate::resolver::VersionResolver;

#[derive(Debug, Deserialize)]
#[serde(deny_unknown_fields)]
struct DescriptorFile {
    package: PackageDescriptor,
}

/// Declared package metadata, as written in the descriptor file
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(rename_all = "kebab-case", deny_unknown_fields)]
pub struct PackageDescriptor {
    pub name: String,
    pub version: Option<String>,
    #[serde(default)]
    pub version_file: Vec<String>,
    pub version_identifier: Option<String>,
    pub description: Option<String>,
    pub long_description: Option<String>,
    #[serde(default)]
    pub readme: Vec<String>,
    pub author: Option<String>,
    pub author_email: Option<String>,
    pub url: Option<String>,
    pub download_url: Option<String>,
    pub license: Option<String>,
    #[serde(default)]
    pub keywords: Vec<String>,
    #[serde(default)]
    pub platforms: Vec<String>,
    #[serde(default)]
    pub classifiers: Vec<String>,
    #[serde(default)]
    pub packages: Vec<String>,
    #[serde(default)]
    pub install_requires: Vec<String>,
    #[serde(default)]
    pub tests_require: Vec<String>,
    pub test_suite: Option<String>,
    #[serde(default)]
    pub include_package_data: bool,
    #[serde(default)]
    pub zip_safe: bool,
}

/// Where the package version comes from
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum VersionSource<'a> {
    Static(&'a str),
    File {
        parts: &'a [String],
        identifier: Option<&'a str>,
    },
}

/// Resolved metadata, ready for display or serialisation
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct PackageMetadata {
    pub name: String,
    pub version: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub long_description: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub author: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub author_email: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub url: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub download_url: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub license: Option<String>,
    pub keywords: Vec<String>,
    pub platforms: Vec<String>,
    pub classifiers: Vec<String>,
    pub packages: Vec<String>,
    pub install_requires: Vec<Requirement>,
    pub tests_require: Vec<Requirement>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub test_suite: Option<String>,
    pub include_package_data: bool,
    pub zip_safe: bool,
}

impl PackageDescriptor {
    /// Parse the `[package]` table of a descriptor document
    pub fn from_toml_str(text: &str) -> DescriptorResult<Self> {
        toml::from_str::<DescriptorFile>(text)
            .map(|file| file.package)
            .map_err(|e| DescriptorError::Parse {
                path: None,
                message: e.message().to_string(),
            })
    }

    /// Load a descriptor file from disk
    pub fn load(path: &Path) -> DescriptorResult<Self> {
        let text = std::fs::read_to_string(path).map_err(|source| DescriptorError::Read {
            path: path.to_path_buf(),
            source,
        })?;
        log::debug!("Loaded descriptor {} ({} bytes)", path.display(), text.len());

        Self::from_toml_str(&text).map_err(|e| match e {
            DescriptorError::Parse { message, .. } => DescriptorError::Parse {
                path: Some(path.to_path_buf()),
                message,
            },
            other => other,
        })
    }

    /// The single declared version source
    pub fn version_source(&self) -> DescriptorResult<VersionSource<'_>> {
        match (&self.version, self.version_file.is_empty()) {
            (Some(_), false) => Err(DescriptorError::VersionSource {
                package: self.name.clone(),
                message: "version and version-file are mutually exclusive".to_string(),
            }),
            (Some(version), true) => Ok(VersionSource::Static(version)),
            (None, false) => Ok(VersionSource::File {
                parts: &self.version_file,
                identifier: self.version_identifier.as_deref(),
            }),
            (None, true) => Err(DescriptorError::VersionSource {
                package: self.name.clone(),
                message: "one of version or version-file is required".to_string(),
            }),
        }
    }

    /// Resolve the version through `resolver` (or take the static one)
    pub fn resolve_version(&self, resolver: &VersionResolver) -> DescriptorResult<String> {
        match self.version_source()? {
            VersionSource::Static(version) => Ok(version.to_string()),
            VersionSource::File { parts, identifier } => {
                let version = match identifier {
                    Some(identifier) => resolver
                        .clone()
                        .with_identifier(identifier)?
                        .find_version(parts)?,
                    None => resolver.find_version(parts)?,
                };
                Ok(version)
            }
        }
    }

    /// Inline long description, or the contents of the readme file
    pub fn resolve_long_description(
        &self,
        resolver: &VersionResolver,
    ) -> DescriptorResult<Option<String>> {
        match (&self.long_description, self.readme.is_empty()) {
            (Some(_), false) => Err(DescriptorError::LongDescriptionSource {
                package: self.name.clone(),
            }),
            (Some(text), true) => Ok(Some(text.clone())),
            (None, false) => Ok(Some(resolver.read(&self.readme)?)),
            (None, true) => Ok(None),
        }
    }

    /// Produce the full metadata with version and long description resolved
    pub fn resolve(&self, resolver: &VersionResolver) -> DescriptorResult<PackageMetadata> {
        let version = self.resolve_version(resolver)?;
        let long_description = self.resolve_long_description(resolver)?;
        let install_requires = parse_requirements(&self.install_requires)?;
        let tests_require = parse_requirements(&self.tests_require)?;

        log::info!("Resolved {} {}", self.name, version);

        Ok(PackageMetadata {
            name: self.name.clone(),
            version,
            description: self.description.clone(),
            long_description,
            author: self.author.clone(),
            author_email: self.author_email.clone(),
            url: self.url.clone(),
            download_url: self.download_url.clone(),
            license: self.license.clone(),
            keywords: self.keywords.clone(),
            platforms: self.platforms.clone(),
            classifiers: self.classifiers.clone(),
            packages: self.packages.clone(),
            install_requires,
            tests_require,
            test_suite: self.test_suite.clone(),
            include_package_data: self.include_package_data,
            zip_safe: self.zip_safe,
        })
    }
}
