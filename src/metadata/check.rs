//! Descriptor checks
//!
//! Unlike `PackageDescriptor::resolve`, which stops at the first failure,
//! `check` runs every rule and reports all issues it finds.

use std::collections::HashSet;
use std::fmt;
use std::sync::LazyLock;

use regex::Regex;
use serde::Serialize;
use strum_macros::Display;

use super::classifier::{category, is_known_category};
use super::descriptor::PackageDescriptor;
use super::requirement::Requirement;
use crate::resolver::VersionResolver;

static NAME_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^[A-Za-z0-9][A-Za-z0-9._-]*$").expect("package name pattern must compile")
});

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Display, Serialize)]
#[strum(serialize_all = "lowercase")]
#[serde(rename_all = "lowercase")]
pub enum Severity {
    Warning,
    Error,
}

/// One problem found in a descriptor
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct CheckIssue {
    pub severity: Severity,
    pub field: String,
    pub message: String,
}

impl CheckIssue {
    fn error(field: &str, message: impl Into<String>) -> Self {
        Self {
            severity: Severity::Error,
            field: field.to_string(),
            message: message.into(),
        }
    }

    fn warning(field: &str, message: impl Into<String>) -> Self {
        Self {
            severity: Severity::Warning,
            field: field.to_string(),
            message: message.into(),
        }
    }

    pub fn is_error(&self) -> bool {
        self.severity == Severity::Error
    }
}

impl fmt::Display for CheckIssue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}: {}: {}", self.severity, self.field, self.message)
    }
}

/// Run every descriptor rule and collect the issues found
pub fn check(descriptor: &PackageDescriptor, resolver: &VersionResolver) -> Vec<CheckIssue> {
    let mut issues = Vec::new();

    check_name(descriptor, &mut issues);
    check_version(descriptor, resolver, &mut issues);
    check_long_description(descriptor, resolver, &mut issues);
    check_requirements("install-requires", &descriptor.install_requires, &mut issues);
    check_requirements("tests-require", &descriptor.tests_require, &mut issues);
    check_classifiers(&descriptor.classifiers, &mut issues);
    check_contact(descriptor, &mut issues);

    log::debug!(
        "Checked descriptor '{}': {} issue(s)",
        descriptor.name,
        issues.len()
    );
    issues
}

fn check_name(descriptor: &PackageDescriptor, issues: &mut Vec<CheckIssue>) {
    if descriptor.name.is_empty() {
        issues.push(CheckIssue::error("name", "package name is empty"));
    } else if !NAME_RE.is_match(&descriptor.name) {
        issues.push(CheckIssue::error(
            "name",
            format!("'{}' is not a valid package name", descriptor.name),
        ));
    }
}

fn check_version(
    descriptor: &PackageDescriptor,
    resolver: &VersionResolver,
    issues: &mut Vec<CheckIssue>,
) {
    match descriptor.resolve_version(resolver) {
        Ok(version) if version.trim().is_empty() => {
            issues.push(CheckIssue::error("version", "resolved version is empty"));
        }
        Ok(_) => {}
        Err(e) => issues.push(CheckIssue::error("version", e.to_string())),
    }
}

fn check_long_description(
    descriptor: &PackageDescriptor,
    resolver: &VersionResolver,
    issues: &mut Vec<CheckIssue>,
) {
    if let Err(e) = descriptor.resolve_long_description(resolver) {
        issues.push(CheckIssue::error("readme", e.to_string()));
    }
}

fn check_requirements(field: &str, raw: &[String], issues: &mut Vec<CheckIssue>) {
    let mut seen = HashSet::new();
    for entry in raw {
        match entry.parse::<Requirement>() {
            Ok(requirement) => {
                if !seen.insert(requirement.normalized_name()) {
                    issues.push(CheckIssue::warning(
                        field,
                        format!("'{}' is listed more than once", requirement.name),
                    ));
                }
            }
            Err(e) => issues.push(CheckIssue::error(field, e.to_string())),
        }
    }
}

fn check_classifiers(classifiers: &[String], issues: &mut Vec<CheckIssue>) {
    let mut seen = HashSet::new();
    for classifier in classifiers {
        let Some(top) = category(classifier) else {
            issues.push(CheckIssue::error(
                "classifiers",
                format!("malformed classifier '{}'", classifier),
            ));
            continue;
        };
        if !seen.insert(classifier.as_str()) {
            issues.push(CheckIssue::warning(
                "classifiers",
                format!("duplicate classifier '{}'", classifier),
            ));
        } else if !is_known_category(top) {
            issues.push(CheckIssue::warning(
                "classifiers",
                format!("unknown classifier category '{}' in '{}'", top, classifier),
            ));
        }
    }
}

fn check_contact(descriptor: &PackageDescriptor, issues: &mut Vec<CheckIssue>) {
    if let Some(email) = &descriptor.author_email {
        if !email.contains('@') {
            issues.push(CheckIssue::warning(
                "author-email",
                format!("'{}' does not look like an email address", email),
            ));
        }
    }

    for (field, url) in [("url", &descriptor.url), ("download-url", &descriptor.download_url)] {
        if let Some(url) = url {
            if !(url.starts_with("http://") || url.starts_with("https://")) {
                issues.push(CheckIssue::warning(
                    field,
                    format!("'{}' is not an http(s) URL", url),
                ));
            }
        }
    }
}
