//! Dependency requirement strings such as `flask>=0.10` or `foo>=1.0,<2`
//!
//! Extras (`requests[security]`) and environment markers
//! (`enum34; python_version<'3.4'`) are kept verbatim; markers are not
//! evaluated.

use std::fmt;
use std::str::FromStr;
use std::sync::LazyLock;

use regex::Regex;
use serde::{Serialize, Serializer};
use strum_macros::{Display, EnumIter, EnumString};

use super::error::RequirementError;

static NAME_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^([A-Za-z0-9](?:[A-Za-z0-9._-]*[A-Za-z0-9])?)\s*(?:\[([^\]]*)\])?\s*(.*)$")
        .expect("requirement name pattern must compile")
});

static EXTRA_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^[A-Za-z0-9](?:[A-Za-z0-9._-]*[A-Za-z0-9])?$")
        .expect("requirement extra pattern must compile")
});

static SPECIFIER_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^(===|==|!=|<=|>=|~=|<|>)\s*([A-Za-z0-9][A-Za-z0-9.*+!_-]*)$")
        .expect("requirement specifier pattern must compile")
});

/// Version comparison operator
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Display, EnumString, EnumIter)]
pub enum Comparator {
    #[strum(serialize = "===")]
    Arbitrary,
    #[strum(serialize = "==")]
    Equal,
    #[strum(serialize = "!=")]
    NotEqual,
    #[strum(serialize = "<=")]
    AtMost,
    #[strum(serialize = ">=")]
    AtLeast,
    #[strum(serialize = "~=")]
    Compatible,
    #[strum(serialize = "<")]
    Below,
    #[strum(serialize = ">")]
    Above,
}

/// One `<comparator><version>` clause
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct VersionSpecifier {
    pub comparator: Comparator,
    pub version: String,
}

impl fmt::Display for VersionSpecifier {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}{}", self.comparator, self.version)
    }
}

/// A named dependency with optional extras, version constraints and marker
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Requirement {
    pub name: String,
    pub extras: Vec<String>,
    pub specifiers: Vec<VersionSpecifier>,
    /// Environment marker after `;`, trimmed
    pub marker: Option<String>,
}

impl Requirement {
    /// Project name normalised for comparisons (`Flask_SQLAlchemy` == `flask-sqlalchemy`)
    pub fn normalized_name(&self) -> String {
        self.name
            .chars()
            .map(|c| match c {
                '_' | '.' => '-',
                c => c.to_ascii_lowercase(),
            })
            .collect()
    }
}

impl FromStr for Requirement {
    type Err = RequirementError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let trimmed = s.trim();
        if trimmed.is_empty() {
            return Err(RequirementError::Empty);
        }

        let (head, marker) = match trimmed.split_once(';') {
            Some((head, marker)) => {
                let marker = marker.trim();
                if marker.is_empty() {
                    return Err(RequirementError::EmptyMarker {
                        requirement: trimmed.to_string(),
                    });
                }
                (head.trim(), Some(marker.to_string()))
            }
            None => (trimmed, None),
        };

        let caps = NAME_RE
            .captures(head)
            .ok_or_else(|| RequirementError::InvalidName {
                requirement: trimmed.to_string(),
            })?;
        let name = caps[1].to_string();
        let rest = caps[3].trim();

        let mut extras = Vec::new();
        if let Some(list) = caps.get(2) {
            for extra in list.as_str().split(',').map(str::trim) {
                if !EXTRA_RE.is_match(extra) {
                    return Err(RequirementError::InvalidExtra {
                        requirement: trimmed.to_string(),
                        extra: extra.to_string(),
                    });
                }
                extras.push(extra.to_string());
            }
        }

        let mut specifiers = Vec::new();
        if !rest.is_empty() {
            for clause in rest.split(',') {
                let clause = clause.trim();
                let spec = SPECIFIER_RE.captures(clause).and_then(|c| {
                    let comparator = Comparator::from_str(&c[1]).ok()?;
                    Some(VersionSpecifier {
                        comparator,
                        version: c[2].to_string(),
                    })
                });
                match spec {
                    Some(spec) => specifiers.push(spec),
                    None => {
                        return Err(RequirementError::InvalidSpecifier {
                            requirement: trimmed.to_string(),
                            specifier: clause.to_string(),
                        })
                    }
                }
            }
        }

        Ok(Self {
            name,
            extras,
            specifiers,
            marker,
        })
    }
}

impl fmt::Display for Requirement {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.name)?;
        if !self.extras.is_empty() {
            write!(f, "[{}]", self.extras.join(","))?;
        }
        for (i, spec) in self.specifiers.iter().enumerate() {
            if i > 0 {
                write!(f, ",")?;
            }
            write!(f, "{}", spec)?;
        }
        if let Some(marker) = &self.marker {
            write!(f, "; {}", marker)?;
        }
        Ok(())
    }
}

// Serialised in canonical string form
impl Serialize for Requirement {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_str(self)
    }
}

/// Parse every requirement in `raw`, stopping at the first malformed one
pub fn parse_requirements(raw: &[String]) -> Result<Vec<Requirement>, RequirementError> {
    raw.iter().map(|r| r.parse()).collect()
}
