//! Declaration pattern matching
//!
//! A declaration is a line of the form `__version__ = '1.2.3'` or
//! `__version__ = "1.2.3"`, starting at column zero.

use std::sync::LazyLock;

use regex::Regex;

use super::error::{ResolveError, ResolveResult};

/// Identifier searched for when none is configured
pub const DEFAULT_IDENTIFIER: &str = "__version__";

static DEFAULT_PATTERN: LazyLock<DeclarationPattern> = LazyLock::new(|| DeclarationPattern {
    identifier: DEFAULT_IDENTIFIER.to_string(),
    regex: compile(DEFAULT_IDENTIFIER).expect("default declaration pattern must compile"),
});

/// Compiled matcher for `<identifier> = '<value>'` lines
#[derive(Debug, Clone)]
pub struct DeclarationPattern {
    identifier: String,
    regex: Regex,
}

impl DeclarationPattern {
    /// Build a pattern for a custom identifier.
    ///
    /// The identifier is matched literally. Empty identifiers and identifiers
    /// containing whitespace or quotes cannot appear on the left-hand side of
    /// a declaration and are rejected.
    pub fn new(identifier: &str) -> ResolveResult<Self> {
        validate_identifier(identifier)?;
        let regex = compile(identifier).map_err(|e| ResolveError::InvalidIdentifier {
            identifier: identifier.to_string(),
            reason: e.to_string(),
        })?;
        Ok(Self {
            identifier: identifier.to_string(),
            regex,
        })
    }

    pub fn identifier(&self) -> &str {
        &self.identifier
    }

    /// Value of the first declaration in `text`, if any
    pub fn find<'t>(&self, text: &'t str) -> Option<&'t str> {
        self.regex
            .captures(text)
            .and_then(|caps| caps.get(1))
            .map(|m| m.as_str())
    }
}

impl Default for DeclarationPattern {
    fn default() -> Self {
        DEFAULT_PATTERN.clone()
    }
}

fn compile(identifier: &str) -> Result<Regex, regex::Error> {
    // Multiline so that ^ anchors at every line start
    Regex::new(&format!(
        r#"(?m)^{} = ['"]([^'"]*)['"]"#,
        regex::escape(identifier)
    ))
}

fn validate_identifier(identifier: &str) -> ResolveResult<()> {
    let reason = if identifier.is_empty() {
        Some("identifier cannot be empty")
    } else if identifier.chars().any(char::is_whitespace) {
        Some("identifier cannot contain whitespace")
    } else if identifier.contains(['\'', '"']) {
        Some("identifier cannot contain quotes")
    } else {
        None
    };

    match reason {
        Some(reason) => Err(ResolveError::InvalidIdentifier {
            identifier: identifier.to_string(),
            reason: reason.to_string(),
        }),
        None => Ok(()),
    }
}
