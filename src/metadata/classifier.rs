//! Trove-style classifiers: `Topic :: Database :: Front-Ends`

const SEPARATOR: &str = " :: ";

/// Top-level Trove categories; `Private` marks classifiers never meant for upload
pub const KNOWN_CATEGORIES: [&str; 11] = [
    "Development Status",
    "Environment",
    "Framework",
    "Intended Audience",
    "License",
    "Natural Language",
    "Operating System",
    "Private",
    "Programming Language",
    "Topic",
    "Typing",
];

/// Split a classifier into its segments.
///
/// A classifier needs at least two segments and none of them may be empty
/// or carry surrounding whitespace. Returns `None` otherwise.
pub fn parse_classifier(classifier: &str) -> Option<Vec<&str>> {
    let segments: Vec<&str> = classifier.split(SEPARATOR).collect();
    if segments.len() < 2 {
        return None;
    }
    let well_formed = segments
        .iter()
        .all(|s| !s.is_empty() && s.trim() == *s && !s.contains("::"));
    well_formed.then_some(segments)
}

/// Top-level category of a well-formed classifier (`Topic`, `License`, ...)
pub fn category(classifier: &str) -> Option<&str> {
    parse_classifier(classifier).and_then(|segments| segments.first().copied())
}

pub fn is_known_category(category: &str) -> bool {
    KNOWN_CATEGORIES.contains(&category)
}
