//! Rendering of resolved metadata and check results

use prettytable::{format, Cell, Row, Table};

use crate::core::styles::StyleRole;
use crate::metadata::{CheckIssue, PackageMetadata, Severity};

/// Build the `show` table: one row per populated field
pub fn metadata_table(metadata: &PackageMetadata, use_color: bool) -> Table {
    let mut table = Table::new();
    table.set_format(*format::consts::FORMAT_CLEAN);

    let mut add = |field: &str, value: String, role: StyleRole| {
        if value.is_empty() {
            return;
        }
        table.add_row(Row::new(vec![
            styled_cell(field, StyleRole::Field, use_color),
            styled_cell(&value, role, use_color),
        ]));
    };

    add("Name", metadata.name.clone(), StyleRole::Value);
    add("Version", metadata.version.clone(), StyleRole::Version);
    add("Summary", opt(&metadata.description), StyleRole::Value);
    add("Author", author_line(metadata), StyleRole::Value);
    add("License", opt(&metadata.license), StyleRole::Value);
    add("Home page", opt(&metadata.url), StyleRole::Value);
    add("Download", opt(&metadata.download_url), StyleRole::Value);
    add("Keywords", metadata.keywords.join(", "), StyleRole::Value);
    add("Platforms", metadata.platforms.join(", "), StyleRole::Value);
    add("Packages", metadata.packages.join(", "), StyleRole::Value);
    add("Requires", join_lines(&metadata.install_requires), StyleRole::Value);
    add("Test requires", join_lines(&metadata.tests_require), StyleRole::Value);
    add("Test suite", opt(&metadata.test_suite), StyleRole::Value);
    add("Classifiers", metadata.classifiers.join("\n"), StyleRole::Dim);
    add("Zip safe", metadata.zip_safe.to_string(), StyleRole::Value);
    add(
        "Package data",
        metadata.include_package_data.to_string(),
        StyleRole::Value,
    );

    table
}

/// Render the metadata table as plain text
pub fn render_text(metadata: &PackageMetadata) -> String {
    metadata_table(metadata, false).to_string()
}

/// Render the metadata as pretty-printed JSON
pub fn render_json(metadata: &PackageMetadata) -> Result<String, serde_json::Error> {
    serde_json::to_string_pretty(metadata)
}

/// Print the metadata table to stdout, colored when enabled
pub fn print_metadata(metadata: &PackageMetadata, use_color: bool) -> std::io::Result<()> {
    let table = metadata_table(metadata, use_color);
    if use_color {
        table.print_tty(true)?;
    } else {
        print!("{}", table);
    }
    Ok(())
}

/// One line per issue: `error: field: message`
pub fn format_issue(issue: &CheckIssue, use_color: bool) -> String {
    let role = match issue.severity {
        Severity::Error => StyleRole::Error,
        Severity::Warning => StyleRole::Warning,
    };
    format!(
        "{}: {}: {}",
        role.paint(&issue.severity.to_string(), use_color),
        StyleRole::Field.paint(&issue.field, use_color),
        issue.message
    )
}

fn styled_cell(text: &str, role: StyleRole, use_color: bool) -> Cell {
    let cell = Cell::new(text);
    match role.to_prettytable_spec() {
        Some(spec) if use_color => cell.style_spec(&spec),
        _ => cell,
    }
}

fn opt(value: &Option<String>) -> String {
    value.clone().unwrap_or_default()
}

fn author_line(metadata: &PackageMetadata) -> String {
    match (&metadata.author, &metadata.author_email) {
        (Some(name), Some(email)) => format!("{} <{}>", name, email),
        (Some(name), None) => name.clone(),
        (None, Some(email)) => email.clone(),
        (None, None) => String::new(),
    }
}

fn join_lines<T: ToString>(items: &[T]) -> String {
    items
        .iter()
        .map(|item| item.to_string())
        .collect::<Vec<_>>()
        .join("\n")
}
