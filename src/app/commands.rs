//! Command implementations
//!
//! Each command returns a `CommandOutput` so the startup code owns
//! all printing and exit-status decisions.

use std::path::PathBuf;

use crate::app::cli::args::{Args, Command, OutputFormat};
use crate::app::cli::display;
use crate::app::error::{AppError, AppResult};
use crate::metadata::{check, CheckIssue, DescriptorError, PackageDescriptor, VersionSource};
use crate::resolver::VersionResolver;

/// Output of a command run
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CommandOutput {
    /// Text to print to stdout
    Text(String),
    /// Metadata to print as a (possibly colored) table
    Table(Box<crate::metadata::PackageMetadata>),
    /// Check results; the run fails when any error-severity issue exists
    Issues {
        descriptor: PathBuf,
        issues: Vec<CheckIssue>,
    },
}

/// Run the selected command
pub fn run(args: &Args) -> AppResult<CommandOutput> {
    match args.selected_command() {
        Command::Version { parts, identifier } => {
            version_command(args, &parts, identifier.as_deref()).map(CommandOutput::Text)
        }
        Command::Show { format } => show_command(args, format),
        Command::Check => check_command(args),
    }
}

/// Descriptor plus a resolver rooted at its base directory
fn load_descriptor(args: &Args) -> AppResult<(PathBuf, PackageDescriptor, VersionResolver)> {
    let path = args.descriptor_path();
    let descriptor = PackageDescriptor::load(&path)?;
    let base_dir = args.base_dir_for(&path);
    log::debug!(
        "Descriptor {} uses base directory {}",
        path.display(),
        base_dir.display()
    );
    Ok((path, descriptor, VersionResolver::new(base_dir)))
}

/// `version`: resolve from explicit path segments, or from the descriptor
pub fn version_command(args: &Args, parts: &[String], identifier: Option<&str>) -> AppResult<String> {
    if parts.is_empty() {
        let (_, mut descriptor, resolver) = load_descriptor(args)?;
        if let Some(identifier) = identifier {
            let is_static = matches!(descriptor.version_source()?, VersionSource::Static(_));
            if is_static {
                return Err(DescriptorError::VersionSource {
                    package: descriptor.name,
                    message: "--identifier requires version-file".to_string(),
                }
                .into());
            }
            descriptor.version_identifier = Some(identifier.to_string());
        }
        return Ok(descriptor.resolve_version(&resolver)?);
    }

    let mut resolver = VersionResolver::new(args.base_dir_or_current());
    if let Some(identifier) = identifier {
        resolver = resolver.with_identifier(identifier)?;
    }
    Ok(resolver.find_version(parts)?)
}

/// `show`: resolve the whole descriptor
pub fn show_command(args: &Args, format: OutputFormat) -> AppResult<CommandOutput> {
    let (_, descriptor, resolver) = load_descriptor(args)?;
    let metadata = descriptor.resolve(&resolver)?;
    log::debug!("Rendering metadata for {} as {}", metadata.name, format);

    match format {
        OutputFormat::Json => Ok(CommandOutput::Text(display::render_json(&metadata)?)),
        OutputFormat::Text => Ok(CommandOutput::Table(Box::new(metadata))),
    }
}

/// `check`: run every descriptor rule
pub fn check_command(args: &Args) -> AppResult<CommandOutput> {
    let (descriptor_path, descriptor, resolver) = load_descriptor(args)?;
    let issues = check(&descriptor, &resolver);
    Ok(CommandOutput::Issues {
        descriptor: descriptor_path,
        issues,
    })
}

/// Print a command's output, failing when a check reported errors
pub fn emit(output: CommandOutput, use_color: bool) -> AppResult<()> {
    match output {
        CommandOutput::Text(text) => println!("{}", text),
        CommandOutput::Table(metadata) => display::print_metadata(&metadata, use_color)?,
        CommandOutput::Issues { descriptor, issues } => {
            for issue in &issues {
                println!("{}", display::format_issue(issue, use_color));
            }
            let errors = issues.iter().filter(|i| i.is_error()).count();
            if errors > 0 {
                return Err(AppError::CheckFailed {
                    path: descriptor,
                    errors,
                });
            }
            log::info!(
                "{}: no errors ({} warning(s))",
                descriptor.display(),
                issues.len()
            );
        }
    }
    Ok(())
}
