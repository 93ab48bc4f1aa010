//! Conversions from CLI-facing types to internal ones.

use clap::ValueEnum;

use crate::{
    cli::Format,
    error::{AppResult, invalid_format_error},
    output::OutputFormat
};

/// Converts a CLI format enum to the internal output format type.
///
/// # Example
///
/// ```
/// use sql_schema_parser::{app::convert_format, cli::Format, output::OutputFormat};
///
/// assert_eq!(convert_format(Format::Json), OutputFormat::Json);
/// ```
pub fn convert_format(format: Format) -> OutputFormat {
    match format {
        Format::Text => OutputFormat::Text,
        Format::Json => OutputFormat::Json,
        Format::Yaml => OutputFormat::Yaml
    }
}

/// Parses a format name as written in config files or the environment.
///
/// Matching ignores case and surrounding whitespace.
///
/// # Errors
///
/// Returns a config error for names other than text, json and yaml.
pub fn parse_format_name(name: &str) -> AppResult<Format> {
    Format::from_str(name.trim(), true).map_err(|_| invalid_format_error(name))
}
