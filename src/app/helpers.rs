//! Helper functions for CLI operations.
//!
//! Input reading, resolution of effective settings from CLI and config, and
//! the parallel per-source extraction.

use std::{
    fs::read_to_string,
    io::{self, Read}
};

use indicatif::{ProgressBar, ProgressStyle};
use rayon::prelude::*;

use super::convert::{convert_format, parse_format_name};
use crate::{
    cli::Format,
    config::Config,
    error::{AppResult, config_error, file_read_error},
    extract::{Extractor, Stoplist},
    output::{OutputOptions, SourceReport}
};

/// Label used for stdin in reports.
pub const STDIN_LABEL: &str = "<stdin>";

/// Reads SQL from a file or stdin.
///
/// # Errors
///
/// Returns an error if the file cannot be read or stdin fails.
pub fn read_input(path: &str) -> AppResult<String> {
    if path == "-" {
        let mut buffer = String::new();
        io::stdin()
            .read_to_string(&mut buffer)
            .map_err(|e| file_read_error("stdin", e))?;
        Ok(buffer)
    } else {
        read_to_string(path).map_err(|e| file_read_error(path, e))
    }
}

/// Report label for an input path.
pub fn source_label(path: &str) -> String {
    if path == "-" {
        STDIN_LABEL.to_string()
    } else {
        path.to_string()
    }
}

/// Builds the stoplist from configured words followed by CLI words.
///
/// # Errors
///
/// Returns a config error if the combined stoplist cannot be compiled.
pub fn build_stoplist(cli_words: &[String], config: &Config) -> AppResult<Stoplist> {
    let words = config.extract.extra_stopwords.iter().chain(cli_words);
    Stoplist::with_extra(words).map_err(|e| config_error(format!("Invalid stoplist: {}", e)))
}

/// Gets the effective output format.
///
/// Resolves in order of precedence:
/// 1. Format given on the command line
/// 2. Format from configuration
/// 3. Text
///
/// # Errors
///
/// Returns a config error if the configured format name is unknown.
pub fn get_effective_format(
    format: Option<Format>,
    config_format: Option<&str>
) -> AppResult<Format> {
    match (format, config_format) {
        (Some(format), _) => Ok(format),
        (None, Some(name)) => parse_format_name(name),
        (None, None) => Ok(Format::Text)
    }
}

/// Colors are on unless disabled by flag or configuration.
pub fn get_effective_colored(no_color: bool, config_colored: Option<bool>) -> bool {
    !no_color && config_colored.unwrap_or(true)
}

/// Creates output options from resolved settings.
pub fn create_output_options(format: Format, colored: bool, verbose: bool) -> OutputOptions {
    OutputOptions {
        format: convert_format(format),
        colored,
        verbose
    }
}

/// Extracts every `(label, sql)` source in parallel, keeping input order.
///
/// A progress bar is drawn on stderr when there is more than one source.
pub fn extract_sources(
    sources: Vec<(String, String)>,
    extractor: &Extractor
) -> Vec<SourceReport> {
    let pb = if sources.len() > 1 {
        let pb = ProgressBar::new(sources.len() as u64);
        if let Ok(style) =
            ProgressStyle::default_bar().template("{bar:30.green} {pos}/{len} {msg}")
        {
            pb.set_style(style);
        }
        pb.set_message("extracting");
        pb
    } else {
        ProgressBar::hidden()
    };

    let reports: Vec<SourceReport> = sources
        .into_par_iter()
        .map(|(source, sql)| {
            let extraction = extractor.extract_detailed(&sql);
            tracing::debug!(
                source = %source,
                tables = extraction.tables.len(),
                skipped = extraction.skipped,
                "extracted source"
            );
            pb.inc(1);
            SourceReport {
                source,
                extraction
            }
        })
        .collect();

    pb.finish_and_clear();
    reports
}
