//! Command execution.
//!
//! Orchestrates reading inputs, resolving settings from CLI and config,
//! extracting and formatting.

use super::{
    helpers::{
        build_stoplist, create_output_options, extract_sources, get_effective_colored,
        get_effective_format, read_input, source_label
    },
    types::{CommandOutput, ExtractParams, ExtractResult}
};
use crate::{config::Config, error::AppResult, extract::Extractor, output::format_reports};

/// Runs the extract command.
///
/// 1. Resolves stoplist, format and colors from params and config
/// 2. Reads every input (file or stdin)
/// 3. Extracts all sources in parallel
/// 4. Formats the reports
///
/// # Errors
///
/// Returns an error if an input cannot be read or the configuration is
/// invalid. Extraction itself never fails.
///
/// # Example
///
/// ```no_run
/// use sql_schema_parser::{
///     app::{ExtractParams, run_extract},
///     config::Config
/// };
///
/// # fn example() -> Result<(), Box<dyn std::error::Error>> {
/// let params = ExtractParams {
///     inputs:        vec!["queries.sql".to_string()],
///     output_format: None,
///     stopwords:     vec![],
///     verbose:       false,
///     no_color:      false
/// };
///
/// let result = run_extract(params, Config::default())?;
/// println!("{}", result.output);
/// # Ok(())
/// # }
/// ```
pub fn run_extract(params: ExtractParams, config: Config) -> AppResult<ExtractResult> {
    let stoplist = build_stoplist(&params.stopwords, &config)?;
    let format = get_effective_format(params.output_format, config.output.format.as_deref())?;
    let colored = get_effective_colored(params.no_color, config.output.colored);
    let opts = create_output_options(format, colored, params.verbose);

    let mut sources = Vec::with_capacity(params.inputs.len());
    for path in &params.inputs {
        let sql = read_input(path)?;
        tracing::debug!(path = %path, bytes = sql.len(), "read input");
        sources.push((source_label(path), sql));
    }

    let extractor = Extractor::new(stoplist);
    let reports = extract_sources(sources, &extractor);
    let output = format_reports(&reports, &opts);

    Ok(ExtractResult {
        reports,
        output
    })
}

/// Runs the stoplist command: one stopword per line, built-ins first.
///
/// # Errors
///
/// Returns a config error if the stoplist cannot be built.
pub fn run_stoplist(stopwords: &[String], config: &Config) -> AppResult<CommandOutput> {
    let stoplist = build_stoplist(stopwords, config)?;
    Ok(CommandOutput {
        stdout: stoplist.words().map(String::from).collect()
    })
}
