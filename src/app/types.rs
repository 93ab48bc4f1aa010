//! Application types for CLI commands.
//!
//! Parameters passed from the command line into the application layer and
//! the results handed back for printing.

use crate::{cli::Format, output::SourceReport};

/// Parameters for the extract command.
///
/// # Example
///
/// ```
/// use sql_schema_parser::{app::ExtractParams, cli::Format};
///
/// let params = ExtractParams {
///     inputs:        vec!["queries.sql".to_string()],
///     output_format: Some(Format::Json),
///     stopwords:     vec!["WHERE".to_string()],
///     verbose:       false,
///     no_color:      true
/// };
/// ```
#[derive(Debug, Clone)]
pub struct ExtractParams {
    /// Input file paths, "-" meaning stdin.
    pub inputs:        Vec<String>,
    /// Output format; falls back to the configured one, then text.
    pub output_format: Option<Format>,
    /// Extra stopwords appended to the configured ones.
    pub stopwords:     Vec<String>,
    /// Include the per-statement breakdown in text output.
    pub verbose:       bool,
    /// Disable colored terminal output.
    pub no_color:      bool
}

/// Result of the extract command.
#[derive(Debug, Clone)]
pub struct ExtractResult {
    /// Per-source extraction, in input order.
    pub reports: Vec<SourceReport>,
    /// Formatted output ready for stdout.
    pub output:  String
}

/// Output from CLI command execution.
///
/// # Example
///
/// ```
/// use sql_schema_parser::app::CommandOutput;
///
/// let output = CommandOutput {
///     stdout: vec!["SELECT".to_string()]
/// };
/// ```
#[derive(Debug, Clone)]
pub struct CommandOutput {
    /// Lines to print to stdout.
    pub stdout: Vec<String>
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_extract_params_clone() {
        let params = ExtractParams {
            inputs:        vec!["-".to_string()],
            output_format: None,
            stopwords:     vec![],
            verbose:       false,
            no_color:      false
        };
        let cloned = params.clone();
        assert_eq!(cloned.inputs, params.inputs);
        assert!(format!("{:?}", cloned).contains("ExtractParams"));
    }

    #[test]
    fn test_command_output_clone() {
        let output = CommandOutput {
            stdout: vec!["line".to_string()]
        };
        assert_eq!(output.clone().stdout.len(), 1);
    }
}
