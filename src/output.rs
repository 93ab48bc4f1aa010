use colored::Colorize;
use indexmap::IndexMap;
use serde::Serialize;

use crate::extract::{Extraction, TableColumns};

/// Output format for results
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum OutputFormat {
    #[default]
    Text,
    Json,
    Yaml
}

/// Output options
#[derive(Debug, Clone)]
pub struct OutputOptions {
    pub format:  OutputFormat,
    pub colored: bool,
    pub verbose: bool
}

impl Default for OutputOptions {
    fn default() -> Self {
        Self {
            format:  OutputFormat::Text,
            colored: true,
            verbose: false
        }
    }
}

/// Extraction result of one input source
#[derive(Debug, Clone, Serialize)]
pub struct SourceReport {
    /// File path, or `<stdin>`
    pub source:     String,
    pub extraction: Extraction
}

/// Format reports based on output options
///
/// A single report serializes as the bare table mapping; several are keyed by
/// source.
pub fn format_reports(reports: &[SourceReport], opts: &OutputOptions) -> String {
    match opts.format {
        OutputFormat::Json => match reports {
            [single] => {
                serde_json::to_string_pretty(&single.extraction.tables).unwrap_or_default()
            }
            _ => serde_json::to_string_pretty(&by_source(reports)).unwrap_or_default()
        },
        OutputFormat::Yaml => match reports {
            [single] => serde_yaml::to_string(&single.extraction.tables).unwrap_or_default(),
            _ => serde_yaml::to_string(&by_source(reports)).unwrap_or_default()
        },
        OutputFormat::Text => {
            let mut output = String::new();
            let with_headers = reports.len() > 1;
            for (i, report) in reports.iter().enumerate() {
                if with_headers {
                    if i > 0 {
                        output.push('\n');
                    }
                    let header = format!("==> {} <==", report.source);
                    output.push_str(&paint(&header, opts, |s| s.bold().to_string()));
                    output.push('\n');
                }
                output.push_str(&format_table_columns(&report.extraction.tables, opts));
                if opts.verbose {
                    output.push_str(&format_statements(&report.extraction, opts));
                }
            }
            output
        }
    }
}

/// Human-readable listing of one mapping
pub fn format_table_columns(tables: &TableColumns, opts: &OutputOptions) -> String {
    if tables.is_empty() {
        return String::from("(no tables found)\n");
    }

    let mut output = String::new();
    for (table, columns) in tables.iter() {
        let header = format!("{}:", table);
        output.push_str(&paint(&header, opts, |s| s.cyan().bold().to_string()));
        output.push('\n');
        for column in columns {
            output.push_str(&format!("  {}\n", column));
        }
    }
    output
}

fn format_statements(extraction: &Extraction, opts: &OutputOptions) -> String {
    let mut output = String::from("\n");
    output.push_str(&paint("Statements:", opts, |s| s.bold().to_string()));
    output.push('\n');

    for stmt in &extraction.statements {
        let tables: Vec<&str> = stmt.tables.iter().map(|t| t.as_str()).collect();
        output.push_str(&format!(
            "  #{} {} (tables: {}; {} candidates)\n",
            stmt.index,
            paint(&stmt.primary_table, opts, |s| s.cyan().to_string()),
            tables.join(", "),
            stmt.candidates.len()
        ));
    }

    if extraction.skipped > 0 {
        let note = format!(
            "  {} statement(s) without a table reference skipped",
            extraction.skipped
        );
        output.push_str(&paint(&note, opts, |s| s.yellow().to_string()));
        output.push('\n');
    }
    output
}

fn by_source(reports: &[SourceReport]) -> IndexMap<&str, &TableColumns> {
    reports
        .iter()
        .map(|r| (r.source.as_str(), &r.extraction.tables))
        .collect()
}

fn paint(text: &str, opts: &OutputOptions, style: impl Fn(&str) -> String) -> String {
    if opts.colored {
        style(text)
    } else {
        text.to_string()
    }
}
