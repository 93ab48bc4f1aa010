use std::path::PathBuf;

use clap::{Parser, Subcommand, ValueEnum};

/// SQL Schema Parser - List the tables referenced by SQL text and the columns used with each
#[derive(Parser, Debug)]
#[command(name = "sql-schema-parser")]
#[command(version, about, long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Extract tables and their candidate columns
    Extract {
        /// SQL input file, may be repeated (use - for stdin)
        #[arg(short, long, default_value = "-")]
        input: Vec<PathBuf>,

        /// Output format (overrides config)
        #[arg(short = 'f', long, value_enum)]
        output_format: Option<Format>,

        /// Extra word excluded from columns, may be repeated
        #[arg(short = 'S', long = "stopword")]
        stopwords: Vec<String>,

        /// Show the per-statement breakdown and debug logs
        #[arg(short, long)]
        verbose: bool,

        /// Disable colored output
        #[arg(long)]
        no_color: bool
    },

    /// Print the active stoplist
    Stoplist {
        /// Extra word excluded from columns, may be repeated
        #[arg(short = 'S', long = "stopword")]
        stopwords: Vec<String>
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum Format {
    Text,
    Json,
    Yaml
}

impl Commands {
    /// Whether debug logging was requested
    pub fn verbose(&self) -> bool {
        match self {
            Self::Extract {
                verbose, ..
            } => *verbose,
            Self::Stoplist {
                ..
            } => false
        }
    }
}
