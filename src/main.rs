//! # SQL Schema Parser
//!
//! Lists the tables referenced by SQL text and, for each table, the words
//! used alongside it as candidate columns.
//!
//! Extraction is a deliberately naive two-stage scan instead of a real SQL
//! parse. Each `;`-separated statement is attributed to the first table that
//! follows `FROM` or `JOIN`; every word token that is not a stopword becomes
//! a column candidate of that table. Candidates of statements sharing a table
//! are merged, sorted and deduplicated.
//!
//! # Quick Start
//!
//! ```bash
//! # Extract from a file
//! sql-schema-parser extract -i queries.sql
//!
//! # Several files, JSON output keyed by file
//! sql-schema-parser extract -i a.sql -i b.sql -f json
//!
//! # Stream from stdin, filtering a few extra keywords
//! echo "SELECT id FROM users WHERE id IS NULL" | sql-schema-parser extract -S WHERE -S IS -S NULL
//!
//! # Show the active stoplist
//! sql-schema-parser stoplist
//! ```
//!
//! # Configuration
//!
//! Loaded from (in order of precedence):
//!
//! 1. Command-line arguments
//! 2. Environment variables (`SQL_SCHEMA_PARSER_STOPWORDS`,
//!    `SQL_SCHEMA_PARSER_FORMAT`, `NO_COLOR`)
//! 3. `.sql-schema-parser.toml` in current directory
//! 4. `~/.config/sql-schema-parser/config.toml`
//!
//! ```toml
//! [extract]
//! extra_stopwords = ["WHERE", "AND", "NULL"]
//!
//! [output]
//! format = "json"
//! colored = false
//! ```
//!
//! # Exit Codes
//!
//! - `0` - Success
//! - `1` - An input or config file could not be read or parsed

use std::process;

use clap::Parser;
use sql_schema_parser::{
    app::{ExtractParams, run_extract, run_stoplist},
    cli::{Cli, Commands},
    config::Config,
    error::AppResult,
    logging
};

fn main() {
    match run() {
        Ok(code) => process::exit(code),
        Err(e) => {
            eprintln!("Error: {}", e);
            process::exit(1);
        }
    }
}

fn run() -> AppResult<i32> {
    let cli = Cli::parse();
    logging::init(cli.command.verbose());
    let config = Config::load()?;

    match cli.command {
        Commands::Extract {
            input,
            output_format,
            stopwords,
            verbose,
            no_color
        } => {
            let params = ExtractParams {
                inputs: input
                    .iter()
                    .map(|p| p.display().to_string())
                    .collect(),
                output_format,
                stopwords,
                verbose,
                no_color
            };
            let result = run_extract(params, config)?;
            println!("{}", result.output.trim_end());
        }
        Commands::Stoplist {
            stopwords
        } => {
            let output = run_stoplist(&stopwords, &config)?;
            for line in output.stdout {
                println!("{}", line);
            }
        }
    }

    Ok(0)
}
