//! # SQL Schema Parser Library
//!
//! Lists the tables referenced by raw SQL text and the column candidates used
//! with each, without a full SQL parser. See [`extract`] for the extraction
//! rules and their known false positives.
//!
//! ```
//! use sql_schema_parser::extract::extract_tables_and_columns;
//!
//! let tables = extract_tables_and_columns("SELECT id, name FROM users WHERE id = 1");
//! assert!(tables.contains_table("users"));
//! ```

pub mod app;
pub mod cli;
pub mod config;
pub mod error;
pub mod extract;
pub mod logging;
pub mod output;
