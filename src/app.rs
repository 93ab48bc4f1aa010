//! Application logic for the SQL Schema Parser CLI.
//!
//! Kept apart from the binary entry point so commands can be driven and
//! tested as library calls.

mod convert;
mod helpers;
mod run;
mod types;

pub use convert::{convert_format, parse_format_name};
pub use helpers::{
    STDIN_LABEL, build_stoplist, create_output_options, extract_sources, get_effective_colored,
    get_effective_format, read_input, source_label
};
pub use run::{run_extract, run_stoplist};
pub use types::{CommandOutput, ExtractParams, ExtractResult};
