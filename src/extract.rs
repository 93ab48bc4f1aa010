//! Table and column extraction from raw SQL text.
//!
//! Extraction is a two-stage scan over each `;`-separated statement rather
//! than a real SQL parse:
//!
//! 1. **Table scan** - every identifier following `FROM` or `JOIN` is a table
//!    reference. The first one is the statement's *primary table*.
//! 2. **Column scan** - every word token that is not a stopword is a column
//!    candidate of the primary table.
//!
//! Statements without a table reference contribute nothing. Candidates of
//! statements sharing a primary table are merged, and every column list ends
//! up sorted and deduplicated.
//!
//! The scan never fails. Malformed input only produces incomplete or noisy
//! results: table names, numbers, string literal words and keywords missing
//! from the stoplist (`WHERE`, `AND`, `NULL`, ...) all show up as columns.
//! A `;` inside a string literal or comment splits the statement.
//!
//! # Example
//!
//! ```
//! use sql_schema_parser::extract::extract_tables_and_columns;
//!
//! let tables = extract_tables_and_columns("SELECT a, b FROM t1; SELECT c, d FROM t1;");
//! let columns: Vec<&str> = tables.get("t1").unwrap().iter().map(|c| c.as_str()).collect();
//! assert_eq!(columns, ["a", "b", "c", "d", "t1"]);
//! ```

mod columns;
mod stoplist;
mod tables;
mod types;

use std::collections::BTreeSet;

pub use columns::column_candidates;
use compact_str::CompactString;
use indexmap::IndexMap;
pub use stoplist::{DEFAULT_STOPWORDS, Stoplist};
pub use tables::{TableRefs, table_references};
pub use types::{Extraction, StatementSummary, TableColumns};

/// Extract the table to columns mapping with the built-in stoplist.
#[must_use]
pub fn extract_tables_and_columns(sql: &str) -> TableColumns {
    Extractor::default().extract(sql)
}

/// Trimmed, non-empty statements split on every literal `;`.
pub fn split_statements(sql: &str) -> impl Iterator<Item = &str> {
    sql.trim()
        .split(';')
        .map(str::trim)
        .filter(|s| !s.is_empty())
}

/// Statement extractor bound to a stoplist.
#[derive(Debug, Clone, Default)]
pub struct Extractor {
    stoplist: Stoplist
}

impl Extractor {
    #[must_use]
    pub fn new(stoplist: Stoplist) -> Self {
        Self {
            stoplist
        }
    }

    pub fn stoplist(&self) -> &Stoplist {
        &self.stoplist
    }

    /// Build the table to columns mapping for `sql`.
    #[must_use]
    pub fn extract(&self, sql: &str) -> TableColumns {
        let mut acc: IndexMap<CompactString, BTreeSet<CompactString>> = IndexMap::new();

        for (i, statement) in split_statements(sql).enumerate() {
            let tables = table_references(statement);
            let Some(primary) = tables.first() else {
                tracing::debug!(statement = i + 1, "no table reference, skipping");
                continue;
            };
            let columns = acc.entry(CompactString::from(*primary)).or_default();
            columns.extend(column_candidates(statement, &self.stoplist).map(CompactString::from));
            tracing::debug!(statement = i + 1, table = *primary, "merged statement");
        }

        finish(acc)
    }

    /// Like [`Extractor::extract`], additionally reporting what each
    /// statement contributed.
    #[must_use]
    pub fn extract_detailed(&self, sql: &str) -> Extraction {
        let mut acc: IndexMap<CompactString, BTreeSet<CompactString>> = IndexMap::new();
        let mut statements = Vec::new();
        let mut skipped = 0;

        for (i, statement) in split_statements(sql).enumerate() {
            let tables = table_references(statement);
            let Some(primary) = tables.first() else {
                tracing::debug!(statement = i + 1, "no table reference, skipping");
                skipped += 1;
                continue;
            };
            let own: BTreeSet<&str> = column_candidates(statement, &self.stoplist).collect();
            let candidates: Vec<CompactString> =
                own.into_iter().map(CompactString::from).collect();

            acc.entry(CompactString::from(*primary))
                .or_default()
                .extend(candidates.iter().cloned());
            tracing::debug!(
                statement = i + 1,
                table = *primary,
                candidates = candidates.len(),
                "merged statement"
            );

            statements.push(StatementSummary {
                index: i + 1,
                text: statement.to_string(),
                tables: tables.iter().map(|t| CompactString::from(*t)).collect(),
                primary_table: CompactString::from(*primary),
                candidates
            });
        }

        Extraction {
            tables: finish(acc),
            statements,
            skipped
        }
    }
}

fn finish(acc: IndexMap<CompactString, BTreeSet<CompactString>>) -> TableColumns {
    TableColumns::from_map(
        acc.into_iter()
            .map(|(table, columns)| (table, columns.into_iter().collect()))
            .collect()
    )
}
