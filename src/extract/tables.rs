use std::sync::LazyLock;

use regex::Regex;
use smallvec::SmallVec;

/// Table references of one statement (rarely more than a handful).
pub type TableRefs<'a> = SmallVec<[&'a str; 4]>;

/// `FROM`/`JOIN` followed by whitespace and one identifier.
///
/// The keyword is deliberately not anchored on its left, so `datefrom t`
/// also yields a reference.
static TABLE_REGEX: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(?i:FROM|JOIN)\s+([A-Za-z0-9_]+)").expect("valid regex"));

/// Table identifiers in order of appearance.
pub fn table_references(statement: &str) -> TableRefs<'_> {
    TABLE_REGEX
        .captures_iter(statement)
        .filter_map(|cap| cap.get(1))
        .map(|m| m.as_str())
        .collect()
}
