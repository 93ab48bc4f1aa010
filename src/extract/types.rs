use compact_str::CompactString;
use indexmap::IndexMap;
use serde::Serialize;
use smallvec::SmallVec;

/// Table name mapped to its sorted, duplicate-free column candidates.
///
/// Keys keep the order in which tables were first seen.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(transparent)]
pub struct TableColumns(IndexMap<CompactString, Vec<CompactString>>);

impl TableColumns {
    pub(crate) fn from_map(map: IndexMap<CompactString, Vec<CompactString>>) -> Self {
        Self(map)
    }

    /// Columns recorded for `table`, if the table is a key.
    pub fn get(&self, table: &str) -> Option<&[CompactString]> {
        self.0.get(table).map(Vec::as_slice)
    }

    pub fn contains_table(&self, table: &str) -> bool {
        self.0.contains_key(table)
    }

    /// Table names in first-seen order.
    pub fn tables(&self) -> impl Iterator<Item = &str> {
        self.0.keys().map(|k| k.as_str())
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &[CompactString])> {
        self.0.iter().map(|(k, v)| (k.as_str(), v.as_slice()))
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn into_inner(self) -> IndexMap<CompactString, Vec<CompactString>> {
        self.0
    }
}

/// What one contributing statement produced.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct StatementSummary {
    /// 1-based position among non-empty statements
    pub index:         usize,
    /// Statement text, trimmed
    pub text:          String,
    /// Every `FROM`/`JOIN` reference in order of appearance
    pub tables:        SmallVec<[CompactString; 4]>,
    pub primary_table: CompactString,
    /// This statement's own candidates, sorted and deduplicated
    pub candidates:    Vec<CompactString>
}

/// Mapping plus per-statement breakdown.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct Extraction {
    pub tables:     TableColumns,
    pub statements: Vec<StatementSummary>,
    /// Non-empty statements dropped for lacking a table reference
    pub skipped:    usize
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample() -> TableColumns {
        let mut map = IndexMap::new();
        map.insert(
            CompactString::from("orders"),
            vec![CompactString::from("id"), CompactString::from("total")]
        );
        map.insert(CompactString::from("users"), vec![CompactString::from("name")]);
        TableColumns::from_map(map)
    }

    #[test]
    fn test_table_columns_lookup() {
        let tc = sample();
        assert_eq!(tc.len(), 2);
        assert!(tc.contains_table("users"));
        assert!(!tc.contains_table("Users"));
        assert_eq!(tc.get("orders").map(|c| c.len()), Some(2));
        assert!(tc.get("missing").is_none());
    }

    #[test]
    fn test_table_columns_keeps_insertion_order() {
        let tc = sample();
        assert_eq!(tc.tables().collect::<Vec<_>>(), vec!["orders", "users"]);
    }

    #[test]
    fn test_table_columns_serializes_as_plain_map() {
        let json = serde_json::to_string(&sample()).unwrap();
        assert_eq!(json, r#"{"orders":["id","total"],"users":["name"]}"#);
    }

    #[test]
    fn test_default_is_empty() {
        let extraction = Extraction::default();
        assert!(extraction.tables.is_empty());
        assert!(extraction.statements.is_empty());
        assert_eq!(extraction.skipped, 0);
    }
}
