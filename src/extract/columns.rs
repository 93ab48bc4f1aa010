use std::sync::LazyLock;

use regex::Regex;

use super::stoplist::Stoplist;

/// Unicode word tokens.
static WORD_REGEX: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"\w+").expect("valid regex"));

/// Word tokens of `statement` that survive the stoplist, in order of
/// appearance and with repeats.
///
/// Numbers, table names, words inside string literals and keywords missing
/// from the stoplist are all kept.
pub fn column_candidates<'s>(
    statement: &'s str,
    stoplist: &Stoplist
) -> impl Iterator<Item = &'s str> {
    WORD_REGEX
        .find_iter(statement)
        .map(|m| m.as_str())
        .filter(move |token| !stoplist.contains(token))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn candidates(sql: &str) -> Vec<&str> {
        let stoplist = Stoplist::default();
        column_candidates(sql, &stoplist).collect::<Vec<_>>()
    }

    #[test]
    fn test_filters_stoplisted_keywords() {
        assert_eq!(
            candidates("SELECT a, SUM(b) AS total FROM t GROUP BY a"),
            vec!["a", "b", "total", "t", "a"]
        );
    }

    #[test]
    fn test_keeps_unlisted_keywords() {
        assert_eq!(
            candidates("SELECT id FROM users WHERE id IS NULL AND x = 1"),
            vec!["id", "users", "WHERE", "id", "IS", "NULL", "AND", "x", "1"]
        );
    }

    #[test]
    fn test_splits_on_punctuation() {
        assert_eq!(candidates("u.id=o.user_id"), vec!["u", "id", "o", "user_id"]);
    }

    #[test]
    fn test_string_literal_words_leak() {
        assert_eq!(
            candidates("CASE WHEN c > 100 THEN 'exceso' ELSE 'no exceso' END"),
            vec!["c", "100", "exceso", "no", "exceso"]
        );
    }

    #[test]
    fn test_unicode_word_characters() {
        assert_eq!(candidates("SELECT año, dirección"), vec!["año", "dirección"]);
    }

    #[test]
    fn test_prefix_of_stopword_is_kept() {
        assert_eq!(
            candidates("SELECT suma_gastos, endpoint, asset"),
            vec!["suma_gastos", "endpoint", "asset"]
        );
    }

    #[test]
    fn test_custom_stoplist() {
        let stoplist = Stoplist::with_extra(["WHERE", "AND"]).unwrap();
        let found: Vec<_> = column_candidates("SELECT a FROM t WHERE a AND b", &stoplist).collect();
        assert_eq!(found, vec!["a", "t", "a", "b"]);
    }
}
