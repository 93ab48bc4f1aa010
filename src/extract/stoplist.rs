//! Keyword stoplist for column candidate filtering.
//!
//! A token is a stopword when it equals one of the listed words as a whole,
//! compared case-insensitively. Prefixes do not count: `suma_gastos` survives
//! even though it starts with `SUM`.

use std::sync::LazyLock;

use compact_str::CompactString;
use indexmap::IndexSet;
use regex::Regex;

/// Built-in SQL keywords that never count as column candidates.
pub const DEFAULT_STOPWORDS: [&str; 16] = [
    "SELECT", "FROM", "GROUP", "BY", "AS", "CASE", "WHEN", "THEN", "ELSE", "END", "SUM", "ON",
    "JOIN", "INNER", "LEFT", "RIGHT"
];

static DEFAULT_STOPLIST: LazyLock<Stoplist> = LazyLock::new(|| {
    let words: IndexSet<CompactString> = DEFAULT_STOPWORDS
        .iter()
        .map(|w| CompactString::from(*w))
        .collect();
    let matcher = build_matcher(&words).expect("valid regex");
    Stoplist {
        words,
        builtin: DEFAULT_STOPWORDS.len(),
        matcher
    }
});

static WORD_ONLY_REGEX: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^\w+$").expect("valid regex"));

/// Case-insensitive set of words excluded from column candidates.
#[derive(Debug, Clone)]
pub struct Stoplist {
    words:   IndexSet<CompactString>,
    builtin: usize,
    matcher: Regex
}

impl Default for Stoplist {
    fn default() -> Self {
        DEFAULT_STOPLIST.clone()
    }
}

impl Stoplist {
    /// Built-in stoplist extended with `extra` words.
    ///
    /// Blank entries, entries that are not a single word token, and words
    /// already present (ignoring case) are dropped.
    ///
    /// # Errors
    ///
    /// Returns the regex error if the combined matcher exceeds the regex
    /// size limit.
    pub fn with_extra<I, S>(extra: I) -> Result<Self, regex::Error>
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>
    {
        let mut stoplist = Self::default();
        let mut added = false;

        for word in extra {
            let word = word.as_ref().trim();
            if word.is_empty() {
                continue;
            }
            if !WORD_ONLY_REGEX.is_match(word) {
                tracing::warn!(word, "ignoring stopword that is not a single word token");
                continue;
            }
            if stoplist.contains(word) {
                continue;
            }
            stoplist.words.insert(CompactString::from(word));
            added = true;
        }

        if added {
            stoplist.matcher = build_matcher(&stoplist.words)?;
            tracing::debug!(extra = stoplist.extra().count(), "extended stoplist");
        }
        Ok(stoplist)
    }

    /// Whether `token` is a full-word, case-insensitive match of any stopword.
    #[must_use]
    pub fn contains(&self, token: &str) -> bool {
        self.matcher.is_match(token)
    }

    /// All stopwords, built-ins first.
    pub fn words(&self) -> impl Iterator<Item = &str> {
        self.words.iter().map(|w| w.as_str())
    }

    /// Words added on top of the built-in list.
    pub fn extra(&self) -> impl Iterator<Item = &str> {
        self.words.iter().skip(self.builtin).map(|w| w.as_str())
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.words.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.words.is_empty()
    }
}

fn build_matcher(words: &IndexSet<CompactString>) -> Result<Regex, regex::Error> {
    let alternation = words
        .iter()
        .map(|w| regex::escape(w))
        .collect::<Vec<_>>()
        .join("|");
    Regex::new(&format!(r"(?i)^(?:{})$", alternation))
}
