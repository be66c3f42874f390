//! Alias → canonical search term table

use std::collections::HashMap;

/// Common misspellings and spacing variants of card names
static BUILTIN_CORRECTIONS: phf::Map<&'static str, &'static str> = phf::phf_map! {
    "ninetails" => "ninetales",
    "farfetchd" => "farfetch'd",
    "mr mime" => "mr. mime",
    "mime jr" => "mime jr.",
    "ho oh" => "ho-oh",
    "porygon z" => "porygon-z",
    "type null" => "type: null",
};

/// Immutable correction table, built once at startup and shared.
///
/// Lookups are exact matches on the trimmed, lowercased term.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CorrectionTable {
    entries: HashMap<String, String>,
}

impl CorrectionTable {
    /// Table with no entries
    pub fn empty() -> Self {
        Self::default()
    }

    /// The built-in aliases
    pub fn builtin() -> Self {
        Self::from_entries(
            BUILTIN_CORRECTIONS
                .entries()
                .map(|(alias, canonical)| (*alias, *canonical)),
        )
    }

    /// Build a table from `(alias, canonical)` pairs. Later pairs win on
    /// duplicate aliases; blank pairs are ignored.
    pub fn from_entries<I, K, V>(entries: I) -> Self
    where
        I: IntoIterator<Item = (K, V)>,
        K: AsRef<str>,
        V: AsRef<str>,
    {
        let mut table = Self::empty();
        table.insert_all(entries);
        table
    }

    /// Built-in aliases extended (or overridden) by `extra`.
    pub fn with_overrides<I, K, V>(mut self, extra: I) -> Self
    where
        I: IntoIterator<Item = (K, V)>,
        K: AsRef<str>,
        V: AsRef<str>,
    {
        self.insert_all(extra);
        self
    }

    fn insert_all<I, K, V>(&mut self, entries: I)
    where
        I: IntoIterator<Item = (K, V)>,
        K: AsRef<str>,
        V: AsRef<str>,
    {
        for (alias, canonical) in entries {
            let alias = normalize_key(alias.as_ref());
            let canonical = normalize_key(canonical.as_ref());
            if alias.is_empty() || canonical.is_empty() {
                continue;
            }
            self.entries.insert(alias, canonical);
        }
    }

    /// Canonical term for `term`, if it is a known alias.
    pub fn lookup(&self, term: &str) -> Option<&str> {
        self.entries.get(&normalize_key(term)).map(String::as_str)
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// All entries, sorted by alias
    pub fn entries(&self) -> Vec<(&str, &str)> {
        let mut entries: Vec<_> = self
            .entries
            .iter()
            .map(|(alias, canonical)| (alias.as_str(), canonical.as_str()))
            .collect();
        entries.sort_unstable();
        entries
    }
}

fn normalize_key(term: &str) -> String {
    term.trim().to_lowercase()
}
