//! Query parsing and the multi-term filter.

use iconbook_core::IconEntry;

/// A parsed search query.
///
/// Terms are the lower-cased query split on single spaces. Repeated spaces
/// produce empty terms, which match every entry.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SearchQuery {
    raw: String,
    terms: Vec<String>,
}

impl SearchQuery {
    pub fn parse(raw: &str) -> Self {
        let terms = if raw.is_empty() {
            Vec::new()
        } else {
            raw.to_lowercase().split(' ').map(str::to_string).collect()
        };

        Self {
            raw: raw.to_string(),
            terms,
        }
    }

    pub fn as_str(&self) -> &str {
        &self.raw
    }

    pub fn is_empty(&self) -> bool {
        self.raw.is_empty()
    }

    pub fn terms(&self) -> &[String] {
        &self.terms
    }

    /// True when every term occurs in the entry's name or tags, ignoring case.
    /// Missing tags never match.
    pub fn matches(&self, entry: &IconEntry) -> bool {
        if self.is_empty() {
            return true;
        }

        let name = entry.name().to_lowercase();
        let tags = entry.tags().map(str::to_lowercase);

        self.terms.iter().all(|term| {
            name.contains(term.as_str())
                || tags
                    .as_deref()
                    .is_some_and(|tags| tags.contains(term.as_str()))
        })
    }
}

/// Returns the entries of `index` matching `query`, in index order.
pub fn filter<'a>(index: &'a [IconEntry], query: &str) -> Vec<&'a IconEntry> {
    let query = SearchQuery::parse(query);
    if query.is_empty() {
        return index.iter().collect();
    }

    index.iter().filter(|entry| query.matches(entry)).collect()
}
