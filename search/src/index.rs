//! Icon index with exact and fuzzy name lookup.

use crate::config::{CaseMatching, SearchConfig};
use iconbook_core::IconEntry;
use nucleo::pattern::{Normalization, Pattern};
use nucleo::{Config as NucleoConfig, Matcher};

/// Icons in document order.
#[derive(Debug, Clone, Default)]
pub(crate) struct Index {
    entries: Vec<IconEntry>,
}

/// Lets nucleo match against the icon name.
struct Candidate<'a>(&'a IconEntry);

impl AsRef<str> for Candidate<'_> {
    fn as_ref(&self) -> &str {
        self.0.name()
    }
}

impl Index {
    pub(crate) fn new(entries: Vec<IconEntry>) -> Self {
        Self { entries }
    }

    pub(crate) fn entries(&self) -> &[IconEntry] {
        &self.entries
    }

    pub(crate) fn len(&self) -> usize {
        self.entries.len()
    }

    pub(crate) fn get(&self, name: &str) -> Option<&IconEntry> {
        self.entries.iter().find(|entry| entry.name() == name)
    }

    /// Best fuzzy matches for `name`, highest score first.
    pub(crate) fn suggest(&self, name: &str, config: &SearchConfig) -> Vec<&IconEntry> {
        let case_matching = match config.case_matching {
            CaseMatching::Sensitive => nucleo::pattern::CaseMatching::Respect,
            CaseMatching::Insensitive => nucleo::pattern::CaseMatching::Ignore,
            CaseMatching::Smart => nucleo::pattern::CaseMatching::Smart,
        };

        let normalization = if config.unicode_normalization {
            Normalization::Smart
        } else {
            Normalization::Never
        };

        let mut matcher = Matcher::new(NucleoConfig::DEFAULT);
        let pattern = Pattern::parse(name, case_matching, normalization);

        pattern
            .match_list(self.entries.iter().map(Candidate), &mut matcher)
            .into_iter()
            .take(config.suggestion_limit)
            .map(|(candidate, _score)| candidate.0)
            .collect()
    }
}
