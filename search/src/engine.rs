//! Catalogue state: index, current query and derived result set.

use crate::config::SearchConfig;
use crate::index::Index;
use crate::query::SearchQuery;
use crate::results::SearchResults;
use iconbook_core::sprite::load_icons;
use iconbook_core::{IconEntry, SpriteSource};

/// Search engine over one icon index.
///
/// The result set is recomputed synchronously whenever the query or the
/// index changes. Result set ⊆ index; it equals the index for the empty query.
pub struct SearchEngine {
    index: Index,
    query: SearchQuery,
    /// Positions in `index` of the entries matching `query`.
    matched: Vec<usize>,
    config: SearchConfig,
}

/// Create operations.
impl SearchEngine {
    pub fn new(entries: Vec<IconEntry>, config: SearchConfig) -> Self {
        let mut engine = Self {
            index: Index::new(entries),
            query: SearchQuery::default(),
            matched: Vec::new(),
            config,
        };
        engine.refresh();
        engine
    }

    /// Engine with an empty index, before anything is loaded.
    pub fn empty(config: SearchConfig) -> Self {
        Self::new(Vec::new(), config)
    }
}

/// Loading operations.
impl SearchEngine {
    /// Replaces the whole index and re-applies the current query.
    pub fn replace_index(&mut self, entries: Vec<IconEntry>) {
        self.index = Index::new(entries);
        self.refresh();
    }

    /// Fetches and parses the sprite at `source` into the index.
    ///
    /// Failures are logged and leave the index and result set unchanged.
    /// Returns the number of icons loaded, 0 on failure.
    pub async fn load(&mut self, source: &SpriteSource) -> usize {
        match load_icons(source).await {
            Ok(icons) => {
                let count = icons.len();
                tracing::info!(%source, count, "loaded icon sprite");
                self.replace_index(icons);
                count
            }
            Err(err) => {
                tracing::error!(%source, error = %err, "failed to load icon sprite");
                0
            }
        }
    }
}

/// Search operations.
impl SearchEngine {
    pub fn set_query(&mut self, query: &str) {
        self.query = SearchQuery::parse(query);
        self.refresh();
    }

    pub fn query(&self) -> &str {
        self.query.as_str()
    }

    pub fn results(&self) -> SearchResults<'_> {
        let entries = self.index.entries();
        SearchResults {
            entries: self.matched.iter().map(|&pos| &entries[pos]).collect(),
        }
    }

    /// The whole index, in document order.
    pub fn entries(&self) -> &[IconEntry] {
        self.index.entries()
    }

    pub fn len(&self) -> usize {
        self.index.len()
    }

    pub fn is_empty(&self) -> bool {
        self.index.len() == 0
    }

    /// Exact lookup by icon name.
    pub fn get(&self, name: &str) -> Option<&IconEntry> {
        self.index.get(name)
    }

    /// Fuzzy "did you mean" candidates for a name that is not in the index.
    pub fn suggest(&self, name: &str) -> Vec<&IconEntry> {
        self.index.suggest(name, &self.config)
    }

    fn refresh(&mut self) {
        self.matched = self
            .index
            .entries()
            .iter()
            .enumerate()
            .filter(|(_, entry)| self.query.matches(entry))
            .map(|(pos, _)| pos)
            .collect();
    }
}
