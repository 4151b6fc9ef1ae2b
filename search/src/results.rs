//! Search results types.

use iconbook_core::IconEntry;
use iconbook_core::collate::sort_for_display;

/// Result set borrowed from the SearchEngine, in index order.
#[derive(Debug, Clone)]
pub struct SearchResults<'a> {
    pub(crate) entries: Vec<&'a IconEntry>,
}

impl<'a> SearchResults<'a> {
    pub fn iter(&self) -> impl Iterator<Item = &'a IconEntry> + '_ {
        self.entries.iter().copied()
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// The results sorted by name, as they are rendered.
    pub fn display_order(&self) -> Vec<&'a IconEntry> {
        let mut sorted = self.entries.clone();
        sort_for_display(&mut sorted);
        sorted
    }
}
