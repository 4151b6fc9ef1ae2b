use serde::{Deserialize, Serialize};

/// One named icon definition extracted from a sprite document.
///
/// `name` comes from the symbol's `id` attribute and is empty when the
/// attribute is missing. `tags` is the raw space-separated `data-tags` value.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct IconEntry {
    name: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    tags: Option<String>,
}

impl IconEntry {
    pub fn new(name: impl Into<String>, tags: Option<String>) -> Self {
        Self {
            name: name.into(),
            tags,
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn tags(&self) -> Option<&str> {
        self.tags.as_deref()
    }

    /// Iterates the individual keywords of `tags`, skipping empty pieces.
    ///
    /// Display only; search matches against the raw tag string.
    pub fn tag_list(&self) -> impl Iterator<Item = &str> {
        self.tags
            .as_deref()
            .into_iter()
            .flat_map(|tags| tags.split(' '))
            .filter(|tag| !tag.is_empty())
    }
}
