//! Sprite document loading.
//!
//! A sprite is one XML/SVG file bundling many `<symbol>` definitions. Loading
//! fetches the raw text (HTTP or local file), parses it as XML and collects
//! one [`IconEntry`] per symbol in document order.

use crate::types::IconEntry;
use roxmltree::{Document, ParsingOptions};
use std::fmt;
use std::path::PathBuf;
use thiserror::Error;

const SYMBOL_TAG: &str = "symbol";
const ID_ATTR: &str = "id";
const TAGS_ATTR: &str = "data-tags";

#[derive(Debug, Error)]
pub enum SpriteError {
    #[error("request failed: {0}")]
    Http(#[from] reqwest::Error),

    #[error("unexpected status {status} from {url}")]
    Status {
        status: reqwest::StatusCode,
        url: String,
    },

    #[error("failed to read {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("invalid sprite document: {0}")]
    Xml(#[from] roxmltree::Error),
}

/// Where a sprite document lives.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SpriteSource {
    Url(String),
    File(PathBuf),
}

impl SpriteSource {
    /// `http://` and `https://` locations are URLs, everything else is a path.
    pub fn parse(location: &str) -> Self {
        let location = location.trim();
        if location.starts_with("http://") || location.starts_with("https://") {
            Self::Url(location.to_string())
        } else {
            Self::File(PathBuf::from(location))
        }
    }
}

impl fmt::Display for SpriteSource {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SpriteSource::Url(url) => f.write_str(url),
            SpriteSource::File(path) => write!(f, "{}", path.display()),
        }
    }
}

/// Fetches the raw sprite text. No timeout and no retry.
pub async fn fetch_text(source: &SpriteSource) -> Result<String, SpriteError> {
    match source {
        SpriteSource::Url(url) => {
            let response = reqwest::get(url.as_str()).await?;
            let status = response.status();
            if !status.is_success() {
                return Err(SpriteError::Status {
                    status,
                    url: url.clone(),
                });
            }
            Ok(response.text().await?)
        }
        SpriteSource::File(path) => {
            tokio::fs::read_to_string(path)
                .await
                .map_err(|source| SpriteError::Io {
                    path: path.clone(),
                    source,
                })
        }
    }
}

/// Parses sprite text and extracts every `symbol` element in document order.
///
/// A symbol without `id` yields an entry with an empty name.
pub fn parse_sprite(text: &str) -> Result<Vec<IconEntry>, SpriteError> {
    let options = ParsingOptions {
        allow_dtd: true,
        ..ParsingOptions::default()
    };
    let document = Document::parse_with_options(text, options)?;

    let icons: Vec<IconEntry> = document
        .descendants()
        .filter(|node| node.is_element() && node.tag_name().name() == SYMBOL_TAG)
        .map(|node| {
            IconEntry::new(
                node.attribute(ID_ATTR).unwrap_or_default(),
                node.attribute(TAGS_ATTR).map(str::to_string),
            )
        })
        .collect();

    tracing::debug!(count = icons.len(), "parsed sprite symbols");
    Ok(icons)
}

/// Fetches and parses a sprite document.
pub async fn load_icons(source: &SpriteSource) -> Result<Vec<IconEntry>, SpriteError> {
    let text = fetch_text(source).await?;
    parse_sprite(&text)
}

#[cfg(test)]
mod tests;
