mod app;
mod snippet;

pub use app::{
    AppConfig, AppConfigError, CaseMatching, GeneralConfig, SearchSettings, SpriteConfig,
};
pub use snippet::{Dimension, DimensionError, SnippetConfig};
