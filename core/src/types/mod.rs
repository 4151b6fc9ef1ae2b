pub(crate) mod config;
pub use config::{
    AppConfig, AppConfigError, CaseMatching, Dimension, DimensionError, GeneralConfig,
    SearchSettings, SnippetConfig, SpriteConfig,
};

pub(crate) mod entry;
pub use entry::IconEntry;
