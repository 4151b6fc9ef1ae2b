use iconbook_core::types::SearchSettings;

pub use iconbook_core::types::CaseMatching;

#[derive(Debug, Clone)]
pub struct SearchConfig {
    pub case_matching: CaseMatching,
    pub unicode_normalization: bool,
    pub suggestion_limit: usize,
}

impl Default for SearchConfig {
    fn default() -> Self {
        Self::from(&SearchSettings::default())
    }
}

impl From<&SearchSettings> for SearchConfig {
    fn from(settings: &SearchSettings) -> Self {
        Self {
            case_matching: settings.case_matching,
            unicode_normalization: settings.unicode_normalization,
            suggestion_limit: settings.suggestion_limit,
        }
    }
}
