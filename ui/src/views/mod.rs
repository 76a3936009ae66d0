//! Dioxus views. Each takes already-resolved data from `crate::core` and only
//! decides how it looks.

mod artifacts;
pub use artifacts::ArtifactPanel;

mod dashboard;
pub use dashboard::Dashboard;

mod datasets;
pub use datasets::{DataGrid, DatasetPanel};

mod overview;
pub use overview::Overview;

use crate::core::Section;
use crate::t;

/// Localized sidebar label.
pub fn section_label(section: Section) -> String {
    match section {
        Section::Overview => t!("section-overview"),
        Section::MarketSentiment => t!("section-market-sentiment"),
        Section::TradingActivity => t!("section-trading-activity"),
        Section::FearVsGreed => t!("section-fear-vs-greed"),
        Section::TraderClustering => t!("section-trader-clustering"),
        Section::ProcessedData => t!("section-processed-data"),
    }
}

/// Localized panel heading.
pub fn section_heading(section: Section) -> String {
    match section {
        Section::Overview => t!("heading-overview"),
        Section::MarketSentiment => t!("heading-market-sentiment"),
        Section::TradingActivity => t!("heading-trading-activity"),
        Section::FearVsGreed => t!("heading-fear-vs-greed"),
        Section::TraderClustering => t!("heading-trader-clustering"),
        Section::ProcessedData => t!("heading-processed-data"),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn fallback_labels_match_section_titles() {
        crate::i18n::init();
        let _ = crate::i18n::set_language("en-US");
        for section in Section::ALL {
            assert_eq!(section_label(section), section.title());
        }
    }

    #[test]
    fn headings_are_distinct() {
        crate::i18n::init();
        let mut headings: Vec<_> = Section::ALL.into_iter().map(section_heading).collect();
        headings.sort();
        headings.dedup();
        assert_eq!(headings.len(), Section::ALL.len());
    }
}
