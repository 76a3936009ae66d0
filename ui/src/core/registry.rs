//! Section → panel mapping.
//!
//! Sections are a closed enum, so a lookup can never miss. The mapping from
//! sections to artifacts is data, checked once when the registry is built:
//! every section gets exactly one panel and every referenced key must name
//! exactly one [`ArtifactRecord`]. Panels store the resolved records, which
//! keeps the renderer free of "no such key" branches.

use std::collections::HashMap;
use std::fmt;
use std::str::FromStr;

use once_cell::sync::Lazy;
use serde::Deserialize;

use super::error::{ConfigError, Result};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Deserialize)]
#[serde(try_from = "String")]
pub enum Section {
    Overview,
    MarketSentiment,
    TradingActivity,
    FearVsGreed,
    TraderClustering,
    ProcessedData,
}

impl Section {
    /// Navigation order.
    pub const ALL: [Section; 6] = [
        Section::Overview,
        Section::MarketSentiment,
        Section::TradingActivity,
        Section::FearVsGreed,
        Section::TraderClustering,
        Section::ProcessedData,
    ];

    /// Stable identifier used in config files and element ids.
    pub fn id(self) -> &'static str {
        match self {
            Self::Overview => "overview",
            Self::MarketSentiment => "market_sentiment",
            Self::TradingActivity => "trading_activity",
            Self::FearVsGreed => "fear_vs_greed",
            Self::TraderClustering => "trader_clustering",
            Self::ProcessedData => "processed_data",
        }
    }

    /// Sidebar label.
    pub fn title(self) -> &'static str {
        match self {
            Self::Overview => "Overview",
            Self::MarketSentiment => "Market Sentiment Analysis",
            Self::TradingActivity => "Trading Activity Analysis",
            Self::FearVsGreed => "Fear vs Greed Comparison",
            Self::TraderClustering => "Trader Clustering",
            Self::ProcessedData => "Processed Data",
        }
    }

    fn position(self) -> usize {
        Self::ALL
            .iter()
            .position(|section| *section == self)
            .unwrap_or_default()
    }
}

impl Default for Section {
    fn default() -> Self {
        Self::ALL[0]
    }
}

impl fmt::Display for Section {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.title())
    }
}

impl FromStr for Section {
    type Err = ConfigError;

    /// Accepts the stable id or the sidebar title (case-insensitive).
    fn from_str(raw: &str) -> Result<Self> {
        let needle = raw.trim();
        Self::ALL
            .into_iter()
            .find(|section| {
                section.id().eq_ignore_ascii_case(needle)
                    || section.title().eq_ignore_ascii_case(needle)
            })
            .ok_or_else(|| ConfigError::UnknownSection(raw.to_string()))
    }
}

impl TryFrom<String> for Section {
    type Error = ConfigError;

    fn try_from(raw: String) -> Result<Self> {
        raw.parse()
    }
}

/// Name of a logical pipeline output, e.g. `fear_greed_analysis`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct ArtifactKey(&'static str);

impl ArtifactKey {
    pub const fn new(name: &'static str) -> Self {
        Self(name)
    }

    pub fn as_str(&self) -> &'static str {
        self.0
    }
}

impl fmt::Display for ArtifactKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.0)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ArtifactKind {
    Image,
    Table,
}

/// Where an artifact lives, relative to the root directory for its kind.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ArtifactRecord {
    pub key: ArtifactKey,
    pub kind: ArtifactKind,
    pub path: &'static str,
}

impl ArtifactRecord {
    pub const fn image(key: ArtifactKey, path: &'static str) -> Self {
        Self {
            key,
            kind: ArtifactKind::Image,
            path,
        }
    }

    pub const fn table(key: ArtifactKey, path: &'static str) -> Self {
        Self {
            key,
            kind: ArtifactKind::Table,
            path,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LayoutHint {
    /// Natural size.
    Inline,
    /// Fixed display width in pixels.
    FixedWidth(u32),
    /// Stretch to the panel width.
    FullWidth,
    /// One half of a side-by-side pair; 0 is the left column.
    Pair(u8),
    /// Entry in the panel's selectable dataset list.
    DatasetList,
}

/// Unresolved panel item, as written in a registry definition.
#[derive(Debug, Clone)]
pub struct ItemSpec {
    pub key: ArtifactKey,
    pub layout: LayoutHint,
    pub caption: Option<&'static str>,
}

impl ItemSpec {
    pub fn new(key: ArtifactKey, layout: LayoutHint) -> Self {
        Self {
            key,
            layout,
            caption: None,
        }
    }

    pub fn captioned(key: ArtifactKey, layout: LayoutHint, caption: &'static str) -> Self {
        Self {
            key,
            layout,
            caption: Some(caption),
        }
    }
}

#[derive(Debug, Clone)]
pub struct PanelSpec {
    pub section: Section,
    pub items: Vec<ItemSpec>,
}

/// Panel item with its record resolved.
#[derive(Debug, Clone, PartialEq)]
pub struct PanelItem {
    pub record: ArtifactRecord,
    pub layout: LayoutHint,
    pub caption: Option<&'static str>,
}

#[derive(Debug, Clone, PartialEq)]
pub struct PanelDefinition {
    pub section: Section,
    pub items: Vec<PanelItem>,
}

/// A selectable dataset of the Processed Data panel.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DatasetOption {
    pub display_name: &'static str,
    pub key: ArtifactKey,
}

#[derive(Debug, Clone)]
pub struct PanelRegistry {
    panels: Vec<PanelDefinition>,
}

impl PanelRegistry {
    /// Build and validate a registry. Panels may be given in any order.
    pub fn from_parts(records: Vec<ArtifactRecord>, panels: Vec<PanelSpec>) -> Result<Self> {
        let mut by_key: HashMap<ArtifactKey, ArtifactRecord> = HashMap::new();
        for record in records {
            if by_key.insert(record.key, record.clone()).is_some() {
                return Err(ConfigError::DuplicateRecord(record.key.to_string()));
            }
        }

        let mut slots: Vec<Option<PanelDefinition>> = vec![None; Section::ALL.len()];
        for spec in panels {
            let slot = &mut slots[spec.section.position()];
            if slot.is_some() {
                return Err(ConfigError::DuplicateSection(spec.section.id().to_string()));
            }

            let mut items = Vec::with_capacity(spec.items.len());
            for item in spec.items {
                let record = by_key
                    .get(&item.key)
                    .cloned()
                    .ok_or_else(|| ConfigError::DanglingKey {
                        section: spec.section.id().to_string(),
                        key: item.key.to_string(),
                    })?;
                if item.layout == LayoutHint::DatasetList && record.kind != ArtifactKind::Table {
                    return Err(ConfigError::NotATable(item.key.to_string()));
                }
                items.push(PanelItem {
                    record,
                    layout: item.layout,
                    caption: item.caption,
                });
            }

            check_pairs(spec.section, &items)?;
            *slot = Some(PanelDefinition {
                section: spec.section,
                items,
            });
        }

        let panels = slots
            .into_iter()
            .zip(Section::ALL)
            .map(|(slot, section)| {
                slot.ok_or_else(|| ConfigError::MissingSection(section.id().to_string()))
            })
            .collect::<Result<Vec<_>>>()?;

        Ok(Self { panels })
    }

    /// The dashboard's built-in registry.
    pub fn standard() -> &'static PanelRegistry {
        &STANDARD
    }

    pub fn lookup(&self, section: Section) -> &PanelDefinition {
        &self.panels[section.position()]
    }

    /// Sections offered for navigation; always the full, ordered key set.
    pub fn sections(&self) -> &'static [Section] {
        &Section::ALL
    }

    /// Selectable datasets in registry order.
    pub fn dataset_options(&self) -> Vec<DatasetOption> {
        self.panels
            .iter()
            .flat_map(|panel| panel.items.iter())
            .filter(|item| item.layout == LayoutHint::DatasetList)
            .map(|item| DatasetOption {
                display_name: item.caption.unwrap_or(item.record.path),
                key: item.record.key,
            })
            .collect()
    }

    pub fn dataset(&self, key: &ArtifactKey) -> Option<&PanelItem> {
        self.panels
            .iter()
            .flat_map(|panel| panel.items.iter())
            .find(|item| item.layout == LayoutHint::DatasetList && item.record.key == *key)
    }
}

pub mod keys {
    use super::ArtifactKey;

    pub const FEAR_GREED_ANALYSIS: ArtifactKey = ArtifactKey::new("fear_greed_analysis");
    pub const SENTIMENT_DISTRIBUTION: ArtifactKey = ArtifactKey::new("sentiment_distribution");
    pub const TRADING_ACTIVITY_ANALYSIS: ArtifactKey =
        ArtifactKey::new("trading_activity_analysis");
    pub const FEAR_VS_GREED_COMPARISON: ArtifactKey = ArtifactKey::new("fear_vs_greed_comparison");
    pub const CLUSTER_OPTIMIZATION: ArtifactKey = ArtifactKey::new("cluster_optimization");
    pub const DAILY_TRADER_METRICS: ArtifactKey = ArtifactKey::new("daily_trader_metrics");
    pub const ACCOUNT_CLUSTERS: ArtifactKey = ArtifactKey::new("account_clusters");
    pub const SENTIMENT_PERFORMANCE_SUMMARY: ArtifactKey =
        ArtifactKey::new("sentiment_performance_summary");
    pub const CLUSTER_PROFILES: ArtifactKey = ArtifactKey::new("cluster_profiles");
}

/// Consecutive `Pair` items share one row, so each run must hold exactly
/// slots 0 and 1.
fn check_pairs(section: Section, items: &[PanelItem]) -> Result<()> {
    let mut index = 0;
    while index < items.len() {
        let run_len = items[index..]
            .iter()
            .take_while(|item| matches!(item.layout, LayoutHint::Pair(_)))
            .count();
        if run_len == 0 {
            index += 1;
            continue;
        }

        let run = &items[index..index + run_len];
        let mut slots: Vec<u8> = run
            .iter()
            .filter_map(|item| match item.layout {
                LayoutHint::Pair(slot) => Some(slot),
                _ => None,
            })
            .collect();
        slots.sort_unstable();
        if slots != [0, 1] {
            return Err(ConfigError::InvalidPair {
                section: section.id().to_string(),
                key: run[run_len - 1].record.key.to_string(),
            });
        }
        index += run_len;
    }
    Ok(())
}

fn standard_records() -> Vec<ArtifactRecord> {
    use keys::*;

    vec![
        ArtifactRecord::image(FEAR_GREED_ANALYSIS, "fear_greed_analysis.png"),
        ArtifactRecord::image(SENTIMENT_DISTRIBUTION, "sentiment_distribution.png"),
        ArtifactRecord::image(TRADING_ACTIVITY_ANALYSIS, "trading_activity_analysis.png"),
        ArtifactRecord::image(FEAR_VS_GREED_COMPARISON, "fear_vs_greed_comparison.png"),
        ArtifactRecord::image(CLUSTER_OPTIMIZATION, "cluster_optimization.png"),
        ArtifactRecord::table(DAILY_TRADER_METRICS, "daily_trader_metrics.csv"),
        ArtifactRecord::table(ACCOUNT_CLUSTERS, "account_clusters.csv"),
        ArtifactRecord::table(
            SENTIMENT_PERFORMANCE_SUMMARY,
            "sentiment_performance_summary.csv",
        ),
        ArtifactRecord::table(CLUSTER_PROFILES, "cluster_profiles.csv"),
    ]
}

fn standard_panels() -> Vec<PanelSpec> {
    use keys::*;
    use LayoutHint::*;

    vec![
        PanelSpec {
            section: Section::Overview,
            items: Vec::new(),
        },
        PanelSpec {
            section: Section::MarketSentiment,
            items: vec![
                ItemSpec::captioned(FEAR_GREED_ANALYSIS, Pair(0), "Fear & Greed Index Over Time"),
                ItemSpec::captioned(
                    SENTIMENT_DISTRIBUTION,
                    Pair(1),
                    "Market Sentiment Distribution",
                ),
            ],
        },
        PanelSpec {
            section: Section::TradingActivity,
            items: vec![ItemSpec::new(TRADING_ACTIVITY_ANALYSIS, FixedWidth(900))],
        },
        PanelSpec {
            section: Section::FearVsGreed,
            items: vec![ItemSpec::new(FEAR_VS_GREED_COMPARISON, FullWidth)],
        },
        PanelSpec {
            section: Section::TraderClustering,
            items: vec![ItemSpec::captioned(
                CLUSTER_OPTIMIZATION,
                Inline,
                "Elbow Method & Silhouette Scores",
            )],
        },
        PanelSpec {
            section: Section::ProcessedData,
            items: vec![
                ItemSpec::captioned(DAILY_TRADER_METRICS, DatasetList, "Daily Trader Metrics"),
                ItemSpec::captioned(ACCOUNT_CLUSTERS, DatasetList, "Account Clusters"),
                ItemSpec::captioned(
                    SENTIMENT_PERFORMANCE_SUMMARY,
                    DatasetList,
                    "Sentiment Performance Summary",
                ),
                ItemSpec::captioned(CLUSTER_PROFILES, DatasetList, "Cluster Profiles"),
            ],
        },
    ]
}

static STANDARD: Lazy<PanelRegistry> = Lazy::new(|| {
    PanelRegistry::from_parts(standard_records(), standard_panels())
        .expect("built-in panel registry is consistent")
});
