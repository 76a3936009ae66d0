//! Render plans: a panel's items, resolved in order.

use super::error::{ArtifactError, ConfigError};
use super::registry::{
    ArtifactKey, ArtifactKind, DatasetOption, LayoutHint, PanelItem, PanelRegistry, Section,
};
use super::resolver::{ArtifactContent, ArtifactResolver, Resolved};
use super::table::Table;

#[derive(Debug, Clone, PartialEq)]
pub enum ItemStatus {
    Loaded(ArtifactContent),
    Missing,
    /// Present but unusable; shown as a placeholder with a warning.
    Failed(ArtifactError),
}

#[derive(Debug, Clone, PartialEq)]
pub struct RenderItem {
    pub key: ArtifactKey,
    pub kind: ArtifactKind,
    pub layout: LayoutHint,
    pub caption: Option<&'static str>,
    /// Filesystem path the item was resolved from, for warnings.
    pub path: String,
    pub status: ItemStatus,
}

impl RenderItem {
    pub fn is_loaded(&self) -> bool {
        matches!(self.status, ItemStatus::Loaded(_))
    }

    pub fn is_missing(&self) -> bool {
        matches!(self.status, ItemStatus::Missing)
    }

    pub fn table(&self) -> Option<&Table> {
        match &self.status {
            ItemStatus::Loaded(content) => content.as_table(),
            _ => None,
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct RenderPlan {
    pub section: Section,
    pub items: Vec<RenderItem>,
}

impl RenderPlan {
    pub fn missing_count(&self) -> usize {
        self.items.iter().filter(|item| item.is_missing()).count()
    }
}

#[derive(Debug, Clone, Copy)]
pub struct ReportRenderer<'a> {
    registry: &'a PanelRegistry,
    resolver: &'a ArtifactResolver,
}

impl<'a> ReportRenderer<'a> {
    pub fn new(registry: &'a PanelRegistry, resolver: &'a ArtifactResolver) -> Self {
        Self { registry, resolver }
    }

    /// Resolve every item of `section`'s panel, in panel order.
    pub fn render(&self, section: Section) -> RenderPlan {
        let items = self
            .registry
            .lookup(section)
            .items
            .iter()
            .map(|item| self.render_item(item))
            .collect();
        RenderPlan { section, items }
    }

    /// Selectable datasets, independent of what is on disk.
    pub fn dataset_options(&self) -> Vec<DatasetOption> {
        self.registry.dataset_options()
    }

    pub fn render_dataset(&self, key: &ArtifactKey) -> Result<RenderItem, ConfigError> {
        let item = self
            .registry
            .dataset(key)
            .ok_or_else(|| ConfigError::UnknownDataset(key.to_string()))?;
        Ok(self.render_item(item))
    }

    fn render_item(&self, item: &PanelItem) -> RenderItem {
        let status = match self.resolver.resolve(&item.record) {
            Ok(Resolved::Loaded(content)) => ItemStatus::Loaded(content),
            Ok(Resolved::Missing) => ItemStatus::Missing,
            Err(err) => ItemStatus::Failed(err),
        };
        RenderItem {
            key: item.record.key,
            kind: item.record.kind,
            layout: item.layout,
            caption: item.caption,
            path: self.resolver.path_for(&item.record).display().to_string(),
            status,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::image::encode_test_png;
    use crate::core::registry::keys;
    use std::fs;

    struct Fixture {
        dir: tempfile::TempDir,
        resolver: ArtifactResolver,
    }

    impl Fixture {
        fn new() -> Self {
            let dir = tempfile::tempdir().unwrap();
            fs::create_dir_all(dir.path().join("outputs")).unwrap();
            fs::create_dir_all(dir.path().join("processed_data")).unwrap();
            let resolver =
                ArtifactResolver::new(dir.path().join("outputs"), dir.path().join("processed_data"));
            Self { dir, resolver }
        }

        fn image(&self, name: &str) {
            fs::write(self.dir.path().join("outputs").join(name), encode_test_png(3, 2)).unwrap();
        }

        fn table(&self, name: &str, body: &str) {
            fs::write(self.dir.path().join("processed_data").join(name), body).unwrap();
        }

        fn renderer(&self) -> ReportRenderer<'_> {
            ReportRenderer::new(PanelRegistry::standard(), &self.resolver)
        }
    }

    #[test]
    fn plan_matches_panel_length_and_order() {
        let fixture = Fixture::new();
        let registry = PanelRegistry::standard();
        for section in Section::ALL {
            let plan = fixture.renderer().render(section);
            let expected: Vec<_> = registry
                .lookup(section)
                .items
                .iter()
                .map(|item| (item.record.key, item.layout))
                .collect();
            let actual: Vec<_> = plan.items.iter().map(|i| (i.key, i.layout)).collect();
            assert_eq!(plan.section, section);
            assert_eq!(actual, expected, "section {section}");
        }
    }

    #[test]
    fn missing_artifact_does_not_block_its_sibling() {
        let fixture = Fixture::new();
        fixture.image("sentiment_distribution.png");

        let plan = fixture.renderer().render(Section::MarketSentiment);
        assert!(plan.items[0].is_missing());
        assert!(plan.items[1].is_loaded());
        assert_eq!(plan.missing_count(), 1);
        assert!(plan.items[0].path.ends_with("fear_greed_analysis.png"));
        assert_eq!(plan.items[1].caption, Some("Market Sentiment Distribution"));
    }

    #[test]
    fn corrupt_image_is_failed_not_missing() {
        let fixture = Fixture::new();
        fs::write(
            fixture.dir.path().join("outputs/fear_vs_greed_comparison.png"),
            "garbage",
        )
        .unwrap();

        let plan = fixture.renderer().render(Section::FearVsGreed);
        assert!(matches!(
            plan.items[0].status,
            ItemStatus::Failed(ArtifactError::Decode { .. })
        ));
    }

    #[test]
    fn rendering_twice_is_identical() {
        let fixture = Fixture::new();
        fixture.image("fear_greed_analysis.png");
        fixture.table("account_clusters.csv", "account,cluster\n0x1,2\n");

        let renderer = fixture.renderer();
        for section in Section::ALL {
            assert_eq!(renderer.render(section), renderer.render(section));
        }
    }

    #[test]
    fn dataset_renders_table_with_summary() {
        let fixture = Fixture::new();
        fixture.table("cluster_profiles.csv", "a,b,c\n1,x,0.5\n2,y,1.5\n");

        let item = fixture
            .renderer()
            .render_dataset(&keys::CLUSTER_PROFILES)
            .unwrap();
        let table = item.table().expect("table loaded");
        assert_eq!(table.columns(), ["a", "b", "c"]);
        assert_eq!(table.row_count(), 2);
        assert_eq!(table.summary(), "Rows: 2  |  Columns: 3");
    }

    #[test]
    fn absent_dataset_is_missing() {
        let fixture = Fixture::new();
        let item = fixture
            .renderer()
            .render_dataset(&keys::DAILY_TRADER_METRICS)
            .unwrap();
        assert!(item.is_missing());
        assert!(item.table().is_none());
    }

    #[test]
    fn non_dataset_key_is_a_config_error() {
        let fixture = Fixture::new();
        let renderer = fixture.renderer();
        assert_eq!(
            renderer.render_dataset(&keys::CLUSTER_OPTIMIZATION),
            Err(ConfigError::UnknownDataset("cluster_optimization".into()))
        );
        assert_eq!(
            renderer.render_dataset(&ArtifactKey::new("volume_by_hour")),
            Err(ConfigError::UnknownDataset("volume_by_hour".into()))
        );
    }

    #[test]
    fn dataset_options_ignore_file_state() {
        let empty = Fixture::new();
        let full = Fixture::new();
        for option in full.renderer().dataset_options() {
            full.table(
                PanelRegistry::standard()
                    .dataset(&option.key)
                    .map(|item| item.record.path)
                    .unwrap(),
                "x\n1\n",
            );
        }
        assert_eq!(empty.renderer().dataset_options().len(), 4);
        assert_eq!(
            empty.renderer().dataset_options(),
            full.renderer().dataset_options()
        );
    }
}
