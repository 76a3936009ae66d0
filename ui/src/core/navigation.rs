//! Per-session navigation: the selected section plus the dataset picked on the
//! Processed Data panel.

use super::error::ConfigError;
use super::registry::{ArtifactKey, DatasetOption, PanelRegistry, Section};

#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct NavigationState {
    section: Section,
    dataset: Option<ArtifactKey>,
}

impl NavigationState {
    pub fn new(section: Section) -> Self {
        Self {
            section,
            dataset: None,
        }
    }

    pub fn current(&self) -> Section {
        self.section
    }

    pub fn select(&mut self, section: Section) {
        self.section = section;
    }

    /// Pick a dataset; the key must be one of the registry's dataset options.
    pub fn select_dataset(
        &mut self,
        key: ArtifactKey,
        registry: &PanelRegistry,
    ) -> Result<(), ConfigError> {
        if registry.dataset(&key).is_none() {
            return Err(ConfigError::UnknownDataset(key.to_string()));
        }
        self.dataset = Some(key);
        Ok(())
    }

    /// Selected dataset, defaulting to the first option.
    pub fn current_dataset(&self, registry: &PanelRegistry) -> Option<DatasetOption> {
        let options = registry.dataset_options();
        self.dataset
            .and_then(|key| options.iter().find(|option| option.key == key).copied())
            .or_else(|| options.first().copied())
    }
}
