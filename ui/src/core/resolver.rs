//! Artifact resolution: path → presence check → kind-specific load.
//!
//! Every caller goes through [`ArtifactResolver::resolve`], so absence,
//! corruption and read failures look the same everywhere. Nothing is cached;
//! each call reads the file again.

use std::fs;
use std::path::{Path, PathBuf};

use tracing::{debug, warn};

use super::config::DashboardConfig;
use super::error::ArtifactError;
use super::image::ImageArtifact;
use super::registry::{ArtifactKind, ArtifactRecord};
use super::table::Table;

#[derive(Debug, Clone, PartialEq)]
pub enum ArtifactContent {
    Image(ImageArtifact),
    Table(Table),
}

impl ArtifactContent {
    pub fn as_image(&self) -> Option<&ImageArtifact> {
        match self {
            Self::Image(image) => Some(image),
            Self::Table(_) => None,
        }
    }

    pub fn as_table(&self) -> Option<&Table> {
        match self {
            Self::Table(table) => Some(table),
            Self::Image(_) => None,
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub enum Resolved {
    Loaded(ArtifactContent),
    Missing,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ArtifactResolver {
    image_root: PathBuf,
    data_root: PathBuf,
}

impl ArtifactResolver {
    pub fn new(image_root: impl Into<PathBuf>, data_root: impl Into<PathBuf>) -> Self {
        Self {
            image_root: image_root.into(),
            data_root: data_root.into(),
        }
    }

    pub fn from_config(config: &DashboardConfig) -> Self {
        Self::new(config.image_root.clone(), config.data_root.clone())
    }

    pub fn path_for(&self, record: &ArtifactRecord) -> PathBuf {
        let root = match record.kind {
            ArtifactKind::Image => &self.image_root,
            ArtifactKind::Table => &self.data_root,
        };
        root.join(record.path)
    }

    /// Load `record` from disk. Absence is `Ok(Resolved::Missing)`.
    pub fn resolve(&self, record: &ArtifactRecord) -> Result<Resolved, ArtifactError> {
        let path = self.path_for(record);
        debug!(key = %record.key, path = %path.display(), "resolving artifact");

        let Some(bytes) = read_if_present(&path)? else {
            warn!(key = %record.key, path = %path.display(), "artifact not found");
            return Ok(Resolved::Missing);
        };

        let label = path.display().to_string();
        let content = match record.kind {
            ArtifactKind::Image => ImageArtifact::from_png(&label, bytes).map(ArtifactContent::Image),
            ArtifactKind::Table => Table::from_csv(&label, &bytes).map(ArtifactContent::Table),
        };

        match content {
            Ok(content) => Ok(Resolved::Loaded(content)),
            Err(err) => {
                warn!(key = %record.key, error = %err, "artifact present but unusable");
                Err(err)
            }
        }
    }
}

/// `None` when the path is not a regular file.
fn read_if_present(path: &Path) -> Result<Option<Vec<u8>>, ArtifactError> {
    if !path.is_file() {
        return Ok(None);
    }
    match fs::read(path) {
        Ok(bytes) => Ok(Some(bytes)),
        // Removed between the check and the read.
        Err(err) if err.kind() == std::io::ErrorKind::NotFound => Ok(None),
        Err(err) => Err(ArtifactError::Io {
            path: path.display().to_string(),
            reason: err.to_string(),
        }),
    }
}
