//! Error types for artifact loading and dashboard configuration.
//!
//! A missing artifact is not an error: it is a [`Resolved::Missing`] outcome.
//! [`ArtifactError`] covers files that exist but cannot be used, and
//! [`ConfigError`] covers registry or selection mismatches, which are startup
//! problems rather than something a render pass can recover from.
//!
//! [`Resolved::Missing`]: crate::core::resolver::Resolved::Missing

use thiserror::Error;

/// An artifact exists on disk but could not be turned into displayable content.
///
/// Messages are captured as strings so render plans stay `Clone + PartialEq`.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ArtifactError {
    /// Tabular content is malformed (ragged rows, no header, bad encoding).
    #[error("Could not parse table {path}: {reason}")]
    Parse { path: String, reason: String },

    /// Image bytes are not a decodable PNG.
    #[error("Could not decode image {path}: {reason}")]
    Decode { path: String, reason: String },

    /// The file exists but reading it failed.
    #[error("Could not read {path}: {reason}")]
    Io { path: String, reason: String },
}

impl ArtifactError {
    pub fn path(&self) -> &str {
        match self {
            Self::Parse { path, .. } | Self::Decode { path, .. } | Self::Io { path, .. } => path,
        }
    }
}

/// Registry or selection mismatch.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ConfigError {
    #[error("Unknown section '{0}'")]
    UnknownSection(String),

    #[error("Section '{0}' is defined more than once")]
    DuplicateSection(String),

    #[error("Section '{0}' has no panel definition")]
    MissingSection(String),

    #[error("Artifact '{0}' has more than one record")]
    DuplicateRecord(String),

    #[error("Section '{section}' references artifact '{key}' which has no record")]
    DanglingKey { section: String, key: String },

    #[error("Section '{section}' has a malformed column pair at '{key}'")]
    InvalidPair { section: String, key: String },

    #[error("Dataset entry '{0}' does not point at a table artifact")]
    NotATable(String),

    #[error("'{0}' is not one of the selectable datasets")]
    UnknownDataset(String),

    #[error("Invalid config file {path}: {reason}")]
    InvalidFile { path: String, reason: String },

    #[error("Could not read config file {path}: {reason}")]
    Unreadable { path: String, reason: String },
}

pub type Result<T, E = ConfigError> = std::result::Result<T, E>;
