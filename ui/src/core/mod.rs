//! Rendering core: artifact resolution, the section registry, render plans
//! and navigation state. Nothing in here depends on the UI toolkit.

pub mod config;
pub mod error;
pub mod format;
pub mod image;
pub mod navigation;
pub mod registry;
pub mod render;
pub mod resolver;
pub mod table;

pub use config::DashboardConfig;
pub use error::{ArtifactError, ConfigError};
pub use navigation::NavigationState;
pub use registry::{ArtifactKey, LayoutHint, PanelRegistry, Section};
pub use render::{ItemStatus, RenderItem, RenderPlan, ReportRenderer};
pub use resolver::ArtifactResolver;
