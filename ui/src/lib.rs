//! Shared UI crate for Sentiview: the static-report rendering core and the
//! Dioxus views that display it.

pub mod core;
pub mod i18n;
pub mod views;

pub mod components {
    // Section radio group + locale picker (components/sidebar.rs)
    pub mod sidebar;
    pub use sidebar::SectionSidebar;
}

pub use views::Dashboard;
