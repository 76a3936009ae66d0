use dioxus::prelude::*;

use crate::components::SectionSidebar;
use crate::core::{
    config, ArtifactResolver, NavigationState, PanelRegistry, ReportRenderer, Section,
};
use crate::i18n;
use crate::t;
use crate::views::{section_heading, ArtifactPanel, DatasetPanel, Overview};

#[cfg(debug_assertions)]
fn log_dashboard_render(section: Section, lang: &str) {
    tracing::trace!(section = section.id(), lang, "dashboard render");
}

/// Root view. Owns this session's navigation state; every section change
/// re-runs the body, which resolves the panel's artifacts afresh.
#[component]
pub fn Dashboard() -> Element {
    i18n::init();

    let config = config::installed();
    let nav = use_signal(|| NavigationState::new(config.default_section));

    // Re-render on language change when the shell provides the signal.
    let lang_code: Option<Signal<String>> = try_use_context::<Signal<String>>();
    let lang_current = lang_code.as_ref().map(|s| s()).unwrap_or_default();

    let section = nav.read().current();

    #[cfg(debug_assertions)]
    {
        log_dashboard_render(section, &lang_current);
    }

    let body = match section {
        Section::Overview => rsx! { Overview {} },
        Section::ProcessedData => rsx! { DatasetPanel { nav } },
        _ => {
            let resolver = ArtifactResolver::from_config(config);
            let plan = ReportRenderer::new(PanelRegistry::standard(), &resolver).render(section);
            rsx! { ArtifactPanel { plan } }
        }
    };
    let heading = section_heading(section);
    let panel_class = format!("panel panel--{}", section.id());

    rsx! {
        div { class: "dashboard", lang: "{lang_current}",
            SectionSidebar { nav }

            main { class: "dashboard__main",
                header { class: "dashboard__header",
                    h1 { "📊 " {t!("page-title")} }
                    p { class: "dashboard__intro", {t!("page-intro")} }
                }

                section { class: "{panel_class}",
                    h2 { class: "panel__heading", "{heading}" }
                    {body}
                }

                footer { class: "dashboard__footer",
                    hr {}
                    p { class: "dashboard__caption", {t!("footer-caption")} }
                }
            }
        }
    }
}
