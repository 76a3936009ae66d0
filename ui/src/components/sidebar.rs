use dioxus::prelude::*;
use tracing::debug;

use crate::core::{NavigationState, PanelRegistry, Section};
use crate::i18n;
use crate::t;
use crate::views::section_label;

/// Sidebar with the section radio group and, when more than one locale is
/// embedded, a language picker.
///
/// The radio group lists `PanelRegistry::sections()` and nothing else, so a
/// selection event can only carry a registered section.
#[component]
pub fn SectionSidebar(nav: Signal<NavigationState>) -> Element {
    let mut current_lang = use_signal(|| "en-US".to_string());
    let langs = use_signal(i18n::available_languages);
    let show_switcher = langs().len() > 1;
    // Global language code signal, if the platform shell provided one.
    let lang_code_ctx: Option<Signal<String>> = try_use_context::<Signal<String>>();
    let lang_marker = lang_code_ctx.as_ref().map(|c| c()).unwrap_or_default();

    let on_lang_change = move |evt: FormEvent| {
        let val = evt.value();
        if i18n::set_language(&val).is_ok() {
            current_lang.set(val.clone());
            if let Some(mut code) = lang_code_ctx {
                code.set(val);
            }
        }
    };

    let current = nav.read().current();
    let sections = PanelRegistry::standard().sections();

    rsx! {
        aside { class: "sidebar",
            div { style: "display:none", "{lang_marker}" }
            h2 { class: "sidebar__title", {t!("nav-title")} }

            fieldset { class: "sidebar__sections",
                legend { class: "sidebar__prompt", {t!("nav-prompt")} }
                for section in sections.iter().copied() {
                    {render_section_option(section, section == current, nav)}
                }
            }

            if show_switcher {
                div { class: "sidebar__locale",
                    label {
                        class: "visually-hidden",
                        r#for: "locale-select",
                        {t!("nav-language-label")}
                    }
                    select {
                        id: "locale-select",
                        value: "{current_lang()}",
                        oninput: on_lang_change,
                        { langs().iter().map(|code| {
                            let c = code.clone();
                            rsx!{
                                option { key: "{c}", value: "{c}", "{c}" }
                            }
                        })}
                    }
                }
            }
        }
    }
}

fn render_section_option(
    section: Section,
    is_current: bool,
    mut nav: Signal<NavigationState>,
) -> Element {
    let input_id = format!("section-{}", section.id());
    let label = section_label(section);

    rsx! {
        label {
            key: "{input_id}",
            class: format!(
                "sidebar__option {}",
                if is_current { "sidebar__option--active" } else { "" }
            ),
            r#for: "{input_id}",
            input {
                id: "{input_id}",
                r#type: "radio",
                name: "section",
                value: section.id(),
                checked: is_current,
                onchange: move |_| {
                    debug!(section = section.id(), "section selected");
                    nav.with_mut(|state| state.select(section));
                },
            }
            span { class: "sidebar__option-label", "{label}" }
        }
    }
}
