use dioxus::prelude::*;

use crate::t;

/// Static project description; the Overview panel has no artifacts.
#[component]
pub fn Overview() -> Element {
    rsx! {
        div { class: "overview",
            p {
                strong { {t!("overview-objective-label")} }
                " "
                {t!("overview-objective")}
            }
            p { strong { {t!("overview-focus-label")} } }
            ul { class: "overview__focus",
                li { {t!("overview-focus-profitability")} }
                li { {t!("overview-focus-behavior")} }
                li { {t!("overview-focus-segmentation")} }
            }
        }
    }
}
