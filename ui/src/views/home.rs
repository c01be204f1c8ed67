use dioxus::prelude::*;

use crate::components::locale_gate::use_active_locale;

#[cfg(debug_assertions)]
fn log_home_render(lang: &str) {
    // Lightweight render trace for diagnosing i18n refresh issues.
    tracing::trace!(lang, "Home render");
}

#[component]
pub fn Home() -> Element {
    // Subscribes to the guard so the page re-renders after a language switch.
    let _lang_current = use_active_locale();

    #[cfg(debug_assertions)]
    {
        log_home_render(&_lang_current);
    }

    rsx! {
        section { class: "page page-home",
            h1 { {crate::t!("home-title")} }
            p { {crate::t!("home-intro")} }

            ul { class: "page-home__features",
                li { {crate::t!("home-feature-safety")} }
                li { {crate::t!("home-feature-custom")} }
                li { {crate::t!("home-feature-install")} }
            }
            p { class: "page-home__cta",
                {crate::t!("home-cta")}
            }
        }
    }
}
