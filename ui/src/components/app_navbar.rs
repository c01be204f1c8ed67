use dioxus::prelude::*;
use once_cell::sync::OnceCell;

use crate::components::locale_gate::{follow_history, use_active_locale, use_locale_guard};
use crate::core::platform;
use crate::locale::switch_language;
use crate::t;

// Navbar stylesheet
const NAVBAR_CSS: Asset = asset!("/assets/styling/navbar.css");

/// Platforms register a `NavBuilder` providing fully constructed `Link`
/// elements, so `ui` does not need to know each platform's `Route` enum.
///
/// Each builder receives the active locale code and the localized label and
/// returns a `Link` to the matching (prefixed or unprefixed) route that
/// already *contains* the label.
///
/// Example (in platform crate):
/// ```ignore
/// use ui::components::app_navbar::{NavBuilder, register_nav};
/// fn nav_home(lang: &str, label: &str) -> Element {
///     rsx!(Link { class: "navbar__link", to: Route::home(lang), "{label}" })
/// }
/// register_nav(NavBuilder { home: nav_home, products: nav_products });
/// ```
pub struct NavBuilder {
    pub home: fn(lang: &str, label: &str) -> Element,
    pub products: fn(lang: &str, label: &str) -> Element,
}

static NAV_BUILDER: OnceCell<NavBuilder> = OnceCell::new();

pub fn register_nav(builder: NavBuilder) {
    let _ = NAV_BUILDER.set(builder);
}

#[component]
pub fn AppNavbar() -> Element {
    let guard = use_locale_guard();
    let current_lang = use_active_locale();
    let options: Vec<(String, String)> = guard
        .read()
        .table()
        .languages()
        .iter()
        .map(|l| (l.code.clone(), l.code.to_uppercase()))
        .collect();
    let show_switcher = options.len() > 1;

    // Switching language keeps the current page: only the prefix changes.
    let on_change = move |evt: FormEvent| {
        let code = evt.value();
        let here = platform::current_location(&router().full_route_string());
        let update = switch_language(guard.peek().table(), &code, &here);
        tracing::info!(%code, to = %update.location(), "language switch");
        follow_history(update);
    };

    let internal_nav: Option<Element> = NAV_BUILDER.get().map(|b| {
        let home = (b.home)(&current_lang, &t!("nav-home"));
        let products = (b.products)(&current_lang, &t!("nav-products"));
        rsx! {
            nav { class: "navbar__links",
                {home}
                {products}
            }
        }
    });

    let tagline = t!("tagline");

    rsx! {
        document::Link { rel: "stylesheet", href: NAVBAR_CSS }

        header {
            id: "navbar",
            class: "navbar",
            div { class: "navbar__inner",
                // Brand
                div { class: "navbar__brand",
                    span { class: "navbar__brand-link",
                        span { class: "navbar__brand-spark", aria_hidden: "true" }
                        span { class: "navbar__brand-mark", "Playfort" }
                    }
                    span { class: "navbar__brand-subtitle", "{tagline}" }
                }

                if let Some(nav) = internal_nav {
                    {nav}
                }

                // Locale switcher
                if show_switcher {
                    div { class: "navbar__locale",
                        label {
                            class: "visually-hidden",
                            r#for: "locale-select",
                            {t!("nav-language-label")}
                        }
                        select {
                            id: "locale-select",
                            value: "{current_lang}",
                            oninput: on_change,
                            for (code, label) in options {
                                option {
                                    key: "{code}",
                                    value: "{code}",
                                    selected: code == current_lang,
                                    "{label}"
                                }
                            }
                        }
                    }
                }
            }
        }
    }
}
