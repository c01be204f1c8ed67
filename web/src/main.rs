use dioxus::prelude::*;

use ui::components::app_navbar::{register_nav, NavBuilder};
use ui::components::locale_gate::use_locale_guard_provider;
use ui::components::{AppNavbar, LocaleGate};
use ui::locale::SITE_LOCALES;
use ui::views::{Home, NotFound, Products};

/// The default language is served unprefixed; every other language lives
/// under `/:lang`. Anything else under a prefix lands on the catch-all so
/// the locale guard can repair or reject it.
///
/// A stray placeholder as the *first* segment (`/:id/products`,
/// `/%3Aid/products`) is taken as the `/:lang` parameter, so it reaches the
/// guard as an unsupported prefix and renders not-found rather than being
/// repaired to `/products`. Placeholder repair on unprefixed paths only runs
/// for locations that matched a default-locale route.
#[derive(Debug, Clone, Routable, PartialEq)]
#[rustfmt::skip]
enum Route {
    #[layout(WebShell)]
        #[layout(DefaultLocale)]
            #[route("/")]
            Home {},
            #[route("/products")]
            Products {},
        #[end_layout]
        #[nest("/:lang")]
            #[layout(PrefixedLocale)]
                #[route("/")]
                LocalizedHome { lang: String },
                #[route("/products")]
                LocalizedProducts { lang: String },
                #[route("/:..rest")]
                LocalizedNotFound { lang: String, rest: Vec<String> },
}

impl Route {
    fn home(lang: &str) -> Self {
        if SITE_LOCALES.is_default(lang) {
            Route::Home {}
        } else {
            Route::LocalizedHome {
                lang: lang.to_string(),
            }
        }
    }

    fn products(lang: &str) -> Self {
        if SITE_LOCALES.is_default(lang) {
            Route::Products {}
        } else {
            Route::LocalizedProducts {
                lang: lang.to_string(),
            }
        }
    }
}

const MAIN_CSS: Asset = asset!("/assets/main.css");

fn nav_home(lang: &str, label: &str) -> Element {
    rsx!(Link {
        class: "navbar__link",
        to: Route::home(lang),
        "{label}"
    })
}
fn nav_products(lang: &str, label: &str) -> Element {
    rsx!(Link {
        class: "navbar__link",
        to: Route::products(lang),
        "{label}"
    })
}

fn main() {
    dioxus::launch(App);
}

#[component]
fn App() -> Element {
    ui::i18n::init();
    use_locale_guard_provider();
    register_nav(NavBuilder {
        home: nav_home,
        products: nav_products,
    });

    rsx! {
        // Global app resources
        document::Link { rel: "stylesheet", href: MAIN_CSS }

        Router::<Route> {}
    }
}

/// Site chrome shared by every route.
#[component]
fn WebShell() -> Element {
    rsx! {
        AppNavbar { }
        main { class: "site-main",
            Outlet::<Route> {}
        }
    }
}

/// Unprefixed routes, always served in the default language.
#[component]
fn DefaultLocale() -> Element {
    let route = use_route::<Route>().to_string();
    rsx! {
        LocaleGate { route, not_found: rsx! { NotFound {} },
            Outlet::<Route> {}
        }
    }
}

/// Routes under a `/:lang` prefix.
#[component]
fn PrefixedLocale(lang: String) -> Element {
    let route = use_route::<Route>().to_string();
    rsx! {
        LocaleGate { lang, route, not_found: rsx! { NotFound {} },
            Outlet::<Route> {}
        }
    }
}

#[component]
fn LocalizedHome(lang: String) -> Element {
    rsx! { Home {} }
}

#[component]
fn LocalizedProducts(lang: String) -> Element {
    rsx! { Products {} }
}

#[component]
fn LocalizedNotFound(lang: String, rest: Vec<String>) -> Element {
    tracing::debug!(%lang, ?rest, "no page for path");
    rsx! { NotFound {} }
}
