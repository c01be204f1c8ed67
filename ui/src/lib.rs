//! Shared UI crate for the Playfort site: locale routing, translations,
//! components and page views. Platform crates supply the `Route` enum.

pub mod core;
pub mod i18n;
pub mod locale;
pub mod views;

pub mod components {
    // Localized application navbar (components/app_navbar.rs)
    pub mod app_navbar;
    pub use app_navbar::register_nav;
    pub use app_navbar::AppNavbar;
    pub use app_navbar::NavBuilder;

    // Locale rendering gate (components/locale_gate.rs)
    pub mod locale_gate;
    pub use locale_gate::LocaleGate;
}
