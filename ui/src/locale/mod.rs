//! Locale-aware routing.
//!
//! The default language is served without a URL prefix (`/products`); every
//! other supported language lives under `/{code}` (`/fr/products`). This
//! module decides, for each navigation, which language is in effect, whether
//! the URL needs correcting, and when the page may render.
//!
//! Everything here is framework-free; the Dioxus wiring lives in
//! `components::locale_gate`.

mod bundle;
mod document;
mod guard;
mod history;
mod location;
mod normalize;
mod resolve;
mod table;

pub use bundle::{activate, activate_while, BundleError, BundleProvider};
pub use document::DocumentAttributes;
pub use guard::{Activation, Gate, GuardState, LocaleGuard, Navigation};
pub use history::HistoryUpdate;
pub use location::Location;
pub use normalize::{
    is_placeholder_segment, localized_location, repair_placeholders, strip_locale_prefix,
    switch_language,
};
pub use resolve::{resolve, RedirectReason, Resolution, RouteContext};
pub use table::{Direction, LocaleTable, LocaleTableError, SupportedLanguage, SITE_LOCALES};
