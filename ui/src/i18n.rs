//! Internationalization (i18n) support for `playfort-ui`.
//!
//! This module wires together:
//! - `i18n-embed` (language selection + asset loading)
//! - `rust-embed` (compile-time embedding of `.ftl` files)
//! - `i18n-embed-fl` (`fl!` macro for compile‑time checked lookups)
//!
//! Folder layout (relative to this crate root):
//! ```text
//! i18n.toml
//! locales.json          (site locale table; see `locale::SITE_LOCALES`)
//! i18n/
//!   en/playfort-ui.ftl  (fallback/reference, served unprefixed)
//!   ar/playfort-ui.ftl  (right-to-left)
//!   fr/playfort-ui.ftl
//! ```
//!
//! Which language is active is decided by the URL, not by the browser or OS:
//! `init()` selects the site default and the locale guard switches bundles
//! through [`EmbeddedBundles`] on every navigation.
//!
//! To add a new locale:
//! 1. Copy `en/playfort-ui.ftl` to `i18n/<code>/playfort-ui.ftl` and translate it.
//! 2. Add `{ "code": "<code>", "isRTL": … }` to `locales.json`.
//! 3. Run tests to ensure completeness.
use std::collections::HashSet;
use std::sync::{Mutex, Once};

use i18n_embed::fluent::FluentLanguageLoader;
use i18n_embed::LanguageLoader;
use once_cell::sync::Lazy;
use rust_embed::Embed;
use tracing::warn;
use unic_langid::LanguageIdentifier;

use crate::locale::{BundleError, BundleProvider, SITE_LOCALES};

pub use i18n_embed_fl::fl; // Re-export for convenience.

/// Ergonomic translation macro.
/// Examples:
///     t!("nav-home")
///     t!(<key>, name = value) for messages with variables
///
/// This expands to `fl!(&*LOADER, ...)` keeping callsites short while
/// ensuring all lookups route through the shared loader.
#[macro_export]
macro_rules! t {
    ($key:literal) => {
        $crate::i18n::fl!(&*$crate::i18n::LOADER, $key)
    };
    ($key:literal, $( $arg:ident = $value:expr ),+ $(,)?) => {
        $crate::i18n::fl!(&*$crate::i18n::LOADER, $key, $( $arg = $value ),+ )
    };
}

/// Fluent "domain" (matches the crate / the fallback FTL filename).
///
/// Fallback file path must be: `i18n/en/{DOMAIN}.ftl`
const DOMAIN: &str = "playfort-ui";

/// Embed all locale folders under `i18n/`.
#[derive(Embed)]
#[folder = "i18n"]
struct Localizations;

/// Global language loader used with the `fl!` macro.
pub static LOADER: Lazy<FluentLanguageLoader> = Lazy::new(|| {
    let fallback: LanguageIdentifier = SITE_LOCALES
        .default_code()
        .parse()
        .expect("valid fallback language identifier");
    FluentLanguageLoader::new(DOMAIN, fallback)
});

/// Codes whose bundle has been parsed at least once.
static LOADED: Lazy<Mutex<HashSet<String>>> = Lazy::new(|| Mutex::new(HashSet::new()));

static INIT: Once = Once::new();

/// Initialize i18n with the site default language (idempotent).
pub fn init() {
    INIT.call_once(|| {
        let default = SITE_LOCALES.default_code();
        match set_language(default) {
            Ok(()) => mark_loaded(default),
            Err(err) => warn!(%err, "failed selecting default language; continuing with fallback"),
        }
    });
}

/// Switch language at runtime.
pub fn set_language(tag: &str) -> Result<(), BundleError> {
    let lang: LanguageIdentifier = tag
        .parse()
        .map_err(|_| BundleError::InvalidTag(tag.to_string()))?;
    i18n_embed::select(&*LOADER, &Localizations, &[lang])?;
    Ok(())
}

/// Code of the language the loader currently renders.
pub fn current_language() -> String {
    LOADER.current_language().to_string()
}

/// List available (embedded) language identifiers.
pub fn available_languages() -> Vec<String> {
    let mut langs = Localizations::iter()
        .filter_map(|path| path.split('/').next().map(|s| s.to_string()))
        .collect::<Vec<_>>();
    langs.sort();
    langs.dedup();
    langs
}

fn has_bundle(code: &str) -> bool {
    available_languages().iter().any(|l| l == code)
}

fn mark_loaded(code: &str) {
    if let Ok(mut loaded) = LOADED.lock() {
        loaded.insert(code.to_string());
    }
}

/// Bundle provider over the embedded Fluent files.
///
/// With embedded assets, selecting a language also parses its bundle, so
/// `load` only selects when the language is not already active and then
/// records the code as loaded.
#[derive(Debug, Clone, Copy, Default)]
pub struct EmbeddedBundles;

impl BundleProvider for EmbeddedBundles {
    async fn is_active(&self, code: &str) -> bool {
        current_language() == code
    }

    async fn switch_to(&self, code: &str) -> Result<(), BundleError> {
        if !has_bundle(code) {
            return Err(BundleError::Missing(code.to_string()));
        }
        set_language(code)
    }

    async fn is_loaded(&self, code: &str) -> bool {
        LOADED
            .lock()
            .map(|loaded| loaded.contains(code))
            .unwrap_or(false)
    }

    async fn load(&self, code: &str) -> Result<(), BundleError> {
        if !has_bundle(code) {
            return Err(BundleError::Missing(code.to_string()));
        }
        if current_language() != code {
            set_language(code)?;
        }
        mark_loaded(code);
        Ok(())
    }
}
