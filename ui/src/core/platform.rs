//! Platform glue for the locale guard: reading the full browser location and
//! writing document attributes.

use crate::locale::{DocumentAttributes, Location};

/// Current location including query string and fragment.
///
/// The router only knows the path (and query for routes that declare one),
/// so on the web the browser's `window.location` is preferred. `route` is the
/// router's view and is used when the browser location is unavailable.
pub fn current_location(route: &str) -> Location {
    #[cfg(target_arch = "wasm32")]
    {
        if let Some(loc) = browser_location() {
            return loc;
        }
    }
    Location::parse(route)
}

#[cfg(target_arch = "wasm32")]
fn browser_location() -> Option<Location> {
    let location = web_sys::window()?.location();
    let path = location.pathname().ok()?;
    let search = location.search().ok().unwrap_or_default();
    let hash = location.hash().ok().unwrap_or_default();
    Some(Location::parse(&format!("{path}{search}{hash}")))
}

/// Write `lang` and `dir` onto the root `<html>` element.
pub fn apply_document_attributes(attrs: &DocumentAttributes) {
    #[cfg(target_arch = "wasm32")]
    {
        let root = web_sys::window()
            .and_then(|w| w.document())
            .and_then(|d| d.document_element());
        let Some(root) = root else {
            tracing::warn!("no document element; skipping lang/dir update");
            return;
        };
        if let Err(err) = root
            .set_attribute("lang", attrs.lang())
            .and_then(|_| root.set_attribute("dir", attrs.dir().as_str()))
        {
            tracing::warn!(?err, "failed to set document lang/dir");
        }
    }

    #[cfg(not(target_arch = "wasm32"))]
    {
        tracing::debug!(lang = attrs.lang(), dir = %attrs.dir(), "document attributes");
    }
}
