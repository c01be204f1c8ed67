//! End-to-end behaviour of the locale guard against an in-memory bundle
//! provider: resolution, redirects, readiness and overlapping navigations.

use std::cell::RefCell;
use std::collections::HashSet;

use futures::executor::block_on;
use ui::locale::{
    activate, activate_while, switch_language, Activation, BundleError, BundleProvider, Direction,
    Gate, GuardState, HistoryUpdate, LocaleGuard, Location, Navigation, RedirectReason,
    RouteContext, SITE_LOCALES,
};

#[derive(Default)]
struct MemoryBundles {
    active: RefCell<Option<String>>,
    loaded: RefCell<HashSet<String>>,
    fail: HashSet<String>,
}

impl MemoryBundles {
    fn failing(code: &str) -> Self {
        Self {
            fail: HashSet::from([code.to_string()]),
            ..Self::default()
        }
    }
}

impl BundleProvider for MemoryBundles {
    async fn is_active(&self, code: &str) -> bool {
        self.active.borrow().as_deref() == Some(code)
    }

    async fn switch_to(&self, code: &str) -> Result<(), BundleError> {
        *self.active.borrow_mut() = Some(code.to_string());
        Ok(())
    }

    async fn is_loaded(&self, code: &str) -> bool {
        self.loaded.borrow().contains(code)
    }

    async fn load(&self, code: &str) -> Result<(), BundleError> {
        if self.fail.contains(code) {
            return Err(BundleError::Missing(code.to_string()));
        }
        self.loaded.borrow_mut().insert(code.to_string());
        Ok(())
    }
}

fn guard() -> LocaleGuard {
    LocaleGuard::new(SITE_LOCALES.clone())
}

fn active(bundles: &MemoryBundles) -> Option<String> {
    bundles.active.borrow().clone()
}

/// Activate and settle a ticket the way the web gate does: every provider
/// step is checked against the guard, and a stale ticket is followed by a
/// resync of the locale in effect.
fn settle(g: &mut LocaleGuard, bundles: &MemoryBundles, activation: &Activation) -> bool {
    let outcome = block_on(activate_while(bundles, activation.code(), || {
        g.is_current(activation)
    }));
    if g.complete(activation, outcome.map(|_| ())) {
        return true;
    }
    if let Some(current) = g.resync(activation) {
        let outcome = block_on(activate_while(bundles, current.code(), || {
            g.is_current(&current)
        }));
        g.complete(&current, outcome.map(|_| ()));
    }
    false
}

#[test]
fn every_prefixed_language_reaches_ready() {
    let bundles = MemoryBundles::default();
    for lang in SITE_LOCALES.prefixed() {
        let mut g = guard();
        let path = Location::parse(&format!("/{}/products", lang.code));
        let nav = block_on(g.run(RouteContext::Prefixed(&lang.code), &path, &bundles));

        assert!(matches!(nav, Navigation::Activate(_)), "{}: {nav:?}", lang.code);
        assert_eq!(g.effective_code(), Some(lang.code.as_str()));
        let doc = g.document().expect("document attributes applied");
        assert_eq!(doc.lang(), lang.code);
        assert_eq!(doc.dir(), lang.direction());
        assert_eq!(g.gate(RouteContext::Prefixed(&lang.code)), Gate::Open);
    }
}

#[test]
fn unprefixed_route_uses_default_language() {
    let bundles = MemoryBundles::default();
    let mut g = guard();
    block_on(g.run(RouteContext::Default, &Location::parse("/products"), &bundles));
    assert_eq!(g.effective_code(), Some("en"));
    assert_eq!(g.document().unwrap().dir(), Direction::Ltr);
}

#[test]
fn default_prefix_redirects_preserving_query_and_fragment() {
    let bundles = MemoryBundles::default();
    let mut g = guard();
    let nav = block_on(g.run(
        RouteContext::Prefixed("en"),
        &Location::parse("/en/products?size=xl#gallery"),
        &bundles,
    ));

    assert_eq!(
        nav,
        Navigation::Redirect(Location::parse("/products?size=xl#gallery"))
    );
    assert!(matches!(
        g.state(),
        GuardState::Redirecting {
            reason: RedirectReason::RedundantDefaultPrefix,
            ..
        }
    ));
    assert!(bundles.loaded.borrow().is_empty(), "no bundle work before redirect");
}

#[test]
fn unsupported_language_never_becomes_ready() {
    let bundles = MemoryBundles::default();
    let mut g = guard();
    let nav = block_on(g.run(
        RouteContext::Prefixed("xx"),
        &Location::parse("/xx/products"),
        &bundles,
    ));

    assert_eq!(nav, Navigation::Unresolved);
    assert!(!g.is_ready());
    assert!(g.document().is_none());
    assert_eq!(g.gate(RouteContext::Prefixed("xx")), Gate::NotFound);
    assert!(bundles.active.borrow().is_none());
}

#[test]
fn placeholder_segment_is_repaired_then_settles() {
    let bundles = MemoryBundles::default();
    let mut g = guard();
    let nav = block_on(g.run(
        RouteContext::Prefixed("fr"),
        &Location::parse("/fr/:id/products?ref=ad#top"),
        &bundles,
    ));
    let Navigation::Redirect(target) = nav else {
        panic!("expected redirect, got {nav:?}");
    };
    assert_eq!(target.to_string(), "/fr/products?ref=ad#top");

    // The router follows the replace; the corrected path is not redirected again.
    let again = block_on(g.run(RouteContext::Prefixed("fr"), &target, &bundles));
    assert!(matches!(again, Navigation::Activate(_)));
    assert_eq!(g.effective_code(), Some("fr"));
}

#[test]
fn rapid_switch_ends_on_latest_locale() {
    let bundles = MemoryBundles::default();
    let mut g = guard();

    let Navigation::Activate(fr) =
        g.navigate(RouteContext::Prefixed("fr"), &Location::parse("/fr/products"))
    else {
        panic!("fr should activate");
    };
    let Navigation::Activate(ar) =
        g.navigate(RouteContext::Prefixed("ar"), &Location::parse("/ar/products"))
    else {
        panic!("ar should activate");
    };

    // The newer activation settles first, then the stale one arrives.
    assert!(settle(&mut g, &bundles, &ar));
    assert!(!settle(&mut g, &bundles, &fr));

    assert_eq!(g.effective_code(), Some("ar"));
    let doc = g.document().unwrap();
    assert_eq!(doc.lang(), "ar");
    assert_eq!(doc.dir(), Direction::Rtl);
    assert_eq!(active(&bundles).as_deref(), Some("ar"));
    assert!(!bundles.loaded.borrow().contains("fr"), "stale ticket never loaded");
}

#[test]
fn stale_switch_that_lands_last_is_undone() {
    let bundles = MemoryBundles::default();
    let mut g = guard();

    let Navigation::Activate(fr) = g.navigate(RouteContext::Prefixed("fr"), &"/fr".into()) else {
        panic!("fr should activate");
    };
    let Navigation::Activate(ar) = g.navigate(RouteContext::Prefixed("ar"), &"/ar".into()) else {
        panic!("ar should activate");
    };
    assert!(settle(&mut g, &bundles, &ar));

    // fr's switch was already in flight when ar navigated, so it lands last.
    let fr_outcome = block_on(activate(&bundles, fr.code()));
    assert!(!g.complete(&fr, fr_outcome));
    assert_eq!(active(&bundles).as_deref(), Some("fr"));

    let current = g.resync(&fr).expect("ar is in effect");
    assert_eq!(current.code(), "ar");
    let outcome = block_on(activate(&bundles, current.code()));
    assert!(g.complete(&current, outcome));

    assert_eq!(active(&bundles).as_deref(), Some("ar"));
    assert_eq!(g.effective_code(), Some("ar"));
    assert_eq!(g.gate(RouteContext::Prefixed("ar")), Gate::Open);
}

#[test]
fn stale_completion_before_latest_is_ignored() {
    let bundles = MemoryBundles::default();
    let mut g = guard();

    let Navigation::Activate(fr) = g.navigate(RouteContext::Prefixed("fr"), &"/fr".into()) else {
        panic!("fr should activate");
    };
    let Navigation::Activate(ar) = g.navigate(RouteContext::Prefixed("ar"), &"/ar".into()) else {
        panic!("ar should activate");
    };

    assert!(!g.complete(&fr, block_on(activate(&bundles, fr.code()))));
    assert!(matches!(g.state(), GuardState::Resolving { code, .. } if code == "ar"));
    assert_eq!(g.gate(RouteContext::Prefixed("ar")), Gate::Pending);

    assert!(g.complete(&ar, block_on(activate(&bundles, ar.code()))));
    assert_eq!(g.document().unwrap().dir(), Direction::Rtl);
}

#[test]
fn bundle_failure_keeps_gate_closed_until_next_navigation() {
    let bundles = MemoryBundles::failing("fr");
    let mut g = guard();
    block_on(g.run(RouteContext::Prefixed("fr"), &"/fr".into(), &bundles));
    assert_eq!(g.gate(RouteContext::Prefixed("fr")), Gate::Pending);

    block_on(g.run(RouteContext::Prefixed("ar"), &"/ar".into(), &bundles));
    assert_eq!(g.gate(RouteContext::Prefixed("ar")), Gate::Open);
}

#[test]
fn switching_back_reuses_loaded_bundle() {
    let bundles = MemoryBundles::default();
    let mut g = guard();
    for path in ["/ar", "/fr", "/ar"] {
        let code = &path[1..];
        block_on(g.run(RouteContext::Prefixed(code), &path.into(), &bundles));
        assert_eq!(g.effective_code(), Some(code));
    }
    assert_eq!(bundles.loaded.borrow().len(), 2);
}

#[test]
fn redirects_replace_history() {
    let mut g = guard();
    let nav = g.navigate(
        RouteContext::Prefixed("en"),
        &Location::parse("/en/products?size=xl#gallery"),
    );
    assert_eq!(
        nav.history(),
        Some(HistoryUpdate::Replace(Location::parse(
            "/products?size=xl#gallery"
        )))
    );

    let nav = g.navigate(RouteContext::Default, &Location::parse("/products?size=xl#gallery"));
    assert!(matches!(nav, Navigation::Activate(_)));
    assert_eq!(nav.history(), None, "settled routes add no history entry");
}

#[test]
fn language_switch_pushes_history() {
    let here = Location::parse("/products?size=xl");
    let update = switch_language(&SITE_LOCALES, "ar", &here);
    assert_eq!(update, HistoryUpdate::Push(Location::parse("/ar/products?size=xl")));

    let back = switch_language(&SITE_LOCALES, "en", update.location());
    assert_eq!(back, HistoryUpdate::Push(here));
}
