use dioxus::prelude::*;

use crate::core::platform;
use crate::i18n::EmbeddedBundles;
use crate::locale::{
    self, Activation, Gate, HistoryUpdate, LocaleGuard, Navigation, RouteContext, SITE_LOCALES,
};
use crate::t;

/// Shared handle to the site's single locale guard.
pub type GuardSignal = Signal<LocaleGuard>;

/// Install the guard at the app root. Call once, above the router.
pub fn use_locale_guard_provider() -> GuardSignal {
    use_context_provider(|| Signal::new(LocaleGuard::new(SITE_LOCALES.clone())))
}

pub fn use_locale_guard() -> GuardSignal {
    use_context::<GuardSignal>()
}

/// Locale the page is currently rendered in (the default until a navigation completes).
pub fn use_active_locale() -> String {
    let guard = use_locale_guard();
    let guard = guard.read();
    guard
        .effective_code()
        .unwrap_or_else(|| guard.table().default_code())
        .to_string()
}

/// Write a locale-driven location change to the router's history.
pub fn follow_history(update: HistoryUpdate) {
    match update {
        HistoryUpdate::Replace(to) => {
            navigator().replace(to.to_string());
        }
        HistoryUpdate::Push(to) => {
            navigator().push(to.to_string());
        }
    }
}

/// Activate the bundle for `activation` and settle it on the guard.
///
/// A stale activation is followed by one activation of the locale in effect,
/// which switches the shared bundle back if the stale one got to it.
async fn settle(mut guard: GuardSignal, activation: Activation) {
    let outcome = locale::activate_while(&EmbeddedBundles, activation.code(), || {
        guard.peek().is_current(&activation)
    })
    .await
    .map(|_| ());
    if guard
        .write()
        .complete_with(&activation, outcome, platform::apply_document_attributes)
    {
        return;
    }

    let resync = guard.peek().resync(&activation);
    if let Some(current) = resync {
        let outcome = locale::activate_while(&EmbeddedBundles, current.code(), || {
            guard.peek().is_current(&current)
        })
        .await
        .map(|_| ());
        guard
            .write()
            .complete_with(&current, outcome, platform::apply_document_attributes);
    }
}

/// Rendering gate for a locale-scoped subtree.
///
/// `lang` is the route's `/:lang` parameter, or `None` on unprefixed routes.
/// `route` is the router's current route string; it drives re-evaluation on
/// every navigation. Children render only once the guard is ready for this
/// route's locale; an unsupported prefix renders `not_found` instead.
#[component]
pub fn LocaleGate(
    lang: Option<String>,
    route: String,
    not_found: Element,
    children: Element,
) -> Element {
    let mut guard = use_locale_guard();

    let (lang_dep, route_dep) = (lang.clone(), route.clone());
    use_effect(use_reactive!(|(lang_dep, route_dep)| {
        let location = platform::current_location(&route_dep);
        let context = RouteContext::from_param(lang_dep.as_deref());
        let navigation = guard.write().navigate(context, &location);

        if let Some(update) = navigation.history() {
            follow_history(update);
        }
        if let Navigation::Activate(activation) = navigation {
            spawn(settle(guard, activation));
        }
    }));

    let gate = guard.read().gate(RouteContext::from_param(lang.as_deref()));

    #[cfg(debug_assertions)]
    {
        tracing::trace!(?gate, ?lang, %route, "LocaleGate render");
    }

    match gate {
        Gate::Open => rsx! { {children} },
        Gate::NotFound => rsx! { {not_found} },
        Gate::Pending => rsx! {
            div { class: "locale-gate__pending", aria_busy: "true",
                span { class: "visually-hidden", {t!("locale-loading")} }
            }
        },
    }
}
