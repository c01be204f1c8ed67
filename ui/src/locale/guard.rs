//! The locale router guard: per-navigation state machine sitting between
//! the URL and the page tree.
//!
//! A navigation is split in two halves so overlapping activations cannot
//! clobber each other:
//!
//! 1. [`LocaleGuard::navigate`] resolves the location synchronously. It
//!    either issues a redirect, marks the route unresolved, or hands back an
//!    [`Activation`] ticket stamped with a fresh generation number.
//! 2. Once the bundle for that ticket has been activated (see
//!    [`bundle::activate`](super::bundle::activate)), the result is passed to
//!    [`LocaleGuard::complete`]. Only the ticket of the latest navigation is
//!    accepted; older tickets are dropped without touching state.
//!
//! The translation bundle is shared by every navigation, so the guard state
//! alone does not protect it. Activations run through
//! [`bundle::activate_while`](super::bundle::activate_while) with
//! [`LocaleGuard::is_current`] as the check, and a stale ticket that still
//! reached the provider is followed by [`LocaleGuard::resync`], which hands
//! out a ticket that switches the bundle back to the locale in effect.
//!
//! ```
//! use ui::locale::{Location, LocaleGuard, Navigation, RouteContext, SITE_LOCALES};
//!
//! let mut guard = LocaleGuard::new(SITE_LOCALES.clone());
//! let nav = guard.navigate(RouteContext::Prefixed("en"), &Location::parse("/en/products?x=1"));
//! assert_eq!(nav, Navigation::Redirect(Location::parse("/products?x=1")));
//! ```

use tracing::{debug, error, info, warn};

use super::bundle::{self, BundleError, BundleProvider};
use super::document::DocumentAttributes;
use super::history::HistoryUpdate;
use super::location::Location;
use super::resolve::{resolve, RedirectReason, Resolution, RouteContext};
use super::table::LocaleTable;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum GuardState {
    /// No navigation processed yet.
    Idle,
    /// Bundle activation for `code` is in flight.
    Resolving { code: String, generation: u64 },
    /// Bundle active and document attributes applied.
    Ready { code: String },
    /// Requested prefix is not a supported language.
    Unresolved { requested: String },
    /// A replace-navigation to `target` was issued.
    Redirecting {
        target: Location,
        reason: RedirectReason,
    },
}

/// Ticket for one in-flight bundle activation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Activation {
    code: String,
    generation: u64,
}

impl Activation {
    pub fn code(&self) -> &str {
        &self.code
    }

    pub fn generation(&self) -> u64 {
        self.generation
    }
}

/// What the caller has to do after [`LocaleGuard::navigate`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Navigation {
    /// Activate the bundle, then call [`LocaleGuard::complete`].
    Activate(Activation),
    /// Replace the current history entry with this location.
    Redirect(Location),
    /// Render the not-found boundary.
    Unresolved,
    /// Already ready for this locale; nothing to do.
    Unchanged,
}

impl Navigation {
    /// History entry to write for this outcome. Only redirects touch
    /// history, and they always replace the current entry.
    pub fn history(&self) -> Option<HistoryUpdate> {
        match self {
            Navigation::Redirect(target) => Some(HistoryUpdate::Replace(target.clone())),
            Navigation::Activate(_) | Navigation::Unresolved | Navigation::Unchanged => None,
        }
    }
}

/// How the gated subtree should render for a route.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Gate {
    Pending,
    Open,
    NotFound,
}

#[derive(Debug, Clone)]
pub struct LocaleGuard {
    table: LocaleTable,
    state: GuardState,
    generation: u64,
    document: Option<DocumentAttributes>,
}

impl LocaleGuard {
    pub fn new(table: LocaleTable) -> Self {
        Self {
            table,
            state: GuardState::Idle,
            generation: 0,
            document: None,
        }
    }

    pub fn table(&self) -> &LocaleTable {
        &self.table
    }

    pub fn state(&self) -> &GuardState {
        &self.state
    }

    pub fn generation(&self) -> u64 {
        self.generation
    }

    /// Attributes last applied to the document, if any navigation completed.
    pub fn document(&self) -> Option<&DocumentAttributes> {
        self.document.as_ref()
    }

    /// Locale currently in effect, once ready.
    pub fn effective_code(&self) -> Option<&str> {
        match &self.state {
            GuardState::Ready { code } => Some(code),
            _ => None,
        }
    }

    pub fn is_ready(&self) -> bool {
        matches!(self.state, GuardState::Ready { .. })
    }

    /// Locale the given route is expected to be served in.
    pub fn expected_code<'a>(&'a self, context: RouteContext<'a>) -> &'a str {
        context
            .requested_code()
            .unwrap_or_else(|| self.table.default_code())
    }

    /// Rendering decision for `context`. Content only opens when the guard is
    /// ready for exactly this route's locale, so a stale `Ready` from the
    /// previous page never leaks through.
    pub fn gate(&self, context: RouteContext<'_>) -> Gate {
        let expected = self.expected_code(context);
        match &self.state {
            GuardState::Ready { code } if code == expected => Gate::Open,
            GuardState::Unresolved { requested } if requested == expected => Gate::NotFound,
            _ => Gate::Pending,
        }
    }

    /// Start processing a navigation. Every call starts a new generation,
    /// invalidating any activation still in flight.
    pub fn navigate(&mut self, context: RouteContext<'_>, location: &Location) -> Navigation {
        self.generation += 1;
        let generation = self.generation;

        match resolve(&self.table, context, location) {
            Resolution::Resolved { code } => {
                if self.effective_code() == Some(code.as_str())
                    && self.document.as_ref().map(|d| d.lang()) == Some(code.as_str())
                {
                    return Navigation::Unchanged;
                }
                debug!(%code, generation, "resolving locale");
                self.state = GuardState::Resolving {
                    code: code.clone(),
                    generation,
                };
                Navigation::Activate(Activation { code, generation })
            }
            Resolution::Redirect { target, reason } => {
                info!(from = %location, to = %target, ?reason, "redirecting locale route");
                self.state = GuardState::Redirecting {
                    target: target.clone(),
                    reason,
                };
                Navigation::Redirect(target)
            }
            Resolution::Unsupported { requested } => {
                warn!(%requested, path = %location, "unsupported locale prefix");
                self.state = GuardState::Unresolved { requested };
                Navigation::Unresolved
            }
        }
    }

    /// True while `activation` belongs to the latest navigation.
    pub fn is_current(&self, activation: &Activation) -> bool {
        activation.generation == self.generation
    }

    /// Settle an activation. Returns `true` when this ticket made the guard
    /// ready.
    ///
    /// Stale tickets and failed activations leave the state untouched; a
    /// failed activation keeps the gate pending until the next navigation.
    pub fn complete(&mut self, activation: &Activation, outcome: Result<(), BundleError>) -> bool {
        self.complete_with(activation, outcome, |_| {})
    }

    /// [`complete`](Self::complete), writing the document attributes through
    /// `apply` when they change. `apply` runs before the state becomes
    /// `Ready`, so nothing observes a ready guard with stale attributes.
    pub fn complete_with<F>(
        &mut self,
        activation: &Activation,
        outcome: Result<(), BundleError>,
        apply: F,
    ) -> bool
    where
        F: FnOnce(&DocumentAttributes),
    {
        if !self.is_current(activation) {
            debug!(
                code = %activation.code,
                stale = activation.generation,
                current = self.generation,
                "discarding stale activation"
            );
            return false;
        }

        if let Err(err) = outcome {
            error!(code = %activation.code, %err, "bundle activation failed");
            return false;
        }

        let Some(language) = self.table.get(&activation.code) else {
            // Tickets are only minted for supported codes.
            return false;
        };

        let attributes = DocumentAttributes::for_language(language);
        if self.document.as_ref() != Some(&attributes) {
            apply(&attributes);
            self.document = Some(attributes);
        }
        self.state = GuardState::Ready {
            code: activation.code.clone(),
        };
        true
    }

    /// Ticket that re-activates the locale in effect after `stale` settled.
    ///
    /// A stale activation may have switched the shared bundle after the
    /// current one did. Returns `None` when `stale` is still current, when it
    /// was for the same locale, or when no locale is ready or resolving.
    pub fn resync(&self, stale: &Activation) -> Option<Activation> {
        if self.is_current(stale) {
            return None;
        }
        let code = match &self.state {
            GuardState::Ready { code } | GuardState::Resolving { code, .. } => code,
            _ => return None,
        };
        if *code == stale.code {
            return None;
        }
        debug!(%code, stale = %stale.code, "re-syncing bundle after stale activation");
        Some(Activation {
            code: code.clone(),
            generation: self.generation,
        })
    }

    /// Navigate and, if needed, activate the bundle and complete in one go.
    pub async fn run<P: BundleProvider>(
        &mut self,
        context: RouteContext<'_>,
        location: &Location,
        provider: &P,
    ) -> Navigation {
        let navigation = self.navigate(context, location);
        if let Navigation::Activate(activation) = &navigation {
            let outcome = bundle::activate(provider, activation.code()).await;
            self.complete(activation, outcome);
        }
        navigation
    }
}
