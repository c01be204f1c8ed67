//! Locale resolution for a single navigation.

use super::location::Location;
use super::normalize::{repair_placeholders, strip_locale_prefix};
use super::table::LocaleTable;

/// Which kind of route the location was matched by.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RouteContext<'a> {
    /// Unprefixed route, always served in the default language.
    Default,
    /// Route under a `/{code}` prefix; carries the raw segment.
    Prefixed(&'a str),
}

impl<'a> RouteContext<'a> {
    pub fn from_param(param: Option<&'a str>) -> Self {
        match param {
            Some(code) => Self::Prefixed(code),
            None => Self::Default,
        }
    }

    pub fn requested_code(&self) -> Option<&'a str> {
        match self {
            Self::Default => None,
            Self::Prefixed(code) => Some(code),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RedirectReason {
    /// The default language appeared as a prefix.
    RedundantDefaultPrefix,
    /// The path carried unresolved route-parameter placeholders.
    MalformedSegment,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Resolution {
    Resolved { code: String },
    Redirect { target: Location, reason: RedirectReason },
    Unsupported { requested: String },
}

/// Decide what a navigation to `location` means under `context`.
///
/// Order: redundant default prefix, then support check, then placeholder
/// repair. Placeholder repair only runs for a confirmed supported locale.
pub fn resolve(table: &LocaleTable, context: RouteContext<'_>, location: &Location) -> Resolution {
    let code = match context {
        RouteContext::Default => table.default_code(),
        RouteContext::Prefixed(requested) if table.is_default(requested) => {
            return Resolution::Redirect {
                target: strip_locale_prefix(location),
                reason: RedirectReason::RedundantDefaultPrefix,
            };
        }
        RouteContext::Prefixed(requested) => match table.get(requested) {
            Some(lang) => lang.code.as_str(),
            None => {
                return Resolution::Unsupported {
                    requested: requested.to_string(),
                }
            }
        },
    };

    let prefix = context.requested_code().map(|_| code);
    if let Some(target) = repair_placeholders(location, prefix) {
        return Resolution::Redirect {
            target,
            reason: RedirectReason::MalformedSegment,
        };
    }

    Resolution::Resolved {
        code: code.to_string(),
    }
}
