//! Path rewrites: stripping the redundant default prefix, dropping stray
//! route-parameter placeholders, and building language-switch targets.

use super::history::HistoryUpdate;
use super::location::Location;
use super::table::LocaleTable;

/// True for segments that are an unresolved route parameter, e.g. `:id`
/// or its percent-encoded form `%3Aid`.
pub fn is_placeholder_segment(segment: &str) -> bool {
    segment.starts_with(':')
        || segment
            .get(..3)
            .is_some_and(|head| head.eq_ignore_ascii_case("%3a"))
}

/// Drop the first path segment (the locale prefix).
/// `/en/products?x=1` becomes `/products?x=1`.
pub fn strip_locale_prefix(location: &Location) -> Location {
    let segments = location.segments();
    location.with_segments(segments.into_iter().skip(1))
}

/// Remove placeholder segments from `location`.
///
/// With `Some(locale)` the first segment is the locale prefix: it is not
/// inspected and the result is rebuilt as `/{locale}/{rest}`. With `None`
/// (default-locale routes) every segment is inspected and no prefix is added.
///
/// Returns `None` when nothing had to be removed.
pub fn repair_placeholders(location: &Location, locale: Option<&str>) -> Option<Location> {
    let segments = location.segments();
    let skip = usize::from(locale.is_some()).min(segments.len());
    let candidates = &segments[skip..];
    let kept: Vec<&str> = candidates
        .iter()
        .copied()
        .filter(|s| !is_placeholder_segment(s))
        .collect();

    if kept.len() == candidates.len() {
        return None;
    }

    Some(location.with_segments(locale.into_iter().chain(kept)))
}

/// Location of the same page in language `code`.
///
/// Any supported prefix already on the path is replaced; the default
/// language gets no prefix.
pub fn localized_location(table: &LocaleTable, code: &str, location: &Location) -> Location {
    let segments = location.segments();
    let rest = match segments.first() {
        Some(first) if table.is_supported(first) => &segments[1..],
        _ => &segments[..],
    };
    let prefix = (!table.is_default(code)).then_some(code);
    location.with_segments(prefix.into_iter().chain(rest.iter().copied()))
}

/// History update for the language switcher: the same page in `code`,
/// pushed as a new entry.
pub fn switch_language(table: &LocaleTable, code: &str, location: &Location) -> HistoryUpdate {
    HistoryUpdate::Push(localized_location(table, code, location))
}
