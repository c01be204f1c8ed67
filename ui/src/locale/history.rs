//! How a locale-driven location change is written to browser history.

use super::location::Location;

/// History entry the router should write.
///
/// Corrections made by the guard (redundant default prefix, placeholder
/// repair) replace the current entry so the back button never returns to the
/// malformed URL. A language picked by the user is a new page and is pushed.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum HistoryUpdate {
    Replace(Location),
    Push(Location),
}

impl HistoryUpdate {
    pub fn location(&self) -> &Location {
        match self {
            HistoryUpdate::Replace(location) | HistoryUpdate::Push(location) => location,
        }
    }

    pub fn is_replace(&self) -> bool {
        matches!(self, HistoryUpdate::Replace(_))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn location_is_shared_by_both_kinds() {
        let to = Location::parse("/fr/products?x=1");
        assert_eq!(HistoryUpdate::Replace(to.clone()).location(), &to);
        assert_eq!(HistoryUpdate::Push(to.clone()).location(), &to);
        assert!(HistoryUpdate::Replace(to.clone()).is_replace());
        assert!(!HistoryUpdate::Push(to).is_replace());
    }
}
