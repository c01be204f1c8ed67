//! URL location split into path, query and fragment.

use std::fmt;

/// A site-relative location. `query` keeps its leading `?` and `fragment`
/// its leading `#`, so `to_string()` reproduces the input exactly.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct Location {
    path: String,
    query: String,
    fragment: String,
}

impl Location {
    /// Split a raw `path?query#fragment` string. An empty path becomes `/`.
    pub fn parse(raw: &str) -> Self {
        let (rest, fragment) = match raw.find('#') {
            Some(idx) => raw.split_at(idx),
            None => (raw, ""),
        };
        let (path, query) = match rest.find('?') {
            Some(idx) => rest.split_at(idx),
            None => (rest, ""),
        };
        Self {
            path: if path.is_empty() {
                "/".to_string()
            } else {
                path.to_string()
            },
            query: query.to_string(),
            fragment: fragment.to_string(),
        }
    }

    pub fn path(&self) -> &str {
        &self.path
    }

    pub fn query(&self) -> &str {
        &self.query
    }

    pub fn fragment(&self) -> &str {
        &self.fragment
    }

    /// Non-empty `/`-delimited path segments.
    pub fn segments(&self) -> Vec<&str> {
        self.path.split('/').filter(|s| !s.is_empty()).collect()
    }

    /// Same query and fragment under a new path built from `segments`.
    pub fn with_segments<'a>(&self, segments: impl IntoIterator<Item = &'a str>) -> Self {
        let joined = segments.into_iter().collect::<Vec<_>>().join("/");
        Self {
            path: format!("/{joined}"),
            query: self.query.clone(),
            fragment: self.fragment.clone(),
        }
    }
}

impl fmt::Display for Location {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}{}{}", self.path, self.query, self.fragment)
    }
}

impl From<&str> for Location {
    fn from(raw: &str) -> Self {
        Self::parse(raw)
    }
}
