//! Static table of languages the site is served in.

use once_cell::sync::Lazy;
use serde::Deserialize;
use thiserror::Error;

/// Bundled site configuration (`ui/locales.json`).
const SITE_LOCALES_JSON: &str = include_str!("../../locales.json");

/// Process-wide locale table, parsed once from the bundled configuration.
pub static SITE_LOCALES: Lazy<LocaleTable> = Lazy::new(|| {
    LocaleTable::from_json(SITE_LOCALES_JSON).expect("bundled locales.json is a valid locale table")
});

/// Text direction of a language, as written to the document `dir` attribute.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Direction {
    Ltr,
    Rtl,
}

impl Direction {
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Ltr => "ltr",
            Self::Rtl => "rtl",
        }
    }
}

impl std::fmt::Display for Direction {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct SupportedLanguage {
    pub code: String,
    #[serde(rename = "isRTL", default)]
    pub is_rtl: bool,
}

impl SupportedLanguage {
    pub fn new(code: impl Into<String>, is_rtl: bool) -> Self {
        Self {
            code: code.into(),
            is_rtl,
        }
    }

    pub fn direction(&self) -> Direction {
        if self.is_rtl {
            Direction::Rtl
        } else {
            Direction::Ltr
        }
    }
}

#[derive(Debug, Error)]
pub enum LocaleTableError {
    #[error("locale table has no languages")]
    Empty,
    #[error("invalid language code {0:?}")]
    InvalidCode(String),
    #[error("language code {0:?} is listed more than once")]
    DuplicateCode(String),
    #[error("default language {0:?} is not in the table")]
    UnknownDefault(String),
    #[error("malformed locale configuration: {0}")]
    Parse(#[from] serde_json::Error),
}

#[derive(Debug, Deserialize)]
struct LocaleConfig {
    default: String,
    languages: Vec<SupportedLanguage>,
}

/// Ordered, validated set of supported languages plus the default (unprefixed) one.
///
/// Built once at startup and never mutated afterwards.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LocaleTable {
    languages: Vec<SupportedLanguage>,
    default_code: String,
}

impl LocaleTable {
    pub fn new(
        languages: Vec<SupportedLanguage>,
        default_code: &str,
    ) -> Result<Self, LocaleTableError> {
        if languages.is_empty() {
            return Err(LocaleTableError::Empty);
        }
        for (idx, lang) in languages.iter().enumerate() {
            if !is_valid_code(&lang.code) {
                return Err(LocaleTableError::InvalidCode(lang.code.clone()));
            }
            if languages[..idx].iter().any(|l| l.code == lang.code) {
                return Err(LocaleTableError::DuplicateCode(lang.code.clone()));
            }
        }
        if !languages.iter().any(|l| l.code == default_code) {
            return Err(LocaleTableError::UnknownDefault(default_code.to_string()));
        }
        Ok(Self {
            languages,
            default_code: default_code.to_string(),
        })
    }

    /// Parse `{"default": "en", "languages": [{"code": "en", "isRTL": false}, ...]}`.
    pub fn from_json(raw: &str) -> Result<Self, LocaleTableError> {
        let config: LocaleConfig = serde_json::from_str(raw)?;
        Self::new(config.languages, &config.default)
    }

    pub fn languages(&self) -> &[SupportedLanguage] {
        &self.languages
    }

    pub fn default_code(&self) -> &str {
        &self.default_code
    }

    pub fn default_language(&self) -> &SupportedLanguage {
        // Presence is checked in `new`.
        self.languages
            .iter()
            .find(|l| l.code == self.default_code)
            .unwrap_or(&self.languages[0])
    }

    pub fn get(&self, code: &str) -> Option<&SupportedLanguage> {
        self.languages.iter().find(|l| l.code == code)
    }

    pub fn is_supported(&self, code: &str) -> bool {
        self.get(code).is_some()
    }

    pub fn is_default(&self, code: &str) -> bool {
        self.default_code == code
    }

    /// Languages that are served under a `/{code}` prefix.
    pub fn prefixed(&self) -> impl Iterator<Item = &SupportedLanguage> {
        self.languages.iter().filter(|l| l.code != self.default_code)
    }
}

fn is_valid_code(code: &str) -> bool {
    !code.is_empty()
        && !code.starts_with('-')
        && code.chars().all(|c| c.is_ascii_alphanumeric() || c == '-')
}
