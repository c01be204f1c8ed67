//! Document-level language attributes owned by the locale guard.

use super::table::{Direction, SupportedLanguage};

/// Values for `<html lang=… dir=…>`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DocumentAttributes {
    lang: String,
    dir: Direction,
}

impl DocumentAttributes {
    pub fn for_language(language: &SupportedLanguage) -> Self {
        Self {
            lang: language.code.clone(),
            dir: language.direction(),
        }
    }

    pub fn lang(&self) -> &str {
        &self.lang
    }

    pub fn dir(&self) -> Direction {
        self.dir
    }
}
