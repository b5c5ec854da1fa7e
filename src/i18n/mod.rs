// SPDX-License-Identifier: PMPL-1.0-or-later

//! Language names and codes.
//!
//! Converts between the English name of a language ("French") and its
//! ISO 639-1 code ("fr"). The table is a compile-time constant; nothing is
//! read from the dataset and nothing can be added at runtime.

mod iso639;

use iso639::LANGUAGES;

/// Lookup in both directions over the fixed ISO 639-1 table.
///
/// Both directions ignore case and surrounding whitespace. Unknown input
/// yields `None`.
#[derive(Debug, Clone, Copy, Default)]
pub struct LanguageCodeConverter;

impl LanguageCodeConverter {
    pub fn new() -> Self {
        Self
    }

    /// ISO 639-1 code for an English language name.
    ///
    /// ```
    /// use country_translator::i18n::LanguageCodeConverter;
    /// assert_eq!(LanguageCodeConverter::new().code_for("French"), Some("fr"));
    /// ```
    pub fn code_for(&self, name: &str) -> Option<&'static str> {
        let name = name.trim().to_lowercase();
        LANGUAGES
            .iter()
            .find(|(_, known)| known.to_lowercase() == name)
            .map(|(code, _)| *code)
    }

    /// English name for an ISO 639-1 code.
    pub fn name_for(&self, code: &str) -> Option<&'static str> {
        let code = code.trim();
        LANGUAGES
            .iter()
            .find(|(known, _)| known.eq_ignore_ascii_case(code))
            .map(|(_, name)| *name)
    }
}
