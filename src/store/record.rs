// SPDX-License-Identifier: PMPL-1.0-or-later

//! Country records and their on-disk representation

use anyhow::{anyhow, Result};
use serde::Deserialize;
use serde_json::{Map, Value};

/// Field holding the country code in every dataset record.
pub const CODE_FIELD: &str = "alpha3";
/// Numeric identifier carried by some datasets; never treated as a language.
pub const ID_FIELD: &str = "id";
/// Language whose translation doubles as the display name of a country.
pub const ENGLISH: &str = "en";

/// A flat dataset object as it appears in the JSON array.
///
/// Language fields are captured in source order so the record keeps the
/// ordering the dataset author wrote.
#[derive(Debug, Deserialize)]
pub(crate) struct RawRecord {
    #[serde(rename = "alpha3")]
    code: Option<String>,
    #[serde(flatten)]
    fields: Map<String, Value>,
}

/// Translations of a single country's name, keyed by lowercase language code.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CountryRecord {
    code: String,
    translations: Vec<(String, String)>,
}

impl CountryRecord {
    pub fn new(code: &str) -> Self {
        Self {
            code: code.to_lowercase(),
            translations: Vec::new(),
        }
    }

    /// Lowercase `alpha3` code of this country.
    pub fn code(&self) -> &str {
        &self.code
    }

    /// Add or replace a translation. A replaced entry keeps its original position.
    pub fn insert(&mut self, language: &str, name: impl Into<String>) {
        let language = language.to_lowercase();
        let name = name.into();
        match self.translations.iter_mut().find(|(code, _)| *code == language) {
            Some(entry) => entry.1 = name,
            None => self.translations.push((language, name)),
        }
    }

    pub fn translation(&self, language: &str) -> Option<&str> {
        let language = language.to_lowercase();
        self.translations
            .iter()
            .find(|(code, _)| *code == language)
            .map(|(_, name)| name.as_str())
    }

    pub fn english_name(&self) -> Option<&str> {
        self.translation(ENGLISH)
    }

    /// Language codes in the order they were inserted.
    pub fn language_codes(&self) -> impl Iterator<Item = &str> {
        self.translations.iter().map(|(code, _)| code.as_str())
    }

    pub fn language_count(&self) -> usize {
        self.translations.len()
    }
}

impl TryFrom<RawRecord> for CountryRecord {
    type Error = anyhow::Error;

    fn try_from(raw: RawRecord) -> Result<Self> {
        let code = raw
            .code
            .ok_or_else(|| anyhow!("record is missing the `{}` field", CODE_FIELD))?;
        if code.trim().is_empty() {
            return Err(anyhow!("record has an empty `{}` field", CODE_FIELD));
        }

        let mut record = CountryRecord::new(code.trim());
        for (key, value) in raw.fields {
            if key == ID_FIELD {
                continue;
            }
            match scalar_text(&value) {
                Some(text) => record.insert(&key, text),
                None => tracing::warn!(
                    country = %record.code,
                    language = %key,
                    "skipping non-scalar translation value"
                ),
            }
        }

        if record.english_name().is_none() {
            tracing::warn!(country = %record.code, "record has no English name");
        }

        Ok(record)
    }
}

/// Textual form of a JSON scalar. `null` reads as an empty name.
fn scalar_text(value: &Value) -> Option<String> {
    match value {
        Value::String(s) => Some(s.clone()),
        Value::Null => Some(String::new()),
        Value::Bool(b) => Some(b.to_string()),
        Value::Number(n) => Some(n.to_string()),
        Value::Array(_) | Value::Object(_) => None,
    }
}
