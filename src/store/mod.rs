// SPDX-License-Identifier: PMPL-1.0-or-later

//! In-memory translation store
//!
//! Loads a JSON array of flat country records, each keyed by an `alpha3`
//! code and carrying one field per language:
//!
//! ```json
//! [{ "id": 124, "alpha3": "can", "en": "Canada", "fr": "Canada" }]
//! ```
//!
//! The store is built once and never mutated afterwards. All lookups are
//! case-insensitive; codes are kept lowercase internally.

mod record;

pub use record::{CountryRecord, CODE_FIELD, ENGLISH, ID_FIELD};

use anyhow::{Context, Result};
use record::RawRecord;
use std::collections::BTreeMap;
use std::fs::File;
use std::io::{BufReader, Read};
use std::path::Path;

/// Dataset compiled into the binary, used when no path is configured.
const EMBEDDED_DATASET: &str = include_str!("../../data/sample.json");

/// Read-only queries the interactive session needs.
pub trait Translator {
    /// Every known country code.
    fn countries(&self) -> Vec<String>;

    /// Language codes a country can be shown in. Empty for unknown countries.
    fn languages_for(&self, country: &str) -> Vec<String>;

    /// Name of `country` in `language`, if both are known.
    fn translate(&self, country: &str, language: &str) -> Option<String>;
}

#[derive(Debug, Clone, Default)]
pub struct TranslationStore {
    records: BTreeMap<String, CountryRecord>,
}

impl TranslationStore {
    /// Load the dataset bundled with the binary.
    pub fn embedded() -> Result<Self> {
        Self::from_json_str(EMBEDDED_DATASET).context("parsing bundled dataset")
    }

    pub fn from_path(path: &Path) -> Result<Self> {
        let file = File::open(path)
            .with_context(|| format!("opening dataset {}", path.display()))?;
        Self::from_reader(BufReader::new(file))
            .with_context(|| format!("loading dataset {}", path.display()))
    }

    pub fn from_reader<R: Read>(reader: R) -> Result<Self> {
        let raw: Vec<RawRecord> =
            serde_json::from_reader(reader).context("parsing dataset JSON")?;
        Self::from_raw(raw)
    }

    pub fn from_json_str(data: &str) -> Result<Self> {
        let raw: Vec<RawRecord> = serde_json::from_str(data).context("parsing dataset JSON")?;
        Self::from_raw(raw)
    }

    /// Build a store from records that are already in memory.
    pub fn from_records(records: impl IntoIterator<Item = CountryRecord>) -> Self {
        let mut store = Self::default();
        for record in records {
            store.insert(record);
        }
        store
    }

    fn from_raw(raw: Vec<RawRecord>) -> Result<Self> {
        let mut records = Vec::with_capacity(raw.len());
        for (index, entry) in raw.into_iter().enumerate() {
            let record = CountryRecord::try_from(entry)
                .with_context(|| format!("invalid record at index {}", index))?;
            records.push(record);
        }
        let store = Self::from_records(records);
        tracing::info!(countries = store.len(), "translation store loaded");
        Ok(store)
    }

    fn insert(&mut self, record: CountryRecord) {
        let code = record.code().to_string();
        if self.records.insert(code.clone(), record).is_some() {
            tracing::warn!(country = %code, "duplicate country code, keeping the later record");
        }
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    pub fn record(&self, country: &str) -> Option<&CountryRecord> {
        self.records.get(&country.to_lowercase())
    }
}

impl Translator for TranslationStore {
    fn countries(&self) -> Vec<String> {
        self.records.keys().cloned().collect()
    }

    /// The first language listed for a country is never offered, and a
    /// country with a single language offers none. Existing datasets and
    /// transcripts depend on this.
    fn languages_for(&self, country: &str) -> Vec<String> {
        match self.record(country) {
            Some(record) if record.language_count() > 1 => record
                .language_codes()
                .skip(1)
                .map(str::to_string)
                .collect(),
            _ => Vec::new(),
        }
    }

    fn translate(&self, country: &str, language: &str) -> Option<String> {
        self.record(country)
            .and_then(|record| record.translation(language))
            .map(str::to_string)
    }
}
