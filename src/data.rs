// src/data.rs
//
// Extracted records.
//
// - HeroRecord:   one hero page, built once and never mutated.
// - Dataset:      hero name → record, sorted so output is byte-stable.
// - BatchReport:  what a scrape run produced, successes and failures.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use crate::error::ScrapeError;

pub type Fields = BTreeMap<String, String>;
pub type Dataset = BTreeMap<String, HeroRecord>;

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct HeroRecord {
    pub health: u32,
    pub armor: u32,
    pub shield: u32,
    #[serde(rename = "type")]
    pub hero_type: String,
    pub bio: Fields,
    pub abilities: BTreeMap<String, AbilityRecord>,
}

/// Serialized flat: `{ "description": ..., "<attr>": "<value>", ... }`.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct AbilityRecord {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(flatten)]
    pub attributes: Fields,
}

/// A hero that could not be extracted, with the error class.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct SubjectFailure {
    pub hero: String,
    pub kind: String,
    pub message: String,
}

impl SubjectFailure {
    pub fn new(hero: &str, err: &ScrapeError) -> Self {
        Self { hero: s!(hero), kind: s!(err.kind()), message: err.to_string() }
    }
}

#[derive(Clone, Debug, Default)]
pub struct BatchReport {
    pub dataset: Dataset,
    /// In the order the heroes were requested.
    pub failures: Vec<SubjectFailure>,
}

impl BatchReport {
    pub fn is_complete(&self) -> bool {
        self.failures.is_empty()
    }

    /// Fill in records for failed heroes from an earlier dataset.
    /// Returns the heroes that were carried over.
    pub fn keep_previous(&mut self, previous: &Dataset) -> Vec<String> {
        let mut carried = Vec::new();
        for f in &self.failures {
            if let Some(rec) = previous.get(&f.hero) {
                self.dataset.entry(f.hero.clone()).or_insert_with(|| rec.clone());
                carried.push(f.hero.clone());
            }
        }
        carried
    }
}
