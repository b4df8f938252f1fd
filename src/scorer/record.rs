use serde::{Deserialize, Serialize};

use crate::error::ScoreError;

/// One per-document partial frequency produced by the earlier pipeline stages.
/// Wire form: `<document>=<occurrences>/<totalWords>`, e.g. `doc3=7/120`.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq)]
pub struct PartialFrequencyRecord {
    /// document identifier
    pub document: String,
    /// how many times the word occurs in the document
    pub occurrences: u64,
    /// total word count of the document
    pub total_words: u64,
}

impl PartialFrequencyRecord {
    pub fn new(document: impl Into<String>, occurrences: u64, total_words: u64) -> Self {
        Self {
            document: document.into(),
            occurrences,
            total_words,
        }
    }

    /// Parse one wire string. Split once on `=` to separate the document from
    /// the fraction, split the fraction once on `/`, then parse both sides as
    /// unsigned integers. `word` is only carried into the error context.
    pub fn parse(word: &str, raw: &str) -> Result<Self, ScoreError> {
        let format_err = |reason| ScoreError::Format {
            word: word.to_string(),
            raw: raw.to_string(),
            reason,
        };

        let (document, fraction) = raw.split_once('=').ok_or_else(|| format_err("missing '=' separator"))?;
        let (occurrences, total_words) = fraction
            .split_once('/')
            .ok_or_else(|| format_err("missing '/' separator"))?;

        Ok(Self {
            document: document.to_string(),
            occurrences: occurrences
                .parse()
                .map_err(|_| format_err("occurrence count is not an unsigned integer"))?,
            total_words: total_words
                .parse()
                .map_err(|_| format_err("total word count is not an unsigned integer"))?,
        })
    }
}

/// All partial frequency data for one distinct word, gathered across the corpus.
/// The records keep the upstream delivery order; the collection is semantically
/// an unordered multiset, but encounter order decides which duplicate wins.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq)]
pub struct WordGroup {
    pub word: String,
    pub records: Vec<PartialFrequencyRecord>,
}

impl WordGroup {
    pub fn new(word: impl Into<String>, records: Vec<PartialFrequencyRecord>) -> Self {
        Self {
            word: word.into(),
            records,
        }
    }

    /// Build a group from raw wire strings, failing on the first malformed one.
    pub fn parse<S>(word: &str, values: &[S]) -> Result<Self, ScoreError>
    where
        S: AsRef<str>,
    {
        let records = values
            .iter()
            .map(|value| PartialFrequencyRecord::parse(word, value.as_ref()))
            .collect::<Result<Vec<_>, _>>()?;
        Ok(Self::new(word, records))
    }

    /// Number of raw records delivered for this word, duplicates included.
    #[inline]
    pub fn record_count(&self) -> usize {
        self.records.len()
    }
}
