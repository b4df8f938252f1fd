pub mod entry;
pub mod record;

use indexmap::IndexMap;
use log::{debug, warn};
use rayon::prelude::*;

use crate::error::ScoreError;
use self::entry::ScoredEntry;
use self::record::{PartialFrequencyRecord, WordGroup};

/// Corpus-level TF-IDF scorer, the final stage of the weighting pipeline.
///
/// Holds the one piece of run-wide configuration, the corpus document count D,
/// and turns each WordGroup into one scored entry per supporting document:
///
/// - `tf  = occurrences / total_words` for that document
/// - `idf = D / n_w` where `n_w` is the word's document support
/// - `score = tf * log10(idf)`, except `score = tf` when `n_w == D`
///   (log10 of 1 is exactly zero; the raw term frequency is emitted instead
///   of collapsing every ubiquitous word to 0)
///
/// The scorer is stateless across groups, so any number of groups can be
/// scored concurrently against the same instance.
#[derive(Debug, Clone)]
pub struct CorpusScorer {
    /// total number of documents in the corpus, fixed for the run
    corpus_size: u64,
}

impl CorpusScorer {
    /// Create a scorer for a corpus of `corpus_size` documents.
    /// Fails fast on an empty corpus, before any group is processed.
    pub fn new(corpus_size: u64) -> Result<Self, ScoreError> {
        if corpus_size == 0 {
            return Err(ScoreError::InvalidCorpusSize(corpus_size));
        }
        Ok(Self { corpus_size })
    }

    #[inline]
    pub fn corpus_size(&self) -> u64 {
        self.corpus_size
    }

    /// Score one word's group of per-document records.
    ///
    /// The support count `n_w` is the number of raw records delivered for the
    /// word, counted before deduplication. If upstream ever emits the same
    /// document twice, the later record wins the dedup map but the support
    /// count still includes both — the historical behavior of this stage,
    /// kept byte-compatible and logged instead of silently accepted.
    pub fn score_group(&self, group: &WordGroup) -> Result<Vec<ScoredEntry>, ScoreError> {
        if group.records.is_empty() {
            return Err(ScoreError::EmptyGroup {
                word: group.word.clone(),
            });
        }

        let mut by_document: IndexMap<&str, &PartialFrequencyRecord> =
            IndexMap::with_capacity(group.records.len());
        let mut support: u64 = 0;
        for record in &group.records {
            support += 1;
            if by_document.insert(record.document.as_str(), record).is_some() {
                warn!(
                    "duplicate document {:?} in group {:?}: keeping the later record, \
                     support count includes both",
                    record.document, group.word
                );
            }
        }

        let mut entries = Vec::with_capacity(by_document.len());
        for (document, record) in &by_document {
            if record.total_words == 0 {
                return Err(ScoreError::ZeroTotalWords {
                    word: group.word.clone(),
                    document: (*document).to_string(),
                });
            }
            let tf = record.occurrences as f64 / record.total_words as f64;
            let score = if self.corpus_size == support {
                // word appears in every document, idf is exactly 1 and
                // log10 would zero everything out
                tf
            } else {
                let idf = self.corpus_size as f64 / support as f64;
                tf * idf.log10()
            };
            entries.push(ScoredEntry::new(group.word.clone(), *document, score));
        }

        debug!(
            "scored word {:?}: support {}/{}, {} entries",
            group.word,
            support,
            self.corpus_size,
            entries.len()
        );
        Ok(entries)
    }

    /// Score one group straight from its wire strings
    /// (`<document>=<occurrences>/<totalWords>` each).
    pub fn score_raw_group<S>(&self, word: &str, values: &[S]) -> Result<Vec<ScoredEntry>, ScoreError>
    where
        S: AsRef<str>,
    {
        let group = WordGroup::parse(word, values)?;
        self.score_group(&group)
    }

    /// Score many groups in parallel, one rayon task per group.
    /// Groups are independent, so this is a plain parallel map; the first
    /// failing group aborts the whole run with its error.
    pub fn score_groups(&self, groups: &[WordGroup]) -> Result<Vec<ScoredEntry>, ScoreError> {
        let scored: Vec<Vec<ScoredEntry>> = groups
            .par_iter()
            .map(|group| self.score_group(group))
            .collect::<Result<_, _>>()?;
        Ok(scored.into_iter().flatten().collect())
    }
}
