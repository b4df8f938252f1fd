/// This crate is the final aggregation stage of a three-stage TF-IDF pipeline.
/// Earlier stages tokenize documents and emit, per (word, document) pair, a
/// partial record `document=occurrences/totalWords`; this stage groups those
/// records per word, counts document support, and emits one weighted score
/// per (word, document) pair.
pub mod error;
pub mod scorer;

/// Corpus Scorer
/// The top-level struct of this crate.
/// It is constructed with the corpus document count D (run-wide, immutable)
/// and scores WordGroups independently of each other, so it can be shared
/// across threads and driven in parallel.
///
/// Scoring rule per document:
/// - `tf = occurrences / totalWords`
/// - `score = tf * log10(D / n_w)`, or just `tf` when the word appears in
///   every document of the corpus (`n_w == D`)
pub use scorer::CorpusScorer;

/// Partial Frequency Record
/// One per-document partial result from the upstream counting stages, parsed
/// from the wire form `<document>=<occurrences>/<totalWords>`.
pub use scorer::record::PartialFrequencyRecord;

/// Word Group
/// All partial frequency records for one distinct word, in upstream delivery
/// order. The unit of work handed to `CorpusScorer`.
pub use scorer::record::WordGroup;

/// Scored Entry
/// One output record: word, document, and the computed TF-IDF weight.
/// `key()` and `value()` produce the downstream wire encoding
/// (`word@document` and the score formatted to at most 8 fractional digits).
pub use scorer::entry::ScoredEntry;

/// Score Error
/// The error taxonomy of this stage: malformed wire records, zero total word
/// counts, empty groups, and an invalid corpus size. All deterministic, none
/// worth retrying.
pub use error::ScoreError;
