use thiserror::Error;

/// Errors raised by the scoring stage.
/// All of these are deterministic data or configuration errors, never transient.
/// Retrying reproduces the same failure, so none of them should be retried.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum ScoreError {
    /// Corpus size must be at least 1 before any group is processed.
    #[error("invalid corpus size {0}: a corpus holds at least one document")]
    InvalidCorpusSize(u64),

    /// A partial frequency string did not match `<document>=<occurrences>/<totalWords>`.
    #[error("malformed partial frequency record {raw:?} for word {word:?}: {reason}")]
    Format {
        word: String,
        raw: String,
        reason: &'static str,
    },

    /// A record carried a zero total word count, making TF undefined.
    #[error("zero total word count for word {word:?} in document {document:?}")]
    ZeroTotalWords { word: String, document: String },

    /// A word reached the scorer with no supporting records.
    /// The grouping stage never emits this for a well-formed corpus.
    #[error("word {word:?} arrived with no supporting records")]
    EmptyGroup { word: String },
}
