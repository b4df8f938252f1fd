use serde::{Deserialize, Serialize};

/// One scored (word, document) pair, the output unit of the stage.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
pub struct ScoredEntry {
    pub word: String,
    pub document: String,
    /// TF-IDF weight, f64 all the way through
    pub score: f64,
}

impl ScoredEntry {
    pub fn new(word: impl Into<String>, document: impl Into<String>, score: f64) -> Self {
        Self {
            word: word.into(),
            document: document.into(),
            score,
        }
    }

    /// Output key for the downstream stage: `<word>@<document>`.
    #[inline]
    pub fn key(&self) -> String {
        format!("{}@{}", self.word, self.document)
    }

    /// Output value for the downstream stage: the formatted score.
    #[inline]
    pub fn value(&self) -> String {
        format_score(self.score)
    }
}

/// Format a score with at most 8 fractional digits, standard rounding,
/// trailing zeros trimmed. `0.2` stays `0.2`, `1.0` becomes `1`.
pub fn format_score(score: f64) -> String {
    let fixed = format!("{score:.8}");
    fixed.trim_end_matches('0').trim_end_matches('.').to_string()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn key_joins_word_and_document() {
        let entry = ScoredEntry::new("ant", "d1", 0.2);
        assert_eq!(entry.key(), "ant@d1");
    }

    #[test]
    fn format_trims_trailing_zeros() {
        assert_eq!(format_score(0.2), "0.2");
        assert_eq!(format_score(1.5), "1.5");
        assert_eq!(format_score(0.25), "0.25");
    }

    #[test]
    fn format_drops_dangling_point() {
        assert_eq!(format_score(1.0), "1");
        assert_eq!(format_score(0.0), "0");
        assert_eq!(format_score(42.0), "42");
    }

    #[test]
    fn format_rounds_to_eight_digits() {
        assert_eq!(format_score(0.024987747321659984), "0.02498775");
        assert_eq!(format_score(0.123456789), "0.12345679");
    }

    #[test]
    fn format_never_exceeds_eight_fractional_digits() {
        for score in [0.1, 1.0 / 3.0, 0.000000004, 12.000000015, 0.99999999999] {
            let value = format_score(score);
            let fractional = value.split('.').nth(1).unwrap_or("");
            assert!(fractional.len() <= 8, "{score} formatted as {value}");
            assert!(!value.ends_with('0') || !value.contains('.'), "{value}");
        }
    }

    #[test]
    fn format_is_deterministic() {
        let score = (2.0f64 / 10.0) * (4.0f64 / 3.0).log10();
        assert_eq!(format_score(score), format_score(score));
    }
}
