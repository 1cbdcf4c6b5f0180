// Gilmaru: every place on Earth has its own four-word Korean phrase.
//
// Turns a latitude/longitude into a grid address, picks one word from each of
// four fixed corpora, and arranges them into a short sentence with the right
// particles. The same coordinate always produces the same words and the same
// sentence. No I/O: the corpus is handed in as a JSON string or built by the
// caller.
//
// Architecture:
// - `types.rs`: Core types — `CorpusLabel`, `Coordinate`, `GridAddress`, `SelectedWords`
// - `grid.rs`: `GridConfig` — coordinate -> address, seed derivation, cell geometry, code parsing
// - `select.rs`: Word selection hash over the four corpora
// - `josa.rs`: Final-consonant test and the five particle families
// - `compose.rs`: Seeded shuffle + template choice + sentence rendering
// - `audit.rs`: Overlap/duplicate/sort-order report for a corpus
// - `phrase.rs`: `PhraseGenerator` — the full pipeline
// - `error.rs`: `GilmaruError` and the crate `Result`
// - `lib.rs` (this file): `WordCorpus` — loads and validates the four word lists
//
// The corpus is loaded from JSON via `WordCorpus::from_json()` (JSON string in,
// validated struct out). `default_corpus()` embeds `data/word_corpus.json` at
// compile time with `include_str!`.
//
// Determinism constraint: all randomness goes through `gilmaru_prng::PhraseRng`,
// seeded from the grid address. No HashMap iteration, no system RNG.

pub mod audit;
pub mod compose;
pub mod error;
pub mod grid;
pub mod josa;
pub mod phrase;
pub mod select;
pub mod types;

#[cfg(test)]
mod test_support;

// Re-export key types at crate root for convenience.
pub use audit::CorpusReport;
pub use compose::{Arrangement, Emphasis, compose};
pub use error::{GilmaruError, Result};
pub use grid::{GridConfig, derive_seed, locate};
pub use josa::{JosaFamily, has_final_consonant, particle};
pub use phrase::{Phrase, PhraseGenerator};
pub use select::select_words;
pub use types::{Coordinate, CorpusLabel, GridAddress, SelectedWords};

/// The top-level JSON structure for a corpus file.
#[derive(Debug, serde::Deserialize)]
struct CorpusFile {
    #[serde(rename = "A")]
    a: Vec<String>,
    #[serde(rename = "B")]
    b: Vec<String>,
    #[serde(rename = "C")]
    c: Vec<String>,
    #[serde(rename = "D")]
    d: Vec<String>,
}

/// The four word lists, A..D, in file order.
///
/// Immutable once built. Word selection borrows from it, so a single corpus
/// can back any number of concurrent generators.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct WordCorpus {
    lists: [Vec<String>; 4],
}

impl WordCorpus {
    /// Build a corpus without validation.
    ///
    /// Selection still reports `EmptyCorpus`, but overlap and duplicate
    /// checks are the caller's responsibility. Prefer `from_json` for data.
    pub fn new(a: Vec<String>, b: Vec<String>, c: Vec<String>, d: Vec<String>) -> Self {
        WordCorpus { lists: [a, b, c, d] }
    }

    /// Parse and validate a corpus from `{"A": [...], "B": [...], ...}`.
    ///
    /// Entries are trimmed and blank entries dropped. Fails if any corpus
    /// ends up empty, repeats a word, or shares a word with another corpus.
    pub fn from_json(json: &str) -> Result<Self> {
        let file: CorpusFile = serde_json::from_str(json)?;
        let clean = |words: Vec<String>| -> Vec<String> {
            words
                .into_iter()
                .map(|w| w.trim().to_string())
                .filter(|w| !w.is_empty())
                .collect()
        };
        let corpus = WordCorpus::new(clean(file.a), clean(file.b), clean(file.c), clean(file.d));
        corpus.validate()?;
        tracing::info!(
            a = corpus.lists[0].len(),
            b = corpus.lists[1].len(),
            c = corpus.lists[2].len(),
            d = corpus.lists[3].len(),
            "loaded word corpus"
        );
        Ok(corpus)
    }

    /// Check the invariants the pipeline relies on, reporting the first
    /// violation: empty corpus, then repeated word, then overlap.
    pub fn validate(&self) -> Result<()> {
        for label in CorpusLabel::ALL {
            if self.words(label).is_empty() {
                return Err(GilmaruError::EmptyCorpus(label));
            }
        }

        let report = self.audit();
        if let Some(dup) = report.duplicates.first() {
            return Err(GilmaruError::DuplicateWord {
                label: dup.label,
                word: dup.words[0].clone(),
            });
        }
        if let Some(overlap) = report.overlaps.first() {
            return Err(GilmaruError::OverlappingCorpora {
                first: overlap.first,
                second: overlap.second,
                word: overlap.words[0].clone(),
            });
        }
        for unsorted in &report.unsorted {
            tracing::warn!(
                corpus = %unsorted.label,
                index = unsorted.index,
                "corpus is not in sorted order"
            );
        }
        Ok(())
    }

    /// The words of one corpus, in file order.
    pub fn words(&self, label: CorpusLabel) -> &[String] {
        &self.lists[label.index()]
    }

    /// Full hygiene report: every overlap, duplicate, and sort break.
    pub fn audit(&self) -> CorpusReport {
        audit::audit([
            self.words(CorpusLabel::A),
            self.words(CorpusLabel::B),
            self.words(CorpusLabel::C),
            self.words(CorpusLabel::D),
        ])
    }
}

/// Load the default corpus embedded at compile time.
///
/// Uses `include_str!` to embed `data/word_corpus.json`. Panics if the
/// embedded corpus is malformed or fails validation (should never happen in
/// a released build).
pub fn default_corpus() -> WordCorpus {
    let json = include_str!("../../data/word_corpus.json");
    WordCorpus::from_json(json).expect("embedded word_corpus.json is invalid")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_corpus_from_json() {
        let json = r#"{
            "A": ["가을", "나무"],
            "B": ["구름"],
            "C": ["노래", "편지", "희망"],
            "D": ["미소"]
        }"#;
        let corpus = WordCorpus::from_json(json).unwrap();
        assert_eq!(corpus.words(CorpusLabel::A).len(), 2);
        assert_eq!(corpus.words(CorpusLabel::C).len(), 3);
    }

    #[test]
    fn test_corpus_preserves_order() {
        let json = r#"{"A": ["하늘", "가을"], "B": ["구름"], "C": ["노래"], "D": ["미소"]}"#;
        let corpus = WordCorpus::from_json(json).unwrap();
        assert_eq!(corpus.words(CorpusLabel::A)[0], "하늘");
        assert_eq!(corpus.words(CorpusLabel::A)[1], "가을");
    }

    #[test]
    fn test_corpus_trims_and_drops_blanks() {
        let json = r#"{"A": [" 가을 ", "", "  "], "B": ["구름"], "C": ["노래"], "D": ["미소"]}"#;
        let corpus = WordCorpus::from_json(json).unwrap();
        assert_eq!(corpus.words(CorpusLabel::A), ["가을".to_string()]);
    }

    #[test]
    fn test_corpus_rejects_empty_list() {
        let json = r#"{"A": ["가을"], "B": ["구름"], "C": [""], "D": ["미소"]}"#;
        assert!(matches!(
            WordCorpus::from_json(json),
            Err(GilmaruError::EmptyCorpus(CorpusLabel::C))
        ));
    }

    #[test]
    fn test_corpus_rejects_duplicates() {
        let json = r#"{"A": ["가을", "가을"], "B": ["구름"], "C": ["노래"], "D": ["미소"]}"#;
        match WordCorpus::from_json(json) {
            Err(GilmaruError::DuplicateWord { label, word }) => {
                assert_eq!(label, CorpusLabel::A);
                assert_eq!(word, "가을");
            }
            other => panic!("expected DuplicateWord, got {other:?}"),
        }
    }

    #[test]
    fn test_corpus_rejects_overlap() {
        let json = r#"{"A": ["가을"], "B": ["구름"], "C": ["노래"], "D": ["구름"]}"#;
        match WordCorpus::from_json(json) {
            Err(GilmaruError::OverlappingCorpora { first, second, word }) => {
                assert_eq!((first, second), (CorpusLabel::B, CorpusLabel::D));
                assert_eq!(word, "구름");
            }
            other => panic!("expected OverlappingCorpora, got {other:?}"),
        }
    }

    #[test]
    fn test_corpus_missing_key_is_json_error() {
        let json = r#"{"A": ["가을"], "B": ["구름"], "C": ["노래"]}"#;
        assert!(matches!(WordCorpus::from_json(json), Err(GilmaruError::Json(_))));
    }

    #[test]
    fn test_default_corpus_loads() {
        let corpus = default_corpus();
        for label in CorpusLabel::ALL {
            assert!(
                corpus.words(label).len() >= 20,
                "Expected >= 20 words in corpus {label}, got {}",
                corpus.words(label).len()
            );
        }
    }

    #[test]
    fn test_default_corpus_is_clean_and_sorted() {
        let report = default_corpus().audit();
        assert!(report.is_clean(), "{report:?}");
        assert!(report.unsorted.is_empty(), "{report:?}");
    }

    #[test]
    fn test_corpus_is_shareable_across_threads() {
        fn assert_sync<T: Sync + Send>() {}
        assert_sync::<WordCorpus>();
    }
}
