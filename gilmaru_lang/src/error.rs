// Error type shared by every stage of the phrase pipeline.
//
// Generation is all-or-nothing: each stage returns `Result<T>` and the first
// failure is surfaced to the caller unchanged. Nothing here is retryable,
// since every stage is a pure function of its input.

use thiserror::Error;

use crate::types::CorpusLabel;

#[derive(Debug, Error)]
pub enum GilmaruError {
    /// A corpus needed for selection has no words.
    #[error("corpus {0} is empty")]
    EmptyCorpus(CorpusLabel),

    /// An empty string reached particle resolution.
    #[error("cannot resolve a particle for an empty word")]
    InvalidWord,

    /// A josa family name outside the five supported families.
    #[error("unknown josa family {0:?}")]
    UnknownFamily(String),

    #[error("corpus {label} lists {word:?} more than once")]
    DuplicateWord { label: CorpusLabel, word: String },

    #[error("corpora {first} and {second} both contain {word:?}")]
    OverlappingCorpora {
        first: CorpusLabel,
        second: CorpusLabel,
        word: String,
    },

    /// A grid config that cannot bin coordinates.
    #[error("invalid grid config: {0}")]
    InvalidConfig(String),

    #[error("invalid grid code {code:?}: {reason}")]
    InvalidCode { code: String, reason: String },

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

pub type Result<T> = std::result::Result<T, GilmaruError>;
