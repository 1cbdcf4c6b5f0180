// Phrase generator: the full coordinate -> phrase pipeline.
//
// `PhraseGenerator` borrows a loaded `WordCorpus` and runs
// locate -> select words -> derive seed -> compose for each request. It holds
// no mutable state: every call creates its own `PhraseRng`, so one generator
// (and one corpus) can serve any number of threads.

use serde::{Deserialize, Serialize};

use crate::WordCorpus;
use crate::compose::{Emphasis, compose};
use crate::error::Result;
use crate::grid::GridConfig;
use crate::select::select_words;
use crate::types::GridAddress;

/// A generated phrase and everything it was derived from.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Phrase {
    pub address: GridAddress,
    /// Grid code, e.g. `X583.Y906.C223.D112`.
    pub code: String,
    pub seed: i64,
    /// Selected words in corpus order A, B, C, D.
    pub words: [String; 4],
    /// Rendered sentence with four emphasised word spans.
    pub sentence: String,
}

#[derive(Debug, Clone)]
pub struct PhraseGenerator<'a> {
    corpus: &'a WordCorpus,
    grid: GridConfig,
    emphasis: Emphasis,
}

impl<'a> PhraseGenerator<'a> {
    /// Generator over `corpus` with the default grid and Markdown emphasis.
    pub fn new(corpus: &'a WordCorpus) -> Self {
        Self {
            corpus,
            grid: GridConfig::default(),
            emphasis: Emphasis::default(),
        }
    }

    pub fn with_grid(mut self, grid: GridConfig) -> Self {
        self.grid = grid;
        self
    }

    pub fn with_emphasis(mut self, emphasis: Emphasis) -> Self {
        self.emphasis = emphasis;
        self
    }

    pub fn grid(&self) -> &GridConfig {
        &self.grid
    }

    /// Phrase for a coordinate. Callers must pass finite values.
    pub fn generate(&self, lat: f64, lng: f64) -> Result<Phrase> {
        self.generate_at(self.grid.locate(lat, lng))
    }

    /// Phrase for an already-located grid address.
    pub fn generate_at(&self, address: GridAddress) -> Result<Phrase> {
        let words = select_words(&address, self.corpus)?;
        let seed = self.grid.derive_seed(&address);
        let sentence = compose(&words, seed, self.emphasis)?;
        let phrase = Phrase {
            address,
            code: address.code(),
            seed,
            words: words.to_owned_array(),
            sentence,
        };
        tracing::debug!(code = %phrase.code, seed, "generated phrase");
        Ok(phrase)
    }
}
