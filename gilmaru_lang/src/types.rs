// Core Gilmaru types: corpus labels, coordinates, grid addresses, and the
// four selected words.
//
// The type hierarchy is:
// - `CorpusLabel` — which of the four word lists (A, B, C, D)
// - `Coordinate` — latitude/longitude in degrees
// - `GridAddress` — coarse block + fine sub-block indices for a coordinate
// - `SelectedWords` — one word per corpus, borrowed from the loaded corpus
//
// `GridAddress` also owns the textual grid code (`X583.Y906.C223.D112`):
// formatting lives here, parsing lives on `GridConfig` because the valid
// range of the C/D parts depends on the configured sub-block resolution.
//
// Determinism constraint: nothing here may depend on hashing order or any
// other source of run-to-run variation.

use serde::{Deserialize, Serialize};
use std::fmt;

/// One of the four word lists.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum CorpusLabel {
    A,
    B,
    C,
    D,
}

impl CorpusLabel {
    /// All labels in selection order.
    pub const ALL: [CorpusLabel; 4] = [CorpusLabel::A, CorpusLabel::B, CorpusLabel::C, CorpusLabel::D];

    /// Position of this corpus in `ALL` (and in `SelectedWords`).
    pub fn index(self) -> usize {
        self as usize
    }

    pub fn as_str(self) -> &'static str {
        match self {
            CorpusLabel::A => "A",
            CorpusLabel::B => "B",
            CorpusLabel::C => "C",
            CorpusLabel::D => "D",
        }
    }
}

impl fmt::Display for CorpusLabel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A point on Earth in floating-point degrees.
///
/// No range is enforced. NaN or infinite components are a caller error and
/// produce meaningless grid addresses.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Coordinate {
    pub lat: f64,
    pub lng: f64,
}

impl Coordinate {
    pub fn new(lat: f64, lng: f64) -> Self {
        Self { lat, lng }
    }
}

/// Discrete grid position of a coordinate.
///
/// `block_x`/`block_y` count whole blocks east/north of the grid origin and
/// are negative west/south of it. `inner_x`/`inner_y` locate the sub-block
/// within that block and are always below the configured resolution.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct GridAddress {
    pub block_x: i64,
    pub block_y: i64,
    pub inner_x: u32,
    pub inner_y: u32,
}

impl GridAddress {
    /// Grid code: `X{block_x}.Y{block_y}.C{inner_x + 1}.D{inner_y + 1}`,
    /// each number zero-padded to three digits.
    pub fn code(&self) -> String {
        format!(
            "X{:03}.Y{:03}.C{:03}.D{:03}",
            self.block_x,
            self.block_y,
            u64::from(self.inner_x) + 1,
            u64::from(self.inner_y) + 1
        )
    }
}

impl fmt::Display for GridAddress {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.code())
    }
}

/// The four words chosen for one grid address, in corpus order A, B, C, D.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SelectedWords<'a> {
    words: [&'a str; 4],
}

impl<'a> SelectedWords<'a> {
    pub fn new(words: [&'a str; 4]) -> Self {
        Self { words }
    }

    /// The word drawn from `label`'s corpus.
    pub fn get(&self, label: CorpusLabel) -> &'a str {
        self.words[label.index()]
    }

    pub fn as_array(&self) -> [&'a str; 4] {
        self.words
    }

    pub fn to_owned_array(&self) -> [String; 4] {
        self.words.map(str::to_string)
    }
}
