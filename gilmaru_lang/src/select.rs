// Word selection: one word per corpus from a grid address.
//
// With X = block_x, Y = block_y, C = inner_x + 1, D = inner_y + 1:
//
//   A[((X + C) * 11) mod |A|]
//   B[((Y + D) * 17) mod |B|]
//   C[((X + Y + C) * 23) mod |C|]
//   D[((Y + C + D) * 29) mod |D|]
//
// The modulo is Euclidean because X and Y are negative west/south of the grid
// origin. This is a plain deterministic hash; neighbouring cells sometimes
// repeat a word in one corpus, and that is expected.
//
// Keys are computed in `i128`: block indices span the whole `i64` range (a
// parsed grid code or a saturated far-off coordinate), and only the residue
// modulo the corpus length is ever used.

use crate::WordCorpus;
use crate::error::{GilmaruError, Result};
use crate::types::{CorpusLabel, GridAddress, SelectedWords};

const MULTIPLIERS: [i128; 4] = [11, 17, 23, 29];

/// Per-corpus hash keys for `address`, before reduction by corpus length.
pub fn selection_keys(address: &GridAddress) -> [i128; 4] {
    let x = i128::from(address.block_x);
    let y = i128::from(address.block_y);
    let c = i128::from(address.inner_x) + 1;
    let d = i128::from(address.inner_y) + 1;
    let sums = [x + c, y + d, x + y + c, y + c + d];
    [0, 1, 2, 3].map(|i| sums[i] * MULTIPLIERS[i])
}

/// Reduce a key into `[0, len)`. `len` must be non-zero.
fn wrap_index(key: i128, len: usize) -> usize {
    key.rem_euclid(len as i128) as usize
}

/// Pick the four words for `address`. Fails if any corpus is empty.
pub fn select_words<'a>(address: &GridAddress, corpus: &'a WordCorpus) -> Result<SelectedWords<'a>> {
    let keys = selection_keys(address);
    let mut words = [""; 4];
    for label in CorpusLabel::ALL {
        let list = corpus.words(label);
        if list.is_empty() {
            return Err(GilmaruError::EmptyCorpus(label));
        }
        words[label.index()] = list[wrap_index(keys[label.index()], list.len())].as_str();
    }
    Ok(SelectedWords::new(words))
}
