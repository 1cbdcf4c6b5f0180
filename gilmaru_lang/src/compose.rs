// Sentence composer: arranges the four selected words into a Korean phrase.
//
// Each phrase is rendered from one of five fixed templates. The word order
// and the template are both drawn from a `PhraseRng` seeded from the grid
// address, always in the same order:
// 1. Shuffle the positions [0, 1, 2, 3] (three draws, Fisher–Yates)
// 2. Pick the template index in 0..5 (one draw)
//
// That draw order is part of the output contract. Particles are resolved
// against the bare word (see `josa.rs`); the emphasis wrapper is applied
// only to the word span itself.
//
// Depends on `types.rs` for `SelectedWords` and `gilmaru_prng` for the
// sequencer.

use gilmaru_prng::PhraseRng;
use serde::{Deserialize, Serialize};

use crate::error::Result;
use crate::josa::{JosaFamily, particle};
use crate::types::SelectedWords;

/// Number of sentence templates.
pub const TEMPLATE_COUNT: usize = 5;

/// How each word span is delimited in the rendered sentence.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Emphasis {
    /// `**word**`
    #[default]
    Markdown,
    /// `<span class="highlight-word">word</span>`, with the word escaped.
    Html,
}

impl Emphasis {
    pub fn wrap(self, word: &str) -> String {
        match self {
            Emphasis::Markdown => format!("**{word}**"),
            Emphasis::Html => format!("<span class=\"highlight-word\">{}</span>", escape_html(word)),
        }
    }
}

fn escape_html(text: &str) -> String {
    let mut out = String::with_capacity(text.len());
    for ch in text.chars() {
        match ch {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            '\'' => out.push_str("&#39;"),
            _ => out.push(ch),
        }
    }
    out
}

/// Word order and template chosen for one phrase.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Arrangement {
    /// `order[k]` is the corpus position of the k-th word in the sentence.
    pub order: [usize; 4],
    /// Template index in `0..TEMPLATE_COUNT`.
    pub template: usize,
}

impl Arrangement {
    /// Draw an arrangement: three shuffle draws, then one template draw.
    pub fn draw(rng: &mut PhraseRng) -> Self {
        let mut order = [0, 1, 2, 3];
        rng.shuffle(&mut order);
        let template = rng.pick(TEMPLATE_COUNT);
        Self { order, template }
    }

    /// The arrangement a fresh sequencer seeded with `seed` produces.
    pub fn from_seed(seed: i64) -> Self {
        Self::draw(&mut PhraseRng::new(seed))
    }
}

/// Compose the phrase for `words` with a sequencer seeded from `seed`.
pub fn compose(words: &SelectedWords<'_>, seed: i64, emphasis: Emphasis) -> Result<String> {
    compose_with(words, &mut PhraseRng::new(seed), emphasis)
}

/// Compose using a caller-owned sequencer. Takes exactly four draws.
pub fn compose_with(words: &SelectedWords<'_>, rng: &mut PhraseRng, emphasis: Emphasis) -> Result<String> {
    let arrangement = Arrangement::draw(rng);
    render(words, &arrangement, emphasis)
}

/// Render `words` in the given arrangement.
pub fn render(words: &SelectedWords<'_>, arrangement: &Arrangement, emphasis: Emphasis) -> Result<String> {
    let all = words.as_array();
    let [w1, w2, w3, w4] = arrangement.order.map(|i| all[i]);
    let h = |w: &str| emphasis.wrap(w);

    let sentence = match arrangement.template {
        // w1-이/가 w2에서 w3-과/와 w4
        0 => format!(
            "{}{} {}에서 {}{} {}",
            h(w1),
            particle(w1, JosaFamily::Subject)?,
            h(w2),
            h(w3),
            particle(w3, JosaFamily::Conjunctive)?,
            h(w4)
        ),
        // w1-은/는 w2, w3 그리고 w4
        1 => format!(
            "{}{} {}, {} 그리고 {}",
            h(w1),
            particle(w1, JosaFamily::Topic)?,
            h(w2),
            h(w3),
            h(w4)
        ),
        // w1-과/와 w2의 w3, w4
        2 => format!(
            "{}{} {}의 {}, {}",
            h(w1),
            particle(w1, JosaFamily::Conjunctive)?,
            h(w2),
            h(w3),
            h(w4)
        ),
        // w1, w2-이랑/랑 w3에서 w4
        3 => format!(
            "{}, {}{} {}에서 {}",
            h(w1),
            h(w2),
            particle(w2, JosaFamily::Together)?,
            h(w3),
            h(w4)
        ),
        // w1-이/가 w2-을/를 만나 w3-과/와 w4
        _ => format!(
            "{}{} {}{} 만나 {}{} {}",
            h(w1),
            particle(w1, JosaFamily::Subject)?,
            h(w2),
            particle(w2, JosaFamily::Object)?,
            h(w3),
            particle(w3, JosaFamily::Conjunctive)?,
            h(w4)
        ),
    };
    Ok(sentence)
}
