// Shared fixtures for unit tests.

use crate::WordCorpus;

pub(crate) fn owned(words: &[&str]) -> Vec<String> {
    words.iter().map(|w| w.to_string()).collect()
}

/// Small corpus with lists of length 5, 7, 3 and 4.
pub(crate) fn fixture() -> WordCorpus {
    WordCorpus::new(
        owned(&["사과", "학교", "사람", "바다", "나무"]),
        owned(&["구름", "하늘", "별", "달", "강", "산", "숲"]),
        owned(&["노래", "꿈", "빛"]),
        owned(&["길", "집", "문", "창"]),
    )
}
