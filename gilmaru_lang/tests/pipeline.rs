// End-to-end tests for the coordinate -> phrase pipeline.
//
// These run against the embedded default corpus, so they also pin the
// shipped data: if a word is added, removed, or reordered in
// `data/word_corpus.json`, the reference phrases below change.

use std::thread;

use gilmaru_lang::{
    CorpusLabel, Emphasis, GridConfig, PhraseGenerator, WordCorpus, default_corpus, derive_seed, locate,
    select_words,
};

/// National Assembly Library, Seoul.
const LIBRARY: (f64, f64) = (37.531111, 126.917222);

#[test]
fn library_reference_phrase() {
    let corpus = default_corpus();
    let phrase = PhraseGenerator::new(&corpus).generate(LIBRARY.0, LIBRARY.1).unwrap();

    assert_eq!(phrase.code, "X583.Y906.C223.D112");
    assert_eq!(phrase.words, ["언덕", "꽃잎", "불꽃", "보람"].map(String::from));
    assert_eq!(phrase.sentence, "**보람**은 **꽃잎**, **불꽃** 그리고 **언덕**");
}

#[test]
fn pipeline_is_deterministic() {
    let corpus = default_corpus();
    let generator = PhraseGenerator::new(&corpus);
    for (lat, lng) in [LIBRARY, (33.4996, 126.5312), (35.1796, 129.0756), (-33.8688, 151.2093)] {
        let a = generator.generate(lat, lng).unwrap();
        let b = generator.generate(lat, lng).unwrap();
        assert_eq!(a, b);
    }
}

#[test]
fn same_sub_block_same_phrase() {
    let corpus = default_corpus();
    let generator = PhraseGenerator::new(&corpus);
    let grid = GridConfig::default();

    let address = locate(LIBRARY.0, LIBRARY.1);
    let (sw, ne) = grid.cell_bounds(&address);
    let center = grid.cell_center(&address);

    let inside = [
        (center.lat, center.lng),
        (sw.lat + 1e-7, sw.lng + 1e-7),
        (ne.lat - 1e-7, ne.lng - 1e-7),
    ];
    let reference = generator.generate_at(address).unwrap();
    for (lat, lng) in inside {
        assert_eq!(generator.generate(lat, lng).unwrap(), reference, "({lat}, {lng})");
    }
}

#[test]
fn words_come_from_their_own_corpus() {
    let corpus = default_corpus();
    let mut lat = 33.0;
    while lat < 38.6 {
        let mut lng = 124.5;
        while lng < 131.0 {
            let address = locate(lat, lng);
            let words = select_words(&address, &corpus).unwrap();
            for label in CorpusLabel::ALL {
                assert!(corpus.words(label).iter().any(|w| w == words.get(label)));
            }
            lng += 0.173;
        }
        lat += 0.211;
    }
}

#[test]
fn south_west_of_origin_still_generates() {
    let corpus = default_corpus();
    let generator = PhraseGenerator::new(&corpus);
    let phrase = generator.generate(32.9991, 123.9987).unwrap();
    assert_eq!(phrase.address.block_x, -1);
    assert_eq!(phrase.address.block_y, -1);
    assert_eq!(phrase.seed, -222);
    assert_eq!(phrase.sentence.matches("**").count(), 8);
}

#[test]
fn seed_is_pure_function_of_address() {
    let a = locate(LIBRARY.0, LIBRARY.1);
    let b = locate(LIBRARY.0 + 1e-7, LIBRARY.1 + 1e-7);
    assert_eq!(a, b);
    assert_eq!(derive_seed(&a), derive_seed(&b));
}

#[test]
fn decoded_code_reproduces_phrase() {
    let corpus = default_corpus();
    let generator = PhraseGenerator::new(&corpus).with_emphasis(Emphasis::Html);
    let phrase = generator.generate(LIBRARY.0, LIBRARY.1).unwrap();

    let address = generator.grid().parse_code(&phrase.code).unwrap();
    assert_eq!(generator.generate_at(address).unwrap(), phrase);
}

#[test]
fn corpus_shared_across_threads() {
    let corpus = default_corpus();
    let expected = PhraseGenerator::new(&corpus).generate(LIBRARY.0, LIBRARY.1).unwrap();

    thread::scope(|scope| {
        let handles: Vec<_> = (0..4)
            .map(|_| scope.spawn(|| PhraseGenerator::new(&corpus).generate(LIBRARY.0, LIBRARY.1).unwrap()))
            .collect();
        for handle in handles {
            assert_eq!(handle.join().unwrap(), expected);
        }
    });
}

#[test]
fn custom_corpus_from_json() {
    let json = r#"{
        "A": ["사과", "학교", "사람", "바다", "나무"],
        "B": ["구름", "하늘", "별", "달", "강", "산", "숲"],
        "C": ["노래", "꿈", "빛"],
        "D": ["길", "집", "문", "창"]
    }"#;
    let corpus = WordCorpus::from_json(json).unwrap();
    let phrase = PhraseGenerator::new(&corpus).generate(LIBRARY.0, LIBRARY.1).unwrap();
    assert_eq!(phrase.words, ["학교", "별", "꿈", "집"].map(String::from));
    assert_eq!(phrase.sentence, "**집**은 **별**, **꿈** 그리고 **학교**");
}

#[test]
fn far_off_coordinates_and_codes_generate() {
    let corpus = default_corpus();
    let generator = PhraseGenerator::new(&corpus);

    let a = generator.generate(1e300, 0.0).unwrap();
    let b = generator.generate(1e300, 0.0).unwrap();
    assert_eq!(a, b);

    let address = generator.grid().parse_code("X9223372036854775807.Y000.C001.D001").unwrap();
    let phrase = generator.generate_at(address).unwrap();
    assert_eq!(phrase.code, "X9223372036854775807.Y000.C001.D001");
    assert_eq!(phrase.sentence.matches("**").count(), 8);
}
