// Deterministic, portable sequencer for phrase generation.
//
// Implements the small linear congruential generator the Gilmaru phrases have
// always been rendered with: `state = (state * 9301 + 49297) mod 233280`,
// each draw returning `state / 233280`. The constants are part of the output
// contract. Changing any of them (or the order in which a generation consumes
// draws) changes the sentence for every coordinate on Earth.
//
// `gilmaru_lang` creates one `PhraseRng` per generation call, seeded from the
// grid address, and consumes exactly four draws from it: three for the word
// shuffle, one for the template choice. A `PhraseRng` is never shared between
// generation calls.
//
// **Critical constraint: determinism.** The update runs entirely in integer
// arithmetic; the only floating-point operation is the final division, which
// is exact-rounded IEEE 754 and identical on every platform.

use serde::{Deserialize, Serialize};

/// LCG multiplier.
pub const MULTIPLIER: u64 = 9301;
/// LCG increment.
pub const INCREMENT: u64 = 49297;
/// LCG modulus. Every draw is `state / MODULUS` with `state < MODULUS`.
pub const MODULUS: u64 = 233_280;

/// Seeded LCG used to order words and pick a sentence template.
///
/// The internal state is always kept in `[0, MODULUS)`. Seeds outside that
/// range (including negative ones) are reduced with the Euclidean modulo,
/// which yields the same stream the update rule would produce from the raw
/// seed while keeping every draw in `[0, 1)`.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct PhraseRng {
    state: u64,
    draws: u32,
}

impl PhraseRng {
    /// Create a sequencer from a (possibly negative) seed.
    pub fn new(seed: i64) -> Self {
        let modulus = MODULUS as i64;
        let state = seed.rem_euclid(modulus) as u64;
        Self { state, draws: 0 }
    }

    /// Advance the generator and return the raw state in `[0, MODULUS)`.
    pub fn next_state(&mut self) -> u64 {
        self.state = (self.state * MULTIPLIER + INCREMENT) % MODULUS;
        self.draws += 1;
        self.state
    }

    /// Advance the generator and return a value in `[0, 1)`.
    pub fn next_f64(&mut self) -> f64 {
        self.next_state() as f64 / MODULUS as f64
    }

    /// Draw an index in `[0, n)` as `floor(next_f64() * n)`.
    ///
    /// Panics if `n == 0`.
    pub fn pick(&mut self, n: usize) -> usize {
        assert!(n > 0, "pick: n must be positive");
        // v * n can round up to n for large n.
        ((self.next_f64() * n as f64).floor() as usize).min(n - 1)
    }

    /// Shuffle `items` in place, Fisher–Yates from the back.
    ///
    /// For `i` from `len - 1` down to 1: draw `j = pick(i + 1)` and swap
    /// positions `i` and `j`. Consumes exactly `len - 1` draws (none for
    /// slices shorter than two).
    pub fn shuffle<T>(&mut self, items: &mut [T]) {
        for i in (1..items.len()).rev() {
            let j = self.pick(i + 1);
            items.swap(i, j);
        }
    }

    /// Number of draws taken from this sequencer since it was seeded.
    pub fn draws(&self) -> u32 {
        self.draws
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn determinism_same_seed_same_output() {
        let mut a = PhraseRng::new(744_833);
        let mut b = PhraseRng::new(744_833);
        for _ in 0..1000 {
            assert_eq!(a.next_state(), b.next_state());
        }
    }

    #[test]
    fn different_seeds_different_output() {
        let mut a = PhraseRng::new(42);
        let mut b = PhraseRng::new(43);
        assert_ne!(a.next_state(), b.next_state());
    }

    /// Reference values computed with the plain update rule from seed 0.
    /// If this breaks, every generated sentence has changed.
    #[test]
    fn known_sequence_from_seed_zero() {
        let mut rng = PhraseRng::new(0);
        let states: Vec<u64> = (0..4).map(|_| rng.next_state()).collect();
        assert_eq!(states, vec![49297, 165_494, 127_551, 172_348]);
    }

    #[test]
    fn known_values_from_seed_zero() {
        let mut rng = PhraseRng::new(0);
        assert_eq!(rng.next_f64(), 49297.0 / 233_280.0);
        assert_eq!(rng.next_f64(), 165_494.0 / 233_280.0);
    }

    #[test]
    fn f64_in_unit_range() {
        let mut rng = PhraseRng::new(12345);
        for _ in 0..10_000 {
            let v = rng.next_f64();
            assert!((0.0..1.0).contains(&v), "f64 out of range: {v}");
        }
    }

    #[test]
    fn negative_seed_reduces_euclidean() {
        assert_eq!(PhraseRng::new(-1), PhraseRng::new(233_279));
        assert_eq!(PhraseRng::new(-233_280), PhraseRng::new(0));

        let mut rng = PhraseRng::new(-222);
        for _ in 0..1000 {
            let v = rng.next_f64();
            assert!((0.0..1.0).contains(&v), "negative seed escaped range: {v}");
        }
    }

    #[test]
    fn large_seed_matches_reduced_seed() {
        let mut a = PhraseRng::new(i64::MAX);
        let mut b = PhraseRng::new(i64::MAX % MODULUS as i64);
        for _ in 0..100 {
            assert_eq!(a.next_state(), b.next_state());
        }
    }

    #[test]
    fn pick_within_bounds() {
        let mut rng = PhraseRng::new(999);
        for n in 1..10 {
            for _ in 0..1000 {
                assert!(rng.pick(n) < n);
            }
        }
    }

    #[test]
    fn shuffle_of_four_takes_three_draws() {
        let mut rng = PhraseRng::new(7);
        let mut order = [0usize, 1, 2, 3];
        rng.shuffle(&mut order);
        assert_eq!(rng.draws(), 3);

        let mut sorted = order;
        sorted.sort_unstable();
        assert_eq!(sorted, [0, 1, 2, 3]);
    }

    #[test]
    fn shuffle_known_permutations() {
        // seed -> permutation of [0, 1, 2, 3]
        let cases: [(i64, [usize; 4]); 4] = [
            (0, [3, 1, 2, 0]),
            (1, [2, 0, 3, 1]),
            (5, [0, 3, 2, 1]),
            (8, [0, 3, 1, 2]),
        ];
        for (seed, expected) in cases {
            let mut rng = PhraseRng::new(seed);
            let mut order = [0usize, 1, 2, 3];
            rng.shuffle(&mut order);
            assert_eq!(order, expected, "seed {seed}");
        }
    }

    #[test]
    fn shuffle_short_slices_draw_nothing() {
        let mut rng = PhraseRng::new(3);
        let mut empty: [u8; 0] = [];
        rng.shuffle(&mut empty);
        let mut one = [9u8];
        rng.shuffle(&mut one);
        assert_eq!(rng.draws(), 0);
        assert_eq!(one, [9]);
    }

    #[test]
    fn serialization_roundtrip() {
        let mut rng = PhraseRng::new(42);
        for _ in 0..10 {
            rng.next_state();
        }
        let json = serde_json::to_string(&rng).unwrap();
        let mut restored: PhraseRng = serde_json::from_str(&json).unwrap();
        assert_eq!(restored.draws(), 10);
        for _ in 0..100 {
            assert_eq!(rng.next_state(), restored.next_state());
        }
    }
}
