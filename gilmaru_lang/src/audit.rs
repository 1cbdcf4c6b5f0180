// Corpus hygiene audit.
//
// The generation pipeline assumes the four corpora are disjoint and free of
// repeats; nothing re-checks that at generation time. This module collects
// every violation in one pass so the loader can refuse a bad corpus and the
// CLI can list everything that needs fixing, not only the first problem.
//
// Findings:
// - overlaps: words shared between two corpora (each pair reported once)
// - duplicates: words listed more than once within a corpus
// - unsorted: first position where a corpus breaks code-point order
//
// Sort order is informational only; `is_clean` ignores it.

use serde::Serialize;
use std::collections::BTreeSet;

use crate::types::CorpusLabel;

/// Words shared by two corpora, in the order they appear in `first`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Overlap {
    pub first: CorpusLabel,
    pub second: CorpusLabel,
    pub words: Vec<String>,
}

/// Words repeated inside one corpus, in order of first repeat.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Duplicates {
    pub label: CorpusLabel,
    pub words: Vec<String>,
}

/// First adjacent pair that is out of order.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Unsorted {
    pub label: CorpusLabel,
    pub index: usize,
    pub before: String,
    pub after: String,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct CorpusReport {
    /// Word count per corpus, A..D.
    pub counts: [usize; 4],
    pub overlaps: Vec<Overlap>,
    pub duplicates: Vec<Duplicates>,
    pub unsorted: Vec<Unsorted>,
}

impl CorpusReport {
    /// No overlaps and no duplicates.
    pub fn is_clean(&self) -> bool {
        self.overlaps.is_empty() && self.duplicates.is_empty()
    }
}

/// Audit four word lists, given in corpus order A..D.
pub fn audit(lists: [&[String]; 4]) -> CorpusReport {
    let mut report = CorpusReport {
        counts: lists.map(<[String]>::len),
        ..Default::default()
    };

    let sets: Vec<BTreeSet<&str>> = lists
        .iter()
        .map(|list| list.iter().map(String::as_str).collect())
        .collect();

    for (i, first) in CorpusLabel::ALL.into_iter().enumerate() {
        for (j, second) in CorpusLabel::ALL.into_iter().enumerate().skip(i + 1) {
            let mut seen = BTreeSet::new();
            let words: Vec<String> = lists[i]
                .iter()
                .filter(|w| sets[j].contains(w.as_str()) && seen.insert(w.as_str()))
                .cloned()
                .collect();
            if !words.is_empty() {
                report.overlaps.push(Overlap { first, second, words });
            }
        }
    }

    for (label, list) in CorpusLabel::ALL.into_iter().zip(lists) {
        let mut seen = BTreeSet::new();
        let mut repeated = BTreeSet::new();
        let mut words = Vec::new();
        for word in list {
            if !seen.insert(word.as_str()) && repeated.insert(word.as_str()) {
                words.push(word.clone());
            }
        }
        if !words.is_empty() {
            report.duplicates.push(Duplicates { label, words });
        }

        if let Some(index) = list.windows(2).position(|pair| pair[0] > pair[1]) {
            report.unsorted.push(Unsorted {
                label,
                index,
                before: list[index].clone(),
                after: list[index + 1].clone(),
            });
        }
    }

    report
}
