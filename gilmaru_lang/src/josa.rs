// Korean particle (josa) selection.
//
// Korean particles have two forms chosen by the shape of the preceding word:
// one after a closed syllable (a syllable with a final consonant, jongseong)
// and one after an open syllable. This module provides the five particle
// families the sentence templates use and the final-consonant test.
//
// A precomposed Hangul syllable at scalar value `0xAC00 + code` encodes
// `code = (initial * 21 + medial) * 28 + final`, with `final == 0` meaning no
// final consonant. Anything outside the syllable block (Latin letters,
// digits, bare jamo) is treated as open.
//
// Used by `compose.rs` when rendering sentence templates.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use crate::error::{GilmaruError, Result};

/// First precomposed Hangul syllable (가).
pub const HANGUL_SYLLABLE_BASE: u32 = 0xAC00;
/// Number of precomposed Hangul syllables (가..힣).
pub const HANGUL_SYLLABLE_COUNT: u32 = 11_172;
/// Final-consonant slots per initial/medial pair, including "none".
const JONGSEONG_SLOTS: u32 = 28;

/// A particle family. Each has a closed-syllable and an open-syllable form.
///
/// Serialized (and parsed) by the romanized name of its two forms.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum JosaFamily {
    /// 이 / 가
    #[serde(rename = "iga")]
    Subject,
    /// 은 / 는
    #[serde(rename = "eunneun")]
    Topic,
    /// 을 / 를
    #[serde(rename = "eulreul")]
    Object,
    /// 과 / 와
    #[serde(rename = "wagwa")]
    Conjunctive,
    /// 이랑 / 랑
    #[serde(rename = "irang")]
    Together,
}

impl JosaFamily {
    pub const ALL: [JosaFamily; 5] = [
        JosaFamily::Subject,
        JosaFamily::Topic,
        JosaFamily::Object,
        JosaFamily::Conjunctive,
        JosaFamily::Together,
    ];

    /// The romanized family name (`"iga"`, `"eunneun"`, ...).
    pub fn name(self) -> &'static str {
        self.forms().name
    }

    /// The table row for this family.
    pub fn forms(self) -> &'static JosaForms {
        &JOSA_TABLE[self as usize]
    }
}

impl fmt::Display for JosaFamily {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for JosaFamily {
    type Err = GilmaruError;

    fn from_str(s: &str) -> Result<Self> {
        JosaFamily::ALL
            .into_iter()
            .find(|family| family.name() == s)
            .ok_or_else(|| GilmaruError::UnknownFamily(s.to_string()))
    }
}

/// The two forms of one particle family.
#[derive(Debug, Clone)]
pub struct JosaForms {
    /// Romanized family name.
    pub name: &'static str,
    /// Form used after a final consonant.
    pub closed: &'static str,
    /// Form used after a vowel.
    pub open: &'static str,
}

/// Particle forms, indexed by `JosaFamily` discriminant.
pub const JOSA_TABLE: &[JosaForms] = &[
    JosaForms {
        name: "iga",
        closed: "이",
        open: "가",
    },
    JosaForms {
        name: "eunneun",
        closed: "은",
        open: "는",
    },
    JosaForms {
        name: "eulreul",
        closed: "을",
        open: "를",
    },
    JosaForms {
        name: "wagwa",
        closed: "과",
        open: "와",
    },
    JosaForms {
        name: "irang",
        closed: "이랑",
        open: "랑",
    },
];

/// Whether `ch` is a precomposed Hangul syllable with a final consonant.
pub fn has_final_consonant(ch: char) -> bool {
    match u32::from(ch).checked_sub(HANGUL_SYLLABLE_BASE) {
        Some(code) if code < HANGUL_SYLLABLE_COUNT => code % JONGSEONG_SLOTS != 0,
        _ => false,
    }
}

/// Whether the last character of `word` is a closed syllable.
pub fn ends_closed(word: &str) -> Result<bool> {
    word.chars()
        .next_back()
        .map(has_final_consonant)
        .ok_or(GilmaruError::InvalidWord)
}

/// The particle of `family` that follows `word`.
pub fn particle(word: &str, family: JosaFamily) -> Result<&'static str> {
    let forms = family.forms();
    Ok(if ends_closed(word)? {
        forms.closed
    } else {
        forms.open
    })
}

/// `particle` with the family given by name; unknown names are an error.
pub fn particle_by_name(word: &str, family: &str) -> Result<&'static str> {
    particle(word, family.parse()?)
}
