//! Luxembourgish number vocabulary.
//!
//! Atomic forms are listed by hand, including the spelling variants found in
//! everyday writing. Compounds are generated: digit+tens with the joiner the
//! tens word takes under the n-rule, fused hundreds, century forms and
//! ordinals.

use std::sync::OnceLock;

use zuelen_foundation::Category;

use crate::vocabulary::{Joiner, Vocabulary, VocabularyBuilder};

/// Language tag of this vocabulary.
pub const LANGUAGE: &str = "lb";

/// Bare digits and teens below this value are rejected as complete inputs.
pub const STANDALONE_MINIMUM: u64 = 13;

/// Digit words, with the spellings that are only used on their own.
const DIGITS: &[(&[&str], u64)] = &[
    (&["eent", "een", "eng"], 1),
    (&["zwee"], 2),
    (&["dräi"], 3),
    (&["véier"], 4),
    (&["fënnef"], 5),
    (&["sechs"], 6),
    (&["siwen"], 7),
    (&["aacht"], 8),
    (&["néng"], 9),
];

/// Digit spellings used as the first half of a compound.
const COMPOUND_DIGITS: &[(&str, u64)] = &[
    ("een", 1),
    ("zwee", 2),
    ("dräi", 3),
    ("véier", 4),
    ("fënnef", 5),
    ("sechs", 6),
    ("siwen", 7),
    ("aacht", 8),
    ("néng", 9),
];

const TEENS: &[(&[&str], u64)] = &[
    (&["zéng"], 10),
    (&["eelef"], 11),
    (&["zwielef"], 12),
    (&["dräizéng"], 13),
    (&["véierzéng"], 14),
    (&["foffzéng", "fofzéng"], 15),
    (&["siechzéng", "sechzéng"], 16),
    (&["siwenzéng"], 17),
    (&["uechtzéng", "achtzéng"], 18),
    (&["nonnzéng", "nongzéng", "nonzéng"], 19),
];

/// Tens spellings with their joiner class.
///
/// The final `n` of the joiner survives before vowels and before d, h, n, t
/// and z, so the partition follows pronunciation rather than spelling.
const TENS: &[(&str, u64, Joiner)] = &[
    ("zwanzeg", 20, Joiner::An),
    ("drësseg", 30, Joiner::An),
    ("dräisseg", 30, Joiner::An),
    ("véierzeg", 40, Joiner::A),
    ("foffzeg", 50, Joiner::A),
    ("fofzeg", 50, Joiner::A),
    ("sechzeg", 60, Joiner::A),
    ("siechzeg", 60, Joiner::A),
    ("siwenzeg", 70, Joiner::A),
    ("siwwenzeg", 70, Joiner::A),
    ("achtzeg", 80, Joiner::An),
    ("nonnzeg", 90, Joiner::An),
    ("nonzeg", 90, Joiner::An),
];

const SCALES: &[(&[&str], u64)] = &[
    (&["millioun", "milliounen", "millioune"], 1_000_000),
    (&["milliard", "milliarden", "milliarde"], 1_000_000_000),
    (&["billioun", "billiounen"], 1_000_000_000_000),
];

/// Teens that combine with the hundred marker into a century form.
const CENTURIES: &[(&str, u64)] = &[
    ("eelef", 11),
    ("zwielef", 12),
    ("dräizéng", 13),
    ("véierzéng", 14),
    ("foffzéng", 15),
    ("fofzéng", 15),
    ("siechzéng", 16),
    ("sechzéng", 16),
    ("siwenzéng", 17),
    ("uechtzéng", 18),
    ("achtzéng", 18),
    ("nonnzéng", 19),
    ("nongzéng", 19),
    ("nonzéng", 19),
];

/// Ordinal stems for 1 to 19; higher ordinals add `st` to the cardinal.
const ORDINAL_STEMS: &[(&str, u64)] = &[
    ("éischt", 1),
    ("zweet", 2),
    ("drëtt", 3),
    ("véiert", 4),
    ("fënneft", 5),
    ("sechst", 6),
    ("siwent", 7),
    ("aacht", 8),
    ("néngt", 9),
    ("zéngt", 10),
    ("eeleft", 11),
    ("zwieleft", 12),
    ("dräizéngt", 13),
    ("véierzéngt", 14),
    ("foffzéngt", 15),
    ("siechzéngt", 16),
    ("siwenzéngt", 17),
    ("uechtzéngt", 18),
    ("nonnzéngt", 19),
];

/// Cardinals whose `-st` ordinals are generated (20 to 31, as used in dates).
const ORDINAL_TENS: &[(&str, u64, Joiner)] = &[
    ("zwanzeg", 20, Joiner::An),
    ("drësseg", 30, Joiner::An),
];

/// Builds the Luxembourgish vocabulary.
#[must_use]
pub fn build_vocabulary() -> Vocabulary {
    let mut builder = VocabularyBuilder::new(LANGUAGE);

    builder.word("null", 0, Category::Zero);
    for (spellings, value) in DIGITS {
        builder.words(spellings, *value, Category::Digit);
    }
    for (spellings, value) in TEENS {
        builder.words(spellings, *value, Category::Teen);
    }
    for (word, value, joiner) in TENS {
        builder.tens(word, *value, *joiner);
    }

    builder
        .joiner("an")
        .joiner("a")
        .hundred_marker("honnert")
        .hundred_marker("honnrt")
        .thousand_marker("dausend")
        .standalone_minimum(STANDALONE_MINIMUM);

    for (spellings, value) in SCALES {
        builder.words(spellings, *value, Category::LargeScale);
    }
    builder.words(&["komma", "punkt"], 0, Category::DecimalMarker);

    builder
        .digit_tens_compounds(COMPOUND_DIGITS)
        .fused_hundreds(COMPOUND_DIGITS)
        .century_prefixes(CENTURIES)
        .ordinals(ORDINAL_STEMS)
        .ordinals(&ordinal_tens_stems());

    builder.build()
}

/// Stems for 20th to 31st: the tens word, or digit+joiner+tens, plus `st`.
fn ordinal_tens_stems() -> Vec<(String, u64)> {
    let mut stems = Vec::new();
    for (tens, tens_value, joiner) in ORDINAL_TENS {
        stems.push((format!("{tens}st"), *tens_value));
        let last = if *tens_value == 20 { 9 } else { 1 };
        for (digit, digit_value) in COMPOUND_DIGITS.iter().take(last) {
            let stem = format!("{digit}{}{tens}st", joiner.as_str());
            stems.push((stem, tens_value + digit_value));
        }
    }
    stems
}

/// Returns the shared Luxembourgish vocabulary, building it on first use.
pub fn vocabulary() -> &'static Vocabulary {
    static VOCABULARY: OnceLock<Vocabulary> = OnceLock::new();
    VOCABULARY.get_or_init(build_vocabulary)
}
