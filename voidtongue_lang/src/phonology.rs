// Syllable construction from shape patterns.
//
// A syllable pattern is a short string of slot symbols, matched
// case-insensitively:
// - `C`: any consonant
// - `V`: any vowel
// - `X`: optional consonant: a consonant half the time, otherwise nothing
// - `L`: a liquid if the inventory has one, otherwise any consonant
// - `S`: a sibilant if the inventory has one, otherwise any consonant
//
// Any other character passes through lower-cased, so a pattern like "cv'n"
// embeds a fixed apostrophe. Empty phoneme classes contribute nothing; a
// fully empty syllable is a legal result and `synth.rs` decides what to do
// with it.
//
// Used by `synth.rs` for every syllable of every word and for the fresh CV
// syllables that derivational affixation attaches.

use crate::types::PhonemeInventory;
use voidtongue_prng::LangRng;

/// Graphemes recognized as liquids for the `L` slot.
pub const LIQUIDS: &[&str] = &["l", "r", "ɾ", "ɹ", "ɭ", "ʎ", "ʀ", "ʁ", "ɫ"];

/// Graphemes recognized as sibilants for the `S` slot.
pub const SIBILANTS: &[&str] = &["s", "z", "ʃ", "ʒ", "sh", "zh", "ʂ", "ʐ", "ɕ", "ʑ"];

/// Probability that an `X` slot realizes a consonant.
pub const OPTIONAL_CONSONANT_CHANCE: f64 = 0.5;

/// One slot of a parsed syllable pattern.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Slot {
    Consonant,
    Vowel,
    OptionalConsonant,
    Liquid,
    Sibilant,
    Literal(char),
}

impl Slot {
    pub fn from_char(c: char) -> Slot {
        match c.to_ascii_uppercase() {
            'C' => Slot::Consonant,
            'V' => Slot::Vowel,
            'X' => Slot::OptionalConsonant,
            'L' => Slot::Liquid,
            'S' => Slot::Sibilant,
            _ => Slot::Literal(c),
        }
    }
}

/// Expand a syllable pattern into a concrete syllable.
pub fn build_syllable(pattern: &str, inventory: &PhonemeInventory, rng: &mut LangRng) -> String {
    let mut out = String::new();
    for c in pattern.chars() {
        match Slot::from_char(c) {
            Slot::Consonant => push_pick(&mut out, &inventory.consonants, rng),
            Slot::Vowel => push_pick(&mut out, &inventory.vowels, rng),
            Slot::OptionalConsonant => {
                if rng.random_bool(OPTIONAL_CONSONANT_CHANCE) {
                    push_pick(&mut out, &inventory.consonants, rng);
                }
            }
            Slot::Liquid => push_class_pick(&mut out, &inventory.consonants, LIQUIDS, rng),
            Slot::Sibilant => push_class_pick(&mut out, &inventory.consonants, SIBILANTS, rng),
            Slot::Literal(lit) => out.extend(lit.to_lowercase()),
        }
    }
    out
}

fn push_pick(out: &mut String, pool: &[String], rng: &mut LangRng) {
    if let Some(p) = rng.choose(pool) {
        out.push_str(p);
    }
}

/// Pick from the members of `pool` that belong to `class`, falling back to
/// the whole pool when none do.
fn push_class_pick(out: &mut String, pool: &[String], class: &[&str], rng: &mut LangRng) {
    let members: Vec<&String> = pool.iter().filter(|p| class.contains(&p.as_str())).collect();
    if members.is_empty() {
        push_pick(out, pool, rng);
    } else if let Some(p) = rng.choose(&members) {
        out.push_str(p);
    }
}

/// Longest syllable a pattern can produce with this inventory, in chars.
pub fn max_syllable_len(pattern: &str, inventory: &PhonemeInventory) -> usize {
    let longest = |pool: &[String]| pool.iter().map(|p| p.chars().count()).max().unwrap_or(0);
    pattern
        .chars()
        .map(|c| match Slot::from_char(c) {
            Slot::Vowel => longest(&inventory.vowels),
            Slot::Literal(lit) => lit.to_lowercase().count(),
            _ => longest(&inventory.consonants),
        })
        .sum()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn inv(consonants: &[&str], vowels: &[&str]) -> PhonemeInventory {
        PhonemeInventory::new(consonants.iter().copied(), vowels.iter().copied())
    }

    #[test]
    fn test_single_phoneme_inventory_is_exact() {
        let inventory = inv(&["b"], &["a"]);
        for seed in 0..50 {
            let mut rng = LangRng::new(seed);
            assert_eq!(build_syllable("CVC", &inventory, &mut rng), "bab");
        }
    }

    #[test]
    fn test_pattern_is_case_insensitive() {
        let inventory = inv(&["k"], &["o"]);
        let mut rng = LangRng::new(1);
        assert_eq!(build_syllable("cvc", &inventory, &mut rng), "kok");
    }

    #[test]
    fn test_optional_consonant_sometimes_absent() {
        let inventory = inv(&["t"], &["i"]);
        let mut rng = LangRng::new(7);
        let mut with = 0;
        let mut without = 0;
        for _ in 0..200 {
            match build_syllable("VX", &inventory, &mut rng).as_str() {
                "it" => with += 1,
                "i" => without += 1,
                other => panic!("unexpected syllable {other}"),
            }
        }
        assert!(with > 0 && without > 0);
    }

    #[test]
    fn test_liquid_prefers_liquids() {
        let inventory = inv(&["p", "t", "l", "k"], &["a"]);
        let mut rng = LangRng::new(3);
        for _ in 0..100 {
            assert_eq!(build_syllable("L", &inventory, &mut rng), "l");
        }
    }

    #[test]
    fn test_liquid_falls_back_to_any_consonant() {
        let inventory = inv(&["p"], &["a"]);
        let mut rng = LangRng::new(3);
        assert_eq!(build_syllable("LV", &inventory, &mut rng), "pa");
    }

    #[test]
    fn test_sibilant_slot() {
        let inventory = inv(&["k", "sh", "m"], &["u"]);
        let mut rng = LangRng::new(11);
        for _ in 0..50 {
            assert_eq!(build_syllable("SV", &inventory, &mut rng), "shu");
        }
    }

    #[test]
    fn test_literals_pass_through_lowercased() {
        let inventory = inv(&["n"], &["e"]);
        let mut rng = LangRng::new(5);
        assert_eq!(build_syllable("CV'N", &inventory, &mut rng), "ne'n");
        assert_eq!(build_syllable("CV-Q", &inventory, &mut rng), "ne-q");
    }

    #[test]
    fn test_empty_inventory_contributes_nothing() {
        let inventory = PhonemeInventory::default();
        let mut rng = LangRng::new(5);
        assert_eq!(build_syllable("CVXL", &inventory, &mut rng), "");
    }

    #[test]
    fn test_max_syllable_len_bounds_output() {
        let inventory = inv(&["th", "k", "ʃ"], &["ai", "o"]);
        let bound = max_syllable_len("CVLX", &inventory);
        let mut rng = LangRng::new(99);
        for _ in 0..200 {
            assert!(build_syllable("CVLX", &inventory, &mut rng).chars().count() <= bound);
        }
    }
}
