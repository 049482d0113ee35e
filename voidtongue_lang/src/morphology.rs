// Inflectional morphology: case-like noun markers and tense/aspect-like verb
// markers with vowel harmony.
//
// Each marker has a front and a back variant. The variant is chosen from the
// stem's nearest harmonizing vowel: the last one for suffixes, the first one
// for prefixes. Front vowels are e i y æ ø ɪ ɛ, back vowels are o u ɑ ɔ ʊ ɯ;
// "a" and anything else are neutral and a stem with no harmonizing vowel
// takes the front variant.
//
// Richness tiers decide both how often a marker is considered and how many
// candidates there are. Every candidate list starts with the unmarked form,
// so even a firing roll can leave the stem bare. At most one marker is
// attached per call.
//
// Prefixing derivation puts markers before the stem; every other style puts
// them after.
//
// Output is stochastic on purpose: the same stem inflected twice may come
// back different, the way natural speech varies.

use crate::types::{DerivationStyle, Richness};
use voidtongue_prng::LangRng;

const FRONT_VOWELS: &[char] = &['e', 'i', 'y', 'æ', 'ø', 'ɪ', 'ɛ'];
const BACK_VOWELS: &[char] = &['o', 'u', 'ɑ', 'ɔ', 'ʊ', 'ɯ'];

/// Vowel harmony class of a stem.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Harmony {
    Front,
    Back,
}

/// An inflectional marker with front/back vowel harmony variants.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HarmonyAffix {
    pub front: &'static str,
    pub back: &'static str,
    /// Descriptive label, e.g. "accusative".
    pub label: &'static str,
    /// Interlinear gloss abbreviation, e.g. "ACC".
    pub abbr: &'static str,
}

impl HarmonyAffix {
    pub fn variant(&self, harmony: Harmony) -> &'static str {
        match harmony {
            Harmony::Front => self.front,
            Harmony::Back => self.back,
        }
    }
}

pub const ERGATIVE: HarmonyAffix = HarmonyAffix { front: "ek", back: "ok", label: "ergative", abbr: "ERG" };
pub const ACCUSATIVE: HarmonyAffix = HarmonyAffix { front: "ne", back: "no", label: "accusative", abbr: "ACC" };
pub const GENITIVE: HarmonyAffix = HarmonyAffix { front: "li", back: "lu", label: "genitive", abbr: "GEN" };
pub const LOCATIVE: HarmonyAffix = HarmonyAffix { front: "mi", back: "mu", label: "locative", abbr: "LOC" };
pub const DATIVE: HarmonyAffix = HarmonyAffix { front: "se", back: "so", label: "dative", abbr: "DAT" };

pub const PAST: HarmonyAffix = HarmonyAffix { front: "shi", back: "shu", label: "past", abbr: "PST" };
pub const PROGRESSIVE: HarmonyAffix = HarmonyAffix { front: "ren", back: "ran", label: "progressive", abbr: "PROG" };
pub const FUTURE: HarmonyAffix = HarmonyAffix { front: "tha", back: "tha", label: "future", abbr: "FUT" };
pub const PERFECTIVE: HarmonyAffix = HarmonyAffix { front: "vel", back: "vol", label: "perfective", abbr: "PFV" };
pub const HABITUAL: HarmonyAffix = HarmonyAffix { front: "ith", back: "uth", label: "habitual", abbr: "HAB" };

/// One candidate in a richness tier. `None` is the unmarked form
/// (nominative for nouns, present for verbs).
pub type Candidate = Option<&'static HarmonyAffix>;

/// Application probability and candidate markers for one richness level.
#[derive(Debug, Clone)]
pub struct MarkerTier {
    pub probability: f64,
    pub candidates: &'static [Candidate],
}

const NOUN_RICH: &[Candidate] =
    &[None, Some(&ERGATIVE), Some(&ACCUSATIVE), Some(&GENITIVE), Some(&LOCATIVE), Some(&DATIVE)];
const NOUN_MODERATE: &[Candidate] = &[None, Some(&ACCUSATIVE), Some(&GENITIVE), Some(&LOCATIVE)];
const NOUN_LIGHT: &[Candidate] = &[None, Some(&GENITIVE)];

const VERB_RICH: &[Candidate] =
    &[None, Some(&PAST), Some(&PROGRESSIVE), Some(&FUTURE), Some(&PERFECTIVE), Some(&HABITUAL)];
const VERB_MODERATE: &[Candidate] = &[None, Some(&PAST), Some(&PROGRESSIVE), Some(&FUTURE)];
const VERB_LIGHT: &[Candidate] = &[None, Some(&PAST)];

const UNMARKED_ONLY: &[Candidate] = &[None];

/// Which marker family to draw from.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum WordClass {
    Noun,
    Verb,
}

pub fn tier(class: WordClass, richness: Richness) -> MarkerTier {
    let (probability, candidates) = match (class, richness) {
        (_, Richness::None) => (0.0, UNMARKED_ONLY),
        (WordClass::Noun, Richness::Rich) => (0.8, NOUN_RICH),
        (WordClass::Noun, Richness::Moderate) => (0.5, NOUN_MODERATE),
        (WordClass::Noun, Richness::Light) => (0.25, NOUN_LIGHT),
        (WordClass::Verb, Richness::Rich) => (0.8, VERB_RICH),
        (WordClass::Verb, Richness::Moderate) => (0.5, VERB_MODERATE),
        (WordClass::Verb, Richness::Light) => (0.25, VERB_LIGHT),
    };
    MarkerTier {
        probability,
        candidates,
    }
}

/// Result of inflecting one stem.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Inflected {
    pub text: String,
    pub marker: Option<&'static HarmonyAffix>,
}

/// Harmony class from the last (`from_end`) or first harmonizing vowel.
pub fn harmony_of(stem: &str, from_end: bool) -> Harmony {
    let classify = |c: char| {
        let c = c.to_lowercase().next().unwrap_or(c);
        if FRONT_VOWELS.contains(&c) {
            Some(Harmony::Front)
        } else if BACK_VOWELS.contains(&c) {
            Some(Harmony::Back)
        } else {
            None
        }
    };
    let found = if from_end {
        stem.chars().rev().find_map(classify)
    } else {
        stem.chars().find_map(classify)
    };
    found.unwrap_or(Harmony::Front)
}

/// Attach one marker (or none) to `stem`.
pub fn inflect(
    stem: &str,
    class: WordClass,
    richness: Richness,
    style: DerivationStyle,
    rng: &mut LangRng,
) -> Inflected {
    let tier = tier(class, richness);
    let marker = if rng.random_bool(tier.probability) {
        rng.choose(tier.candidates).copied().flatten()
    } else {
        None
    };

    let text = match marker {
        None => stem.to_string(),
        Some(affix) if style == DerivationStyle::Prefixing => {
            format!("{}{stem}", affix.variant(harmony_of(stem, false)))
        }
        Some(affix) => format!("{stem}{}", affix.variant(harmony_of(stem, true))),
    };
    Inflected { text, marker }
}

/// Inflect a noun stem with a case-like marker.
pub fn inflect_noun(stem: &str, richness: Richness, style: DerivationStyle, rng: &mut LangRng) -> String {
    inflect(stem, WordClass::Noun, richness, style, rng).text
}

/// Inflect a verb stem with a tense/aspect-like marker.
pub fn inflect_verb(stem: &str, richness: Richness, style: DerivationStyle, rng: &mut LangRng) -> String {
    inflect(stem, WordClass::Verb, richness, style, rng).text
}
