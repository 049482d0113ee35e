// Named phonology profiles and whole-language presets.
//
// A phonology profile is a consonant set, a vowel set, and a default syllable
// shape. `resolve_profile` turns a style key plus optional raw override text
// into a fresh `PhonologyConfig`. Unknown style keys fall back to the
// `neutral` profile without error.
//
// Override text follows the compact phoneme notation: if the text contains
// any whitespace it is split on whitespace ("th s k"), otherwise every
// Unicode code point is one phoneme ("θsk"). A non-empty override replaces
// the profile's list entirely; there is no merging.
//
// `LanguagePreset` bundles a profile with grammar, lexicon, and writing
// settings so the CLI can start from a complete `LanguageConfig`.
//
// The profile tables are `&'static` data; everything handed out is an owned
// copy so callers can never mutate a shared preset.

use crate::config::{
    GrammarConfig, LanguageConfig, LexiconConfig, PhonologyConfig, PhonologySection,
    ScriptDirection, WritingConfig,
};
use crate::types::{
    DerivationStyle, Etymology, PhonemeInventory, ProperNames, Richness, WordOrder,
};

/// Key of the profile used when a style is missing or unknown.
pub const DEFAULT_STYLE: &str = "neutral";

/// A static phonology profile.
#[derive(Debug, Clone)]
pub struct PhonologyProfile {
    pub key: &'static str,
    pub consonants: &'static [&'static str],
    pub vowels: &'static [&'static str],
    pub syllable_preset: &'static str,
    pub max_syllables: usize,
}

impl PhonologyProfile {
    /// Owned inventory copy of this profile's phoneme lists.
    pub fn inventory(&self) -> PhonemeInventory {
        PhonemeInventory::new(self.consonants.iter().copied(), self.vowels.iter().copied())
    }
}

pub const PROFILES: &[PhonologyProfile] = &[
    PhonologyProfile {
        key: "neutral",
        consonants: &[
            "b", "d", "f", "g", "h", "k", "l", "m", "n", "p", "r", "s", "t", "v", "w", "y", "z",
        ],
        vowels: &["a", "e", "i", "o", "u"],
        syllable_preset: "cvc",
        max_syllables: 3,
    },
    PhonologyProfile {
        key: "elven",
        consonants: &["l", "m", "n", "r", "s", "v", "y", "h", "th", "dh"],
        vowels: &["a", "e", "i", "o", "u", "ai", "ea", "ie"],
        syllable_preset: "cv-cvl",
        max_syllables: 3,
    },
    PhonologyProfile {
        key: "dwarven",
        consonants: &[
            "b", "d", "g", "k", "p", "t", "r", "z", "kh", "gr", "dr", "kr", "tr", "br",
        ],
        vowels: &["a", "o", "u", "ai", "oi"],
        syllable_preset: "cvc",
        max_syllables: 2,
    },
    PhonologyProfile {
        key: "eldritch",
        consonants: &["k", "x", "ʃ", "ʒ", "θ", "ð", "ŋ", "r", "h", "ʔ"],
        vowels: &["a", "e", "i", "o", "u", "ɪ", "ʊ", "ɔ", "æ"],
        syllable_preset: "wild",
        max_syllables: 4,
    },
    PhonologyProfile {
        key: "scifi",
        consonants: &["z", "x", "k", "t", "v", "s", "r", "n", "m", "ʃ"],
        vowels: &["a", "e", "i", "o", "u", "y"],
        syllable_preset: "cvx",
        max_syllables: 3,
    },
    PhonologyProfile {
        key: "reptilian",
        consonants: &[
            "s", "z", "sh", "zh", "ts", "ch", "k", "g", "t", "d", "kh", "gh", "h", "l", "r",
        ],
        vowels: &["i", "e", "a", "o", "u", "iː", "eː", "aː", "oː", "uː"],
        syllable_preset: "svc",
        max_syllables: 4,
    },
    PhonologyProfile {
        key: "robotic",
        consonants: &["p", "t", "k", "b", "d", "g", "m", "n", "s", "z", "l", "r", "ʔ"],
        vowels: &["a", "e", "i", "o", "u", "ə"],
        syllable_preset: "cv-cvc",
        max_syllables: 2,
    },
];

/// Look up a profile by key (case-insensitive).
pub fn find_profile(key: &str) -> Option<&'static PhonologyProfile> {
    let key = key.trim().to_lowercase();
    PROFILES.iter().find(|p| p.key == key)
}

fn neutral_profile() -> &'static PhonologyProfile {
    &PROFILES[0]
}

/// Raw user override text for the phoneme lists.
#[derive(Debug, Clone, Default)]
pub struct PhonemeOverrides {
    pub consonants: Option<String>,
    pub vowels: Option<String>,
}

/// Parse phoneme override text.
///
/// Whitespace anywhere → split on whitespace. No whitespace → one phoneme
/// per code point.
pub fn parse_phoneme_text(text: &str) -> Vec<String> {
    let trimmed = text.trim();
    if trimmed.is_empty() {
        return Vec::new();
    }
    if trimmed.chars().any(char::is_whitespace) {
        trimmed.split_whitespace().map(str::to_string).collect()
    } else {
        trimmed.chars().map(|c| c.to_string()).collect()
    }
}

/// Resolve a style key and optional overrides into a concrete phonology.
pub fn resolve_profile(style_key: &str, overrides: Option<&PhonemeOverrides>) -> PhonologyConfig {
    let profile = find_profile(style_key).unwrap_or_else(|| {
        tracing::debug!(style = style_key, "unknown phonology style, using {DEFAULT_STYLE}");
        neutral_profile()
    });

    let mut inventory = profile.inventory();
    if let Some(overrides) = overrides {
        if let Some(text) = &overrides.consonants {
            let parsed = parse_phoneme_text(text);
            if !parsed.is_empty() {
                inventory.consonants = parsed;
            }
        }
        if let Some(text) = &overrides.vowels {
            let parsed = parse_phoneme_text(text);
            if !parsed.is_empty() {
                inventory.vowels = parsed;
            }
        }
    }

    PhonologyConfig {
        inventory,
        syllable_preset: profile.syllable_preset.to_string(),
        max_syllables: profile.max_syllables,
    }
}

/// A complete language preset: a phonology profile plus grammar, lexicon,
/// and writing settings.
#[derive(Debug, Clone)]
pub struct LanguagePreset {
    pub key: &'static str,
    pub label: &'static str,
    pub style: &'static str,
    pub word_order: WordOrder,
    pub noun_morph: Richness,
    pub verb_morph: Richness,
    pub derivation: DerivationStyle,
    pub proper_names: ProperNames,
    pub etymology: Etymology,
    pub direction: ScriptDirection,
}

pub const LANGUAGE_PRESETS: &[LanguagePreset] = &[
    LanguagePreset {
        key: "elven",
        label: "Elven",
        style: "elven",
        word_order: WordOrder::Vso,
        noun_morph: Richness::Rich,
        verb_morph: Richness::Rich,
        derivation: DerivationStyle::Suffixing,
        proper_names: ProperNames::Rich,
        etymology: Etymology::Layered,
        direction: ScriptDirection::Ltr,
    },
    LanguagePreset {
        key: "dwarven",
        label: "Dwarven",
        style: "dwarven",
        word_order: WordOrder::Sov,
        noun_morph: Richness::Rich,
        verb_morph: Richness::Moderate,
        derivation: DerivationStyle::Compounding,
        proper_names: ProperNames::VeryRich,
        etymology: Etymology::Layered,
        direction: ScriptDirection::Ltr,
    },
    LanguagePreset {
        key: "eldritch",
        label: "Eldritch",
        style: "eldritch",
        word_order: WordOrder::Vso,
        noun_morph: Richness::Rich,
        verb_morph: Richness::Rich,
        derivation: DerivationStyle::Mixed,
        proper_names: ProperNames::VeryRich,
        etymology: Etymology::Layered,
        direction: ScriptDirection::Ttb,
    },
    LanguagePreset {
        key: "reptilian",
        label: "Reptilian",
        style: "reptilian",
        word_order: WordOrder::Sov,
        noun_morph: Richness::Moderate,
        verb_morph: Richness::Rich,
        derivation: DerivationStyle::Prefixing,
        proper_names: ProperNames::Rich,
        etymology: Etymology::Layered,
        direction: ScriptDirection::Rtl,
    },
    LanguagePreset {
        key: "robotic",
        label: "Robotic",
        style: "robotic",
        word_order: WordOrder::Svo,
        noun_morph: Richness::Light,
        verb_morph: Richness::Light,
        derivation: DerivationStyle::Infixing,
        proper_names: ProperNames::Light,
        etymology: Etymology::None,
        direction: ScriptDirection::Ltr,
    },
];

/// Look up a language preset by key (case-insensitive).
pub fn find_language_preset(key: &str) -> Option<&'static LanguagePreset> {
    let key = key.trim().to_lowercase();
    LANGUAGE_PRESETS.iter().find(|p| p.key == key)
}

impl LanguagePreset {
    /// Build an owned configuration from this preset.
    pub fn to_config(&self) -> LanguageConfig {
        LanguageConfig {
            phonology: PhonologySection {
                style: Some(self.style.to_string()),
                ..Default::default()
            },
            grammar: GrammarConfig {
                word_order: self.word_order,
                noun_morph: self.noun_morph,
                verb_morph: self.verb_morph,
                derivation: self.derivation,
            },
            lexicon: LexiconConfig {
                etymology: self.etymology,
                proper_names: self.proper_names,
                ..Default::default()
            },
            writing: WritingConfig {
                direction: self.direction,
                ..Default::default()
            },
        }
    }
}
