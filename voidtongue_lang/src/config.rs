// Data-driven language configuration.
//
// `LanguageConfig` is the JSON-facing shape handed over by a collaborator
// (the CLI here, a UI elsewhere): `phonology`, `grammar`, `writing`, and
// `lexicon` sections, every field optional. Missing fields take documented
// defaults through `#[serde(default)]`, and unknown dial values parse to the
// same defaults via the lenient `from_key` constructors in `types.rs`.
//
// `LanguageConfig::normalize()` is the single normalization boundary: it
// resolves the phonology style and override text through `presets.rs` and
// clamps numeric fields, producing a `Settings` bundle that the generation
// code reads without any further fallback checks.
//
// Defaults: style `neutral`, syllable preset from the profile, word order
// `svo`, morphology `moderate`, derivation `suffixing`, etymology `layered`,
// proper names `light`, lexicon size `medium`, direction `ltr`.

use crate::letters::DEFAULT_ALPHABET_SIZE;
use crate::presets::{DEFAULT_STYLE, PhonemeOverrides, resolve_profile};
use crate::types::{DerivationStyle, Etymology, PhonemeInventory, ProperNames, Richness, WordOrder};
use serde::{Deserialize, Serialize};

// ---------------------------------------------------------------------------
// Raw, JSON-facing configuration
// ---------------------------------------------------------------------------

/// Complete language configuration as received from a collaborator.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct LanguageConfig {
    pub phonology: PhonologySection,
    pub grammar: GrammarConfig,
    pub writing: WritingConfig,
    pub lexicon: LexiconConfig,
}

/// Phonology as the collaborator describes it: a style key, optional
/// explicit phoneme lists, optional raw override text, and shape settings.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct PhonologySection {
    /// Named phonology profile; see `presets::PROFILES`.
    pub style: Option<String>,
    /// Explicit consonant list. An explicitly empty list is kept empty.
    pub consonants: Option<Vec<String>>,
    /// Explicit vowel list. An explicitly empty list is kept empty.
    pub vowels: Option<Vec<String>>,
    /// Raw consonant override text in compact phoneme notation.
    pub consonant_text: Option<String>,
    /// Raw vowel override text in compact phoneme notation.
    pub vowel_text: Option<String>,
    /// Syllable shape, e.g. `"cvc"`, `"cv-cvc"`, or `"wild"`.
    pub syllable_preset: Option<String>,
    /// Upper bound on syllables per word. Values below 1 are treated as 1.
    pub max_syllables: Option<usize>,
}

/// Grammar dials.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct GrammarConfig {
    pub word_order: WordOrder,
    pub noun_morph: Richness,
    pub verb_morph: Richness,
    pub derivation: DerivationStyle,
}

/// Lexicon dials.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct LexiconConfig {
    pub etymology: Etymology,
    pub proper_names: ProperNames,
    pub size: LexiconSize,
}

/// How many sample sentences a reroll produces.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase", from = "String")]
pub enum LexiconSize {
    Small,
    #[default]
    Medium,
    Large,
}

impl From<String> for LexiconSize {
    fn from(key: String) -> Self {
        match key.trim().to_lowercase().as_str() {
            "small" => LexiconSize::Small,
            "large" => LexiconSize::Large,
            _ => LexiconSize::Medium,
        }
    }
}

impl LexiconSize {
    pub fn sentence_count(self) -> usize {
        match self {
            LexiconSize::Small => 3,
            LexiconSize::Medium => 5,
            LexiconSize::Large => 8,
        }
    }
}

/// Writing settings. Word and sentence generation never read them; only
/// display and the glyph alphabet do.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct WritingConfig {
    pub direction: ScriptDirection,
    pub script_type: String,
    /// Number of glyphs `Session::glyph_alphabet` tries to draw.
    pub alphabet_size: usize,
}

impl Default for WritingConfig {
    fn default() -> Self {
        WritingConfig {
            direction: ScriptDirection::default(),
            script_type: "alphabet".to_string(),
            alphabet_size: DEFAULT_ALPHABET_SIZE,
        }
    }
}

/// Reading direction of the native script.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase", from = "String")]
pub enum ScriptDirection {
    #[default]
    Ltr,
    Rtl,
    Ttb,
}

impl From<String> for ScriptDirection {
    fn from(key: String) -> Self {
        match key.trim().to_lowercase().as_str() {
            "rtl" => ScriptDirection::Rtl,
            "ttb" => ScriptDirection::Ttb,
            _ => ScriptDirection::Ltr,
        }
    }
}

impl ScriptDirection {
    /// Lay out a space-separated native line for display. Right-to-left
    /// reverses token order, top-to-bottom puts one token per line.
    pub fn render_line(self, line: &str) -> String {
        match self {
            ScriptDirection::Ltr => line.to_string(),
            ScriptDirection::Rtl => line.split(' ').rev().collect::<Vec<_>>().join(" "),
            ScriptDirection::Ttb => line.split(' ').collect::<Vec<_>>().join("\n"),
        }
    }
}

// ---------------------------------------------------------------------------
// Normalized settings
// ---------------------------------------------------------------------------

/// Concrete phonology driving word synthesis.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PhonologyConfig {
    pub inventory: PhonemeInventory,
    pub syllable_preset: String,
    pub max_syllables: usize,
}

/// Fully normalized configuration. Everything downstream of `normalize()`
/// reads these fields directly.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Settings {
    pub phonology: PhonologyConfig,
    pub grammar: GrammarConfig,
    pub lexicon: LexiconConfig,
    pub writing: WritingConfig,
}

impl Default for Settings {
    fn default() -> Self {
        LanguageConfig::default().normalize()
    }
}

impl LanguageConfig {
    /// Parse a configuration from a JSON string.
    pub fn from_json(json: &str) -> Result<Self, serde_json::Error> {
        serde_json::from_str(json)
    }

    /// Resolve presets and apply defaults, producing owned settings.
    pub fn normalize(&self) -> Settings {
        Settings {
            phonology: self.phonology.resolve(),
            grammar: self.grammar.clone(),
            lexicon: self.lexicon.clone(),
            writing: self.writing.clone(),
        }
    }
}

impl PhonologySection {
    /// Resolve style, explicit lists, and override text into a
    /// `PhonologyConfig`. Precedence, lowest to highest: profile, explicit
    /// lists, non-empty override text.
    pub fn resolve(&self) -> PhonologyConfig {
        let style = self.style.as_deref().unwrap_or(DEFAULT_STYLE);
        let mut resolved = resolve_profile(style, None);

        if let Some(consonants) = &self.consonants {
            resolved.inventory.consonants = consonants.clone();
        }
        if let Some(vowels) = &self.vowels {
            resolved.inventory.vowels = vowels.clone();
        }

        let overrides = PhonemeOverrides {
            consonants: self.consonant_text.clone(),
            vowels: self.vowel_text.clone(),
        };
        let from_text = resolve_profile(style, Some(&overrides));
        if overrides.consonants.as_deref().is_some_and(|t| !t.trim().is_empty()) {
            resolved.inventory.consonants = from_text.inventory.consonants;
        }
        if overrides.vowels.as_deref().is_some_and(|t| !t.trim().is_empty()) {
            resolved.inventory.vowels = from_text.inventory.vowels;
        }

        if let Some(preset) = self.syllable_preset.as_deref().map(str::trim) {
            if !preset.is_empty() {
                resolved.syllable_preset = preset.to_string();
            }
        }
        if let Some(max) = self.max_syllables {
            resolved.max_syllables = max.max(1);
        }

        resolved
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_json_uses_defaults() {
        let config = LanguageConfig::from_json("{}").unwrap();
        let settings = config.normalize();
        assert_eq!(settings.grammar.word_order, WordOrder::Svo);
        assert_eq!(settings.grammar.noun_morph, Richness::Moderate);
        assert_eq!(settings.grammar.verb_morph, Richness::Moderate);
        assert_eq!(settings.grammar.derivation, DerivationStyle::Suffixing);
        assert_eq!(settings.lexicon.etymology, Etymology::Layered);
        assert_eq!(settings.writing.direction, ScriptDirection::Ltr);
        assert_eq!(settings.writing.alphabet_size, 26);
        assert_eq!(settings.phonology.syllable_preset, "cvc");
        assert!(settings.phonology.inventory.is_usable());
    }

    #[test]
    fn test_partial_json_and_unknown_keys() {
        let json = r#"{
            "phonology": { "consonants": ["s"], "vowels": ["a"], "syllablePreset": "cv", "maxSyllables": 1 },
            "grammar": { "wordOrder": "sov", "nounMorph": "complex", "derivation": "telepathic" },
            "writing": { "direction": "sideways", "alphabetSize": 12 },
            "lexicon": { "properNames": "very rich" }
        }"#;
        let settings = LanguageConfig::from_json(json).unwrap().normalize();
        assert_eq!(settings.phonology.inventory, PhonemeInventory::new(["s"], ["a"]));
        assert_eq!(settings.phonology.syllable_preset, "cv");
        assert_eq!(settings.phonology.max_syllables, 1);
        assert_eq!(settings.grammar.word_order, WordOrder::Sov);
        assert_eq!(settings.grammar.noun_morph, Richness::Rich);
        assert_eq!(settings.grammar.verb_morph, Richness::Moderate);
        assert_eq!(settings.grammar.derivation, DerivationStyle::Suffixing);
        assert_eq!(settings.writing.direction, ScriptDirection::Ltr);
        assert_eq!(settings.writing.alphabet_size, 12);
        assert_eq!(settings.lexicon.proper_names, ProperNames::VeryRich);
        assert_eq!(settings.lexicon.etymology, Etymology::Layered);
    }

    #[test]
    fn test_zero_max_syllables_clamps_to_one() {
        let json = r#"{ "phonology": { "maxSyllables": 0 } }"#;
        let settings = LanguageConfig::from_json(json).unwrap().normalize();
        assert_eq!(settings.phonology.max_syllables, 1);
    }

    #[test]
    fn test_explicit_empty_list_is_kept() {
        let json = r#"{ "phonology": { "vowels": [] } }"#;
        let settings = LanguageConfig::from_json(json).unwrap().normalize();
        assert!(settings.phonology.inventory.vowels.is_empty());
        assert!(!settings.phonology.inventory.consonants.is_empty());
    }

    #[test]
    fn test_override_text_beats_explicit_list() {
        let json = r#"{ "phonology": { "style": "elven", "consonants": ["p"], "consonantText": "k g" } }"#;
        let settings = LanguageConfig::from_json(json).unwrap().normalize();
        assert_eq!(settings.phonology.inventory.consonants, vec!["k", "g"]);
    }

    #[test]
    fn test_direction_render_line() {
        assert_eq!(ScriptDirection::Ltr.render_line("ka lo mi"), "ka lo mi");
        assert_eq!(ScriptDirection::Rtl.render_line("ka lo mi"), "mi lo ka");
        assert_eq!(ScriptDirection::Ttb.render_line("ka lo"), "ka\nlo");
    }

    #[test]
    fn test_lexicon_size_sentence_counts() {
        let settings: LexiconConfig = serde_json::from_str(r#"{ "size": "large" }"#).unwrap();
        assert_eq!(settings.size.sentence_count(), 8);
        assert_eq!(LexiconSize::from("huge".to_string()), LexiconSize::Medium);
    }
}
