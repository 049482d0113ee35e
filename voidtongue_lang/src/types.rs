// Core language types: phoneme inventories, configuration dials, lexical
// entries, and sentence results.
//
// The type hierarchy is:
// - `PhonemeInventory`: consonant and vowel grapheme lists
// - `PartOfSpeech`: lexicon bucket a word belongs to (plus `Custom`)
// - `WordOrder`: basic clause order used by the sentence composer
// - `Richness`: morphological dial (how often inflection/derivation fires)
// - `DerivationStyle`: where derivational and inflectional affixes attach
// - `Etymology`: how much diachronic sound change is layered onto words
// - `ProperNames`: how often lexicon entries are flagged as proper names
// - `LexEntry`: one gloss → native word mapping
// - `SentenceResult`: native text, English text, and optional gloss line
//
// Dial enums parse leniently from free-form keys (`from_key`) and serialize as
// lowercase strings. Unknown keys map to the documented default rather than
// failing; see `config.rs` for where that normalization happens.

use serde::{Deserialize, Serialize};

/// Placeholder surface form used whenever synthesis produces nothing.
pub const PLACEHOLDER_WORD: &str = "word";

/// The consonant and vowel graphemes available to a language.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct PhonemeInventory {
    pub consonants: Vec<String>,
    pub vowels: Vec<String>,
}

impl PhonemeInventory {
    pub fn new<C, V>(consonants: C, vowels: V) -> Self
    where
        C: IntoIterator,
        C::Item: Into<String>,
        V: IntoIterator,
        V::Item: Into<String>,
    {
        PhonemeInventory {
            consonants: consonants.into_iter().map(Into::into).collect(),
            vowels: vowels.into_iter().map(Into::into).collect(),
        }
    }

    /// Whether both classes have at least one member.
    pub fn is_usable(&self) -> bool {
        !self.consonants.is_empty() && !self.vowels.is_empty()
    }
}

/// Part of speech for a lexical entry.
///
/// The variants mirror the vocabulary buckets. `Custom` tags words created
/// on demand for glosses that are not in the vocabulary.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum PartOfSpeech {
    Noun,
    Verb,
    Adjective,
    Adverb,
    Descriptor,
    Preposition,
    Article,
    Pronoun,
    Conjunction,
    Custom,
}

impl PartOfSpeech {
    /// Key used to look up word patterns in a `WordGrammar`.
    pub fn grammar_key(self) -> &'static str {
        match self {
            PartOfSpeech::Noun => "noun",
            PartOfSpeech::Verb => "verb",
            PartOfSpeech::Adjective | PartOfSpeech::Descriptor => "adjective",
            PartOfSpeech::Adverb => "adverb",
            PartOfSpeech::Preposition => "preposition",
            PartOfSpeech::Article => "article",
            PartOfSpeech::Pronoun => "pronoun",
            PartOfSpeech::Conjunction => "conjunction",
            PartOfSpeech::Custom => "default",
        }
    }

    /// Distinct human-readable name for listings.
    pub fn label(self) -> &'static str {
        match self {
            PartOfSpeech::Noun => "noun",
            PartOfSpeech::Verb => "verb",
            PartOfSpeech::Adjective => "adjective",
            PartOfSpeech::Descriptor => "descriptor",
            PartOfSpeech::Adverb => "adverb",
            PartOfSpeech::Preposition => "preposition",
            PartOfSpeech::Article => "article",
            PartOfSpeech::Pronoun => "pronoun",
            PartOfSpeech::Conjunction => "conjunction",
            PartOfSpeech::Custom => "custom",
        }
    }
}

/// Basic clause word order.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase", from = "String")]
pub enum WordOrder {
    #[default]
    Svo,
    Sov,
    Vso,
    Osv,
    Ovs,
    Vos,
    Free,
}

impl From<String> for WordOrder {
    fn from(key: String) -> Self {
        WordOrder::from_key(&key)
    }
}

impl WordOrder {
    /// All fixed orders (everything except `Free`).
    pub const FIXED: [WordOrder; 6] = [
        WordOrder::Svo,
        WordOrder::Sov,
        WordOrder::Vso,
        WordOrder::Osv,
        WordOrder::Ovs,
        WordOrder::Vos,
    ];

    /// Parse a word-order key. Unrecognized keys fall back to SVO.
    pub fn from_key(key: &str) -> WordOrder {
        match key.trim().to_lowercase().as_str() {
            "svo" => WordOrder::Svo,
            "sov" => WordOrder::Sov,
            "vso" => WordOrder::Vso,
            "osv" => WordOrder::Osv,
            "ovs" => WordOrder::Ovs,
            "vos" => WordOrder::Vos,
            "free" => WordOrder::Free,
            other => {
                tracing::debug!(key = other, "unknown word order, using svo");
                WordOrder::Svo
            }
        }
    }

    /// Lowercase key, also used to select a sentence-bank bucket.
    pub fn key(self) -> &'static str {
        match self {
            WordOrder::Svo => "svo",
            WordOrder::Sov => "sov",
            WordOrder::Vso => "vso",
            WordOrder::Osv => "osv",
            WordOrder::Ovs => "ovs",
            WordOrder::Vos => "vos",
            WordOrder::Free => "free",
        }
    }
}

/// Morphological richness dial.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase", from = "String")]
pub enum Richness {
    None,
    Light,
    #[default]
    Moderate,
    Rich,
}

impl From<String> for Richness {
    fn from(key: String) -> Self {
        Richness::from_key(&key)
    }
}

impl Richness {
    /// Parse a richness key, accepting the aliases presets use
    /// ("very light", "medium", "complex", "very rich").
    pub fn from_key(key: &str) -> Richness {
        match key.trim().to_lowercase().as_str() {
            "none" | "off" => Richness::None,
            "light" | "very light" => Richness::Light,
            "moderate" | "medium" => Richness::Moderate,
            "rich" | "very rich" | "complex" => Richness::Rich,
            other => {
                tracing::debug!(key = other, "unknown morphology richness, using moderate");
                Richness::Moderate
            }
        }
    }

    /// Chance that one derivational affix is attached at synthesis time.
    pub fn derivation_probability(self) -> f64 {
        match self {
            Richness::None => 0.0,
            Richness::Light => 0.15,
            Richness::Moderate => 0.3,
            Richness::Rich => 0.5,
        }
    }
}

/// Where affixes attach when forming or inflecting words.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase", from = "String")]
pub enum DerivationStyle {
    #[default]
    Suffixing,
    Prefixing,
    Infixing,
    Compounding,
    Mixed,
}

impl From<String> for DerivationStyle {
    fn from(key: String) -> Self {
        DerivationStyle::from_key(&key)
    }
}

impl DerivationStyle {
    /// Parse a derivation key. Unrecognized keys fall back to suffixing.
    pub fn from_key(key: &str) -> DerivationStyle {
        match key.trim().to_lowercase().as_str() {
            "suffixing" => DerivationStyle::Suffixing,
            "prefixing" => DerivationStyle::Prefixing,
            "infixing" => DerivationStyle::Infixing,
            "compounding" => DerivationStyle::Compounding,
            "mixed" => DerivationStyle::Mixed,
            other => {
                tracing::debug!(key = other, "unknown derivation style, using suffixing");
                DerivationStyle::Suffixing
            }
        }
    }
}

/// How much diachronic sound change is layered onto freshly made words.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase", from = "String")]
pub enum Etymology {
    None,
    Light,
    #[default]
    Layered,
}

impl From<String> for Etymology {
    fn from(key: String) -> Self {
        Etymology::from_key(&key)
    }
}

impl Etymology {
    pub fn from_key(key: &str) -> Etymology {
        match key.trim().to_lowercase().as_str() {
            "none" | "off" => Etymology::None,
            "light" => Etymology::Light,
            "layered" => Etymology::Layered,
            other => {
                tracing::debug!(key = other, "unknown etymology setting, using layered");
                Etymology::Layered
            }
        }
    }

    /// Chance that one sound-change rule is applied to a new word.
    pub fn sound_change_probability(self) -> f64 {
        match self {
            Etymology::None => 0.0,
            Etymology::Light => 0.05,
            Etymology::Layered => 0.15,
        }
    }
}

/// How often lexicon entries are flagged as proper names.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase", from = "String")]
pub enum ProperNames {
    None,
    #[default]
    Light,
    Medium,
    Rich,
    #[serde(rename = "very rich")]
    VeryRich,
}

impl From<String> for ProperNames {
    fn from(key: String) -> Self {
        ProperNames::from_key(&key)
    }
}

impl ProperNames {
    pub fn from_key(key: &str) -> ProperNames {
        match key.trim().to_lowercase().as_str() {
            "none" | "off" => ProperNames::None,
            "light" => ProperNames::Light,
            "medium" | "moderate" => ProperNames::Medium,
            "rich" => ProperNames::Rich,
            "very rich" | "very-rich" => ProperNames::VeryRich,
            other => {
                tracing::debug!(key = other, "unknown proper-name setting, using light");
                ProperNames::Light
            }
        }
    }

    pub fn probability(self) -> f64 {
        match self {
            ProperNames::None => 0.0,
            ProperNames::Light => 0.12,
            ProperNames::Medium => 0.2,
            ProperNames::Rich => 0.35,
            ProperNames::VeryRich => 0.55,
        }
    }
}

/// One gloss → native word mapping.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LexEntry {
    /// English headword.
    pub gloss: String,
    /// Synthesized surface form. Never empty.
    pub native: String,
    /// Part of speech.
    pub pos: PartOfSpeech,
    /// Rendered with an initial capital by `display_form`.
    #[serde(default)]
    pub proper_name: bool,
}

impl LexEntry {
    /// The surface form as it should be shown to a reader. Proper names get
    /// an initial capital; `native` itself is never changed.
    pub fn display_form(&self) -> String {
        if self.proper_name {
            capitalize(&self.native)
        } else {
            self.native.clone()
        }
    }
}

/// One generated sentence.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SentenceResult {
    pub native_text: String,
    pub english_text: String,
    /// Token-aligned gloss, when the strategy produces one.
    pub gloss_line: Option<String>,
}

/// Capitalize the first character of a string.
pub fn capitalize(s: &str) -> String {
    let mut chars = s.chars();
    match chars.next() {
        None => String::new(),
        Some(c) => {
            let upper: String = c.to_uppercase().collect();
            format!("{}{}", upper, chars.as_str())
        }
    }
}
