// Word synthesis: syllables → stem → optional derivation → optional drift.
//
// Algorithm for one word:
// 1. If either phoneme class is empty, return `PLACEHOLDER_WORD`.
// 2. Lay out syllable patterns. A fixed preset draws a syllable count
//    uniformly in [1, max_syllables]; a hyphenated preset ("cv-cvc") cycles
//    its parts by syllable index. The `"wild"` preset asks the `WordGrammar`
//    for a part-of-speech skeleton instead, truncated to max_syllables.
// 3. Realize and concatenate the syllables. An empty stem becomes
//    `PLACEHOLDER_WORD`.
// 4. When a `GrammarConfig` is supplied, attach at most one derivational
//    affix with probability taken from the part of speech's richness dial.
// 5. With the etymology dial's probability, apply one sound-change rule to
//    the whole word.
//
// Every random draw goes through the caller's `LangRng`, so a seed fixes the
// output. See `phonology.rs` for slot expansion and `sound_change.rs` for
// the drift rules.

use crate::config::{GrammarConfig, PhonologyConfig};
use crate::grammar::WordGrammar;
use crate::phonology::build_syllable;
use crate::sound_change::{DEFAULT_RULES, SoundChange, apply_random};
use crate::types::{DerivationStyle, Etymology, PLACEHOLDER_WORD, PartOfSpeech};
use voidtongue_prng::LangRng;

/// Syllable preset keyword that defers to the word grammar.
pub const WILD_PRESET: &str = "wild";

/// Pattern of the fresh syllable attached by derivational affixation.
const AFFIX_PATTERN: &str = "CV";

/// Where a derivational affix was attached.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AffixPlacement {
    Prefix,
    Suffix,
    Infix,
    Compound,
}

/// Borrowed view of everything needed to synthesize words.
#[derive(Debug, Clone, Copy)]
pub struct WordSynthesizer<'a> {
    pub phonology: &'a PhonologyConfig,
    pub grammar: Option<&'a GrammarConfig>,
    pub etymology: Etymology,
    pub word_grammar: &'a WordGrammar,
    pub sound_changes: &'a [SoundChange],
}

impl<'a> WordSynthesizer<'a> {
    pub fn new(phonology: &'a PhonologyConfig, word_grammar: &'a WordGrammar) -> Self {
        WordSynthesizer {
            phonology,
            grammar: None,
            etymology: Etymology::None,
            word_grammar,
            sound_changes: DEFAULT_RULES,
        }
    }

    pub fn with_grammar(mut self, grammar: &'a GrammarConfig) -> Self {
        self.grammar = Some(grammar);
        self
    }

    pub fn with_etymology(mut self, etymology: Etymology) -> Self {
        self.etymology = etymology;
        self
    }

    /// Synthesize one word for the given part of speech.
    pub fn synthesize(&self, pos: PartOfSpeech, rng: &mut LangRng) -> String {
        if !self.phonology.inventory.is_usable() {
            return PLACEHOLDER_WORD.to_string();
        }

        let stem = self.stem(pos, rng);
        if stem.is_empty() {
            return PLACEHOLDER_WORD.to_string();
        }

        let mut word = stem;
        if let Some(grammar) = self.grammar {
            let richness = match pos {
                PartOfSpeech::Verb => grammar.verb_morph,
                _ => grammar.noun_morph,
            };
            if rng.random_bool(richness.derivation_probability()) {
                word = self.derive(&word, grammar.derivation, rng).0;
            }
        }

        if rng.random_bool(self.etymology.sound_change_probability()) {
            word = apply_random(&word, self.sound_changes, rng);
        }
        word
    }

    /// Concatenated syllables with no affixation. May be empty.
    pub fn stem(&self, pos: PartOfSpeech, rng: &mut LangRng) -> String {
        self.syllable_patterns(pos, rng)
            .iter()
            .map(|pattern| build_syllable(pattern, &self.phonology.inventory, rng))
            .collect()
    }

    /// Syllable patterns for one word, in order.
    pub fn syllable_patterns(&self, pos: PartOfSpeech, rng: &mut LangRng) -> Vec<String> {
        let max = self.phonology.max_syllables.max(1);
        let preset = self.phonology.syllable_preset.trim();

        if preset.eq_ignore_ascii_case(WILD_PRESET) {
            let mut skeleton = self.word_grammar.skeleton(pos, rng);
            skeleton.truncate(max);
            return skeleton;
        }

        let parts = preset_parts(preset);
        let count = rng.range_usize_inclusive(1, max);
        (0..count).map(|i| parts[i % parts.len()].to_string()).collect()
    }

    /// Attach one derivational affix according to `style`.
    pub fn derive(
        &self,
        stem: &str,
        style: DerivationStyle,
        rng: &mut LangRng,
    ) -> (String, AffixPlacement) {
        let placement = match style {
            DerivationStyle::Prefixing => AffixPlacement::Prefix,
            DerivationStyle::Suffixing => AffixPlacement::Suffix,
            DerivationStyle::Infixing => AffixPlacement::Infix,
            DerivationStyle::Compounding => AffixPlacement::Compound,
            DerivationStyle::Mixed => {
                const MIXED: [AffixPlacement; 3] =
                    [AffixPlacement::Prefix, AffixPlacement::Suffix, AffixPlacement::Infix];
                MIXED[rng.range_usize(0, MIXED.len())]
            }
        };

        let inventory = &self.phonology.inventory;
        let word = match placement {
            AffixPlacement::Prefix => {
                let affix = build_syllable(AFFIX_PATTERN, inventory, rng);
                format!("{affix}{stem}")
            }
            AffixPlacement::Suffix => {
                let affix = build_syllable(AFFIX_PATTERN, inventory, rng);
                format!("{stem}{affix}")
            }
            AffixPlacement::Infix => {
                let affix = build_syllable(AFFIX_PATTERN, inventory, rng);
                let mid = stem.chars().count() / 2;
                let split = stem.char_indices().nth(mid).map_or(stem.len(), |(i, _)| i);
                format!("{}{affix}{}", &stem[..split], &stem[split..])
            }
            AffixPlacement::Compound => {
                let root_pattern = self.compound_root_pattern();
                let root = build_syllable(root_pattern, inventory, rng);
                format!("{stem}{root}")
            }
        };
        (word, placement)
    }

    fn compound_root_pattern(&self) -> &str {
        let preset = self.phonology.syllable_preset.trim();
        if preset.eq_ignore_ascii_case(WILD_PRESET) {
            AFFIX_PATTERN
        } else {
            preset_parts(preset)[0]
        }
    }
}

/// Split a preset into its hyphen-delimited parts. Never returns an empty list.
fn preset_parts(preset: &str) -> Vec<&str> {
    let parts: Vec<&str> = preset.split('-').filter(|p| !p.is_empty()).collect();
    if parts.is_empty() { vec![AFFIX_PATTERN] } else { parts }
}

/// Synthesize one word without needing to assemble a `WordSynthesizer`.
pub fn synthesize(
    phonology: &PhonologyConfig,
    grammar: Option<&GrammarConfig>,
    etymology: Etymology,
    pos: PartOfSpeech,
    rng: &mut LangRng,
) -> String {
    let word_grammar = WordGrammar::default();
    let mut synth = WordSynthesizer::new(phonology, &word_grammar).with_etymology(etymology);
    synth.grammar = grammar;
    synth.synthesize(pos, rng)
}
