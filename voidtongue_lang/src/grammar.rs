// Word-shape grammar: part-of-speech keyed word patterns.
//
// A word pattern is a string over word-level symbols where `S` stands for
// "one syllable" and any other character is a one-slot syllable of its own
// (so the article pattern `"V"` is a bare vowel). `S` is expanded by drawing
// one pattern from the grammar's syllable set, giving the list of syllable
// patterns that `phonology::build_syllable` then realizes.
//
// Note that `S` means "syllable" only at this word level. Inside a syllable
// pattern the same letter is the sibilant slot.
//
// Used by `synth.rs` when the phonology's syllable preset is `"wild"`.

use crate::types::PartOfSpeech;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use voidtongue_prng::LangRng;

/// Key of the fallback pattern list.
pub const DEFAULT_KEY: &str = "default";

/// Word-shape keys with no `PartOfSpeech` of their own, reached through
/// `skeleton_for_key`.
pub const VERB_PAST_KEY: &str = "verb_past";
pub const COPULA_KEY: &str = "copula";

/// Part-of-speech → word-pattern alternatives, plus the syllable set that
/// `S` expands into.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct WordGrammar {
    pub syllable_patterns: Vec<String>,
    pub word_patterns: BTreeMap<String, Vec<String>>,
}

impl Default for WordGrammar {
    fn default() -> Self {
        let table: &[(&str, &[&str])] = &[
            (DEFAULT_KEY, &["S", "SS", "SSS"]),
            ("noun", &["S", "SS", "SSS"]),
            ("verb", &["S", "SS", "SSS"]),
            (VERB_PAST_KEY, &["S", "SS", "SSS"]),
            ("adjective", &["S", "SS"]),
            ("adverb", &["SS"]),
            ("pronoun", &["S"]),
            ("article", &["V", "S"]),
            ("preposition", &["S"]),
            ("conjunction", &["S"]),
            (COPULA_KEY, &["V", "CV"]),
        ];
        WordGrammar {
            syllable_patterns: vec!["CV".to_string(), "CVL".to_string(), "VC".to_string()],
            word_patterns: table
                .iter()
                .map(|(k, v)| (k.to_string(), v.iter().map(|p| p.to_string()).collect()))
                .collect(),
        }
    }
}

impl WordGrammar {
    /// Pick a word pattern for a part of speech, falling back to the
    /// `default` list and finally to a single syllable.
    pub fn pick_word_pattern(&self, pos: PartOfSpeech, rng: &mut LangRng) -> String {
        self.pick_pattern_for_key(pos.grammar_key(), rng)
    }

    /// Pick a word pattern by raw table key, with the same fallbacks.
    pub fn pick_pattern_for_key(&self, key: &str, rng: &mut LangRng) -> String {
        let candidates = self
            .word_patterns
            .get(key)
            .filter(|list| !list.is_empty())
            .or_else(|| self.word_patterns.get(DEFAULT_KEY));
        candidates
            .and_then(|list| rng.choose(list))
            .cloned()
            .unwrap_or_else(|| "S".to_string())
    }

    /// Expand a word pattern into syllable patterns.
    pub fn expand(&self, word_pattern: &str, rng: &mut LangRng) -> Vec<String> {
        word_pattern
            .chars()
            .map(|c| {
                if c == 'S' {
                    rng.choose(&self.syllable_patterns)
                        .cloned()
                        .unwrap_or_else(|| "CV".to_string())
                } else {
                    c.to_string()
                }
            })
            .collect()
    }

    /// Syllable-pattern skeleton for one word of the given part of speech.
    pub fn skeleton(&self, pos: PartOfSpeech, rng: &mut LangRng) -> Vec<String> {
        self.skeleton_for_key(pos.grammar_key(), rng)
    }

    /// Skeleton for a raw table key such as `COPULA_KEY`.
    pub fn skeleton_for_key(&self, key: &str, rng: &mut LangRng) -> Vec<String> {
        let pattern = self.pick_pattern_for_key(key, rng);
        self.expand(&pattern, rng)
    }
}
