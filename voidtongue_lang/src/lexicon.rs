// Lexicon construction: English vocabulary → freshly synthesized native words.
//
// `Vocabulary` is the JSON-loadable list of English glosses per part of
// speech. `LexiconBuilder` walks it bucket by bucket, synthesizing one native
// word per gloss, so entry order mirrors vocabulary order. Nouns may be
// flagged as proper names according to the `ProperNames` dial; the flag only
// affects `LexEntry::display_form`.
//
// A `Lexicon` is rebuilt wholesale on every reroll and never reuses earlier
// forms. The `CustomLexicon` is separate: it holds words coined on demand for
// glosses outside the vocabulary (translation, template sentences), is keyed
// by lowercase gloss, and survives rerolls of the main lexicon. Looking up
// the same unseen gloss twice returns the same entry.
//
// Entry storage follows a preserve-order design: a `Vec` in build order plus
// a `BTreeMap` index by lowercase gloss. No `HashMap`, so iteration order is
// deterministic for a given seed.

use crate::config::{GrammarConfig, LexiconConfig, PhonologyConfig};
use crate::grammar::WordGrammar;
use crate::synth::WordSynthesizer;
use crate::types::{LexEntry, PartOfSpeech, ProperNames};
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use voidtongue_prng::LangRng;

/// English glosses by part of speech, as loaded from `vocabulary.json`.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Vocabulary {
    pub nouns: Vec<String>,
    pub verbs: Vec<String>,
    pub adjectives: Vec<String>,
    pub adverbs: Vec<String>,
    pub descriptors: Vec<String>,
    pub prepositions: Vec<String>,
    pub articles: Vec<String>,
    pub pronouns: Vec<String>,
    pub conjunctions: Vec<String>,
}

impl Vocabulary {
    /// Parse a vocabulary from a JSON string.
    pub fn from_json(json: &str) -> Result<Self, serde_json::Error> {
        serde_json::from_str(json)
    }

    /// Buckets in build order.
    pub fn buckets(&self) -> [(PartOfSpeech, &[String]); 9] {
        [
            (PartOfSpeech::Noun, &self.nouns),
            (PartOfSpeech::Verb, &self.verbs),
            (PartOfSpeech::Adjective, &self.adjectives),
            (PartOfSpeech::Adverb, &self.adverbs),
            (PartOfSpeech::Descriptor, &self.descriptors),
            (PartOfSpeech::Preposition, &self.prepositions),
            (PartOfSpeech::Article, &self.articles),
            (PartOfSpeech::Pronoun, &self.pronouns),
            (PartOfSpeech::Conjunction, &self.conjunctions),
        ]
    }

    pub fn is_empty(&self) -> bool {
        self.buckets().iter().all(|(_, words)| words.is_empty())
    }
}

/// A built lexicon with query methods.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Lexicon {
    entries: Vec<LexEntry>,
    index: BTreeMap<String, usize>,
}

impl Lexicon {
    fn from_entries(entries: Vec<LexEntry>) -> Self {
        let mut index = BTreeMap::new();
        for (i, entry) in entries.iter().enumerate() {
            index.entry(entry.gloss.to_lowercase()).or_insert(i);
        }
        Lexicon { entries, index }
    }

    /// All entries in build order.
    pub fn all(&self) -> &[LexEntry] {
        &self.entries
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Filter entries by part of speech.
    pub fn by_pos(&self, pos: PartOfSpeech) -> Vec<&LexEntry> {
        self.entries.iter().filter(|e| e.pos == pos).collect()
    }

    /// Case-insensitive lookup across every part of speech. When a gloss
    /// appears in several buckets the first built entry wins.
    pub fn find(&self, gloss: &str) -> Option<&LexEntry> {
        self.index
            .get(&gloss.to_lowercase())
            .map(|&i| &self.entries[i])
    }

    /// Entry counts per part of speech, in enum order, omitting empty ones.
    pub fn category_counts(&self) -> BTreeMap<PartOfSpeech, usize> {
        let mut counts = BTreeMap::new();
        for entry in &self.entries {
            *counts.entry(entry.pos).or_insert(0) += 1;
        }
        counts
    }
}

/// Append-only table of words coined for glosses outside the vocabulary.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CustomLexicon {
    entries: Vec<LexEntry>,
    index: BTreeMap<String, usize>,
}

impl CustomLexicon {
    pub fn all(&self) -> &[LexEntry] {
        &self.entries
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn find(&self, gloss: &str) -> Option<&LexEntry> {
        self.index
            .get(&gloss.to_lowercase())
            .map(|&i| &self.entries[i])
    }

    /// Return the existing entry for `gloss` or coin, store, and return a
    /// new one.
    pub fn get_or_coin(
        &mut self,
        gloss: &str,
        builder: &LexiconBuilder<'_>,
        rng: &mut LangRng,
    ) -> &LexEntry {
        let key = gloss.to_lowercase();
        let i = match self.index.get(&key) {
            Some(&i) => i,
            None => {
                let entry = builder.coin(&key, PartOfSpeech::Custom, rng);
                tracing::debug!(gloss = %key, native = %entry.native, "coined custom word");
                self.entries.push(entry);
                self.index.insert(key, self.entries.len() - 1);
                self.entries.len() - 1
            }
        };
        &self.entries[i]
    }
}

/// Builds lexicon entries from a configured word synthesizer.
#[derive(Debug, Clone, Copy)]
pub struct LexiconBuilder<'a> {
    pub synth: WordSynthesizer<'a>,
    pub proper_names: ProperNames,
}

impl<'a> LexiconBuilder<'a> {
    pub fn new(synth: WordSynthesizer<'a>, proper_names: ProperNames) -> Self {
        LexiconBuilder { synth, proper_names }
    }

    /// Synthesize one entry for `gloss`.
    pub fn coin(&self, gloss: &str, pos: PartOfSpeech, rng: &mut LangRng) -> LexEntry {
        let native = self.synth.synthesize(pos, rng);
        let proper_name = pos == PartOfSpeech::Noun && rng.random_bool(self.proper_names.probability());
        LexEntry {
            gloss: gloss.to_string(),
            native,
            pos,
            proper_name,
        }
    }

    /// Build a complete lexicon, one entry per vocabulary gloss.
    pub fn build(&self, vocabulary: &Vocabulary, rng: &mut LangRng) -> Lexicon {
        let mut entries = Vec::new();
        for (pos, glosses) in vocabulary.buckets() {
            for gloss in glosses {
                entries.push(self.coin(gloss, pos, rng));
            }
        }
        tracing::debug!(entries = entries.len(), "built lexicon");
        Lexicon::from_entries(entries)
    }
}

/// Build a lexicon straight from configuration pieces.
pub fn build(
    vocabulary: &Vocabulary,
    phonology: &PhonologyConfig,
    grammar: &GrammarConfig,
    lexicon: &LexiconConfig,
    rng: &mut LangRng,
) -> Lexicon {
    let word_grammar = WordGrammar::default();
    let synth = WordSynthesizer::new(phonology, &word_grammar)
        .with_grammar(grammar)
        .with_etymology(lexicon.etymology);
    LexiconBuilder::new(synth, lexicon.proper_names).build(vocabulary, rng)
}
