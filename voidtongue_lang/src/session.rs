// Session: the explicit context object a collaborator (CLI, UI) drives.
//
// A `Session` owns everything that lives across calls: the seeded `LangRng`,
// the loaded `Resources`, the normalized `Settings`, the current `Lexicon`,
// and the `CustomLexicon`. There is no global state; two sessions with the
// same seed, resources, and call sequence produce identical output.
//
// Rebuilds build a complete new `Lexicon` before assigning it, so a reader
// never sees a half-built one. The custom lexicon is only ever appended to;
// neither `reroll_lexicon` nor `receive_config` clears it.

use crate::config::{LanguageConfig, Settings};
use crate::grammar::WordGrammar;
use crate::letters::{alphabet_map, generate_glyphs, word_from_letters};
use crate::lexicon::{CustomLexicon, Lexicon, LexiconBuilder};
use crate::resources::Resources;
use crate::sentence::{SentenceContext, compose, translate_text};
use crate::synth::WordSynthesizer;
use crate::types::{LexEntry, SentenceResult};
use voidtongue_prng::LangRng;

#[derive(Debug, Clone)]
pub struct Session {
    seed: u64,
    rng: LangRng,
    resources: Resources,
    settings: Settings,
    word_grammar: WordGrammar,
    lexicon: Lexicon,
    custom: CustomLexicon,
}

fn builder<'a>(settings: &'a Settings, word_grammar: &'a WordGrammar) -> LexiconBuilder<'a> {
    let synth = WordSynthesizer::new(&settings.phonology, word_grammar)
        .with_grammar(&settings.grammar)
        .with_etymology(settings.lexicon.etymology);
    LexiconBuilder::new(synth, settings.lexicon.proper_names)
}

impl Session {
    /// An uninitialized session: default settings, no resources, empty
    /// lexicon.
    pub fn new(seed: u64) -> Self {
        Session {
            seed,
            rng: LangRng::new(seed),
            resources: Resources::default(),
            settings: Settings::default(),
            word_grammar: WordGrammar::default(),
            lexicon: Lexicon::default(),
            custom: CustomLexicon::default(),
        }
    }

    pub fn seed(&self) -> u64 {
        self.seed
    }

    pub fn settings(&self) -> &Settings {
        &self.settings
    }

    pub fn lexicon(&self) -> &Lexicon {
        &self.lexicon
    }

    pub fn custom_lexicon(&self) -> &CustomLexicon {
        &self.custom
    }

    /// Install resources and build the first lexicon.
    pub fn initialize(&mut self, resources: Resources) -> &Lexicon {
        tracing::info!(
            glosses = resources.vocabulary.buckets().iter().map(|(_, g)| g.len()).sum::<usize>(),
            bank = resources.bank.is_some(),
            "session initialized"
        );
        self.resources = resources;
        self.reroll_lexicon()
    }

    /// Apply a new configuration: rebuild the lexicon and produce the
    /// configured number of sample sentences.
    pub fn receive_config(&mut self, config: &LanguageConfig) -> Vec<SentenceResult> {
        self.settings = config.normalize();
        tracing::debug!(settings = ?self.settings, "configuration received");
        self.reroll_lexicon();
        self.reroll_sentences(self.settings.lexicon.size.sentence_count())
    }

    /// Discard the lexicon and synthesize a fresh one. Custom words are kept.
    pub fn reroll_lexicon(&mut self) -> &Lexicon {
        let lexicon = builder(&self.settings, &self.word_grammar).build(&self.resources.vocabulary, &mut self.rng);
        if lexicon.is_empty() {
            tracing::warn!("vocabulary is empty; lexicon has no entries");
        }
        self.lexicon = lexicon;
        &self.lexicon
    }

    /// Compose up to `count` sentences. Fewer come back when the lexicon
    /// cannot support procedural composition and no bank is loaded.
    pub fn reroll_sentences(&mut self, count: usize) -> Vec<SentenceResult> {
        let Session {
            rng,
            resources,
            settings,
            word_grammar,
            lexicon,
            custom,
            ..
        } = self;
        let ctx = SentenceContext {
            lexicon,
            grammar: &settings.grammar,
            builder: builder(settings, word_grammar),
        };
        let sentences: Vec<SentenceResult> = (0..count)
            .filter_map(|_| compose(resources.bank.as_ref(), &ctx, custom, rng))
            .collect();
        if sentences.len() < count {
            tracing::debug!(requested = count, produced = sentences.len(), "short sentence batch");
        }
        sentences
    }

    /// Translate arbitrary English text. Unknown words become custom words
    /// and are reused on later calls.
    pub fn translate(&mut self, text: &str) -> SentenceResult {
        let Session {
            rng,
            settings,
            word_grammar,
            lexicon,
            custom,
            ..
        } = self;
        let ctx = SentenceContext {
            lexicon,
            grammar: &settings.grammar,
            builder: builder(settings, word_grammar),
        };
        translate_text(text, &ctx, custom, rng)
    }

    /// Deterministic letter-substitution word over the current inventory.
    pub fn custom_word_from_letters(&self, letters: &str) -> String {
        word_from_letters(letters, &self.settings.phonology.inventory)
    }

    /// Look a gloss up in the lexicon, then in the custom lexicon.
    pub fn lookup(&self, gloss: &str) -> Option<&LexEntry> {
        self.lexicon.find(gloss).or_else(|| self.custom.find(gloss))
    }

    /// Draw a glyph alphabet of the configured size from the current
    /// inventory. Consumes randomness from the session stream.
    pub fn glyph_alphabet(&mut self) -> Vec<String> {
        generate_glyphs(
            &self.settings.phonology.inventory,
            self.settings.writing.alphabet_size,
            &mut self.rng,
        )
    }

    /// Phoneme → romanization pairs for the current inventory.
    pub fn alphabet(&self) -> Vec<(String, &'static str)> {
        alphabet_map(&self.settings.phonology.inventory)
    }
}
