// Procedural constructed-language generation.
//
// Builds a conlang from a configuration: a phoneme inventory, word-formation
// rules, a lexicon mapped from an English vocabulary, and sample sentences
// with gloss lines and English translations. No I/O beyond reading JSON
// resources.
//
// Architecture, leaf-first:
// - `types.rs`: Core types: inventories, dial enums, `LexEntry`, `SentenceResult`
// - `presets.rs`: Named phonology profiles and whole-language presets
// - `config.rs`: JSON-facing `LanguageConfig` and its normalized `Settings`
// - `phonology.rs`: Syllable pattern expansion (C, V, X, L, S slots)
// - `grammar.rs`: Part-of-speech word pattern templates for the `wild` preset
// - `sound_change.rs`: Diachronic sound-change rules
// - `synth.rs`: Word synthesis, derivation, and drift
// - `morphology.rs`: Inflectional markers with vowel harmony
// - `lexicon.rs`: Vocabulary → `Lexicon`, plus the on-demand `CustomLexicon`
// - `english.rs`: Verb conjugation and English sentence realization
// - `sentence.rs`: Procedural and template-bank sentence composition
// - `letters.rs`: Letter-substitution words and the romanization table
// - `resources.rs`: Vocabulary and sentence-bank loading, `ResourceError`
// - `session.rs`: `Session`, the context object collaborators drive
//
// Determinism constraint: every random choice goes through a caller-owned
// `voidtongue_prng::LangRng`, and ordered maps are `BTreeMap`, so a seed
// reproduces a whole session.

pub mod config;
pub mod english;
pub mod grammar;
pub mod letters;
pub mod lexicon;
pub mod morphology;
pub mod phonology;
pub mod presets;
pub mod resources;
pub mod sentence;
pub mod session;
pub mod sound_change;
pub mod synth;
pub mod types;

// Re-export key types at crate root for convenience.
pub use config::{LanguageConfig, Settings};
pub use lexicon::{CustomLexicon, Lexicon, Vocabulary};
pub use resources::{ResourceError, Resources, default_sentence_bank, default_vocabulary};
pub use sentence::SentenceBank;
pub use session::Session;
pub use types::{LexEntry, PartOfSpeech, PhonemeInventory, SentenceResult, WordOrder};
pub use voidtongue_prng::LangRng;
