// External data: the vocabulary and the sentence bank.
//
// Both are plain JSON documents. The `load_*` functions read a file and
// report failures as `ResourceError`; `Resources::load` is the forgiving
// entry point the session uses, turning any failure into fallback data plus
// a `tracing::warn!`. A missing vocabulary yields an empty one (and so an
// empty lexicon); a missing bank yields `SentenceBank::fallback()`.
//
// Defaults ship inside the binary via `include_str!`, mirroring how the
// vocabulary files under `data/` are meant to be edited and rebuilt.

use crate::lexicon::Vocabulary;
use crate::sentence::SentenceBank;
use std::path::{Path, PathBuf};

#[derive(Debug, thiserror::Error)]
pub enum ResourceError {
    #[error("failed to read {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("malformed JSON in {path}: {source}")]
    Json {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },
}

fn read(path: &Path) -> Result<String, ResourceError> {
    std::fs::read_to_string(path).map_err(|source| ResourceError::Io {
        path: path.to_path_buf(),
        source,
    })
}

/// Read a vocabulary file.
pub fn load_vocabulary(path: &Path) -> Result<Vocabulary, ResourceError> {
    Vocabulary::from_json(&read(path)?).map_err(|source| ResourceError::Json {
        path: path.to_path_buf(),
        source,
    })
}

/// Read a sentence-bank file.
pub fn load_sentence_bank(path: &Path) -> Result<SentenceBank, ResourceError> {
    SentenceBank::from_json(&read(path)?).map_err(|source| ResourceError::Json {
        path: path.to_path_buf(),
        source,
    })
}

/// The vocabulary embedded at compile time. Empty if the embedded file
/// fails to parse.
pub fn default_vocabulary() -> Vocabulary {
    let json = include_str!("../../data/vocabulary.json");
    Vocabulary::from_json(json).unwrap_or_else(|e| {
        tracing::warn!("embedded vocabulary.json is malformed: {e}");
        Vocabulary::default()
    })
}

/// The sentence bank embedded at compile time, or the built-in fallback.
pub fn default_sentence_bank() -> SentenceBank {
    let json = include_str!("../../data/sentence_bank.json");
    SentenceBank::from_json(json).unwrap_or_else(|e| {
        tracing::warn!("embedded sentence_bank.json is malformed: {e}");
        SentenceBank::fallback()
    })
}

/// Everything the session needs from outside. `bank: None` selects
/// procedural sentence composition.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Resources {
    pub vocabulary: Vocabulary,
    pub bank: Option<SentenceBank>,
}

impl Resources {
    /// Embedded vocabulary and sentence bank.
    pub fn embedded() -> Self {
        Resources {
            vocabulary: default_vocabulary(),
            bank: Some(default_sentence_bank()),
        }
    }

    /// Load from files, falling back per resource. `None` paths use the
    /// embedded defaults.
    pub fn load(vocabulary: Option<&Path>, bank: Option<&Path>) -> Self {
        let vocabulary = match vocabulary {
            None => default_vocabulary(),
            Some(path) => load_vocabulary(path).unwrap_or_else(|e| {
                tracing::warn!("{e}; continuing with an empty vocabulary");
                Vocabulary::default()
            }),
        };
        let bank = match bank {
            None => default_sentence_bank(),
            Some(path) => load_sentence_bank(path).unwrap_or_else(|e| {
                tracing::warn!("{e}; using the built-in sentence bank");
                SentenceBank::fallback()
            }),
        };
        Resources {
            vocabulary,
            bank: Some(bank),
        }
    }
}
