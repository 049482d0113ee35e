// CLI entry point for the voidtongue conlang generator.
//
// Builds a `Session`, applies a configuration (JSON file, named preset, or
// defaults), and prints the alphabet with a generated glyph set, the lexicon,
// sample sentences, and any requested translations or letter words. The
// seed is always printed so a run can be reproduced with `--seed`.
//
// Usage:
//   voidtongue [OPTIONS]
//     --seed <N>             RNG seed (default: derived from the clock)
//     --preset <KEY>         Whole-language preset (elven, dwarven, ...)
//     --config <PATH>        LanguageConfig JSON file (overrides --preset)
//     --vocab <PATH>         Vocabulary JSON (default: embedded)
//     --bank <PATH>          Sentence bank JSON (default: embedded)
//     --procedural           Ignore the sentence bank, compose by slot filling
//     --sentences <N>        Sentence count (default: from lexicon size)
//     --translate <TEXT>     Translate English text (repeatable)
//     --letters <LETTERS>    Letter-substitution word (repeatable)
//     --json                 Emit one JSON report instead of text
//
// Logging goes to stderr and is controlled by `RUST_LOG` (default `warn`).

use std::io::Write;
use std::path::{Path, PathBuf};
use std::time::{SystemTime, UNIX_EPOCH};

use anyhow::{Context, Result, bail};
use clap::Parser;
use serde::Serialize;
use tracing_subscriber::EnvFilter;
use voidtongue_lang::config::ScriptDirection;
use voidtongue_lang::presets::{LANGUAGE_PRESETS, find_language_preset};
use voidtongue_lang::{LanguageConfig, LexEntry, Resources, SentenceResult, Session};

#[derive(Debug, Parser)]
#[command(name = "voidtongue", version, about = "Generate a constructed language")]
struct Cli {
    /// RNG seed; derived from the system clock when omitted.
    #[arg(long)]
    seed: Option<u64>,

    /// Whole-language preset key.
    #[arg(long)]
    preset: Option<String>,

    /// LanguageConfig JSON file. Takes precedence over --preset.
    #[arg(long)]
    config: Option<PathBuf>,

    /// Vocabulary JSON file.
    #[arg(long)]
    vocab: Option<PathBuf>,

    /// Sentence bank JSON file.
    #[arg(long)]
    bank: Option<PathBuf>,

    /// Compose sentences by slot filling instead of from the bank.
    #[arg(long)]
    procedural: bool,

    /// Number of sample sentences.
    #[arg(long)]
    sentences: Option<usize>,

    /// English text to translate.
    #[arg(long)]
    translate: Vec<String>,

    /// Letters to turn into a word.
    #[arg(long)]
    letters: Vec<String>,

    /// Print a JSON report.
    #[arg(long)]
    json: bool,
}

#[derive(Debug, Serialize)]
struct Report<'a> {
    seed: u64,
    alphabet: Vec<(String, &'static str)>,
    glyphs: Vec<String>,
    lexicon: &'a [LexEntry],
    sentences: Vec<SentenceResult>,
    translations: Vec<SentenceResult>,
    letter_words: Vec<(String, String)>,
    custom: &'a [LexEntry],
}

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")))
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();
    let seed = cli.seed.unwrap_or_else(clock_seed);
    let config = load_config(cli.config.as_deref(), cli.preset.as_deref())?;
    tracing::info!(seed, preset = cli.preset.as_deref(), procedural = cli.procedural, "generating language");

    let mut resources = Resources::load(cli.vocab.as_deref(), cli.bank.as_deref());
    if cli.procedural {
        resources.bank = None;
    }

    let mut session = Session::new(seed);
    session.initialize(resources);
    let mut sentences = session.receive_config(&config);
    if let Some(count) = cli.sentences {
        sentences = session.reroll_sentences(count);
    }
    let translations: Vec<SentenceResult> = cli.translate.iter().map(|t| session.translate(t)).collect();
    let letter_words: Vec<(String, String)> = cli
        .letters
        .iter()
        .map(|l| (l.clone(), session.custom_word_from_letters(l)))
        .collect();

    let glyphs = session.glyph_alphabet();

    let mut out = std::io::stdout().lock();
    if cli.json {
        let report = Report {
            seed,
            alphabet: session.alphabet(),
            glyphs,
            lexicon: session.lexicon().all(),
            sentences,
            translations,
            letter_words,
            custom: session.custom_lexicon().all(),
        };
        serde_json::to_writer_pretty(&mut out, &report).context("writing JSON report")?;
        writeln!(out)?;
        return Ok(());
    }

    let direction = session.settings().writing.direction;
    writeln!(out, "seed: {seed}")?;
    print_alphabet(&mut out, &session)?;
    writeln!(out, "\n== glyphs ==")?;
    writeln!(out, "{}", glyphs.join(" "))?;
    print_lexicon(&mut out, &session)?;
    writeln!(out, "\n== sentences ==")?;
    for sentence in &sentences {
        print_sentence(&mut out, sentence, direction)?;
    }
    if !translations.is_empty() {
        writeln!(out, "\n== translations ==")?;
        for sentence in &translations {
            print_sentence(&mut out, sentence, direction)?;
        }
    }
    if !letter_words.is_empty() {
        writeln!(out, "\n== letter words ==")?;
        for (letters, word) in &letter_words {
            writeln!(out, "{letters} → {word}")?;
        }
    }
    Ok(())
}

fn clock_seed() -> u64 {
    SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .map(|d| d.as_nanos() as u64)
        .unwrap_or(0)
}

/// Resolve the language configuration: file, then preset, then defaults.
fn load_config(path: Option<&Path>, preset: Option<&str>) -> Result<LanguageConfig> {
    if let Some(path) = path {
        let json = std::fs::read_to_string(path).with_context(|| format!("reading {}", path.display()))?;
        return LanguageConfig::from_json(&json).with_context(|| format!("parsing {}", path.display()));
    }
    match preset {
        None => Ok(LanguageConfig::default()),
        Some(key) => match find_language_preset(key) {
            Some(preset) => Ok(preset.to_config()),
            None => {
                let known: Vec<&str> = LANGUAGE_PRESETS.iter().map(|p| p.key).collect();
                bail!("unknown preset {key:?}; expected one of {}", known.join(", "))
            }
        },
    }
}

fn print_alphabet(out: &mut impl Write, session: &Session) -> Result<()> {
    writeln!(out, "\n== alphabet ==")?;
    let row: Vec<String> = session
        .alphabet()
        .iter()
        .map(|(phoneme, roman)| format!("{phoneme}={roman}"))
        .collect();
    writeln!(out, "{}", row.join(" "))?;
    Ok(())
}

fn print_lexicon(out: &mut impl Write, session: &Session) -> Result<()> {
    writeln!(out, "\n== lexicon ==")?;
    let lexicon = session.lexicon();
    for (pos, count) in lexicon.category_counts() {
        writeln!(out, "[{}] {count}", pos.label())?;
        for entry in lexicon.by_pos(pos) {
            writeln!(out, "  {:<12} {}", entry.gloss, entry.display_form())?;
        }
    }
    Ok(())
}

fn print_sentence(out: &mut impl Write, sentence: &SentenceResult, direction: ScriptDirection) -> Result<()> {
    writeln!(out, "{}", direction.render_line(&sentence.native_text))?;
    if let Some(gloss) = &sentence.gloss_line {
        writeln!(out, "  {gloss}")?;
    }
    writeln!(out, "  \"{}\"", sentence.english_text)?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;
    use voidtongue_lang::{Vocabulary, WordOrder};

    #[test]
    fn test_cli_definition_is_valid() {
        Cli::command().debug_assert();
    }

    #[test]
    fn test_repeatable_flags() {
        let cli = Cli::parse_from(["voidtongue", "--seed", "5", "--translate", "a", "--translate", "b", "--procedural"]);
        assert_eq!(cli.seed, Some(5));
        assert_eq!(cli.translate, vec!["a", "b"]);
        assert!(cli.procedural);
    }

    #[test]
    fn test_load_config_preset_and_default() {
        let default = load_config(None, None).unwrap();
        assert_eq!(default.grammar.word_order, WordOrder::Svo);
        let dwarven = load_config(None, Some("dwarven")).unwrap();
        assert_eq!(dwarven.phonology.style.as_deref(), Some("dwarven"));
        assert!(load_config(None, Some("martian")).is_err());
    }

    #[test]
    fn test_lexicon_groups_have_distinct_labels() {
        let vocabulary = Vocabulary::from_json(r#"{ "adjectives": ["red"], "descriptors": ["pale"] }"#).unwrap();
        let mut session = Session::new(3);
        session.initialize(Resources {
            vocabulary,
            bank: None,
        });
        let mut out = Vec::new();
        print_lexicon(&mut out, &session).unwrap();
        let text = String::from_utf8(out).unwrap();
        assert!(text.contains("[adjective] 1"), "{text}");
        assert!(text.contains("[descriptor] 1"), "{text}");
    }

    #[test]
    fn test_load_config_missing_file_errors() {
        let err = load_config(Some(Path::new("/nonexistent/voidtongue.json")), None).unwrap_err();
        assert!(err.to_string().contains("reading"));
    }
}
