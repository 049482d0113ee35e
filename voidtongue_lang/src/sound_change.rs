// Diachronic sound change: coarse drift rules applied to whole words.
//
// Each rule is a `SoundChange` variant holding a substitution table. Tables
// apply simultaneously in one left-to-right pass using longest match, so
// `p→f, f→v` turns "pf" into "fv", not "vv". Common digraphs ("th", "sh",
// "ch", ...) are atomic: a rule that only mentions "t" leaves "th" alone.
//
// `Everywhere` rewrites every match. `WordFinal` rewrites only a match that
// ends the word.
//
// New rules are added by extending `DEFAULT_RULES`; `synth.rs` draws one of
// them uniformly when a word is picked for drift.

use voidtongue_prng::LangRng;

/// Multi-character graphemes that substitution never splits.
const ATOMIC_DIGRAPHS: &[&str] = &["th", "dh", "sh", "zh", "ch", "kh", "gh", "ts", "ng"];

/// One substitution-based sound change.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SoundChange {
    Everywhere {
        label: &'static str,
        pairs: &'static [(&'static str, &'static str)],
    },
    WordFinal {
        label: &'static str,
        pairs: &'static [(&'static str, &'static str)],
    },
}

pub const DEFAULT_RULES: &[SoundChange] = &[
    SoundChange::Everywhere {
        label: "stop lenition",
        pairs: &[("p", "f"), ("t", "θ"), ("k", "x")],
    },
    SoundChange::Everywhere {
        label: "stop voicing",
        pairs: &[("p", "b"), ("t", "d"), ("k", "g")],
    },
    SoundChange::Everywhere {
        label: "sibilant fronting",
        pairs: &[("sh", "s"), ("ʃ", "s"), ("zh", "z"), ("ʒ", "z")],
    },
    SoundChange::Everywhere {
        label: "sibilant backing",
        pairs: &[("s", "ʃ"), ("z", "ʒ")],
    },
    SoundChange::Everywhere {
        label: "vowel raising",
        pairs: &[("e", "i"), ("o", "u")],
    },
    SoundChange::WordFinal {
        label: "final devoicing",
        pairs: &[("b", "p"), ("d", "t"), ("g", "k"), ("z", "s"), ("v", "f")],
    },
];

impl SoundChange {
    pub fn label(&self) -> &'static str {
        match self {
            SoundChange::Everywhere { label, .. } | SoundChange::WordFinal { label, .. } => *label,
        }
    }

    /// Apply this rule to a whole word.
    pub fn apply(&self, word: &str) -> String {
        match self {
            SoundChange::Everywhere { pairs, .. } => substitute(word, pairs, false),
            SoundChange::WordFinal { pairs, .. } => substitute(word, pairs, true),
        }
    }
}

fn substitute(word: &str, pairs: &[(&str, &str)], final_only: bool) -> String {
    let mut out = String::with_capacity(word.len());
    let mut rest = word;
    while let Some(c) = rest.chars().next() {
        let rule = pairs
            .iter()
            .filter(|(from, _)| rest.starts_with(from))
            .max_by_key(|(from, _)| from.len());
        let digraph = ATOMIC_DIGRAPHS
            .iter()
            .filter(|d| rest.starts_with(*d))
            .max_by_key(|d| d.len());

        match (rule, digraph) {
            (Some((from, to)), d) if d.is_none_or(|d| from.len() >= d.len()) => {
                if !final_only || rest.len() == from.len() {
                    out.push_str(to);
                } else {
                    out.push_str(from);
                }
                rest = &rest[from.len()..];
            }
            (_, Some(d)) => {
                out.push_str(d);
                rest = &rest[d.len()..];
            }
            _ => {
                out.push(c);
                rest = &rest[c.len_utf8()..];
            }
        }
    }
    out
}

/// Apply one rule drawn uniformly from `rules`. An empty rule set returns
/// the word unchanged.
pub fn apply_random(word: &str, rules: &[SoundChange], rng: &mut LangRng) -> String {
    match rng.choose(rules) {
        Some(rule) => {
            let changed = rule.apply(word);
            if changed != word {
                tracing::trace!(rule = rule.label(), from = word, to = %changed, "sound change");
            }
            changed
        }
        None => word.to_string(),
    }
}
