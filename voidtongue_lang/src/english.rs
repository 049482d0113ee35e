// English realization: verb conjugation and gloss-slot sentence assembly.
//
// `conjugate` applies regular English spelling rules only; irregular verbs
// come out regularized ("see" → "sees", "seed" in the past). The progressive
// is the bare participle with no auxiliary ("bake" → "baking").
//
// `realize` fills the fixed template
// `the [adj] subject verb the object [adv].` with the verb in the present
// third-person singular.

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Tense {
    Present,
    Past,
    Progressive,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Person {
    /// Third person singular.
    #[serde(rename = "3sg")]
    ThirdSingular,
    /// Every other person and number.
    #[serde(rename = "other")]
    Other,
}

/// Conjugate a regular English verb.
pub fn conjugate(verb: &str, tense: Tense, person: Person) -> String {
    match tense {
        Tense::Past => {
            if verb.ends_with('e') {
                format!("{verb}d")
            } else if let Some(stem) = verb.strip_suffix('y') {
                format!("{stem}ied")
            } else {
                format!("{verb}ed")
            }
        }
        Tense::Progressive => {
            let stem = verb.strip_suffix('e').unwrap_or(verb);
            format!("{stem}ing")
        }
        Tense::Present => match person {
            Person::ThirdSingular => {
                if verb.ends_with(['s', 'x', 'z']) {
                    format!("{verb}es")
                } else if let Some(stem) = verb.strip_suffix('y') {
                    format!("{stem}ies")
                } else {
                    format!("{verb}s")
                }
            }
            Person::Other => verb.to_string(),
        },
    }
}

/// English glosses for one procedurally composed sentence.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct GlossSlots {
    pub subject: String,
    pub verb: String,
    pub object: String,
    pub adjective: Option<String>,
    pub adverb: Option<String>,
}

/// Assemble an English sentence from gloss slots.
pub fn realize(slots: &GlossSlots) -> String {
    let mut words: Vec<&str> = vec!["the"];
    if let Some(adj) = slots.adjective.as_deref().filter(|a| !a.is_empty()) {
        words.push(adj);
    }
    words.push(&slots.subject);
    let verb = conjugate(&slots.verb, Tense::Present, Person::ThirdSingular);
    words.push(&verb);
    words.push("the");
    words.push(&slots.object);
    if let Some(adv) = slots.adverb.as_deref().filter(|a| !a.is_empty()) {
        words.push(adv);
    }
    format!("{}.", words.join(" "))
}
