// Sentence composition: procedural slot filling and template-bank
// substitution.
//
// Strategy A (`compose_procedural`) draws subject and object nouns, a verb,
// and up to two descriptor words from the lexicon, arranges S/V/O by the
// configured word order, and runs nouns and verbs through `morphology.rs`.
// The adjective token always sits right before the subject and the adverb
// token right after the verb, whatever the order. English comes from
// `english::realize`, so it is always SVO.
//
// Strategy B (`compose_from_template`) picks an English template from the
// `SentenceBank` and substitutes every token with its native word, coining
// custom words for anything the lexicon lacks. The English side is the
// template verbatim. `translate_text` runs arbitrary input through the same
// token path.
//
// Gloss lines pair tokens as `native = gloss` joined with ` | `. Every slot
// is an independent draw, so a sentence may repeat a word across slots.

use crate::config::GrammarConfig;
use crate::english::{GlossSlots, realize};
use crate::lexicon::{CustomLexicon, Lexicon, LexiconBuilder};
use crate::morphology::{WordClass, inflect};
use crate::types::{LexEntry, PartOfSpeech, SentenceResult, WordOrder, capitalize};
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use voidtongue_prng::LangRng;

/// Chance that a template is drawn from the `"free"` bucket regardless of
/// the configured word order.
pub const FREE_BUCKET_CHANCE: f64 = 0.2;

/// Chance that each descriptor slot is filled when its pool is non-empty.
pub const DESCRIPTOR_CHANCE: f64 = 0.5;

/// Clause constituent.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Slot {
    Subject,
    Verb,
    Object,
}

/// Constituent order for a word order. `Free` has no fixed sequence and
/// reads as SVO here; see `resolve_order` for the per-sentence draw.
pub fn sequence_for(order: WordOrder) -> [Slot; 3] {
    use Slot::{Object as O, Subject as S, Verb as V};
    match order {
        WordOrder::Svo | WordOrder::Free => [S, V, O],
        WordOrder::Sov => [S, O, V],
        WordOrder::Vso => [V, S, O],
        WordOrder::Osv => [O, S, V],
        WordOrder::Ovs => [O, V, S],
        WordOrder::Vos => [V, O, S],
    }
}

/// Pick the concrete order for one sentence. Fixed orders pass through;
/// `Free` draws one of the six uniformly.
pub fn resolve_order(order: WordOrder, rng: &mut LangRng) -> WordOrder {
    match order {
        WordOrder::Free => *rng.choose(&WordOrder::FIXED).unwrap_or(&WordOrder::Svo),
        fixed => fixed,
    }
}

// ---------------------------------------------------------------------------
// Sentence bank
// ---------------------------------------------------------------------------

/// English template sentences keyed by word-order key, plus `"free"`.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct SentenceBank {
    pub buckets: BTreeMap<String, Vec<String>>,
}

impl SentenceBank {
    pub fn from_json(json: &str) -> Result<Self, serde_json::Error> {
        serde_json::from_str(json)
    }

    /// Built-in bank with one sentence per key, used when no bank resource
    /// can be loaded.
    pub fn fallback() -> Self {
        let pairs = [
            ("svo", "the hunter sees the wolf."),
            ("sov", "the hunter the wolf sees."),
            ("vso", "sees the hunter the wolf."),
            ("osv", "the wolf the hunter sees."),
            ("ovs", "the wolf sees the hunter."),
            ("vos", "sees the wolf the hunter."),
            ("free", "the river sings under the moon."),
        ];
        SentenceBank {
            buckets: pairs
                .into_iter()
                .map(|(key, sentence)| (key.to_string(), vec![sentence.to_string()]))
                .collect(),
        }
    }

    fn bucket(&self, key: &str) -> Option<&[String]> {
        self.buckets
            .get(key)
            .map(Vec::as_slice)
            .filter(|b| !b.is_empty())
    }

    /// Draw a template for `order`. With `FREE_BUCKET_CHANCE` the free
    /// bucket is used; otherwise the order's own bucket, falling back to
    /// `"svo"`. `None` when every candidate bucket is empty.
    pub fn pick(&self, order: WordOrder, rng: &mut LangRng) -> Option<&str> {
        let free = rng.random_bool(FREE_BUCKET_CHANCE);
        let bucket = free
            .then(|| self.bucket(WordOrder::Free.key()))
            .flatten()
            .or_else(|| self.bucket(order.key()))
            .or_else(|| self.bucket(WordOrder::Svo.key()))?;
        rng.choose(bucket).map(String::as_str)
    }
}

// ---------------------------------------------------------------------------
// Composition
// ---------------------------------------------------------------------------

/// Read-only inputs shared by both strategies.
#[derive(Debug, Clone, Copy)]
pub struct SentenceContext<'a> {
    pub lexicon: &'a Lexicon,
    pub grammar: &'a GrammarConfig,
    pub builder: LexiconBuilder<'a>,
}

/// One emitted token: native text and its gloss.
#[derive(Debug, Clone, PartialEq, Eq)]
struct Token {
    native: String,
    gloss: String,
}

fn gloss_line(tokens: &[Token]) -> String {
    tokens
        .iter()
        .map(|t| {
            if t.gloss.is_empty() {
                t.native.clone()
            } else {
                format!("{} = {}", t.native, t.gloss)
            }
        })
        .collect::<Vec<_>>()
        .join(" | ")
}

fn native_line(tokens: &[Token]) -> String {
    tokens
        .iter()
        .map(|t| t.native.as_str())
        .collect::<Vec<_>>()
        .join(" ")
}

/// Inflect a content word and build its token. Markers attach to the bare
/// native form; proper-name capitals are applied to the finished word.
fn inflected_token(entry: &LexEntry, class: WordClass, ctx: &SentenceContext<'_>, rng: &mut LangRng) -> Token {
    let richness = match class {
        WordClass::Noun => ctx.grammar.noun_morph,
        WordClass::Verb => ctx.grammar.verb_morph,
    };
    let inflected = inflect(&entry.native, class, richness, ctx.grammar.derivation, rng);
    let gloss = match inflected.marker {
        Some(affix) => format!("{}-{}", entry.gloss, affix.abbr),
        None => entry.gloss.clone(),
    };
    let native = if entry.proper_name {
        capitalize(&inflected.text)
    } else {
        inflected.text
    };
    Token { native, gloss }
}

/// Draw a descriptor from the first non-empty pool, or nothing.
fn pick_descriptor<'l>(pools: [&[&'l LexEntry]; 2], rng: &mut LangRng) -> Option<&'l LexEntry> {
    let pool = pools.into_iter().find(|p| !p.is_empty())?;
    if rng.random_bool(DESCRIPTOR_CHANCE) {
        rng.choose(pool).copied()
    } else {
        None
    }
}

/// Strategy A. `None` when the lexicon has no nouns or no verbs.
pub fn compose_procedural(ctx: &SentenceContext<'_>, rng: &mut LangRng) -> Option<SentenceResult> {
    let nouns = ctx.lexicon.by_pos(PartOfSpeech::Noun);
    let verbs = ctx.lexicon.by_pos(PartOfSpeech::Verb);
    if nouns.is_empty() || verbs.is_empty() {
        return None;
    }
    let descriptors = ctx.lexicon.by_pos(PartOfSpeech::Descriptor);
    let adjectives = ctx.lexicon.by_pos(PartOfSpeech::Adjective);
    let adverbs = ctx.lexicon.by_pos(PartOfSpeech::Adverb);

    let subject = *rng.choose(&nouns)?;
    let verb = *rng.choose(&verbs)?;
    let object = *rng.choose(&nouns)?;
    let adjective = pick_descriptor([descriptors.as_slice(), adjectives.as_slice()], rng);
    let adverb = pick_descriptor([adverbs.as_slice(), descriptors.as_slice()], rng);

    let order = resolve_order(ctx.grammar.word_order, rng);
    let mut tokens = Vec::with_capacity(5);
    for slot in sequence_for(order) {
        match slot {
            Slot::Subject => {
                if let Some(adj) = adjective {
                    tokens.push(Token {
                        native: adj.display_form(),
                        gloss: format!("{} (adj)", adj.gloss),
                    });
                }
                tokens.push(inflected_token(subject, WordClass::Noun, ctx, rng));
            }
            Slot::Verb => {
                tokens.push(inflected_token(verb, WordClass::Verb, ctx, rng));
                if let Some(adv) = adverb {
                    tokens.push(Token {
                        native: adv.display_form(),
                        gloss: format!("{} (adv)", adv.gloss),
                    });
                }
            }
            Slot::Object => tokens.push(inflected_token(object, WordClass::Noun, ctx, rng)),
        }
    }

    let english = realize(&GlossSlots {
        subject: subject.gloss.clone(),
        verb: verb.gloss.clone(),
        object: object.gloss.clone(),
        adjective: adjective.map(|e| e.gloss.clone()),
        adverb: adverb.map(|e| e.gloss.clone()),
    });

    Some(SentenceResult {
        native_text: native_line(&tokens),
        english_text: english,
        gloss_line: Some(gloss_line(&tokens)),
    })
}

/// Split a token into its word and trailing punctuation (anything that is
/// not a letter or digit, so `…` and `»` count too).
fn split_trailing_punctuation(token: &str) -> (&str, &str) {
    let word = token.trim_end_matches(|c: char| !c.is_alphanumeric());
    (word, &token[word.len()..])
}

/// Substitute every whitespace-separated token of `text` with its native
/// word. Lookup order: lexicon, custom lexicon, then a freshly coined custom
/// word.
fn substitute(
    text: &str,
    ctx: &SentenceContext<'_>,
    custom: &mut CustomLexicon,
    rng: &mut LangRng,
) -> Vec<Token> {
    let mut tokens = Vec::new();
    for raw in text.split_whitespace() {
        let (word, punct) = split_trailing_punctuation(raw);
        if word.is_empty() {
            tokens.push(Token {
                native: punct.to_string(),
                gloss: String::new(),
            });
            continue;
        }
        let key = word.to_lowercase();
        let native = match ctx.lexicon.find(&key).or_else(|| custom.find(&key)) {
            Some(entry) => entry.display_form(),
            None => custom.get_or_coin(&key, &ctx.builder, rng).display_form(),
        };
        tokens.push(Token {
            native: format!("{native}{punct}"),
            gloss: key,
        });
    }
    tokens
}

/// Strategy B. `None` when the bank has nothing for this order.
pub fn compose_from_template(
    bank: &SentenceBank,
    ctx: &SentenceContext<'_>,
    custom: &mut CustomLexicon,
    rng: &mut LangRng,
) -> Option<SentenceResult> {
    let template = bank.pick(ctx.grammar.word_order, rng)?;
    Some(translate_text(template, ctx, custom, rng))
}

/// Translate arbitrary English text token by token.
pub fn translate_text(
    text: &str,
    ctx: &SentenceContext<'_>,
    custom: &mut CustomLexicon,
    rng: &mut LangRng,
) -> SentenceResult {
    let tokens = substitute(text, ctx, custom, rng);
    SentenceResult {
        native_text: native_line(&tokens),
        english_text: text.to_string(),
        gloss_line: Some(gloss_line(&tokens)),
    }
}

/// Compose one sentence: template strategy when a bank is supplied,
/// procedural otherwise. A bank with nothing usable falls through to the
/// procedural strategy.
pub fn compose(
    bank: Option<&SentenceBank>,
    ctx: &SentenceContext<'_>,
    custom: &mut CustomLexicon,
    rng: &mut LangRng,
) -> Option<SentenceResult> {
    bank.and_then(|b| compose_from_template(b, ctx, custom, rng))
        .or_else(|| compose_procedural(ctx, rng))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::PhonologyConfig;
    use crate::grammar::WordGrammar;
    use crate::lexicon::Vocabulary;
    use crate::synth::WordSynthesizer;
    use crate::types::{DerivationStyle, PhonemeInventory, ProperNames, Richness};

    fn phonology() -> PhonologyConfig {
        PhonologyConfig {
            inventory: PhonemeInventory::new(["p", "t", "k", "l", "n"], ["a", "i", "o"]),
            syllable_preset: "cv".to_string(),
            max_syllables: 2,
        }
    }

    fn plain_grammar(order: WordOrder) -> GrammarConfig {
        GrammarConfig {
            word_order: order,
            noun_morph: Richness::None,
            verb_morph: Richness::None,
            ..Default::default()
        }
    }

    fn vocab() -> Vocabulary {
        Vocabulary {
            nouns: vec!["wolf".into(), "hunter".into()],
            verbs: vec!["see".into()],
            descriptors: vec!["pale".into()],
            adverbs: vec!["slowly".into()],
            ..Default::default()
        }
    }

    struct Fixture {
        phonology: PhonologyConfig,
        word_grammar: WordGrammar,
        grammar: GrammarConfig,
    }

    impl Fixture {
        fn new(order: WordOrder) -> Self {
            Fixture {
                phonology: phonology(),
                word_grammar: WordGrammar::default(),
                grammar: plain_grammar(order),
            }
        }

        fn builder(&self) -> LexiconBuilder<'_> {
            self.builder_with(ProperNames::None)
        }

        fn builder_with(&self, proper_names: ProperNames) -> LexiconBuilder<'_> {
            let synth = WordSynthesizer::new(&self.phonology, &self.word_grammar).with_grammar(&self.grammar);
            LexiconBuilder::new(synth, proper_names)
        }
    }

    #[test]
    fn test_sequences() {
        use Slot::{Object as O, Subject as S, Verb as V};
        assert_eq!(sequence_for(WordOrder::Svo), [S, V, O]);
        assert_eq!(sequence_for(WordOrder::Sov), [S, O, V]);
        assert_eq!(sequence_for(WordOrder::Vso), [V, S, O]);
        assert_eq!(sequence_for(WordOrder::Osv), [O, S, V]);
        assert_eq!(sequence_for(WordOrder::Ovs), [O, V, S]);
        assert_eq!(sequence_for(WordOrder::Vos), [V, O, S]);
        assert_eq!(sequence_for(WordOrder::from_key("nonsense")), [S, V, O]);
    }

    #[test]
    fn test_free_order_draws_every_fixed_order() {
        let mut rng = LangRng::new(17);
        let mut seen = Vec::new();
        for _ in 0..300 {
            let order = resolve_order(WordOrder::Free, &mut rng);
            assert_ne!(order, WordOrder::Free);
            if !seen.contains(&order) {
                seen.push(order);
            }
        }
        assert_eq!(seen.len(), WordOrder::FIXED.len());
    }

    #[test]
    fn test_procedural_needs_nouns_and_verbs() {
        let fx = Fixture::new(WordOrder::Svo);
        let builder = fx.builder();
        let mut rng = LangRng::new(1);
        let no_verbs = Vocabulary {
            nouns: vec!["wolf".into()],
            ..Default::default()
        };
        let lexicon = builder.build(&no_verbs, &mut rng);
        let ctx = SentenceContext {
            lexicon: &lexicon,
            grammar: &fx.grammar,
            builder,
        };
        assert!(compose_procedural(&ctx, &mut rng).is_none());
    }

    #[test]
    fn test_procedural_tokens_mirror_glosses() {
        let fx = Fixture::new(WordOrder::Sov);
        let builder = fx.builder();
        let mut rng = LangRng::new(2);
        let lexicon = builder.build(&vocab(), &mut rng);
        let ctx = SentenceContext {
            lexicon: &lexicon,
            grammar: &fx.grammar,
            builder,
        };
        for _ in 0..50 {
            let result = compose_procedural(&ctx, &mut rng).unwrap();
            let native: Vec<&str> = result.native_text.split(' ').collect();
            let gloss = result.gloss_line.unwrap();
            let pairs: Vec<&str> = gloss.split(" | ").collect();
            assert_eq!(native.len(), pairs.len());
            for (n, pair) in native.iter().zip(&pairs) {
                assert!(pair.starts_with(&format!("{n} = ")), "{pair} does not start with {n}");
            }
            // SOV puts the verb last unless an adverb follows it.
            let last = pairs.last().unwrap();
            assert!(last.ends_with("= see") || last.ends_with("(adv)"), "{gloss}");
            assert!(result.english_text.starts_with("the "));
            assert!(result.english_text.ends_with('.'));
        }
    }

    #[test]
    fn test_descriptor_placement() {
        let fx = Fixture::new(WordOrder::Vso);
        let builder = fx.builder();
        let mut rng = LangRng::new(3);
        let lexicon = builder.build(&vocab(), &mut rng);
        let ctx = SentenceContext {
            lexicon: &lexicon,
            grammar: &fx.grammar,
            builder,
        };
        let mut saw_both = false;
        for _ in 0..100 {
            let result = compose_procedural(&ctx, &mut rng).unwrap();
            let gloss = result.gloss_line.unwrap();
            let glosses: Vec<&str> = gloss.split(" | ").map(|p| p.split(" = ").nth(1).unwrap()).collect();
            // VSO: verb first, adverb right after it.
            assert_eq!(glosses[0], "see");
            if let Some(i) = glosses.iter().position(|g| g.ends_with("(adv)")) {
                assert_eq!(i, 1);
            }
            if let Some(i) = glosses.iter().position(|g| g.ends_with("(adj)")) {
                assert!(!glosses[i + 1].contains('('), "adjective must precede the subject");
                saw_both |= glosses.iter().any(|g| g.ends_with("(adv)"));
            }
        }
        assert!(saw_both);
    }

    #[test]
    fn test_inflected_gloss_carries_marker() {
        let mut fx = Fixture::new(WordOrder::Svo);
        fx.grammar.noun_morph = Richness::Rich;
        let builder = fx.builder();
        let mut rng = LangRng::new(4);
        let lexicon = builder.build(&vocab(), &mut rng);
        let ctx = SentenceContext {
            lexicon: &lexicon,
            grammar: &fx.grammar,
            builder,
        };
        let marked = (0..100)
            .filter_map(|_| compose_procedural(&ctx, &mut rng))
            .filter(|r| r.gloss_line.as_deref().is_some_and(|g| g.contains('-')))
            .count();
        assert!(marked > 0);
    }

    #[test]
    fn test_prefixed_proper_noun_keeps_initial_capital() {
        let mut fx = Fixture::new(WordOrder::Svo);
        fx.grammar.noun_morph = Richness::Rich;
        fx.grammar.derivation = DerivationStyle::Prefixing;
        let builder = fx.builder_with(ProperNames::VeryRich);
        let (lexicon, mut rng) = (0..100)
            .map(|seed| {
                let mut rng = LangRng::new(seed);
                (builder.build(&vocab(), &mut rng), rng)
            })
            .find(|(lexicon, _)| lexicon.all().iter().any(|e| e.proper_name))
            .unwrap();
        let ctx = SentenceContext {
            lexicon: &lexicon,
            grammar: &fx.grammar,
            builder,
        };

        let mut marked_proper = 0;
        for _ in 0..200 {
            let result = compose_procedural(&ctx, &mut rng).unwrap();
            let gloss = result.gloss_line.unwrap();
            for (word, pair) in result.native_text.split(' ').zip(gloss.split(" | ")) {
                assert!(
                    word.chars().skip(1).all(|c| !c.is_uppercase()),
                    "capital inside {word} ({gloss})"
                );
                let starts_upper = word.chars().next().is_some_and(char::is_uppercase);
                if starts_upper && pair.contains('-') {
                    marked_proper += 1;
                }
            }
        }
        assert!(marked_proper > 0);
        assert!(lexicon.all().iter().all(|e| e.native.chars().all(|c| !c.is_uppercase())));
    }

    #[test]
    fn test_unicode_trailing_punctuation_is_split() {
        let fx = Fixture::new(WordOrder::Svo);
        let builder = fx.builder();
        let mut rng = LangRng::new(11);
        let lexicon = builder.build(&vocab(), &mut rng);
        let ctx = SentenceContext {
            lexicon: &lexicon,
            grammar: &fx.grammar,
            builder,
        };
        let mut custom = CustomLexicon::default();
        let result = translate_text("wolf… hunter»", &ctx, &mut custom, &mut rng);
        let wolf = &lexicon.find("wolf").unwrap().native;
        let hunter = &lexicon.find("hunter").unwrap().native;
        assert_eq!(result.native_text, format!("{wolf}… {hunter}»"));
        assert!(custom.is_empty());
    }

    #[test]
    fn test_bank_pick_falls_back_to_svo() {
        let bank = SentenceBank::from_json(r#"{ "svo": ["the wolf runs."] }"#).unwrap();
        let mut rng = LangRng::new(5);
        for _ in 0..50 {
            assert_eq!(bank.pick(WordOrder::Osv, &mut rng), Some("the wolf runs."));
        }
        assert_eq!(SentenceBank::default().pick(WordOrder::Svo, &mut rng), None);
    }

    #[test]
    fn test_bank_free_bucket_sometimes_wins() {
        let bank = SentenceBank::from_json(r#"{ "sov": ["a b c."], "free": ["x y z."] }"#).unwrap();
        let mut rng = LangRng::new(6);
        let free = (0..1000)
            .filter(|_| bank.pick(WordOrder::Sov, &mut rng) == Some("x y z."))
            .count();
        assert!((100..300).contains(&free), "free bucket chosen {free} times");
    }

    #[test]
    fn test_fallback_bank_has_every_key() {
        let bank = SentenceBank::fallback();
        for order in WordOrder::FIXED {
            assert_eq!(bank.buckets[order.key()].len(), 1);
        }
        assert_eq!(bank.buckets["free"].len(), 1);
    }

    #[test]
    fn test_template_substitution_keeps_punctuation_and_english() {
        let fx = Fixture::new(WordOrder::Svo);
        let builder = fx.builder();
        let mut rng = LangRng::new(7);
        let lexicon = builder.build(&vocab(), &mut rng);
        let ctx = SentenceContext {
            lexicon: &lexicon,
            grammar: &fx.grammar,
            builder,
        };
        let mut custom = CustomLexicon::default();

        let result = translate_text("The Wolf, sees hunter!", &ctx, &mut custom, &mut rng);
        assert_eq!(result.english_text, "The Wolf, sees hunter!");
        let native: Vec<&str> = result.native_text.split(' ').collect();
        assert_eq!(native.len(), 4);
        let wolf = &lexicon.find("wolf").unwrap().native;
        assert_eq!(native[1], format!("{wolf},"));
        assert_eq!(native[3], format!("{}!", lexicon.find("hunter").unwrap().native));
        // "the" and "sees" are not in the lexicon and were coined.
        assert!(custom.find("the").is_some());
        assert!(custom.find("sees").is_some());
        assert_eq!(custom.len(), 2);
        assert!(result.gloss_line.unwrap().contains(&format!("{wolf}, = wolf")));
    }

    #[test]
    fn test_translate_reuses_custom_words() {
        let fx = Fixture::new(WordOrder::Svo);
        let builder = fx.builder();
        let mut rng = LangRng::new(8);
        let lexicon = builder.build(&vocab(), &mut rng);
        let ctx = SentenceContext {
            lexicon: &lexicon,
            grammar: &fx.grammar,
            builder,
        };
        let mut custom = CustomLexicon::default();
        let first = translate_text("dragon", &ctx, &mut custom, &mut rng);
        let second = translate_text("Dragon.", &ctx, &mut custom, &mut rng);
        assert_eq!(format!("{}.", first.native_text), second.native_text);
    }

    #[test]
    fn test_pure_punctuation_token_passes_through() {
        let fx = Fixture::new(WordOrder::Svo);
        let builder = fx.builder();
        let mut rng = LangRng::new(9);
        let lexicon = builder.build(&vocab(), &mut rng);
        let ctx = SentenceContext {
            lexicon: &lexicon,
            grammar: &fx.grammar,
            builder,
        };
        let mut custom = CustomLexicon::default();
        let result = translate_text("wolf ...", &ctx, &mut custom, &mut rng);
        assert!(result.native_text.ends_with(" ..."));
        assert!(custom.is_empty());
    }

    #[test]
    fn test_compose_prefers_bank() {
        let fx = Fixture::new(WordOrder::Svo);
        let builder = fx.builder();
        let mut rng = LangRng::new(10);
        let lexicon = builder.build(&vocab(), &mut rng);
        let ctx = SentenceContext {
            lexicon: &lexicon,
            grammar: &fx.grammar,
            builder,
        };
        let mut custom = CustomLexicon::default();
        let bank = SentenceBank::from_json(r#"{ "svo": ["wolf sees hunter."] }"#).unwrap();
        let from_bank = compose(Some(&bank), &ctx, &mut custom, &mut rng).unwrap();
        assert_eq!(from_bank.english_text, "wolf sees hunter.");

        let procedural = compose(None, &ctx, &mut custom, &mut rng).unwrap();
        assert!(procedural.english_text.starts_with("the "));

        let empty = SentenceBank::default();
        let fell_through = compose(Some(&empty), &ctx, &mut custom, &mut rng).unwrap();
        assert!(fell_through.english_text.starts_with("the "));
    }
}
