// Letter-substitution words and the phoneme romanization table.
//
// `word_from_letters` is the deterministic counterpart to phonological
// synthesis: each ASCII letter picks a phoneme by its alphabet index, vowel
// letters (a e i o u y) from the vowel list and the rest from the consonant
// list, wrapping with `index % len`. Nothing random is involved, so the same
// letters and inventory always give the same word.
//
// `alphabet_map` pairs every phoneme of an inventory with an English
// spelling from `ROMANIZATION`, consonants first. Phonemes missing from the
// table romanize as "-".
//
// `generate_glyphs` is the random side: a set of distinct short glyph
// strings built from `GLYPH_PATTERNS`, used as the language's alphabet.
// Small inventories cannot always supply the requested count, so the draw
// loop gives up after `GLYPH_ATTEMPTS_PER_SLOT` tries per requested glyph
// and returns what it has.

use crate::phonology::build_syllable;
use crate::types::{PLACEHOLDER_WORD, PhonemeInventory};
use voidtongue_prng::LangRng;

const VOWEL_LETTERS: &[char] = &['a', 'e', 'i', 'o', 'u', 'y'];

/// Romanization for phonemes without a one-to-one English letter.
pub const UNKNOWN_ROMANIZATION: &str = "-";

/// Phoneme → English spelling.
#[rustfmt::skip]
pub const ROMANIZATION: &[(&str, &str)] = &[
    ("p", "p"), ("b", "b"), ("t", "t"), ("d", "d"), ("k", "k"), ("g", "g"),
    ("f", "f"), ("v", "v"), ("s", "s"), ("z", "z"), ("ʃ", "sh"), ("ʒ", "zh"),
    ("h", "h"), ("l", "l"), ("r", "r"), ("m", "m"), ("n", "n"), ("ŋ", "ng"),
    ("j", "y"), ("w", "w"), ("x", "x"), ("θ", "th"), ("ð", "dh"),
    ("ɣ", "gh"), ("χ", "kh"), ("ʁ", "rh"), ("ɬ", "lh"), ("ɾ", "r"), ("ɹ", "r"),
    ("ʀ", "r"), ("β", "v"), ("ɸ", "f"), ("pf", "pf"), ("ts", "ts"), ("ch", "ch"),
    ("sch", "sch"), ("shch", "shch"), ("zh", "zh"), ("sh", "sh"), ("th", "th"),
    ("kh", "kh"), ("q", "q"), ("c", "c"),
    ("a", "a"), ("e", "e"), ("i", "i"), ("o", "o"), ("u", "u"), ("y", "y"),
    ("æ", "ae"), ("ø", "o"), ("ɯ", "u"), ("ɨ", "i"), ("ʉ", "u"), ("ɪ", "i"),
    ("ʊ", "u"), ("ɑ", "ah"), ("ɒ", "o"), ("ɔ", "aw"),
    ("aa", "aa"), ("ee", "ee"), ("ii", "ii"), ("oo", "oo"), ("uu", "uu"),
    ("ai", "ai"), ("au", "au"), ("oi", "oi"), ("ae", "ae"), ("oe", "oe"),
    ("ue", "ue"), ("ya", "ya"), ("ye", "ye"), ("yo", "yo"), ("yu", "yu"),
    ("iː", "ee"), ("eː", "eh"), ("aː", "ah"), ("oː", "oh"), ("uː", "oo"),
    ("yː", "yy"), ("ah", "ah"), ("uh", "uh"),
];

/// English spelling for one phoneme.
pub fn romanize(phoneme: &str) -> &'static str {
    ROMANIZATION
        .iter()
        .find(|&&(p, _)| p == phoneme)
        .map_or(UNKNOWN_ROMANIZATION, |&(_, r)| r)
}

/// Build a word by mapping each letter onto the inventory.
pub fn word_from_letters(letters: &str, inventory: &PhonemeInventory) -> String {
    let mut word = String::new();
    for c in letters.chars().filter(char::is_ascii_alphabetic) {
        let c = c.to_ascii_lowercase();
        let index = (c as u8 - b'a') as usize;
        let pool = if VOWEL_LETTERS.contains(&c) {
            &inventory.vowels
        } else {
            &inventory.consonants
        };
        if let Some(phoneme) = pool.get(index % pool.len().max(1)) {
            word.push_str(phoneme);
        }
    }
    if word.is_empty() {
        PLACEHOLDER_WORD.to_string()
    } else {
        word
    }
}

/// Every phoneme of the inventory with its romanization, consonants first.
pub fn alphabet_map(inventory: &PhonemeInventory) -> Vec<(String, &'static str)> {
    inventory
        .consonants
        .iter()
        .chain(&inventory.vowels)
        .map(|p| (p.clone(), romanize(p)))
        .collect()
}

/// Glyph alphabet size when none is configured.
pub const DEFAULT_ALPHABET_SIZE: usize = 26;

/// Shapes a glyph is drawn from.
pub const GLYPH_PATTERNS: &[&str] = &["CV", "CVC", "VC", "CVV", "CCV"];

const GLYPH_ATTEMPTS_PER_SLOT: usize = 20;

/// Draw up to `size` distinct glyphs, in the order they were first drawn.
pub fn generate_glyphs(inventory: &PhonemeInventory, size: usize, rng: &mut LangRng) -> Vec<String> {
    let mut glyphs: Vec<String> = Vec::with_capacity(size);
    if !inventory.is_usable() {
        return glyphs;
    }
    let mut attempts = size.saturating_mul(GLYPH_ATTEMPTS_PER_SLOT);
    while glyphs.len() < size && attempts > 0 {
        attempts -= 1;
        let Some(pattern) = rng.choose(GLYPH_PATTERNS) else {
            break;
        };
        let glyph = build_syllable(pattern, inventory, rng);
        if !glyph.is_empty() && !glyphs.contains(&glyph) {
            glyphs.push(glyph);
        }
    }
    if glyphs.len() < size {
        tracing::debug!(requested = size, produced = glyphs.len(), "glyph alphabet ran out of attempts");
    }
    glyphs
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_letters_map_by_alphabet_index() {
        let inventory = PhonemeInventory::new(["k", "t"], ["a"]);
        // a → vowels[0], b → consonants[1 % 2], c → consonants[2 % 2]
        assert_eq!(word_from_letters("abc", &inventory), "atk");
        assert_eq!(word_from_letters("abc", &inventory), word_from_letters("abc", &inventory));
    }

    #[test]
    fn test_letters_ignore_case_and_non_letters() {
        let inventory = PhonemeInventory::new(["k", "t", "s"], ["a", "o"]);
        assert_eq!(word_from_letters("A-b c!", &inventory), word_from_letters("abc", &inventory));
    }

    #[test]
    fn test_letters_empty_results_give_placeholder() {
        let inventory = PhonemeInventory::new(["k"], ["a"]);
        assert_eq!(word_from_letters("", &inventory), PLACEHOLDER_WORD);
        assert_eq!(word_from_letters("123 ?", &inventory), PLACEHOLDER_WORD);
        let no_vowels = PhonemeInventory::new(["k"], Vec::<String>::new());
        assert_eq!(word_from_letters("aeiou", &no_vowels), PLACEHOLDER_WORD);
        assert_eq!(word_from_letters("ab", &no_vowels), "k");
    }

    #[test]
    fn test_alphabet_map() {
        let inventory = PhonemeInventory::new(["ʃ", "θ", "ʔ"], ["æ", "o"]);
        let map = alphabet_map(&inventory);
        assert_eq!(
            map,
            vec![
                ("ʃ".to_string(), "sh"),
                ("θ".to_string(), "th"),
                ("ʔ".to_string(), "-"),
                ("æ".to_string(), "ae"),
                ("o".to_string(), "o"),
            ]
        );
    }

    #[test]
    fn test_glyphs_are_distinct_and_sized() {
        let inventory = PhonemeInventory::new(["p", "t", "k", "m", "n", "s", "r"], ["a", "e", "i", "o", "u"]);
        let mut rng = LangRng::new(21);
        let glyphs = generate_glyphs(&inventory, DEFAULT_ALPHABET_SIZE, &mut rng);
        assert_eq!(glyphs.len(), DEFAULT_ALPHABET_SIZE);
        let mut sorted = glyphs.clone();
        sorted.sort();
        sorted.dedup();
        assert_eq!(sorted.len(), glyphs.len());
        assert!(glyphs.iter().all(|g| (2..=3).contains(&g.chars().count())));
    }

    #[test]
    fn test_glyphs_stop_when_inventory_is_exhausted() {
        // One consonant and one vowel allow only ka, kak, ak, kaa, kka.
        let inventory = PhonemeInventory::new(["k"], ["a"]);
        let mut rng = LangRng::new(3);
        let glyphs = generate_glyphs(&inventory, 26, &mut rng);
        assert!(glyphs.len() <= 5, "{glyphs:?}");
        assert!(!glyphs.is_empty());
    }

    #[test]
    fn test_glyphs_need_a_usable_inventory() {
        let mut rng = LangRng::new(4);
        let inventory = PhonemeInventory::new(["k"], Vec::<String>::new());
        assert!(generate_glyphs(&inventory, 10, &mut rng).is_empty());
        assert!(generate_glyphs(&PhonemeInventory::new(["k"], ["a"]), 0, &mut rng).is_empty());
    }

    #[test]
    fn test_glyphs_follow_seed() {
        let inventory = PhonemeInventory::new(["l", "v", "th"], ["a", "ei"]);
        let a = generate_glyphs(&inventory, 8, &mut LangRng::new(9));
        let b = generate_glyphs(&inventory, 8, &mut LangRng::new(9));
        assert_eq!(a, b);
    }
}
