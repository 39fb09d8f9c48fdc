use hashbrown::HashMap;

use crate::{inflection, pos::Pos};

/// A word set candidate lemmas are validated against.
pub trait Vocabulary {
    fn contains(&self, word: &str) -> bool;
}

type Rules = &'static [(&'static str, &'static str)];

const NOUN_RULES: Rules = &[
    ("s", ""),
    ("ses", "s"),
    ("ves", "f"),
    ("xes", "x"),
    ("zes", "z"),
    ("ches", "ch"),
    ("shes", "sh"),
    ("men", "man"),
    ("ies", "y"),
];

const VERB_RULES: Rules = &[
    ("s", ""),
    ("ies", "y"),
    ("es", "e"),
    ("es", ""),
    ("ed", "e"),
    ("ed", ""),
    ("ing", "e"),
    ("ing", ""),
];

const ADJECTIVE_RULES: Rules = &[("er", ""), ("est", ""), ("er", "e"), ("est", "e")];

const ADVERB_RULES: Rules = &[];

/// Shortest stem a detachment rule may leave behind.
const MIN_STEM: usize = 2;

/// Dictionary lemmatizer in the manner of WordNet's morphy.
///
/// Irregular forms resolve through per-category exception tables. Anything
/// else goes through the category's suffix detachment rules; of the word
/// itself and its candidates, the shortest one the vocabulary knows wins.
/// Words nothing applies to come back unchanged. Matching is case-sensitive: tables and suffixes are lower-case.
#[derive(Clone, Debug)]
pub struct Lemmatizer {
    lookup: Lookup,
}

#[derive(Clone, Debug)]
struct Lookup {
    rules: HashMap<Pos, Rules>,
    exceptions: HashMap<Pos, HashMap<&'static str, &'static str>>,
}

impl Lookup {
    fn new() -> Self {
        let rules = [
            (Pos::Noun, NOUN_RULES),
            (Pos::Verb, VERB_RULES),
            (Pos::Adjective, ADJECTIVE_RULES),
            (Pos::Adverb, ADVERB_RULES),
        ]
        .into_iter()
        .collect::<HashMap<_, _>>();

        let mut exceptions = HashMap::new();
        exceptions.insert(Pos::Noun, inflection::NOUNS.iter().copied().collect());
        exceptions.insert(
            Pos::Verb,
            inflection::VERBS
                .iter()
                .map(|(form, base, _)| (*form, *base))
                .collect(),
        );
        exceptions.insert(Pos::Adjective, inflection::ADJECTIVES.iter().copied().collect());
        exceptions.insert(Pos::Adverb, inflection::ADVERBS.iter().copied().collect());

        Self { rules, exceptions }
    }

    fn exception(&self, word: &str, pos: Pos) -> Option<&'static str> {
        self.exceptions
            .get(&pos)
            .and_then(|table| table.get(word))
            .copied()
    }

    fn rules(&self, pos: Pos) -> Rules {
        self.rules.get(&pos).copied().unwrap_or_default()
    }
}

impl Default for Lemmatizer {
    fn default() -> Self {
        Self::new()
    }
}

impl Lemmatizer {
    pub fn new() -> Self {
        Self {
            lookup: Lookup::new(),
        }
    }

    /// Base form of `word` read as `pos`.
    pub fn lemmatize<V: Vocabulary + ?Sized>(&self, word: &str, pos: Pos, vocabulary: &V) -> String {
        if let Some(base) = self.lookup.exception(word, pos) {
            return base.to_string();
        }

        let known = vocabulary.contains(word).then(|| word.to_string());

        known
            .into_iter()
            .chain(self.candidates(word, pos))
            .filter(|candidate| vocabulary.contains(candidate))
            .min_by_key(|candidate| candidate.chars().count())
            .unwrap_or_else(|| word.to_string())
    }

    /// Every form the detachment rules produce for `word`, in rule order.
    pub fn candidates(&self, word: &str, pos: Pos) -> Vec<String> {
        let mut candidates = Vec::new();

        for (suffix, replacement) in self.lookup.rules(pos) {
            let Some(stem) = word.strip_suffix(suffix) else {
                continue;
            };

            if stem.chars().count() < MIN_STEM {
                continue;
            }

            candidates.push(format!("{stem}{replacement}"));

            if pos == Pos::Verb && replacement.is_empty() && matches!(*suffix, "ed" | "ing") {
                if let Some(undoubled) = undouble(stem) {
                    candidates.push(undoubled.to_string());
                }
            }
        }

        candidates
    }
}

/// `stopp` -> `stop`, `runn` -> `run`.
fn undouble(stem: &str) -> Option<&str> {
    let mut chars = stem.chars().rev();
    let (last, before) = (chars.next()?, chars.next()?);

    let consonant = last.is_ascii_alphabetic() && !matches!(last, 'a' | 'e' | 'i' | 'o' | 'u');
    (consonant && last == before).then(|| &stem[..stem.len() - last.len_utf8()])
}
