use crate::{
    pos::Tag,
    tagger::{lexicon, PosTagger},
    token::{Tagged, TaggedTokens, Tokens},
};

/// Suffix heuristics for open-class words, most specific first.
const SUFFIXES: &[(&str, &str)] = &[
    ("ness", "NN"),
    ("ment", "NN"),
    ("tion", "NN"),
    ("sion", "NN"),
    ("ship", "NN"),
    ("hood", "NN"),
    ("ance", "NN"),
    ("ence", "NN"),
    ("ity", "NN"),
    ("ism", "NN"),
    ("ical", "JJ"),
    ("able", "JJ"),
    ("ible", "JJ"),
    ("less", "JJ"),
    ("ous", "JJ"),
    ("ful", "JJ"),
    ("ive", "JJ"),
    ("ish", "JJ"),
    ("ic", "JJ"),
    ("al", "JJ"),
    ("ly", "RB"),
    ("ing", "VBG"),
    ("ize", "VB"),
    ("ise", "VB"),
    ("ify", "VB"),
    ("est", "JJS"),
    ("ed", "VBD"),
];

const SUBJECT_PRONOUNS: &[&str] = &["i", "you", "he", "she", "it", "we", "they"];

const PERFECT_AUXILIARIES: &[&str] = &["has", "have", "had", "'ve", "having"];

/// Lexicon and rule based tagger emitting Penn Treebank tags.
///
/// Tagging runs in two passes. The first pass looks every token up in a
/// closed-class lexicon (determiners, pronouns, prepositions, modals,
/// irregular verb forms) and guesses the rest from shape and suffix. The
/// second pass rewrites tags from their left neighbour, e.g. a noun right
/// after `to` or a modal is retagged as a base-form verb.
#[derive(Clone, Debug, Default)]
pub struct RuleTagger;

impl RuleTagger {
    pub fn new() -> Self {
        Self
    }

    fn punctuation(word: &str) -> Option<&'static str> {
        if word.chars().any(char::is_alphanumeric) {
            return None;
        }

        let tag = match word {
            "." | "!" | "?" => ".",
            "," => ",",
            ";" | ":" | "--" | "—" | "–" | "..." | "…" => ":",
            "(" | "[" | "{" | "<" => "(",
            ")" | "]" | "}" | ">" => ")",
            "“" | "‘" | "«" | "`" => "``",
            "\"" | "”" | "'" | "»" => "''",
            "$" | "£" | "€" => "$",
            "#" => "#",
            _ => "SYM",
        };

        Some(tag)
    }

    fn suffix(lowered: &str) -> Option<&'static str> {
        let length = lowered.chars().count();

        SUFFIXES
            .iter()
            .find(|(suffix, _)| length > suffix.len() + 2 && lowered.ends_with(suffix))
            .map(|(_, tag)| *tag)
            .or_else(|| {
                let plural = length > 3
                    && lowered.ends_with('s')
                    && !["ss", "us", "is"].iter().any(|end| lowered.ends_with(end));
                plural.then_some("NNS")
            })
    }

    fn guess(word: &str, sentence_initial: bool) -> &'static str {
        if let Some(tag) = Self::punctuation(word) {
            return tag;
        }

        if word.starts_with(|ch: char| ch.is_ascii_digit()) {
            return "CD";
        }

        let lowered = word.to_lowercase();
        if let Some(tag) = lexicon::known().get(lowered.as_str()) {
            return *tag;
        }

        let capitalized = word.starts_with(char::is_uppercase);
        if capitalized && !sentence_initial {
            return "NNP";
        }

        if lowered.contains('-') {
            return "JJ";
        }

        match Self::suffix(&lowered) {
            Some(tag) => tag,
            None if capitalized => "NNP",
            None => "NN",
        }
    }

    fn contextualize(words: &[String], tags: &mut [&'static str]) {
        for index in 1..tags.len() {
            let previous = tags[index - 1];
            let previous_word = words[index - 1].as_str();

            tags[index] = match (previous, tags[index]) {
                ("TO" | "MD", "NN" | "VBP") => "VB",
                ("DT" | "PRP$", "VB" | "VBP") => "NN",
                ("DT" | "PRP$", "VBD" | "VBN") => "JJ",
                ("PRP", "NNS") if SUBJECT_PRONOUNS.contains(&previous_word) => "VBZ",
                ("NN" | "NNP", "NNS") => "VBZ",
                (_, "VBD") if PERFECT_AUXILIARIES.contains(&previous_word) => "VBN",
                (_, current) => current,
            };
        }
    }
}

impl PosTagger for RuleTagger {
    fn tag(&self, tokens: Tokens) -> TaggedTokens {
        let words = tokens
            .iter()
            .map(|token| token.to_lowercase())
            .collect::<Vec<_>>();

        let first_word = tokens
            .iter()
            .position(|token| token.chars().any(char::is_alphanumeric));

        let mut tags = tokens
            .iter()
            .enumerate()
            .map(|(index, token)| match token.as_str() {
                "'s" | "'S" => "POS",
                word => Self::guess(word, Some(index) == first_word),
            })
            .collect::<Vec<_>>();

        for index in 1..tags.len() {
            if tags[index] == "POS"
                && matches!(tags[index - 1], "PRP" | "EX" | "WP" | "DT" | "WRB")
            {
                tags[index] = "VBZ";
            }
        }

        Self::contextualize(&words, &mut tags);

        tokens
            .into_iter()
            .zip(tags)
            .map(|(token, tag)| Tagged::new(token, Tag::new(tag)))
            .collect()
    }
}
