extern crate regex;

use std::sync::OnceLock;

use regex::Regex;

use crate::{filter::TextFilter, token::TaggedTokens};

/// Which characters count as punctuation when cleaning tokens.
#[derive(Clone, Copy, Debug, Default, Eq, PartialEq)]
pub enum PunctuationSet {
    /// ASCII digits and ASCII punctuation only.
    Ascii,
    /// Unicode decimal digits, punctuation and symbols (curly quotes, dashes, `…`, `€`).
    #[default]
    Unicode,
}

impl PunctuationSet {
    fn pattern(&self) -> &'static Regex {
        static ASCII: OnceLock<Regex> = OnceLock::new();
        static UNICODE: OnceLock<Regex> = OnceLock::new();

        let (cell, source) = match self {
            PunctuationSet::Ascii => (&ASCII, r"^\s*[[:digit:][:punct:]]+\s*$"),
            PunctuationSet::Unicode => (&UNICODE, r"^\s*[\p{Nd}\p{P}\p{S}]+\s*$"),
        };

        cell.get_or_init(|| {
            Regex::new(source)
                .unwrap_or_else(|error| panic!("invalid cleaner pattern `{source}`: {error}"))
        })
    }
}

/// Drops tokens made up entirely of digits and punctuation, optionally padded
/// with whitespace. The match spans the whole token: `word123` survives.
#[derive(Clone, Debug)]
pub struct NumericPunctuation {
    pattern: &'static Regex,
}

impl NumericPunctuation {
    pub fn new(set: PunctuationSet) -> Self {
        Self {
            pattern: set.pattern(),
        }
    }

    #[inline]
    pub fn is_noise(&self, word: &str) -> bool {
        self.pattern.is_match(word)
    }
}

impl Default for NumericPunctuation {
    fn default() -> Self {
        Self::new(PunctuationSet::default())
    }
}

impl TextFilter for NumericPunctuation {
    fn filter(&mut self, tokens: &mut TaggedTokens) {
        tokens.retain(|tagged| !self.is_noise(tagged.token()));
    }
}
