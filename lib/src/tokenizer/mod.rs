mod lines;
mod sentence;
mod treebank;

pub use {
    lines::Lines,
    sentence::{Segmenter, SentenceSplitter},
    treebank::Treebank,
};

use crate::token::{Token, Tokens};

#[derive(Clone, Debug)]
pub enum Tokenizer {
    Treebank(Treebank),
    Lines(Lines),
}

impl Tokenizer {
    pub fn tokenize(&mut self, text: &str) -> Tokens {
        match self {
            Tokenizer::Treebank(tokenizer) => tokenizer.tokenize(text),
            Tokenizer::Lines(tokenizer) => tokenizer.tokenize(text),
        }
    }
}

impl Default for Tokenizer {
    fn default() -> Self {
        Tokenizer::Treebank(Treebank::new())
    }
}

pub trait TextTokenizer {
    fn tokenize<T: AsRef<str>>(&mut self, text: T) -> Tokens;
}
