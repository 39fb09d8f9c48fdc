mod clitic;
mod numeric;

pub use {
    clitic::Clitics,
    numeric::{NumericPunctuation, PunctuationSet},
};

use crate::token::TaggedTokens;

pub trait TextFilter: std::fmt::Debug {
    fn filter(&mut self, tokens: &mut TaggedTokens);
}

#[derive(Debug)]
pub struct FilterPipeline(Vec<Box<dyn TextFilter>>);

impl Default for FilterPipeline {
    fn default() -> Self {
        Self::new()
    }
}

impl FilterPipeline {
    pub fn new() -> Self {
        Self(Vec::new())
    }

    /// The cleaner alone: only numeric/punctuation tokens are dropped.
    pub fn standard(punctuation: PunctuationSet) -> Self {
        let mut pipeline = Self::new();
        pipeline.insert(Box::new(NumericPunctuation::new(punctuation)));
        pipeline
    }

    pub fn insert(&mut self, filter: Box<dyn TextFilter>) -> &mut Self {
        self.0.push(filter);
        self
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.0.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Runs every filter in insertion order, returning how many tokens were dropped.
    pub fn run(&mut self, tokens: &mut TaggedTokens) -> usize {
        let before = tokens.count();
        self.0.iter_mut().for_each(|filter| {
            filter.filter(tokens);
        });
        before - tokens.count()
    }
}
