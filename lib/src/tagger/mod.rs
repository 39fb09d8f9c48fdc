mod lexicon;
mod rules;

pub use rules::RuleTagger;

use crate::token::{TaggedTokens, Tokens};

/// Assigns a part-of-speech tag to every token of one sentence.
///
/// Taggers are context sensitive, so callers should hand over whole
/// sentences rather than isolated words.
pub trait PosTagger: std::fmt::Debug {
    fn tag(&self, tokens: Tokens) -> TaggedTokens;
}

#[derive(Debug)]
pub struct Tagger(Box<dyn PosTagger>);

impl Tagger {
    pub fn new<T: PosTagger + 'static>(tagger: T) -> Self {
        Self(Box::new(tagger))
    }

    #[inline]
    pub fn tag(&self, tokens: Tokens) -> TaggedTokens {
        self.0.tag(tokens)
    }
}

impl Default for Tagger {
    fn default() -> Self {
        Self::new(RuleTagger::new())
    }
}
