use crate::{filter::TextFilter, token::TaggedTokens};

const FRAGMENTS: &[&str] = &["n't", "'s", "'m", "'d", "'ll", "'re", "'ve"];

/// Drops contraction fragments split off by the tokenizer (`n't`, `'s`, `'ll`).
///
/// These carry grammar, not vocabulary, and no word list spells them.
#[derive(Clone, Debug, Default)]
pub struct Clitics;

impl Clitics {
    pub fn new() -> Self {
        Self
    }

    pub fn is_fragment(word: &str) -> bool {
        FRAGMENTS
            .iter()
            .any(|fragment| fragment.eq_ignore_ascii_case(word))
    }
}

impl TextFilter for Clitics {
    fn filter(&mut self, tokens: &mut TaggedTokens) {
        tokens.retain(|tagged| !Self::is_fragment(tagged.token()));
    }
}

#[cfg(test)]
mod tests {
    use super::Clitics;

    #[test]
    fn test_clitic_fragments() {
        for word in ["n't", "N'T", "'s", "'S", "'ll", "'re", "'ve", "'m", "'d"] {
            assert!(Clitics::is_fragment(word), "{word:?}");
        }
    }

    #[test]
    fn test_clitic_words_kept() {
        for word in ["not", "is", "s", "will", "'tis", "don't"] {
            assert!(!Clitics::is_fragment(word), "{word:?}");
        }
    }
}
