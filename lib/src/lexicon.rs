use hashbrown::HashSet;
use tracing::debug;

use crate::{
    corpus::WordSource,
    error::{CorpusError, Error},
    normalizer::{case::lowercase, NormalizerPipeline, Vocabulary},
    token::Token,
};

/// The reference word set: every word a corpus spells, lower-cased.
#[derive(Clone, Debug, Default)]
pub struct Lexicon {
    name: String,
    words: HashSet<String>,
}

impl Lexicon {
    pub fn new<S: Into<String>>(name: S) -> Self {
        Self {
            name: name.into(),
            words: HashSet::new(),
        }
    }

    pub fn from_words<S, I, W>(name: S, words: I) -> Self
    where
        S: Into<String>,
        I: IntoIterator<Item = W>,
        W: AsRef<str>,
    {
        let mut lexicon = Self::new(name);
        lexicon.extend(words);
        lexicon
    }

    /// Reads every word of `source` through `normalizers` into a new lexicon.
    ///
    /// Words are stored exactly as the normalizers leave them, so the
    /// pipeline must lower-case (see [`NormalizerPipeline::corpus`]).
    ///
    /// # Errors
    /// [`CorpusError::Empty`] when the source yields no words.
    pub fn load<W: WordSource + ?Sized>(
        source: &mut W,
        normalizers: &mut NormalizerPipeline,
    ) -> Result<Self, Error> {
        let mut tokens = source.words();
        normalizers.run(&mut tokens);

        if tokens.is_empty() {
            return Err(CorpusError::Empty {
                name: source.name().to_string(),
            }
            .into());
        }

        let mut lexicon = Self::new(source.name());
        lexicon.words.extend(tokens.into_iter().map(Token::inner));

        debug!(corpus = lexicon.name(), words = lexicon.len(), "loaded reference corpus");
        Ok(lexicon)
    }

    /// Adds words, lower-casing them on the way in.
    pub fn extend<I, W>(&mut self, words: I)
    where
        I: IntoIterator<Item = W>,
        W: AsRef<str>,
    {
        self.words.extend(
            words
                .into_iter()
                .map(|word| lowercase(word.as_ref()).into_owned()),
        );
    }

    /// Case-insensitive membership.
    #[inline]
    pub fn contains(&self, word: &str) -> bool {
        self.words.contains(&*lowercase(word))
    }

    #[inline]
    pub fn name(&self) -> &str {
        &self.name
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.words.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.words.is_empty()
    }
}

impl Vocabulary for Lexicon {
    #[inline]
    fn contains(&self, word: &str) -> bool {
        Lexicon::contains(self, word)
    }
}

#[cfg(test)]
mod tests {
    use super::Lexicon;
    use crate::{
        corpus::{TextCorpus, WordList},
        error::{CorpusError, Error},
        normalizer::NormalizerPipeline,
    };

    #[test]
    fn test_lexicon_case_insensitive() {
        let lexicon = Lexicon::from_words("test", ["Cat", "sat", "MAT"]);

        assert!(lexicon.contains("cat"));
        assert!(lexicon.contains("CAT"));
        assert!(lexicon.contains("Sat"));
        assert!(lexicon.contains("mat"));
        assert!(!lexicon.contains("dog"));
        assert_eq!(lexicon.len(), 3);
    }

    #[test]
    fn test_lexicon_deduplicates() {
        let lexicon = Lexicon::from_words("test", ["the", "The", "THE"]);

        assert_eq!(lexicon.len(), 1);
    }

    #[test]
    fn test_lexicon_load_word_list() {
        let mut source = WordList::new("words", "Aaron\naardvark\n\nabacus\n");
        let lexicon = Lexicon::load(&mut source, &mut NormalizerPipeline::corpus()).unwrap();

        assert_eq!(lexicon.name(), "words");
        assert_eq!(lexicon.len(), 3);
        assert!(lexicon.contains("aaron"));
        assert!(lexicon.contains("Abacus"));
    }

    #[test]
    fn test_lexicon_load_text_corpus() {
        let mut source = TextCorpus::new("novel", "It was the best of times. It was 1859!");
        let lexicon = Lexicon::load(&mut source, &mut NormalizerPipeline::corpus()).unwrap();

        for word in ["it", "was", "the", "best", "of", "times"] {
            assert!(lexicon.contains(word), "{word}");
        }
        assert!(!lexicon.contains("1859"));
        assert!(!lexicon.contains("!"));
    }

    #[test]
    fn test_lexicon_load_stores_normalized_words() {
        let mut source = WordList::new("words", "cat\ncat\ndog\n");
        let lexicon = Lexicon::load(&mut source, &mut NormalizerPipeline::new()).unwrap();

        assert_eq!(lexicon.len(), 2);
        assert!(lexicon.contains("Dog"));
    }

    #[test]
    fn test_lexicon_load_empty() {
        let mut source = WordList::new("empty", "\n\n   \n");
        let error = Lexicon::load(&mut source, &mut NormalizerPipeline::corpus()).unwrap_err();

        assert_eq!(
            error,
            Error::Corpus(CorpusError::Empty {
                name: "empty".to_string()
            })
        );
    }

    #[test]
    fn test_lexicon_extend() {
        let mut lexicon = Lexicon::new("test");
        assert!(lexicon.is_empty());

        lexicon.extend(vec!["Kubernetes".to_string()]);

        assert!(lexicon.contains("kubernetes"));
    }
}
