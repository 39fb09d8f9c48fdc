use crate::{
    filter::{Clitics, NumericPunctuation, PunctuationSet},
    token::Tokens,
    tokenizer::{Lines, Segmenter, SentenceSplitter, TextTokenizer, Treebank},
};

/// A named source of reference words.
pub trait WordSource {
    fn name(&self) -> &str;

    /// Enumerates every word in the source, duplicates included.
    fn words(&mut self) -> Tokens;
}

/// Layout of a reference corpus file.
#[derive(Clone, Copy, Debug, Default, Eq, PartialEq)]
pub enum CorpusFormat {
    /// One word per line.
    #[default]
    WordList,
    /// Running prose; every word it uses counts as known.
    Text,
}

impl CorpusFormat {
    pub fn source(&self, name: impl Into<String>, text: String) -> Box<dyn WordSource> {
        match self {
            CorpusFormat::WordList => Box::new(WordList::new(name, text)),
            CorpusFormat::Text => Box::new(TextCorpus::new(name, text)),
        }
    }
}

/// Word-list corpus, one entry per line (`/usr/share/dict/words` style).
#[derive(Clone, Debug)]
pub struct WordList {
    name: String,
    text: String,
    tokenizer: Lines,
}

impl WordList {
    pub fn new(name: impl Into<String>, text: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            text: text.into(),
            tokenizer: Lines::new(),
        }
    }
}

impl WordSource for WordList {
    fn name(&self) -> &str {
        &self.name
    }

    fn words(&mut self) -> Tokens {
        self.tokenizer.tokenize(&self.text)
    }
}

/// Literary corpus: prose segmented and tokenized like a transcript, with
/// numbers, punctuation and contraction fragments left out.
#[derive(Clone, Debug)]
pub struct TextCorpus {
    name: String,
    text: String,
    segmenter: Segmenter,
    tokenizer: Treebank,
    cleaner: NumericPunctuation,
}

impl TextCorpus {
    pub fn new(name: impl Into<String>, text: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            text: text.into(),
            segmenter: Segmenter::new(),
            tokenizer: Treebank::new(),
            cleaner: NumericPunctuation::new(PunctuationSet::Unicode),
        }
    }
}

impl WordSource for TextCorpus {
    fn name(&self) -> &str {
        &self.name
    }

    fn words(&mut self) -> Tokens {
        let mut words = Tokens::new();

        for sentence in self.segmenter.split(&self.text) {
            let tokens = self.tokenizer.tokenize(sentence);
            words.extend(tokens.into_iter().filter(|token| {
                !self.cleaner.is_noise(token) && !Clitics::is_fragment(token)
            }));
        }

        words
    }
}

#[cfg(test)]
mod tests {
    use super::{CorpusFormat, TextCorpus, WordList, WordSource};
    use crate::tokens;

    #[test]
    fn test_word_list_words() {
        let mut source = WordList::new("words", "cat\nsat\n\nmat\n");

        assert_eq!(source.name(), "words");
        assert_eq!(source.words(), tokens!["cat", "sat", "mat"]);
    }

    #[test]
    fn test_text_corpus_words() {
        let mut source = TextCorpus::new("novel", "Call me Ishmael. Some years ago -- never mind how long.");

        assert_eq!(
            source.words(),
            tokens!["Call", "me", "Ishmael", "Some", "years", "ago", "never", "mind", "how", "long"]
        );
    }

    #[test]
    fn test_text_corpus_drops_fragments() {
        let mut source = TextCorpus::new("novel", "I don't know, it's 1851.");

        assert_eq!(source.words(), tokens!["I", "do", "know", "it"]);
    }

    #[test]
    fn test_corpus_format_source() {
        let mut list = CorpusFormat::WordList.source("list", "one two\nthree".to_string());
        let mut text = CorpusFormat::Text.source("text", "one two\nthree".to_string());

        assert_eq!(list.words(), tokens!["one two", "three"]);
        assert_eq!(text.words(), tokens!["one", "two", "three"]);
        assert_eq!(CorpusFormat::default(), CorpusFormat::WordList);
    }
}
