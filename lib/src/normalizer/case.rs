use std::borrow::Cow;

use crate::{normalizer::TextNormalizer, token::Tokens};

#[derive(Clone, Debug, Default)]
pub struct Lowercase;

impl Lowercase {
    pub fn new() -> Self {
        Self
    }
}

impl TextNormalizer for Lowercase {
    fn normalize(&mut self, tokens: &mut Tokens) {
        tokens.iter_mut().for_each(|token| {
            if token.chars().any(char::is_uppercase) {
                let lowered = token.to_lowercase();
                *token.inner_mut() = lowered;
            }
        })
    }
}

/// Lower-cases `word`, borrowing when it has no uppercase characters.
pub fn lowercase(word: &str) -> Cow<'_, str> {
    if word.chars().any(char::is_uppercase) {
        Cow::Owned(word.to_lowercase())
    } else {
        Cow::Borrowed(word)
    }
}

/// How words are cased on their way through the lemmatizer and into the output.
///
/// Dictionary lookups are case-insensitive under both policies.
#[derive(Clone, Copy, Debug, Default, Eq, PartialEq)]
pub enum CasePolicy {
    /// Lower-case before lemmatizing; unknown words are reported lower-cased.
    #[default]
    Lowercase,
    /// Lemmatize the word as written; unknown words keep their original casing.
    Preserve,
}

impl CasePolicy {
    #[inline]
    pub fn apply<'w>(&self, word: &'w str) -> Cow<'w, str> {
        match self {
            CasePolicy::Lowercase => lowercase(word),
            CasePolicy::Preserve => Cow::Borrowed(word),
        }
    }
}

#[cfg(test)]
mod tests {
    use std::borrow::Cow;

    use super::{lowercase, CasePolicy, Lowercase};
    use crate::{normalizer::TextNormalizer, tokens};

    #[test]
    fn test_normalizer_lowercase() {
        let mut tokens = tokens!["The", "TokeniZED", "String"];
        let mut normalizer = Lowercase::new();
        normalizer.normalize(&mut tokens);
        assert_eq!(tokens, tokens!["the", "tokenized", "string"])
    }

    #[test]
    fn test_normalizer_all_lowercase() {
        let mut tokens = tokens!["the", "tokenized", "string"];
        let mut normalizer = Lowercase::new();
        normalizer.normalize(&mut tokens);
        assert_eq!(tokens, tokens!["the", "tokenized", "string"])
    }

    #[test]
    fn test_normalizer_lowercase_unicode() {
        let mut tokens = tokens!["Élève", "NAÏVE", "École"];
        let mut normalizer = Lowercase::new();
        normalizer.normalize(&mut tokens);
        assert_eq!(tokens, tokens!["élève", "naïve", "école"])
    }

    #[test]
    fn test_lowercase_borrows_when_unchanged() {
        assert!(matches!(lowercase("cat"), Cow::Borrowed("cat")));
        assert!(matches!(lowercase("Cat"), Cow::Owned(ref word) if word == "cat"));
    }

    #[test]
    fn test_case_policy() {
        assert_eq!(CasePolicy::Lowercase.apply("Flibbertigibbet"), "flibbertigibbet");
        assert_eq!(CasePolicy::Preserve.apply("Flibbertigibbet"), "Flibbertigibbet");
        assert_eq!(CasePolicy::default(), CasePolicy::Lowercase);
    }
}
