use std::fmt::{Display, Formatter};

/// Lemmatization category derived from a Penn Treebank tag.
#[derive(Clone, Copy, Debug, Hash, Eq, PartialEq)]
pub enum Pos {
    Adjective,
    Verb,
    Noun,
    Adverb,
}

impl Pos {
    /// Maps a treebank tag onto a lemmatization category by its first letter.
    /// Anything unrecognised (punctuation, determiners, pronouns, ...) is a noun.
    pub fn from_tag(tag: &str) -> Self {
        if tag.starts_with('J') {
            Pos::Adjective
        } else if tag.starts_with('V') {
            Pos::Verb
        } else if tag.starts_with('N') {
            Pos::Noun
        } else if tag.starts_with('R') {
            Pos::Adverb
        } else {
            Pos::Noun
        }
    }

    pub fn name(&self) -> &'static str {
        match self {
            Pos::Adjective => "adjective",
            Pos::Verb => "verb",
            Pos::Noun => "noun",
            Pos::Adverb => "adverb",
        }
    }
}

impl Display for Pos {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.name())
    }
}

/// A part-of-speech tag as produced by a tagger.
#[derive(Clone, Debug, Default, Hash, Eq, PartialEq)]
pub struct Tag(String);

impl Tag {
    #[inline]
    pub fn new<S: Into<String>>(tag: S) -> Self {
        Self(tag.into())
    }

    #[inline]
    pub fn as_str(&self) -> &str {
        &self.0
    }

    #[inline]
    pub fn pos(&self) -> Pos {
        Pos::from_tag(&self.0)
    }

    #[inline]
    pub fn is(&self, tag: &str) -> bool {
        self.0 == tag
    }
}

impl From<&str> for Tag {
    fn from(value: &str) -> Self {
        Tag(value.to_string())
    }
}

impl Display for Tag {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.0)
    }
}
