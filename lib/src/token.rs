use std::{
    fmt::{Display, Formatter},
    ops::{Deref, DerefMut},
    slice::{Iter, IterMut},
};

use crate::pos::{Pos, Tag};

#[derive(Clone, Debug, Default, Hash, Eq, PartialEq, PartialOrd, Ord)]
pub struct Token(String);

impl Token {
    pub fn inner(self) -> String {
        self.0
    }

    pub fn inner_mut(&mut self) -> &mut String {
        &mut self.0
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl Deref for Token {
    type Target = String;

    fn deref(&self) -> &Self::Target {
        &self.0
    }
}

impl DerefMut for Token {
    fn deref_mut(&mut self) -> &mut Self::Target {
        &mut self.0
    }
}

impl From<Token> for String {
    fn from(value: Token) -> Self {
        value.0
    }
}

impl From<String> for Token {
    fn from(value: String) -> Self {
        Token(value)
    }
}

impl From<&str> for Token {
    fn from(value: &str) -> Self {
        Token(String::from(value))
    }
}

impl From<&&str> for Token {
    fn from(value: &&str) -> Self {
        Token(String::from(*value))
    }
}

impl AsMut<str> for Token {
    fn as_mut(&mut self) -> &mut str {
        &mut self.0
    }
}

impl AsRef<str> for Token {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

impl Display for Token {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.0)
    }
}

/// A token paired with the part-of-speech tag assigned to it in its sentence.
#[derive(Clone, Debug, Hash, Eq, PartialEq)]
pub struct Tagged {
    token: Token,
    tag: Tag,
}

impl Tagged {
    #[inline]
    pub fn new<T: Into<Token>>(token: T, tag: Tag) -> Self {
        Self {
            token: token.into(),
            tag,
        }
    }

    #[inline]
    pub fn token(&self) -> &Token {
        &self.token
    }

    #[inline]
    pub fn tag(&self) -> &Tag {
        &self.tag
    }

    #[inline]
    pub fn pos(&self) -> Pos {
        Pos::from_tag(self.tag.as_str())
    }

    #[inline]
    pub fn into_parts(self) -> (Token, Tag) {
        (self.token, self.tag)
    }
}

impl From<Tagged> for Token {
    fn from(value: Tagged) -> Self {
        value.token
    }
}

impl AsRef<str> for Tagged {
    fn as_ref(&self) -> &str {
        self.token.as_str()
    }
}

pub type Tokens = TokenIter<Token>;
pub type TaggedTokens = TokenIter<Tagged>;
pub type TokenIter<T> = TokenVec<T>;

#[derive(Clone, Debug)]
pub struct TokenVec<T: Into<Token> + PartialEq>(Vec<T>);

impl<T: Into<Token> + PartialEq> TokenVec<T> {
    #[inline]
    pub fn new() -> Self {
        Self(Vec::new())
    }

    #[inline]
    pub fn with_capacity(capacity: usize) -> Self {
        Self(Vec::with_capacity(capacity))
    }

    #[inline]
    pub fn push(&mut self, item: T) {
        self.0.push(item)
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    #[inline]
    pub fn count(&self) -> usize {
        self.0.len()
    }

    #[inline]
    pub fn term_count(&self, term: &T) -> usize {
        self.iter().filter(|&element| element == term).count()
    }

    #[inline]
    pub fn get(&self, index: usize) -> Option<&T> {
        self.0.get(index)
    }

    #[inline]
    pub fn last(&self) -> Option<&T> {
        self.0.last()
    }

    #[inline]
    pub fn as_slice(&self) -> &[T] {
        &self.0
    }

    #[inline]
    pub fn iter(&self) -> Iter<'_, T> {
        self.0.iter()
    }

    #[inline]
    pub fn iter_mut(&mut self) -> IterMut<'_, T> {
        self.0.iter_mut()
    }

    #[inline]
    pub fn retain<F>(&mut self, f: F)
    where
        F: FnMut(&T) -> bool,
    {
        self.0.retain(f)
    }
}

impl<T: Into<Token> + PartialEq> Default for TokenVec<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T: Into<Token> + PartialEq> From<Vec<T>> for TokenVec<T> {
    fn from(value: Vec<T>) -> Self {
        TokenVec(value)
    }
}

impl<T: Into<Token> + PartialEq> PartialEq for TokenVec<T> {
    fn eq(&self, other: &Self) -> bool {
        self.0 == other.0
    }
}

impl<T: Into<Token> + PartialEq> FromIterator<T> for TokenVec<T> {
    fn from_iter<I: IntoIterator<Item = T>>(iter: I) -> Self {
        TokenVec(iter.into_iter().collect())
    }
}

impl<T: Into<Token> + PartialEq> Extend<T> for TokenVec<T> {
    fn extend<I: IntoIterator<Item = T>>(&mut self, iter: I) {
        self.0.extend(iter)
    }
}

impl<T: Into<Token> + PartialEq> IntoIterator for TokenVec<T> {
    type Item = T;
    type IntoIter = std::vec::IntoIter<T>;

    fn into_iter(self) -> Self::IntoIter {
        self.0.into_iter()
    }
}

impl<'a, T: Into<Token> + PartialEq> IntoIterator for &'a TokenVec<T> {
    type Item = &'a T;
    type IntoIter = Iter<'a, T>;

    fn into_iter(self) -> Self::IntoIter {
        self.0.iter()
    }
}

#[macro_export]
macro_rules! tokens {
    ( $( $token:expr ),* $(,)? ) => {{
        $crate::token::TokenVec::from(vec![
            $( $crate::token::Token::from($token) ),*
        ])
    }};
}

#[cfg(test)]
mod tests {
    use crate::{
        pos::{Pos, Tag},
        token::{Tagged, TaggedTokens, Token},
        tokens,
    };

    #[test]
    fn test_tokens_macro() {
        let tokens = tokens!["one", "two", "two"];

        assert_eq!(tokens.count(), 3);
        assert_eq!(tokens.term_count(&Token::from("two")), 2);
        assert_eq!(tokens.last(), Some(&Token::from("two")));
    }

    #[test]
    fn test_tagged_pos() {
        let tagged = Tagged::new("running", Tag::new("VBG"));

        assert_eq!(tagged.token().as_str(), "running");
        assert_eq!(tagged.tag().as_str(), "VBG");
        assert_eq!(tagged.pos(), Pos::Verb);
    }

    #[test]
    fn test_tagged_tokens_retain() {
        let mut tagged: TaggedTokens = vec![
            Tagged::new("cat", Tag::new("NN")),
            Tagged::new(".", Tag::new(".")),
        ]
        .into();

        tagged.retain(|tagged| tagged.pos() == Pos::Noun && tagged.as_ref() != ".");

        assert_eq!(tagged.count(), 1);
        assert_eq!(Token::from(tagged.into_iter().next().unwrap()), Token::from("cat"));
    }
}
