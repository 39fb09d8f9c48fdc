use std::{
    fmt::{Display, Formatter},
    ops::Deref,
};

use crate::tokenizer::SentenceSplitter;

/// A transcript held in memory for a single pass.
#[derive(Debug, Default)]
pub struct Document(String);

impl Document {
    #[inline]
    pub fn new(text: String) -> Self {
        Self(text)
    }

    #[inline]
    pub fn inner(&self) -> &String {
        &self.0
    }

    #[inline]
    pub fn sentences<'d, S: SentenceSplitter + ?Sized>(&'d self, splitter: &S) -> Vec<&'d str> {
        splitter.split(self.inner())
    }
}

impl From<String> for Document {
    #[inline]
    fn from(buffer: String) -> Self {
        Document(buffer)
    }
}

impl From<&str> for Document {
    #[inline]
    fn from(buffer: &str) -> Self {
        Document(buffer.to_string())
    }
}

impl Deref for Document {
    type Target = String;

    #[inline]
    fn deref(&self) -> &Self::Target {
        self.inner()
    }
}

impl Display for Document {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.0)
    }
}
