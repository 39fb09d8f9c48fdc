use crate::tokenizer::{TextTokenizer, Token, Tokens};

/// One token per non-blank line, as in plain word-list files.
///
/// Lines starting with `#` are treated as comments.
#[derive(Clone, Debug, Default)]
pub struct Lines;

impl Lines {
    pub fn new() -> Self {
        Self::default()
    }
}

impl TextTokenizer for Lines {
    fn tokenize<T: AsRef<str>>(&mut self, text: T) -> Tokens {
        text.as_ref()
            .lines()
            .map(str::trim)
            .filter(|line| !line.is_empty() && !line.starts_with('#'))
            .map(Token::from)
            .collect()
    }
}
