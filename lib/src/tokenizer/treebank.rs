use crate::tokenizer::{TextTokenizer, Token, Tokens};

const LEADING: &[char] = &[
    '"', '(', '[', '{', '<', '“', '‘', '«', '$', '#', '£', '€', '¿', '¡', '*', '`',
];

const TRAILING: &[char] = &[
    ',', ';', ':', '!', '?', '"', ')', ']', '}', '>', '”', '\'', '»', '%', '*',
];

const DASHES: &[&str] = &["--", "—", "–", "…"];

/// Contraction suffixes split from their stem, longest first.
const CLITICS: &[&str] = &["n't", "'ll", "'re", "'ve", "'s", "'m", "'d"];

/// Word tokenizer in the style of the Penn Treebank conventions.
///
/// Operates on one sentence at a time: punctuation, brackets, quotes and
/// currency signs become their own tokens, contractions are split into
/// stem and clitic (`don't` -> `do`, `n't`; `can't` -> `ca`, `n't`) and
/// a period is only detached
/// from the final word of the sentence, so inner abbreviations stay intact.
#[derive(Clone, Debug, Default)]
pub struct Treebank;

impl Treebank {
    pub fn new() -> Self {
        Self::default()
    }

    fn split_dashes(chunk: &str) -> Vec<&str> {
        let mut pieces = Vec::new();
        let mut rest = chunk;

        'outer: while !rest.is_empty() {
            for (index, _) in rest.char_indices() {
                if let Some(dash) = DASHES.iter().find(|dash| rest[index..].starts_with(**dash)) {
                    if index > 0 {
                        pieces.push(&rest[..index]);
                    }
                    pieces.push(*dash);
                    rest = &rest[index + dash.len()..];
                    continue 'outer;
                }
            }

            pieces.push(rest);
            break;
        }

        pieces
    }

    fn split_piece(piece: &str, sentence_final: bool, tokens: &mut Tokens) {
        let mut word = piece;

        while let Some(ch) = word.chars().next().filter(|ch| LEADING.contains(ch)) {
            tokens.push(Token::from(ch.to_string()));
            word = &word[ch.len_utf8()..];
        }

        let mut trailing = Vec::new();
        loop {
            if word.len() > 3 && word.ends_with("...") {
                trailing.push("...".to_string());
                word = &word[..word.len() - 3];
                continue;
            }

            match word.chars().next_back() {
                Some(ch) if TRAILING.contains(&ch) => {
                    trailing.push(ch.to_string());
                    word = &word[..word.len() - ch.len_utf8()];
                }
                Some('.') if sentence_final && word.len() > 1 => {
                    trailing.push(".".to_string());
                    word = &word[..word.len() - 1];
                }
                _ => break,
            }
        }

        if !word.is_empty() {
            Self::split_clitics(word, tokens);
        }

        tokens.extend(trailing.into_iter().rev().map(Token::from));
    }

    fn split_clitics(word: &str, tokens: &mut Tokens) {
        let lowered = word.to_lowercase();

        for clitic in CLITICS {
            if lowered.len() > clitic.len() && lowered.ends_with(clitic) {
                let split = word.len() - clitic.len();
                if word.is_char_boundary(split) {
                    tokens.push(Token::from(&word[..split]));
                    tokens.push(Token::from(&word[split..]));
                    return;
                }
            }
        }

        tokens.push(Token::from(word));
    }
}

impl TextTokenizer for Treebank {
    fn tokenize<T: AsRef<str>>(&mut self, text: T) -> Tokens {
        let text = text.as_ref().replace('’', "'");
        let chunks = text.split_whitespace().collect::<Vec<_>>();
        let mut tokens = Tokens::with_capacity(chunks.len());

        for (index, chunk) in chunks.iter().enumerate() {
            let pieces = Self::split_dashes(chunk);
            let last_piece = pieces.len() - 1;

            for (position, piece) in pieces.into_iter().enumerate() {
                if DASHES.contains(&piece) {
                    tokens.push(Token::from(piece));
                    continue;
                }

                let sentence_final = index == chunks.len() - 1 && position == last_piece;
                Self::split_piece(piece, sentence_final, &mut tokens);
            }
        }

        tokens
    }
}

#[cfg(test)]
mod tests {
    use crate::{
        tokenizer::{TextTokenizer, Token, Treebank},
        tokens,
    };

    #[test]
    fn test_treebank_basic() {
        let mut tokenizer = Treebank::new();
        let tokens = tokenizer.tokenize("The cat sat on the mat.");

        assert_eq!(tokens, tokens!["The", "cat", "sat", "on", "the", "mat", "."]);
    }

    #[test]
    fn test_treebank_punctuation_and_symbols() {
        let mut tokenizer = Treebank::new();
        let tokens = tokenizer.tokenize("123 $$$ !!!");

        assert_eq!(tokens, tokens!["123", "$", "$", "$", "!", "!", "!"]);
    }

    #[test]
    fn test_treebank_commas_and_quotes() {
        let mut tokenizer = Treebank::new();
        let tokens = tokenizer.tokenize("\"Well, (maybe) not,\" she said.");

        assert_eq!(
            tokens,
            tokens!["\"", "Well", ",", "(", "maybe", ")", "not", ",", "\"", "she", "said", "."]
        );
    }

    #[test]
    fn test_treebank_contractions() {
        let mut tokenizer = Treebank::new();
        let tokens = tokenizer.tokenize("I don't think she's here, we'll see.");

        assert_eq!(
            tokens,
            tokens!["I", "do", "n't", "think", "she", "'s", "here", ",", "we", "'ll", "see", "."]
        );
    }

    #[test]
    fn test_treebank_irregular_negations() {
        let mut tokenizer = Treebank::new();
        let tokens = tokenizer.tokenize("Can't stop, won't stop");

        assert_eq!(tokens, tokens!["Ca", "n't", "stop", ",", "wo", "n't", "stop"]);
    }

    #[test]
    fn test_treebank_negation_keeps_surface_case() {
        let mut tokenizer = Treebank::new();

        assert_eq!(tokenizer.tokenize("CAN'T"), tokens!["CA", "N'T"]);
        assert_eq!(tokenizer.tokenize("Ain't"), tokens!["Ai", "n't"]);
        assert_eq!(tokenizer.tokenize("shan't"), tokens!["sha", "n't"]);
    }

    #[test]
    fn test_treebank_curly_apostrophe() {
        let mut tokenizer = Treebank::new();
        let tokens = tokenizer.tokenize("It’s fine");

        assert_eq!(tokens, tokens!["It", "'s", "fine"]);
    }

    #[test]
    fn test_treebank_inner_period_kept() {
        let mut tokenizer = Treebank::new();
        let tokens = tokenizer.tokenize("Dr. Smith paid $3.50 for it.");

        assert_eq!(
            tokens,
            tokens!["Dr.", "Smith", "paid", "$", "3.50", "for", "it", "."]
        );
    }

    #[test]
    fn test_treebank_dashes_and_ellipsis() {
        let mut tokenizer = Treebank::new();
        let tokens = tokenizer.tokenize("well--maybe… later...");

        assert_eq!(
            tokens,
            tokens!["well", "--", "maybe", "…", "later", "..."]
        );
    }

    #[test]
    fn test_treebank_hyphenated_word() {
        let mut tokenizer = Treebank::new();
        let tokens = tokenizer.tokenize("a well-known fact");

        assert_eq!(tokens, tokens!["a", "well-known", "fact"]);
    }

    #[test]
    fn test_treebank_empty() {
        let mut tokenizer = Treebank::new();

        assert!(tokenizer.tokenize("").is_empty());
        assert_eq!(tokenizer.tokenize("   ").count(), 0);
        assert_eq!(tokenizer.tokenize("word").last(), Some(&Token::from("word")));
    }
}
