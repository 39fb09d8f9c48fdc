extern crate unicode_segmentation;

use std::{ops::Range, sync::OnceLock};

use hashbrown::HashSet;
use unicode_segmentation::UnicodeSegmentation;

/// Splits running text into sentences.
pub trait SentenceSplitter: std::fmt::Debug {
    fn split<'t>(&self, text: &'t str) -> Vec<&'t str>;
}

fn abbreviations() -> &'static HashSet<&'static str> {
    static SET: OnceLock<HashSet<&str>> = OnceLock::new();
    SET.get_or_init(|| {
        [
            "mr.", "mrs.", "ms.", "dr.", "prof.", "rev.", "gen.", "col.", "capt.", "lt.", "sgt.",
            "st.", "jr.", "sr.", "mt.", "ft.", "vs.", "etc.", "e.g.", "i.e.", "inc.", "ltd.",
            "co.", "corp.", "no.", "fig.", "approx.", "dept.", "est.", "u.s.", "u.k.", "a.m.",
            "p.m.", "jan.", "feb.", "mar.", "apr.", "jun.", "jul.", "aug.", "sep.", "sept.",
            "oct.", "nov.", "dec.",
        ]
        .into_iter()
        .collect::<HashSet<&str>>()
    })
}

/// Sentence segmenter built on Unicode sentence boundaries (UAX #29).
///
/// UAX #29 breaks after every `. ` followed by an uppercase letter, so a
/// boundary that directly follows a known abbreviation (`Dr.`, `e.g.`) or a
/// single-letter initial (`J.`) is glued back onto the next sentence.
#[derive(Clone, Debug, Default)]
pub struct Segmenter;

impl Segmenter {
    pub fn new() -> Self {
        Self
    }

    fn ends_with_abbreviation(sentence: &str) -> bool {
        let Some(last) = sentence.split_whitespace().last() else {
            return false;
        };

        let last = last.trim_start_matches(|ch: char| !ch.is_alphanumeric());
        if !last.ends_with('.') {
            return false;
        }

        let mut chars = last.chars();
        let initial = matches!(
            (chars.next(), chars.next(), chars.next()),
            (Some(letter), Some('.'), None) if letter.is_uppercase()
        );

        initial || abbreviations().contains(last.to_lowercase().as_str())
    }
}

impl SentenceSplitter for Segmenter {
    fn split<'t>(&self, text: &'t str) -> Vec<&'t str> {
        let mut ranges: Vec<Range<usize>> = Vec::new();
        let mut glue = false;

        for (start, sentence) in text.split_sentence_bound_indices() {
            let end = start + sentence.len();

            match ranges.last_mut() {
                Some(range) if glue => range.end = end,
                _ => ranges.push(start..end),
            }

            glue = Self::ends_with_abbreviation(sentence);
        }

        ranges
            .into_iter()
            .map(|range| text[range].trim())
            .filter(|sentence| !sentence.is_empty())
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::{Segmenter, SentenceSplitter};

    #[test]
    fn test_segmenter_basic() {
        let segmenter = Segmenter::new();
        let sentences = segmenter.split("The cat sat on the mat. The dog barked! Did it?");

        assert_eq!(
            sentences,
            vec!["The cat sat on the mat.", "The dog barked!", "Did it?"]
        );
    }

    #[test]
    fn test_segmenter_empty() {
        let segmenter = Segmenter::new();

        assert!(segmenter.split("").is_empty());
        assert!(segmenter.split("   \n\t ").is_empty());
    }

    #[test]
    fn test_segmenter_abbreviations() {
        let segmenter = Segmenter::new();
        let sentences = segmenter.split("Dr. Smith met Mrs. Jones. They talked.");

        assert_eq!(sentences, vec!["Dr. Smith met Mrs. Jones.", "They talked."]);
    }

    #[test]
    fn test_segmenter_initials() {
        let segmenter = Segmenter::new();
        let sentences = segmenter.split("It was written by J. Tolkien. Everyone read it.");

        assert_eq!(
            sentences,
            vec!["It was written by J. Tolkien.", "Everyone read it."]
        );
    }

    #[test]
    fn test_segmenter_without_terminal_punctuation() {
        let segmenter = Segmenter::new();
        let sentences = segmenter.split("no punctuation at all");

        assert_eq!(sentences, vec!["no punctuation at all"]);
    }
}
