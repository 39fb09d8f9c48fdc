use hashbrown::HashSet;

/// Order in which unknown words are emitted.
#[derive(Clone, Copy, Debug, Default, Eq, PartialEq)]
pub enum OutputOrder {
    /// Lexicographic by code point; deterministic across runs.
    #[default]
    Sorted,
    /// Order of first appearance in the transcript.
    Encounter,
}

/// Deduplicated set of words no reference corpus knows.
#[derive(Clone, Debug, Default)]
pub struct UnknownWords {
    seen: HashSet<String>,
    encounter: Vec<String>,
}

impl UnknownWords {
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns `false` if the word was already collected.
    pub fn insert(&mut self, word: String) -> bool {
        if self.seen.contains(&word) {
            return false;
        }

        self.seen.insert(word.clone());
        self.encounter.push(word);
        true
    }

    #[inline]
    pub fn contains(&self, word: &str) -> bool {
        self.seen.contains(word)
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.encounter.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.encounter.is_empty()
    }

    pub fn ordered(&self, order: OutputOrder) -> Vec<&str> {
        let mut words = self.encounter.iter().map(String::as_str).collect::<Vec<_>>();
        if order == OutputOrder::Sorted {
            words.sort_unstable();
        }
        words
    }

    pub fn into_ordered(self, order: OutputOrder) -> Vec<String> {
        let mut words = self.encounter;
        if order == OutputOrder::Sorted {
            words.sort_unstable();
        }
        words
    }
}

impl Extend<String> for UnknownWords {
    fn extend<I: IntoIterator<Item = String>>(&mut self, iter: I) {
        iter.into_iter().for_each(|word| {
            self.insert(word);
        });
    }
}

#[cfg(test)]
mod tests {
    use super::{OutputOrder, UnknownWords};

    fn collected(words: &[&str]) -> UnknownWords {
        let mut unknown = UnknownWords::new();
        unknown.extend(words.iter().map(|word| word.to_string()));
        unknown
    }

    #[test]
    fn test_unknown_words_deduplicate() {
        let mut unknown = UnknownWords::new();

        assert!(unknown.insert("zorb".to_string()));
        assert!(!unknown.insert("zorb".to_string()));
        assert!(unknown.insert("Zorb".to_string()));
        assert_eq!(unknown.len(), 2);
        assert!(unknown.contains("zorb"));
    }

    #[test]
    fn test_unknown_words_sorted() {
        let unknown = collected(&["kubectl", "flibbertigibbet", "awk", "kubectl"]);

        assert_eq!(
            unknown.ordered(OutputOrder::Sorted),
            vec!["awk", "flibbertigibbet", "kubectl"]
        );
    }

    #[test]
    fn test_unknown_words_encounter() {
        let unknown = collected(&["kubectl", "flibbertigibbet", "awk", "kubectl"]);

        assert_eq!(
            unknown.into_ordered(OutputOrder::Encounter),
            vec!["kubectl", "flibbertigibbet", "awk"]
        );
    }

    #[test]
    fn test_unknown_words_empty() {
        let unknown = UnknownWords::new();

        assert!(unknown.is_empty());
        assert!(unknown.ordered(OutputOrder::default()).is_empty());
    }
}
