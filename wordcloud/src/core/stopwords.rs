// src/core/stopwords.rs
use std::collections::HashSet;

use crate::config::StopwordsConfig;

/// Function words that carry no information in a word cloud. Any token in
/// this set never reaches the report, regardless of how often it occurs.
const DEFAULT_STOPWORDS: &[&str] = &[
    "a", "am", "an", "and", "are", "as", "at", "be", "by", "did", "do", "does", "doesnt", "dont",
    "dr", "for", "he", "her", "hers", "him", "his", "i", "if", "in", "is", "isnt", "it", "its",
    "me", "mr", "mrs", "ms", "my", "not", "of", "oh", "on", "or", "our", "she", "so", "sr", "the",
    "them", "they", "thy", "to", "us", "we", "ye", "you", "your",
];

/// An immutable set of words excluded from counting. Membership is
/// case-insensitive; entries are stored lowercase.
#[derive(Debug, Clone)]
pub struct Stopwords {
    words: HashSet<String>,
}

impl Default for Stopwords {
    fn default() -> Self {
        Self::from_words(DEFAULT_STOPWORDS.iter().copied())
    }
}

impl Stopwords {
    #[must_use]
    pub fn empty() -> Self {
        Self {
            words: HashSet::new(),
        }
    }

    pub fn from_words<I, S>(words: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let mut stopwords = Self::empty();
        stopwords.extend(words);
        stopwords
    }

    /// Builds the effective set for a run: the built-in list extended by the
    /// configured extras, or only the extras when `replace` is set.
    #[must_use]
    pub fn from_config(config: &StopwordsConfig) -> Self {
        let mut stopwords = if config.replace {
            Self::empty()
        } else {
            Self::default()
        };
        stopwords.extend(&config.extra);
        stopwords
    }

    pub fn extend<I, S>(&mut self, words: I)
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        for word in words {
            self.words.insert(word.as_ref().to_ascii_lowercase());
        }
    }

    #[must_use]
    pub fn contains(&self, word: &str) -> bool {
        self.words.contains(&word.to_ascii_lowercase())
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.words.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.words.is_empty()
    }
}
