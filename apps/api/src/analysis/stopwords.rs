//! Stopword Filter — drops function words and tokens shorter than the minimum length.
//!
//! The stopword set is a plain value injected by the caller. The built-in English list
//! is the NLTK set from the `stop-words` crate. Apostrophes are separators after
//! normalization, so only its contraction fragments ("don", "t", "shouldn") ever match.

use std::collections::HashSet;
use std::sync::Arc;

use stop_words::LANGUAGE;

use crate::analysis::normalizer::Token;

/// Default minimum keyword length. Tokens shorter than this are dropped.
pub const DEFAULT_MIN_TOKEN_LENGTH: usize = 3;

/// Job-posting boilerplate that carries no requirement signal.
const POSTING_BOILERPLATE: &[&str] = &[
    "looking",
    "seeking",
    "hiring",
    "wanted",
    "ideal",
    "candidate",
    "candidates",
    "applicant",
    "applicants",
    "apply",
    "join",
    "opportunity",
];

/// A lower-cased stopword set. Cloning shares the underlying set.
#[derive(Debug, Clone)]
pub struct Stopwords {
    words: Arc<HashSet<String>>,
}

impl Default for Stopwords {
    fn default() -> Self {
        Self::english()
    }
}

impl Stopwords {
    /// The NLTK English list plus job-posting boilerplate.
    pub fn english() -> Self {
        let english = stop_words::get(LANGUAGE::English);
        Self::from_words(
            english
                .iter()
                .map(|w| w.to_string())
                .chain(POSTING_BOILERPLATE.iter().map(|w| w.to_string())),
        )
    }

    /// Builds a set from arbitrary words. Entries are trimmed and lower-cased; blanks
    /// are skipped.
    pub fn from_words<I, S>(words: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let words = words
            .into_iter()
            .map(|w| w.as_ref().trim().to_lowercase())
            .filter(|w| !w.is_empty())
            .collect();
        Self {
            words: Arc::new(words),
        }
    }

    /// Parses a stopword list file: whitespace-separated words, `#` starts a comment
    /// that runs to the end of the line.
    pub fn parse(list: &str) -> Self {
        Self::from_words(
            list.lines()
                .map(|line| line.split('#').next().unwrap_or_default())
                .flat_map(str::split_whitespace),
        )
    }

    /// Case-sensitive membership check against the lower-cased set.
    pub fn contains(&self, token: &str) -> bool {
        self.words.contains(token)
    }

    pub fn len(&self) -> usize {
        self.words.len()
    }

    pub fn is_empty(&self) -> bool {
        self.words.is_empty()
    }
}

/// Keeps a token iff it is not a stopword and has at least `min_token_length` chars.
#[derive(Debug, Clone)]
pub struct StopwordFilter {
    stopwords: Stopwords,
    min_token_length: usize,
}

impl StopwordFilter {
    pub fn new(stopwords: Stopwords, min_token_length: usize) -> Self {
        Self {
            stopwords,
            min_token_length,
        }
    }

    pub fn keeps(&self, token: &str) -> bool {
        token.chars().count() >= self.min_token_length && !self.stopwords.contains(token)
    }

    /// Order-preserving filter over a token sequence.
    pub fn apply(&self, tokens: Vec<Token>) -> Vec<Token> {
        tokens.into_iter().filter(|t| self.keeps(t)).collect()
    }
}
