//! Keyword Extractor — Normalizer → Tokenizer → Stopword Filter in one pass.

use crate::analysis::normalizer::{normalize, tokenize, Token};
use crate::analysis::stopwords::{StopwordFilter, Stopwords};

/// Extracted keywords in source-document order.
pub type KeywordSequence = Vec<Token>;

#[derive(Debug, Clone)]
pub struct KeywordExtractor {
    filter: StopwordFilter,
}

impl KeywordExtractor {
    pub fn new(stopwords: Stopwords, min_token_length: usize) -> Self {
        Self {
            filter: StopwordFilter::new(stopwords, min_token_length),
        }
    }

    /// Total over any input; empty or stopword-only text yields an empty sequence.
    pub fn extract(&self, text: &str) -> KeywordSequence {
        self.filter.apply(tokenize(&normalize(text)))
    }
}
