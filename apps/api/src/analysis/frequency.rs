//! Frequency Counter — keyword → occurrence count, keyed in first-occurrence order.

use indexmap::IndexMap;
use serde::Serialize;

use crate::analysis::normalizer::Token;

/// One ranked entry of a document's keyword inventory.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct KeywordCount {
    pub keyword: Token,
    pub frequency: usize,
}

/// Per-document keyword counts. Built once by [`KeywordFrequency::count`] and never
/// mutated afterwards; iteration follows first occurrence in the source sequence.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct KeywordFrequency {
    counts: IndexMap<Token, usize>,
}

impl KeywordFrequency {
    pub fn count<I>(keywords: I) -> Self
    where
        I: IntoIterator<Item = Token>,
    {
        let mut counts: IndexMap<Token, usize> = IndexMap::new();
        for keyword in keywords {
            *counts.entry(keyword).or_insert(0) += 1;
        }
        Self { counts }
    }

    #[allow(dead_code)]
    pub fn get(&self, keyword: &str) -> Option<usize> {
        self.counts.get(keyword).copied()
    }

    pub fn contains(&self, keyword: &str) -> bool {
        self.counts.contains_key(keyword)
    }

    /// Number of distinct keywords.
    pub fn unique_count(&self) -> usize {
        self.counts.len()
    }

    /// Entries in first-occurrence order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, usize)> + '_ {
        self.counts.iter().map(|(k, v)| (k.as_str(), *v))
    }

    /// Keywords by descending frequency; ties keep first-occurrence order.
    pub fn ranked(&self) -> Vec<KeywordCount> {
        let mut ranked: Vec<KeywordCount> = self
            .iter()
            .map(|(keyword, frequency)| KeywordCount {
                keyword: keyword.to_owned(),
                frequency,
            })
            .collect();
        // stable sort: equal counts stay in insertion order
        ranked.sort_by(|a, b| b.frequency.cmp(&a.frequency));
        ranked
    }
}
