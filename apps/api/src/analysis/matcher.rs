//! Matcher — scores a résumé against the most emphasized job-description keywords.
//!
//! Algorithm:
//! 1. Rank job keywords by descending frequency, ties by first occurrence in the job text.
//! 2. Keep the top `cap` as the considered set.
//! 3. A considered keyword is matched if the résumé contains it at all (résumé frequency
//!    is not weighted), otherwise missing. Both lists keep ranking order.
//! 4. match_percentage = matched / min(unique job keywords, cap) × 100, clamped to 100;
//!    0 when the job description has no keywords.

use crate::analysis::frequency::KeywordFrequency;
use crate::analysis::normalizer::Token;

/// Default size of the considered set.
pub const DEFAULT_TOP_KEYWORD_CAP: usize = 50;

/// Outcome of one match. `matched_keywords` and `missing_keywords` are disjoint and
/// together form the considered set.
#[derive(Debug, Clone, PartialEq)]
pub struct MatchResult {
    pub match_percentage: f64, // 0.0 – 100.0
    pub matched_keywords: Vec<Token>,
    pub missing_keywords: Vec<Token>,
}

impl MatchResult {
    /// Size of the considered set.
    pub fn considered(&self) -> usize {
        self.matched_keywords.len() + self.missing_keywords.len()
    }
}

pub fn match_keywords(
    resume: &KeywordFrequency,
    job: &KeywordFrequency,
    cap: usize,
) -> MatchResult {
    let mut matched_keywords = Vec::new();
    let mut missing_keywords = Vec::new();

    for entry in job.ranked().into_iter().take(cap) {
        if resume.contains(&entry.keyword) {
            matched_keywords.push(entry.keyword);
        } else {
            missing_keywords.push(entry.keyword);
        }
    }

    let denominator = job.unique_count().min(cap);
    let match_percentage = if denominator == 0 {
        0.0
    } else {
        // matched <= denominator by construction; the clamp holds the bound regardless.
        ((matched_keywords.len() as f64 / denominator as f64) * 100.0).min(100.0)
    };

    MatchResult {
        match_percentage,
        matched_keywords,
        missing_keywords,
    }
}
