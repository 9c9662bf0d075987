//! End-to-end analysis: both documents through extraction and counting, then matching.
//!
//! Every call allocates its own intermediate sequences and maps, so the engine can be
//! shared across tasks without locking.

use tracing::debug;

use crate::analysis::extractor::KeywordExtractor;
use crate::analysis::frequency::KeywordFrequency;
use crate::analysis::matcher::{match_keywords, MatchResult, DEFAULT_TOP_KEYWORD_CAP};
use crate::analysis::stopwords::{Stopwords, DEFAULT_MIN_TOKEN_LENGTH};

/// Engine configuration, owned by the caller and injected per analysis.
#[derive(Debug, Clone)]
pub struct AnalyzerConfig {
    pub stopwords: Stopwords,
    pub min_token_length: usize,
    pub top_keyword_cap: usize,
}

impl Default for AnalyzerConfig {
    fn default() -> Self {
        Self {
            stopwords: Stopwords::english(),
            min_token_length: DEFAULT_MIN_TOKEN_LENGTH,
            top_keyword_cap: DEFAULT_TOP_KEYWORD_CAP,
        }
    }
}

impl AnalyzerConfig {
    pub fn extractor(&self) -> KeywordExtractor {
        KeywordExtractor::new(self.stopwords.clone(), self.min_token_length)
    }
}

/// Keyword counts of a single document.
pub fn keyword_frequency(text: &str, config: &AnalyzerConfig) -> KeywordFrequency {
    KeywordFrequency::count(config.extractor().extract(text))
}

/// Scores `resume_text` against `job_text`.
pub fn analyze(resume_text: &str, job_text: &str, config: &AnalyzerConfig) -> MatchResult {
    let extractor = config.extractor();
    let resume = KeywordFrequency::count(extractor.extract(resume_text));
    let job = KeywordFrequency::count(extractor.extract(job_text));

    let result = match_keywords(&resume, &job, config.top_keyword_cap);
    debug!(
        resume_keywords = resume.unique_count(),
        job_keywords = job.unique_count(),
        considered = result.considered(),
        matched = result.matched_keywords.len(),
        missing = result.missing_keywords.len(),
        score = result.match_percentage,
        "Analysis complete"
    );
    result
}

#[cfg(test)]
mod tests {
    use super::*;

    const RESUME: &str = "I developed a Python web application using Flask and Docker";
    const JOB: &str = "Looking for Python Docker AWS Kubernetes experience";

    #[test]
    fn test_python_docker_scenario() {
        let result = analyze(RESUME, JOB, &AnalyzerConfig::default());
        assert_eq!(result.matched_keywords, vec!["python", "docker"]);
        assert_eq!(result.missing_keywords, vec!["aws", "kubernetes", "experience"]);
        assert_eq!(result.match_percentage, 40.0);
    }

    #[test]
    fn test_both_empty() {
        let result = analyze("", "", &AnalyzerConfig::default());
        assert_eq!(result.match_percentage, 0.0);
        assert!(result.matched_keywords.is_empty());
        assert!(result.missing_keywords.is_empty());
    }

    #[test]
    fn test_identical_texts_score_hundred() {
        let result = analyze(JOB, JOB, &AnalyzerConfig::default());
        assert_eq!(result.match_percentage, 100.0);
        assert!(result.missing_keywords.is_empty());
        assert_eq!(result.matched_keywords.len(), 5);
    }

    #[test]
    fn test_stopword_only_job_scores_zero() {
        let result = analyze(RESUME, "and the of is, it was!", &AnalyzerConfig::default());
        assert_eq!(result.match_percentage, 0.0);
        assert!(result.matched_keywords.is_empty());
        assert!(result.missing_keywords.is_empty());
    }

    #[test]
    fn test_stopwords_never_reported() {
        let job = "The team is building the platform and the tooling for the cloud";
        let resume = "the and is for";
        let result = analyze(resume, job, &AnalyzerConfig::default());
        for stop in ["the", "and", "is", "for"] {
            assert!(!result.matched_keywords.iter().any(|k| k == stop));
            assert!(!result.missing_keywords.iter().any(|k| k == stop));
        }
    }

    #[test]
    fn test_repeated_runs_are_identical() {
        let config = AnalyzerConfig::default();
        let job = "Rust Rust Go Kafka kafka KAFKA Postgres terraform AWS aws";
        let resume = "Kafka, Rust and Postgres at scale";
        let first = analyze(resume, job, &config);
        for _ in 0..10 {
            let again = analyze(resume, job, &config);
            assert_eq!(again, first);
            assert_eq!(again.match_percentage.to_bits(), first.match_percentage.to_bits());
        }
    }

    #[test]
    fn test_cap_enforced_end_to_end() {
        let job: String = (0..80).map(|i| format!("skill{i:03} ")).collect();
        let result = analyze("", &job, &AnalyzerConfig::default());
        assert_eq!(result.considered(), 50);
        assert_eq!(result.match_percentage, 0.0);
    }

    #[test]
    fn test_custom_config_changes_extraction() {
        let config = AnalyzerConfig {
            stopwords: Stopwords::from_words(["docker"]),
            min_token_length: 2,
            top_keyword_cap: 3,
        };
        let result = analyze("go python", "Go Docker Python AWS Kubernetes", &config);
        assert_eq!(result.matched_keywords, vec!["go", "python"]);
        assert_eq!(result.missing_keywords, vec!["aws"]);
        assert!((result.match_percentage - 200.0 / 3.0).abs() < 1e-9);
    }

    #[test]
    fn test_keyword_frequency_counts_document() {
        let freq = keyword_frequency("Kafka kafka KAFKA streams", &AnalyzerConfig::default());
        assert_eq!(freq.get("kafka"), Some(3));
        assert_eq!(freq.get("streams"), Some(1));
        assert_eq!(freq.unique_count(), 2);
    }
}
