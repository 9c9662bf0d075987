//! Result Builder — the externally consumed record for one analysis.

use serde::{Deserialize, Serialize};

use crate::analysis::matcher::MatchResult;

/// Wire shape of a finished analysis: `matchPercentage`, `matchedKeywords`,
/// `missingKeywords`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AnalysisReport {
    pub match_percentage: f64,
    pub matched_keywords: Vec<String>,
    pub missing_keywords: Vec<String>,
}

impl From<MatchResult> for AnalysisReport {
    fn from(result: MatchResult) -> Self {
        Self {
            match_percentage: result.match_percentage,
            matched_keywords: result.matched_keywords,
            missing_keywords: result.missing_keywords,
        }
    }
}
