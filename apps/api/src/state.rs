use crate::analysis::engine::AnalyzerConfig;
use crate::config::Config;

/// Shared application state injected into all route handlers via Axum extractors.
#[derive(Clone)]
pub struct AppState {
    pub config: Config,
    /// Engine defaults. Requests may override the numeric settings per call; the
    /// stopword set is shared.
    pub analyzer: AnalyzerConfig,
}
