use std::path::PathBuf;
use std::str::FromStr;

use anyhow::{bail, Context, Result};
use tracing::{info, warn};

use crate::analysis::engine::AnalyzerConfig;
use crate::analysis::matcher::DEFAULT_TOP_KEYWORD_CAP;
use crate::analysis::stopwords::{Stopwords, DEFAULT_MIN_TOKEN_LENGTH};

const DEFAULT_MAX_UPLOAD_BYTES: usize = 10 * 1024 * 1024;

/// Application configuration loaded from environment variables.
/// Every variable has a default; malformed values fail startup.
#[derive(Debug, Clone)]
pub struct Config {
    pub port: u16,
    pub rust_log: String,
    pub min_token_length: usize,
    pub top_keyword_cap: usize,
    /// Replaces the built-in English stopword list when set.
    pub stopwords_path: Option<PathBuf>,
    pub max_upload_bytes: usize,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            port: 8080,
            rust_log: "info".to_string(),
            min_token_length: DEFAULT_MIN_TOKEN_LENGTH,
            top_keyword_cap: DEFAULT_TOP_KEYWORD_CAP,
            stopwords_path: None,
            max_upload_bytes: DEFAULT_MAX_UPLOAD_BYTES,
        }
    }
}

impl Config {
    pub fn from_env() -> Result<Self> {
        dotenvy::dotenv().ok(); // load .env if present; ignore if missing

        let defaults = Config::default();
        let config = Config {
            port: env_or("PORT", defaults.port)?,
            rust_log: std::env::var("RUST_LOG").unwrap_or(defaults.rust_log),
            min_token_length: env_or("MIN_TOKEN_LENGTH", defaults.min_token_length)?,
            top_keyword_cap: env_or("TOP_KEYWORD_CAP", defaults.top_keyword_cap)?,
            stopwords_path: std::env::var_os("STOPWORDS_PATH").map(PathBuf::from),
            max_upload_bytes: env_or("MAX_UPLOAD_BYTES", defaults.max_upload_bytes)?,
        };

        if config.top_keyword_cap == 0 {
            bail!("TOP_KEYWORD_CAP must be at least 1");
        }
        Ok(config)
    }

    /// Builds the engine configuration, reading the stopword file if one is configured.
    pub fn analyzer_config(&self) -> Result<AnalyzerConfig> {
        let stopwords = match &self.stopwords_path {
            Some(path) => {
                let list = std::fs::read_to_string(path).with_context(|| {
                    format!("Failed to read stopword list '{}'", path.display())
                })?;
                let stopwords = Stopwords::parse(&list);
                if stopwords.is_empty() {
                    warn!("Stopword list {} is empty; no words will be filtered", path.display());
                }
                info!(
                    "Loaded {} stopwords from {}",
                    stopwords.len(),
                    path.display()
                );
                stopwords
            }
            None => Stopwords::english(),
        };

        Ok(AnalyzerConfig {
            stopwords,
            min_token_length: self.min_token_length,
            top_keyword_cap: self.top_keyword_cap,
        })
    }
}

fn env_or<T>(key: &str, default: T) -> Result<T>
where
    T: FromStr,
    T::Err: std::error::Error + Send + Sync + 'static,
{
    match std::env::var(key) {
        Ok(raw) => raw
            .trim()
            .parse::<T>()
            .with_context(|| format!("{key} has an invalid value '{raw}'")),
        Err(_) => Ok(default),
    }
}
