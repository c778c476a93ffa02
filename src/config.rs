use std::env;
use std::path::PathBuf;
use std::str::FromStr;

use crate::error::{Result, SalientError};
use crate::scoring::importance::OrderModifiers;

/// Reference document read when nothing else is configured.
pub const DEFAULT_SCRIPT_PATH: &str = "script.txt";

/// Comparison documents read when nothing else is configured.
pub const DEFAULT_TRANSCRIPT_PATHS: [&str; 3] =
    ["transcript_1.txt", "transcript_2.txt", "transcript_3.txt"];

/// Number of top phrases selected when nothing else is configured.
pub const DEFAULT_TOP_N: usize = 20;

/// Everything one analysis run needs.
///
/// Values come from environment variables (a `.env` file is loaded by the
/// binary at startup via dotenvy), and command-line flags override them.
#[derive(Debug, Clone, PartialEq)]
pub struct AnalysisConfig {
    /// The reference document ("script")
    pub script_path: PathBuf,
    /// The comparison documents ("transcripts"), in labeling order
    pub transcript_paths: Vec<PathBuf>,
    /// How many phrases to select for comparison and re-scoring
    pub top_n: usize,
    /// Per-order importance weights
    pub modifiers: OrderModifiers,
}

impl Default for AnalysisConfig {
    fn default() -> Self {
        Self {
            script_path: PathBuf::from(DEFAULT_SCRIPT_PATH),
            transcript_paths: DEFAULT_TRANSCRIPT_PATHS.iter().map(PathBuf::from).collect(),
            top_n: DEFAULT_TOP_N,
            modifiers: OrderModifiers::default(),
        }
    }
}

impl AnalysisConfig {
    /// Load configuration from environment variables.
    ///
    /// - `SALIENT_SCRIPT`: reference document path
    /// - `SALIENT_TRANSCRIPTS`: comma-separated comparison document paths
    /// - `SALIENT_TOP_N`: number of phrases to select
    /// - `SALIENT_UNIGRAM_WEIGHT`, `SALIENT_BIGRAM_WEIGHT`, `SALIENT_TRIGRAM_WEIGHT`
    ///
    /// Unset variables fall back to the defaults; malformed numbers are
    /// configuration errors.
    pub fn load() -> Result<Self> {
        Self::from_lookup(|key| env::var(key).ok())
    }

    /// Build a configuration from any key/value source.
    pub fn from_lookup<F>(lookup: F) -> Result<Self>
    where
        F: Fn(&str) -> Option<String>,
    {
        let mut config = Self::default();

        if let Some(script) = lookup("SALIENT_SCRIPT") {
            config.script_path = PathBuf::from(script);
        }
        if let Some(transcripts) = lookup("SALIENT_TRANSCRIPTS") {
            config.transcript_paths = transcripts
                .split(',')
                .map(str::trim)
                .filter(|p| !p.is_empty())
                .map(PathBuf::from)
                .collect();
        }
        if let Some(top_n) = lookup("SALIENT_TOP_N") {
            config.top_n = parse_value("SALIENT_TOP_N", &top_n)?;
        }
        if let Some(weight) = lookup("SALIENT_UNIGRAM_WEIGHT") {
            config.modifiers.unigram = parse_value("SALIENT_UNIGRAM_WEIGHT", &weight)?;
        }
        if let Some(weight) = lookup("SALIENT_BIGRAM_WEIGHT") {
            config.modifiers.bigram = parse_value("SALIENT_BIGRAM_WEIGHT", &weight)?;
        }
        if let Some(weight) = lookup("SALIENT_TRIGRAM_WEIGHT") {
            config.modifiers.trigram = parse_value("SALIENT_TRIGRAM_WEIGHT", &weight)?;
        }

        Ok(config)
    }

    /// Reject settings no run can succeed with, before any file is read.
    pub fn validate(&self) -> Result<()> {
        validate_top_n(self.top_n)?;
        if self.transcript_paths.is_empty() {
            return Err(SalientError::Config {
                reason: "no transcript paths configured (set SALIENT_TRANSCRIPTS or pass --transcript)"
                    .to_string(),
            });
        }
        if !self.modifiers.is_finite() {
            return Err(SalientError::Config {
                reason: format!("order modifiers must be finite, got {:?}", self.modifiers),
            });
        }
        Ok(())
    }
}

/// `top_n` must select at least one phrase.
pub fn validate_top_n(top_n: usize) -> Result<()> {
    if top_n == 0 {
        return Err(SalientError::Config {
            reason: "top_n must be a positive integer".to_string(),
        });
    }
    Ok(())
}

fn parse_value<T: FromStr>(key: &str, raw: &str) -> Result<T> {
    raw.trim().parse().map_err(|_| SalientError::Config {
        reason: format!("{key} has an invalid value: {raw:?}"),
    })
}
