// Error taxonomy for the scoring pipeline.
//
// Leaf components return these directly and every caller propagates them
// with `?` unchanged. A missing frequency entry is a hard error, never a
// silent zero.

use std::path::PathBuf;

/// Everything that can go wrong between reading text and scoring phrases.
#[derive(Debug, thiserror::Error)]
pub enum SalientError {
    /// A source document could not be read or was not valid UTF-8.
    #[error("failed to read {}: {source}", .path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// An n-gram was looked up in a frequency table that does not contain it.
    #[error("n-gram '{ngram}' not found in frequency table")]
    KeyLookup { ngram: String },

    /// The analysis configuration was rejected before any scoring started.
    #[error("invalid configuration: {reason}")]
    Config { reason: String },
}

impl SalientError {
    pub fn is_key_lookup(&self) -> bool {
        matches!(self, SalientError::KeyLookup { .. })
    }
}

pub type Result<T> = std::result::Result<T, SalientError>;
