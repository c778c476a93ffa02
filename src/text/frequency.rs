// Per-document n-gram counts.
//
// A table is built fresh for one document and one n-gram order. Unseen
// n-grams are absent rather than stored as zero, and a strict lookup of an
// absent key is an error.

use std::collections::HashMap;

use super::ngram::NGram;
use crate::error::{Result, SalientError};

/// Occurrence counts of n-grams within exactly one document.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FrequencyTable {
    counts: HashMap<NGram, usize>,
}

impl FrequencyTable {
    /// Count exact-match occurrences of each n-gram.
    pub fn from_ngrams<I>(ngrams: I) -> Self
    where
        I: IntoIterator<Item = NGram>,
    {
        let mut counts: HashMap<NGram, usize> = HashMap::new();
        for ngram in ngrams {
            *counts.entry(ngram).or_insert(0) += 1;
        }
        Self { counts }
    }

    /// Strict lookup: fails with `KeyLookup` when `ngram` was never counted.
    pub fn count(&self, ngram: &NGram) -> Result<usize> {
        self.counts
            .get(ngram)
            .copied()
            .ok_or_else(|| SalientError::KeyLookup {
                ngram: ngram.phrase(),
            })
    }

    /// Number of distinct n-grams.
    pub fn len(&self) -> usize {
        self.counts.len()
    }

    pub fn is_empty(&self) -> bool {
        self.counts.is_empty()
    }

    /// Sum of all counts, i.e. the length of the n-gram sequence it came from.
    pub fn total(&self) -> usize {
        self.counts.values().sum()
    }

    pub fn iter(&self) -> impl Iterator<Item = (&NGram, usize)> {
        self.counts.iter().map(|(ngram, &count)| (ngram, count))
    }
}

impl FromIterator<NGram> for FrequencyTable {
    fn from_iter<I: IntoIterator<Item = NGram>>(iter: I) -> Self {
        Self::from_ngrams(iter)
    }
}
