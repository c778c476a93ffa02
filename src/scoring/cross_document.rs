// Cross-document scoring of the selected phrases.
//
// Each comparison document is scored on its own: its unigram frequency table
// supplies tf, and the document itself is the whole (one-element) collection
// for idf, so every word present gets idf = ln(1 / 2). A phrase's score in a
// document is the sum of its words' local TF-IDF values.
//
// A phrase word missing from a document is a `KeyLookup` error. Under
// `FailurePolicy::Abort` that error ends the whole run; under
// `FailurePolicy::IsolatePair` only that (phrase, document) pair is dropped
// and recorded as a failure.

use std::collections::HashMap;

use serde::Serialize;
use tracing::{info, warn};

use crate::corpus::{Document, DocumentCollection, NGramCollection};
use crate::error::{Result, SalientError};
use crate::scoring::tfidf::tfidf;
use crate::text::ngram::{NGram, Order};

/// What to do when a phrase word is missing from a document.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum FailurePolicy {
    /// Propagate the first error to the caller.
    #[default]
    Abort,
    /// Record the failed pair and keep scoring the rest.
    IsolatePair,
}

/// Document-local TF-IDF for every word of one document.
#[derive(Debug, Clone)]
pub struct LocalScores {
    label: String,
    scores: HashMap<String, f64>,
}

impl LocalScores {
    pub fn compute(document: &Document) -> Result<Self> {
        let table = document.frequency_table(Order::Unigram);
        let collection = NGramCollection::single(document, Order::Unigram);

        let mut scores = HashMap::with_capacity(table.len());
        for (ngram, _) in table.iter() {
            let score = tfidf(ngram, &table, &collection)?;
            scores.insert(ngram.phrase(), score);
        }

        Ok(Self {
            label: document.label().to_string(),
            scores,
        })
    }

    pub fn label(&self) -> &str {
        &self.label
    }

    /// Strict lookup of one word's local score.
    pub fn word(&self, word: &str) -> Result<f64> {
        self.scores
            .get(word)
            .copied()
            .ok_or_else(|| SalientError::KeyLookup {
                ngram: word.to_string(),
            })
    }

    /// Sum of the local scores of each whitespace-separated word in `phrase`.
    pub fn phrase(&self, phrase: &str) -> Result<f64> {
        phrase.split_whitespace().map(|w| self.word(w)).sum()
    }
}

/// The score of one phrase in one document.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct PairScore {
    pub phrase: String,
    pub document: String,
    pub score: f64,
}

/// A (phrase, document) pair that could not be scored.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct PairFailure {
    pub phrase: String,
    pub document: String,
    pub reason: String,
}

/// All pair scores, document-major in input order.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct CrossDocumentReport {
    pub scores: Vec<PairScore>,
    pub failures: Vec<PairFailure>,
}

impl CrossDocumentReport {
    pub fn get(&self, phrase: &str, document: &str) -> Option<f64> {
        self.scores
            .iter()
            .find(|s| s.phrase == phrase && s.document == document)
            .map(|s| s.score)
    }

    /// Scores keyed by (phrase, document label).
    pub fn to_map(&self) -> HashMap<(String, String), f64> {
        self.scores
            .iter()
            .map(|s| ((s.phrase.clone(), s.document.clone()), s.score))
            .collect()
    }
}

/// Score every phrase against every document.
pub fn score_phrases(
    phrases: &[String],
    documents: &DocumentCollection,
    policy: FailurePolicy,
) -> Result<CrossDocumentReport> {
    let mut report = CrossDocumentReport::default();

    for document in documents {
        let local = LocalScores::compute(document)?;
        for phrase in phrases {
            match local.phrase(phrase) {
                Ok(score) => report.scores.push(PairScore {
                    phrase: phrase.clone(),
                    document: local.label().to_string(),
                    score,
                }),
                Err(e) if policy == FailurePolicy::IsolatePair && e.is_key_lookup() => {
                    warn!(phrase = %phrase, document = local.label(), error = %e, "Skipping unscorable pair");
                    report.failures.push(PairFailure {
                        phrase: phrase.clone(),
                        document: local.label().to_string(),
                        reason: e.to_string(),
                    });
                }
                Err(e) => return Err(e),
            }
        }
    }

    info!(
        scored = report.scores.len(),
        failed = report.failures.len(),
        "Cross-document scoring complete"
    );
    Ok(report)
}

/// Score a single phrase in a single document.
pub fn score_pair(phrase: &str, document: &Document) -> Result<f64> {
    LocalScores::compute(document)?.phrase(phrase)
}

/// Score n-grams directly rather than flattened phrases.
pub fn score_ngrams(
    ngrams: &[NGram],
    documents: &DocumentCollection,
    policy: FailurePolicy,
) -> Result<CrossDocumentReport> {
    let phrases: Vec<String> = ngrams.iter().map(NGram::phrase).collect();
    score_phrases(&phrases, documents, policy)
}
