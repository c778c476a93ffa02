// Scoring: TF-IDF, importance ranking and per-document re-scoring.

pub mod common;
pub mod cross_document;
pub mod importance;
pub mod tfidf;
