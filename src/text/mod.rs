// Text processing: tokens, n-grams and per-document frequency tables.

pub mod frequency;
pub mod ngram;
pub mod tokenizer;
