// N-grams: contiguous token sequences of length 1, 2 or 3.
//
// An `NGram` carries its own arity, so unigrams, bigrams and trigrams can share
// one map without colliding. A unigram built from a bare token is the same
// value as a unigram produced by the extractor, which keeps lookups uniform.
// The space-joined phrase form is only used at presentation boundaries.

use std::cmp::Ordering;
use std::fmt;

use serde::{Serialize, Serializer};

/// The n-gram orders the pipeline scores.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Order {
    Unigram,
    Bigram,
    Trigram,
}

impl Order {
    /// Every order, shortest first.
    pub const ALL: [Order; 3] = [Order::Unigram, Order::Bigram, Order::Trigram];

    /// Number of tokens in an n-gram of this order.
    pub fn token_count(self) -> usize {
        match self {
            Order::Unigram => 1,
            Order::Bigram => 2,
            Order::Trigram => 3,
        }
    }

    pub fn from_len(len: usize) -> Option<Order> {
        match len {
            1 => Some(Order::Unigram),
            2 => Some(Order::Bigram),
            3 => Some(Order::Trigram),
            _ => None,
        }
    }
}

impl fmt::Display for Order {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Order::Unigram => "unigram",
            Order::Bigram => "bigram",
            Order::Trigram => "trigram",
        };
        f.write_str(name)
    }
}

/// An ordered tuple of one to three tokens.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct NGram {
    tokens: Vec<String>,
}

impl NGram {
    /// Build an n-gram from tokens. Returns `None` unless there are 1-3 tokens.
    pub fn new(tokens: Vec<String>) -> Option<Self> {
        Order::from_len(tokens.len()).map(|_| Self { tokens })
    }

    pub fn unigram(token: impl Into<String>) -> Self {
        Self {
            tokens: vec![token.into()],
        }
    }

    /// Rebuild an n-gram from its space-joined phrase form.
    ///
    /// Inverse of [`NGram::phrase`] for tokens without whitespace.
    pub fn from_phrase(phrase: &str) -> Option<Self> {
        Self::new(phrase.split_whitespace().map(str::to_string).collect())
    }

    pub fn order(&self) -> Order {
        // `new` and the extractor only ever build 1-3 tokens.
        Order::from_len(self.tokens.len()).unwrap_or(Order::Trigram)
    }

    pub fn tokens(&self) -> &[String] {
        &self.tokens
    }

    /// The canonical rendering: tokens joined by single spaces. A unigram
    /// renders as its bare token.
    pub fn phrase(&self) -> String {
        self.tokens.join(" ")
    }
}

impl From<&str> for NGram {
    fn from(token: &str) -> Self {
        NGram::unigram(token)
    }
}

impl From<String> for NGram {
    fn from(token: String) -> Self {
        NGram::unigram(token)
    }
}

/// N-grams order by arity first, then token by token.
impl Ord for NGram {
    fn cmp(&self, other: &Self) -> Ordering {
        self.tokens
            .len()
            .cmp(&other.tokens.len())
            .then_with(|| self.tokens.cmp(&other.tokens))
    }
}

impl PartialOrd for NGram {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl fmt::Display for NGram {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.phrase())
    }
}

impl Serialize for NGram {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_str(self)
    }
}

/// Slide a window of `order.token_count()` tokens over `tokens` with stride 1.
///
/// Produces `max(0, tokens.len() - k + 1)` n-grams; fewer than `k` tokens
/// yields an empty sequence.
pub fn extract_ngrams(tokens: &[String], order: Order) -> Vec<NGram> {
    tokens
        .windows(order.token_count())
        .map(|window| NGram {
            tokens: window.to_vec(),
        })
        .collect()
}
