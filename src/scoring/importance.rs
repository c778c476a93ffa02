// Importance ranking across n-gram orders.
//
// For each order independently, every distinct n-gram of the reference
// document is scored as `modifier * tfidf` against the comparison documents
// reduced to that order. The three per-order maps are merged into a single
// map keyed by `NGram`; key spaces are disjoint because arity is part of the
// key.
//
// Top-N selection keeps a bounded min-heap of size N instead of sorting the
// whole map. Among equal scores the n-gram that comes first in the map's
// iteration order (arity, then tokens) wins.

use std::cmp::{Ordering, Reverse};
use std::collections::{BTreeMap, BinaryHeap};

use serde::ser::SerializeMap;
use serde::{Deserialize, Serialize, Serializer};
use tracing::{debug, info};

use crate::corpus::{Document, DocumentCollection};
use crate::error::{Result, SalientError};
use crate::scoring::tfidf::tfidf;
use crate::text::ngram::{NGram, Order};

/// Per-order weights applied on top of TF-IDF.
///
/// Longer n-grams are more specific, so the defaults favor them:
/// unigram 1.0, bigram 1.2, trigram 1.4.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct OrderModifiers {
    pub unigram: f64,
    pub bigram: f64,
    pub trigram: f64,
}

impl Default for OrderModifiers {
    fn default() -> Self {
        Self {
            unigram: 1.0,
            bigram: 1.2,
            trigram: 1.4,
        }
    }
}

impl OrderModifiers {
    pub fn for_order(&self, order: Order) -> f64 {
        match order {
            Order::Unigram => self.unigram,
            Order::Bigram => self.bigram,
            Order::Trigram => self.trigram,
        }
    }

    pub fn is_finite(&self) -> bool {
        Order::ALL.iter().all(|&o| self.for_order(o).is_finite())
    }
}

/// Importance score for every scored n-gram of the reference document.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ImportanceMap {
    scores: BTreeMap<NGram, f64>,
}

impl ImportanceMap {
    pub fn get(&self, ngram: &NGram) -> Option<f64> {
        self.scores.get(ngram).copied()
    }

    /// Look up by phrase form, e.g. `"the cat"`.
    pub fn get_phrase(&self, phrase: &str) -> Option<f64> {
        NGram::from_phrase(phrase).and_then(|ngram| self.get(&ngram))
    }

    pub fn contains(&self, ngram: &NGram) -> bool {
        self.scores.contains_key(ngram)
    }

    pub fn len(&self) -> usize {
        self.scores.len()
    }

    pub fn is_empty(&self) -> bool {
        self.scores.is_empty()
    }

    /// Entries in n-gram order: unigrams, then bigrams, then trigrams.
    pub fn iter(&self) -> impl Iterator<Item = (&NGram, f64)> {
        self.scores.iter().map(|(ngram, &score)| (ngram, score))
    }

    /// Number of entries of one order.
    pub fn count_order(&self, order: Order) -> usize {
        self.scores.keys().filter(|g| g.order() == order).count()
    }

    /// Merge one order's scores in. Orders never share keys.
    fn merge_order(&mut self, order: Order, scores: BTreeMap<NGram, f64>) {
        for (ngram, score) in scores {
            debug_assert_eq!(ngram.order(), order);
            let previous = self.scores.insert(ngram, score);
            assert!(previous.is_none(), "{order} keys collided with another order");
        }
    }

    /// The `n` highest-scoring n-grams, highest first.
    pub fn top_n(&self, n: usize) -> Vec<RankedNGram> {
        select_top_n(self, n)
    }

    /// The `n` highest-scoring n-grams flattened to phrase strings.
    pub fn top_n_phrases(&self, n: usize) -> Vec<String> {
        self.top_n(n).into_iter().map(|r| r.ngram.phrase()).collect()
    }
}

impl Serialize for ImportanceMap {
    fn serialize<S: Serializer>(&self, serializer: S) -> std::result::Result<S::Ok, S::Error> {
        let mut map = serializer.serialize_map(Some(self.scores.len()))?;
        for (ngram, score) in &self.scores {
            map.serialize_entry(ngram, score)?;
        }
        map.end()
    }
}

/// One selected n-gram with its importance score.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct RankedNGram {
    pub ngram: NGram,
    pub score: f64,
}

/// Score every n-gram of `reference` across all three orders.
pub fn compute_importance(
    reference: &Document,
    transcripts: &DocumentCollection,
    modifiers: &OrderModifiers,
) -> Result<ImportanceMap> {
    if transcripts.is_empty() {
        return Err(SalientError::Config {
            reason: "at least one comparison document is required".to_string(),
        });
    }

    let mut importance = ImportanceMap::default();
    for order in Order::ALL {
        let scores = score_order(reference, transcripts, order, modifiers.for_order(order))?;
        debug!(%order, scored = scores.len(), "Scored n-gram order");
        importance.merge_order(order, scores);
    }

    info!(
        ngrams = importance.len(),
        transcripts = transcripts.len(),
        "Computed importance mapping"
    );
    Ok(importance)
}

/// Score the distinct n-grams of one order from `reference`.
///
/// N-grams that only appear in the transcripts are never scored.
pub fn score_order(
    reference: &Document,
    transcripts: &DocumentCollection,
    order: Order,
    modifier: f64,
) -> Result<BTreeMap<NGram, f64>> {
    let ngrams = reference.ngrams(order);
    let table = reference.frequency_table(order);
    let collection = transcripts.reduce(order);

    let mut scores = BTreeMap::new();
    for ngram in ngrams {
        if scores.contains_key(&ngram) {
            continue;
        }
        let score = modifier * tfidf(&ngram, &table, &collection)?;
        scores.insert(ngram, score);
    }
    Ok(scores)
}

/// Bounded partial selection of the `n` largest entries.
pub fn select_top_n(importance: &ImportanceMap, n: usize) -> Vec<RankedNGram> {
    if n == 0 {
        return Vec::new();
    }

    let mut heap: BinaryHeap<Reverse<Candidate<'_>>> = BinaryHeap::with_capacity(n + 1);
    for (position, (ngram, score)) in importance.iter().enumerate() {
        let candidate = Candidate {
            score,
            position,
            ngram,
        };
        if heap.len() < n {
            heap.push(Reverse(candidate));
            continue;
        }
        let beats_weakest = heap
            .peek()
            .is_some_and(|Reverse(weakest)| candidate > *weakest);
        if beats_weakest {
            heap.pop();
            heap.push(Reverse(candidate));
        }
    }

    // Ascending by `Reverse` is descending by candidate.
    heap.into_sorted_vec()
        .into_iter()
        .map(|Reverse(c)| RankedNGram {
            ngram: c.ngram.clone(),
            score: c.score,
        })
        .collect()
}

/// Heap entry: higher score wins, then earlier position.
struct Candidate<'a> {
    score: f64,
    position: usize,
    ngram: &'a NGram,
}

impl Ord for Candidate<'_> {
    fn cmp(&self, other: &Self) -> Ordering {
        self.score
            .total_cmp(&other.score)
            .then_with(|| other.position.cmp(&self.position))
    }
}

impl PartialOrd for Candidate<'_> {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl PartialEq for Candidate<'_> {
    fn eq(&self, other: &Self) -> bool {
        self.cmp(other) == Ordering::Equal
    }
}

impl Eq for Candidate<'_> {}
