// TF-IDF primitives.
//
//   tf(g)    = raw count of g in the document's frequency table
//   idf(g)   = ln(|collection| / (1 + documents containing g))
//   tfidf(g) = tf(g) * idf(g)
//
// The +1 keeps the ratio finite when no document contains g. A term found
// in every document gets a negative idf, which is expected.

use crate::corpus::NGramCollection;
use crate::error::Result;
use crate::text::frequency::FrequencyTable;
use crate::text::ngram::NGram;

/// Raw occurrence count of `ngram`. Fails with `KeyLookup` if it is absent.
pub fn term_frequency(ngram: &NGram, table: &FrequencyTable) -> Result<usize> {
    table.count(ngram)
}

/// Number of documents in `collection` containing `ngram`.
pub fn document_frequency(ngram: &NGram, collection: &NGramCollection) -> usize {
    collection.containing(ngram)
}

/// Smoothed inverse document frequency, natural log.
pub fn inverse_document_frequency(ngram: &NGram, collection: &NGramCollection) -> f64 {
    let documents = collection.len() as f64;
    let containing = document_frequency(ngram, collection) as f64;
    (documents / (1.0 + containing)).ln()
}

pub fn tfidf(ngram: &NGram, table: &FrequencyTable, collection: &NGramCollection) -> Result<f64> {
    let tf = term_frequency(ngram, table)?;
    Ok(tf as f64 * inverse_document_frequency(ngram, collection))
}
