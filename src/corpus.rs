// Documents and document collections.
//
// A `Document` is the token sequence of one source text, built once by the
// tokenizer and never mutated. A `DocumentCollection` is the ordered set of
// comparison documents; position only matters for labeling. An
// `NGramCollection` is a collection reduced to one n-gram order, which is
// what document-frequency counting runs against.

use std::collections::HashSet;
use std::fs;
use std::io;
use std::path::{Path, PathBuf};

use tracing::debug;

use crate::error::{Result, SalientError};
use crate::text::frequency::FrequencyTable;
use crate::text::ngram::{extract_ngrams, NGram, Order};
use crate::text::tokenizer::tokenize;

/// The normalized tokens of one source text, in reading order.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Document {
    label: String,
    source: Option<PathBuf>,
    tokens: Vec<String>,
}

impl Document {
    pub fn new(label: impl Into<String>, tokens: Vec<String>) -> Self {
        Self {
            label: label.into(),
            source: None,
            tokens,
        }
    }

    /// Tokenize an in-memory text.
    pub fn from_text(label: impl Into<String>, text: &str) -> Self {
        Self::new(label, tokenize(text))
    }

    /// Read and tokenize a UTF-8 file.
    ///
    /// Unreadable files and invalid UTF-8 both fail with `SalientError::Io`.
    pub fn load(label: impl Into<String>, path: &Path) -> Result<Self> {
        let bytes = fs::read(path).map_err(|source| SalientError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        let text = String::from_utf8(bytes).map_err(|e| SalientError::Io {
            path: path.to_path_buf(),
            source: io::Error::new(io::ErrorKind::InvalidData, e),
        })?;

        let mut document = Self::from_text(label, &text);
        document.source = Some(path.to_path_buf());
        debug!(path = %path.display(), tokens = document.tokens.len(), "Loaded document");
        Ok(document)
    }

    pub fn label(&self) -> &str {
        &self.label
    }

    /// The file this document was read from, if any.
    pub fn source(&self) -> Option<&Path> {
        self.source.as_deref()
    }

    pub fn tokens(&self) -> &[String] {
        &self.tokens
    }

    pub fn len(&self) -> usize {
        self.tokens.len()
    }

    pub fn is_empty(&self) -> bool {
        self.tokens.is_empty()
    }

    pub fn ngrams(&self, order: Order) -> Vec<NGram> {
        extract_ngrams(&self.tokens, order)
    }

    pub fn frequency_table(&self, order: Order) -> FrequencyTable {
        FrequencyTable::from_ngrams(self.ngrams(order))
    }

    /// The distinct n-grams of one order, for containment tests.
    pub fn ngram_set(&self, order: Order) -> HashSet<NGram> {
        self.ngrams(order).into_iter().collect()
    }
}

/// The comparison documents, in the order they were supplied.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct DocumentCollection {
    documents: Vec<Document>,
}

impl DocumentCollection {
    pub fn new(documents: Vec<Document>) -> Self {
        Self { documents }
    }

    /// Tokenize in-memory texts, labeling them `document 1`, `document 2`, ...
    pub fn from_texts<I, S>(texts: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let documents = texts
            .into_iter()
            .enumerate()
            .map(|(i, text)| Document::from_text(positional_label(i), text.as_ref()))
            .collect();
        Self { documents }
    }

    /// Read files sequentially, labeling them by position. The first
    /// unreadable file aborts the load.
    pub fn load<P: AsRef<Path>>(paths: &[P]) -> Result<Self> {
        let documents = paths
            .iter()
            .enumerate()
            .map(|(i, path)| Document::load(positional_label(i), path.as_ref()))
            .collect::<Result<Vec<_>>>()?;
        Ok(Self { documents })
    }

    pub fn len(&self) -> usize {
        self.documents.len()
    }

    pub fn is_empty(&self) -> bool {
        self.documents.is_empty()
    }

    pub fn get(&self, index: usize) -> Option<&Document> {
        self.documents.get(index)
    }

    pub fn iter(&self) -> std::slice::Iter<'_, Document> {
        self.documents.iter()
    }

    /// Reduce every document to its distinct n-grams of `order`.
    pub fn reduce(&self, order: Order) -> NGramCollection {
        NGramCollection {
            documents: self.documents.iter().map(|d| d.ngram_set(order)).collect(),
        }
    }
}

impl<'a> IntoIterator for &'a DocumentCollection {
    type Item = &'a Document;
    type IntoIter = std::slice::Iter<'a, Document>;

    fn into_iter(self) -> Self::IntoIter {
        self.documents.iter()
    }
}

/// Positional label for the document at zero-based `index`.
pub fn positional_label(index: usize) -> String {
    format!("document {}", index + 1)
}

/// A document collection reduced to the n-grams of a single order.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct NGramCollection {
    documents: Vec<HashSet<NGram>>,
}

impl NGramCollection {
    /// A one-element collection holding a single document's n-grams.
    pub fn single(document: &Document, order: Order) -> Self {
        Self {
            documents: vec![document.ngram_set(order)],
        }
    }

    pub fn len(&self) -> usize {
        self.documents.len()
    }

    pub fn is_empty(&self) -> bool {
        self.documents.is_empty()
    }

    /// Number of documents that contain `ngram`.
    pub fn containing(&self, ngram: &NGram) -> usize {
        self.documents.iter().filter(|d| d.contains(ngram)).count()
    }
}
