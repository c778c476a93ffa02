// Words shared by every comparison document.

use std::collections::{BTreeSet, HashSet};

use crate::corpus::DocumentCollection;

/// The unigrams of the first document that also occur in every other one.
///
/// Works for any number of documents; an empty collection yields an empty
/// set. The result is a set, sorted only for stable presentation.
pub fn words_in_all_documents(documents: &DocumentCollection) -> BTreeSet<String> {
    let mut docs = documents.iter();
    let Some(first) = docs.next() else {
        return BTreeSet::new();
    };

    let mut shared: HashSet<&str> = first.tokens().iter().map(String::as_str).collect();
    for document in docs {
        let words: HashSet<&str> = document.tokens().iter().map(String::as_str).collect();
        shared.retain(|w| words.contains(w));
        if shared.is_empty() {
            break;
        }
    }

    shared.into_iter().map(str::to_string).collect()
}
