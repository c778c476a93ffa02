// Unit tests for the scoring layer: TF-IDF arithmetic, importance ranking,
// top-N selection, cross-document scoring and the common-word finder.

use std::collections::BTreeSet;

use salient::corpus::{Document, DocumentCollection};
use salient::scoring::common::words_in_all_documents;
use salient::scoring::cross_document::{score_pair, score_phrases, FailurePolicy};
use salient::scoring::importance::{compute_importance, OrderModifiers};
use salient::scoring::tfidf::{document_frequency, inverse_document_frequency};
use salient::text::ngram::{NGram, Order};

fn cat_script() -> Document {
    Document::from_text("script", "the cat sat on the mat")
}

fn cat_transcripts() -> DocumentCollection {
    DocumentCollection::from_texts(["the cat ran", "a dog sat", "the cat and the dog"])
}

// ============================================================
// TF-IDF
// ============================================================

#[test]
fn idf_is_non_increasing_in_document_frequency() {
    // Ten documents; word "w" appears in the first k of them.
    let mut previous = f64::INFINITY;
    for k in 0..=10 {
        let texts: Vec<&str> = (0..10).map(|i| if i < k { "w x" } else { "x" }).collect();
        let collection = DocumentCollection::from_texts(texts).reduce(Order::Unigram);
        let w = NGram::from("w");
        assert_eq!(document_frequency(&w, &collection), k);
        let idf = inverse_document_frequency(&w, &collection);
        assert!(idf <= previous, "idf rose at df={k}: {idf} > {previous}");
        previous = idf;
    }
}

// ============================================================
// Importance
// ============================================================

#[test]
fn cat_importance_is_exactly_zero() {
    // "cat" is in 2 of 3 transcripts: idf = ln(3 / (1 + 2)) = ln(1) = 0
    let importance =
        compute_importance(&cat_script(), &cat_transcripts(), &OrderModifiers::default()).unwrap();
    assert_eq!(importance.get(&NGram::from("cat")), Some(0.0));
    // "the" likewise: two occurrences times zero
    assert_eq!(importance.get(&NGram::from("the")), Some(0.0));
}

#[test]
fn unseen_words_outrank_widespread_words() {
    let importance =
        compute_importance(&cat_script(), &cat_transcripts(), &OrderModifiers::default()).unwrap();

    let mat = importance.get(&NGram::from("mat")).unwrap();
    let sat = importance.get(&NGram::from("sat")).unwrap();
    let cat = importance.get(&NGram::from("cat")).unwrap();

    // mat: tf 1, df 0 -> ln 3; sat: tf 1, df 1 -> ln 1.5
    assert!((mat - 3f64.ln()).abs() < 1e-12);
    assert!((sat - 1.5f64.ln()).abs() < 1e-12);
    assert!(mat > sat && sat > cat);
}

#[test]
fn order_modifiers_scale_scores() {
    let importance =
        compute_importance(&cat_script(), &cat_transcripts(), &OrderModifiers::default()).unwrap();

    // "the mat" never appears in a transcript: 1.2 * 1 * ln 3
    let the_mat = importance.get_phrase("the mat").unwrap();
    assert!((the_mat - 1.2 * 3f64.ln()).abs() < 1e-12);

    // "the cat" appears in two transcripts: 1.2 * ln(1) = 0
    assert_eq!(importance.get_phrase("the cat"), Some(0.0));

    // "on the mat" is a trigram nowhere else: 1.4 * ln 3
    let on_the_mat = importance.get_phrase("on the mat").unwrap();
    assert!((on_the_mat - 1.4 * 3f64.ln()).abs() < 1e-12);
}

#[test]
fn importance_only_scores_reference_ngrams() {
    let script = cat_script();
    let importance =
        compute_importance(&script, &cat_transcripts(), &OrderModifiers::default()).unwrap();

    for order in Order::ALL {
        let reference = script.ngram_set(order);
        for (ngram, _) in importance.iter().filter(|(g, _)| g.order() == order) {
            assert!(reference.contains(ngram), "{ngram} is not in the script");
        }
        assert_eq!(importance.count_order(order), reference.len());
    }

    // "dog" is in transcripts but not the script
    assert!(!importance.contains(&NGram::from("dog")));
}

#[test]
fn importance_of_empty_script_is_empty() {
    let importance = compute_importance(
        &Document::from_text("script", ""),
        &cat_transcripts(),
        &OrderModifiers::default(),
    )
    .unwrap();
    assert!(importance.is_empty());
}

#[test]
fn custom_modifiers_are_applied() {
    let modifiers = OrderModifiers {
        unigram: 2.0,
        bigram: 0.0,
        trigram: 1.0,
    };
    let importance = compute_importance(&cat_script(), &cat_transcripts(), &modifiers).unwrap();
    let mat = importance.get(&NGram::from("mat")).unwrap();
    assert!((mat - 2.0 * 3f64.ln()).abs() < 1e-12);
    assert_eq!(importance.get_phrase("the mat"), Some(0.0));
}

// ============================================================
// Top-N selection
// ============================================================

#[test]
fn top_n_returns_min_of_n_and_map_size() {
    let importance =
        compute_importance(&cat_script(), &cat_transcripts(), &OrderModifiers::default()).unwrap();
    let total = importance.len();

    for n in [1, 3, total, total + 5] {
        assert_eq!(importance.top_n(n).len(), n.min(total));
    }
}

#[test]
fn top_n_is_sorted_descending() {
    let importance =
        compute_importance(&cat_script(), &cat_transcripts(), &OrderModifiers::default()).unwrap();
    let top = importance.top_n(importance.len());
    for pair in top.windows(2) {
        assert!(pair[0].score >= pair[1].score);
    }
}

#[test]
fn top_n_holds_the_largest_values() {
    let importance =
        compute_importance(&cat_script(), &cat_transcripts(), &OrderModifiers::default()).unwrap();
    let mut all: Vec<f64> = importance.iter().map(|(_, s)| s).collect();
    all.sort_by(|a, b| b.total_cmp(a));

    // Compare values only; the order of tied entries is unspecified.
    let top: Vec<f64> = importance.top_n(4).iter().map(|r| r.score).collect();
    assert_eq!(top, all[..4].to_vec());
}

#[test]
fn top_phrases_flatten_multiword_keys() {
    let importance =
        compute_importance(&cat_script(), &cat_transcripts(), &OrderModifiers::default()).unwrap();
    let phrases = importance.top_n_phrases(importance.len());
    assert!(phrases.contains(&"on the mat".to_string()));
    assert!(phrases.contains(&"mat".to_string()));
    for phrase in &phrases {
        assert!(importance.get_phrase(phrase).is_some());
    }
}

// ============================================================
// Cross-document scoring
// ============================================================

#[test]
fn word_present_in_only_one_document_fails_against_the_other() {
    let docs = DocumentCollection::from_texts(["the cat ran", "a dog sat"]);
    let first = docs.get(0).unwrap();
    let second = docs.get(1).unwrap();

    assert!(score_pair("cat", first).is_ok());
    let err = score_pair("cat", second).unwrap_err();
    assert!(err.is_key_lookup());
}

#[test]
fn cross_document_scores_are_local_tfidf_sums() {
    let docs = DocumentCollection::from_texts(["the cat and the cat", "cat the"]);
    let phrases = vec!["the cat".to_string(), "cat".to_string()];
    let report = score_phrases(&phrases, &docs, FailurePolicy::Abort).unwrap();

    let half = 0.5f64.ln();
    // document 1: the x2, cat x2
    let expected = 2.0 * half + 2.0 * half;
    assert!((report.get("the cat", "document 1").unwrap() - expected).abs() < 1e-12);
    assert!((report.get("cat", "document 1").unwrap() - 2.0 * half).abs() < 1e-12);
    // document 2: one of each
    assert!((report.get("the cat", "document 2").unwrap() - 2.0 * half).abs() < 1e-12);

    assert_eq!(report.scores.len(), 4);
    assert_eq!(report.to_map().len(), 4);
}

#[test]
fn strict_policy_aborts_whole_run() {
    let docs = DocumentCollection::from_texts(["a b", "a", "a b"]);
    let phrases = vec!["a".to_string(), "a b".to_string()];
    let err = score_phrases(&phrases, &docs, FailurePolicy::Abort).unwrap_err();
    assert!(err.is_key_lookup());
}

#[test]
fn isolated_policy_scores_everything_else() {
    let docs = DocumentCollection::from_texts(["a b", "a", "a b"]);
    let phrases = vec!["a".to_string(), "a b".to_string()];
    let report = score_phrases(&phrases, &docs, FailurePolicy::IsolatePair).unwrap();

    assert_eq!(report.scores.len(), 5);
    assert_eq!(report.failures.len(), 1);
    assert_eq!(report.failures[0].phrase, "a b");
    assert_eq!(report.failures[0].document, "document 2");
}

// ============================================================
// Common words
// ============================================================

#[test]
fn words_in_all_transcripts_scenario() {
    let docs = DocumentCollection::from_texts(["a b c", "b c d", "c d e"]);
    assert_eq!(words_in_all_documents(&docs), BTreeSet::from(["c".to_string()]));
}

#[test]
fn words_in_all_transcripts_can_be_empty() {
    let docs = DocumentCollection::from_texts(["a", "b"]);
    assert!(words_in_all_documents(&docs).is_empty());
}
