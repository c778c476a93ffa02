// Colored terminal output for analysis reports.
//
// Each operation has its own display function; `display_report` prints
// whichever sections a run produced, in operation order.

use colored::Colorize;

use crate::pipeline::tasks::{KeywordComparison, Report};
use crate::scoring::cross_document::CrossDocumentReport;
use crate::scoring::importance::ImportanceMap;

/// Print every section present in `report`.
pub fn display_report(report: &Report) {
    if let Some(importance) = &report.importance {
        println!("{}", "FIRST TASK:".bold());
        display_importance(importance);
    }
    if let Some(keywords) = &report.keywords {
        println!("{}", format!("SECOND TASK WITH n={}:", keywords.top_n).bold());
        display_keyword_comparison(keywords);
    }
    if let Some(scores) = &report.cross_document {
        println!("{}", format!("THIRD TASK WITH n={}:", report.top_n).bold());
        display_cross_document(scores);
        display_document_sources(report);
    }
}

/// Print the full importance mapping, one n-gram per line.
pub fn display_importance(importance: &ImportanceMap) {
    if importance.is_empty() {
        println!("  {}", "(no n-grams in the script)".dimmed());
        println!();
        return;
    }

    for (ngram, score) in importance.iter() {
        let value = super::format_score(score);
        let value = if score > 0.0 {
            value.green()
        } else if score < 0.0 {
            value.red()
        } else {
            value.normal()
        };
        println!("  {:<40} {:>12}", format!("'{ngram}'"), value);
    }
    println!();
}

/// Print the top-N keywords and the words common to all transcripts.
pub fn display_keyword_comparison(comparison: &KeywordComparison) {
    let line = format!("top {} keywords", comparison.top_n);
    println!("{}\n{}", line, "-".repeat(line.len()).dimmed());
    println!("{}", super::format_phrase_list(&comparison.top_keywords));
    println!();

    let line = "the words occuring in all transcripts:";
    println!("{}\n{}", line, "-".repeat(line.len()).dimmed());
    println!("{}", super::format_phrase_list(&comparison.common_words));
    println!();
}

/// Print one line per (phrase, document) score, then any isolated failures.
pub fn display_cross_document(report: &CrossDocumentReport) {
    for pair in &report.scores {
        println!(
            "score( '{}' in {} ) =  {}",
            pair.phrase,
            pair.document,
            super::format_score(pair.score)
        );
    }

    if !report.failures.is_empty() {
        println!();
        println!(
            "  {} {} pairs could not be scored:",
            "!".yellow().bold(),
            report.failures.len()
        );
        for failure in &report.failures {
            println!(
                "    '{}' in {}: {}",
                failure.phrase,
                failure.document,
                failure.reason.dimmed()
            );
        }
    }
    println!();
}

fn display_document_sources(report: &Report) {
    let sourced: Vec<_> = report
        .documents
        .iter()
        .filter_map(|d| d.path.as_deref().map(|p| (d.label.as_str(), p)))
        .collect();
    if sourced.is_empty() {
        return;
    }
    for (label, path) in sourced {
        println!("  {} {}", format!("{label}:").dimmed(), path.dimmed());
    }
    println!();
}
