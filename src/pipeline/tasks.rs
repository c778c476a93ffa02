// The three user-facing operations over one loaded script and its transcripts.
//
//   1. importance      score every n-gram of the script
//   2. keywords        top-N phrases next to the words common to all transcripts
//   3. cross-document  re-score the top-N phrases inside each transcript
//
// Running with no task selected performs all three, sharing one importance
// computation.

use serde::Serialize;
use tracing::info;

use crate::config::{validate_top_n, AnalysisConfig};
use crate::corpus::{Document, DocumentCollection};
use crate::error::{Result, SalientError};
use crate::scoring::common::words_in_all_documents;
use crate::scoring::cross_document::{score_ngrams, CrossDocumentReport, FailurePolicy};
use crate::scoring::importance::{compute_importance, ImportanceMap, OrderModifiers};
use crate::text::ngram::NGram;

/// Which operation to run.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Task {
    Importance,
    Keywords,
    CrossDocument,
    All,
}

impl Task {
    /// Interpret a command-line selector: none means all, otherwise `1`-`3`.
    ///
    /// Returns `None` for anything that is not a number in that range.
    pub fn from_selector(selector: Option<&str>) -> Option<Task> {
        let Some(selector) = selector else {
            return Some(Task::All);
        };
        if selector.is_empty() || !selector.chars().all(|c| c.is_ascii_digit()) {
            return None;
        }
        match selector.parse::<u64>().ok()? {
            1 => Some(Task::Importance),
            2 => Some(Task::Keywords),
            3 => Some(Task::CrossDocument),
            _ => None,
        }
    }

    fn includes(self, other: Task) -> bool {
        self == Task::All || self == other
    }
}

/// Top phrases of the script alongside the words every transcript shares.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct KeywordComparison {
    pub top_n: usize,
    pub top_keywords: Vec<String>,
    pub common_words: Vec<String>,
}

/// Label and origin of one comparison document.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct DocumentSource {
    pub label: String,
    pub path: Option<String>,
}

/// Results of one run; only the selected operations are filled in.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct Report {
    pub top_n: usize,
    pub documents: Vec<DocumentSource>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub importance: Option<ImportanceMap>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub keywords: Option<KeywordComparison>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub cross_document: Option<CrossDocumentReport>,
}

/// A loaded script and transcript set, ready to score.
#[derive(Debug, Clone)]
pub struct Analysis {
    script: Document,
    transcripts: DocumentCollection,
    top_n: usize,
    modifiers: OrderModifiers,
}

impl Analysis {
    /// Validate `config`, then read the script and every transcript.
    pub fn load(config: &AnalysisConfig) -> Result<Self> {
        config.validate()?;

        let script = Document::load("script", &config.script_path)?;
        let transcripts = DocumentCollection::load(&config.transcript_paths)?;

        info!(
            script = %config.script_path.display(),
            script_tokens = script.len(),
            transcripts = transcripts.len(),
            "Loaded documents"
        );

        Self::new(script, transcripts, config.top_n, config.modifiers)
    }

    /// Build an analysis from documents already in memory.
    pub fn new(
        script: Document,
        transcripts: DocumentCollection,
        top_n: usize,
        modifiers: OrderModifiers,
    ) -> Result<Self> {
        validate_top_n(top_n)?;
        if transcripts.is_empty() {
            return Err(SalientError::Config {
                reason: "at least one comparison document is required".to_string(),
            });
        }
        Ok(Self {
            script,
            transcripts,
            top_n,
            modifiers,
        })
    }

    /// Operation 1: the full importance mapping.
    pub fn importance(&self) -> Result<ImportanceMap> {
        compute_importance(&self.script, &self.transcripts, &self.modifiers)
    }

    /// Operation 2: top-N phrases and the words common to all transcripts.
    pub fn compare_keywords(&self, importance: &ImportanceMap) -> KeywordComparison {
        let top_keywords = importance.top_n_phrases(self.top_n);
        let common_words = words_in_all_documents(&self.transcripts)
            .into_iter()
            .collect();

        info!(selected = top_keywords.len(), top_n = self.top_n, "Selected top keywords");

        KeywordComparison {
            top_n: self.top_n,
            top_keywords,
            common_words,
        }
    }

    /// Operation 3: score each top-N phrase inside each transcript.
    pub fn cross_document_scores(
        &self,
        importance: &ImportanceMap,
        policy: FailurePolicy,
    ) -> Result<CrossDocumentReport> {
        let ngrams: Vec<NGram> = importance
            .top_n(self.top_n)
            .into_iter()
            .map(|ranked| ranked.ngram)
            .collect();
        score_ngrams(&ngrams, &self.transcripts, policy)
    }

    /// Run the selected operation(s).
    pub fn run(&self, task: Task, policy: FailurePolicy) -> Result<Report> {
        let importance = self.importance()?;

        let mut report = Report {
            top_n: self.top_n,
            documents: self
                .transcripts
                .iter()
                .map(|d| DocumentSource {
                    label: d.label().to_string(),
                    path: d.source().map(|p| p.display().to_string()),
                })
                .collect(),
            ..Report::default()
        };

        if task.includes(Task::Keywords) {
            report.keywords = Some(self.compare_keywords(&importance));
        }
        if task.includes(Task::CrossDocument) {
            report.cross_document = Some(self.cross_document_scores(&importance, policy)?);
        }
        if task.includes(Task::Importance) {
            report.importance = Some(importance);
        }

        Ok(report)
    }
}
