use std::path::PathBuf;

use anyhow::Result;
use clap::Parser;
use tracing::info;

use salient::config::AnalysisConfig;
use salient::pipeline::tasks::{Analysis, Task};
use salient::scoring::cross_document::FailurePolicy;

/// Salient: find the key phrases of a script and score them in transcripts.
///
/// Ranks the unigrams, bigrams and trigrams of the script by TF-IDF against
/// the transcripts, then re-scores the top phrases inside each transcript.
#[derive(Parser)]
#[command(name = "salient", version, about)]
struct Cli {
    /// Task to run: 1 = importance mapping, 2 = top keywords vs. common
    /// words, 3 = per-transcript scores. Omit to run all three.
    #[arg(allow_hyphen_values = true)]
    task: Option<String>,

    /// Reference document (default: SALIENT_SCRIPT or script.txt)
    #[arg(long)]
    script: Option<PathBuf>,

    /// Comparison document; repeat for each transcript
    /// (default: SALIENT_TRANSCRIPTS or transcript_1.txt..transcript_3.txt)
    #[arg(long = "transcript")]
    transcripts: Vec<PathBuf>,

    /// Number of top phrases to select (default: SALIENT_TOP_N or 20)
    #[arg(long)]
    top_n: Option<usize>,

    /// Weight applied to unigram scores (default 1.0)
    #[arg(long)]
    unigram_weight: Option<f64>,

    /// Weight applied to bigram scores (default 1.2)
    #[arg(long)]
    bigram_weight: Option<f64>,

    /// Weight applied to trigram scores (default 1.4)
    #[arg(long)]
    trigram_weight: Option<f64>,

    /// Print the results as JSON instead of a text report
    #[arg(long)]
    json: bool,

    /// Report unscorable (phrase, transcript) pairs instead of aborting
    #[arg(long)]
    isolate_failures: bool,
}

impl Cli {
    /// Environment configuration with command-line overrides applied.
    fn config(&self) -> Result<AnalysisConfig> {
        let mut config = AnalysisConfig::load()?;
        if let Some(script) = &self.script {
            config.script_path = script.clone();
        }
        if !self.transcripts.is_empty() {
            config.transcript_paths = self.transcripts.clone();
        }
        if let Some(top_n) = self.top_n {
            config.top_n = top_n;
        }
        if let Some(weight) = self.unigram_weight {
            config.modifiers.unigram = weight;
        }
        if let Some(weight) = self.bigram_weight {
            config.modifiers.bigram = weight;
        }
        if let Some(weight) = self.trigram_weight {
            config.modifiers.trigram = weight;
        }
        Ok(config)
    }
}

fn main() -> Result<()> {
    // Load .env file if present (silently ignore if missing)
    let _ = dotenvy::dotenv();

    // Logs go to stderr so stdout stays the report
    tracing_subscriber::fmt()
        .with_writer(std::io::stderr)
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("salient=warn")),
        )
        .init();

    let cli = Cli::parse();

    let Some(task) = Task::from_selector(cli.task.as_deref()) else {
        println!("invalid argument ~ must be a number between 1 and 3");
        return Ok(());
    };

    let config = cli.config()?;
    let analysis = Analysis::load(&config)?;

    let policy = if cli.isolate_failures {
        FailurePolicy::IsolatePair
    } else {
        FailurePolicy::Abort
    };

    info!(?task, ?policy, top_n = config.top_n, "Running analysis");
    let report = analysis.run(task, policy)?;

    if cli.json {
        println!("{}", serde_json::to_string_pretty(&report)?);
    } else {
        salient::output::terminal::display_report(&report);
    }

    Ok(())
}
