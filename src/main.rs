//! # Moodwrap
//!
//! Reads the top-tracks and audio-features response bodies of a music
//! streaming API, labels each track with a mood and writes a one-line recap.
//!
//! ## Usage
//!
//! ```bash
//! # Full JSON report
//! moodwrap analyze top_tracks.json audio_features.json --pretty
//!
//! # Readable breakdown with a reproducible recap
//! moodwrap report top_tracks.json audio_features.json --seed 7
//!
//! # Show recap templates
//! moodwrap templates
//! ```

use anyhow::{Context, Result};
use clap::{CommandFactory, Parser};
use log::{debug, info};
use moodwrap::cli::{self, InputArgs};
use moodwrap::config::Config;
use moodwrap::models::AnalysisReport;
use moodwrap::payload::AnalysisInput;
use moodwrap::summary::{FixedSelector, RandomSelector, TemplateSelector};
use moodwrap::{analysis, completion, report};
use rand::rngs::StdRng;
use rand::SeedableRng;

/// Pick the template selector requested on the command line.
fn selector_for(input: &InputArgs) -> Box<dyn TemplateSelector> {
    match (input.template, input.seed) {
        (Some(index), _) => Box::new(FixedSelector(index)),
        (None, Some(seed)) => Box::new(RandomSelector::new(StdRng::seed_from_u64(seed))),
        (None, None) => Box::new(RandomSelector::new(rand::thread_rng())),
    }
}

/// Load both payloads and run the pipeline.
fn run_analysis(input: &InputArgs, config: &Config) -> Result<AnalysisReport> {
    info!(
        "Analyzing {} with features from {}",
        input.tracks.display(),
        input.features.display()
    );

    let data = AnalysisInput::load(&input.tracks, &input.features).context("Failed to load analysis input")?;
    let mut selector = selector_for(input);

    analysis::analyze_with(data, config, selector.as_mut()).context("Analysis failed")
}

/// Main entry point for moodwrap.
///
/// Logging is controlled via `RUST_LOG`:
/// - `RUST_LOG=debug moodwrap report ...` - Enable debug logging
/// - `RUST_LOG=moodwrap::classifier=trace moodwrap analyze ...` - Per-track decisions
fn main() -> Result<()> {
    env_logger::init();

    let args = cli::Args::parse();

    match args.command {
        cli::Command::Analyze { input, pretty } => {
            let config = Config::load(args.config.as_deref())?;
            let report = run_analysis(&input, &config)?;
            let json = if pretty {
                serde_json::to_string_pretty(&report)
            } else {
                serde_json::to_string(&report)
            }
            .context("Failed to serialize report")?;
            println!("{json}");
        }
        cli::Command::Report { input } => {
            let config = Config::load(args.config.as_deref())?;
            let report = run_analysis(&input, &config)?;
            print!("{}", report::TextReport(&report));
        }
        cli::Command::Templates => {
            let config = Config::load(args.config.as_deref())?;
            debug!("Listing {} templates", config.templates.len());
            for (index, template) in config.templates.iter().enumerate() {
                println!("{index}: {template}");
            }
        }
        cli::Command::Completion { shell } => {
            let mut cmd = cli::Args::command();
            completion::generate_completions(completion::shell_to_completion_shell(&shell), &mut cmd);
        }
    }

    Ok(())
}
