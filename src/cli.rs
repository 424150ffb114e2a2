//! # Command-Line Interface Module
//!
//! Defines the moodwrap command line with Clap derive macros.
//!
//! ## Commands
//!
//! - `analyze`: Print the full analysis report as JSON
//! - `report`: Print a human-readable mood breakdown
//! - `templates`: List the active recap templates
//! - `completion`: Generate shell completions
//!
//! ## Examples
//!
//! ```bash
//! moodwrap analyze top_tracks.json audio_features.json --pretty
//! moodwrap report top_tracks.json audio_features.json --seed 7
//! ```

use clap::{Args as ClapArgs, Parser, Subcommand, ValueEnum};
use std::path::PathBuf;

/// Shell types supported for completion generation
#[derive(Copy, Clone, PartialEq, Eq, PartialOrd, Ord, ValueEnum, Debug)]
#[allow(clippy::enum_variant_names)]
pub enum Shell {
    /// Bash shell
    Bash,
    /// Zsh shell
    Zsh,
    /// Fish shell
    Fish,
    /// PowerShell
    PowerShell,
    /// Elvish shell
    Elvish,
}

/// Main application arguments structure.
#[derive(Parser)]
#[command(name = "moodwrap")]
#[command(about = "Moodwrap: turn your top tracks into a mood and a one-line recap")]
#[command(version)]
pub struct Args {
    /// Config file (defaults to $MOODWRAP_CONFIG or the platform config dir)
    #[arg(long, global = true, value_hint = clap::ValueHint::FilePath)]
    pub config: Option<PathBuf>,

    /// The subcommand to execute
    #[command(subcommand)]
    pub command: Command,
}

/// Input files and template choice shared by `analyze` and `report`.
#[derive(ClapArgs, Debug, Clone)]
pub struct InputArgs {
    /// Top-tracks response body (JSON object with an `items` array)
    #[arg(value_hint = clap::ValueHint::FilePath)]
    pub tracks: PathBuf,

    /// Audio-features response body (JSON object with an `audio_features` array)
    #[arg(value_hint = clap::ValueHint::FilePath)]
    pub features: PathBuf,

    /// Seed for template selection, for reproducible output
    #[arg(long, conflicts_with = "template")]
    pub seed: Option<u64>,

    /// Always use this template index (see `moodwrap templates`)
    #[arg(long)]
    pub template: Option<usize>,
}

/// Enumeration of all available subcommands.
#[derive(Subcommand)]
pub enum Command {
    /// Analyze top tracks and print the report as JSON
    ///
    /// Output has the fields `top_tracks`, `audio_features`, `mood_labels`
    /// and `template_summary`.
    Analyze {
        #[command(flatten)]
        input: InputArgs,

        /// Pretty-print the JSON output
        #[arg(short, long)]
        pretty: bool,
    },

    /// Analyze top tracks and print a readable breakdown
    ///
    /// Lists the mood of every classified track, the mood counts and the
    /// one-line recap.
    Report {
        #[command(flatten)]
        input: InputArgs,
    },

    /// List the active recap templates with their indices
    Templates,

    /// Generate shell completions
    ///
    /// Usage: moodwrap completion bash > ~/.local/share/bash-completion/completions/moodwrap
    Completion {
        /// Shell to generate completions for
        shell: Shell,
    },
}
