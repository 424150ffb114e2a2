//! Mood analysis for a listener's top tracks.
//!
//! Core modules:
//! - [`classifier`] - Rule-based mood labels and aggregation
//! - [`summary`] - Template-based one-line recap
//! - [`analysis`] - The end-to-end analyze pipeline
//!
//! ### Supporting Modules
//!
//! - [`models`] - Track, feature and result records
//! - [`payload`] - Validation of the streaming API's JSON bodies
//! - [`config`] - Tunable thresholds and templates
//! - [`report`] - Plain-text rendering of a report
//! - [`cli`] / [`completion`] - Command-line definitions and shell completions
//!
//! ## Quick Start Example
//!
//! ```
//! use moodwrap::{analysis, payload::AnalysisInput, summary::FixedSelector};
//!
//! let tracks = r#"{"items": [
//!     {"name": "Song A", "id": "a", "artists": [{"name": "Artist X"}]},
//!     {"name": "Song B", "id": "b", "artists": [{"name": "Artist Y"}]}
//! ]}"#;
//! let features = r#"{"audio_features": [
//!     {"energy": 0.8, "danceability": 0.7, "tempo": 128.0, "valence": 0.9},
//!     null
//! ]}"#;
//!
//! let input = AnalysisInput::from_json(tracks, features)?;
//! let report = analysis::analyze(input, &mut FixedSelector(0))?;
//!
//! assert_eq!(report.mood_labels.per_track.len(), 1);
//! assert_eq!(
//!     report.template_summary,
//!     "You were vibing to Energetic tracks — Artist X dominated your playlists!"
//! );
//! # Ok::<(), moodwrap::Error>(())
//! ```
//!
//! ## Error Handling
//!
//! Library functions return [`Result`] with the crate [`Error`]. Missing audio
//! features are not errors: those tracks are left out of the mood breakdown
//! but still count towards the top artist.

pub mod analysis;
pub mod classifier;
pub mod cli;
pub mod completion;
pub mod config;
pub mod error;
pub mod models;
pub mod payload;
pub mod report;
pub mod summary;

pub use error::{Error, Result};
