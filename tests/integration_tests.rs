//! # Integration Tests for Moodwrap
//!
//! End-to-end checks of the analyze pipeline through the public library API
//! and through the built `moodwrap` binary.

use anyhow::Result;
use serde_json::{json, Value};
use std::path::PathBuf;
use std::process::Command;
use tempfile::TempDir;

/// Test helper writing a realistic pair of API response bodies
fn create_test_payloads() -> Result<(TempDir, PathBuf, PathBuf)> {
    let temp_dir = TempDir::new()?;
    let tracks_path = temp_dir.path().join("top_tracks.json");
    let features_path = temp_dir.path().join("audio_features.json");

    let tracks = json!({
        "items": [
            {"name": "Neon Rush", "id": "t1", "artists": [{"name": "The Pulse"}], "popularity": 80},
            {"name": "Sunny Side", "id": "t2", "artists": [{"name": "Golden Hour"}]},
            {"name": "Rainy Window", "id": "t3", "artists": [{"name": "The Pulse"}, {"name": "Guest"}]},
            {"name": "Slow Tide", "id": "t4", "artists": [{"name": "Low Moon"}]},
            {"name": "Lost Signal", "id": "t5", "artists": [{"name": "Golden Hour"}]},
            {"name": "Block Party", "id": "t6", "artists": [{"name": "The Pulse"}]}
        ],
        "total": 6,
        "limit": 20
    });

    let features = json!({
        "audio_features": [
            {"id": "t1", "energy": 0.9, "danceability": 0.8, "tempo": 128.0, "valence": 0.7},
            {"id": "t2", "energy": 0.5, "danceability": 0.6, "tempo": 105.0, "valence": 0.85},
            {"id": "t3", "energy": 0.2, "danceability": 0.3, "tempo": 80.0, "valence": 0.2},
            {"id": "t4", "energy": 0.45, "danceability": 0.4, "valence": 0.6},
            null,
            {"id": "t6", "energy": 0.85, "danceability": 0.9, "tempo": 124.0, "valence": 0.5}
        ]
    });

    std::fs::write(&tracks_path, tracks.to_string())?;
    std::fs::write(&features_path, features.to_string())?;

    Ok((temp_dir, tracks_path, features_path))
}

fn moodwrap() -> Command {
    let mut cmd = Command::new(env!("CARGO_BIN_EXE_moodwrap"));
    // Keep the user's config out of the picture.
    cmd.env("MOODWRAP_CONFIG", "/nonexistent/moodwrap/config.json");
    cmd.env_remove("RUST_LOG");
    cmd
}

#[cfg(test)]
mod pipeline_tests {
    use super::*;
    use moodwrap::analysis;
    use moodwrap::models::MoodLabel;
    use moodwrap::payload::AnalysisInput;
    use moodwrap::summary::{FixedSelector, RandomSelector};
    use rand::{rngs::StdRng, SeedableRng};

    #[test]
    fn test_full_pipeline_from_files() -> Result<()> {
        let (_dir, tracks, features) = create_test_payloads()?;
        let input = AnalysisInput::load(&tracks, &features)?;
        let report = analysis::analyze(input, &mut FixedSelector(0))?;

        let labels: Vec<MoodLabel> = report.mood_labels.per_track.iter().map(|r| r.label).collect();
        assert_eq!(
            labels,
            vec![
                MoodLabel::Energetic,
                MoodLabel::Happy,
                MoodLabel::Melancholic,
                MoodLabel::Chill,
                MoodLabel::Energetic,
            ]
        );
        assert_eq!(report.mood_labels.summary_counts[&MoodLabel::Energetic], 2);
        assert_eq!(report.mood_labels.top_mood, Some(MoodLabel::Energetic));
        assert_eq!(
            report.template_summary,
            "You were vibing to Energetic tracks — The Pulse dominated your playlists!"
        );

        // Invariants over the whole result
        let total: usize = report.mood_labels.summary_counts.values().sum();
        assert_eq!(total, report.mood_labels.per_track.len());
        assert_eq!(report.mood_labels.per_track.len(), report.top_tracks.len() - 1);
        Ok(())
    }

    #[test]
    fn test_seeded_runs_match() -> Result<()> {
        let (_dir, tracks, features) = create_test_payloads()?;

        let first = analysis::analyze(
            AnalysisInput::load(&tracks, &features)?,
            &mut RandomSelector::new(StdRng::seed_from_u64(11)),
        )?;
        let second = analysis::analyze(
            AnalysisInput::load(&tracks, &features)?,
            &mut RandomSelector::new(StdRng::seed_from_u64(11)),
        )?;

        assert_eq!(first, second);
        Ok(())
    }

    #[test]
    fn test_empty_top_tracks_rejected() -> Result<()> {
        let input = AnalysisInput::from_json(r#"{"items": []}"#, r#"{"audio_features": []}"#)?;
        let result = analysis::analyze(input, &mut FixedSelector(0));
        assert!(matches!(result, Err(moodwrap::Error::EmptyInput)));
        Ok(())
    }
}

#[cfg(test)]
mod cli_tests {
    use super::*;

    #[test]
    fn test_cli_help_displays_correctly() {
        let output = moodwrap().arg("--help").output().expect("Failed to run help command");

        let stdout = String::from_utf8_lossy(&output.stdout);
        assert!(stdout.contains("moodwrap"));
        assert!(stdout.contains("analyze"));
        assert!(stdout.contains("report"));
        assert!(stdout.contains("templates"));
    }

    #[test]
    fn test_cli_version_flag() {
        let output = moodwrap().arg("--version").output().expect("Failed to run version command");

        let stdout = String::from_utf8_lossy(&output.stdout);
        assert!(stdout.contains("moodwrap"));
        assert!(stdout.contains(env!("CARGO_PKG_VERSION")));
    }

    #[test]
    fn test_analyze_prints_report_json() -> Result<()> {
        let (_dir, tracks, features) = create_test_payloads()?;
        let output = moodwrap()
            .args(["analyze", "--template", "3"])
            .arg(&tracks)
            .arg(&features)
            .output()?;

        assert!(output.status.success(), "stderr: {}", String::from_utf8_lossy(&output.stderr));
        let report: Value = serde_json::from_slice(&output.stdout)?;

        assert_eq!(report["top_tracks"].as_array().map(Vec::len), Some(6));
        assert_eq!(report["audio_features"][4], Value::Null);
        assert_eq!(report["mood_labels"]["top_mood"], json!("Energetic"));
        assert_eq!(report["mood_labels"]["per_track"][2]["label"], json!("Melancholic"));
        assert_eq!(report["mood_labels"]["per_track"][2]["artist"], json!("The Pulse"));
        assert_eq!(
            report["template_summary"],
            json!("Your top vibe was Energetic. Biggest artist? The Pulse.")
        );
        Ok(())
    }

    #[test]
    fn test_report_command_output() -> Result<()> {
        let (_dir, tracks, features) = create_test_payloads()?;
        let output = moodwrap()
            .args(["report", "--template", "0"])
            .arg(&tracks)
            .arg(&features)
            .output()?;

        assert!(output.status.success());
        let stdout = String::from_utf8_lossy(&output.stdout);
        assert!(stdout.contains("The Pulse - Neon Rush [Energetic]"));
        assert!(stdout.contains("Top Mood: Energetic"));
        assert!(stdout.contains("(1 without features)"));
        Ok(())
    }

    #[test]
    fn test_empty_tracks_fail() -> Result<()> {
        let dir = TempDir::new()?;
        let tracks = dir.path().join("tracks.json");
        let features = dir.path().join("features.json");
        std::fs::write(&tracks, r#"{"items": []}"#)?;
        std::fs::write(&features, r#"{"audio_features": []}"#)?;

        let output = moodwrap().arg("analyze").arg(&tracks).arg(&features).output()?;

        assert!(!output.status.success());
        assert!(String::from_utf8_lossy(&output.stderr).contains("track list is empty"));
        Ok(())
    }

    #[test]
    fn test_missing_payload_file_fails() {
        let output = moodwrap()
            .args(["analyze", "/nonexistent/tracks.json", "/nonexistent/features.json"])
            .output()
            .expect("Failed to run analyze command");

        assert!(!output.status.success());
    }

    #[test]
    fn test_templates_command_uses_config() -> Result<()> {
        let dir = TempDir::new()?;
        let config = dir.path().join("config.json");
        std::fs::write(&config, r#"{"templates": ["{top_artist} owned your {top_mood} year."]}"#)?;

        let output = moodwrap().arg("templates").arg("--config").arg(&config).output()?;

        assert!(output.status.success());
        let stdout = String::from_utf8_lossy(&output.stdout);
        assert_eq!(stdout.trim(), "0: {top_artist} owned your {top_mood} year.");
        Ok(())
    }

    #[test]
    fn test_default_templates_listed() {
        let output = moodwrap().arg("templates").output().expect("Failed to run templates command");

        assert!(output.status.success());
        let stdout = String::from_utf8_lossy(&output.stdout);
        assert_eq!(stdout.lines().count(), 4);
        assert!(stdout.starts_with("0: You were vibing to {top_mood} tracks"));
    }

    #[test]
    fn test_completion_generation() {
        let output = moodwrap().args(["completion", "bash"]).output().expect("Failed to run completion command");

        assert!(output.status.success());
        let stdout = String::from_utf8_lossy(&output.stdout);
        assert!(stdout.contains("_moodwrap"));
        assert!(stdout.contains("complete"));
    }
}
