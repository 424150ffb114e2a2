//! The analyze pipeline: validated input → moods → recap → report.

use crate::classifier;
use crate::config::Config;
use crate::error::{Error, Result};
use crate::models::AnalysisReport;
use crate::payload::AnalysisInput;
use crate::summary::{self, TemplateSelector};
use log::info;

/// Run the full analysis with stock settings.
///
/// # Errors
///
/// [`Error::EmptyInput`] when `input` has no tracks; otherwise whatever the
/// summary stage reports.
pub fn analyze<S>(input: AnalysisInput, selector: &mut S) -> Result<AnalysisReport>
where
    S: TemplateSelector + ?Sized,
{
    analyze_with(input, &Config::default(), selector)
}

/// Run the full analysis with configured rules and templates.
///
/// # Errors
///
/// See [`analyze`].
pub fn analyze_with<S>(input: AnalysisInput, config: &Config, selector: &mut S) -> Result<AnalysisReport>
where
    S: TemplateSelector + ?Sized,
{
    if input.is_empty() {
        return Err(Error::EmptyInput);
    }

    let mood_labels = classifier::classify_with(&input.tracks, &input.features, &config.rules);
    let template_summary = summary::generate_summary_with(
        &input.tracks,
        &mood_labels,
        config.templates.as_slice(),
        &config.fallback_mood,
        selector,
    )?;

    info!(
        "Analyzed {} tracks ({} classified): {template_summary}",
        input.tracks.len(),
        mood_labels.per_track.len()
    );

    Ok(AnalysisReport {
        top_tracks: input.raw_tracks,
        audio_features: input.raw_features,
        mood_labels,
        template_summary,
    })
}
