//! Human-readable rendering of an [`AnalysisReport`].

use crate::models::{AnalysisReport, UNKNOWN_MOOD};
use std::fmt;

/// Text view of a report: per-track moods, mood counts and the recap.
///
/// ```
/// use moodwrap::models::AnalysisReport;
/// use moodwrap::report::TextReport;
///
/// let report = AnalysisReport::default();
/// assert!(TextReport(&report).to_string().contains("No tracks had audio features"));
/// ```
#[derive(Debug, Clone, Copy)]
pub struct TextReport<'a>(pub &'a AnalysisReport);

impl fmt::Display for TextReport<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let report = self.0;
        let moods = &report.mood_labels;

        writeln!(f, "🎧 Track Moods")?;
        writeln!(f, "═════════════")?;
        if moods.per_track.is_empty() {
            writeln!(f, "  No tracks had audio features")?;
        }
        for (index, record) in moods.per_track.iter().enumerate() {
            writeln!(f, "  {}. {} - {} [{}]", index + 1, record.artist_name, record.track_name, record.label)?;
        }

        writeln!(f)?;
        writeln!(f, "📊 Mood Counts")?;
        writeln!(f, "═════════════")?;
        for (label, count) in &moods.summary_counts {
            writeln!(f, "  {label:<18} {count}")?;
        }
        let skipped = report.top_tracks.len().saturating_sub(moods.per_track.len());
        if skipped > 0 {
            writeln!(f, "  ({skipped} without features)")?;
        }

        writeln!(f)?;
        let top = moods.top_mood.map_or(UNKNOWN_MOOD, |label| label.as_str());
        writeln!(f, "🏆 Top Mood: {top}")?;
        writeln!(f, "💬 {}", report.template_summary)
    }
}

/// Render the per-track moods, the mood counts and the recap as text.
#[must_use]
pub fn render_text(report: &AnalysisReport) -> String {
    TextReport(report).to_string()
}
