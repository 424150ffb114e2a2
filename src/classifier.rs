//! Rule-based mood classification.
//!
//! Each track with audio features gets exactly one [`MoodLabel`]. Rules are
//! evaluated in priority order and the first match wins:
//!
//! | # | Condition                                   | Label               |
//! |---|---------------------------------------------|---------------------|
//! | 1 | energy > 0.7 and danceability > 0.6         | `Energetic`         |
//! | 2 | valence > 0.7 and danceability > 0.5        | `Happy`             |
//! | 3 | energy < 0.4 and valence < 0.4              | `Melancholic`       |
//! | 4 | tempo < 70 and valence > 0.5                | `Chill`             |
//! | 5 | danceability > 0.7                          | `Party`             |
//! | 6 | anything else                               | `Indie/Alternative` |
//!
//! Tracks whose features are missing are skipped, not labeled.

use crate::models::{AudioFeatures, MoodLabel, MoodRecord, MoodSummary, Track};
use log::{debug, trace};
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// Thresholds for the classification rules.
///
/// `Default` gives the stock rule table. All comparisons are strict.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct MoodRules {
    pub energetic: EnergeticRule,
    pub happy: HappyRule,
    pub melancholic: MelancholicRule,
    pub chill: ChillRule,
    /// Minimum danceability (exclusive) for `Party`.
    pub party_danceability: f64,
}

/// `energy > min_energy && danceability > min_danceability`
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct EnergeticRule {
    pub min_energy: f64,
    pub min_danceability: f64,
}

/// `valence > min_valence && danceability > min_danceability`
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct HappyRule {
    pub min_valence: f64,
    pub min_danceability: f64,
}

/// `energy < max_energy && valence < max_valence`
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct MelancholicRule {
    pub max_energy: f64,
    pub max_valence: f64,
}

/// `tempo < max_tempo && valence > min_valence`
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ChillRule {
    pub max_tempo: f64,
    pub min_valence: f64,
}

impl Default for MoodRules {
    fn default() -> Self {
        Self {
            energetic: EnergeticRule::default(),
            happy: HappyRule::default(),
            melancholic: MelancholicRule::default(),
            chill: ChillRule::default(),
            party_danceability: 0.7,
        }
    }
}

impl Default for EnergeticRule {
    fn default() -> Self {
        Self { min_energy: 0.7, min_danceability: 0.6 }
    }
}

impl Default for HappyRule {
    fn default() -> Self {
        Self { min_valence: 0.7, min_danceability: 0.5 }
    }
}

impl Default for MelancholicRule {
    fn default() -> Self {
        Self { max_energy: 0.4, max_valence: 0.4 }
    }
}

impl Default for ChillRule {
    fn default() -> Self {
        Self { max_tempo: 70.0, min_valence: 0.5 }
    }
}

/// Label a single set of audio features.
#[must_use]
pub fn label_for(features: &AudioFeatures, rules: &MoodRules) -> MoodLabel {
    let energy = features.energy();
    let dance = features.danceability();
    let tempo = features.tempo();
    let valence = features.valence();

    if energy > rules.energetic.min_energy && dance > rules.energetic.min_danceability {
        MoodLabel::Energetic
    } else if valence > rules.happy.min_valence && dance > rules.happy.min_danceability {
        MoodLabel::Happy
    } else if energy < rules.melancholic.max_energy && valence < rules.melancholic.max_valence {
        MoodLabel::Melancholic
    } else if tempo < rules.chill.max_tempo && valence > rules.chill.min_valence {
        MoodLabel::Chill
    } else if dance > rules.party_danceability {
        MoodLabel::Party
    } else {
        MoodLabel::IndieAlternative
    }
}

/// Classify tracks with the stock rules.
///
/// `features[i]` must describe `tracks[i]`. Entries that are `None` are
/// skipped; if the slices differ in length the extra entries are ignored.
///
/// # Examples
///
/// ```
/// use moodwrap::classifier::classify;
/// use moodwrap::models::{Artist, AudioFeatures, MoodLabel, Track};
///
/// let tracks = vec![Track {
///     name: "Song A".to_string(),
///     artists: vec![Artist { name: "Artist X".to_string() }],
///     id: "a".to_string(),
/// }];
/// let features = vec![Some(AudioFeatures {
///     energy: Some(0.8),
///     danceability: Some(0.7),
///     valence: Some(0.9),
///     ..Default::default()
/// })];
///
/// let summary = classify(&tracks, &features);
/// assert_eq!(summary.top_mood, Some(MoodLabel::Energetic));
/// ```
#[must_use]
pub fn classify(tracks: &[Track], features: &[Option<AudioFeatures>]) -> MoodSummary {
    classify_with(tracks, features, &MoodRules::default())
}

/// Classify tracks with custom thresholds.
///
/// Walks `tracks` and `features` in lockstep and labels every track whose
/// feature slot is `Some`, using the first rule in [`MoodRules`] that matches.
/// Tracks without features produce no record at all, so
/// `per_track.len()` equals the number of `Some` slots within the shorter of
/// the two slices.
///
/// # Arguments
///
/// * `tracks` - Top tracks in ranking order
/// * `features` - Audio features aligned index-by-index with `tracks`
/// * `rules` - Thresholds to compare against
///
/// # Returns
///
/// A [`MoodSummary`] holding one record per classified track in input order,
/// the count for every label that occurred, and the top mood as decided by
/// [`tally`]. `top_mood` is `None` when nothing could be classified.
///
/// # Examples
///
/// ```
/// use moodwrap::classifier::{classify_with, MoodRules};
/// use moodwrap::models::{Artist, AudioFeatures, MoodLabel, Track};
///
/// let tracks = vec![Track {
///     name: "Slow Song".to_string(),
///     artists: vec![Artist { name: "Artist Y".to_string() }],
///     id: "s".to_string(),
/// }];
/// let features = vec![Some(AudioFeatures {
///     energy: Some(0.5),
///     tempo: Some(75.0),
///     valence: Some(0.6),
///     ..Default::default()
/// })];
///
/// // Stock rules call 75 BPM too fast for Chill; a looser limit does not.
/// let mut rules = MoodRules::default();
/// assert_eq!(classify_with(&tracks, &features, &rules).top_mood, Some(MoodLabel::IndieAlternative));
///
/// rules.chill.max_tempo = 80.0;
/// assert_eq!(classify_with(&tracks, &features, &rules).top_mood, Some(MoodLabel::Chill));
/// ```
#[must_use]
pub fn classify_with(tracks: &[Track], features: &[Option<AudioFeatures>], rules: &MoodRules) -> MoodSummary {
    let per_track: Vec<MoodRecord> = tracks
        .iter()
        .zip(features)
        .filter_map(|(track, slot)| slot.as_ref().map(|features| (track, features)))
        .map(|(track, features)| {
            let label = label_for(features, rules);
            trace!("Labeled `{}' as {label}.", track.name);
            MoodRecord {
                track_name: track.name.clone(),
                artist_name: track.primary_artist().unwrap_or_default().to_string(),
                label,
            }
        })
        .collect();

    let (summary_counts, top_mood) = tally(per_track.iter().map(|record| record.label));

    debug!(
        "Classified {} of {} tracks, top mood {}",
        per_track.len(),
        tracks.len(),
        top_mood.map_or("none", |label| label.as_str())
    );

    MoodSummary { per_track, summary_counts, top_mood }
}

/// Count labels and pick the most frequent one.
///
/// Ties go to the label that reached the winning count first while scanning
/// left to right.
pub fn tally<I>(labels: I) -> (BTreeMap<MoodLabel, usize>, Option<MoodLabel>)
where
    I: IntoIterator<Item = MoodLabel>,
{
    let mut counts = BTreeMap::new();
    let mut top: Option<(MoodLabel, usize)> = None;

    for label in labels {
        let count = counts.entry(label).or_insert(0);
        *count += 1;
        if top.map_or(true, |(_, best)| *count > best) {
            top = Some((label, *count));
        }
    }

    (counts, top.map(|(label, _)| label))
}
