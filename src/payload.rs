//! Boundary between the streaming API's JSON and the typed core.
//!
//! The API hands over two response bodies: the top-tracks page
//! (`{"items": [...]}`) and the audio-features page
//! (`{"audio_features": [... | null]}`). [`AnalysisInput`] keeps both raw
//! arrays for pass-through and converts them into [`Track`] and
//! [`AudioFeatures`] records, rejecting tracks the summary stage could not use.

use crate::error::{Error, Result};
use crate::models::{AudioFeatures, Track};
use log::{debug, warn};
use serde::Deserialize;
use serde_json::Value;
use std::fs;
use std::path::Path;

/// Body of the top-tracks endpoint.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct TopTracksPage {
    #[serde(default)]
    pub items: Vec<Value>,
}

/// Body of the audio-features endpoint.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct AudioFeaturesPage {
    #[serde(default)]
    pub audio_features: Vec<Value>,
}

/// Validated input for one analysis.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct AnalysisInput {
    pub raw_tracks: Vec<Value>,
    pub raw_features: Vec<Value>,
    pub tracks: Vec<Track>,
    /// Aligned with `tracks`; `None` where the API had no features.
    pub features: Vec<Option<AudioFeatures>>,
}

impl AnalysisInput {
    /// Build from the raw arrays of both pages.
    ///
    /// Both arrays are kept as given for the report. Each track item must
    /// carry a `name` and at least one artist. Feature entries are read
    /// leniently: `null` or a non-object becomes `None`, and a field that is
    /// not a number reads as `0.0`. A length mismatch between the two arrays
    /// is logged and left to the classifier, which ignores unmatched entries.
    ///
    /// # Errors
    ///
    /// [`Error::MalformedTrack`] if an item is not a track or credits no artist.
    /// The error carries the item's index.
    ///
    /// # Examples
    ///
    /// ```
    /// use moodwrap::payload::AnalysisInput;
    /// use serde_json::json;
    ///
    /// let input = AnalysisInput::from_values(
    ///     vec![json!({"name": "Song A", "id": "a", "artists": [{"name": "Artist X"}]})],
    ///     vec![json!({"energy": 0.9, "tempo": "fast"})],
    /// )?;
    ///
    /// let features = input.features[0].as_ref().expect("object entry is kept");
    /// assert_eq!(features.energy(), 0.9);
    /// assert_eq!(features.tempo(), 0.0);
    /// # Ok::<(), moodwrap::Error>(())
    /// ```
    pub fn from_values(raw_tracks: Vec<Value>, raw_features: Vec<Value>) -> Result<Self> {
        let tracks = raw_tracks
            .iter()
            .enumerate()
            .map(|(index, value)| parse_track(index, value))
            .collect::<Result<Vec<_>>>()?;

        let features = raw_features
            .iter()
            .enumerate()
            .map(|(index, value)| parse_features(index, value))
            .collect::<Vec<_>>();

        if tracks.len() != features.len() {
            warn!(
                "Got {} tracks but {} audio feature entries; unmatched entries are ignored",
                tracks.len(),
                features.len()
            );
        }

        debug!(
            "Accepted {} tracks, {} with audio features",
            tracks.len(),
            features.iter().filter(|slot| slot.is_some()).count()
        );

        Ok(Self { raw_tracks, raw_features, tracks, features })
    }

    /// Parse both response bodies.
    ///
    /// # Errors
    ///
    /// [`Error::Json`] if a body is not valid JSON of the expected shape, plus
    /// the errors of [`AnalysisInput::from_values`].
    pub fn from_json(tracks_json: &str, features_json: &str) -> Result<Self> {
        let tracks_page: TopTracksPage = serde_json::from_str(tracks_json)?;
        let features_page: AudioFeaturesPage = serde_json::from_str(features_json)?;
        Self::from_values(tracks_page.items, features_page.audio_features)
    }

    /// Read both response bodies from disk.
    ///
    /// # Errors
    ///
    /// [`Error::Io`] if either file cannot be read, plus the errors of
    /// [`AnalysisInput::from_json`].
    pub fn load(tracks_path: &Path, features_path: &Path) -> Result<Self> {
        let tracks_json = read_file(tracks_path)?;
        let features_json = read_file(features_path)?;
        Self::from_json(&tracks_json, &features_json)
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.tracks.is_empty()
    }
}

fn read_file(path: &Path) -> Result<String> {
    fs::read_to_string(path).map_err(|source| Error::Io { path: path.to_path_buf(), source })
}

fn parse_track(index: usize, value: &Value) -> Result<Track> {
    let track = Track::deserialize(value).map_err(|e| Error::MalformedTrack { index, reason: e.to_string() })?;

    if track.artists.is_empty() {
        return Err(Error::MalformedTrack {
            index,
            reason: format!("track `{}' has no artists", track.name),
        });
    }

    Ok(track)
}

/// A `null` entry means the API had no analysis for that track. An entry that
/// is not a feature object at all is treated the same way; mistyped fields
/// inside an object only zero that field.
fn parse_features(index: usize, value: &Value) -> Option<AudioFeatures> {
    if value.is_null() {
        return None;
    }

    match AudioFeatures::deserialize(value) {
        Ok(features) => Some(features),
        Err(e) => {
            warn!("Ignoring unreadable audio features at index {index}: {e}");
            None
        }
    }
}
