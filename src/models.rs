//! Records exchanged between the streaming API boundary, the classifier and
//! the summary generator.
//!
//! Field names follow the streaming API's JSON so the records deserialize
//! straight from its response bodies.

use log::warn;
use serde::{Deserialize, Deserializer, Serialize};
use serde_json::Value;
use std::collections::BTreeMap;
use std::fmt;

/// A performer credited on a track.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Artist {
    pub name: String,
}

/// A single song from the user's top tracks.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Track {
    pub name: String,
    /// Credited artists, main artist first.
    pub artists: Vec<Artist>,
    /// External identifier used to fetch audio features.
    #[serde(default)]
    pub id: String,
}

impl Track {
    /// Name of the first credited artist, if any.
    #[must_use]
    pub fn primary_artist(&self) -> Option<&str> {
        self.artists.first().map(|artist| artist.name.as_str())
    }
}

/// Acoustic descriptors for one track.
///
/// Every field is optional on the wire. Accessors read an absent value as `0.0`,
/// which is what the classification rules compare against.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct AudioFeatures {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,
    /// 0.0 ..= 1.0
    #[serde(default, deserialize_with = "lenient_number")]
    pub energy: Option<f64>,
    /// 0.0 ..= 1.0
    #[serde(default, deserialize_with = "lenient_number")]
    pub danceability: Option<f64>,
    /// Beats per minute.
    #[serde(default, deserialize_with = "lenient_number")]
    pub tempo: Option<f64>,
    /// 0.0 ..= 1.0, happiness proxy.
    #[serde(default, deserialize_with = "lenient_number")]
    pub valence: Option<f64>,
}

/// Accept any JSON value for a numeric descriptor. Non-numbers become `None`,
/// so one bad field reads as `0.0` instead of discarding the whole object.
fn lenient_number<'de, D>(deserializer: D) -> Result<Option<f64>, D::Error>
where
    D: Deserializer<'de>,
{
    let value = Option::<Value>::deserialize(deserializer)?;
    Ok(match value {
        None | Some(Value::Null) => None,
        Some(Value::Number(n)) => n.as_f64(),
        Some(other) => {
            warn!("Reading non-numeric audio feature value {other} as 0");
            None
        }
    })
}

impl AudioFeatures {
    #[must_use]
    pub fn energy(&self) -> f64 {
        self.energy.unwrap_or(0.0)
    }

    #[must_use]
    pub fn danceability(&self) -> f64 {
        self.danceability.unwrap_or(0.0)
    }

    #[must_use]
    pub fn tempo(&self) -> f64 {
        self.tempo.unwrap_or(0.0)
    }

    #[must_use]
    pub fn valence(&self) -> f64 {
        self.valence.unwrap_or(0.0)
    }
}

/// The closed mood vocabulary.
///
/// Variant order is the rule priority order and also the key order of
/// [`MoodSummary::summary_counts`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum MoodLabel {
    Energetic,
    Happy,
    Melancholic,
    Chill,
    Party,
    #[serde(rename = "Indie/Alternative")]
    IndieAlternative,
}

impl MoodLabel {
    pub const ALL: [MoodLabel; 6] = [
        MoodLabel::Energetic,
        MoodLabel::Happy,
        MoodLabel::Melancholic,
        MoodLabel::Chill,
        MoodLabel::Party,
        MoodLabel::IndieAlternative,
    ];

    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Energetic => "Energetic",
            Self::Happy => "Happy",
            Self::Melancholic => "Melancholic",
            Self::Chill => "Chill",
            Self::Party => "Party",
            Self::IndieAlternative => "Indie/Alternative",
        }
    }

    /// Inverse of [`MoodLabel::as_str`].
    #[must_use]
    pub fn from_name(name: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|label| label.as_str() == name)
    }
}

impl fmt::Display for MoodLabel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.pad(self.as_str())
    }
}

/// Mood assigned to one track.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MoodRecord {
    #[serde(rename = "track")]
    pub track_name: String,
    #[serde(rename = "artist")]
    pub artist_name: String,
    pub label: MoodLabel,
}

/// Placeholder written for `top_mood` when nothing was classified.
pub const UNKNOWN_MOOD: &str = "Unknown";

/// Aggregate mood result for a batch of tracks.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct MoodSummary {
    /// One record per track that had features, in input order.
    pub per_track: Vec<MoodRecord>,
    pub summary_counts: BTreeMap<MoodLabel, usize>,
    /// `None` when `summary_counts` is empty; serialized as `"Unknown"`.
    #[serde(with = "top_mood_format")]
    pub top_mood: Option<MoodLabel>,
}

impl MoodSummary {
    /// Number of classified tracks.
    #[must_use]
    pub fn classified(&self) -> usize {
        self.summary_counts.values().sum()
    }
}

mod top_mood_format {
    use super::{MoodLabel, UNKNOWN_MOOD};
    use serde::{de, Deserialize, Deserializer, Serializer};

    pub fn serialize<S: Serializer>(value: &Option<MoodLabel>, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(value.map_or(UNKNOWN_MOOD, |label| label.as_str()))
    }

    pub fn deserialize<'de, D: Deserializer<'de>>(deserializer: D) -> Result<Option<MoodLabel>, D::Error> {
        let name = String::deserialize(deserializer)?;
        if name == UNKNOWN_MOOD {
            return Ok(None);
        }
        MoodLabel::from_name(&name)
            .map(Some)
            .ok_or_else(|| de::Error::custom(format!("unknown mood label `{name}'")))
    }
}

/// Response body of the analyze operation.
///
/// `top_tracks` and `audio_features` are the caller's raw JSON, passed through
/// untouched (feature nulls included).
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct AnalysisReport {
    pub top_tracks: Vec<serde_json::Value>,
    pub audio_features: Vec<serde_json::Value>,
    pub mood_labels: MoodSummary,
    pub template_summary: String,
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_track_deserializes_from_api_shape() {
        let track: Track = serde_json::from_value(json!({
            "name": "Song A",
            "id": "abc123",
            "artists": [{"name": "Artist X", "id": "x1"}, {"name": "Feat Y"}],
            "popularity": 71
        }))
        .unwrap();

        assert_eq!(track.name, "Song A");
        assert_eq!(track.id, "abc123");
        assert_eq!(track.primary_artist(), Some("Artist X"));
    }

    #[test]
    fn test_track_without_artists_has_no_primary() {
        let track = Track { name: "Lonely".to_string(), artists: vec![], id: "1".to_string() };
        assert_eq!(track.primary_artist(), None);
    }

    #[test]
    fn test_missing_feature_fields_read_as_zero() {
        let features: AudioFeatures = serde_json::from_value(json!({"valence": 0.6})).unwrap();
        assert_eq!(features.valence(), 0.6);
        assert_eq!(features.tempo(), 0.0);
        assert_eq!(features.energy(), 0.0);
        assert_eq!(features.danceability(), 0.0);
    }

    #[test]
    fn test_mistyped_feature_fields_read_as_zero() {
        let features: AudioFeatures = serde_json::from_value(json!({
            "energy": 0.9,
            "danceability": "0.8",
            "tempo": "fast",
            "valence": null
        }))
        .unwrap();
        assert_eq!(features.energy, Some(0.9));
        assert_eq!(features.danceability, None);
        assert_eq!(features.tempo(), 0.0);
        assert_eq!(features.valence(), 0.0);
    }

    #[test]
    fn test_label_names() {
        assert_eq!(MoodLabel::IndieAlternative.to_string(), "Indie/Alternative");
        assert_eq!(serde_json::to_value(MoodLabel::IndieAlternative).unwrap(), json!("Indie/Alternative"));
        for label in MoodLabel::ALL {
            assert_eq!(MoodLabel::from_name(label.as_str()), Some(label));
        }
        assert_eq!(MoodLabel::from_name("Grumpy"), None);
    }

    #[test]
    fn test_empty_summary_serializes_unknown_top_mood() {
        let value = serde_json::to_value(MoodSummary::default()).unwrap();
        assert_eq!(value, json!({"per_track": [], "summary_counts": {}, "top_mood": "Unknown"}));

        let back: MoodSummary = serde_json::from_value(value).unwrap();
        assert_eq!(back.top_mood, None);
    }

    #[test]
    fn test_summary_json_shape() {
        let summary = MoodSummary {
            per_track: vec![MoodRecord {
                track_name: "Song A".to_string(),
                artist_name: "Artist X".to_string(),
                label: MoodLabel::Chill,
            }],
            summary_counts: BTreeMap::from([(MoodLabel::Chill, 1)]),
            top_mood: Some(MoodLabel::Chill),
        };

        let value = serde_json::to_value(&summary).unwrap();
        assert_eq!(
            value,
            json!({
                "per_track": [{"track": "Song A", "artist": "Artist X", "label": "Chill"}],
                "summary_counts": {"Chill": 1},
                "top_mood": "Chill"
            })
        );
        assert_eq!(summary.classified(), 1);
    }
}
