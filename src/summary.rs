//! One-line natural-language recap of a mood analysis.
//!
//! The recap fills a phrase template with the top mood and the most frequent
//! artist. Which template is used is decided by a [`TemplateSelector`] passed
//! in by the caller, so tests can pin the choice and services can hand each
//! request its own generator.

use crate::error::{Error, Result};
use crate::models::{MoodSummary, Track};
use log::debug;
use rand::Rng;

/// Slot replaced with the top mood label.
pub const MOOD_SLOT: &str = "{top_mood}";
/// Slot replaced with the top artist name.
pub const ARTIST_SLOT: &str = "{top_artist}";

/// Mood term used when nothing was classified.
pub const DEFAULT_FALLBACK_MOOD: &str = "eclectic";

/// Stock recap templates.
pub const TEMPLATES: [&str; 4] = [
    "You were vibing to {top_mood} tracks — {top_artist} dominated your playlists!",
    "It was a {top_mood} year. {top_artist} kept showing up in your top songs.",
    "Major {top_mood} energy: {top_artist} & friends filled your playlists.",
    "Your top vibe was {top_mood}. Biggest artist? {top_artist}.",
];

/// Picks which of `count` templates to render.
///
/// Implementations may return any index; it is reduced modulo `count`.
pub trait TemplateSelector {
    fn select(&mut self, count: usize) -> usize;
}

/// Uniform choice driven by a caller-owned random generator.
///
/// ```
/// use moodwrap::summary::{RandomSelector, TemplateSelector};
/// use rand::{rngs::StdRng, SeedableRng};
///
/// let mut a = RandomSelector::new(StdRng::seed_from_u64(7));
/// let mut b = RandomSelector::new(StdRng::seed_from_u64(7));
/// assert_eq!(a.select(4), b.select(4));
/// ```
#[derive(Debug, Clone)]
pub struct RandomSelector<R> {
    rng: R,
}

impl<R: Rng> RandomSelector<R> {
    pub fn new(rng: R) -> Self {
        Self { rng }
    }
}

impl<R: Rng> TemplateSelector for RandomSelector<R> {
    fn select(&mut self, count: usize) -> usize {
        if count == 0 {
            return 0;
        }
        self.rng.gen_range(0..count)
    }
}

/// Always picks the same template.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FixedSelector(pub usize);

impl TemplateSelector for FixedSelector {
    fn select(&mut self, _count: usize) -> usize {
        self.0
    }
}

/// Most frequent first-credited artist across `tracks`.
///
/// Ties go to the artist that appears first in `tracks`.
///
/// # Errors
///
/// [`Error::EmptyInput`] if `tracks` is empty, [`Error::MalformedTrack`] if a
/// track credits no artist.
pub fn top_artist(tracks: &[Track]) -> Result<&str> {
    if tracks.is_empty() {
        return Err(Error::EmptyInput);
    }

    // Distinct names in first-appearance order; at most a page of tracks.
    let mut counts: Vec<(&str, usize)> = Vec::new();
    for (index, track) in tracks.iter().enumerate() {
        let artist = track.primary_artist().ok_or_else(|| Error::MalformedTrack {
            index,
            reason: format!("track `{}' has no artists", track.name),
        })?;
        match counts.iter_mut().find(|(name, _)| *name == artist) {
            Some((_, count)) => *count += 1,
            None => counts.push((artist, 1)),
        }
    }

    let mut best: Option<(&str, usize)> = None;
    for (name, count) in counts {
        if best.map_or(true, |(_, best_count)| count > best_count) {
            best = Some((name, count));
        }
    }
    let (name, _) = best.ok_or(Error::EmptyInput)?;

    Ok(name)
}

/// Substitute both slots of `template`.
#[must_use]
pub fn render(template: &str, top_mood: &str, top_artist: &str) -> String {
    template.replace(MOOD_SLOT, top_mood).replace(ARTIST_SLOT, top_artist)
}

/// Generate the recap with the stock templates.
///
/// `tracks` is the full top-tracks list, including tracks the classifier
/// skipped for lack of features.
///
/// # Errors
///
/// See [`top_artist`].
///
/// # Examples
///
/// ```
/// use moodwrap::models::{Artist, MoodLabel, MoodSummary, Track};
/// use moodwrap::summary::{generate_summary, FixedSelector};
///
/// let tracks = vec![Track {
///     name: "Song A".to_string(),
///     artists: vec![Artist { name: "Artist X".to_string() }],
///     id: "a".to_string(),
/// }];
/// let moods = MoodSummary { top_mood: Some(MoodLabel::Happy), ..Default::default() };
///
/// let text = generate_summary(&tracks, &moods, &mut FixedSelector(0))?;
/// assert_eq!(text, "You were vibing to Happy tracks — Artist X dominated your playlists!");
/// # Ok::<(), moodwrap::Error>(())
/// ```
pub fn generate_summary<S>(tracks: &[Track], mood_summary: &MoodSummary, selector: &mut S) -> Result<String>
where
    S: TemplateSelector + ?Sized,
{
    generate_summary_with(tracks, mood_summary, &TEMPLATES[..], DEFAULT_FALLBACK_MOOD, selector)
}

/// Generate the recap from a custom template set and fallback mood.
///
/// The top artist is counted over every track in `tracks`, classified or
/// not. The mood comes from `mood_summary.top_mood`, or `fallback_mood` when
/// no track was classified. `selector` is asked once per call; its answer is
/// reduced modulo `templates.len()`.
///
/// # Returns
///
/// The chosen template with `{top_mood}` and `{top_artist}` substituted.
///
/// # Errors
///
/// This function will return an error if:
/// - `templates` is empty ([`Error::Config`])
/// - `tracks` is empty ([`Error::EmptyInput`])
/// - a track credits no artist ([`Error::MalformedTrack`])
///
/// # Examples
///
/// ```
/// use moodwrap::models::{Artist, MoodSummary, Track};
/// use moodwrap::summary::{generate_summary_with, FixedSelector};
///
/// let tracks = vec![Track {
///     name: "Song A".to_string(),
///     artists: vec![Artist { name: "Artist X".to_string() }],
///     id: "a".to_string(),
/// }];
/// let templates = ["{top_artist} carried your {top_mood} year."];
///
/// // Nothing classified, so the fallback mood fills the slot.
/// let text = generate_summary_with(&tracks, &MoodSummary::default(), &templates[..], "mixed", &mut FixedSelector(0))?;
/// assert_eq!(text, "Artist X carried your mixed year.");
/// # Ok::<(), moodwrap::Error>(())
/// ```
///
/// # Design Notes
///
/// Randomness stays with the caller. A service hands each request its own
/// [`RandomSelector`], tests pin a [`FixedSelector`], and this function never
/// touches a global generator.
pub fn generate_summary_with<T, S>(
    tracks: &[Track],
    mood_summary: &MoodSummary,
    templates: &[T],
    fallback_mood: &str,
    selector: &mut S,
) -> Result<String>
where
    T: AsRef<str>,
    S: TemplateSelector + ?Sized,
{
    if templates.is_empty() {
        return Err(Error::Config("no summary templates configured".to_string()));
    }

    let artist = top_artist(tracks)?;
    let mood = mood_summary.top_mood.map_or(fallback_mood, |label| label.as_str());

    let index = selector.select(templates.len()) % templates.len();
    debug!("Rendering template #{index} with mood {mood} and artist {artist}");

    Ok(render(templates[index].as_ref(), mood, artist))
}
