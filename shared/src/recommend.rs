//! Mood-to-song recommendation table.

/// Recommendation for any mood without a dedicated entry.
pub const DEFAULT_SONG: &str = "\u{1f3b5} \"Here Comes the Sun\" by The Beatles";

/// Map a mood to a canned song recommendation.
///
/// Expects the lowercased mood; anything unmatched (including an empty
/// string for an unfilled slot) falls back to [`DEFAULT_SONG`].
pub fn recommend(mood: &str) -> &'static str {
    match mood {
        "happy" => "\u{1f3b5} \"Happy\" by Pharrell Williams",
        "sad" => "\u{1f3b5} \"Someone Like You\" by Adele",
        "energetic" => "\u{1f3b5} \"Eye of the Tiger\" by Survivor",
        _ => DEFAULT_SONG,
    }
}
