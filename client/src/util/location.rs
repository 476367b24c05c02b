//! Pure location and search-text helpers shared by the pages.

/// Shown until the browser resolves a real position.
pub const DEFAULT_LOCATION: &str = "Indore, Madhya Pradesh, India";

/// Keywords that route a chat message through the place search instead of
/// the conversational relay.
pub const SEARCH_KEYWORDS: &[&str] = &[
    "restaurant",
    "cafe",
    "bar",
    "attraction",
    "museum",
    "gallery",
    "shopping",
    "mall",
    "hotel",
    "food",
    "eat",
    "drink",
];

/// Number of most-recent transcript turns sent as chat context.
pub const HISTORY_WINDOW: usize = 5;

/// The trailing [`HISTORY_WINDOW`] entries of a transcript.
#[must_use]
pub fn window_history<T>(history: &[T]) -> &[T] {
    let start = history.len().saturating_sub(HISTORY_WINDOW);
    &history[start..]
}

/// Coordinate display used when reverse geocoding fails.
#[must_use]
pub fn format_coordinates(latitude: f64, longitude: f64) -> String {
    format!("Lat: {latitude:.2}, Lng: {longitude:.2}")
}

/// True when the message names a place category worth searching for.
#[must_use]
pub fn is_search_query(input: &str) -> bool {
    let lower = input.to_lowercase();
    SEARCH_KEYWORDS.iter().any(|k| lower.contains(k))
}

/// Convert the parser's 1..=100 popularity score into the 0..=1 fraction the
/// place search filters on.
#[must_use]
pub fn popularity_fraction(popularity: u8) -> f64 {
    f64::from(popularity) / 100.0
}

/// Cap a place description at `max` characters, appending an ellipsis when
/// trimmed.
#[must_use]
pub fn truncate_description(description: &str, max: usize) -> String {
    if description.chars().count() <= max {
        return description.to_owned();
    }
    let truncated: String = description.chars().take(max).collect();
    format!("{truncated}...")
}

#[cfg(test)]
#[path = "location_test.rs"]
mod tests;
