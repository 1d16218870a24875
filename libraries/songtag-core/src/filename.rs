//! Artist/title extraction from audio file names

use std::path::Path;

const SEPARATOR: &str = " - ";

/// Parse `(artist, title)` from a file named like `Artist - Title.mp3`.
///
/// The stem is split at the first `" - "`; both halves are trimmed. Returns
/// `None` when the separator is missing or either half is empty.
pub fn parse_artist_title(path: impl AsRef<Path>) -> Option<(String, String)> {
    let stem = path.as_ref().file_stem()?.to_str()?;
    let (artist, title) = stem.split_once(SEPARATOR)?;

    let artist = artist.trim();
    let title = title.trim();
    if artist.is_empty() || title.is_empty() {
        return None;
    }

    Some((artist.to_string(), title.to_string()))
}
