/// Metadata record domain type
use serde::{Deserialize, Serialize};

/// Value reported by tag reads for a field the file does not carry.
///
/// Distinct from the empty string, which on the write path means
/// "leave this field untouched".
pub const NOT_AVAILABLE: &str = "N/A";

/// Suffix appended to the `source` of records that only confirm a song exists.
pub const LYRICS_ONLY_SUFFIX: &str = "(lyrics only)";

/// Normalized song metadata candidate
///
/// All fields are plain strings; an absent value is the empty string.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct MetadataRecord {
    /// Track title
    pub title: String,

    /// Artist name
    pub artist: String,

    /// Album title
    pub album: String,

    /// Four-digit year, or empty
    pub year: String,

    /// Provider-native track number, possibly "N/M"
    pub track: String,

    /// Comma-joined genre names
    pub genre: String,

    /// Name of the provider that produced this record
    pub source: String,

    /// Cover image URL, if the provider knows one
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub cover_url: Option<String>,

    /// Release identifier (primary catalog only), used for cover lookups
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub release_id: Option<String>,
}

impl MetadataRecord {
    /// Create a record carrying only artist and title
    pub fn new(artist: impl Into<String>, title: impl Into<String>) -> Self {
        Self {
            artist: artist.into(),
            title: title.into(),
            ..Self::default()
        }
    }

    /// A record as reported for a file without any tag block
    pub fn not_available() -> Self {
        Self {
            title: NOT_AVAILABLE.to_string(),
            artist: NOT_AVAILABLE.to_string(),
            album: NOT_AVAILABLE.to_string(),
            year: NOT_AVAILABLE.to_string(),
            track: NOT_AVAILABLE.to_string(),
            genre: NOT_AVAILABLE.to_string(),
            ..Self::default()
        }
    }

    pub fn with_album(mut self, album: impl Into<String>) -> Self {
        self.album = album.into();
        self
    }

    pub fn with_year(mut self, year: impl Into<String>) -> Self {
        self.year = year.into();
        self
    }

    pub fn with_track(mut self, track: impl Into<String>) -> Self {
        self.track = track.into();
        self
    }

    pub fn with_genre(mut self, genre: impl Into<String>) -> Self {
        self.genre = genre.into();
        self
    }

    pub fn with_source(mut self, source: impl Into<String>) -> Self {
        self.source = source.into();
        self
    }

    /// Whether this record came from the lyrics fallback and carries no
    /// album, year, track or genre information.
    pub fn is_lyrics_only(&self) -> bool {
        self.source.ends_with(LYRICS_ONLY_SUFFIX)
    }

    /// Copy of this record suitable for a tag write.
    ///
    /// Every `"N/A"` read sentinel becomes the empty "don't touch" value, so
    /// writing back an unedited read result never stores the literal text.
    pub fn for_write(&self) -> Self {
        fn clear_sentinel(value: &str) -> String {
            if value == NOT_AVAILABLE {
                String::new()
            } else {
                value.to_string()
            }
        }

        Self {
            title: clear_sentinel(&self.title),
            artist: clear_sentinel(&self.artist),
            album: clear_sentinel(&self.album),
            year: clear_sentinel(&self.year),
            track: clear_sentinel(&self.track),
            genre: clear_sentinel(&self.genre),
            source: self.source.clone(),
            cover_url: self.cover_url.clone(),
            release_id: self.release_id.clone(),
        }
    }

    /// Compare the tag-bearing fields of two records.
    ///
    /// `source`, `cover_url` and `release_id` are ignored. `"N/A"` and `""`
    /// are different values here.
    pub fn differs_in_tags(&self, other: &Self) -> bool {
        self.artist != other.artist
            || self.title != other.title
            || self.album != other.album
            || self.year != other.year
            || self.track != other.track
            || self.genre != other.genre
    }
}
