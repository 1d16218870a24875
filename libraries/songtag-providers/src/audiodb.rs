//! TheAudioDB track search.

use crate::error::Result;
use crate::provider::{get_json, leading_year, lenient_string, non_empty, MetadataProvider};
use async_trait::async_trait;
use reqwest::Client;
use serde::Deserialize;
use songtag_core::MetadataRecord;
use tracing::{debug, warn};

/// Source name of TheAudioDB records
pub const AUDIODB: &str = "TheAudioDB";

#[derive(Debug, Deserialize)]
struct TrackSearch {
    /// `null` when nothing matched
    #[serde(default)]
    track: Option<Vec<AudioDbTrack>>,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct AudioDbTrack {
    #[serde(default, deserialize_with = "lenient_string")]
    str_track: Option<String>,
    #[serde(default, deserialize_with = "lenient_string")]
    str_artist: Option<String>,
    #[serde(default, deserialize_with = "lenient_string")]
    str_album: Option<String>,
    #[serde(default, deserialize_with = "lenient_string")]
    str_genre: Option<String>,
    #[serde(default, deserialize_with = "lenient_string")]
    int_track_number: Option<String>,
    #[serde(default, deserialize_with = "lenient_string")]
    int_year_released: Option<String>,
    #[serde(default, deserialize_with = "lenient_string")]
    str_track_thumb: Option<String>,
    #[serde(default, deserialize_with = "lenient_string")]
    str_album_thumb: Option<String>,
}

impl AudioDbTrack {
    fn into_record(self, artist: &str, title: &str) -> MetadataRecord {
        let year = leading_year(self.int_year_released.as_deref());
        let cover_url = non_empty(self.str_track_thumb).or_else(|| non_empty(self.str_album_thumb));

        MetadataRecord {
            title: non_empty(self.str_track).unwrap_or_else(|| title.to_string()),
            artist: non_empty(self.str_artist).unwrap_or_else(|| artist.to_string()),
            album: self.str_album.unwrap_or_default(),
            year,
            track: self.int_track_number.unwrap_or_default(),
            genre: self.str_genre.unwrap_or_default(),
            source: AUDIODB.to_string(),
            cover_url,
            release_id: None,
        }
    }
}

/// TheAudioDB client
pub struct AudioDbClient {
    http: Client,
    base_url: String,
}

impl AudioDbClient {
    pub fn new(http: Client, base_url: impl Into<String>) -> Self {
        Self {
            http,
            base_url: base_url.into().trim_end_matches('/').to_string(),
        }
    }

    async fn search_tracks(&self, artist: &str, title: &str) -> Result<Vec<MetadataRecord>> {
        let url = format!("{}/searchtrack.php", self.base_url);
        let search: TrackSearch =
            get_json(&self.http, AUDIODB, &url, &[("s", artist), ("t", title)]).await?;

        let records: Vec<_> = search
            .track
            .unwrap_or_default()
            .into_iter()
            .map(|track| track.into_record(artist, title))
            .collect();

        debug!(provider = AUDIODB, results = records.len(), "Track search complete");
        Ok(records)
    }
}

#[async_trait]
impl MetadataProvider for AudioDbClient {
    fn name(&self) -> &'static str {
        AUDIODB
    }

    async fn search(&self, artist: &str, title: &str) -> Vec<MetadataRecord> {
        self.search_tracks(artist, title).await.unwrap_or_else(|e| {
            warn!(provider = AUDIODB, error = %e, "Search failed");
            Vec::new()
        })
    }
}
