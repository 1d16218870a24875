//! Deezer public search.

use crate::error::Result;
use crate::provider::{get_json, leading_year, lenient_string, non_empty, MetadataProvider};
use async_trait::async_trait;
use reqwest::Client;
use serde::Deserialize;
use songtag_core::MetadataRecord;
use tracing::{debug, warn};

/// Source name of Deezer records
pub const DEEZER: &str = "Deezer";

#[derive(Debug, Deserialize)]
struct SearchResponse {
    #[serde(default)]
    data: Vec<DeezerTrack>,
}

#[derive(Debug, Deserialize)]
struct DeezerTrack {
    #[serde(default)]
    title: String,
    #[serde(default, deserialize_with = "lenient_string")]
    track_position: Option<String>,
    #[serde(default)]
    release_date: Option<String>,
    #[serde(default)]
    artist: Option<DeezerArtist>,
    #[serde(default)]
    album: Option<DeezerAlbum>,
}

#[derive(Debug, Deserialize)]
struct DeezerArtist {
    #[serde(default)]
    name: String,
}

#[derive(Debug, Default, Deserialize)]
struct DeezerAlbum {
    #[serde(default)]
    title: String,
    #[serde(default)]
    cover: Option<String>,
    #[serde(default)]
    cover_medium: Option<String>,
    #[serde(default)]
    release_date: Option<String>,
}

impl DeezerTrack {
    fn into_record(self, artist: &str) -> MetadataRecord {
        let album = self.album.unwrap_or_default();
        let release_date = self.release_date.or(album.release_date);

        MetadataRecord {
            title: self.title,
            artist: self
                .artist
                .and_then(|a| non_empty(Some(a.name)))
                .unwrap_or_else(|| artist.to_string()),
            album: album.title,
            year: leading_year(release_date.as_deref()),
            track: self.track_position.unwrap_or_default(),
            // Deezer search results carry no genre
            genre: String::new(),
            source: DEEZER.to_string(),
            cover_url: non_empty(album.cover_medium).or_else(|| non_empty(album.cover)),
            release_id: None,
        }
    }
}

/// Deezer client
pub struct DeezerClient {
    http: Client,
    base_url: String,
    limit: usize,
}

impl DeezerClient {
    pub fn new(http: Client, base_url: impl Into<String>, limit: usize) -> Self {
        Self {
            http,
            base_url: base_url.into().trim_end_matches('/').to_string(),
            limit,
        }
    }

    async fn search_tracks(&self, artist: &str, title: &str) -> Result<Vec<MetadataRecord>> {
        let url = format!("{}/search", self.base_url);
        let query = format!("artist:\"{artist}\" track:\"{title}\"");
        let limit = self.limit.to_string();

        let response: SearchResponse =
            get_json(&self.http, DEEZER, &url, &[("q", &query), ("limit", &limit)]).await?;

        let records: Vec<_> = response
            .data
            .into_iter()
            .take(self.limit)
            .map(|track| track.into_record(artist))
            .collect();

        debug!(provider = DEEZER, results = records.len(), "Track search complete");
        Ok(records)
    }
}

#[async_trait]
impl MetadataProvider for DeezerClient {
    fn name(&self) -> &'static str {
        DEEZER
    }

    async fn search(&self, artist: &str, title: &str) -> Vec<MetadataRecord> {
        self.search_tracks(artist, title).await.unwrap_or_else(|e| {
            warn!(provider = DEEZER, error = %e, "Search failed");
            Vec::new()
        })
    }
}
