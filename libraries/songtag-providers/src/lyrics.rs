//! lyrics.ovh lookup, used only to confirm a song exists.

use crate::error::Result;
use crate::provider::{get_json, MetadataProvider};
use async_trait::async_trait;
use reqwest::Client;
use serde::Deserialize;
use songtag_core::{MetadataRecord, LYRICS_ONLY_SUFFIX};
use tracing::{debug, warn};

/// Source name of lyrics.ovh records
pub const LYRICS_OVH: &str = "lyrics.ovh";

#[derive(Debug, Deserialize)]
struct LyricsResponse {
    #[serde(default)]
    lyrics: Option<String>,
}

/// lyrics.ovh client.
///
/// A hit yields exactly one record carrying only the input artist and title.
pub struct LyricsClient {
    http: Client,
    base_url: String,
}

impl LyricsClient {
    pub fn new(http: Client, base_url: impl Into<String>) -> Self {
        Self {
            http,
            base_url: base_url.into().trim_end_matches('/').to_string(),
        }
    }

    async fn lookup(&self, artist: &str, title: &str) -> Result<Vec<MetadataRecord>> {
        let url = format!(
            "{}/v1/{}/{}",
            self.base_url,
            urlencoding::encode(artist),
            urlencoding::encode(title)
        );

        let response: LyricsResponse = get_json(&self.http, LYRICS_OVH, &url, &[]).await?;

        if response.lyrics.is_some_and(|lyrics| !lyrics.trim().is_empty()) {
            debug!(provider = LYRICS_OVH, "Lyrics found");
            Ok(vec![MetadataRecord::new(artist, title)
                .with_source(format!("{LYRICS_OVH} {LYRICS_ONLY_SUFFIX}"))])
        } else {
            Ok(Vec::new())
        }
    }
}

#[async_trait]
impl MetadataProvider for LyricsClient {
    fn name(&self) -> &'static str {
        LYRICS_OVH
    }

    async fn search(&self, artist: &str, title: &str) -> Vec<MetadataRecord> {
        self.lookup(artist, title).await.unwrap_or_else(|e| {
            warn!(provider = LYRICS_OVH, error = %e, "Lookup failed");
            Vec::new()
        })
    }
}
