//! MusicBrainz catalog adapter with Cover Art Archive lookups.
//!
//! A search resolves each recording in two steps: [`MusicBrainzClient::resolve_recording`]
//! picks a release and looks up album, year and track number, then
//! [`MusicBrainzClient::enrich_genre`] fills in the genre, re-fetching the
//! recording with tags when the search result carried none.

mod model;

use crate::cache::{MediumTracks, ReleaseDetail, ReleaseDetailCache};
use crate::error::Result;
use crate::provider::{get_json, CatalogProvider, MetadataProvider};
use async_trait::async_trait;
use model::{CoverArtListing, Recording, RecordingSearch, Release, ReleaseLookup, Tag};
use reqwest::Client;
use songtag_core::MetadataRecord;
use tracing::{debug, warn};

/// Source name of MusicBrainz records
pub const MUSICBRAINZ: &str = "MusicBrainz";

/// Appended to the source of records whose cover came from the archive
pub const COVER_ART_ARCHIVE: &str = "Cover Art Archive";

/// MusicBrainz web service client.
pub struct MusicBrainzClient {
    http: Client,
    base_url: String,
    cover_art_url: String,
}

impl MusicBrainzClient {
    /// Create a client for the given web service and cover archive base URLs.
    pub fn new(
        http: Client,
        base_url: impl Into<String>,
        cover_art_url: impl Into<String>,
    ) -> Self {
        Self {
            http,
            base_url: base_url.into().trim_end_matches('/').to_string(),
            cover_art_url: cover_art_url.into().trim_end_matches('/').to_string(),
        }
    }

    async fn search_raw(&self, artist: &str, title: &str) -> Result<Vec<Recording>> {
        let url = format!("{}/recording", self.base_url);
        let query = format!(
            "artist:\"{}\" AND recording:\"{}\"",
            escape_phrase(artist),
            escape_phrase(title)
        );

        let search: RecordingSearch =
            get_json(&self.http, MUSICBRAINZ, &url, &[("query", &query), ("fmt", "json")]).await?;

        debug!(
            provider = MUSICBRAINZ,
            recordings = search.recordings.len(),
            "Recording search complete"
        );

        Ok(search.recordings)
    }

    async fn fetch_release(&self, release_id: &str) -> Result<ReleaseDetail> {
        let url = format!("{}/release/{}", self.base_url, release_id);
        let lookup: ReleaseLookup = get_json(
            &self.http,
            MUSICBRAINZ,
            &url,
            &[("inc", "recordings"), ("fmt", "json")],
        )
        .await?;

        let media = lookup
            .media
            .into_iter()
            .map(|medium| MediumTracks {
                tracks: medium
                    .tracks
                    .into_iter()
                    .map(|track| {
                        let number = track
                            .number
                            .filter(|n| !n.is_empty())
                            .or_else(|| track.position.map(|p| p.to_string()))
                            .unwrap_or_default();
                        (track.recording.id, number)
                    })
                    .collect(),
            })
            .collect();

        Ok(ReleaseDetail { media })
    }

    async fn fetch_recording_tags(&self, recording_id: &str) -> Result<Vec<Tag>> {
        let url = format!("{}/recording/{}", self.base_url, recording_id);
        let recording: Recording =
            get_json(&self.http, MUSICBRAINZ, &url, &[("inc", "tags"), ("fmt", "json")]).await?;
        Ok(recording.tags)
    }

    /// Track number of `recording_id` on a release, fetching the release
    /// listing once per cache.
    async fn track_number(
        &self,
        release_id: &str,
        recording_id: &str,
        cache: &mut ReleaseDetailCache,
    ) -> String {
        if !cache.contains(release_id) {
            let detail = match self.fetch_release(release_id).await {
                Ok(detail) => Some(detail),
                Err(e) => {
                    warn!(provider = MUSICBRAINZ, release_id = %release_id, error = %e, "Release lookup failed");
                    None
                }
            };
            cache.insert(release_id, detail);
        }

        cache
            .get(release_id)
            .and_then(|detail| detail.track_number(recording_id))
            .map(str::to_string)
            .unwrap_or_default()
    }

    /// Build a record from a recording's chosen release.
    ///
    /// Genre is left empty; see [`Self::enrich_genre`].
    pub(crate) async fn resolve_recording(
        &self,
        artist: &str,
        recording: &Recording,
        cache: &mut ReleaseDetailCache,
    ) -> MetadataRecord {
        let mut record = MetadataRecord::new(artist, recording.title.clone()).with_source(MUSICBRAINZ);

        let Some(release) = choose_release(&recording.releases) else {
            return record;
        };

        record.album = release.title.clone();
        record.year = year_prefix(release.date.as_deref());

        if let Some(release_id) = release.id.as_deref().filter(|id| !id.is_empty()) {
            record.track = self.track_number(release_id, &recording.id, cache).await;
            record.release_id = Some(release_id.to_string());
        }

        record
    }

    /// Comma-joined tag names of a recording.
    ///
    /// A recording without tags is looked up again by id with tags requested,
    /// and that result replaces the search result's (empty) tag list.
    pub(crate) async fn enrich_genre(&self, recording: &Recording) -> String {
        if !recording.tags.is_empty() {
            return join_tags(&recording.tags);
        }

        match self.fetch_recording_tags(&recording.id).await {
            Ok(tags) => join_tags(&tags),
            Err(e) => {
                debug!(provider = MUSICBRAINZ, recording_id = %recording.id, error = %e, "Tag lookup failed");
                String::new()
            }
        }
    }

    async fn cover_art_listing(&self, release_id: &str) -> Result<CoverArtListing> {
        let url = format!("{}/release/{}", self.cover_art_url, release_id);
        get_json(&self.http, COVER_ART_ARCHIVE, &url, &[]).await
    }
}

#[async_trait]
impl CatalogProvider for MusicBrainzClient {
    fn name(&self) -> &'static str {
        MUSICBRAINZ
    }

    async fn search_recordings(
        &self,
        artist: &str,
        title: &str,
        cache: &mut ReleaseDetailCache,
    ) -> Vec<MetadataRecord> {
        let recordings = match self.search_raw(artist, title).await {
            Ok(recordings) => recordings,
            Err(e) => {
                warn!(provider = MUSICBRAINZ, error = %e, "Search failed");
                return Vec::new();
            }
        };

        let mut records = Vec::with_capacity(recordings.len());
        for recording in &recordings {
            let record = self.resolve_recording(artist, recording, cache).await;
            let genre = self.enrich_genre(recording).await;
            records.push(record.with_genre(genre));
        }

        records
    }

    async fn cover_art_url(&self, release_id: &str) -> Option<String> {
        match self.cover_art_listing(release_id).await {
            Ok(listing) => pick_cover(listing),
            Err(e) => {
                debug!(provider = COVER_ART_ARCHIVE, release_id = %release_id, error = %e, "No cover art");
                None
            }
        }
    }
}

#[async_trait]
impl MetadataProvider for MusicBrainzClient {
    fn name(&self) -> &'static str {
        MUSICBRAINZ
    }

    /// Search with a cache private to this call
    async fn search(&self, artist: &str, title: &str) -> Vec<MetadataRecord> {
        let mut cache = ReleaseDetailCache::new();
        self.search_recordings(artist, title, &mut cache).await
    }
}

/// First release carrying a date field, else the first release.
pub(crate) fn choose_release(releases: &[Release]) -> Option<&Release> {
    releases
        .iter()
        .find(|release| release.date.is_some())
        .or_else(|| releases.first())
}

/// Four leading digits of a date, or empty.
pub(crate) fn year_prefix(date: Option<&str>) -> String {
    match date {
        Some(date) if date.len() >= 4 && date.as_bytes()[..4].iter().all(u8::is_ascii_digit) => {
            date[..4].to_string()
        }
        _ => String::new(),
    }
}

fn pick_cover(listing: CoverArtListing) -> Option<String> {
    let mut images = listing.images;
    let index = images.iter().position(|image| image.front).unwrap_or(0);
    if index < images.len() {
        Some(images.swap_remove(index).image)
    } else {
        None
    }
}

fn join_tags(tags: &[Tag]) -> String {
    tags.iter()
        .map(|tag| tag.name.as_str())
        .collect::<Vec<_>>()
        .join(", ")
}

/// Escape a value for use inside a quoted Lucene phrase
fn escape_phrase(value: &str) -> String {
    value.replace('\\', "\\\\").replace('"', "\\\"")
}
