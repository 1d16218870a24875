//! Provider fan-out and result merging.

use crate::audiodb::AudioDbClient;
use crate::cache::ReleaseDetailCache;
use crate::config::ProviderConfig;
use crate::deezer::DeezerClient;
use crate::error::Result;
use crate::lyrics::LyricsClient;
use crate::musicbrainz::{MusicBrainzClient, COVER_ART_ARCHIVE};
use crate::provider::{CatalogProvider, MetadataProvider};
use futures_util::future::join_all;
use songtag_core::MetadataRecord;
use tracing::{debug, info};

/// Checkpoints reported while a fetch runs
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FetchProgress {
    /// A provider is about to be queried
    QueryingProvider(&'static str),
    /// Cover art is being looked up for this many primary records
    ResolvingCoverArt { pending: usize },
    /// Aggregation finished with this many records
    Finished { count: usize },
}

/// Queries every enabled provider and concatenates their records.
///
/// Order of the output is: primary catalog records (cover-enriched where
/// possible), then each secondary provider's records in registration order,
/// then the fallback's single record if nothing else matched. Records are
/// neither de-duplicated nor sorted here.
pub struct MetadataAggregator {
    primary: Box<dyn CatalogProvider>,
    secondary: Vec<Box<dyn MetadataProvider>>,
    fallback: Box<dyn MetadataProvider>,
}

impl MetadataAggregator {
    /// Build the default provider set (MusicBrainz, TheAudioDB, Deezer,
    /// lyrics.ovh) sharing one HTTP client.
    pub fn new(config: &ProviderConfig) -> Result<Self> {
        config.validate()?;
        let http = config.http_client()?;

        let primary = MusicBrainzClient::new(
            http.clone(),
            config.musicbrainz_url.clone(),
            config.cover_art_url.clone(),
        );
        let audiodb = AudioDbClient::new(http.clone(), config.audiodb_url.clone());
        let deezer = DeezerClient::new(http.clone(), config.deezer_url.clone(), config.deezer_limit);
        let lyrics = LyricsClient::new(http, config.lyrics_url.clone());

        Ok(Self::with_providers(
            Box::new(primary),
            vec![Box::new(audiodb), Box::new(deezer)],
            Box::new(lyrics),
        ))
    }

    /// Build an aggregator over explicit providers
    pub fn with_providers(
        primary: Box<dyn CatalogProvider>,
        secondary: Vec<Box<dyn MetadataProvider>>,
        fallback: Box<dyn MetadataProvider>,
    ) -> Self {
        Self {
            primary,
            secondary,
            fallback,
        }
    }

    pub async fn fetch(&self, artist: &str, title: &str, use_secondary: bool) -> Vec<MetadataRecord> {
        self.fetch_with_progress(artist, title, use_secondary, |_| {})
            .await
    }

    /// Fetch candidates, reporting checkpoints through `on_progress`.
    pub async fn fetch_with_progress<F>(
        &self,
        artist: &str,
        title: &str,
        use_secondary: bool,
        mut on_progress: F,
    ) -> Vec<MetadataRecord>
    where
        F: FnMut(FetchProgress) + Send,
    {
        info!(artist = %artist, title = %title, use_secondary, "Fetching metadata");

        let mut cache = ReleaseDetailCache::new();

        on_progress(FetchProgress::QueryingProvider(self.primary.name()));
        let mut records = self
            .primary
            .search_recordings(artist, title, &mut cache)
            .await;
        debug!(
            provider = self.primary.name(),
            results = records.len(),
            releases_cached = cache.len(),
            "Primary search complete"
        );

        let pending = records.iter().filter(|r| r.release_id.is_some()).count();
        if pending > 0 {
            on_progress(FetchProgress::ResolvingCoverArt { pending });
            self.attach_cover_art(&mut records).await;
        }

        if use_secondary {
            for provider in &self.secondary {
                on_progress(FetchProgress::QueryingProvider(provider.name()));
            }
            let results = join_all(
                self.secondary
                    .iter()
                    .map(|provider| provider.search(artist, title)),
            )
            .await;
            records.extend(results.into_iter().flatten());

            if records.is_empty() {
                on_progress(FetchProgress::QueryingProvider(self.fallback.name()));
                records.extend(self.fallback.search(artist, title).await);
            }
        }

        info!(count = records.len(), "Metadata fetch finished");
        on_progress(FetchProgress::Finished {
            count: records.len(),
        });

        records
    }

    /// Look up covers for every record with a release id, concurrently.
    async fn attach_cover_art(&self, records: &mut [MetadataRecord]) {
        let urls = join_all(records.iter().map(|record| async move {
            match record.release_id.as_deref() {
                Some(release_id) => self.primary.cover_art_url(release_id).await,
                None => None,
            }
        }))
        .await;

        for (record, url) in records.iter_mut().zip(urls) {
            if let Some(url) = url {
                record.cover_url = Some(url);
                record.source = format!("{} + {}", record.source, COVER_ART_ARCHIVE);
            }
        }
    }
}
