/// Inbound facade for presentation layers
use crate::guard::InFlightGuard;
use songtag_artwork::CoverArtResolver;
use songtag_core::{rank_by_year, CoverImage, MetadataRecord, Result, SongTagError};
use songtag_providers::{FetchProgress, MetadataAggregator, ProviderConfig};
use songtag_tags::{TagCodec, TagPersistenceWorker, TagSnapshot, WriteEvent, WriteRequest};
use std::path::{Path, PathBuf};
use std::sync::atomic::AtomicBool;
use std::sync::Arc;
use tokio::sync::mpsc;
use tracing::{debug, info};

/// Metadata lookup, cover resolution and tag persistence behind one type.
///
/// At most one fetch and one write run at a time; a second call of the same
/// kind fails with [`SongTagError::Busy`] while the first is in flight.
pub struct TaggerEngine {
    aggregator: MetadataAggregator,
    resolver: CoverArtResolver,
    codec: TagCodec,
    worker: TagPersistenceWorker,
    fetch_in_flight: Arc<AtomicBool>,
    write_in_flight: Arc<AtomicBool>,
}

impl TaggerEngine {
    /// Create an engine with the default providers
    pub fn new(config: &ProviderConfig) -> Result<Self> {
        let aggregator = MetadataAggregator::new(config)?;
        let resolver = CoverArtResolver::with_client(config.http_client()?);
        Ok(Self::from_parts(aggregator, resolver))
    }

    /// Create an engine from configuration found in `songtag.toml` and the
    /// environment
    pub fn from_env() -> Result<Self> {
        Self::new(&ProviderConfig::load()?)
    }

    pub fn from_parts(aggregator: MetadataAggregator, resolver: CoverArtResolver) -> Self {
        Self {
            aggregator,
            resolver,
            codec: TagCodec::new(),
            worker: TagPersistenceWorker::new(),
            fetch_in_flight: Arc::new(AtomicBool::new(false)),
            write_in_flight: Arc::new(AtomicBool::new(false)),
        }
    }

    /// Fetch candidates for a song, sorted by year (unknown years last)
    pub async fn fetch(
        &self,
        artist: &str,
        title: &str,
        use_secondary: bool,
    ) -> Result<Vec<MetadataRecord>> {
        self.fetch_with_progress(artist, title, use_secondary, |_| {})
            .await
    }

    /// Like [`Self::fetch`], reporting checkpoints through `on_progress`
    pub async fn fetch_with_progress<F>(
        &self,
        artist: &str,
        title: &str,
        use_secondary: bool,
        on_progress: F,
    ) -> Result<Vec<MetadataRecord>>
    where
        F: FnMut(FetchProgress) + Send,
    {
        let (artist, title) = validate_query(artist, title)?;
        let _guard = InFlightGuard::acquire(&self.fetch_in_flight, "fetch")?;

        let mut records = self
            .aggregator
            .fetch_with_progress(artist, title, use_secondary, on_progress)
            .await;
        rank_by_year(&mut records);

        Ok(records)
    }

    /// Read the tags and cover currently stored in a file
    pub fn read_tags(&self, path: impl AsRef<Path>) -> Result<TagSnapshot> {
        Ok(self.codec.read(path.as_ref())?)
    }

    /// Start writing a record (and optional cover) into a file.
    ///
    /// `"N/A"` values are treated as empty, so an unedited read result does not
    /// store the sentinel. Progress and the single terminal outcome arrive on
    /// the returned channel; the write slot is free again once the outcome is
    /// sent.
    ///
    /// Must be called from within a tokio runtime.
    pub fn write_tags(
        &self,
        path: impl Into<PathBuf>,
        record: &MetadataRecord,
        cover: Option<CoverImage>,
    ) -> Result<mpsc::UnboundedReceiver<WriteEvent>> {
        let guard = InFlightGuard::acquire(&self.write_in_flight, "write")?;

        let request = WriteRequest {
            path: path.into(),
            record: record.for_write(),
            cover,
        };
        info!(path = %request.path.display(), with_cover = request.cover.is_some(), "Writing tags");

        let mut inner_rx = self.worker.spawn(request);
        let (events, rx) = mpsc::unbounded_channel();

        tokio::spawn(async move {
            let mut guard = Some(guard);
            while let Some(event) = inner_rx.recv().await {
                if matches!(event, WriteEvent::Finished(_)) {
                    guard.take();
                }
                let _ = events.send(event);
            }
        });

        Ok(rx)
    }

    /// Download a cover image; `None` on any failure
    pub async fn download_cover(&self, url: &str) -> Option<CoverImage> {
        self.resolver.download(url).await
    }

    /// Download the cover attached to a record, if it has one
    pub async fn download_record_cover(&self, record: &MetadataRecord) -> Option<CoverImage> {
        let url = record.cover_url.as_deref()?;
        self.download_cover(url).await
    }

    /// Load a user-selected image file
    pub fn load_local_cover(&self, path: impl AsRef<Path>) -> Result<CoverImage> {
        Ok(self.resolver.load_local(path)?)
    }
}

/// Trim a query and reject empty parts
fn validate_query<'a>(artist: &'a str, title: &'a str) -> Result<(&'a str, &'a str)> {
    let artist = artist.trim();
    let title = title.trim();

    if artist.is_empty() {
        return Err(SongTagError::invalid_input("artist cannot be empty"));
    }
    if title.is_empty() {
        return Err(SongTagError::invalid_input("title cannot be empty"));
    }

    debug!(artist = %artist, title = %title, "Query validated");
    Ok((artist, title))
}
