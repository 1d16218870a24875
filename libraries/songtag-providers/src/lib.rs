//! SongTag Providers
//!
//! Metadata provider adapters and the aggregation pipeline for SongTag.
//!
//! # Features
//!
//! - **MusicBrainz**: recording search with release track lookups, genre tags
//!   and Cover Art Archive images
//! - **Secondary sources**: TheAudioDB and Deezer track search
//! - **Fallback**: lyrics.ovh, used only when nothing else matched
//! - **Aggregation**: provider fan-out with a per-fetch release cache
//!
//! Provider failures never surface as errors; a failing provider simply
//! contributes no records.
//!
//! # Example
//!
//! ```ignore
//! use songtag_providers::{MetadataAggregator, ProviderConfig};
//!
//! #[tokio::main]
//! async fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     let config = ProviderConfig::load()?;
//!     let aggregator = MetadataAggregator::new(&config)?;
//!
//!     let records = aggregator.fetch("Queen", "Bohemian Rhapsody", true).await;
//!     for record in &records {
//!         println!("{} - {} ({}) [{}]", record.artist, record.title, record.year, record.source);
//!     }
//!
//!     Ok(())
//! }
//! ```

mod aggregator;
mod audiodb;
mod cache;
mod config;
mod deezer;
mod error;
mod lyrics;
mod musicbrainz;
mod provider;

// Re-export main types
pub use aggregator::{FetchProgress, MetadataAggregator};
pub use cache::{MediumTracks, ReleaseDetail, ReleaseDetailCache};
pub use config::{ProviderConfig, DEFAULT_CONFIG_FILE};
pub use error::{ProviderError, Result};
pub use provider::{CatalogProvider, MetadataProvider};

// Re-export adapters for direct use if needed
pub use audiodb::{AudioDbClient, AUDIODB};
pub use deezer::{DeezerClient, DEEZER};
pub use lyrics::{LyricsClient, LYRICS_OVH};
pub use musicbrainz::{MusicBrainzClient, COVER_ART_ARCHIVE, MUSICBRAINZ};
