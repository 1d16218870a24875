//! SongTag Engine
//!
//! The entry point a presentation layer drives. It ties together provider
//! aggregation, cover art resolution and tag persistence:
//!
//! - **Fetch**: query providers for an artist/title pair and get candidates
//!   sorted by year
//! - **Read tags**: current tags and cover of an MP3 or Opus file
//! - **Write tags**: apply a chosen record (and cover) in the background, with
//!   progress events
//! - **Covers**: download a record's cover or load a local image
//!
//! # Example
//!
//! ```ignore
//! use songtag_engine::{parse_artist_title, TaggerEngine, WriteEvent};
//!
//! #[tokio::main]
//! async fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     let engine = TaggerEngine::from_env()?;
//!     let path = "/music/Queen - Bohemian Rhapsody.mp3";
//!
//!     let (artist, title) = parse_artist_title(path).unwrap_or_default();
//!     let candidates = engine.fetch(&artist, &title, true).await?;
//!
//!     if let Some(best) = candidates.first() {
//!         let cover = engine.download_record_cover(best).await;
//!         let mut events = engine.write_tags(path, best, cover)?;
//!         while let Some(event) = events.recv().await {
//!             if let WriteEvent::Finished(outcome) = event {
//!                 println!("{}", outcome.message);
//!             }
//!         }
//!     }
//!
//!     Ok(())
//! }
//! ```

mod engine;
mod guard;

pub use engine::TaggerEngine;

// Re-export the types that cross the engine boundary
pub use songtag_core::{
    parse_artist_title, CoverImage, MetadataRecord, Result, SongTagError, NOT_AVAILABLE,
};
pub use songtag_providers::{FetchProgress, ProviderConfig};
pub use songtag_tags::{TagSnapshot, WriteEvent, WriteOutcome, WriteStage};
