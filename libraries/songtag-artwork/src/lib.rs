//! SongTag Artwork - cover image resolution
//!
//! Resolves cover art into raw image buffers from two sources:
//!
//! - **Remote**: a cover URL attached to a metadata record, downloaded with a
//!   single timed GET. Failures are silent (`None`).
//! - **Local**: an image file picked by the user. Failures are reported as
//!   [`ArtworkError::LocalImageRead`].
//!
//! Every image is assumed to be JPEG; content is not sniffed.
//!
//! # Example
//!
//! ```no_run
//! use songtag_artwork::CoverArtResolver;
//!
//! # async fn example() -> Result<(), Box<dyn std::error::Error>> {
//! let resolver = CoverArtResolver::new()?;
//!
//! if let Some(cover) = resolver.download("https://example.com/front.jpg").await {
//!     println!("Downloaded {} bytes", cover.len());
//! }
//!
//! let local = resolver.load_local("cover.jpg")?;
//! println!("Loaded {} bytes, type: {}", local.len(), local.mime_type);
//! # Ok(())
//! # }
//! ```

mod error;
mod resolver;

// Re-export public API
pub use error::{ArtworkError, Result};
pub use resolver::{CoverArtResolver, DEFAULT_TIMEOUT, MAX_COVER_BYTES};
