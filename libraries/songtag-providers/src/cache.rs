//! Per-fetch memoization of release track listings.

use std::collections::HashMap;

/// Tracks of one medium (disc, side, ...) of a release
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MediumTracks {
    /// `(recording id, track number)` pairs in listing order
    pub tracks: Vec<(String, String)>,
}

/// Detailed medium/track listing of a release
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ReleaseDetail {
    pub media: Vec<MediumTracks>,
}

impl ReleaseDetail {
    /// Track number of a recording on this release.
    ///
    /// Returns the first match across all media in order.
    pub fn track_number(&self, recording_id: &str) -> Option<&str> {
        self.media
            .iter()
            .flat_map(|medium| medium.tracks.iter())
            .find(|(id, _)| id == recording_id)
            .map(|(_, number)| number.as_str())
    }
}

/// Release details fetched during one aggregation request.
///
/// Created per fetch and dropped with it; never shared across requests.
/// Failed lookups are remembered as `None` so a release is requested at most
/// once per fetch.
#[derive(Debug, Default)]
pub struct ReleaseDetailCache {
    entries: HashMap<String, Option<ReleaseDetail>>,
}

impl ReleaseDetailCache {
    pub fn new() -> Self {
        Self::default()
    }

    /// Whether a lookup (successful or not) was already recorded
    pub fn contains(&self, release_id: &str) -> bool {
        self.entries.contains_key(release_id)
    }

    /// Cached detail for a release, if it was fetched successfully
    pub fn get(&self, release_id: &str) -> Option<&ReleaseDetail> {
        self.entries.get(release_id).and_then(Option::as_ref)
    }

    pub fn insert(&mut self, release_id: impl Into<String>, detail: Option<ReleaseDetail>) {
        self.entries.insert(release_id.into(), detail);
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}
