//! MusicBrainz and Cover Art Archive response shapes.

use serde::Deserialize;

#[derive(Debug, Default, Deserialize)]
pub(crate) struct RecordingSearch {
    #[serde(default)]
    pub recordings: Vec<Recording>,
}

#[derive(Debug, Clone, Default, Deserialize)]
pub(crate) struct Recording {
    pub id: String,
    #[serde(default)]
    pub title: String,
    #[serde(default)]
    pub releases: Vec<Release>,
    #[serde(default)]
    pub tags: Vec<Tag>,
}

#[derive(Debug, Clone, Default, Deserialize)]
pub(crate) struct Release {
    #[serde(default)]
    pub id: Option<String>,
    #[serde(default)]
    pub title: String,
    /// Present only when the release carries a date field
    #[serde(default)]
    pub date: Option<String>,
}

#[derive(Debug, Clone, Deserialize)]
pub(crate) struct Tag {
    pub name: String,
}

#[derive(Debug, Deserialize)]
pub(crate) struct ReleaseLookup {
    #[serde(default)]
    pub media: Vec<Medium>,
}

#[derive(Debug, Deserialize)]
pub(crate) struct Medium {
    #[serde(default)]
    pub tracks: Vec<Track>,
}

#[derive(Debug, Deserialize)]
pub(crate) struct Track {
    #[serde(default)]
    pub number: Option<String>,
    #[serde(default)]
    pub position: Option<u32>,
    pub recording: TrackRecording,
}

#[derive(Debug, Deserialize)]
pub(crate) struct TrackRecording {
    pub id: String,
}

#[derive(Debug, Deserialize)]
pub(crate) struct CoverArtListing {
    #[serde(default)]
    pub images: Vec<CoverArtImage>,
}

#[derive(Debug, Deserialize)]
pub(crate) struct CoverArtImage {
    #[serde(default)]
    pub front: bool,
    pub image: String,
}
