use serde::{Deserialize, Serialize};
use serde_json::Value;
use tabled::Tabled;

use crate::url::UrlKind;

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ArtistRef {
    #[serde(default)]
    pub id: Option<Value>,
    pub name: String,
}

/// One page of `artist/get` or `label/get` with `extra=albums`.
///
/// Releases are kept as raw JSON so that each one can be admitted (or
/// rejected) individually instead of failing the whole page.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CatalogPage {
    pub name: String,
    #[serde(default)]
    pub albums_count: Option<u64>,
    pub albums: AlbumsContainer,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AlbumsContainer {
    pub items: Vec<Value>,
    #[serde(default)]
    pub total: Option<u64>,
}

/// A complete artist or label listing as fetched from the service or
/// loaded from the local cache.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CatalogListing {
    pub kind: UrlKind,
    pub id: String,
    pub name: String,
    pub items: Vec<Value>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AlbumMeta {
    pub id: String,
    pub title: String,
    #[serde(default)]
    pub version: Option<String>,
    pub artist: ArtistRef,
    #[serde(default)]
    pub release_date_original: Option<String>,
    #[serde(default)]
    pub release_type: Option<String>,
    #[serde(default)]
    pub streamable: Option<bool>,
    /// Absent when the album is embedded in a track or playlist entry.
    #[serde(default)]
    pub tracks: TracksContainer,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct TracksContainer {
    pub items: Vec<TrackMeta>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TrackMeta {
    pub id: u64,
    pub title: String,
    #[serde(default)]
    pub version: Option<String>,
    pub track_number: u32,
    #[serde(default)]
    pub media_number: Option<u32>,
    #[serde(default)]
    pub performer: Option<ArtistRef>,
    #[serde(default)]
    pub maximum_bit_depth: Option<u32>,
    #[serde(default)]
    pub maximum_sampling_rate: Option<f64>,
}

/// A track together with the album it belongs to, as returned by
/// `track/get` and inside playlist listings.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TrackDetail {
    #[serde(flatten)]
    pub track: TrackMeta,
    pub album: AlbumMeta,
}

/// One page of `playlist/get` with `extra=tracks`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PlaylistPage {
    pub name: String,
    #[serde(default)]
    pub tracks_count: Option<u64>,
    pub tracks: PlaylistTracks,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PlaylistTracks {
    pub items: Vec<TrackDetail>,
    #[serde(default)]
    pub total: Option<u64>,
}

#[derive(Debug, Clone)]
pub struct PlaylistListing {
    pub id: String,
    pub name: String,
    pub tracks: Vec<TrackDetail>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Restriction {
    pub code: String,
}

/// Response of `track/getFileUrl`.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct TrackFileUrl {
    #[serde(default)]
    pub url: Option<String>,
    #[serde(default)]
    pub bit_depth: Option<u32>,
    #[serde(default)]
    pub sampling_rate: Option<f64>,
    #[serde(default)]
    pub restrictions: Option<Vec<Restriction>>,
    #[serde(default)]
    pub sample: Option<bool>,
}

impl TrackFileUrl {
    /// Previews come back with a `sample` key; they are never downloaded.
    pub fn is_sample(&self) -> bool {
        self.sample.is_some()
    }
}

#[derive(Tabled)]
pub struct ReleaseTableRow {
    pub title: String,
    pub version: String,
    pub artist: String,
    pub quality: String,
    pub id: String,
}

#[derive(Tabled)]
pub struct PlanTableRow {
    pub track: String,
    pub quality: String,
    pub file: String,
}

#[derive(Tabled)]
pub struct QualityTableRow {
    pub id: u8,
    pub quality: String,
    pub default: String,
}

#[derive(Tabled)]
pub struct ResolvedUrlTableRow {
    pub kind: String,
    pub id: String,
    pub url: String,
}

#[derive(Tabled)]
pub struct SearchTableRow {
    pub result: String,
    pub url: String,
}
