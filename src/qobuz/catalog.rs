use super::QobuzClient;
use crate::{
    error::ApiError,
    types::{CatalogListing, CatalogPage, PlaylistListing, PlaylistPage},
    url::UrlKind,
};

const PAGE_SIZE: u64 = 500;

impl QobuzClient {
    /// Fetches every release of an artist.
    pub async fn artist_catalog(&self, artist_id: &str) -> Result<CatalogListing, ApiError> {
        self.catalog(UrlKind::Artist, artist_id).await
    }

    /// Fetches every release of a label.
    pub async fn label_catalog(&self, label_id: &str) -> Result<CatalogListing, ApiError> {
        self.catalog(UrlKind::Label, label_id).await
    }

    /// Walks `artist/get` or `label/get` 500 releases at a time.
    ///
    /// The total comes from `albums_count` on the first page, falling back to
    /// `albums.total`; an empty page ends the walk early.
    async fn catalog(&self, kind: UrlKind, id: &str) -> Result<CatalogListing, ApiError> {
        let endpoint = format!("{}/get", kind);
        let id_key = format!("{}_id", kind);

        let mut offset: u64 = 0;
        let mut name = String::new();
        let mut items = Vec::new();

        loop {
            let page: CatalogPage = self
                .get_json(
                    &endpoint,
                    &[
                        (id_key.as_str(), id.to_string()),
                        ("extra", "albums".to_string()),
                        ("limit", PAGE_SIZE.to_string()),
                        ("offset", offset.to_string()),
                    ],
                )
                .await?;

            if offset == 0 {
                name = page.name.clone();
            }

            let total = page.albums_count.or(page.albums.total).unwrap_or(0);
            let fetched = page.albums.items.len() as u64;
            items.extend(page.albums.items);
            offset += PAGE_SIZE;

            if fetched == 0 || offset >= total {
                break;
            }
        }

        Ok(CatalogListing {
            kind,
            id: id.to_string(),
            name,
            items,
        })
    }

    /// Fetches every track of a playlist, 500 at a time.
    pub async fn playlist(&self, playlist_id: &str) -> Result<PlaylistListing, ApiError> {
        let mut offset: u64 = 0;
        let mut name = String::new();
        let mut tracks = Vec::new();

        loop {
            let page: PlaylistPage = self
                .get_json(
                    "playlist/get",
                    &[
                        ("playlist_id", playlist_id.to_string()),
                        ("extra", "tracks".to_string()),
                        ("limit", PAGE_SIZE.to_string()),
                        ("offset", offset.to_string()),
                    ],
                )
                .await?;

            if offset == 0 {
                name = page.name.clone();
            }

            let total = page.tracks_count.or(page.tracks.total).unwrap_or(0);
            let fetched = page.tracks.items.len() as u64;
            tracks.extend(page.tracks.items);
            offset += PAGE_SIZE;

            if fetched == 0 || offset >= total {
                break;
            }
        }

        Ok(PlaylistListing {
            id: playlist_id.to_string(),
            name,
            tracks,
        })
    }
}
