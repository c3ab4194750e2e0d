use std::path::PathBuf;

use crate::{config, error::CacheError, types::CatalogListing, url::UrlKind};

/// Keeps raw catalog listings on disk so a discography can be filtered
/// again without refetching it.
///
/// Listings live under `<data dir>/cache/{kind}/{id}.json`.
pub struct CatalogCacheManager {
    kind: UrlKind,
    id: String,
    root: PathBuf,
    listing: Option<CatalogListing>,
}

impl CatalogCacheManager {
    pub fn new(kind: UrlKind, id: String, listing: Option<CatalogListing>) -> Self {
        let mut root = config::data_dir();
        root.push("cache");
        Self {
            kind,
            id,
            root,
            listing,
        }
    }

    /// Uses `root` instead of the per-user cache directory.
    pub fn with_root(mut self, root: PathBuf) -> Self {
        self.root = root;
        self
    }

    pub async fn load_from_cache(&self) -> Result<Self, CacheError> {
        let content = async_fs::read_to_string(self.get_path()).await?;
        let listing: CatalogListing = serde_json::from_str(&content)?;
        Ok(Self {
            kind: self.kind,
            id: self.id.clone(),
            root: self.root.clone(),
            listing: Some(listing),
        })
    }

    /// Writes the held listing. Without one there is nothing to write.
    pub async fn save_to_cache(&self) -> Result<(), CacheError> {
        let Some(listing) = &self.listing else {
            return Ok(());
        };

        let path = self.get_path();
        if let Some(parent) = path.parent() {
            async_fs::create_dir_all(parent).await?;
        }

        let json = serde_json::to_string_pretty(listing)?;
        async_fs::write(&path, json).await?;
        Ok(())
    }

    pub fn get_listing(&self) -> Option<&CatalogListing> {
        self.listing.as_ref()
    }

    pub fn into_listing(self) -> Option<CatalogListing> {
        self.listing
    }

    fn get_path(&self) -> PathBuf {
        let mut path = self.root.clone();
        path.push(format!(
            "{kind}/{id}.json",
            kind = self.kind,
            id = self.id
        ));
        path
    }
}
