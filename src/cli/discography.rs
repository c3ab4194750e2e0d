use std::path::{Path, PathBuf};

use tabled::Table;

use super::{connect, spinner};
use crate::{
    Res,
    catalog::{CatalogItem, FilterOptions, admit_all, filter_discography},
    config::Settings,
    error, info,
    management::CatalogCacheManager,
    success,
    types::{CatalogListing, ReleaseTableRow},
    url::{UrlKind, resolve_target},
    warning,
};

pub struct DiscographyRequest {
    pub target: String,
    pub label: bool,
    pub save_space: bool,
    pub skip_extras: bool,
    pub all: bool,
    pub from_file: Option<PathBuf>,
    pub refresh: bool,
    pub ids: bool,
}

pub async fn discography(request: DiscographyRequest, settings: &Settings) {
    let default_kind = if request.label {
        UrlKind::Label
    } else {
        UrlKind::Artist
    };

    let (kind, id) = match resolve_target(&request.target, default_kind) {
        Ok((kind @ (UrlKind::Artist | UrlKind::Label), id)) => (kind, id),
        Ok((kind, _)) => error!(
            "A discography needs an artist or label, got a {} url. Use `qdlcli plan` for albums.",
            kind
        ),
        Err(e) => error!("{}. Use urls from https://play.qobuz.com!", e),
    };

    let listing = match load_listing(
        kind,
        &id,
        request.from_file.as_deref(),
        request.refresh,
        settings,
    )
    .await
    {
        Ok(listing) => listing,
        Err(e) => error!("Cannot load {} {}: {}", kind, id, e),
    };

    let (items, rejected) = admit_all(&listing.items);
    for e in &rejected {
        warning!("{}. Skipping...", e);
    }

    let total = items.len();
    let items = select_releases(
        items,
        &listing,
        !request.all,
        FilterOptions {
            save_space: request.save_space,
            skip_extras: request.skip_extras,
        },
        settings,
    );

    if request.ids {
        for item in &items {
            println!("{}", item.id);
        }
        return;
    }

    let rows: Vec<ReleaseTableRow> = items
        .iter()
        .map(|item| ReleaseTableRow {
            title: item.title.clone(),
            version: item.version.clone().unwrap_or_default(),
            artist: item.artist_name.clone(),
            quality: item.quality_label(),
            id: item.id.clone(),
        })
        .collect();

    println!(
        "{kind}: {name}\n{table}\n",
        kind = kind,
        name = listing.name,
        table = Table::new(rows)
    );
    success!("{} of {} releases kept.", items.len(), total);
}

/// Applies the smart discography filter and the albums-only rule.
///
/// `smart` and `options` are combined with the configured defaults.
pub(crate) fn select_releases(
    items: Vec<CatalogItem>,
    listing: &CatalogListing,
    smart: bool,
    options: FilterOptions,
    settings: &Settings,
) -> Vec<CatalogItem> {
    let smart = settings.smart_discography && smart;

    let mut items = match listing.kind {
        UrlKind::Artist if smart => filter_discography(
            &items,
            &listing.name,
            FilterOptions {
                save_space: options.save_space || settings.save_space,
                skip_extras: options.skip_extras || settings.skip_extras,
            },
        ),
        UrlKind::Label if smart => {
            info!("Smart discography filtering applies to artists only.");
            items
        }
        _ => items,
    };

    if settings.albums_only {
        items.retain(|item| {
            let keep = item.is_studio_album();
            if !keep {
                info!("Ignoring Single/EP/VA: {}", item.title);
            }
            keep
        });
    }

    items
}

/// Reads the listing from `--from-file`, the local cache, or the API, in
/// that order. Fresh listings are written back to the cache.
pub(crate) async fn load_listing(
    kind: UrlKind,
    id: &str,
    from_file: Option<&Path>,
    refresh: bool,
    settings: &Settings,
) -> Res<CatalogListing> {
    if let Some(path) = from_file {
        let content = async_fs::read_to_string(path).await?;
        return Ok(serde_json::from_str(&content)?);
    }

    let cache = CatalogCacheManager::new(kind, id.to_string(), None);
    if !refresh {
        if let Some(listing) = cache
            .load_from_cache()
            .await
            .ok()
            .and_then(|cached| cached.into_listing())
        {
            info!(
                "Using cached listing for {} {}. Pass --refresh to fetch it again.",
                kind, id
            );
            return Ok(listing);
        }
    }

    let client = connect(settings)?;
    let pb = spinner(format!("Fetching releases for {} {}...", kind, id));
    let fetched = match kind {
        UrlKind::Label => client.label_catalog(id).await,
        _ => client.artist_catalog(id).await,
    };
    pb.finish_and_clear();
    let listing = fetched?;

    info!(
        "Fetched {} releases from {} ({}).",
        listing.items.len(),
        listing.name,
        kind
    );

    if let Err(e) = CatalogCacheManager::new(kind, id.to_string(), Some(listing.clone()))
        .save_to_cache()
        .await
    {
        warning!("Cannot cache listing for {} {}: {}", kind, id, e);
    }

    Ok(listing)
}
