use std::path::{Path, PathBuf};

use super::{
    connect,
    discography::{load_listing, select_releases},
    spinner, transfer_bar,
};
use crate::{
    Res,
    catalog::{FilterOptions, admit_all, is_studio_release},
    config::{self, Settings},
    download::{AlbumPlan, PlanOutcome, TrackStatus, build_album_plan, download_file, negotiate_tracks},
    error,
    format::{QualityTier, display_title, sanitize_filename},
    info,
    qobuz::QobuzClient,
    success,
    types::{AlbumMeta, TrackDetail, TracksContainer},
    url::{UrlKind, resolve_target},
    warning,
};

pub struct DownloadRequest {
    pub targets: Vec<String>,
    pub quality: Option<QualityTier>,
    pub no_fallback: bool,
    /// Overrides the configured download directory.
    pub directory: Option<PathBuf>,
}

#[derive(Debug, Default)]
struct Tally {
    downloaded: usize,
    existing: usize,
    failed: usize,
}

struct Downloader<'a> {
    client: QobuzClient,
    settings: &'a Settings,
    tier: QualityTier,
    allow_fallback: bool,
    tally: Tally,
}

/// Downloads every target into the download directory.
///
/// Bare ids are taken as album ids. Artists and labels go through the same
/// selection as `discography` and land in a folder named after them, as do
/// the tracks of a playlist. A target that cannot be fetched is skipped
/// with a warning.
pub async fn download(request: DownloadRequest, settings: &Settings) {
    let client = match connect(settings) {
        Ok(client) => client,
        Err(e) => error!(
            "{}. Add it to {}",
            e,
            config::data_dir().join(".env").display()
        ),
    };

    let root = request
        .directory
        .unwrap_or_else(|| settings.download_dir.clone());

    let mut downloader = Downloader {
        client,
        settings,
        tier: request.quality.unwrap_or(settings.quality),
        allow_fallback: settings.quality_fallback && !request.no_fallback,
        tally: Tally::default(),
    };

    for target in &request.targets {
        let (kind, id) = match resolve_target(target, UrlKind::Album) {
            Ok(resolved) => resolved,
            Err(e) => {
                warning!("{}. Skipping {}", e, target);
                continue;
            }
        };

        if let Err(e) = downloader.target(kind, &id, &root).await {
            warning!("Cannot download {} {}: {}", kind, id, e);
        }
    }

    let tally = downloader.tally;
    if tally.failed > 0 {
        warning!("{} tracks could not be downloaded.", tally.failed);
    }
    success!(
        "Completed. {} downloaded, {} already present in {}.",
        tally.downloaded,
        tally.existing,
        root.display()
    );
}

impl Downloader<'_> {
    async fn target(&mut self, kind: UrlKind, id: &str, root: &Path) -> Res<()> {
        match kind {
            UrlKind::Album => {
                let pb = spinner(format!("Fetching album {}...", id));
                let album = self.client.album(id).await;
                pb.finish_and_clear();
                self.album(album?, root).await;
            }
            UrlKind::Track => {
                let pb = spinner(format!("Fetching track {}...", id));
                let detail = self.client.track(id).await;
                pb.finish_and_clear();
                self.release(single_track_release(detail?), root).await;
            }
            UrlKind::Artist | UrlKind::Label => self.catalog(kind, id, root).await?,
            UrlKind::Playlist => self.playlist(id, root).await?,
        }
        Ok(())
    }

    async fn catalog(&mut self, kind: UrlKind, id: &str, root: &Path) -> Res<()> {
        let listing = load_listing(kind, id, None, false, self.settings).await?;

        let (items, rejected) = admit_all(&listing.items);
        for e in &rejected {
            warning!("{}. Skipping...", e);
        }
        let items = select_releases(
            items,
            &listing,
            true,
            FilterOptions::default(),
            self.settings,
        );

        let dir = root.join(sanitize_filename(&listing.name));
        info!(
            "Downloading {} releases of {} into {}",
            items.len(),
            listing.name,
            dir.display()
        );

        for item in &items {
            let pb = spinner(format!("Fetching album {}...", item.id));
            let album = self.client.album(&item.id).await;
            pb.finish_and_clear();
            match album {
                Ok(album) => self.album(album, &dir).await,
                Err(e) => warning!("Error getting release {}: {}", item.id, e),
            }
        }
        Ok(())
    }

    async fn playlist(&mut self, id: &str, root: &Path) -> Res<()> {
        let pb = spinner(format!("Fetching playlist {}...", id));
        let playlist = self.client.playlist(id).await;
        pb.finish_and_clear();
        let playlist = playlist?;

        let dir = root.join(sanitize_filename(&playlist.name));
        info!(
            "Downloading {} tracks of {} into {}",
            playlist.tracks.len(),
            playlist.name,
            dir.display()
        );

        for detail in playlist.tracks {
            self.release(single_track_release(detail), &dir).await;
        }
        Ok(())
    }

    /// Full album releases must be streamable and, with albums-only set,
    /// studio albums.
    async fn album(&mut self, album: AlbumMeta, root: &Path) {
        let title = display_title(&album.title, album.version.as_deref());
        if album.streamable != Some(true) {
            warning!("{} is not streamable. Skipping...", title);
            return;
        }
        if self.settings.albums_only
            && !is_studio_release(album.release_type.as_deref(), &album.artist.name)
        {
            info!("Ignoring Single/EP/VA: {}", title);
            return;
        }

        self.release(album, root).await;
    }

    async fn release(&mut self, album: AlbumMeta, root: &Path) {
        let title = display_title(&album.title, album.version.as_deref());

        let pb = spinner(format!("Resolving files for {}...", title));
        let statuses = negotiate_tracks(&self.client, &album.tracks.items, self.tier, true).await;
        pb.finish_and_clear();

        let negotiated = statuses
            .into_iter()
            .filter_map(|status| match status {
                TrackStatus::Ready(track) => Some(track),
                TrackStatus::Sample(track) => {
                    info!("Demo. Skipping {}", track.title);
                    None
                }
            })
            .collect();

        let plan = match build_album_plan(
            &album,
            negotiated,
            &self.settings.folder_format,
            &self.settings.track_format,
            self.allow_fallback,
        ) {
            PlanOutcome::Ready(plan) => plan,
            PlanOutcome::NoTracks => {
                warning!("{} has no downloadable tracks.", title);
                return;
            }
            PlanOutcome::BelowQuality(_) => {
                info!("Skipping {} as it doesn't meet quality requirement", title);
                return;
            }
        };

        if !plan.decision.quality_met {
            warning!(
                "{} is not available for {}, falling back to {}.",
                self.tier,
                plan.title,
                plan.decision.quality_label()
            );
        }
        info!(
            "Downloading: {}\nQuality: {} ({})",
            plan.title,
            plan.decision.delivered_format,
            plan.decision.quality_label()
        );

        self.fetch(&plan, &root.join(&plan.folder)).await;
    }

    async fn fetch(&mut self, plan: &AlbumPlan, dir: &Path) {
        for planned in &plan.tracks {
            let dest = dir.join(&planned.path);
            if dest.is_file() {
                info!("{} was already downloaded", planned.track.title);
                self.tally.existing += 1;
                continue;
            }

            let Some(url) = planned.url.as_deref() else {
                warning!("Track not available for download: {}", planned.track.title);
                self.tally.failed += 1;
                continue;
            };

            let pb = transfer_bar(format!(
                "{} [{}]",
                planned.track.title,
                planned.decision.quality_label()
            ));
            match download_file(self.client.http(), url, &dest, &pb).await {
                Ok(_) => {
                    pb.finish();
                    self.tally.downloaded += 1;
                }
                Err(e) => {
                    pb.abandon();
                    warning!("Cannot download {}: {}", planned.track.title, e);
                    self.tally.failed += 1;
                }
            }
        }
    }
}

/// A lone track is laid out like an album holding only that track.
fn single_track_release(detail: TrackDetail) -> AlbumMeta {
    let mut album = detail.album;
    album.tracks = TracksContainer {
        items: vec![detail.track],
    };
    album
}
