use tabled::Table;

use super::{connect, spinner};
use crate::{
    config::{self, Settings},
    download::{PlanOutcome, TrackStatus, build_album_plan, negotiate_tracks},
    error,
    format::QualityTier,
    info, success,
    types::PlanTableRow,
    url::{UrlKind, resolve_target},
    warning,
};

pub struct PlanRequest {
    pub target: String,
    pub quality: Option<QualityTier>,
    pub no_fallback: bool,
}

/// Shows where every track of an album would be written.
///
/// Each track's format is negotiated before its name is rendered. The
/// folder is named after the first downloadable track's format, and the
/// album is skipped when that format is a downgrade the user did not allow.
pub async fn plan(request: PlanRequest, settings: &Settings) {
    let album_id = match resolve_target(&request.target, UrlKind::Album) {
        Ok((UrlKind::Album, id)) => id,
        Ok((kind, _)) => error!("A plan needs an album, got a {} url.", kind),
        Err(e) => error!("{}. Use urls from https://play.qobuz.com!", e),
    };

    let client = match connect(settings) {
        Ok(client) => client,
        Err(e) => error!(
            "{}. Add it to {}",
            e,
            config::data_dir().join(".env").display()
        ),
    };

    let pb = spinner(format!("Fetching album {}...", album_id));
    let album = client.album(&album_id).await;
    pb.finish_and_clear();
    let album = match album {
        Ok(album) => album,
        Err(e) => error!("Error getting release {}: {}", album_id, e),
    };

    if album.streamable != Some(true) {
        warning!("{} is not streamable.", album.title);
        return;
    }

    let tier = request.quality.unwrap_or(settings.quality);
    let allow_fallback = settings.quality_fallback && !request.no_fallback;

    let pb = spinner(format!("Negotiating formats for {}...", album.title));
    let statuses = negotiate_tracks(&client, &album.tracks.items, tier, false).await;
    pb.finish_and_clear();

    let mut negotiated = Vec::with_capacity(statuses.len());
    for status in statuses {
        match status {
            TrackStatus::Ready(track) => negotiated.push(track),
            TrackStatus::Sample(track) => info!("Demo. Skipping {}", track.title),
        }
    }

    let plan = match build_album_plan(
        &album,
        negotiated,
        &settings.folder_format,
        &settings.track_format,
        allow_fallback,
    ) {
        PlanOutcome::Ready(plan) => plan,
        PlanOutcome::NoTracks => {
            warning!("{} has no downloadable tracks.", album.title);
            return;
        }
        PlanOutcome::BelowQuality(_) => {
            info!(
                "Skipping {} as it doesn't meet quality requirement",
                album.title
            );
            return;
        }
    };

    if !plan.decision.quality_met {
        warning!(
            "{} is not available for {}, falling back to {}.",
            tier,
            plan.title,
            plan.decision.quality_label()
        );
    }

    info!(
        "Planning: {}\nQuality: {} ({})",
        plan.title,
        plan.decision.delivered_format,
        plan.decision.quality_label()
    );

    let rows: Vec<PlanTableRow> = plan
        .tracks
        .iter()
        .map(|planned| PlanTableRow {
            track: format!("{:02}", planned.track.track_number),
            quality: planned.decision.quality_label(),
            file: planned.path.display().to_string(),
        })
        .collect();

    let planned = rows.len();
    println!("{}\n{}\n", plan.folder, Table::new(rows));
    success!("Planned {} tracks.", planned);
}
