use std::{
    collections::{HashMap, HashSet},
    path::PathBuf,
};

use crate::{
    format::{
        DeliveredFormat, FormatDecision, TemplateContext, display_title, folder_attributes,
        render_template, sanitize_filename, sanitize_template, track_attributes, track_file_name,
    },
    types::{AlbumMeta, TrackMeta},
};

/// A track whose delivered format is known.
#[derive(Debug, Clone)]
pub struct NegotiatedTrack {
    pub track: TrackMeta,
    pub decision: FormatDecision,
    /// Where the file can be fetched, when the service offered one.
    pub url: Option<String>,
}

#[derive(Debug, Clone)]
pub struct PlannedTrack {
    pub track: TrackMeta,
    pub decision: FormatDecision,
    pub url: Option<String>,
    /// Relative to the album folder.
    pub path: PathBuf,
}

#[derive(Debug, Clone)]
pub struct AlbumPlan {
    pub title: String,
    pub folder: String,
    /// Decision of the first track, which names the folder.
    pub decision: FormatDecision,
    pub tracks: Vec<PlannedTrack>,
}

#[derive(Debug, Clone)]
pub enum PlanOutcome {
    Ready(AlbumPlan),
    /// Every track was a preview or the album has none.
    NoTracks,
    /// The first track was downgraded and fallback is not allowed.
    BelowQuality(FormatDecision),
}

/// Names the folder and files of an album from its negotiated tracks.
///
/// The first track's decision names the folder and decides whether the
/// album is skipped for not meeting the requested quality. Every track is
/// then named after its own decision. Albums spanning several discs get one
/// `Disc N` subfolder per disc.
pub fn build_album_plan(
    album: &AlbumMeta,
    negotiated: Vec<NegotiatedTrack>,
    folder_format: &str,
    track_format: &str,
    allow_fallback: bool,
) -> PlanOutcome {
    let Some(first) = negotiated.first().map(|track| track.decision) else {
        return PlanOutcome::NoTracks;
    };
    if !first.accepted(allow_fallback) {
        return PlanOutcome::BelowQuality(first);
    }

    let folder_template =
        sanitize_template(folder_format, first.delivered_format, TemplateContext::Folder);
    let folder = sanitize_filename(&render_template(
        &folder_template,
        &folder_attributes(album, &first),
    ));
    let folder = if folder.is_empty() {
        album.id.clone()
    } else {
        folder
    };

    let discs: HashSet<u32> = negotiated
        .iter()
        .map(|negotiated| negotiated.track.media_number.unwrap_or(1))
        .collect();
    let multi_disc = discs.len() > 1;

    let mut track_templates: HashMap<DeliveredFormat, String> = HashMap::new();
    let tracks = negotiated
        .into_iter()
        .map(|negotiated| {
            let format = negotiated.decision.delivered_format;
            let template = track_templates.entry(format).or_insert_with(|| {
                sanitize_template(track_format, format, TemplateContext::Track)
            });
            let rendered = render_template(
                template,
                &track_attributes(&negotiated.track, album, &negotiated.decision),
            );
            let file = track_file_name(&rendered, format);

            let path = if multi_disc {
                PathBuf::from(format!(
                    "Disc {}",
                    negotiated.track.media_number.unwrap_or(1)
                ))
                .join(file)
            } else {
                PathBuf::from(file)
            };

            PlannedTrack {
                track: negotiated.track,
                decision: negotiated.decision,
                url: negotiated.url,
                path,
            }
        })
        .collect();

    PlanOutcome::Ready(AlbumPlan {
        title: display_title(&album.title, album.version.as_deref()),
        folder,
        decision: first,
        tracks,
    })
}
