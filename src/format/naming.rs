use chrono::{Datelike, NaiveDate};

use super::{FormatDecision, TemplateAttributes};
use crate::types::{AlbumMeta, TrackMeta};

/// Title shown to the user and used for naming.
///
/// The version is appended in parentheses unless the title already
/// mentions it.
pub fn display_title(title: &str, version: Option<&str>) -> String {
    match version.map(str::trim).filter(|v| !v.is_empty()) {
        Some(version) if !title.to_lowercase().contains(&version.to_lowercase()) => {
            format!("{} ({})", title, version)
        }
        _ => title.to_string(),
    }
}

/// Year of a `YYYY-MM-DD` release date. Partial dates fall back to the
/// leading component.
pub fn release_year(release_date: &str) -> Option<String> {
    match NaiveDate::parse_from_str(release_date, "%Y-%m-%d") {
        Ok(date) => Some(date.year().to_string()),
        Err(_) => release_date
            .split('-')
            .next()
            .filter(|year| !year.is_empty())
            .map(str::to_string),
    }
}

pub fn folder_attributes(album: &AlbumMeta, decision: &FormatDecision) -> TemplateAttributes {
    TemplateAttributes::new()
        .set("artist", &album.artist.name)
        .set(
            "album",
            display_title(&album.title, album.version.as_deref()),
        )
        .set_opt(
            "year",
            album.release_date_original.as_deref().and_then(release_year),
        )
        .set("format", decision.delivered_format)
        .set_opt("bit_depth", decision.bit_depth)
        .set_opt("sampling_rate", decision.sampling_rate)
}

/// Attributes for one track. Negotiated values win over the track's
/// advertised maximums.
pub fn track_attributes(
    track: &TrackMeta,
    album: &AlbumMeta,
    decision: &FormatDecision,
) -> TemplateAttributes {
    let artist = track
        .performer
        .as_ref()
        .map_or(album.artist.name.as_str(), |performer| performer.name.as_str());

    TemplateAttributes::new()
        .set("artist", artist)
        .set("albumartist", &album.artist.name)
        .set_opt("bit_depth", decision.bit_depth.or(track.maximum_bit_depth))
        .set_opt(
            "sampling_rate",
            decision.sampling_rate.or(track.maximum_sampling_rate),
        )
        .set("tracktitle", &track.title)
        .set_opt("version", track.version.as_deref())
        .set("tracknumber", format!("{:02}", track.track_number))
}
