use super::NegotiatedTrack;
use crate::{
    debug,
    format::{QualityTier, negotiate_format},
    qobuz::QobuzClient,
    types::TrackMeta,
};

#[derive(Debug, Clone)]
pub enum TrackStatus {
    Ready(NegotiatedTrack),
    /// Preview-only track, never downloaded.
    Sample(TrackMeta),
}

/// Asks the service for every track's file at `tier` and negotiates its
/// format.
///
/// With `fetch_urls` unset, lossy requests skip the service entirely since
/// their format is known up front. A track whose file cannot be resolved is
/// negotiated without an answer and ends up with an unknown format.
pub async fn negotiate_tracks(
    client: &QobuzClient,
    tracks: &[TrackMeta],
    tier: QualityTier,
    fetch_urls: bool,
) -> Vec<TrackStatus> {
    let mut statuses = Vec::with_capacity(tracks.len());

    for track in tracks {
        if tier.is_lossy() && !fetch_urls {
            statuses.push(TrackStatus::Ready(NegotiatedTrack {
                track: track.clone(),
                decision: negotiate_format(tier, None),
                url: None,
            }));
            continue;
        }

        let status = match client.track_file_url(track.id, tier).await {
            Ok(file) if file.is_sample() => TrackStatus::Sample(track.clone()),
            Ok(file) => TrackStatus::Ready(NegotiatedTrack {
                track: track.clone(),
                decision: negotiate_format(tier, Some(&file)),
                url: file.url,
            }),
            Err(e) => {
                debug!("Cannot resolve file of track {}: {}", track.id, e);
                TrackStatus::Ready(NegotiatedTrack {
                    track: track.clone(),
                    decision: negotiate_format(tier, None),
                    url: None,
                })
            }
        };
        statuses.push(status);
    }

    statuses
}
