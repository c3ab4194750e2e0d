use std::path::PathBuf;

use qdlcli::download::*;
use qdlcli::format::{
    DEFAULT_FOLDER_FORMAT, DEFAULT_TRACK_FORMAT, DeliveredFormat, FormatDecision,
};
use qdlcli::types::{AlbumMeta, ArtistRef, TrackMeta, TracksContainer};

// Helper function to create a test track on the requested disc
fn create_test_track(number: u32, disc: u32, title: &str) -> TrackMeta {
    TrackMeta {
        id: 5966783 + u64::from(number),
        title: title.to_string(),
        version: None,
        track_number: number,
        media_number: Some(disc),
        performer: None,
        maximum_bit_depth: Some(24),
        maximum_sampling_rate: Some(96.0),
    }
}

fn create_test_album() -> AlbumMeta {
    AlbumMeta {
        id: "0060254735180".to_string(),
        title: "OK Computer".to_string(),
        version: None,
        artist: ArtistRef {
            id: None,
            name: "Radiohead".to_string(),
        },
        release_date_original: Some("1997-05-21".to_string()),
        release_type: Some("album".to_string()),
        streamable: Some(true),
        tracks: TracksContainer::default(),
    }
}

fn flac(quality_met: bool, bit_depth: u32, rate: f64) -> FormatDecision {
    FormatDecision {
        delivered_format: DeliveredFormat::Flac,
        quality_met,
        bit_depth: Some(bit_depth),
        sampling_rate: Some(rate),
    }
}

fn negotiated(track: TrackMeta, decision: FormatDecision) -> NegotiatedTrack {
    NegotiatedTrack {
        url: Some(format!("https://streaming.qobuz.com/{}", track.id)),
        track,
        decision,
    }
}

fn plan(tracks: Vec<NegotiatedTrack>, allow_fallback: bool) -> PlanOutcome {
    build_album_plan(
        &create_test_album(),
        tracks,
        DEFAULT_FOLDER_FORMAT,
        DEFAULT_TRACK_FORMAT,
        allow_fallback,
    )
}

fn paths(plan: &AlbumPlan) -> Vec<PathBuf> {
    plan.tracks.iter().map(|track| track.path.clone()).collect()
}

#[test]
fn test_plan_single_disc() {
    let outcome = plan(
        vec![
            negotiated(create_test_track(1, 1, "Airbag"), flac(true, 24, 96.0)),
            negotiated(create_test_track(2, 1, "Paranoid Android"), flac(true, 24, 96.0)),
        ],
        true,
    );

    let PlanOutcome::Ready(plan) = outcome else {
        panic!("expected a ready plan");
    };
    assert_eq!(plan.title, "OK Computer");
    assert_eq!(plan.folder, "Radiohead - OK Computer (1997) [24B-96kHz]");
    assert_eq!(
        paths(&plan),
        vec![
            PathBuf::from("01. Airbag.flac"),
            PathBuf::from("02. Paranoid Android.flac"),
        ]
    );
    assert_eq!(
        plan.tracks[0].url.as_deref(),
        Some("https://streaming.qobuz.com/5966784")
    );
}

#[test]
fn test_plan_multi_disc_uses_disc_folders() {
    let outcome = plan(
        vec![
            negotiated(create_test_track(1, 1, "Airbag"), flac(true, 24, 96.0)),
            negotiated(create_test_track(1, 2, "Lift"), flac(true, 24, 96.0)),
        ],
        true,
    );

    let PlanOutcome::Ready(plan) = outcome else {
        panic!("expected a ready plan");
    };
    assert_eq!(
        paths(&plan),
        vec![
            PathBuf::from("Disc 1").join("01. Airbag.flac"),
            PathBuf::from("Disc 2").join("01. Lift.flac"),
        ]
    );
}

#[test]
fn test_plan_names_each_track_after_its_own_format() {
    let outcome = plan(
        vec![
            negotiated(create_test_track(1, 1, "Airbag"), flac(true, 24, 96.0)),
            negotiated(create_test_track(2, 1, "Lucky"), FormatDecision::mp3()),
        ],
        true,
    );

    let PlanOutcome::Ready(plan) = outcome else {
        panic!("expected a ready plan");
    };
    assert_eq!(plan.decision, flac(true, 24, 96.0));
    assert_eq!(plan.tracks[1].path, PathBuf::from("02. Lucky.mp3"));
}

#[test]
fn test_plan_below_quality_without_fallback() {
    let downgraded = flac(false, 16, 44.1);

    let skipped = plan(
        vec![negotiated(create_test_track(1, 1, "Airbag"), downgraded)],
        false,
    );
    let kept = plan(
        vec![negotiated(create_test_track(1, 1, "Airbag"), downgraded)],
        true,
    );

    assert!(matches!(skipped, PlanOutcome::BelowQuality(decision) if decision == downgraded));
    let PlanOutcome::Ready(plan) = kept else {
        panic!("fallback should keep the album");
    };
    assert_eq!(plan.folder, "Radiohead - OK Computer (1997) [16B-44.1kHz]");
}

#[test]
fn test_plan_unknown_format_is_never_a_downgrade() {
    let outcome = plan(
        vec![negotiated(
            create_test_track(1, 1, "Airbag"),
            FormatDecision::unknown(),
        )],
        false,
    );

    let PlanOutcome::Ready(plan) = outcome else {
        panic!("unknown formats are accepted");
    };
    assert_eq!(plan.folder, "Radiohead - OK Computer");
    assert_eq!(plan.tracks[0].path, PathBuf::from("01. Airbag.flac"));
}

#[test]
fn test_plan_without_tracks() {
    assert!(matches!(plan(vec![], true), PlanOutcome::NoTracks));
}

#[test]
fn test_plan_falls_back_to_album_id_for_empty_folder() {
    let outcome = build_album_plan(
        &create_test_album(),
        vec![negotiated(
            create_test_track(1, 1, "Airbag"),
            flac(true, 24, 96.0),
        )],
        "{album}",
        DEFAULT_TRACK_FORMAT,
        true,
    );
    let PlanOutcome::Ready(plan) = outcome else {
        panic!("expected a ready plan");
    };
    assert_eq!(plan.folder, "OK Computer");

    let mut nameless = create_test_album();
    nameless.title = "???".to_string();
    let outcome = build_album_plan(
        &nameless,
        vec![negotiated(
            create_test_track(1, 1, "Airbag"),
            flac(true, 24, 96.0),
        )],
        "{album}",
        DEFAULT_TRACK_FORMAT,
        true,
    );
    let PlanOutcome::Ready(plan) = outcome else {
        panic!("expected a ready plan");
    };
    assert_eq!(plan.folder, "0060254735180");
}
