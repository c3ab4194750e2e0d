use qdlcli::error::{QualityError, TemplateWarning};
use qdlcli::format::*;
use qdlcli::qobuz::request_signature;
use qdlcli::types::{AlbumMeta, ArtistRef, Restriction, TrackFileUrl, TrackMeta, TracksContainer};

// Helper function to create a test getFileUrl answer
fn create_test_file_url(bit_depth: Option<u32>, rate: Option<f64>, codes: &[&str]) -> TrackFileUrl {
    TrackFileUrl {
        url: Some("https://streaming.qobuz.com/file".to_string()),
        bit_depth,
        sampling_rate: rate,
        restrictions: if codes.is_empty() {
            None
        } else {
            Some(
                codes
                    .iter()
                    .map(|code| Restriction {
                        code: code.to_string(),
                    })
                    .collect(),
            )
        },
        ..Default::default()
    }
}

fn create_test_track(number: u32, title: &str, performer: Option<&str>) -> TrackMeta {
    TrackMeta {
        id: 1000 + u64::from(number),
        title: title.to_string(),
        version: None,
        track_number: number,
        media_number: Some(1),
        performer: performer.map(|name| ArtistRef {
            id: None,
            name: name.to_string(),
        }),
        maximum_bit_depth: Some(24),
        maximum_sampling_rate: Some(96.0),
    }
}

fn create_test_album(tracks: Vec<TrackMeta>) -> AlbumMeta {
    AlbumMeta {
        id: "0060254735180".to_string(),
        title: "OK Computer".to_string(),
        version: Some("Remastered".to_string()),
        artist: ArtistRef {
            id: None,
            name: "Radiohead".to_string(),
        },
        release_date_original: Some("1997-05-21".to_string()),
        release_type: Some("album".to_string()),
        streamable: Some(true),
        tracks: TracksContainer { items: tracks },
    }
}

#[test]
fn test_mp3_never_consults_backend() {
    let backend = create_test_file_url(Some(24), Some(96.0), &[QUALITY_DOWNGRADE_CODE]);

    for answer in [None, Some(&backend)] {
        let decision = negotiate_format(QualityTier::Mp3, answer);
        assert_eq!(decision.delivered_format, DeliveredFormat::Mp3);
        assert!(decision.quality_met);
        assert_eq!(decision.bit_depth, None);
        assert_eq!(decision.sampling_rate, None);
    }
}

#[test]
fn test_lossless_delivery() {
    let backend = create_test_file_url(Some(16), Some(44.1), &[]);

    let decision = negotiate_format(QualityTier::Lossless, Some(&backend));

    assert_eq!(
        decision,
        FormatDecision {
            delivered_format: DeliveredFormat::Flac,
            quality_met: true,
            bit_depth: Some(16),
            sampling_rate: Some(44.1),
        }
    );
    assert_eq!(decision.quality_label(), "16/44.1");
}

#[test]
fn test_downgrade_is_reported_with_substituted_values() {
    let backend = create_test_file_url(
        Some(16),
        Some(44.1),
        &["TrackRestrictedByRightHolders", QUALITY_DOWNGRADE_CODE],
    );

    let decision = negotiate_format(QualityTier::HiResAbove96, Some(&backend));

    assert_eq!(decision.delivered_format, DeliveredFormat::Flac);
    assert!(!decision.quality_met);
    assert_eq!(decision.bit_depth, Some(16));
    assert_eq!(decision.sampling_rate, Some(44.1));
    assert!(!decision.accepted(false));
    assert!(decision.accepted(true));
}

#[test]
fn test_unrelated_restriction_is_not_a_downgrade() {
    let backend = create_test_file_url(Some(24), Some(96.0), &["UserUncredentialed"]);

    let decision = negotiate_format(QualityTier::HiResUpTo96, Some(&backend));

    assert!(decision.quality_met);
    assert!(decision.accepted(false));
}

#[test]
fn test_missing_quality_fields_yield_unknown() {
    let no_rate = create_test_file_url(Some(24), None, &[QUALITY_DOWNGRADE_CODE]);

    assert_eq!(
        negotiate_format(QualityTier::HiResUpTo96, Some(&no_rate)),
        FormatDecision::unknown()
    );
    assert_eq!(
        negotiate_format(QualityTier::Lossless, None),
        FormatDecision::unknown()
    );
    assert_eq!(FormatDecision::unknown().quality_label(), "Unknown");
}

#[test]
fn test_quality_tier_parsing() {
    assert_eq!("5".parse::<QualityTier>(), Ok(QualityTier::Mp3));
    assert_eq!("27".parse::<QualityTier>(), Ok(QualityTier::HiResAbove96));
    assert_eq!("lossless".parse::<QualityTier>(), Ok(QualityTier::Lossless));
    assert_eq!("Hi_Res".parse::<QualityTier>(), Ok(QualityTier::HiResUpTo96));
    assert_eq!("hires-max".parse::<QualityTier>(), Ok(QualityTier::HiResAbove96));
    assert!("4".parse::<QualityTier>().is_err());
    assert!("ogg".parse::<QualityTier>().is_err());
    assert!(parse_quality_tier("300").is_err());
}

#[test]
fn test_quality_tier_format_ids() {
    let ids: Vec<u8> = QualityTier::ALL.iter().map(|tier| tier.format_id()).collect();

    assert_eq!(ids, vec![5, 6, 7, 27]);
    assert_eq!(QualityTier::default(), QualityTier::Lossless);
    for tier in QualityTier::ALL {
        assert_eq!(QualityTier::from_format_id(tier.format_id()), Ok(tier));
    }
    assert_eq!(
        QualityTier::from_format_id(8),
        Err(QualityError::UnsupportedQualityTier("8".to_string()))
    );
}

#[test]
fn test_delivered_format_extension() {
    assert_eq!(DeliveredFormat::Mp3.extension(), ".mp3");
    assert_eq!(DeliveredFormat::Flac.extension(), ".flac");
    assert_eq!(DeliveredFormat::Unknown.extension(), ".flac");
}

#[test]
fn test_track_template_falls_back_for_mp3() {
    let sanitized = sanitize_template(
        "{tracknumber}. {bit_depth}B {tracktitle}",
        DeliveredFormat::Mp3,
        TemplateContext::Track,
    );

    assert_eq!(sanitized, "{tracknumber}. {tracktitle}");
}

#[test]
fn test_folder_template_defaults_per_format() {
    assert_eq!(
        sanitize_template(DEFAULT_FOLDER_FORMAT, DeliveredFormat::Flac, TemplateContext::Folder),
        DEFAULT_FOLDER_FORMAT
    );
    assert_eq!(
        sanitize_template(DEFAULT_FOLDER_FORMAT, DeliveredFormat::Mp3, TemplateContext::Folder),
        "{artist} - {album} ({year}) [MP3]"
    );
    assert_eq!(
        sanitize_template(
            DEFAULT_FOLDER_FORMAT,
            DeliveredFormat::Unknown,
            TemplateContext::Folder
        ),
        "{artist} - {album}"
    );
}

#[test]
fn test_safe_template_is_kept() {
    assert_eq!(
        sanitize_template("{artist} - {album}", DeliveredFormat::Mp3, TemplateContext::Folder),
        "{artist} - {album}"
    );
}

#[test]
fn test_template_extension_is_stripped() {
    assert_eq!(strip_extension("{tracktitle}.flac"), "{tracktitle}");
    assert_eq!(strip_extension("{tracktitle}.mp3 "), "{tracktitle}.mp3");
    assert_eq!(
        sanitize_template(
            "{tracknumber} - {tracktitle}.mp3",
            DeliveredFormat::Flac,
            TemplateContext::Track
        ),
        "{tracknumber} - {tracktitle}"
    );
}

#[test]
fn test_check_template() {
    assert_eq!(
        placeholders("{artist} {sampling_rate:.1} { year }"),
        vec!["artist", "sampling_rate", "year"]
    );
    assert!(check_template("{bit_depth}", DeliveredFormat::Flac).is_ok());
    assert_eq!(
        check_template("{artist} [{sampling_rate}]", DeliveredFormat::Unknown),
        Err(TemplateWarning::AmbiguousTemplate {
            placeholder: "sampling_rate".to_string(),
            format: DeliveredFormat::Unknown,
        })
    );
}

#[test]
fn test_render_template_fills_missing_values() {
    let attrs = TemplateAttributes::new()
        .set("artist", "Radiohead")
        .set("album", "");

    assert_eq!(
        render_template("{artist} - {album} ({year})", &attrs),
        format!("Radiohead - {m} ({m})", m = MISSING_VALUE)
    );
}

#[test]
fn test_sanitize_filename() {
    assert_eq!(sanitize_filename("AC/DC: Live?"), "AC_DC_ Live");
    assert_eq!(sanitize_filename("  spaced  out  "), "spaced out");
    assert_eq!(sanitize_filename("a//b"), "a_b");
}

#[test]
fn test_track_file_name_is_truncated_before_extension() {
    let long = "a".repeat(300);

    let name = track_file_name(&long, DeliveredFormat::Flac);

    assert_eq!(name.len(), 250 + ".flac".len());
    assert!(name.ends_with(".flac"));
    assert_eq!(track_file_name("01. Airbag", DeliveredFormat::Mp3), "01. Airbag.mp3");
}

#[test]
fn test_display_title() {
    assert_eq!(display_title("Album", None), "Album");
    assert_eq!(display_title("Album", Some("")), "Album");
    assert_eq!(display_title("Album", Some("Remastered")), "Album (Remastered)");
    assert_eq!(
        display_title("Album (Remastered)", Some("remastered")),
        "Album (Remastered)"
    );
}

#[test]
fn test_release_year() {
    assert_eq!(release_year("1997-05-21"), Some("1997".to_string()));
    assert_eq!(release_year("1997"), Some("1997".to_string()));
    assert_eq!(release_year(""), None);
}

#[test]
fn test_folder_name_for_flac() {
    let album = create_test_album(vec![]);
    let decision = FormatDecision {
        delivered_format: DeliveredFormat::Flac,
        quality_met: true,
        bit_depth: Some(24),
        sampling_rate: Some(96.0),
    };

    let template = sanitize_template(
        DEFAULT_FOLDER_FORMAT,
        decision.delivered_format,
        TemplateContext::Folder,
    );
    let folder = sanitize_filename(&render_template(
        &template,
        &folder_attributes(&album, &decision),
    ));

    assert_eq!(folder, "Radiohead - OK Computer (Remastered) (1997) [24B-96kHz]");
}

#[test]
fn test_folder_name_for_mp3() {
    let album = create_test_album(vec![]);
    let decision = FormatDecision::mp3();

    let template = sanitize_template(
        DEFAULT_FOLDER_FORMAT,
        decision.delivered_format,
        TemplateContext::Folder,
    );
    let folder = render_template(&template, &folder_attributes(&album, &decision));

    assert_eq!(folder, "Radiohead - OK Computer (Remastered) (1997) [MP3]");
}

#[test]
fn test_track_attributes() {
    let album = create_test_album(vec![]);
    let guest = create_test_track(3, "Subterranean Homesick Alien", Some("Thom Yorke"));
    let plain = create_test_track(12, "The Tourist", None);
    let decision = FormatDecision {
        delivered_format: DeliveredFormat::Flac,
        quality_met: false,
        bit_depth: Some(16),
        sampling_rate: Some(44.1),
    };

    let attrs = track_attributes(&guest, &album, &decision);
    assert_eq!(attrs.get("artist"), Some("Thom Yorke"));
    assert_eq!(attrs.get("albumartist"), Some("Radiohead"));
    assert_eq!(attrs.get("tracknumber"), Some("03"));
    assert_eq!(attrs.get("bit_depth"), Some("16"));
    assert_eq!(attrs.get("sampling_rate"), Some("44.1"));

    let attrs = track_attributes(&plain, &album, &FormatDecision::unknown());
    assert_eq!(attrs.get("artist"), Some("Radiohead"));
    assert_eq!(attrs.get("bit_depth"), Some("24"));

    let file = track_file_name(
        &render_template(DEFAULT_TRACK_FORMAT, &attrs),
        DeliveredFormat::Unknown,
    );
    assert_eq!(file, "12. The Tourist.flac");
}

#[test]
fn test_request_signature() {
    let signature = request_signature(5966783, 27, 1700000000, "secret");
    let expected = format!(
        "{:x}",
        md5::compute("trackgetFileUrlformat_id27intentstreamtrack_id59667831700000000secret")
    );

    assert_eq!(signature, expected);
    assert_eq!(signature.len(), 32);
    assert_ne!(signature, request_signature(5966783, 6, 1700000000, "secret"));
}
