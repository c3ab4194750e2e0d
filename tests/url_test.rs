use qdlcli::error::UrlError;
use qdlcli::url::*;

#[test]
fn test_parse_store_url() {
    let (kind, id) =
        parse_url("https://www.qobuz.com/us-en/album/ok-computer-radiohead/0060254735180").unwrap();

    assert_eq!(kind, UrlKind::Album);
    assert_eq!(id, "0060254735180");
}

#[test]
fn test_parse_player_urls() {
    assert_eq!(
        parse_url("https://play.qobuz.com/artist/36819").unwrap(),
        (UrlKind::Artist, "36819".to_string())
    );
    assert_eq!(
        parse_url("https://open.qobuz.com/track/5966783").unwrap(),
        (UrlKind::Track, "5966783".to_string())
    );
    assert_eq!(
        parse_url("https://play.qobuz.com/label/1153").unwrap(),
        (UrlKind::Label, "1153".to_string())
    );
}

#[test]
fn test_parse_relative_path() {
    assert_eq!(
        parse_url("/fr-fr/playlist/-/1234").unwrap(),
        (UrlKind::Playlist, "1234".to_string())
    );
}

#[test]
fn test_parse_invalid_url() {
    assert_eq!(
        parse_url("https://example.com/nothing"),
        Err(UrlError::Invalid("https://example.com/nothing".to_string()))
    );
}

#[test]
fn test_resolve_bare_id_uses_default_kind() {
    assert_eq!(
        resolve_target("36819", UrlKind::Artist).unwrap(),
        (UrlKind::Artist, "36819".to_string())
    );
    assert_eq!(
        resolve_target(" 1153 ", UrlKind::Label).unwrap(),
        (UrlKind::Label, "1153".to_string())
    );
}

#[test]
fn test_resolve_url_keeps_its_kind() {
    assert_eq!(
        resolve_target("https://play.qobuz.com/album/abc123", UrlKind::Artist).unwrap(),
        (UrlKind::Album, "abc123".to_string())
    );
}

#[test]
fn test_resolve_rejects_garbage() {
    assert!(resolve_target("", UrlKind::Album).is_err());
    assert!(resolve_target("not an id", UrlKind::Album).is_err());
}

#[test]
fn test_url_kind_display() {
    assert_eq!(UrlKind::Label.to_string(), "label");
    assert_eq!(serde_json::to_string(&UrlKind::Artist).unwrap(), "\"artist\"");
}
