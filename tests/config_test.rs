use std::{collections::HashMap, path::Path};

use qdlcli::config::*;
use qdlcli::error::ConfigError;
use qdlcli::format::{DEFAULT_FOLDER_FORMAT, QualityTier};

// Helper function to build a lookup over a fixed set of variables
fn lookup(vars: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
    let vars: HashMap<String, String> = vars
        .iter()
        .map(|(k, v)| (k.to_string(), v.to_string()))
        .collect();
    move |key: &str| vars.get(key).cloned()
}

#[test]
fn test_settings_defaults() {
    let settings = Settings::from_lookup(lookup(&[])).unwrap();

    assert_eq!(settings, Settings::default());
    assert_eq!(settings.api_url, DEFAULT_API_URL);
    assert_eq!(settings.quality, QualityTier::Lossless);
    assert_eq!(settings.folder_format, DEFAULT_FOLDER_FORMAT);
    assert!(settings.quality_fallback);
    assert!(settings.smart_discography);
    assert!(!settings.albums_only);
    assert_eq!(settings.download_dir, Path::new(DEFAULT_DOWNLOAD_DIR));
}

#[test]
fn test_settings_overrides() {
    let settings = Settings::from_lookup(lookup(&[
        ("QDL_QUALITY", "hires-max"),
        ("QOBUZ_API_URL", "http://localhost:8080/api/"),
        ("QDL_TRACK_FORMAT", "{tracknumber} - {tracktitle}"),
        ("QDL_QUALITY_FALLBACK", "no"),
        ("QDL_ALBUMS_ONLY", "1"),
        ("QDL_SAVE_SPACE", "TRUE"),
        ("QDL_DOWNLOAD_DIR", "/srv/music"),
    ]))
    .unwrap();

    assert_eq!(settings.quality, QualityTier::HiResAbove96);
    assert_eq!(settings.api_url, "http://localhost:8080/api");
    assert_eq!(settings.track_format, "{tracknumber} - {tracktitle}");
    assert!(!settings.quality_fallback);
    assert!(settings.albums_only);
    assert!(settings.save_space);
    assert!(!settings.skip_extras);
    assert_eq!(settings.download_dir, Path::new("/srv/music"));
}

#[test]
fn test_settings_blank_values_use_defaults() {
    let settings = Settings::from_lookup(lookup(&[("QDL_QUALITY", "  ")])).unwrap();

    assert_eq!(settings.quality, QualityTier::Lossless);
}

#[test]
fn test_settings_invalid_values() {
    let quality = Settings::from_lookup(lookup(&[("QDL_QUALITY", "9")]));
    let flag = Settings::from_lookup(lookup(&[("QDL_SMART_DISCOGRAPHY", "maybe")]));

    assert!(matches!(
        quality,
        Err(ConfigError::Invalid {
            key: "QDL_QUALITY",
            ..
        })
    ));
    assert!(matches!(
        flag,
        Err(ConfigError::Invalid {
            key: "QDL_SMART_DISCOGRAPHY",
            ..
        })
    ));
}

#[test]
fn test_credentials() {
    let credentials = Credentials::from_lookup(lookup(&[
        ("QOBUZ_APP_ID", "950096963"),
        ("QOBUZ_APP_SECRET", "secret"),
        ("QOBUZ_USER_AUTH_TOKEN", "token"),
    ]))
    .unwrap();

    assert_eq!(credentials.app_id, "950096963");
    assert_eq!(credentials.app_secret, "secret");
    assert_eq!(credentials.user_auth_token, "token");
}

#[test]
fn test_credentials_missing() {
    let missing = Credentials::from_lookup(lookup(&[
        ("QOBUZ_APP_ID", "950096963"),
        ("QOBUZ_APP_SECRET", ""),
    ]));

    assert_eq!(
        missing.unwrap_err(),
        ConfigError::Missing("QOBUZ_APP_SECRET")
    );
}

#[test]
fn test_data_dir() {
    assert!(data_dir().ends_with("qdlcli"));
}
