//! Configuration management for the Qobuz downloader.
//!
//! Values come from environment variables, which may be provided through a
//! `.env` file in the local data directory:
//! 1. Environment variables (highest priority)
//! 2. `.env` file in the local data directory
//! 3. Application defaults (where applicable)
//!
//! Credentials have no defaults. Obtaining them is up to the user; this
//! crate only reads them.

use std::{env, path::PathBuf};

use crate::{
    error::ConfigError,
    format::{DEFAULT_FOLDER_FORMAT, DEFAULT_TRACK_FORMAT, QualityTier},
};

pub const DEFAULT_API_URL: &str = "https://www.qobuz.com/api.json/0.2";
pub const DEFAULT_DOWNLOAD_DIR: &str = "Qobuz Downloads";

/// Directory holding `.env`, `.env.example` and the catalog cache.
///
/// - Linux: `~/.local/share/qdlcli`
/// - macOS: `~/Library/Application Support/qdlcli`
/// - Windows: `%LOCALAPPDATA%/qdlcli`
pub fn data_dir() -> PathBuf {
    let mut path = dirs::data_local_dir().unwrap_or_else(|| PathBuf::from("."));
    path.push("qdlcli");
    path
}

/// Loads environment variables from `.env` in the local data directory.
///
/// Creates the directory if needed. A missing `.env` is not an error since
/// every value may also come from the process environment.
pub async fn load_env() -> Result<(), ConfigError> {
    let dir = data_dir();
    async_fs::create_dir_all(&dir)
        .await
        .map_err(|e| ConfigError::Load(e.to_string()))?;

    let path = dir.join(".env");
    if path.is_file() {
        dotenv::from_path(&path).map_err(|e| ConfigError::Load(e.to_string()))?;
    }
    Ok(())
}

/// Values needed to talk to the API on behalf of a user.
#[derive(Debug, Clone)]
pub struct Credentials {
    pub app_id: String,
    pub app_secret: String,
    pub user_auth_token: String,
}

impl Credentials {
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|key| env::var(key).ok())
    }

    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let required = |key: &'static str| {
            lookup(key)
                .filter(|value| !value.trim().is_empty())
                .ok_or(ConfigError::Missing(key))
        };

        Ok(Self {
            app_id: required("QOBUZ_APP_ID")?,
            app_secret: required("QOBUZ_APP_SECRET")?,
            user_auth_token: required("QOBUZ_USER_AUTH_TOKEN")?,
        })
    }
}

/// Download and naming preferences.
#[derive(Debug, Clone, PartialEq)]
pub struct Settings {
    pub api_url: String,
    /// Root of every download, relative to the working directory unless absolute.
    pub download_dir: PathBuf,
    pub quality: QualityTier,
    pub folder_format: String,
    pub track_format: String,
    /// Accept deliveries below the requested tier.
    pub quality_fallback: bool,
    /// Ignore singles, EPs and various-artists releases.
    pub albums_only: bool,
    /// Deduplicate artist discographies.
    pub smart_discography: bool,
    pub save_space: bool,
    pub skip_extras: bool,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            api_url: DEFAULT_API_URL.to_string(),
            download_dir: PathBuf::from(DEFAULT_DOWNLOAD_DIR),
            quality: QualityTier::default(),
            folder_format: DEFAULT_FOLDER_FORMAT.to_string(),
            track_format: DEFAULT_TRACK_FORMAT.to_string(),
            quality_fallback: true,
            albums_only: false,
            smart_discography: true,
            save_space: false,
            skip_extras: false,
        }
    }
}

impl Settings {
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|key| env::var(key).ok())
    }

    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let defaults = Self::default();
        let value = |key: &str| lookup(key).filter(|v| !v.trim().is_empty());

        let quality = match value("QDL_QUALITY") {
            Some(raw) => raw
                .parse::<QualityTier>()
                .map_err(|e| ConfigError::Invalid {
                    key: "QDL_QUALITY",
                    reason: e.to_string(),
                })?,
            None => defaults.quality,
        };

        Ok(Self {
            api_url: value("QOBUZ_API_URL")
                .map(|url| url.trim_end_matches('/').to_string())
                .unwrap_or(defaults.api_url),
            download_dir: value("QDL_DOWNLOAD_DIR")
                .map(PathBuf::from)
                .unwrap_or(defaults.download_dir),
            quality,
            folder_format: value("QDL_FOLDER_FORMAT").unwrap_or(defaults.folder_format),
            track_format: value("QDL_TRACK_FORMAT").unwrap_or(defaults.track_format),
            quality_fallback: flag(
                "QDL_QUALITY_FALLBACK",
                value("QDL_QUALITY_FALLBACK"),
                defaults.quality_fallback,
            )?,
            albums_only: flag(
                "QDL_ALBUMS_ONLY",
                value("QDL_ALBUMS_ONLY"),
                defaults.albums_only,
            )?,
            smart_discography: flag(
                "QDL_SMART_DISCOGRAPHY",
                value("QDL_SMART_DISCOGRAPHY"),
                defaults.smart_discography,
            )?,
            save_space: flag("QDL_SAVE_SPACE", value("QDL_SAVE_SPACE"), defaults.save_space)?,
            skip_extras: flag(
                "QDL_SKIP_EXTRAS",
                value("QDL_SKIP_EXTRAS"),
                defaults.skip_extras,
            )?,
        })
    }
}

fn flag(key: &'static str, raw: Option<String>, default: bool) -> Result<bool, ConfigError> {
    let Some(raw) = raw else {
        return Ok(default);
    };

    match raw.trim().to_ascii_lowercase().as_str() {
        "1" | "true" | "yes" | "on" => Ok(true),
        "0" | "false" | "no" | "off" => Ok(false),
        other => Err(ConfigError::Invalid {
            key,
            reason: format!("expected a boolean, got '{}'", other),
        }),
    }
}
