//! Error types shared across the crate.
//!
//! Every failure the library can produce is a typed value returned to the
//! caller. The command layer decides whether to skip the affected item and
//! continue or to abort.

use thiserror::Error;

use crate::format::DeliveredFormat;

/// A raw catalog record could not be admitted as a [`crate::catalog::CatalogItem`].
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum CatalogError {
    #[error("malformed catalog item {id}: missing or invalid field `{field}`")]
    MalformedCatalogItem { id: String, field: &'static str },
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum QualityError {
    #[error("unsupported quality tier '{0}': choose between 5, 6, 7 or 27")]
    UnsupportedQualityTier(String),
}

/// Recoverable template problem. Reported as a warning, never fatal.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum TemplateWarning {
    #[error("template references {{{placeholder}}} which is unavailable for {format} delivery")]
    AmbiguousTemplate {
        placeholder: String,
        format: DeliveredFormat,
    },
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum UrlError {
    #[error("invalid url: \"{0}\"")]
    Invalid(String),
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum SearchError {
    #[error("unknown search type '{0}': choose between album, artist, track or playlist")]
    UnknownKind(String),
    #[error("search query \"{0}\" is too short or invalid")]
    QueryTooShort(String),
}

#[derive(Debug, Error)]
pub enum ApiError {
    #[error(transparent)]
    Reqwest(#[from] reqwest::Error),
    #[error("request to {endpoint} failed with status {status}")]
    Status {
        endpoint: String,
        status: reqwest::StatusCode,
    },
    #[error("rate limited for {0} seconds, try again later")]
    RateLimited(u64),
}

#[derive(Debug, Error)]
pub enum DownloadError {
    #[error(transparent)]
    Reqwest(#[from] reqwest::Error),
    #[error(transparent)]
    Io(#[from] std::io::Error),
    #[error("file request failed with status {0}")]
    Status(reqwest::StatusCode),
}

#[derive(Debug, Error)]
pub enum CacheError {
    #[error(transparent)]
    Io(#[from] std::io::Error),
    #[error(transparent)]
    Serde(#[from] serde_json::Error),
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ConfigError {
    #[error("cannot load environment: {0}")]
    Load(String),
    #[error("{0} must be set")]
    Missing(&'static str),
    #[error("{key} has an invalid value: {reason}")]
    Invalid { key: &'static str, reason: String },
}
