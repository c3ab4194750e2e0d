use std::{fmt, str::FromStr};

use serde_json::Value;

use super::QobuzClient;
use crate::{
    error::{ApiError, SearchError},
    format::MISSING_VALUE,
    url::UrlKind,
};

/// Shorter queries are rejected before anything is sent.
pub const MIN_QUERY_LEN: usize = 3;

const PLAYER_URL: &str = "https://play.qobuz.com";

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum SearchKind {
    #[default]
    Album,
    Artist,
    Track,
    Playlist,
}

impl SearchKind {
    pub const fn url_kind(self) -> UrlKind {
        match self {
            Self::Album => UrlKind::Album,
            Self::Artist => UrlKind::Artist,
            Self::Track => UrlKind::Track,
            Self::Playlist => UrlKind::Playlist,
        }
    }

    const fn results_key(self) -> &'static str {
        match self {
            Self::Album => "albums",
            Self::Artist => "artists",
            Self::Track => "tracks",
            Self::Playlist => "playlists",
        }
    }
}

impl fmt::Display for SearchKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.url_kind().as_str())
    }
}

impl FromStr for SearchKind {
    type Err = SearchError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().trim_end_matches('s') {
            "album" => Ok(Self::Album),
            "artist" => Ok(Self::Artist),
            "track" => Ok(Self::Track),
            "playlist" => Ok(Self::Playlist),
            _ => Err(SearchError::UnknownKind(s.trim().to_string())),
        }
    }
}

/// Clap value parser for `--type`.
pub fn parse_search_kind(s: &str) -> Result<SearchKind, String> {
    s.parse::<SearchKind>().map_err(|e| e.to_string())
}

/// Trims the query and rejects it when it is too short to search for.
pub fn validate_query(query: &str) -> Result<&str, SearchError> {
    let query = query.trim();
    if query.chars().count() < MIN_QUERY_LEN {
        return Err(SearchError::QueryTooShort(query.to_string()));
    }
    Ok(query)
}

/// One search result, with the player URL that resolves back to it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SearchHit {
    pub kind: SearchKind,
    pub id: String,
    pub text: String,
    pub url: String,
}

impl SearchHit {
    /// Builds a hit from one raw result. Results without an id are dropped.
    ///
    /// Albums and tracks show duration and whether a hi-res stream exists;
    /// artists and playlists show how many items they hold.
    pub fn from_value(kind: SearchKind, value: &Value) -> Option<Self> {
        let id = match value.get("id") {
            Some(Value::String(id)) if !id.is_empty() => id.clone(),
            Some(Value::Number(id)) => id.to_string(),
            _ => return None,
        };

        let text = match kind {
            SearchKind::Album => format!(
                "{} - {}",
                field(value, &["artist", "name"]),
                field(value, &["title"])
            ),
            SearchKind::Artist => format!(
                "{} - ({} releases)",
                field(value, &["name"]),
                field(value, &["albums_count"])
            ),
            SearchKind::Track => format!(
                "{} - {}",
                field(value, &["performer", "name"]),
                field(value, &["title"])
            ),
            SearchKind::Playlist => format!(
                "{} - ({} releases)",
                field(value, &["name"]),
                field(value, &["tracks_count"])
            ),
        };

        let text = match kind {
            SearchKind::Album | SearchKind::Track => {
                let duration = value
                    .get("duration")
                    .and_then(Value::as_u64)
                    .map_or_else(|| MISSING_VALUE.to_string(), format_duration);
                let fidelity = if value
                    .get("hires_streamable")
                    .and_then(Value::as_bool)
                    .unwrap_or(false)
                {
                    "HI-RES"
                } else {
                    "LOSSLESS"
                };
                format!("{} - {} [{}]", text, duration, fidelity)
            }
            SearchKind::Artist | SearchKind::Playlist => text,
        };

        Some(Self {
            kind,
            url: format!("{}/{}/{}", PLAYER_URL, kind, id),
            id,
            text,
        })
    }
}

/// `HH:MM:SS` for a duration in seconds.
pub fn format_duration(seconds: u64) -> String {
    format!(
        "{:02}:{:02}:{:02}",
        seconds / 3600,
        (seconds % 3600) / 60,
        seconds % 60
    )
}

/// Hits of a `{kind}/search` response, in the order the service ranked them.
pub fn parse_search_results(kind: SearchKind, response: &Value) -> Vec<SearchHit> {
    response
        .get(kind.results_key())
        .and_then(|results| results.get("items"))
        .and_then(Value::as_array)
        .map(|items| {
            items
                .iter()
                .filter_map(|item| SearchHit::from_value(kind, item))
                .collect()
        })
        .unwrap_or_default()
}

fn field(value: &Value, path: &[&str]) -> String {
    match path.iter().try_fold(value, |node, key| node.get(*key)) {
        Some(Value::String(text)) if !text.is_empty() => text.clone(),
        Some(Value::Number(number)) => number.to_string(),
        _ => MISSING_VALUE.to_string(),
    }
}

impl QobuzClient {
    pub async fn search(
        &self,
        kind: SearchKind,
        query: &str,
        limit: u32,
    ) -> Result<Vec<SearchHit>, ApiError> {
        let response: Value = self
            .get_json(
                &format!("{}/search", kind),
                &[("query", query.to_string()), ("limit", limit.to_string())],
            )
            .await?;

        Ok(parse_search_results(kind, &response))
    }
}
