use std::{fmt, sync::LazyLock};

use regex::Regex;
use serde::{Deserialize, Serialize};

use crate::error::UrlError;

/// Matches:
///     https://www.qobuz.com/{locale}/{kind}/{slug}/{id}
///     https://open.qobuz.com/{kind}/{id}
///     https://play.qobuz.com/{kind}/{id}
///     /{locale}/{kind}/-/{id}
#[allow(clippy::expect_used)]
static QOBUZ_URL_PATTERN: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(
        r"(?:https://(?:w{3}|open|play)\.qobuz\.com)?(?:/[a-z]{2}-[a-z]{2})?/(album|artist|track|playlist|label)(?:/[-\w\d]+)?/([\w\d]+)",
    )
    .expect("qobuz url regex is valid")
});

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum UrlKind {
    Album,
    Artist,
    Track,
    Playlist,
    Label,
}

impl UrlKind {
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Album => "album",
            Self::Artist => "artist",
            Self::Track => "track",
            Self::Playlist => "playlist",
            Self::Label => "label",
        }
    }

    fn from_path_segment(segment: &str) -> Option<Self> {
        match segment {
            "album" => Some(Self::Album),
            "artist" => Some(Self::Artist),
            "track" => Some(Self::Track),
            "playlist" => Some(Self::Playlist),
            "label" => Some(Self::Label),
            _ => None,
        }
    }
}

impl fmt::Display for UrlKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Splits a Qobuz URL into the kind of item it points at and its id.
pub fn parse_url(url: &str) -> Result<(UrlKind, String), UrlError> {
    let caps = QOBUZ_URL_PATTERN
        .captures(url.trim())
        .ok_or_else(|| UrlError::Invalid(url.to_string()))?;

    let kind = caps
        .get(1)
        .and_then(|m| UrlKind::from_path_segment(m.as_str()))
        .ok_or_else(|| UrlError::Invalid(url.to_string()))?;
    let id = caps
        .get(2)
        .map(|m| m.as_str().to_string())
        .ok_or_else(|| UrlError::Invalid(url.to_string()))?;

    Ok((kind, id))
}

/// Resolves a command argument that is either a URL or a bare id.
///
/// Bare ids are taken to be of `default_kind`.
pub fn resolve_target(target: &str, default_kind: UrlKind) -> Result<(UrlKind, String), UrlError> {
    let target = target.trim();
    if target.contains('/') {
        return parse_url(target);
    }

    if !target.is_empty() && target.chars().all(|c| c.is_ascii_alphanumeric()) {
        Ok((default_kind, target.to_string()))
    } else {
        Err(UrlError::Invalid(target.to_string()))
    }
}
