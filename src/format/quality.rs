use std::{fmt, str::FromStr};

use serde::{Deserialize, Serialize};

use crate::error::QualityError;

/// Audio fidelity requested from the service.
///
/// Each tier maps to the numeric `format_id` the API expects.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum QualityTier {
    /// MP3 320 kbps.
    Mp3,
    /// FLAC 16 bit, 44.1 kHz.
    #[default]
    Lossless,
    /// FLAC 24 bit, up to 96 kHz.
    HiResUpTo96,
    /// FLAC 24 bit, above 96 kHz.
    HiResAbove96,
}

impl QualityTier {
    pub const ALL: [QualityTier; 4] = [
        QualityTier::Mp3,
        QualityTier::Lossless,
        QualityTier::HiResUpTo96,
        QualityTier::HiResAbove96,
    ];

    pub const fn format_id(self) -> u8 {
        match self {
            Self::Mp3 => 5,
            Self::Lossless => 6,
            Self::HiResUpTo96 => 7,
            Self::HiResAbove96 => 27,
        }
    }

    pub fn from_format_id(format_id: u8) -> Result<Self, QualityError> {
        Self::ALL
            .into_iter()
            .find(|tier| tier.format_id() == format_id)
            .ok_or_else(|| QualityError::UnsupportedQualityTier(format_id.to_string()))
    }

    pub const fn label(self) -> &'static str {
        match self {
            Self::Mp3 => "5 - MP3",
            Self::Lossless => "6 - 16 bit, 44.1kHz",
            Self::HiResUpTo96 => "7 - 24 bit, <96kHz",
            Self::HiResAbove96 => "27 - 24 bit, >96kHz",
        }
    }

    pub const fn is_lossy(self) -> bool {
        matches!(self, Self::Mp3)
    }
}

impl fmt::Display for QualityTier {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

impl FromStr for QualityTier {
    type Err = QualityError;

    /// Accepts a format id (`5`, `6`, `7`, `27`) or a tier name
    /// (`mp3`, `lossless`, `hires`, `hires-max`).
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let normalized = s.trim().to_ascii_lowercase().replace('_', "-");

        if let Ok(format_id) = normalized.parse::<u8>() {
            return Self::from_format_id(format_id);
        }

        match normalized.as_str() {
            "mp3" => Ok(Self::Mp3),
            "lossless" | "flac" => Ok(Self::Lossless),
            "hires" | "hi-res" => Ok(Self::HiResUpTo96),
            "hires-max" | "hi-res-max" => Ok(Self::HiResAbove96),
            _ => Err(QualityError::UnsupportedQualityTier(s.trim().to_string())),
        }
    }
}

/// Clap value parser for `--quality`.
pub fn parse_quality_tier(s: &str) -> Result<QualityTier, String> {
    s.parse::<QualityTier>().map_err(|e| e.to_string())
}
