use std::fmt;

use serde::{Deserialize, Serialize};

use super::QualityTier;
use crate::types::TrackFileUrl;

/// Restriction code reported when the service substituted a lower tier.
pub const QUALITY_DOWNGRADE_CODE: &str = "FormatRestrictedByFormatAvailability";

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum DeliveredFormat {
    Mp3,
    Flac,
    Unknown,
}

impl DeliveredFormat {
    /// Container extension appended to track file names.
    pub const fn extension(self) -> &'static str {
        match self {
            Self::Mp3 => ".mp3",
            Self::Flac | Self::Unknown => ".flac",
        }
    }
}

impl fmt::Display for DeliveredFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Self::Mp3 => "MP3",
            Self::Flac => "FLAC",
            Self::Unknown => "Unknown",
        })
    }
}

/// Outcome of negotiating one track's format.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct FormatDecision {
    pub delivered_format: DeliveredFormat,
    /// False when the service reported that it served a lower tier.
    pub quality_met: bool,
    pub bit_depth: Option<u32>,
    pub sampling_rate: Option<f64>,
}

impl FormatDecision {
    pub const fn mp3() -> Self {
        Self {
            delivered_format: DeliveredFormat::Mp3,
            quality_met: true,
            bit_depth: None,
            sampling_rate: None,
        }
    }

    pub const fn unknown() -> Self {
        Self {
            delivered_format: DeliveredFormat::Unknown,
            quality_met: true,
            bit_depth: None,
            sampling_rate: None,
        }
    }

    /// Whether a release with this decision should be downloaded.
    ///
    /// Downgraded deliveries are only accepted when fallback is allowed.
    pub const fn accepted(&self, allow_fallback: bool) -> bool {
        self.quality_met || allow_fallback
    }

    /// `bits/kHz` for lossless deliveries, the format name otherwise.
    pub fn quality_label(&self) -> String {
        match (self.bit_depth, self.sampling_rate) {
            (Some(bits), Some(rate)) => format!("{}/{}", bits, rate),
            _ => self.delivered_format.to_string(),
        }
    }
}

/// Decides the delivered format of a track for the requested tier.
///
/// `backend` is the service's answer for the track at that tier, or `None`
/// when it could not be obtained. MP3 requests ignore it since a lossy
/// delivery is known up front. A lossless answer lacking bit depth
/// or sampling rate yields [`DeliveredFormat::Unknown`], which cannot be
/// called a downgrade.
pub fn negotiate_format(tier: QualityTier, backend: Option<&TrackFileUrl>) -> FormatDecision {
    if tier.is_lossy() {
        return FormatDecision::mp3();
    }

    let Some(track) = backend else {
        return FormatDecision::unknown();
    };

    let (Some(bit_depth), Some(sampling_rate)) = (track.bit_depth, track.sampling_rate) else {
        return FormatDecision::unknown();
    };

    let downgraded = track.restrictions.as_ref().is_some_and(|restrictions| {
        restrictions
            .iter()
            .any(|restriction| restriction.code == QUALITY_DOWNGRADE_CODE)
    });

    FormatDecision {
        delivered_format: DeliveredFormat::Flac,
        quality_met: !downgraded,
        bit_depth: Some(bit_depth),
        sampling_rate: Some(sampling_rate),
    }
}
