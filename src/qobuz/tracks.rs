use chrono::Utc;

use super::QobuzClient;
use crate::{
    error::ApiError,
    format::QualityTier,
    types::{AlbumMeta, TrackDetail, TrackFileUrl},
};

impl QobuzClient {
    pub async fn album(&self, album_id: &str) -> Result<AlbumMeta, ApiError> {
        self.get_json("album/get", &[("album_id", album_id.to_string())])
            .await
    }

    pub async fn track(&self, track_id: &str) -> Result<TrackDetail, ApiError> {
        self.get_json("track/get", &[("track_id", track_id.to_string())])
            .await
    }

    /// Asks which file the service would stream for `track_id` at `tier`.
    ///
    /// The request is signed with the app secret. The answer carries the
    /// delivered bit depth and sampling rate plus any restriction codes,
    /// which is what [`crate::format::negotiate_format`] consumes.
    pub async fn track_file_url(
        &self,
        track_id: u64,
        tier: QualityTier,
    ) -> Result<TrackFileUrl, ApiError> {
        let format_id = tier.format_id();
        let request_ts = Utc::now().timestamp();
        let request_sig = request_signature(track_id, format_id, request_ts, self.app_secret());

        self.get_json(
            "track/getFileUrl",
            &[
                ("request_ts", request_ts.to_string()),
                ("request_sig", request_sig),
                ("track_id", track_id.to_string()),
                ("format_id", format_id.to_string()),
                ("intent", "stream".to_string()),
            ],
        )
        .await
    }
}

/// md5 over the endpoint name, sorted parameters, timestamp and app secret.
pub fn request_signature(track_id: u64, format_id: u8, request_ts: i64, secret: &str) -> String {
    let raw = format!(
        "trackgetFileUrlformat_id{}intentstreamtrack_id{}{}{}",
        format_id, track_id, request_ts, secret
    );
    format!("{:x}", md5::compute(raw))
}
