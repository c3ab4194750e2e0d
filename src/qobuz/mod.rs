//! # Qobuz Integration Module
//!
//! HTTP access to the two services the discography and format logic consume:
//!
//! - **Catalog listings** ([`QobuzClient::artist_catalog`],
//!   [`QobuzClient::label_catalog`]): every raw release record of an artist or
//!   label, paged 500 at a time.
//! - **Track formats** ([`QobuzClient::track_file_url`]): the file the service
//!   would deliver for a track at a quality tier, including restriction codes
//!   that reveal a downgrade.
//!
//! Album, track and playlist metadata ([`QobuzClient::album`],
//! [`QobuzClient::track`], [`QobuzClient::playlist`]) supply track lists and
//! naming attributes. [`QobuzClient::search`] turns a query into ranked hits
//! whose player URLs resolve like any user-supplied URL.
//!
//! ## Authentication
//!
//! The client is built from an app id, app secret and user auth token read
//! from the configuration. `track/getFileUrl` requests are signed with an md5
//! digest of the request parameters and the secret.
//!
//! ## Error Handling
//!
//! - **502 Bad Gateway**: retried after 10 seconds
//! - **429 Too Many Requests**: retried after `Retry-After` when it is at most
//!   120 seconds; a missing header or a longer delay is reported as
//!   [`crate::error::ApiError::RateLimited`]
//! - No call sends more than five requests ([`RetryPolicy`])
//! - **Other statuses and network failures**: returned to the caller, which
//!   skips the affected item

mod catalog;
mod client;
mod search;
mod tracks;

pub use client::QobuzClient;
pub use client::RetryPolicy;
pub use search::MIN_QUERY_LEN;
pub use search::SearchHit;
pub use search::SearchKind;
pub use search::format_duration;
pub use search::parse_search_kind;
pub use search::parse_search_results;
pub use search::validate_query;
pub use tracks::request_signature;
