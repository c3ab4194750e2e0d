//! # CLI Module
//!
//! User-facing commands of `qdlcli`. Each command resolves its input, talks to
//! the API or the local cache, hands the fetched data to the pure logic in
//! [`crate::catalog`] and [`crate::format`], and prints the result.
//!
//! ## Commands
//!
//! - [`discography`] - Expands an artist or label into a deduplicated release list
//! - [`plan`] - Negotiates formats for an album and shows the folder and file names
//! - [`download`] - Downloads albums, tracks, playlists, artists and labels
//! - [`search`] - Searches the catalog and prints the hits with their urls
//! - [`lucky`] - Downloads the first hits of a search
//! - [`resolve`] - Shows which item kind and id a URL points at
//! - [`qualities`] - Lists the available quality tiers
//!
//! ## Layering
//!
//! ```text
//! CLI Layer (User Interface)
//!     ↓
//! Catalog / Format Logic (pure)      Management Layer (Cache)
//!     ↓                                  ↓
//! Qobuz Integration Layer (HTTP)
//! ```
//!
//! ## Error Handling
//!
//! A failure that concerns one release or track is reported with a warning
//! and the command moves on to the next one. Only failures that leave nothing
//! to do, such as an invalid URL or missing credentials, end the program.

mod discography;
mod download;
mod plan;
mod qualities;
mod resolve;
mod search;

use std::time::Duration;

use indicatif::{ProgressBar, ProgressStyle};

use crate::{
    config::{Credentials, Settings},
    error::ConfigError,
    qobuz::QobuzClient,
};

pub use discography::DiscographyRequest;
pub use discography::discography;
pub use download::DownloadRequest;
pub use download::download;
pub use plan::PlanRequest;
pub use plan::plan;
pub use qualities::qualities;
pub use resolve::resolve;
pub use search::LuckyRequest;
pub use search::lucky;
pub use search::search;

/// Builds an API client from the configured credentials.
pub(crate) fn connect(settings: &Settings) -> Result<QobuzClient, ConfigError> {
    let credentials = Credentials::from_env()?;
    Ok(QobuzClient::new(settings, credentials))
}

pub(crate) fn spinner(message: String) -> ProgressBar {
    let pb = ProgressBar::new_spinner();
    pb.set_message(message);
    pb.enable_steady_tick(Duration::from_millis(100));
    if let Ok(style) = ProgressStyle::with_template("{spinner:.blue} {msg}") {
        pb.set_style(style.tick_chars("⠋⠙⠹⠸⠼⠴⠦⠧⠇⠏"));
    }
    pb
}

/// Byte counter for a file transfer. The length is set once the response
/// headers are in.
pub(crate) fn transfer_bar(message: String) -> ProgressBar {
    let pb = ProgressBar::new(0);
    pb.set_message(message);
    if let Ok(style) =
        ProgressStyle::with_template("{bytes:>10.cyan}/{total_bytes:<10.cyan} /// {msg}")
    {
        pb.set_style(style);
    }
    pb
}
