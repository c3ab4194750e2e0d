//! # Download Module
//!
//! Turns an album into files on disk.
//!
//! ```text
//! AlbumMeta
//!     ↓  negotiate_tracks (one track/getFileUrl per track)
//! NegotiatedTrack list
//!     ↓  build_album_plan (fallback check, folder and file names)
//! AlbumPlan
//!     ↓  download_file (streamed to a .part file, then renamed)
//! files
//! ```
//!
//! Only [`negotiate_tracks`] and [`download_file`] do I/O. Building the
//! plan is pure, which is what the `plan` command prints.

mod file;
mod plan;
mod resolve;

pub use file::download_file;
pub use file::partial_path;
pub use plan::AlbumPlan;
pub use plan::NegotiatedTrack;
pub use plan::PlanOutcome;
pub use plan::PlannedTrack;
pub use plan::build_album_plan;
pub use resolve::TrackStatus;
pub use resolve::negotiate_tracks;
