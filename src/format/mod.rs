//! # Format Module
//!
//! Everything between "the user asked for quality X" and "this is the name
//! of the file on disk".
//!
//! - [`QualityTier`] - the four tiers the service offers and their format ids
//! - [`negotiate_format`] - what a track is actually delivered as, and whether
//!   the requested tier was honored
//! - [`sanitize_template`] - user naming templates checked against the
//!   delivered format, with safe defaults when they cannot be rendered
//! - [`render_template`] and the attribute builders in `naming` - turning a
//!   template into a file or folder name
//!
//! Negotiation has to happen per track before naming, because templates may
//! reference bit depth and sampling rate, which are only known afterwards.

mod naming;
mod negotiate;
mod quality;
mod template;

pub use naming::display_title;
pub use naming::folder_attributes;
pub use naming::release_year;
pub use naming::track_attributes;
pub use negotiate::DeliveredFormat;
pub use negotiate::FormatDecision;
pub use negotiate::QUALITY_DOWNGRADE_CODE;
pub use negotiate::negotiate_format;
pub use quality::QualityTier;
pub use quality::parse_quality_tier;
pub use template::DEFAULT_FOLDER_FORMAT;
pub use template::DEFAULT_TRACK_FORMAT;
pub use template::MISSING_VALUE;
pub use template::TemplateAttributes;
pub use template::TemplateContext;
pub use template::check_template;
pub use template::placeholders;
pub use template::render_template;
pub use template::sanitize_filename;
pub use template::sanitize_template;
pub use template::strip_extension;
pub use template::track_file_name;
