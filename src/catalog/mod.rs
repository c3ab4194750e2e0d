//! # Catalog Module
//!
//! Turns the raw release records of an artist or label listing into a
//! deduplicated discography.
//!
//! ## Pipeline
//!
//! ```text
//! raw JSON records
//!     ↓  CatalogItem::from_value (admission, rejects malformed records)
//! CatalogItem list
//!     ↓  essence (grouping key per title)
//! groups of editions
//!     ↓  TypePolicy (remaster / extra classification)
//!     ↓  filter_discography (best quality, artist check, remaster preference)
//! one release per title
//! ```
//!
//! Everything here is pure computation over data that was already fetched.
//! The functions keep no state between calls and can be used from several
//! tasks at once.

mod classify;
mod discography;
mod essence;
mod item;

pub use classify::ReleaseType;
pub use classify::TypePolicy;
pub use classify::is_type;
pub use discography::FilterOptions;
pub use discography::filter_discography;
pub use discography::filter_discography_with;
pub use essence::essence;
pub use item::CatalogItem;
pub use item::admit_all;
pub use item::is_studio_release;
