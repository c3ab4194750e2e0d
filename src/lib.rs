//! Qobuz Discography Downloader CLI Library
//!
//! This library provides the decision logic behind the `qdlcli` downloader:
//! expanding an artist or label catalog into a deduplicated list of releases,
//! negotiating the delivered audio format for a requested quality tier, and
//! turning user naming templates into safe folder and file names. The same
//! plans drive the downloads, searches and lucky downloads of the binary.
//!
//! # Modules
//!
//! - `catalog` - Catalog items, title grouping, release classification and discography filtering
//! - `cli` - Command-line interface implementations
//! - `config` - Configuration management and environment variables
//! - `download` - Per-track negotiation, naming plans and file transfers
//! - `error` - Typed error enums shared across the crate
//! - `format` - Quality tiers, format negotiation and naming templates
//! - `management` - Local caching of raw catalog listings
//! - `qobuz` - Qobuz API client used to fetch catalogs, track formats and search results
//! - `types` - Data structures and type definitions
//! - `url` - Resolution of user supplied URLs into item kinds and ids
//!
//! # Example
//!
//! ```
//! use qdlcli::catalog::{FilterOptions, filter_discography};
//!
//! let kept = filter_discography(&items, "Miles Davis", FilterOptions::default());
//! ```

pub mod catalog;
pub mod cli;
pub mod config;
pub mod download;
pub mod error;
pub mod format;
pub mod management;
pub mod qobuz;
pub mod types;
pub mod url;

/// A convenient Result type alias for operations that may fail.
///
/// Used by the command layer where errors of different kinds are reported
/// to the user rather than matched on. Library functions return their own
/// typed errors from [`error`].
pub type Res<T> = std::result::Result<T, Box<dyn std::error::Error + Send + Sync>>;

/// Prints an informational message with a blue bullet point.
///
/// # Example
///
/// ```
/// info!("Found {} releases", count);
/// ```
#[macro_export]
macro_rules! info {
  ($($arg:tt)*) => ({
    use colored::Colorize;
    println!("[{}] {}", "o".blue().bold(), std::format_args!($($arg)*));
  })
}

/// Prints a success message with a green checkmark.
#[macro_export]
macro_rules! success {
  ($($arg:tt)*) => ({
    use colored::Colorize;
    println!("[{}] {}", "✓".green().bold(), std::format_args!($($arg)*));
  })
}

/// Prints an error message with a red exclamation mark and exits the program.
///
/// Only meant for the command layer. Library code returns typed errors
/// instead and leaves the decision to terminate to the caller.
///
/// # Example
///
/// ```
/// error!("Missing required environment variable: {}", var_name);
/// // Program exits here - code after this will not execute
/// ```
#[macro_export]
macro_rules! error {
  ($($arg:tt)*) => ({
    use colored::Colorize;
    println!("[{}] {}", "!".red().bold(), std::format_args!($($arg)*));
    std::process::exit(1);
  })
}

/// Prints a warning message with a yellow exclamation mark.
///
/// Used for recoverable issues such as a skipped malformed release or a
/// naming template that had to be replaced by a safe default.
#[macro_export]
macro_rules! warning {
  ($($arg:tt)*) => ({
    use colored::Colorize;
    println!("[{}] {}", "!".yellow().bold(), std::format_args!($($arg)*));
  })
}

/// Prints a dimmed diagnostic line when `QDL_DEBUG` is set.
///
/// # Example
///
/// ```
/// debug!("{} - {} ({}/{})", title, version, bit_depth, sampling_rate);
/// ```
#[macro_export]
macro_rules! debug {
  ($($arg:tt)*) => ({
    if std::env::var_os("QDL_DEBUG").is_some() {
      use colored::Colorize;
      println!("[{}] {}", "~".dimmed(), std::format_args!($($arg)*));
    }
  })
}
