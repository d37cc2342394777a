//! Spotify Playlist Generator CLI Library
//!
//! This library builds Spotify playlists either from a music genre or from a
//! historical Billboard Hot-100 chart. It includes modules for the OAuth token
//! lifecycle, Spotify Web API communication, chart scraping, configuration
//! management and the console presentation used by the binary.
//!
//! # Modules
//!
//! - `api` - HTTP endpoints for the local redirect catcher
//! - `chart` - Billboard Hot-100 lookup and chart date validation
//! - `cli` - Command-line interface implementations
//! - `config` - Configuration management and environment variables
//! - `error` - Error types shared by every layer
//! - `generator` - End-to-end playlist build
//! - `interaction` - Seam between the core and the presentation layer
//! - `management` - Local credential cache
//! - `server` - Local HTTP server for OAuth redirects
//! - `spotify` - Spotify Web API client implementation
//! - `types` - Data structures and type definitions
//! - `utils` - Utility functions and helpers
//!
//! # Example
//!
//! ```
//! use sporlgen::config;
//!
//! #[tokio::main]
//! async fn main() -> sporlgen::Res<()> {
//!     config::load_env().await?;
//!     let config = config::Config::from_env()?;
//!     // Hand the config to AuthFlow, PlaylistService, ...
//!     Ok(())
//! }
//! ```

pub mod api;
pub mod chart;
pub mod cli;
pub mod config;
pub mod error;
pub mod generator;
pub mod interaction;
pub mod management;
pub mod server;
pub mod spotify;
pub mod types;
pub mod utils;

pub use error::{Error, Result};

/// A convenient Result type alias for the binary's setup code.
///
/// Library operations return [`Result`] with the crate [`Error`]; this boxed
/// alias is used where unrelated error types meet, e.g. environment loading
/// in `main`.
///
/// # Example
///
/// ```
/// use sporlgen::Res;
///
/// async fn setup() -> Res<()> {
///     Ok(())
/// }
/// ```
pub type Res<T> = std::result::Result<T, Box<dyn std::error::Error + Send + Sync>>;

/// Prints a status line prefixed with a blue `o`.
///
/// Takes the same arguments as `println!`.
///
/// ```
/// use sporlgen::info;
///
/// info!("Resolving {} titles", 100);
/// ```
#[macro_export]
macro_rules! info {
  ($($arg:tt)*) => ({
    use colored::Colorize;
    println!("[{}] {}", "o".blue().bold(), std::format_args!($($arg)*));
  })
}

/// Prints a line prefixed with a green check mark once a step completed.
#[macro_export]
macro_rules! success {
  ($($arg:tt)*) => ({
    use colored::Colorize;
    println!("[{}] {}", "✓".green().bold(), std::format_args!($($arg)*));
  })
}

/// Prints a red `!` line and exits with status 1.
///
/// Only the binary's command handlers use this; library code returns
/// [`Error`] instead.
///
/// ```no_run
/// use sporlgen::error;
///
/// let date = "1899-01-01";
/// error!("Invalid chart date: {}", date);
/// ```
#[macro_export]
macro_rules! error {
  ($($arg:tt)*) => ({
    use colored::Colorize;
    println!("[{}] {}", "!".red().bold(), std::format_args!($($arg)*));
    std::process::exit(1);
  })
}

/// Prints a yellow `!` line for recoverable problems, e.g. a chart title
/// without a catalog match.
#[macro_export]
macro_rules! warning {
  ($($arg:tt)*) => ({
    use colored::Colorize;
    println!("[{}] {}", "!".yellow().bold(), std::format_args!($($arg)*));
  })
}
