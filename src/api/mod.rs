//! # API Module
//!
//! HTTP endpoints of the local redirect catcher started with `--listen`.
//!
//! ## Endpoints
//!
//! - [`callback`] - Receives Spotify's OAuth redirect and passes the redirect
//!   URL to the waiting authorization flow through a single-shot channel.
//! - [`health`] - Returns application status and version.
//!
//! ## Usage Example
//!
//! ```rust,ignore
//! use sporlgen::server;
//!
//! let mut server = server::start_callback_server("127.0.0.1:8888", &config.redirect_uri).await?;
//! let redirect_url = server.wait_for_redirect().await;
//! ```

mod callback;
mod health;

pub use callback::callback;
pub use health::health;
