//! # CLI Module
//!
//! This module provides the command-line presentation layer for Sporlgen, a
//! Spotify playlist generator. It turns subcommands into calls on the core
//! (authorization flow, generator, chart lookup) and renders prompts, progress
//! and errors in the terminal.
//!
//! ## Commands
//!
//! ### Authentication
//!
//! - [`auth`] - Ensures a cached access token, or forces a fresh authorization
//!
//! ### Playlist Generation
//!
//! - [`genre`] - Builds a playlist from a genre search
//! - [`chart`] - Builds a playlist from a Billboard Hot-100 chart date
//!
//! ### Information
//!
//! - [`genres`] - Lists the suggested genres
//! - [`preview`] - Shows the chart titles for a date without touching Spotify
//!
//! ## Presentation
//!
//! The core talks to the terminal only through [`crate::interaction::Interaction`]:
//!
//! - [`ConsoleInteraction`] - Prompts for the pasted redirect URL on stdin and
//!   draws a progress bar
//! - [`CallbackInteraction`] - Same console output, but the redirect URL is
//!   captured by the local callback server (`--listen`)
//!
//! ## Usage Patterns
//!
//! ```bash
//! sporlgen auth                                                  # Authorize once
//! sporlgen genre --user me --name "Rock Mix" --genre Rock        # Genre playlist
//! sporlgen chart --user me --name "1985" --date 1985-07-13       # Chart playlist
//! sporlgen preview --date 1985-07-13                             # Titles only
//! ```
//!
//! ## Error Handling
//!
//! Fatal errors print one short message and exit with status 1. Playlists
//! created before a failure are left on the server.

mod auth;
mod console;
mod genres;
mod playlist;
mod preview;

use std::sync::Arc;

pub use auth::auth;
pub use console::{CallbackInteraction, ConsoleInteraction};
pub use genres::{GENRE_LIST, genres};
pub use playlist::{chart, genre};
pub use preview::preview;

use crate::{Error, Result, config::Config, interaction::Interaction, server};

/// Picks the presentation for a run: pasted redirect URL, or the local
/// callback server when `listen` is set.
pub async fn interaction_for(config: &Config, listen: bool) -> Result<Arc<dyn Interaction>> {
    if !listen {
        return Ok(Arc::new(ConsoleInteraction::new()));
    }

    let addr = config.server_address.as_deref().ok_or_else(|| {
        Error::Config("SERVER_ADDRESS must be set to use --listen".to_string())
    })?;
    let server = server::start_callback_server(addr, &config.redirect_uri).await?;

    Ok(Arc::new(CallbackInteraction::new(
        ConsoleInteraction::new(),
        server,
    )))
}
