//! # Interaction Module
//!
//! The seam between the playlist core and whatever presents it to a user.
//! The core never prints prompts or draws progress itself; it talks to an
//! [`Interaction`] implementation handed in by the caller.
//!
//! Three kinds of traffic cross this seam:
//!
//! - **Redirect URL** - during authorization the core waits, without a
//!   timeout, for the URL the user was redirected to. Returning `None`
//!   (prompt closed, input ended, callback server gone) cancels the
//!   authorization cleanly.
//! - **Progress** - increments in percentage points as titles resolve.
//! - **Errors** - one short human-readable message per failed build.
//!
//! ## Implementations
//!
//! - [`crate::cli::ConsoleInteraction`] - stdin prompt and progress bar
//! - [`crate::cli::CallbackInteraction`] - redirect captured by the local server

use async_trait::async_trait;

use crate::warning;

#[async_trait]
pub trait Interaction: Send + Sync {
    /// Shows a user-facing error message.
    fn notify_error(&self, message: &str);

    /// Waits for the redirect URL the user landed on after consenting.
    async fn request_redirect_url(&self) -> Option<String>;

    /// Advances the visible progress by `delta` percentage points.
    fn report_progress(&self, delta: f64);

    /// Presents the authorization URL to the user.
    fn open_authorization_url(&self, url: &str) {
        if webbrowser::open(url).is_err() {
            warning!(
                "Failed to open browser. Please navigate to the following URL manually:\n{}",
                url
            )
        }
    }
}
