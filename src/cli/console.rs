use std::{sync::Mutex, time::Duration};

use async_trait::async_trait;
use colored::Colorize;
use indicatif::{ProgressBar, ProgressStyle};
use tokio::io::{AsyncBufReadExt, BufReader};

use crate::{info, interaction::Interaction, server::CallbackServer, types::ProgressState};

/// Terminal presentation: stdin prompt for the redirect URL, progress bar for
/// the build.
pub struct ConsoleInteraction {
    bar: ProgressBar,
    progress: Mutex<ProgressState>,
}

impl ConsoleInteraction {
    pub fn new() -> Self {
        Self::with_bar(ProgressBar::new(100))
    }

    /// Console without a visible progress bar.
    pub fn hidden() -> Self {
        Self::with_bar(ProgressBar::hidden())
    }

    fn with_bar(bar: ProgressBar) -> Self {
        if let Ok(style) =
            ProgressStyle::with_template("{spinner:.blue} [{bar:40.green/white}] {pos:>3}%")
        {
            bar.set_style(style.tick_chars("⠋⠙⠹⠸⠼⠴⠦⠧⠇⠏ "));
        }
        Self {
            bar,
            progress: Mutex::new(ProgressState::default()),
        }
    }

    pub fn current_progress(&self) -> f64 {
        self.progress
            .lock()
            .map(|p| p.current)
            .unwrap_or_else(|e| e.into_inner().current)
    }
}

impl Default for ConsoleInteraction {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl Interaction for ConsoleInteraction {
    fn notify_error(&self, message: &str) {
        self.bar.abandon();
        println!("[{}] Something went wrong: {}", "!".red().bold(), message);
    }

    async fn request_redirect_url(&self) -> Option<String> {
        self.bar
            .suspend(|| info!("Paste the URL you were redirected to and press Enter:"));

        let mut line = String::new();
        let mut reader = BufReader::new(tokio::io::stdin());
        match reader.read_line(&mut line).await {
            Ok(0) | Err(_) => None,
            Ok(_) => Some(line.trim().to_string()).filter(|url| !url.is_empty()),
        }
    }

    fn report_progress(&self, delta: f64) {
        let current = {
            let mut progress = self.progress.lock().unwrap_or_else(|e| e.into_inner());
            progress.advance(delta)
        };

        self.bar.enable_steady_tick(Duration::from_millis(100));
        self.bar.set_position(current.round() as u64);
        if current >= 100.0 {
            self.bar.finish();
        }
    }
}

/// Console presentation that takes the redirect from the local callback
/// server instead of a pasted URL.
pub struct CallbackInteraction {
    console: ConsoleInteraction,
    server: tokio::sync::Mutex<CallbackServer>,
}

impl CallbackInteraction {
    pub fn new(console: ConsoleInteraction, server: CallbackServer) -> Self {
        Self {
            console,
            server: tokio::sync::Mutex::new(server),
        }
    }
}

#[async_trait]
impl Interaction for CallbackInteraction {
    fn notify_error(&self, message: &str) {
        self.console.notify_error(message);
    }

    async fn request_redirect_url(&self) -> Option<String> {
        let mut server = self.server.lock().await;
        self.console.bar.suspend(|| {
            info!(
                "Waiting for the Spotify redirect on http://{}/callback ...",
                server.addr()
            )
        });
        server.wait_for_redirect().await
    }

    fn report_progress(&self, delta: f64) {
        self.console.report_progress(delta);
    }
}
