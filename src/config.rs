//! Configuration management for the Spotify Playlist Generator.
//!
//! This module handles loading configuration values from environment variables
//! and `.env` files. Values are read exactly once, into a [`Config`] that is
//! handed to the authorization flow, the playlist service and the chart lookup.
//! No other module reads the environment.
//!
//! The configuration system follows a hierarchical approach:
//! 1. Environment variables (highest priority)
//! 2. `.env` file in the local data directory
//! 3. Application defaults (where applicable)

use std::{env, path::PathBuf};

use crate::{Error, Res, Result};

pub const DEFAULT_AUTH_URL: &str = "https://accounts.spotify.com/authorize";
pub const DEFAULT_TOKEN_URL: &str = "https://accounts.spotify.com/api/token";
pub const DEFAULT_API_URL: &str = "https://api.spotify.com/v1";
pub const DEFAULT_SCOPE: &str = "playlist-modify-private";
pub const DEFAULT_CHART_URL: &str = "https://www.billboard.com/charts/hot-100";

/// Returns the application directory inside the platform local data directory.
///
/// - Linux: `~/.local/share/sporlgen`
/// - macOS: `~/Library/Application Support/sporlgen`
/// - Windows: `%LOCALAPPDATA%/sporlgen`
pub fn data_dir() -> PathBuf {
    let mut path = dirs::data_local_dir().unwrap_or_else(|| PathBuf::from("."));
    path.push("sporlgen");
    path
}

/// Loads environment variables from a `.env` file in the local data directory.
///
/// Creates the directory structure if it doesn't exist. A missing `.env`
/// file is not an error: every value may also come from the process
/// environment.
///
/// # Errors
///
/// This function will return an error if:
/// - The parent directory cannot be created
/// - The `.env` file exists but cannot be read or parsed
pub async fn load_env() -> Res<()> {
    let path = data_dir().join(".env");
    if let Some(parent) = path.parent() {
        async_fs::create_dir_all(parent).await?;
    }

    if path.is_file() {
        dotenv::from_path(&path)?;
    }
    Ok(())
}

/// Runtime configuration for one playlist build.
#[derive(Debug, Clone, PartialEq)]
pub struct Config {
    pub client_id: String,
    pub client_secret: String,
    pub redirect_uri: String,
    pub scope: String,
    pub auth_url: String,
    pub token_url: String,
    pub api_url: String,
    pub chart_url: String,
    /// Bind address of the local redirect catcher, if one should be used.
    pub server_address: Option<String>,
    pub credentials_path: PathBuf,
}

impl Config {
    /// Builds a configuration with Spotify's public endpoints and the default
    /// credential location.
    pub fn new(
        client_id: impl Into<String>,
        client_secret: impl Into<String>,
        redirect_uri: impl Into<String>,
    ) -> Self {
        Self {
            client_id: client_id.into(),
            client_secret: client_secret.into(),
            redirect_uri: redirect_uri.into(),
            scope: DEFAULT_SCOPE.to_string(),
            auth_url: DEFAULT_AUTH_URL.to_string(),
            token_url: DEFAULT_TOKEN_URL.to_string(),
            api_url: DEFAULT_API_URL.to_string(),
            chart_url: DEFAULT_CHART_URL.to_string(),
            server_address: None,
            credentials_path: data_dir().join("cache/token.json"),
        }
    }

    /// Reads the configuration from the process environment.
    ///
    /// Call [`load_env`] first so values from the `.env` file are visible.
    pub fn from_env() -> Result<Self> {
        Self::from_lookup(|key| env::var(key).ok())
    }

    /// Reads the configuration through an arbitrary key lookup.
    ///
    /// # Environment Keys
    ///
    /// Required: `SPOTIFY_API_AUTH_CLIENT_ID`, `SPOTIFY_API_AUTH_CLIENT_SECRET`,
    /// `SPOTIFY_API_REDIRECT_URI`.
    ///
    /// Optional: `SPOTIFY_API_AUTH_SCOPE`, `SPOTIFY_API_AUTH_URL`,
    /// `SPOTIFY_API_TOKEN_URL`, `SPOTIFY_API_URL`, `BILLBOARD_CHART_URL`,
    /// `SERVER_ADDRESS`, `SPORLGEN_CREDENTIALS_PATH`.
    ///
    /// # Errors
    ///
    /// Returns [`Error::Config`] naming the first missing required key.
    pub fn from_lookup<F>(lookup: F) -> Result<Self>
    where
        F: Fn(&str) -> Option<String>,
    {
        let value = |key: &str| lookup(key).filter(|v| !v.trim().is_empty());
        let required = |key: &str| {
            value(key).ok_or_else(|| Error::Config(format!("{key} must be set")))
        };

        let mut config = Self::new(
            required("SPOTIFY_API_AUTH_CLIENT_ID")?,
            required("SPOTIFY_API_AUTH_CLIENT_SECRET")?,
            required("SPOTIFY_API_REDIRECT_URI")?,
        );

        if let Some(scope) = value("SPOTIFY_API_AUTH_SCOPE") {
            config.scope = scope;
        }
        if let Some(url) = value("SPOTIFY_API_AUTH_URL") {
            config.auth_url = url;
        }
        if let Some(url) = value("SPOTIFY_API_TOKEN_URL") {
            config.token_url = url;
        }
        if let Some(url) = value("SPOTIFY_API_URL") {
            config.api_url = url.trim_end_matches('/').to_string();
        }
        if let Some(url) = value("BILLBOARD_CHART_URL") {
            config.chart_url = url.trim_end_matches('/').to_string();
        }
        if let Some(path) = value("SPORLGEN_CREDENTIALS_PATH") {
            config.credentials_path = PathBuf::from(path);
        }
        config.server_address = value("SERVER_ADDRESS");

        Ok(config)
    }
}
