//! # Spotify Integration Module
//!
//! This module provides the interface to the Spotify accounts service and Web
//! API that playlist generation needs. It handles the OAuth token lifecycle,
//! playlist creation, catalog search and track appends.
//!
//! ## Architecture
//!
//! ```text
//! Generator / CLI
//!          ↓
//! Spotify Integration Layer
//!     ├── Authentication (authorization code + refresh)
//!     └── Playlist Operations (create, search, append)
//!          ↓
//! HTTP Layer (reqwest, JSON)
//!          ↓
//! Spotify Accounts Service / Web API
//! ```
//!
//! ## Core Modules
//!
//! ### Authentication Module
//!
//! [`auth`] - [`AuthFlow`] produces valid access tokens:
//! - **Cached Tokens**: Unexpired tokens come straight from the credential file
//! - **Refresh**: Expired tokens are refreshed once with the stored refresh token
//! - **Authorization Code Flow**: Browser consent, pasted redirect URL, code
//!   exchange with Basic client authentication
//!
//! ### Playlist Module
//!
//! [`playlist`] - [`PlaylistService`] builds the playlist:
//! - **Playlist Creation**: Private playlists under the given user
//! - **Genre Search**: Up to 50 titles from a random result page
//! - **Title Resolution**: One search per title, misses are skipped
//! - **Track Append**: All resolved URIs in a single request
//!
//! ## API Coverage
//!
//! - `POST /api/token` - Code exchange and token refresh
//! - `GET /authorize` - Consent page (opened in the browser only)
//! - `POST /users/{user_id}/playlists` - Create playlist
//! - `GET /search` - Genre and title search
//! - `POST /playlists/{playlist_id}/tracks` - Add tracks
//!
//! ## Error Handling
//!
//! Every HTTP failure is logged with context and returned as the matching
//! [`crate::Error`] variant. No request is retried.

pub mod auth;
pub mod playlist;

pub use auth::AuthFlow;
pub use playlist::PlaylistService;
