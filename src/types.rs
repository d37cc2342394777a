use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};
use tabled::Tabled;

/// Lifetime assigned to every freshly issued access token, in seconds.
pub const TOKEN_LIFETIME_SECS: f64 = 3600.0;

/// OAuth token record persisted by the credential store.
///
/// `expires_at` is always issue time + [`TOKEN_LIFETIME_SECS`]. Any other
/// field the provider returned is kept in `extra` and written back unchanged.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TokenRecord {
    pub access_token: String,
    pub refresh_token: String,
    /// Epoch seconds.
    pub expires_at: f64,
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

impl TokenRecord {
    pub fn new(access_token: String, refresh_token: String, issued_at: f64) -> Self {
        Self {
            access_token,
            refresh_token,
            expires_at: issued_at + TOKEN_LIFETIME_SECS,
            extra: Map::new(),
        }
    }

    /// Builds a record from a token endpoint response.
    ///
    /// The provider's refresh token wins; `fallback_refresh` is used when the
    /// response carries none (refresh responses usually don't).
    pub fn from_response(
        response: TokenResponse,
        fallback_refresh: Option<&str>,
        issued_at: f64,
    ) -> Option<Self> {
        let refresh_token = response
            .refresh_token
            .or_else(|| fallback_refresh.map(str::to_string))?;

        let mut record = Self::new(response.access_token, refresh_token, issued_at);
        record.extra = response.extra;
        Some(record)
    }

    /// Valid while `now < expires_at`; a token expiring exactly now is stale.
    pub fn is_valid_at(&self, now: f64) -> bool {
        now < self.expires_at
    }
}

/// Body returned by the token endpoint for both grant types.
#[derive(Debug, Clone, Deserialize)]
pub struct TokenResponse {
    pub access_token: String,
    #[serde(default)]
    pub refresh_token: Option<String>,
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

/// A playlist created during the current build.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PlaylistHandle {
    pub id: String,
    pub owner_username: String,
    pub name: String,
}

/// Progress of one build, 0 to 100.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct ProgressState {
    pub current: f64,
}

impl ProgressState {
    pub fn new(current: f64) -> Self {
        Self { current }
    }

    /// Moves forward by `delta`, never past 100 and never backwards.
    pub fn advance(&mut self, delta: f64) -> f64 {
        if delta > 0.0 {
            self.current = (self.current + delta).min(100.0);
        }
        self.current
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CreatePlaylistRequest {
    pub name: String,
    pub public: bool,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CreatePlaylistResponse {
    pub id: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SearchResponse {
    pub tracks: Tracks,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Tracks {
    pub items: Vec<Track>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Track {
    pub name: String,
    pub uri: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AddTrackToPlaylistRequest {
    pub uris: Vec<String>,
}

#[derive(Tabled)]
pub struct ChartTableRow {
    #[tabled(rename = "#")]
    pub position: usize,
    pub title: String,
}

#[derive(Tabled)]
pub struct GenreTableRow {
    pub genre: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn new_record_expires_one_hour_after_issue() {
        let record = TokenRecord::new("A".into(), "R".into(), 1_000.0);
        assert_eq!(record.expires_at, 4_600.0);
    }

    #[test]
    fn validity_is_strict() {
        let record = TokenRecord::new("A".into(), "R".into(), 0.0);
        assert!(record.is_valid_at(3_599.9));
        assert!(!record.is_valid_at(3_600.0));
    }

    #[test]
    fn response_without_refresh_token_keeps_previous_one() {
        let response: TokenResponse = serde_json::from_str(
            r#"{"access_token":"new","token_type":"Bearer","expires_in":3600}"#,
        )
        .unwrap();

        let record = TokenRecord::from_response(response, Some("old-refresh"), 10.0).unwrap();
        assert_eq!(record.access_token, "new");
        assert_eq!(record.refresh_token, "old-refresh");
        assert_eq!(record.extra["token_type"], "Bearer");
    }

    #[test]
    fn response_without_any_refresh_token_is_rejected() {
        let response: TokenResponse =
            serde_json::from_str(r#"{"access_token":"new"}"#).unwrap();
        assert!(TokenRecord::from_response(response, None, 10.0).is_none());
    }

    #[test]
    fn progress_is_capped_and_monotonic() {
        let mut progress = ProgressState::new(90.0);
        assert_eq!(progress.advance(5.0), 95.0);
        assert_eq!(progress.advance(-10.0), 95.0);
        assert_eq!(progress.advance(20.0), 100.0);
    }
}
