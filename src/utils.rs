use base64::{Engine, engine::general_purpose::STANDARD};
use chrono::Utc;
use rand::Rng;

/// Inclusive bounds of the random offset used by genre searches.
pub const GENRE_OFFSET_RANGE: (u32, u32) = (1, 950);

/// Current wall-clock time as epoch seconds.
pub fn now_epoch() -> f64 {
    Utc::now().timestamp_millis() as f64 / 1000.0
}

/// Builds the `Authorization` header value for the code exchange.
pub fn basic_auth_header(client_id: &str, client_secret: &str) -> String {
    format!(
        "Basic {}",
        STANDARD.encode(format!("{client_id}:{client_secret}"))
    )
}

/// Extracts the authorization code from a pasted redirect URL.
///
/// Everything after the first `=` is the code, matching how the redirect is
/// read back from the user. Returns `None` when there is no `=` or nothing
/// follows it.
pub fn parse_authorization_code(redirect_url: &str) -> Option<String> {
    redirect_url
        .trim()
        .split_once('=')
        .map(|(_, code)| code.to_string())
        .filter(|code| !code.is_empty())
}

/// Per-title progress step: the remaining share spread over `total` titles.
///
/// Falls back to `1.0` for an empty batch.
pub fn progress_increment(current: f64, total: usize) -> f64 {
    if total == 0 {
        return 1.0;
    }
    (100.0 - current) / total as f64
}

/// Random result offset so repeated genre searches return different pages.
pub fn random_search_offset() -> u32 {
    let (low, high) = GENRE_OFFSET_RANGE;
    rand::rng().random_range(low..=high)
}
