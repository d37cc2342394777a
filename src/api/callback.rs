use std::sync::Arc;

use axum::{Extension, extract::RawQuery, response::Html};

use crate::server::RedirectSlot;

/// Hands the redirect back to the waiting authorization flow.
///
/// The URL is rebuilt from the configured redirect URI and the raw query, so
/// the flow parses it exactly like a pasted one.
pub async fn callback(
    RawQuery(query): RawQuery,
    Extension(slot): Extension<RedirectSlot>,
    Extension(redirect_uri): Extension<Arc<String>>,
) -> Html<&'static str> {
    let query = query.unwrap_or_default();

    // A denied consent closes the channel so the waiting flow fails
    if !query.contains("code=") {
        if is_denial(&query) {
            slot.lock().await.take();
            return Html("<h4>Authorization denied.</h4><p>Close browser window.</p>");
        }
        return Html("<h4>Missing authorization code.</h4>");
    }

    let Some(sender) = slot.lock().await.take() else {
        return Html("<h4>Authorization already received.</h4>");
    };

    if sender.send(format!("{redirect_uri}?{query}")).is_err() {
        return Html("<h4>Login failed.</h4>");
    }

    Html("<h2>Authorization received.</h2><p>Close browser window.</p>")
}

fn is_denial(query: &str) -> bool {
    query
        .split('&')
        .any(|pair| pair == "error" || pair.starts_with("error="))
}
