use axum::{Extension, response::Json};
use serde_json::{Value, json};

use crate::server::RedirectSlot;

pub async fn health(Extension(slot): Extension<RedirectSlot>) -> Json<Value> {
    let awaiting_redirect = slot.lock().await.is_some();
    Json(json!({
        "status": "ok",
        "name": env!("CARGO_PKG_NAME"),
        "version": env!("CARGO_PKG_VERSION"),
        "awaiting_redirect": awaiting_redirect
    }))
}
