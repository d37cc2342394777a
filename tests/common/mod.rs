#![allow(dead_code)]

use std::{path::Path, sync::Mutex};

use async_trait::async_trait;
use sporlgen::{config::Config, interaction::Interaction};
use wiremock::MockServer;

// Helper function to point every endpoint at the mock server
pub fn test_config(server: &MockServer, dir: &Path) -> Config {
    let mut config = Config::new("client-id", "client-secret", "http://127.0.0.1:8888/callback");
    config.auth_url = format!("{}/authorize", server.uri());
    config.token_url = format!("{}/api/token", server.uri());
    config.api_url = format!("{}/v1", server.uri());
    config.chart_url = format!("{}/charts/hot-100", server.uri());
    config.credentials_path = dir.join("token.json");
    config
}

/// Records everything the core sends to the presentation layer.
#[derive(Default)]
pub struct RecordingInteraction {
    pub redirect_url: Option<String>,
    pub errors: Mutex<Vec<String>>,
    pub progress: Mutex<Vec<f64>>,
    pub opened: Mutex<Vec<String>>,
    pub prompts: Mutex<usize>,
}

impl RecordingInteraction {
    pub fn with_redirect(url: &str) -> Self {
        Self {
            redirect_url: Some(url.to_string()),
            ..Default::default()
        }
    }

    pub fn errors(&self) -> Vec<String> {
        self.errors.lock().unwrap().clone()
    }

    pub fn progress(&self) -> Vec<f64> {
        self.progress.lock().unwrap().clone()
    }

    pub fn opened(&self) -> Vec<String> {
        self.opened.lock().unwrap().clone()
    }

    pub fn prompts(&self) -> usize {
        *self.prompts.lock().unwrap()
    }
}

#[async_trait]
impl Interaction for RecordingInteraction {
    fn notify_error(&self, message: &str) {
        self.errors.lock().unwrap().push(message.to_string());
    }

    async fn request_redirect_url(&self) -> Option<String> {
        *self.prompts.lock().unwrap() += 1;
        self.redirect_url.clone()
    }

    fn report_progress(&self, delta: f64) {
        self.progress.lock().unwrap().push(delta);
    }

    fn open_authorization_url(&self, url: &str) {
        self.opened.lock().unwrap().push(url.to_string());
    }
}

pub fn search_body(items: &[(&str, &str)]) -> serde_json::Value {
    let items: Vec<serde_json::Value> = items
        .iter()
        .map(|(name, uri)| serde_json::json!({ "name": name, "uri": uri }))
        .collect();
    serde_json::json!({ "tracks": { "items": items } })
}
