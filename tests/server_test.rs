use std::time::Duration;

use sporlgen::{
    cli::{CallbackInteraction, ConsoleInteraction},
    interaction::Interaction,
    server::start_callback_server,
};
use tokio::time::timeout;

const REDIRECT_URI: &str = "http://127.0.0.1:8888/callback";

#[tokio::test]
async fn test_callback_delivers_redirect_url_once() {
    let mut server = start_callback_server("127.0.0.1:0", REDIRECT_URI)
        .await
        .unwrap();
    let base = format!("http://{}", server.addr());

    let health: serde_json::Value = reqwest::get(format!("{base}/health"))
        .await
        .unwrap()
        .json()
        .await
        .unwrap();
    assert_eq!(health["status"], "ok");
    assert_eq!(health["awaiting_redirect"], true);

    let first = reqwest::get(format!("{base}/callback?code=abc123"))
        .await
        .unwrap()
        .text()
        .await
        .unwrap();
    assert!(first.contains("Authorization received"));

    let second = reqwest::get(format!("{base}/callback?code=other"))
        .await
        .unwrap()
        .text()
        .await
        .unwrap();
    assert!(second.contains("already received"));

    assert_eq!(
        server.wait_for_redirect().await,
        Some(format!("{REDIRECT_URI}?code=abc123"))
    );
}

#[tokio::test]
async fn test_callback_without_code_keeps_waiting() {
    let mut server = start_callback_server("127.0.0.1:0", REDIRECT_URI)
        .await
        .unwrap();
    let base = format!("http://{}", server.addr());

    let body = reqwest::get(format!("{base}/callback?state=xyz"))
        .await
        .unwrap()
        .text()
        .await
        .unwrap();
    assert!(body.contains("Missing authorization code"));

    let health: serde_json::Value = reqwest::get(format!("{base}/health"))
        .await
        .unwrap()
        .json()
        .await
        .unwrap();
    assert_eq!(health["awaiting_redirect"], true);

    let waited = timeout(Duration::from_millis(200), server.wait_for_redirect()).await;
    assert!(waited.is_err());
}

#[tokio::test]
async fn test_denied_consent_ends_the_wait() {
    let mut server = start_callback_server("127.0.0.1:0", REDIRECT_URI)
        .await
        .unwrap();
    let base = format!("http://{}", server.addr());

    let body = reqwest::get(format!("{base}/callback?error=access_denied"))
        .await
        .unwrap()
        .text()
        .await
        .unwrap();
    assert!(body.contains("Authorization denied"));

    let waited = timeout(Duration::from_secs(2), server.wait_for_redirect())
        .await
        .expect("wait should end once consent is denied");
    assert_eq!(waited, None);
}

#[tokio::test]
async fn test_denied_consent_cancels_callback_interaction() {
    let server = start_callback_server("127.0.0.1:0", REDIRECT_URI)
        .await
        .unwrap();
    let base = format!("http://{}", server.addr());
    let interaction = CallbackInteraction::new(ConsoleInteraction::hidden(), server);

    let deny = tokio::spawn(async move {
        reqwest::get(format!("{base}/callback?error=access_denied"))
            .await
            .unwrap()
            .text()
            .await
            .unwrap()
    });

    let redirect = timeout(Duration::from_secs(2), interaction.request_redirect_url())
        .await
        .expect("prompt should be cancelled once consent is denied");
    assert_eq!(redirect, None);
    assert!(deny.await.unwrap().contains("Authorization denied"));
}

#[tokio::test]
async fn test_invalid_address_is_config_error() {
    let result = start_callback_server("not-an-address", REDIRECT_URI).await;
    assert!(matches!(result, Err(sporlgen::Error::Config(_))));
}
