use sporlgen::utils::*;

#[test]
fn test_parse_authorization_code() {
    assert_eq!(
        parse_authorization_code("http://127.0.0.1:8888/callback?code=AQBx-123"),
        Some("AQBx-123".to_string())
    );

    // Everything after the first '=' is taken as is
    assert_eq!(
        parse_authorization_code("http://127.0.0.1:8888/callback?code=abc&state=xyz"),
        Some("abc&state=xyz".to_string())
    );

    // Surrounding whitespace from pasting is ignored
    assert_eq!(
        parse_authorization_code("  http://localhost/callback?code=abc\n"),
        Some("abc".to_string())
    );
}

#[test]
fn test_parse_authorization_code_without_code() {
    assert_eq!(parse_authorization_code("http://127.0.0.1:8888/callback"), None);
    assert_eq!(parse_authorization_code("http://127.0.0.1:8888/callback?code="), None);
    assert_eq!(parse_authorization_code(""), None);
}

#[test]
fn test_basic_auth_header() {
    assert_eq!(
        basic_auth_header("client-id", "client-secret"),
        "Basic Y2xpZW50LWlkOmNsaWVudC1zZWNyZXQ="
    );
}

#[test]
fn test_progress_increment() {
    assert!((progress_increment(50.0, 4) - 12.5).abs() < 1e-9);
    assert!((progress_increment(20.0, 3) - 80.0 / 3.0).abs() < 1e-9);
    assert!((progress_increment(100.0, 5)).abs() < 1e-9);

    // Empty batch falls back to a step of one
    assert_eq!(progress_increment(50.0, 0), 1.0);
}

#[test]
fn test_random_search_offset_range() {
    for _ in 0..1_000 {
        let offset = random_search_offset();
        assert!((1..=950).contains(&offset));
    }
}

#[test]
fn test_now_epoch_is_current() {
    let now = now_epoch();
    let secs = chrono::Utc::now().timestamp() as f64;
    assert!((now - secs).abs() < 5.0);
}
