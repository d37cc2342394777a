mod common;

use serde_json::json;
use sporlgen::{Error, spotify::PlaylistService, types::PlaylistHandle};
use wiremock::matchers::{body_json, header, method, path, query_param};
use wiremock::{Mock, MockServer, ResponseTemplate};

use common::{search_body, test_config};

fn service(server: &MockServer) -> PlaylistService {
    let dir = std::env::temp_dir();
    PlaylistService::new(&test_config(server, &dir), "token")
}

fn handle() -> PlaylistHandle {
    PlaylistHandle {
        id: "pl1".to_string(),
        owner_username: "someuser".to_string(),
        name: "Mix".to_string(),
    }
}

fn titles(names: &[&str]) -> Vec<String> {
    names.iter().map(|n| n.to_string()).collect()
}

async fn mount_title(server: &MockServer, title: &str, uri: Option<&str>) {
    let body = match uri {
        Some(uri) => search_body(&[(title, uri)]),
        None => search_body(&[]),
    };
    Mock::given(method("GET"))
        .and(path("/v1/search"))
        .and(query_param("q", title))
        .and(query_param("type", "track"))
        .respond_with(ResponseTemplate::new(200).set_body_json(body))
        .expect(1)
        .mount(server)
        .await;
}

#[tokio::test]
async fn test_create_playlist_returns_handle() {
    let server = MockServer::start().await;

    Mock::given(method("POST"))
        .and(path("/v1/users/someuser/playlists"))
        .and(header("authorization", "Bearer token"))
        .and(body_json(json!({ "name": "Mix", "public": false })))
        .respond_with(ResponseTemplate::new(201).set_body_json(json!({
            "id": "pl1",
            "name": "Mix",
            "public": false
        })))
        .expect(1)
        .mount(&server)
        .await;

    let playlist = service(&server).create("someuser", "Mix").await.unwrap();
    assert_eq!(playlist, handle());
}

#[tokio::test]
async fn test_create_playlist_for_unknown_user_fails() {
    let server = MockServer::start().await;

    Mock::given(method("POST"))
        .and(path("/v1/users/nobody/playlists"))
        .respond_with(ResponseTemplate::new(404))
        .expect(1)
        .mount(&server)
        .await;

    let err = service(&server).create("nobody", "Mix").await.unwrap_err();
    assert!(matches!(err, Error::PlaylistCreate(_)));
    assert_eq!(err.user_message(), "Please check your Username and try again");
}

#[tokio::test]
async fn test_genre_search_uses_random_page() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/v1/search"))
        .and(query_param("q", "genre:Rock"))
        .and(query_param("type", "track"))
        .and(query_param("limit", "50"))
        .respond_with(ResponseTemplate::new(200).set_body_json(search_body(&[
            ("Song A", "spotify:track:a"),
            ("Song B", "spotify:track:b"),
        ])))
        .expect(1)
        .mount(&server)
        .await;

    let found = service(&server).search_by_genre("Rock").await.unwrap();
    assert_eq!(found, titles(&["Song A", "Song B"]));

    let requests = server.received_requests().await.unwrap();
    let offset: u32 = requests[0]
        .url
        .query_pairs()
        .find(|(k, _)| k == "offset")
        .map(|(_, v)| v.parse().unwrap())
        .unwrap();
    assert!((1..=950).contains(&offset));
}

#[tokio::test]
async fn test_genre_search_failure_is_search_error() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/v1/search"))
        .respond_with(ResponseTemplate::new(500))
        .expect(1)
        .mount(&server)
        .await;

    let result = service(&server).search_by_genre("Rock").await;
    assert!(matches!(result, Err(Error::Search(_))));
}

#[tokio::test]
async fn test_empty_batch_adds_empty_list() {
    let server = MockServer::start().await;

    Mock::given(method("POST"))
        .and(path("/v1/playlists/pl1/tracks"))
        .and(body_json(json!({ "uris": [] })))
        .respond_with(ResponseTemplate::new(201).set_body_json(json!({ "snapshot_id": "s" })))
        .expect(1)
        .mount(&server)
        .await;

    let mut calls = Vec::new();
    let uris = service(&server)
        .resolve_and_add_tracks(&handle(), &[], 50.0, |d| calls.push(d))
        .await
        .unwrap();

    assert!(uris.is_empty());
    assert!(calls.is_empty());
    let searches = server
        .received_requests()
        .await
        .unwrap()
        .iter()
        .filter(|r| r.url.path() == "/v1/search")
        .count();
    assert_eq!(searches, 0);
}

#[tokio::test]
async fn test_unmatched_titles_are_skipped_in_order() {
    let server = MockServer::start().await;

    mount_title(&server, "One", Some("spotify:track:1")).await;
    mount_title(&server, "Missing", None).await;
    mount_title(&server, "Two", Some("spotify:track:2")).await;
    mount_title(&server, "Also Missing", None).await;
    mount_title(&server, "Three", Some("spotify:track:3")).await;

    Mock::given(method("POST"))
        .and(path("/v1/playlists/pl1/tracks"))
        .and(body_json(json!({
            "uris": ["spotify:track:1", "spotify:track:2", "spotify:track:3"]
        })))
        .respond_with(ResponseTemplate::new(201).set_body_json(json!({ "snapshot_id": "s" })))
        .expect(1)
        .mount(&server)
        .await;

    let mut calls = Vec::new();
    let uris = service(&server)
        .resolve_and_add_tracks(
            &handle(),
            &titles(&["One", "Missing", "Two", "Also Missing", "Three"]),
            50.0,
            |d| calls.push(d),
        )
        .await
        .unwrap();

    assert_eq!(uris.len(), 3);
    assert_eq!(calls.len(), 5);
    for delta in calls {
        assert!((delta - 10.0).abs() < 1e-9);
    }
}

#[tokio::test]
async fn test_first_search_hit_wins() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/v1/search"))
        .and(query_param("q", "Hello"))
        .respond_with(ResponseTemplate::new(200).set_body_json(search_body(&[
            ("Hello", "spotify:track:first"),
            ("Hello (Live)", "spotify:track:second"),
        ])))
        .mount(&server)
        .await;

    Mock::given(method("POST"))
        .and(path("/v1/playlists/pl1/tracks"))
        .and(body_json(json!({ "uris": ["spotify:track:first"] })))
        .respond_with(ResponseTemplate::new(201))
        .expect(1)
        .mount(&server)
        .await;

    let uris = service(&server)
        .resolve_and_add_tracks(&handle(), &titles(&["Hello"]), 0.0, |_| {})
        .await
        .unwrap();
    assert_eq!(uris, vec!["spotify:track:first"]);
}

#[tokio::test]
async fn test_fifty_titles_with_three_misses_adds_forty_seven() {
    let server = MockServer::start().await;

    let names: Vec<String> = (0..50).map(|i| format!("Title {i}")).collect();
    let misses = ["Title 3", "Title 17", "Title 42"];
    for name in &names {
        let uri = format!("spotify:track:{}", name.replace(' ', "_"));
        let hit = (!misses.contains(&name.as_str())).then_some(uri.as_str());
        mount_title(&server, name, hit).await;
    }

    Mock::given(method("POST"))
        .and(path("/v1/playlists/pl1/tracks"))
        .respond_with(ResponseTemplate::new(201))
        .expect(1)
        .mount(&server)
        .await;

    let mut calls = 0;
    let uris = service(&server)
        .resolve_and_add_tracks(&handle(), &names, 50.0, |_| calls += 1)
        .await
        .unwrap();

    assert_eq!(uris.len(), 47);
    assert_eq!(calls, 50);

    let requests = server.received_requests().await.unwrap();
    let add = requests
        .iter()
        .find(|r| r.url.path() == "/v1/playlists/pl1/tracks")
        .unwrap();
    let body: serde_json::Value = serde_json::from_slice(&add.body).unwrap();
    assert_eq!(body["uris"].as_array().unwrap().len(), 47);
}

#[tokio::test]
async fn test_search_transport_failure_aborts_batch() {
    let server = MockServer::start().await;

    mount_title(&server, "One", Some("spotify:track:1")).await;
    Mock::given(method("GET"))
        .and(path("/v1/search"))
        .and(query_param("q", "Broken"))
        .respond_with(ResponseTemplate::new(500))
        .expect(1)
        .mount(&server)
        .await;
    Mock::given(method("POST"))
        .and(path("/v1/playlists/pl1/tracks"))
        .respond_with(ResponseTemplate::new(201))
        .expect(0)
        .mount(&server)
        .await;

    let result = service(&server)
        .resolve_and_add_tracks(&handle(), &titles(&["One", "Broken"]), 50.0, |_| {})
        .await;
    assert!(matches!(result, Err(Error::Search(_))));
}

#[tokio::test]
async fn test_failed_batch_add_is_fatal() {
    let server = MockServer::start().await;

    mount_title(&server, "One", Some("spotify:track:1")).await;
    Mock::given(method("POST"))
        .and(path("/v1/playlists/pl1/tracks"))
        .respond_with(ResponseTemplate::new(400))
        .expect(1)
        .mount(&server)
        .await;

    let err = service(&server)
        .resolve_and_add_tracks(&handle(), &titles(&["One"]), 50.0, |_| {})
        .await
        .unwrap_err();

    assert!(matches!(err, Error::AddTracks(_)));
    assert_eq!(
        err.user_message(),
        "No songs found! Please try with different parameters"
    );
}
