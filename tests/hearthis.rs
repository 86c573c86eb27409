//! Integration tests for the Hearthis client

use mixjar::{FeedQuery, FeedType, HearthisApi, HttpLogLevel, MixjarError, Paging};
use serde_json::json;
use tracing_subscriber::EnvFilter;
use wiremock::matchers::{method, path, query_param, query_param_is_missing};
use wiremock::{Mock, MockServer, ResponseTemplate};

fn init_tracing() {
    let _ = tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .with_test_writer()
        .try_init();
}

/// Create a client pointed at the mock server
fn client(mock_server: &MockServer) -> HearthisApi {
    init_tracing();
    HearthisApi::builder()
        .base_url(mock_server.uri())
        .log_level(HttpLogLevel::Body)
        .build()
        .unwrap()
}

fn mock_track_json(id: u32, title: &str) -> serde_json::Value {
    json!({
        "id": id.to_string(),
        "title": title,
        "permalink": title.to_lowercase().replace(' ', "-"),
        "duration": "1800",
        "genre": "House",
        "genre_slug": "house",
        "stream_url": format!("https://hearthis.at/dj_example/{}/listen/", id),
        "playback_count": "42",
        "user": {
            "id": "8913",
            "permalink": "dj_example",
            "username": "DJ Example"
        }
    })
}

/// Query string of the only request the server received
async fn single_query(mock_server: &MockServer) -> String {
    let requests = mock_server.received_requests().await.unwrap();
    assert_eq!(requests.len(), 1);
    requests[0].url.query().unwrap_or_default().to_string()
}

#[tokio::test]
async fn test_get_feed_omits_unset_filters() {
    let mock_server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/feed"))
        .and(query_param("page", "2"))
        .and(query_param("count", "10"))
        .and(query_param_is_missing("duration"))
        .and(query_param_is_missing("type"))
        .and(query_param_is_missing("category"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!([
            mock_track_json(1, "First Mix"),
            mock_track_json(2, "Second Mix")
        ])))
        .expect(1)
        .mount(&mock_server)
        .await;

    let api = client(&mock_server);
    let tracks = api
        .get_feed(&FeedQuery {
            page: Some(2),
            count: Some(10),
            ..Default::default()
        })
        .await
        .unwrap();

    assert_eq!(tracks.len(), 2);
    assert_eq!(tracks[0].title, "First Mix");
    assert_eq!(tracks[1].artist(), Some("DJ Example"));

    let query = single_query(&mock_server).await;
    assert_eq!(query, "page=2&count=10");
    assert!(!query.contains("null"));
}

#[tokio::test]
async fn test_get_feed_with_every_filter() {
    let mock_server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/feed"))
        .and(query_param("type", "new"))
        .and(query_param("category", "drumandbass"))
        .and(query_param("duration", "60"))
        .and(query_param("show-feed-start", "2023-01-01"))
        .and(query_param("show-feed-end", "2023-01-31"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!([])))
        .expect(1)
        .mount(&mock_server)
        .await;

    let api = client(&mock_server);
    let tracks = api
        .get_feed(&FeedQuery {
            duration: Some(60),
            feed_type: Some(FeedType::New),
            category: Some("drumandbass".to_string()),
            show_feed_start: chrono::NaiveDate::from_ymd_opt(2023, 1, 1),
            show_feed_end: chrono::NaiveDate::from_ymd_opt(2023, 1, 31),
            ..Default::default()
        })
        .await
        .unwrap();

    assert!(tracks.is_empty());
}

#[tokio::test]
async fn test_search_track_query_string() {
    let mock_server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/search"))
        .respond_with(
            ResponseTemplate::new(200).set_body_json(json!([mock_track_json(7, "House Set")])),
        )
        .mount(&mock_server)
        .await;

    let api = client(&mock_server);
    let tracks = api.search_track("house", &Paging::default()).await.unwrap();

    assert_eq!(tracks.len(), 1);
    assert_eq!(tracks[0].duration, Some(1800));
    assert_eq!(
        single_query(&mock_server).await,
        "t=house&page=1&count=10&type=tracks"
    );
}

#[tokio::test]
async fn test_search_playlist_and_user_types() {
    let mock_server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/search"))
        .and(query_param("type", "playlists"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!([
            {"id": "311", "title": "Warmup", "permalink": "warmup", "track_count": "4"}
        ])))
        .mount(&mock_server)
        .await;

    Mock::given(method("GET"))
        .and(path("/search"))
        .and(query_param("type", "user"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!([
            {"id": "8913", "permalink": "dj_example", "username": "DJ Example"}
        ])))
        .mount(&mock_server)
        .await;

    let api = client(&mock_server);
    let paging = Paging {
        page: Some(3),
        count: None,
    };

    let playlists = api.search_playlist("warm", &paging).await.unwrap();
    assert_eq!(playlists[0].permalink, "warmup");
    assert_eq!(playlists[0].track_count, Some(4));

    let users = api.search_user("dj", &paging).await.unwrap();
    assert_eq!(users[0].username, "DJ Example");

    let requests = mock_server.received_requests().await.unwrap();
    for request in &requests {
        let query = request.url.query().unwrap_or_default();
        assert!(query.contains("page=3"));
        assert!(!query.contains("count"));
    }
}

#[tokio::test]
async fn test_get_categories_and_category_tracks() {
    let mock_server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/categories"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!([
            {"id": "1", "name": "House", "slug": "house"},
            {"id": "2", "name": "Techno", "slug": "techno"}
        ])))
        .mount(&mock_server)
        .await;

    Mock::given(method("GET"))
        .and(path("/categories/techno"))
        .and(query_param("page", "1"))
        .and(query_param("count", "10"))
        .respond_with(
            ResponseTemplate::new(200).set_body_json(json!([mock_track_json(3, "Warehouse")])),
        )
        .mount(&mock_server)
        .await;

    let api = client(&mock_server);

    let categories = api.get_categories().await.unwrap();
    assert_eq!(categories.len(), 2);
    assert_eq!(categories[1].slug, "techno");

    let tracks = api
        .get_category_tracks(&categories[1].slug, &Paging::default())
        .await
        .unwrap();
    assert_eq!(tracks[0].title, "Warehouse");
}

#[tokio::test]
async fn test_get_user_empty_body_is_absent() {
    let mock_server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/dj_example"))
        .respond_with(ResponseTemplate::new(200))
        .expect(1)
        .mount(&mock_server)
        .await;

    let api = client(&mock_server);
    let user = api.get_user("dj_example").await.unwrap();

    assert!(user.is_none());
    assert_eq!(single_query(&mock_server).await, "");
}

#[tokio::test]
async fn test_get_user() {
    let mock_server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/dj_example"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "id": "8913",
            "permalink": "dj_example",
            "username": "DJ Example",
            "track_count": "12",
            "followers_count": "300"
        })))
        .mount(&mock_server)
        .await;

    let api = client(&mock_server);
    let user = api.get_user("dj_example").await.unwrap().unwrap();

    assert_eq!(user.username, "DJ Example");
    assert_eq!(user.track_count, Some(12));
    assert_eq!(user.followers_count, Some(300));
}

#[tokio::test]
async fn test_get_track() {
    let mock_server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/dj_example/night-set"))
        .respond_with(ResponseTemplate::new(200).set_body_json(mock_track_json(9, "Night Set")))
        .mount(&mock_server)
        .await;

    let api = client(&mock_server);
    let track = api
        .get_track("dj_example", "night-set")
        .await
        .unwrap()
        .unwrap();

    assert_eq!(track.id, "9");
    assert_eq!(track.permalink, "night-set");
    assert_eq!(track.duration_formatted().as_deref(), Some("30:00"));
}

#[tokio::test]
async fn test_user_listings_use_type_parameter() {
    let mock_server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/dj_example"))
        .and(query_param("type", "tracks"))
        .respond_with(
            ResponseTemplate::new(200).set_body_json(json!([mock_track_json(1, "Upload")])),
        )
        .mount(&mock_server)
        .await;

    Mock::given(method("GET"))
        .and(path("/dj_example"))
        .and(query_param("type", "likes"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!([
            mock_track_json(2, "Liked One"),
            mock_track_json(3, "Liked Two")
        ])))
        .mount(&mock_server)
        .await;

    Mock::given(method("GET"))
        .and(path("/dj_example"))
        .and(query_param("type", "playlists"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!([
            {"id": "311", "title": "Warmup", "permalink": "warmup"}
        ])))
        .mount(&mock_server)
        .await;

    let api = client(&mock_server);
    let paging = Paging::new(1, 5);

    let uploads = api.get_user_tracks("dj_example", &paging).await.unwrap();
    assert_eq!(uploads.len(), 1);

    let likes = api.get_user_likes("dj_example", &paging).await.unwrap();
    assert_eq!(likes.len(), 2);

    let playlists = api.get_user_playlists("dj_example", &paging).await.unwrap();
    assert_eq!(playlists[0].title, "Warmup");
}

#[tokio::test]
async fn test_get_playlist_keeps_order() {
    let mock_server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/set/warmup"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!([
            mock_track_json(1, "Opener"),
            mock_track_json(2, "Builder"),
            mock_track_json(3, "Closer")
        ])))
        .mount(&mock_server)
        .await;

    let api = client(&mock_server);
    let tracks = api.get_playlist("warmup").await.unwrap();

    let titles: Vec<_> = tracks.iter().map(|t| t.title.as_str()).collect();
    assert_eq!(titles, vec!["Opener", "Builder", "Closer"]);
}

#[tokio::test]
async fn test_empty_list_body_is_empty_list() {
    let mock_server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/categories"))
        .respond_with(ResponseTemplate::new(204))
        .mount(&mock_server)
        .await;

    let api = client(&mock_server);
    assert!(api.get_categories().await.unwrap().is_empty());
}

#[tokio::test]
async fn test_error_status_propagates() {
    let mock_server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/ghost"))
        .respond_with(ResponseTemplate::new(404))
        .mount(&mock_server)
        .await;

    let api = client(&mock_server);
    let err = api.get_user("ghost").await.unwrap_err();

    match err {
        MixjarError::RequestError(e) => assert_eq!(e.status().map(|s| s.as_u16()), Some(404)),
        other => panic!("unexpected error: {other}"),
    }
}

#[tokio::test]
async fn test_malformed_body_is_parse_error() {
    let mock_server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/feed"))
        .respond_with(ResponseTemplate::new(200).set_body_string("<html>maintenance</html>"))
        .mount(&mock_server)
        .await;

    let api = client(&mock_server);
    let err = api.get_feed(&FeedQuery::default()).await.unwrap_err();

    assert!(matches!(err, MixjarError::ParseError(_)));
}
