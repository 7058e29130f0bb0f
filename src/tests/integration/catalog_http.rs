//! HTTP tests for `CatalogClient` using a local wiremock server.

use std::time::Duration;

use wiremock::matchers::{method, path, query_param};
use wiremock::{Mock, MockServer, ResponseTemplate};

use crate::core::catalog::view::initial;
use crate::core::catalog::{
    load_collection, CatalogClient, CatalogError, CatalogSource, DetailStatus, Effect, EntityDetail,
    Msg, ViewState,
};
use crate::tests::mocks::{charizard_json, listing_json, named_listing_json, type_json};

async fn client_for(server: &MockServer) -> CatalogClient {
    CatalogClient::new(&server.uri(), Some(Duration::from_secs(5))).unwrap()
}

/// Run an effect against `source` and feed the result back.
async fn settle(
    state: ViewState,
    effect: Option<Effect>,
    source: &dyn CatalogSource,
) -> ViewState {
    match effect {
        Some(effect) => {
            let msg = effect.execute(source).await;
            state.apply(msg).0
        }
        None => state,
    }
}

#[tokio::test]
async fn test_listing_requests_page_size_and_derives_ids() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/pokemon"))
        .and(query_param("limit", "100"))
        .respond_with(ResponseTemplate::new(200).set_body_json(listing_json(100)))
        .expect(1)
        .mount(&server)
        .await;

    let client = client_for(&server).await;
    let entities = load_collection(&client, 100).await.unwrap();

    assert_eq!(entities.len(), 100);
    let ids: Vec<u32> = entities.iter().map(|e| e.id).collect();
    assert_eq!(ids, (1..=100).collect::<Vec<_>>());
    assert_eq!(entities[0].name, "mon-1");
}

#[tokio::test]
async fn test_initial_load_populates_displayed() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/pokemon"))
        .respond_with(ResponseTemplate::new(200).set_body_json(listing_json(100)))
        .mount(&server)
        .await;

    let client = client_for(&server).await;
    let (state, effect) = initial(100);
    let state = settle(state, effect, &client).await;

    assert_eq!(state.displayed().len(), 100);
    assert_eq!(state.collection().all().len(), 100);
    assert!(state.banner().is_none());
}

#[tokio::test]
async fn test_listing_server_error_sets_banner() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/pokemon"))
        .respond_with(ResponseTemplate::new(500))
        .mount(&server)
        .await;

    let client = client_for(&server).await;
    let (state, effect) = initial(100);
    let state = settle(state, effect, &client).await;

    assert!(state.displayed().is_empty());
    let banner = state.banner().unwrap();
    assert!(banner.starts_with("Failed to fetch Pokémon data"));
    assert!(banner.contains("500"));
}

#[tokio::test]
async fn test_listing_malformed_url_fails_load() {
    let server = MockServer::start().await;
    let body = serde_json::json!({
        "results": [
            { "name": "bulbasaur", "url": "https://pokeapi.co/api/v2/pokemon/1/" },
            { "name": "missingno", "url": "https://pokeapi.co/api/v2/pokemon/" }
        ]
    });
    Mock::given(method("GET"))
        .and(path("/pokemon"))
        .respond_with(ResponseTemplate::new(200).set_body_json(body))
        .mount(&server)
        .await;

    let client = client_for(&server).await;
    let err = load_collection(&client, 100).await.unwrap_err();
    assert!(matches!(err, CatalogError::MalformedEntity(_)));
}

#[tokio::test]
async fn test_listing_bad_json_is_parse_error() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/pokemon"))
        .respond_with(ResponseTemplate::new(200).set_body_string("<html>nope</html>"))
        .mount(&server)
        .await;

    let client = client_for(&server).await;
    let err = load_collection(&client, 100).await.unwrap_err();
    assert!(err.is_parse(), "expected parse error, got {err:?}");
}

#[tokio::test]
async fn test_unreachable_server_is_network_error() {
    // Nothing listens on port 1.
    let client = CatalogClient::new("http://127.0.0.1:1", Some(Duration::from_secs(2))).unwrap();
    let err = client.fetch_listing(10).await.unwrap_err();
    assert!(matches!(err, CatalogError::Network(_)), "got {err:?}");
}

#[tokio::test]
async fn test_hung_request_times_out_as_network_error() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/pokemon/6"))
        .respond_with(
            ResponseTemplate::new(200)
                .set_body_json(charizard_json())
                .set_delay(Duration::from_secs(5)),
        )
        .mount(&server)
        .await;

    let client = CatalogClient::new(&server.uri(), Some(Duration::from_millis(200))).unwrap();
    let err = client.fetch_detail(6).await.unwrap_err();
    assert!(matches!(err, CatalogError::Network(_)), "got {err:?}");
    assert!(err.is_network());

    let (state, effect) = ViewState::default().apply(Msg::EntitySelected(6));
    assert_eq!(state.detail().status(), DetailStatus::Loading(6));
    let state = settle(state, effect, &client).await;

    assert!(!state.detail().is_open());
    let DetailStatus::Error(message) = state.detail().status() else {
        panic!("expected detail error, got {:?}", state.detail().status());
    };
    assert!(message.starts_with("Failed to fetch Pokémon details"));
}

#[tokio::test]
async fn test_detail_select_loads_charizard() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/pokemon"))
        .respond_with(
            ResponseTemplate::new(200)
                .set_body_json(named_listing_json(&[(4, "charmander"), (6, "charizard")])),
        )
        .mount(&server)
        .await;
    Mock::given(method("GET"))
        .and(path("/pokemon/6"))
        .respond_with(ResponseTemplate::new(200).set_body_json(charizard_json()))
        .expect(1)
        .mount(&server)
        .await;

    let client = client_for(&server).await;
    let (state, effect) = initial(100);
    let state = settle(state, effect, &client).await;

    let (state, effect) = state.apply(Msg::EntitySelected(6));
    assert_eq!(state.detail().status(), DetailStatus::Loading(6));
    let state = settle(state, effect, &client).await;

    let DetailStatus::Loaded(detail) = state.detail().status() else {
        panic!("detail not loaded: {:?}", state.detail().status());
    };
    let expected_stats: Vec<(&str, u8)> = vec![
        ("hp", 78),
        ("attack", 84),
        ("defense", 78),
        ("special-attack", 109),
        ("special-defense", 85),
        ("speed", 100),
    ];
    assert_eq!(detail.name, "charizard");
    assert_eq!(detail.types, vec!["fire", "flying"]);
    assert_eq!(detail.height, 17);
    assert_eq!(detail.weight, 905);
    assert_eq!(
        detail
            .stats
            .iter()
            .map(|s| (s.name.as_str(), s.value))
            .collect::<Vec<_>>(),
        expected_stats
    );
    assert_eq!(
        detail.image_url.as_deref(),
        Some("https://img.example/artwork/6.png")
    );
}

#[tokio::test]
async fn test_detail_not_found_closes_viewer() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/pokemon/9999"))
        .respond_with(ResponseTemplate::new(404).set_body_string("Not Found"))
        .mount(&server)
        .await;

    let client = client_for(&server).await;
    let (state, effect) = ViewState::default().apply(Msg::EntitySelected(9999));
    let state = settle(state, effect, &client).await;

    assert!(!state.detail().is_open());
    assert_eq!(state.detail().status(), DetailStatus::Error("Pokémon not found"));
    assert_eq!(state.banner(), Some("Pokémon not found"));
}

#[tokio::test]
async fn test_detail_stat_out_of_range_is_parse_error() {
    let server = MockServer::start().await;
    let mut body = charizard_json();
    body["stats"][0]["base_stat"] = serde_json::json!(300);
    Mock::given(method("GET"))
        .and(path("/pokemon/6"))
        .respond_with(ResponseTemplate::new(200).set_body_json(body))
        .mount(&server)
        .await;

    let client = client_for(&server).await;
    let raw = client.fetch_detail(6).await.unwrap();
    let err = EntityDetail::try_from(raw).unwrap_err();
    assert!(matches!(err, CatalogError::Parse(_)));
}

#[tokio::test]
async fn test_type_membership_narrows_grid() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/pokemon"))
        .respond_with(ResponseTemplate::new(200).set_body_json(named_listing_json(&[
            (1, "bulbasaur"),
            (4, "charmander"),
            (6, "charizard"),
            (7, "squirtle"),
        ])))
        .mount(&server)
        .await;
    Mock::given(method("GET"))
        .and(path("/type/fire"))
        .respond_with(ResponseTemplate::new(200).set_body_json(type_json(&[4, 5, 6, 37, 38])))
        .expect(1)
        .mount(&server)
        .await;

    let client = client_for(&server).await;
    let (state, effect) = initial(100);
    let state = settle(state, effect, &client).await;

    let (state, effect) = state.apply(Msg::TypeTagToggled("fire".into()));
    assert_eq!(state.displayed().len(), 4);
    let state = settle(state, effect, &client).await;

    let ids: Vec<u32> = state.displayed().iter().map(|e| e.id).collect();
    assert_eq!(ids, vec![4, 6]);

    let (state, _) = state.apply(Msg::SearchChanged("ZARD".into()));
    let ids: Vec<u32> = state.displayed().iter().map(|e| e.id).collect();
    assert_eq!(ids, vec![6]);
}
