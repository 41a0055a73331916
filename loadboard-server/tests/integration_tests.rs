//! Integration tests for the Loadboard HTTP server

use loadboard_core::{ApiKeyGuard, Load, LoadStore};
use loadboard_server::{build_router, AppState, HealthResponse, HealthStatus, ServerConfig};
use serde_json::json;
use std::collections::HashMap;
use std::io::Write;

const KEY: &str = "test-key-123";

fn dallas_load() -> Load {
    Load {
        load_id: "L100".to_string(),
        origin: "Dallas".to_string(),
        destination: "Houston".to_string(),
        pickup_datetime: "2025-08-01T08:00:00".to_string(),
        delivery_datetime: "2025-08-01T16:00:00".to_string(),
        equipment_type: "Dry Van".to_string(),
        loadboard_rate: 1200,
        notes: None,
        weight: 38000,
        commodity_type: "Paper".to_string(),
        num_of_pieces: 20,
        miles: 240,
        dimensions: "48x40x60".to_string(),
    }
}

/// Test server setup helper
async fn spawn_server(state: AppState) -> (String, tokio::task::JoinHandle<()>) {
    let app = build_router(state);

    // Find an available port
    let listener = tokio::net::TcpListener::bind("127.0.0.1:0")
        .await
        .expect("Failed to bind to port");
    let addr = listener.local_addr().expect("Failed to get local address");
    let base_url = format!("http://{}", addr);

    let handle = tokio::spawn(async move {
        axum::serve(listener, app).await.unwrap();
    });

    (base_url, handle)
}

async fn setup_test_server(loads: Vec<Load>, secret: Option<&str>) -> (String, tokio::task::JoinHandle<()>) {
    let state = AppState::new(
        LoadStore::from_loads(loads),
        ApiKeyGuard::new(secret.map(String::from)),
    );
    spawn_server(state).await
}

async fn get_with_key(url: String, key: Option<&str>) -> reqwest::Response {
    let client = reqwest::Client::new();
    let mut request = client.get(url);
    if let Some(key) = key {
        request = request.header("X-API-KEY", key);
    }
    request.send().await.expect("Failed to send request")
}

#[tokio::test]
async fn test_end_to_end_lookup() {
    let (base_url, _handle) = setup_test_server(vec![dallas_load()], Some(KEY)).await;

    // Known id
    let response = get_with_key(format!("{}/v1/loads/L100", base_url), Some(KEY)).await;
    assert_eq!(response.status().as_u16(), 200);
    let body: serde_json::Value = response.json().await.expect("Failed to parse response");
    assert_eq!(
        body,
        json!([{
            "load_id": "L100",
            "origin": "Dallas",
            "destination": "Houston",
            "pickup_datetime": "2025-08-01T08:00:00",
            "delivery_datetime": "2025-08-01T16:00:00",
            "equipment_type": "Dry Van",
            "loadboard_rate": 1200,
            "notes": null,
            "weight": 38000,
            "commodity_type": "Paper",
            "num_of_pieces": 20,
            "miles": 240,
            "dimensions": "48x40x60"
        }])
    );

    // Unknown id
    let response = get_with_key(format!("{}/v1/loads/L999", base_url), Some(KEY)).await;
    assert_eq!(response.status().as_u16(), 200);
    let body: Vec<Load> = response.json().await.expect("Failed to parse response");
    assert!(body.is_empty());

    // Wrong key
    let response = get_with_key(format!("{}/v1/loads/L100", base_url), Some("wrong")).await;
    assert_eq!(response.status().as_u16(), 401);
}

#[tokio::test]
async fn test_typed_round_trip() {
    let (base_url, _handle) = setup_test_server(vec![dallas_load()], Some(KEY)).await;

    let response = get_with_key(format!("{}/v1/loads/L100", base_url), Some(KEY)).await;
    let body: Vec<Load> = response.json().await.expect("Failed to parse response");
    assert_eq!(body, vec![dallas_load()]);
}

#[tokio::test]
async fn test_unauthorized_discloses_nothing() {
    let (base_url, _handle) = setup_test_server(vec![dallas_load()], Some(KEY)).await;

    for key in [None, Some(""), Some("test-key-12"), Some("TEST-KEY-123")] {
        for id in ["L100", "L999"] {
            let response = get_with_key(format!("{}/v1/loads/{}", base_url, id), key).await;
            assert_eq!(response.status().as_u16(), 401, "key {:?} id {}", key, id);

            let text = response.text().await.unwrap();
            assert!(!text.contains("Dallas"));
            assert!(!text.contains("L100"));

            let body: serde_json::Value = serde_json::from_str(&text).unwrap();
            assert_eq!(body["error"], "unauthorized");
            assert_eq!(body["message"], "Invalid or missing API Key");
        }
    }
}

#[tokio::test]
async fn test_header_name_case_insensitive() {
    let (base_url, _handle) = setup_test_server(vec![dallas_load()], Some(KEY)).await;

    let client = reqwest::Client::new();
    let response = client
        .get(format!("{}/v1/loads/L100", base_url))
        .header("x-api-key", KEY)
        .send()
        .await
        .expect("Failed to send request");
    assert_eq!(response.status().as_u16(), 200);
}

#[tokio::test]
async fn test_unconfigured_secret() {
    let (base_url, _handle) = setup_test_server(vec![dallas_load()], None).await;

    for key in [None, Some(KEY), Some("")] {
        let response = get_with_key(format!("{}/v1/loads/L100", base_url), key).await;
        assert_eq!(response.status().as_u16(), 500);

        let body: serde_json::Value = response.json().await.unwrap();
        assert_eq!(body["error"], "server_misconfigured");
        assert_eq!(body["message"], "API_KEY not configured on the server.");
    }

    let response = reqwest::get(format!("{}/health", base_url))
        .await
        .expect("Failed to send request");
    assert_eq!(response.status().as_u16(), 200);
}

#[tokio::test]
async fn test_health() {
    let (base_url, _handle) = setup_test_server(Vec::new(), Some(KEY)).await;

    let response = reqwest::get(format!("{}/health", base_url))
        .await
        .expect("Failed to send request");

    assert_eq!(response.status().as_u16(), 200);

    let body: HealthResponse = response.json().await.expect("Failed to parse response");
    assert_eq!(body.status, HealthStatus::Ok);
}

#[tokio::test]
async fn test_duplicate_ids_return_all() {
    let mut second = dallas_load();
    second.origin = "Fort Worth".to_string();
    second.notes = Some("Tarps required".to_string());
    let mut other = dallas_load();
    other.load_id = "L200".to_string();

    let (base_url, _handle) =
        setup_test_server(vec![dallas_load(), other, second.clone()], Some(KEY)).await;

    let response = get_with_key(format!("{}/v1/loads/L100", base_url), Some(KEY)).await;
    let body: Vec<Load> = response.json().await.unwrap();

    assert_eq!(body, vec![dallas_load(), second]);
    assert!(body.iter().all(|l| l.load_id == "L100"));
}

#[tokio::test]
async fn test_repeated_requests_identical() {
    let (base_url, _handle) = setup_test_server(vec![dallas_load()], Some(KEY)).await;

    let mut bodies = Vec::new();
    for _ in 0..5 {
        let response = get_with_key(format!("{}/v1/loads/L100", base_url), Some(KEY)).await;
        bodies.push(response.text().await.unwrap());
    }
    assert!(bodies.windows(2).all(|w| w[0] == w[1]));
}

#[tokio::test]
async fn test_concurrent_lookups() {
    let (base_url, _handle) = setup_test_server(vec![dallas_load()], Some(KEY)).await;

    let tasks: Vec<_> = (0..20)
        .map(|i| {
            let url = if i % 2 == 0 {
                format!("{}/v1/loads/L100", base_url)
            } else {
                format!("{}/v1/loads/L999", base_url)
            };
            tokio::spawn(async move {
                let response = get_with_key(url, Some(KEY)).await;
                let body: Vec<Load> = response.json().await.unwrap();
                (i, body.len())
            })
        })
        .collect();

    for task in tasks {
        let (i, len) = task.await.unwrap();
        assert_eq!(len, if i % 2 == 0 { 1 } else { 0 });
    }
}

#[tokio::test]
async fn test_state_from_config_reads_dataset() {
    let mut file = tempfile::NamedTempFile::new().unwrap();
    let data = serde_json::to_string(&vec![dallas_load()]).unwrap();
    file.write_all(data.as_bytes()).unwrap();

    let vars: HashMap<&str, String> = [
        ("API_KEY", KEY.to_string()),
        ("LOADS_PATH", file.path().display().to_string()),
    ]
    .into_iter()
    .collect();
    let config = ServerConfig::from_lookup(|k| vars.get(k).cloned()).unwrap();

    let (base_url, _handle) = spawn_server(AppState::from_config(&config)).await;

    let response = get_with_key(format!("{}/v1/loads/L100", base_url), Some(KEY)).await;
    let body: Vec<Load> = response.json().await.unwrap();
    assert_eq!(body, vec![dallas_load()]);
}

#[tokio::test]
async fn test_missing_dataset_serves_empty() {
    let dir = tempfile::tempdir().unwrap();
    let vars: HashMap<&str, String> = [
        ("API_KEY", KEY.to_string()),
        ("LOADS_PATH", dir.path().join("loads.json").display().to_string()),
    ]
    .into_iter()
    .collect();
    let config = ServerConfig::from_lookup(|k| vars.get(k).cloned()).unwrap();

    let state = AppState::from_config(&config);
    assert!(state.store.is_empty());

    let (base_url, _handle) = spawn_server(state).await;

    let response = get_with_key(format!("{}/v1/loads/L100", base_url), Some(KEY)).await;
    assert_eq!(response.status().as_u16(), 200);
    let body: Vec<Load> = response.json().await.unwrap();
    assert!(body.is_empty());

    let response = reqwest::get(format!("{}/health", base_url)).await.unwrap();
    assert_eq!(response.status().as_u16(), 200);
}
