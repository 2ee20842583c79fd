//! End-to-end integration test for the HTTP surface.
//!
//! Spins up the full Axum app on an ephemeral port against a temporary data
//! directory, then exercises discovery, pagination, ID lookup, and filtering
//! through a real HTTP client.

use serde_json::{json, Value};
use tempfile::TempDir;

use aot_api::config::AppConfig;
use aot_api::AppState;

/// Write the five fixture collections. Characters get 25 entries so the
/// default page size of 20 yields two pages; odd IDs are "Alive", even IDs
/// "Deceased". Locations are left empty to exercise the empty envelope.
fn write_fixtures(dir: &TempDir) {
    let characters: Vec<Value> = (1..=25)
        .map(|id: i64| {
            let name = match id {
                3 => "Eren Yeager".to_string(),
                7 => "Mikasa Ackermann".to_string(),
                _ => format!("Recruit {id}"),
            };
            json!({
                "id": id,
                "name": name,
                "status": if id % 2 == 1 { "Alive" } else { "Deceased" },
            })
        })
        .collect();

    let episodes = json!([
        {"id": 1, "name": "To You, in 2000 Years", "episode": "S1E1"},
        {"id": 2, "name": "The Other Side of the Sea", "episode": "S4E1"},
    ]);

    let titans = json!([
        {"id": 1, "name": "Attack Titan", "allegiance": "Eldia"},
        {"id": 2, "name": "Armored Titan", "allegiance": "Marley"},
        {"id": 3, "name": "Founding Titan"},
    ]);

    let fixtures = [
        ("characters", json!(characters)),
        ("episodes", episodes),
        ("locations", json!([])),
        ("organizations", json!([])),
        ("titans", titans),
    ];

    for (name, body) in fixtures {
        std::fs::write(
            dir.path().join(format!("{name}.json")),
            serde_json::to_string_pretty(&body).unwrap(),
        )
        .unwrap();
    }
}

/// Spin up the app on a random port, returning the base URL. The TempDir
/// must stay alive for the duration of the test.
async fn start_server(dir: &TempDir, page_size: usize, base_url: Option<String>) -> String {
    let config = AppConfig {
        host: "127.0.0.1".to_string(),
        port: 0,
        page_size,
        base_url,
        data_dir: dir.path().to_str().unwrap().to_string(),
    };

    let app = aot_api::app(AppState { config });
    let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();
    tokio::spawn(async move {
        axum::serve(listener, app).await.unwrap();
    });

    format!("http://{addr}")
}

async fn get_json(url: &str) -> Value {
    let response = reqwest::get(url).await.unwrap();
    assert_eq!(response.status(), reqwest::StatusCode::OK, "GET {url}");
    response.json().await.unwrap()
}

#[tokio::test]
async fn discovery_document_lists_all_resources() {
    let dir = TempDir::new().unwrap();
    write_fixtures(&dir);
    let base = start_server(&dir, 20, None).await;

    let doc = get_json(&base).await;
    for resource in ["characters", "episodes", "locations", "organizations", "titans"] {
        assert_eq!(doc[resource], format!("{base}/{resource}"), "{resource}");
    }
}

#[tokio::test]
async fn configured_base_origin_overrides_request_host() {
    let dir = TempDir::new().unwrap();
    write_fixtures(&dir);
    let base = start_server(&dir, 20, Some("https://api.example.com".to_string())).await;

    let doc = get_json(&base).await;
    assert_eq!(doc["characters"], "https://api.example.com/characters");

    let body = get_json(&format!("{base}/characters")).await;
    assert_eq!(
        body["info"]["next_page"],
        "https://api.example.com/characters?page=2"
    );
}

#[tokio::test]
async fn characters_paginate_with_next_and_prev_links() {
    let dir = TempDir::new().unwrap();
    write_fixtures(&dir);
    let base = start_server(&dir, 20, None).await;

    let page1 = get_json(&format!("{base}/characters")).await;
    assert_eq!(page1["info"]["count"], 25);
    assert_eq!(page1["info"]["pages"], 2);
    assert_eq!(page1["results"].as_array().unwrap().len(), 20);
    assert_eq!(page1["info"]["next_page"], format!("{base}/characters?page=2"));
    assert_eq!(page1["info"]["prev_page"], Value::Null);

    let page2 = get_json(&format!("{base}/characters?page=2")).await;
    assert_eq!(page2["results"].as_array().unwrap().len(), 5);
    assert_eq!(page2["info"]["next_page"], Value::Null);
    assert_eq!(page2["info"]["prev_page"], format!("{base}/characters?page=1"));
}

#[tokio::test]
async fn invalid_page_numbers_clamp_to_page_one() {
    let dir = TempDir::new().unwrap();
    write_fixtures(&dir);
    let base = start_server(&dir, 20, None).await;

    for query in ["page=0", "page=99", "page=abc"] {
        let body = get_json(&format!("{base}/characters?{query}")).await;
        assert_eq!(body["results"][0]["id"], 1, "query {query}");
        assert_eq!(body["info"]["prev_page"], Value::Null, "query {query}");
    }
}

#[tokio::test]
async fn empty_collection_yields_empty_envelope() {
    let dir = TempDir::new().unwrap();
    write_fixtures(&dir);
    let base = start_server(&dir, 20, None).await;

    let body = get_json(&format!("{base}/locations")).await;
    assert_eq!(
        body,
        json!({
            "info": {"count": 0, "pages": 0, "next_page": null, "prev_page": null},
            "results": [],
        })
    );
}

#[tokio::test]
async fn multi_id_lookup_preserves_collection_order() {
    let dir = TempDir::new().unwrap();
    write_fixtures(&dir);
    let base = start_server(&dir, 20, None).await;

    // Requested out of order with one unknown ID; result follows collection order.
    let body = get_json(&format!("{base}/characters/7,3,999")).await;
    let ids: Vec<i64> = body
        .as_array()
        .unwrap()
        .iter()
        .map(|c| c["id"].as_i64().unwrap())
        .collect();
    assert_eq!(ids, vec![3, 7]);
}

#[tokio::test]
async fn single_id_lookup_returns_an_object() {
    let dir = TempDir::new().unwrap();
    write_fixtures(&dir);
    let base = start_server(&dir, 20, None).await;

    let body = get_json(&format!("{base}/characters/3")).await;
    assert!(body.is_object());
    assert_eq!(body["name"], "Eren Yeager");
}

#[tokio::test]
async fn unknown_ids_return_empty_array_not_404() {
    let dir = TempDir::new().unwrap();
    write_fixtures(&dir);
    let base = start_server(&dir, 20, None).await;

    for path in ["characters/999", "characters/abc", "titans/0"] {
        let body = get_json(&format!("{base}/{path}")).await;
        assert_eq!(body, json!([]), "path {path}");
    }
}

#[tokio::test]
async fn name_filter_matches_substring_case_insensitively() {
    let dir = TempDir::new().unwrap();
    write_fixtures(&dir);
    let base = start_server(&dir, 20, None).await;

    let body = get_json(&format!("{base}/characters?name=ere")).await;
    assert_eq!(body["info"]["count"], 1);
    assert_eq!(body["results"][0]["name"], "Eren Yeager");
}

#[tokio::test]
async fn filter_params_are_preserved_in_pagination_links() {
    let dir = TempDir::new().unwrap();
    write_fixtures(&dir);
    let base = start_server(&dir, 5, None).await;

    // 13 of the 25 characters are "Alive"; page size 5 gives 3 pages.
    let body = get_json(&format!("{base}/characters?status=alive&page=2")).await;
    assert_eq!(body["info"]["count"], 13);
    assert_eq!(body["info"]["pages"], 3);
    assert_eq!(
        body["info"]["next_page"],
        format!("{base}/characters?page=3&status=alive")
    );
    assert_eq!(
        body["info"]["prev_page"],
        format!("{base}/characters?page=1&status=alive")
    );
}

#[tokio::test]
async fn titan_allegiance_filter_is_exact_and_skips_absent_fields() {
    let dir = TempDir::new().unwrap();
    write_fixtures(&dir);
    let base = start_server(&dir, 20, None).await;

    let body = get_json(&format!("{base}/titans?allegiance=eldia")).await;
    assert_eq!(body["info"]["count"], 1);
    assert_eq!(body["results"][0]["name"], "Attack Titan");
}

#[tokio::test]
async fn unrecognized_query_params_are_ignored() {
    let dir = TempDir::new().unwrap();
    write_fixtures(&dir);
    let base = start_server(&dir, 20, None).await;

    let body = get_json(&format!("{base}/episodes?bogus=1")).await;
    assert_eq!(body["info"]["count"], 2);
}

#[tokio::test]
async fn health_probes_report_ok() {
    let dir = TempDir::new().unwrap();
    write_fixtures(&dir);
    let base = start_server(&dir, 20, None).await;

    let live = reqwest::get(&format!("{base}/health/live")).await.unwrap();
    assert_eq!(live.text().await.unwrap(), "OK");

    let ready = get_json(&format!("{base}/health/ready")).await;
    assert_eq!(ready["status"], "ok");
    assert_eq!(ready["resources"]["characters"], "ok (25 entries)");
}

#[tokio::test]
async fn missing_data_file_returns_500() {
    let dir = TempDir::new().unwrap();
    write_fixtures(&dir);
    std::fs::remove_file(dir.path().join("titans.json")).unwrap();
    let base = start_server(&dir, 20, None).await;

    let response = reqwest::get(&format!("{base}/titans")).await.unwrap();
    assert_eq!(response.status(), reqwest::StatusCode::INTERNAL_SERVER_ERROR);
    let body: Value = response.json().await.unwrap();
    assert_eq!(body["error"]["code"], "INTERNAL_ERROR");

    let ready = get_json(&format!("{base}/health/ready")).await;
    assert_eq!(ready["status"], "degraded");
}
