// SPDX-License-Identifier: Apache-2.0

use tokenize_model::{Component, ComponentRow};
use tokenize_server::{build_router, AppState};
use tokio::io::{AsyncReadExt, AsyncWriteExt};

fn fixture_catalog() -> Vec<Component> {
    vec![
        ComponentRow {
            main_type: "NFC".to_string(),
            sub_type: "HCE".to_string(),
            components: "Secure Element".to_string(),
        }
        .into_component(1),
        ComponentRow {
            main_type: "QR".to_string(),
            sub_type: "Static".to_string(),
            components: "Merchant Display".to_string(),
        }
        .into_component(2),
    ]
}

async fn spawn_server(state: AppState) -> std::net::SocketAddr {
    let app = build_router(state);
    let listener = tokio::net::TcpListener::bind("127.0.0.1:0")
        .await
        .expect("bind listener");
    let addr = listener.local_addr().expect("local addr");
    tokio::spawn(async move { axum::serve(listener, app).await.expect("serve app") });
    addr
}

async fn send_raw(addr: std::net::SocketAddr, path: &str) -> (u16, String, String) {
    let mut stream = tokio::net::TcpStream::connect(addr)
        .await
        .expect("connect server");
    let req = format!("GET {path} HTTP/1.1\r\nHost: {addr}\r\nConnection: close\r\n\r\n");
    stream
        .write_all(req.as_bytes())
        .await
        .expect("write request");
    let mut response = String::new();
    stream
        .read_to_string(&mut response)
        .await
        .expect("read response");
    let (head, body) = response
        .split_once("\r\n\r\n")
        .expect("http response separator");
    let status = head
        .lines()
        .next()
        .and_then(|line| line.split_whitespace().nth(1))
        .and_then(|s| s.parse::<u16>().ok())
        .expect("status");
    (status, head.to_string(), body.to_string())
}

#[tokio::test]
async fn list_all_returns_full_catalog_in_load_order() {
    let addr = spawn_server(AppState::new(fixture_catalog())).await;

    let (status, _, body) = send_raw(addr, "/api/components").await;
    assert_eq!(status, 200);
    let envelope: serde_json::Value = serde_json::from_str(&body).expect("envelope json");
    assert_eq!(envelope["success"], true);
    assert!(envelope["message"].is_null());
    let data = envelope["data"].as_array().expect("data array");
    assert_eq!(data.len(), 2);
    assert_eq!(data[0]["id"], 1);
    assert_eq!(data[0]["main_type"], "NFC");
    assert_eq!(data[1]["id"], 2);
    assert_eq!(data[1]["main_type"], "QR");
}

#[tokio::test]
async fn main_type_filter_is_exact_and_case_sensitive() {
    let addr = spawn_server(AppState::new(fixture_catalog())).await;

    let (status, _, body) = send_raw(addr, "/api/components/NFC").await;
    assert_eq!(status, 200);
    let envelope: serde_json::Value = serde_json::from_str(&body).expect("envelope json");
    assert_eq!(envelope["success"], true);
    assert!(envelope["message"].is_null());
    let data = envelope["data"].as_array().expect("data array");
    assert_eq!(data.len(), 1);
    assert_eq!(data[0]["id"], 1);

    let (status, _, body) = send_raw(addr, "/api/components/nfc").await;
    assert_eq!(status, 200);
    let envelope: serde_json::Value = serde_json::from_str(&body).expect("envelope json");
    assert_eq!(envelope["success"], true);
    assert!(envelope["data"].as_array().expect("data array").is_empty());
}

#[tokio::test]
async fn empty_main_type_result_reports_requested_value() {
    let addr = spawn_server(AppState::new(fixture_catalog())).await;

    let (status, _, body) = send_raw(addr, "/api/components/BLE").await;
    assert_eq!(status, 200);
    let envelope: serde_json::Value = serde_json::from_str(&body).expect("envelope json");
    assert_eq!(envelope["success"], true);
    assert!(envelope["data"].as_array().expect("data array").is_empty());
    let message = envelope["message"].as_str().expect("message string");
    assert!(message.contains("BLE"));
}

#[tokio::test]
async fn sub_type_filter_requires_both_fields_to_match() {
    let addr = spawn_server(AppState::new(fixture_catalog())).await;

    let (status, _, body) = send_raw(addr, "/api/components/NFC/HCE").await;
    assert_eq!(status, 200);
    let envelope: serde_json::Value = serde_json::from_str(&body).expect("envelope json");
    let data = envelope["data"].as_array().expect("data array");
    assert_eq!(data.len(), 1);
    assert_eq!(data[0]["id"], 1);
    assert!(envelope["message"].is_null());

    let (status, _, body) = send_raw(addr, "/api/components/NFC/Static").await;
    assert_eq!(status, 200);
    let envelope: serde_json::Value = serde_json::from_str(&body).expect("envelope json");
    assert_eq!(envelope["success"], true);
    assert!(envelope["data"].as_array().expect("data array").is_empty());
    let message = envelope["message"].as_str().expect("message string");
    assert!(message.contains("NFC"));
    assert!(message.contains("Static"));
}

#[tokio::test]
async fn path_segments_are_url_decoded_before_matching() {
    let catalog = vec![ComponentRow {
        main_type: "Card Network".to_string(),
        sub_type: "Token Vault".to_string(),
        components: "TSP Integration".to_string(),
    }
    .into_component(1)];
    let addr = spawn_server(AppState::new(catalog)).await;

    let (status, _, body) = send_raw(addr, "/api/components/Card%20Network/Token%20Vault").await;
    assert_eq!(status, 200);
    let envelope: serde_json::Value = serde_json::from_str(&body).expect("envelope json");
    assert_eq!(envelope["data"].as_array().expect("data array").len(), 1);
}

#[tokio::test]
async fn repeated_identical_queries_return_byte_identical_envelopes() {
    let addr = spawn_server(AppState::new(fixture_catalog())).await;

    let (_, _, first) = send_raw(addr, "/api/components/NFC").await;
    let (_, _, second) = send_raw(addr, "/api/components/NFC").await;
    assert_eq!(first, second);
}

#[tokio::test]
async fn empty_catalog_still_answers_with_well_formed_envelopes() {
    let addr = spawn_server(AppState::new(Vec::new())).await;

    let (status, _, body) = send_raw(addr, "/api/components").await;
    assert_eq!(status, 200);
    let envelope: serde_json::Value = serde_json::from_str(&body).expect("envelope json");
    assert_eq!(envelope["success"], true);
    assert!(envelope["data"].as_array().expect("data array").is_empty());
    assert!(envelope["message"].is_null());

    let (status, _, body) = send_raw(addr, "/api/components/NFC").await;
    assert_eq!(status, 200);
    let envelope: serde_json::Value = serde_json::from_str(&body).expect("envelope json");
    assert_eq!(envelope["success"], true);
    assert!(envelope["message"].as_str().expect("message").contains("NFC"));
}

#[tokio::test]
async fn responses_carry_a_request_id_header() {
    let addr = spawn_server(AppState::new(fixture_catalog())).await;

    let (_, head, _) = send_raw(addr, "/api/components").await;
    assert!(head
        .lines()
        .any(|line| line.to_ascii_lowercase().starts_with("x-request-id:")));
}
