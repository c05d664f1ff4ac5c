//! Tests for the REST store client against a mock endpoint.

use profile_gateway::config::StoreConfig;
use profile_gateway::store::{ProfileStore, RestStore, StoreError};
use serde_json::json;

mod common;

fn store_config(url: String) -> StoreConfig {
    StoreConfig {
        url,
        service_role_key: "service-key".to_string(),
        table: "profiles".to_string(),
        request_timeout_secs: 5,
    }
}

#[tokio::test]
async fn test_insert_accepted() {
    let addr = common::start_mock_store(201, "").await;
    let store = RestStore::new(store_config(format!("http://{}", addr))).unwrap();

    let record = json!({"id": "u1", "gender": "other"});
    let result = store.insert("profiles", &record).await;
    assert!(result.is_ok());
}

#[tokio::test]
async fn test_insert_rejected_with_store_message() {
    let addr = common::start_mock_store(
        409,
        r#"{"code":"23505","message":"duplicate key value","details":null,"hint":null}"#,
    )
    .await;
    let store = RestStore::new(store_config(format!("http://{}", addr))).unwrap();

    let record = json!({"id": "u1", "gender": "other"});
    let err = store.insert("profiles", &record).await.unwrap_err();
    match err {
        StoreError::Rejected { message } => assert_eq!(message, "duplicate key value"),
        other => panic!("expected Rejected, got {:?}", other),
    }
}

#[tokio::test]
async fn test_insert_rejected_without_json_payload() {
    let addr = common::start_mock_store(503, "").await;
    let store = RestStore::new(store_config(format!("http://{}", addr))).unwrap();

    let record = json!({"id": "u1"});
    let err = store.insert("profiles", &record).await.unwrap_err();
    match err {
        StoreError::Rejected { message } => {
            assert_eq!(message, "store returned status 503");
        }
        other => panic!("expected Rejected, got {:?}", other),
    }
}

#[tokio::test]
async fn test_unreachable_store_is_transport_error() {
    // Bind then drop to get a port with nothing listening on it.
    let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();
    drop(listener);

    let store = RestStore::new(store_config(format!("http://{}", addr))).unwrap();
    let record = json!({"id": "u1"});
    let err = store.insert("profiles", &record).await.unwrap_err();
    assert!(matches!(err, StoreError::Transport(_)));
}
