use crate::common::*;
use hopsworks_api::feature_store::{FeatureGroupOptions, FeatureStore, WriteMode};
use serde_json::json;
use wiremock::matchers::{any, body_json, body_partial_json, method, path, query_param};
use wiremock::{Mock, MockServer, ResponseTemplate};

async fn feature_store(server: &MockServer) -> FeatureStore {
    Mock::given(method("GET"))
        .and(path(PROJECT_PATH))
        .respond_with(ResponseTemplate::new(200).set_body_json(project_body()))
        .mount(server)
        .await;
    Mock::given(method("GET"))
        .and(path(FEATURE_STORE_PATH))
        .respond_with(ResponseTemplate::new(200).set_body_json(feature_store_body()))
        .mount(server)
        .await;

    let mut conn = connect(server);
    let project = conn.get_project(None).await.unwrap();
    project.get_feature_store(None).await.unwrap()
}

#[tokio::test]
async fn test_get_or_create_creates_missing_group() {
    let server = MockServer::start().await;
    let fs = feature_store(&server).await;

    Mock::given(method("GET"))
        .and(path(format!("{FG_PATH}/readings")))
        .and(query_param("version", "1"))
        .respond_with(ResponseTemplate::new(404).set_body_json(json!({"errorCode": 270009})))
        .expect(1)
        .mount(&server)
        .await;
    Mock::given(method("POST"))
        .and(path(FG_PATH))
        .and(body_partial_json(json!({"name": "readings", "version": 1})))
        .respond_with(ResponseTemplate::new(201).set_body_json(feature_group_body(5, "readings", 1)))
        .expect(1)
        .mount(&server)
        .await;

    let fg = fs
        .get_or_create_feature_group(
            "readings",
            Some(1),
            FeatureGroupOptions::new().with_primary_key(["id"]),
        )
        .await
        .unwrap();
    assert_eq!(fg.id(), 5);
    assert_eq!(fg.to_string(), "FeatureGroup(readings, version=1, onlineEnabled=true)");
}

#[tokio::test]
async fn test_create_then_get_returns_same_metadata() {
    let server = MockServer::start().await;
    let fs = feature_store(&server).await;

    Mock::given(method("POST"))
        .and(path(FG_PATH))
        .and(body_partial_json(json!({
            "name": "fg1",
            "primaryKey": ["id"],
            "onlineEnabled": true,
            "type": "cachedFeaturegroupDTO",
            "timeTravelFormat": "HUDI"
        })))
        .respond_with(ResponseTemplate::new(201).set_body_json(feature_group_body(9, "fg1", 1)))
        .expect(1)
        .mount(&server)
        .await;
    Mock::given(method("GET"))
        .and(path(format!("{FG_PATH}/fg1")))
        .and(query_param("version", "1"))
        .respond_with(ResponseTemplate::new(200).set_body_json(feature_group_body(9, "fg1", 1)))
        .expect(1)
        .mount(&server)
        .await;

    let created = fs
        .create_feature_group(
            "fg1",
            FeatureGroupOptions::new()
                .with_primary_key(["id"])
                .with_online_enabled(true),
        )
        .await
        .unwrap();
    let fetched = fs.get_feature_group("fg1", None).await.unwrap();

    assert_eq!(fetched.name(), created.name());
    assert_eq!(fetched.version(), 1);
    assert_eq!(fetched.primary_key(), ["id".to_string()]);
    assert!(fetched.online_enabled());
}

#[tokio::test]
async fn test_insert_posts_once() {
    let server = MockServer::start().await;
    let fs = feature_store(&server).await;

    Mock::given(method("GET"))
        .and(path(format!("{FG_PATH}/readings")))
        .respond_with(ResponseTemplate::new(200).set_body_json(feature_group_body(5, "readings", 1)))
        .mount(&server)
        .await;
    Mock::given(method("POST"))
        .and(path(format!("{FG_PATH}/5/ingestion")))
        .and(query_param("write", "upsert"))
        .and(body_json(json!({"items": [
            {"id": 1, "value": 0.5},
            {"value": 1.5, "id": 2}
        ]})))
        .respond_with(ResponseTemplate::new(200))
        .expect(1)
        .mount(&server)
        .await;

    let fg = fs.get_feature_group("readings", Some(1)).await.unwrap();
    fg.insert(
        &[row(json!({"id": 1, "value": 0.5})), row(json!({"value": 1.5, "id": 2}))],
        WriteMode::default(),
    )
    .await
    .unwrap();
}

#[tokio::test]
async fn test_mismatched_rows_never_reach_server() {
    let server = MockServer::start().await;
    let fs = feature_store(&server).await;

    Mock::given(method("GET"))
        .and(path(format!("{FG_PATH}/readings")))
        .respond_with(ResponseTemplate::new(200).set_body_json(feature_group_body(5, "readings", 1)))
        .mount(&server)
        .await;
    Mock::given(method("POST"))
        .and(any())
        .respond_with(ResponseTemplate::new(200))
        .expect(0)
        .mount(&server)
        .await;

    let fg = fs.get_feature_group("readings", None).await.unwrap();
    let err = fg
        .insert(
            &[row(json!({"id": 1, "value": 0.5})), row(json!({"id": 2}))],
            WriteMode::Insert,
        )
        .await
        .unwrap_err();
    assert!(err.is_precondition());
}
