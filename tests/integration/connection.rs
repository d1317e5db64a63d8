use crate::common::*;
use hopsworks_api::feature_store::ConnectionState;
use serde_json::json;
use wiremock::matchers::{any, header, method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

#[tokio::test]
async fn test_missing_project_name_fails_without_request() {
    let server = MockServer::start().await;
    Mock::given(any())
        .respond_with(ResponseTemplate::new(200))
        .expect(0)
        .mount(&server)
        .await;

    let mut conn = connect_with(&server, None);
    let err = conn.get_project(None).await.unwrap_err();
    assert!(err.is_precondition(), "unexpected error: {err}");
}

#[tokio::test]
async fn test_project_to_default_feature_store() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path(PROJECT_PATH))
        .and(header("Authorization", format!("ApiKey {API_KEY}").as_str()))
        .respond_with(ResponseTemplate::new(200).set_body_json(project_body()))
        .expect(1)
        .mount(&server)
        .await;
    Mock::given(method("GET"))
        .and(path(FEATURE_STORE_PATH))
        .respond_with(ResponseTemplate::new(200).set_body_json(feature_store_body()))
        .expect(1)
        .mount(&server)
        .await;

    let mut conn = connect(&server);
    let project = conn.get_project(None).await.unwrap();
    assert_eq!(
        project.to_string(),
        "Project(acme, alice@hopsworks.ai, Integration project)"
    );

    let fs = project.get_feature_store(None).await.unwrap();
    assert_eq!(fs.id(), 67);
    assert_eq!(fs.project_name(), "acme");

    conn.close();
    assert_eq!(conn.state(), ConnectionState::Closed);
}

#[tokio::test]
async fn test_unknown_project() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/hopsworks-api/api/project/getProjectInfo/ghost"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({"items": []})))
        .expect(2)
        .mount(&server)
        .await;

    let mut conn = connect(&server);
    let err = conn.get_project(Some("ghost")).await.unwrap_err();
    assert!(err.is_not_found());
    assert!(!conn.project_exists("ghost").await.unwrap());
}

#[tokio::test]
async fn test_closed_connection_reconnects() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/hopsworks-api/api/project"))
        .respond_with(ResponseTemplate::new(200).set_body_json(project_body()))
        .expect(1)
        .mount(&server)
        .await;

    let mut conn = connect(&server);
    conn.close();
    let projects = conn.get_projects().await.unwrap();
    assert_eq!(projects.len(), 1);
    assert_eq!(conn.state(), ConnectionState::Connected);
}
