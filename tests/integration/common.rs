use hopsworks_api::feature_store::{connection, Connection, ConnectionOptions, Row};
use serde_json::{json, Value};
use wiremock::MockServer;

pub const API_KEY: &str = "integration-key";
pub const PROJECT_PATH: &str = "/hopsworks-api/api/project/getProjectInfo/acme";
pub const FEATURE_STORE_PATH: &str =
    "/hopsworks-api/api/project/acme/featurestores/acme_featurestore";
pub const FG_PATH: &str = "/hopsworks-api/api/project/acme/featurestores/67/featuregroups";

/// Connection to `server` with `acme` as the default project.
pub fn connect(server: &MockServer) -> Connection {
    connect_with(server, Some("acme"))
}

pub fn connect_with(server: &MockServer, project: Option<&str>) -> Connection {
    let addr = server.address();
    let mut builder = ConnectionOptions::builder(addr.ip().to_string())
        .port(addr.port())
        .api_key(API_KEY);
    if let Some(project) = project {
        builder = builder.project(project);
    }
    connection(builder.build()).expect("connection options are valid")
}

pub fn row(value: Value) -> Row {
    value.as_object().cloned().expect("row must be a JSON object")
}

pub fn project_body() -> Value {
    json!({
        "items": [{
            "projectId": 119,
            "projectName": "acme",
            "owner": "alice@hopsworks.ai",
            "description": "Integration project"
        }]
    })
}

pub fn feature_store_body() -> Value {
    json!({
        "featurestoreId": 67,
        "featurestoreName": "acme_featurestore",
        "projectName": "acme",
        "projectId": 119,
        "onlineEnabled": true,
        "offlineFeaturestoreName": "acme_featurestore",
        "onlineFeaturestoreName": "acme"
    })
}

pub fn feature_group_body(id: i64, name: &str, version: u32) -> Value {
    json!({
        "id": id,
        "name": name,
        "version": version,
        "featurestoreId": 67,
        "type": "cachedFeaturegroupDTO",
        "onlineEnabled": true,
        "timeTravelFormat": "HUDI",
        "features": [
            {"name": "id", "type": "bigint", "primary": true},
            {"name": "value", "type": "double"}
        ],
        "primaryKey": ["id"],
        "partitionKey": []
    })
}
