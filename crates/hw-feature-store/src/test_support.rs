//! Fixtures shared by the wiremock-backed unit tests.

use hopsworks_client::{ClientConfig, HopsworksClient};
use serde_json::{json, Value};
use wiremock::MockServer;

use crate::session::Session;
use crate::types::Row;

pub(crate) fn client_for(server: &MockServer) -> HopsworksClient {
    let addr = server.address();
    HopsworksClient::new(
        ClientConfig::builder(addr.ip().to_string())
            .with_port(addr.port())
            .with_api_key("test-key")
            .build(),
    )
    .unwrap()
}

pub(crate) fn session_for(server: &MockServer) -> Session {
    Session::new(client_for(server))
}

pub(crate) fn row(value: Value) -> Row {
    value.as_object().cloned().unwrap()
}

pub(crate) fn project_json(id: i64, name: &str) -> Value {
    json!({
        "items": [{
            "projectId": id,
            "projectName": name,
            "owner": "alice@hopsworks.ai",
            "description": "demo project",
            "created": "2024-03-01T10:00:00.000Z"
        }]
    })
}

pub(crate) fn feature_store_json(project: &str) -> Value {
    json!({
        "featurestoreId": 67,
        "featurestoreName": format!("{project}_featurestore"),
        "projectName": project,
        "projectId": 119,
        "onlineEnabled": true,
        "offlineFeaturestoreName": format!("{project}_featurestore"),
        "onlineFeaturestoreName": project
    })
}

pub(crate) fn feature_group_json(id: i64, name: &str, version: u32) -> Value {
    json!({
        "id": id,
        "name": name,
        "version": version,
        "description": "",
        "featurestoreId": 67,
        "featurestoreName": "acme_featurestore",
        "type": "cachedFeaturegroupDTO",
        "onlineEnabled": true,
        "timeTravelFormat": "HUDI",
        "features": [
            {"name": "id", "type": "bigint", "primary": true},
            {"name": "price", "type": "double"}
        ],
        "primaryKey": ["id"],
        "partitionKey": []
    })
}
