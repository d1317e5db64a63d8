//! Wire types for the project, feature store and feature group resources.

use serde::{Deserialize, Deserializer, Serialize};

/// One row of feature data: field name to JSON value, insertion ordered.
pub type Row = serde_json::Map<String, serde_json::Value>;

/// Discriminator sent when creating a cached feature group.
pub const CACHED_FEATURE_GROUP_TYPE: &str = "cachedFeaturegroupDTO";

/// Table format sent when creating a feature group.
pub const HUDI_TIME_TRAVEL_FORMAT: &str = "HUDI";

/// Version used when the caller does not name one.
pub const DEFAULT_FEATURE_GROUP_VERSION: u32 = 1;

/// Deserialize an absent or `null` field as its default value.
fn null_as_default<'de, D, T>(deserializer: D) -> Result<T, D::Error>
where
    D: Deserializer<'de>,
    T: Default + Deserialize<'de>,
{
    Ok(Option::<T>::deserialize(deserializer)?.unwrap_or_default())
}

/// `{items: [...]}` wrapper returned by listing endpoints.
#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(bound(deserialize = "T: Deserialize<'de>"))]
pub struct ItemsResponse<T> {
    #[serde(default, deserialize_with = "null_as_default")]
    pub items: Vec<T>,
}

impl<T> Default for ItemsResponse<T> {
    fn default() -> Self {
        Self { items: Vec::new() }
    }
}

/// Project as returned by the project endpoints.
#[derive(Debug, Clone, PartialEq, Deserialize, Serialize)]
pub struct ProjectData {
    #[serde(rename = "projectId")]
    pub project_id: i64,
    #[serde(rename = "projectName")]
    pub project_name: String,
    #[serde(default, deserialize_with = "null_as_default")]
    pub owner: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub created: Option<String>,
}

/// Feature store as returned by the feature store endpoint.
#[derive(Debug, Clone, PartialEq, Deserialize, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct FeatureStoreData {
    pub featurestore_id: i64,
    pub featurestore_name: String,
    pub project_name: String,
    pub project_id: i64,
    #[serde(default, deserialize_with = "null_as_default")]
    pub online_enabled: bool,
    #[serde(default, deserialize_with = "null_as_default")]
    pub offline_featurestore_name: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub online_featurestore_name: Option<String>,
}

/// A column of a feature group.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Feature {
    pub name: String,
    #[serde(rename = "type")]
    pub feature_type: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub primary: Option<bool>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub partition: Option<bool>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub hudi_precombine_key: Option<bool>,
}

impl Feature {
    /// Create a feature with the given name and offline type, e.g. `bigint`.
    pub fn new(name: impl Into<String>, feature_type: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            feature_type: feature_type.into(),
            description: None,
            primary: None,
            partition: None,
            hudi_precombine_key: None,
        }
    }

    /// Set the description.
    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.description = Some(description.into());
        self
    }

    /// Mark the feature as part of the primary key.
    pub fn primary(mut self) -> Self {
        self.primary = Some(true);
        self
    }

    /// Mark the feature as a partition column.
    pub fn partition(mut self) -> Self {
        self.partition = Some(true);
        self
    }
}

/// Feature group as returned by the feature group endpoints.
#[derive(Debug, Clone, PartialEq, Deserialize, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct FeatureGroupData {
    pub id: i64,
    pub name: String,
    pub version: u32,
    #[serde(default, deserialize_with = "null_as_default")]
    pub description: String,
    pub featurestore_id: i64,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub featurestore_name: Option<String>,
    #[serde(rename = "type", default, skip_serializing_if = "Option::is_none")]
    pub group_type: Option<String>,
    #[serde(default, deserialize_with = "null_as_default")]
    pub online_enabled: bool,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub time_travel_format: Option<String>,
    #[serde(default, deserialize_with = "null_as_default")]
    pub features: Vec<Feature>,
    #[serde(default, deserialize_with = "null_as_default")]
    pub primary_key: Vec<String>,
    #[serde(default, deserialize_with = "null_as_default")]
    pub partition_key: Vec<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub event_time: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub created: Option<String>,
}

/// Caller-supplied settings for a new feature group.
///
/// Unset fields fall back to the platform defaults when the create payload
/// is assembled.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct FeatureGroupOptions {
    pub version: Option<u32>,
    pub description: Option<String>,
    pub features: Option<Vec<Feature>>,
    pub primary_key: Option<Vec<String>>,
    pub partition_key: Option<Vec<String>>,
    pub event_time: Option<String>,
    pub online_enabled: Option<bool>,
}

impl FeatureGroupOptions {
    /// Create empty options.
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the version.
    pub fn with_version(mut self, version: u32) -> Self {
        self.version = Some(version);
        self
    }

    /// Set the description.
    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.description = Some(description.into());
        self
    }

    /// Declare the schema up front.
    pub fn with_features(mut self, features: Vec<Feature>) -> Self {
        self.features = Some(features);
        self
    }

    /// Set the primary key columns.
    pub fn with_primary_key<I, S>(mut self, columns: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.primary_key = Some(columns.into_iter().map(Into::into).collect());
        self
    }

    /// Set the partition key columns.
    pub fn with_partition_key<I, S>(mut self, columns: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.partition_key = Some(columns.into_iter().map(Into::into).collect());
        self
    }

    /// Set the event time column.
    pub fn with_event_time(mut self, column: impl Into<String>) -> Self {
        self.event_time = Some(column.into());
        self
    }

    /// Enable or disable the online store.
    pub fn with_online_enabled(mut self, enabled: bool) -> Self {
        self.online_enabled = Some(enabled);
        self
    }
}

/// POST body for feature group creation.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct FeatureGroupCreateRequest {
    pub name: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub version: Option<u32>,
    pub description: String,
    pub features: Vec<Feature>,
    pub primary_key: Vec<String>,
    pub partition_key: Vec<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub event_time: Option<String>,
    pub online_enabled: bool,
    #[serde(rename = "type")]
    pub group_type: String,
    pub time_travel_format: String,
}

impl FeatureGroupCreateRequest {
    /// Assemble the payload, applying defaults to unset options.
    pub fn new(name: impl Into<String>, options: FeatureGroupOptions) -> Self {
        Self {
            name: name.into(),
            version: options.version,
            description: options.description.unwrap_or_default(),
            features: options.features.unwrap_or_default(),
            primary_key: options.primary_key.unwrap_or_default(),
            partition_key: options.partition_key.unwrap_or_default(),
            event_time: options.event_time,
            online_enabled: options.online_enabled.unwrap_or(false),
            group_type: CACHED_FEATURE_GROUP_TYPE.to_string(),
            time_travel_format: HUDI_TIME_TRAVEL_FORMAT.to_string(),
        }
    }
}

/// Ingestion write semantics.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum WriteMode {
    /// Insert only; duplicate primary keys are rejected by the server.
    Insert,
    /// Insert or update keyed by primary key.
    #[default]
    Upsert,
}

impl WriteMode {
    /// Wire value of the `write` query parameter.
    pub fn as_str(&self) -> &'static str {
        match self {
            WriteMode::Insert => "insert",
            WriteMode::Upsert => "upsert",
        }
    }
}

impl std::fmt::Display for WriteMode {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// POST body for row ingestion.
#[derive(Debug, Serialize)]
pub(crate) struct IngestionRequest<'a> {
    pub items: &'a [Row],
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_project_data_deserialize() {
        let json = json!({
            "projectId": 119,
            "projectName": "acme",
            "owner": "admin@hopsworks.ai",
            "created": "2024-03-01T10:00:00.000Z"
        });
        let project: ProjectData = serde_json::from_value(json).unwrap();
        assert_eq!(project.project_id, 119);
        assert_eq!(project.project_name, "acme");
        assert_eq!(project.description, None);
        assert_eq!(project.created.as_deref(), Some("2024-03-01T10:00:00.000Z"));
    }

    #[test]
    fn test_items_response_missing_items() {
        let resp: ItemsResponse<ProjectData> = serde_json::from_value(json!({})).unwrap();
        assert!(resp.items.is_empty());
    }

    #[test]
    fn test_null_fields_decode_as_defaults() {
        let resp: ItemsResponse<ProjectData> =
            serde_json::from_value(json!({"items": null})).unwrap();
        assert!(resp.items.is_empty());

        let fg: FeatureGroupData = serde_json::from_value(json!({
            "id": 13,
            "name": "prices",
            "version": 1,
            "featurestoreId": 67,
            "description": null,
            "onlineEnabled": null,
            "features": null,
            "primaryKey": null,
            "partitionKey": null
        }))
        .unwrap();
        assert_eq!(fg.description, "");
        assert!(!fg.online_enabled);
        assert!(fg.features.is_empty());
        assert!(fg.primary_key.is_empty());
        assert!(fg.partition_key.is_empty());
    }

    #[test]
    fn test_feature_store_data_deserialize() {
        let json = json!({
            "featurestoreId": 67,
            "featurestoreName": "acme_featurestore",
            "projectName": "acme",
            "projectId": 119,
            "onlineEnabled": true,
            "offlineFeaturestoreName": "acme_featurestore",
            "onlineFeaturestoreName": "acme"
        });
        let fs: FeatureStoreData = serde_json::from_value(json).unwrap();
        assert_eq!(fs.featurestore_id, 67);
        assert!(fs.online_enabled);
        assert_eq!(fs.online_featurestore_name.as_deref(), Some("acme"));
    }

    #[test]
    fn test_feature_group_data_deserialize() {
        let json = json!({
            "id": 13,
            "name": "prices",
            "version": 1,
            "featurestoreId": 67,
            "type": "cachedFeaturegroupDTO",
            "onlineEnabled": true,
            "features": [
                {"name": "id", "type": "bigint", "primary": true},
                {"name": "price", "type": "double", "hudiPrecombineKey": false}
            ],
            "primaryKey": ["id"]
        });
        let fg: FeatureGroupData = serde_json::from_value(json).unwrap();
        assert_eq!(fg.id, 13);
        assert_eq!(fg.description, "");
        assert_eq!(fg.group_type.as_deref(), Some(CACHED_FEATURE_GROUP_TYPE));
        assert_eq!(fg.features.len(), 2);
        assert_eq!(fg.features[0].primary, Some(true));
        assert_eq!(fg.features[1].hudi_precombine_key, Some(false));
        assert!(fg.partition_key.is_empty());
        assert_eq!(fg.event_time, None);
    }

    #[test]
    fn test_create_request_defaults() {
        let payload = FeatureGroupCreateRequest::new("fg1", FeatureGroupOptions::new());
        let value = serde_json::to_value(&payload).unwrap();

        assert_eq!(
            value,
            json!({
                "name": "fg1",
                "description": "",
                "features": [],
                "primaryKey": [],
                "partitionKey": [],
                "onlineEnabled": false,
                "type": "cachedFeaturegroupDTO",
                "timeTravelFormat": "HUDI"
            })
        );
    }

    #[test]
    fn test_create_request_with_options() {
        let options = FeatureGroupOptions::new()
            .with_version(2)
            .with_description("Air quality")
            .with_primary_key(["city", "date"])
            .with_partition_key(["date"])
            .with_event_time("date")
            .with_online_enabled(true)
            .with_features(vec![Feature::new("city", "string").primary()]);
        let value = serde_json::to_value(FeatureGroupCreateRequest::new("air", options)).unwrap();

        assert_eq!(value["version"], 2);
        assert_eq!(value["description"], "Air quality");
        assert_eq!(value["primaryKey"], json!(["city", "date"]));
        assert_eq!(value["partitionKey"], json!(["date"]));
        assert_eq!(value["eventTime"], "date");
        assert_eq!(value["onlineEnabled"], true);
        assert_eq!(
            value["features"],
            json!([{"name": "city", "type": "string", "primary": true}])
        );
    }

    #[test]
    fn test_write_mode() {
        assert_eq!(WriteMode::default(), WriteMode::Upsert);
        assert_eq!(WriteMode::Insert.as_str(), "insert");
        assert_eq!(WriteMode::Upsert.to_string(), "upsert");
        assert_eq!(serde_json::to_value(WriteMode::Insert).unwrap(), json!("insert"));
    }
}
