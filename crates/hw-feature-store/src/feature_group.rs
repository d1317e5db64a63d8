//! Feature group handle: metadata snapshot plus row ingestion.

use std::collections::BTreeSet;

use serde::Serialize;
use tracing::{info, instrument};

use crate::api::FeatureGroupApi;
use crate::error::{Error, Result};
use crate::types::{Feature, FeatureGroupData, Row, WriteMode};

/// A versioned table of feature rows in a feature store.
///
/// The metadata is a read-only snapshot of the server response the handle
/// was built from.
#[derive(Debug, Clone)]
pub struct FeatureGroup {
    data: FeatureGroupData,
    api: FeatureGroupApi,
}

impl FeatureGroup {
    pub(crate) fn new(data: FeatureGroupData, api: FeatureGroupApi) -> Self {
        Self { data, api }
    }

    /// Server-assigned id.
    pub fn id(&self) -> i64 {
        self.data.id
    }

    /// Feature group name.
    pub fn name(&self) -> &str {
        &self.data.name
    }

    /// Feature group version.
    pub fn version(&self) -> u32 {
        self.data.version
    }

    /// Description, empty when unset.
    pub fn description(&self) -> &str {
        &self.data.description
    }

    /// Id of the owning feature store.
    pub fn featurestore_id(&self) -> i64 {
        self.data.featurestore_id
    }

    /// Whether rows are also served from the online store.
    pub fn online_enabled(&self) -> bool {
        self.data.online_enabled
    }

    /// Column descriptors.
    pub fn features(&self) -> &[Feature] {
        &self.data.features
    }

    /// Primary key columns.
    pub fn primary_key(&self) -> &[String] {
        &self.data.primary_key
    }

    /// Partition key columns.
    pub fn partition_key(&self) -> &[String] {
        &self.data.partition_key
    }

    /// Event time column.
    pub fn event_time(&self) -> Option<&str> {
        self.data.event_time.as_deref()
    }

    /// The full server representation.
    pub fn data(&self) -> &FeatureGroupData {
        &self.data
    }

    /// Write rows into the feature group.
    ///
    /// Rows must be non-empty and share the first row's set of field names;
    /// otherwise the call fails without contacting the server.
    #[instrument(skip(self, rows), fields(feature_group = %self.data.name, version = self.data.version, rows = rows.len()))]
    pub async fn insert(&self, rows: &[Row], mode: WriteMode) -> Result<()> {
        validate_rows(rows)?;
        self.api.insert_data(self.data.id, rows, mode).await?;
        info!(%mode, "Inserted rows");
        Ok(())
    }

    /// Upsert rows; same as `insert(rows, WriteMode::Upsert)`.
    pub async fn save(&self, rows: &[Row]) -> Result<()> {
        self.insert(rows, WriteMode::Upsert).await
    }

    /// Serialize records into rows and insert them.
    ///
    /// Each record must serialize to a JSON object.
    pub async fn insert_records<T: Serialize>(&self, records: &[T], mode: WriteMode) -> Result<()> {
        let rows = records
            .iter()
            .enumerate()
            .map(|(i, record)| match serde_json::to_value(record)? {
                serde_json::Value::Object(row) => Ok(row),
                _ => Err(Error::invalid_input(format!(
                    "Record {i} does not serialize to an object"
                ))),
            })
            .collect::<Result<Vec<Row>>>()?;
        self.insert(&rows, mode).await
    }
}

impl std::fmt::Display for FeatureGroup {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "FeatureGroup({}, version={}, onlineEnabled={})",
            self.data.name, self.data.version, self.data.online_enabled
        )
    }
}

/// Check that `rows` is non-empty and every row has the first row's keys.
pub(crate) fn validate_rows(rows: &[Row]) -> Result<()> {
    let Some((first, rest)) = rows.split_first() else {
        return Err(Error::invalid_input(
            "Data must be a non-empty sequence of rows",
        ));
    };

    let expected: BTreeSet<&str> = first.keys().map(String::as_str).collect();
    for (offset, row) in rest.iter().enumerate() {
        let keys: BTreeSet<&str> = row.keys().map(String::as_str).collect();
        if keys != expected {
            return Err(Error::invalid_input(format!(
                "All rows must have the same set of keys: row {} differs from row 0",
                offset + 1
            )));
        }
    }
    Ok(())
}
