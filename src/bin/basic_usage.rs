//! End-to-end walk through the feature store client.
//!
//! Connects, resolves the default project and its feature store, makes sure
//! a feature group exists, then upserts a few sensor readings.
//!
//! ```sh
//! export HOPSWORKS_HOST='my-instance.cloud.hopsworks.ai'
//! export HOPSWORKS_API_KEY='...'
//! export HOPSWORKS_PROJECT='my_project'
//! cargo run --bin basic-usage
//! ```

use anyhow::Context;
use chrono::{SecondsFormat, Utc};
use hopsworks_api::feature_store::{connection, ConnectionOptions, FeatureGroupOptions, WriteMode};
use serde::Serialize;
use tracing_subscriber::EnvFilter;

const FEATURE_GROUP: &str = "temperature_readings";

#[derive(Debug, Serialize)]
struct Reading {
    sensor_id: &'static str,
    timestamp: String,
    temperature: f64,
    humidity: f64,
    location: &'static str,
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .init();

    println!("Connecting to Hopsworks...");
    let options = ConnectionOptions::from_env().context("reading HOPSWORKS_* variables")?;
    let mut conn = connection(options)?;

    let project = conn
        .get_project(None)
        .await
        .context("HOPSWORKS_PROJECT must name an accessible project")?;
    println!("Connected to project: {project}");

    let fs = project.get_feature_store(None).await?;
    println!("Connected to feature store: {}", fs.name());

    let options = FeatureGroupOptions::new()
        .with_description("Temperature sensor readings")
        .with_primary_key(["sensor_id", "timestamp"])
        .with_event_time("timestamp")
        .with_online_enabled(true);
    let fg = fs
        .get_or_create_feature_group(FEATURE_GROUP, Some(1), options)
        .await?;
    println!("Feature group: {fg}");
    println!("  - Primary key: {}", fg.primary_key().join(", "));

    let now = Utc::now().to_rfc3339_opts(SecondsFormat::Millis, true);
    let readings = [
        ("sensor_001", 22.5, 65.0, "Stockholm"),
        ("sensor_002", 18.3, 70.5, "Oslo"),
        ("sensor_003", 20.1, 68.2, "Copenhagen"),
    ]
    .into_iter()
    .map(|(sensor_id, temperature, humidity, location)| Reading {
        sensor_id,
        timestamp: now.clone(),
        temperature,
        humidity,
        location,
    })
    .collect::<Vec<_>>();

    println!("Inserting {} records...", readings.len());
    fg.insert_records(&readings, WriteMode::Upsert).await?;
    tracing::info!(feature_group = fg.name(), "Data inserted");

    conn.close();
    println!("Connection closed.");
    Ok(())
}
