use anyhow::{bail, Context, Result};
use serde::Deserialize;
use tracing::info;

use crate::config::Config;

const API_BASE_URL: &str = "https://api.airtable.com/v0";

/// One row from a hosted table: an id plus an untyped named-field map.
/// Fields are accessed through the typed helpers below, which degrade to
/// absence instead of erroring on missing or mistyped values.
#[derive(Debug, Clone, Deserialize)]
pub struct Record {
    #[serde(default)]
    pub id: String,
    #[serde(default)]
    pub fields: serde_json::Map<String, serde_json::Value>,
}

impl Record {
    pub fn text(&self, name: &str) -> Option<&str> {
        self.fields.get(name).and_then(|v| v.as_str())
    }

    pub fn number(&self, name: &str) -> Option<i64> {
        self.fields.get(name).and_then(|v| v.as_i64())
    }

    pub fn boolean(&self, name: &str) -> bool {
        self.fields
            .get(name)
            .and_then(|v| v.as_bool())
            .unwrap_or(false)
    }
}

#[derive(Deserialize)]
struct TableResponse {
    #[serde(default)]
    records: Vec<Record>,
}

/// Fetch all records of one table. A non-success status aborts the run
/// with the status, status text, and response body; there is no retry.
pub async fn fetch_table(
    client: &reqwest::Client,
    cfg: &Config,
    table: &str,
    query: Option<&str>,
) -> Result<Vec<Record>> {
    let mut url = format!("{}/{}/{}", API_BASE_URL, cfg.base_id, table);
    if let Some(q) = query {
        url.push('?');
        url.push_str(q);
    }

    info!("Fetching table: {}", table);
    let response = client
        .get(&url)
        .bearer_auth(&cfg.api_key)
        .send()
        .await
        .with_context(|| format!("Request for table '{}' failed", table))?;

    let status = response.status();
    let body = response
        .text()
        .await
        .with_context(|| format!("Failed to read response body for table '{}'", table))?;

    if !status.is_success() {
        bail!(
            "Fetching table '{}' returned {} {}: {}",
            table,
            status.as_u16(),
            status.canonical_reason().unwrap_or("unknown"),
            body
        );
    }

    let records = parse_records(&body)
        .with_context(|| format!("Failed to parse response for table '{}'", table))?;
    info!("Table '{}': {} records", table, records.len());
    Ok(records)
}

/// Parse a `{"records": [...]}` response body.
fn parse_records(body: &str) -> Result<Vec<Record>> {
    let parsed: TableResponse = serde_json::from_str(body)?;
    Ok(parsed.records)
}

// ── Tests ──
