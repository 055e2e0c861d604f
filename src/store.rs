//! Record store: loads the full applicant sequence.
//!
//! Source precedence mirrors the hosted dashboard: a seed file (the analog
//! of a page-embedded payload) is used when supplied and non-empty,
//! otherwise the collection endpoint is fetched. Responses may be a bare
//! array or an envelope exposing `results`; anything else normalizes to
//! an empty sequence. Malformed payloads degrade to empty with a
//! diagnostic instead of failing the page.

use crate::api::{ApiClient, ClientError};
use crate::model::ApplicantRecord;
use serde_json::Value;
use std::path::PathBuf;
use tracing::warn;

#[derive(Debug, Clone)]
pub struct RecordStore {
    seed: Option<PathBuf>,
}

impl RecordStore {
    pub fn new(seed: Option<PathBuf>) -> Self {
        Self { seed }
    }

    /// First population of the store. Prefers the seed file; falls back to
    /// the network when no seed is present or the seed holds no records.
    pub async fn load_initial(&self, client: &ApiClient) -> Result<Vec<ApplicantRecord>, ClientError> {
        if let Some(path) = &self.seed {
            match tokio::fs::read_to_string(path).await {
                Ok(raw) => match serde_json::from_str::<Value>(&raw) {
                    Ok(value) => {
                        let records = records_from_value(&value);
                        if !records.is_empty() {
                            return Ok(records);
                        }
                        // An empty seed defers to the network, like an
                        // empty embedded payload.
                    }
                    Err(e) => {
                        warn!("seed file {} is not valid JSON: {e}", path.display());
                        return Ok(Vec::new());
                    }
                },
                Err(e) => {
                    warn!("seed file {} unreadable, fetching instead: {e}", path.display());
                }
            }
        }
        self.refresh(client).await
    }

    /// Reload from the collection endpoint.
    pub async fn refresh(&self, client: &ApiClient) -> Result<Vec<ApplicantRecord>, ClientError> {
        match client.list().await {
            Ok(value) => Ok(records_from_value(&value)),
            // A body that failed to decode degrades to empty; transport and
            // HTTP failures surface to the caller.
            Err(ClientError::Parse(msg)) => {
                warn!("applicant listing response was not valid JSON: {msg}");
                Ok(Vec::new())
            }
            Err(e) => Err(e),
        }
    }
}

/// Normalize a listing payload: a bare array, `{results: [...]}`, and an
/// empty sequence for any other shape. Individual records that fail to
/// decode are skipped with a diagnostic rather than poisoning the batch.
pub fn records_from_value(value: &Value) -> Vec<ApplicantRecord> {
    let items = match value {
        Value::Array(items) => items.as_slice(),
        Value::Object(map) => match map.get("results") {
            Some(Value::Array(items)) => items.as_slice(),
            _ => {
                warn!("applicant listing envelope had no results array");
                return Vec::new();
            }
        },
        _ => {
            warn!("applicant listing had an unexpected shape");
            return Vec::new();
        }
    };

    items
        .iter()
        .filter_map(|item| match serde_json::from_value(item.clone()) {
            Ok(record) => Some(record),
            Err(e) => {
                warn!("skipping malformed applicant record: {e}");
                None
            }
        })
        .collect()
}
