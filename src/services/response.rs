// src/services/response.rs

//! Typed wire records for vendor CLI `--json` output
//!
//! Every response is deserialized into one of these shapes at the service
//! boundary and validated there; a field missing or mistyped fails the
//! call immediately instead of surfacing as a silent empty value
//! somewhere downstream.

use serde::Deserialize;
use serde::de::DeserializeOwned;

use crate::error::{Error, Result};

/// Envelope wrapping every successful `sf ... --json` response
#[derive(Debug, Deserialize)]
pub struct Envelope<T> {
    pub status: i64,
    pub result: T,
}

/// Envelope shape of a failed `sf ... --json` invocation
#[derive(Debug, Deserialize)]
pub struct ErrorEnvelope {
    pub status: i64,
    #[serde(default)]
    pub name: Option<String>,
    #[serde(default)]
    pub message: Option<String>,
}

impl ErrorEnvelope {
    /// Human-readable failure description, favoring the message body
    pub fn describe(&self) -> String {
        match (&self.name, &self.message) {
            (_, Some(message)) => message.clone(),
            (Some(name), None) => name.clone(),
            (None, None) => format!("vendor CLI reported status {}", self.status),
        }
    }
}

/// One metadata type from `sf org list metadata-types`
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MetadataObject {
    pub xml_name: String,
    #[serde(default)]
    pub directory_name: Option<String>,
    #[serde(default)]
    pub suffix: Option<String>,
    #[serde(default)]
    pub in_folder: bool,
    #[serde(default)]
    pub meta_file: bool,
}

/// Result body of `sf org list metadata-types`
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DescribeMetadataResult {
    pub metadata_objects: Vec<MetadataObject>,
}

/// Result body of `sf data query`
#[derive(Debug, Deserialize)]
pub struct QueryResult {
    pub records: Vec<EntityRecord>,
    #[serde(rename = "totalSize", default)]
    pub total_size: u64,
    #[serde(default)]
    pub done: bool,
}

/// One row of an entity-definition query
#[derive(Debug, Deserialize)]
pub struct EntityRecord {
    #[serde(rename = "QualifiedApiName")]
    pub qualified_api_name: String,
}

/// One row of `sf package installed list`
#[derive(Debug, Clone, Deserialize)]
pub struct InstalledPackage {
    #[serde(rename = "SubscriberPackageVersionId")]
    pub version_id: String,
    #[serde(rename = "SubscriberPackageName")]
    pub name: String,
}

/// Decode a successful response envelope, failing fast on shape mismatch.
pub fn decode<T: DeserializeOwned>(raw: &str) -> Result<T> {
    let envelope: Envelope<T> = serde_json::from_str(raw)
        .map_err(|e| Error::ParseError(format!("malformed vendor CLI response: {e}")))?;
    if envelope.status != 0 {
        return Err(Error::ParseError(format!(
            "vendor CLI reported status {} in a successful invocation",
            envelope.status
        )));
    }
    Ok(envelope.result)
}

/// Extract the failure message from an error response body, falling back
/// to the raw stderr text when the body is not JSON.
pub fn decode_failure(stdout: &str, stderr: &str) -> String {
    if let Ok(envelope) = serde_json::from_str::<ErrorEnvelope>(stdout) {
        return envelope.describe();
    }
    if !stderr.trim().is_empty() {
        return stderr.trim().to_string();
    }
    stdout.trim().to_string()
}
