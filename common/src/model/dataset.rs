//! Wire model for dataset previews and schema validation.
//!
//! These structs mirror the JSON exchanged with `POST /upload`,
//! `POST /validate-schema` and `POST /external-source`. The same shapes are
//! produced by the mock transport, so the page components never care which
//! side of the build switch they are talking to.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use crate::error::ApiError;

/// A single preview row: column name to cell value, in column order.
///
/// `serde_json` is built with `preserve_order`, so the first row's key
/// order is the column order of the whole preview. CSV export relies on
/// this.
pub type Row = serde_json::Map<String, serde_json::Value>;

/// Validation verdict the backend attaches to each detected column.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ColumnStatus {
    Valid,
    Invalid,
    Target,
    Warning,
}

/// Backend-derived description of one column of the current dataset.
///
/// Purely descriptive: it has no lifecycle of its own and is replaced
/// together with the preview it belongs to.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ColumnInfo {
    pub name: String,
    /// Broad category shown as a badge: `"Numeric"`, `"Categorical"`,
    /// `"Datetime"`, `"Identifier"`, `"Target"`.
    #[serde(rename = "type")]
    pub kind: String,
    /// The concrete representation the backend detected, e.g. `"Integer"`.
    pub detected: String,
    pub status: ColumnStatus,
}

/// Result of a successful file upload.
///
/// Owned by the ingestion page for the lifetime of the view and replaced
/// wholesale by the next upload or external connection.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct UploadResult {
    pub filename: String,
    pub columns: Vec<String>,
    pub sample_rows: Vec<Row>,
    pub inferred_types: BTreeMap<String, String>,
    pub column_info: Vec<ColumnInfo>,
    pub total_rows: u64,
}

/// Result of connecting an external source. Structurally an
/// [`UploadResult`] minus the total row count, plus the source tag.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ExternalSourceResult {
    pub source_type: String,
    pub columns: Vec<String>,
    pub sample_rows: Vec<Row>,
    pub inferred_types: BTreeMap<String, String>,
    pub column_info: Vec<ColumnInfo>,
}

/// Advisory outcome of `POST /validate-schema`.
///
/// Never treated as an error: an invalid schema only produces a warning
/// toast and the page still reaches its ready state.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ValidationResult {
    pub is_valid: bool,
    pub issues: Vec<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub target_column: Option<String>,
    pub recommendations: Vec<String>,
}

impl ValidationResult {
    /// Synthetic result used when the validation call itself fails.
    /// The transport never propagates that failure any other way.
    pub fn transport_failure() -> Self {
        Self {
            is_valid: false,
            issues: vec!["Failed to validate schema".to_string()],
            target_column: None,
            recommendations: Vec::new(),
        }
    }
}

/// Envelope around [`UploadResult`] as it appears on the wire.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct UploadResponse {
    pub success: bool,
    pub message: String,
    #[serde(default)]
    pub data: Option<UploadResult>,
    #[serde(default)]
    pub error: Option<String>,
}

impl UploadResponse {
    pub fn into_result(self) -> Result<UploadResult, ApiError> {
        match (self.success, self.data) {
            (true, Some(data)) => Ok(data),
            _ => Err(ApiError::Rejected(
                self.error.unwrap_or(self.message),
            )),
        }
    }
}

/// Envelope around [`ExternalSourceResult`] as it appears on the wire.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ExternalSourceResponse {
    pub success: bool,
    pub message: String,
    #[serde(default)]
    pub data: Option<ExternalSourceResult>,
    #[serde(default)]
    pub error: Option<String>,
}

impl ExternalSourceResponse {
    pub fn into_result(self) -> Result<ExternalSourceResult, ApiError> {
        match (self.success, self.data) {
            (true, Some(data)) => Ok(data),
            _ => Err(ApiError::Rejected(
                self.error.unwrap_or(self.message),
            )),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn upload_envelope_success_yields_data() {
        let body = r#"{
            "success": true,
            "message": "File uploaded successfully",
            "data": {
                "filename": "data.csv",
                "columns": ["id", "age"],
                "sample_rows": [{"id": 1, "age": 25}],
                "inferred_types": {"id": "integer", "age": "integer"},
                "column_info": [
                    {"name": "id", "type": "Numeric", "detected": "Integer", "status": "valid"}
                ],
                "total_rows": 100
            }
        }"#;
        let envelope: UploadResponse = serde_json::from_str(body).unwrap();
        let result = envelope.into_result().unwrap();
        assert_eq!(result.filename, "data.csv");
        assert_eq!(result.columns, vec!["id", "age"]);
        assert_eq!(result.column_info[0].status, ColumnStatus::Valid);
        assert_eq!(result.total_rows, 100);
    }

    #[test]
    fn upload_envelope_failure_carries_error_message() {
        let body = r#"{"success": false, "message": "Upload failed", "error": "disk full"}"#;
        let envelope: UploadResponse = serde_json::from_str(body).unwrap();
        assert_eq!(
            envelope.into_result().unwrap_err(),
            ApiError::Rejected("disk full".to_string())
        );
    }

    #[test]
    fn upload_envelope_failure_falls_back_to_message() {
        let envelope = UploadResponse {
            success: false,
            message: "Upload failed".to_string(),
            data: None,
            error: None,
        };
        assert_eq!(
            envelope.into_result().unwrap_err(),
            ApiError::Rejected("Upload failed".to_string())
        );
    }

    #[test]
    fn rows_keep_column_order() {
        let row: Row =
            serde_json::from_str(r#"{"id": 1, "age": 25, "income": 50000, "education": "BSc"}"#)
                .unwrap();
        let keys: Vec<&String> = row.keys().collect();
        assert_eq!(keys, ["id", "age", "income", "education"]);
    }

    #[test]
    fn validation_result_tolerates_missing_target_column() {
        let body = r#"{"is_valid": true, "issues": [], "recommendations": []}"#;
        let result: ValidationResult = serde_json::from_str(body).unwrap();
        assert!(result.is_valid);
        assert_eq!(result.target_column, None);
    }
}
