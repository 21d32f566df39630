//! Deterministic payloads served by the mock transport.
//!
//! The mock build mode answers every backend call with these fixtures
//! (after a simulated delay added on the frontend side). They are plain
//! constructors so tests can assert on them directly.

use std::collections::BTreeMap;

use serde_json::{Value, json};

use crate::model::{
    ColumnInfo, ColumnStatus, ExternalSourceResult, Row, SourceType, UploadResult,
    ValidationResult,
};

fn rows(value: Value) -> Vec<Row> {
    match value {
        Value::Array(items) => items
            .into_iter()
            .filter_map(|item| match item {
                Value::Object(map) => Some(map),
                _ => None,
            })
            .collect(),
        _ => Vec::new(),
    }
}

fn types(pairs: &[(&str, &str)]) -> BTreeMap<String, String> {
    pairs
        .iter()
        .map(|(k, v)| (k.to_string(), v.to_string()))
        .collect()
}

fn column(name: &str, kind: &str, detected: &str, status: ColumnStatus) -> ColumnInfo {
    ColumnInfo {
        name: name.to_string(),
        kind: kind.to_string(),
        detected: detected.to_string(),
        status,
    }
}

/// Upload answer: a small tabular classification dataset. The filename is
/// echoed back so the preview is labelled like a real upload.
pub fn sample_upload_result(filename: &str) -> UploadResult {
    UploadResult {
        filename: filename.to_string(),
        columns: ["id", "age", "income", "education", "target"]
            .map(String::from)
            .to_vec(),
        sample_rows: rows(json!([
            { "id": 1, "age": 25, "income": 50000, "education": "Bachelor", "target": "Yes" },
            { "id": 2, "age": 32, "income": 75000, "education": "Master", "target": "No" },
            { "id": 3, "age": 28, "income": 60000, "education": "Bachelor", "target": "Yes" },
            { "id": 4, "age": 45, "income": 90000, "education": "PhD", "target": "No" },
            { "id": 5, "age": 23, "income": 40000, "education": "Bachelor", "target": "Yes" },
            { "id": 6, "age": 35, "income": 80000, "education": "Master", "target": "No" },
            { "id": 7, "age": 29, "income": 55000, "education": "Bachelor", "target": "Yes" },
            { "id": 8, "age": 41, "income": 95000, "education": "PhD", "target": "No" },
            { "id": 9, "age": 26, "income": 48000, "education": "Bachelor", "target": "Yes" },
            { "id": 10, "age": 38, "income": 85000, "education": "Master", "target": "No" }
        ])),
        inferred_types: types(&[
            ("id", "integer"),
            ("age", "integer"),
            ("income", "float"),
            ("education", "categorical"),
            ("target", "categorical"),
        ]),
        column_info: vec![
            column("id", "Numeric", "Integer", ColumnStatus::Valid),
            column("age", "Numeric", "Integer", ColumnStatus::Valid),
            column("income", "Numeric", "Float", ColumnStatus::Valid),
            column("education", "Categorical", "String", ColumnStatus::Valid),
            column("target", "Categorical", "String", ColumnStatus::Target),
        ],
        total_rows: 10_000,
    }
}

/// Validation answer: a clean schema with a detected target column.
pub fn sample_validation() -> ValidationResult {
    ValidationResult {
        is_valid: true,
        issues: Vec::new(),
        target_column: Some("target".to_string()),
        recommendations: vec![
            "Dataset looks good for classification".to_string(),
            "Consider feature scaling for numerical columns".to_string(),
            "Target variable is well balanced".to_string(),
        ],
    }
}

/// External-source answer: a short event-style preview tagged with the
/// requested provider.
pub fn sample_external_result(source_type: SourceType) -> ExternalSourceResult {
    ExternalSourceResult {
        source_type: source_type.wire_tag().to_string(),
        columns: ["user_id", "timestamp", "feature_a", "feature_b", "label"]
            .map(String::from)
            .to_vec(),
        sample_rows: rows(json!([
            { "user_id": "user_001", "timestamp": "2024-01-01", "feature_a": 1.2, "feature_b": "A", "label": 1 },
            { "user_id": "user_002", "timestamp": "2024-01-02", "feature_a": 2.3, "feature_b": "B", "label": 0 },
            { "user_id": "user_003", "timestamp": "2024-01-03", "feature_a": 1.8, "feature_b": "A", "label": 1 }
        ])),
        inferred_types: types(&[
            ("user_id", "string"),
            ("timestamp", "datetime"),
            ("feature_a", "float"),
            ("feature_b", "categorical"),
            ("label", "integer"),
        ]),
        column_info: vec![
            column("user_id", "Identifier", "String", ColumnStatus::Valid),
            column("timestamp", "Datetime", "Datetime", ColumnStatus::Valid),
            column("feature_a", "Numeric", "Float", ColumnStatus::Valid),
            column("feature_b", "Categorical", "String", ColumnStatus::Valid),
            column("label", "Target", "Integer", ColumnStatus::Target),
        ],
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn upload_fixture_is_deterministic_and_echoes_filename() {
        let a = sample_upload_result("customers.csv");
        let b = sample_upload_result("customers.csv");
        assert_eq!(a, b);
        assert_eq!(a.filename, "customers.csv");
        assert_eq!(a.sample_rows.len(), 10);
        assert_eq!(a.total_rows, 10_000);
    }

    #[test]
    fn upload_fixture_columns_match_row_keys() {
        let result = sample_upload_result("data.csv");
        let keys: Vec<&String> = result.sample_rows[0].keys().collect();
        assert_eq!(keys, result.columns.iter().collect::<Vec<_>>());
        for column in &result.columns {
            assert!(result.inferred_types.contains_key(column));
        }
        assert_eq!(result.column_info.len(), result.columns.len());
    }

    #[test]
    fn external_fixture_carries_the_requested_tag() {
        let result = sample_external_result(SourceType::S3);
        assert_eq!(result.source_type, "s3");
        assert_eq!(result.sample_rows.len(), 3);
    }

    #[test]
    fn validation_fixture_names_the_target() {
        let result = sample_validation();
        assert!(result.is_valid);
        assert_eq!(result.target_column.as_deref(), Some("target"));
        assert_eq!(result.recommendations.len(), 3);
    }
}
