//! External data sources and their credentials.
//!
//! Each provider has its own field set, but the backend accepts one flat
//! string map. The typed union below keeps the per-provider shapes honest
//! inside the app; flattening happens only when the request is built.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

/// The external source providers offered by the ingestion page.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SourceType {
    PostgreSql,
    MySql,
    MongoDb,
    S3,
    Gcs,
    Azure,
    Dropbox,
}

impl SourceType {
    /// Tag sent in the `source_type` field of `POST /external-source`.
    pub fn wire_tag(&self) -> &'static str {
        match self {
            SourceType::PostgreSql => "postgresql",
            SourceType::MySql => "mysql",
            SourceType::MongoDb => "mongodb",
            SourceType::S3 => "s3",
            SourceType::Gcs => "gcs",
            SourceType::Azure => "azure",
            SourceType::Dropbox => "dropbox",
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            SourceType::PostgreSql => "PostgreSQL",
            SourceType::MySql => "MySQL",
            SourceType::MongoDb => "MongoDB",
            SourceType::S3 => "Amazon S3",
            SourceType::Gcs => "Google Cloud Storage",
            SourceType::Azure => "Azure Blob Storage",
            SourceType::Dropbox => "Dropbox",
        }
    }

    /// Conventional port pre-filled in the connection form. `None` for
    /// cloud storage providers.
    pub fn default_port(&self) -> Option<&'static str> {
        match self {
            SourceType::PostgreSql => Some("5432"),
            SourceType::MySql => Some("3306"),
            SourceType::MongoDb => Some("27017"),
            _ => None,
        }
    }
}

/// Connection details for a relational or document database.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DatabaseCredentials {
    pub host: String,
    pub port: String,
    pub database: String,
    pub username: String,
    pub password: String,
    /// Optional SELECT statement; empty means "browse tables".
    pub query: Option<String>,
}

/// Connection details for a cloud storage provider. Not every provider
/// uses every field; the dialog only collects what its provider needs.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CloudCredentials {
    pub api_key: String,
    pub secret_key: Option<String>,
    pub bucket_path: String,
    pub region: Option<String>,
}

/// Tagged credential union: one variant per provider family.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum SourceCredentials {
    Database(DatabaseCredentials),
    Cloud(CloudCredentials),
}

impl SourceCredentials {
    /// Flattens the typed credentials into the string map the backend
    /// expects. Optional fields are sent as empty strings so the key set
    /// per family is stable.
    pub fn wire_fields(&self) -> BTreeMap<String, String> {
        let mut fields = BTreeMap::new();
        match self {
            SourceCredentials::Database(db) => {
                fields.insert("host".to_string(), db.host.clone());
                fields.insert("port".to_string(), db.port.clone());
                fields.insert("database".to_string(), db.database.clone());
                fields.insert("username".to_string(), db.username.clone());
                fields.insert("password".to_string(), db.password.clone());
                fields.insert(
                    "query".to_string(),
                    db.query.clone().unwrap_or_default(),
                );
            }
            SourceCredentials::Cloud(cloud) => {
                fields.insert("apiKey".to_string(), cloud.api_key.clone());
                fields.insert(
                    "secretKey".to_string(),
                    cloud.secret_key.clone().unwrap_or_default(),
                );
                fields.insert("bucketPath".to_string(), cloud.bucket_path.clone());
                fields.insert(
                    "region".to_string(),
                    cloud.region.clone().unwrap_or_default(),
                );
            }
        }
        fields
    }
}

/// Body of `POST /external-source`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ExternalSourceRequest {
    pub source_type: SourceType,
    pub credentials: BTreeMap<String, String>,
}

impl ExternalSourceRequest {
    pub fn new(source_type: SourceType, credentials: &SourceCredentials) -> Self {
        Self {
            source_type,
            credentials: credentials.wire_fields(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn database_request_wire_shape() {
        let credentials = SourceCredentials::Database(DatabaseCredentials {
            host: "localhost".to_string(),
            port: "5432".to_string(),
            database: "sales".to_string(),
            username: "analyst".to_string(),
            password: "secret".to_string(),
            query: Some("SELECT * FROM orders LIMIT 1000".to_string()),
        });
        let request = ExternalSourceRequest::new(SourceType::PostgreSql, &credentials);
        let json = serde_json::to_value(&request).unwrap();
        assert_eq!(json["source_type"], "postgresql");
        assert_eq!(json["credentials"]["host"], "localhost");
        assert_eq!(json["credentials"]["query"], "SELECT * FROM orders LIMIT 1000");
        assert_eq!(json["credentials"].as_object().unwrap().len(), 6);
    }

    #[test]
    fn cloud_request_fills_missing_fields_with_empty_strings() {
        let credentials = SourceCredentials::Cloud(CloudCredentials {
            api_key: "token".to_string(),
            secret_key: None,
            bucket_path: "/exports".to_string(),
            region: None,
        });
        let request = ExternalSourceRequest::new(SourceType::Dropbox, &credentials);
        let json = serde_json::to_value(&request).unwrap();
        assert_eq!(json["source_type"], "dropbox");
        assert_eq!(json["credentials"]["apiKey"], "token");
        assert_eq!(json["credentials"]["secretKey"], "");
        assert_eq!(json["credentials"]["region"], "");
    }

    #[test]
    fn default_ports_only_for_databases() {
        assert_eq!(SourceType::PostgreSql.default_port(), Some("5432"));
        assert_eq!(SourceType::MongoDb.default_port(), Some("27017"));
        assert_eq!(SourceType::S3.default_port(), None);
    }
}
