pub mod dataset;
pub mod source;

pub use dataset::{
    ColumnInfo, ColumnStatus, ExternalSourceResponse, ExternalSourceResult, Row, UploadResponse,
    UploadResult, ValidationResult,
};
pub use source::{
    CloudCredentials, DatabaseCredentials, ExternalSourceRequest, SourceCredentials, SourceType,
};
