use common::error::ApiError;
use common::model::{ExternalSourceResult, UploadResult, ValidationResult};

pub enum Msg {
    SetTab(String),
    OpenFilePicker,
    FileSelected(web_sys::File),
    DragStateChanged(bool),
    Progress(u32),
    UploadFinished(Result<UploadResult, ApiError>),
    ValidationFinished(ValidationResult),
    OpenConnectorSheet,
    OpenCloudSheet,
    ExternalConnected(ExternalSourceResult),
    ExportSample,
}
