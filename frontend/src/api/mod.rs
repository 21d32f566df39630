//! Transport client for the three backend operations.
//!
//! The client is constructed with an explicit [`ApiMode`] rather than
//! branching on a global build flag at each call site; components obtain
//! the default for the running build from [`ApiMode::from_build`]. Both
//! implementations are always compiled: `live` talks HTTP, `mock` answers
//! with the fixtures from `common::sample` after a simulated delay.
//!
//! All operations are single-attempt and non-cancelable; any retry policy
//! belongs to the caller (none exists in this app).

mod live;
mod mock;

use common::error::ApiError;
use common::model::{ExternalSourceRequest, ExternalSourceResult, UploadResult, ValidationResult};
use gloo_console::log;
use yew::Callback;

/// Base URL of the backend. In a deployed build this would come from the
/// hosting environment; the dev backend listens here.
pub const API_BASE_URL: &str = "http://localhost:8000/api";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ApiMode {
    Live,
    Mock,
}

impl ApiMode {
    /// Build-time selection: debug builds run against the deterministic
    /// mock, release builds against the real backend.
    pub fn from_build() -> Self {
        if cfg!(debug_assertions) {
            ApiMode::Mock
        } else {
            ApiMode::Live
        }
    }
}

/// Single point of contact with the backend (or its mock substitute).
#[derive(Clone, PartialEq)]
pub struct ApiClient {
    mode: ApiMode,
    base_url: String,
}

impl ApiClient {
    pub fn new(mode: ApiMode) -> Self {
        log!(format!("api client mode: {mode:?}"));
        Self {
            mode,
            base_url: API_BASE_URL.to_string(),
        }
    }

    pub fn from_build() -> Self {
        Self::new(ApiMode::from_build())
    }

    pub fn mode(&self) -> ApiMode {
        self.mode
    }

    fn endpoint(&self, path: &str) -> String {
        format!("{}{}", self.base_url, path)
    }

    /// Uploads a file as multipart form data. `on_progress` receives
    /// non-decreasing percentages; on success the last reported value is
    /// 100. The outcome, success or transport failure, always arrives
    /// through `on_done`; this call never panics on a bad network.
    pub fn upload_file(
        &self,
        file: web_sys::File,
        on_progress: Callback<u32>,
        on_done: Callback<Result<UploadResult, ApiError>>,
    ) {
        match self.mode {
            ApiMode::Mock => mock::upload_file(file, on_progress, on_done),
            ApiMode::Live => live::upload_file(self.endpoint("/upload"), file, on_progress, on_done),
        }
    }

    /// Asks the backend to validate the uploaded schema. Infallible by
    /// contract: a transport failure degrades to an invalid result with a
    /// single synthetic issue.
    pub async fn validate_schema(&self, upload: &UploadResult) -> ValidationResult {
        match self.mode {
            ApiMode::Mock => mock::validate_schema().await,
            ApiMode::Live => live::validate_schema(self.endpoint("/validate-schema"), upload).await,
        }
    }

    /// Connects an external database or cloud-storage source.
    pub async fn connect_external_source(
        &self,
        request: &ExternalSourceRequest,
    ) -> Result<ExternalSourceResult, ApiError> {
        match self.mode {
            ApiMode::Mock => mock::connect_external_source(request).await,
            ApiMode::Live => {
                live::connect_external_source(self.endpoint("/external-source"), request).await
            }
        }
    }
}
