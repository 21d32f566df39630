//! Deterministic stand-ins for the backend, used in debug builds.
//!
//! Identical signatures to the live operations, but every answer comes
//! from `common::sample` after a simulated latency. The upload reports
//! progress in fixed ten-point steps, ending at exactly 100.

use common::error::ApiError;
use common::model::{ExternalSourceRequest, ExternalSourceResult, UploadResult, ValidationResult};
use common::sample;
use gloo_timers::future::TimeoutFuture;
use wasm_bindgen_futures::spawn_local;
use yew::Callback;

pub(super) fn upload_file(
    file: web_sys::File,
    on_progress: Callback<u32>,
    on_done: Callback<Result<UploadResult, ApiError>>,
) {
    let name = file.name();
    spawn_local(async move {
        for percent in (0..=100).step_by(10) {
            TimeoutFuture::new(100).await;
            on_progress.emit(percent);
        }
        on_done.emit(Ok(sample::sample_upload_result(&name)));
    });
}

pub(super) async fn validate_schema() -> ValidationResult {
    TimeoutFuture::new(500).await;
    sample::sample_validation()
}

pub(super) async fn connect_external_source(
    request: &ExternalSourceRequest,
) -> Result<ExternalSourceResult, ApiError> {
    TimeoutFuture::new(1_000).await;
    Ok(sample::sample_external_result(request.source_type))
}
