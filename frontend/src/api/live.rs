//! HTTP implementations of the three backend operations.
//!
//! `validate_schema` and `connect_external_source` are plain JSON POSTs
//! through `gloo_net`. The upload goes through `XmlHttpRequest` because
//! fetch offers no upload-progress events; the progress callback is wired
//! to the XHR upload target.

use common::error::ApiError;
use common::model::{
    ExternalSourceRequest, ExternalSourceResponse, ExternalSourceResult, UploadResponse,
    UploadResult, ValidationResult,
};
use gloo_console::error;
use gloo_net::http::Request;
use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsCast;
use web_sys::{FormData, ProgressEvent, XmlHttpRequest};
use yew::Callback;

/// Uniform timeout applied to the upload call, matching the transport
/// configuration the other operations inherit from the browser defaults.
const UPLOAD_TIMEOUT_MS: u32 = 30_000;

pub(super) fn upload_file(
    url: String,
    file: web_sys::File,
    on_progress: Callback<u32>,
    on_done: Callback<Result<UploadResult, ApiError>>,
) {
    let xhr = match XmlHttpRequest::new() {
        Ok(xhr) => xhr,
        Err(_) => {
            on_done.emit(Err(ApiError::Transport(
                "could not create upload request".to_string(),
            )));
            return;
        }
    };
    if xhr.open_with_async("POST", &url, true).is_err() {
        on_done.emit(Err(ApiError::Transport(format!("could not open {url}"))));
        return;
    }
    xhr.set_timeout(UPLOAD_TIMEOUT_MS);

    if let Ok(upload) = xhr.upload() {
        let progress = on_progress.clone();
        let handler = Closure::<dyn FnMut(ProgressEvent)>::new(move |event: ProgressEvent| {
            if event.length_computable() && event.total() > 0.0 {
                let percent = ((event.loaded() / event.total()) * 100.0).round() as u32;
                progress.emit(percent.min(100));
            }
        });
        upload.set_onprogress(Some(handler.as_ref().unchecked_ref()));
        handler.forget();
    }

    {
        let xhr_for_handler = xhr.clone();
        let done = on_done.clone();
        let handler = Closure::<dyn FnMut()>::new(move || {
            done.emit(parse_upload_response(&xhr_for_handler));
        });
        xhr.set_onload(Some(handler.as_ref().unchecked_ref()));
        handler.forget();
    }
    {
        let done = on_done.clone();
        let handler = Closure::<dyn FnMut()>::new(move || {
            error!("upload failed: network error");
            done.emit(Err(ApiError::Transport(
                "network error during upload".to_string(),
            )));
        });
        xhr.set_onerror(Some(handler.as_ref().unchecked_ref()));
        handler.forget();
    }
    {
        let done = on_done.clone();
        let handler = Closure::<dyn FnMut()>::new(move || {
            error!("upload failed: timed out");
            done.emit(Err(ApiError::Transport("upload timed out".to_string())));
        });
        xhr.set_ontimeout(Some(handler.as_ref().unchecked_ref()));
        handler.forget();
    }

    let form = match FormData::new() {
        Ok(form) => form,
        Err(_) => {
            on_done.emit(Err(ApiError::Transport(
                "could not build form data".to_string(),
            )));
            return;
        }
    };
    if form
        .append_with_blob_and_filename("file", &file, &file.name())
        .is_err()
        || xhr.send_with_opt_form_data(Some(&form)).is_err()
    {
        on_done.emit(Err(ApiError::Transport(
            "could not start the upload".to_string(),
        )));
    }
}

fn parse_upload_response(xhr: &XmlHttpRequest) -> Result<UploadResult, ApiError> {
    let status = xhr.status().unwrap_or(0);
    if !(200..300).contains(&status) {
        return Err(ApiError::Transport(format!(
            "upload failed with status {status}"
        )));
    }
    let body = xhr
        .response_text()
        .ok()
        .flatten()
        .unwrap_or_default();
    let envelope: UploadResponse =
        serde_json::from_str(&body).map_err(|err| ApiError::Decode(err.to_string()))?;
    envelope.into_result()
}

pub(super) async fn validate_schema(url: String, upload: &UploadResult) -> ValidationResult {
    let outcome = async {
        Request::post(&url)
            .json(upload)?
            .send()
            .await?
            .json::<ValidationResult>()
            .await
    }
    .await;
    match outcome {
        Ok(result) => result,
        Err(err) => {
            error!(format!("schema validation failed: {err}"));
            ValidationResult::transport_failure()
        }
    }
}

pub(super) async fn connect_external_source(
    url: String,
    request: &ExternalSourceRequest,
) -> Result<ExternalSourceResult, ApiError> {
    let response = Request::post(&url)
        .json(request)
        .map_err(|err| ApiError::Transport(err.to_string()))?
        .send()
        .await
        .map_err(|err| ApiError::Transport(err.to_string()))?;
    if !response.ok() {
        return Err(ApiError::Transport(format!(
            "connection failed with status {}",
            response.status()
        )));
    }
    let envelope: ExternalSourceResponse = response
        .json()
        .await
        .map_err(|err| ApiError::Decode(err.to_string()))?;
    envelope.into_result()
}
