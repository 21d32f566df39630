//! Update function for the ingestion page.
//!
//! Elm-style: receives the state, the context, and a message, mutates the
//! state, and returns whether the view must re-render. Phase transitions
//! are delegated to `common::ingest`; this module adds the side effects
//! (network calls, toasts, the export download).

use common::export;
use common::ingest::IngestPhase;
use wasm_bindgen_futures::spawn_local;
use yew::prelude::*;

use crate::helpers::{save_text_file, show_error, show_toast, today_ymd};
use crate::top_sheet::open_sheet;

use super::messages::Msg;
use super::state::IngestionPage;

pub fn update(page: &mut IngestionPage, ctx: &Context<IngestionPage>, msg: Msg) -> bool {
    match msg {
        Msg::SetTab(tab) => {
            page.active_tab = tab;
            true
        }
        Msg::OpenFilePicker => {
            // The trigger is disabled while uploading; guarded again here
            // because drops bypass the button.
            if page.ingest.phase() != IngestPhase::Uploading {
                if let Some(input) = page.file_input_ref.cast::<web_sys::HtmlInputElement>() {
                    input.click();
                }
            }
            false
        }
        Msg::DragStateChanged(active) => {
            let changed = page.drag_active != active;
            page.drag_active = active;
            changed
        }
        Msg::FileSelected(file) => {
            page.drag_active = false;
            match page.ingest.begin_upload(&file.type_()) {
                Err(err) => {
                    // Rejected before any network call.
                    show_error(&err.to_string());
                    true
                }
                Ok(()) => {
                    page.uploading_name = Some(file.name());
                    let link = ctx.link();
                    page.api.upload_file(
                        file,
                        link.callback(Msg::Progress),
                        link.callback(Msg::UploadFinished),
                    );
                    true
                }
            }
        }
        Msg::Progress(percent) => {
            page.ingest.record_progress(percent);
            true
        }
        Msg::UploadFinished(Ok(result)) => {
            page.uploading_name = None;
            show_toast(&format!("{} uploaded successfully.", result.filename));
            page.ingest.complete_upload(result.clone());

            // Validation is a follow-up call; its failure never blocks
            // the page from becoming ready.
            let api = page.api.clone();
            let link = ctx.link().clone();
            spawn_local(async move {
                let validation = api.validate_schema(&result).await;
                link.send_message(Msg::ValidationFinished(validation));
            });
            true
        }
        Msg::UploadFinished(Err(err)) => {
            page.uploading_name = None;
            page.ingest.fail_upload();
            show_error(&format!("Upload failed: {err}"));
            true
        }
        Msg::ValidationFinished(validation) => {
            if !validation.is_valid {
                show_error(&format!(
                    "Schema validation reported issues: {}",
                    validation.issues.join("; ")
                ));
            }
            page.ingest.finish_validation(validation);
            true
        }
        Msg::OpenConnectorSheet => {
            open_sheet(&page.connector_sheet_ref);
            false
        }
        Msg::OpenCloudSheet => {
            open_sheet(&page.cloud_sheet_ref);
            false
        }
        Msg::ExternalConnected(result) => {
            page.ingest.apply_external(result);
            true
        }
        Msg::ExportSample => {
            if let Some(preview) = page.ingest.preview() {
                if let Some(csv) = export::csv_text(preview.sample_rows()) {
                    let filename = export::sample_filename(preview.filename(), &today_ymd());
                    save_text_file(&csv, &filename);
                }
            }
            false
        }
    }
}
