//! View state for the data-ingestion page.

use common::ingest::IngestState;
use yew::prelude::*;

use crate::api::ApiClient;

/// Main state container for the ingestion page component.
///
/// The dataset/phase bookkeeping lives in [`IngestState`]; this struct
/// adds the DOM refs, the active tab, and the transport client. Fields
/// are `pub` because they are accessed by the `update` and `view`
/// modules.
pub struct IngestionPage {
    /// Phase machine plus the current dataset preview and validation.
    pub ingest: IngestState,

    /// Active tab: `"upload"`, `"connectors"`, or `"cloud"`.
    pub active_tab: String,

    /// Name of the file currently uploading, shown next to the progress
    /// bar. Cleared when the upload settles.
    pub uploading_name: Option<String>,

    /// Whether a drag is hovering the drop zone (highlight only).
    pub drag_active: bool,

    /// Hidden file input used by the "Select Files" button.
    pub file_input_ref: NodeRef,

    /// Top-sheet containers for the two connection dialogs.
    pub connector_sheet_ref: NodeRef,
    pub cloud_sheet_ref: NodeRef,

    /// Transport client; mode comes from the page props.
    pub api: ApiClient,
}

impl IngestionPage {
    pub fn new(api: ApiClient) -> Self {
        Self {
            ingest: IngestState::new(),
            active_tab: "upload".to_string(),
            uploading_name: None,
            drag_active: false,
            file_input_ref: Default::default(),
            connector_sheet_ref: Default::default(),
            cloud_sheet_ref: Default::default(),
            api,
        }
    }
}
