//! Ingestion state machine for the data-ingestion page.
//!
//! The page component owns an [`IngestState`] and drives it from its
//! update function; all transition rules live here so they can be tested
//! without a browser. Phases: `Idle → Uploading → Validating → Ready`,
//! with failures falling back to the last stable phase.
//!
//! Invariant: at most one dataset preview is held at a time. A successful
//! upload or external connection replaces it wholesale; nothing is ever
//! merged between the old and the new preview.

use thiserror::Error;

use crate::model::{ColumnInfo, ExternalSourceResult, Row, UploadResult, ValidationResult};

/// MIME types accepted by the upload flow. Checked before any network
/// call is made.
pub const ACCEPTED_MIME_TYPES: [&str; 4] = [
    "text/csv",
    "application/vnd.ms-excel",
    "application/vnd.openxmlformats-officedocument.spreadsheetml.sheet",
    "application/json",
];

pub fn is_accepted_mime(mime: &str) -> bool {
    ACCEPTED_MIME_TYPES.contains(&mime)
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum IngestPhase {
    Idle,
    Uploading,
    Validating,
    Ready,
}

/// The single "current dataset" slot: either an uploaded file or an
/// external source, never both.
#[derive(Debug, Clone, PartialEq)]
pub enum DatasetPreview {
    Upload(UploadResult),
    External(ExternalSourceResult),
}

impl DatasetPreview {
    pub fn columns(&self) -> &[String] {
        match self {
            DatasetPreview::Upload(u) => &u.columns,
            DatasetPreview::External(e) => &e.columns,
        }
    }

    pub fn sample_rows(&self) -> &[Row] {
        match self {
            DatasetPreview::Upload(u) => &u.sample_rows,
            DatasetPreview::External(e) => &e.sample_rows,
        }
    }

    pub fn column_info(&self) -> &[ColumnInfo] {
        match self {
            DatasetPreview::Upload(u) => &u.column_info,
            DatasetPreview::External(e) => &e.column_info,
        }
    }

    /// Total row count when known; external previews do not report one.
    pub fn total_rows(&self) -> Option<u64> {
        match self {
            DatasetPreview::Upload(u) => Some(u.total_rows),
            DatasetPreview::External(_) => None,
        }
    }

    /// Uploaded filename, if this preview came from a file. Used to derive
    /// the sample export filename.
    pub fn filename(&self) -> Option<&str> {
        match self {
            DatasetPreview::Upload(u) => Some(&u.filename),
            DatasetPreview::External(_) => None,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum IngestError {
    #[error("unsupported file type: {0}")]
    UnsupportedFileType(String),
    #[error("an upload is already in progress")]
    UploadInFlight,
}

/// View state of the ingestion page, minus anything DOM-related.
#[derive(Debug, Clone, PartialEq)]
pub struct IngestState {
    phase: IngestPhase,
    progress: u32,
    preview: Option<DatasetPreview>,
    validation: Option<ValidationResult>,
}

impl Default for IngestState {
    fn default() -> Self {
        Self::new()
    }
}

impl IngestState {
    pub fn new() -> Self {
        Self {
            phase: IngestPhase::Idle,
            progress: 0,
            preview: None,
            validation: None,
        }
    }

    pub fn phase(&self) -> IngestPhase {
        self.phase
    }

    pub fn progress(&self) -> u32 {
        self.progress
    }

    pub fn preview(&self) -> Option<&DatasetPreview> {
        self.preview.as_ref()
    }

    pub fn validation(&self) -> Option<&ValidationResult> {
        self.validation.as_ref()
    }

    pub fn is_uploading(&self) -> bool {
        self.phase == IngestPhase::Uploading
    }

    /// Starts an upload after checking the MIME whitelist. Rejected files
    /// cause no transition at all, so no network call may follow.
    pub fn begin_upload(&mut self, mime: &str) -> Result<(), IngestError> {
        if self.phase == IngestPhase::Uploading {
            return Err(IngestError::UploadInFlight);
        }
        if !is_accepted_mime(mime) {
            return Err(IngestError::UnsupportedFileType(mime.to_string()));
        }
        self.phase = IngestPhase::Uploading;
        self.progress = 0;
        Ok(())
    }

    /// Records a progress report. Values are clamped to 0..=100 and never
    /// move backwards; reports outside the uploading phase are dropped.
    pub fn record_progress(&mut self, percent: u32) {
        if self.phase == IngestPhase::Uploading {
            self.progress = self.progress.max(percent.min(100));
        }
    }

    /// Stores a fresh upload result, replacing any previous preview, and
    /// moves on to schema validation.
    pub fn complete_upload(&mut self, result: UploadResult) {
        self.preview = Some(DatasetPreview::Upload(result));
        self.validation = None;
        self.progress = 100;
        self.phase = IngestPhase::Validating;
    }

    /// Aborts the current upload. The previously displayed preview, if
    /// any, stays untouched; the phase falls back to the last stable one.
    pub fn fail_upload(&mut self) {
        self.progress = 0;
        self.phase = if self.preview.is_some() {
            IngestPhase::Ready
        } else {
            IngestPhase::Idle
        };
    }

    /// Finishes the validation step. The page becomes ready whether or not
    /// the schema was valid; the result only feeds a notification.
    pub fn finish_validation(&mut self, result: ValidationResult) {
        self.validation = Some(result);
        if self.phase == IngestPhase::Validating {
            self.phase = IngestPhase::Ready;
        }
    }

    /// Installs an external-source preview, replacing any previous dataset
    /// and skipping the upload/validation steps entirely.
    pub fn apply_external(&mut self, result: ExternalSourceResult) {
        self.preview = Some(DatasetPreview::External(result));
        self.validation = None;
        self.progress = 0;
        self.phase = IngestPhase::Ready;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::sample;
    use crate::model::SourceType;

    #[test]
    fn rejected_mime_causes_no_transition() {
        let mut state = IngestState::new();
        let err = state.begin_upload("application/pdf").unwrap_err();
        assert_eq!(
            err,
            IngestError::UnsupportedFileType("application/pdf".to_string())
        );
        assert_eq!(state.phase(), IngestPhase::Idle);
        assert_eq!(state.progress(), 0);
    }

    #[test]
    fn all_whitelisted_types_start_an_upload() {
        for mime in ACCEPTED_MIME_TYPES {
            let mut state = IngestState::new();
            state.begin_upload(mime).unwrap();
            assert_eq!(state.phase(), IngestPhase::Uploading);
        }
    }

    #[test]
    fn second_upload_rejected_while_in_flight() {
        let mut state = IngestState::new();
        state.begin_upload("text/csv").unwrap();
        assert_eq!(
            state.begin_upload("text/csv").unwrap_err(),
            IngestError::UploadInFlight
        );
    }

    #[test]
    fn progress_is_monotonic_and_clamped() {
        let mut state = IngestState::new();
        state.begin_upload("text/csv").unwrap();
        state.record_progress(30);
        state.record_progress(10);
        assert_eq!(state.progress(), 30);
        state.record_progress(250);
        assert_eq!(state.progress(), 100);
    }

    #[test]
    fn progress_ignored_outside_upload() {
        let mut state = IngestState::new();
        state.record_progress(50);
        assert_eq!(state.progress(), 0);
    }

    #[test]
    fn upload_flow_reaches_ready_even_when_validation_fails() {
        let mut state = IngestState::new();
        state.begin_upload("text/csv").unwrap();
        state.complete_upload(sample::sample_upload_result("data.csv"));
        assert_eq!(state.phase(), IngestPhase::Validating);
        assert_eq!(state.progress(), 100);

        state.finish_validation(ValidationResult::transport_failure());
        assert_eq!(state.phase(), IngestPhase::Ready);
        assert!(!state.validation().unwrap().is_valid);
        assert!(state.preview().is_some());
    }

    #[test]
    fn failed_upload_keeps_previous_preview() {
        let mut state = IngestState::new();
        state.begin_upload("text/csv").unwrap();
        state.complete_upload(sample::sample_upload_result("first.csv"));
        state.finish_validation(sample::sample_validation());

        state.begin_upload("text/csv").unwrap();
        state.record_progress(40);
        state.fail_upload();
        assert_eq!(state.phase(), IngestPhase::Ready);
        assert_eq!(state.progress(), 0);
        assert_eq!(state.preview().unwrap().filename(), Some("first.csv"));
    }

    #[test]
    fn failed_first_upload_returns_to_idle() {
        let mut state = IngestState::new();
        state.begin_upload("text/csv").unwrap();
        state.fail_upload();
        assert_eq!(state.phase(), IngestPhase::Idle);
        assert!(state.preview().is_none());
    }

    #[test]
    fn successive_uploads_fully_replace_the_preview() {
        let mut state = IngestState::new();
        state.begin_upload("text/csv").unwrap();
        state.complete_upload(sample::sample_upload_result("first.csv"));
        state.finish_validation(sample::sample_validation());

        state.begin_upload("application/json").unwrap();
        state.complete_upload(sample::sample_upload_result("second.json"));

        let preview = state.preview().unwrap();
        assert_eq!(preview.filename(), Some("second.json"));
        // Nothing from the first dataset survives the swap.
        assert_eq!(preview.sample_rows().len(), 10);
        assert!(state.validation().is_none());
    }

    #[test]
    fn external_source_takes_over_the_preview_slot() {
        let mut state = IngestState::new();
        state.begin_upload("text/csv").unwrap();
        state.complete_upload(sample::sample_upload_result("data.csv"));
        state.finish_validation(sample::sample_validation());

        state.apply_external(sample::sample_external_result(SourceType::PostgreSql));
        assert_eq!(state.phase(), IngestPhase::Ready);
        let preview = state.preview().unwrap();
        assert_eq!(preview.filename(), None);
        assert_eq!(preview.total_rows(), None);
        assert_eq!(preview.columns()[0], "user_id");
    }
}
