pub mod dialogs;
pub mod ingestion;
