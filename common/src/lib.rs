//! Shared types and pure logic for the AutoML dashboard.
//!
//! Everything in this crate is browser-free: the wire model exchanged with
//! the backend, the typed credential union for external sources, the
//! ingestion state machine driven by the data-ingestion page, the CSV
//! export text generation, and the deterministic sample payloads used by
//! the mock transport.

pub mod error;
pub mod export;
pub mod ingest;
pub mod model;
pub mod sample;
