use yew::prelude::*;

use crate::api::ApiMode;

/// Properties for the ingestion page.
#[derive(Properties, PartialEq, Clone)]
pub struct IngestionProps {
    /// Transport selection. Defaults to the build-appropriate mode (mock
    /// in debug builds, live otherwise); tests and embedding pages can
    /// pin it explicitly.
    #[prop_or_else(ApiMode::from_build)]
    pub api_mode: ApiMode,
}
