//! View rendering for the data-ingestion page.
//!
//! Three tabs: file upload (drop zone, progress, schema card, preview
//! table), database connectors, and cloud storage. The two connection
//! dialogs are always rendered at the end of the page inside their
//! top-sheets and opened on demand.

use common::ingest::{DatasetPreview, IngestPhase};
use common::model::{ColumnInfo, ColumnStatus};
use num_format::{Locale, ToFormattedString};
use serde_json::Value;
use yew::html::Scope;
use yew::prelude::*;

use crate::components::dialogs::{CloudStorageDialog, DataConnectorDialog};

use super::messages::Msg;
use super::state::IngestionPage;

pub fn view(page: &IngestionPage, ctx: &Context<IngestionPage>) -> Html {
    let link = ctx.link();
    html! {
        <div class="page">
            <div class="page-header">
                <div>
                    <h1>{"Data Ingestion"}</h1>
                    <p class="subtitle">{"Upload and connect your data sources for machine learning"}</p>
                </div>
            </div>

            { tab_bar(page, link) }

            {
                match page.active_tab.as_str() {
                    "connectors" => connectors_tab(link),
                    "cloud" => cloud_tab(link),
                    _ => upload_tab(page, link),
                }
            }

            <DataConnectorDialog
                sheet_ref={page.connector_sheet_ref.clone()}
                api={page.api.clone()}
                on_connected={link.callback(Msg::ExternalConnected)}
            />
            <CloudStorageDialog
                sheet_ref={page.cloud_sheet_ref.clone()}
                api={page.api.clone()}
                on_connected={link.callback(Msg::ExternalConnected)}
            />
        </div>
    }
}

fn tab_bar(page: &IngestionPage, link: &Scope<IngestionPage>) -> Html {
    let tab = |id: &'static str, icon: &'static str, label: &'static str| -> Html {
        html! {
            <button
                class={classes!("tab-btn", (page.active_tab == id).then_some("active"))}
                onclick={link.callback(move |_| Msg::SetTab(id.to_string()))}
            >
                <i class="material-icons">{icon}</i>
                {label}
            </button>
        }
    };
    html! {
        <div class="tab-bar">
            { tab("upload", "upload_file", "File Upload") }
            { tab("connectors", "storage", "Data Connectors") }
            { tab("cloud", "cloud", "Cloud Storage") }
        </div>
    }
}

fn upload_tab(page: &IngestionPage, link: &Scope<IngestionPage>) -> Html {
    html! {
        <div class="tab-content">
            <div class="card-grid two-columns">
                { upload_card(page, link) }
                { schema_card(page) }
            </div>
            { preview_card(page, link) }
        </div>
    }
}

fn upload_card(page: &IngestionPage, link: &Scope<IngestionPage>) -> Html {
    let uploading = page.ingest.is_uploading();
    html! {
        <div class="card">
            <div class="card-header">
                <h2><i class="material-icons">{"upload"}</i>{"Upload Files"}</h2>
                <p class="subtitle">{"Upload CSV, Excel, or JSON files for analysis"}</p>
            </div>
            <div
                class={classes!("drop-zone", page.drag_active.then_some("active"))}
                ondragover={link.callback(|event: DragEvent| {
                    event.prevent_default();
                    Msg::DragStateChanged(true)
                })}
                ondragleave={link.callback(|_| Msg::DragStateChanged(false))}
                ondrop={link.batch_callback(|event: DragEvent| {
                    event.prevent_default();
                    let file = event
                        .data_transfer()
                        .and_then(|transfer| transfer.files())
                        .and_then(|files| files.get(0));
                    let mut messages = vec![Msg::DragStateChanged(false)];
                    if let Some(file) = file {
                        messages.push(Msg::FileSelected(file));
                    }
                    messages
                })}
            >
                <i class="material-icons drop-icon">{"upload"}</i>
                <h3>{"Drop files here"}</h3>
                <p class="subtitle">{"or click to browse"}</p>
                <input
                    type="file"
                    ref={page.file_input_ref.clone()}
                    accept=".csv,.xlsx,.xls,.json"
                    style="display: none;"
                    onchange={link.batch_callback(|event: Event| {
                        let input: web_sys::HtmlInputElement = event.target_unchecked_into();
                        let file = input.files().and_then(|files| files.get(0));
                        // Reset so re-selecting the same file fires again.
                        input.set_value("");
                        file.map(Msg::FileSelected)
                    })}
                />
                <button
                    class="btn primary"
                    disabled={uploading}
                    onclick={link.callback(|_| Msg::OpenFilePicker)}
                >
                    { if uploading { "Uploading..." } else { "Select Files" } }
                </button>
            </div>

            {
                if uploading {
                    let name = page.uploading_name.clone().unwrap_or_default();
                    html! {
                        <div class="upload-progress">
                            <div class="progress-label">
                                <span>{format!("Uploading {name}")}</span>
                                <span>{format!("{}%", page.ingest.progress())}</span>
                            </div>
                            <div class="progress">
                                <div
                                    class="progress-fill"
                                    style={format!("width: {}%;", page.ingest.progress())}
                                />
                            </div>
                        </div>
                    }
                } else {
                    html! {}
                }
            }

            <div class="hint">
                <p>{"Supported formats: CSV, Excel (.xlsx), JSON"}</p>
                <p>{"Maximum file size: 500MB"}</p>
            </div>
        </div>
    }
}

fn schema_card(page: &IngestionPage) -> Html {
    html! {
        <div class="card">
            <div class="card-header">
                <h2><i class="material-icons">{"check_circle"}</i>{"Schema Validation"}</h2>
                <p class="subtitle">{"Auto-detected column types and validation results"}</p>
            </div>
            {
                match page.ingest.preview() {
                    Some(preview) => html! {
                        <div class="column-list">
                            { for preview.column_info().iter().map(column_row) }
                        </div>
                    },
                    None => html! {
                        <p class="subtitle">{"Upload a dataset to see its detected schema."}</p>
                    },
                }
            }
        </div>
    }
}

fn column_row(info: &ColumnInfo) -> Html {
    let (icon, icon_class) = match info.status {
        ColumnStatus::Valid => ("check_circle", "status-valid"),
        ColumnStatus::Target => ("info", "status-target"),
        ColumnStatus::Warning => ("warning", "status-warning"),
        ColumnStatus::Invalid => ("error", "status-invalid"),
    };
    html! {
        <div class="column-row">
            <div>
                <p class="column-name">{&info.name}</p>
                <p class="subtitle">{&info.detected}</p>
            </div>
            <div class="column-status">
                <span class="badge">{&info.kind}</span>
                <i class={classes!("material-icons", icon_class)}>{icon}</i>
            </div>
        </div>
    }
}

fn preview_card(page: &IngestionPage, link: &Scope<IngestionPage>) -> Html {
    let Some(preview) = page.ingest.preview() else {
        return html! {};
    };
    let shown = preview.sample_rows().len();
    let total = match preview.total_rows() {
        Some(total) => total.to_formatted_string(&Locale::en),
        None => shown.to_formatted_string(&Locale::en),
    };
    html! {
        <div class="card">
            <div class="card-header">
                <h2>{"Data Preview"}</h2>
                <p class="subtitle">{format!("Preview of the first {shown} rows from your dataset")}</p>
            </div>
            <div class="table-wrap">
                <table>
                    <thead>
                        <tr>
                            { for preview.columns().iter().map(|name| html! { <th>{name}</th> }) }
                        </tr>
                    </thead>
                    <tbody>
                        {
                            for preview.sample_rows().iter().map(|row| html! {
                                <tr>
                                    {
                                        for preview.columns().iter().map(|name| html! {
                                            <td>{cell_text(row.get(name))}</td>
                                        })
                                    }
                                </tr>
                            })
                        }
                    </tbody>
                </table>
            </div>
            <div class="card-footer">
                <p class="subtitle">{format!("Showing {shown} of {total} rows")}</p>
                <button
                    class="btn"
                    disabled={page.ingest.phase() != IngestPhase::Ready}
                    onclick={link.callback(|_| Msg::ExportSample)}
                >
                    <i class="material-icons">{"download"}</i>
                    {"Export Sample"}
                </button>
            </div>
            { source_note(preview) }
        </div>
    }
}

fn source_note(preview: &DatasetPreview) -> Html {
    match preview {
        DatasetPreview::Upload(_) => html! {},
        DatasetPreview::External(external) => html! {
            <p class="subtitle">{format!("Connected source: {}", external.source_type)}</p>
        },
    }
}

fn cell_text(value: Option<&Value>) -> String {
    match value {
        None | Some(Value::Null) => String::new(),
        Some(Value::String(s)) => s.clone(),
        Some(other) => other.to_string(),
    }
}

enum Tier {
    Available,
    ComingSoon,
    Enterprise,
}

fn tier_badge(tier: &Tier) -> Html {
    let (class, label) = match tier {
        Tier::Available => ("badge available", "Available"),
        Tier::ComingSoon => ("badge coming-soon", "Coming Soon"),
        Tier::Enterprise => ("badge enterprise", "Enterprise"),
    };
    html! { <span class={class}>{label}</span> }
}

fn connectors_tab(link: &Scope<IngestionPage>) -> Html {
    let connectors = [
        ("PostgreSQL", Tier::Available),
        ("MongoDB", Tier::Available),
        ("MySQL", Tier::Available),
        ("Redis", Tier::ComingSoon),
        ("Elasticsearch", Tier::ComingSoon),
        ("Snowflake", Tier::Enterprise),
    ];
    html! {
        <div class="card-grid three-columns">
            {
                for connectors.iter().map(|(name, tier)| {
                    let available = matches!(tier, Tier::Available);
                    html! {
                        <div class="card">
                            <div class="card-header">
                                <h2><i class="material-icons">{"storage"}</i>{*name}</h2>
                            </div>
                            { tier_badge(tier) }
                            <button
                                class={classes!("btn", available.then_some("primary"))}
                                disabled={!available}
                                onclick={link.callback(|_| Msg::OpenConnectorSheet)}
                            >
                                {"Connect"}
                            </button>
                        </div>
                    }
                })
            }
        </div>
    }
}

fn cloud_tab(link: &Scope<IngestionPage>) -> Html {
    let services = [
        ("Amazon S3", "Connect to your S3 buckets"),
        ("Google Cloud Storage", "Import data from Google Cloud Storage"),
        ("Azure Blob Storage", "Connect to Azure storage containers"),
        ("Dropbox", "Access files from your Dropbox account"),
    ];
    html! {
        <div class="card-grid two-columns">
            {
                for services.iter().map(|(name, description)| html! {
                    <div class="card">
                        <div class="card-header">
                            <h2><i class="material-icons">{"cloud"}</i>{*name}</h2>
                            <p class="subtitle">{*description}</p>
                        </div>
                        <button class="btn primary" onclick={link.callback(|_| Msg::OpenCloudSheet)}>
                            {"Connect & Import"}
                        </button>
                    </div>
                })
            }
        </div>
    }
}
