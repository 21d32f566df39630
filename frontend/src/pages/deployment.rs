//! Deployment page: live endpoints with traffic stats and a summary of
//! platform-wide serving metrics.

use num_format::{Locale, ToFormattedString};
use yew::prelude::*;

struct Endpoint {
    name: &'static str,
    model: &'static str,
    status: &'static str,
    endpoint: &'static str,
    requests: u64,
    uptime: f64,
    latency_ms: u32,
    created: &'static str,
}

const DEPLOYMENTS: [Endpoint; 3] = [
    Endpoint {
        name: "Customer Churn API",
        model: "XGBoost v2.1",
        status: "active",
        endpoint: "https://api.automl.com/predict/churn",
        requests: 15_420,
        uptime: 99.9,
        latency_ms: 45,
        created: "2024-01-15",
    },
    Endpoint {
        name: "Sales Forecast Batch",
        model: "LightGBM v1.3",
        status: "active",
        endpoint: "https://api.automl.com/batch/forecast",
        requests: 8_750,
        uptime: 99.5,
        latency_ms: 120,
        created: "2024-01-12",
    },
    Endpoint {
        name: "Fraud Detection RT",
        model: "CatBoost v1.0",
        status: "stopped",
        endpoint: "https://api.automl.com/realtime/fraud",
        requests: 0,
        uptime: 0.0,
        latency_ms: 0,
        created: "2024-01-10",
    },
];

pub struct Deployment;

impl Component for Deployment {
    type Message = ();
    type Properties = ();

    fn create(_ctx: &Context<Self>) -> Self {
        Self
    }

    fn view(&self, _ctx: &Context<Self>) -> Html {
        html! {
            <div class="page">
                <div class="page-header">
                    <div>
                        <h1>{"Model Deployment"}</h1>
                        <p class="subtitle">{"Deploy and monitor your models in production"}</p>
                    </div>
                    <div class="actions">
                        <button class="btn">
                            <i class="material-icons">{"monitor"}</i>{"View Logs"}
                        </button>
                        <button class="btn primary">
                            <i class="material-icons">{"rocket_launch"}</i>{"Deploy New Model"}
                        </button>
                    </div>
                </div>

                <div class="card-grid six-columns">
                    { stat("Total Requests", &24_170u64.to_formatted_string(&Locale::en)) }
                    { stat("Success Rate", "99.2%") }
                    { stat("Avg Latency", "67ms") }
                    { stat("Active Endpoints", "2") }
                    { stat("Data Processed", "1.2TB") }
                    { stat("Error Rate", "0.8%") }
                </div>

                <div class="card">
                    <div class="card-header">
                        <h2><i class="material-icons">{"dns"}</i>{"Active Deployments"}</h2>
                        <p class="subtitle">{"Monitor and manage your deployed models"}</p>
                    </div>
                    { for DEPLOYMENTS.iter().map(deployment_row) }
                </div>
            </div>
        }
    }
}

fn stat(label: &str, value: &str) -> Html {
    html! {
        <div class="card stat">
            <p class="stat-value">{value.to_string()}</p>
            <p class="subtitle">{label.to_string()}</p>
        </div>
    }
}

fn deployment_row(deployment: &Endpoint) -> Html {
    let active = deployment.status == "active";
    html! {
        <div class="list-row column">
            <div class="list-row">
                <div>
                    <h4>{deployment.name}</h4>
                    <p class="subtitle">
                        {format!("{} \u{2022} Created {}", deployment.model, deployment.created)}
                    </p>
                </div>
                <div class="list-row-end">
                    {
                        if active {
                            html! { <span class="badge available">{"active"}</span> }
                        } else {
                            html! { <span class="badge">{"stopped"}</span> }
                        }
                    }
                    <button class="btn">{ if active { "Stop" } else { "Start" } }</button>
                </div>
            </div>
            <div class="card-grid four-columns">
                { stat("Requests (24h)", &deployment.requests.to_formatted_string(&Locale::en)) }
                { stat("Uptime", &format!("{}%", deployment.uptime)) }
                { stat("Avg Latency", &format!("{}ms", deployment.latency_ms)) }
                { stat("Endpoint", deployment.endpoint) }
            </div>
        </div>
    }
}
