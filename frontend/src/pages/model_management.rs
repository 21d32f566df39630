//! Model registry: stored models with checkbox selection for
//! comparison, version history, and export formats.

use std::collections::HashSet;

use yew::prelude::*;

struct StoredModel {
    id: u32,
    name: &'static str,
    version: &'static str,
    accuracy: f64,
    f1: f64,
    created: &'static str,
    status: &'static str,
    size: &'static str,
    framework: &'static str,
    author: &'static str,
    deployments: u32,
}

const MODELS: [StoredModel; 4] = [
    StoredModel {
        id: 1,
        name: "Customer Churn XGBoost v2.1",
        version: "2.1",
        accuracy: 94.2,
        f1: 92.8,
        created: "2024-01-15",
        status: "production",
        size: "12.5 MB",
        framework: "XGBoost",
        author: "John Doe",
        deployments: 3,
    },
    StoredModel {
        id: 2,
        name: "Sales Forecast LightGBM v1.3",
        version: "1.3",
        accuracy: 89.1,
        f1: 87.5,
        created: "2024-01-12",
        status: "staging",
        size: "8.2 MB",
        framework: "LightGBM",
        author: "Jane Smith",
        deployments: 1,
    },
    StoredModel {
        id: 3,
        name: "Fraud Detection CatBoost v1.0",
        version: "1.0",
        accuracy: 91.8,
        f1: 90.2,
        created: "2024-01-10",
        status: "archived",
        size: "15.1 MB",
        framework: "CatBoost",
        author: "Mike Johnson",
        deployments: 0,
    },
    StoredModel {
        id: 4,
        name: "Recommendation Neural Net v3.2",
        version: "3.2",
        accuracy: 88.5,
        f1: 86.9,
        created: "2024-01-08",
        status: "development",
        size: "45.8 MB",
        framework: "TensorFlow",
        author: "Sarah Wilson",
        deployments: 0,
    },
];

const VERSIONS: [(&str, f64, &str, &str, &str); 4] = [
    ("2.1", 94.2, "2024-01-15", "current", "Improved hyperparameters"),
    ("2.0", 93.8, "2024-01-10", "previous", "Added new features"),
    ("1.9", 92.1, "2024-01-05", "archived", "Initial production version"),
    ("1.8", 90.5, "2024-01-01", "archived", "Beta testing version"),
];

const EXPORT_FORMATS: [(&str, &str, bool); 5] = [
    ("Pickle", "Python pickle format", true),
    ("ONNX", "Open Neural Network Exchange", true),
    ("PMML", "Predictive Model Markup Language", true),
    ("TensorFlow", "TensorFlow SavedModel", false),
    ("CoreML", "Apple Core ML format", false),
];

pub enum Msg {
    SetTab(&'static str),
    ToggleSelection(u32),
}

pub struct ModelManagement {
    tab: &'static str,
    selected: HashSet<u32>,
}

impl Component for ModelManagement {
    type Message = Msg;
    type Properties = ();

    fn create(_ctx: &Context<Self>) -> Self {
        Self {
            tab: "registry",
            selected: HashSet::new(),
        }
    }

    fn update(&mut self, _ctx: &Context<Self>, msg: Self::Message) -> bool {
        match msg {
            Msg::SetTab(tab) => {
                self.tab = tab;
                true
            }
            Msg::ToggleSelection(id) => {
                if !self.selected.remove(&id) {
                    self.selected.insert(id);
                }
                true
            }
        }
    }

    fn view(&self, ctx: &Context<Self>) -> Html {
        let link = ctx.link();
        let tab = |id: &'static str, label: &'static str| {
            html! {
                <button
                    class={classes!("tab-btn", (self.tab == id).then_some("active"))}
                    onclick={link.callback(move |_| Msg::SetTab(id))}
                >
                    {label}
                </button>
            }
        };
        html! {
            <div class="page">
                <div class="page-header">
                    <div>
                        <h1>{"Model Management"}</h1>
                        <p class="subtitle">{"Manage, version, and export your trained models"}</p>
                    </div>
                    <div class="actions">
                        <button class="btn" disabled={self.selected.len() != 2}>
                            <i class="material-icons">{"bar_chart"}</i>{"Compare Selected"}
                        </button>
                        <button class="btn primary">
                            <i class="material-icons">{"download"}</i>{"Export Models"}
                        </button>
                    </div>
                </div>

                <div class="tab-bar">
                    { tab("registry", "Model Registry") }
                    { tab("versions", "Version Control") }
                    { tab("comparison", "Model Comparison") }
                    { tab("export", "Export & Import") }
                </div>

                {
                    match self.tab {
                        "versions" => versions_card(),
                        "comparison" => self.comparison_card(),
                        "export" => export_card(),
                        _ => self.registry_card(ctx),
                    }
                }
            </div>
        }
    }
}

fn status_badge(status: &str) -> Html {
    let class = match status {
        "production" | "current" => "badge available",
        "staging" | "previous" => "badge coming-soon",
        "development" => "badge",
        _ => "badge",
    };
    html! { <span class={class}>{status.to_string()}</span> }
}

impl ModelManagement {
    fn registry_card(&self, ctx: &Context<Self>) -> Html {
        let link = ctx.link();
        html! {
            <div class="card">
                <div class="card-header">
                    <h2><i class="material-icons">{"folder_open"}</i>{"Model Registry"}</h2>
                    <p class="subtitle">{"All registered models with metadata and performance metrics"}</p>
                </div>
                {
                    for MODELS.iter().map(|model| {
                        let id = model.id;
                        html! {
                            <div class="list-row">
                                <div class="list-row">
                                    <input
                                        type="checkbox"
                                        checked={self.selected.contains(&id)}
                                        onchange={link.callback(move |_| Msg::ToggleSelection(id))}
                                    />
                                    <div>
                                        <h4>{model.name}</h4>
                                        <p class="subtitle">
                                            {format!("{} \u{2022} {} \u{2022} {}", model.framework, model.author, model.created)}
                                        </p>
                                    </div>
                                </div>
                                <div class="list-row-end">
                                    <span>{format!("{}% acc / {}% F1", model.accuracy, model.f1)}</span>
                                    <span class="hint">{format!("{} \u{2022} v{}", model.size, model.version)}</span>
                                    <span class="hint">{format!("{} deployments", model.deployments)}</span>
                                    { status_badge(model.status) }
                                </div>
                            </div>
                        }
                    })
                }
            </div>
        }
    }

    fn comparison_card(&self) -> Html {
        if self.selected.len() < 2 {
            return html! {
                <div class="card">
                    <div class="card-header">
                        <h2><i class="material-icons">{"bar_chart"}</i>{"Model Comparison"}</h2>
                    </div>
                    <p class="subtitle">
                        {"Choose 2 or more models from the registry to see a detailed comparison."}
                    </p>
                </div>
            };
        }
        let chosen: Vec<&StoredModel> = MODELS
            .iter()
            .filter(|model| self.selected.contains(&model.id))
            .collect();
        html! {
            <div class="card">
                <div class="card-header">
                    <h2><i class="material-icons">{"bar_chart"}</i>{"Model Comparison"}</h2>
                    <p class="subtitle">{"Compare selected models side by side"}</p>
                </div>
                <div class="table-wrap">
                    <table>
                        <thead>
                            <tr>
                                <th>{"Metric"}</th>
                                { for chosen.iter().map(|model| html! { <th>{model.name}</th> }) }
                            </tr>
                        </thead>
                        <tbody>
                            <tr>
                                <td>{"Accuracy"}</td>
                                { for chosen.iter().map(|m| html! { <td>{format!("{}%", m.accuracy)}</td> }) }
                            </tr>
                            <tr>
                                <td>{"F1 Score"}</td>
                                { for chosen.iter().map(|m| html! { <td>{format!("{}%", m.f1)}</td> }) }
                            </tr>
                            <tr>
                                <td>{"Model Size"}</td>
                                { for chosen.iter().map(|m| html! { <td>{m.size}</td> }) }
                            </tr>
                            <tr>
                                <td>{"Framework"}</td>
                                { for chosen.iter().map(|m| html! { <td>{m.framework}</td> }) }
                            </tr>
                            <tr>
                                <td>{"Status"}</td>
                                { for chosen.iter().map(|m| html! { <td>{status_badge(m.status)}</td> }) }
                            </tr>
                        </tbody>
                    </table>
                </div>
            </div>
        }
    }
}

fn versions_card() -> Html {
    html! {
        <div class="card">
            <div class="card-header">
                <h2><i class="material-icons">{"account_tree"}</i>{"Version History"}</h2>
                <p class="subtitle">{"Track model versions and changes over time"}</p>
            </div>
            {
                for VERSIONS.iter().map(|(version, accuracy, created, status, changes)| html! {
                    <div class="list-row column">
                        <div class="list-row">
                            <span>{format!("v{version}")}{" "}{ status_badge(status) }</span>
                            <span class="hint">{*created}</span>
                        </div>
                        <p class="subtitle">{*changes}</p>
                        <p class="hint">{format!("Accuracy: {accuracy}%")}</p>
                    </div>
                })
            }
        </div>
    }
}

fn export_card() -> Html {
    html! {
        <div class="card">
            <div class="card-header">
                <h2><i class="material-icons">{"download"}</i>{"Export Models"}</h2>
                <p class="subtitle">{"Export models in various formats for deployment"}</p>
            </div>
            {
                for EXPORT_FORMATS.iter().map(|(name, description, supported)| html! {
                    <div class="list-row">
                        <div class="list-row">
                            <input type="checkbox" disabled={!supported} checked={*name == "Pickle"} />
                            <div>
                                <h4>{*name}</h4>
                                <p class="subtitle">{*description}</p>
                            </div>
                        </div>
                        {
                            if *supported {
                                html! { <span class="badge available">{"Supported"}</span> }
                            } else {
                                html! { <span class="badge coming-soon">{"Coming Soon"}</span> }
                            }
                        }
                    </div>
                })
            }
            <button class="btn primary wide">
                <i class="material-icons">{"download"}</i>{"Export Selected Formats"}
            </button>
        </div>
    }
}
