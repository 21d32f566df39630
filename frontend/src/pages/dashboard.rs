//! Landing page with project stats, recent models, and system status.

use yew::prelude::*;

struct RecentModel {
    name: &'static str,
    metric: &'static str,
    status: &'static str,
    kind: &'static str,
}

const RECENT_MODELS: [RecentModel; 3] = [
    RecentModel {
        name: "Customer Churn Predictor",
        metric: "94.2% Accuracy",
        status: "deployed",
        kind: "XGBoost",
    },
    RecentModel {
        name: "Sales Forecasting",
        metric: "12.5 MAE",
        status: "training",
        kind: "LightGBM",
    },
    RecentModel {
        name: "Fraud Detection",
        metric: "88.7% F1-Score",
        status: "evaluating",
        kind: "CatBoost",
    },
];

const PROJECT_STATS: [(&str, &str, &str, &str); 4] = [
    ("Active Projects", "12", "storage", "+2"),
    ("Models Deployed", "28", "psychology", "+5"),
    ("Avg Accuracy", "91.3%", "trending_up", "+1.2%"),
    ("Data Sources", "8", "bar_chart", "+1"),
];

pub struct Dashboard;

impl Component for Dashboard {
    type Message = ();
    type Properties = ();

    fn create(_ctx: &Context<Self>) -> Self {
        Self
    }

    fn view(&self, _ctx: &Context<Self>) -> Html {
        html! {
            <div class="page">
                <div class="hero">
                    <div>
                        <h1>{"Welcome to AutoML Pro"}</h1>
                        <p class="subtitle">{"Build, train, and deploy machine learning models with ease"}</p>
                    </div>
                    <button class="btn primary">{"Start New Project"}</button>
                </div>

                <div class="card-grid four-columns">
                    {
                        for PROJECT_STATS.iter().map(|(title, value, icon, change)| html! {
                            <div class="card stat">
                                <div class="card-header">
                                    <p class="subtitle">{*title}</p>
                                    <i class="material-icons">{*icon}</i>
                                </div>
                                <p class="stat-value">{*value}</p>
                                <p class="subtitle">{format!("{change} from last month")}</p>
                            </div>
                        })
                    }
                </div>

                <div class="card-grid two-columns">
                    <div class="card">
                        <div class="card-header">
                            <h2><i class="material-icons">{"psychology"}</i>{"Recent Models"}</h2>
                            <p class="subtitle">{"Your latest machine learning models and their performance"}</p>
                        </div>
                        { for RECENT_MODELS.iter().map(model_row) }
                    </div>

                    <div>
                        <div class="card">
                            <div class="card-header">
                                <h2>{"Quick Actions"}</h2>
                            </div>
                            <button class="btn primary wide">
                                <i class="material-icons">{"storage"}</i>{"Upload New Dataset"}
                            </button>
                            <button class="btn wide">
                                <i class="material-icons">{"psychology"}</i>{"Train New Model"}
                            </button>
                            <button class="btn wide">
                                <i class="material-icons">{"bar_chart"}</i>{"Explore Data"}
                            </button>
                        </div>
                        { system_status() }
                    </div>
                </div>
            </div>
        }
    }
}

fn model_row(model: &RecentModel) -> Html {
    let badge = match model.status {
        "deployed" => "badge available",
        "training" => "badge coming-soon",
        _ => "badge",
    };
    html! {
        <div class="list-row">
            <div>
                <h4>{model.name}</h4>
                <p class="subtitle">{model.kind}</p>
            </div>
            <div class="list-row-end">
                <p>{model.metric}</p>
                <span class={badge}>{model.status}</span>
            </div>
        </div>
    }
}

fn gauge(label: &str, detail: &str, percent: u32) -> Html {
    html! {
        <div class="gauge">
            <div class="progress-label">
                <span>{label}</span>
                <span>{detail}</span>
            </div>
            <div class="progress">
                <div class="progress-fill" style={format!("width: {percent}%;")} />
            </div>
        </div>
    }
}

fn system_status() -> Html {
    html! {
        <div class="card">
            <div class="card-header">
                <h2><i class="material-icons">{"monitor_heart"}</i>{"System Status"}</h2>
            </div>
            { gauge("Training Queue", "3/10", 30) }
            { gauge("GPU Usage", "67%", 67) }
            { gauge("Storage Used", "2.1TB / 5TB", 42) }
            <p class="hint">
                <i class="material-icons status-valid">{"check_circle"}</i>
                {"All services operational"}
            </p>
            <p class="hint">
                <i class="material-icons status-warning">{"schedule"}</i>
                {"Maintenance in 2 days"}
            </p>
        </div>
    }
}
