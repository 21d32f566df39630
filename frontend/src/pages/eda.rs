//! Exploratory data analysis page: dataset summary, quality issues,
//! target distribution, and the strongest feature correlations.

use yew::prelude::*;

const SUMMARY: [(&str, &str); 7] = [
    ("Rows", "10,000"),
    ("Columns", "12"),
    ("Numerical", "7"),
    ("Categorical", "4"),
    ("Target", "1"),
    ("Missing", "0"),
    ("Duplicates", "0"),
];

const QUALITY_ISSUES: [(&str, &str, &str, &str); 3] = [
    (
        "Class Imbalance",
        "medium",
        "Target variable has 70/30 split",
        "1 column",
    ),
    (
        "High Cardinality",
        "low",
        "Location column has 250+ unique values",
        "1 column",
    ),
    ("Zero Variance", "high", "Constant column detected", "1 column"),
];

const CORRELATIONS: [(&str, &str, f64, &str); 4] = [
    ("income", "education", 0.72, "strong"),
    ("age", "experience", 0.89, "very strong"),
    ("location", "income", 0.43, "moderate"),
    ("target", "income", 0.38, "moderate"),
];

pub struct Eda;

impl Component for Eda {
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
                        <h1>{"Exploratory Data Analysis"}</h1>
                        <p class="subtitle">{"Discover insights and patterns in your data"}</p>
                    </div>
                    <div class="actions">
                        <button class="btn">
                            <i class="material-icons">{"download"}</i>{"Export Report"}
                        </button>
                        <button class="btn primary">
                            <i class="material-icons">{"description"}</i>{"Generate Auto Report"}
                        </button>
                    </div>
                </div>

                <div class="card-grid seven-columns">
                    {
                        for SUMMARY.iter().map(|(label, value)| html! {
                            <div class="card stat">
                                <p class="stat-value">{*value}</p>
                                <p class="subtitle">{*label}</p>
                            </div>
                        })
                    }
                </div>

                <div class="card-grid three-columns">
                    { issues_card() }
                    { target_card() }
                    { correlations_card() }
                </div>
            </div>
        }
    }
}

fn severity_badge(severity: &str) -> Html {
    let class = match severity {
        "high" => "badge enterprise",
        "medium" => "badge coming-soon",
        _ => "badge",
    };
    html! { <span class={class}>{severity.to_string()}</span> }
}

fn issues_card() -> Html {
    html! {
        <div class="card">
            <div class="card-header">
                <h2><i class="material-icons">{"warning"}</i>{"Quality Issues"}</h2>
                <p class="subtitle">{"Potential data quality concerns"}</p>
            </div>
            {
                for QUALITY_ISSUES.iter().map(|(kind, severity, description, affected)| html! {
                    <div class="list-row column">
                        <div class="list-row">
                            <h4>{*kind}</h4>
                            { severity_badge(severity) }
                        </div>
                        <p class="subtitle">{*description}</p>
                        <p class="hint">{format!("Affects: {affected}")}</p>
                    </div>
                })
            }
        </div>
    }
}

fn target_card() -> Html {
    html! {
        <div class="card">
            <div class="card-header">
                <h2><i class="material-icons">{"pie_chart"}</i>{"Target Analysis"}</h2>
                <p class="subtitle">{"Target variable distribution and insights"}</p>
            </div>
            <div class="progress-label">
                <span>{"Class: Yes"}</span>
                <span>{"70%"}</span>
            </div>
            <div class="progress">
                <div class="progress-fill" style="width: 70%;" />
            </div>
            <div class="progress-label">
                <span>{"Class: No"}</span>
                <span>{"30%"}</span>
            </div>
            <div class="progress">
                <div class="progress-fill" style="width: 30%;" />
            </div>
            <div class="callout warning">
                <h4><i class="material-icons">{"warning"}</i>{"Imbalance Detected"}</h4>
                <p class="subtitle">{"Ratio: 2.33:1"}</p>
                <p class="hint">{"Consider SMOTE or class weighting"}</p>
            </div>
        </div>
    }
}

fn correlations_card() -> Html {
    html! {
        <div class="card">
            <div class="card-header">
                <h2><i class="material-icons">{"monitor_heart"}</i>{"Top Correlations"}</h2>
                <p class="subtitle">{"Strongest feature relationships"}</p>
            </div>
            {
                for CORRELATIONS.iter().map(|(left, right, value, strength)| html! {
                    <div class="list-row column">
                        <div class="list-row">
                            <span>{format!("{left} \u{2194} {right}")}</span>
                            <span class="badge">{value.to_string()}</span>
                        </div>
                        <p class="hint">{format!("{strength} correlation")}</p>
                    </div>
                })
            }
        </div>
    }
}
