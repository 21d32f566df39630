//! Model evaluation page: metric comparison table, confusion matrix,
//! classification report, and a classification-threshold slider.

use yew::prelude::*;

struct ModelMetrics {
    name: &'static str,
    accuracy: f64,
    f1: f64,
    precision: f64,
    recall: f64,
    auc: f64,
    status: &'static str,
}

const MODELS: [ModelMetrics; 4] = [
    ModelMetrics { name: "XGBoost", accuracy: 94.2, f1: 92.8, precision: 93.5, recall: 92.1, auc: 96.7, status: "best" },
    ModelMetrics { name: "LightGBM", accuracy: 92.1, f1: 91.2, precision: 90.8, recall: 91.6, auc: 94.3, status: "good" },
    ModelMetrics { name: "CatBoost", accuracy: 91.8, f1: 90.9, precision: 91.2, recall: 90.6, auc: 93.9, status: "good" },
    ModelMetrics { name: "Random Forest", accuracy: 89.5, f1: 88.7, precision: 89.1, recall: 88.3, auc: 92.1, status: "baseline" },
];

const REPORT: [(&str, f64, f64, f64, u32); 4] = [
    ("Class 0 (No)", 87.0, 90.0, 88.5, 952),
    ("Class 1 (Yes)", 93.7, 91.7, 92.7, 1548),
    ("Macro Avg", 90.4, 90.9, 90.6, 2500),
    ("Weighted Avg", 91.2, 91.0, 91.1, 2500),
];

const TRUE_POSITIVE: u32 = 1420;
const FALSE_POSITIVE: u32 = 95;
const FALSE_NEGATIVE: u32 = 128;
const TRUE_NEGATIVE: u32 = 857;

pub enum Msg {
    SetTab(&'static str),
    SetThreshold(f64),
}

pub struct Evaluation {
    tab: &'static str,
    threshold: f64,
}

impl Component for Evaluation {
    type Message = Msg;
    type Properties = ();

    fn create(_ctx: &Context<Self>) -> Self {
        Self {
            tab: "metrics",
            threshold: 0.5,
        }
    }

    fn update(&mut self, _ctx: &Context<Self>, msg: Self::Message) -> bool {
        match msg {
            Msg::SetTab(tab) => {
                self.tab = tab;
                true
            }
            Msg::SetThreshold(value) => {
                self.threshold = value;
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
                        <h1>{"Model Evaluation"}</h1>
                        <p class="subtitle">{"Analyze model performance and validate results"}</p>
                    </div>
                    <div class="actions">
                        <button class="btn">
                            <i class="material-icons">{"download"}</i>{"Export Results"}
                        </button>
                        <button class="btn primary">
                            <i class="material-icons">{"track_changes"}</i>{"Compare Models"}
                        </button>
                    </div>
                </div>

                { comparison_card() }

                <div class="tab-bar">
                    { tab("metrics", "Metrics") }
                    { tab("confusion", "Confusion Matrix") }
                    { tab("threshold", "Threshold Tuning") }
                </div>

                {
                    match self.tab {
                        "confusion" => confusion_card(),
                        "threshold" => self.threshold_card(ctx),
                        _ => report_card(),
                    }
                }
            </div>
        }
    }
}

fn comparison_card() -> Html {
    html! {
        <div class="card">
            <div class="card-header">
                <h2><i class="material-icons">{"trending_up"}</i>{"Model Performance Comparison"}</h2>
                <p class="subtitle">{"Performance metrics across all trained models"}</p>
            </div>
            <div class="table-wrap">
                <table>
                    <thead>
                        <tr>
                            <th>{"Model"}</th>
                            <th>{"Accuracy"}</th>
                            <th>{"F1 Score"}</th>
                            <th>{"Precision"}</th>
                            <th>{"Recall"}</th>
                            <th>{"AUC-ROC"}</th>
                            <th>{"Status"}</th>
                        </tr>
                    </thead>
                    <tbody>
                        {
                            for MODELS.iter().map(|model| {
                                let badge = match model.status {
                                    "best" => "badge available",
                                    "good" => "badge",
                                    _ => "badge coming-soon",
                                };
                                html! {
                                    <tr>
                                        <td>{model.name}</td>
                                        <td>{format!("{}%", model.accuracy)}</td>
                                        <td>{format!("{}%", model.f1)}</td>
                                        <td>{format!("{}%", model.precision)}</td>
                                        <td>{format!("{}%", model.recall)}</td>
                                        <td>{format!("{}%", model.auc)}</td>
                                        <td><span class={badge}>{model.status}</span></td>
                                    </tr>
                                }
                            })
                        }
                    </tbody>
                </table>
            </div>
        </div>
    }
}

fn report_card() -> Html {
    html! {
        <div class="card">
            <div class="card-header">
                <h2><i class="material-icons">{"bar_chart"}</i>{"Classification Report"}</h2>
                <p class="subtitle">{"Detailed per-class performance metrics"}</p>
            </div>
            <div class="table-wrap">
                <table>
                    <thead>
                        <tr>
                            <th>{"Class"}</th>
                            <th>{"Precision"}</th>
                            <th>{"Recall"}</th>
                            <th>{"F1-Score"}</th>
                            <th>{"Support"}</th>
                        </tr>
                    </thead>
                    <tbody>
                        {
                            for REPORT.iter().map(|(class, precision, recall, f1, support)| html! {
                                <tr>
                                    <td>{*class}</td>
                                    <td>{format!("{precision}%")}</td>
                                    <td>{format!("{recall}%")}</td>
                                    <td>{format!("{f1}%")}</td>
                                    <td>{*support}</td>
                                </tr>
                            })
                        }
                    </tbody>
                </table>
            </div>
        </div>
    }
}

fn matrix_cell(label: &str, value: u32, correct: bool) -> Html {
    html! {
        <div class={classes!("matrix-cell", if correct { "status-valid" } else { "status-invalid" })}>
            <p class="stat-value">{value}</p>
            <p class="hint">{label.to_string()}</p>
        </div>
    }
}

fn confusion_card() -> Html {
    html! {
        <div class="card">
            <div class="card-header">
                <h2><i class="material-icons">{"pie_chart"}</i>{"Confusion Matrix"}</h2>
                <p class="subtitle">{"Visual representation of prediction accuracy"}</p>
            </div>
            <div class="card-grid two-columns">
                { matrix_cell("True Negative", TRUE_NEGATIVE, true) }
                { matrix_cell("False Positive", FALSE_POSITIVE, false) }
                { matrix_cell("False Negative", FALSE_NEGATIVE, false) }
                { matrix_cell("True Positive", TRUE_POSITIVE, true) }
            </div>
            <div class="list-row column">
                <div class="list-row"><span class="subtitle">{"Sensitivity"}</span><span>{"91.7%"}</span></div>
                <div class="list-row"><span class="subtitle">{"Specificity"}</span><span>{"90.0%"}</span></div>
                <div class="list-row"><span class="subtitle">{"False Positive Rate"}</span><span>{"10.0%"}</span></div>
                <div class="list-row"><span class="subtitle">{"False Negative Rate"}</span><span>{"8.3%"}</span></div>
            </div>
        </div>
    }
}

impl Evaluation {
    fn threshold_card(&self, ctx: &Context<Self>) -> Html {
        let link = ctx.link();
        html! {
            <div class="card">
                <div class="card-header">
                    <h2><i class="material-icons">{"settings"}</i>{"Threshold Tuning"}</h2>
                    <p class="subtitle">{"Optimize classification threshold for your use case"}</p>
                </div>
                <label>{format!("Classification Threshold: {:.2}", self.threshold)}</label>
                <input
                    type="range"
                    min="0"
                    max="1"
                    step="0.01"
                    value={self.threshold.to_string()}
                    oninput={link.batch_callback(|event: InputEvent| {
                        let input: web_sys::HtmlInputElement = event.target_unchecked_into();
                        input.value().parse().ok().map(Msg::SetThreshold)
                    })}
                />
                <div class="card-grid four-columns">
                    <div class="card stat">
                        <p class="subtitle">{"Precision"}</p>
                        <p class="stat-value">{"93.5%"}</p>
                    </div>
                    <div class="card stat">
                        <p class="subtitle">{"Recall"}</p>
                        <p class="stat-value">{"92.1%"}</p>
                    </div>
                    <div class="card stat">
                        <p class="subtitle">{"F1 Score"}</p>
                        <p class="stat-value">{"92.8%"}</p>
                    </div>
                    <div class="card stat">
                        <p class="subtitle">{"Accuracy"}</p>
                        <p class="stat-value">{"94.2%"}</p>
                    </div>
                </div>
            </div>
        }
    }
}
