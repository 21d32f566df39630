//! Explainability page: global feature importance, SHAP contributions,
//! LIME rules, and counterfactual suggestions for a sample prediction.

use yew::prelude::*;

const FEATURE_IMPORTANCE: [(&str, f64, &str); 6] = [
    ("income", 0.342, "numerical"),
    ("age", 0.189, "numerical"),
    ("education_level", 0.156, "categorical"),
    ("location", 0.123, "categorical"),
    ("experience_years", 0.098, "numerical"),
    ("job_category", 0.092, "categorical"),
];

const SHAP_VALUES: [(&str, f64); 5] = [
    ("income", 0.23),
    ("age", -0.08),
    ("education_level", 0.12),
    ("location", -0.05),
    ("experience_years", 0.18),
];

const LIME_RULES: [(&str, f64, f64); 5] = [
    ("income > 50000", 0.45, 0.89),
    ("age <= 35", -0.23, 0.76),
    ("education = Bachelor", 0.34, 0.92),
    ("location = Urban", 0.12, 0.84),
    ("experience > 5", 0.28, 0.67),
];

const COUNTERFACTUALS: [(&str, &str, f64); 2] = [
    ("Increase income by $10,000", "No \u{2192} Yes", 0.89),
    ("Change education to Master's", "No \u{2192} Yes", 0.76),
];

pub enum Msg {
    SetTab(&'static str),
}

pub struct Explainability {
    tab: &'static str,
}

impl Component for Explainability {
    type Message = Msg;
    type Properties = ();

    fn create(_ctx: &Context<Self>) -> Self {
        Self { tab: "global" }
    }

    fn update(&mut self, _ctx: &Context<Self>, msg: Self::Message) -> bool {
        let Msg::SetTab(tab) = msg;
        let changed = self.tab != tab;
        self.tab = tab;
        changed
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
                        <h1>{"Explainable AI"}</h1>
                        <p class="subtitle">{"Understand and interpret your model's predictions"}</p>
                    </div>
                    <button class="btn primary">
                        <i class="material-icons">{"psychology"}</i>{"Generate Explanations"}
                    </button>
                </div>

                <div class="card">
                    <div class="card-header">
                        <h2><i class="material-icons">{"settings"}</i>{"Model & Instance Selection"}</h2>
                        <p class="subtitle">{"Choose model and data instance to explain"}</p>
                    </div>
                    <div class="form-grid">
                        <div class="form-field">
                            <label>{"Model"}</label>
                            <select>
                                <option selected=true>{"XGBoost (94.2% acc)"}</option>
                                <option>{"LightGBM (92.1% acc)"}</option>
                                <option>{"CatBoost (91.8% acc)"}</option>
                            </select>
                        </div>
                        <div class="form-field">
                            <label>{"Instance"}</label>
                            <select>
                                <option selected=true>{"Sample 1 (High confidence)"}</option>
                                <option>{"Sample 2 (Low confidence)"}</option>
                                <option>{"Sample 3 (Misclassified)"}</option>
                            </select>
                        </div>
                        <div class="form-field">
                            <label>{"Prediction"}</label>
                            <div class="list-row">
                                <span>{"Yes (Positive)"}</span>
                                <span class="badge available">{"87.5%"}</span>
                            </div>
                        </div>
                    </div>
                </div>

                <div class="tab-bar">
                    { tab("global", "Global Importance") }
                    { tab("shap", "SHAP Analysis") }
                    { tab("lime", "LIME") }
                    { tab("counterfactual", "Counterfactuals") }
                </div>

                {
                    match self.tab {
                        "shap" => shap_card(),
                        "lime" => lime_card(),
                        "counterfactual" => counterfactual_card(),
                        _ => importance_card(),
                    }
                }
            </div>
        }
    }
}

fn importance_card() -> Html {
    html! {
        <div class="card">
            <div class="card-header">
                <h2><i class="material-icons">{"bar_chart"}</i>{"Global Feature Importance"}</h2>
                <p class="subtitle">{"Overall feature contribution across all predictions"}</p>
            </div>
            {
                for FEATURE_IMPORTANCE.iter().map(|(feature, importance, kind)| html! {
                    <div class="list-row column">
                        <div class="list-row">
                            <span>{*feature}{" "}<span class="badge">{*kind}</span></span>
                            <span>{format!("{:.1}%", importance * 100.0)}</span>
                        </div>
                        <div class="progress">
                            <div
                                class="progress-fill"
                                style={format!("width: {:.0}%;", importance * 100.0)}
                            />
                        </div>
                    </div>
                })
            }
        </div>
    }
}

fn shap_card() -> Html {
    html! {
        <div class="card">
            <div class="card-header">
                <h2><i class="material-icons">{"trending_up"}</i>{"SHAP Waterfall"}</h2>
                <p class="subtitle">{"Feature contributions to this prediction"}</p>
            </div>
            <div class="list-row">
                <span class="subtitle">{"Base Value"}</span>
                <span>{"0.15"}</span>
            </div>
            <div class="list-row">
                <span class="subtitle">{"Final Prediction"}</span>
                <span>{"0.87"}</span>
            </div>
            {
                for SHAP_VALUES.iter().map(|(feature, value)| {
                    let positive = *value >= 0.0;
                    html! {
                        <div class="list-row column">
                            <div class="list-row">
                                <span>{*feature}</span>
                                <span class={if positive { "status-valid" } else { "status-invalid" }}>
                                    {format!("{}{:.3}", if positive { "+" } else { "" }, value)}
                                </span>
                            </div>
                            <div class="progress">
                                <div
                                    class="progress-fill"
                                    style={format!("width: {:.0}%;", value.abs() * 100.0)}
                                />
                            </div>
                        </div>
                    }
                })
            }
        </div>
    }
}

fn lime_card() -> Html {
    html! {
        <div class="card">
            <div class="card-header">
                <h2><i class="material-icons">{"lightbulb"}</i>{"LIME Local Explanation"}</h2>
                <p class="subtitle">{"Local interpretable model explanation for this instance"}</p>
            </div>
            {
                for LIME_RULES.iter().map(|(rule, weight, support)| {
                    let positive = *weight >= 0.0;
                    html! {
                        <div class="list-row column">
                            <div class="list-row">
                                <span>{*rule}</span>
                                <span class="list-row-end">
                                    <span class={if positive { "status-valid" } else { "status-invalid" }}>
                                        {format!("{}{:.2}", if positive { "+" } else { "" }, weight)}
                                    </span>
                                    <span class="badge">{format!("{:.0}%", support * 100.0)}</span>
                                </span>
                            </div>
                            <div class="progress">
                                <div
                                    class="progress-fill"
                                    style={format!("width: {:.0}%;", weight.abs() * 100.0)}
                                />
                            </div>
                        </div>
                    }
                })
            }
        </div>
    }
}

fn counterfactual_card() -> Html {
    html! {
        <div class="card">
            <div class="card-header">
                <h2><i class="material-icons">{"track_changes"}</i>{"Counterfactual Explanations"}</h2>
                <p class="subtitle">{"What changes would flip this prediction?"}</p>
            </div>
            {
                for COUNTERFACTUALS.iter().map(|(change, prediction, confidence)| html! {
                    <div class="list-row">
                        <div>
                            <h4>{*change}</h4>
                            <span class="badge">{*prediction}</span>
                        </div>
                        <span>{format!("{:.1}% confidence", confidence * 100.0)}</span>
                    </div>
                })
            }
            <button class="btn primary wide">
                <i class="material-icons">{"psychology"}</i>{"Generate More Counterfactuals"}
            </button>
        </div>
    }
}
