//! Model training page: algorithm catalog, hyperparameter defaults for
//! the selected algorithm, and the training job queue.

use yew::prelude::*;

const MODELS: [(&str, &str, &str); 6] = [
    ("XGBoost", "Gradient boosting framework", "ensemble"),
    ("LightGBM", "Light gradient boosting machine", "ensemble"),
    ("CatBoost", "Categorical boosting", "ensemble"),
    ("Random Forest", "Random forest classifier", "ensemble"),
    ("Neural Network", "Multi-layer perceptron", "deep"),
    ("Support Vector Machine", "SVM with RBF kernel", "traditional"),
];

struct Job {
    model: &'static str,
    status: &'static str,
    accuracy: Option<f64>,
    duration: Option<&'static str>,
    started: &'static str,
}

const JOBS: [Job; 3] = [
    Job {
        model: "XGBoost",
        status: "completed",
        accuracy: Some(94.2),
        duration: Some("5m 23s"),
        started: "2 hours ago",
    },
    Job {
        model: "LightGBM",
        status: "training",
        accuracy: Some(89.1),
        duration: Some("3m 45s"),
        started: "45 minutes ago",
    },
    Job {
        model: "CatBoost",
        status: "queued",
        accuracy: None,
        duration: None,
        started: "pending",
    },
];

/// Default hyperparameter ranges per algorithm, `(name, min, max, default)`.
fn hyperparameters(model: &str) -> &'static [(&'static str, f64, f64, f64)] {
    match model {
        "XGBoost" => &[
            ("max_depth", 3.0, 10.0, 6.0),
            ("learning_rate", 0.01, 0.3, 0.1),
            ("n_estimators", 50.0, 1000.0, 100.0),
            ("subsample", 0.5, 1.0, 1.0),
        ],
        "LightGBM" => &[
            ("num_leaves", 10.0, 300.0, 31.0),
            ("learning_rate", 0.01, 0.3, 0.1),
            ("feature_fraction", 0.4, 1.0, 1.0),
            ("bagging_fraction", 0.4, 1.0, 1.0),
        ],
        _ => &[],
    }
}

pub enum Msg {
    SetTab(&'static str),
    Select(&'static str),
}

pub struct ModelTraining {
    tab: &'static str,
    selected: &'static str,
}

impl Component for ModelTraining {
    type Message = Msg;
    type Properties = ();

    fn create(_ctx: &Context<Self>) -> Self {
        Self {
            tab: "models",
            selected: "XGBoost",
        }
    }

    fn update(&mut self, _ctx: &Context<Self>, msg: Self::Message) -> bool {
        match msg {
            Msg::SetTab(tab) => {
                self.tab = tab;
                true
            }
            Msg::Select(model) => {
                self.selected = model;
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
                        <h1>{"Model Training"}</h1>
                        <p class="subtitle">{"Train and optimize machine learning models"}</p>
                    </div>
                    <button class="btn primary">
                        <i class="material-icons">{"play_arrow"}</i>{"Start Training"}
                    </button>
                </div>

                <div class="tab-bar">
                    { tab("models", "Model Selection") }
                    { tab("hyperparameters", "Hyperparameters") }
                    { tab("jobs", "Training Jobs") }
                </div>

                {
                    match self.tab {
                        "hyperparameters" => self.hyperparameter_card(),
                        "jobs" => jobs_card(),
                        _ => self.model_grid(ctx),
                    }
                }
            </div>
        }
    }
}

impl ModelTraining {
    fn model_grid(&self, ctx: &Context<Self>) -> Html {
        let link = ctx.link();
        html! {
            <div class="card-grid three-columns">
                {
                    for MODELS.iter().map(|(name, description, category)| {
                        let name = *name;
                        html! {
                        <div
                            class={classes!("card", "selectable", (self.selected == name).then_some("active"))}
                            onclick={link.callback(move |_| Msg::Select(name))}
                        >
                            <h3><i class="material-icons">{"psychology"}</i>{name}</h3>
                            <p class="subtitle">{*description}</p>
                            <div class="list-row">
                                <span class="badge">{*category}</span>
                                <span class="badge available">{"available"}</span>
                            </div>
                        </div>
                        }
                    })
                }
            </div>
        }
    }

    fn hyperparameter_card(&self) -> Html {
        let params = hyperparameters(self.selected);
        html! {
            <div class="card">
                <div class="card-header">
                    <h2><i class="material-icons">{"settings"}</i>{"Hyperparameters"}</h2>
                    <p class="subtitle">{format!("Configure {} parameters", self.selected)}</p>
                </div>
                {
                    if params.is_empty() {
                        html! {
                            <p class="subtitle">
                                {format!("No tunable defaults registered for {} yet.", self.selected)}
                            </p>
                        }
                    } else {
                        html! {
                            <div class="form-grid">
                                {
                                    for params.iter().map(|(name, min, max, default)| html! {
                                        <div class="form-field">
                                            <label>
                                                {name.replace('_', " ")}
                                                <span class="hint">{format!(" {min} - {max}")}</span>
                                            </label>
                                            <input
                                                type="number"
                                                min={min.to_string()}
                                                max={max.to_string()}
                                                value={default.to_string()}
                                            />
                                        </div>
                                    })
                                }
                            </div>
                        }
                    }
                }
            </div>
        }
    }
}

fn jobs_card() -> Html {
    html! {
        <div class="card">
            <div class="card-header">
                <h2><i class="material-icons">{"monitor_heart"}</i>{"Training Jobs"}</h2>
                <p class="subtitle">{"Monitor current and historical training jobs"}</p>
            </div>
            {
                for JOBS.iter().map(|job| {
                    let badge = match job.status {
                        "completed" => "badge available",
                        "training" => "badge coming-soon",
                        _ => "badge",
                    };
                    html! {
                        <div class="list-row">
                            <div>
                                <h4>{job.model}</h4>
                                <p class="subtitle">{format!("Started {}", job.started)}</p>
                            </div>
                            <div class="list-row-end">
                                {
                                    if let Some(accuracy) = job.accuracy {
                                        html! { <span>{format!("{accuracy}% accuracy")}</span> }
                                    } else {
                                        html! {}
                                    }
                                }
                                {
                                    if let Some(duration) = job.duration {
                                        html! { <span class="hint">{duration}</span> }
                                    } else {
                                        html! {}
                                    }
                                }
                                <span class={badge}>{job.status}</span>
                            </div>
                        </div>
                    }
                })
            }
        </div>
    }
}
