//! Data preprocessing page: per-column quality table plus a toggleable
//! pipeline of cleaning steps.

use yew::prelude::*;

#[derive(Clone)]
struct Step {
    name: &'static str,
    methods: &'static [(&'static str, &'static str)],
    method: &'static str,
    enabled: bool,
    applied: bool,
}

fn initial_steps() -> Vec<Step> {
    vec![
        Step {
            name: "Handle Missing Values",
            methods: &[
                ("mean", "Mean Imputation"),
                ("median", "Median Imputation"),
                ("knn", "KNN Imputation"),
                ("drop", "Drop Rows"),
            ],
            method: "mean",
            enabled: true,
            applied: false,
        },
        Step {
            name: "Encode Categorical",
            methods: &[
                ("onehot", "One-Hot Encoding"),
                ("label", "Label Encoding"),
                ("frequency", "Frequency Encoding"),
            ],
            method: "onehot",
            enabled: true,
            applied: false,
        },
        Step {
            name: "Scale Features",
            methods: &[
                ("standard", "Standard Scaler"),
                ("minmax", "Min-Max Scaler"),
                ("robust", "Robust Scaler"),
            ],
            method: "standard",
            enabled: false,
            applied: false,
        },
        Step {
            name: "Remove Outliers",
            methods: &[
                ("iqr", "IQR Method"),
                ("zscore", "Z-Score"),
                ("isolation", "Isolation Forest"),
            ],
            method: "iqr",
            enabled: false,
            applied: false,
        },
    ]
}

const DATA_QUALITY: [(&str, &str, u32, u32, u32); 5] = [
    ("age", "numeric", 0, 5, 45),
    ("income", "numeric", 12, 15, 8920),
    ("education", "categorical", 0, 0, 4),
    ("location", "categorical", 8, 0, 52),
    ("target", "target", 0, 0, 2),
];

pub enum Msg {
    Toggle(usize),
    Apply(usize),
    Reset,
}

pub struct Preprocessing {
    steps: Vec<Step>,
}

impl Component for Preprocessing {
    type Message = Msg;
    type Properties = ();

    fn create(_ctx: &Context<Self>) -> Self {
        Self {
            steps: initial_steps(),
        }
    }

    fn update(&mut self, _ctx: &Context<Self>, msg: Self::Message) -> bool {
        match msg {
            Msg::Toggle(index) => {
                if let Some(step) = self.steps.get_mut(index) {
                    step.enabled = !step.enabled;
                }
                true
            }
            Msg::Apply(index) => {
                if let Some(step) = self.steps.get_mut(index) {
                    step.applied = true;
                }
                true
            }
            Msg::Reset => {
                self.steps = initial_steps();
                true
            }
        }
    }

    fn view(&self, ctx: &Context<Self>) -> Html {
        let link = ctx.link();
        html! {
            <div class="page">
                <div class="page-header">
                    <div>
                        <h1>{"Data Preprocessing"}</h1>
                        <p class="subtitle">{"Clean and prepare your data for machine learning"}</p>
                    </div>
                    <div class="actions">
                        <button class="btn" onclick={link.callback(|_| Msg::Reset)}>
                            <i class="material-icons">{"refresh"}</i>{"Reset All"}
                        </button>
                        <button class="btn primary">
                            <i class="material-icons">{"bolt"}</i>{"Apply All"}
                        </button>
                    </div>
                </div>

                <div class="card-grid two-columns">
                    { quality_card() }
                    { self.pipeline_card(ctx) }
                </div>

                { results_card() }
            </div>
        }
    }
}

fn quality_card() -> Html {
    html! {
        <div class="card">
            <div class="card-header">
                <h2><i class="material-icons">{"bar_chart"}</i>{"Data Quality Overview"}</h2>
                <p class="subtitle">{"Analysis of missing values, outliers, and data distribution"}</p>
            </div>
            <div class="table-wrap">
                <table>
                    <thead>
                        <tr>
                            <th>{"Column"}</th>
                            <th>{"Type"}</th>
                            <th>{"Missing"}</th>
                            <th>{"Outliers"}</th>
                            <th>{"Unique"}</th>
                            <th>{"Status"}</th>
                        </tr>
                    </thead>
                    <tbody>
                        {
                            for DATA_QUALITY.iter().map(|(column, kind, missing, outliers, unique)| {
                                let clean = *missing == 0 && *outliers == 0;
                                html! {
                                    <tr>
                                        <td>{*column}</td>
                                        <td><span class="badge">{*kind}</span></td>
                                        <td class={count_class(*missing)}>{*missing}</td>
                                        <td class={count_class(*outliers)}>{*outliers}</td>
                                        <td>{*unique}</td>
                                        <td>
                                            <i class={classes!(
                                                "material-icons",
                                                if clean { "status-valid" } else { "status-warning" }
                                            )}>
                                                { if clean { "check_circle" } else { "warning" } }
                                            </i>
                                        </td>
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

fn count_class(count: u32) -> &'static str {
    if count > 0 { "status-warning" } else { "status-valid" }
}

impl Preprocessing {
    fn pipeline_card(&self, ctx: &Context<Self>) -> Html {
        let link = ctx.link();
        html! {
            <div class="card">
                <div class="card-header">
                    <h2><i class="material-icons">{"settings"}</i>{"Processing Pipeline"}</h2>
                    <p class="subtitle">{"Configure preprocessing steps"}</p>
                </div>
                {
                    for self.steps.iter().enumerate().map(|(index, step)| html! {
                        <div class="list-row column">
                            <div class="list-row">
                                <span>{step.name}</span>
                                <input
                                    type="checkbox"
                                    checked={step.enabled}
                                    onchange={link.callback(move |_| Msg::Toggle(index))}
                                />
                            </div>
                            {
                                if step.enabled {
                                    html! {
                                        <>
                                            <select>
                                                {
                                                    for step.methods.iter().map(|(value, label)| html! {
                                                        <option
                                                            value={*value}
                                                            selected={*value == step.method}
                                                        >
                                                            {*label}
                                                        </option>
                                                    })
                                                }
                                            </select>
                                            <button
                                                class="btn wide"
                                                disabled={step.applied}
                                                onclick={link.callback(move |_| Msg::Apply(index))}
                                            >
                                                { if step.applied { "Applied" } else { "Apply Step" } }
                                            </button>
                                        </>
                                    }
                                } else {
                                    html! {}
                                }
                            }
                        </div>
                    })
                }
            </div>
        }
    }
}

fn summary(label: &str, value: &str, class: &'static str) -> Html {
    html! {
        <div class="card stat">
            <p class="subtitle">{label}</p>
            <p class={classes!("stat-value", class)}>{value}</p>
        </div>
    }
}

fn results_card() -> Html {
    html! {
        <div class="card">
            <div class="card-header">
                <h2><i class="material-icons">{"trending_up"}</i>{"Preprocessing Results"}</h2>
                <p class="subtitle">{"Before and after comparison of data transformations"}</p>
            </div>
            <div class="card-grid two-columns">
                <div>
                    <h3>{"Before Processing"}</h3>
                    <div class="card-grid two-columns">
                        { summary("Missing Values", "20", "status-warning") }
                        { summary("Outliers", "20", "status-warning") }
                        { summary("Features", "4", "") }
                        { summary("Rows", "10,000", "") }
                    </div>
                </div>
                <div>
                    <h3>{"After Processing"}</h3>
                    <div class="card-grid two-columns">
                        { summary("Missing Values", "0", "status-valid") }
                        { summary("Outliers", "0", "status-valid") }
                        { summary("Features", "12", "") }
                        { summary("Rows", "9,980", "") }
                    </div>
                </div>
            </div>
        </div>
    }
}
