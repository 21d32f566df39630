//! Feature engineering page: selectable feature list with importance
//! scores, automated generation techniques, and dimensionality reduction.

use yew::prelude::*;

#[derive(Clone)]
struct Feature {
    name: &'static str,
    kind: &'static str,
    selected: bool,
    importance: f64,
}

fn initial_features() -> Vec<Feature> {
    vec![
        Feature { name: "age", kind: "original", selected: true, importance: 0.85 },
        Feature { name: "income", kind: "original", selected: true, importance: 0.92 },
        Feature { name: "education_encoded", kind: "transformed", selected: true, importance: 0.76 },
        Feature { name: "age_income_ratio", kind: "generated", selected: false, importance: 0.45 },
        Feature { name: "income_log", kind: "transformed", selected: false, importance: 0.63 },
        Feature { name: "education_age_interaction", kind: "generated", selected: false, importance: 0.38 },
    ]
}

const AUTO_TECHNIQUES: [(&str, &str, bool); 5] = [
    ("Polynomial Features", "Generate polynomial and interaction features", false),
    ("Target Encoding", "Encode categorical variables using target statistics", true),
    ("Date Extractions", "Extract day, month, year, weekday from datetime", false),
    ("Binning", "Create bins for continuous variables", false),
    ("Text Features", "TF-IDF and n-gram features from text columns", false),
];

const REDUCTIONS: [(&str, &str, &str); 3] = [
    ("PCA", "Principal Component Analysis", "Variance Explained: 95% \u{2192} 8 components"),
    ("UMAP", "Uniform Manifold Approximation", "Neighbors: 15 \u{2192} 3 components"),
    ("t-SNE", "t-Distributed Stochastic Neighbor Embedding", "Perplexity: 30 \u{2192} 2 components"),
];

pub enum Msg {
    SetTab(&'static str),
    Toggle(usize),
}

pub struct FeatureEngineering {
    features: Vec<Feature>,
    tab: &'static str,
}

impl Component for FeatureEngineering {
    type Message = Msg;
    type Properties = ();

    fn create(_ctx: &Context<Self>) -> Self {
        Self {
            features: initial_features(),
            tab: "features",
        }
    }

    fn update(&mut self, _ctx: &Context<Self>, msg: Self::Message) -> bool {
        match msg {
            Msg::SetTab(tab) => {
                self.tab = tab;
                true
            }
            Msg::Toggle(index) => {
                if let Some(feature) = self.features.get_mut(index) {
                    feature.selected = !feature.selected;
                }
                true
            }
        }
    }

    fn view(&self, ctx: &Context<Self>) -> Html {
        let link = ctx.link();
        let selected = self.features.iter().filter(|f| f.selected).count();
        let generated = self
            .features
            .iter()
            .filter(|f| f.kind == "generated" && f.selected)
            .count();
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
                        <h1>{"Feature Engineering"}</h1>
                        <p class="subtitle">{"Create and select features to improve model performance"}</p>
                    </div>
                    <div class="actions">
                        <button class="btn">
                            <i class="material-icons">{"bar_chart"}</i>{"Feature Importance"}
                        </button>
                        <button class="btn primary">
                            <i class="material-icons">{"bolt"}</i>{"Auto Generate"}
                        </button>
                    </div>
                </div>

                <div class="card-grid four-columns">
                    <div class="card stat">
                        <p class="stat-value">{selected}</p>
                        <p class="subtitle">{"Selected Features"}</p>
                    </div>
                    <div class="card stat">
                        <p class="stat-value">{self.features.len()}</p>
                        <p class="subtitle">{"Total Features"}</p>
                    </div>
                    <div class="card stat">
                        <p class="stat-value">{generated}</p>
                        <p class="subtitle">{"Generated"}</p>
                    </div>
                    <div class="card stat">
                        <p class="stat-value">{"92.3%"}</p>
                        <p class="subtitle">{"Avg Importance"}</p>
                    </div>
                </div>

                <div class="tab-bar">
                    { tab("features", "Feature Selection") }
                    { tab("generation", "Auto Generation") }
                    { tab("dimensionality", "Dimensionality") }
                </div>

                {
                    match self.tab {
                        "generation" => generation_card(),
                        "dimensionality" => reduction_card(),
                        _ => self.selection_card(ctx),
                    }
                }
            </div>
        }
    }
}

impl FeatureEngineering {
    fn selection_card(&self, ctx: &Context<Self>) -> Html {
        let link = ctx.link();
        html! {
            <div class="card">
                <div class="card-header">
                    <h2><i class="material-icons">{"filter_alt"}</i>{"Feature Selection"}</h2>
                    <p class="subtitle">{"Select features to include in your model training"}</p>
                </div>
                {
                    for self.features.iter().enumerate().map(|(index, feature)| html! {
                        <div class="list-row">
                            <div class="list-row">
                                <input
                                    type="checkbox"
                                    checked={feature.selected}
                                    onchange={link.callback(move |_| Msg::Toggle(index))}
                                />
                                <div>
                                    <h4>{feature.name}</h4>
                                    <p class="subtitle">
                                        <span class="badge">{feature.kind}</span>
                                        {format!(" Importance: {:.1}%", feature.importance * 100.0)}
                                    </p>
                                </div>
                            </div>
                            <div class="progress narrow">
                                <div
                                    class="progress-fill"
                                    style={format!("width: {:.0}%;", feature.importance * 100.0)}
                                />
                            </div>
                        </div>
                    })
                }
            </div>
        }
    }
}

fn generation_card() -> Html {
    html! {
        <div class="card">
            <div class="card-header">
                <h2><i class="material-icons">{"bolt"}</i>{"Automated Feature Generation"}</h2>
                <p class="subtitle">{"Configure automatic feature generation techniques"}</p>
            </div>
            {
                for AUTO_TECHNIQUES.iter().map(|(name, description, enabled)| html! {
                    <div class="list-row">
                        <div>
                            <h4>{*name}</h4>
                            <p class="subtitle">{*description}</p>
                        </div>
                        <input type="checkbox" checked={*enabled} />
                    </div>
                })
            }
            <button class="btn primary wide">
                <i class="material-icons">{"psychology"}</i>{"Generate Features"}
            </button>
        </div>
    }
}

fn reduction_card() -> Html {
    html! {
        <div class="card">
            <div class="card-header">
                <h2><i class="material-icons">{"trending_up"}</i>{"Dimensionality Reduction"}</h2>
                <p class="subtitle">{"Reduce feature dimensions while preserving information"}</p>
            </div>
            {
                for REDUCTIONS.iter().map(|(name, description, detail)| html! {
                    <div class="list-row column">
                        <div class="list-row">
                            <div>
                                <h4>{*name}</h4>
                                <p class="subtitle">{*description}</p>
                            </div>
                            <button class="btn">{"Apply"}</button>
                        </div>
                        <p class="hint">{*detail}</p>
                    </div>
                })
            }
        </div>
    }
}
