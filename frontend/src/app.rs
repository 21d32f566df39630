//! Application shell: sidebar navigation plus the active page.

use yew::prelude::*;

use crate::components::ingestion::IngestionPage;
use crate::pages::{
    Collaboration, Dashboard, Deployment, Eda, Evaluation, Explainability, FeatureEngineering,
    ModelManagement, ModelTraining, Preprocessing,
};

#[derive(Clone, Copy, PartialEq, Eq)]
pub enum Page {
    Dashboard,
    Ingestion,
    Preprocessing,
    Eda,
    FeatureEngineering,
    ModelTraining,
    Evaluation,
    Explainability,
    ModelManagement,
    Deployment,
    Collaboration,
}

impl Page {
    const ALL: [Page; 11] = [
        Page::Dashboard,
        Page::Ingestion,
        Page::Preprocessing,
        Page::Eda,
        Page::FeatureEngineering,
        Page::ModelTraining,
        Page::Evaluation,
        Page::Explainability,
        Page::ModelManagement,
        Page::Deployment,
        Page::Collaboration,
    ];

    fn label(self) -> &'static str {
        match self {
            Page::Dashboard => "Dashboard",
            Page::Ingestion => "Data Ingestion",
            Page::Preprocessing => "Preprocessing",
            Page::Eda => "EDA",
            Page::FeatureEngineering => "Feature Engineering",
            Page::ModelTraining => "Model Training",
            Page::Evaluation => "Evaluation",
            Page::Explainability => "Explainability",
            Page::ModelManagement => "Model Management",
            Page::Deployment => "Deployment",
            Page::Collaboration => "Collaboration",
        }
    }

    fn icon(self) -> &'static str {
        match self {
            Page::Dashboard => "dashboard",
            Page::Ingestion => "upload_file",
            Page::Preprocessing => "cleaning_services",
            Page::Eda => "insights",
            Page::FeatureEngineering => "build",
            Page::ModelTraining => "psychology",
            Page::Evaluation => "track_changes",
            Page::Explainability => "visibility",
            Page::ModelManagement => "folder_open",
            Page::Deployment => "rocket_launch",
            Page::Collaboration => "group",
        }
    }
}

pub enum Msg {
    Navigate(Page),
}

pub struct App {
    page: Page,
}

impl Component for App {
    type Message = Msg;
    type Properties = ();

    fn create(_ctx: &Context<Self>) -> Self {
        Self {
            page: Page::Dashboard,
        }
    }

    fn update(&mut self, _ctx: &Context<Self>, msg: Self::Message) -> bool {
        let Msg::Navigate(page) = msg;
        let changed = self.page != page;
        self.page = page;
        changed
    }

    fn view(&self, ctx: &Context<Self>) -> Html {
        let link = ctx.link();
        html! {
            <div class="workspace">
                <nav class="sidebar">
                    <div class="sidebar-brand">
                        <i class="material-icons">{"auto_awesome"}</i>
                        <span>{"AutoML Pro"}</span>
                    </div>
                    {
                        for Page::ALL.iter().map(|&page| html! {
                            <button
                                class={classes!("nav-item", (self.page == page).then_some("active"))}
                                onclick={link.callback(move |_| Msg::Navigate(page))}
                            >
                                <i class="material-icons">{page.icon()}</i>
                                <span>{page.label()}</span>
                            </button>
                        })
                    }
                </nav>
                <main class="content">
                    {
                        match self.page {
                            Page::Dashboard => html! { <Dashboard /> },
                            Page::Ingestion => html! { <IngestionPage /> },
                            Page::Preprocessing => html! { <Preprocessing /> },
                            Page::Eda => html! { <Eda /> },
                            Page::FeatureEngineering => html! { <FeatureEngineering /> },
                            Page::ModelTraining => html! { <ModelTraining /> },
                            Page::Evaluation => html! { <Evaluation /> },
                            Page::Explainability => html! { <Explainability /> },
                            Page::ModelManagement => html! { <ModelManagement /> },
                            Page::Deployment => html! { <Deployment /> },
                            Page::Collaboration => html! { <Collaboration /> },
                        }
                    }
                </main>
            </div>
        }
    }
}
