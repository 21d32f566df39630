//! Collaboration hub: shared projects, team members, model comments,
//! notifications, and the activity feed.

use yew::prelude::*;

const PROJECTS: [(&str, &str, u32, u32, u32, &str, &str, &str); 3] = [
    (
        "Customer Analytics Pipeline",
        "End-to-end customer behavior analysis",
        4, 3, 2, "active", "2 hours ago", "John Doe",
    ),
    (
        "Sales Forecasting Initiative",
        "Quarterly sales prediction models",
        3, 2, 1, "active", "1 day ago", "Jane Smith",
    ),
    (
        "Fraud Detection Research",
        "Advanced fraud prevention algorithms",
        5, 4, 3, "completed", "1 week ago", "Mike Johnson",
    ),
];

const TEAM: [(&str, &str, &str, &str, &str, u32); 4] = [
    ("John Doe", "john.doe@company.com", "Admin", "online", "Active now", 3),
    ("Jane Smith", "jane.smith@company.com", "Analyst", "online", "5 minutes ago", 2),
    ("Mike Johnson", "mike.johnson@company.com", "Engineer", "offline", "2 hours ago", 4),
    ("Sarah Wilson", "sarah.wilson@company.com", "Viewer", "away", "30 minutes ago", 1),
];

const COMMENTS: [(&str, &str, &str, &str, u32); 3] = [
    (
        "John Doe",
        "Great results on the XGBoost model! The accuracy improvement is significant.",
        "2 hours ago",
        "Customer Churn XGBoost v2.1",
        3,
    ),
    (
        "Jane Smith",
        "I've updated the feature engineering pipeline. The new categorical encoding is showing promising results.",
        "4 hours ago",
        "Sales Forecast LightGBM v1.3",
        5,
    ),
    (
        "Mike Johnson",
        "Should we consider ensemble methods for the fraud detection model? I think we can push the F1 score higher.",
        "1 day ago",
        "Fraud Detection CatBoost v1.0",
        2,
    ),
];

const NOTIFICATIONS: [(&str, &str, &str, bool); 4] = [
    (
        "Model training completed",
        "XGBoost training finished with 94.2% accuracy",
        "5 minutes ago",
        false,
    ),
    (
        "New comment on your model",
        "Jane Smith commented on Sales Forecast Model",
        "1 hour ago",
        false,
    ),
    (
        "New team member added",
        "Sarah Wilson joined Customer Analytics Pipeline",
        "2 hours ago",
        true,
    ),
    (
        "Model deployed successfully",
        "Customer Churn API is now live in production",
        "3 hours ago",
        true,
    ),
];

const ACTIVITY: [(&str, &str, &str, &str); 4] = [
    ("John Doe", "deployed model", "Customer Churn XGBoost v2.1", "2 hours ago"),
    ("Jane Smith", "updated dataset", "Sales Historical Data", "4 hours ago"),
    ("Mike Johnson", "started training", "Fraud Detection Model v2.0", "6 hours ago"),
    ("Sarah Wilson", "joined project", "Customer Analytics Pipeline", "8 hours ago"),
];

pub enum Msg {
    SetTab(&'static str),
    CommentChanged(String),
}

pub struct Collaboration {
    tab: &'static str,
    comment: String,
}

impl Component for Collaboration {
    type Message = Msg;
    type Properties = ();

    fn create(_ctx: &Context<Self>) -> Self {
        Self {
            tab: "projects",
            comment: String::new(),
        }
    }

    fn update(&mut self, _ctx: &Context<Self>, msg: Self::Message) -> bool {
        match msg {
            Msg::SetTab(tab) => {
                self.tab = tab;
                true
            }
            Msg::CommentChanged(comment) => {
                self.comment = comment;
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
                        <h1>{"Collaboration Hub"}</h1>
                        <p class="subtitle">{"Collaborate with your team on ML projects and models"}</p>
                    </div>
                    <button class="btn primary">
                        <i class="material-icons">{"person_add"}</i>{"Invite Team Member"}
                    </button>
                </div>

                <div class="tab-bar">
                    { tab("projects", "Projects") }
                    { tab("team", "Team Members") }
                    { tab("comments", "Comments") }
                    { tab("notifications", "Notifications") }
                    { tab("activity", "Activity Feed") }
                </div>

                {
                    match self.tab {
                        "team" => team_card(),
                        "comments" => self.comments_view(ctx),
                        "notifications" => notifications_card(),
                        "activity" => activity_card(),
                        _ => projects_grid(),
                    }
                }
            </div>
        }
    }
}

fn projects_grid() -> Html {
    html! {
        <div class="card-grid three-columns">
            {
                for PROJECTS.iter().map(|(name, description, members, models, datasets, status, activity, owner)| html! {
                    <div class="card">
                        <div class="card-header">
                            <h2>{*name}</h2>
                            {
                                if *status == "active" {
                                    html! { <span class="badge available">{"active"}</span> }
                                } else {
                                    html! { <span class="badge">{"completed"}</span> }
                                }
                            }
                        </div>
                        <p class="subtitle">{*description}</p>
                        <div class="card-grid three-columns">
                            <div class="card stat">
                                <p class="stat-value">{*members}</p>
                                <p class="hint">{"Members"}</p>
                            </div>
                            <div class="card stat">
                                <p class="stat-value">{*models}</p>
                                <p class="hint">{"Models"}</p>
                            </div>
                            <div class="card stat">
                                <p class="stat-value">{*datasets}</p>
                                <p class="hint">{"Datasets"}</p>
                            </div>
                        </div>
                        <div class="list-row">
                            <span class="hint">{format!("Owner: {owner}")}</span>
                            <span class="hint">{*activity}</span>
                        </div>
                        <button class="btn wide">
                            <i class="material-icons">{"folder_open"}</i>{"Open Project"}
                        </button>
                    </div>
                })
            }
        </div>
    }
}

fn presence_class(status: &str) -> &'static str {
    match status {
        "online" => "status-valid",
        "away" => "status-warning",
        _ => "status-invalid",
    }
}

fn team_card() -> Html {
    html! {
        <div class="card">
            <div class="card-header">
                <h2><i class="material-icons">{"group"}</i>{"Team Members"}</h2>
                <p class="subtitle">{"Manage team members and their roles"}</p>
            </div>
            {
                for TEAM.iter().map(|(name, email, role, status, last_seen, projects)| html! {
                    <div class="list-row">
                        <div class="list-row">
                            <i class={classes!("material-icons", presence_class(status))}>{"account_circle"}</i>
                            <div>
                                <h4>{*name}</h4>
                                <p class="subtitle">{*email}</p>
                                <p class="hint">{*last_seen}</p>
                            </div>
                        </div>
                        <div class="list-row-end">
                            <span class="badge">{*role}</span>
                            <span class="hint">{format!("{projects} projects")}</span>
                        </div>
                    </div>
                })
            }
        </div>
    }
}

impl Collaboration {
    fn comments_view(&self, ctx: &Context<Self>) -> Html {
        let link = ctx.link();
        html! {
            <div class="card-grid two-columns">
                <div class="card">
                    <div class="card-header">
                        <h2><i class="material-icons">{"chat"}</i>{"Recent Comments"}</h2>
                        <p class="subtitle">{"Latest comments on models and results"}</p>
                    </div>
                    {
                        for COMMENTS.iter().map(|(author, content, timestamp, model, likes)| html! {
                            <div class="list-row column">
                                <div class="list-row">
                                    <span>{*author}</span>
                                    <span class="hint">{*timestamp}</span>
                                </div>
                                <p class="subtitle">{*content}</p>
                                <div class="list-row">
                                    <span class="badge">{*model}</span>
                                    <span class="hint">
                                        <i class="material-icons">{"star"}</i>{*likes}
                                    </span>
                                </div>
                            </div>
                        })
                    }
                </div>

                <div class="card">
                    <div class="card-header">
                        <h2><i class="material-icons">{"chat"}</i>{"Add Comment"}</h2>
                        <p class="subtitle">{"Share your thoughts on models and results"}</p>
                    </div>
                    <div class="form-field wide">
                        <label>{"Comment"}</label>
                        <textarea
                            rows="4"
                            placeholder="Share your insights, suggestions, or questions..."
                            value={self.comment.clone()}
                            oninput={link.callback(|event: InputEvent| {
                                let area: web_sys::HtmlTextAreaElement = event.target_unchecked_into();
                                Msg::CommentChanged(area.value())
                            })}
                        />
                    </div>
                    <button class="btn primary wide" disabled={self.comment.trim().is_empty()}>
                        <i class="material-icons">{"chat"}</i>{"Post Comment"}
                    </button>
                </div>
            </div>
        }
    }
}

fn notifications_card() -> Html {
    html! {
        <div class="card">
            <div class="card-header">
                <h2><i class="material-icons">{"notifications"}</i>{"Notifications"}</h2>
                <p class="subtitle">{"Stay updated with team activities and system events"}</p>
            </div>
            {
                for NOTIFICATIONS.iter().map(|(title, description, timestamp, read)| html! {
                    <div class={classes!("list-row", "column", (!read).then_some("unread"))}>
                        <h4>{*title}</h4>
                        <p class="subtitle">{*description}</p>
                        <p class="hint">{*timestamp}</p>
                    </div>
                })
            }
        </div>
    }
}

fn activity_card() -> Html {
    html! {
        <div class="card">
            <div class="card-header">
                <h2><i class="material-icons">{"monitor_heart"}</i>{"Activity Feed"}</h2>
                <p class="subtitle">{"Real-time feed of team activities and system events"}</p>
            </div>
            {
                for ACTIVITY.iter().map(|(user, action, target, timestamp)| html! {
                    <div class="list-row">
                        <p>
                            <span class="column-name">{*user}</span>
                            {format!(" {action} ")}
                            <span class="column-name">{*target}</span>
                        </p>
                        <span class="hint">{*timestamp}</span>
                    </div>
                })
            }
        </div>
    }
}
