//! Database connection dialog.
//!
//! Collects host/port/database/username/password plus an optional query,
//! builds the typed credentials, and hands the connection result back to
//! the ingestion page through `on_connected`. A failed connection only
//! shows a toast; the page's current preview is never touched.

use common::error::ApiError;
use common::model::{
    DatabaseCredentials, ExternalSourceRequest, ExternalSourceResult, SourceCredentials,
    SourceType,
};
use wasm_bindgen_futures::spawn_local;
use yew::prelude::*;

use crate::api::ApiClient;
use crate::helpers::{show_error, show_toast};
use crate::top_sheet::{close_sheet, TopSheet};

#[derive(Clone, Copy)]
pub enum Field {
    Host,
    Port,
    Database,
    Username,
    Password,
    Query,
}

pub enum Msg {
    Select(SourceType),
    Back,
    Edit(Field, String),
    Connect,
    Finished(Result<ExternalSourceResult, ApiError>),
    Cancel,
}

#[derive(Properties, PartialEq, Clone)]
pub struct DataConnectorProps {
    pub sheet_ref: NodeRef,
    pub api: ApiClient,
    pub on_connected: Callback<ExternalSourceResult>,
}

#[derive(Default)]
struct ConnectionForm {
    host: String,
    port: String,
    database: String,
    username: String,
    password: String,
    query: String,
}

pub struct DataConnectorDialog {
    selected: Option<SourceType>,
    form: ConnectionForm,
    connecting: bool,
}

impl DataConnectorDialog {
    fn reset(&mut self) {
        self.selected = None;
        self.form = ConnectionForm::default();
        self.connecting = false;
    }
}

impl Component for DataConnectorDialog {
    type Message = Msg;
    type Properties = DataConnectorProps;

    fn create(_ctx: &Context<Self>) -> Self {
        Self {
            selected: None,
            form: ConnectionForm::default(),
            connecting: false,
        }
    }

    fn update(&mut self, ctx: &Context<Self>, msg: Self::Message) -> bool {
        match msg {
            Msg::Select(kind) => {
                self.selected = Some(kind);
                self.form.port = kind.default_port().unwrap_or_default().to_string();
                true
            }
            Msg::Back => {
                self.selected = None;
                true
            }
            Msg::Edit(field, value) => {
                match field {
                    Field::Host => self.form.host = value,
                    Field::Port => self.form.port = value,
                    Field::Database => self.form.database = value,
                    Field::Username => self.form.username = value,
                    Field::Password => self.form.password = value,
                    Field::Query => self.form.query = value,
                }
                true
            }
            Msg::Connect => {
                let Some(kind) = self.selected else {
                    return false;
                };
                if self.connecting {
                    return false;
                }
                self.connecting = true;

                let query = self.form.query.trim();
                let credentials = SourceCredentials::Database(DatabaseCredentials {
                    host: self.form.host.clone(),
                    port: self.form.port.clone(),
                    database: self.form.database.clone(),
                    username: self.form.username.clone(),
                    password: self.form.password.clone(),
                    query: (!query.is_empty()).then(|| query.to_string()),
                });
                let request = ExternalSourceRequest::new(kind, &credentials);
                let api = ctx.props().api.clone();
                let link = ctx.link().clone();
                spawn_local(async move {
                    link.send_message(Msg::Finished(api.connect_external_source(&request).await));
                });
                true
            }
            Msg::Finished(Ok(result)) => {
                show_toast(&format!("Connected to {} successfully.", result.source_type));
                ctx.props().on_connected.emit(result);
                self.reset();
                close_sheet(&ctx.props().sheet_ref);
                true
            }
            Msg::Finished(Err(err)) => {
                self.connecting = false;
                show_error(&format!("Connection failed: {err}"));
                true
            }
            Msg::Cancel => {
                self.reset();
                close_sheet(&ctx.props().sheet_ref);
                true
            }
        }
    }

    fn view(&self, ctx: &Context<Self>) -> Html {
        html! {
            <TopSheet node_ref={ctx.props().sheet_ref.clone()}>
                <div class="dialog">
                    <div class="dialog-header">
                        <h2>{"Connect to Database"}</h2>
                        <p class="subtitle">{"Choose a database connector and provide connection details"}</p>
                    </div>
                    {
                        match self.selected {
                            None => self.view_selection(ctx),
                            Some(kind) => self.view_form(ctx, kind),
                        }
                    }
                </div>
            </TopSheet>
        }
    }
}

impl DataConnectorDialog {
    fn view_selection(&self, ctx: &Context<Self>) -> Html {
        let link = ctx.link();
        let connectors = [
            (Some(SourceType::PostgreSql), "PostgreSQL", "Connect to PostgreSQL database"),
            (Some(SourceType::MySql), "MySQL", "Connect to MySQL database"),
            (Some(SourceType::MongoDb), "MongoDB", "Connect to MongoDB database"),
            (None, "Redis", "Connect to Redis cache"),
        ];
        html! {
            <div class="card-grid two-columns">
                {
                    for connectors.iter().map(|(kind, name, description)| {
                        let onclick = kind.map(|kind| link.callback(move |_| Msg::Select(kind)));
                        html! {
                            <div
                                class={classes!("card", "selectable", onclick.is_none().then_some("disabled"))}
                                onclick={onclick}
                            >
                                <h3><i class="material-icons">{"storage"}</i>{*name}</h3>
                                <p class="subtitle">{*description}</p>
                                {
                                    if kind.is_some() {
                                        html! { <span class="badge available">{"Available"}</span> }
                                    } else {
                                        html! { <span class="badge coming-soon">{"Coming Soon"}</span> }
                                    }
                                }
                            </div>
                        }
                    })
                }
                <div class="dialog-actions">
                    <button class="btn" onclick={link.callback(|_| Msg::Cancel)}>{"Cancel"}</button>
                </div>
            </div>
        }
    }

    fn view_form(&self, ctx: &Context<Self>, kind: SourceType) -> Html {
        let link = ctx.link();
        let input = |label: &'static str,
                     placeholder: &'static str,
                     value: String,
                     kind: &'static str,
                     field: Field| {
            html! {
                <div class="form-field">
                    <label>{label}</label>
                    <input
                        type={kind}
                        placeholder={placeholder}
                        value={value}
                        oninput={link.callback(move |event: InputEvent| {
                            let input: web_sys::HtmlInputElement = event.target_unchecked_into();
                            Msg::Edit(field, input.value())
                        })}
                    />
                </div>
            }
        };
        let can_connect =
            !self.connecting && !self.form.host.is_empty() && !self.form.database.is_empty();
        html! {
            <div class="dialog-body">
                <div class="dialog-subheader">
                    <button class="btn" onclick={link.callback(|_| Msg::Back)}>{"← Back"}</button>
                    <h3>{format!("Configure {} Connection", kind.label())}</h3>
                </div>
                <div class="form-grid">
                    { input("Host", "localhost", self.form.host.clone(), "text", Field::Host) }
                    { input("Port", kind.default_port().unwrap_or_default(), self.form.port.clone(), "text", Field::Port) }
                    { input("Database Name", "my_database", self.form.database.clone(), "text", Field::Database) }
                    { input("Username", "username", self.form.username.clone(), "text", Field::Username) }
                    { input("Password", "password", self.form.password.clone(), "password", Field::Password) }
                    <div class="form-field wide">
                        <label>{"SQL Query (Optional)"}</label>
                        <textarea
                            rows="3"
                            placeholder="SELECT * FROM table_name LIMIT 1000"
                            value={self.form.query.clone()}
                            oninput={link.callback(|event: InputEvent| {
                                let area: web_sys::HtmlTextAreaElement = event.target_unchecked_into();
                                Msg::Edit(Field::Query, area.value())
                            })}
                        />
                        <p class="subtitle">{"Leave empty to browse tables, or provide a SELECT query to import specific data"}</p>
                    </div>
                </div>
                <div class="dialog-actions">
                    <button class="btn" onclick={link.callback(|_| Msg::Cancel)}>{"Cancel"}</button>
                    <button
                        class="btn primary"
                        disabled={!can_connect}
                        onclick={link.callback(|_| Msg::Connect)}
                    >
                        { if self.connecting { "Connecting..." } else { "Connect" } }
                    </button>
                </div>
            </div>
        }
    }
}
