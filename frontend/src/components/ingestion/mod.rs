//! Data-ingestion page: root module wiring the Yew `Component`
//! implementation with submodules for state, messages, update logic, and
//! view rendering.

use yew::prelude::*;

mod messages;
mod props;
mod state;
mod update;
mod view;

pub use messages::Msg;
pub use props::IngestionProps;
pub use state::IngestionPage;

use crate::api::ApiClient;

impl Component for IngestionPage {
    type Message = Msg;
    type Properties = IngestionProps;

    fn create(ctx: &Context<Self>) -> Self {
        IngestionPage::new(ApiClient::new(ctx.props().api_mode))
    }

    fn update(&mut self, ctx: &Context<Self>, msg: Self::Message) -> bool {
        update::update(self, ctx, msg)
    }

    fn view(&self, ctx: &Context<Self>) -> Html {
        view::view(self, ctx)
    }
}
