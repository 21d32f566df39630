//! Sliding top-sheet container used by the connection dialogs.
//!
//! The sheet is always in the DOM; visibility is toggled with the `show`
//! class. The class flip happens on a short timer so the CSS transition
//! fires even when the sheet was just rendered.

use uuid::Uuid;
use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsCast;
use yew::{html, Component, Context, Html, NodeRef, Properties};

pub struct TopSheet {
    id: String,
}

#[derive(Properties, PartialEq)]
pub struct TopSheetProps {
    #[prop_or_default]
    pub children: Html,
    pub node_ref: NodeRef,
}

impl Component for TopSheet {
    type Message = ();
    type Properties = TopSheetProps;

    fn create(_ctx: &Context<Self>) -> Self {
        Self {
            id: format!("sheet-{}", Uuid::new_v4()),
        }
    }

    fn view(&self, ctx: &Context<Self>) -> Html {
        html! {
            <div class="top-sheet" id={self.id.clone()} ref={ctx.props().node_ref.clone()}>
                { ctx.props().children.clone() }
            </div>
        }
    }
}

pub fn open_sheet(sheet_ref: &NodeRef) {
    toggle_sheet(sheet_ref, true);
}

pub fn close_sheet(sheet_ref: &NodeRef) {
    toggle_sheet(sheet_ref, false);
}

fn toggle_sheet(sheet_ref: &NodeRef, show: bool) {
    if let Some(sheet) = sheet_ref.cast::<web_sys::HtmlElement>() {
        let handler = Closure::<dyn FnMut()>::new(move || {
            let class_list = sheet.class_list();
            let _ = if show {
                class_list.add_1("show")
            } else {
                class_list.remove_1("show")
            };
        });
        if let Some(window) = web_sys::window() {
            window
                .set_timeout_with_callback_and_timeout_and_arguments_0(
                    handler.as_ref().unchecked_ref(),
                    50,
                )
                .ok();
        }
        handler.forget();
    }
}
