//! Browser glue shared across pages: toast notifications, the current
//! calendar date, and client-side file downloads.

use gloo_console::error;
use wasm_bindgen::JsCast;
use web_sys::HtmlElement;

enum ToastKind {
    Info,
    Error,
}

/// Shows a temporary notification at the bottom of the screen.
pub fn show_toast(message: &str) {
    toast(message, ToastKind::Info);
}

/// Shows an error notification. Failure reporting in this app never goes
/// further than this: the page always stays usable.
pub fn show_error(message: &str) {
    error!(message.to_string());
    toast(message, ToastKind::Error);
}

fn toast(message: &str, kind: ToastKind) {
    if let Some(document) = web_sys::window().and_then(|w| w.document()) {
        if let (Ok(node), Some(body)) = (document.create_element("div"), document.body()) {
            node.set_text_content(Some(message));
            let toast: HtmlElement = node.unchecked_into();
            let style = toast.style();
            style.set_property("position", "fixed").ok();
            style.set_property("bottom", "20px").ok();
            style.set_property("left", "50%").ok();
            style.set_property("transform", "translateX(-50%)").ok();
            let background = match kind {
                ToastKind::Info => "rgba(0, 0, 0, 0.85)",
                ToastKind::Error => "rgba(179, 38, 30, 0.95)",
            };
            style.set_property("background", background).ok();
            style.set_property("color", "#fff").ok();
            style.set_property("padding", "10px 20px").ok();
            style.set_property("border-radius", "4px").ok();
            style.set_property("z-index", "10000").ok();
            style.set_property("font-size", "14px").ok();

            if body.append_child(&toast).is_ok() {
                wasm_bindgen_futures::spawn_local(async move {
                    gloo_timers::future::TimeoutFuture::new(3000).await;
                    if let Some(parent) = toast.parent_node() {
                        parent.remove_child(&toast).ok();
                    }
                });
            }
        }
    }
}

/// Current date as `YYYY-MM-DD`, UTC. Export filenames use the calendar
/// date as an ISO string would render it, not the local day.
pub fn today_ymd() -> String {
    let now = js_sys::Date::new_0();
    format!(
        "{:04}-{:02}-{:02}",
        now.get_utc_full_year(),
        now.get_utc_month() + 1,
        now.get_utc_date()
    )
}

/// Saves `contents` as a client-side file download via a Blob object URL
/// and a synthetic anchor click.
pub fn save_text_file(contents: &str, filename: &str) {
    let result = (|| -> Result<(), wasm_bindgen::JsValue> {
        let parts = js_sys::Array::of1(&contents.into());
        let options = web_sys::BlobPropertyBag::new();
        options.set_type("text/csv;charset=utf-8;");
        let blob = web_sys::Blob::new_with_str_sequence_and_options(&parts, &options)?;
        let url = web_sys::Url::create_object_url_with_blob(&blob)?;

        let document = web_sys::window()
            .and_then(|w| w.document())
            .ok_or_else(|| wasm_bindgen::JsValue::from_str("no document"))?;
        let anchor: web_sys::HtmlAnchorElement =
            document.create_element("a")?.unchecked_into();
        anchor.set_href(&url);
        anchor.set_download(filename);
        anchor.click();
        web_sys::Url::revoke_object_url(&url)?;
        Ok(())
    })();
    if result.is_err() {
        error!(format!("could not save {filename}"));
    }
}
