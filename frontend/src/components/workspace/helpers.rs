//! Window-level primitives used by the workspace effects and view.
//!
//! Each helper degrades to a logged warning when the browser API is missing
//! instead of failing the page.

use gloo_file::{Blob, ObjectUrl};
use log::warn;
use wasm_bindgen::JsCast;
use web_sys::{File, FileList, HtmlAnchorElement};

pub fn alert(message: &str) {
    if let Some(window) = web_sys::window() {
        window.alert_with_message(message).ok();
    }
}

/// Blocking confirmation prompt. A missing window counts as "no".
pub fn confirm(prompt: &str) -> bool {
    web_sys::window()
        .and_then(|window| window.confirm_with_message(prompt).ok())
        .unwrap_or(false)
}

pub fn open_in_new_tab(url: &str) {
    let opened = web_sys::window()
        .and_then(|window| window.open_with_url_and_target(url, "_blank").ok())
        .flatten();
    if opened.is_none() {
        warn!("could not open {url} in a new tab");
    }
}

/// Offers `bytes` to the user as a download named `filename`.
pub fn save_blob(filename: &str, bytes: &[u8]) {
    let Some(document) = web_sys::window().and_then(|window| window.document()) else {
        warn!("no document to save {filename} from");
        return;
    };
    let Some(body) = document.body() else {
        return;
    };
    let anchor = match document
        .create_element("a")
        .ok()
        .and_then(|element| element.dyn_into::<HtmlAnchorElement>().ok())
    {
        Some(anchor) => anchor,
        None => {
            warn!("could not create download link for {filename}");
            return;
        }
    };

    // Revoked when `url` drops at the end of this function.
    let url = ObjectUrl::from(Blob::new_with_options(bytes, Some("application/pdf")));
    anchor.set_href(&url);
    anchor.set_download(filename);
    anchor.style().set_property("display", "none").ok();
    if body.append_child(&anchor).is_ok() {
        anchor.click();
        anchor.remove();
    }
}

pub fn files_from_list(list: Option<FileList>) -> Vec<File> {
    let Some(list) = list else {
        return Vec::new();
    };
    (0..list.length()).filter_map(|index| list.get(index)).collect()
}
