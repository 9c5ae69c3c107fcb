//! Durable client preferences kept in the origin's local storage.
//!
//! Values are stored raw (`fr`, not `"fr"`) so pages that read the same key
//! without JSON decoding see the same value.

use controller::Language;
use gloo_storage::{LocalStorage, Storage};
use log::warn;

pub fn load_language(key: &str) -> Option<Language> {
    let stored = LocalStorage::raw().get_item(key).ok().flatten()?;
    let language = Language::from_code(&stored);
    if language.is_none() {
        warn!("ignoring unknown stored language {stored:?}");
    }
    language
}

pub fn save_language(key: &str, code: &str) {
    if LocalStorage::raw().set_item(key, code).is_err() {
        warn!("could not persist language {code}");
    }
}
