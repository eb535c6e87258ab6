//! Theme initialization and toggle.
//!
//! Reads the user's preference from `localStorage` and applies a `light` or
//! `dark` class to the `<html>` element. Toggle writes back to
//! `localStorage` and updates that class. Requires a browser environment;
//! outside it everything safely no-ops.

use crate::util::storage;

const STORAGE_KEY: &str = "theme";

/// Read the theme preference.
///
/// Returns `true` for dark mode: either the stored preference, or the system
/// `prefers-color-scheme` when nothing is stored.
pub fn read_preference() -> bool {
    match storage::load_raw(STORAGE_KEY).as_deref() {
        Some("dark") => true,
        Some("light") => false,
        _ => system_prefers_dark(),
    }
}

fn system_prefers_dark() -> bool {
    #[cfg(feature = "csr")]
    {
        web_sys::window()
            .and_then(|w| w.match_media("(prefers-color-scheme: dark)").ok().flatten())
            .map_or(false, |mq| mq.matches())
    }
    #[cfg(not(feature = "csr"))]
    {
        false
    }
}

/// Apply the theme class on the `<html>` element.
pub fn apply(dark: bool) {
    #[cfg(feature = "csr")]
    {
        let Some(el) = web_sys::window()
            .and_then(|w| w.document())
            .and_then(|doc| doc.document_element())
        else {
            return;
        };
        let classes = el.class_list();
        let _ = classes.remove_2("light", "dark");
        let _ = classes.add_1(if dark { "dark" } else { "light" });
    }
    #[cfg(not(feature = "csr"))]
    {
        let _ = dark;
    }
}

/// Toggle the theme and persist the new preference.
pub fn toggle(current_dark: bool) -> bool {
    let next = !current_dark;
    apply(next);
    storage::save_raw(STORAGE_KEY, if next { "dark" } else { "light" });
    next
}
