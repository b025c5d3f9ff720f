// Browser storage helpers for the demo

/// Read a `localStorage` item, treating every failure as absent.
pub fn stored_item(key: &str) -> Option<String> {
    let win = web_sys::window()?;
    let store = win.local_storage().ok().flatten()?;
    store.get_item(key).ok().flatten()
}
