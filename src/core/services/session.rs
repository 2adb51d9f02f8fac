//! Session token persistence.
//!
//! One string token under a fixed local-storage key. All access is
//! best-effort: a missing Storage object behaves like an absent token.

/// Fixed storage key for the bearer token.
pub const TOKEN_KEY: &str = "agiliza_access_token";

/// Read the stored session token, if any.
pub fn load_token() -> Option<String> {
    let window = web_sys::window()?;
    let storage = window.local_storage().ok().flatten()?;
    storage.get_item(TOKEN_KEY).ok().flatten()
}

/// Persist the session token.
pub fn store_token(token: &str) {
    if let Some(window) = web_sys::window() {
        if let Ok(Some(storage)) = window.local_storage() {
            let _ = storage.set_item(TOKEN_KEY, token);
        }
    }
}

/// Remove the stored session token. Called on logout and whenever the
/// backend rejects a stored token.
pub fn clear_token() {
    if let Some(window) = web_sys::window() {
        if let Ok(Some(storage)) = window.local_storage() {
            let _ = storage.remove_item(TOKEN_KEY);
        }
    }
}
