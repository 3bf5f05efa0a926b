use client::session::{Session, TokenStorage};
use web_sys::window;

const SESSION_KEY: &str = "fleet_admin_session";

fn get_session_storage() -> Option<web_sys::Storage> {
    window()?.session_storage().ok()?
}

/// Keeps the session in `sessionStorage`, so it survives a reload but not
/// the closing of the browser tab.
pub struct SessionTokenStorage;

impl TokenStorage for SessionTokenStorage {
    fn load(&self) -> Option<Session> {
        let raw = get_session_storage()?.get_item(SESSION_KEY).ok()??;
        match serde_json::from_str(&raw) {
            Ok(session) => Some(session),
            Err(e) => {
                log::warn!("discarding unreadable stored session: {}", e);
                self.clear();
                None
            }
        }
    }

    fn save(&self, session: &Session) {
        let Some(storage) = get_session_storage() else {
            return;
        };
        match serde_json::to_string(session) {
            Ok(raw) => {
                let _ = storage.set_item(SESSION_KEY, &raw);
            }
            Err(e) => log::error!("failed to store session: {}", e),
        }
    }

    fn clear(&self) {
        if let Some(storage) = get_session_storage() {
            let _ = storage.remove_item(SESSION_KEY);
        }
    }
}
