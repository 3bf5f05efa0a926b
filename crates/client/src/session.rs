//! Auth session held for the lifetime of the page.

use contracts::system::auth::UserInfo;
use serde::{Deserialize, Serialize};
use std::cell::RefCell;
use std::rc::Rc;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Session {
    pub token: String,
    pub user: Option<UserInfo>,
}

/// Where the session survives a page reload (browser session storage in
/// production).
pub trait TokenStorage {
    fn load(&self) -> Option<Session>;
    fn save(&self, session: &Session);
    fn clear(&self);
}

/// Storage that forgets everything on reload
#[derive(Debug, Default)]
pub struct MemoryTokenStorage {
    session: RefCell<Option<Session>>,
}

impl TokenStorage for MemoryTokenStorage {
    fn load(&self) -> Option<Session> {
        self.session.borrow().clone()
    }

    fn save(&self, session: &Session) {
        *self.session.borrow_mut() = Some(session.clone());
    }

    fn clear(&self) {
        *self.session.borrow_mut() = None;
    }
}

/// Explicit session store shared by reference between the HTTP client and
/// the UI. Set on login, cleared on logout or on any 401.
#[derive(Clone)]
pub struct SessionStore {
    current: Rc<RefCell<Option<Session>>>,
    storage: Rc<dyn TokenStorage>,
}

impl SessionStore {
    /// Restores a previously saved session, if any
    pub fn new(storage: Rc<dyn TokenStorage>) -> Self {
        let restored = storage.load();
        if restored.is_some() {
            log::debug!("session restored from storage");
        }
        Self {
            current: Rc::new(RefCell::new(restored)),
            storage,
        }
    }

    pub fn in_memory() -> Self {
        Self::new(Rc::new(MemoryTokenStorage::default()))
    }

    pub fn set(&self, session: Session) {
        self.storage.save(&session);
        *self.current.borrow_mut() = Some(session);
    }

    pub fn clear(&self) {
        self.storage.clear();
        *self.current.borrow_mut() = None;
    }

    pub fn token(&self) -> Option<String> {
        self.current.borrow().as_ref().map(|s| s.token.clone())
    }

    pub fn user(&self) -> Option<UserInfo> {
        self.current.borrow().as_ref().and_then(|s| s.user.clone())
    }

    pub fn is_authenticated(&self) -> bool {
        self.current.borrow().is_some()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_set_persists_and_clear_forgets() {
        let storage = Rc::new(MemoryTokenStorage::default());
        let store = SessionStore::new(storage.clone());
        assert!(!store.is_authenticated());

        store.set(Session {
            token: "abc".into(),
            user: None,
        });
        assert_eq!(store.token().as_deref(), Some("abc"));

        // A new store over the same storage picks the session up again
        let reloaded = SessionStore::new(storage.clone());
        assert_eq!(reloaded.token().as_deref(), Some("abc"));

        store.clear();
        assert!(store.token().is_none());
        assert!(storage.load().is_none());
    }
}
