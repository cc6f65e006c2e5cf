use contracts::auth::User;
use serde::{Deserialize, Serialize};

const SESSION_KEY: &str = "auth-storage";

/// The subset of auth state that survives a reload. Session-scoped: the
/// snapshot dies with the browser tab, and a restored token is not trusted
/// until it has been re-validated against the backend.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct PersistedSession {
    pub user: Option<User>,
    pub token: Option<String>,
    pub is_authenticated: bool,
}

#[cfg(target_arch = "wasm32")]
fn session_storage() -> Option<web_sys::Storage> {
    web_sys::window()?.session_storage().ok()?
}

/// Restore the persisted session, if any.
pub fn load_session() -> Option<PersistedSession> {
    #[cfg(target_arch = "wasm32")]
    {
        let raw = session_storage()?.get_item(SESSION_KEY).ok()??;
        serde_json::from_str(&raw).ok()
    }
    #[cfg(not(target_arch = "wasm32"))]
    {
        None
    }
}

/// Persist the session snapshot.
pub fn save_session(session: &PersistedSession) {
    #[cfg(target_arch = "wasm32")]
    if let Some(storage) = session_storage() {
        if let Ok(raw) = serde_json::to_string(session) {
            let _ = storage.set_item(SESSION_KEY, &raw);
        }
    }
    #[cfg(not(target_arch = "wasm32"))]
    let _ = session;
}

/// Drop the persisted session.
pub fn clear_session() {
    #[cfg(target_arch = "wasm32")]
    if let Some(storage) = session_storage() {
        let _ = storage.remove_item(SESSION_KEY);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_snapshot_round_trip() {
        let session = PersistedSession {
            user: None,
            token: Some("t1".into()),
            is_authenticated: true,
        };
        let raw = serde_json::to_string(&session).unwrap();
        let restored: PersistedSession = serde_json::from_str(&raw).unwrap();
        assert_eq!(restored, session);
    }
}
