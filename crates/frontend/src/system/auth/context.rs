use client::ApiClient;
use contracts::auth::{AuthData, RegisterRequest};
use leptos::prelude::*;
use leptos::task::spawn_local;

use super::storage::{self, PersistedSession};

/// Session state container: the cached user, the bearer token and the
/// authenticated flag, plus the actions that drive them.
///
/// Constructed once at app start with the API client injected, provided to
/// the tree via context. Token presence and `is_authenticated` move
/// together: any rejected session validation clears both.
#[derive(Clone)]
pub struct AuthStore {
    api: ApiClient,
    pub user: RwSignal<Option<contracts::auth::User>>,
    pub token: RwSignal<Option<String>>,
    pub is_authenticated: RwSignal<bool>,
    pub loading: RwSignal<bool>,
    pub error: RwSignal<Option<String>>,
}

impl AuthStore {
    pub fn new(api: ApiClient) -> Self {
        Self {
            api,
            user: RwSignal::new(None),
            token: RwSignal::new(None),
            is_authenticated: RwSignal::new(false),
            loading: RwSignal::new(false),
            error: RwSignal::new(None),
        }
    }

    /// App-start step: restore the persisted session, then re-validate the
    /// token against the backend before authenticated UI is trusted.
    pub fn bootstrap(&self) {
        if let Some(session) = storage::load_session() {
            self.user.set(session.user);
            self.token.set(session.token);
            self.is_authenticated.set(session.is_authenticated);
        }

        let store = self.clone();
        spawn_local(async move {
            store.check_auth().await;
        });
    }

    fn persist(&self) {
        storage::save_session(&PersistedSession {
            user: self.user.get_untracked(),
            token: self.token.get_untracked(),
            is_authenticated: self.is_authenticated.get_untracked(),
        });
    }

    fn open_session(&self, data: AuthData) {
        self.user.set(Some(data.user));
        self.token.set(Some(data.token));
        self.is_authenticated.set(true);
        self.loading.set(false);
        self.error.set(None);
        self.persist();
    }

    fn fail_session(&self, message: String) {
        self.user.set(None);
        self.token.set(None);
        self.is_authenticated.set(false);
        self.loading.set(false);
        self.error.set(Some(message));
        storage::clear_session();
    }

    /// Authenticate with email and password. On failure the session fields
    /// are reset and the server message lands in `error` as well as in the
    /// returned `Err`, so callers can react locally.
    pub async fn login(&self, email: &str, password: &str) -> Result<(), String> {
        self.loading.set(true);
        self.error.set(None);

        match self.api.login(email, password).await {
            Ok(data) => {
                self.open_session(data);
                Ok(())
            }
            Err(e) => {
                let message = e.to_string();
                log::error!("login failed: {message}");
                self.fail_session(message.clone());
                Err(message)
            }
        }
    }

    /// Create an account; same contract as [`AuthStore::login`].
    pub async fn register(&self, request: RegisterRequest) -> Result<(), String> {
        self.loading.set(true);
        self.error.set(None);

        match self.api.register(&request).await {
            Ok(data) => {
                self.open_session(data);
                Ok(())
            }
            Err(e) => {
                let message = e.to_string();
                log::error!("registration failed: {message}");
                self.fail_session(message.clone());
                Err(message)
            }
        }
    }

    /// Close the session locally. No network call; server-side token
    /// invalidation is not this client's concern. Safe to call repeatedly.
    pub fn logout(&self) {
        self.user.set(None);
        self.token.set(None);
        self.is_authenticated.set(false);
        self.loading.set(false);
        self.error.set(None);
        storage::clear_session();
    }

    pub fn clear_error(&self) {
        self.error.set(None);
    }

    /// Re-validate the stored token against `GET /auth/me`. Without a token
    /// this is a no-op. Any failure drops the session: an unreachable
    /// backend is treated the same as a rejected token.
    pub async fn check_auth(&self) {
        let Some(token) = self.token.get_untracked() else {
            return;
        };

        self.loading.set(true);

        match self.api.current_user(&token).await {
            Ok(user) => {
                self.user.set(Some(user));
                self.is_authenticated.set(true);
                self.loading.set(false);
                self.persist();
            }
            Err(e) => {
                log::debug!("session validation failed: {e}");
                self.user.set(None);
                self.token.set(None);
                self.is_authenticated.set(false);
                self.loading.set(false);
                storage::clear_session();
            }
        }
    }

    /// Id of the signed-in user, if any. Read untracked: callers want the
    /// value at action time, not a subscription.
    pub fn user_id(&self) -> Option<String> {
        self.user.get_untracked().map(|u| u.id)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use httpmock::prelude::*;
    use serde_json::json;

    fn store_against(server: &MockServer) -> AuthStore {
        AuthStore::new(ApiClient::new(server.base_url()))
    }

    #[tokio::test]
    async fn login_success_opens_the_session() {
        let server = MockServer::start_async().await;
        server
            .mock_async(|when, then| {
                when.method(POST)
                    .path("/api/v1/auth/login")
                    .json_body(json!({"email": "a@b.com", "password": "x"}));
                then.status(200).json_body(json!({
                    "type": "success",
                    "data": {
                        "token": "t1",
                        "user": {
                            "id": "1",
                            "email": "a@b.com",
                            "username": "a",
                            "full_name": "A",
                            "rol": "user"
                        }
                    }
                }));
            })
            .await;

        let store = store_against(&server);
        store.login("a@b.com", "x").await.unwrap();

        assert_eq!(store.token.get_untracked().as_deref(), Some("t1"));
        assert_eq!(store.user.get_untracked().unwrap().id, "1");
        assert!(store.is_authenticated.get_untracked());
        assert!(!store.loading.get_untracked());
        assert_eq!(store.error.get_untracked(), None);
    }

    #[tokio::test]
    async fn login_failure_resets_the_session_and_keeps_the_message() {
        let server = MockServer::start_async().await;
        server
            .mock_async(|when, then| {
                when.method(POST).path("/api/v1/auth/login");
                then.status(401)
                    .json_body(json!({"type": "error", "message": "Invalid credentials"}));
            })
            .await;

        let store = store_against(&server);
        let err = store.login("a@b.com", "wrong").await.unwrap_err();

        assert_eq!(err, "Invalid credentials");
        assert_eq!(store.error.get_untracked().as_deref(), Some("Invalid credentials"));
        assert_eq!(store.token.get_untracked(), None);
        assert!(!store.is_authenticated.get_untracked());
    }

    #[tokio::test]
    async fn check_auth_without_token_issues_no_request() {
        let server = MockServer::start_async().await;
        let me = server
            .mock_async(|when, then| {
                when.method(GET).path("/api/v1/auth/me");
                then.status(200).json_body(json!({"type": "success"}));
            })
            .await;

        let store = store_against(&server);
        store.check_auth().await;

        assert_eq!(me.hits_async().await, 0);
        assert!(!store.loading.get_untracked());
    }

    #[tokio::test]
    async fn check_auth_with_rejected_token_drops_the_session() {
        let server = MockServer::start_async().await;
        server
            .mock_async(|when, then| {
                when.method(GET).path("/api/v1/auth/me");
                then.status(401).body("");
            })
            .await;

        let store = store_against(&server);
        store.token.set(Some("stale".into()));
        store.is_authenticated.set(true);

        store.check_auth().await;

        assert_eq!(store.token.get_untracked(), None);
        assert_eq!(store.user.get_untracked(), None);
        assert!(!store.is_authenticated.get_untracked());
        assert!(!store.loading.get_untracked());
    }

    #[tokio::test]
    async fn check_auth_refreshes_the_cached_user() {
        let server = MockServer::start_async().await;
        server
            .mock_async(|when, then| {
                when.method(GET)
                    .path("/api/v1/auth/me")
                    .header("Authorization", "Bearer t1");
                then.status(200).json_body(json!({
                    "type": "success",
                    "data": {
                        "id": "1",
                        "email": "a@b.com",
                        "username": "renamed",
                        "full_name": "A",
                        "rol": "user"
                    }
                }));
            })
            .await;

        let store = store_against(&server);
        store.token.set(Some("t1".into()));

        store.check_auth().await;

        assert_eq!(store.user.get_untracked().unwrap().username, "renamed");
        assert!(store.is_authenticated.get_untracked());
    }

    #[test]
    fn logout_is_idempotent() {
        let store = AuthStore::new(ApiClient::new("http://127.0.0.1:1"));
        store.token.set(Some("t1".into()));
        store.is_authenticated.set(true);

        store.logout();
        store.logout();

        assert_eq!(store.user.get_untracked(), None);
        assert_eq!(store.token.get_untracked(), None);
        assert!(!store.is_authenticated.get_untracked());
        assert_eq!(store.error.get_untracked(), None);
    }

    #[test]
    fn clear_error_touches_nothing_else() {
        let store = AuthStore::new(ApiClient::new("http://127.0.0.1:1"));
        store.token.set(Some("t1".into()));
        store.error.set(Some("boom".into()));

        store.clear_error();

        assert_eq!(store.error.get_untracked(), None);
        assert_eq!(store.token.get_untracked().as_deref(), Some("t1"));
    }
}
