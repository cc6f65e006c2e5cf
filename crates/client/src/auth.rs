use contracts::auth::{AuthData, LoginRequest, RegisterRequest, User};

use crate::{bearer, ApiClient, ApiError};

impl ApiClient {
    /// Authenticate with email and password. Returns the user and the bearer
    /// token for subsequent requests.
    pub async fn login(&self, email: &str, password: &str) -> Result<AuthData, ApiError> {
        let request = LoginRequest {
            email: email.to_string(),
            password: password.to_string(),
        };

        self.expect_data(
            self.http.post(self.url("/auth/login")).json(&request),
            "Login failed",
        )
        .await
    }

    /// Create an account. On success the backend also opens a session, so
    /// the response is the same shape as [`ApiClient::login`].
    pub async fn register(&self, request: &RegisterRequest) -> Result<AuthData, ApiError> {
        self.expect_data(
            self.http.post(self.url("/auth/register")).json(request),
            "Registration failed",
        )
        .await
    }

    /// Fetch the account behind `token`. Used to re-validate a restored
    /// session before its token is trusted.
    pub async fn current_user(&self, token: &str) -> Result<User, ApiError> {
        self.expect_data(
            self.http
                .get(self.url("/auth/me"))
                .header("Authorization", bearer(token)),
            "Could not load the current user",
        )
        .await
    }
}
