use serde::{Deserialize, Serialize};

/// Account role. The backend spells the field `rol`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Role {
    #[default]
    User,
    Admin,
}

impl Role {
    pub fn as_str(&self) -> &'static str {
        match self {
            Role::User => "user",
            Role::Admin => "admin",
        }
    }
}

/// Cached copy of the authenticated account, tied to the active session.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct User {
    pub id: String,
    pub username: String,
    pub email: String,
    pub full_name: String,
    pub rol: Role,
}

/// Successful login/register payload.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AuthData {
    pub user: User,
    pub token: String,
}

#[derive(Debug, Clone, Serialize)]
pub struct LoginRequest {
    pub email: String,
    pub password: String,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Gender {
    M,
    F,
}

/// Registration payload. Only email and password are required; the rest is
/// optional profile data. `gener` is the backend's spelling.
#[derive(Debug, Clone, Default, Serialize)]
pub struct RegisterRequest {
    pub email: String,
    pub password: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub full_name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub username: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub birth_date: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub gener: Option<Gender>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub rol: Option<Role>,
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::Envelope;

    #[test]
    fn test_auth_data_from_login_response() {
        let body = r#"{"type":"success","data":{"token":"t1","user":{"id":"1","email":"a@b.com","username":"a","full_name":"A","rol":"user"}}}"#;
        let env: Envelope<AuthData> = serde_json::from_str(body).unwrap();
        let data = env.data.unwrap();
        assert_eq!(data.token, "t1");
        assert_eq!(data.user.id, "1");
        assert_eq!(data.user.rol, Role::User);
    }

    #[test]
    fn test_register_request_omits_empty_fields() {
        let req = RegisterRequest {
            email: "a@b.com".into(),
            password: "x".into(),
            ..Default::default()
        };
        let json = serde_json::to_value(&req).unwrap();
        assert_eq!(
            json,
            serde_json::json!({"email": "a@b.com", "password": "x"})
        );
    }
}
