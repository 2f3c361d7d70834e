use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::users::repo_types::UserCredentials;

/// Request body for login. `user` is either an email or a username.
#[derive(Debug, Deserialize)]
pub struct LoginRequest {
    pub user: String,
    pub password: String,
}

/// Request body for token refresh.
#[derive(Debug, Deserialize)]
pub struct RefreshRequest {
    pub refresh_token: String,
}

/// Response returned after login or refresh.
#[derive(Debug, Serialize)]
pub struct AuthResponse {
    pub access_token: String,
    pub refresh_token: String,
    pub user: PublicUser,
}

/// Public part of the user returned to the client after authentication.
#[derive(Debug, Serialize)]
pub struct PublicUser {
    pub id: Uuid,
    pub username: String,
    pub email: String,
    pub role: String,
}

impl From<UserCredentials> for PublicUser {
    fn from(c: UserCredentials) -> Self {
        Self {
            id: c.id,
            username: c.username,
            email: c.email,
            role: c.role,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn public_user_drops_password() {
        let creds = UserCredentials {
            id: Uuid::new_v4(),
            username: "marta".into(),
            email: "marta@example.com".into(),
            role: "user".into(),
            password: "argon2-hash".into(),
        };
        let public: PublicUser = creds.into();
        let json = serde_json::to_value(&public).unwrap();
        assert!(json.get("password").is_none());
        assert_eq!(json["username"], "marta");
    }
}
