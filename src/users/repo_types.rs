use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use time::{macros::format_description, Date, OffsetDateTime};
use uuid::Uuid;

use crate::errors::HttpError;

time::serde::format_description!(birth_date_format, Date, "[year]-[month]-[day]");

/// Parse a birth date supplied by the client as `YYYY-MM-DD`.
pub fn parse_birth_date(s: &str) -> Result<Date, HttpError> {
    Date::parse(s, format_description!("[year]-[month]-[day]"))
        .map_err(|_| HttpError::bad_request(format!("Invalid birth date '{s}'")))
}

/// Closed set of fields a login lookup may key on.
///
/// Anything else is rejected before a query is issued, with the same
/// generic 404 the lookup itself produces.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LoginKey {
    Email,
    Username,
}

impl LoginKey {
    pub fn from_param(key: &str) -> Result<Self, HttpError> {
        match key {
            "email" => Ok(Self::Email),
            "username" => Ok(Self::Username),
            _ => Err(HttpError::not_found("Invalid query parameters")),
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            Self::Email => "email",
            Self::Username => "username",
        }
    }
}

/// User columns of the shared projection. Never selects `password`.
#[derive(Debug, Clone, FromRow)]
pub struct UserRow {
    pub id: Uuid,
    pub username: String,
    pub email: String,
    pub role: String,
    pub avatar: String,
    pub location: String,
    pub birth_date: Date,
    pub gender: String,
    pub bio: String,
}

/// Event shape embedded in the shared projection.
#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
pub struct EventSummary {
    pub id: Uuid,
    pub title: String,
    pub sport: String,
    #[serde(with = "time::serde::rfc3339")]
    pub date: OffsetDateTime,
    pub location: String,
}

/// Shared projection returned by every read and write except the login
/// lookup: user fields plus the two event relations, no credentials.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct UserProfile {
    pub id: Uuid,
    pub username: String,
    pub email: String,
    pub role: String,
    pub avatar: String,
    pub location: String,
    #[serde(with = "birth_date_format")]
    pub birth_date: Date,
    pub gender: String,
    pub bio: String,
    pub events: Vec<EventSummary>,
    pub created_events: Vec<EventSummary>,
}

impl UserProfile {
    pub fn from_parts(
        row: UserRow,
        events: Vec<EventSummary>,
        created_events: Vec<EventSummary>,
    ) -> Self {
        Self {
            id: row.id,
            username: row.username,
            email: row.email,
            role: row.role,
            avatar: row.avatar,
            location: row.location,
            birth_date: row.birth_date,
            gender: row.gender,
            bio: row.bio,
            events,
            created_events,
        }
    }
}

/// Credential-bearing projection, only returned by the login lookup.
#[derive(Debug, Clone, Serialize, FromRow)]
pub struct UserCredentials {
    pub id: Uuid,
    pub username: String,
    pub email: String,
    pub role: String,
    pub password: String,
}

#[cfg(test)]
mod tests {
    use super::*;
    use time::macros::date;

    fn sample_profile() -> UserProfile {
        UserProfile {
            id: Uuid::new_v4(),
            username: "marta".into(),
            email: "marta@example.com".into(),
            role: "user".into(),
            avatar: "avatars/marta.png".into(),
            location: "Valencia".into(),
            birth_date: date!(1990 - 05 - 01),
            gender: "female".into(),
            bio: "".into(),
            events: vec![],
            created_events: vec![],
        }
    }

    #[test]
    fn login_key_accepts_email_and_username() {
        assert_eq!(LoginKey::from_param("email").unwrap(), LoginKey::Email);
        assert_eq!(LoginKey::from_param("username").unwrap(), LoginKey::Username);
    }

    #[test]
    fn login_key_rejects_anything_else_with_404() {
        for bad in ["id", "password", "Email", "", "role"] {
            let err = LoginKey::from_param(bad).unwrap_err();
            assert_eq!(err.status_code, 404);
            assert_eq!(err.message, "Invalid query parameters");
        }
    }

    #[test]
    fn parses_iso_birth_date() {
        let d = parse_birth_date("1990-05-01").unwrap();
        assert_eq!(d, date!(1990 - 05 - 01));
    }

    #[test]
    fn rejects_garbage_birth_date_with_400() {
        let err = parse_birth_date("May 1st 1990").unwrap_err();
        assert_eq!(err.status_code, 400);
    }

    #[test]
    fn shared_projection_never_serializes_password() {
        let json = serde_json::to_value(sample_profile()).unwrap();
        assert!(json.get("password").is_none());
        assert_eq!(json["birthDate"], "1990-05-01");
        assert!(json["createdEvents"].as_array().unwrap().is_empty());
    }

    #[test]
    fn credentials_projection_carries_password() {
        let creds = UserCredentials {
            id: Uuid::new_v4(),
            username: "marta".into(),
            email: "marta@example.com".into(),
            role: "user".into(),
            password: "argon2-hash".into(),
        };
        let json = serde_json::to_value(&creds).unwrap();
        assert_eq!(json["password"], "argon2-hash");
    }
}
