use axum::{
    extract::{Path, State},
    routing::get,
    Json, Router,
};
use lazy_static::lazy_static;
use regex::Regex;
use tracing::{info, instrument, warn};
use uuid::Uuid;

use crate::{
    auth::{extractors::AuthUser, password::hash_password},
    errors::HttpError,
    state::AppState,
    users::dto::{UserCreateDto, UserUpdateDto},
    users::repo_types::UserProfile,
};

pub fn user_routes() -> Router<AppState> {
    Router::new()
        .route("/users", get(list_users).post(register))
        .route(
            "/users/:id",
            get(get_user).patch(update_user).delete(delete_user),
        )
}

pub(crate) fn is_valid_email(email: &str) -> bool {
    lazy_static! {
        static ref EMAIL_RE: Regex = Regex::new(r"^[^@\s]+@[^@\s]+\.[^@\s]+$").unwrap();
    }
    EMAIL_RE.is_match(email)
}

#[instrument(skip(state))]
pub async fn list_users(State(state): State<AppState>) -> Result<Json<Vec<UserProfile>>, HttpError> {
    let users = state.users.read_all().await?;
    Ok(Json(users))
}

#[instrument(skip(state))]
pub async fn get_user(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
) -> Result<Json<UserProfile>, HttpError> {
    let user = state.users.read_by_id(id).await?;
    Ok(Json(user))
}

#[instrument(skip(state, payload))]
pub async fn register(
    State(state): State<AppState>,
    Json(mut payload): Json<UserCreateDto>,
) -> Result<Json<UserProfile>, HttpError> {
    payload.email = payload.email.trim().to_lowercase();

    if !is_valid_email(&payload.email) {
        warn!(email = %payload.email, "invalid email");
        return Err(HttpError::bad_request("Invalid email"));
    }

    if payload.password.len() < 8 {
        warn!("password too short");
        return Err(HttpError::bad_request("Password too short"));
    }

    payload.password = hash_password(&payload.password)?;

    let user = state.users.create(payload).await?;
    info!(user_id = %user.id, email = %user.email, "user registered");
    Ok(Json(user))
}

#[instrument(skip(state, payload))]
pub async fn update_user(
    State(state): State<AppState>,
    AuthUser(_requester): AuthUser,
    Path(id): Path<Uuid>,
    Json(mut payload): Json<UserUpdateDto>,
) -> Result<Json<UserProfile>, HttpError> {
    if let Some(plain) = payload.password.as_deref() {
        payload.password = Some(hash_password(plain)?);
    }

    let user = state.users.update(id, payload).await?;
    info!(user_id = %id, "user updated");
    Ok(Json(user))
}

#[instrument(skip(state))]
pub async fn delete_user(
    State(state): State<AppState>,
    AuthUser(_requester): AuthUser,
    Path(id): Path<Uuid>,
) -> Result<Json<UserProfile>, HttpError> {
    let user = state.users.delete(id).await?;
    info!(user_id = %id, "user deleted");
    Ok(Json(user))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn accepts_plain_addresses() {
        assert!(is_valid_email("marta@example.com"));
        assert!(is_valid_email("a.b+c@sub.domain.org"));
    }

    #[test]
    fn rejects_malformed_addresses() {
        assert!(!is_valid_email("marta"));
        assert!(!is_valid_email("marta@"));
        assert!(!is_valid_email("marta@example"));
        assert!(!is_valid_email("mar ta@example.com"));
    }
}
