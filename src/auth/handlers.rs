use axum::{
    extract::{FromRef, State},
    routing::post,
    Json, Router,
};
use tracing::{info, instrument, warn};

use crate::{
    auth::{
        dto::{AuthResponse, LoginRequest, PublicUser, RefreshRequest},
        jwt::JwtKeys,
        password::verify_password,
    },
    errors::HttpError,
    state::AppState,
};

pub fn auth_routes() -> Router<AppState> {
    Router::new()
        .route("/auth/login", post(login))
        .route("/auth/refresh", post(refresh))
}

#[instrument(skip(state, payload))]
pub async fn login(
    State(state): State<AppState>,
    Json(payload): Json<LoginRequest>,
) -> Result<Json<AuthResponse>, HttpError> {
    let identifier = payload.user.trim();
    let key = if identifier.contains('@') {
        "email"
    } else {
        "username"
    };

    // Same generic 404 for unknown identifier and wrong password, so the
    // response never confirms that an account exists.
    let creds = state.users.search_for_login(key, identifier).await?;

    if !verify_password(&payload.password, &creds.password)? {
        warn!(user_id = %creds.id, "login invalid password");
        return Err(HttpError::not_found(format!("Invalid {key} or password")));
    }

    let keys = JwtKeys::from_ref(&state);
    let access_token = keys.sign_access(creds.id)?;
    let refresh_token = keys.sign_refresh(creds.id)?;

    info!(user_id = %creds.id, "user logged in");
    Ok(Json(AuthResponse {
        access_token,
        refresh_token,
        user: creds.into(),
    }))
}

#[instrument(skip(state, payload))]
pub async fn refresh(
    State(state): State<AppState>,
    Json(payload): Json<RefreshRequest>,
) -> Result<Json<AuthResponse>, HttpError> {
    let keys = JwtKeys::from_ref(&state);
    let claims = keys
        .verify_refresh(&payload.refresh_token)
        .map_err(|e| HttpError::unauthorized(e.to_string()))?;

    let user = state.users.read_by_id(claims.sub).await?;

    let access_token = keys.sign_access(user.id)?;
    let refresh_token = keys.sign_refresh(user.id)?;

    info!(user_id = %user.id, "token refreshed");
    Ok(Json(AuthResponse {
        access_token,
        refresh_token,
        user: PublicUser {
            id: user.id,
            username: user.username,
            email: user.email,
            role: user.role,
        },
    }))
}
