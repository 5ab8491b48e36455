use axum::{
    extract::{FromRef, State},
    http::StatusCode,
    routing::{get, post},
    Json, Router,
};
use tracing::{error, info, instrument, warn};

use crate::{
    auth::{
        dto::{LoginRequest, LoginResponse, MeResponse, MessageResponse, PublicUser, SignupRequest},
        jwt::{AuthUser, JwtKeys},
        password::{hash_password_blocking, verify_password_blocking},
        repo_types::NewUser,
    },
    error::AuthError,
    state::AppState,
};

pub fn auth_routes() -> Router<AppState> {
    Router::new()
        .route("/signup", post(signup))
        .route("/login", post(login))
}

pub fn me_routes() -> Router<AppState> {
    Router::new().route("/me", get(get_me))
}

#[instrument(skip(state, payload), fields(email = %payload.email))]
pub async fn signup(
    State(state): State<AppState>,
    Json(payload): Json<SignupRequest>,
) -> Result<Json<MessageResponse>, AuthError> {
    let SignupRequest {
        name,
        email,
        password,
    } = payload;

    let password_hash = hash_password_blocking(state.config.password.clone(), password).await?;

    let inserted = state
        .store
        .insert_if_absent(NewUser {
            name,
            email,
            password_hash,
        })
        .await?;

    match inserted {
        Some(user) => {
            info!(user_id = %user.id, "user registered");
            Ok(Json(MessageResponse {
                message: "✅ Signup success".into(),
            }))
        }
        None => {
            warn!("email already registered");
            Err(AuthError::Conflict)
        }
    }
}

#[instrument(skip(state, payload), fields(email = %payload.email))]
pub async fn login(
    State(state): State<AppState>,
    Json(payload): Json<LoginRequest>,
) -> Result<Json<LoginResponse>, AuthError> {
    let user = match state.store.find_by_email(&payload.email).await? {
        Some(u) => u,
        None => {
            warn!("login unknown email");
            return Err(AuthError::NotFound);
        }
    };

    let ok = verify_password_blocking(payload.password, user.password_hash.clone()).await?;
    if !ok {
        warn!(user_id = %user.id, "login wrong password");
        return Err(AuthError::Unauthorized);
    }

    let keys = JwtKeys::from_ref(&state);
    let token = keys.sign(&payload.email)?;

    info!(user_id = %user.id, "user logged in");
    Ok(Json(LoginResponse {
        message: "✅ Login success".into(),
        token,
        user: PublicUser { name: user.name },
    }))
}

#[instrument(skip(state))]
pub async fn get_me(
    State(state): State<AppState>,
    AuthUser(email): AuthUser,
) -> Result<Json<MeResponse>, (StatusCode, String)> {
    let user = state
        .store
        .find_by_email(&email)
        .await
        .map_err(|e| {
            error!(error = %e, "find_by_email failed");
            (StatusCode::INTERNAL_SERVER_ERROR, "Server error".to_string())
        })?
        .ok_or_else(|| {
            warn!(email = %email, "token subject has no user");
            (StatusCode::UNAUTHORIZED, "User not found".to_string())
        })?;

    Ok(Json(MeResponse {
        email: user.email,
        name: user.name,
    }))
}
