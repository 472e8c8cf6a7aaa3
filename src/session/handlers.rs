use axum::{
    extract::State,
    http::StatusCode,
    routing::{get, post},
    Json, Router,
};
use tracing::{info, instrument, warn};

use crate::{
    session::{
        dto::{nav_for, LoginRequest, LoginResponse, ProfileResponse, SwitchRoleRequest},
        extractors::CurrentUser,
        services::is_valid_email,
    },
    state::AppState,
};

pub fn auth_routes() -> Router<AppState> {
    Router::new()
        .route("/login", post(login))
        .route("/logout", post(logout))
}

pub fn profile_routes() -> Router<AppState> {
    Router::new()
        .route("/profile", get(get_profile))
        .route("/profile/role", post(switch_role))
}

#[instrument(skip(state, payload))]
pub async fn login(
    State(state): State<AppState>,
    Json(mut payload): Json<LoginRequest>,
) -> Result<Json<LoginResponse>, (StatusCode, String)> {
    payload.email = payload.email.trim().to_lowercase();

    if !is_valid_email(&payload.email) {
        warn!(email = %payload.email, "invalid email");
        return Err((StatusCode::BAD_REQUEST, "Invalid email".into()));
    }

    let user = state.sessions.login(&state.catalog, &payload.email);
    info!(user_id = %user.id, email = %user.email, "user logged in");
    Ok(Json(LoginResponse { user }))
}

#[instrument(skip(state))]
pub async fn logout(State(state): State<AppState>) -> StatusCode {
    state.sessions.logout();
    StatusCode::NO_CONTENT
}

#[instrument(skip(user))]
pub async fn get_profile(CurrentUser(user): CurrentUser) -> Json<ProfileResponse> {
    let nav = nav_for(user.role);
    Json(ProfileResponse { user, nav })
}

#[instrument(skip(state))]
pub async fn switch_role(
    State(state): State<AppState>,
    Json(payload): Json<SwitchRoleRequest>,
) -> Result<Json<ProfileResponse>, (StatusCode, String)> {
    match state.sessions.switch_role(payload.role) {
        Some(user) => {
            info!(user_id = %user.id, role = ?user.role, "role switched");
            let nav = nav_for(user.role);
            Ok(Json(ProfileResponse { user, nav }))
        }
        None => {
            warn!("switch_role with no active session");
            Err((StatusCode::UNAUTHORIZED, "Sign in to continue".into()))
        }
    }
}
