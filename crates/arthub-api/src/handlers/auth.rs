//! Auth handlers — register, login, logout, me.

use axum::Json;
use axum::extract::State;
use axum::http::StatusCode;
use axum::http::header::SET_COOKIE;
use axum::response::{AppendHeaders, IntoResponse};

use arthub_auth::session::{clear_session_cookie, session_cookie};
use arthub_core::error::AppError;
use arthub_entity::user::UserRole;
use arthub_service::auth::RegisterInput;

use crate::dto;
use crate::dto::request::{LoginRequest, RegisterRequest};
use crate::dto::response::{AuthResponse, MessageResponse, UserResponse};
use crate::error::ApiError;
use crate::extractors::CurrentUser;
use crate::state::AppState;

/// POST /api/auth/register
pub async fn register(
    State(state): State<AppState>,
    Json(req): Json<RegisterRequest>,
) -> Result<impl IntoResponse, ApiError> {
    dto::validate(&req)?;

    let role: UserRole = req.role.as_deref().unwrap_or("viewer").parse()?;

    let (user, issued) = state
        .auth_service
        .register(RegisterInput {
            username: req.username,
            email: req.email,
            password: req.password,
            role,
        })
        .await?;

    let cookie = session_cookie(&issued.token, state.config.auth.secure_cookies);

    Ok((
        StatusCode::CREATED,
        AppendHeaders([(SET_COOKIE, cookie)]),
        Json(AuthResponse {
            message: "Kullanıcı başarıyla oluşturuldu".to_string(),
            user: UserResponse::from(user),
        }),
    ))
}

/// POST /api/auth/login
pub async fn login(
    State(state): State<AppState>,
    Json(req): Json<LoginRequest>,
) -> Result<impl IntoResponse, ApiError> {
    dto::validate(&req)?;

    let (user, issued) = state.auth_service.login(&req.identifier, &req.password).await?;

    let cookie = session_cookie(&issued.token, state.config.auth.secure_cookies);

    Ok((
        AppendHeaders([(SET_COOKIE, cookie)]),
        Json(AuthResponse {
            message: "Giriş başarılı".to_string(),
            user: UserResponse::from(user),
        }),
    ))
}

/// POST /api/auth/logout
///
/// Stateless sessions have nothing to revoke server-side: logout deletes
/// the client's copy of the token.
pub async fn logout(_user: CurrentUser) -> impl IntoResponse {
    (
        AppendHeaders([(SET_COOKIE, clear_session_cookie())]),
        Json(MessageResponse {
            message: "Çıkış yapıldı".to_string(),
        }),
    )
}

/// GET /api/auth/me
pub async fn me(
    State(state): State<AppState>,
    user: CurrentUser,
) -> Result<Json<UserResponse>, ApiError> {
    let record = state
        .user_repo
        .find_by_id(user.id)
        .await?
        .ok_or_else(|| AppError::not_found("Kullanıcı bulunamadı"))?;

    Ok(Json(UserResponse::from(record)))
}
