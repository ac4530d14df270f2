use axum::{extract::State, http::StatusCode, response::IntoResponse, Json};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use crate::api::ErrorResponse;
use crate::auth::verify_password;
use crate::AppState;

#[derive(Debug, Clone, Deserialize, ToSchema)]
pub struct LoginRequest {
    pub email: String,
    pub password: String,
}

/// No token or session is issued: the caller tracks login state itself.
#[derive(Debug, Clone, Serialize, ToSchema)]
pub struct LoginResponse {
    pub message: String,
    pub username: String,
}

#[utoipa::path(
    post,
    path = "/login",
    tag = "auth",
    request_body(content = LoginRequest, example = json!({"email": "user@example.com", "password": "password"})),
    responses(
        (status = 200, description = "Login successful", body = LoginResponse),
        (status = 400, description = "Invalid credentials", body = ErrorResponse),
        (status = 500, description = "Lookup failed", body = ErrorResponse)
    )
)]
pub async fn login(
    State(state): State<AppState>,
    Json(req): Json<LoginRequest>,
) -> impl IntoResponse {
    let found = match state.store.find_user_by_email(&req.email).await {
        Ok(found) => found,
        Err(e) => {
            tracing::error!("Login lookup failed: {}", e);
            return (
                StatusCode::INTERNAL_SERVER_ERROR,
                Json(ErrorResponse {
                    message: "Login Failed".to_string(),
                }),
            )
                .into_response();
        }
    };

    // Unknown email and wrong password produce the same response on purpose,
    // so a caller cannot probe which accounts exist.
    let user = match found {
        Some(user) if verify_password(&req.password, &user.password_hash) => user,
        _ => {
            return (
                StatusCode::BAD_REQUEST,
                Json(ErrorResponse {
                    message: "Invalid Credentials".to_string(),
                }),
            )
                .into_response();
        }
    };

    (
        StatusCode::OK,
        Json(LoginResponse {
            message: "Login Successful".to_string(),
            username: user.username,
        }),
    )
        .into_response()
}
