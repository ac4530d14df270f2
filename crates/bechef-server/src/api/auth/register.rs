use axum::{extract::State, http::StatusCode, response::IntoResponse, Json};
use serde::Deserialize;
use utoipa::ToSchema;

use crate::api::{ErrorResponse, MessageResponse};
use crate::auth::hash_password;
use crate::models::NewUser;
use crate::AppState;

#[derive(Debug, Clone, Deserialize, ToSchema)]
pub struct RegisterRequest {
    pub username: String,
    pub email: String,
    pub password: String,
}

#[utoipa::path(
    post,
    path = "/register",
    tag = "auth",
    request_body(content = RegisterRequest, example = json!({"username": "user", "email": "user@example.com", "password": "password"})),
    responses(
        (status = 200, description = "User registered", body = MessageResponse),
        (status = 500, description = "Registration failed", body = ErrorResponse)
    )
)]
pub async fn register(
    State(state): State<AppState>,
    Json(req): Json<RegisterRequest>,
) -> impl IntoResponse {
    let password_hash = match hash_password(&req.password) {
        Ok(h) => h,
        Err(e) => {
            tracing::error!("Password hashing failed: {}", e);
            return (
                StatusCode::INTERNAL_SERVER_ERROR,
                Json(ErrorResponse {
                    message: "Registration Failed".to_string(),
                }),
            )
                .into_response();
        }
    };

    let new_user = NewUser {
        username: req.username,
        email: req.email,
        password_hash,
    };

    // No lookup for an existing account: duplicate emails are accepted.
    match state.store.insert_user(new_user).await {
        Ok(user) => {
            tracing::info!("User registration completed, id {}", user.id);
            (
                StatusCode::OK,
                Json(MessageResponse {
                    message: "User Registered Successfully".to_string(),
                }),
            )
                .into_response()
        }
        Err(e) => {
            tracing::error!("Failed to insert user: {}", e);
            (
                StatusCode::INTERNAL_SERVER_ERROR,
                Json(ErrorResponse {
                    message: "Registration Failed".to_string(),
                }),
            )
                .into_response()
        }
    }
}
