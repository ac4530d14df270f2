use axum::{extract::State, http::StatusCode, response::IntoResponse, Json};
use serde::Deserialize;
use utoipa::ToSchema;

use crate::api::{ErrorResponse, MessageResponse};
use crate::models::NewContact;
use crate::AppState;

#[derive(Debug, Clone, Deserialize, ToSchema)]
pub struct ContactRequest {
    pub name: String,
    pub email: String,
    pub message: String,
}

#[utoipa::path(
    post,
    path = "/contact",
    tag = "contact",
    request_body(content = ContactRequest, example = json!({"name": "b", "email": "b@x.com", "message": "hi"})),
    responses(
        (status = 200, description = "Message stored", body = MessageResponse),
        (status = 500, description = "Storage failed", body = ErrorResponse)
    )
)]
pub async fn submit_contact(
    State(state): State<AppState>,
    Json(req): Json<ContactRequest>,
) -> impl IntoResponse {
    let new_contact = NewContact {
        name: req.name,
        email: req.email,
        message: req.message,
    };

    match state.store.insert_contact(new_contact).await {
        Ok(()) => (
            StatusCode::OK,
            Json(MessageResponse {
                message: "Thank You! Your Message Has Been Sent.".to_string(),
            }),
        )
            .into_response(),
        Err(e) => {
            tracing::error!("Failed to insert contact message: {}", e);
            (
                StatusCode::INTERNAL_SERVER_ERROR,
                Json(ErrorResponse {
                    message: "Failed to Send Message".to_string(),
                }),
            )
                .into_response()
        }
    }
}
