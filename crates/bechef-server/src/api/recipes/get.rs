use axum::{
    extract::{Path, State},
    http::StatusCode,
    response::IntoResponse,
    Json,
};

use crate::api::ErrorResponse;
use crate::models::Recipe;
use crate::AppState;

#[utoipa::path(
    get,
    path = "/recipes/{id}",
    tag = "recipes",
    params(
        ("id" = String, Path, description = "Recipe id assigned at creation")
    ),
    responses(
        (status = 200, description = "Recipe record", body = Recipe),
        (status = 404, description = "No such recipe", body = ErrorResponse),
        (status = 500, description = "Lookup failed", body = ErrorResponse)
    )
)]
pub async fn get_recipe(State(state): State<AppState>, Path(id): Path<String>) -> impl IntoResponse {
    // A malformed id is a miss like any other; only infrastructure failures
    // reach the 500 arm.
    match state.store.find_recipe(&id).await {
        Ok(Some(recipe)) => (StatusCode::OK, Json(recipe)).into_response(),
        Ok(None) => (
            StatusCode::NOT_FOUND,
            Json(ErrorResponse {
                message: "Recipe Not Found".to_string(),
            }),
        )
            .into_response(),
        Err(e) => {
            tracing::error!("Failed to fetch recipe: {}", e);
            (
                StatusCode::INTERNAL_SERVER_ERROR,
                Json(ErrorResponse {
                    message: "Failed to Fetch Recipe".to_string(),
                }),
            )
                .into_response()
        }
    }
}
