use axum::{extract::State, http::StatusCode, response::IntoResponse, Json};

use crate::api::ErrorResponse;
use crate::models::Recipe;
use crate::AppState;

#[utoipa::path(
    get,
    path = "/recipes",
    tag = "recipes",
    responses(
        (status = 200, description = "Every stored recipe, in natural retrieval order", body = [Recipe]),
        (status = 500, description = "Query failed", body = ErrorResponse)
    )
)]
pub async fn list_recipes(State(state): State<AppState>) -> impl IntoResponse {
    match state.store.list_recipes().await {
        Ok(recipes) => (StatusCode::OK, Json(recipes)).into_response(),
        Err(e) => {
            tracing::error!("Failed to fetch recipes: {}", e);
            (
                StatusCode::INTERNAL_SERVER_ERROR,
                Json(ErrorResponse {
                    message: "Failed to Fetch Recipes".to_string(),
                }),
            )
                .into_response()
        }
    }
}
