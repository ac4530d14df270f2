use axum::body::Bytes;
use axum::{
    extract::{Multipart, State},
    http::StatusCode,
    response::IntoResponse,
    Json,
};
use serde::Serialize;
use utoipa::ToSchema;

use crate::api::ErrorResponse;
use crate::models::{NewRecipe, Recipe};
use crate::AppState;

/// Multipart form shape, for the OpenAPI docs.
#[derive(ToSchema)]
#[allow(dead_code)]
pub struct AddRecipeForm {
    pub name: String,
    pub ingredients: String,
    pub procedure: String,
    pub note: Option<String>,
    #[schema(value_type = Option<String>, format = Binary)]
    pub image: Option<Vec<u8>>,
}

#[derive(Debug, Clone, Serialize, ToSchema)]
pub struct AddRecipeResponse {
    pub message: String,
    pub recipe: Recipe,
}

#[utoipa::path(
    post,
    path = "/add-recipe",
    tag = "recipes",
    request_body(content_type = "multipart/form-data", content = AddRecipeForm),
    responses(
        (status = 200, description = "Recipe created", body = AddRecipeResponse),
        (status = 400, description = "Missing required field", body = ErrorResponse),
        (status = 500, description = "Storage failed", body = ErrorResponse)
    )
)]
pub async fn add_recipe(
    State(state): State<AppState>,
    mut multipart: Multipart,
) -> impl IntoResponse {
    let mut name = String::new();
    let mut ingredients = String::new();
    let mut procedure = String::new();
    let mut note: Option<String> = None;
    let mut image: Option<(String, Bytes)> = None;

    loop {
        let field = match multipart.next_field().await {
            Ok(Some(field)) => field,
            Ok(None) => break,
            Err(e) => {
                tracing::warn!("Multipart read error: {}", e);
                return (
                    e.status(),
                    Json(ErrorResponse {
                        message: format!("Failed to read form data: {}", e.body_text()),
                    }),
                )
                    .into_response();
            }
        };

        let field_name = field.name().unwrap_or_default().to_string();

        if field_name == "image" {
            // A part only counts as a file when it carries a filename.
            let original = match field.file_name() {
                Some(n) if !n.is_empty() => n.to_string(),
                _ => continue,
            };
            let data = match field.bytes().await {
                Ok(bytes) => bytes,
                Err(e) => {
                    tracing::warn!("Field read error: {}", e);
                    return (
                        e.status(),
                        Json(ErrorResponse {
                            message: format!("Failed to read file data: {}", e.body_text()),
                        }),
                    )
                        .into_response();
                }
            };
            image = Some((original, data));
        } else {
            let text = match field.text().await {
                Ok(text) => text,
                Err(e) => {
                    tracing::warn!("Field read error: {}", e);
                    return (
                        e.status(),
                        Json(ErrorResponse {
                            message: format!("Failed to read form data: {}", e.body_text()),
                        }),
                    )
                        .into_response();
                }
            };
            match field_name.as_str() {
                "name" => name = text,
                "ingredients" => ingredients = text,
                "procedure" => procedure = text,
                "note" => note = Some(text),
                _ => {}
            }
        }
    }

    if name.trim().is_empty() {
        return (
            StatusCode::BAD_REQUEST,
            Json(ErrorResponse {
                message: "Name cannot be empty".to_string(),
            }),
        )
            .into_response();
    }

    if ingredients.trim().is_empty() {
        return (
            StatusCode::BAD_REQUEST,
            Json(ErrorResponse {
                message: "Ingredients cannot be empty".to_string(),
            }),
        )
            .into_response();
    }

    if procedure.trim().is_empty() {
        return (
            StatusCode::BAD_REQUEST,
            Json(ErrorResponse {
                message: "Procedure cannot be empty".to_string(),
            }),
        )
            .into_response();
    }

    // The file is written before the record so a failed write leaves no
    // half-created recipe behind.
    let stored = match image {
        Some((original, data)) => match state.uploads.store(&original, &data).await {
            Ok(stored) => Some(stored),
            Err(e) => {
                tracing::error!("Failed to store uploaded file: {}", e);
                return (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    Json(ErrorResponse {
                        message: "Failed to Add Recipe".to_string(),
                    }),
                )
                    .into_response();
            }
        },
        None => None,
    };

    let new_recipe = NewRecipe {
        name,
        image: stored,
        ingredients,
        procedure,
        note,
    };

    match state.store.insert_recipe(new_recipe).await {
        Ok(recipe) => (
            StatusCode::OK,
            Json(AddRecipeResponse {
                message: "Recipe Added Successfully".to_string(),
                recipe,
            }),
        )
            .into_response(),
        Err(e) => {
            tracing::error!("Failed to insert recipe: {}", e);
            (
                StatusCode::INTERNAL_SERVER_ERROR,
                Json(ErrorResponse {
                    message: "Failed to Add Recipe".to_string(),
                }),
            )
                .into_response()
        }
    }
}
