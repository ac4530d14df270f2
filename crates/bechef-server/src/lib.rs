pub mod api;
pub mod auth;
pub mod config;
pub mod models;
pub mod store;
pub mod uploads;

use axum::extract::DefaultBodyLimit;
use axum::routing::{get, post};
use axum::Router;
use std::sync::Arc;
use tower_http::cors::CorsLayer;
use tower_http::services::ServeDir;

use store::Store;
use uploads::UploadStore;

/// Application state shared across all handlers.
#[derive(Clone)]
pub struct AppState {
    pub store: Arc<dyn Store>,
    pub uploads: Arc<UploadStore>,
}

/// Build the application router.
///
/// Uploaded images are served back as static content under /uploads, keyed by
/// stored filename.
pub fn app(state: AppState) -> Router {
    let uploads_dir = state.uploads.dir().to_path_buf();

    Router::new()
        .route("/", get(api::home::home))
        .route("/register", post(api::auth::register::register))
        .route("/login", post(api::auth::login::login))
        .route("/add-recipe", post(api::recipes::create::add_recipe))
        .route("/recipes", get(api::recipes::list::list_recipes))
        .route("/recipes/{id}", get(api::recipes::get::get_recipe))
        .route("/contact", post(api::contact::submit_contact))
        .nest_service("/uploads", ServeDir::new(uploads_dir))
        // Uploads are stored as-is, with no size cap.
        .layer(DefaultBodyLimit::disable())
        .layer(CorsLayer::permissive())
        .with_state(state)
}
