//! End-to-end tests over the real router, using the in-memory store and a
//! temporary upload directory.

use axum_test::multipart::{MultipartForm, Part};
use axum_test::TestServer;
use pretty_assertions::assert_eq;
use serde_json::{json, Value};
use std::sync::Arc;
use tempfile::TempDir;

use bechef_server::store::MemoryStore;
use bechef_server::uploads::UploadStore;
use bechef_server::{app, AppState};

fn test_server() -> (TestServer, TempDir) {
    let uploads_dir = TempDir::new().unwrap();
    let state = AppState {
        store: Arc::new(MemoryStore::new()),
        uploads: Arc::new(UploadStore::new(uploads_dir.path())),
    };
    (TestServer::new(app(state)).unwrap(), uploads_dir)
}

fn soup_form() -> MultipartForm {
    MultipartForm::new()
        .add_text("name", "Soup")
        .add_text("ingredients", "water")
        .add_text("procedure", "boil")
}

#[tokio::test]
async fn home_serves_banner() {
    let (server, _uploads) = test_server();

    let response = server.get("/").await;

    assert_eq!(response.status_code().as_u16(), 200);
    assert!(response.text().contains("BeChef"));
}

#[tokio::test]
async fn register_then_login() {
    let (server, _uploads) = test_server();

    let response = server
        .post("/register")
        .json(&json!({"username": "a", "email": "a@x.com", "password": "secret"}))
        .await;
    assert_eq!(response.status_code().as_u16(), 200);
    let body: Value = response.json();
    assert_eq!(body["message"], "User Registered Successfully");

    let response = server
        .post("/login")
        .json(&json!({"email": "a@x.com", "password": "wrong"}))
        .await;
    assert_eq!(response.status_code().as_u16(), 400);
    let body: Value = response.json();
    assert_eq!(body["message"], "Invalid Credentials");

    let response = server
        .post("/login")
        .json(&json!({"email": "a@x.com", "password": "secret"}))
        .await;
    assert_eq!(response.status_code().as_u16(), 200);
    let body: Value = response.json();
    assert_eq!(body["message"], "Login Successful");
    assert_eq!(body["username"], "a");
}

#[tokio::test]
async fn unknown_email_and_wrong_password_are_indistinguishable() {
    let (server, _uploads) = test_server();

    server
        .post("/register")
        .json(&json!({"username": "a", "email": "a@x.com", "password": "secret"}))
        .await;

    let no_account = server
        .post("/login")
        .json(&json!({"email": "nobody@x.com", "password": "secret"}))
        .await;
    let wrong_password = server
        .post("/login")
        .json(&json!({"email": "a@x.com", "password": "wrong"}))
        .await;

    assert_eq!(no_account.status_code(), wrong_password.status_code());
    assert_eq!(no_account.text(), wrong_password.text());
}

#[tokio::test]
async fn add_recipe_without_file_stores_null_image() {
    let (server, _uploads) = test_server();

    let response = server.post("/add-recipe").multipart(soup_form()).await;
    assert_eq!(response.status_code().as_u16(), 200);
    let body: Value = response.json();
    assert_eq!(body["message"], "Recipe Added Successfully");
    assert_eq!(body["recipe"]["name"], "Soup");
    assert!(body["recipe"]["image"].is_null());
    assert!(body["recipe"]["note"].is_null());
    let id = body["recipe"]["id"].as_str().unwrap().to_string();

    let response = server.get("/recipes").await;
    assert_eq!(response.status_code().as_u16(), 200);
    let recipes: Value = response.json();
    let recipes = recipes.as_array().unwrap();
    assert_eq!(recipes.len(), 1);
    assert!(recipes[0]["image"].is_null());

    let response = server.get(&format!("/recipes/{id}")).await;
    assert_eq!(response.status_code().as_u16(), 200);
    let body: Value = response.json();
    assert_eq!(body["name"], "Soup");
    assert_eq!(body["ingredients"], "water");
    assert_eq!(body["procedure"], "boil");
}

#[tokio::test]
async fn add_recipe_with_file_stores_the_bytes() {
    let (server, uploads_dir) = test_server();
    let image_bytes = b"\x89PNG fake image contents".to_vec();

    let form = soup_form().add_part(
        "image",
        Part::bytes(image_bytes.clone())
            .file_name("dish.png")
            .mime_type("image/png"),
    );

    let response = server.post("/add-recipe").multipart(form).await;
    assert_eq!(response.status_code().as_u16(), 200);
    let body: Value = response.json();
    let stored = body["recipe"]["image"].as_str().unwrap().to_string();
    assert!(stored.ends_with("-dish.png"));

    // The stored reference resolves to a byte-for-byte copy on disk...
    let on_disk = std::fs::read(uploads_dir.path().join(&stored)).unwrap();
    assert_eq!(on_disk, image_bytes);

    // ...and through the static /uploads route.
    let response = server.get(&format!("/uploads/{stored}")).await;
    assert_eq!(response.status_code().as_u16(), 200);
    assert_eq!(response.as_bytes().to_vec(), image_bytes);
}

#[tokio::test]
async fn add_recipe_rejects_missing_required_fields() {
    let (server, _uploads) = test_server();

    let form = MultipartForm::new()
        .add_text("name", "Soup")
        .add_text("ingredients", "water");

    let response = server.post("/add-recipe").multipart(form).await;
    assert_eq!(response.status_code().as_u16(), 400);
    let body: Value = response.json();
    assert_eq!(body["message"], "Procedure cannot be empty");
}

#[tokio::test]
async fn get_recipe_misses_return_not_found_never_500() {
    let (server, _uploads) = test_server();

    // Well-formed id that was never assigned.
    let response = server.get("/recipes/64f000000000000000000000").await;
    assert_eq!(response.status_code().as_u16(), 404);
    let body: Value = response.json();
    assert_eq!(body["message"], "Recipe Not Found");

    // Malformed id collapses into the same miss.
    let response = server.get("/recipes/not-a-valid-id").await;
    assert_eq!(response.status_code().as_u16(), 404);
    let body: Value = response.json();
    assert_eq!(body["message"], "Recipe Not Found");
}

#[tokio::test]
async fn contact_returns_fixed_acknowledgment() {
    let (server, _uploads) = test_server();

    let response = server
        .post("/contact")
        .json(&json!({"name": "b", "email": "b@x.com", "message": "hi"}))
        .await;
    assert_eq!(response.status_code().as_u16(), 200);
    let body: Value = response.json();
    assert_eq!(body["message"], "Thank You! Your Message Has Been Sent.");

    // Contact messages are write-only; there is no read path.
    let response = server.get("/contact").await;
    assert_eq!(response.status_code().as_u16(), 405);
}
