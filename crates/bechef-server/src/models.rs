use serde::Serialize;
use utoipa::ToSchema;

/// A registered account. The password is stored as a one-way hash, never as
/// plaintext.
#[derive(Debug, Clone)]
pub struct User {
    pub id: String,
    pub username: String,
    pub email: String,
    pub password_hash: String,
}

#[derive(Debug, Clone)]
pub struct NewUser {
    pub username: String,
    pub email: String,
    pub password_hash: String,
}

/// A stored recipe. `image` holds the stored filename of the uploaded photo
/// and serializes as null when no file was attached.
#[derive(Debug, Clone, Serialize, ToSchema)]
pub struct Recipe {
    pub id: String,
    pub name: String,
    pub image: Option<String>,
    pub ingredients: String,
    pub procedure: String,
    pub note: Option<String>,
}

#[derive(Debug, Clone)]
pub struct NewRecipe {
    pub name: String,
    pub image: Option<String>,
    pub ingredients: String,
    pub procedure: String,
    pub note: Option<String>,
}

/// Contact-form submission. Write-only: no endpoint reads these back, they
/// are consumed by inspecting the database directly.
#[derive(Debug, Clone)]
pub struct NewContact {
    pub name: String,
    pub email: String,
    pub message: String,
}
