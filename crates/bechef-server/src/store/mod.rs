//! Document-collection access for the three record types.
//!
//! The backend is picked at startup and passed in as a trait object so tests
//! can substitute the in-memory implementation.

mod memory;
mod mongo;

pub use memory::MemoryStore;
pub use mongo::MongoStore;

use async_trait::async_trait;
use std::sync::Arc;
use thiserror::Error;

use crate::config::Config;
use crate::models::{NewContact, NewRecipe, NewUser, Recipe, User};

/// Error type for storage operations.
#[derive(Debug, Error)]
pub enum StoreError {
    #[error("database operation failed: {0}")]
    Database(#[from] mongodb::error::Error),
}

/// One collection per record type. Records are immutable once created; there
/// are no update or delete operations anywhere in the API.
///
/// Identifiers are assigned by the store at insert time and exposed as opaque
/// hex strings. `find_recipe` treats an id that is malformed for the backend's
/// id format as a lookup miss, not an error.
#[async_trait]
pub trait Store: Send + Sync {
    /// No uniqueness check on email: duplicate registrations are accepted.
    async fn insert_user(&self, user: NewUser) -> Result<User, StoreError>;

    /// First match wins when duplicates exist.
    async fn find_user_by_email(&self, email: &str) -> Result<Option<User>, StoreError>;

    async fn insert_recipe(&self, recipe: NewRecipe) -> Result<Recipe, StoreError>;

    /// Every recipe, in the backend's natural retrieval order.
    async fn list_recipes(&self) -> Result<Vec<Recipe>, StoreError>;

    async fn find_recipe(&self, id: &str) -> Result<Option<Recipe>, StoreError>;

    /// Contact messages are write-only; no read path exists.
    async fn insert_contact(&self, contact: NewContact) -> Result<(), StoreError>;
}

/// Pick the storage backend from configuration: MongoDB when MONGO_URL is
/// set, the in-memory store otherwise.
pub async fn create_store(config: &Config) -> Result<Arc<dyn Store>, StoreError> {
    match &config.mongo_url {
        Some(url) => {
            let store = MongoStore::connect(url).await?;
            tracing::info!("DB connected successfully");
            Ok(Arc::new(store))
        }
        None => {
            tracing::warn!("MONGO_URL not set, using in-memory store; records will not survive a restart");
            Ok(Arc::new(MemoryStore::new()))
        }
    }
}
