//! In-memory store for tests and for running without a database.

use async_trait::async_trait;
use mongodb::bson::oid::ObjectId;
use std::sync::Mutex;

use super::{Store, StoreError};
use crate::models::{NewContact, NewRecipe, NewUser, Recipe, User};

/// Vector-backed store. Listing order is insertion order, and ids use the
/// same ObjectId hex format as the MongoDB backend so malformed-id behavior
/// matches across backends.
#[derive(Debug, Default)]
pub struct MemoryStore {
    users: Mutex<Vec<User>>,
    recipes: Mutex<Vec<Recipe>>,
    contacts: Mutex<Vec<NewContact>>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }
}

#[async_trait]
impl Store for MemoryStore {
    async fn insert_user(&self, user: NewUser) -> Result<User, StoreError> {
        let user = User {
            id: ObjectId::new().to_hex(),
            username: user.username,
            email: user.email,
            password_hash: user.password_hash,
        };
        self.users.lock().unwrap().push(user.clone());
        Ok(user)
    }

    async fn find_user_by_email(&self, email: &str) -> Result<Option<User>, StoreError> {
        let users = self.users.lock().unwrap();
        Ok(users.iter().find(|u| u.email == email).cloned())
    }

    async fn insert_recipe(&self, recipe: NewRecipe) -> Result<Recipe, StoreError> {
        let recipe = Recipe {
            id: ObjectId::new().to_hex(),
            name: recipe.name,
            image: recipe.image,
            ingredients: recipe.ingredients,
            procedure: recipe.procedure,
            note: recipe.note,
        };
        self.recipes.lock().unwrap().push(recipe.clone());
        Ok(recipe)
    }

    async fn list_recipes(&self) -> Result<Vec<Recipe>, StoreError> {
        Ok(self.recipes.lock().unwrap().clone())
    }

    async fn find_recipe(&self, id: &str) -> Result<Option<Recipe>, StoreError> {
        let recipes = self.recipes.lock().unwrap();
        Ok(recipes.iter().find(|r| r.id == id).cloned())
    }

    async fn insert_contact(&self, contact: NewContact) -> Result<(), StoreError> {
        self.contacts.lock().unwrap().push(contact);
        Ok(())
    }
}
