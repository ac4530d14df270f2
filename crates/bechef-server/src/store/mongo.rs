use async_trait::async_trait;
use futures::stream::TryStreamExt;
use mongodb::bson::doc;
use mongodb::bson::oid::ObjectId;
use mongodb::{Client, Collection};
use serde::{Deserialize, Serialize};

use super::{Store, StoreError};
use crate::models::{NewContact, NewRecipe, NewUser, Recipe, User};

/// MongoDB-backed store. Ids are ObjectIds assigned at insert time and
/// exposed as 24-character hex strings.
#[derive(Debug, Clone)]
pub struct MongoStore {
    users: Collection<UserDoc>,
    recipes: Collection<RecipeDoc>,
    contacts: Collection<ContactDoc>,
}

#[derive(Debug, Serialize, Deserialize)]
struct UserDoc {
    #[serde(rename = "_id")]
    id: ObjectId,
    username: String,
    email: String,
    password_hash: String,
}

#[derive(Debug, Serialize, Deserialize)]
struct RecipeDoc {
    #[serde(rename = "_id")]
    id: ObjectId,
    name: String,
    image: Option<String>,
    ingredients: String,
    procedure: String,
    note: Option<String>,
}

#[derive(Debug, Serialize, Deserialize)]
struct ContactDoc {
    #[serde(rename = "_id")]
    id: ObjectId,
    name: String,
    email: String,
    message: String,
}

impl From<UserDoc> for User {
    fn from(doc: UserDoc) -> Self {
        Self {
            id: doc.id.to_hex(),
            username: doc.username,
            email: doc.email,
            password_hash: doc.password_hash,
        }
    }
}

impl From<RecipeDoc> for Recipe {
    fn from(doc: RecipeDoc) -> Self {
        Self {
            id: doc.id.to_hex(),
            name: doc.name,
            image: doc.image,
            ingredients: doc.ingredients,
            procedure: doc.procedure,
            note: doc.note,
        }
    }
}

impl MongoStore {
    /// Connect using a MongoDB connection string. The database name comes
    /// from the connection string, falling back to "bechef".
    pub async fn connect(url: &str) -> Result<Self, StoreError> {
        let client = Client::with_uri_str(url).await?;
        let db = client
            .default_database()
            .unwrap_or_else(|| client.database("bechef"));

        Ok(Self {
            users: db.collection("users"),
            recipes: db.collection("recipes"),
            contacts: db.collection("contacts"),
        })
    }
}

#[async_trait]
impl Store for MongoStore {
    async fn insert_user(&self, user: NewUser) -> Result<User, StoreError> {
        let doc = UserDoc {
            id: ObjectId::new(),
            username: user.username,
            email: user.email,
            password_hash: user.password_hash,
        };
        self.users.insert_one(&doc, None).await?;
        Ok(doc.into())
    }

    async fn find_user_by_email(&self, email: &str) -> Result<Option<User>, StoreError> {
        let found = self.users.find_one(doc! { "email": email }, None).await?;
        Ok(found.map(Into::into))
    }

    async fn insert_recipe(&self, recipe: NewRecipe) -> Result<Recipe, StoreError> {
        let doc = RecipeDoc {
            id: ObjectId::new(),
            name: recipe.name,
            image: recipe.image,
            ingredients: recipe.ingredients,
            procedure: recipe.procedure,
            note: recipe.note,
        };
        self.recipes.insert_one(&doc, None).await?;
        Ok(doc.into())
    }

    async fn list_recipes(&self) -> Result<Vec<Recipe>, StoreError> {
        let mut cursor = self.recipes.find(None, None).await?;
        let mut recipes = Vec::new();
        while let Some(doc) = cursor.try_next().await? {
            recipes.push(doc.into());
        }
        Ok(recipes)
    }

    async fn find_recipe(&self, id: &str) -> Result<Option<Recipe>, StoreError> {
        // An id that is not valid ObjectId hex can never match a stored
        // record, so it is a miss rather than an error.
        let oid = match ObjectId::parse_str(id) {
            Ok(oid) => oid,
            Err(_) => return Ok(None),
        };
        let found = self.recipes.find_one(doc! { "_id": oid }, None).await?;
        Ok(found.map(Into::into))
    }

    async fn insert_contact(&self, contact: NewContact) -> Result<(), StoreError> {
        let doc = ContactDoc {
            id: ObjectId::new(),
            name: contact.name,
            email: contact.email,
            message: contact.message,
        };
        self.contacts.insert_one(&doc, None).await?;
        Ok(())
    }
}
