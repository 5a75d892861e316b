use async_trait::async_trait;
use futures::stream::TryStreamExt;
use mongodb::bson::{doc, Document};
use mongodb::error::{ErrorKind, WriteFailure};
use mongodb::options::{IndexOptions, ReturnDocument};
use mongodb::{Client, Collection, Database, IndexModel};
use std::error::Error;

use crate::models::{FunFact, Profile, User, WellnessEntry};
use crate::utils::error::AppError;

pub mod store;

#[cfg(test)]
pub mod memory;

pub use store::DocumentStore;

pub const USERS: &str = "users";
pub const WELLNESS_ENTRIES: &str = "wellnessentries";
pub const FUN_FACTS: &str = "funfacts";

const DEFAULT_DATABASE: &str = "wellness";
const DUPLICATE_KEY: i32 = 11000;

#[derive(Clone)]
pub struct MongoDB {
    db: Database,
}

impl MongoDB {
    pub async fn new(uri: &str, database_name: Option<&str>) -> Result<Self, Box<dyn Error>> {
        let mut client_options = mongodb::options::ClientOptions::parse(uri).await?;

        client_options.app_name = Some("wellness-service".to_string());
        client_options.max_pool_size = Some(20);
        client_options.min_pool_size = Some(2);
        client_options.max_idle_time = Some(std::time::Duration::from_secs(300));
        client_options.connect_timeout = Some(std::time::Duration::from_secs(5));
        client_options.server_selection_timeout = Some(std::time::Duration::from_secs(5));

        // Explicit name, then the one in the URI path, then our default
        let db_name = database_name
            .map(str::to_string)
            .or_else(|| client_options.default_database.clone())
            .unwrap_or_else(|| DEFAULT_DATABASE.to_string());

        let client = Client::with_options(client_options)?;
        let db = client.database(&db_name);

        // Test connection
        db.run_command(doc! { "ping": 1 }).await?;
        log::info!("📊 Using database '{}'", db_name);

        let mongodb = Self { db };
        mongodb.ensure_indexes().await;

        Ok(mongodb)
    }

    /// Creates the indexes the routes rely on. Failures are logged only.
    async fn ensure_indexes(&self) {
        log::info!("🔧 Creating database indexes...");

        let unique = || IndexOptions::builder().unique(true).build();

        let indexes = [
            (USERS, doc! { "email": 1 }, Some(unique())),
            // One entry per email, as the entry schema declares
            (WELLNESS_ENTRIES, doc! { "email": 1 }, Some(unique())),
            (WELLNESS_ENTRIES, doc! { "user": 1 }, None),
        ];

        for (collection, keys, options) in indexes {
            let description = format!("{}({:?})", collection, keys.keys().collect::<Vec<_>>());
            let index = IndexModel::builder().keys(keys).options(options).build();

            match self.collection::<Document>(collection).create_index(index).await {
                Ok(_) => log::info!("   ✅ Index ready: {}", description),
                Err(e) => log::warn!("   ⚠️  Could not create index {}: {}", description, e),
            }
        }

        log::info!("✅ Database indexes ready");
    }

    pub fn collection<T: Send + Sync>(&self, name: &str) -> Collection<T> {
        self.db.collection(name)
    }
}

fn is_duplicate_key(err: &mongodb::error::Error) -> bool {
    matches!(
        err.kind.as_ref(),
        ErrorKind::Write(WriteFailure::WriteError(write_error)) if write_error.code == DUPLICATE_KEY
    )
}

fn duplicate_email(email: &str) -> AppError {
    AppError::Validation(format!("email '{}' is already registered", email))
}

#[async_trait]
impl DocumentStore for MongoDB {
    async fn ping(&self) -> Result<(), AppError> {
        self.db.run_command(doc! { "ping": 1 }).await?;
        Ok(())
    }

    async fn insert_user(&self, mut user: User) -> Result<User, AppError> {
        let result = self
            .collection::<User>(USERS)
            .insert_one(&user)
            .await
            .map_err(|e| {
                if is_duplicate_key(&e) {
                    duplicate_email(&user.email)
                } else {
                    AppError::from(e)
                }
            })?;

        user.id = Some(
            result
                .inserted_id
                .as_object_id()
                .ok_or_else(|| AppError::DatabaseError("inserted user has no ObjectId".into()))?,
        );
        Ok(user)
    }

    async fn list_users(&self) -> Result<Vec<User>, AppError> {
        let cursor = self.collection::<User>(USERS).find(doc! {}).await?;
        let users: Vec<User> = cursor.try_collect().await?;
        Ok(users)
    }

    async fn find_user_by_email(&self, email: &str) -> Result<Option<User>, AppError> {
        Ok(self
            .collection::<User>(USERS)
            .find_one(doc! { "email": email })
            .await?)
    }

    async fn update_user_by_email(
        &self,
        email: &str,
        profile: &Profile,
    ) -> Result<Option<User>, AppError> {
        let update = doc! {
            "$set": {
                "firstName": profile.first_name.as_str(),
                "lastName": profile.last_name.as_str(),
                "height": profile.height,
                "weight": profile.weight,
                "age": profile.age,
                "gender": profile.gender.as_str(),
            }
        };

        Ok(self
            .collection::<User>(USERS)
            .find_one_and_update(doc! { "email": email }, update)
            .return_document(ReturnDocument::After)
            .await?)
    }

    async fn delete_user_by_email(&self, email: &str) -> Result<Option<User>, AppError> {
        Ok(self
            .collection::<User>(USERS)
            .find_one_and_delete(doc! { "email": email })
            .await?)
    }

    async fn insert_entry(&self, mut entry: WellnessEntry) -> Result<WellnessEntry, AppError> {
        let result = self
            .collection::<WellnessEntry>(WELLNESS_ENTRIES)
            .insert_one(&entry)
            .await
            .map_err(|e| {
                if is_duplicate_key(&e) {
                    duplicate_email(&entry.email)
                } else {
                    AppError::from(e)
                }
            })?;

        entry.id = result.inserted_id.as_object_id();
        Ok(entry)
    }

    async fn entries_for_user(&self, user_id: &str) -> Result<Vec<WellnessEntry>, AppError> {
        let cursor = self
            .collection::<WellnessEntry>(WELLNESS_ENTRIES)
            .find(doc! { "user": user_id })
            .sort(doc! { "date": -1 })
            .await?;
        let entries: Vec<WellnessEntry> = cursor.try_collect().await?;
        Ok(entries)
    }

    async fn sample_fun_facts(&self, size: usize) -> Result<Vec<FunFact>, AppError> {
        let mut cursor = self
            .collection::<FunFact>(FUN_FACTS)
            .aggregate(vec![doc! { "$sample": { "size": size as i64 } }])
            .await?;

        let mut facts = Vec::with_capacity(size);
        while let Some(document) = cursor.try_next().await? {
            facts.push(mongodb::bson::from_document(document)?);
        }
        Ok(facts)
    }

    async fn insert_fun_fact(&self, mut fact: FunFact) -> Result<FunFact, AppError> {
        let result = self
            .collection::<FunFact>(FUN_FACTS)
            .insert_one(&fact)
            .await?;

        fact.id = result.inserted_id.as_object_id();
        Ok(fact)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    #[ignore] // Requires MongoDB to be running
    async fn test_mongodb_connection() {
        dotenv::dotenv().ok();

        let uri = std::env::var("MONGO_URI")
            .unwrap_or_else(|_| "mongodb://localhost:27017".to_string());
        let db = MongoDB::new(&uri, Some("wellness_test")).await;
        assert!(db.is_ok());
        assert!(db.unwrap().ping().await.is_ok());
    }
}
