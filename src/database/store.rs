use async_trait::async_trait;

use crate::models::{FunFact, Profile, User, WellnessEntry};
use crate::utils::error::AppError;

/// Document store seen by the services.
///
/// Handlers receive it as `web::Data<dyn DocumentStore>`; the MongoDB
/// implementation lives in [`super::MongoDB`].
#[async_trait]
pub trait DocumentStore: Send + Sync {
    async fn ping(&self) -> Result<(), AppError>;

    /// Persists a new user and returns it with its generated id.
    /// A second user with the same email is rejected.
    async fn insert_user(&self, user: User) -> Result<User, AppError>;

    async fn list_users(&self) -> Result<Vec<User>, AppError>;

    async fn find_user_by_email(&self, email: &str) -> Result<Option<User>, AppError>;

    /// Overwrites the mutable fields of the user matching `email` in one
    /// atomic operation and returns the updated document.
    async fn update_user_by_email(
        &self,
        email: &str,
        profile: &Profile,
    ) -> Result<Option<User>, AppError>;

    async fn delete_user_by_email(&self, email: &str) -> Result<Option<User>, AppError>;

    async fn insert_entry(&self, entry: WellnessEntry) -> Result<WellnessEntry, AppError>;

    /// Entries whose `user` field equals `user_id`
    async fn entries_for_user(&self, user_id: &str) -> Result<Vec<WellnessEntry>, AppError>;

    /// Up to `size` randomly sampled facts
    async fn sample_fun_facts(&self, size: usize) -> Result<Vec<FunFact>, AppError>;

    async fn insert_fun_fact(&self, fact: FunFact) -> Result<FunFact, AppError>;
}
