use async_trait::async_trait;
use mongodb::bson::oid::ObjectId;
use std::sync::Mutex;

use super::DocumentStore;
use crate::models::{FunFact, Profile, User, WellnessEntry};
use crate::utils::error::AppError;

/// In-process store for tests. Enforces the same email uniqueness as the
/// MongoDB indexes; sampling returns the first `size` facts.
#[derive(Default)]
pub struct MemoryStore {
    users: Mutex<Vec<User>>,
    entries: Mutex<Vec<WellnessEntry>>,
    facts: Mutex<Vec<FunFact>>,
    offline: bool,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// A store whose every operation fails like an unreachable database
    pub fn offline() -> Self {
        MemoryStore {
            offline: true,
            ..Self::default()
        }
    }

    pub fn user_count(&self) -> usize {
        self.users.lock().unwrap().len()
    }

    pub fn entry_count(&self) -> usize {
        self.entries.lock().unwrap().len()
    }

    pub fn fact_count(&self) -> usize {
        self.facts.lock().unwrap().len()
    }

    fn check(&self) -> Result<(), AppError> {
        if self.offline {
            return Err(AppError::DatabaseError("server selection timeout".into()));
        }
        Ok(())
    }
}

#[async_trait]
impl DocumentStore for MemoryStore {
    async fn ping(&self) -> Result<(), AppError> {
        self.check()
    }

    async fn insert_user(&self, mut user: User) -> Result<User, AppError> {
        self.check()?;
        let mut users = self.users.lock().unwrap();
        if users.iter().any(|u| u.email == user.email) {
            return Err(AppError::Validation(format!(
                "email '{}' is already registered",
                user.email
            )));
        }
        user.id = Some(ObjectId::new());
        users.push(user.clone());
        Ok(user)
    }

    async fn list_users(&self) -> Result<Vec<User>, AppError> {
        self.check()?;
        Ok(self.users.lock().unwrap().clone())
    }

    async fn find_user_by_email(&self, email: &str) -> Result<Option<User>, AppError> {
        self.check()?;
        Ok(self.users.lock().unwrap().iter().find(|u| u.email == email).cloned())
    }

    async fn update_user_by_email(
        &self,
        email: &str,
        profile: &Profile,
    ) -> Result<Option<User>, AppError> {
        self.check()?;
        let mut users = self.users.lock().unwrap();
        Ok(users.iter_mut().find(|u| u.email == email).map(|user| {
            // Same fields as the `$set` in the MongoDB update
            user.first_name = profile.first_name.clone();
            user.last_name = profile.last_name.clone();
            user.height = profile.height;
            user.weight = profile.weight;
            user.age = profile.age;
            user.gender = profile.gender.clone();
            user.clone()
        }))
    }

    async fn delete_user_by_email(&self, email: &str) -> Result<Option<User>, AppError> {
        self.check()?;
        let mut users = self.users.lock().unwrap();
        Ok(users
            .iter()
            .position(|u| u.email == email)
            .map(|index| users.remove(index)))
    }

    async fn insert_entry(&self, mut entry: WellnessEntry) -> Result<WellnessEntry, AppError> {
        self.check()?;
        let mut entries = self.entries.lock().unwrap();
        if entries.iter().any(|e| e.email == entry.email) {
            return Err(AppError::Validation(format!(
                "email '{}' is already registered",
                entry.email
            )));
        }
        entry.id = Some(ObjectId::new());
        entries.push(entry.clone());
        Ok(entry)
    }

    async fn entries_for_user(&self, user_id: &str) -> Result<Vec<WellnessEntry>, AppError> {
        self.check()?;
        Ok(self
            .entries
            .lock()
            .unwrap()
            .iter()
            .filter(|e| e.user.as_deref() == Some(user_id))
            .cloned()
            .collect())
    }

    async fn sample_fun_facts(&self, size: usize) -> Result<Vec<FunFact>, AppError> {
        self.check()?;
        Ok(self.facts.lock().unwrap().iter().take(size).cloned().collect())
    }

    async fn insert_fun_fact(&self, mut fact: FunFact) -> Result<FunFact, AppError> {
        self.check()?;
        fact.id = Some(ObjectId::new());
        self.facts.lock().unwrap().push(fact.clone());
        Ok(fact)
    }
}
