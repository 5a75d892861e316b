use mongodb::bson::oid::ObjectId;
use serde::{Deserialize, Serialize};

use crate::utils::error::AppError;

/// User profile (stored in the `users` collection)
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct User {
    #[serde(rename = "_id", skip_serializing_if = "Option::is_none")]
    pub id: Option<ObjectId>,
    pub first_name: String,
    pub last_name: String,
    /// Natural key for update and delete, unique across the collection
    pub email: String,
    pub height: f64,
    pub weight: f64,
    pub age: f64,
    pub gender: String,
}

impl User {
    pub fn new(profile: Profile) -> Self {
        User {
            id: None,
            first_name: profile.first_name,
            last_name: profile.last_name,
            email: profile.email,
            height: profile.height,
            weight: profile.weight,
            age: profile.age,
            gender: profile.gender,
        }
    }
}

/// The seven validated profile fields shared by users and wellness entries
#[derive(Debug, Clone, PartialEq)]
pub struct Profile {
    pub first_name: String,
    pub last_name: String,
    pub email: String,
    pub height: f64,
    pub weight: f64,
    pub age: f64,
    pub gender: String,
}

/// Request body for createUser, updateUser and session/create
///
/// Every field is optional at the wire level so that missing values are
/// reported together by [`ProfileRequest::validate`].
#[derive(Debug, Default, Clone, Deserialize, utoipa::ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct ProfileRequest {
    pub first_name: Option<String>,
    pub last_name: Option<String>,
    pub email: Option<String>,
    pub height: Option<f64>,
    pub weight: Option<f64>,
    pub age: Option<f64>,
    pub gender: Option<String>,
}

impl ProfileRequest {
    /// Email with surrounding whitespace removed, `None` when absent or blank
    pub fn email(&self) -> Option<&str> {
        self.email.as_deref().map(str::trim).filter(|e| !e.is_empty())
    }

    pub fn validate(self) -> Result<Profile, AppError> {
        let mut missing = Vec::new();

        let first_name = required_text(self.first_name, "firstName", &mut missing);
        let last_name = required_text(self.last_name, "lastName", &mut missing);
        // Stored trimmed so create, update and delete all key on the same value
        let email = required_text(self.email.map(|e| e.trim().to_string()), "email", &mut missing);
        let height = required_number(self.height, "height", &mut missing);
        let weight = required_number(self.weight, "weight", &mut missing);
        let age = required_number(self.age, "age", &mut missing);
        let gender = required_text(self.gender, "gender", &mut missing);

        if !missing.is_empty() {
            return Err(AppError::Validation(format!(
                "missing required field(s): {}",
                missing.join(", ")
            )));
        }

        Ok(Profile {
            first_name,
            last_name,
            email,
            height,
            weight,
            age,
            gender,
        })
    }
}

fn required_text(value: Option<String>, field: &'static str, missing: &mut Vec<&'static str>) -> String {
    match value {
        Some(v) if !v.trim().is_empty() => v,
        _ => {
            missing.push(field);
            String::new()
        }
    }
}

fn required_number(value: Option<f64>, field: &'static str, missing: &mut Vec<&'static str>) -> f64 {
    value.unwrap_or_else(|| {
        missing.push(field);
        0.0
    })
}

/// Request body for deleteUser
#[derive(Debug, Deserialize, utoipa::ToSchema)]
pub struct DeleteUserRequest {
    pub email: Option<String>,
}

/// Response de usuário
#[derive(Debug, Serialize, utoipa::ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct UserResponse {
    #[serde(rename = "_id")]
    pub id: String,
    pub first_name: String,
    pub last_name: String,
    pub email: String,
    pub height: f64,
    pub weight: f64,
    pub age: f64,
    pub gender: String,
}

impl From<User> for UserResponse {
    fn from(u: User) -> Self {
        UserResponse {
            id: u.id.map(|id| id.to_hex()).unwrap_or_default(),
            first_name: u.first_name,
            last_name: u.last_name,
            email: u.email,
            height: u.height,
            weight: u.weight,
            age: u.age,
            gender: u.gender,
        }
    }
}
