use mongodb::bson::{oid::ObjectId, DateTime};
use serde::{Deserialize, Serialize};

use super::user::{Profile, ProfileRequest};

/// Wellness session entry (stored in the `wellnessentries` collection)
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct WellnessEntry {
    #[serde(rename = "_id", skip_serializing_if = "Option::is_none")]
    pub id: Option<ObjectId>,

    /// Owner reference matched by the history lookup. Entries created
    /// without one never show up in any history.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub user: Option<String>,

    pub first_name: String,
    pub last_name: String,
    pub email: String,
    pub height: f64,
    pub weight: f64,
    pub age: f64,
    pub gender: String,

    /// Creation time, assigned by the server
    pub date: DateTime,
}

impl WellnessEntry {
    pub fn new(profile: Profile, user: Option<String>, date: DateTime) -> Self {
        WellnessEntry {
            id: None,
            user,
            first_name: profile.first_name,
            last_name: profile.last_name,
            email: profile.email,
            height: profile.height,
            weight: profile.weight,
            age: profile.age,
            gender: profile.gender,
            date,
        }
    }
}

/// Request para criar uma sessão
#[derive(Debug, Default, Deserialize, utoipa::ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct CreateSessionRequest {
    #[serde(flatten)]
    pub profile: ProfileRequest,
    /// Optional owner id, stored in the entry's `user` field
    pub user_id: Option<String>,
}

#[derive(Debug, Serialize, utoipa::ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct WellnessEntryResponse {
    #[serde(rename = "_id")]
    pub id: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub user: Option<String>,
    pub first_name: String,
    pub last_name: String,
    pub email: String,
    pub height: f64,
    pub weight: f64,
    pub age: f64,
    pub gender: String,
    /// RFC 3339
    pub date: String,
}

impl From<WellnessEntry> for WellnessEntryResponse {
    fn from(e: WellnessEntry) -> Self {
        WellnessEntryResponse {
            id: e.id.map(|id| id.to_hex()).unwrap_or_default(),
            user: e.user,
            first_name: e.first_name,
            last_name: e.last_name,
            email: e.email,
            height: e.height,
            weight: e.weight,
            age: e.age,
            gender: e.gender,
            date: e.date.try_to_rfc3339_string().unwrap_or_default(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_session_request_flattens_profile() {
        let request: CreateSessionRequest = serde_json::from_value(serde_json::json!({
            "firstName": "A",
            "lastName": "B",
            "email": "a@b.com",
            "height": 170,
            "weight": 70,
            "age": 30,
            "gender": "F",
            "userId": "123"
        }))
        .unwrap();

        assert_eq!(request.user_id.as_deref(), Some("123"));
        assert_eq!(request.profile.email(), Some("a@b.com"));
    }

    #[test]
    fn test_response_formats_date() {
        let profile = ProfileRequest {
            first_name: Some("A".into()),
            last_name: Some("B".into()),
            email: Some("a@b.com".into()),
            height: Some(170.0),
            weight: Some(70.0),
            age: Some(30.0),
            gender: Some("F".into()),
        }
        .validate()
        .unwrap();

        let entry = WellnessEntry::new(profile, None, DateTime::from_millis(0));
        let json = serde_json::to_value(WellnessEntryResponse::from(entry)).unwrap();

        assert_eq!(json["date"], "1970-01-01T00:00:00Z");
        assert!(json.get("user").is_none());
    }
}
