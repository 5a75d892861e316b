use mongodb::bson::oid::ObjectId;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FunFact {
    #[serde(rename = "_id", skip_serializing_if = "Option::is_none")]
    pub id: Option<ObjectId>,
    pub fact: String,
}

#[derive(Debug, Deserialize, utoipa::ToSchema)]
pub struct AddFunFactRequest {
    pub fact: Option<String>,
}

#[derive(Debug, Serialize, utoipa::ToSchema)]
pub struct FunFactResponse {
    #[serde(rename = "_id")]
    pub id: String,
    pub fact: String,
}

impl From<FunFact> for FunFactResponse {
    fn from(f: FunFact) -> Self {
        FunFactResponse {
            id: f.id.map(|id| id.to_hex()).unwrap_or_default(),
            fact: f.fact,
        }
    }
}
