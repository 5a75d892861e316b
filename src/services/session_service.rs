// ==================== WELLNESS SESSIONS ====================

use mongodb::bson::DateTime;

use crate::{
    database::DocumentStore,
    models::{CreateSessionRequest, WellnessEntry},
    utils::error::AppError,
};

/// POST /session/create - Cria uma entrada com data atribuída pelo servidor
pub async fn create_session(
    db: &dyn DocumentStore,
    request: CreateSessionRequest,
) -> Result<WellnessEntry, AppError> {
    let user = request
        .user_id
        .map(|id| id.trim().to_string())
        .filter(|id| !id.is_empty());
    let profile = request.profile.validate()?;

    log::info!("📝 Creating wellness entry for {}", profile.email);

    let entry = db
        .insert_entry(WellnessEntry::new(profile, user, DateTime::now()))
        .await?;

    log::info!("✅ Wellness entry created: {:?}", entry.id);
    Ok(entry)
}

/// GET /session/history/{userId} - Entradas ligadas a esse usuário
///
/// Only entries created with a `userId` carry the reference, so older
/// entries never appear here.
pub async fn session_history(
    db: &dyn DocumentStore,
    user_id: &str,
) -> Result<Vec<WellnessEntry>, AppError> {
    let entries = db.entries_for_user(user_id).await?;

    log::info!("📋 Found {} wellness entries for user {}", entries.len(), user_id);
    Ok(entries)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::database::memory::MemoryStore;
    use crate::models::ProfileRequest;

    fn request(email: &str, user_id: Option<&str>) -> CreateSessionRequest {
        CreateSessionRequest {
            profile: ProfileRequest {
                first_name: Some("A".into()),
                last_name: Some("B".into()),
                email: Some(email.into()),
                height: Some(170.0),
                weight: Some(70.0),
                age: Some(30.0),
                gender: Some("F".into()),
            },
            user_id: user_id.map(str::to_string),
        }
    }

    #[tokio::test]
    async fn test_create_assigns_id_and_date() {
        let db = MemoryStore::new();
        let before = DateTime::now();

        let entry = create_session(&db, request("a@b.com", None)).await.unwrap();

        assert!(entry.id.is_some());
        assert!(entry.date >= before);
        assert_eq!(entry.user, None);
    }

    #[tokio::test]
    async fn test_history_ignores_unlinked_entries() {
        let db = MemoryStore::new();
        create_session(&db, request("a@b.com", None)).await.unwrap();
        create_session(&db, request("c@d.com", None)).await.unwrap();

        let history = session_history(&db, "123").await.unwrap();
        assert!(history.is_empty());
    }

    #[tokio::test]
    async fn test_history_returns_linked_entries() {
        let db = MemoryStore::new();
        create_session(&db, request("a@b.com", Some("123"))).await.unwrap();
        create_session(&db, request("c@d.com", Some("456"))).await.unwrap();

        let history = session_history(&db, "123").await.unwrap();
        assert_eq!(history.len(), 1);
        assert_eq!(history[0].email, "a@b.com");
    }

    #[tokio::test]
    async fn test_blank_user_id_is_not_stored() {
        let db = MemoryStore::new();
        let entry = create_session(&db, request("a@b.com", Some("  "))).await.unwrap();
        assert_eq!(entry.user, None);
    }

    #[tokio::test]
    async fn test_missing_field_is_not_persisted() {
        let db = MemoryStore::new();
        let mut incomplete = request("a@b.com", Some("123"));
        incomplete.profile.weight = None;

        let result = create_session(&db, incomplete).await;
        assert_eq!(
            result.map(|e| e.email),
            Err(AppError::Validation("missing required field(s): weight".into()))
        );
        assert_eq!(db.entry_count(), 0);
    }

    #[tokio::test]
    async fn test_duplicate_email_is_rejected() {
        let db = MemoryStore::new();
        create_session(&db, request("a@b.com", Some("123"))).await.unwrap();

        let second = create_session(&db, request("a@b.com", Some("123"))).await;
        assert!(matches!(second, Err(AppError::Validation(_))));
        assert_eq!(db.entry_count(), 1);
    }
}
