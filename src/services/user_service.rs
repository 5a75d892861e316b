// ==================== USER PROFILES ====================
// CRUD sobre a coleção `users`; o email é a chave natural para update/delete

use crate::{
    database::DocumentStore,
    models::{DeleteUserRequest, ProfileRequest, User},
    utils::error::AppError,
};

/// POST /createUser - Valida os sete campos e persiste o usuário
pub async fn create_user(db: &dyn DocumentStore, request: ProfileRequest) -> Result<User, AppError> {
    let profile = request.validate()?;

    log::info!("📝 Creating user {}", profile.email);

    let user = db.insert_user(User::new(profile)).await?;

    log::info!("✅ User created: {}", user.email);
    Ok(user)
}

/// GET /getUsers - Lista todos os usuários (sem paginação)
pub async fn list_users(db: &dyn DocumentStore) -> Result<Vec<User>, AppError> {
    db.list_users().await
}

/// PUT /updateUser - Sobrescreve os seis campos mutáveis do usuário com esse email
pub async fn update_user(db: &dyn DocumentStore, request: ProfileRequest) -> Result<User, AppError> {
    let email = request
        .email()
        .ok_or_else(|| AppError::Validation("missing required field(s): email".into()))?
        .to_string();

    // Lookup first so an unknown email is reported before field validation
    if db.find_user_by_email(&email).await?.is_none() {
        return Err(AppError::NotFound("User not found".into()));
    }

    let mut profile = request.validate()?;
    profile.email = email.clone();

    log::info!("🔧 Updating user {}", email);

    db.update_user_by_email(&email, &profile)
        .await?
        .ok_or_else(|| AppError::NotFound("User not found".into()))
}

/// DELETE /deleteUser - Remove o usuário com esse email
pub async fn delete_user(db: &dyn DocumentStore, request: DeleteUserRequest) -> Result<User, AppError> {
    let email = request
        .email
        .as_deref()
        .map(str::trim)
        .filter(|e| !e.is_empty())
        .ok_or_else(|| AppError::Validation("missing required field(s): email".into()))?;

    log::info!("🗑️  Deleting user {}", email);

    db.delete_user_by_email(email)
        .await?
        .ok_or_else(|| AppError::NotFound("User not found".into()))
}
