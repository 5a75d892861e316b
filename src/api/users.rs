use actix_web::{web, HttpResponse, ResponseError};

use crate::{
    database::DocumentStore,
    models::{DeleteUserRequest, ProfileRequest, UserResponse},
    services::user_service,
};

/// POST /api/createUser - Cria um usuário
#[utoipa::path(
    post,
    path = "/api/createUser",
    tag = "Users",
    request_body = ProfileRequest,
    responses(
        (status = 201, description = "User created", body = UserResponse),
        (status = 400, description = "Missing field or email already registered"),
        (status = 500, description = "Database failure")
    )
)]
pub async fn create_user(
    db: web::Data<dyn DocumentStore>,
    request: web::Json<ProfileRequest>,
) -> HttpResponse {
    log::info!("📝 POST /api/createUser");

    match user_service::create_user(db.get_ref(), request.into_inner()).await {
        Ok(user) => HttpResponse::Created().json(UserResponse::from(user)),
        Err(e) => {
            log::warn!("⚠️ Failed to create user: {}", e);
            e.error_response()
        }
    }
}

/// GET /api/getUsers - Lista todos os usuários
#[utoipa::path(
    get,
    path = "/api/getUsers",
    tag = "Users",
    responses(
        (status = 200, description = "Every stored user", body = [UserResponse]),
        (status = 500, description = "Database failure")
    )
)]
pub async fn get_users(db: web::Data<dyn DocumentStore>) -> HttpResponse {
    log::info!("📋 GET /api/getUsers");

    match user_service::list_users(db.get_ref()).await {
        Ok(users) => {
            log::info!("✅ Listed {} users", users.len());
            let users: Vec<UserResponse> = users.into_iter().map(UserResponse::from).collect();
            HttpResponse::Ok().json(users)
        }
        Err(e) => {
            log::error!("❌ Error listing users: {}", e);
            e.error_response()
        }
    }
}

/// PUT /api/updateUser - Atualiza o usuário pelo email
#[utoipa::path(
    put,
    path = "/api/updateUser",
    tag = "Users",
    request_body = ProfileRequest,
    responses(
        (status = 200, description = "Updated user", body = UserResponse),
        (status = 400, description = "Missing field"),
        (status = 404, description = "No user with that email"),
        (status = 500, description = "Database failure")
    )
)]
pub async fn update_user(
    db: web::Data<dyn DocumentStore>,
    request: web::Json<ProfileRequest>,
) -> HttpResponse {
    log::info!("🔧 PUT /api/updateUser - {:?}", request.email());

    match user_service::update_user(db.get_ref(), request.into_inner()).await {
        Ok(user) => {
            log::info!("✅ User updated: {}", user.email);
            HttpResponse::Ok().json(UserResponse::from(user))
        }
        Err(e) => {
            log::warn!("⚠️ Failed to update user: {}", e);
            e.error_response()
        }
    }
}

/// DELETE /api/deleteUser - Remove o usuário pelo email
#[utoipa::path(
    delete,
    path = "/api/deleteUser",
    tag = "Users",
    request_body = DeleteUserRequest,
    responses(
        (status = 200, description = "Deleted user", body = UserResponse),
        (status = 404, description = "No user with that email"),
        (status = 500, description = "Database failure")
    )
)]
pub async fn delete_user(
    db: web::Data<dyn DocumentStore>,
    request: web::Json<DeleteUserRequest>,
) -> HttpResponse {
    log::info!("🗑️  DELETE /api/deleteUser - {:?}", request.email);

    match user_service::delete_user(db.get_ref(), request.into_inner()).await {
        Ok(user) => {
            log::info!("✅ User deleted: {}", user.email);
            HttpResponse::Ok().json(UserResponse::from(user))
        }
        Err(e) => {
            log::warn!("⚠️ Failed to delete user: {}", e);
            e.error_response()
        }
    }
}
