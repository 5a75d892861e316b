use actix_web::{web, HttpResponse, ResponseError};
use serde::Serialize;

use crate::{
    database::DocumentStore,
    models::{CreateSessionRequest, WellnessEntryResponse},
    services::session_service,
};

#[derive(Serialize, utoipa::ToSchema)]
pub struct CreateSessionResponse {
    pub message: String,
    pub entry: WellnessEntryResponse,
}

/// GET /api/session/history/{userId} - Histórico de sessões do usuário
#[utoipa::path(
    get,
    path = "/api/session/history/{userId}",
    tag = "Sessions",
    params(
        ("userId" = String, Path, description = "Value stored in the entries' user field")
    ),
    responses(
        (status = 200, description = "Entries linked to the user, newest first", body = [WellnessEntryResponse]),
        (status = 500, description = "Database failure")
    )
)]
pub async fn get_history(
    db: web::Data<dyn DocumentStore>,
    user_id: web::Path<String>,
) -> HttpResponse {
    log::info!("📋 GET /api/session/history/{}", user_id);

    match session_service::session_history(db.get_ref(), &user_id).await {
        Ok(entries) => {
            let entries: Vec<WellnessEntryResponse> =
                entries.into_iter().map(WellnessEntryResponse::from).collect();
            HttpResponse::Ok().json(entries)
        }
        Err(e) => {
            log::error!("❌ Failed to fetch session history: {}", e);
            e.error_response()
        }
    }
}

/// POST /api/session/create - Cria uma entrada de bem-estar
#[utoipa::path(
    post,
    path = "/api/session/create",
    tag = "Sessions",
    request_body = CreateSessionRequest,
    responses(
        (status = 201, description = "Entry created", body = CreateSessionResponse),
        (status = 400, description = "Missing field or email already used"),
        (status = 500, description = "Database failure")
    )
)]
pub async fn create_session(
    db: web::Data<dyn DocumentStore>,
    request: web::Json<CreateSessionRequest>,
) -> HttpResponse {
    log::info!("📝 POST /api/session/create");

    match session_service::create_session(db.get_ref(), request.into_inner()).await {
        Ok(entry) => HttpResponse::Created().json(CreateSessionResponse {
            message: "Wellness entry created successfully".to_string(),
            entry: WellnessEntryResponse::from(entry),
        }),
        Err(e) => {
            log::warn!("⚠️ Failed to create wellness entry: {}", e);
            e.error_response()
        }
    }
}
