use actix_web::{web, HttpResponse, Responder};
use serde::{Deserialize, Serialize};

use crate::database::DocumentStore;

#[derive(Serialize, Deserialize, utoipa::ToSchema)]
pub struct HealthResponse {
    pub status: String,
    pub service: String,
    pub version: String,
    pub timestamp: i64,
    pub database: String,
}

/// GET / - Rota de teste
pub async fn index() -> impl Responder {
    HttpResponse::Ok()
        .content_type("text/plain; charset=utf-8")
        .body("Hello World!")
}

#[utoipa::path(
    get,
    path = "/health",
    tag = "Health",
    responses(
        (status = 200, description = "Service is up; database reachability is reported", body = HealthResponse)
    )
)]
pub async fn health_check(db: web::Data<dyn DocumentStore>) -> impl Responder {
    let (status, database) = match db.ping().await {
        Ok(()) => ("healthy", "connected"),
        Err(e) => {
            log::warn!("⚠️ Health check: database unreachable: {}", e);
            ("degraded", "unreachable")
        }
    };

    HttpResponse::Ok().json(HealthResponse {
        status: status.to_string(),
        service: "wellness-service".to_string(),
        version: env!("CARGO_PKG_VERSION").to_string(),
        timestamp: chrono::Utc::now().timestamp(),
        database: database.to_string(),
    })
}
