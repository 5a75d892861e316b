use actix_web::{web, HttpResponse, ResponseError};
use serde::Serialize;

use crate::{
    database::DocumentStore,
    models::{AddFunFactRequest, FunFactResponse},
    services::fun_fact_service,
};

#[derive(Serialize, utoipa::ToSchema)]
pub struct AddFunFactResponse {
    pub message: String,
    pub data: FunFactResponse,
}

/// GET /api/getFunFact - Até dois fatos aleatórios
#[utoipa::path(
    get,
    path = "/api/getFunFact",
    tag = "Fun facts",
    responses(
        (status = 200, description = "Up to two random facts", body = [FunFactResponse]),
        (status = 500, description = "Database failure")
    )
)]
pub async fn get_fun_fact(db: web::Data<dyn DocumentStore>) -> HttpResponse {
    log::info!("🎲 GET /api/getFunFact");

    match fun_fact_service::random_fun_facts(db.get_ref()).await {
        Ok(facts) => {
            let facts: Vec<FunFactResponse> = facts.into_iter().map(FunFactResponse::from).collect();
            HttpResponse::Ok().json(facts)
        }
        Err(e) => {
            log::error!("❌ Failed to sample fun facts: {}", e);
            e.error_response()
        }
    }
}

/// POST /api/addFunFact
#[utoipa::path(
    post,
    path = "/api/addFunFact",
    tag = "Fun facts",
    request_body = AddFunFactRequest,
    responses(
        (status = 200, description = "Fact saved", body = AddFunFactResponse),
        (status = 400, description = "Fact missing or blank"),
        (status = 500, description = "Database failure")
    )
)]
pub async fn add_fun_fact(
    db: web::Data<dyn DocumentStore>,
    request: web::Json<AddFunFactRequest>,
) -> HttpResponse {
    log::info!("📝 POST /api/addFunFact");

    match fun_fact_service::add_fun_fact(db.get_ref(), request.into_inner()).await {
        Ok(fact) => HttpResponse::Ok().json(AddFunFactResponse {
            message: "Fun fact saved successfully".to_string(),
            data: FunFactResponse::from(fact),
        }),
        Err(e) => {
            log::warn!("⚠️ Failed to save fun fact: {}", e);
            e.error_response()
        }
    }
}
