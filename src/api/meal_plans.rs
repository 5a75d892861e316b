use actix_web::{web, HttpResponse, ResponseError};
use serde::{Deserialize, Serialize};

use crate::{services::MealPlanner, utils::error::AppError};

#[derive(Debug, Deserialize, utoipa::ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct MealPlanRequest {
    pub user_preferences: Option<String>,
}

#[derive(Serialize, utoipa::ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct MealPlanResponse {
    pub message: String,
    pub meal_plan: String,
}

/// POST /api/generateMealPlan
/// Repassa as preferências para a API de completions e devolve o texto gerado
#[utoipa::path(
    post,
    path = "/api/generateMealPlan",
    tag = "Meal plans",
    request_body = MealPlanRequest,
    responses(
        (status = 200, description = "Generated meal plan", body = MealPlanResponse),
        (status = 400, description = "userPreferences missing"),
        (status = 500, description = "Completion API failure")
    )
)]
pub async fn generate_meal_plan(
    planner: web::Data<dyn MealPlanner>,
    request: web::Json<MealPlanRequest>,
) -> HttpResponse {
    log::info!("🍽️  POST /api/generateMealPlan");

    let preferences = match request.user_preferences.as_deref() {
        Some(p) if !p.trim().is_empty() => p,
        _ => {
            return AppError::Validation("userPreferences is required".into()).error_response();
        }
    };

    match planner.generate(preferences).await {
        Ok(meal_plan) => {
            log::info!("✅ Meal plan generated ({} chars)", meal_plan.len());
            HttpResponse::Ok().json(MealPlanResponse {
                message: "Meal plan generated successfully".to_string(),
                meal_plan,
            })
        }
        Err(e) => {
            log::error!("❌ Error generating meal plan: {}", e);
            HttpResponse::build(e.status_code()).json(serde_json::json!({
                "success": false,
                "message": "An error occurred while generating the meal plan",
                "error": e.message(),
                "kind": e.kind()
            }))
        }
    }
}
