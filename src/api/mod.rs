pub mod health;
pub mod users;
pub mod sessions;
pub mod fun_facts;
pub mod meal_plans;
pub mod swagger;

use actix_web::{error::InternalError, web, ResponseError};
use utoipa::OpenApi;
use utoipa_swagger_ui::SwaggerUi;

use crate::utils::error::AppError;

/// Malformed bodies get the same JSON envelope as every other error
fn json_config() -> web::JsonConfig {
    web::JsonConfig::default().error_handler(|err, _req| {
        let response = AppError::Validation(format!("Invalid JSON body: {}", err)).error_response();
        InternalError::from_response(err, response).into()
    })
}

/// Full route table. Expects `web::Data<dyn DocumentStore>` and
/// `web::Data<dyn MealPlanner>` to be registered on the app.
pub fn configure(cfg: &mut web::ServiceConfig) {
    cfg.app_data(json_config())
        .service(
            SwaggerUi::new("/swagger-ui/{_:.*}")
                .url("/api-docs/openapi.json", swagger::ApiDoc::openapi()),
        )
        .route("/", web::get().to(health::index))
        .route("/health", web::get().to(health::health_check))
        .service(
            web::scope("/api")
                // Users
                .route("/createUser", web::post().to(users::create_user))
                .route("/getUsers", web::get().to(users::get_users))
                .route("/updateUser", web::put().to(users::update_user))
                .route("/deleteUser", web::delete().to(users::delete_user))
                // Meal plans
                .route("/generateMealPlan", web::post().to(meal_plans::generate_meal_plan))
                // Fun facts
                .route("/getFunFact", web::get().to(fun_facts::get_fun_fact))
                .route("/addFunFact", web::post().to(fun_facts::add_fun_fact))
                // Wellness sessions
                .service(
                    web::scope("/session")
                        .route("/history/{userId}", web::get().to(sessions::get_history))
                        .route("/create", web::post().to(sessions::create_session)),
                ),
        );
}
