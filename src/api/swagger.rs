use utoipa::OpenApi;

#[derive(OpenApi)]
#[openapi(
    info(
        title = "Wellness Service API",
        version = "1.0.0",
        description = "REST backend for the wellness and meal-tracking app.\n\n**Features:**\n- User profiles keyed by email\n- Wellness session entries\n- Meal plan generation through a chat-completions API\n- Fun facts\n\nErrors share one envelope: `{ success: false, error, kind }`."
    ),
    paths(
        crate::api::health::health_check,

        crate::api::users::create_user,
        crate::api::users::get_users,
        crate::api::users::update_user,
        crate::api::users::delete_user,

        crate::api::sessions::get_history,
        crate::api::sessions::create_session,

        crate::api::fun_facts::get_fun_fact,
        crate::api::fun_facts::add_fun_fact,

        crate::api::meal_plans::generate_meal_plan,
    ),
    components(
        schemas(
            crate::api::health::HealthResponse,

            crate::models::ProfileRequest,
            crate::models::DeleteUserRequest,
            crate::models::UserResponse,

            crate::models::CreateSessionRequest,
            crate::models::WellnessEntryResponse,
            crate::api::sessions::CreateSessionResponse,

            crate::models::AddFunFactRequest,
            crate::models::FunFactResponse,
            crate::api::fun_facts::AddFunFactResponse,

            crate::api::meal_plans::MealPlanRequest,
            crate::api::meal_plans::MealPlanResponse,
        )
    ),
    tags(
        (name = "Health", description = "Liveness and database reachability."),
        (name = "Users", description = "User profile CRUD. Email is the natural key for update and delete."),
        (name = "Sessions", description = "Wellness session entries and per-user history."),
        (name = "Fun facts", description = "Random fun facts and submission."),
        (name = "Meal plans", description = "Meal plan generation proxied to the completion API."),
    )
)]
pub struct ApiDoc;
