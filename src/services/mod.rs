pub mod user_service;
pub mod session_service;
pub mod fun_fact_service;
pub mod meal_plan_service;

pub use meal_plan_service::{MealPlanner, OpenAiMealPlanner};
