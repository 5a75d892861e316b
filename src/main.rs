mod api;
mod config;
mod database;
mod models;
mod services;
mod utils;

use actix_cors::Cors;
use actix_web::{middleware::Logger, web, App, HttpServer};
use dotenv::dotenv;
use std::sync::Arc;

use crate::config::Config;
use crate::database::DocumentStore;
use crate::services::{MealPlanner, OpenAiMealPlanner};

#[actix_web::main]
async fn main() -> std::io::Result<()> {
    // Load environment variables
    dotenv().ok();

    // Initialize logger
    env_logger::init_from_env(env_logger::Env::new().default_filter_or("info"));

    let config = match Config::from_env() {
        Ok(config) => config,
        Err(e) => {
            log::error!("❌ Invalid configuration: {}", e);
            std::process::exit(1);
        }
    };

    log::info!("🚀 Starting Wellness Service...");

    // Initialize MongoDB connection; the server never starts without it
    let db = match database::MongoDB::new(&config.mongo_uri, config.mongo_database.as_deref()).await {
        Ok(db) => db,
        Err(e) => {
            log::error!("❌ Error connecting to MongoDB: {}", e);
            std::process::exit(1);
        }
    };
    log::info!("✅ Connected to MongoDB");

    let store: Arc<dyn DocumentStore> = Arc::new(db);
    let store_data = web::Data::from(store);

    let planner: Arc<dyn MealPlanner> = Arc::new(OpenAiMealPlanner::new(config.openai.clone()));
    let planner_data = web::Data::from(planner);

    let host = config.host.clone();
    let port = config.port;
    let allowed_origins = config.cors_allowed_origins.clone();

    log::info!("🌐 Server starting on {}:{}", host, port);
    log::info!("📚 Swagger UI available at: http://{}:{}/swagger-ui/", host, port);
    log::info!("📄 OpenAPI spec at: http://{}:{}/api-docs/openapi.json", host, port);

    // Start HTTP server
    HttpServer::new(move || {
        let mut cors = Cors::default()
            .allowed_methods(vec!["GET", "POST", "PUT", "DELETE", "OPTIONS"])
            .allowed_headers(vec![
                actix_web::http::header::AUTHORIZATION,
                actix_web::http::header::CONTENT_TYPE,
                actix_web::http::header::ACCEPT,
            ])
            .max_age(3600);

        cors = if allowed_origins.is_empty() {
            cors.allow_any_origin()
        } else {
            allowed_origins
                .iter()
                .fold(cors, |cors, origin| cors.allowed_origin(origin))
        };

        App::new()
            .app_data(store_data.clone())
            .app_data(planner_data.clone())
            .wrap(cors)
            .wrap(Logger::default())
            .configure(api::configure)
    })
    .bind((host.as_str(), port))?
    .run()
    .await
}
