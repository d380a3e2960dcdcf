use actix_web::{middleware::Logger, web, App, HttpServer};
use arithmetic_service::{
    api,
    config::AppConfig,
    services::{Evaluator, Validator},
};
use dotenv::dotenv;

#[actix_web::main]
async fn main() -> std::io::Result<()> {
    // Load environment variables
    dotenv().ok();

    // Initialize logger
    env_logger::init_from_env(env_logger::Env::new().default_filter_or("info"));

    let config = AppConfig::from_env();

    // Shared across every worker
    let validator = web::Data::new(Validator::from_config(&config));
    let evaluator = web::Data::new(Evaluator::new());

    log::info!("🚀 Starting Arithmetic Service...");
    log::info!("🌐 Server starting on {}", config.bind_address());

    HttpServer::new(move || {
        App::new()
            .wrap(Logger::default())
            .configure(api::arithmetic::configure(
                validator.clone(),
                evaluator.clone(),
            ))
    })
    .bind(config.bind_address())?
    .run()
    .await
}
