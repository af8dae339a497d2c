use actix_cors::Cors;
use actix_web::{web, App, HttpServer, HttpResponse, middleware, error};
use community_matchmaker::config::{LoggingSettings, Settings};
use community_matchmaker::core::Matcher;
use community_matchmaker::models::ErrorResponse;
use community_matchmaker::routes::{self, matches::AppState};
use community_matchmaker::services::{AppwriteClient, AppwriteCollections};
use std::sync::Arc;
use std::time::Duration;
use tracing::{info, error};
use tracing_subscriber::EnvFilter;

/// Handle JSON payload errors
fn handle_json_payload_error(err: error::JsonPayloadError, req: &actix_web::HttpRequest) -> actix_web::Error {
    tracing::info!("JSON payload error on {}: {}", req.path(), err);
    let response = HttpResponse::BadRequest().json(ErrorResponse {
        error: "invalid_json".to_string(),
        message: format!("Invalid JSON: {}", err),
        status_code: 400,
    });
    error::InternalError::from_response(err, response).into()
}

fn init_logging(logging: &LoggingSettings) {
    // RUST_LOG wins over the configured level
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(&logging.level));

    let subscriber = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .with_level(true);

    if logging.format == "pretty" {
        subscriber.pretty().init();
    } else {
        subscriber.json().init();
    }
}

#[actix_web::main]
async fn main() -> std::io::Result<()> {
    // Load .env file if present
    dotenv::dotenv().ok();

    let settings = Settings::load();

    // Fall back to default logging so a bad config still gets reported
    let logging = settings
        .as_ref()
        .map(|s| s.logging.clone())
        .unwrap_or_default();
    init_logging(&logging);

    info!("Starting community matchmaker...");

    let settings = settings.map_err(|e| {
        error!("Failed to load configuration: {}", e);
        std::io::Error::new(std::io::ErrorKind::InvalidInput, e)
    })?;

    info!("Configuration loaded successfully");

    let timeout = Duration::from_secs(settings.appwrite.timeout_secs.unwrap_or(30));

    let appwrite = AppwriteClient::new(
        settings.appwrite.endpoint,
        settings.appwrite.api_key,
        settings.appwrite.project_id,
        settings.appwrite.database_id,
        AppwriteCollections {
            profiles: settings.collection.profiles,
        },
        timeout,
    )
    .map_err(|e| {
        error!("Failed to create Appwrite client: {}", e);
        std::io::Error::new(std::io::ErrorKind::Other, e)
    })?
    .with_paging(settings.matching.page_size, settings.matching.max_profiles);

    info!("Appwrite client initialized");

    let weights = settings.scoring.to_weights();
    let matcher = Matcher::new(weights).with_max_results(settings.matching.max_results);

    info!("Matcher initialized with weights: {:?}", weights);

    let app_state = AppState {
        store: Arc::new(appwrite),
        matcher,
    };

    let host = settings.server.host.clone();
    let port = settings.server.port;
    let workers = settings.server.workers.unwrap_or(4);

    info!("Starting HTTP server on {}:{}", host, port);

    HttpServer::new(move || {
        let cors = Cors::permissive();

        App::new()
            .app_data(web::Data::new(app_state.clone()))
            .app_data(web::JsonConfig::default().error_handler(handle_json_payload_error))
            .wrap(cors)
            .wrap(middleware::Logger::default())
            .wrap(middleware::Compress::default())
            .configure(routes::configure_routes::<AppwriteClient>)
    })
    .workers(workers)
    .bind((host, port))?
    .run()
    .await
}
