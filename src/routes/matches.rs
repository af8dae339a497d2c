use actix_web::{web, HttpResponse, Responder};
use validator::Validate;
use crate::models::{FindMatchesRequest, FindMatchesResponse, HealthResponse, ErrorResponse};
use crate::services::ProfileStore;
use crate::core::Matcher;
use std::sync::Arc;

/// Application state shared across all handlers
pub struct AppState<S> {
    pub store: Arc<S>,
    pub matcher: Matcher,
}

impl<S> Clone for AppState<S> {
    fn clone(&self) -> Self {
        Self {
            store: Arc::clone(&self.store),
            matcher: self.matcher.clone(),
        }
    }
}

/// Configure all match-related routes
pub fn configure<S>(cfg: &mut web::ServiceConfig)
where
    S: ProfileStore + 'static,
{
    cfg
        .route("/health", web::get().to(health_check))
        .route("/matches/find", web::post().to(find_matches::<S>));
}

/// Health check endpoint
async fn health_check() -> impl Responder {
    HttpResponse::Ok().json(HealthResponse {
        status: "healthy".to_string(),
        version: env!("CARGO_PKG_VERSION").to_string(),
        timestamp: chrono::Utc::now(),
    })
}

/// Find matches endpoint
///
/// POST /api/v1/matches/find
///
/// Request body:
/// ```json
/// {
///   "userId": "string"
/// }
/// ```
async fn find_matches<S>(
    state: web::Data<AppState<S>>,
    req: web::Json<FindMatchesRequest>,
) -> HttpResponse
where
    S: ProfileStore + 'static,
{
    if let Err(errors) = req.validate() {
        tracing::info!("Validation failed for find_matches request: {:?}", errors);
        return HttpResponse::BadRequest().json(ErrorResponse {
            error: "Validation failed".to_string(),
            message: errors.to_string(),
            status_code: 400,
        });
    }

    let user_id = &req.user_id;

    tracing::info!("Finding matches for user: {}", user_id);

    let matches = match state.matcher.find_matches(user_id, state.store.as_ref()).await {
        Ok(matches) => matches,
        Err(e) => {
            tracing::error!("Failed to find matches for {}: {}", user_id, e);
            return HttpResponse::InternalServerError().json(ErrorResponse {
                error: "Failed to find matches".to_string(),
                message: e.to_string(),
                status_code: 500,
            });
        }
    };

    let response = FindMatchesResponse {
        user_id: user_id.clone(),
        total_results: matches.len(),
        matches,
    };

    tracing::info!("Returning {} matches for user {}", response.total_results, user_id);

    HttpResponse::Ok().json(response)
}
