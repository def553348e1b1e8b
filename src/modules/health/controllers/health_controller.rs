use actix_web::{web, HttpResponse, Responder};
use serde::{Deserialize, Serialize};

use crate::modules::store::CatalogStore;

/// Health check response structure
#[derive(Debug, Serialize, Deserialize)]
pub struct HealthResponse {
    pub status: String,
    pub timestamp: String,
    pub checks: HealthChecks,
}

#[derive(Debug, Serialize, Deserialize)]
pub struct HealthChecks {
    pub store: String,
    pub application: String,
}

/// Readiness check response structure
#[derive(Debug, Serialize, Deserialize)]
pub struct ReadinessResponse {
    pub ready: bool,
    pub checks: ReadinessChecks,
}

#[derive(Debug, Serialize, Deserialize)]
pub struct ReadinessChecks {
    pub store: bool,
    pub application: bool,
}

/// GET / - Service banner
pub async fn index() -> impl Responder {
    HttpResponse::Ok().json(serde_json::json!({
        "service": "Menu Catalog API",
        "version": env!("CARGO_PKG_VERSION"),
        "status": "running"
    }))
}

/// GET /health - Liveness check
/// Returns 200 whenever the process can answer; dependencies are not checked
pub async fn health_check() -> impl Responder {
    let response = HealthResponse {
        status: "healthy".to_string(),
        timestamp: chrono::Utc::now().to_rfc3339(),
        checks: HealthChecks {
            store: "not_checked".to_string(),
            application: "healthy".to_string(),
        },
    };

    HttpResponse::Ok().json(response)
}

/// GET /ready - Readiness check
/// Returns 503 when the catalog store cannot be reached
pub async fn readiness_check(store: web::Data<CatalogStore>) -> impl Responder {
    let mut checks = ReadinessChecks {
        store: false,
        application: true,
    };

    match store.ping().await {
        Ok(()) => checks.store = true,
        Err(e) => tracing::error!("Store readiness check failed: {}", e),
    }

    let ready = checks.store && checks.application;
    let response = ReadinessResponse { ready, checks };

    if ready {
        HttpResponse::Ok().json(response)
    } else {
        HttpResponse::ServiceUnavailable().json(response)
    }
}

/// Configure health check routes
pub fn configure(cfg: &mut web::ServiceConfig) {
    cfg.route("/", web::get().to(index))
        .route("/health", web::get().to(health_check))
        .route("/ready", web::get().to(readiness_check));
}
