//! Vehicle Rental Platform - API
//!
//! Backend REST para la plataforma de alquiler de vehículos: rentals,
//! orders con tracking de entrega, solicitudes de cancelación, KYC y
//! notificaciones. El ensamblado del router vive acá para que los tests
//! de integración ejerciten exactamente la misma app que `main`.

pub mod config;
pub mod controllers;
pub mod database;
pub mod dto;
pub mod middleware;
pub mod models;
pub mod repositories;
pub mod routes;
pub mod services;
pub mod state;
pub mod utils;

use axum::{response::Json, routing::get, Router};
use serde_json::json;

use middleware::cors::{cors_middleware, cors_middleware_with_origins};
use state::AppState;

/// Ensambla el router completo de la API sobre el estado dado
pub fn create_app(state: AppState) -> Router {
    // En producción el CORS se restringe a los orígenes configurados;
    // en desarrollo queda permisivo
    let cors = if state.config.is_production() {
        cors_middleware_with_origins(state.config.cors_origins.clone())
    } else {
        cors_middleware()
    };

    Router::new()
        .route("/health", get(health_endpoint))
        .nest("/api/auth", routes::auth_routes::create_auth_router(state.clone()))
        .nest("/api/rental", routes::rental_routes::create_rental_router(state.clone()))
        .nest("/api/order", routes::order_routes::create_order_router(state.clone()))
        .nest(
            "/api/cancellation",
            routes::cancellation_routes::create_cancellation_router(state.clone()),
        )
        .nest("/api/kyc", routes::kyc_routes::create_kyc_router(state.clone()))
        .nest(
            "/api/notification",
            routes::notification_routes::create_notification_router(state.clone()),
        )
        .layer(cors)
        .with_state(state)
}

/// Health check simple
async fn health_endpoint() -> Json<serde_json::Value> {
    Json(json!({
        "service": "rental-platform",
        "status": "healthy",
        "timestamp": chrono::Utc::now().to_rfc3339(),
    }))
}
