//! DTOs de CancellationRequest

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use validator::Validate;

use crate::models::cancellation::{CancellationRequest, PendingCancellationRequest};

// Request para solicitar la cancelación de un order
#[derive(Debug, Deserialize, Validate)]
pub struct CreateCancellationRequest {
    #[validate(length(min = 1, max = 500))]
    pub reason: String,
}

// Response de solicitud de cancelación
#[derive(Debug, Serialize)]
pub struct CancellationResponse {
    pub id: i64,
    pub order_id: i64,
    pub reason: String,
    pub requested_at: DateTime<Utc>,
    pub approved: bool,
}

impl From<CancellationRequest> for CancellationResponse {
    fn from(request: CancellationRequest) -> Self {
        Self {
            id: request.id,
            order_id: request.order_id,
            reason: request.reason,
            requested_at: request.requested_at,
            approved: request.approved,
        }
    }
}

// Response de la cola de solicitudes pendientes (vista de admin)
#[derive(Debug, Serialize)]
pub struct PendingCancellationResponse {
    pub id: i64,
    pub order_id: i64,
    pub reason: String,
    pub requested_at: DateTime<Utc>,
    pub approved: bool,
    pub rental_id: i64,
    pub user_id: i64,
}

impl From<PendingCancellationRequest> for PendingCancellationResponse {
    fn from(request: PendingCancellationRequest) -> Self {
        Self {
            id: request.id,
            order_id: request.order_id,
            reason: request.reason,
            requested_at: request.requested_at,
            approved: request.approved,
            rental_id: request.rental_id,
            user_id: request.user_id,
        }
    }
}
