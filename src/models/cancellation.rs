//! Modelo de CancellationRequest
//!
//! Este módulo contiene los structs que mapean a la tabla
//! cancellation_requests. Puede haber varias solicitudes por order;
//! "pendiente" significa `approved = false`.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;

/// Solicitud de cancelación - mapea a la tabla cancellation_requests
#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
pub struct CancellationRequest {
    pub id: i64,
    pub order_id: i64,
    pub reason: String,
    pub requested_at: DateTime<Utc>,
    pub approved: bool,
}

/// Solicitud pendiente con identificadores del rental y usuario padre
/// (vista de cola para administradores)
#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
pub struct PendingCancellationRequest {
    pub id: i64,
    pub order_id: i64,
    pub reason: String,
    pub requested_at: DateTime<Utc>,
    pub approved: bool,
    pub rental_id: i64,
    pub user_id: i64,
}
