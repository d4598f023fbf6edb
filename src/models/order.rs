//! Modelos de Order y OrderTracking
//!
//! Este módulo contiene los structs que mapean a las tablas orders
//! y order_tracking. El tracking es append-only: las filas son inmutables
//! una vez escritas.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;

/// Order - mapea exactamente a la tabla orders
///
/// Como máximo un Order por Rental; la unicidad la verifica el caller
/// antes de crear, no un constraint de la base de datos.
#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
pub struct Order {
    pub id: i64,
    pub rental_id: i64,
    pub user_id: i64,
    pub delivery_status: String,
    pub delivery_address: Option<String>,
    pub order_date: DateTime<Utc>,
}

/// Evento de tracking de un order - mapea a la tabla order_tracking
#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
pub struct OrderTracking {
    pub id: i64,
    pub order_id: i64,
    pub status_update: String,
    pub note: Option<String>,
    pub updated_at: DateTime<Utc>,
}

/// Order con el número de eventos de tracking (listados por usuario)
#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
pub struct OrderWithTrackingCount {
    pub id: i64,
    pub rental_id: i64,
    pub user_id: i64,
    pub delivery_status: String,
    pub delivery_address: Option<String>,
    pub order_date: DateTime<Utc>,
    pub tracking_count: i64,
}
