//! Modelo de Rental
//!
//! Este módulo contiene el struct Rental que mapea exactamente
//! a la tabla rentals.

use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;

/// Rental - mapea exactamente a la tabla rentals
///
/// `status` guarda los strings de wire exactos:
/// Pending | Ongoing | Completed | Cancelled
#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
pub struct Rental {
    pub id: i64,
    pub user_id: i64,
    pub vehicle_id: i64,
    pub start_date: NaiveDate,
    pub end_date: NaiveDate,
    pub status: String,
    pub created_at: DateTime<Utc>,
}
