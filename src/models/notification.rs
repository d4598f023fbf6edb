//! Modelo de Notification
//!
//! Este módulo contiene el struct Notification que mapea a la tabla
//! notifications. Las notificaciones son un side-channel fire-and-forget:
//! ninguna operación del core espera su escritura.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;

/// Notification - mapea exactamente a la tabla notifications
#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
pub struct Notification {
    pub id: i64,
    pub user_id: i64,
    pub notification_type: String,
    pub title: String,
    pub message: String,
    pub metadata: Option<serde_json::Value>,
    pub read: bool,
    pub created_at: DateTime<Utc>,
}
