//! DTOs de Notification

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use validator::Validate;

use crate::models::notification::Notification;

// Request para enviar una notificación (canal interno)
#[derive(Debug, Deserialize, Validate)]
pub struct SendNotificationRequest {
    #[validate(range(min = 1))]
    pub user_id: i64,
    #[validate(length(min = 1, max = 50))]
    pub notification_type: String,
    #[validate(length(min = 1, max = 200))]
    pub title: String,
    #[validate(length(min = 1, max = 1000))]
    pub message: String,
    pub metadata: Option<serde_json::Value>,
}

// Response de notificación
#[derive(Debug, Serialize)]
pub struct NotificationResponse {
    pub id: i64,
    pub user_id: i64,
    pub notification_type: String,
    pub title: String,
    pub message: String,
    pub metadata: Option<serde_json::Value>,
    pub read: bool,
    pub created_at: DateTime<Utc>,
}

impl From<Notification> for NotificationResponse {
    fn from(notification: Notification) -> Self {
        Self {
            id: notification.id,
            user_id: notification.user_id,
            notification_type: notification.notification_type,
            title: notification.title,
            message: notification.message,
            metadata: notification.metadata,
            read: notification.read,
            created_at: notification.created_at,
        }
    }
}
