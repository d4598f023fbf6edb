use crate::models::notification::Notification;
use crate::utils::errors::AppError;
use chrono::Utc;
use sqlx::PgPool;

pub struct NotificationRepository {
    pool: PgPool,
}

impl NotificationRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    pub async fn create(
        &self,
        user_id: i64,
        notification_type: &str,
        title: &str,
        message: &str,
        metadata: Option<serde_json::Value>,
    ) -> Result<Notification, AppError> {
        let notification = sqlx::query_as::<_, Notification>(
            r#"
            INSERT INTO notifications (user_id, notification_type, title, message, metadata, read, created_at)
            VALUES ($1, $2, $3, $4, $5, false, $6)
            RETURNING *
            "#,
        )
        .bind(user_id)
        .bind(notification_type)
        .bind(title)
        .bind(message)
        .bind(metadata)
        .bind(Utc::now())
        .fetch_one(&self.pool)
        .await
        .map_err(|e| AppError::DatabaseError(format!("Error creating notification: {}", e)))?;

        Ok(notification)
    }

    pub async fn find_by_user(&self, user_id: i64) -> Result<Vec<Notification>, AppError> {
        let notifications = sqlx::query_as::<_, Notification>(
            "SELECT * FROM notifications WHERE user_id = $1 ORDER BY created_at DESC",
        )
        .bind(user_id)
        .fetch_all(&self.pool)
        .await
        .map_err(|e| AppError::DatabaseError(format!("Error listing notifications: {}", e)))?;

        Ok(notifications)
    }

    pub async fn mark_read(&self, id: i64, user_id: i64) -> Result<u64, AppError> {
        let result = sqlx::query(
            "UPDATE notifications SET read = true WHERE id = $1 AND user_id = $2",
        )
        .bind(id)
        .bind(user_id)
        .execute(&self.pool)
        .await
        .map_err(|e| AppError::DatabaseError(format!("Error marking notification read: {}", e)))?;

        Ok(result.rows_affected())
    }
}
