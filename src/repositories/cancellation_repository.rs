use crate::models::cancellation::{CancellationRequest, PendingCancellationRequest};
use crate::utils::errors::AppError;
use chrono::Utc;
use sqlx::PgPool;

pub struct CancellationRepository {
    pool: PgPool,
}

impl CancellationRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    /// Inserta una nueva solicitud pendiente. Sin chequeo de duplicados:
    /// puede haber varias solicitudes por order.
    pub async fn create(&self, order_id: i64, reason: &str) -> Result<CancellationRequest, AppError> {
        let request = sqlx::query_as::<_, CancellationRequest>(
            r#"
            INSERT INTO cancellation_requests (order_id, reason, requested_at, approved)
            VALUES ($1, $2, $3, false)
            RETURNING *
            "#,
        )
        .bind(order_id)
        .bind(reason)
        .bind(Utc::now())
        .fetch_one(&self.pool)
        .await
        .map_err(|e| AppError::DatabaseError(format!("Error creating cancellation request: {}", e)))?;

        Ok(request)
    }

    /// Todas las solicitudes de un order, en cualquier estado de aprobación
    pub async fn find_by_order(&self, order_id: i64) -> Result<Vec<CancellationRequest>, AppError> {
        let requests = sqlx::query_as::<_, CancellationRequest>(
            "SELECT * FROM cancellation_requests WHERE order_id = $1 ORDER BY requested_at DESC",
        )
        .bind(order_id)
        .fetch_all(&self.pool)
        .await
        .map_err(|e| AppError::DatabaseError(format!("Error listing cancellation requests: {}", e)))?;

        Ok(requests)
    }

    /// Cola de admin: solicitudes pendientes (approved = false) de todo el
    /// sistema con los identificadores del rental y usuario padre
    pub async fn find_pending(&self) -> Result<Vec<PendingCancellationRequest>, AppError> {
        let requests = sqlx::query_as::<_, PendingCancellationRequest>(
            r#"
            SELECT c.id, c.order_id, c.reason, c.requested_at, c.approved,
                   o.rental_id, o.user_id
            FROM cancellation_requests c
            JOIN orders o ON o.id = c.order_id
            WHERE c.approved = false
            ORDER BY c.requested_at DESC
            "#,
        )
        .fetch_all(&self.pool)
        .await
        .map_err(|e| AppError::DatabaseError(format!("Error listing pending requests: {}", e)))?;

        Ok(requests)
    }
}
