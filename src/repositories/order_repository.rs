use crate::models::order::{Order, OrderTracking, OrderWithTrackingCount};
use crate::utils::errors::AppError;
use chrono::Utc;
use sqlx::PgPool;

pub struct OrderRepository {
    pool: PgPool,
}

impl OrderRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    pub async fn create(
        &self,
        rental_id: i64,
        user_id: i64,
        delivery_address: Option<String>,
    ) -> Result<Order, AppError> {
        let order = sqlx::query_as::<_, Order>(
            r#"
            INSERT INTO orders (rental_id, user_id, delivery_status, delivery_address, order_date)
            VALUES ($1, $2, 'Pending', $3, $4)
            RETURNING *
            "#,
        )
        .bind(rental_id)
        .bind(user_id)
        .bind(delivery_address)
        .bind(Utc::now())
        .fetch_one(&self.pool)
        .await
        .map_err(|e| AppError::DatabaseError(format!("Error creating order: {}", e)))?;

        Ok(order)
    }

    pub async fn find_by_id(&self, id: i64) -> Result<Option<Order>, AppError> {
        let order = sqlx::query_as::<_, Order>("SELECT * FROM orders WHERE id = $1")
            .bind(id)
            .fetch_optional(&self.pool)
            .await
            .map_err(|e| AppError::DatabaseError(format!("Error finding order: {}", e)))?;

        Ok(order)
    }

    pub async fn find_by_rental_id(&self, rental_id: i64) -> Result<Option<Order>, AppError> {
        let order = sqlx::query_as::<_, Order>("SELECT * FROM orders WHERE rental_id = $1")
            .bind(rental_id)
            .fetch_optional(&self.pool)
            .await
            .map_err(|e| AppError::DatabaseError(format!("Error finding order by rental: {}", e)))?;

        Ok(order)
    }

    pub async fn update_status(&self, id: i64, status: &str) -> Result<Order, AppError> {
        let order = sqlx::query_as::<_, Order>(
            r#"
            UPDATE orders
            SET delivery_status = $2
            WHERE id = $1
            RETURNING *
            "#,
        )
        .bind(id)
        .bind(status)
        .fetch_one(&self.pool)
        .await
        .map_err(|e| AppError::DatabaseError(format!("Error updating order status: {}", e)))?;

        Ok(order)
    }

    /// Append de un evento de tracking. Las filas son inmutables una vez
    /// escritas; nunca se actualizan ni se borran.
    pub async fn append_tracking(
        &self,
        order_id: i64,
        status_update: &str,
        note: Option<&str>,
    ) -> Result<OrderTracking, AppError> {
        let event = sqlx::query_as::<_, OrderTracking>(
            r#"
            INSERT INTO order_tracking (order_id, status_update, note, updated_at)
            VALUES ($1, $2, $3, $4)
            RETURNING *
            "#,
        )
        .bind(order_id)
        .bind(status_update)
        .bind(note)
        .bind(Utc::now())
        .fetch_one(&self.pool)
        .await
        .map_err(|e| AppError::DatabaseError(format!("Error appending tracking event: {}", e)))?;

        Ok(event)
    }

    /// Historial completo de tracking, más reciente primero
    pub async fn find_tracking(&self, order_id: i64) -> Result<Vec<OrderTracking>, AppError> {
        let events = sqlx::query_as::<_, OrderTracking>(
            "SELECT * FROM order_tracking WHERE order_id = $1 ORDER BY updated_at DESC, id DESC",
        )
        .bind(order_id)
        .fetch_all(&self.pool)
        .await
        .map_err(|e| AppError::DatabaseError(format!("Error listing tracking events: {}", e)))?;

        Ok(events)
    }

    /// Orders de un usuario con el número de eventos de tracking,
    /// más reciente primero por order_date
    pub async fn find_by_user(&self, user_id: i64) -> Result<Vec<OrderWithTrackingCount>, AppError> {
        let orders = sqlx::query_as::<_, OrderWithTrackingCount>(
            r#"
            SELECT o.id, o.rental_id, o.user_id, o.delivery_status, o.delivery_address, o.order_date,
                   COUNT(t.id) AS tracking_count
            FROM orders o
            LEFT JOIN order_tracking t ON t.order_id = o.id
            WHERE o.user_id = $1
            GROUP BY o.id
            ORDER BY o.order_date DESC
            "#,
        )
        .bind(user_id)
        .fetch_all(&self.pool)
        .await
        .map_err(|e| AppError::DatabaseError(format!("Error listing user orders: {}", e)))?;

        Ok(orders)
    }
}
