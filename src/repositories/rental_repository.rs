use crate::models::rental::Rental;
use crate::utils::errors::AppError;
use chrono::{NaiveDate, Utc};
use sqlx::PgPool;

pub struct RentalRepository {
    pool: PgPool,
}

impl RentalRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    pub async fn create(
        &self,
        user_id: i64,
        vehicle_id: i64,
        start_date: NaiveDate,
        end_date: NaiveDate,
    ) -> Result<Rental, AppError> {
        let rental = sqlx::query_as::<_, Rental>(
            r#"
            INSERT INTO rentals (user_id, vehicle_id, start_date, end_date, status, created_at)
            VALUES ($1, $2, $3, $4, 'Pending', $5)
            RETURNING *
            "#,
        )
        .bind(user_id)
        .bind(vehicle_id)
        .bind(start_date)
        .bind(end_date)
        .bind(Utc::now())
        .fetch_one(&self.pool)
        .await
        .map_err(|e| AppError::DatabaseError(format!("Error creating rental: {}", e)))?;

        Ok(rental)
    }

    pub async fn find_by_id(&self, id: i64) -> Result<Option<Rental>, AppError> {
        let rental = sqlx::query_as::<_, Rental>("SELECT * FROM rentals WHERE id = $1")
            .bind(id)
            .fetch_optional(&self.pool)
            .await
            .map_err(|e| AppError::DatabaseError(format!("Error finding rental: {}", e)))?;

        Ok(rental)
    }

    pub async fn find_by_user(&self, user_id: i64) -> Result<Vec<Rental>, AppError> {
        let rentals = sqlx::query_as::<_, Rental>(
            "SELECT * FROM rentals WHERE user_id = $1 ORDER BY created_at DESC",
        )
        .bind(user_id)
        .fetch_all(&self.pool)
        .await
        .map_err(|e| AppError::DatabaseError(format!("Error listing rentals: {}", e)))?;

        Ok(rentals)
    }

    /// Escritura last-writer-wins del estado; la validez la comprueba el
    /// controller antes de llamar.
    pub async fn update_status(&self, id: i64, status: &str) -> Result<Rental, AppError> {
        let rental = sqlx::query_as::<_, Rental>(
            r#"
            UPDATE rentals
            SET status = $2
            WHERE id = $1
            RETURNING *
            "#,
        )
        .bind(id)
        .bind(status)
        .fetch_one(&self.pool)
        .await
        .map_err(|e| AppError::DatabaseError(format!("Error updating rental status: {}", e)))?;

        Ok(rental)
    }
}
