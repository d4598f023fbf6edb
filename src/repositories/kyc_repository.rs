use crate::models::kyc::KycRecord;
use crate::utils::errors::AppError;
use chrono::Utc;
use sqlx::PgPool;

pub struct KycRepository {
    pool: PgPool,
}

impl KycRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    /// Inserta un registro Pending. Este componente no deduplica envíos
    /// múltiples del mismo usuario.
    pub async fn create(
        &self,
        user_id: i64,
        identity_number: &str,
        document_refs: &[String],
    ) -> Result<KycRecord, AppError> {
        let record = sqlx::query_as::<_, KycRecord>(
            r#"
            INSERT INTO kyc_records (user_id, identity_number, document_refs, verification_status, submitted_at)
            VALUES ($1, $2, $3, 'Pending', $4)
            RETURNING *
            "#,
        )
        .bind(user_id)
        .bind(identity_number)
        .bind(document_refs)
        .bind(Utc::now())
        .fetch_one(&self.pool)
        .await
        .map_err(|e| AppError::DatabaseError(format!("Error creating KYC record: {}", e)))?;

        Ok(record)
    }

    /// Registro más reciente de un usuario
    pub async fn find_latest_by_user(&self, user_id: i64) -> Result<Option<KycRecord>, AppError> {
        let record = sqlx::query_as::<_, KycRecord>(
            "SELECT * FROM kyc_records WHERE user_id = $1 ORDER BY submitted_at DESC LIMIT 1",
        )
        .bind(user_id)
        .fetch_optional(&self.pool)
        .await
        .map_err(|e| AppError::DatabaseError(format!("Error finding KYC record: {}", e)))?;

        Ok(record)
    }

    pub async fn update_status(&self, id: i64, status: &str) -> Result<KycRecord, AppError> {
        let record = sqlx::query_as::<_, KycRecord>(
            r#"
            UPDATE kyc_records
            SET verification_status = $2, verified_at = $3
            WHERE id = $1
            RETURNING *
            "#,
        )
        .bind(id)
        .bind(status)
        .bind(Utc::now())
        .fetch_one(&self.pool)
        .await
        .map_err(|e| AppError::DatabaseError(format!("Error updating KYC status: {}", e)))?;

        Ok(record)
    }
}
