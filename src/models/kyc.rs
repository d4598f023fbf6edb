//! Modelo de registro KYC
//!
//! Este módulo contiene el struct KycRecord que mapea a la tabla
//! kyc_records. Máquina de estados por usuario:
//! Pending → {Approved, Rejected}, ambos terminales.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;

/// Registro KYC - mapea exactamente a la tabla kyc_records
#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
pub struct KycRecord {
    pub id: i64,
    pub user_id: i64,
    pub identity_number: String,
    pub document_refs: Vec<String>,
    pub verification_status: String,
    pub submitted_at: DateTime<Utc>,
    pub verified_at: Option<DateTime<Utc>>,
}
