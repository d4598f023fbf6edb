//! DTOs de KYC

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use validator::Validate;

use crate::models::kyc::KycRecord;

// Request para enviar documentos KYC
#[derive(Debug, Deserialize, Validate)]
pub struct SubmitKycRequest {
    #[validate(length(min = 5, max = 30))]
    pub identity_number: String,
    #[validate(length(min = 1))]
    pub document_refs: Vec<String>,
}

// Request de verificación (solo admin): action ∈ {approve, reject}
#[derive(Debug, Deserialize)]
pub struct VerifyKycRequest {
    pub action: String,
}

// Response de registro KYC
#[derive(Debug, Serialize)]
pub struct KycResponse {
    pub id: i64,
    pub user_id: i64,
    pub identity_number: String,
    pub document_refs: Vec<String>,
    pub verification_status: String,
    pub submitted_at: DateTime<Utc>,
    pub verified_at: Option<DateTime<Utc>>,
}

impl From<KycRecord> for KycResponse {
    fn from(record: KycRecord) -> Self {
        Self {
            id: record.id,
            user_id: record.user_id,
            identity_number: record.identity_number,
            document_refs: record.document_refs,
            verification_status: record.verification_status,
            submitted_at: record.submitted_at,
            verified_at: record.verified_at,
        }
    }
}
