//! Gate KYC
//!
//! Máquina de estados por usuario: Pending → {Approved, Rejected}, ambos
//! terminales. La aprobación dispara la activación del usuario como
//! segundo efecto de la misma operación lógica.

use sqlx::PgPool;
use tracing::info;

use crate::dto::common::ApiResponse;
use crate::dto::kyc_dto::{KycResponse, SubmitKycRequest, VerifyKycRequest};
use crate::models::status::{KycStatus, VerifyAction};
use crate::models::user::UserStatus;
use crate::repositories::kyc_repository::KycRepository;
use crate::repositories::user_repository::UserRepository;
use crate::services::notification_service::NotificationService;
use crate::utils::errors::AppError;
use crate::utils::validation::validate_identity_number;

pub struct KycController {
    repository: KycRepository,
    users: UserRepository,
    notifications: NotificationService,
}

impl KycController {
    pub fn new(pool: PgPool) -> Self {
        Self {
            repository: KycRepository::new(pool.clone()),
            users: UserRepository::new(pool.clone()),
            notifications: NotificationService::new(pool),
        }
    }

    /// Crea un registro KYC en estado Pending. Este componente no
    /// deduplica envíos múltiples del mismo usuario.
    pub async fn submit(
        &self,
        user_id: i64,
        request: SubmitKycRequest,
    ) -> Result<ApiResponse<KycResponse>, AppError> {
        validate_identity_number(&request.identity_number)
            .map_err(|e| AppError::ValidationError(e.to_string()))?;

        if request.document_refs.is_empty() {
            return Err(AppError::ValidationError(
                "Se requiere al menos una referencia de documento".to_string(),
            ));
        }

        let record = self
            .repository
            .create(user_id, &request.identity_number, &request.document_refs)
            .await?;

        info!("KYC {} enviado por usuario {}", record.id, user_id);

        Ok(ApiResponse::success_with_message(
            record.into(),
            "Documentos KYC enviados para verificación".to_string(),
        ))
    }

    /// Registro KYC más reciente del usuario
    pub async fn get_by_user(&self, user_id: i64) -> Result<KycResponse, AppError> {
        let record = self
            .repository
            .find_latest_by_user(user_id)
            .await?
            .ok_or_else(|| AppError::NotFound("Registro KYC no encontrado".to_string()))?;

        Ok(record.into())
    }

    /// Verifica el KYC de un usuario (solo admin).
    ///
    /// `approve` escribe Approved en el KYC y LUEGO activa el usuario;
    /// si la activación falla, el KYC queda Approved igualmente y el
    /// fallo se reporta. Orden best-effort documentado: no convertir en
    /// transacción sin decisión de producto, cambia el comportamiento
    /// observable. `reject` solo escribe Rejected.
    pub async fn verify(
        &self,
        user_id: i64,
        request: VerifyKycRequest,
    ) -> Result<ApiResponse<KycResponse>, AppError> {
        let action = VerifyAction::parse(&request.action).map_err(|_| {
            AppError::ValidationError(format!(
                "Acción inválida: '{}'. Valores permitidos: approve, reject",
                request.action
            ))
        })?;

        let record = self
            .repository
            .find_latest_by_user(user_id)
            .await?
            .ok_or_else(|| AppError::NotFound("Registro KYC no encontrado".to_string()))?;

        let current = KycStatus::parse(&record.verification_status)?;
        if current.is_terminal() {
            return Err(AppError::InvalidTransition(format!(
                "El registro KYC ya está en estado terminal '{}'",
                current.as_str()
            )));
        }

        let target = action.target_status();
        let updated = self.repository.update_status(record.id, target.as_str()).await?;

        info!("KYC de usuario {} verificado: {}", user_id, target.as_str());

        match action {
            VerifyAction::Approve => {
                let affected = self
                    .users
                    .update_status(user_id, UserStatus::Active.as_str())
                    .await?;
                if affected == 0 {
                    return Err(AppError::Internal(format!(
                        "KYC aprobado pero el usuario {} no existe para activar",
                        user_id
                    )));
                }

                self.notifications.send(
                    user_id,
                    "kyc_approved",
                    "Identidad verificada",
                    "Tu identidad fue verificada y tu cuenta está activa",
                    None,
                );
            }
            VerifyAction::Reject => {
                // Sin efecto sobre el estado del usuario
                self.notifications.send(
                    user_id,
                    "kyc_rejected",
                    "Verificación rechazada",
                    "Tu verificación de identidad fue rechazada",
                    None,
                );
            }
        }

        Ok(ApiResponse::success_with_message(
            updated.into(),
            format!("KYC {} exitosamente", if action == VerifyAction::Approve { "aprobado" } else { "rechazado" }),
        ))
    }
}
