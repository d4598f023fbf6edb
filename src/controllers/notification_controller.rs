//! Controller de notificaciones
//!
//! Lecturas y marcado de leído. El envío pasa por el
//! NotificationService (fire-and-forget), no por aquí.

use sqlx::PgPool;

use crate::dto::common::ApiResponse;
use crate::dto::notification_dto::{NotificationResponse, SendNotificationRequest};
use crate::repositories::notification_repository::NotificationRepository;
use crate::services::notification_service::NotificationService;
use crate::utils::errors::AppError;

pub struct NotificationController {
    repository: NotificationRepository,
    service: NotificationService,
}

impl NotificationController {
    pub fn new(pool: PgPool) -> Self {
        Self {
            repository: NotificationRepository::new(pool.clone()),
            service: NotificationService::new(pool),
        }
    }

    /// Canal interno servicio-a-servicio: dispara el envío y responde
    /// sin esperar la escritura
    pub fn send(&self, request: SendNotificationRequest) -> ApiResponse<()> {
        self.service.send(
            request.user_id,
            &request.notification_type,
            &request.title,
            &request.message,
            request.metadata,
        );

        ApiResponse {
            success: true,
            message: Some("Notificación encolada".to_string()),
            data: None,
        }
    }

    pub async fn list_for_user(&self, user_id: i64) -> Result<Vec<NotificationResponse>, AppError> {
        let notifications = self.repository.find_by_user(user_id).await?;
        Ok(notifications
            .into_iter()
            .map(NotificationResponse::from)
            .collect())
    }

    pub async fn mark_read(&self, id: i64, user_id: i64) -> Result<(), AppError> {
        let affected = self.repository.mark_read(id, user_id).await?;
        if affected == 0 {
            return Err(AppError::NotFound("Notificación no encontrada".to_string()));
        }
        Ok(())
    }
}
