//! Servicio de notificaciones (side-channel)
//!
//! Este módulo implementa el envío fire-and-forget de notificaciones.
//! Ninguna operación del core espera la escritura: un fallo aquí se
//! loguea y no afecta la respuesta al caller.

use serde_json::Value;
use sqlx::PgPool;
use tracing::warn;

use crate::repositories::notification_repository::NotificationRepository;

#[derive(Clone)]
pub struct NotificationService {
    pool: PgPool,
}

impl NotificationService {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    /// Envío fire-and-forget: la inserción corre en una task separada
    /// y nunca se espera su resultado.
    pub fn send(
        &self,
        user_id: i64,
        notification_type: &str,
        title: &str,
        message: &str,
        metadata: Option<Value>,
    ) {
        let repository = NotificationRepository::new(self.pool.clone());
        let notification_type = notification_type.to_string();
        let title = title.to_string();
        let message = message.to_string();

        tokio::spawn(async move {
            if let Err(e) = repository
                .create(user_id, &notification_type, &title, &message, metadata)
                .await
            {
                warn!("No se pudo guardar la notificación para usuario {}: {}", user_id, e);
            }
        });
    }
}
