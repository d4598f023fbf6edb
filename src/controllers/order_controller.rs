//! Lifecycle de Order y OrderTracking
//!
//! Cada cambio de estado de entrega agrega exactamente un evento de
//! tracking vía el mapa fijo estado → etiqueta. El tracking es append-only.

use sqlx::PgPool;
use tracing::{info, warn};

use crate::dto::common::ApiResponse;
use crate::dto::order_dto::{
    OrderResponse, OrderWithTrackingResponse, TrackingEventResponse, UpdateOrderStatusRequest,
    UserOrderResponse,
};
use crate::models::status::{tracking_label_for, DeliveryStatus};
use crate::repositories::order_repository::OrderRepository;
use crate::services::notification_service::NotificationService;
use crate::utils::errors::AppError;

pub struct OrderController {
    repository: OrderRepository,
    notifications: NotificationService,
}

impl OrderController {
    pub fn new(pool: PgPool) -> Self {
        Self {
            repository: OrderRepository::new(pool.clone()),
            notifications: NotificationService::new(pool),
        }
    }

    /// Crea el order de un rental y agrega el evento `Created`.
    ///
    /// El chequeo de duplicado (Conflict si ya existe order para el rental)
    /// es responsabilidad del CALLER antes de invocar; este componente no
    /// lo repite.
    ///
    /// Son dos escrituras sin rollback: si el append de tracking falla
    /// después de insertar el order, queda un order sin su primera fila de
    /// tracking y el fallo se reporta como Internal. Consistencia débil
    /// documentada, no two-phase.
    pub async fn create_from_rental(
        &self,
        rental_id: i64,
        user_id: i64,
        delivery_address: Option<String>,
    ) -> Result<ApiResponse<OrderResponse>, AppError> {
        let order = self
            .repository
            .create(rental_id, user_id, delivery_address)
            .await?;

        self.repository
            .append_tracking(order.id, DeliveryStatus::Pending.tracking_label(), None)
            .await?;

        info!("Order {} creado desde rental {} para usuario {}", order.id, rental_id, user_id);

        Ok(ApiResponse::success_with_message(
            order.into(),
            "Order creado exitosamente".to_string(),
        ))
    }

    /// Actualiza el estado de entrega y agrega SIEMPRE un evento de
    /// tracking, incluso si el estado nuevo es igual al actual
    /// (sin short-circuit de no-op).
    pub async fn update_status(
        &self,
        order_id: i64,
        request: UpdateOrderStatusRequest,
    ) -> Result<ApiResponse<OrderResponse>, AppError> {
        let status = DeliveryStatus::parse(&request.status).map_err(|_| {
            AppError::ValidationError(format!(
                "Estado de entrega inválido: '{}'. Valores permitidos: Pending, Confirmed, InTransit, Delivered, Cancelled",
                request.status
            ))
        })?;

        let order = self
            .repository
            .find_by_id(order_id)
            .await?
            .ok_or_else(|| AppError::NotFound("Order no encontrado".to_string()))?;

        if order.delivery_status == status.as_str() {
            warn!("Order {} ya está en estado {}; se agrega evento igual", order_id, status.as_str());
        }

        let updated = self.repository.update_status(order_id, status.as_str()).await?;

        // Etiqueta vía el mapa fijo; un valor no mapeado usa el string crudo
        let label = tracking_label_for(status.as_str());
        self.repository
            .append_tracking(order_id, &label, request.note.as_deref())
            .await?;

        info!("Order {} actualizado a {} (tracking: {})", order_id, status.as_str(), label);

        self.notifications.send(
            updated.user_id,
            "order_status",
            "Estado de entrega actualizado",
            &format!("Tu order #{} pasó a estado {}", order_id, status.as_str()),
            Some(serde_json::json!({ "order_id": order_id, "status": status.as_str() })),
        );

        Ok(ApiResponse::success_with_message(
            updated.into(),
            "Estado del order actualizado exitosamente".to_string(),
        ))
    }

    pub async fn get_by_id(&self, order_id: i64) -> Result<OrderResponse, AppError> {
        let order = self
            .repository
            .find_by_id(order_id)
            .await?
            .ok_or_else(|| AppError::NotFound("Order no encontrado".to_string()))?;

        Ok(order.into())
    }

    /// Order con su historial completo, más reciente primero
    pub async fn get_with_tracking(&self, order_id: i64) -> Result<OrderWithTrackingResponse, AppError> {
        let order = self
            .repository
            .find_by_id(order_id)
            .await?
            .ok_or_else(|| AppError::NotFound("Order no encontrado".to_string()))?;

        let tracking = self.repository.find_tracking(order_id).await?;

        Ok(OrderWithTrackingResponse {
            order: order.into(),
            tracking: tracking.into_iter().map(TrackingEventResponse::from).collect(),
        })
    }

    /// Chequeo de existencia usado por la capa de rutas antes de crear
    pub async fn get_by_rental_id(&self, rental_id: i64) -> Result<Option<OrderResponse>, AppError> {
        let order = self.repository.find_by_rental_id(rental_id).await?;
        Ok(order.map(OrderResponse::from))
    }

    /// Orders de un usuario con conteo de tracking, más reciente primero
    pub async fn get_user_orders(&self, user_id: i64) -> Result<Vec<UserOrderResponse>, AppError> {
        let orders = self.repository.find_by_user(user_id).await?;
        Ok(orders.into_iter().map(UserOrderResponse::from).collect())
    }
}
