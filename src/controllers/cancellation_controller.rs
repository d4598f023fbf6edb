//! Workflow de solicitudes de cancelación
//!
//! Registro puro: crear una solicitud no cambia el estado del order ni
//! del rental. No existe mutador de aprobación/rechazo expuesto; el campo
//! `approved` queda como punto de integración abierto.

use sqlx::PgPool;
use tracing::info;

use crate::dto::cancellation_dto::{
    CancellationResponse, CreateCancellationRequest, PendingCancellationResponse,
};
use crate::dto::common::ApiResponse;
use crate::repositories::cancellation_repository::CancellationRepository;
use crate::utils::errors::AppError;

pub struct CancellationController {
    repository: CancellationRepository,
}

impl CancellationController {
    pub fn new(pool: PgPool) -> Self {
        Self {
            repository: CancellationRepository::new(pool),
        }
    }

    /// Inserta una solicitud pendiente sin condiciones: sin dedup, sin
    /// chequeo de existencia del order y sin efectos sobre Order o Rental.
    pub async fn create_cancellation_request(
        &self,
        order_id: i64,
        request: CreateCancellationRequest,
    ) -> Result<ApiResponse<CancellationResponse>, AppError> {
        let created = self.repository.create(order_id, &request.reason).await?;

        info!("Solicitud de cancelación {} creada para order {}", created.id, order_id);

        Ok(ApiResponse::success_with_message(
            created.into(),
            "Solicitud de cancelación registrada".to_string(),
        ))
    }

    /// Todas las solicitudes de un order, en cualquier estado
    pub async fn get_requests_for_order(
        &self,
        order_id: i64,
    ) -> Result<Vec<CancellationResponse>, AppError> {
        let requests = self.repository.find_by_order(order_id).await?;
        Ok(requests.into_iter().map(CancellationResponse::from).collect())
    }

    /// Cola de admin: solo solicitudes con approved = false, con los
    /// identificadores del rental y usuario padre, más reciente primero
    pub async fn get_pending_requests(&self) -> Result<Vec<PendingCancellationResponse>, AppError> {
        let requests = self.repository.find_pending().await?;
        Ok(requests
            .into_iter()
            .map(PendingCancellationResponse::from)
            .collect())
    }
}
