//! Lifecycle de Rental
//!
//! Operaciones: crear, consultar, cancelar (con guard de estados
//! terminales) y update de estado sin grafo de transiciones (canal de
//! override para admins).

use sqlx::PgPool;
use tracing::info;

use crate::dto::common::ApiResponse;
use crate::dto::rental_dto::{CreateRentalRequest, RentalResponse};
use crate::models::status::{rental_cancel_target, RentalStatus};
use crate::repositories::rental_repository::RentalRepository;
use crate::services::notification_service::NotificationService;
use crate::utils::errors::AppError;

pub struct RentalController {
    repository: RentalRepository,
    notifications: NotificationService,
}

impl RentalController {
    pub fn new(pool: PgPool) -> Self {
        Self {
            repository: RentalRepository::new(pool.clone()),
            notifications: NotificationService::new(pool),
        }
    }

    pub async fn create(
        &self,
        user_id: i64,
        request: CreateRentalRequest,
    ) -> Result<ApiResponse<RentalResponse>, AppError> {
        if request.end_date < request.start_date {
            return Err(AppError::ValidationError(
                "La fecha de fin no puede ser anterior a la de inicio".to_string(),
            ));
        }

        let rental = self
            .repository
            .create(user_id, request.vehicle_id, request.start_date, request.end_date)
            .await?;

        info!("Rental {} creado para usuario {}", rental.id, user_id);

        Ok(ApiResponse::success_with_message(
            rental.into(),
            "Rental creado exitosamente".to_string(),
        ))
    }

    pub async fn get_by_id(&self, id: i64) -> Result<RentalResponse, AppError> {
        let rental = self
            .repository
            .find_by_id(id)
            .await?
            .ok_or_else(|| AppError::NotFound("Rental no encontrado".to_string()))?;

        Ok(rental.into())
    }

    pub async fn list_by_user(&self, user_id: i64) -> Result<Vec<RentalResponse>, AppError> {
        let rentals = self.repository.find_by_user(user_id).await?;
        Ok(rentals.into_iter().map(RentalResponse::from).collect())
    }

    /// Cancela un rental aplicando el guard de estados terminales.
    ///
    /// No toca ningún estado de disponibilidad de vehículo: el estado de
    /// flota pertenece a un componente separado, fuera de este core.
    pub async fn cancel(&self, id: i64) -> Result<ApiResponse<RentalResponse>, AppError> {
        let rental = self
            .repository
            .find_by_id(id)
            .await?
            .ok_or_else(|| AppError::NotFound("Rental no encontrado".to_string()))?;

        let current = RentalStatus::parse(&rental.status)?;
        let target = rental_cancel_target(current)?;

        let updated = self.repository.update_status(id, target.as_str()).await?;

        info!("Rental {} cancelado (estado previo: {})", id, current.as_str());

        self.notifications.send(
            updated.user_id,
            "rental_cancelled",
            "Rental cancelado",
            &format!("Tu rental #{} fue cancelado", id),
            Some(serde_json::json!({ "rental_id": id })),
        );

        Ok(ApiResponse::success_with_message(
            updated.into(),
            "Rental cancelado exitosamente".to_string(),
        ))
    }

    /// Update directo de estado (solo admin).
    ///
    /// Solo valida pertenencia al enum: cualquier estado puede seguir a
    /// cualquier otro. Permisivo a propósito; no agregar grafo de
    /// transiciones aquí sin cambio de producto.
    pub async fn update_status(
        &self,
        id: i64,
        new_status: &str,
    ) -> Result<ApiResponse<RentalResponse>, AppError> {
        let status = RentalStatus::parse(new_status).map_err(|_| {
            AppError::ValidationError(format!(
                "Estado de rental inválido: '{}'. Valores permitidos: Pending, Ongoing, Completed, Cancelled",
                new_status
            ))
        })?;

        self.repository
            .find_by_id(id)
            .await?
            .ok_or_else(|| AppError::NotFound("Rental no encontrado".to_string()))?;

        let updated = self.repository.update_status(id, status.as_str()).await?;

        info!("Rental {} actualizado a estado {} (override admin)", id, status.as_str());

        Ok(ApiResponse::success_with_message(
            updated.into(),
            "Estado del rental actualizado exitosamente".to_string(),
        ))
    }
}
