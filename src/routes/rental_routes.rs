use axum::{
    extract::{Path, State},
    http::StatusCode,
    middleware,
    routing::{get, post, put},
    Extension, Json, Router,
};
use validator::Validate;

use crate::controllers::rental_controller::RentalController;
use crate::dto::common::ApiResponse;
use crate::dto::rental_dto::{CreateRentalRequest, RentalResponse, UpdateRentalStatusRequest};
use crate::middleware::auth::{
    active_only_middleware, admin_only_middleware, auth_middleware, AuthenticatedUser,
};
use crate::state::AppState;
use crate::utils::errors::AppError;

pub fn create_rental_router(state: AppState) -> Router<AppState> {
    // Override directo de estado: solo admins
    let admin = Router::new()
        .route("/:id/status", put(update_rental_status))
        .route_layer(middleware::from_fn(admin_only_middleware));

    // Crear rentals requiere cuenta activa (KYC aprobado)
    let active = Router::new()
        .route("/", post(create_rental))
        .route_layer(middleware::from_fn(active_only_middleware));

    Router::new()
        .route("/", get(list_rentals))
        .route("/:id", get(get_rental))
        .route("/:id/cancel", post(cancel_rental))
        .merge(active)
        .merge(admin)
        .route_layer(middleware::from_fn_with_state(state, auth_middleware))
}

async fn create_rental(
    State(state): State<AppState>,
    Extension(user): Extension<AuthenticatedUser>,
    Json(request): Json<CreateRentalRequest>,
) -> Result<(StatusCode, Json<ApiResponse<RentalResponse>>), AppError> {
    request.validate()?;
    let controller = RentalController::new(state.pool.clone());
    let response = controller.create(user.user_id, request).await?;
    Ok((StatusCode::CREATED, Json(response)))
}

async fn list_rentals(
    State(state): State<AppState>,
    Extension(user): Extension<AuthenticatedUser>,
) -> Result<Json<Vec<RentalResponse>>, AppError> {
    let controller = RentalController::new(state.pool.clone());
    let response = controller.list_by_user(user.user_id).await?;
    Ok(Json(response))
}

async fn get_rental(
    State(state): State<AppState>,
    Extension(user): Extension<AuthenticatedUser>,
    Path(id): Path<i64>,
) -> Result<Json<RentalResponse>, AppError> {
    let controller = RentalController::new(state.pool.clone());
    let rental = controller.get_by_id(id).await?;

    if !user.can_access(rental.user_id) {
        return Err(AppError::Forbidden(
            "No tienes permiso para acceder a este rental".to_string(),
        ));
    }

    Ok(Json(rental))
}

async fn cancel_rental(
    State(state): State<AppState>,
    Extension(user): Extension<AuthenticatedUser>,
    Path(id): Path<i64>,
) -> Result<Json<ApiResponse<RentalResponse>>, AppError> {
    let controller = RentalController::new(state.pool.clone());

    let rental = controller.get_by_id(id).await?;
    if !user.can_access(rental.user_id) {
        return Err(AppError::Forbidden(
            "No tienes permiso para cancelar este rental".to_string(),
        ));
    }

    let response = controller.cancel(id).await?;
    Ok(Json(response))
}

async fn update_rental_status(
    State(state): State<AppState>,
    Path(id): Path<i64>,
    Json(request): Json<UpdateRentalStatusRequest>,
) -> Result<Json<ApiResponse<RentalResponse>>, AppError> {
    let controller = RentalController::new(state.pool.clone());
    let response = controller.update_status(id, &request.status).await?;
    Ok(Json(response))
}
