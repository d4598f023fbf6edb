use axum::{
    extract::{Path, State},
    http::StatusCode,
    middleware,
    routing::{get, post, put},
    Extension, Json, Router,
};
use validator::Validate;

use crate::controllers::order_controller::OrderController;
use crate::controllers::rental_controller::RentalController;
use crate::dto::common::ApiResponse;
use crate::dto::order_dto::{
    CreateOrderRequest, OrderResponse, OrderWithTrackingResponse, UpdateOrderStatusRequest,
    UserOrderResponse,
};
use crate::middleware::auth::{auth_middleware, AuthenticatedUser};
use crate::state::AppState;
use crate::utils::errors::AppError;

pub fn create_order_router(state: AppState) -> Router<AppState> {
    Router::new()
        .route("/", post(create_order))
        .route("/user", get(get_user_orders))
        .route("/rental/:rental_id", get(get_order_by_rental))
        .route("/:id", get(get_order_with_tracking))
        .route("/:id/status", put(update_order_status))
        .route_layer(middleware::from_fn_with_state(state, auth_middleware))
}

/// Secuencia check-then-create del caller: el chequeo de duplicado es
/// responsabilidad de esta capa, el componente no lo repite. Bajo
/// requests concurrentes para el mismo rental la ventana de carrera
/// puede producir orders duplicados; diseño asumido, en la práctica hay
/// un solo writer lógico por entidad.
async fn create_order(
    State(state): State<AppState>,
    Extension(user): Extension<AuthenticatedUser>,
    Json(request): Json<CreateOrderRequest>,
) -> Result<(StatusCode, Json<ApiResponse<OrderResponse>>), AppError> {
    request.validate()?;

    let rentals = RentalController::new(state.pool.clone());
    let rental = rentals.get_by_id(request.rental_id).await?;

    if !user.can_access(rental.user_id) {
        return Err(AppError::Forbidden(
            "No tienes permiso para crear un order de este rental".to_string(),
        ));
    }

    let controller = OrderController::new(state.pool.clone());

    // Como máximo un order por rental
    if controller.get_by_rental_id(request.rental_id).await?.is_some() {
        return Err(AppError::Conflict(format!(
            "Ya existe un order para el rental {}",
            request.rental_id
        )));
    }

    let response = controller
        .create_from_rental(request.rental_id, rental.user_id, request.delivery_address)
        .await?;

    Ok((StatusCode::CREATED, Json(response)))
}

async fn get_user_orders(
    State(state): State<AppState>,
    Extension(user): Extension<AuthenticatedUser>,
) -> Result<Json<Vec<UserOrderResponse>>, AppError> {
    let controller = OrderController::new(state.pool.clone());
    let response = controller.get_user_orders(user.user_id).await?;
    Ok(Json(response))
}

async fn get_order_by_rental(
    State(state): State<AppState>,
    Extension(user): Extension<AuthenticatedUser>,
    Path(rental_id): Path<i64>,
) -> Result<Json<OrderResponse>, AppError> {
    let controller = OrderController::new(state.pool.clone());
    let order = controller
        .get_by_rental_id(rental_id)
        .await?
        .ok_or_else(|| AppError::NotFound("Order no encontrado para este rental".to_string()))?;

    if !user.can_access(order.user_id) {
        return Err(AppError::Forbidden(
            "No tienes permiso para acceder a este order".to_string(),
        ));
    }

    Ok(Json(order))
}

async fn get_order_with_tracking(
    State(state): State<AppState>,
    Extension(user): Extension<AuthenticatedUser>,
    Path(id): Path<i64>,
) -> Result<Json<OrderWithTrackingResponse>, AppError> {
    let controller = OrderController::new(state.pool.clone());
    let response = controller.get_with_tracking(id).await?;

    if !user.can_access(response.order.user_id) {
        return Err(AppError::Forbidden(
            "No tienes permiso para acceder a este order".to_string(),
        ));
    }

    Ok(Json(response))
}

async fn update_order_status(
    State(state): State<AppState>,
    Extension(user): Extension<AuthenticatedUser>,
    Path(id): Path<i64>,
    Json(request): Json<UpdateOrderStatusRequest>,
) -> Result<Json<ApiResponse<OrderResponse>>, AppError> {
    let controller = OrderController::new(state.pool.clone());

    // Mutación sobre un order ajeno: solo el dueño o un admin
    let order = controller.get_by_id(id).await?;
    if !user.can_access(order.user_id) {
        return Err(AppError::Forbidden(
            "No tienes permiso para actualizar este order".to_string(),
        ));
    }

    let response = controller.update_status(id, request).await?;
    Ok(Json(response))
}
