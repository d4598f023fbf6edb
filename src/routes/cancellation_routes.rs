use axum::{
    extract::{Path, State},
    http::StatusCode,
    middleware,
    routing::{get, post},
    Json, Router,
};
use validator::Validate;

use crate::controllers::cancellation_controller::CancellationController;
use crate::dto::cancellation_dto::{
    CancellationResponse, CreateCancellationRequest, PendingCancellationResponse,
};
use crate::dto::common::ApiResponse;
use crate::middleware::auth::{admin_only_middleware, auth_middleware};
use crate::state::AppState;
use crate::utils::errors::AppError;

pub fn create_cancellation_router(state: AppState) -> Router<AppState> {
    // Cola de solicitudes pendientes: solo admins
    let admin = Router::new()
        .route("/pending", get(get_pending_requests))
        .route_layer(middleware::from_fn(admin_only_middleware));

    Router::new()
        .route("/order/:order_id", post(create_cancellation_request))
        .route("/order/:order_id", get(get_requests_for_order))
        .merge(admin)
        .route_layer(middleware::from_fn_with_state(state, auth_middleware))
}

async fn create_cancellation_request(
    State(state): State<AppState>,
    Path(order_id): Path<i64>,
    Json(request): Json<CreateCancellationRequest>,
) -> Result<(StatusCode, Json<ApiResponse<CancellationResponse>>), AppError> {
    request.validate()?;
    let controller = CancellationController::new(state.pool.clone());
    let response = controller
        .create_cancellation_request(order_id, request)
        .await?;
    Ok((StatusCode::CREATED, Json(response)))
}

async fn get_requests_for_order(
    State(state): State<AppState>,
    Path(order_id): Path<i64>,
) -> Result<Json<Vec<CancellationResponse>>, AppError> {
    let controller = CancellationController::new(state.pool.clone());
    let response = controller.get_requests_for_order(order_id).await?;
    Ok(Json(response))
}

async fn get_pending_requests(
    State(state): State<AppState>,
) -> Result<Json<Vec<PendingCancellationResponse>>, AppError> {
    let controller = CancellationController::new(state.pool.clone());
    let response = controller.get_pending_requests().await?;
    Ok(Json(response))
}
