use axum::{
    extract::{Path, State},
    http::StatusCode,
    middleware,
    routing::{get, post},
    Extension, Json, Router,
};
use validator::Validate;

use crate::controllers::kyc_controller::KycController;
use crate::dto::common::ApiResponse;
use crate::dto::kyc_dto::{KycResponse, SubmitKycRequest, VerifyKycRequest};
use crate::middleware::auth::{admin_only_middleware, auth_middleware, AuthenticatedUser};
use crate::state::AppState;
use crate::utils::errors::AppError;

pub fn create_kyc_router(state: AppState) -> Router<AppState> {
    // Verificación: solo admins
    let admin = Router::new()
        .route("/verify/:user_id", post(verify_kyc))
        .route_layer(middleware::from_fn(admin_only_middleware));

    Router::new()
        .route("/submit", post(submit_kyc))
        .route("/me", get(get_my_kyc))
        .merge(admin)
        .route_layer(middleware::from_fn_with_state(state, auth_middleware))
}

async fn submit_kyc(
    State(state): State<AppState>,
    Extension(user): Extension<AuthenticatedUser>,
    Json(request): Json<SubmitKycRequest>,
) -> Result<(StatusCode, Json<ApiResponse<KycResponse>>), AppError> {
    request.validate()?;
    let controller = KycController::new(state.pool.clone());
    let response = controller.submit(user.user_id, request).await?;
    Ok((StatusCode::CREATED, Json(response)))
}

async fn get_my_kyc(
    State(state): State<AppState>,
    Extension(user): Extension<AuthenticatedUser>,
) -> Result<Json<KycResponse>, AppError> {
    let controller = KycController::new(state.pool.clone());
    let response = controller.get_by_user(user.user_id).await?;
    Ok(Json(response))
}

async fn verify_kyc(
    State(state): State<AppState>,
    Path(user_id): Path<i64>,
    Json(request): Json<VerifyKycRequest>,
) -> Result<Json<ApiResponse<KycResponse>>, AppError> {
    let controller = KycController::new(state.pool.clone());
    let response = controller.verify(user_id, request).await?;
    Ok(Json(response))
}
