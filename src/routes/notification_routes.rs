use axum::{
    extract::{Path, State},
    middleware,
    routing::{get, post, put},
    Extension, Json, Router,
};
use validator::Validate;

use crate::controllers::notification_controller::NotificationController;
use crate::dto::common::ApiResponse;
use crate::dto::notification_dto::{NotificationResponse, SendNotificationRequest};
use crate::middleware::auth::{admin_only_middleware, auth_middleware, AuthenticatedUser};
use crate::state::AppState;
use crate::utils::errors::AppError;

pub fn create_notification_router(state: AppState) -> Router<AppState> {
    // Canal interno de envío: solo admins / servicios internos
    let admin = Router::new()
        .route("/send", post(send_notification))
        .route_layer(middleware::from_fn(admin_only_middleware));

    Router::new()
        .route("/", get(list_notifications))
        .route("/:id/read", put(mark_notification_read))
        .merge(admin)
        .route_layer(middleware::from_fn_with_state(state, auth_middleware))
}

/// Fire-and-forget: responde en cuanto el envío queda encolado
async fn send_notification(
    State(state): State<AppState>,
    Json(request): Json<SendNotificationRequest>,
) -> Result<Json<ApiResponse<()>>, AppError> {
    request.validate()?;
    let controller = NotificationController::new(state.pool.clone());
    let response = controller.send(request);
    Ok(Json(response))
}

async fn list_notifications(
    State(state): State<AppState>,
    Extension(user): Extension<AuthenticatedUser>,
) -> Result<Json<Vec<NotificationResponse>>, AppError> {
    let controller = NotificationController::new(state.pool.clone());
    let response = controller.list_for_user(user.user_id).await?;
    Ok(Json(response))
}

async fn mark_notification_read(
    State(state): State<AppState>,
    Extension(user): Extension<AuthenticatedUser>,
    Path(id): Path<i64>,
) -> Result<Json<serde_json::Value>, AppError> {
    let controller = NotificationController::new(state.pool.clone());
    controller.mark_read(id, user.user_id).await?;
    Ok(Json(serde_json::json!({
        "success": true,
        "message": "Notificación marcada como leída"
    })))
}
