//! DTOs de Order y OrderTracking

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use validator::Validate;

use crate::models::order::{Order, OrderTracking, OrderWithTrackingCount};

// Request para crear un order a partir de un rental
#[derive(Debug, Deserialize, Validate)]
pub struct CreateOrderRequest {
    #[validate(range(min = 1))]
    pub rental_id: i64,
    pub delivery_address: Option<String>,
}

// Request para actualizar el estado de entrega
#[derive(Debug, Deserialize)]
pub struct UpdateOrderStatusRequest {
    pub status: String,
    pub note: Option<String>,
}

// Response de order
#[derive(Debug, Serialize)]
pub struct OrderResponse {
    pub id: i64,
    pub rental_id: i64,
    pub user_id: i64,
    pub delivery_status: String,
    pub delivery_address: Option<String>,
    pub order_date: DateTime<Utc>,
}

impl From<Order> for OrderResponse {
    fn from(order: Order) -> Self {
        Self {
            id: order.id,
            rental_id: order.rental_id,
            user_id: order.user_id,
            delivery_status: order.delivery_status,
            delivery_address: order.delivery_address,
            order_date: order.order_date,
        }
    }
}

// Response de un evento de tracking
#[derive(Debug, Serialize)]
pub struct TrackingEventResponse {
    pub id: i64,
    pub order_id: i64,
    pub status_update: String,
    pub note: Option<String>,
    pub updated_at: DateTime<Utc>,
}

impl From<OrderTracking> for TrackingEventResponse {
    fn from(event: OrderTracking) -> Self {
        Self {
            id: event.id,
            order_id: event.order_id,
            status_update: event.status_update,
            note: event.note,
            updated_at: event.updated_at,
        }
    }
}

// Response de order con su historial completo (más reciente primero)
#[derive(Debug, Serialize)]
pub struct OrderWithTrackingResponse {
    #[serde(flatten)]
    pub order: OrderResponse,
    pub tracking: Vec<TrackingEventResponse>,
}

// Response de order para listados por usuario
#[derive(Debug, Serialize)]
pub struct UserOrderResponse {
    pub id: i64,
    pub rental_id: i64,
    pub user_id: i64,
    pub delivery_status: String,
    pub delivery_address: Option<String>,
    pub order_date: DateTime<Utc>,
    pub tracking_count: i64,
}

impl From<OrderWithTrackingCount> for UserOrderResponse {
    fn from(order: OrderWithTrackingCount) -> Self {
        Self {
            id: order.id,
            rental_id: order.rental_id,
            user_id: order.user_id,
            delivery_status: order.delivery_status,
            delivery_address: order.delivery_address,
            order_date: order.order_date,
            tracking_count: order.tracking_count,
        }
    }
}
