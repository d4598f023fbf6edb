//! DTOs de Rental

use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Serialize};
use validator::Validate;

use crate::models::rental::Rental;

// Request para crear un rental
#[derive(Debug, Deserialize, Validate)]
pub struct CreateRentalRequest {
    #[validate(range(min = 1))]
    pub vehicle_id: i64,
    pub start_date: NaiveDate,
    pub end_date: NaiveDate,
}

// Request para actualizar el estado de un rental (canal de override de admin)
#[derive(Debug, Deserialize)]
pub struct UpdateRentalStatusRequest {
    pub status: String,
}

// Response de rental
#[derive(Debug, Serialize)]
pub struct RentalResponse {
    pub id: i64,
    pub user_id: i64,
    pub vehicle_id: i64,
    pub start_date: NaiveDate,
    pub end_date: NaiveDate,
    pub status: String,
    pub created_at: DateTime<Utc>,
}

impl From<Rental> for RentalResponse {
    fn from(rental: Rental) -> Self {
        Self {
            id: rental.id,
            user_id: rental.user_id,
            vehicle_id: rental.vehicle_id,
            start_date: rental.start_date,
            end_date: rental.end_date,
            status: rental.status,
            created_at: rental.created_at,
        }
    }
}
