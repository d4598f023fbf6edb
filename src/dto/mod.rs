//! DTOs de la API
//!
//! Este módulo contiene los requests y responses de cada recurso
//! y el envelope genérico de respuesta.

pub mod auth_dto;
pub mod cancellation_dto;
pub mod common;
pub mod kyc_dto;
pub mod notification_dto;
pub mod order_dto;
pub mod rental_dto;
