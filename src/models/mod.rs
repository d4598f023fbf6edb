//! Modelos del sistema
//!
//! Este módulo contiene todos los modelos de datos que mapean exactamente
//! al schema PostgreSQL con las convenciones estándar.

pub mod cancellation;
pub mod kyc;
pub mod notification;
pub mod order;
pub mod rental;
pub mod status;
pub mod user;
