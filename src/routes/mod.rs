//! Routers de la API
//!
//! Un router por recurso. El chequeo de duplicados previo a
//! `create_from_rental` vive en esta capa (el caller), no en el
//! componente de lifecycle.

pub mod auth_routes;
pub mod cancellation_routes;
pub mod kyc_routes;
pub mod notification_routes;
pub mod order_routes;
pub mod rental_routes;
