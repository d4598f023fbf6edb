//! Capa de repositorios
//!
//! Un repositorio por entidad. Cada componente de lifecycle es el único
//! escritor de su entidad; las lecturas pueden cruzar entidades para
//! armar los payloads de respuesta.

pub mod cancellation_repository;
pub mod kyc_repository;
pub mod notification_repository;
pub mod order_repository;
pub mod rental_repository;
pub mod user_repository;
