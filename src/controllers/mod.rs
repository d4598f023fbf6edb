//! Controllers (componentes de lifecycle)
//!
//! Cada controller es dueño exclusivo de las escrituras de su entidad
//! y aplica su propia tabla de transiciones. No hay orquestador central.

pub mod auth_controller;
pub mod cancellation_controller;
pub mod kyc_controller;
pub mod notification_controller;
pub mod order_controller;
pub mod rental_controller;
