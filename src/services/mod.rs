//! Servicios del sistema
//!
//! Este módulo contiene los servicios auxiliares que no pertenecen
//! a ningún lifecycle concreto.

pub mod notification_service;
