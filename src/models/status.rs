//! Tabla de transiciones de estados
//!
//! Este módulo define los estados legales de Rental, Order y KYC,
//! las transiciones permitidas y el mapeo estado → evento de tracking.
//! Lógica pura, sin dependencias de red ni de base de datos.

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Errores de transición de estado
#[derive(Error, Debug, PartialEq, Eq)]
pub enum TransitionError {
    #[error("Invalid transition from '{from}' to '{to}'")]
    InvalidTransition { from: String, to: String },

    #[error("Entity is already in state '{status}'")]
    AlreadyInTargetState { status: String },

    #[error("Unknown status value '{value}'")]
    UnknownStatus { value: String },
}

/// Estados de un Rental (strings exactos a nivel de wire)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum RentalStatus {
    Pending,
    Ongoing,
    Completed,
    Cancelled,
}

impl RentalStatus {
    pub const ALL: [RentalStatus; 4] = [
        RentalStatus::Pending,
        RentalStatus::Ongoing,
        RentalStatus::Completed,
        RentalStatus::Cancelled,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            RentalStatus::Pending => "Pending",
            RentalStatus::Ongoing => "Ongoing",
            RentalStatus::Completed => "Completed",
            RentalStatus::Cancelled => "Cancelled",
        }
    }

    pub fn parse(value: &str) -> Result<Self, TransitionError> {
        match value {
            "Pending" => Ok(RentalStatus::Pending),
            "Ongoing" => Ok(RentalStatus::Ongoing),
            "Completed" => Ok(RentalStatus::Completed),
            "Cancelled" => Ok(RentalStatus::Cancelled),
            other => Err(TransitionError::UnknownStatus {
                value: other.to_string(),
            }),
        }
    }

    /// `Completed` y `Cancelled` son terminales: ninguna transición posterior
    pub fn is_terminal(&self) -> bool {
        matches!(self, RentalStatus::Completed | RentalStatus::Cancelled)
    }
}

/// Guard de cancelación de un rental.
///
/// Retorna el estado destino (`Cancelled`) si la transición es legal.
/// - `Completed` → InvalidTransition (estado terminal)
/// - `Cancelled` → AlreadyInTargetState
pub fn rental_cancel_target(current: RentalStatus) -> Result<RentalStatus, TransitionError> {
    match current {
        RentalStatus::Completed => Err(TransitionError::InvalidTransition {
            from: current.as_str().to_string(),
            to: RentalStatus::Cancelled.as_str().to_string(),
        }),
        RentalStatus::Cancelled => Err(TransitionError::AlreadyInTargetState {
            status: current.as_str().to_string(),
        }),
        _ => Ok(RentalStatus::Cancelled),
    }
}

/// Estados de entrega de un Order (strings exactos a nivel de wire)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum DeliveryStatus {
    Pending,
    Confirmed,
    InTransit,
    Delivered,
    Cancelled,
}

impl DeliveryStatus {
    pub const ALL: [DeliveryStatus; 5] = [
        DeliveryStatus::Pending,
        DeliveryStatus::Confirmed,
        DeliveryStatus::InTransit,
        DeliveryStatus::Delivered,
        DeliveryStatus::Cancelled,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            DeliveryStatus::Pending => "Pending",
            DeliveryStatus::Confirmed => "Confirmed",
            DeliveryStatus::InTransit => "InTransit",
            DeliveryStatus::Delivered => "Delivered",
            DeliveryStatus::Cancelled => "Cancelled",
        }
    }

    pub fn parse(value: &str) -> Result<Self, TransitionError> {
        match value {
            "Pending" => Ok(DeliveryStatus::Pending),
            "Confirmed" => Ok(DeliveryStatus::Confirmed),
            "InTransit" => Ok(DeliveryStatus::InTransit),
            "Delivered" => Ok(DeliveryStatus::Delivered),
            "Cancelled" => Ok(DeliveryStatus::Cancelled),
            other => Err(TransitionError::UnknownStatus {
                value: other.to_string(),
            }),
        }
    }

    /// Mapeo fijo estado de entrega → etiqueta de evento de tracking
    pub fn tracking_label(&self) -> &'static str {
        match self {
            DeliveryStatus::Pending => "Created",
            DeliveryStatus::Confirmed => "Confirmed",
            DeliveryStatus::InTransit => "VehicleAssigned",
            DeliveryStatus::Delivered => "Delivered",
            DeliveryStatus::Cancelled => "Cancelled",
        }
    }
}

/// Etiqueta de tracking para un estado crudo.
///
/// Si el valor no está en el mapa se usa el string tal cual (default defensivo).
pub fn tracking_label_for(status: &str) -> String {
    match DeliveryStatus::parse(status) {
        Ok(s) => s.tracking_label().to_string(),
        Err(_) => status.to_string(),
    }
}

/// Estados de verificación KYC
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum KycStatus {
    Pending,
    Approved,
    Rejected,
}

impl KycStatus {
    pub fn as_str(&self) -> &'static str {
        match self {
            KycStatus::Pending => "Pending",
            KycStatus::Approved => "Approved",
            KycStatus::Rejected => "Rejected",
        }
    }

    pub fn parse(value: &str) -> Result<Self, TransitionError> {
        match value {
            "Pending" => Ok(KycStatus::Pending),
            "Approved" => Ok(KycStatus::Approved),
            "Rejected" => Ok(KycStatus::Rejected),
            other => Err(TransitionError::UnknownStatus {
                value: other.to_string(),
            }),
        }
    }

    /// Approved y Rejected son terminales (no hay re-submission)
    pub fn is_terminal(&self) -> bool {
        matches!(self, KycStatus::Approved | KycStatus::Rejected)
    }
}

/// Acción de verificación KYC (wire-level en minúsculas)
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum VerifyAction {
    Approve,
    Reject,
}

impl VerifyAction {
    pub fn parse(value: &str) -> Result<Self, TransitionError> {
        match value {
            "approve" => Ok(VerifyAction::Approve),
            "reject" => Ok(VerifyAction::Reject),
            other => Err(TransitionError::UnknownStatus {
                value: other.to_string(),
            }),
        }
    }

    /// Estado KYC resultante de la acción
    pub fn target_status(&self) -> KycStatus {
        match self {
            VerifyAction::Approve => KycStatus::Approved,
            VerifyAction::Reject => KycStatus::Rejected,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_rental_cancel_from_pending_and_ongoing() {
        assert_eq!(
            rental_cancel_target(RentalStatus::Pending),
            Ok(RentalStatus::Cancelled)
        );
        assert_eq!(
            rental_cancel_target(RentalStatus::Ongoing),
            Ok(RentalStatus::Cancelled)
        );
    }

    #[test]
    fn test_rental_cancel_from_completed_is_invalid() {
        assert_eq!(
            rental_cancel_target(RentalStatus::Completed),
            Err(TransitionError::InvalidTransition {
                from: "Completed".to_string(),
                to: "Cancelled".to_string(),
            })
        );
    }

    #[test]
    fn test_rental_cancel_twice_is_already_in_target_state() {
        assert_eq!(
            rental_cancel_target(RentalStatus::Cancelled),
            Err(TransitionError::AlreadyInTargetState {
                status: "Cancelled".to_string(),
            })
        );
    }

    #[test]
    fn test_terminal_rental_states() {
        assert!(RentalStatus::Completed.is_terminal());
        assert!(RentalStatus::Cancelled.is_terminal());
        assert!(!RentalStatus::Pending.is_terminal());
        assert!(!RentalStatus::Ongoing.is_terminal());
    }

    #[test]
    fn test_rental_status_wire_strings() {
        for status in RentalStatus::ALL {
            assert_eq!(RentalStatus::parse(status.as_str()), Ok(status));
        }
        assert!(RentalStatus::parse("Active").is_err());
        assert!(RentalStatus::parse("pending").is_err());
    }

    #[test]
    fn test_tracking_label_map() {
        assert_eq!(DeliveryStatus::Pending.tracking_label(), "Created");
        assert_eq!(DeliveryStatus::Confirmed.tracking_label(), "Confirmed");
        assert_eq!(DeliveryStatus::InTransit.tracking_label(), "VehicleAssigned");
        assert_eq!(DeliveryStatus::Delivered.tracking_label(), "Delivered");
        assert_eq!(DeliveryStatus::Cancelled.tracking_label(), "Cancelled");
    }

    #[test]
    fn test_tracking_label_fallback_uses_raw_string() {
        assert_eq!(tracking_label_for("InTransit"), "VehicleAssigned");
        assert_eq!(tracking_label_for("Refunded"), "Refunded");
    }

    #[test]
    fn test_delivery_status_wire_strings() {
        for status in DeliveryStatus::ALL {
            assert_eq!(DeliveryStatus::parse(status.as_str()), Ok(status));
        }
        assert!(DeliveryStatus::parse("In Transit").is_err());
    }

    #[test]
    fn test_verify_action_parse() {
        assert_eq!(VerifyAction::parse("approve"), Ok(VerifyAction::Approve));
        assert_eq!(VerifyAction::parse("reject"), Ok(VerifyAction::Reject));
        assert!(VerifyAction::parse("Approve").is_err());
        assert!(VerifyAction::parse("delete").is_err());
    }

    #[test]
    fn test_verify_action_target_status() {
        assert_eq!(VerifyAction::Approve.target_status(), KycStatus::Approved);
        assert_eq!(VerifyAction::Reject.target_status(), KycStatus::Rejected);
    }

    #[test]
    fn test_kyc_terminal_states() {
        assert!(KycStatus::Approved.is_terminal());
        assert!(KycStatus::Rejected.is_terminal());
        assert!(!KycStatus::Pending.is_terminal());
    }
}
