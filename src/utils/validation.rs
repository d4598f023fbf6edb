//! Utilidades de validación
//!
//! Este módulo contiene funciones helper para validación de datos
//! y conversión de tipos.

use chrono::NaiveDate;
use lazy_static::lazy_static;
use regex::Regex;
use validator::ValidationError;

lazy_static! {
    // Número de identidad: alfanumérico, 5 a 30 caracteres, sin espacios
    static ref IDENTITY_NUMBER_RE: Regex = Regex::new(r"^[A-Za-z0-9\-]{5,30}$").unwrap();
}

/// Validar el formato del número de identidad de un documento KYC
pub fn validate_identity_number(value: &str) -> Result<(), ValidationError> {
    if !IDENTITY_NUMBER_RE.is_match(value) {
        let mut error = ValidationError::new("identity_number");
        error.add_param("value".into(), &value.to_string());
        return Err(error);
    }
    Ok(())
}

/// Validar y convertir string a fecha
pub fn validate_date(value: &str) -> Result<NaiveDate, ValidationError> {
    NaiveDate::parse_from_str(value, "%Y-%m-%d").map_err(|_| {
        let mut error = ValidationError::new("date");
        error.add_param("value".into(), &value.to_string());
        error.add_param("format".into(), &"YYYY-MM-DD".to_string());
        error
    })
}

/// Validar que un string no esté vacío
pub fn validate_not_empty(value: &str) -> Result<(), ValidationError> {
    if value.trim().is_empty() {
        let mut error = ValidationError::new("not_empty");
        error.add_param("value".into(), &value.to_string());
        return Err(error);
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_validate_identity_number() {
        assert!(validate_identity_number("AB-1234567").is_ok());
        assert!(validate_identity_number("X123456789").is_ok());
        assert!(validate_identity_number("123").is_err());
        assert!(validate_identity_number("con espacios 123").is_err());
        assert!(validate_identity_number("").is_err());
    }

    #[test]
    fn test_validate_date() {
        assert!(validate_date("2026-08-25").is_ok());
        assert!(validate_date("25/08/2026").is_err());
        assert!(validate_date("not-a-date").is_err());
    }

    #[test]
    fn test_validate_not_empty() {
        assert!(validate_not_empty("algo").is_ok());
        assert!(validate_not_empty("   ").is_err());
    }
}
