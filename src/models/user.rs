//! Modelo de User
//!
//! Este módulo contiene el struct User y los enums de rol y estado.
//! Los usuarios se registran `Inactive` y pasan a `Active` cuando su
//! KYC es aprobado.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;

/// User - mapea exactamente a la tabla users
#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
pub struct User {
    pub id: i64,
    pub full_name: String,
    pub email: String,
    pub password_hash: String,
    pub role: String,
    pub status: String,
    pub created_at: DateTime<Utc>,
}

/// Roles de usuario
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum UserRole {
    User,
    Admin,
}

impl UserRole {
    pub fn as_str(&self) -> &'static str {
        match self {
            UserRole::User => "user",
            UserRole::Admin => "admin",
        }
    }

    pub fn parse(value: &str) -> Option<Self> {
        match value {
            "user" => Some(UserRole::User),
            "admin" => Some(UserRole::Admin),
            _ => None,
        }
    }
}

/// Estados de cuenta de usuario
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum UserStatus {
    Inactive,
    Active,
    Suspended,
}

impl UserStatus {
    pub fn as_str(&self) -> &'static str {
        match self {
            UserStatus::Inactive => "Inactive",
            UserStatus::Active => "Active",
            UserStatus::Suspended => "Suspended",
        }
    }

    pub fn parse(value: &str) -> Option<Self> {
        match value {
            "Inactive" => Some(UserStatus::Inactive),
            "Active" => Some(UserStatus::Active),
            "Suspended" => Some(UserStatus::Suspended),
            _ => None,
        }
    }
}
