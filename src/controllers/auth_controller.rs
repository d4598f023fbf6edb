//! Controller de autenticación
//!
//! Registro y login de usuarios. Los usuarios se crean `Inactive`;
//! la activación llega por la aprobación del KYC, no por aquí.

use bcrypt::{hash, verify, DEFAULT_COST};
use sqlx::PgPool;
use tracing::info;
use validator::Validate;

use crate::config::environment::EnvironmentConfig;
use crate::dto::auth_dto::{LoginRequest, LoginResponse, RegisterRequest, UserResponse};
use crate::dto::common::ApiResponse;
use crate::repositories::user_repository::UserRepository;
use crate::utils::errors::AppError;
use crate::utils::jwt::{generate_token, JwtConfig};

pub struct AuthController {
    repository: UserRepository,
    config: EnvironmentConfig,
}

impl AuthController {
    pub fn new(pool: PgPool, config: EnvironmentConfig) -> Self {
        Self {
            repository: UserRepository::new(pool),
            config,
        }
    }

    pub async fn register(
        &self,
        request: RegisterRequest,
    ) -> Result<ApiResponse<UserResponse>, AppError> {
        request.validate()?;

        // Verificar que el email no exista
        if self.repository.email_exists(&request.email).await? {
            return Err(AppError::Conflict("El email ya está registrado".to_string()));
        }

        // Hash de la contraseña
        let password_hash = hash(&request.password, DEFAULT_COST)
            .map_err(|e| AppError::Hash(format!("Error hashing password: {}", e)))?;

        let user = self
            .repository
            .create(&request.full_name, &request.email, &password_hash)
            .await?;

        info!("Usuario {} registrado ({}), pendiente de KYC", user.id, user.email);

        Ok(ApiResponse::success_with_message(
            user.into(),
            "Usuario registrado exitosamente. Completa la verificación KYC para activar tu cuenta".to_string(),
        ))
    }

    pub async fn login(&self, request: LoginRequest) -> Result<LoginResponse, AppError> {
        let user = self
            .repository
            .find_by_email(&request.email)
            .await?
            .ok_or_else(|| AppError::Unauthorized("Credenciales inválidas".to_string()))?;

        let valid = verify(&request.password, &user.password_hash)
            .map_err(|e| AppError::Hash(format!("Error verifying password: {}", e)))?;

        if !valid {
            return Err(AppError::Unauthorized("Credenciales inválidas".to_string()));
        }

        let jwt_config = JwtConfig::from(&self.config);
        let token = generate_token(user.id, &user.role, &jwt_config)?;

        Ok(LoginResponse {
            token,
            user: user.into(),
        })
    }

    pub async fn me(&self, user_id: i64) -> Result<UserResponse, AppError> {
        let user = self
            .repository
            .find_by_id(user_id)
            .await?
            .ok_or_else(|| AppError::NotFound("Usuario no encontrado".to_string()))?;

        Ok(user.into())
    }
}
