//! Middleware de autenticación JWT
//!
//! Este módulo maneja la autenticación JWT, extracción de tokens
//! y verificación de usuarios autenticados. La capacidad de admin se
//! verifica acá, antes de llegar a los controllers.

use axum::{
    extract::{Request, State},
    http::header,
    middleware::Next,
    response::Response,
    Extension,
};

use crate::{
    models::user::{UserRole, UserStatus},
    repositories::user_repository::UserRepository,
    state::AppState,
    utils::errors::AppError,
    utils::jwt::{extract_token_from_header, verify_token, JwtConfig},
};

/// Usuario autenticado que se inyecta en las requests
#[derive(Debug, Clone)]
pub struct AuthenticatedUser {
    pub user_id: i64,
    pub role: UserRole,
    pub status: UserStatus,
}

impl AuthenticatedUser {
    pub fn is_admin(&self) -> bool {
        self.role == UserRole::Admin
    }

    /// Acceso a un recurso ajeno: solo el dueño o un admin
    pub fn can_access(&self, owner_id: i64) -> bool {
        self.user_id == owner_id || self.is_admin()
    }
}

/// Middleware de autenticación JWT
pub async fn auth_middleware(
    State(state): State<AppState>,
    mut request: Request,
    next: Next,
) -> Result<Response, AppError> {
    // Extraer token del header Authorization
    let auth_header = request
        .headers()
        .get(header::AUTHORIZATION)
        .and_then(|auth_str| auth_str.to_str().ok())
        .ok_or_else(|| AppError::Unauthorized("Token de autorización requerido".to_string()))?;

    let token = extract_token_from_header(auth_header)?;

    // Decodificar y validar JWT
    let jwt_config = JwtConfig::from(&state.config);
    let claims = verify_token(token, &jwt_config)?;

    let user_id: i64 = claims
        .sub
        .parse()
        .map_err(|_| AppError::Unauthorized("ID de usuario inválido".to_string()))?;

    // Verificar que el usuario existe en la base de datos
    let repository = UserRepository::new(state.pool.clone());
    let user = repository
        .find_by_id(user_id)
        .await?
        .ok_or_else(|| AppError::Unauthorized("Usuario no encontrado".to_string()))?;

    let role = UserRole::parse(&user.role)
        .ok_or_else(|| AppError::Unauthorized("Rol de usuario inválido".to_string()))?;
    let status = UserStatus::parse(&user.status)
        .ok_or_else(|| AppError::Unauthorized("Estado de usuario inválido".to_string()))?;

    // Los usuarios Inactive pueden autenticarse: necesitan llegar al KYC
    // para activarse. Solo los suspendidos quedan afuera.
    if status == UserStatus::Suspended {
        return Err(AppError::Unauthorized("Usuario suspendido".to_string()));
    }

    let authenticated_user = AuthenticatedUser {
        user_id: user.id,
        role,
        status,
    };

    // Inyectar usuario autenticado en las extensions
    request.extensions_mut().insert(authenticated_user);

    Ok(next.run(request).await)
}

/// Middleware para verificar permisos de admin
pub async fn admin_only_middleware(
    Extension(user): Extension<AuthenticatedUser>,
    request: Request,
    next: Next,
) -> Result<Response, AppError> {
    if !user.is_admin() {
        return Err(AppError::Forbidden(
            "Se requieren permisos de administrador".to_string(),
        ));
    }

    Ok(next.run(request).await)
}

/// Middleware para operaciones que requieren cuenta activa (KYC aprobado)
pub async fn active_only_middleware(
    Extension(user): Extension<AuthenticatedUser>,
    request: Request,
    next: Next,
) -> Result<Response, AppError> {
    if user.status != UserStatus::Active {
        return Err(AppError::Forbidden(
            "La cuenta debe estar activa (KYC aprobado) para esta operación".to_string(),
        ));
    }

    Ok(next.run(request).await)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn user(user_id: i64, role: UserRole) -> AuthenticatedUser {
        AuthenticatedUser {
            user_id,
            role,
            status: UserStatus::Active,
        }
    }

    #[test]
    fn test_owner_can_access_own_resource() {
        assert!(user(5, UserRole::User).can_access(5));
    }

    #[test]
    fn test_non_owner_cannot_access_foreign_resource() {
        assert!(!user(5, UserRole::User).can_access(9));
    }

    #[test]
    fn test_admin_can_access_any_resource() {
        assert!(user(1, UserRole::Admin).can_access(9));
        assert!(user(1, UserRole::Admin).is_admin());
    }
}
