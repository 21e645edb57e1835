use crate::models::{LoginRequest, LoginResponse};
use crate::services::error::ApiError;

/// Endpoint de autenticación que usa `SessionStore::login`.
///
/// `ApiClient` es la implementación real; los tests usan un doble en memoria.
#[allow(async_fn_in_trait)]
pub trait AuthApi {
    async fn login(&self, request: &LoginRequest) -> Result<LoginResponse, ApiError>;
}
