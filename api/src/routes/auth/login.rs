use actix_web::{web, HttpResponse};

use estate_core::domain::value_objects::LoginCredential;
use estate_core::errors::DomainError;
use estate_core::repositories::{FavoriteRepository, UserRepository};
use estate_shared::types::ApiResponse;

use crate::app::AppState;
use crate::dto::auth::{LoginRequest, LoginResponse};
use crate::handlers::ApiError;

/// Handler for POST /api/v1/auth/login
///
/// # Request Body
///
/// ```json
/// { "email": "buyer@example.com", "password": "secret" }
/// ```
///
/// # Responses
/// * `200` - `ApiResponse<LoginResponse>` with a bearer access token
/// * `400` - `REQUIRED_FIELD` or `INVALID_EMAIL`
/// * `401` - `INVALID_CREDENTIALS`
/// * `403` - `ACCOUNT_DISABLED`
pub async fn login<F, U>(
    state: web::Data<AppState<F, U>>,
    request: web::Json<LoginRequest>,
) -> Result<HttpResponse, ApiError>
where
    F: FavoriteRepository + 'static,
    U: UserRepository + 'static,
{
    let LoginRequest { email, password } = request.into_inner();
    let credential = LoginCredential::parse(email, password).map_err(DomainError::from)?;

    let token = state.auth_service.login(&credential).await?;

    Ok(HttpResponse::Ok().json(ApiResponse::success(LoginResponse::from(token))))
}
