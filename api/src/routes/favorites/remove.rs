use actix_web::{web, HttpResponse};

use estate_core::domain::entities::favorite::PropertyId;
use estate_core::repositories::{FavoriteRepository, UserRepository};

use crate::app::AppState;
use crate::handlers::ApiError;
use crate::middleware::AuthContext;

/// Handler for DELETE /api/v1/favorites/{property_id}
///
/// Idempotent: removing a favorite that does not exist still answers 204.
pub async fn remove_favorite<F, U>(
    auth: AuthContext,
    state: web::Data<AppState<F, U>>,
    path: web::Path<PropertyId>,
) -> Result<HttpResponse, ApiError>
where
    F: FavoriteRepository + 'static,
    U: UserRepository + 'static,
{
    state
        .favorite_service
        .remove_favorite(auth.user_id, path.into_inner())
        .await?;

    Ok(HttpResponse::NoContent().finish())
}
