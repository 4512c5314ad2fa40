use actix_web::{web, HttpResponse};

use estate_core::domain::entities::favorite::PropertyId;
use estate_core::repositories::{FavoriteRepository, UserRepository};
use estate_shared::types::ApiResponse;

use crate::app::AppState;
use crate::dto::favorite::FavoriteStatusResponse;
use crate::handlers::ApiError;
use crate::middleware::AuthContext;

/// Handler for GET /api/v1/favorites/{property_id}
pub async fn favorite_status<F, U>(
    auth: AuthContext,
    state: web::Data<AppState<F, U>>,
    path: web::Path<PropertyId>,
) -> Result<HttpResponse, ApiError>
where
    F: FavoriteRepository + 'static,
    U: UserRepository + 'static,
{
    let property_id = path.into_inner();
    let favored = state
        .favorite_service
        .is_favored(auth.user_id, property_id)
        .await?;

    Ok(HttpResponse::Ok().json(ApiResponse::success(FavoriteStatusResponse {
        property_id,
        favored,
    })))
}
