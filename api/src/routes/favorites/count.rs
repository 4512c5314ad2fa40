use actix_web::{web, HttpResponse};

use estate_core::domain::entities::favorite::PropertyId;
use estate_core::repositories::{FavoriteRepository, UserRepository};
use estate_shared::types::ApiResponse;

use crate::app::AppState;
use crate::dto::favorite::FavoriteCountResponse;
use crate::handlers::ApiError;

/// Handler for GET /api/v1/properties/{property_id}/favorites/count
///
/// Public; unknown properties simply count zero.
pub async fn favorite_count<F, U>(
    state: web::Data<AppState<F, U>>,
    path: web::Path<PropertyId>,
) -> Result<HttpResponse, ApiError>
where
    F: FavoriteRepository + 'static,
    U: UserRepository + 'static,
{
    let property_id = path.into_inner();
    let count = state.favorite_service.favorite_count(property_id).await?;

    Ok(HttpResponse::Ok().json(ApiResponse::success(FavoriteCountResponse {
        property_id,
        count,
    })))
}
