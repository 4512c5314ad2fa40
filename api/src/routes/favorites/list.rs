use actix_web::{web, HttpResponse};

use estate_core::repositories::{FavoriteRepository, UserRepository};
use estate_shared::types::ApiResponse;

use crate::app::AppState;
use crate::dto::favorite::FavoriteListQuery;
use crate::handlers::ApiError;
use crate::middleware::AuthContext;

/// Handler for GET /api/v1/favorites?limit=&offset=
///
/// Out-of-range paging values are clamped, never rejected.
pub async fn list_favorites<F, U>(
    auth: AuthContext,
    state: web::Data<AppState<F, U>>,
    query: web::Query<FavoriteListQuery>,
) -> Result<HttpResponse, ApiError>
where
    F: FavoriteRepository + 'static,
    U: UserRepository + 'static,
{
    let favorites = state
        .favorite_service
        .list_favorites(auth.user_id, query.limit(), query.offset())
        .await?;

    Ok(HttpResponse::Ok().json(ApiResponse::success(favorites)))
}
