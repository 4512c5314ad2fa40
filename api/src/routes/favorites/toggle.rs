use actix_web::{web, HttpResponse};

use estate_core::domain::entities::favorite::PropertyId;
use estate_core::repositories::{FavoriteRepository, UserRepository};
use estate_shared::types::ApiResponse;

use crate::app::AppState;
use crate::dto::favorite::ToggleFavoriteResponse;
use crate::handlers::ApiError;
use crate::middleware::AuthContext;

/// Handler for POST /api/v1/favorites/{property_id}/toggle
///
/// Responds with the new state and the property's count after the toggle.
pub async fn toggle_favorite<F, U>(
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
        .toggle_favorite(auth.user_id, property_id)
        .await?;
    let favorite_count = state.favorite_service.favorite_count(property_id).await?;

    tracing::info!(user_id = auth.user_id, property_id, favored, "favorite toggled");

    Ok(HttpResponse::Ok().json(ApiResponse::success(ToggleFavoriteResponse {
        property_id,
        favored,
        favorite_count,
    })))
}
