use serde::{Deserialize, Serialize};

use estate_core::domain::entities::favorite::PropertyId;
use estate_shared::types::pagination::DEFAULT_LIMIT;

/// Query string of `GET /api/v1/favorites`
#[derive(Debug, Clone, Deserialize)]
pub struct FavoriteListQuery {
    pub limit: Option<i64>,
    pub offset: Option<i64>,
}

impl FavoriteListQuery {
    pub fn limit(&self) -> i64 {
        self.limit.unwrap_or(DEFAULT_LIMIT)
    }

    pub fn offset(&self) -> i64 {
        self.offset.unwrap_or(0)
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct FavoriteStatusResponse {
    pub property_id: PropertyId,
    pub favored: bool,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ToggleFavoriteResponse {
    pub property_id: PropertyId,
    pub favored: bool,
    pub favorite_count: u64,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct FavoriteCountResponse {
    pub property_id: PropertyId,
    pub count: u64,
}
