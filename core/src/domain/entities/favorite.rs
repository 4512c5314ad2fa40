//! Favorite association between a user and a property listing.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Primary key of a user record
pub type UserId = i64;

/// Primary key of a property listing
pub type PropertyId = i64;

/// "This user has favorited this property."
///
/// Holds raw identifiers only; the user and property records are owned
/// elsewhere and never loaded to create an association. At most one row
/// exists per `(user_id, property_id)` and rows are never updated, only
/// inserted and deleted.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Favorite {
    pub user_id: UserId,
    pub property_id: PropertyId,
    pub created_at: DateTime<Utc>,
}

impl Favorite {
    /// New association stamped with the current time
    pub fn new(user_id: UserId, property_id: PropertyId) -> Self {
        Self::with_timestamp(user_id, property_id, Utc::now())
    }

    pub fn with_timestamp(
        user_id: UserId,
        property_id: PropertyId,
        created_at: DateTime<Utc>,
    ) -> Self {
        Self {
            user_id,
            property_id,
            created_at,
        }
    }

    /// The `(user_id, property_id)` uniqueness key
    pub fn key(&self) -> (UserId, PropertyId) {
        (self.user_id, self.property_id)
    }
}

/// One entry of a user's favorites page.
///
/// Property summary columns are optional because the listing may have been
/// withdrawn or deleted after it was favorited.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FavoriteView {
    pub property_id: PropertyId,
    pub favorited_at: DateTime<Utc>,
    pub title: Option<String>,
    pub address: Option<String>,
    pub status: Option<String>,
    pub listing_type: Option<String>,
}

impl From<Favorite> for FavoriteView {
    fn from(favorite: Favorite) -> Self {
        Self {
            property_id: favorite.property_id,
            favorited_at: favorite.created_at,
            title: None,
            address: None,
            status: None,
            listing_type: None,
        }
    }
}
