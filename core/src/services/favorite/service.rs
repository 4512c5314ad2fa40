//! Favorite service implementation

use std::sync::Arc;

use estate_shared::types::PageWindow;
use tracing::{debug, info};

use crate::domain::entities::favorite::{Favorite, FavoriteView, PropertyId, UserId};
use crate::errors::{DomainError, DomainResult};
use crate::repositories::{FavoriteRepository, FavoriteUnitOfWork};

/// Service for listing, checking and toggling favorite properties
///
/// Per (user, property) pair there are two states, favorited and not
/// favorited. `toggle_favorite` flips between them and `remove_favorite`
/// forces "not favorited".
pub struct FavoriteService<R>
where
    R: FavoriteRepository,
{
    repository: Arc<R>,
}

impl<R> FavoriteService<R>
where
    R: FavoriteRepository,
{
    /// Create a new favorite service
    pub fn new(repository: Arc<R>) -> Self {
        Self { repository }
    }

    /// One page of the user's favorites, newest first.
    ///
    /// `limit` is clamped to `[1, 200]` and a negative `offset` becomes `0`.
    /// An empty page is not an error.
    pub async fn list_favorites(
        &self,
        user_id: UserId,
        limit: i64,
        offset: i64,
    ) -> DomainResult<Vec<FavoriteView>> {
        let window = PageWindow::clamped(limit, offset);
        self.repository.list_for_user(user_id, window).await
    }

    /// Whether the user has favorited the property
    pub async fn is_favored(&self, user_id: UserId, property_id: PropertyId) -> DomainResult<bool> {
        self.repository.exists(user_id, property_id).await
    }

    /// Number of users that favorited the property
    pub async fn favorite_count(&self, property_id: PropertyId) -> DomainResult<u64> {
        self.repository.count_for_property(property_id).await
    }

    /// Flip the favorite state and report the new one.
    ///
    /// # Returns
    /// * `Ok(true)` - The property is now favorited
    /// * `Ok(false)` - The property is no longer favorited
    ///
    /// A unique-key conflict on insert means a concurrent caller favorited
    /// the same pair between our check and our insert. The pair ends up
    /// favorited either way, so this reports `true` instead of failing.
    pub async fn toggle_favorite(
        &self,
        user_id: UserId,
        property_id: PropertyId,
    ) -> DomainResult<bool> {
        let mut uow = self.repository.begin().await?;

        if uow.exists(user_id, property_id).await? {
            let affected = uow.delete(user_id, property_id).await?;
            uow.commit().await?;
            debug!(user_id, property_id, affected, "favorite delete");
            return Ok(false);
        }

        match uow.insert(&Favorite::new(user_id, property_id)).await {
            Ok(()) => {
                uow.commit().await?;
                debug!(user_id, property_id, "favorite insert");
                Ok(true)
            }
            Err(DomainError::ConstraintViolation { constraint }) => {
                info!(
                    user_id,
                    property_id,
                    %constraint,
                    "favorite already inserted by a concurrent request"
                );
                Ok(true)
            }
            Err(e) => Err(e),
        }
    }

    /// Remove the association if present. Removing a missing association
    /// succeeds with no effect.
    pub async fn remove_favorite(&self, user_id: UserId, property_id: PropertyId) -> DomainResult<()> {
        let mut uow = self.repository.begin().await?;
        let affected = uow.delete(user_id, property_id).await?;
        uow.commit().await?;
        debug!(user_id, property_id, affected, "favorite delete");
        Ok(())
    }
}
