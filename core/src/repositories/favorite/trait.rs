//! Favorite repository traits defining the persistence contract for
//! user/property favorite associations.
//!
//! Reads go straight through [`FavoriteRepository`]. Writes go through a
//! [`FavoriteUnitOfWork`] obtained from [`FavoriteRepository::begin`], so a
//! check-then-write sequence runs in one transactional scope and is only
//! made durable by [`FavoriteUnitOfWork::commit`]. Dropping a unit of work
//! without committing discards its writes.
//!
//! Implementations must enforce uniqueness of `(user_id, property_id)` and
//! report a duplicate insert as [`DomainError::ConstraintViolation`].
//!
//! [`DomainError::ConstraintViolation`]: crate::errors::DomainError::ConstraintViolation

use async_trait::async_trait;
use estate_shared::types::PageWindow;

use crate::domain::entities::favorite::{Favorite, FavoriteView, PropertyId, UserId};
use crate::errors::DomainError;

/// Repository trait for favorite associations
#[async_trait]
pub trait FavoriteRepository: Send + Sync {
    /// Transactional scope used for writes
    type UnitOfWork: FavoriteUnitOfWork;

    /// Open a transactional scope for a check-then-write sequence
    async fn begin(&self) -> Result<Self::UnitOfWork, DomainError>;

    /// Check whether the association exists
    async fn exists(&self, user_id: UserId, property_id: PropertyId) -> Result<bool, DomainError>;

    /// Number of users that favorited the property
    async fn count_for_property(&self, property_id: PropertyId) -> Result<u64, DomainError>;

    /// One page of a user's favorites, newest first (ties broken by
    /// descending property id)
    ///
    /// # Arguments
    /// * `user_id` - Owner of the favorites; no existence check is made
    /// * `window` - Already-sanitized limit/offset
    async fn list_for_user(
        &self,
        user_id: UserId,
        window: PageWindow,
    ) -> Result<Vec<FavoriteView>, DomainError>;
}

/// Write-side operations executed inside one transactional scope
#[async_trait]
pub trait FavoriteUnitOfWork: Send {
    /// Check whether the association exists, as seen by this scope
    async fn exists(&mut self, user_id: UserId, property_id: PropertyId)
        -> Result<bool, DomainError>;

    /// Delete the association
    ///
    /// # Returns
    /// * `Ok(n)` - Rows affected; `0` when nothing matched, which is not an error
    async fn delete(&mut self, user_id: UserId, property_id: PropertyId)
        -> Result<u64, DomainError>;

    /// Insert a new association
    ///
    /// # Returns
    /// * `Err(DomainError::ConstraintViolation)` - The pair already exists
    async fn insert(&mut self, favorite: &Favorite) -> Result<(), DomainError>;

    /// Make this scope's writes durable
    async fn commit(self) -> Result<(), DomainError>;
}
