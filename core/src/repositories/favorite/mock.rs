//! In-memory implementation of FavoriteRepository for testing

use async_trait::async_trait;
use std::collections::HashMap;
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;
use tokio::sync::{OwnedRwLockWriteGuard, RwLock};

use estate_shared::types::PageWindow;

use crate::domain::entities::favorite::{Favorite, FavoriteView, PropertyId, UserId};
use crate::errors::DomainError;

use super::{FavoriteRepository, FavoriteUnitOfWork};

type FavoriteMap = HashMap<(UserId, PropertyId), Favorite>;

/// Constraint name reported on duplicate inserts, mirroring the MySQL schema
pub const UNIQUE_CONSTRAINT: &str = "uq_favorites_user_property";

/// Mock favorite repository backed by a `HashMap`.
///
/// A unit of work holds the store's write lock until it is committed or
/// dropped, so writers are serialized the way row locks would serialize
/// them on a real database.
pub struct MockFavoriteRepository {
    favorites: Arc<RwLock<FavoriteMap>>,
    should_fail: Arc<AtomicBool>,
}

impl MockFavoriteRepository {
    /// Create a new mock repository
    pub fn new() -> Self {
        Self {
            favorites: Arc::new(RwLock::new(HashMap::new())),
            should_fail: Arc::new(AtomicBool::new(false)),
        }
    }

    /// Make every subsequent call fail with a persistence error
    pub fn set_should_fail(&self, should_fail: bool) {
        self.should_fail.store(should_fail, Ordering::SeqCst);
    }

    /// Seed an association directly, bypassing the unit of work
    pub async fn seed(&self, favorite: Favorite) {
        self.favorites.write().await.insert(favorite.key(), favorite);
    }

    /// Total number of stored associations
    pub async fn len(&self) -> usize {
        self.favorites.read().await.len()
    }

    /// Whether no associations are stored
    pub async fn is_empty(&self) -> bool {
        self.len().await == 0
    }

    fn check_failure(flag: &AtomicBool) -> Result<(), DomainError> {
        if flag.load(Ordering::SeqCst) {
            return Err(DomainError::Persistence {
                message: "Mock repository error".to_string(),
            });
        }
        Ok(())
    }
}

impl Default for MockFavoriteRepository {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl FavoriteRepository for MockFavoriteRepository {
    type UnitOfWork = MockFavoriteUnitOfWork;

    async fn begin(&self) -> Result<Self::UnitOfWork, DomainError> {
        Self::check_failure(&self.should_fail)?;

        let guard = Arc::clone(&self.favorites).write_owned().await;
        let staged = guard.clone();
        Ok(MockFavoriteUnitOfWork {
            guard,
            staged,
            should_fail: Arc::clone(&self.should_fail),
        })
    }

    async fn exists(&self, user_id: UserId, property_id: PropertyId) -> Result<bool, DomainError> {
        Self::check_failure(&self.should_fail)?;
        let favorites = self.favorites.read().await;
        Ok(favorites.contains_key(&(user_id, property_id)))
    }

    async fn count_for_property(&self, property_id: PropertyId) -> Result<u64, DomainError> {
        Self::check_failure(&self.should_fail)?;
        let favorites = self.favorites.read().await;
        let count = favorites
            .keys()
            .filter(|(_, property)| *property == property_id)
            .count();
        Ok(count as u64)
    }

    async fn list_for_user(
        &self,
        user_id: UserId,
        window: PageWindow,
    ) -> Result<Vec<FavoriteView>, DomainError> {
        Self::check_failure(&self.should_fail)?;
        let favorites = self.favorites.read().await;

        let mut owned: Vec<&Favorite> = favorites
            .values()
            .filter(|f| f.user_id == user_id)
            .collect();
        owned.sort_by(|a, b| {
            b.created_at
                .cmp(&a.created_at)
                .then(b.property_id.cmp(&a.property_id))
        });

        Ok(owned
            .into_iter()
            .skip(window.offset() as usize)
            .take(window.limit() as usize)
            .cloned()
            .map(FavoriteView::from)
            .collect())
    }
}

/// Unit of work over [`MockFavoriteRepository`]; writes are staged and
/// published on commit
pub struct MockFavoriteUnitOfWork {
    guard: OwnedRwLockWriteGuard<FavoriteMap>,
    staged: FavoriteMap,
    should_fail: Arc<AtomicBool>,
}

#[async_trait]
impl FavoriteUnitOfWork for MockFavoriteUnitOfWork {
    async fn exists(
        &mut self,
        user_id: UserId,
        property_id: PropertyId,
    ) -> Result<bool, DomainError> {
        MockFavoriteRepository::check_failure(&self.should_fail)?;
        Ok(self.staged.contains_key(&(user_id, property_id)))
    }

    async fn delete(
        &mut self,
        user_id: UserId,
        property_id: PropertyId,
    ) -> Result<u64, DomainError> {
        MockFavoriteRepository::check_failure(&self.should_fail)?;
        Ok(self.staged.remove(&(user_id, property_id)).map_or(0, |_| 1))
    }

    async fn insert(&mut self, favorite: &Favorite) -> Result<(), DomainError> {
        MockFavoriteRepository::check_failure(&self.should_fail)?;
        if self.staged.contains_key(&favorite.key()) {
            return Err(DomainError::ConstraintViolation {
                constraint: UNIQUE_CONSTRAINT.to_string(),
            });
        }
        self.staged.insert(favorite.key(), favorite.clone());
        Ok(())
    }

    async fn commit(mut self) -> Result<(), DomainError> {
        MockFavoriteRepository::check_failure(&self.should_fail)?;
        *self.guard = std::mem::take(&mut self.staged);
        Ok(())
    }
}
