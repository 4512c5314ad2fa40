//! MySQL implementation of the FavoriteRepository trait.
//!
//! Uniqueness of `(user_id, property_id)` is enforced by the
//! `uq_favorites_user_property` key; a duplicate insert surfaces as
//! `DomainError::ConstraintViolation`. Writes run inside a sqlx transaction
//! that rolls back when the unit of work is dropped uncommitted.

use async_trait::async_trait;
use chrono::{DateTime, Utc};
use sqlx::mysql::MySqlRow;
use sqlx::{MySql, MySqlPool, Row, Transaction};

use estate_core::domain::entities::favorite::{Favorite, FavoriteView, PropertyId, UserId};
use estate_core::errors::DomainError;
use estate_core::repositories::{FavoriteRepository, FavoriteUnitOfWork};
use estate_shared::types::PageWindow;

use crate::database::errors::map_sqlx_error;

const EXISTS_SQL: &str = r#"
    SELECT 1
    FROM favorites
    WHERE user_id = ? AND property_id = ?
    LIMIT 1
"#;

const DELETE_SQL: &str = "DELETE FROM favorites WHERE user_id = ? AND property_id = ?";

/// MySQL implementation of FavoriteRepository
pub struct MySqlFavoriteRepository {
    /// Database connection pool
    pool: MySqlPool,
}

impl MySqlFavoriteRepository {
    /// Create a new MySQL favorite repository
    pub fn new(pool: MySqlPool) -> Self {
        Self { pool }
    }

    /// Convert a joined favorites/properties row to a list entry
    fn row_to_view(row: &MySqlRow) -> Result<FavoriteView, DomainError> {
        let column_error = |column: &str, e: sqlx::Error| DomainError::Persistence {
            message: format!("Failed to get {}: {}", column, e),
        };

        Ok(FavoriteView {
            property_id: row
                .try_get("property_id")
                .map_err(|e| column_error("property_id", e))?,
            favorited_at: row
                .try_get::<DateTime<Utc>, _>("favorited_at")
                .map_err(|e| column_error("favorited_at", e))?,
            title: row.try_get("title").map_err(|e| column_error("title", e))?,
            address: row
                .try_get("address")
                .map_err(|e| column_error("address", e))?,
            status: row
                .try_get("status")
                .map_err(|e| column_error("status", e))?,
            listing_type: row
                .try_get("listing_type")
                .map_err(|e| column_error("listing_type", e))?,
        })
    }
}

#[async_trait]
impl FavoriteRepository for MySqlFavoriteRepository {
    type UnitOfWork = MySqlFavoriteUnitOfWork;

    async fn begin(&self) -> Result<Self::UnitOfWork, DomainError> {
        let tx = self.pool.begin().await.map_err(map_sqlx_error)?;
        Ok(MySqlFavoriteUnitOfWork { tx })
    }

    async fn exists(&self, user_id: UserId, property_id: PropertyId) -> Result<bool, DomainError> {
        let row = sqlx::query(EXISTS_SQL)
            .bind(user_id)
            .bind(property_id)
            .fetch_optional(&self.pool)
            .await
            .map_err(map_sqlx_error)?;

        Ok(row.is_some())
    }

    async fn count_for_property(&self, property_id: PropertyId) -> Result<u64, DomainError> {
        let count: i64 = sqlx::query_scalar("SELECT COUNT(*) FROM favorites WHERE property_id = ?")
            .bind(property_id)
            .fetch_one(&self.pool)
            .await
            .map_err(map_sqlx_error)?;

        Ok(count.max(0) as u64)
    }

    async fn list_for_user(
        &self,
        user_id: UserId,
        window: PageWindow,
    ) -> Result<Vec<FavoriteView>, DomainError> {
        let query = r#"
            SELECT f.property_id, f.created_at AS favorited_at,
                   p.title, p.address, p.status, p.listing_type
            FROM favorites f
            LEFT JOIN properties p ON p.id = f.property_id
            WHERE f.user_id = ?
            ORDER BY f.created_at DESC, f.property_id DESC
            LIMIT ? OFFSET ?
        "#;

        let rows = sqlx::query(query)
            .bind(user_id)
            .bind(window.limit())
            .bind(window.offset())
            .fetch_all(&self.pool)
            .await
            .map_err(map_sqlx_error)?;

        rows.iter().map(Self::row_to_view).collect()
    }
}

/// Unit of work over a MySQL transaction
pub struct MySqlFavoriteUnitOfWork {
    tx: Transaction<'static, MySql>,
}

#[async_trait]
impl FavoriteUnitOfWork for MySqlFavoriteUnitOfWork {
    async fn exists(
        &mut self,
        user_id: UserId,
        property_id: PropertyId,
    ) -> Result<bool, DomainError> {
        let row = sqlx::query(EXISTS_SQL)
            .bind(user_id)
            .bind(property_id)
            .fetch_optional(&mut *self.tx)
            .await
            .map_err(map_sqlx_error)?;

        Ok(row.is_some())
    }

    async fn delete(
        &mut self,
        user_id: UserId,
        property_id: PropertyId,
    ) -> Result<u64, DomainError> {
        let result = sqlx::query(DELETE_SQL)
            .bind(user_id)
            .bind(property_id)
            .execute(&mut *self.tx)
            .await
            .map_err(map_sqlx_error)?;

        Ok(result.rows_affected())
    }

    async fn insert(&mut self, favorite: &Favorite) -> Result<(), DomainError> {
        sqlx::query("INSERT INTO favorites (user_id, property_id, created_at) VALUES (?, ?, ?)")
            .bind(favorite.user_id)
            .bind(favorite.property_id)
            .bind(favorite.created_at)
            .execute(&mut *self.tx)
            .await
            .map_err(map_sqlx_error)?;

        Ok(())
    }

    async fn commit(self) -> Result<(), DomainError> {
        self.tx.commit().await.map_err(map_sqlx_error)
    }
}
