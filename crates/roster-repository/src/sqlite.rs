//! SQLite user repository implementation.

use crate::{traits::UserRepository, DatabasePool};
use async_trait::async_trait;
use roster_core::{RosterResult, User, UserId};
use sqlx::FromRow;
use std::sync::Arc;
use tracing::debug;

/// SQLite user repository implementation.
#[derive(Clone)]
pub struct SqliteUserRepository {
    pool: Arc<DatabasePool>,
}

impl SqliteUserRepository {
    /// Creates a new SQLite user repository.
    #[must_use]
    pub fn new(pool: Arc<DatabasePool>) -> Self {
        Self { pool }
    }
}

/// Database row representation of a user.
#[derive(Debug, FromRow)]
struct UserRow {
    id: i64,
    name: String,
    email: String,
}

impl From<UserRow> for User {
    fn from(row: UserRow) -> Self {
        User {
            id: Some(UserId::new(row.id)),
            name: row.name,
            email: row.email,
        }
    }
}

#[async_trait]
impl UserRepository for SqliteUserRepository {
    async fn find_by_id(&self, id: UserId) -> RosterResult<Option<User>> {
        debug!("Finding user by id: {}", id);

        let row = sqlx::query_as::<_, UserRow>(
            r#"
            SELECT id, name, email
            FROM users
            WHERE id = ?
            "#,
        )
        .bind(id.into_inner())
        .fetch_optional(self.pool.inner())
        .await?;

        Ok(row.map(User::from))
    }

    async fn find_all(&self) -> RosterResult<Vec<User>> {
        debug!("Finding all users");

        let rows = sqlx::query_as::<_, UserRow>(
            r#"
            SELECT id, name, email
            FROM users
            ORDER BY id
            "#,
        )
        .fetch_all(self.pool.inner())
        .await?;

        Ok(rows.into_iter().map(User::from).collect())
    }

    async fn save(&self, user: &User) -> RosterResult<User> {
        let row = match user.id {
            None => {
                debug!("Inserting user: {}", user.name);
                sqlx::query_as::<_, UserRow>(
                    r#"
                    INSERT INTO users (name, email)
                    VALUES (?, ?)
                    RETURNING id, name, email
                    "#,
                )
                .bind(&user.name)
                .bind(&user.email)
                .fetch_one(self.pool.inner())
                .await?
            }
            Some(id) => {
                debug!("Upserting user: {}", id);
                sqlx::query_as::<_, UserRow>(
                    r#"
                    INSERT INTO users (id, name, email)
                    VALUES (?, ?, ?)
                    ON CONFLICT(id) DO UPDATE SET
                        name = excluded.name,
                        email = excluded.email
                    RETURNING id, name, email
                    "#,
                )
                .bind(id.into_inner())
                .bind(&user.name)
                .bind(&user.email)
                .fetch_one(self.pool.inner())
                .await?
            }
        };

        Ok(User::from(row))
    }

    async fn delete_by_id(&self, id: UserId) -> RosterResult<()> {
        debug!("Deleting user: {}", id);

        let result = sqlx::query("DELETE FROM users WHERE id = ?")
            .bind(id.into_inner())
            .execute(self.pool.inner())
            .await?;

        debug!("Deleted {} row(s) for user {}", result.rows_affected(), id);
        Ok(())
    }
}

impl std::fmt::Debug for SqliteUserRepository {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("SqliteUserRepository")
            .field("pool", &self.pool)
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use roster_core::RosterError;
    use sqlx::sqlite::SqlitePoolOptions;

    /// A single long-lived connection keeps the in-memory database alive for
    /// the whole test.
    async fn test_repository() -> SqliteUserRepository {
        let pool = SqlitePoolOptions::new()
            .max_connections(1)
            .min_connections(1)
            .idle_timeout(None)
            .max_lifetime(None)
            .connect("sqlite::memory:")
            .await
            .expect("Failed to open in-memory SQLite");

        let pool = DatabasePool::with_pool(pool);
        pool.ensure_schema().await.expect("Failed to create schema");
        pool.health_check().await.expect("Health check failed");

        SqliteUserRepository::new(Arc::new(pool))
    }

    #[tokio::test]
    async fn test_save_assigns_id() {
        let repo = test_repository().await;

        let saved = repo.save(&User::new("Alice", "alice@example.com")).await.unwrap();
        assert_eq!(saved.id, Some(UserId::new(1)));
        assert_eq!(saved.name, "Alice");

        let found = repo.find_by_id(UserId::new(1)).await.unwrap();
        assert_eq!(found, Some(saved));
    }

    #[tokio::test]
    async fn test_save_with_id_updates_in_place() {
        let repo = test_repository().await;
        let saved = repo.save(&User::new("Alice", "alice@example.com")).await.unwrap();

        let mut changed = saved.clone();
        changed.email = "alice@example.org".to_string();
        let updated = repo.save(&changed).await.unwrap();

        assert_eq!(updated.id, saved.id);
        assert_eq!(updated.email, "alice@example.org");
        assert_eq!(repo.find_all().await.unwrap().len(), 1);
    }

    #[tokio::test]
    async fn test_find_missing_returns_none() {
        let repo = test_repository().await;
        assert!(repo.find_by_id(UserId::new(42)).await.unwrap().is_none());
    }

    #[tokio::test]
    async fn test_find_all_ordered() {
        let repo = test_repository().await;
        repo.save(&User::new("Alice", "alice@example.com")).await.unwrap();
        repo.save(&User::new("Bob", "bob@example.com")).await.unwrap();

        let names: Vec<String> = repo
            .find_all()
            .await
            .unwrap()
            .into_iter()
            .map(|u| u.name)
            .collect();
        assert_eq!(names, vec!["Alice", "Bob"]);
    }

    #[tokio::test]
    async fn test_delete_is_idempotent() {
        let repo = test_repository().await;
        let saved = repo.save(&User::new("Alice", "alice@example.com")).await.unwrap();
        let id = saved.id.unwrap();

        repo.delete_by_id(id).await.unwrap();
        repo.delete_by_id(id).await.unwrap();
        assert!(repo.find_by_id(id).await.unwrap().is_none());
    }

    #[tokio::test]
    async fn test_closed_pool_surfaces_database_error() {
        let repo = test_repository().await;
        repo.pool.close().await;

        let err = repo.find_all().await.unwrap_err();
        assert!(matches!(err, RosterError::Database(_)));
    }
}
