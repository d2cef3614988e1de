/**
 * User Model and Database Operations
 *
 * This module handles user data and database operations. The owner's
 * post collection is intentionally not stored here; it is derived at
 * query time from the posts side (see feed::posts).
 */

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use sqlx::PgPool;
use uuid::Uuid;

/// User struct representing a user in the database
#[derive(Debug, Clone, Serialize, Deserialize, sqlx::FromRow)]
pub struct User {
    /// Unique user ID (UUID)
    pub id: Uuid,
    /// User email address (normalized: trimmed, lowercased)
    pub email: String,
    /// Hashed password (bcrypt)
    pub password_hash: String,
    /// Display name
    pub name: String,
    /// Free-text status line
    pub status: String,
    /// Created at timestamp
    pub created_at: DateTime<Utc>,
    /// Updated at timestamp
    pub updated_at: DateTime<Utc>,
}

/// Create a new user
///
/// The status column falls back to its schema default; timestamps are
/// bound here so they are set on every write.
pub async fn create_user(
    pool: &PgPool,
    email: &str,
    password_hash: &str,
    name: &str,
) -> Result<User, sqlx::Error> {
    let id = Uuid::new_v4();
    let now = Utc::now();

    let user = sqlx::query_as::<_, User>(
        r#"
        INSERT INTO users (id, email, password_hash, name, created_at, updated_at)
        VALUES ($1, $2, $3, $4, $5, $6)
        RETURNING id, email, password_hash, name, status, created_at, updated_at
        "#,
    )
    .bind(id)
    .bind(email)
    .bind(password_hash)
    .bind(name)
    .bind(now)
    .bind(now)
    .fetch_one(pool)
    .await?;

    Ok(user)
}

/// Get user by email
pub async fn get_user_by_email(pool: &PgPool, email: &str) -> Result<Option<User>, sqlx::Error> {
    let user = sqlx::query_as::<_, User>(
        r#"
        SELECT id, email, password_hash, name, status, created_at, updated_at
        FROM users
        WHERE email = $1
        "#,
    )
    .bind(email)
    .fetch_optional(pool)
    .await?;

    Ok(user)
}

/// Get user by ID
pub async fn get_user_by_id(pool: &PgPool, id: Uuid) -> Result<Option<User>, sqlx::Error> {
    let user = sqlx::query_as::<_, User>(
        r#"
        SELECT id, email, password_hash, name, status, created_at, updated_at
        FROM users
        WHERE id = $1
        "#,
    )
    .bind(id)
    .fetch_optional(pool)
    .await?;

    Ok(user)
}

/// Update a user's status line
///
/// Returns the updated user, or `None` if the user no longer exists.
pub async fn update_user_status(
    pool: &PgPool,
    user_id: Uuid,
    status: &str,
) -> Result<Option<User>, sqlx::Error> {
    let now = Utc::now();

    let user = sqlx::query_as::<_, User>(
        r#"
        UPDATE users
        SET status = $1, updated_at = $2
        WHERE id = $3
        RETURNING id, email, password_hash, name, status, created_at, updated_at
        "#,
    )
    .bind(status)
    .bind(now)
    .bind(user_id)
    .fetch_optional(pool)
    .await?;

    Ok(user)
}
