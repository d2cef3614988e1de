/**
 * Post Model and Database Operations
 *
 * This module handles post data and database operations. Listing
 * resolves the owning user's public identity (id + name only) through a
 * join; the owner's post collection is exactly this join filtered by
 * creator, so there is no denormalized list to keep in sync.
 */

use chrono::{DateTime, Utc};
use sqlx::PgPool;
use uuid::Uuid;

/// Fixed page size for the feed listing
pub const PER_PAGE: i64 = 2;

/// Compute the row offset for a 1-indexed page
pub fn page_offset(page: u32) -> i64 {
    (i64::from(page) - 1) * PER_PAGE
}

/// Post row as stored
#[derive(Debug, Clone, sqlx::FromRow)]
pub struct Post {
    pub id: Uuid,
    pub title: String,
    pub content: String,
    /// Relative reference to the uploaded asset (`images/<uuid>.<ext>`)
    pub image_url: String,
    /// Owning user; immutable after creation
    pub creator_id: Uuid,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

/// Post row joined with its creator's public identity
#[derive(Debug, Clone, sqlx::FromRow)]
pub struct PostRecord {
    pub id: Uuid,
    pub title: String,
    pub content: String,
    pub image_url: String,
    pub creator_id: Uuid,
    pub creator_name: String,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

const RECORD_COLUMNS: &str = r#"
    p.id, p.title, p.content, p.image_url, p.creator_id,
    u.name AS creator_name, p.created_at, p.updated_at
"#;

/// Insert a new post
pub async fn create_post(
    pool: &PgPool,
    title: &str,
    content: &str,
    image_url: &str,
    creator_id: Uuid,
) -> Result<Post, sqlx::Error> {
    let id = Uuid::new_v4();
    let now = Utc::now();

    let post = sqlx::query_as::<_, Post>(
        r#"
        INSERT INTO posts (id, title, content, image_url, creator_id, created_at, updated_at)
        VALUES ($1, $2, $3, $4, $5, $6, $7)
        RETURNING id, title, content, image_url, creator_id, created_at, updated_at
        "#,
    )
    .bind(id)
    .bind(title)
    .bind(content)
    .bind(image_url)
    .bind(creator_id)
    .bind(now)
    .bind(now)
    .fetch_one(pool)
    .await?;

    Ok(post)
}

/// Get a post by id, with its creator resolved
pub async fn get_post(pool: &PgPool, id: Uuid) -> Result<Option<PostRecord>, sqlx::Error> {
    let record = sqlx::query_as::<_, PostRecord>(&format!(
        r#"
        SELECT {RECORD_COLUMNS}
        FROM posts p
        JOIN users u ON u.id = p.creator_id
        WHERE p.id = $1
        "#
    ))
    .bind(id)
    .fetch_optional(pool)
    .await?;

    Ok(record)
}

/// List one page of posts, newest first, creators resolved
///
/// Out-of-range pages yield an empty list.
pub async fn list_posts_page(pool: &PgPool, page: u32) -> Result<Vec<PostRecord>, sqlx::Error> {
    let records = sqlx::query_as::<_, PostRecord>(&format!(
        r#"
        SELECT {RECORD_COLUMNS}
        FROM posts p
        JOIN users u ON u.id = p.creator_id
        ORDER BY p.created_at DESC
        LIMIT $1 OFFSET $2
        "#
    ))
    .bind(PER_PAGE)
    .bind(page_offset(page))
    .fetch_all(pool)
    .await?;

    Ok(records)
}

/// Count all posts (the unfiltered total for pagination)
pub async fn count_posts(pool: &PgPool) -> Result<i64, sqlx::Error> {
    let count: (i64,) = sqlx::query_as("SELECT COUNT(*) FROM posts")
        .fetch_one(pool)
        .await?;

    Ok(count.0)
}

/// Replace a post's mutable fields
///
/// Returns `None` if the post no longer exists. `creator_id` is never
/// touched here.
pub async fn update_post(
    pool: &PgPool,
    id: Uuid,
    title: &str,
    content: &str,
    image_url: &str,
) -> Result<Option<Post>, sqlx::Error> {
    let now = Utc::now();

    let post = sqlx::query_as::<_, Post>(
        r#"
        UPDATE posts
        SET title = $1, content = $2, image_url = $3, updated_at = $4
        WHERE id = $5
        RETURNING id, title, content, image_url, creator_id, created_at, updated_at
        "#,
    )
    .bind(title)
    .bind(content)
    .bind(image_url)
    .bind(now)
    .bind(id)
    .fetch_optional(pool)
    .await?;

    Ok(post)
}

/// Delete a post row
pub async fn delete_post(pool: &PgPool, id: Uuid) -> Result<u64, sqlx::Error> {
    let result = sqlx::query("DELETE FROM posts WHERE id = $1")
        .bind(id)
        .execute(pool)
        .await?;

    Ok(result.rows_affected())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_page_offset() {
        assert_eq!(page_offset(1), 0);
        assert_eq!(page_offset(2), 2);
        assert_eq!(page_offset(3), 4);
    }

    #[test]
    fn test_per_page_is_two() {
        assert_eq!(PER_PAGE, 2);
    }
}
