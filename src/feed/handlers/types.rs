/**
 * Feed Handler Types
 *
 * Response types for the feed endpoints plus the shared field
 * validation. Post documents serialize with the creator reduced to the
 * public identity (id + name) - password hashes never leave the auth
 * query layer, and the creator column is replaced by the resolved
 * object on the wire.
 */

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::error::{ApiError, FieldViolation};
use crate::feed::posts::{Post, PostRecord};

/// Minimum trimmed length for post title and content
pub const MIN_FIELD_LEN: usize = 5;

/// Creator as exposed on the wire: public identity only
#[derive(Serialize, Debug, Clone)]
#[serde(rename_all = "camelCase")]
pub struct CreatorResponse {
    pub id: String,
    pub name: String,
}

/// Post document as exposed on the wire
#[derive(Serialize, Debug, Clone)]
#[serde(rename_all = "camelCase")]
pub struct PostResponse {
    pub id: String,
    pub title: String,
    pub content: String,
    pub image_url: String,
    pub creator: CreatorResponse,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl PostResponse {
    /// Build from a bare post row plus an already-resolved creator
    pub fn from_post(post: Post, creator: CreatorResponse) -> Self {
        Self {
            id: post.id.to_string(),
            title: post.title,
            content: post.content,
            image_url: post.image_url,
            creator,
            created_at: post.created_at,
            updated_at: post.updated_at,
        }
    }
}

impl From<PostRecord> for PostResponse {
    fn from(record: PostRecord) -> Self {
        Self {
            id: record.id.to_string(),
            title: record.title,
            content: record.content,
            image_url: record.image_url,
            creator: CreatorResponse {
                id: record.creator_id.to_string(),
                name: record.creator_name,
            },
            created_at: record.created_at,
            updated_at: record.updated_at,
        }
    }
}

/// Listing response (GET /feed/posts)
#[derive(Serialize, Debug)]
#[serde(rename_all = "camelCase")]
pub struct ListPostsResponse {
    pub message: String,
    pub posts: Vec<PostResponse>,
    pub total_items: i64,
}

/// Creation response (POST /feed/createPost)
#[derive(Serialize, Debug)]
pub struct CreatePostResponse {
    pub message: String,
    pub post: PostResponse,
    pub creator: CreatorResponse,
}

/// Single-post response (GET and PUT /feed/post/{id})
#[derive(Serialize, Debug)]
pub struct PostEnvelope {
    pub message: String,
    pub post: PostResponse,
}

/// Bare message response (DELETE /feed/post/{id})
#[derive(Serialize, Debug)]
pub struct MessageResponse {
    pub message: String,
}

/// Query parameters for the feed listing
#[derive(Deserialize, Debug, Default)]
pub struct FeedPageQuery {
    pub page: Option<String>,
}

/// Parse and validate the `page` parameter (1-indexed, defaults to 1)
pub fn parse_page(page: Option<&str>) -> Result<u32, ApiError> {
    let Some(raw) = page else {
        return Ok(1);
    };

    match raw.trim().parse::<u32>() {
        Ok(page) if page >= 1 => Ok(page),
        _ => Err(ApiError::validation(
            "Validation failed.",
            vec![FieldViolation::new("page", "Page must be a positive integer.")],
        )),
    }
}

/// Check that the acting user owns the post
///
/// Update and delete are owner-only; everyone else gets a 403 with the
/// caller-supplied message.
pub fn ensure_owner(creator_id: Uuid, user_id: Uuid, message: &str) -> Result<(), ApiError> {
    if creator_id != user_id {
        tracing::warn!(
            "User {} attempted an owner-only action on a post owned by {}",
            user_id,
            creator_id
        );
        return Err(ApiError::forbidden(message));
    }
    Ok(())
}

/// Validate post title and content (trimmed minimum lengths)
pub fn validate_post_fields(title: &str, content: &str) -> Vec<FieldViolation> {
    let mut violations = Vec::new();

    if title.trim().len() < MIN_FIELD_LEN {
        violations.push(FieldViolation::new(
            "title",
            format!("Title must be at least {MIN_FIELD_LEN} characters."),
        ));
    }

    if content.trim().len() < MIN_FIELD_LEN {
        violations.push(FieldViolation::new(
            "content",
            format!("Content must be at least {MIN_FIELD_LEN} characters."),
        ));
    }

    violations
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use uuid::Uuid;

    #[test]
    fn test_parse_page_default() {
        assert_eq!(parse_page(None).unwrap(), 1);
    }

    #[test]
    fn test_parse_page_valid() {
        assert_eq!(parse_page(Some("3")).unwrap(), 3);
        assert_eq!(parse_page(Some(" 2 ")).unwrap(), 2);
    }

    #[test]
    fn test_parse_page_invalid() {
        assert!(parse_page(Some("0")).is_err());
        assert!(parse_page(Some("-1")).is_err());
        assert!(parse_page(Some("abc")).is_err());
    }

    #[test]
    fn test_validate_post_fields_length_four_fails() {
        let violations = validate_post_fields("abcd", "efgh");
        let fields: Vec<&str> = violations.iter().map(|v| v.field.as_str()).collect();
        assert_eq!(fields, vec!["title", "content"]);
    }

    #[test]
    fn test_validate_post_fields_length_five_passes() {
        assert!(validate_post_fields("abcde", "fghij").is_empty());
    }

    #[test]
    fn test_validate_post_fields_trims() {
        // Padding does not rescue a short field.
        let violations = validate_post_fields("  abcd  ", "long enough content");
        assert_eq!(violations.len(), 1);
        assert_eq!(violations[0].field, "title");
    }

    #[test]
    fn test_ensure_owner_accepts_owner() {
        let id = Uuid::new_v4();
        assert!(ensure_owner(id, id, "Not authorized to edit this post.").is_ok());
    }

    #[test]
    fn test_ensure_owner_rejects_non_owner() {
        let err = ensure_owner(
            Uuid::new_v4(),
            Uuid::new_v4(),
            "Not authorized to delete this post.",
        )
        .unwrap_err();

        assert!(matches!(err, ApiError::Forbidden(_)));
        assert_eq!(
            err.status_code(),
            axum::http::StatusCode::FORBIDDEN
        );
        assert_eq!(err.message(), "Not authorized to delete this post.");
    }

    #[test]
    fn test_post_response_serializes_camel_case() {
        let now = Utc::now();
        let creator_id = Uuid::new_v4();
        let response = PostResponse {
            id: Uuid::new_v4().to_string(),
            title: "A title".to_string(),
            content: "Some content".to_string(),
            image_url: "images/abc.png".to_string(),
            creator: CreatorResponse {
                id: creator_id.to_string(),
                name: "A".to_string(),
            },
            created_at: now,
            updated_at: now,
        };

        let json = serde_json::to_value(&response).unwrap();
        assert_eq!(json["imageUrl"], "images/abc.png");
        assert_eq!(json["creator"]["name"], "A");
        assert!(json.get("createdAt").is_some());
        // No password material anywhere near the wire type.
        assert!(json["creator"].get("email").is_none());
    }
}
