/**
 * Multipart Form Collection
 *
 * Create and update both arrive as multipart forms with `title` and
 * `content` text fields and an `image` field that is either a file
 * part (a new upload) or a plain text part carrying an existing
 * reference. This module drains the multipart stream into a plain
 * struct so the handlers can validate before touching storage.
 */

use axum::body::Bytes;
use axum::extract::Multipart;

use crate::error::ApiError;

/// An uploaded image part
#[derive(Debug)]
pub struct ImageUpload {
    pub bytes: Bytes,
    pub content_type: String,
}

/// The collected post form
#[derive(Debug, Default)]
pub struct PostForm {
    pub title: String,
    pub content: String,
    /// Text `image` field: an existing asset reference echoed by the client
    pub image_field: Option<String>,
    /// File `image` field: a new upload
    pub image_file: Option<ImageUpload>,
}

/// Drain a multipart request into a `PostForm`
///
/// Unknown fields are ignored. A malformed stream fails with a 422;
/// nothing has been written anywhere at that point.
pub async fn collect_post_form(mut multipart: Multipart) -> Result<PostForm, ApiError> {
    let mut form = PostForm::default();

    while let Some(field) = multipart.next_field().await.map_err(malformed)? {
        let name = field.name().unwrap_or_default().to_string();

        match name.as_str() {
            "title" => form.title = field.text().await.map_err(malformed)?,
            "content" => form.content = field.text().await.map_err(malformed)?,
            "image" => {
                // A content type marks a file part; otherwise the client
                // is echoing back an existing reference as text.
                if let Some(content_type) = field.content_type().map(str::to_string) {
                    let bytes = field.bytes().await.map_err(malformed)?;
                    form.image_file = Some(ImageUpload {
                        bytes,
                        content_type,
                    });
                } else {
                    let text = field.text().await.map_err(malformed)?;
                    if !text.trim().is_empty() {
                        form.image_field = Some(text.trim().to_string());
                    }
                }
            }
            _ => {}
        }
    }

    Ok(form)
}

fn malformed(e: axum::extract::multipart::MultipartError) -> ApiError {
    tracing::warn!("Malformed multipart form: {:?}", e);
    ApiError::validation("Malformed multipart form.", Vec::new())
}
