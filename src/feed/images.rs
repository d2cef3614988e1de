/**
 * Image Asset Lifecycle
 *
 * Uploaded images live on disk under the configured image directory
 * and are referenced from posts as `images/<uuid>.<ext>` - the same
 * prefix they are served under. Creation is part of the post mutation
 * path; removal is always best-effort (failures are logged, never
 * surfaced to the caller).
 */

use std::path::Path;

use uuid::Uuid;

use crate::error::ApiError;

/// URL prefix image references are stored and served under
pub const IMAGE_URL_PREFIX: &str = "images/";

/// Map an accepted image content type to its file extension
///
/// Anything outside this list is rejected at upload time, mirroring
/// the upload filter of the original system (png/jpg/jpeg only).
pub fn extension_for(content_type: &str) -> Option<&'static str> {
    match content_type {
        "image/png" => Some("png"),
        "image/jpg" => Some("jpg"),
        "image/jpeg" => Some("jpeg"),
        _ => None,
    }
}

/// Persist an uploaded image and return its reference
///
/// The asset gets a fresh uuid filename; the returned reference is the
/// `images/<uuid>.<ext>` form stored on posts.
pub async fn save_image(
    image_dir: &Path,
    bytes: &[u8],
    extension: &str,
) -> Result<String, ApiError> {
    let filename = format!("{}.{}", Uuid::new_v4(), extension);
    let path = image_dir.join(&filename);

    tokio::fs::create_dir_all(image_dir).await.map_err(|e| {
        tracing::error!("Failed to create image directory {:?}: {:?}", image_dir, e);
        ApiError::internal("Unable to store image.")
    })?;

    tokio::fs::write(&path, bytes).await.map_err(|e| {
        tracing::error!("Failed to write image {:?}: {:?}", path, e);
        ApiError::internal("Unable to store image.")
    })?;

    tracing::debug!("Stored image asset at {:?}", path);
    Ok(format!("{IMAGE_URL_PREFIX}{filename}"))
}

/// Remove an image asset, best-effort
///
/// Called when a post is deleted or its image replaced. Failure is
/// logged and swallowed; the surrounding mutation is never rolled back
/// over a missing file.
pub async fn remove_image(image_dir: &Path, image_url: &str) {
    let Some(filename) = image_url.strip_prefix(IMAGE_URL_PREFIX) else {
        tracing::warn!("Refusing to remove image with unexpected reference: {}", image_url);
        return;
    };

    // References can originate from a client-supplied field on update;
    // never follow one out of the image directory.
    if filename.contains('/') || filename.contains('\\') || filename.contains("..") {
        tracing::warn!("Refusing to remove image outside the image directory: {}", image_url);
        return;
    }

    let path = image_dir.join(filename);
    if let Err(e) = tokio::fs::remove_file(&path).await {
        tracing::warn!("Failed to remove image asset {:?}: {:?}", path, e);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_extension_for_accepted_types() {
        assert_eq!(extension_for("image/png"), Some("png"));
        assert_eq!(extension_for("image/jpg"), Some("jpg"));
        assert_eq!(extension_for("image/jpeg"), Some("jpeg"));
    }

    #[test]
    fn test_extension_for_rejected_types() {
        assert_eq!(extension_for("image/gif"), None);
        assert_eq!(extension_for("text/plain"), None);
        assert_eq!(extension_for("application/octet-stream"), None);
    }

    #[tokio::test]
    async fn test_save_image_writes_file() {
        let dir = tempfile::tempdir().unwrap();

        let url = save_image(dir.path(), b"not a real png", "png").await.unwrap();
        assert!(url.starts_with(IMAGE_URL_PREFIX));
        assert!(url.ends_with(".png"));

        let filename = url.strip_prefix(IMAGE_URL_PREFIX).unwrap();
        let contents = tokio::fs::read(dir.path().join(filename)).await.unwrap();
        assert_eq!(contents, b"not a real png");
    }

    #[tokio::test]
    async fn test_remove_image_deletes_file() {
        let dir = tempfile::tempdir().unwrap();
        let url = save_image(dir.path(), b"data", "jpeg").await.unwrap();
        let filename = url.strip_prefix(IMAGE_URL_PREFIX).unwrap().to_string();

        remove_image(dir.path(), &url).await;
        assert!(!dir.path().join(filename).exists());
    }

    #[tokio::test]
    async fn test_remove_missing_image_does_not_panic() {
        let dir = tempfile::tempdir().unwrap();
        remove_image(dir.path(), "images/no-such-file.png").await;
    }

    #[tokio::test]
    async fn test_remove_image_rejects_foreign_reference() {
        let dir = tempfile::tempdir().unwrap();
        // References outside the images/ namespace are ignored.
        remove_image(dir.path(), "/etc/passwd").await;
        remove_image(dir.path(), "images/../escape.png").await;
    }
}
