//! Checks for image URLs pasted into the product form.

use crate::error::ApiError;

const IMAGE_EXTENSIONS: [&str; 9] = [
    ".jpg", ".jpeg", ".png", ".gif", ".webp", ".svg", ".bmp", ".tif", ".tiff",
];

const IMAGE_HOST_HINTS: [&str; 7] = [
    "/image/",
    "/images/",
    "/img/",
    "picsum.photos",
    "unsplash.com",
    "placehold.co",
    "via.placeholder.com",
];

/// Reject a pasted URL that is not http(s).
pub fn validate_image_url(url: &str) -> Result<(), ApiError> {
    let trimmed = url.trim();
    if trimmed.starts_with("http://") || trimmed.starts_with("https://") {
        Ok(())
    } else {
        Err(ApiError::Validation("Invalid URL format".to_string()))
    }
}

/// Best-effort guess at whether a URL points at an image.
///
/// Looks for a known file extension before any query string, then for path
/// or host fragments common to image CDNs. A miss only triggers a
/// confirmation prompt, never a hard rejection.
pub fn looks_like_image_url(url: &str) -> bool {
    let lower = url.to_ascii_lowercase();
    let path = lower.split(['?', '#']).next().unwrap_or(&lower);
    if IMAGE_EXTENSIONS.iter().any(|ext| path.ends_with(ext)) {
        return true;
    }
    IMAGE_HOST_HINTS.iter().any(|hint| lower.contains(hint))
}
