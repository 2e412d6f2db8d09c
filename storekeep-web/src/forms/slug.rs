//! URL slug derivation for product and category names.

/// Derive a URL slug from a display name.
///
/// Lowercases, collapses every run of non-alphanumeric characters into a
/// single hyphen, and trims hyphens from both ends. Non-ASCII letters are
/// treated as separators, so the result is always URL-safe ASCII.
pub fn slugify(name: &str) -> String {
    let mut slug = String::with_capacity(name.len());
    let mut pending_hyphen = false;
    for ch in name.chars() {
        if ch.is_ascii_alphanumeric() {
            if pending_hyphen && !slug.is_empty() {
                slug.push('-');
            }
            pending_hyphen = false;
            slug.push(ch.to_ascii_lowercase());
        } else {
            pending_hyphen = true;
        }
    }
    slug
}
