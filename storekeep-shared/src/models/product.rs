use serde::{Deserialize, Serialize};

use super::Category;

/// A catalog product with its categories and image gallery.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Product {
    /// Unique identifier for the product.
    pub id: i64,

    /// Display name.
    pub name: String,

    /// URL-safe identifier, unique per product.
    pub slug: String,

    /// Long-form description.
    #[serde(default)]
    pub description: String,

    /// Current selling price.
    pub price: f64,

    /// Optional strike-through price shown next to the selling price.
    #[serde(default)]
    pub compare_price: Option<f64>,

    /// Units in stock.
    pub stock: i64,

    /// Optional stock-keeping unit code.
    #[serde(default)]
    pub sku: Option<String>,

    /// Whether the product is featured on the storefront.
    #[serde(default)]
    pub featured: bool,

    /// Whether the product is visible on the storefront.
    #[serde(default = "default_active")]
    pub is_active: bool,

    /// Categories the product belongs to.
    #[serde(default)]
    pub categories: Vec<Category>,

    /// Image gallery, ordered by `sort_order`.
    #[serde(default)]
    pub images: Vec<ProductImage>,

    /// ISO-8601 creation timestamp.
    #[serde(default)]
    pub created_at: String,
}

fn default_active() -> bool {
    true
}

/// One image in a product's gallery.
///
/// At most one image is primary; the gallery bookkeeping on the product
/// form maintains that invariant together with contiguous `sort_order`.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct ProductImage {
    /// Where the image is served from.
    pub url: String,

    /// Accessible alternative text, defaulting to the file or product name.
    #[serde(default)]
    pub alt_text: String,

    /// Whether this image is the product's primary image.
    #[serde(default)]
    pub is_primary: bool,

    /// Position within the gallery, zero-based and contiguous.
    #[serde(default)]
    pub sort_order: u32,
}

/// Create/update body for `POST /products/` and `PUT /products/{id}`.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct ProductPayload {
    /// Display name.
    pub name: String,
    /// URL-safe identifier.
    pub slug: String,
    /// Long-form description.
    pub description: String,
    /// Current selling price.
    pub price: f64,
    /// Optional strike-through price.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub compare_price: Option<f64>,
    /// Units in stock.
    pub stock: i64,
    /// Optional stock-keeping unit code.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub sku: Option<String>,
    /// Feature the product on the storefront.
    pub featured: bool,
    /// Show the product on the storefront.
    pub is_active: bool,
    /// IDs of the categories the product belongs to.
    pub category_ids: Vec<i64>,
    /// Replacement image gallery.
    pub images: Vec<ProductImage>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn product_deserializes_with_nested_collections() {
        let json = r#"{
            "id": 3,
            "name": "Classic Tee",
            "slug": "classic-tee",
            "description": "A classic.",
            "price": 19.99,
            "compare_price": 24.99,
            "stock": 120,
            "sku": "TEE-001",
            "featured": true,
            "is_active": true,
            "categories": [{"id": 1, "name": "Shirts", "slug": "shirts"}],
            "images": [
                {"url": "https://cdn.example.com/tee.png", "alt_text": "tee", "is_primary": true, "sort_order": 0}
            ],
            "created_at": "2024-01-15T12:00:00"
        }"#;
        let product: Product = serde_json::from_str(json).unwrap();
        assert_eq!(product.slug, "classic-tee");
        assert_eq!(product.categories.len(), 1);
        assert!(product.images[0].is_primary);
    }

    #[test]
    fn payload_omits_unset_optionals() {
        let payload = ProductPayload {
            name: "Tee".to_string(),
            slug: "tee".to_string(),
            description: String::new(),
            price: 10.0,
            compare_price: None,
            stock: 5,
            sku: None,
            featured: false,
            is_active: true,
            category_ids: vec![2],
            images: Vec::new(),
        };
        let json = serde_json::to_string(&payload).unwrap();
        assert!(!json.contains("compare_price"));
        assert!(!json.contains("sku"));
        assert!(json.contains(r#""category_ids":[2]"#));
    }
}
