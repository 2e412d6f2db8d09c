use serde::{Deserialize, Serialize};

/// A product review, with optional snapshots of the reviewer and product.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct Review {
    /// Unique identifier for the review.
    pub id: i64,
    /// The reviewing user.
    pub user_id: i64,
    /// The reviewed product.
    pub product_id: i64,
    /// Star rating, 1 through 5.
    pub rating: u8,
    /// Optional headline.
    #[serde(default)]
    pub title: Option<String>,
    /// Optional review body.
    #[serde(default)]
    pub comment: Option<String>,
    /// ISO-8601 creation timestamp.
    #[serde(default)]
    pub created_at: String,
    /// Reviewer snapshot, when the backend expands it.
    #[serde(default)]
    pub user: Option<ReviewUser>,
    /// Product snapshot, when the backend expands it.
    #[serde(default)]
    pub product: Option<ReviewProduct>,
}

/// Minimal reviewer details embedded in a review.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct ReviewUser {
    /// The reviewing user's id.
    pub id: i64,
    /// The reviewing user's username.
    pub username: String,
    /// The reviewing user's display name.
    #[serde(default)]
    pub full_name: Option<String>,
}

/// Minimal product details embedded in a review.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct ReviewProduct {
    /// The reviewed product's id.
    pub id: i64,
    /// The reviewed product's name.
    pub name: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn review_deserializes_with_expansions() {
        let json = r#"{
            "id": 9,
            "user_id": 5,
            "product_id": 3,
            "rating": 4,
            "title": "Solid",
            "comment": "Fits well.",
            "created_at": "2024-03-02T08:00:00",
            "user": {"id": 5, "username": "buyer", "full_name": "A Buyer"},
            "product": {"id": 3, "name": "Classic Tee"}
        }"#;
        let review: Review = serde_json::from_str(json).unwrap();
        assert_eq!(review.rating, 4);
        assert_eq!(review.user.as_ref().unwrap().username, "buyer");
        assert_eq!(review.product.as_ref().unwrap().name, "Classic Tee");
    }

    #[test]
    fn review_deserializes_without_expansions() {
        let json = r#"{"id": 1, "user_id": 2, "product_id": 3, "rating": 5}"#;
        let review: Review = serde_json::from_str(json).unwrap();
        assert_eq!(review.user, None);
        assert_eq!(review.product, None);
    }
}
