//! Product image list bookkeeping.
//!
//! The form keeps its gallery in an [`ImageList`] so that the primary flag
//! and sort order stay consistent through every edit: exactly one image is
//! primary whenever the list is non-empty, and `sort_order` always matches
//! the list position.

use shared::models::ProductImage;

/// An ordered product gallery with a single primary image.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ImageList {
    images: Vec<ProductImage>,
}

impl ImageList {
    /// Wrap images loaded from an existing product, renumbering them so the
    /// invariants hold even if the backend data was inconsistent.
    pub fn from_existing(images: Vec<ProductImage>) -> Self {
        let mut list = Self { images };
        list.renumber();
        if !list.images.is_empty() && !list.images.iter().any(|image| image.is_primary) {
            list.images[0].is_primary = true;
        }
        list
    }

    /// Append an image. The first image added becomes primary.
    pub fn push(&mut self, url: String, alt_text: String) {
        let sort_order = self.images.len() as u32;
        self.images.push(ProductImage {
            url,
            alt_text,
            is_primary: self.images.is_empty(),
            sort_order,
        });
    }

    /// Remove the image at `index`. If it was primary, the first remaining
    /// image takes over; positions are renumbered.
    pub fn remove(&mut self, index: usize) {
        if index >= self.images.len() {
            return;
        }
        let removed = self.images.remove(index);
        if removed.is_primary {
            if let Some(first) = self.images.first_mut() {
                first.is_primary = true;
            }
        }
        self.renumber();
    }

    /// Mark the image at `index` as primary and clear the flag everywhere
    /// else.
    pub fn set_primary(&mut self, index: usize) {
        if index >= self.images.len() {
            return;
        }
        for (i, image) in self.images.iter_mut().enumerate() {
            image.is_primary = i == index;
        }
    }

    pub fn len(&self) -> usize {
        self.images.len()
    }

    pub fn is_empty(&self) -> bool {
        self.images.is_empty()
    }

    pub fn as_slice(&self) -> &[ProductImage] {
        &self.images
    }

    /// Hand the images off for submission.
    pub fn into_vec(self) -> Vec<ProductImage> {
        self.images
    }

    fn renumber(&mut self) {
        for (i, image) in self.images.iter_mut().enumerate() {
            image.sort_order = i as u32;
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn urls(list: &ImageList) -> Vec<&str> {
        list.as_slice()
            .iter()
            .map(|image| image.url.as_str())
            .collect()
    }

    fn primary_count(list: &ImageList) -> usize {
        list.as_slice()
            .iter()
            .filter(|image| image.is_primary)
            .count()
    }

    #[test]
    fn first_image_becomes_primary() {
        let mut list = ImageList::default();
        list.push("a.png".to_string(), String::new());
        list.push("b.png".to_string(), String::new());
        assert!(list.as_slice()[0].is_primary);
        assert!(!list.as_slice()[1].is_primary);
        assert_eq!(list.as_slice()[1].sort_order, 1);
    }

    #[test]
    fn removing_primary_promotes_the_first_remaining() {
        let mut list = ImageList::default();
        list.push("a.png".to_string(), String::new());
        list.push("b.png".to_string(), String::new());
        list.push("c.png".to_string(), String::new());
        list.remove(0);
        assert_eq!(urls(&list), ["b.png", "c.png"]);
        assert!(list.as_slice()[0].is_primary);
        assert_eq!(primary_count(&list), 1);
        assert_eq!(list.as_slice()[1].sort_order, 1);
    }

    #[test]
    fn removing_non_primary_keeps_the_primary() {
        let mut list = ImageList::default();
        list.push("a.png".to_string(), String::new());
        list.push("b.png".to_string(), String::new());
        list.remove(1);
        assert!(list.as_slice()[0].is_primary);
        assert_eq!(list.len(), 1);
    }

    #[test]
    fn set_primary_is_exclusive() {
        let mut list = ImageList::default();
        list.push("a.png".to_string(), String::new());
        list.push("b.png".to_string(), String::new());
        list.push("c.png".to_string(), String::new());
        list.set_primary(2);
        assert!(list.as_slice()[2].is_primary);
        assert_eq!(primary_count(&list), 1);
    }

    #[test]
    fn out_of_range_indexes_are_ignored() {
        let mut list = ImageList::default();
        list.push("a.png".to_string(), String::new());
        list.remove(5);
        list.set_primary(5);
        assert_eq!(list.len(), 1);
        assert!(list.as_slice()[0].is_primary);
    }

    #[test]
    fn from_existing_repairs_missing_primary() {
        let images = vec![
            ProductImage {
                url: "a.png".to_string(),
                alt_text: String::new(),
                is_primary: false,
                sort_order: 7,
            },
            ProductImage {
                url: "b.png".to_string(),
                alt_text: String::new(),
                is_primary: false,
                sort_order: 3,
            },
        ];
        let list = ImageList::from_existing(images);
        assert!(list.as_slice()[0].is_primary);
        assert_eq!(list.as_slice()[0].sort_order, 0);
        assert_eq!(list.as_slice()[1].sort_order, 1);
    }

    #[test]
    fn empty_list_stays_consistent() {
        let mut list = ImageList::from_existing(Vec::new());
        assert!(list.is_empty());
        list.remove(0);
        assert!(list.into_vec().is_empty());
    }
}
