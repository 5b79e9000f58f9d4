//! Product entity, optionally attached to a company.

/// A stored product.
///
/// `attachment_id` references the owning [`super::Company`]; deleting that
/// company deletes the product as well.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Product {
    pub id: i64,
    pub identity_product: String,
    pub title: String,
    pub description: String,
    pub price: i64,
    pub quantity: i64,
    pub attachment_id: Option<i64>,
}

impl Product {
    /// Creates a new Product instance.
    #[allow(clippy::too_many_arguments)]
    pub fn new(
        id: i64,
        identity_product: String,
        title: String,
        description: String,
        price: i64,
        quantity: i64,
        attachment_id: Option<i64>,
    ) -> Self {
        Self {
            id,
            identity_product,
            title,
            description,
            price,
            quantity,
            attachment_id,
        }
    }

    /// Returns true if the product belongs to a company.
    pub fn is_attached(&self) -> bool {
        self.attachment_id.is_some()
    }
}

/// Input data for creating a new product.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewProduct {
    pub title: String,
    pub description: String,
    pub price: i64,
    pub quantity: i64,
    pub attachment_id: Option<i64>,
}

/// Partial update for an existing product.
///
/// `None` fields are left unchanged.
/// `attachment_id: Some(None)` detaches the product; `Some(Some(id))` moves it.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ProductPatch {
    pub title: Option<String>,
    pub description: Option<String>,
    pub price: Option<i64>,
    pub quantity: Option<i64>,
    pub attachment_id: Option<Option<i64>>,
}

impl ProductPatch {
    /// The company the patch attaches the product to, if any.
    pub fn new_attachment(&self) -> Option<i64> {
        self.attachment_id.flatten()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn product(attachment_id: Option<i64>) -> Product {
        Product::new(
            7,
            "9a1d1a52-0000-4000-8000-000000000007".to_string(),
            "Widget".to_string(),
            "A widget".to_string(),
            100,
            50,
            attachment_id,
        )
    }

    #[test]
    fn test_product_creation() {
        let p = product(Some(1));

        assert_eq!(p.id, 7);
        assert_eq!(p.price, 100);
        assert_eq!(p.quantity, 50);
        assert!(p.is_attached());
    }

    #[test]
    fn test_detached_product() {
        assert!(!product(None).is_attached());
    }

    #[test]
    fn test_patch_attachment_semantics() {
        let untouched = ProductPatch::default();
        assert_eq!(untouched.attachment_id, None);
        assert_eq!(untouched.new_attachment(), None);

        let detach = ProductPatch {
            attachment_id: Some(None),
            ..Default::default()
        };
        assert_eq!(detach.new_attachment(), None);

        let moved = ProductPatch {
            attachment_id: Some(Some(3)),
            ..Default::default()
        };
        assert_eq!(moved.new_attachment(), Some(3));
    }
}
