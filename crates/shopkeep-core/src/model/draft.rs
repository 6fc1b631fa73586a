// ── Form submission record ──
//
// An explicit draft type with every field enumerated, replacing ad-hoc
// partial merges: `blank()` is the create-form starting point and
// `from_product()` seeds the edit form.

use crate::error::CoreError;

use super::product::Product;
use super::product_id::ProductId;

/// The well-defined payload of an upsert submission.
///
/// Drafts for new records carry the placeholder id and an empty
/// `created_at`; the controller assigns both at submission time. Drafts
/// for edits carry the existing id and timestamp through unchanged.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ProductDraft {
    pub id: ProductId,
    pub name: String,
    pub description: String,
    pub price: String,
    pub materials: String,
    pub image: String,
    pub created_at: String,
}

impl ProductDraft {
    /// An empty create-form draft.
    pub fn blank() -> Self {
        Self {
            id: ProductId::placeholder(),
            name: String::new(),
            description: String::new(),
            price: String::new(),
            materials: String::new(),
            image: String::new(),
            created_at: String::new(),
        }
    }

    /// An edit-form draft seeded from an existing product.
    pub fn from_product(product: &Product) -> Self {
        Self {
            id: product.id.clone(),
            name: product.name.clone(),
            description: product.description.clone(),
            price: product.price.clone(),
            materials: product.materials.clone(),
            image: product.image.clone(),
            created_at: product.created_at.clone(),
        }
    }

    /// Check that every required field is non-empty after trimming.
    ///
    /// Reports the first missing field, matching the order the form
    /// presents them in.
    pub fn validate(&self) -> Result<(), CoreError> {
        let required: [(&'static str, &str); 5] = [
            ("name", &self.name),
            ("description", &self.description),
            ("price", &self.price),
            ("materials", &self.materials),
            ("image", &self.image),
        ];

        for (field, value) in required {
            if value.trim().is_empty() {
                return Err(CoreError::Validation { field });
            }
        }
        Ok(())
    }
}

impl Default for ProductDraft {
    fn default() -> Self {
        Self::blank()
    }
}
