// ── API-to-domain type conversions ──
//
// Bridges the raw `shopkeep_api` wire record into the canonical
// `shopkeep_core::model` types and back. The wire shape is all strings,
// so conversion is field-by-field; the one normalization is wrapping the
// id in `ProductId`.

use shopkeep_api::ProductRecord;

use crate::model::{Product, ProductDraft, ProductId};

impl From<ProductRecord> for Product {
    fn from(r: ProductRecord) -> Self {
        Product {
            id: ProductId::from(r.id),
            name: r.name,
            description: r.description,
            price: r.price,
            materials: r.materials,
            image: r.image,
            created_at: r.created_at,
        }
    }
}

impl From<&Product> for ProductRecord {
    fn from(p: &Product) -> Self {
        ProductRecord {
            id: p.id.as_str().to_owned(),
            name: p.name.clone(),
            description: p.description.clone(),
            price: p.price.clone(),
            materials: p.materials.clone(),
            image: p.image.clone(),
            created_at: p.created_at.clone(),
        }
    }
}

impl From<&ProductDraft> for ProductRecord {
    fn from(d: &ProductDraft) -> Self {
        ProductRecord {
            id: d.id.as_str().to_owned(),
            name: d.name.clone(),
            description: d.description.clone(),
            price: d.price.clone(),
            materials: d.materials.clone(),
            image: d.image.clone(),
            created_at: d.created_at.clone(),
        }
    }
}
