// ── Domain model ──
//
// Canonical representation of the catalog's single entity. The wire
// shape (`shopkeep_api::ProductRecord`) is bridged into these types by
// the `convert` module; consumers only ever see what's here.

pub mod draft;
pub mod product;
pub mod product_id;

// ── Re-exports ──────────────────────────────────────────────────────

pub use draft::ProductDraft;
pub use product::Product;
pub(crate) use product::parse_timestamp;
pub use product_id::ProductId;
