// Wire-shape record for the catalog collection endpoint.
//
// Every field is a string on the wire — the API stores prices and
// timestamps exactly as the client submitted them. `shopkeep-core`
// converts this into its domain `Product` type.

use serde::{Deserialize, Serialize};

/// A product record as it appears in the endpoint's JSON.
///
/// `id == "create"` is the client-side sentinel for a record that has
/// not been persisted yet; the server assigns creation vs replacement
/// semantics based on whether the submitted `id` already exists.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ProductRecord {
    pub id: String,
    pub name: String,
    pub description: String,
    /// String-encoded decimal; arbitrary input formatting is preserved.
    pub price: String,
    /// Comma-delimited tag names.
    pub materials: String,
    /// Image URL; empty means "no image" and display falls back to a placeholder.
    #[serde(default)]
    pub image: String,
    /// ISO-8601 timestamp, assigned once at creation.
    #[serde(default)]
    pub created_at: String,
}
