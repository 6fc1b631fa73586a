// ── Query cache ──
//
// An explicit cache service instance keyed by an enumerable set of
// logical query identities; no ambient singleton. Entries are owned
// here and mutated only by the completion callbacks of their own
// fetches; mutations against the API never write into the cache.

mod entry;

use std::sync::Arc;

use dashmap::DashMap;

pub use entry::{QueryEntry, QueryState, QueryStatus};

use crate::model::{Product, ProductId};

/// Logical identity of a cacheable read.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum QueryKey {
    /// The full product collection.
    Products,
    /// One product by id.
    Detail(ProductId),
}

/// Cache for the catalog's two logical queries.
///
/// The collection query is a single entry; detail queries get one entry
/// per id, created lazily on first access. Detail entries are
/// independent of the collection: a mutation invalidates only the
/// collection, so an open detail view can go stale until it is
/// separately invalidated.
pub struct QueryCache {
    products: QueryEntry<Vec<Product>>,
    details: DashMap<ProductId, Arc<QueryEntry<Product>>>,
}

impl QueryCache {
    pub fn new() -> Self {
        Self {
            products: QueryEntry::new(),
            details: DashMap::new(),
        }
    }

    /// The collection query entry.
    pub fn products(&self) -> &QueryEntry<Vec<Product>> {
        &self.products
    }

    /// The detail query entry for `id`, created (loading + stale) on
    /// first access.
    pub fn detail(&self, id: &ProductId) -> Arc<QueryEntry<Product>> {
        self.details
            .entry(id.clone())
            .or_insert_with(|| Arc::new(QueryEntry::new()))
            .clone()
    }

    /// Mark a query stale, triggering a background refetch on next access.
    pub fn invalidate(&self, key: &QueryKey) {
        match key {
            QueryKey::Products => self.products.invalidate(),
            QueryKey::Detail(id) => {
                // Only invalidate an entry that already exists; creating
                // one here would schedule a fetch nobody asked for.
                if let Some(entry) = self.details.get(id) {
                    entry.invalidate();
                }
            }
        }
    }
}

impl Default for QueryCache {
    fn default() -> Self {
        Self::new()
    }
}
