// ── Runtime configuration ──
//
// Describes *where* the catalog endpoint lives and how the data layer
// should behave. Never touches disk — the `shopkeep-config` crate loads
// files/env and hands a `CatalogConfig` in.

use std::time::Duration;

use url::Url;

/// Configuration for one catalog data layer instance.
///
/// Built by the embedding application, passed to [`crate::Catalog`] —
/// core never reads config files.
#[derive(Debug, Clone)]
pub struct CatalogConfig {
    /// Collection endpoint base URL (e.g. `https://host/api/v1/products`).
    pub base_url: Url,
    /// Per-request timeout.
    pub timeout: Duration,
    /// How long search input must be idle before the filter applies.
    pub search_settle: Duration,
}

impl Default for CatalogConfig {
    fn default() -> Self {
        Self {
            base_url: "http://localhost:3000/api/v1/products"
                .parse()
                .expect("valid default URL"),
            timeout: Duration::from_secs(30),
            search_settle: Duration::from_millis(300),
        }
    }
}
