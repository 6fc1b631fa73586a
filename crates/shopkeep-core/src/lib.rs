// shopkeep-core: Reactive data layer between shopkeep-api and UI consumers.

pub mod config;
pub mod controller;
pub mod convert;
pub mod error;
pub mod model;
pub mod notice;
pub mod query;
pub mod search;
pub mod stream;
pub mod view;

// ── Primary re-exports ──────────────────────────────────────────────
pub use config::CatalogConfig;
pub use controller::{Catalog, ModalState};
pub use error::CoreError;
pub use notice::{Notice, NoticeKind};
pub use query::{QueryCache, QueryEntry, QueryKey, QueryState, QueryStatus};
pub use search::{ProductFilter, SearchDebouncer};
pub use stream::QueryStream;

// Re-export model types at the crate root for ergonomics.
pub use model::{Product, ProductDraft, ProductId};
