// shopkeep-api: Async Rust client for the shopkeep product-catalog REST API

pub mod client;
pub mod error;
pub mod record;
pub mod transport;

mod products;

pub use client::ProductClient;
pub use error::Error;
pub use record::ProductRecord;
pub use transport::TransportConfig;
