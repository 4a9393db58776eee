//! Vitrine Catalog - Product data model and catalog views
//!
//! Normalizes raw tabular records into immutable products and serves the
//! derived views the rest of the workspace consumes:
//! - Stable product identity (explicit id, title+price composite, or
//!   structural hash)
//! - Price-ranked candidate subsets
//! - Case-insensitive free-text filtering
//! - Aggregate stock that distinguishes "no data" from zero

#![warn(unreachable_pub)]

pub mod catalog;
pub mod error;
pub mod normalize;
pub mod types;

pub use catalog::Catalog;
pub use error::CatalogError;
pub use normalize::{normalize_price, normalize_stock};
pub use types::{Product, ProductId, RawRecord, StockLevel};

/// Version of this crate
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
