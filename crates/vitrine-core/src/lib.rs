//! Vitrine Core - featured rotation and expansion tracking
//!
//! The storefront's state machine:
//! - Rotates a bounded "featured" subset of the candidate pool on a tick
//! - Backfills featured slots immediately when the user expands an item
//! - Tracks expanded detail panels by identity, without duplicates
//! - Raises discrete change notifications for the rendering collaborator
//!
//! # Example
//!
//! ```rust,ignore
//! use vitrine_core::{InMemorySource, Storefront, StorefrontConfig};
//! use vitrine_sampler::Sampler;
//!
//! # async fn example() -> Result<(), Box<dyn std::error::Error>> {
//! let source = InMemorySource::new(records);
//! let config = StorefrontConfig::new().with_featured_count(5);
//! let mut shop = Storefront::open(&source, config, Sampler::from_entropy()).await?;
//!
//! shop.start_rotation();
//! println!("featured: {:?}", shop.featured().await);
//! # Ok(())
//! # }
//! ```

#![warn(unreachable_pub)]

// Core modules
pub mod config;
pub mod controller;
pub mod error;
pub mod events;
pub mod expansion;
pub mod scheduler;
pub mod source;
pub mod storefront;

// Re-exports for convenience
pub use config::StorefrontConfig;
pub use controller::{ExpandOutcome, RotationController};
pub use error::{RotationError, StorefrontError};
pub use events::{ChangeEvent, ChangeNotifier};
pub use expansion::{AddOutcome, ExpansionRegistry};
pub use scheduler::RotationTicker;
pub use source::{InMemorySource, JsonFileSource, RecordSource, SourceError};
pub use storefront::Storefront;

/// Prelude module for common imports
pub mod prelude {
    //! Common imports for working with Vitrine Core
    pub use crate::{
        ChangeEvent, ExpandOutcome, InMemorySource, JsonFileSource, RecordSource,
        RotationController, RotationTicker, Storefront, StorefrontConfig, StorefrontError,
    };
    pub use vitrine_catalog::{Catalog, Product, ProductId, RawRecord, StockLevel};
    pub use vitrine_sampler::Sampler;
}

/// Version of this crate
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
