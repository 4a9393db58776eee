//! Error types for Vitrine Core
//!
//! Rotation errors are recoverable conditions the collaborator surfaces in
//! place ("nothing to expand"); storefront errors wrap the fatal
//! initialization failures.

use crate::source::SourceError;
use vitrine_catalog::{CatalogError, ProductId};

/// Rotation controller errors
#[derive(Debug, thiserror::Error)]
pub enum RotationError {
    /// The candidate pool was empty at construction
    #[error("candidate pool is empty")]
    EmptyPool,

    /// Expansion was requested for an identity no longer in the pool.
    ///
    /// A stale reference is a no-op failure, not fatal.
    #[error("nothing to expand: {0} is not in the candidate pool")]
    UnknownProduct(ProductId),
}

/// Storefront initialization and lifecycle errors
#[derive(Debug, thiserror::Error)]
pub enum StorefrontError {
    /// The external loader failed; the core never initializes from
    /// partial or absent data
    #[error("data source load failed: {0}")]
    LoadFailed(#[from] SourceError),

    /// The catalog could not be built
    #[error("catalog error: {0}")]
    Catalog(#[from] CatalogError),

    /// The rotation controller could not be built
    #[error("rotation error: {0}")]
    Rotation(#[from] RotationError),
}
