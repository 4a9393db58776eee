//! Error types for the catalog

/// Catalog load errors
#[derive(Debug, thiserror::Error)]
pub enum CatalogError {
    /// The data source yielded no usable rows.
    ///
    /// Fatal to initialization: downstream state (candidate pool, featured
    /// set) must never be built from absent or fully-blank data.
    #[error("no usable records in data source")]
    NoUsableRecords,
}
