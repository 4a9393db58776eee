//! Testing utilities for the Vitrine workspace
//!
//! Shared fixtures: raw records, products, pools, and a seeded sampler so
//! randomized behavior stays reproducible across the test suites.

use vitrine_catalog::{Product, ProductId, RawRecord, StockLevel};
use vitrine_sampler::Sampler;

/// Fixed seed used across the workspace tests.
pub const TEST_SEED: u64 = 42;

/// Sampler with the workspace test seed
#[must_use]
pub fn seeded_sampler() -> Sampler {
    Sampler::from_seed(TEST_SEED)
}

/// Raw record with a title and free-form price text
#[must_use]
pub fn raw_record(title: &str, price: &str) -> RawRecord {
    RawRecord::new().with("title", title).with("price", price)
}

/// Raw record with title, description, price, and stock text
#[must_use]
pub fn raw_record_full(title: &str, body: &str, price: &str, stock: &str) -> RawRecord {
    RawRecord::new()
        .with("title", title)
        .with("body", body)
        .with("price", price)
        .with("stock_amount", stock)
}

/// Product with identity `p<tag>` and the given price
#[must_use]
pub fn product(tag: &str, price: f64) -> Product {
    Product {
        id: ProductId::new(format!("p{tag}")),
        title: format!("Product {tag}"),
        description: format!("Description for {tag}"),
        price,
        stock: StockLevel::Available(1),
    }
}

/// Pool of `n` products with distinct identities `p0..p(n-1)`
#[must_use]
pub fn pool_of(n: usize) -> Vec<Product> {
    (0..n).map(|i| product(&i.to_string(), i as f64)).collect()
}
