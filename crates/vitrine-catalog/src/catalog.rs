//! The catalog store
//!
//! Holds the normalized products loaded once from the external data source
//! and serves derived views. The store itself never mutates after load;
//! every view returns fresh vectors.

use crate::error::CatalogError;
use crate::types::{Product, RawRecord};
use std::cmp::Ordering;

/// Normalized product store
#[derive(Debug, Clone)]
pub struct Catalog {
    products: Vec<Product>,
}

impl Catalog {
    /// Load a catalog from raw records.
    ///
    /// Blank rows (every recognized field absent) are dropped; the rest are
    /// normalized once. Input order is preserved and later used as the
    /// deterministic tie-break for price ranking.
    ///
    /// # Errors
    /// `CatalogError::NoUsableRecords` when nothing usable remains. The
    /// caller must surface a load-error state rather than rendering an
    /// empty-but-successful catalog.
    pub fn load(records: Vec<RawRecord>) -> Result<Self, CatalogError> {
        let products: Vec<Product> = records.iter().filter_map(Product::from_record).collect();
        if products.is_empty() {
            return Err(CatalogError::NoUsableRecords);
        }
        tracing::info!(
            total = records.len(),
            usable = products.len(),
            "catalog loaded"
        );
        Ok(Self { products })
    }

    /// All products in load order
    #[inline]
    #[must_use]
    pub fn products(&self) -> &[Product] {
        &self.products
    }

    /// Number of products
    #[inline]
    #[must_use]
    pub fn len(&self) -> usize {
        self.products.len()
    }

    /// True when the catalog holds no products
    #[inline]
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.products.is_empty()
    }

    /// The top `limit` products by descending price.
    ///
    /// Stable sort: equal prices keep their original catalog order.
    #[must_use]
    pub fn price_ranked(&self, limit: usize) -> Vec<Product> {
        let mut ranked = self.products.clone();
        ranked.sort_by(|a, b| b.price.partial_cmp(&a.price).unwrap_or(Ordering::Equal));
        ranked.truncate(limit);
        ranked
    }

    /// Case-insensitive substring filter over title OR description.
    ///
    /// An empty or whitespace-only query returns the full catalog. The
    /// underlying store is never mutated, so filtering twice with the same
    /// query is a no-op on the second pass.
    #[must_use]
    pub fn filter(&self, query: &str) -> Vec<Product> {
        let needle = query.trim().to_lowercase();
        if needle.is_empty() {
            return self.products.clone();
        }
        self.products
            .iter()
            .filter(|p| {
                p.title.to_lowercase().contains(&needle)
                    || p.description.to_lowercase().contains(&needle)
            })
            .cloned()
            .collect()
    }

    /// Total units in stock across the catalog.
    ///
    /// Unavailable entries are skipped, not counted as zero.
    #[must_use]
    pub fn total_stock(&self) -> u64 {
        self.products
            .iter()
            .filter_map(|p| p.stock.units())
            .map(u64::from)
            .sum()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::{ProductId, StockLevel};
    use pretty_assertions::assert_eq;

    fn record(title: &str, price: &str) -> RawRecord {
        RawRecord::new().with("title", title).with("price", price)
    }

    fn titles(products: &[Product]) -> Vec<&str> {
        products.iter().map(|p| p.title.as_str()).collect()
    }

    #[test]
    fn load_drops_blank_rows() {
        let catalog = Catalog::load(vec![
            record("A", "$10.00"),
            RawRecord::new().with("title", "").with("price", "  "),
            record("B", "$20"),
        ])
        .unwrap();
        assert_eq!(catalog.len(), 2);
    }

    #[test]
    fn load_fails_on_empty_source() {
        assert!(matches!(
            Catalog::load(vec![]),
            Err(CatalogError::NoUsableRecords)
        ));
        assert!(matches!(
            Catalog::load(vec![RawRecord::new()]),
            Err(CatalogError::NoUsableRecords)
        ));
    }

    #[test]
    fn price_ranked_descends_and_truncates() {
        // pool of 2 from {A: $10, B: $20, C: unpriced} is [B, A]
        let catalog = Catalog::load(vec![
            record("A", "$10.00"),
            record("B", "$20"),
            record("C", ""),
        ])
        .unwrap();
        let pool = catalog.price_ranked(2);
        assert_eq!(titles(&pool), vec!["B", "A"]);
    }

    #[test]
    fn price_ranked_ties_keep_catalog_order() {
        let catalog = Catalog::load(vec![
            record("first", "$5"),
            record("second", "$5"),
            record("third", "$5"),
        ])
        .unwrap();
        let ranked = catalog.price_ranked(3);
        assert_eq!(titles(&ranked), vec!["first", "second", "third"]);
    }

    #[test]
    fn filter_matches_title_or_description_case_insensitive() {
        let catalog = Catalog::load(vec![
            record("Walnut Desk", "$90").with("body", "solid wood"),
            record("Lamp", "$20").with("body", "Brushed WALNUT base"),
            record("Chair", "$30"),
        ])
        .unwrap();
        let hits = catalog.filter("walnut");
        assert_eq!(titles(&hits), vec!["Walnut Desk", "Lamp"]);
    }

    #[test]
    fn filter_empty_query_returns_everything() {
        let catalog = Catalog::load(vec![record("A", "$1"), record("B", "$2")]).unwrap();
        assert_eq!(catalog.filter("").len(), 2);
        assert_eq!(catalog.filter("   ").len(), 2);
    }

    #[test]
    fn filter_is_idempotent() {
        let catalog = Catalog::load(vec![
            record("Walnut Desk", "$90"),
            record("Lamp", "$20"),
        ])
        .unwrap();
        let once = catalog.filter("desk");
        let refiltered = Catalog {
            products: once.clone(),
        };
        assert_eq!(refiltered.filter("desk"), once);
    }

    #[test]
    fn filter_no_results_is_empty_not_error() {
        let catalog = Catalog::load(vec![record("A", "$1")]).unwrap();
        assert!(catalog.filter("zebra").is_empty());
    }

    #[test]
    fn total_stock_skips_unavailable() {
        let catalog = Catalog::load(vec![
            record("A", "$1").with("stock", "3"),
            record("B", "$2").with("stock", "n/a"),
            record("C", "$3").with("stock", "0"),
        ])
        .unwrap();
        assert_eq!(catalog.total_stock(), 3);
        assert_eq!(catalog.products()[1].stock, StockLevel::Unavailable);
        assert_eq!(catalog.products()[2].stock, StockLevel::Available(0));
    }

    #[test]
    fn products_have_stable_ids() {
        let catalog = Catalog::load(vec![record("A", "$10.00")]).unwrap();
        assert_eq!(catalog.products()[0].id, ProductId::new("A||10.00"));
    }
}
