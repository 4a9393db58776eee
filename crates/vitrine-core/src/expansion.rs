//! Expansion panel registry
//!
//! Tracks which items the user has expanded into detail view, keyed by
//! stable identity. Insertion order is preserved so panels render in a
//! stable, non-flickering order.

use indexmap::IndexMap;
use vitrine_catalog::{Product, ProductId};

/// Result of an add: tells the caller whether to create a panel or focus
/// the one that already exists.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AddOutcome {
    /// A new entry was recorded
    Created,
    /// The identity was already registered; nothing changed
    AlreadyPresent,
}

/// Insertion-ordered registry of expanded items, unique by identity
#[derive(Debug, Default)]
pub struct ExpansionRegistry {
    entries: IndexMap<ProductId, Product>,
}

impl ExpansionRegistry {
    /// Create an empty registry
    #[inline]
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Record an expansion. Idempotent by identity.
    pub fn add(&mut self, product: Product) -> AddOutcome {
        if self.entries.contains_key(&product.id) {
            return AddOutcome::AlreadyPresent;
        }
        self.entries.insert(product.id.clone(), product);
        AddOutcome::Created
    }

    /// Remove one entry if present. Returns whether anything was removed;
    /// removing an absent identity is a no-op, never an error.
    pub fn remove(&mut self, id: &ProductId) -> bool {
        // shift_remove keeps the remaining insertion order intact
        self.entries.shift_remove(id).is_some()
    }

    /// True when the identity has an open panel
    #[inline]
    #[must_use]
    pub fn contains(&self, id: &ProductId) -> bool {
        self.entries.contains_key(id)
    }

    /// Entries in insertion order, for stable display
    pub fn render_order(&self) -> impl Iterator<Item = &Product> {
        self.entries.values()
    }

    /// Number of open panels
    #[inline]
    #[must_use]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// True when no panels are open
    #[inline]
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Drop every entry (full reset on catalog reload/teardown)
    pub fn clear(&mut self) {
        self.entries.clear();
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use vitrine_catalog::StockLevel;

    fn product(name: &str) -> Product {
        Product {
            id: ProductId::new(name),
            title: name.to_string(),
            description: String::new(),
            price: 1.0,
            stock: StockLevel::Unavailable,
        }
    }

    #[test]
    fn add_is_idempotent_by_identity() {
        let mut registry = ExpansionRegistry::new();
        assert_eq!(registry.add(product("a")), AddOutcome::Created);
        assert_eq!(registry.add(product("a")), AddOutcome::AlreadyPresent);
        assert_eq!(registry.len(), 1);
    }

    #[test]
    fn render_order_is_insertion_order() {
        let mut registry = ExpansionRegistry::new();
        registry.add(product("b"));
        registry.add(product("a"));
        registry.add(product("c"));
        let order: Vec<&str> = registry.render_order().map(|p| p.title.as_str()).collect();
        assert_eq!(order, vec!["b", "a", "c"]);
    }

    #[test]
    fn remove_absent_is_a_noop() {
        let mut registry = ExpansionRegistry::new();
        registry.add(product("a"));
        assert!(!registry.remove(&ProductId::new("missing")));
        assert!(registry.remove(&ProductId::new("a")));
        assert!(!registry.remove(&ProductId::new("a")));
        assert!(registry.is_empty());
    }

    #[test]
    fn remove_keeps_remaining_order() {
        let mut registry = ExpansionRegistry::new();
        registry.add(product("a"));
        registry.add(product("b"));
        registry.add(product("c"));
        registry.remove(&ProductId::new("b"));
        let order: Vec<&str> = registry.render_order().map(|p| p.title.as_str()).collect();
        assert_eq!(order, vec!["a", "c"]);
    }

    #[test]
    fn clear_resets_everything() {
        let mut registry = ExpansionRegistry::new();
        registry.add(product("a"));
        registry.clear();
        assert!(registry.is_empty());
        assert!(!registry.contains(&ProductId::new("a")));
    }
}
