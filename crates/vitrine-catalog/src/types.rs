//! Core types for the catalog
//!
//! Defines the fundamental types for the storefront data model:
//! - Raw input records and their recognized field aliases
//! - Stable product identity
//! - Stock levels that keep "no data" distinct from zero
//! - The immutable, normalized product record

use crate::normalize::{normalize_price, normalize_stock};
use serde::{Deserialize, Serialize};
use sha2::{Digest, Sha256};
use std::collections::BTreeMap;

/// Field aliases for the product title.
pub const TITLE_FIELDS: &[&str] = &["title"];

/// Field aliases for the product description.
pub const DESCRIPTION_FIELDS: &[&str] = &["description", "body"];

/// Field aliases for the free-form price text.
pub const PRICE_FIELDS: &[&str] = &["price", "start_price"];

/// Field aliases for the free-form stock text.
pub const STOCK_FIELDS: &[&str] = &["stock", "stock_amount"];

/// Field aliases for an explicit identifier.
pub const IDENTIFIER_FIELDS: &[&str] = &["identifier", "id", "listing_id"];

/// One raw row from the external loader: field name to text.
///
/// Keys are kept sorted so the structural-hash identity fallback is
/// independent of insertion order.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct RawRecord {
    #[serde(flatten)]
    fields: BTreeMap<String, String>,
}

impl RawRecord {
    /// Create an empty record
    #[inline]
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Set a field, builder-style
    #[must_use]
    pub fn with(mut self, key: impl Into<String>, value: impl Into<String>) -> Self {
        self.fields.insert(key.into(), value.into());
        self
    }

    /// Set a field in place
    pub fn set(&mut self, key: impl Into<String>, value: impl Into<String>) {
        self.fields.insert(key.into(), value.into());
    }

    /// Get a raw field value
    #[must_use]
    pub fn get(&self, key: &str) -> Option<&str> {
        self.fields.get(key).map(String::as_str)
    }

    /// First non-blank value among the given field aliases
    #[must_use]
    pub fn field(&self, aliases: &[&str]) -> Option<&str> {
        aliases
            .iter()
            .filter_map(|key| self.get(key))
            .find(|value| !value.trim().is_empty())
    }

    /// True when title, description, price, and stock are all absent or
    /// blank (trailing blank lines from the loader look like this).
    #[must_use]
    pub fn is_blank(&self) -> bool {
        self.field(TITLE_FIELDS).is_none()
            && self.field(DESCRIPTION_FIELDS).is_none()
            && self.field(PRICE_FIELDS).is_none()
            && self.field(STOCK_FIELDS).is_none()
    }

    /// SHA-256 over the record's fields in sorted key order, hex-encoded.
    ///
    /// Last-resort identity: the same record always hashes the same way.
    #[must_use]
    pub fn structural_hash(&self) -> String {
        let mut hasher = Sha256::new();
        for (key, value) in &self.fields {
            hasher.update(key.as_bytes());
            hasher.update(b"=");
            hasher.update(value.as_bytes());
            hasher.update(b"\n");
        }
        hex::encode(hasher.finalize())
    }
}

/// Stable product identity.
///
/// Both the rotation controller and the expansion registry deduplicate by
/// this key, so it must be stable across re-renders of the same record and
/// distinct for distinct title+price pairs.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct ProductId(String);

impl ProductId {
    /// Wrap an identity string
    #[inline]
    #[must_use]
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }

    /// The identity as a string slice
    #[inline]
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl std::fmt::Display for ProductId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Stock on hand for a product.
///
/// `Unavailable` means the source text was absent or unparseable. It is
/// never folded into zero: aggregate totals skip it and displays show the
/// "N/A" sentinel instead of a count.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum StockLevel {
    /// A parsed, non-negative unit count
    Available(u32),
    /// No usable stock data
    Unavailable,
}

impl StockLevel {
    /// Unit count, if any
    #[inline]
    #[must_use]
    pub fn units(&self) -> Option<u32> {
        match self {
            StockLevel::Available(n) => Some(*n),
            StockLevel::Unavailable => None,
        }
    }
}

impl std::fmt::Display for StockLevel {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            StockLevel::Available(n) => write!(f, "{n}"),
            StockLevel::Unavailable => write!(f, "N/A"),
        }
    }
}

/// One normalized catalog entry.
///
/// Created once at load time and immutable thereafter; price and stock are
/// normalized here, not re-parsed per render.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Product {
    /// Stable identity
    pub id: ProductId,
    /// Title, defaulted when the source omits it
    pub title: String,
    /// Description, empty when the source omits it
    pub description: String,
    /// Normalized non-negative price (0 on parse failure)
    pub price: f64,
    /// Normalized stock level
    pub stock: StockLevel,
}

/// Title used when the source record has none.
pub const UNTITLED: &str = "Untitled";

impl Product {
    /// Build a product from a raw record.
    ///
    /// Returns `None` for blank rows (every recognized field absent).
    ///
    /// Identity derivation order:
    /// 1. explicit identifier field, if present
    /// 2. composite of title and normalized price, if either field exists
    /// 3. structural hash of the full record
    #[must_use]
    pub fn from_record(record: &RawRecord) -> Option<Self> {
        if record.is_blank() {
            return None;
        }

        let title_field = record.field(TITLE_FIELDS);
        let price_field = record.field(PRICE_FIELDS);

        let title = title_field.unwrap_or(UNTITLED).trim().to_string();
        let description = record
            .field(DESCRIPTION_FIELDS)
            .unwrap_or_default()
            .trim()
            .to_string();
        let price = price_field.map(normalize_price).unwrap_or(0.0);
        let stock = record
            .field(STOCK_FIELDS)
            .map(normalize_stock)
            .unwrap_or(StockLevel::Unavailable);

        let id = match record.field(IDENTIFIER_FIELDS) {
            Some(explicit) => ProductId::new(explicit.trim()),
            None if title_field.is_some() || price_field.is_some() => {
                ProductId::new(format!("{title}||{price:.2}"))
            }
            None => ProductId::new(record.structural_hash()),
        };

        Some(Self {
            id,
            title,
            description,
            price,
            stock,
        })
    }

    /// Price formatted for display, e.g. `$12.50`
    #[must_use]
    pub fn display_price(&self) -> String {
        format!("${:.2}", self.price)
    }

    /// Description truncated to `limit` characters, with an ellipsis when
    /// anything was cut. Counts characters, not bytes.
    #[must_use]
    pub fn truncated_description(&self, limit: usize) -> String {
        let mut chars = self.description.chars();
        let head: String = chars.by_ref().take(limit).collect();
        if chars.next().is_some() {
            format!("{head}…")
        } else {
            head
        }
    }
}
