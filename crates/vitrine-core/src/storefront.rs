//! Storefront facade
//!
//! The injected entry point the rendering collaborator talks to:
//! - Opens the catalog from the external record source (once)
//! - Derives the price-ranked candidate pool
//! - Owns the rotation controller and its ticker
//!
//! All featured/expansion state lives behind one lock, so every transition
//! the collaborator triggers is a single critical section.

use crate::config::StorefrontConfig;
use crate::controller::{ExpandOutcome, RotationController};
use crate::error::{RotationError, StorefrontError};
use crate::events::ChangeEvent;
use crate::scheduler::RotationTicker;
use crate::source::RecordSource;
use std::sync::Arc;
use tokio::sync::{broadcast, Mutex};
use vitrine_catalog::{Catalog, Product, ProductId};
use vitrine_sampler::Sampler;

/// The storefront core
#[derive(Debug)]
pub struct Storefront {
    /// Configuration
    config: StorefrontConfig,
    /// Normalized catalog, immutable after open
    catalog: Catalog,
    /// Rotation/expansion state machine
    controller: Arc<Mutex<RotationController>>,
    /// Periodic tick, when armed via `start_rotation`
    ticker: Option<RotationTicker>,
}

impl Storefront {
    /// Fetch the catalog once and build the core.
    ///
    /// # Workflow
    /// 1. Fetch raw records from the external loader
    /// 2. Normalize into the catalog (fatal when nothing usable loads)
    /// 3. Derive the price-ranked candidate pool
    /// 4. Draw the initial featured set
    ///
    /// # Errors
    /// Any load, catalog, or rotation failure aborts initialization; the
    /// caller surfaces a load-error state instead of rendering an empty
    /// storefront.
    pub async fn open(
        source: &dyn RecordSource,
        config: StorefrontConfig,
        sampler: Sampler,
    ) -> Result<Self, StorefrontError> {
        let records = source.fetch().await?;
        tracing::info!(records = records.len(), "record source fetched");

        let catalog = Catalog::load(records)?;
        let pool = catalog.price_ranked(config.candidate_pool_size);
        let controller = RotationController::new(pool, sampler, config.clone())?;

        Ok(Self {
            config,
            catalog,
            controller: Arc::new(Mutex::new(controller)),
            ticker: None,
        })
    }

    /// Arm the periodic tick. No-op when already rotating.
    pub fn start_rotation(&mut self) {
        if self.ticker.as_ref().is_some_and(RotationTicker::is_active) {
            return;
        }
        self.ticker = Some(RotationTicker::spawn(
            self.controller.clone(),
            self.config.rotation_interval(),
        ));
    }

    /// Drive one tick synchronously (tests and manual refresh)
    pub async fn tick_now(&self) {
        self.controller.lock().await.on_tick();
    }

    /// The current featured set, ordered
    pub async fn featured(&self) -> Vec<Product> {
        self.controller.lock().await.featured().to_vec()
    }

    /// Open detail panels in insertion order
    pub async fn expanded(&self) -> Vec<Product> {
        self.controller
            .lock()
            .await
            .expanded_panels()
            .cloned()
            .collect()
    }

    /// Expand an item into detail view
    ///
    /// # Errors
    /// `RotationError::UnknownProduct` for stale references; recoverable.
    pub async fn expand(&self, id: &ProductId) -> Result<ExpandOutcome, RotationError> {
        self.controller.lock().await.expand(id)
    }

    /// Close a detail panel; no-op on absent identities
    pub async fn close_panel(&self, id: &ProductId) -> bool {
        self.controller.lock().await.close_panel(id)
    }

    /// Filtered product view for a free-text query (empty query returns
    /// the full catalog)
    #[must_use]
    pub fn search(&self, query: &str) -> Vec<Product> {
        self.catalog.filter(query)
    }

    /// Subscribe to change notifications
    pub async fn subscribe(&self) -> broadcast::Receiver<ChangeEvent> {
        self.controller.lock().await.subscribe()
    }

    /// Stop the ticker and disarm the controller. Idempotent; nothing
    /// mutates featured state after this returns.
    pub async fn shutdown(&mut self) {
        if let Some(mut ticker) = self.ticker.take() {
            ticker.shutdown();
        }
        self.controller.lock().await.teardown();
    }

    /// The loaded catalog
    #[inline]
    #[must_use]
    pub fn catalog(&self) -> &Catalog {
        &self.catalog
    }

    /// Configuration
    #[inline]
    #[must_use]
    pub fn config(&self) -> &StorefrontConfig {
        &self.config
    }

    /// Shared handle to the controller, for collaborators that hold state
    /// across turns
    #[inline]
    #[must_use]
    pub fn controller(&self) -> Arc<Mutex<RotationController>> {
        self.controller.clone()
    }
}
