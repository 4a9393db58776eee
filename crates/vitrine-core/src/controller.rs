//! Featured rotation controller
//!
//! The state machine governing which items are currently featured, when
//! they change (periodic tick or user-triggered expansion), and how
//! expansion interacts with rotation.
//!
//! Invariants:
//! - featured members are pairwise distinct by identity
//! - every featured member belongs to the candidate pool
//! - `featured` is only read-modified-written inside a single call, so no
//!   observer can see a torn intermediate set
//!
//! Policy: expanded panels persist across ticks. A wholesale replacement
//! may re-feature an already-expanded item; the registry is never
//! reconciled by the tick.

use crate::config::StorefrontConfig;
use crate::error::RotationError;
use crate::events::{ChangeEvent, ChangeNotifier};
use crate::expansion::{AddOutcome, ExpansionRegistry};
use std::collections::HashSet;
use tokio::sync::broadcast;
use vitrine_catalog::{Product, ProductId};
use vitrine_sampler::Sampler;

/// Result of an expansion request
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ExpandOutcome {
    /// A new panel was recorded (and a featured slot backfilled if the
    /// item was featured)
    Expanded,
    /// The identity already had an open panel; the caller should focus it
    /// instead of creating another
    AlreadyExpanded,
}

/// Controller owning the featured set and expansion registry
#[derive(Debug)]
pub struct RotationController {
    /// Configuration
    config: StorefrontConfig,
    /// Candidate pool (owned copy, fixed until catalog reload)
    pool: Vec<Product>,
    /// Currently featured items, ordered
    featured: Vec<Product>,
    /// Open detail panels
    expanded: ExpansionRegistry,
    /// Injected randomness
    sampler: Sampler,
    /// Change fan-out
    notifier: ChangeNotifier,
    /// False after teardown; gates the tick
    tick_armed: bool,
    /// True only while a tick swap is staged
    transitioning: bool,
}

impl RotationController {
    /// Build a controller, draw the initial featured set, and arm the tick.
    ///
    /// # Errors
    /// `RotationError::EmptyPool` when the candidate pool holds nothing.
    pub fn new(
        pool: Vec<Product>,
        mut sampler: Sampler,
        config: StorefrontConfig,
    ) -> Result<Self, RotationError> {
        if pool.is_empty() {
            return Err(RotationError::EmptyPool);
        }
        let featured = sampler.pick_unique(&pool, config.featured_count);
        tracing::info!(
            pool = pool.len(),
            featured = featured.len(),
            "rotation controller armed"
        );
        Ok(Self {
            config,
            pool,
            featured,
            expanded: ExpansionRegistry::new(),
            sampler,
            notifier: ChangeNotifier::default(),
            tick_armed: true,
            transitioning: false,
        })
    }

    /// Replace the entire featured set with a fresh draw.
    ///
    /// The swap is staged: the transitioning mark is set, the set swapped,
    /// and the mark cleared, all within this one call. No-op after
    /// teardown. Expansion state is left untouched.
    pub fn on_tick(&mut self) {
        if !self.tick_armed {
            tracing::debug!("tick after teardown ignored");
            return;
        }
        self.transitioning = true;
        self.featured = self
            .sampler
            .pick_unique(&self.pool, self.config.featured_count);
        self.transitioning = false;
        tracing::debug!(featured = self.featured.len(), "featured set rotated");
        self.notifier.emit(ChangeEvent::FeaturedChanged);
    }

    /// Expand an item into detail view.
    ///
    /// - Already expanded: nothing changes; the caller focuses the
    ///   existing panel.
    /// - Otherwise the panel is recorded, and if the item is currently
    ///   featured its slot is replaced with a uniformly-random pool member
    ///   that is neither featured nor the item itself. With the pool
    ///   exhausted the slot is dropped, then one backfill from the full
    ///   pool tries to restore size K.
    ///
    /// # Errors
    /// `RotationError::UnknownProduct` when the identity is no longer in
    /// the candidate pool (stale reference).
    pub fn expand(&mut self, id: &ProductId) -> Result<ExpandOutcome, RotationError> {
        let item = self
            .pool
            .iter()
            .find(|p| p.id == *id)
            .cloned()
            .ok_or_else(|| RotationError::UnknownProduct(id.clone()))?;

        if self.expanded.add(item.clone()) == AddOutcome::AlreadyPresent {
            tracing::debug!(%id, "expansion already open, focusing existing panel");
            return Ok(ExpandOutcome::AlreadyExpanded);
        }

        if let Some(slot) = self.featured.iter().position(|p| p.id == *id) {
            self.backfill_slot(slot, &item);
            self.notifier.emit(ChangeEvent::FeaturedChanged);
        }

        tracing::debug!(%id, panels = self.expanded.len(), "expansion recorded");
        self.notifier.emit(ChangeEvent::ExpansionChanged);
        Ok(ExpandOutcome::Expanded)
    }

    /// Close a panel. No-op on absent identities.
    pub fn close_panel(&mut self, id: &ProductId) -> bool {
        let removed = self.expanded.remove(id);
        if removed {
            tracing::debug!(%id, "expansion closed");
            self.notifier.emit(ChangeEvent::ExpansionChanged);
        }
        removed
    }

    /// Disarm the tick. Idempotent; a tick arriving after teardown applies
    /// nothing.
    pub fn teardown(&mut self) {
        if !self.tick_armed {
            return;
        }
        self.tick_armed = false;
        self.transitioning = false;
        tracing::info!("rotation controller torn down");
    }

    /// Currently featured items, ordered
    #[inline]
    #[must_use]
    pub fn featured(&self) -> &[Product] {
        &self.featured
    }

    /// Open panels in insertion order
    pub fn expanded_panels(&self) -> impl Iterator<Item = &Product> {
        self.expanded.render_order()
    }

    /// The expansion registry
    #[inline]
    #[must_use]
    pub fn registry(&self) -> &ExpansionRegistry {
        &self.expanded
    }

    /// The candidate pool
    #[inline]
    #[must_use]
    pub fn pool(&self) -> &[Product] {
        &self.pool
    }

    /// True only while a tick swap is staged
    #[inline]
    #[must_use]
    pub fn is_transitioning(&self) -> bool {
        self.transitioning
    }

    /// True until teardown
    #[inline]
    #[must_use]
    pub fn is_armed(&self) -> bool {
        self.tick_armed
    }

    /// Configuration
    #[inline]
    #[must_use]
    pub fn config(&self) -> &StorefrontConfig {
        &self.config
    }

    /// Subscribe to change notifications
    #[must_use]
    pub fn subscribe(&self) -> broadcast::Receiver<ChangeEvent> {
        self.notifier.subscribe()
    }

    /// Replace `slot` with an eligible pool member, or shrink and try one
    /// backfill from the full pool.
    fn backfill_slot(&mut self, slot: usize, item: &Product) {
        let mut exclude: HashSet<ProductId> =
            self.featured.iter().map(|p| p.id.clone()).collect();
        exclude.insert(item.id.clone());

        match self.sampler.pick_excluding(&self.pool, &exclude) {
            Some(replacement) => {
                self.featured[slot] = replacement;
            }
            None => {
                self.featured.remove(slot);
                let mut exclude: HashSet<ProductId> =
                    self.featured.iter().map(|p| p.id.clone()).collect();
                exclude.insert(item.id.clone());
                if let Some(backfill) = self.sampler.pick_excluding(&self.pool, &exclude) {
                    self.featured.push(backfill);
                } else {
                    tracing::debug!("pool exhausted, featured set shrank");
                }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use vitrine_test_utils::{pool_of, product, seeded_sampler};

    fn controller(pool_size: usize, featured_count: usize) -> RotationController {
        let config = StorefrontConfig::new().with_featured_count(featured_count);
        RotationController::new(pool_of(pool_size), seeded_sampler(), config).unwrap()
    }

    fn assert_featured_invariants(ctl: &RotationController) {
        let ids: HashSet<&ProductId> = ctl.featured().iter().map(|p| &p.id).collect();
        assert_eq!(ids.len(), ctl.featured().len(), "duplicate featured identity");
        for p in ctl.featured() {
            assert!(ctl.pool().iter().any(|m| m.id == p.id), "featured outside pool");
        }
    }

    #[test]
    fn initialize_draws_featured_and_arms_tick() {
        let ctl = controller(20, 5);
        assert_eq!(ctl.featured().len(), 5);
        assert!(ctl.is_armed());
        assert!(!ctl.is_transitioning());
        assert_featured_invariants(&ctl);
    }

    #[test]
    fn initialize_rejects_empty_pool() {
        let result = RotationController::new(vec![], seeded_sampler(), StorefrontConfig::new());
        assert!(matches!(result, Err(RotationError::EmptyPool)));
    }

    #[test]
    fn small_pool_caps_featured_size() {
        let ctl = controller(3, 5);
        assert_eq!(ctl.featured().len(), 3);
        assert_featured_invariants(&ctl);
    }

    #[test]
    fn tick_replaces_wholesale_from_pool() {
        let mut ctl = controller(20, 5);
        let mut rx = ctl.subscribe();
        ctl.on_tick();
        assert_eq!(ctl.featured().len(), 5);
        assert!(!ctl.is_transitioning());
        assert_featured_invariants(&ctl);
        assert_eq!(rx.try_recv().unwrap(), ChangeEvent::FeaturedChanged);
    }

    #[test]
    fn tick_leaves_expansions_alone() {
        let mut ctl = controller(20, 5);
        let expanded_id = ctl.featured()[0].id.clone();
        ctl.expand(&expanded_id).unwrap();
        ctl.on_tick();
        ctl.on_tick();
        assert_eq!(ctl.registry().len(), 1);
        assert!(ctl.registry().contains(&expanded_id));
    }

    #[test]
    fn expand_twice_yields_one_panel() {
        let mut ctl = controller(20, 5);
        let id = ctl.featured()[0].id.clone();
        assert_eq!(ctl.expand(&id).unwrap(), ExpandOutcome::Expanded);
        assert_eq!(ctl.expand(&id).unwrap(), ExpandOutcome::AlreadyExpanded);
        assert_eq!(ctl.registry().len(), 1);
    }

    #[test]
    fn expand_backfills_the_vacated_slot() {
        let mut ctl = controller(20, 5);
        let id = ctl.featured()[2].id.clone();
        ctl.expand(&id).unwrap();
        assert_eq!(ctl.featured().len(), 5);
        assert!(!ctl.featured().iter().any(|p| p.id == id));
        assert_featured_invariants(&ctl);
    }

    #[test]
    fn expand_with_exhausted_pool_shrinks_featured() {
        // Pool of exactly two, both featured: expanding one leaves only
        // the other, with no eligible backfill.
        let mut ctl = controller(2, 2);
        let expanded = ctl.featured()[1].id.clone();
        let kept = ctl.featured()[0].id.clone();
        ctl.expand(&expanded).unwrap();
        assert_eq!(ctl.featured().len(), 1);
        assert_eq!(ctl.featured()[0].id, kept);
    }

    #[test]
    fn expand_stale_reference_is_recoverable() {
        let mut ctl = controller(5, 2);
        let ghost = product("ghost", 1.0);
        let err = ctl.expand(&ghost.id).unwrap_err();
        assert!(matches!(err, RotationError::UnknownProduct(_)));
        assert!(ctl.registry().is_empty());
        assert_eq!(ctl.featured().len(), 2);
    }

    #[test]
    fn expand_non_featured_pool_member_keeps_featured() {
        let mut ctl = controller(20, 3);
        let featured_ids: HashSet<ProductId> =
            ctl.featured().iter().map(|p| p.id.clone()).collect();
        let outside = ctl
            .pool()
            .iter()
            .find(|p| !featured_ids.contains(&p.id))
            .unwrap()
            .id
            .clone();
        let before = ctl.featured().to_vec();
        ctl.expand(&outside).unwrap();
        assert_eq!(ctl.featured(), before.as_slice());
        assert!(ctl.registry().contains(&outside));
    }

    #[test]
    fn expand_emits_both_events_when_featured_changes() {
        let mut ctl = controller(20, 5);
        let mut rx = ctl.subscribe();
        let id = ctl.featured()[0].id.clone();
        ctl.expand(&id).unwrap();
        assert_eq!(rx.try_recv().unwrap(), ChangeEvent::FeaturedChanged);
        assert_eq!(rx.try_recv().unwrap(), ChangeEvent::ExpansionChanged);
    }

    #[test]
    fn close_panel_noop_on_absent_identity() {
        let mut ctl = controller(20, 5);
        let id = ctl.featured()[0].id.clone();
        ctl.expand(&id).unwrap();
        assert!(ctl.close_panel(&id));
        assert!(!ctl.close_panel(&id));
        assert!(ctl.registry().is_empty());
    }

    #[test]
    fn teardown_is_idempotent_and_stops_ticks() {
        let mut ctl = controller(20, 5);
        ctl.teardown();
        ctl.teardown();
        assert!(!ctl.is_armed());

        let before = ctl.featured().to_vec();
        let mut rx = ctl.subscribe();
        ctl.on_tick();
        assert_eq!(ctl.featured(), before.as_slice());
        assert!(rx.try_recv().is_err());
    }

    #[test]
    fn repeated_expansions_never_starve_featured() {
        // With a comfortably large pool, expanding a featured item K times
        // in a row must keep the region at size K every time.
        let mut ctl = controller(30, 5);
        let mut created = 0;
        for _ in 0..5 {
            let id = ctl.featured()[0].id.clone();
            if ctl.expand(&id).unwrap() == ExpandOutcome::Expanded {
                created += 1;
            }
            assert_eq!(ctl.featured().len(), 5);
            assert_featured_invariants(&ctl);
        }
        assert_eq!(ctl.registry().len(), created);
        assert!(created >= 1);
    }
}
