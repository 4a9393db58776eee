//! Random draws from a candidate pool
//!
//! Provides the two draw shapes the rotation controller needs:
//! - a bounded unique subset (full rotation)
//! - a single member outside an exclusion set (slot backfill)

use rand::rngs::StdRng;
use rand::seq::SliceRandom;
use rand::SeedableRng;
use std::collections::HashSet;
use vitrine_catalog::{Product, ProductId};

/// Seedable sampler over product slices
#[derive(Debug)]
pub struct Sampler {
    rng: StdRng,
}

impl Sampler {
    /// Sampler with a fixed seed (reproducible draws)
    #[inline]
    #[must_use]
    pub fn from_seed(seed: u64) -> Self {
        Self {
            rng: StdRng::seed_from_u64(seed),
        }
    }

    /// Sampler seeded from the operating system
    #[inline]
    #[must_use]
    pub fn from_entropy() -> Self {
        Self {
            rng: StdRng::from_os_rng(),
        }
    }

    /// Draw up to `count` products with pairwise-distinct identities.
    ///
    /// The pool is de-duplicated by identity (first occurrence wins), a
    /// copy is Fisher-Yates shuffled, and a prefix of
    /// `min(count, |dedup pool|)` is taken. Never errors: asking for more
    /// than the pool holds returns everything, shuffled.
    #[must_use]
    pub fn pick_unique(&mut self, pool: &[Product], count: usize) -> Vec<Product> {
        let mut seen: HashSet<&ProductId> = HashSet::with_capacity(pool.len());
        let mut copy: Vec<Product> = pool
            .iter()
            .filter(|p| seen.insert(&p.id))
            .cloned()
            .collect();
        copy.shuffle(&mut self.rng);
        copy.truncate(count);
        copy
    }

    /// First pool member, in shuffled order, whose identity is not in
    /// `exclude`. `None` when every candidate is excluded.
    #[must_use]
    pub fn pick_excluding(
        &mut self,
        pool: &[Product],
        exclude: &HashSet<ProductId>,
    ) -> Option<Product> {
        let mut candidates: Vec<&Product> = pool.iter().collect();
        candidates.shuffle(&mut self.rng);
        candidates
            .into_iter()
            .find(|p| !exclude.contains(&p.id))
            .cloned()
    }
}
