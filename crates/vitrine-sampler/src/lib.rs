//! Vitrine Sampler - seedable random sampling over product pools
//!
//! Deterministic interface, randomized behavior: every sampler owns an
//! injected, seedable RNG so callers (and tests) control reproducibility.
//! The shuffle is `rand`'s Fisher-Yates; comparator-based "random sorts"
//! are not uniform and are deliberately not used here.

#![warn(unreachable_pub)]

pub mod sampler;

pub use sampler::Sampler;

/// Version of this crate
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
