//! Randomized load search.
//!
//! - [`search_load`] — Keeps the cheapest of several random load samples
//! - [`PackageSampler`] — Seam for the random source
//! - [`RandomSampler`] — Uniform sampling from any `rand` generator

mod sampler;
mod seeds;

pub use sampler::{PackageSampler, RandomSampler};
pub use seeds::search_load;
