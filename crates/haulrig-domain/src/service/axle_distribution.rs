//! Per-axle load estimation strategies
//!
//! The evaluator only needs "one load figure per axle". How those figures are
//! produced sits behind [`AxleLoadDistribution`] so a moment-balance model
//! based on the load CG and axle positions can replace the current estimate
//! without touching the evaluator.

use rand::rngs::ThreadRng;
use rand::Rng;

use crate::model::{Candidate, LoadSpec};

/// Lower bound of the random per-axle factor (inclusive)
pub const MIN_AXLE_FACTOR: f64 = 0.8;
/// Upper bound of the random per-axle factor (exclusive)
pub const MAX_AXLE_FACTOR: f64 = 1.0;
/// Most per-axle figures a strategy produces, whatever the axle count
pub const MAX_AXLE_FIGURES: u32 = 256;

pub trait AxleLoadDistribution {
    /// Estimated load (t) on each of `total_axles` axles, front to back.
    /// At most [`MAX_AXLE_FIGURES`] figures are returned.
    fn distribute(&mut self, load: &LoadSpec, candidate: &Candidate, total_axles: u32) -> Vec<f64>;
}

/// Nominal share of the load weight per axle
pub fn nominal_axle_share(load: &LoadSpec, total_axles: u32) -> f64 {
    if total_axles == 0 {
        0.0
    } else {
        load.weight / total_axles as f64
    }
}

/// Nominal share scaled by an independent random factor in [0.8, 1.0) per axle
#[derive(Debug, Clone)]
pub struct RandomizedShare<R: Rng> {
    rng: R,
}

impl<R: Rng> RandomizedShare<R> {
    pub fn new(rng: R) -> Self {
        Self { rng }
    }
}

impl Default for RandomizedShare<ThreadRng> {
    fn default() -> Self {
        Self::new(rand::thread_rng())
    }
}

impl<R: Rng> AxleLoadDistribution for RandomizedShare<R> {
    fn distribute(&mut self, load: &LoadSpec, _candidate: &Candidate, total_axles: u32) -> Vec<f64> {
        let share = nominal_axle_share(load, total_axles);
        (0..total_axles.min(MAX_AXLE_FIGURES))
            .map(|_| share * self.rng.gen_range(MIN_AXLE_FACTOR..MAX_AXLE_FACTOR))
            .collect()
    }
}

/// Deterministic even split of the load over all axles
#[derive(Debug, Clone, Copy, Default)]
pub struct NominalShare;

impl AxleLoadDistribution for NominalShare {
    fn distribute(&mut self, load: &LoadSpec, _candidate: &Candidate, total_axles: u32) -> Vec<f64> {
        let share = nominal_axle_share(load, total_axles);
        vec![share; total_axles.min(MAX_AXLE_FIGURES) as usize]
    }
}

impl<D: AxleLoadDistribution + ?Sized> AxleLoadDistribution for Box<D> {
    fn distribute(&mut self, load: &LoadSpec, candidate: &Candidate, total_axles: u32) -> Vec<f64> {
        (**self).distribute(load, candidate, total_axles)
    }
}
