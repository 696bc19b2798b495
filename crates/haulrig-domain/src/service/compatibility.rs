//! Compatibility evaluation of one cargo item against candidate trailers

use tracing::debug;

use super::axle_distribution::{AxleLoadDistribution, RandomizedShare};
use super::ranking::rank_matches;
use crate::model::{Candidate, LoadSpec, SmartMatch};

/// Regulatory ceiling for deck height plus cargo height (m)
pub const MAX_TRANSPORT_HEIGHT_M: f64 = 4.5;

/// Legal load per axle (t)
pub const MAX_AXLE_LOAD_T: f64 = 11.0;

/// Evaluates candidates against a load using a pluggable axle distribution
#[derive(Debug, Clone, Default)]
pub struct CompatibilityEvaluator<D> {
    distribution: D,
}

impl<D: AxleLoadDistribution> CompatibilityEvaluator<D> {
    pub fn new(distribution: D) -> Self {
        Self { distribution }
    }

    /// Evaluate one candidate. Inputs are never modified; degenerate inputs
    /// (zero weight, zero capacity, no axles) produce defined results.
    pub fn evaluate(&mut self, load: &LoadSpec, candidate: &Candidate) -> SmartMatch {
        let total_axles = candidate.total_axles();
        let deck_height = candidate.deck_height();
        let height_violation = deck_height + load.dims.height > MAX_TRANSPORT_HEIGHT_M;

        let payload_capacity = candidate.payload_capacity();
        let can_carry_weight = payload_capacity > 0.0 && payload_capacity >= load.weight;
        let margin = if can_carry_weight {
            (payload_capacity - load.weight) / payload_capacity
        } else {
            0.0
        };

        let axle_loads = self.distribution.distribute(load, candidate, total_axles);
        let axle_violations: Vec<bool> = axle_loads.iter().map(|l| *l > MAX_AXLE_LOAD_T).collect();

        let length_violation = candidate.total_length() < load.dims.length;
        let width_violation = candidate.width() < load.dims.width;

        let can_carry = can_carry_weight
            && !length_violation
            && !width_violation
            && !axle_violations.iter().any(|v| *v);

        debug!(
            load = %load.id,
            candidate = %candidate.id(),
            can_carry,
            height_violation,
            margin,
            "evaluated candidate"
        );

        SmartMatch {
            candidate: candidate.clone(),
            total_axles,
            axle_loads,
            axle_violations,
            height_violation,
            length_violation,
            width_violation,
            deck_height,
            payload_capacity,
            can_carry_weight,
            can_carry,
            margin,
        }
    }

    /// Evaluate every candidate (in input order) and rank the results
    pub fn find_matches(&mut self, load: &LoadSpec, candidates: &[Candidate]) -> Vec<SmartMatch> {
        let matches = candidates
            .iter()
            .map(|candidate| self.evaluate(load, candidate))
            .collect();
        rank_matches(matches)
    }
}

/// Evaluate one candidate with the default randomized axle distribution
pub fn evaluate(load: &LoadSpec, candidate: &Candidate) -> SmartMatch {
    CompatibilityEvaluator::new(RandomizedShare::default()).evaluate(load, candidate)
}

/// Evaluate and rank candidates with the default randomized axle distribution
pub fn find_matches(load: &LoadSpec, candidates: &[Candidate]) -> Vec<SmartMatch> {
    CompatibilityEvaluator::new(RandomizedShare::default()).find_matches(load, candidates)
}
