//! Optimizer trait and result types.

use serde::{Deserialize, Serialize};

use crate::budget::Budget;
use crate::error::Result;
use crate::search_space::SearchSpace;

/// Why an optimization run stopped.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum TerminationReason {
    /// Best fitness dropped below the configured precision target.
    Converged,
    /// Best fitness stopped improving within the configured patience.
    Stalled,
    /// The generation or evaluation budget was spent.
    Exhausted,
    /// A callback requested the run to stop.
    Stopped,
}

/// Outcome of an optimization run.
///
/// `solution` and `objective_value` are the best point seen across the whole
/// run, not the last generation's.
#[derive(Debug, Clone)]
pub struct OptimizationResult<S> {
    /// Best solution found.
    pub solution: S,
    /// Objective value at the best solution (lower is better).
    pub objective_value: f64,
    /// Fitness evaluations consumed, including swarm initialization.
    pub evaluations: usize,
    /// Generations run (initialization is not a generation).
    pub iterations: usize,
    /// Best fitness after initialization and after each generation.
    pub history: Vec<f64>,
    /// Why the run stopped.
    pub termination: TerminationReason,
}

impl<S> OptimizationResult<S> {
    /// Bundle up a finished run.
    #[must_use]
    pub fn new(
        solution: S,
        objective_value: f64,
        evaluations: usize,
        iterations: usize,
        history: Vec<f64>,
        termination: TerminationReason,
    ) -> Self {
        Self {
            solution,
            objective_value,
            evaluations,
            iterations,
            history,
            termination,
        }
    }
}

/// Population-based black-box minimizer over a box-constrained space.
///
/// The objective is opaque to the optimizer: a function from a position to a
/// scalar fitness, lower is better. Implementations own their population
/// state between calls; `optimize` resets it, runs to termination, and
/// returns the best record.
pub trait Metaheuristic {
    /// Solution representation.
    type Solution;

    /// Minimize `objective` over `space` within `budget`.
    ///
    /// # Errors
    ///
    /// Returns a configuration error before any fitness evaluation if the
    /// optimizer settings or the search space are invalid.
    fn optimize<F>(
        &mut self,
        objective: &F,
        space: &SearchSpace,
        budget: Budget,
    ) -> Result<OptimizationResult<Self::Solution>>
    where
        F: Fn(&[f64]) -> f64;

    /// Best solution of the most recent run, if any.
    fn best(&self) -> Option<&Self::Solution>;

    /// Best-fitness trace of the most recent run.
    fn history(&self) -> &[f64];

    /// Discard all run state.
    fn reset(&mut self);
}
