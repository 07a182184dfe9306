//! Box-constrained search space for swarm optimization.
//!
//! Each dimension carries an independent `[lower, upper]` interval. The
//! optimizer samples initial positions inside the box and clamps every
//! position update back into it. What a dimension *means* (a learning rate,
//! a neuron count) is entirely the caller's business.

use rand::prelude::*;
use serde::{Deserialize, Serialize};

use crate::error::{EnjambreError, Result};

/// Per-dimension box constraints for continuous optimization.
///
/// # Example
///
/// ```
/// use enjambre::search_space::SearchSpace;
///
/// // Learning rate in [1e-4, 0.1], neuron count in [5, 100].
/// let space = SearchSpace::with_bounds(vec![1e-4, 5.0], vec![0.1, 100.0]);
/// assert_eq!(space.dimension(), 2);
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SearchSpace {
    lower: Vec<f64>,
    upper: Vec<f64>,
}

impl SearchSpace {
    /// Create a space with the same bounds in every dimension.
    #[must_use]
    pub fn continuous(dim: usize, lower: f64, upper: f64) -> Self {
        Self {
            lower: vec![lower; dim],
            upper: vec![upper; dim],
        }
    }

    /// Create a space with per-dimension bounds.
    ///
    /// Bounds are validated when an optimization run starts, not here.
    #[must_use]
    pub fn with_bounds(lower: Vec<f64>, upper: Vec<f64>) -> Self {
        Self { lower, upper }
    }

    /// Number of dimensions.
    #[must_use]
    pub fn dimension(&self) -> usize {
        self.lower.len()
    }

    /// Lower bounds, one per dimension.
    #[must_use]
    pub fn lower(&self) -> &[f64] {
        &self.lower
    }

    /// Upper bounds, one per dimension.
    #[must_use]
    pub fn upper(&self) -> &[f64] {
        &self.upper
    }

    /// Check the box constraints are usable: non-empty, equal-length bound
    /// arrays, finite values, and `lower[d] <= upper[d]` everywhere.
    pub fn validate(&self) -> Result<()> {
        if self.lower.is_empty() {
            return Err(EnjambreError::empty_input("search space bounds"));
        }
        if self.lower.len() != self.upper.len() {
            return Err(EnjambreError::dimension_mismatch(
                "lower",
                self.lower.len(),
                self.upper.len(),
            ));
        }
        for (d, (&lo, &hi)) in self.lower.iter().zip(self.upper.iter()).enumerate() {
            if !lo.is_finite() || !hi.is_finite() {
                return Err(EnjambreError::invalid_hyperparameter(
                    "bounds",
                    format!("[{lo}, {hi}] at dimension {d}"),
                    "finite values",
                ));
            }
            if lo > hi {
                return Err(EnjambreError::invalid_hyperparameter(
                    "bounds",
                    format!("[{lo}, {hi}] at dimension {d}"),
                    "lower <= upper",
                ));
            }
        }
        Ok(())
    }

    /// Sample a uniform point inside the box.
    #[must_use]
    pub fn sample_uniform(&self, rng: &mut impl Rng) -> Vec<f64> {
        self.lower
            .iter()
            .zip(self.upper.iter())
            .map(|(&lo, &hi)| rng.random_range(lo..=hi))
            .collect()
    }

    /// Clamp a point into the box, in place. Out-of-range components are
    /// saturated at the violated bound; in-range components are untouched.
    pub fn clip(&self, x: &mut [f64]) {
        for (xi, (&lo, &hi)) in x.iter_mut().zip(self.lower.iter().zip(self.upper.iter())) {
            *xi = xi.clamp(lo, hi);
        }
    }

    /// True if every component of `x` lies within its bounds.
    #[must_use]
    pub fn contains(&self, x: &[f64]) -> bool {
        x.len() == self.dimension()
            && x.iter()
                .zip(self.lower.iter().zip(self.upper.iter()))
                .all(|(xi, (&lo, &hi))| (lo..=hi).contains(xi))
    }
}
