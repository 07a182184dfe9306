//! Enjambre: particle swarm optimization for expensive black-box objectives.
//!
//! Enjambre minimizes a scalar objective over a small box-constrained
//! continuous/integer search space using a swarm with an
//! informant-restricted social topology. It is built for objectives that
//! are expensive and possibly stochastic — the canonical case being a
//! hyperparameter vector scored by a full model-training pass — so the
//! engine is frugal with evaluations and treats the objective as a pure
//! black box: a `Fn(&[f64]) -> f64`, lower is better, nothing else.
//!
//! # Quick Start
//!
//! ```
//! use enjambre::prelude::*;
//!
//! // Score a (learning_rate, n_neurons) pair; the caller owns rounding.
//! let validation_error = |x: &[f64]| {
//!     let lr = x[0];
//!     let neurons = x[1].trunc().max(1.0);
//!     (lr - 0.05).powi(2) + (neurons - 50.0).powi(2)
//! };
//!
//! let space = SearchSpace::with_bounds(vec![1e-4, 5.0], vec![0.1, 100.0]);
//! let mut pso = ParticleSwarm::default().with_seed(42);
//! let result = pso
//!     .optimize(&validation_error, &space, Budget::Evaluations(4000))
//!     .unwrap();
//!
//! assert!(result.objective_value < 100.0);
//! assert!(space.contains(&result.solution));
//! ```
//!
//! # Modules
//!
//! - [`pso`]: the [`ParticleSwarm`](pso::ParticleSwarm) optimizer
//! - [`search_space`]: per-dimension box constraints
//! - [`budget`]: evaluation/generation budgets and stall detection
//! - [`callback`]: per-generation progress observation
//! - [`traits`]: the [`Metaheuristic`](traits::Metaheuristic) seam and result types
//! - [`error`]: error types

pub mod budget;
pub mod callback;
pub mod error;
pub mod prelude;
pub mod pso;
pub mod search_space;
pub mod traits;
