//! Convenience re-exports for common usage.
//!
//! ```
//! use enjambre::prelude::*;
//! ```

pub use crate::budget::{Budget, ConvergenceTracker};
pub use crate::callback::{ProgressCallback, SwarmCallback};
pub use crate::error::{EnjambreError, Result};
pub use crate::pso::ParticleSwarm;
pub use crate::search_space::SearchSpace;
pub use crate::traits::{Metaheuristic, OptimizationResult, TerminationReason};
