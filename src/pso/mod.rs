//! Particle Swarm Optimization (PSO) with an informant topology.
//!
//! A population-based metaheuristic for expensive black-box minimization.
//!
//! # Algorithm
//!
//! ```text
//! Initialize N particles with uniform positions, velocities in [-1, 1],
//! and a fixed random informant set per particle.
//! Each generation, for every particle in index order:
//!   1. Group best: adopt the best personal best among its informants
//!   2. Velocity:  v = w*v + c1*r1*(pbest - x) + c2*r2*(gbest - x)
//!   3. Position:  x = clamp(x + v), then re-evaluate fitness
//!   4. Personal best: keep x if strictly better
//! Then ratchet the global best over all personal bests.
//! ```
//!
//! Social influence flows only along the informant graph: each particle
//! samples a fixed set of peers at creation (self-inclusion allowed) and is
//! pulled toward the best result those peers have personally seen. Particles
//! are updated in place in index order, so later particles can observe
//! personal bests already improved earlier in the same generation.
//!
//! # References
//!
//! - Kennedy & Eberhart (1995): "Particle Swarm Optimization"
//! - Clerc & Kennedy (2002): "The Particle Swarm - Explosion, Stability,
//!   and Convergence in a Multidimensional Complex Space"

use rand::prelude::*;
use serde::{Deserialize, Serialize};

use crate::budget::{Budget, ConvergenceTracker};
use crate::callback::SwarmCallback;
use crate::error::{EnjambreError, Result};
use crate::search_space::SearchSpace;
use crate::traits::{Metaheuristic, OptimizationResult, TerminationReason};

mod particle;

use particle::Particle;

#[cfg(test)]
mod tests_contract;

/// Non-finite fitness is treated as the worst possible value, so a single
/// failed evaluation cannot poison best-tracking with NaN comparisons.
pub(crate) fn guard_fitness(value: f64) -> f64 {
    if value.is_finite() {
        value
    } else {
        f64::INFINITY
    }
}

fn initial_best_fitness() -> f64 {
    f64::INFINITY
}

/// Particle Swarm optimizer.
///
/// # Example
///
/// ```
/// use enjambre::prelude::*;
///
/// // Sphere function: f(x) = Σxᵢ²
/// let objective = |x: &[f64]| x.iter().map(|xi| xi * xi).sum();
///
/// let mut pso = ParticleSwarm::default().with_seed(42);
/// let space = SearchSpace::continuous(2, -5.0, 5.0);
/// let result = pso
///     .optimize(&objective, &space, Budget::Evaluations(5000))
///     .unwrap();
///
/// assert!(result.objective_value < 1.0);
/// ```
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ParticleSwarm {
    /// Population size (0 = auto-select based on dimension).
    pub swarm_size: usize,

    /// Informants per particle (social neighborhood size, <= swarm size).
    pub informants: usize,

    /// Inertia weight W: retention factor on previous velocity.
    pub inertia: f64,

    /// Cognitive coefficient C1: pull toward a particle's own best.
    pub cognitive: f64,

    /// Social coefficient C2: pull toward the informant-group best.
    pub social: f64,

    /// Early-stop target: the run converges once the global best fitness
    /// drops strictly below this value.
    #[serde(default)]
    pub precision: Option<f64>,

    /// Random seed for reproducibility.
    #[serde(default)]
    seed: Option<u64>,

    // Run state, rebuilt by each optimize() call.
    #[serde(skip)]
    particles: Vec<Particle>,
    #[serde(skip)]
    best_position: Vec<f64>,
    #[serde(skip, default = "initial_best_fitness")]
    best_fitness: f64,
    #[serde(skip)]
    history: Vec<f64>,
}

impl Default for ParticleSwarm {
    fn default() -> Self {
        Self {
            swarm_size: 0, // Auto-select
            informants: 3,
            // Constriction-derived defaults from Clerc & Kennedy (2002).
            inertia: 0.729,
            cognitive: 1.494,
            social: 1.494,
            precision: None,
            seed: None,
            particles: Vec::new(),
            best_position: Vec::new(),
            best_fitness: f64::INFINITY,
            history: Vec::new(),
        }
    }
}

impl ParticleSwarm {
    /// Create a new PSO optimizer with default parameters.
    ///
    /// Default: auto swarm size, 3 informants, W=0.729, C1=C2=1.494.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the population size (0 restores auto-selection).
    #[must_use]
    pub fn with_swarm_size(mut self, swarm_size: usize) -> Self {
        self.swarm_size = swarm_size;
        self
    }

    /// Set the number of informants per particle.
    #[must_use]
    pub fn with_informants(mut self, informants: usize) -> Self {
        self.informants = informants;
        self
    }

    /// Set the inertia, cognitive, and social weights.
    #[must_use]
    pub fn with_weights(mut self, inertia: f64, cognitive: f64, social: f64) -> Self {
        self.inertia = inertia;
        self.cognitive = cognitive;
        self.social = social;
        self
    }

    /// Set the early-stop precision target.
    #[must_use]
    pub fn with_precision(mut self, precision: f64) -> Self {
        self.precision = Some(precision);
        self
    }

    /// Set random seed for reproducibility.
    #[must_use]
    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = Some(seed);
        self
    }

    /// Create RNG from seed or OS entropy.
    fn make_rng(&self) -> StdRng {
        match self.seed {
            Some(seed) => StdRng::seed_from_u64(seed),
            None => StdRng::from_os_rng(),
        }
    }

    /// Check the configuration against the search space and resolve the
    /// effective swarm size. Fails before any fitness evaluation.
    fn validate(&self, space: &SearchSpace) -> Result<usize> {
        space.validate()?;
        let dim = space.dimension();
        let swarm_size = if self.swarm_size == 0 {
            (10 * dim).clamp(10, 100)
        } else {
            self.swarm_size
        };

        if self.informants == 0 {
            return Err(EnjambreError::invalid_hyperparameter(
                "informants",
                self.informants,
                ">= 1",
            ));
        }
        if self.informants > swarm_size {
            return Err(EnjambreError::invalid_hyperparameter(
                "informants",
                self.informants,
                &format!("<= swarm_size ({swarm_size})"),
            ));
        }
        for (param, value) in [
            ("inertia", self.inertia),
            ("cognitive", self.cognitive),
            ("social", self.social),
        ] {
            if !value.is_finite() {
                return Err(EnjambreError::invalid_hyperparameter(param, value, "finite"));
            }
        }
        if let Some(precision) = self.precision {
            if !precision.is_finite() {
                return Err(EnjambreError::invalid_hyperparameter(
                    "precision",
                    precision,
                    "finite",
                ));
            }
        }
        Ok(swarm_size)
    }

    /// Pull the global best up to the best personal best in the swarm.
    /// Strict improvement only; ties keep the incumbent record.
    fn ratchet_global_best(&mut self) {
        let mut winner: Option<usize> = None;
        let mut held = self.best_fitness;
        for (i, p) in self.particles.iter().enumerate() {
            if p.best_fitness < held {
                held = p.best_fitness;
                winner = Some(i);
            }
        }
        if let Some(i) = winner {
            self.best_fitness = self.particles[i].best_fitness;
            self.best_position.clone_from(&self.particles[i].best_position);
        }
    }

    /// One generation over every particle in index order.
    ///
    /// Group bests are read from the particles' current records, so a
    /// particle later in the pass sees bests already updated earlier in the
    /// same pass. Returns the evaluations consumed.
    fn step_generation<F>(
        &mut self,
        objective: &F,
        space: &SearchSpace,
        rng: &mut StdRng,
    ) -> usize
    where
        F: Fn(&[f64]) -> f64,
    {
        let n = self.particles.len();
        let (inertia, cognitive, social) = (self.inertia, self.cognitive, self.social);

        for i in 0..n {
            // Lowest personal best among this particle's informants; ties
            // keep the first one in informant-list order.
            let offer = {
                let p = &self.particles[i];
                let mut best: Option<(usize, f64)> = None;
                for &j in &p.informants {
                    let fitness = self.particles[j].best_fitness;
                    if best.map_or(true, |(_, held)| fitness < held) {
                        best = Some((j, fitness));
                    }
                }
                best
            };
            if let Some((j, fitness)) = offer {
                if fitness < self.particles[i].group_best_fitness {
                    let position = self.particles[j].best_position.clone();
                    self.particles[i].offer_group_best(&position, fitness);
                }
            }

            let p = &mut self.particles[i];
            p.update_velocity(inertia, cognitive, social, rng);
            p.update_position(space);
            p.fitness = guard_fitness(objective(&p.position));
            p.record_personal_best();
        }

        self.ratchet_global_best();
        n
    }

    /// Minimize `objective`, reporting progress through `callback`.
    ///
    /// Identical to [`Metaheuristic::optimize`] but with an observer: the
    /// callback sees every generation's global best, a distinct notice when
    /// the precision target is reached, and may stop the run early.
    ///
    /// # Errors
    ///
    /// Returns a configuration error before any fitness evaluation if the
    /// settings or the search space are invalid.
    pub fn optimize_with<F, C>(
        &mut self,
        objective: &F,
        space: &SearchSpace,
        budget: Budget,
        callback: &mut C,
    ) -> Result<OptimizationResult<Vec<f64>>>
    where
        F: Fn(&[f64]) -> f64,
        C: SwarmCallback,
    {
        self.reset();
        let swarm_size = self.validate(space)?;
        self.swarm_size = swarm_size;

        let mut rng = self.make_rng();
        callback.on_start(space);

        // Initialize swarm; one fitness evaluation per particle.
        let informants = self.informants;
        self.particles = (0..swarm_size)
            .map(|_| Particle::spawn(space, swarm_size, informants, objective, &mut rng))
            .collect();

        // First global-best computation over the initial personal bests.
        self.best_fitness = self.particles[0].best_fitness;
        self.best_position = self.particles[0].best_position.clone();
        self.ratchet_global_best();
        self.history.push(self.best_fitness);

        let mut tracker = ConvergenceTracker::from_budget(&budget);
        let max_generations = budget.max_iterations(swarm_size);

        let mut termination = TerminationReason::Exhausted;
        let mut generations = 0;

        if tracker.update(self.best_fitness, swarm_size) {
            for generation in 1..=max_generations {
                if callback.should_stop() {
                    termination = TerminationReason::Stopped;
                    break;
                }

                let evaluations = self.step_generation(objective, space, &mut rng);
                generations = generation;
                self.history.push(self.best_fitness);
                callback.on_generation_end(generation, self.best_fitness);

                if let Some(precision) = self.precision {
                    if self.best_fitness < precision {
                        callback.on_precision_reached(generation, self.best_fitness);
                        termination = TerminationReason::Converged;
                        break;
                    }
                }
                if !tracker.update(self.best_fitness, evaluations) {
                    termination = if tracker.is_stalled() {
                        TerminationReason::Stalled
                    } else {
                        TerminationReason::Exhausted
                    };
                    break;
                }
            }
        }

        callback.on_end(Some((self.best_position.as_slice(), self.best_fitness)));

        Ok(OptimizationResult::new(
            self.best_position.clone(),
            self.best_fitness,
            tracker.evaluations(),
            generations,
            self.history.clone(),
            termination,
        ))
    }

    #[cfg(test)]
    pub(crate) fn particles(&self) -> &[Particle] {
        &self.particles
    }
}

impl Metaheuristic for ParticleSwarm {
    type Solution = Vec<f64>;

    fn optimize<F>(
        &mut self,
        objective: &F,
        space: &SearchSpace,
        budget: Budget,
    ) -> Result<OptimizationResult<Self::Solution>>
    where
        F: Fn(&[f64]) -> f64,
    {
        self.optimize_with(objective, space, budget, &mut ())
    }

    fn best(&self) -> Option<&Self::Solution> {
        if self.particles.is_empty() {
            None
        } else {
            Some(&self.best_position)
        }
    }

    fn history(&self) -> &[f64] {
        &self.history
    }

    fn reset(&mut self) {
        self.particles.clear();
        self.best_position.clear();
        self.best_fitness = f64::INFINITY;
        self.history.clear();
    }
}
