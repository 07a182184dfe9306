//! A single swarm member: position, velocity, and best-seen records.

use rand::prelude::*;

use super::guard_fitness;
use crate::search_space::SearchSpace;

/// One candidate solution.
///
/// Created once per run and mutated in place every generation. The informant
/// list is fixed at creation: a random set of peer indices whose personal
/// bests feed this particle's social pull. The set may include the
/// particle's own index, in which case it may act as its own best informant.
#[derive(Debug, Clone)]
pub(crate) struct Particle {
    pub position: Vec<f64>,
    pub velocity: Vec<f64>,
    /// Fitness at `position`, refreshed every generation.
    pub fitness: f64,
    pub best_position: Vec<f64>,
    /// Monotone non-increasing over the particle's lifetime.
    pub best_fitness: f64,
    /// Peer indices in `[0, swarm_size)`, distinct, fixed at creation.
    pub informants: Vec<usize>,
    pub group_best_position: Vec<f64>,
    /// Monotone non-increasing over the particle's lifetime.
    pub group_best_fitness: f64,
}

impl Particle {
    /// Sample a fresh particle: uniform position inside the box, uniform
    /// velocity in `[-1, 1]` per dimension, one immediate fitness
    /// evaluation, and a random informant set of exactly `informants`
    /// distinct indices drawn from `[0, swarm_size)` without replacement.
    pub fn spawn<F>(
        space: &SearchSpace,
        swarm_size: usize,
        informants: usize,
        objective: &F,
        rng: &mut impl Rng,
    ) -> Self
    where
        F: Fn(&[f64]) -> f64,
    {
        let position = space.sample_uniform(rng);
        let velocity: Vec<f64> = (0..space.dimension())
            .map(|_| rng.random_range(-1.0..=1.0))
            .collect();
        let fitness = guard_fitness(objective(&position));
        let informants = rand::seq::index::sample(rng, swarm_size, informants).into_vec();

        Self {
            best_position: position.clone(),
            best_fitness: fitness,
            group_best_position: position.clone(),
            group_best_fitness: fitness,
            position,
            velocity,
            fitness,
            informants,
        }
    }

    /// Velocity update with fresh per-dimension random coefficients:
    /// `v[d] = w*v[d] + c1*r1*(pbest[d] - x[d]) + c2*r2*(gbest[d] - x[d])`.
    pub fn update_velocity(
        &mut self,
        inertia: f64,
        cognitive: f64,
        social: f64,
        rng: &mut impl Rng,
    ) {
        for d in 0..self.velocity.len() {
            let r1 = rng.random::<f64>();
            let r2 = rng.random::<f64>();
            self.velocity[d] = inertia * self.velocity[d]
                + cognitive * r1 * (self.best_position[d] - self.position[d])
                + social * r2 * (self.group_best_position[d] - self.position[d]);
        }
    }

    /// Move by the current velocity, then clamp back into the box.
    ///
    /// The clamp is a hard saturation: velocity is left unchanged, so a
    /// particle pinned at a boundary keeps its outward velocity until the
    /// pull terms turn it around.
    pub fn update_position(&mut self, space: &SearchSpace) {
        for (x, v) in self.position.iter_mut().zip(self.velocity.iter()) {
            *x += v;
        }
        space.clip(&mut self.position);
    }

    /// Adopt an informant's personal best as the group best, strictly
    /// improving only. Re-offering the same record is a no-op.
    pub fn offer_group_best(&mut self, position: &[f64], fitness: f64) {
        if fitness < self.group_best_fitness {
            self.group_best_position.clear();
            self.group_best_position.extend_from_slice(position);
            self.group_best_fitness = fitness;
        }
    }

    /// Ratchet the personal best from the current position, strictly
    /// improving only; ties leave the record untouched.
    pub fn record_personal_best(&mut self) {
        if self.fitness < self.best_fitness {
            self.best_position.clone_from(&self.position);
            self.best_fitness = self.fitness;
        }
    }
}
