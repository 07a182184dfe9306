// =========================================================================
// FALSIFY-PSO: swarm-optimizer behavioral contract
//
// Each test states one falsifiable claim about the optimizer and fails
// with a FALSIFIED marker naming the violated clause.
//
// References:
//   - Kennedy & Eberhart (1995) "Particle Swarm Optimization"
// =========================================================================

use super::*;

/// FALSIFY-PSO-001: PSO finds near-optimal on sphere function f(x)=Σx²
#[test]
fn falsify_pso_001_sphere_convergence() {
    let sphere = |x: &[f64]| x.iter().map(|xi| xi * xi).sum();
    let mut pso = ParticleSwarm::default().with_seed(42);
    let space = SearchSpace::continuous(2, -5.0, 5.0);
    let result = pso
        .optimize(&sphere, &space, Budget::Evaluations(5000))
        .expect("valid configuration");

    assert!(
        result.objective_value < 1.0,
        "FALSIFIED PSO-001: sphere objective {} >= 1.0",
        result.objective_value
    );
}

/// FALSIFY-PSO-002: solution dimension matches search space
#[test]
fn falsify_pso_002_solution_dimension() {
    let sphere = |x: &[f64]| x.iter().map(|xi| xi * xi).sum();
    let mut pso = ParticleSwarm::default().with_seed(42);
    let space = SearchSpace::continuous(3, -5.0, 5.0);
    let result = pso
        .optimize(&sphere, &space, Budget::Evaluations(1000))
        .expect("valid configuration");

    assert_eq!(
        result.solution.len(),
        3,
        "FALSIFIED PSO-002: solution dim {} != search space dim 3",
        result.solution.len()
    );
}

/// FALSIFY-PSO-003: solution stays within bounds
#[test]
fn falsify_pso_003_within_bounds() {
    let sphere = |x: &[f64]| x.iter().map(|xi| xi * xi).sum();
    let mut pso = ParticleSwarm::default().with_seed(42);
    let space = SearchSpace::continuous(3, -2.0, 2.0);
    let result = pso
        .optimize(&sphere, &space, Budget::Evaluations(2000))
        .expect("valid configuration");

    for (i, &v) in result.solution.iter().enumerate() {
        assert!(
            (-2.0..=2.0).contains(&v),
            "FALSIFIED PSO-003: solution[{i}]={v} outside bounds [-2, 2]"
        );
    }
}

/// FALSIFY-PSO-004: every particle position respects bounds at creation
#[test]
fn falsify_pso_004_initial_positions_within_bounds() {
    let sphere = |x: &[f64]| x.iter().map(|xi| xi * xi).sum();
    let mut pso = ParticleSwarm::default().with_swarm_size(25).with_seed(42);
    let space = SearchSpace::with_bounds(vec![1e-4, 5.0], vec![0.1, 100.0]);
    // Zero generations: only initialization runs.
    let _ = pso
        .optimize(&sphere, &space, Budget::Iterations(0))
        .expect("valid configuration");

    for (i, p) in pso.particles().iter().enumerate() {
        assert!(
            space.contains(&p.position),
            "FALSIFIED PSO-004: particle {i} spawned outside bounds: {:?}",
            p.position
        );
    }
}

/// FALSIFY-PSO-005: informant sets have exactly the configured degree
#[test]
fn falsify_pso_005_informant_degree() {
    let sphere = |x: &[f64]| x.iter().map(|xi| xi * xi).sum();
    let mut pso = ParticleSwarm::default()
        .with_swarm_size(16)
        .with_informants(4)
        .with_seed(42);
    let space = SearchSpace::continuous(2, -5.0, 5.0);
    let _ = pso
        .optimize(&sphere, &space, Budget::Iterations(1))
        .expect("valid configuration");

    for (i, p) in pso.particles().iter().enumerate() {
        assert_eq!(
            p.informants.len(),
            4,
            "FALSIFIED PSO-005: particle {i} has degree {} != 4",
            p.informants.len()
        );
    }
}

/// FALSIFY-PSO-006: precision target terminates the run as Converged
#[test]
fn falsify_pso_006_precision_terminates() {
    let mut pso = ParticleSwarm::default().with_seed(42).with_precision(1.0);
    let space = SearchSpace::continuous(2, -5.0, 5.0);
    let result = pso
        .optimize(&|_: &[f64]| 0.5, &space, Budget::Iterations(1000))
        .expect("valid configuration");

    assert_eq!(
        result.termination,
        TerminationReason::Converged,
        "FALSIFIED PSO-006: constant sub-precision fitness did not converge"
    );
    assert_eq!(
        result.iterations, 1,
        "FALSIFIED PSO-006: converged run used {} generations instead of 1",
        result.iterations
    );
}

/// FALSIFY-PSO-007: a spent generation budget terminates as Exhausted
#[test]
fn falsify_pso_007_budget_terminates() {
    let mut pso = ParticleSwarm::default().with_seed(42).with_precision(1e-9);
    let space = SearchSpace::continuous(2, -5.0, 5.0);
    let result = pso
        .optimize(&|_: &[f64]| 7.0, &space, Budget::Iterations(5))
        .expect("valid configuration");

    assert_eq!(
        result.termination,
        TerminationReason::Exhausted,
        "FALSIFIED PSO-007: budget-bound run reported {:?}",
        result.termination
    );
    assert_eq!(
        result.iterations, 5,
        "FALSIFIED PSO-007: ran {} generations instead of 5",
        result.iterations
    );
}
