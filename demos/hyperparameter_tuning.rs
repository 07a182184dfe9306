//! Hyperparameter Tuning Example
//!
//! Tunes a (learning_rate, n_neurons) pair against a synthetic validation
//! error surface and compares the result with a fixed baseline.
//!
//! Run with: `cargo run --example hyperparameter_tuning`

use enjambre::prelude::*;

/// Synthetic stand-in for "train a regressor, return validation error".
///
/// The surface rewards a learning rate near 0.03 and about 40 neurons,
/// with a mild ripple so the landscape is not a clean bowl. In real use
/// this function would run a full training pass.
fn validation_error(x: &[f64]) -> f64 {
    let lr = x[0];
    let neurons = x[1].trunc().max(1.0); // rounding is the evaluator's job

    let lr_term = (lr.ln() - 0.03f64.ln()).powi(2);
    let width_term = ((neurons - 40.0) / 25.0).powi(2);
    let ripple = 0.05 * (neurons / 3.0).sin();

    0.2 + lr_term + width_term + ripple.abs()
}

fn main() {
    println!("=== Hyperparameter Tuning Demo ===\n");

    // Learning rate in [1e-4, 0.1], neuron count in [5, 100].
    let space = SearchSpace::with_bounds(vec![1e-4, 5.0], vec![0.1, 100.0]);

    let mut pso = ParticleSwarm::default()
        .with_swarm_size(20)
        .with_informants(4)
        .with_precision(0.25)
        .with_seed(42);

    let mut progress = ProgressCallback::every(10);
    let result = pso
        .optimize_with(
            &validation_error,
            &space,
            Budget::Evaluations(4000),
            &mut progress,
        )
        .expect("valid configuration");

    let lr = result.solution[0];
    let neurons = result.solution[1].trunc().max(1.0);

    println!("\nTuned hyperparameters:");
    println!("   learning rate: {lr:.5}");
    println!("   neurons:       {neurons}");
    println!("   error:         {:.6}", result.objective_value);
    println!("   evaluations:   {}", result.evaluations);
    println!("   stopped:       {:?}", result.termination);

    // Fixed-hyperparameter baseline for comparison.
    let baseline = validation_error(&[0.01, 64.0]);
    println!("\nBaseline (lr=0.01, neurons=64): error {baseline:.6}");
    if result.objective_value < baseline {
        println!("Tuning beat the baseline by {:.6}", baseline - result.objective_value);
    } else {
        println!("Tuning did not beat the baseline");
    }
}
