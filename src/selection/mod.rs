pub mod best_percentage;
pub mod rank;
pub mod roulette;
pub mod selection_strategy;
pub mod stochastic_universal;
pub mod tournament;

pub use best_percentage::BestFitnessPercentageSelection;
pub use rank::RankSelection;
pub use roulette::RouletteWheelSelection;
pub use selection_strategy::SelectionStrategy;
pub use stochastic_universal::StochasticUniversalSampling;
pub use tournament::TournamentSelection;

/// Builds a cumulative-fitness wheel, flooring negative contributions at
/// zero so a stray negative score cannot corrupt the distribution.
pub(crate) fn cumulative_wheel(fitness: impl Iterator<Item = f64>) -> Vec<f64> {
    let mut wheel = Vec::new();
    let mut total = 0.0;
    for f in fitness {
        total += f.max(0.0);
        wheel.push(total);
    }
    wheel
}

/// Finds the first wheel entry that is `>= target` (lower-bound
/// semantics: ties resolve to the earliest qualifying index). The result
/// is clamped to the last slot to absorb floating-point drift.
pub(crate) fn spin(wheel: &[f64], target: f64) -> usize {
    let index = wheel.partition_point(|&cumulative| cumulative < target);
    index.min(wheel.len() - 1)
}
