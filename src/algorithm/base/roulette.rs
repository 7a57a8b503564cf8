use rand::Rng;

/// Keeps the heuristic finite on zero-cost edges.
pub const EPSILON: f64 = 1e-9;


pub fn desirability(trail: f64, cost: f64, alpha: f64, beta: f64) -> f64 {
    trail.powf(alpha) * (1.0 / (cost + EPSILON)).powf(beta)
}

/// Scales weights to sum to one; `None` when their total is zero or not finite.
pub fn normalize(weights: &[f64]) -> Option<Vec<f64>> {
    let sum: f64 = weights.iter().sum();
    if !(sum.is_finite() && sum > 0.0) {
        return None;
    }
    Some(weights.iter().map(|w| w / sum).collect())
}

/// Index of the first candidate whose cumulative probability reaches `r`.
/// Zero-probability candidates are never picked. Falls back to the last
/// candidate when rounding leaves the total short.
pub fn select(probabilities: &[f64], r: f64) -> usize {
    debug_assert!(!probabilities.is_empty());
    let mut accumulation = 0.0;
    for (i, p) in probabilities.iter().enumerate() {
        accumulation += p;
        if accumulation >= r && *p > 0.0 {
            return i;
        }
    }
    probabilities.len() - 1
}

/// Draws a candidate in proportion to its weight. An infinite weight wins
/// outright (the first one in order); a zero or NaN total falls back to the
/// last candidate.
pub fn spin<R: Rng>(weights: &[f64], rng: &mut R) -> usize {
    debug_assert!(!weights.is_empty());
    if let Some(i) = weights.iter().position(|&w| w == f64::INFINITY) {
        return i;
    }
    match normalize(weights) {
        Some(probabilities) => select(&probabilities, rng.gen_range(0.0..1.0)),
        None => weights.len() - 1,
    }
}
