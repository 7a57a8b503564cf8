use rand_chacha::ChaChaRng;

use super::base::ants::{Ant, Walk};
use super::base::roulette::{desirability, normalize, spin};
use super::problem::{Hop, Problem, ProblemEnum};
use crate::component::PheromoneMatrix;
use crate::utils::config::Parameters;


/// Moves a walking ant by exactly one hop, or strands it when nothing is
/// reachable. `hops` is scratch space reused across calls.
pub fn advance(
    ant: &mut Ant,
    problem: &ProblemEnum,
    pheromone: &PheromoneMatrix,
    params: &Parameters,
    rng: &mut ChaChaRng,
    hops: &mut Vec<Hop>,
) {
    debug_assert!(ant.is_walking());
    hops.clear();
    problem.candidates(ant, hops);
    if hops.is_empty() {
        ant.walk = Walk::Stuck;
        return;
    }
    let weights = weigh(ant.current(), hops, pheromone, params);
    let hop = hops[spin(&weights, rng)];
    ant.visit(hop.node, hop.cost);
    if problem.is_complete(ant) {
        ant.walk = Walk::Complete;
    }
}

/// Transition probabilities out of the ant's current node, as
/// `(node, probability)` in candidate order. Empty when the ant is stuck.
pub fn probabilities(
    ant: &Ant,
    problem: &ProblemEnum,
    pheromone: &PheromoneMatrix,
    params: &Parameters,
) -> Vec<(usize, f64)> {
    let mut hops = vec![];
    problem.candidates(ant, &mut hops);
    let weights = weigh(ant.current(), &hops, pheromone, params);
    match normalize(&weights) {
        Some(probs) => hops.iter().map(|h| h.node).zip(probs).collect(),
        None => vec![],
    }
}

fn weigh(current: usize, hops: &[Hop], pheromone: &PheromoneMatrix, params: &Parameters) -> Vec<f64> {
    hops.iter()
        .map(|hop| {
            let trail = pheromone.get(current, hop.node);
            desirability(trail, hop.cost, params.alpha, params.beta)
        })
        .collect()
}
