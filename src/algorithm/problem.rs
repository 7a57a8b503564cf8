use enum_dispatch::enum_dispatch;
use rand_chacha::ChaChaRng;

use super::base::ants::Ant;
use super::routing::Routing;
use super::tour::Tour;


/// A traversable next node and the cost of getting there.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Hop {
    pub node: usize,
    pub cost: f64,
}

#[enum_dispatch]
#[derive(Clone, Debug)]
pub enum ProblemEnum {
    Tour,
    Routing,
}

/// What the colony needs to know about a graph to let ants walk on it.
#[enum_dispatch(ProblemEnum)]
pub trait Problem {
    fn node_count(&self) -> usize;
    /// Ordered pairs that carry a pheromone trail.
    fn edges(&self) -> Vec<(usize, usize)>;
    fn start(&self, rng: &mut ChaChaRng) -> usize;
    /// Candidates reachable from the ant's current node, in a fixed order.
    fn candidates(&self, ant: &Ant, hops: &mut Vec<Hop>);
    fn is_complete(&self, ant: &Ant) -> bool;
    /// Cost of returning to the start for closed tours, `None` for open paths.
    fn closing_cost(&self, ant: &Ant) -> Option<f64>;
    /// Whether a deposit reinforces both directions of a traveled edge.
    fn symmetric(&self) -> bool;
}
