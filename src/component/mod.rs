mod cost;
mod pheromone;
mod solution;

pub use cost::{Channel, DistanceMatrix, Point};
pub use pheromone::PheromoneMatrix;
pub use solution::{BestSolution, Tracker};
