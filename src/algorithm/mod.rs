mod base;
mod problem;
mod routing;
mod tour;

pub mod constructor;

pub use base::ants::{Ant, Walk};
pub use base::roulette;
pub use problem::{Hop, Problem, ProblemEnum};
pub use routing::Routing;
pub use tour::Tour;
