pub mod ants;
pub mod roulette;
