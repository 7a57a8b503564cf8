use serde::Deserialize;
use argh::FromArgs;

use super::error::{Error, Result};

/// An ant colony optimizer for closed tours and payment routes
#[derive(FromArgs)]
pub struct Arguments {
    /// path to problem file, either a tour or a routing instance
    #[argh(positional)]
    pub problem: String,
    /// path to configuration file
    #[argh(option, short='c', default="String::from(\"data/config/default.yaml\")")]
    pub config: String,
    /// override number of colony cycles to run
    #[argh(option, short='i')]
    pub iterations: Option<usize>,
    /// override random seed
    #[argh(option, short='s')]
    pub seed: Option<u64>,
    /// override number of ants
    #[argh(option, short='n')]
    pub ants: Option<usize>,
    /// override pheromone exponent
    #[argh(option, short='a')]
    pub alpha: Option<f64>,
    /// override heuristic exponent
    #[argh(option, short='b')]
    pub beta: Option<f64>,
    /// override evaporation rate
    #[argh(option, short='r')]
    pub rho: Option<f64>,
}

#[derive(Deserialize, Debug)]
pub struct Config {
    pub name: String,
    pub seed: u64,
    pub iterations: usize,
    pub parameters: Parameters,
}

#[derive(Deserialize, Clone, Debug, PartialEq)]
pub struct Parameters {
    pub num_ants: usize,
    pub alpha: f64,
    pub beta: f64,
    pub evaporation_rate: f64,
    pub q: f64,
    #[serde(default = "default_initial_pheromone")]
    pub initial_pheromone: f64,
    #[serde(default)]
    pub min_pheromone: f64,
}

fn default_initial_pheromone() -> f64 {
    1.0
}

impl Default for Parameters {
    fn default() -> Self {
        Parameters {
            num_ants: 20,
            alpha: 1.0,
            beta: 2.0,
            evaporation_rate: 0.5,
            q: 100.0,
            initial_pheromone: default_initial_pheromone(),
            min_pheromone: 0.0,
        }
    }
}

impl Parameters {
    pub fn validate(&self) -> Result<()> {
        if self.num_ants == 0 {
            return Err(Error::InvalidParameter { name: "num_ants", value: 0.0 });
        }
        check("alpha", self.alpha, |v| v >= 0.0)?;
        check("beta", self.beta, |v| v >= 0.0)?;
        check("evaporation_rate", self.evaporation_rate, |v| (0.0..=1.0).contains(&v))?;
        check("q", self.q, |v| v > 0.0)?;
        check("initial_pheromone", self.initial_pheromone, |v| v > 0.0)?;
        check("min_pheromone", self.min_pheromone, |v| v >= 0.0)?;
        Ok(())
    }
}

fn check(name: &'static str, value: f64, valid: impl Fn(f64) -> bool) -> Result<()> {
    match value.is_finite() && valid(value) {
        true  => Ok(()),
        false => Err(Error::InvalidParameter { name, value }),
    }
}

impl Config {
    pub fn override_from_args(&mut self, args: &Arguments) {
        if let Some(iterations) = args.iterations {
            self.iterations = iterations;
        }
        if let Some(seed) = args.seed {
            self.seed = seed;
        }
        if let Some(ants) = args.ants {
            self.parameters.num_ants = ants.max(1);
        }
        if let Some(alpha) = args.alpha {
            self.parameters.alpha = num::clamp(alpha, 0.0, 9999999.9);
        }
        if let Some(beta) = args.beta {
            self.parameters.beta = num::clamp(beta, 0.0, 9999999.9);
        }
        if let Some(rho) = args.rho {
            self.parameters.evaporation_rate = num::clamp(rho, 0.0, 1.0);
        }
    }
}
