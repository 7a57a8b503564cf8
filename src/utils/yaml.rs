use std::fs;

use serde::Deserialize;

use super::config::Config;
use super::error::{Error, Result};
use crate::algorithm::{ProblemEnum, Routing, Tour};
use crate::component::{Channel, Point};
use crate::network::Network;

#[derive(Deserialize)]
#[serde(tag = "kind", rename_all = "lowercase")]
enum ProblemYaml {
    Tour {
        nodes: Vec<Point>,
    },
    Routing {
        source: String,
        target: String,
        amount: f64,
        channels: Vec<ChannelYaml>,
    },
}

#[derive(Deserialize)]
struct ChannelYaml {
    source: String,
    destination: String,
    liquidity: f64,
    base_fee: f64,
    fee_rate: f64,
}

pub fn load_problem(path: &str) -> Result<ProblemEnum> {
    let text = fs::read_to_string(path)
        .map_err(|err| Error::Io(path.to_owned(), err))?;
    parse_problem(&text, path)
}

pub fn parse_problem(text: &str, origin: &str) -> Result<ProblemEnum> {
    let yaml: ProblemYaml = serde_yaml::from_str(text)
        .map_err(|err| Error::Yaml(origin.to_owned(), err))?;
    let problem = match yaml {
        ProblemYaml::Tour { nodes } => Tour::new(nodes)?.into(),
        ProblemYaml::Routing { source, target, amount, channels } => {
            Routing::new(build_network(channels)?, &source, &target, amount)?.into()
        }
    };
    Ok(problem)
}

pub fn load_config(path: &str) -> Result<Config> {
    let text = fs::read_to_string(path)
        .map_err(|err| Error::Io(path.to_owned(), err))?;
    serde_yaml::from_str(&text)
        .map_err(|err| Error::Yaml(path.to_owned(), err))
}

fn build_network(channels: Vec<ChannelYaml>) -> Result<Network> {
    let mut network = Network::new();
    for c in channels {
        if c.source == c.destination {
            return Err(Error::SameEndpoints(c.source));
        }
        let channel = Channel::checked(c.liquidity, c.base_fee, c.fee_rate)?;
        network.add_channel(&c.source, &c.destination, channel);
    }
    Ok(network)
}
