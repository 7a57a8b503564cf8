use rand_chacha::ChaChaRng;

use super::base::ants::Ant;
use super::problem::{Hop, Problem};
use crate::network::{Network, NodeIndex};
use crate::utils::error::{Error, Result};


/// Cheapest-fee path for a payment of `amount` from `source` to `target`.
/// A channel is only usable when its liquidity covers the amount.
#[derive(Clone, Debug)]
pub struct Routing {
    network: Network,
    source: NodeIndex,
    target: NodeIndex,
    amount: f64,
}

impl Routing {
    pub fn new(network: Network, source: &str, target: &str, amount: f64) -> Result<Self> {
        if !(amount.is_finite() && amount >= 0.0) {
            return Err(Error::InvalidAmount(amount));
        }
        let lookup = |name: &str| network.lookup(name)
            .ok_or_else(|| Error::UnknownNode(name.to_owned()));
        let (source, target) = (lookup(source)?, lookup(target)?);
        if source == target {
            return Err(Error::SameEndpoints(network.name(source).to_owned()));
        }
        Ok(Routing { network, source, target, amount })
    }
    pub fn network(&self) -> &Network {
        &self.network
    }
    pub fn source(&self) -> NodeIndex {
        self.source
    }
    pub fn target(&self) -> NodeIndex {
        self.target
    }
    pub fn amount(&self) -> f64 {
        self.amount
    }
}

impl Problem for Routing {
    fn node_count(&self) -> usize {
        self.network.node_count()
    }
    fn edges(&self) -> Vec<(usize, usize)> {
        self.network.pairs().collect()
    }
    fn start(&self, _rng: &mut ChaChaRng) -> usize {
        self.source.index()
    }
    fn candidates(&self, ant: &Ant, hops: &mut Vec<Hop>) {
        let network = &self.network;
        let amount = self.amount;
        let viable = network.outgoings(ant.current().into())
            .map(|e| (network.endpoints(e).1.index(), network.channel(e)))
            .filter(|(node, channel)| !ant.has_visited(*node) && channel.can_carry(amount))
            .map(|(node, channel)| Hop { node, cost: channel.fee(amount) });
        hops.extend(viable);
    }
    fn is_complete(&self, ant: &Ant) -> bool {
        ant.current() == self.target.index()
    }
    fn closing_cost(&self, _ant: &Ant) -> Option<f64> {
        None
    }
    fn symmetric(&self) -> bool {
        false
    }
}
