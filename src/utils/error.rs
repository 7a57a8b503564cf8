use crate::colony::Phase;
use thiserror::Error;

pub type Result<T> = std::result::Result<T, Error>;

#[derive(Error, Debug)]
pub enum Error {
    #[error("problem needs at least 2 nodes, got {0}")]
    TooFewNodes(usize),
    #[error("node `{0}` is not in the network")]
    UnknownNode(String),
    #[error("source and target are both `{0}`")]
    SameEndpoints(String),
    #[error("parameter `{name}` is out of range: {value}")]
    InvalidParameter { name: &'static str, value: f64 },
    #[error("payment amount must be finite and non-negative: {0}")]
    InvalidAmount(f64),
    #[error("colony cannot step while {0:?}")]
    NotRunning(Phase),
    #[error("colony has no problem instance loaded")]
    NoInstance,
    #[error("failed to read {0}")]
    Io(String, #[source] std::io::Error),
    #[error("failed to parse {0}")]
    Yaml(String, #[source] serde_yaml::Error),
}
