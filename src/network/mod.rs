mod topology;

pub use topology::{EdgeIndex, Network, NodeIndex};
