use hashbrown::HashMap;

use crate::component::Channel;

#[derive(Copy, Clone, Debug, Default, PartialEq, PartialOrd, Eq, Ord, Hash)]
pub struct NodeIndex(usize);

impl NodeIndex {
    fn new(ix: usize) -> Self {
        NodeIndex(ix)
    }
    pub fn index(self) -> usize {
        self.0
    }
}

impl From<usize> for NodeIndex {
    fn from(ix: usize) -> Self {
        NodeIndex::new(ix)
    }
}

#[derive(Copy, Clone, Debug, Default, PartialEq, PartialOrd, Eq, Ord, Hash)]
pub struct EdgeIndex(usize);

impl EdgeIndex {
    fn new(ix: usize) -> Self {
        EdgeIndex(ix)
    }
    pub fn index(self) -> usize {
        self.0
    }
}

impl From<usize> for EdgeIndex {
    fn from(ix: usize) -> Self {
        EdgeIndex::new(ix)
    }
}

#[derive(Clone, Debug)]
pub struct Node {
    name: String,
    edges: Vec<EdgeIndex>,
}

#[derive(Clone, Debug)]
pub struct Edge {
    ends: (NodeIndex, NodeIndex),
    channel: Channel,
}

impl Node {
    pub fn new(name: String) -> Self {
        Self { name, edges: vec![] }
    }
}
impl Edge {
    pub fn new(ends: (NodeIndex, NodeIndex), channel: Channel) -> Self {
        Edge { ends, channel }
    }
}

/// Directed payment channel graph. Nodes are addressed by name and indexed
/// in insertion order; parallel channels between one pair are allowed.
#[derive(Clone, Debug, Default)]
pub struct Network {
    nodes: Vec<Node>,
    edges: Vec<Edge>,
    names: HashMap<String, NodeIndex>,
}

impl Network {
    pub fn new() -> Self {
        Self { ..Default::default() }
    }
    pub fn node_count(&self) -> usize {
        self.nodes.len()
    }
    pub fn edge_count(&self) -> usize {
        self.edges.len()
    }
    pub fn lookup(&self, name: &str) -> Option<NodeIndex> {
        self.names.get(name).cloned()
    }
    pub fn name(&self, node: NodeIndex) -> &str {
        debug_assert!(node.index() < self.nodes.len());
        &self.nodes[node.index()].name
    }
    pub fn endpoints(&self, edge: EdgeIndex) -> &(NodeIndex, NodeIndex) {
        debug_assert!(edge.index() < self.edges.len());
        &self.edges[edge.index()].ends
    }
    pub fn channel(&self, edge: EdgeIndex) -> &Channel {
        debug_assert!(edge.index() < self.edges.len());
        &self.edges[edge.index()].channel
    }
    pub fn outgoings(&self, node: NodeIndex)
        -> impl Iterator<Item=EdgeIndex> + '_ {
        debug_assert!(node.index() < self.nodes.len());
        self.nodes[node.index()].edges.iter().cloned()
    }
    pub fn neighbors(&self, node: NodeIndex)
        -> impl Iterator<Item=NodeIndex> + '_ {
        self.outgoings(node)
            .map(move |e| self.edges[e.index()].ends.1)
    }
    /// Every ordered pair of nodes joined by at least one channel, possibly
    /// repeated when channels are parallel.
    pub fn pairs(&self) -> impl Iterator<Item=(usize, usize)> + '_ {
        self.edges.iter()
            .map(|e| (e.ends.0.index(), e.ends.1.index()))
    }
    pub fn add_node(&mut self, name: &str) -> NodeIndex {
        if let Some(node) = self.lookup(name) {
            return node;
        }
        let node = NodeIndex::new(self.nodes.len());
        self.nodes.push(Node::new(name.to_owned()));
        self.names.insert(name.to_owned(), node);
        node
    }
    pub fn add_channel(&mut self, source: &str, destination: &str, channel: Channel) -> EdgeIndex {
        debug_assert!(source != destination);
        let ends = (self.add_node(source), self.add_node(destination));
        let edge = EdgeIndex::new(self.edges.len());
        self.nodes[ends.0.index()].edges.push(edge);
        self.edges.push(Edge::new(ends, channel));
        edge
    }
    pub fn node_sequence(&self, path: &[usize]) -> Vec<&str> {
        path.iter()
            .map(|&n| self.name(n.into()))
            .collect()
    }
}
