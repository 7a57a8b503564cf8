#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Walk {
    Walking,
    Complete,
    Stuck,
}

/// A single explorer. Plain data: the constructor decides where it goes.
#[derive(Clone, Debug)]
pub struct Ant {
    pub path: Vec<usize>,
    pub cost: f64,
    pub walk: Walk,
    visited: Vec<bool>,
}

impl Ant {
    pub fn new(n: usize, start: usize) -> Self {
        let mut ant = Ant {
            path: Vec::with_capacity(n),
            cost: 0.0,
            walk: Walk::Walking,
            visited: vec![false; n],
        };
        ant.respawn(start);
        ant
    }
    pub fn respawn(&mut self, start: usize) {
        debug_assert!(start < self.visited.len());
        self.path.clear();
        self.path.push(start);
        self.visited.iter_mut().for_each(|v| *v = false);
        self.visited[start] = true;
        self.cost = 0.0;
        self.walk = Walk::Walking;
    }
    pub fn start(&self) -> usize {
        self.path[0]
    }
    pub fn current(&self) -> usize {
        self.path[self.path.len() - 1]
    }
    pub fn has_visited(&self, node: usize) -> bool {
        self.visited[node]
    }
    pub fn visit(&mut self, node: usize, cost: f64) {
        debug_assert!(self.walk == Walk::Walking);
        debug_assert!(!self.visited[node]);
        self.visited[node] = true;
        self.path.push(node);
        self.cost += cost;
    }
    pub fn is_walking(&self) -> bool {
        self.walk == Walk::Walking
    }
    pub fn is_complete(&self) -> bool {
        self.walk == Walk::Complete
    }
}
