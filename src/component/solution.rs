/// Lowest-cost complete path seen since the last reset.
#[derive(Clone, Debug, PartialEq)]
pub struct BestSolution {
    pub path: Vec<usize>,
    pub cost: f64,
    pub found_at: usize,
}

#[derive(Clone, Debug, Default)]
pub struct Tracker {
    best: Option<BestSolution>,
}


impl Tracker {
    pub fn new() -> Self {
        Tracker { best: None }
    }
    pub fn best(&self) -> Option<&BestSolution> {
        self.best.as_ref()
    }
    pub fn cost(&self) -> f64 {
        self.best.as_ref()
            .map_or(f64::INFINITY, |best| best.cost)
    }
    /// Records the path only when strictly cheaper than the current best.
    pub fn offer(&mut self, path: &[usize], cost: f64, iteration: usize) -> bool {
        if !(cost < self.cost()) {
            return false;
        }
        self.best = Some(BestSolution {
            path: path.to_vec(),
            cost,
            found_at: iteration,
        });
        true
    }
    pub fn clear(&mut self) {
        self.best = None;
    }
}
