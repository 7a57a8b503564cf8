/// Dense trail matrix over ordered node pairs. Only pairs handed to
/// `initialize` carry a trail; the rest stay at zero and are never touched.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct PheromoneMatrix {
    n: usize,
    trail: Vec<f64>,
    present: Vec<bool>,
    floor: f64,
}


impl PheromoneMatrix {
    pub fn new(n: usize, edges: impl IntoIterator<Item=(usize, usize)>, tau0: f64, floor: f64) -> Self {
        let mut matrix = PheromoneMatrix { floor, ..Default::default() };
        matrix.initialize(n, edges, tau0);
        matrix
    }
    pub fn initialize(&mut self, n: usize, edges: impl IntoIterator<Item=(usize, usize)>, tau0: f64) {
        debug_assert!(tau0 > 0.0);
        self.n = n;
        self.trail = vec![0.0; n * n];
        self.present = vec![false; n * n];
        for (i, j) in edges {
            debug_assert!(i != j && i < n && j < n);
            self.trail[i * n + j] = tau0;
            self.present[i * n + j] = true;
        }
    }
    pub fn len(&self) -> usize {
        self.n
    }
    pub fn is_empty(&self) -> bool {
        self.n == 0
    }
    pub fn get(&self, i: usize, j: usize) -> f64 {
        debug_assert!(i < self.n && j < self.n);
        self.trail[i * self.n + j]
    }
    pub fn rows(&self) -> impl Iterator<Item=&[f64]> + '_ {
        self.trail.chunks(self.n.max(1))
    }
    pub fn evaporate(&mut self, rho: f64) {
        debug_assert!((0.0..=1.0).contains(&rho));
        let floor = self.floor;
        for (trail, &present) in self.trail.iter_mut().zip(self.present.iter()) {
            if present {
                *trail = f64::max((1.0 - rho) * *trail, floor);
            }
        }
    }
    /// Adds `amount` on every consecutive pair of `path`, plus the pair
    /// back to its head when `closed`, mirrored when `symmetric`.
    pub fn deposit(&mut self, path: &[usize], amount: f64, closed: bool, symmetric: bool) {
        debug_assert!(amount.is_sign_positive());
        let closing = match (closed, path.first(), path.last()) {
            (true, Some(&head), Some(&last)) if path.len() > 1 => Some((last, head)),
            _ => None,
        };
        let hops = path.windows(2)
            .map(|ends| (ends[0], ends[1]))
            .chain(closing);
        for (i, j) in hops {
            self.add(i, j, amount);
            if symmetric {
                self.add(j, i, amount);
            }
        }
    }
    fn add(&mut self, i: usize, j: usize, amount: f64) {
        debug_assert!(i < self.n && j < self.n);
        let ix = i * self.n + j;
        self.trail[ix] += amount;
        self.present[ix] = true;
    }
}


#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    fn complete(n: usize) -> Vec<(usize, usize)> {
        (0..n).flat_map(|i| (0..n).map(move |j| (i, j)))
            .filter(|(i, j)| i != j)
            .collect()
    }

    #[test]
    fn it_initializes_present_edges_only() {
        let matrix = PheromoneMatrix::new(3, vec![(0, 1), (1, 2)], 1.0, 0.0);
        assert_eq!(matrix.get(0, 1), 1.0);
        assert_eq!(matrix.get(1, 2), 1.0);
        assert_eq!(matrix.get(1, 0), 0.0);
        assert_eq!(matrix.get(0, 0), 0.0);
        assert_eq!(matrix.rows().count(), 3);
    }

    #[test]
    fn it_evaporates_then_floors() {
        let mut matrix = PheromoneMatrix::new(2, complete(2), 1.0, 0.3);
        matrix.evaporate(0.5);
        assert_eq!(matrix.get(0, 1), 0.5);
        matrix.evaporate(0.5);
        assert_eq!(matrix.get(0, 1), 0.3);
        matrix.evaporate(1.0);
        assert_eq!(matrix.get(1, 0), 0.3);
        assert_eq!(matrix.get(0, 0), 0.0);
    }

    #[test]
    fn it_deposits_closed_tour_both_ways() {
        let mut matrix = PheromoneMatrix::new(3, complete(3), 1.0, 0.0);
        matrix.deposit(&[0, 1, 2], 0.5, true, true);
        for (i, j) in complete(3) {
            assert_eq!(matrix.get(i, j), 1.5);
        }
    }

    #[test]
    fn it_deposits_open_path_one_way() {
        let mut matrix = PheromoneMatrix::new(3, complete(3), 1.0, 0.0);
        matrix.deposit(&[0, 1, 2], 2.0, false, false);
        assert_eq!(matrix.get(0, 1), 3.0);
        assert_eq!(matrix.get(1, 2), 3.0);
        assert_eq!(matrix.get(1, 0), 1.0);
        assert_eq!(matrix.get(2, 0), 1.0);
    }

    proptest! {
        #[test]
        fn it_never_goes_negative(
            rhos in prop::collection::vec(0.0f64..=1.0, 1..40),
            amounts in prop::collection::vec(0.0f64..10.0, 1..40),
        ) {
            let mut matrix = PheromoneMatrix::new(4, complete(4), 1.0, 0.0);
            for (rho, amount) in rhos.iter().zip(amounts.iter()) {
                matrix.evaporate(*rho);
                matrix.deposit(&[0, 2, 1, 3], *amount, true, true);
                prop_assert!(matrix.rows().flatten().all(|&t| t >= 0.0));
            }
        }
    }
}
