use rand::Rng;
use rand_chacha::ChaChaRng;

use super::base::ants::Ant;
use super::problem::{Hop, Problem};
use crate::component::{DistanceMatrix, Point};
use crate::utils::error::{Error, Result};


/// Closed tour over points on a plane, every pair joined by a straight edge.
#[derive(Clone, Debug)]
pub struct Tour {
    points: Vec<Point>,
    distances: DistanceMatrix,
}

impl Tour {
    pub fn new(points: Vec<Point>) -> Result<Self> {
        if points.len() < 2 {
            return Err(Error::TooFewNodes(points.len()));
        }
        if let Some(p) = points.iter().find(|p| !(p.x.is_finite() && p.y.is_finite())) {
            let value = if p.x.is_finite() { p.y } else { p.x };
            return Err(Error::InvalidParameter { name: "coordinate", value });
        }
        let distances = DistanceMatrix::new(&points);
        Ok(Tour { points, distances })
    }
    pub fn points(&self) -> &[Point] {
        &self.points
    }
    pub fn distances(&self) -> &DistanceMatrix {
        &self.distances
    }
}

impl Problem for Tour {
    fn node_count(&self) -> usize {
        self.points.len()
    }
    fn edges(&self) -> Vec<(usize, usize)> {
        let n = self.points.len();
        (0..n).flat_map(|i| (0..n).map(move |j| (i, j)))
            .filter(|(i, j)| i != j)
            .collect()
    }
    fn start(&self, rng: &mut ChaChaRng) -> usize {
        rng.gen_range(0..self.points.len())
    }
    fn candidates(&self, ant: &Ant, hops: &mut Vec<Hop>) {
        let current = ant.current();
        let unvisited = (0..self.points.len())
            .filter(|&node| !ant.has_visited(node))
            .map(|node| Hop { node, cost: self.distances.cost(current, node) });
        hops.extend(unvisited);
    }
    fn is_complete(&self, ant: &Ant) -> bool {
        ant.path.len() == self.points.len()
    }
    fn closing_cost(&self, ant: &Ant) -> Option<f64> {
        Some(self.distances.cost(ant.current(), ant.start()))
    }
    fn symmetric(&self) -> bool {
        true
    }
}


#[cfg(test)]
mod tests {
    use super::*;
    use rand::SeedableRng;

    fn square() -> Tour {
        let points = vec![(0.0, 0.0), (10.0, 0.0), (10.0, 10.0), (0.0, 10.0)];
        Tour::new(points.into_iter().map(Point::from).collect()).unwrap()
    }

    #[test]
    fn it_rejects_single_node() {
        let err = Tour::new(vec![Point::new(0.0, 0.0)]).unwrap_err();
        assert!(matches!(err, Error::TooFewNodes(1)));
        let err = Tour::new(vec![Point::new(0.0, 0.0), Point::new(f64::NAN, 1.0)]).unwrap_err();
        assert!(matches!(err, Error::InvalidParameter { name: "coordinate", .. }));
    }

    #[test]
    fn it_offers_unvisited_nodes_in_order() {
        let tour = square();
        let mut ant = Ant::new(4, 2);
        ant.visit(0, 200f64.sqrt());
        let mut hops = vec![];
        tour.candidates(&ant, &mut hops);
        assert_eq!(hops, vec![
            Hop { node: 1, cost: 10.0 },
            Hop { node: 3, cost: 10.0 },
        ]);
        assert!(!tour.is_complete(&ant));
        assert_eq!(tour.closing_cost(&ant), Some(200f64.sqrt()));
    }

    #[test]
    fn it_connects_every_pair() {
        let tour = square();
        assert_eq!(tour.edges().len(), 12);
        assert!(tour.symmetric());
        let mut rng = ChaChaRng::seed_from_u64(1);
        assert!((0..100).all(|_| tour.start(&mut rng) < 4));
    }
}
