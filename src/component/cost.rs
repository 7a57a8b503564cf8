use itertools::Itertools;
use serde::Deserialize;

use crate::utils::error::{Error, Result};


#[derive(Clone, Copy, Debug, PartialEq, Deserialize)]
pub struct Point {
    pub x: f64,
    pub y: f64,
}

/// Pairwise Euclidean distances over a fixed set of points, computed once.
#[derive(Clone, Debug)]
pub struct DistanceMatrix {
    n: usize,
    dist: Vec<f64>,
}

/// A directed payment channel; its cost is the fee charged for an amount.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Channel {
    pub liquidity: f64,
    pub base_fee: f64,
    pub fee_rate: f64,
}


impl Point {
    pub fn new(x: f64, y: f64) -> Self {
        Point { x, y }
    }
    pub fn distance(&self, other: &Point) -> f64 {
        (self.x - other.x).hypot(self.y - other.y)
    }
}

impl From<(f64, f64)> for Point {
    fn from((x, y): (f64, f64)) -> Self {
        Point::new(x, y)
    }
}

impl DistanceMatrix {
    pub fn new(points: &[Point]) -> Self {
        let n = points.len();
        let mut dist = vec![0.0; n * n];
        for (i, j) in (0..n).tuple_combinations() {
            let d = points[i].distance(&points[j]);
            dist[i * n + j] = d;
            dist[j * n + i] = d;
        }
        DistanceMatrix { n, dist }
    }
    pub fn len(&self) -> usize {
        self.n
    }
    pub fn is_empty(&self) -> bool {
        self.n == 0
    }
    pub fn cost(&self, i: usize, j: usize) -> f64 {
        debug_assert!(i < self.n && j < self.n);
        self.dist[i * self.n + j]
    }
    /// Length of the closed tour, including the edge back to its start.
    pub fn tour_length(&self, tour: &[usize]) -> f64 {
        match (tour.first(), tour.last()) {
            (Some(&head), Some(&last)) => {
                let open = tour.windows(2)
                    .map(|ends| self.cost(ends[0], ends[1]))
                    .sum::<f64>();
                open + self.cost(last, head)
            }
            _ => 0.0,
        }
    }
}

impl Channel {
    pub fn new(liquidity: f64, base_fee: f64, fee_rate: f64) -> Self {
        Channel { liquidity, base_fee, fee_rate }
    }
    /// Like `new`, but rejects negative or non-finite fields so every fee
    /// stays a non-negative real.
    pub fn checked(liquidity: f64, base_fee: f64, fee_rate: f64) -> Result<Self> {
        let fields = [("liquidity", liquidity), ("base_fee", base_fee), ("fee_rate", fee_rate)];
        for &(name, value) in fields.iter() {
            if !(value.is_finite() && value >= 0.0) {
                return Err(Error::InvalidParameter { name, value });
            }
        }
        Ok(Channel::new(liquidity, base_fee, fee_rate))
    }
    pub fn fee(&self, amount: f64) -> f64 {
        self.base_fee + amount * self.fee_rate
    }
    pub fn can_carry(&self, amount: f64) -> bool {
        self.liquidity >= amount
    }
}
