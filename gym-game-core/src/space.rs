//! Spaces of actions and observations.
//!
//! A space is a set of valid values that can be sampled uniformly.
//! [`RandomPolicy`](crate::RandomPolicy) samples actions from the action space of an
//! environment, and environments check incoming actions with [`Space::contains`].
use fastrand::Rng;
use serde::{Deserialize, Serialize};
use std::fmt::Debug;

/// A set of values with uniform sampling.
pub trait Space: Clone + Debug {
    /// Type of the elements in the space.
    type Element;

    /// Samples an element uniformly.
    fn sample(&self, rng: &mut Rng) -> Self::Element;

    /// Returns `true` if `x` is an element of the space.
    fn contains(&self, x: &Self::Element) -> bool;
}

/// The set `{0, 1, ..., n - 1}`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Discrete {
    /// The number of elements.
    pub n: usize,
}

impl Discrete {
    /// Constructs the space.
    ///
    /// # Panics
    ///
    /// Panics if `n == 0`.
    pub fn new(n: usize) -> Self {
        assert!(n > 0, "Discrete space must have at least one element");
        Self { n }
    }
}

impl Space for Discrete {
    type Element = usize;

    fn sample(&self, rng: &mut Rng) -> usize {
        rng.usize(..self.n)
    }

    fn contains(&self, x: &usize) -> bool {
        *x < self.n
    }
}

/// A cartesian product of [`Discrete`] spaces.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MultiDiscrete {
    /// The number of elements of each component.
    pub nvec: Vec<usize>,
}

impl MultiDiscrete {
    /// Constructs the space.
    ///
    /// # Panics
    ///
    /// Panics if any component is empty.
    pub fn new(nvec: Vec<usize>) -> Self {
        assert!(
            nvec.iter().all(|&n| n > 0),
            "MultiDiscrete components must have at least one element"
        );
        Self { nvec }
    }
}

impl Space for MultiDiscrete {
    type Element = Vec<usize>;

    fn sample(&self, rng: &mut Rng) -> Vec<usize> {
        self.nvec.iter().map(|&n| rng.usize(..n)).collect()
    }

    fn contains(&self, x: &Vec<usize>) -> bool {
        x.len() == self.nvec.len() && x.iter().zip(self.nvec.iter()).all(|(v, n)| v < n)
    }
}

/// A box in `R^n`, bounded by `low` and `high` componentwise.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BoxSpace {
    /// Lower bounds.
    pub low: Vec<f32>,

    /// Upper bounds.
    pub high: Vec<f32>,
}

impl BoxSpace {
    /// Constructs the space.
    ///
    /// # Panics
    ///
    /// Panics if the bounds have different lengths, are not finite or `low > high`.
    pub fn new(low: Vec<f32>, high: Vec<f32>) -> Self {
        assert_eq!(low.len(), high.len());
        assert!(
            low.iter()
                .zip(high.iter())
                .all(|(l, h)| l.is_finite() && h.is_finite() && l <= h),
            "BoxSpace bounds must be finite with low <= high"
        );
        Self { low, high }
    }

    /// Returns the number of components.
    pub fn dim(&self) -> usize {
        self.low.len()
    }
}

impl Space for BoxSpace {
    type Element = Vec<f32>;

    fn sample(&self, rng: &mut Rng) -> Vec<f32> {
        self.low
            .iter()
            .zip(self.high.iter())
            .map(|(&l, &h)| l + (h - l) * rng.f32())
            .collect()
    }

    fn contains(&self, x: &Vec<f32>) -> bool {
        x.len() == self.dim()
            && x.iter()
                .zip(self.low.iter().zip(self.high.iter()))
                .all(|(v, (l, h))| v.is_finite() && l <= v && v <= h)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_discrete() {
        let space = Discrete::new(3);
        let mut rng = Rng::with_seed(42);
        for _ in 0..100 {
            assert!(space.contains(&space.sample(&mut rng)));
        }
        assert!(!space.contains(&3));
    }

    #[test]
    fn test_multi_discrete() {
        let space = MultiDiscrete::new(vec![2, 5]);
        let mut rng = Rng::with_seed(42);
        for _ in 0..100 {
            assert!(space.contains(&space.sample(&mut rng)));
        }
        assert!(!space.contains(&vec![1]));
        assert!(!space.contains(&vec![2, 0]));
    }

    #[test]
    fn test_box() {
        let space = BoxSpace::new(vec![-1.0, 0.0], vec![1.0, 10.0]);
        let mut rng = Rng::with_seed(42);
        for _ in 0..100 {
            assert!(space.contains(&space.sample(&mut rng)));
        }
        assert!(!space.contains(&vec![0.0, 11.0]));
        assert!(!space.contains(&vec![f32::NAN, 1.0]));
        assert!(!space.contains(&vec![0.0]));
    }

    #[test]
    #[should_panic]
    fn test_empty_discrete() {
        let _ = Discrete::new(0);
    }
}
