//! The random source behind every generator decision.
//!
//! [`AnswerGenerator`](crate::AnswerGenerator) never touches an RNG
//! directly. Each choice goes through one of the four primitives below, so a
//! test can swap in a scripted source and pin every outcome, while normal
//! use gets any [`rand::Rng`] for free.

use rand::Rng;

/// Primitive random draws used to assemble an answer.
pub trait Draws {
    /// `true` with probability `p`.
    fn chance(&mut self, p: f64) -> bool;

    /// Uniform integer in `low..=high`.
    fn between(&mut self, low: i64, high: i64) -> i64;

    /// Uniform index in `0..len`. `len` must be non-zero.
    fn index(&mut self, len: usize) -> usize;

    /// `amount` distinct indices from `0..len`, in the order they were drawn.
    fn distinct(&mut self, len: usize, amount: usize) -> Vec<usize>;
}

impl<R: Rng + ?Sized> Draws for R {
    fn chance(&mut self, p: f64) -> bool {
        self.random_bool(p)
    }

    fn between(&mut self, low: i64, high: i64) -> i64 {
        self.random_range(low..=high)
    }

    fn index(&mut self, len: usize) -> usize {
        self.random_range(0..len)
    }

    fn distinct(&mut self, len: usize, amount: usize) -> Vec<usize> {
        rand::seq::index::sample(self, len, amount).into_vec()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::SeedableRng;
    use rand::rngs::StdRng;
    use std::collections::HashSet;

    #[test]
    fn test_between_is_inclusive() {
        let mut rng = StdRng::seed_from_u64(7);
        let mut seen = HashSet::new();
        for _ in 0..500 {
            let n = rng.between(1, 2);
            assert!((1..=2).contains(&n));
            seen.insert(n);
        }
        assert_eq!(seen.len(), 2);
    }

    #[test]
    fn test_chance_extremes() {
        let mut rng = StdRng::seed_from_u64(1);
        for _ in 0..100 {
            assert!(rng.chance(1.0));
            assert!(!rng.chance(0.0));
        }
    }

    #[test]
    fn test_index_stays_in_bounds() {
        let mut rng = StdRng::seed_from_u64(3);
        for _ in 0..200 {
            assert!(rng.index(3) < 3);
        }
    }

    #[test]
    fn test_distinct_has_no_repeats() {
        let mut rng = StdRng::seed_from_u64(11);
        for amount in 0..=5 {
            let picked = rng.distinct(5, amount);
            assert_eq!(picked.len(), amount);
            let unique: HashSet<_> = picked.iter().collect();
            assert_eq!(unique.len(), amount);
            assert!(picked.iter().all(|&i| i < 5));
        }
    }

    #[test]
    fn test_works_through_trait_object() {
        let mut rng: Box<dyn rand::RngCore> = Box::new(StdRng::seed_from_u64(5));
        let n = (*rng).between(-5, 5);
        assert!((-5..=5).contains(&n));
    }
}
