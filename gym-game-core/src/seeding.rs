//! Seeded random number generators.
//!
//! Environments own a [`fastrand::Rng`] created here. The generator is only reseeded by
//! an explicit call to [`Env::seed`](crate::Env::seed); `reset()` never touches it, so
//! successive episodes are sampled independently.
use fastrand::Rng;

/// Creates a generator and returns it with the seed it was created from.
///
/// If `seed` is `None`, the seed is drawn from the thread-local generator, which is
/// itself seeded from entropy.
pub fn np_random(seed: Option<u64>) -> (Rng, u64) {
    let seed = seed.unwrap_or_else(|| fastrand::u64(..));
    (Rng::with_seed(seed), seed)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_same_seed_same_sequence() {
        let (rng1, seed1) = np_random(Some(7));
        let (rng2, seed2) = np_random(Some(7));
        assert_eq!(seed1, 7);
        assert_eq!(seed1, seed2);
        let xs: Vec<_> = (0..8).map(|_| rng1.u32(..)).collect();
        let ys: Vec<_> = (0..8).map(|_| rng2.u32(..)).collect();
        assert_eq!(xs, ys);
    }

    #[test]
    fn test_entropy_seeds_differ() {
        let (_, seed1) = np_random(None);
        let (_, seed2) = np_random(None);
        assert_ne!(seed1, seed2);
    }
}
