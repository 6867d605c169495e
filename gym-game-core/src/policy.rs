//! A policy sampling uniformly from the action space.
use crate::{seeding::np_random, space::Space, Env, Policy};
use fastrand::Rng;

/// Samples actions uniformly from an action space, ignoring observations.
pub struct RandomPolicy<E: Env> {
    space: E::ActionSpace,
    rng: Rng,
}

impl<E: Env> RandomPolicy<E> {
    /// Constructs the policy for the given action space.
    pub fn new(space: E::ActionSpace, seed: Option<u64>) -> Self {
        let (rng, _) = np_random(seed);
        Self { space, rng }
    }

    /// Constructs the policy for the action space of `env`.
    pub fn from_env(env: &E, seed: Option<u64>) -> Self {
        Self::new(env.action_space().clone(), seed)
    }
}

impl<E> Policy<E> for RandomPolicy<E>
where
    E: Env,
    E::Act: From<<E::ActionSpace as Space>::Element>,
{
    fn sample(&mut self, _obs: &E::Obs) -> E::Act {
        self.space.sample(&mut self.rng).into()
    }
}
