//! Default implementation of the [`Evaluator`] trait.
//!
//! This module provides a simple evaluator that runs a fixed number of episodes
//! and calculates the average return across all episodes.
use super::Evaluator;
use crate::{error::GymError, record::Record, record::RecordValue, Env, Policy};
use anyhow::Result;
use log::info;

/// Runs a fixed number of episodes and averages their returns and lengths.
///
/// The environment is reseeded with `seed + ix` before the `ix`-th episode, so repeated
/// evaluations of the same policy see the same sequence of initial states.
///
/// # Examples
///
/// ```ignore
/// let config = GridWorldConfig::default();
/// let mut evaluator = DefaultEvaluator::<GridWorld>::new(&config, 42, 10)?;
/// let mut policy = RandomPolicy::new(Discrete::new(4), Some(0));
///
/// let record = evaluator.evaluate(&mut policy)?;
/// println!("Average return: {}", record.get_scalar("Episode return")?);
/// ```
pub struct DefaultEvaluator<E: Env> {
    /// The number of episodes to run during evaluation.
    n_episodes: usize,

    /// Base seed of the episodes.
    seed: u64,

    /// The environment instance used for evaluation.
    env: E,
}

impl<E: Env> Evaluator<E> for DefaultEvaluator<E> {
    /// Returns a [`Record`] with keys `"Episode return"` and `"Episode length"`.
    fn evaluate<P: Policy<E>>(&mut self, policy: &mut P) -> Result<Record> {
        let mut r_total = 0f32;
        let mut l_total = 0usize;

        for ix in 0..self.n_episodes {
            self.env.seed(Some(self.seed.wrapping_add(ix as u64)));
            let mut prev_obs = self.env.reset()?;

            loop {
                let act = policy.sample(&prev_obs);
                let step = self.env.step(&act)?;
                r_total += step.reward;
                l_total += 1;
                if step.is_done() {
                    break;
                }
                prev_obs = step.obs;
            }
        }

        let n = self.n_episodes as f32;
        info!(
            "Evaluated {} episodes: mean return = {}",
            self.n_episodes,
            r_total / n
        );

        Ok(Record::from_slice(&[
            ("Episode return", RecordValue::Scalar(r_total / n)),
            ("Episode length", RecordValue::Scalar(l_total as f32 / n)),
        ]))
    }
}

impl<E: Env> DefaultEvaluator<E> {
    /// Constructs a new [`DefaultEvaluator`].
    ///
    /// # Arguments
    ///
    /// * `config` - Configuration for the environment
    /// * `seed` - Random seed of the first episode
    /// * `n_episodes` - Number of episodes to run during evaluation
    pub fn new(config: &E::Config, seed: u64, n_episodes: usize) -> Result<Self> {
        if n_episodes == 0 {
            return Err(GymError::InvalidConfig("n_episodes must be positive".to_string()).into());
        }
        Ok(Self {
            n_episodes,
            seed,
            env: E::build(config, Some(seed))?,
        })
    }

    /// Returns a mutable reference to the environment, e.g., for rendering.
    pub fn env_mut(&mut self) -> &mut E {
        &mut self.env
    }
}
