use crate::{
    base::TRUNCATED_KEY,
    episode::EpisodeTracker,
    error::GymError,
    record::RecordValue,
    render::{Metadata, RenderMode, Rendered},
    Env, Step,
};
use anyhow::Result;
use log::trace;
use serde::{Deserialize, Serialize};

/// Configuration of [`TimeLimit`].
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct TimeLimitConfig<C> {
    /// Configuration of the wrapped environment.
    pub env_config: C,

    /// The maximum number of steps in an episode.
    pub max_episode_steps: usize,
}

impl<C> TimeLimitConfig<C> {
    /// Constructs the configuration.
    pub fn new(env_config: C, max_episode_steps: usize) -> Self {
        Self {
            env_config,
            max_episode_steps,
        }
    }
}

/// Ends episodes after a fixed number of steps.
///
/// When the wrapper cuts an episode short, the step is marked done and its info
/// carries `"TimeLimit.truncated" = true`.
pub struct TimeLimit<E: Env> {
    env: E,
    max_episode_steps: usize,
    tracker: EpisodeTracker,
}

impl<E: Env> TimeLimit<E> {
    /// Wraps `env`.
    pub fn new(env: E, max_episode_steps: usize) -> Result<Self> {
        if max_episode_steps == 0 {
            return Err(
                GymError::InvalidConfig("max_episode_steps must be positive".to_string()).into(),
            );
        }
        Ok(Self {
            env,
            max_episode_steps,
            tracker: EpisodeTracker::new(),
        })
    }

    /// Returns a reference to the wrapped environment.
    pub fn inner(&self) -> &E {
        &self.env
    }

    /// Returns a mutable reference to the wrapped environment.
    pub fn inner_mut(&mut self) -> &mut E {
        &mut self.env
    }

    /// Consumes the wrapper and returns the wrapped environment.
    pub fn into_inner(self) -> E {
        self.env
    }
}

impl<E: Env> Env for TimeLimit<E> {
    type Config = TimeLimitConfig<E::Config>;
    type Obs = E::Obs;
    type Act = E::Act;
    type ActionSpace = E::ActionSpace;
    type ObservationSpace = E::ObservationSpace;

    const METADATA: Metadata = E::METADATA;

    fn build(config: &Self::Config, seed: Option<u64>) -> Result<Self> {
        Self::new(E::build(&config.env_config, seed)?, config.max_episode_steps)
    }

    fn seed(&mut self, seed: Option<u64>) -> u64 {
        self.env.seed(seed)
    }

    fn reset(&mut self) -> Result<Self::Obs> {
        self.tracker.ensure_open()?;
        let obs = self.env.reset()?;
        self.tracker.begin()?;
        Ok(obs)
    }

    fn step(&mut self, act: &Self::Act) -> Result<Step<Self>> {
        self.tracker.ensure_running()?;
        let Step {
            act,
            obs,
            reward,
            is_done,
            mut info,
        } = self.env.step(act)?;

        let truncated = !is_done && self.tracker.steps() + 1 >= self.max_episode_steps;
        if truncated {
            trace!("TimeLimit: truncated after {} steps", self.max_episode_steps);
            info.insert(TRUNCATED_KEY, RecordValue::Bool(true));
        }
        let is_done = is_done || truncated;
        self.tracker.advance(reward, is_done);

        Ok(Step::new(obs, act, reward, is_done, info))
    }

    fn render(&mut self, mode: RenderMode) -> Result<Rendered> {
        self.env.render(mode)
    }

    fn close(&mut self) -> Result<()> {
        self.tracker.close();
        self.env.close()
    }

    fn action_space(&self) -> &Self::ActionSpace {
        self.env.action_space()
    }

    fn observation_space(&self) -> &Self::ObservationSpace {
        self.env.observation_space()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::dummy::{DummyAct, DummyEnv};

    fn env(episode_len: usize, max_episode_steps: usize) -> TimeLimit<DummyEnv> {
        TimeLimit::build(&TimeLimitConfig::new(episode_len, max_episode_steps), Some(0)).unwrap()
    }

    #[test]
    fn test_truncates() -> Result<()> {
        let _ = env_logger::builder().is_test(true).try_init();
        let mut env = env(10, 3);
        env.reset()?;
        for _ in 0..2 {
            let step = env.step(&DummyAct(0))?;
            assert!(!step.is_done());
        }
        let step = env.step(&DummyAct(0))?;
        assert!(step.is_done());
        assert!(step.is_truncated());

        let err = env.step(&DummyAct(0)).unwrap_err();
        assert_eq!(err.downcast_ref::<GymError>(), Some(&GymError::StaleEpisode(3)));

        // A new episode gets a fresh budget.
        env.reset()?;
        assert!(!env.step(&DummyAct(0))?.is_done());
        Ok(())
    }

    #[test]
    fn test_termination_is_not_truncation() -> Result<()> {
        let mut env = env(2, 2);
        env.reset()?;
        env.step(&DummyAct(1))?;
        let step = env.step(&DummyAct(1))?;
        assert!(step.is_done());
        assert!(!step.is_truncated());
        Ok(())
    }

    #[test]
    fn test_forwards_render_and_close() -> Result<()> {
        let mut env = env(2, 2);
        assert_eq!(env.metadata(), DummyEnv::METADATA);
        assert!(env.render_str("ansi").is_ok());
        assert!(env.render_str("human").is_err());
        let err = env.render_human().unwrap_err();
        assert_eq!(
            err.downcast_ref::<GymError>(),
            Some(&GymError::UnsupportedRenderMode("human".to_string()))
        );
        env.close()?;
        env.close()?;
        assert_eq!(env.inner().n_closed, 1);
        Ok(())
    }

    #[test]
    fn test_failed_reset_starts_no_episode() -> Result<()> {
        let mut env = env(3, 2);
        env.inner_mut().close()?;
        let err = env.reset().unwrap_err();
        assert_eq!(err.downcast_ref::<GymError>(), Some(&GymError::EnvClosed));
        let err = env.step(&DummyAct(0)).unwrap_err();
        assert_eq!(
            err.downcast_ref::<GymError>(),
            Some(&GymError::EpisodeNotStarted)
        );
        Ok(())
    }

    #[test]
    fn test_zero_steps() {
        assert!(TimeLimit::<DummyEnv>::build(&TimeLimitConfig::new(2, 0), None).is_err());
    }
}
