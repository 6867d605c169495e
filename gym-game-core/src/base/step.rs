//! Environment step.
use super::Env;
use crate::record::Record;

/// Key of the info flag set when an episode was cut by a time limit.
pub const TRUNCATED_KEY: &str = "TimeLimit.truncated";

/// The outcome of [`Env::step`]: `(o_t+1, r_t, done, info)` with the action `a_t`.
pub struct Step<E: Env> {
    /// Action.
    pub act: E::Act,

    /// Observation after the transition.
    pub obs: E::Obs,

    /// Reward attributed to the transition.
    pub reward: f32,

    /// Flag denoting if the episode has ended.
    pub is_done: bool,

    /// Auxiliary diagnostic information.
    pub info: Record,
}

impl<E: Env> Step<E> {
    /// Constructs a [`Step`] object.
    pub fn new(obs: E::Obs, act: E::Act, reward: f32, is_done: bool, info: Record) -> Self {
        Step {
            act,
            obs,
            reward,
            is_done,
            info,
        }
    }

    #[inline]
    /// Terminated or truncated.
    pub fn is_done(&self) -> bool {
        self.is_done
    }

    /// Returns `true` if the episode was cut by a time limit rather than terminated.
    pub fn is_truncated(&self) -> bool {
        self.info.get_bool(TRUNCATED_KEY).unwrap_or(false)
    }

    /// Converts into the tuple `(observation, reward, done, info)`.
    pub fn into_tuple(self) -> (E::Obs, f32, bool, Record) {
        (self.obs, self.reward, self.is_done, self.info)
    }
}

impl<E: Env> Clone for Step<E> {
    fn clone(&self) -> Self {
        Self {
            act: self.act.clone(),
            obs: self.obs.clone(),
            reward: self.reward,
            is_done: self.is_done,
            info: self.info.clone(),
        }
    }
}

impl<E: Env> std::fmt::Debug for Step<E> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Step")
            .field("act", &self.act)
            .field("obs", &self.obs)
            .field("reward", &self.reward)
            .field("is_done", &self.is_done)
            .field("info", &self.info)
            .finish()
    }
}
