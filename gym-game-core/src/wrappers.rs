//! Environments wrapping other environments.
//!
//! A wrapper implements [`Env`](crate::Env) by forwarding to the wrapped environment and
//! adds behavior around `reset()` and `step()`.
mod record_episode_statistics;
mod time_limit;
pub use record_episode_statistics::{
    RecordEpisodeStatistics, EPISODE_LENGTH_KEY, EPISODE_RETURN_KEY,
};
pub use time_limit::{TimeLimit, TimeLimitConfig};
