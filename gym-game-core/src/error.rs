//! Errors in the library.
use thiserror::Error;

/// Errors in the library.
///
/// Operations of [`Env`](crate::Env) return [`anyhow::Result`]; the variants below are
/// recovered with [`anyhow::Error::downcast_ref`].
#[derive(Error, Debug, Clone, PartialEq)]
pub enum GymError {
    /// The render mode is not advertised in the metadata of the environment.
    #[error("Unsupported render mode: {0}")]
    UnsupportedRenderMode(String),

    /// `step()` was called before the first `reset()`.
    #[error("Episode not started: call reset() before step()")]
    EpisodeNotStarted,

    /// `step()` was called after the episode had ended.
    #[error("Stale episode: the episode ended after {0} steps, call reset() before step()")]
    StaleEpisode(usize),

    /// The environment has been closed.
    #[error("Environment closed")]
    EnvClosed,

    /// The action is not contained in the action space.
    #[error("Invalid action: {0}")]
    InvalidAction(String),

    /// The configuration cannot be used to build an environment.
    #[error("Invalid config: {0}")]
    InvalidConfig(String),

    /// Record key error.
    #[error("Record key error: {0}")]
    RecordKeyError(String),

    /// Record value type error.
    #[error("Record value type error: {0}")]
    RecordValueTypeError(String),
}
