//! Lifecycle of episodes.
use crate::error::GymError;
use log::trace;

/// Where an environment is in its episode lifecycle.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EpisodeStatus {
    /// Built, never reset.
    Pending,

    /// An episode is in progress.
    Running,

    /// The last step ended the episode.
    Finished,

    /// The environment has been closed.
    Closed,
}

/// Tracks the status, length and return of the current episode.
///
/// Environments call [`EpisodeTracker::begin`] in `reset()`,
/// [`EpisodeTracker::ensure_running`] before applying an action and
/// [`EpisodeTracker::advance`] after it.
#[derive(Debug, Clone)]
pub struct EpisodeTracker {
    status: EpisodeStatus,
    episodes: usize,
    steps: usize,
    ret: f32,
}

impl Default for EpisodeTracker {
    fn default() -> Self {
        Self::new()
    }
}

impl EpisodeTracker {
    /// Constructs a tracker in [`EpisodeStatus::Pending`].
    pub fn new() -> Self {
        Self {
            status: EpisodeStatus::Pending,
            episodes: 0,
            steps: 0,
            ret: 0.0,
        }
    }

    /// Starts a new episode.
    pub fn begin(&mut self) -> Result<(), GymError> {
        if self.status == EpisodeStatus::Closed {
            return Err(GymError::EnvClosed);
        }
        self.status = EpisodeStatus::Running;
        self.episodes += 1;
        self.steps = 0;
        self.ret = 0.0;
        trace!("Episode {} started", self.episodes);
        Ok(())
    }

    /// Fails unless an episode is in progress.
    pub fn ensure_running(&self) -> Result<(), GymError> {
        match self.status {
            EpisodeStatus::Running => Ok(()),
            EpisodeStatus::Pending => Err(GymError::EpisodeNotStarted),
            EpisodeStatus::Finished => Err(GymError::StaleEpisode(self.steps)),
            EpisodeStatus::Closed => Err(GymError::EnvClosed),
        }
    }

    /// Fails if the environment has been closed.
    pub fn ensure_open(&self) -> Result<(), GymError> {
        match self.status {
            EpisodeStatus::Closed => Err(GymError::EnvClosed),
            _ => Ok(()),
        }
    }

    /// Accounts for one step of the current episode.
    pub fn advance(&mut self, reward: f32, is_done: bool) {
        debug_assert_eq!(self.status, EpisodeStatus::Running);
        self.steps += 1;
        self.ret += reward;
        if is_done {
            self.status = EpisodeStatus::Finished;
            trace!(
                "Episode {} finished: {} steps, return = {}",
                self.episodes,
                self.steps,
                self.ret
            );
        }
    }

    /// Marks the environment as closed. Returns `false` if it was already closed.
    pub fn close(&mut self) -> bool {
        let was_open = self.status != EpisodeStatus::Closed;
        self.status = EpisodeStatus::Closed;
        was_open
    }

    /// Current status.
    pub fn status(&self) -> EpisodeStatus {
        self.status
    }

    /// Number of episodes started so far.
    pub fn episodes(&self) -> usize {
        self.episodes
    }

    /// Number of steps in the current episode.
    pub fn steps(&self) -> usize {
        self.steps
    }

    /// Sum of rewards in the current episode.
    pub fn episode_return(&self) -> f32 {
        self.ret
    }
}
