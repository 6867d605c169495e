use crate::{
    episode::EpisodeTracker,
    record::RecordValue,
    render::{Metadata, RenderMode, Rendered},
    Env, Step,
};
use anyhow::Result;

/// Key of the episode return added to the info of the last step.
pub const EPISODE_RETURN_KEY: &str = "episode.r";

/// Key of the episode length added to the info of the last step.
pub const EPISODE_LENGTH_KEY: &str = "episode.l";

/// Adds the return and length of an episode to the info of its last step.
///
/// Statistics of all finished episodes are also kept in the wrapper until
/// [`RecordEpisodeStatistics::clear_statistics`] is called.
pub struct RecordEpisodeStatistics<E: Env> {
    env: E,
    tracker: EpisodeTracker,
    returns: Vec<f32>,
    lengths: Vec<usize>,
}

impl<E: Env> RecordEpisodeStatistics<E> {
    /// Wraps `env`.
    pub fn new(env: E) -> Self {
        Self {
            env,
            tracker: EpisodeTracker::new(),
            returns: vec![],
            lengths: vec![],
        }
    }

    /// Returns of the finished episodes.
    pub fn episode_returns(&self) -> &[f32] {
        &self.returns
    }

    /// Lengths of the finished episodes.
    pub fn episode_lengths(&self) -> &[usize] {
        &self.lengths
    }

    /// Forgets the statistics of the finished episodes.
    pub fn clear_statistics(&mut self) {
        self.returns.clear();
        self.lengths.clear();
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

impl<E: Env> Env for RecordEpisodeStatistics<E> {
    type Config = E::Config;
    type Obs = E::Obs;
    type Act = E::Act;
    type ActionSpace = E::ActionSpace;
    type ObservationSpace = E::ObservationSpace;

    const METADATA: Metadata = E::METADATA;

    fn build(config: &Self::Config, seed: Option<u64>) -> Result<Self> {
        Ok(Self::new(E::build(config, seed)?))
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
        self.tracker.advance(reward, is_done);

        if is_done {
            let (r, l) = (self.tracker.episode_return(), self.tracker.steps());
            info.insert(EPISODE_RETURN_KEY, RecordValue::Scalar(r));
            info.insert(EPISODE_LENGTH_KEY, RecordValue::Scalar(l as f32));
            self.returns.push(r);
            self.lengths.push(l);
        }

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
