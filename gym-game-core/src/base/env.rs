//! Environment.
use super::{Act, Obs, Step};
use crate::{
    error::GymError,
    render::{Metadata, RenderMode, Rendered},
    space::Space,
};
use anyhow::Result;

#[cfg_attr(doc, aquamarine::aquamarine)]
/// Represents an episodic environment, typically an MDP.
///
/// A controller drives the environment through a fixed sequence of calls:
///
/// ```mermaid
/// graph LR
///     build --> reset
///     reset --> step
///     step -- not done --> step
///     step -- done --> reset
///     step --> render
///     render --> step
///     reset --> close
///     step --> close
/// ```
///
/// An episode begins with [`Env::reset`] and ends when [`Env::step`] returns a
/// [`Step`] with `is_done == true`. Stepping a finished episode fails with
/// [`GymError::StaleEpisode`] until the environment is reset.
pub trait Env {
    /// Configurations.
    type Config: Clone;

    /// Observation of the environment.
    type Obs: Obs;

    /// Action of the environment.
    type Act: Act;

    /// The set of valid actions.
    type ActionSpace: Space;

    /// The set of possible observations.
    type ObservationSpace: Space;

    /// Static capabilities, including the supported render modes.
    const METADATA: Metadata;

    /// Builds an environment.
    ///
    /// If `seed` is `None`, the random number generator is seeded from entropy.
    fn build(config: &Self::Config, seed: Option<u64>) -> Result<Self>
    where
        Self: Sized;

    /// Reseeds the random number generator and returns the seed in use.
    ///
    /// This is the only method which reseeds the generator.
    fn seed(&mut self, seed: Option<u64>) -> u64;

    /// Resets the environment to an initial state and returns the initial observation.
    ///
    /// This method does not reset the random number generator; every call starts an
    /// episode independent of the previous ones.
    fn reset(&mut self) -> Result<Self::Obs>;

    /// Runs one timestep of the environment's dynamics.
    ///
    /// # Errors
    ///
    /// * [`GymError::EpisodeNotStarted`] if `reset()` has never been called.
    /// * [`GymError::StaleEpisode`] if the previous step ended the episode.
    /// * [`GymError::InvalidAction`] if `act` is not in the action space.
    /// * [`GymError::EnvClosed`] if the environment has been closed.
    fn step(&mut self, act: &Self::Act) -> Result<Step<Self>>
    where
        Self: Sized;

    /// Renders the environment.
    ///
    /// The default implementation supports no mode.
    fn render(&mut self, mode: RenderMode) -> Result<Rendered> {
        Err(GymError::UnsupportedRenderMode(mode.to_string()).into())
    }

    /// Renders the environment in the `human` mode, the default of the interface.
    fn render_human(&mut self) -> Result<Rendered> {
        self.render(RenderMode::Human)
    }

    /// Renders the environment with the mode of the given name.
    ///
    /// Fails with [`GymError::UnsupportedRenderMode`] if the mode is not listed in
    /// [`Env::METADATA`].
    fn render_str(&mut self, mode: &str) -> Result<Rendered> {
        let mode: RenderMode = mode.parse()?;
        if !Self::METADATA.supports(mode) {
            return Err(GymError::UnsupportedRenderMode(mode.to_string()).into());
        }
        self.render(mode)
    }

    /// Releases resources held by the environment.
    ///
    /// Calling this method more than once is allowed.
    fn close(&mut self) -> Result<()>;

    /// The set of valid actions.
    fn action_space(&self) -> &Self::ActionSpace;

    /// The set of possible observations.
    fn observation_space(&self) -> &Self::ObservationSpace;

    /// Returns [`Env::METADATA`].
    fn metadata(&self) -> Metadata {
        Self::METADATA
    }
}
