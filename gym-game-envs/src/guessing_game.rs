//! Guess a hidden number from hints.
mod config;
use crate::viewer::Viewer;
use anyhow::Result;
pub use config::GuessingGameConfig;
use fastrand::Rng;
use gym_game_core::{
    episode::EpisodeTracker,
    error::GymError,
    record::{Record, RecordValue},
    render::{Metadata, RenderMode, Rendered},
    seeding::np_random,
    space::{BoxSpace, Discrete, Space},
    Act, Env, Obs, Step,
};
use log::{debug, info, trace, warn};

/// Observation of [`GuessingGame`]: how the last guess compares to the hidden number.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Hint {
    /// No guess has been made in this episode.
    NoGuess = 0,

    /// The guess was lower than the hidden number.
    Lower = 1,

    /// The guess was equal to the hidden number.
    Equal = 2,

    /// The guess was higher than the hidden number.
    Higher = 3,
}

impl Obs for Hint {}

impl From<Hint> for usize {
    fn from(hint: Hint) -> Self {
        hint as usize
    }
}

/// Action of [`GuessingGame`]: a guess.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct GuessAct(pub f32);

impl Act for GuessAct {}

impl From<Vec<f32>> for GuessAct {
    /// Takes the first component, `NaN` if empty.
    fn from(v: Vec<f32>) -> Self {
        Self(v.first().copied().unwrap_or(f32::NAN))
    }
}

/// Guess a number hidden in `[-range, range)`.
///
/// * Observation: [`Hint`], in `Discrete(4)`.
/// * Action: [`GuessAct`], in `BoxSpace([-bounds], [bounds])`.
/// * Reward: 1 when the guess is within 1% of `range` of the hidden number, which ends
///   the episode, 0 otherwise. The episode also ends after `max_guesses` guesses.
/// * Info: the hidden `"number"` and the number of `"guesses"`.
///
/// Supports the `human` render mode only.
pub struct GuessingGame {
    config: GuessingGameConfig,
    rng: Rng,
    tracker: EpisodeTracker,
    number: f32,
    last: Option<(f32, Hint)>,
    viewer: Option<Viewer>,
    action_space: BoxSpace,
    observation_space: Discrete,
}

impl GuessingGame {
    fn hint(&self, guess: f32) -> Hint {
        if guess < self.number {
            Hint::Lower
        } else if guess > self.number {
            Hint::Higher
        } else {
            Hint::Equal
        }
    }

    fn is_close(&self, guess: f32) -> bool {
        let tol = self.config.range * 0.01;
        (self.number - tol) < guess && guess < (self.number + tol)
    }
}

impl Env for GuessingGame {
    type Config = GuessingGameConfig;
    type Obs = Hint;
    type Act = GuessAct;
    type ActionSpace = BoxSpace;
    type ObservationSpace = Discrete;

    const METADATA: Metadata = Metadata {
        render_modes: &[RenderMode::Human],
    };

    fn build(config: &Self::Config, seed: Option<u64>) -> Result<Self> {
        config.validate()?;
        let (rng, seed) = np_random(seed);
        info!("Build GuessingGame, range = {}, seed = {}", config.range, seed);

        Ok(Self {
            config: config.clone(),
            rng,
            tracker: EpisodeTracker::new(),
            number: 0.0,
            last: None,
            viewer: None,
            action_space: BoxSpace::new(vec![-config.bounds], vec![config.bounds]),
            observation_space: Discrete::new(4),
        })
    }

    fn seed(&mut self, seed: Option<u64>) -> u64 {
        let (rng, seed) = np_random(seed);
        self.rng = rng;
        seed
    }

    fn reset(&mut self) -> Result<Hint> {
        self.tracker.begin()?;
        let range = self.config.range;
        self.number = -range + 2.0 * range * self.rng.f32();
        self.last = None;
        trace!("GuessingGame::reset()");
        Ok(Hint::NoGuess)
    }

    fn step(&mut self, act: &GuessAct) -> Result<Step<Self>> {
        self.tracker.ensure_running()?;
        if !self.action_space.contains(&vec![act.0]) {
            return Err(GymError::InvalidAction(format!(
                "{} is out of [-{}, {}]",
                act.0, self.config.bounds, self.config.bounds
            ))
            .into());
        }

        let guess = act.0;
        let hint = self.hint(guess);
        let reward = if self.is_close(guess) { 1.0 } else { 0.0 };
        let guesses = self.tracker.steps() + 1;
        let is_done = reward == 1.0 || guesses >= self.config.max_guesses;
        self.tracker.advance(reward, is_done);
        self.last = Some((guess, hint));
        trace!("GuessingGame::step({}): {:?}", guess, hint);

        let info = Record::from_slice(&[
            ("number", RecordValue::Scalar(self.number)),
            ("guesses", RecordValue::Scalar(guesses as f32)),
        ]);
        Ok(Step::new(hint, *act, reward, is_done, info))
    }

    fn render(&mut self, mode: RenderMode) -> Result<Rendered> {
        self.tracker.ensure_open()?;
        if mode != RenderMode::Human {
            return Err(GymError::UnsupportedRenderMode(mode.to_string()).into());
        }
        debug!("GuessingGame::render({})", mode);

        if self.viewer.is_none() {
            self.viewer = Some(Viewer::open(self.config.human_output.as_deref())?);
        }
        let line = match self.last {
            None => "no guess yet".to_string(),
            Some((guess, hint)) => format!(
                "guess #{}: {} is {}",
                self.tracker.steps(),
                guess,
                match hint {
                    Hint::Lower => "too low",
                    Hint::Higher => "too high",
                    _ => "right",
                }
            ),
        };
        if let Some(viewer) = self.viewer.as_mut() {
            viewer.print(&line)?;
        }
        Ok(Rendered::None)
    }

    fn close(&mut self) -> Result<()> {
        if self.tracker.close() {
            debug!("GuessingGame::close()");
        }
        if let Some(viewer) = self.viewer.take() {
            viewer.close()?;
        }
        Ok(())
    }

    fn action_space(&self) -> &BoxSpace {
        &self.action_space
    }

    fn observation_space(&self) -> &Discrete {
        &self.observation_space
    }
}

impl Drop for GuessingGame {
    fn drop(&mut self) {
        if let Err(e) = self.close() {
            warn!("Failed to close GuessingGame: {}", e);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn env() -> GuessingGame {
        let mut env = GuessingGame::build(&GuessingGameConfig::default(), Some(3)).unwrap();
        env.reset().unwrap();
        env
    }

    #[test]
    fn test_hints() {
        let mut env = env();
        let number = env.number;

        let step = env.step(&GuessAct(number - 100.0)).unwrap();
        assert_eq!(step.obs, Hint::Lower);
        assert_eq!(step.reward, 0.0);
        assert!(!step.is_done());

        let step = env.step(&GuessAct(number + 100.0)).unwrap();
        assert_eq!(step.obs, Hint::Higher);
        assert_eq!(step.info.get_scalar("guesses").unwrap(), 2.0);
        assert_eq!(step.info.get_scalar("number").unwrap(), number);
    }

    #[test]
    fn test_close_guess_wins() {
        let mut env = env();
        let number = env.number;
        // within 1% of range = 1000
        let step = env.step(&GuessAct(number + 5.0)).unwrap();
        assert_eq!(step.obs, Hint::Higher);
        assert_eq!(step.reward, 1.0);
        assert!(step.is_done());
    }

    #[test]
    fn test_gives_up_after_max_guesses() {
        let config = GuessingGameConfig::default().max_guesses(3);
        let mut env = GuessingGame::build(&config, Some(3)).unwrap();
        env.reset().unwrap();
        let far = if env.number > 0.0 { -2000.0 } else { 2000.0 };
        assert!(!env.step(&GuessAct(far)).unwrap().is_done());
        assert!(!env.step(&GuessAct(far)).unwrap().is_done());
        let step = env.step(&GuessAct(far)).unwrap();
        assert!(step.is_done());
        assert_eq!(step.reward, 0.0);
    }

    #[test]
    fn test_invalid_guesses() {
        let mut env = env();
        for guess in [f32::NAN, 20000.0, -10000.5] {
            let err = env.step(&GuessAct(guess)).unwrap_err();
            assert!(matches!(
                err.downcast_ref::<GymError>(),
                Some(GymError::InvalidAction(_))
            ));
        }
        assert!(GuessAct::from(Vec::<f32>::new()).0.is_nan());
    }

    #[test]
    fn test_invalid_config() {
        assert!(GuessingGame::build(&GuessingGameConfig::default().range(0.0), None).is_err());
        assert!(GuessingGame::build(&GuessingGameConfig::default().bounds(10.0), None).is_err());
        assert!(GuessingGame::build(&GuessingGameConfig::default().max_guesses(0), None).is_err());
    }
}
