//! This module is used for tests.
use crate::{
    episode::EpisodeTracker,
    error::GymError,
    record::{Record, RecordValue},
    render::{Metadata, RenderMode, Rendered},
    seeding::np_random,
    space::{BoxSpace, Discrete, Space},
    Env, Step,
};
use anyhow::Result;
use fastrand::Rng;

/// Dummy observation: a noise value in `[0, 1)`.
#[derive(Clone, Debug, PartialEq)]
pub struct DummyObs(pub f32);

impl crate::Obs for DummyObs {}

/// Dummy action.
#[derive(Clone, Debug)]
pub struct DummyAct(pub usize);

impl crate::Act for DummyAct {}

impl From<usize> for DummyAct {
    fn from(a: usize) -> Self {
        Self(a)
    }
}

/// Dummy env rewarding 1.0 per step, ending after `config` steps.
pub struct DummyEnv {
    episode_len: usize,
    rng: Rng,
    tracker: EpisodeTracker,
    action_space: Discrete,
    observation_space: BoxSpace,
    pub n_closed: usize,
}

impl Env for DummyEnv {
    type Config = usize;
    type Obs = DummyObs;
    type Act = DummyAct;
    type ActionSpace = Discrete;
    type ObservationSpace = BoxSpace;

    const METADATA: Metadata = Metadata {
        render_modes: &[RenderMode::Ansi],
    };

    fn build(config: &Self::Config, seed: Option<u64>) -> Result<Self> {
        let (rng, _) = np_random(seed);
        Ok(Self {
            episode_len: *config,
            rng,
            tracker: EpisodeTracker::new(),
            action_space: Discrete::new(2),
            observation_space: BoxSpace::new(vec![0.0], vec![1.0]),
            n_closed: 0,
        })
    }

    fn seed(&mut self, seed: Option<u64>) -> u64 {
        let (rng, seed) = np_random(seed);
        self.rng = rng;
        seed
    }

    fn reset(&mut self) -> Result<DummyObs> {
        self.tracker.begin()?;
        Ok(DummyObs(self.rng.f32()))
    }

    fn step(&mut self, act: &DummyAct) -> Result<Step<Self>> {
        self.tracker.ensure_running()?;
        if !self.action_space.contains(&act.0) {
            return Err(GymError::InvalidAction(format!("{:?}", act)).into());
        }
        let is_done = self.tracker.steps() + 1 >= self.episode_len;
        self.tracker.advance(1.0, is_done);
        let obs = DummyObs(self.rng.f32());
        let info = Record::from_slice(&[("noise", RecordValue::Scalar(obs.0))]);
        Ok(Step::new(obs, act.clone(), 1.0, is_done, info))
    }

    fn render(&mut self, mode: RenderMode) -> Result<Rendered> {
        self.tracker.ensure_open()?;
        match mode {
            RenderMode::Ansi => Ok(Rendered::Ansi(format!("step {}", self.tracker.steps()))),
            mode => Err(GymError::UnsupportedRenderMode(mode.to_string()).into()),
        }
    }

    fn close(&mut self) -> Result<()> {
        if self.tracker.close() {
            self.n_closed += 1;
        }
        Ok(())
    }

    fn action_space(&self) -> &Discrete {
        &self.action_space
    }

    fn observation_space(&self) -> &BoxSpace {
        &self.observation_space
    }
}
