//! A grid world where the agent walks to a goal.
mod act;
mod config;
mod obs;
use crate::viewer::Viewer;
use anyhow::Result;
pub use act::GridAct;
pub use config::GridWorldConfig;
use fastrand::Rng;
use gym_game_core::{
    episode::{EpisodeStatus, EpisodeTracker},
    error::GymError,
    record::{Record, RecordValue},
    render::{Frame, Metadata, RenderMode, Rendered},
    seeding::np_random,
    space::{Discrete, MultiDiscrete, Space},
    Env, Step,
};
use image::{Rgb, RgbImage};
use log::{debug, info, trace, warn};
pub use obs::GridObs;

const EMPTY_COLOR: Rgb<u8> = Rgb([230, 230, 230]);
const LINE_COLOR: Rgb<u8> = Rgb([190, 190, 190]);
const AGENT_COLOR: Rgb<u8> = Rgb([66, 135, 245]);
const GOAL_COLOR: Rgb<u8> = Rgb([60, 179, 113]);

/// A `width` x `height` grid with an agent and a goal.
///
/// * Observation: [`GridObs`], in `MultiDiscrete([height, width, height, width])`.
/// * Action: [`GridAct`], in `Discrete(4)`. Moves against the border leave the agent in place.
/// * Reward: `goal_reward` when the agent reaches the goal, which ends the episode,
///   `step_reward` otherwise.
/// * Info: `"steps"` in the episode and `"distance"` from the agent to the goal.
///
/// Supports the `human`, `rgb_array` and `ansi` render modes.
pub struct GridWorld {
    config: GridWorldConfig,
    rng: Rng,
    tracker: EpisodeTracker,
    state: GridObs,
    viewer: Option<Viewer>,
    action_space: Discrete,
    observation_space: MultiDiscrete,
}

impl GridWorld {
    fn random_cell(&self) -> [usize; 2] {
        [
            self.rng.usize(..self.config.height),
            self.rng.usize(..self.config.width),
        ]
    }

    fn ensure_renderable(&self) -> Result<(), GymError> {
        self.tracker.ensure_open()?;
        match self.tracker.status() {
            EpisodeStatus::Pending => Err(GymError::EpisodeNotStarted),
            _ => Ok(()),
        }
    }

    fn moved(&self, act: &GridAct) -> [usize; 2] {
        let [row, col] = self.state.agent;
        match *act {
            GridAct::UP => [row.saturating_sub(1), col],
            GridAct::RIGHT => [row, (col + 1).min(self.config.width - 1)],
            GridAct::DOWN => [(row + 1).min(self.config.height - 1), col],
            _ => [row, col.saturating_sub(1)],
        }
    }

    fn render_ansi(&self) -> String {
        (0..self.config.height)
            .map(|row| {
                (0..self.config.width)
                    .map(|col| {
                        let cell = [row, col];
                        if cell == self.state.agent {
                            "\x1b[7mA\x1b[0m"
                        } else if cell == self.state.goal {
                            "G"
                        } else {
                            "."
                        }
                    })
                    .collect::<String>()
            })
            .collect::<Vec<_>>()
            .join("\n")
    }

    fn render_rgb_array(&self) -> Result<Frame> {
        let cs = self.config.cell_size;
        let (w, h) = self.config.frame_size().ok_or_else(|| {
            GymError::InvalidConfig("frame size overflows u32".to_string())
        })?;
        let img = RgbImage::from_fn(w, h, |x, y| {
            let cell = [(y / cs) as usize, (x / cs) as usize];
            if cell == self.state.agent {
                AGENT_COLOR
            } else if cell == self.state.goal {
                GOAL_COLOR
            } else if cs > 2 && (x % cs == 0 || y % cs == 0) {
                LINE_COLOR
            } else {
                EMPTY_COLOR
            }
        });
        let frame = Frame::from_shape_vec((h as usize, w as usize, 3), img.into_raw())?;
        Ok(frame)
    }

    fn render_human(&mut self) -> Result<()> {
        if self.viewer.is_none() {
            self.viewer = Some(Viewer::open(self.config.human_output.as_deref())?);
        }
        let frame = self.render_ansi();
        if let Some(viewer) = self.viewer.as_mut() {
            viewer.show(&frame)?;
        }
        Ok(())
    }
}

impl Env for GridWorld {
    type Config = GridWorldConfig;
    type Obs = GridObs;
    type Act = GridAct;
    type ActionSpace = Discrete;
    type ObservationSpace = MultiDiscrete;

    const METADATA: Metadata = Metadata {
        render_modes: &[RenderMode::Human, RenderMode::RgbArray, RenderMode::Ansi],
    };

    fn build(config: &Self::Config, seed: Option<u64>) -> Result<Self> {
        config.validate()?;
        let (rng, seed) = np_random(seed);
        let (w, h) = (config.width, config.height);
        info!("Build GridWorld of {}x{} cells, seed = {}", w, h, seed);

        Ok(Self {
            config: config.clone(),
            rng,
            tracker: EpisodeTracker::new(),
            state: GridObs::default(),
            viewer: None,
            action_space: Discrete::new(4),
            observation_space: MultiDiscrete::new(vec![h, w, h, w]),
        })
    }

    fn seed(&mut self, seed: Option<u64>) -> u64 {
        let (rng, seed) = np_random(seed);
        self.rng = rng;
        seed
    }

    fn reset(&mut self) -> Result<GridObs> {
        self.tracker.begin()?;
        let goal = self.random_cell();
        let mut agent = self.random_cell();
        while agent == goal {
            agent = self.random_cell();
        }
        self.state = GridObs { agent, goal };
        trace!("GridWorld::reset(): {:?}", self.state);
        Ok(self.state)
    }

    fn step(&mut self, act: &GridAct) -> Result<Step<Self>> {
        self.tracker.ensure_running()?;
        if !self.action_space.contains(&act.0) {
            return Err(GymError::InvalidAction(format!(
                "{} is not in Discrete({})",
                act.0, self.action_space.n
            ))
            .into());
        }

        self.state.agent = self.moved(act);
        let is_done = self.state.agent == self.state.goal;
        let reward = if is_done {
            self.config.goal_reward
        } else {
            self.config.step_reward
        };
        self.tracker.advance(reward, is_done);
        trace!("GridWorld::step({:?}): {:?}", act, self.state);

        let info = Record::from_slice(&[
            ("steps", RecordValue::Scalar(self.tracker.steps() as f32)),
            ("distance", RecordValue::Scalar(self.state.distance() as f32)),
        ]);
        Ok(Step::new(self.state, *act, reward, is_done, info))
    }

    fn render(&mut self, mode: RenderMode) -> Result<Rendered> {
        self.ensure_renderable()?;
        debug!("GridWorld::render({})", mode);
        match mode {
            RenderMode::Human => {
                self.render_human()?;
                Ok(Rendered::None)
            }
            RenderMode::RgbArray => Ok(Rendered::RgbArray(self.render_rgb_array()?)),
            RenderMode::Ansi => Ok(Rendered::Ansi(self.render_ansi())),
        }
    }

    fn close(&mut self) -> Result<()> {
        if self.tracker.close() {
            debug!("GridWorld::close()");
        }
        if let Some(viewer) = self.viewer.take() {
            viewer.close()?;
        }
        Ok(())
    }

    fn action_space(&self) -> &Discrete {
        &self.action_space
    }

    fn observation_space(&self) -> &MultiDiscrete {
        &self.observation_space
    }
}

impl Drop for GridWorld {
    fn drop(&mut self) {
        if let Err(e) = self.close() {
            warn!("Failed to close GridWorld: {}", e);
        }
    }
}
